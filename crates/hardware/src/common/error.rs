//! Simulator error definitions.
//!
//! The core itself never fails: memory not-ready is an operational signal
//! handled by stalling, and unrecognized opcodes decode to inert no-ops.
//! Errors exist only at the edges, where the loader and driver touch the
//! host filesystem and user input.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors reported by the loader and simulation driver.
#[derive(Debug)]
pub enum SimError {
    /// A host I/O operation on the given path failed.
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A line of a hex word listing could not be parsed.
    ImageParse {
        /// Path of the listing.
        path: PathBuf,
        /// 1-based line number of the offending token.
        line: usize,
        /// The token that failed to parse.
        token: String,
    },

    /// The image does not fit in the configured memory.
    ImageTooLarge {
        /// Size of the image in bytes.
        image_bytes: usize,
        /// Capacity of the memory in bytes.
        memory_bytes: usize,
    },

    /// The configuration file could not be deserialized.
    Config {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying deserialization error.
        source: serde_json::Error,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
            SimError::ImageParse { path, line, token } => {
                write!(
                    f,
                    "{}:{}: invalid hex word '{}'",
                    path.display(),
                    line,
                    token
                )
            }
            SimError::ImageTooLarge {
                image_bytes,
                memory_bytes,
            } => {
                write!(
                    f,
                    "image of {} bytes does not fit in {} bytes of memory",
                    image_bytes, memory_bytes
                )
            }
            SimError::Config { path, source } => {
                write!(f, "bad configuration {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Io { source, .. } => Some(source),
            SimError::Config { source, .. } => Some(source),
            _ => None,
        }
    }
}
