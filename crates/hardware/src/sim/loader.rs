//! Program image loading.
//!
//! Two image formats are accepted:
//! 1. **Raw binary:** little-endian machine code copied into memory as-is.
//! 2. **Hex listing:** a text file with one hexadecimal instruction word per
//!    line (an optional `0x` prefix and `#` comments are allowed), the
//!    format assemblers in teaching toolchains commonly emit.
//!
//! Files ending in `.hex` or `.txt` are parsed as listings; anything else is
//! treated as raw binary.

use std::fs;
use std::path::Path;

use crate::common::SimError;
use crate::soc::memory::Memory;

/// Loads an image file into memory at `base`.
///
/// # Returns
///
/// The number of bytes placed in memory.
pub fn load_image(memory: &mut Memory, path: &Path, base: u32) -> Result<usize, SimError> {
    let is_listing = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("hex") | Some("txt")
    );
    if is_listing {
        let words = parse_hex_listing(path)?;
        load_check(memory, base, words.len() * 4)?;
        memory.load_words(base, &words);
        Ok(words.len() * 4)
    } else {
        let bytes = fs::read(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        load_check(memory, base, bytes.len())?;
        memory.load_bytes(base, &bytes);
        Ok(bytes.len())
    }
}

/// Parses a hex word listing.
fn parse_hex_listing(path: &Path) -> Result<Vec<u32>, SimError> {
    let text = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut words = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let token = line.split('#').next().unwrap_or("").trim();
        if token.is_empty() {
            continue;
        }
        let digits = token.trim_start_matches("0x").trim_start_matches("0X");
        let word = u32::from_str_radix(digits, 16).map_err(|_| SimError::ImageParse {
            path: path.to_path_buf(),
            line: i + 1,
            token: token.to_string(),
        })?;
        words.push(word);
    }
    Ok(words)
}

/// Rejects images that do not fit below the end of memory.
fn load_check(memory: &Memory, base: u32, image_bytes: usize) -> Result<(), SimError> {
    let end = base as usize + image_bytes;
    if end > memory.size_bytes() {
        return Err(SimError::ImageTooLarge {
            image_bytes,
            memory_bytes: memory.size_bytes(),
        });
    }
    Ok(())
}
