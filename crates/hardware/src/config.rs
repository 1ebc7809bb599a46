//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** baseline constants (memory size, cycle budget, quiesce
//!    window).
//! 2. **Structures:** hierarchical config for general, memory, and pipeline
//!    settings.
//!
//! Configuration is supplied as JSON (`Config::from_json_file`) or via
//! `Config::default()` when the CLI is run without a config file.

use std::path::Path;

use serde::Deserialize;

use crate::common::SimError;
use crate::core::ExecMode;
use crate::soc::memory::GrantPolicy;

/// Default configuration constants.
mod defaults {
    /// Backing memory size (1 MiB).
    pub const MEMORY_BYTES: usize = 1024 * 1024;

    /// Memory wait states (0 = always ready).
    pub const WAIT_STATES: u32 = 0;

    /// Initial PC and image load address.
    pub const START_PC: u32 = 0;

    /// Cycle budget for a run.
    pub const MAX_CYCLES: u64 = 100_000;

    /// Consecutive cycles the committed PC must hold still before the
    /// runner treats the program as finished. Must exceed the pipeline
    /// depth plus the worst-case memory wait, or a run stops during fill.
    pub const QUIESCE_WINDOW: u64 = 32;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use mips_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.memory.size_bytes, 1024 * 1024);
/// assert!(!config.general.trace);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use mips_core::config::Config;
/// use mips_core::core::ExecMode;
///
/// let json = r#"{
///     "general": { "trace": true, "max_cycles": 500 },
///     "memory": { "size_bytes": 65536, "wait_states": 2 },
///     "pipeline": { "mode": "SingleCycle" }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert!(config.general.trace);
/// assert_eq!(config.memory.wait_states, 2);
/// assert_eq!(config.pipeline.mode, ExecMode::SingleCycle);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General run settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Backing memory settings.
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Execution model settings.
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Reads and deserializes a JSON configuration file.
    pub fn from_json_file(path: &Path) -> Result<Self, SimError> {
        let text = std::fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| SimError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// General run settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Emit per-stage trace lines to stderr.
    #[serde(default)]
    pub trace: bool,

    /// Emit the per-cycle register log to stdout.
    #[serde(default)]
    pub log_registers: bool,

    /// Initial PC and image load address.
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u32,

    /// Cycle budget for a run.
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,

    /// Stop early once the committed PC has been stationary this many
    /// cycles; 0 disables the check.
    #[serde(default = "GeneralConfig::default_quiesce_window")]
    pub quiesce_window: u64,
}

impl GeneralConfig {
    fn default_start_pc() -> u32 {
        defaults::START_PC
    }

    fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }

    fn default_quiesce_window() -> u64 {
        defaults::QUIESCE_WINDOW
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace: false,
            log_registers: false,
            start_pc: defaults::START_PC,
            max_cycles: defaults::MAX_CYCLES,
            quiesce_window: defaults::QUIESCE_WINDOW,
        }
    }
}

/// Backing memory settings.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Memory size in bytes.
    #[serde(default = "MemoryConfig::default_size")]
    pub size_bytes: usize,

    /// Denials per request before the grant (0 = always ready).
    #[serde(default = "MemoryConfig::default_wait_states")]
    pub wait_states: u32,
}

impl MemoryConfig {
    fn default_size() -> usize {
        defaults::MEMORY_BYTES
    }

    fn default_wait_states() -> u32 {
        defaults::WAIT_STATES
    }

    /// The grant policy these settings describe.
    pub fn grant_policy(&self) -> GrantPolicy {
        if self.wait_states == 0 {
            GrantPolicy::Ideal
        } else {
            GrantPolicy::FixedWait {
                wait_states: self.wait_states,
            }
        }
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size_bytes: defaults::MEMORY_BYTES,
            wait_states: defaults::WAIT_STATES,
        }
    }
}

/// Execution model settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PipelineConfig {
    /// Which execution model drives `advance()`.
    #[serde(default)]
    pub mode: ExecMode,
}
