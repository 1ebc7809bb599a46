//! MIPS-I cycle-accurate simulator CLI.
//!
//! This binary loads a program image into memory, runs it on the selected
//! execution model, and reports the final register state and run statistics.
//!
//! Examples:
//!
//! ```text
//! mipsim run -f program.bin
//! mipsim run -f program.hex --mode single --cycles 2000 --trace
//! mipsim run -f program.bin --config sim.json --log-registers
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use mips_core::config::Config;
use mips_core::core::{Core, ExecMode};
use mips_core::sim::{loader, Runner};
use mips_core::soc::memory::Memory;

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "MIPS-I cycle-accurate simulator",
    long_about = "Run a MIPS-I machine-code image on a five-stage pipelined core or on the \
single-cycle reference model.\n\nImages ending in .hex/.txt are parsed as hex word listings; \
anything else is loaded as a raw little-endian binary."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program image.
    Run {
        /// Program image (raw binary, or .hex/.txt word listing).
        #[arg(short, long)]
        file: PathBuf,

        /// Execution model.
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Cycle budget (overrides the config).
        #[arg(long)]
        cycles: Option<u64>,

        /// Load address and initial PC (overrides the config).
        #[arg(long)]
        base: Option<u32>,

        /// Memory wait states (overrides the config).
        #[arg(long)]
        wait_states: Option<u32>,

        /// Emit per-stage trace lines to stderr.
        #[arg(long)]
        trace: bool,

        /// Emit the per-cycle register log to stdout.
        #[arg(long)]
        log_registers: bool,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// CLI spelling of the execution model.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    /// Single-cycle reference model.
    Single,
    /// Five-stage pipeline.
    Pipeline,
}

impl From<ModeArg> for ExecMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Single => ExecMode::SingleCycle,
            ModeArg::Pipeline => ExecMode::Pipelined,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            file,
            mode,
            cycles,
            base,
            wait_states,
            trace,
            log_registers,
            config,
        } => {
            let mut cfg = match config {
                Some(path) => Config::from_json_file(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => Config::default(),
            };

            if let Some(mode) = mode {
                cfg.pipeline.mode = mode.into();
            }
            if let Some(cycles) = cycles {
                cfg.general.max_cycles = cycles;
            }
            if let Some(base) = base {
                cfg.general.start_pc = base;
            }
            if let Some(ws) = wait_states {
                cfg.memory.wait_states = ws;
            }
            cfg.general.trace |= trace;
            cfg.general.log_registers |= log_registers;

            run(&cfg, &file)
        }
    }
}

fn run(cfg: &Config, image: &PathBuf) -> Result<()> {
    if cfg.general.start_pc % 4 != 0 {
        bail!("start PC {:#x} is not word-aligned", cfg.general.start_pc);
    }

    let mut memory = Memory::with_policy(cfg.memory.size_bytes, cfg.memory.grant_policy());
    let loaded = loader::load_image(&mut memory, image, cfg.general.start_pc)
        .with_context(|| format!("loading image {}", image.display()))?;

    eprintln!(
        "[*] {}: {} bytes at {:#010x}, {:?} mode, {} wait state(s)",
        image.display(),
        loaded,
        cfg.general.start_pc,
        cfg.pipeline.mode,
        cfg.memory.wait_states
    );

    let mut core = Core::new(memory);
    core.trace = cfg.general.trace;
    core.initialize(cfg.pipeline.mode);
    core.reset_to(cfg.general.start_pc);

    let mut runner = Runner::new(core, cfg);
    let outcome = runner.run();

    if outcome.quiesced {
        eprintln!(
            "[*] PC quiesced at {:#010x} after {} cycles",
            outcome.final_pc, outcome.cycles
        );
    } else {
        eprintln!(
            "[*] cycle budget exhausted after {} cycles (pc {:#010x})",
            outcome.cycles, outcome.final_pc
        );
    }

    runner.core.print_register_file();
    runner.core.stats.print();
    Ok(())
}
