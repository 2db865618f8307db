//! LS-8 virtual CPU CLI.
//!
//! This binary loads a textual `.ls8` program and runs it. It performs:
//! 1. **Run:** Parse, load at address 0, execute until `HLT`, `PRN` output on stdout.
//! 2. **Disassemble:** List the program as assembler text instead of running it.
//!
//! Exit codes: 0 on `HLT`, 1 on an execution fault, 2 if the program file cannot be
//! read, 3 if it does not parse, 4 for an invalid configuration.

use std::path::PathBuf;
use std::process::ExitCode;
use std::{fs, io};

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use ls8_core::common::{CpuError, ParseError};
use ls8_core::config::Config;
use ls8_core::isa::disasm;
use ls8_core::sim::loader;
use ls8_core::soc::WriterSink;
use ls8_core::Simulator;

const EXIT_FAULT: u8 = 1;
const EXIT_FILE: u8 = 2;
const EXIT_PARSE: u8 = 3;
const EXIT_CONFIG: u8 = 4;

const TRACE_DIRECTIVE: &str = "ls8_core=trace";

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 8-bit virtual CPU",
    long_about = "Run an .ls8 program: one 8-bit binary literal per line, `#` starts a comment.\n\nExamples:\n  ls8 programs/mult.ls8\n  ls8 --max-steps 10000 programs/call.ls8\n  ls8 --disassemble programs/stack.ls8"
)]
struct Cli {
    /// Program to run.
    file: PathBuf,

    /// JSON configuration file (memory size, initial SP, limits).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Abort after this many instructions.
    #[arg(long)]
    max_steps: Option<u64>,

    /// Log a TRACE line before every instruction.
    #[arg(long)]
    trace: bool,

    /// Print the program listing and exit.
    #[arg(short, long)]
    disassemble: bool,

    /// Print run statistics after HLT.
    #[arg(long)]
    stats: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.trace);

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("Error: {msg}");
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    let program = match loader::load_program_file(&cli.file) {
        Ok(program) => program,
        Err(e) if e.is_not_found() => {
            eprintln!("File not found: {}", cli.file.display());
            return ExitCode::from(EXIT_FILE);
        }
        Err(e @ ParseError::Io { .. }) => {
            eprintln!("Error: {e}");
            return ExitCode::from(EXIT_FILE);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(EXIT_PARSE);
        }
    };

    if cli.disassemble {
        for (addr, text) in disasm::disassemble_program(&program) {
            println!("{addr:02X}: {text}");
        }
        return ExitCode::SUCCESS;
    }

    cmd_run(&config, &program, cli.stats)
}

/// Loads the program and runs it to completion on stdout.
fn cmd_run(config: &Config, program: &[u8], stats: bool) -> ExitCode {
    let mut sim = match Simulator::new(config, WriterSink::stdout()) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    if let Err(e) = sim.load(program) {
        eprintln!("Error: {e}");
        return ExitCode::from(EXIT_FAULT);
    }

    match sim.run() {
        Ok(_) => {
            if stats {
                sim.cpu.stats.print();
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "run aborted");
            report_fault(&e);
            sim.cpu.dump_state();
            ExitCode::from(EXIT_FAULT)
        }
    }
}

fn report_fault(e: &CpuError) {
    if let CpuError::IllegalInstruction { pc, opcode } = e {
        eprintln!("Unrecognized instruction");
        eprintln!("  Program counter: {pc}");
        eprintln!("  Instruction:     {opcode} ({opcode:#010b})");
    } else {
        eprintln!("\n[!] FATAL: {e}");
    }
}

/// Reads the optional JSON config and applies command-line overrides.
fn build_config(cli: &Cli) -> Result<Config, String> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .map_err(|e| format!("could not read {}: {e}", path.display()))?;
            Config::from_json(&json).map_err(|e| e.to_string())?
        }
        None => Config::default(),
    };
    if cli.max_steps.is_some() {
        config.general.max_steps = cli.max_steps;
    }
    if cli.trace {
        config.general.trace_instructions = true;
    }
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

/// Installs the stderr subscriber on the `RUST_LOG` filter.
fn init_tracing(trace: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(env.as_deref(), trace))
        .with_writer(io::stderr)
        .without_time()
        .init();
}

/// Builds the log filter: `RUST_LOG` if set, `warn` otherwise. `--trace` always
/// adds the per-instruction directive on top.
fn env_filter(env: Option<&str>, trace: bool) -> EnvFilter {
    let base = env.unwrap_or("warn");
    if trace {
        EnvFilter::new(format!("{base},{TRACE_DIRECTIVE}"))
    } else {
        EnvFilter::new(base)
    }
}
