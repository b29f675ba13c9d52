//! Byte ALU command-line front end.
//!
//! This binary exposes the library operations as subcommands. It performs:
//! 1. **Decode / transform:** Decode a 4-bit opcode or apply it to a single byte.
//! 2. **Datasets:** XOR two byte lists, count set bits, or measure Hamming distance.
//! 3. **Run:** Replay an opcode program against an accumulator, from arguments or a JSON config.

use std::io::{self, Write};
use std::path::PathBuf;
use std::{fs, process};

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use nibblealu_core::api;
use nibblealu_core::isa::{codebook, decode, decode::parse_bits};
use nibblealu_core::sim::Machine;
use nibblealu_core::units::alu::Alu;
use nibblealu_core::units::popcount;
use nibblealu_core::Config;

#[derive(Parser, Debug)]
#[command(
    name = "nibble",
    author,
    version,
    about = "4-bit opcode byte ALU",
    long_about = "Decode 4-bit opcodes, transform bytes, XOR datasets and count bits.\n\nBytes are given as decimal, 0x-prefixed hex or 0b-prefixed binary; lists are comma-separated.\n\nExamples:\n  nibble transform 5 1011 --operand2 3\n  nibble xor --a 0x0f,0xf0 --b 0xff,0xff\n  nibble weight 0xff,0x01\n  nibble run --initial 7 0001 1001 1101\n  nibble run --config run.json --trace"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). Overrides RUST_LOG.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a 4-bit opcode into its operation. Malformed codes decode to nop.
    Decode {
        /// Opcode, four binary digits (e.g. 1011).
        code: String,
    },

    /// Apply one opcode to a byte.
    Transform {
        /// Input byte.
        #[arg(value_parser = parse_byte)]
        value: u8,

        /// Opcode, four binary digits.
        code: String,

        /// Second operand for and/or/xor/xnor/add.
        #[arg(short = 'b', long, default_value = "0", value_parser = parse_byte)]
        operand2: u8,
    },

    /// XOR two equal-length byte lists.
    Xor {
        /// First byte list.
        #[arg(long, required = true, value_delimiter = ',', value_parser = parse_byte)]
        a: Vec<u8>,

        /// Second byte list.
        #[arg(long, required = true, value_delimiter = ',', value_parser = parse_byte)]
        b: Vec<u8>,
    },

    /// Count set bits in a byte list.
    Weight {
        /// Byte list.
        #[arg(value_delimiter = ',', value_parser = parse_byte)]
        bytes: Vec<u8>,
    },

    /// Count differing bits between two equal-length byte lists.
    Distance {
        /// First byte list.
        #[arg(long, required = true, value_delimiter = ',', value_parser = parse_byte)]
        a: Vec<u8>,

        /// Second byte list.
        #[arg(long, required = true, value_delimiter = ',', value_parser = parse_byte)]
        b: Vec<u8>,
    },

    /// Print the signed-value codebook.
    Codebook,

    /// Run an opcode program against an accumulator.
    Run {
        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print every executed step.
        #[arg(long)]
        trace: bool,

        /// Initial accumulator (overrides config).
        #[arg(long, value_parser = parse_byte)]
        initial: Option<u8>,

        /// Second operand (overrides config).
        #[arg(short = 'b', long, value_parser = parse_byte)]
        operand2: Option<u8>,

        /// Print the effective configuration as JSON and exit.
        #[arg(long)]
        dump_config: bool,

        /// Opcodes to run (overrides config). Defaults to the demo sequence.
        codes: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = dispatch(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

/// Installs the stderr log subscriber.
///
/// `-v` flags win over `RUST_LOG`; with neither, only warnings are shown.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Decode { code } => cmd_decode(&code),
        Commands::Transform {
            value,
            code,
            operand2,
        } => cmd_transform(value, &code, operand2),
        Commands::Xor { a, b } => cmd_xor(&a, &b)?,
        Commands::Weight { bytes } => cmd_weight(&bytes),
        Commands::Distance { a, b } => cmd_distance(&a, &b)?,
        Commands::Codebook => cmd_codebook(),
        Commands::Run {
            config,
            trace,
            initial,
            operand2,
            dump_config,
            codes,
        } => {
            let mut cfg = load_config(config)?;
            cfg.general.trace |= trace;
            if let Some(v) = initial {
                cfg.program.initial = v;
            }
            if let Some(v) = operand2 {
                cfg.program.operand2 = v;
            }
            if !codes.is_empty() {
                cfg.program.codes = codes;
            }
            if dump_config {
                println!("{}", cfg.to_json()?);
            } else {
                cmd_run(&cfg)?;
            }
        }
    }
    Ok(())
}

/// Parses a byte written as decimal, `0x` hex or `0b` binary.
fn parse_byte(s: &str) -> std::result::Result<u8, String> {
    let t = s.trim();
    let parsed = if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        u8::from_str_radix(hex, 16)
    } else if let Some(bin) = t.strip_prefix("0b").or_else(|| t.strip_prefix("0B")) {
        u8::from_str_radix(bin, 2)
    } else {
        t.parse::<u8>()
    };
    parsed.map_err(|e| format!("invalid byte {s:?}: {e}"))
}

fn hex_list(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("0x{b:02x}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn cmd_decode(code: &str) {
    let op = decode(code);
    match parse_bits(code) {
        Some(v) => println!("{code} ({v:>2}) -> {op}"),
        None => println!("{code:?} is malformed -> {op}"),
    }
}

fn cmd_transform(value: u8, code: &str, operand2: u8) {
    println!("{}", describe_transform(value, code, operand2));
}

/// Decodes `code` once and renders the operation alongside its result.
fn describe_transform(value: u8, code: &str, operand2: u8) -> String {
    let op = decode(code);
    let result = Alu::execute(op, value, operand2);
    debug!(%op, value, operand2, result, "transform");
    format!("{op} {value:#04x} -> {result:#04x} ({result}, {result:#010b})")
}

fn cmd_xor(a: &[u8], b: &[u8]) -> Result<()> {
    let out = api::xor_datasets(Some(a), Some(b), a.len()).context("xor failed")?;
    println!("{}", hex_list(&out));
    api::free_core_memory(Some(out));
    Ok(())
}

fn cmd_weight(bytes: &[u8]) {
    println!("{}", api::calculate_hamming_weight(Some(bytes), bytes.len()));
}

fn cmd_distance(a: &[u8], b: &[u8]) -> Result<()> {
    let d = popcount::hamming_distance(a, b).context("distance failed")?;
    println!("{d}");
    Ok(())
}

fn cmd_codebook() {
    let mut entries: Vec<_> = codebook::entries().collect();
    entries.sort_by_key(|&(v, _)| v);
    for (value, opcode) in entries {
        println!("{value:>+3}  {opcode}  {}", opcode.op());
    }
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = fs::read_to_string(&path)
        .with_context(|| format!("reading config {}", path.display()))?;
    Config::from_json(&text).with_context(|| format!("parsing config {}", path.display()))
}

/// Runs the configured program and prints the result, optional trace, and statistics.
fn cmd_run(cfg: &Config) -> Result<()> {
    let (mut machine, program) = Machine::from_config(cfg).context("building program")?;
    if program.is_empty() {
        bail!("program has no opcodes");
    }

    println!(
        "[*] Running {} opcodes  initial={:#04x}  operand2={:#04x}",
        program.len(),
        machine.acc(),
        machine.operand2()
    );
    let result = machine.run(&program);

    let mut out = io::stdout().lock();
    if let Some(steps) = machine.trace() {
        for s in steps {
            writeln!(
                out,
                "{:>4}  {}  {:<4}  {:#04x} -> {:#04x}",
                s.index, s.opcode, s.op, s.before, s.after
            )?;
        }
    }
    writeln!(out, "\n[*] Result {result:#04x} ({result})")?;
    machine.stats.write_report(&mut out)?;
    out.flush()?;
    Ok(())
}
