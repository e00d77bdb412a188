use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Args, Parser, Subcommand};
use env_logger::Env;

use sdic::{cardinality, rules, write_candidates, ChunkSequence};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Password candidate generator that combines words from a dictionary divided in chunks",
    long_about = None
)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (-q, -qq)
    #[arg(short = 'q', long, global = true, action = ArgAction::Count)]
    quiet: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every candidate combination in order
    Generate(GenerateArgs),
    /// Generate rules for hashcat
    Rules(RulesArgs),
    /// Compute the number of possible candidates
    Size(SizeArgs),
}

#[derive(Args, Debug)]
struct DictArgs {
    /// Dictionary file
    #[arg(short, long, value_name = "PATH")]
    dict: PathBuf,

    /// Chunk separator line
    #[arg(short, long, value_name = "LINE", default_value = "<---Chunk--->")]
    separator: String,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    dict: DictArgs,
}

#[derive(Args, Debug)]
struct RulesArgs {
    #[command(flatten)]
    dict: DictArgs,

    /// Output base path for the .rule and .dict files
    #[arg(short, long, value_name = "PATH", default_value = "./gen_rules")]
    output: PathBuf,

    /// Number of trailing chunks encoded as rules
    #[arg(long, value_name = "N", default_value_t = 2)]
    depth: usize,
}

#[derive(Args, Debug)]
struct SizeArgs {
    #[command(flatten)]
    dict: DictArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::Rules(args) => run_rules(args),
        Commands::Size(args) => run_size(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8, quiet: u8) {
    let level = match i16::from(verbose) - i16::from(quiet) {
        i16::MIN..=-1 => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}

fn run_generate(args: &GenerateArgs) -> sdic::Result<()> {
    let sequence = ChunkSequence::from_path(&args.dict.dict, &args.dict.separator)?;
    write_candidates(&sequence, BufWriter::new(io::stdout().lock()))
}

fn run_rules(args: &RulesArgs) -> sdic::Result<()> {
    let sequence = ChunkSequence::from_path(&args.dict.dict, &args.dict.separator)?;
    rules::generate(&sequence, &args.dict.separator, args.depth, &args.output)
}

fn run_size(args: &SizeArgs) -> sdic::Result<()> {
    let sequence = ChunkSequence::from_path(&args.dict.dict, &args.dict.separator)?;
    println!("{}", cardinality(&sequence));
    Ok(())
}
