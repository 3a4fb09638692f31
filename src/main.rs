use std::{fs, process::ExitCode};

use clap::Parser;
use formula::{ast::Symbol, parse};

/// formula parses a one-line typed-symbol formula and prints its tree, the
/// symbols it writes and the symbols it reads.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells formula to read the formula from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Fold constant subexpressions before printing.
    #[arg(short, long)]
    simplify: bool,

    /// Reject statements that are not plain `=` assignments.
    #[arg(short = 'a', long)]
    require_assignment: bool,

    contents: String,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let formula = match parse(source.trim_end()) {
        Ok(formula) => formula,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    if args.require_assignment
       && let Err(e) = formula.require_assignment()
    {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let formula = if args.simplify { formula.simplify() } else { formula };

    println!("{formula}");
    println!("outputs: {}", join(&formula.outputs()));
    println!("inputs:  {}", join(&formula.inputs()));

    ExitCode::SUCCESS
}

fn join(symbols: &[&Symbol]) -> String {
    symbols.iter()
           .map(ToString::to_string)
           .collect::<Vec<_>>()
           .join(", ")
}
