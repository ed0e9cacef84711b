use std::fs;

use clap::Parser;
use sumexpr::{
    ExpressionProcessor, calc, describe,
    error::CalcError,
    interpreter::{
        lexer::{TokenListing, lex_with},
        parser::core::ParenMatching,
    },
};

/// sumexpr evaluates additive integer expressions such as `(13+4)-(12+1)`.
///
/// Without variables or `--soft` every expression is parsed into a tree,
/// which supports parentheses. With variables or `--soft` the flat processor
/// is used instead.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells sumexpr to read expressions from a file, one per line.
    #[arg(short, long)]
    file: bool,

    /// Defines a single-letter variable, e.g. `-v x=5`. May be repeated.
    #[arg(short = 'v', long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(char, i64)>,

    /// Prints 0 instead of an error when an expression cannot be evaluated.
    #[arg(short, long)]
    soft: bool,

    /// Prints the tokens of each expression before its value.
    #[arg(short, long)]
    tokens: bool,

    /// Closes each parenthesis at the first `)` that follows it.
    #[arg(long, conflicts_with_all = ["vars", "soft"])]
    first_close: bool,

    contents: String,
}

fn parse_binding(binding: &str) -> Result<(char, i64), String> {
    let (name, value) = binding.split_once('=')
                               .ok_or_else(|| format!("expected NAME=VALUE, found '{binding}'"))?;
    let mut letters = name.trim().chars();
    let name = match (letters.next(), letters.next()) {
        (Some(letter), None) if !letter.is_ascii_digit() => letter,
        _ => return Err(format!("'{name}' is not a single-letter variable name")),
    };
    let value = value.trim()
                     .parse()
                     .map_err(|e| format!("invalid value for '{name}': {e}"))?;
    Ok((name, value))
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    let processor = ExpressionProcessor::with_variables(args.vars.iter().copied().collect());
    let matching = if args.first_close {
        ParenMatching::FirstClose
    } else {
        ParenMatching::Balanced
    };

    let mut failed = false;
    for source in script.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if let Err(e) = run(&args, &processor, matching, source) {
            eprintln!("{e}");
            eprintln!("  {source}");
            eprintln!("  {:>width$}", "^", width = e.position() + 1);
            failed = true;
        }
    }

    if failed {
        std::process::exit(1);
    }
}

fn run(args: &Args,
       processor: &ExpressionProcessor,
       matching: ParenMatching,
       source: &str)
       -> Result<(), CalcError> {
    if !args.soft && args.vars.is_empty() {
        if args.tokens {
            println!("{}", describe(source, matching)?);
        } else {
            println!("{}", calc(source, matching)?);
        }
        return Ok(());
    }

    if args.tokens && let Ok(tokens) = lex_with(source, &processor.variables) {
        println!("{}", TokenListing(&tokens));
    }

    let value = if args.soft {
        processor.calculate(source)
    } else {
        processor.try_calculate(source)?
    };
    if args.tokens {
        println!("{source} = {value}");
    } else {
        println!("{value}");
    }
    Ok(())
}
