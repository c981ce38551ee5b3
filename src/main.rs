//! validador - command-line front end
//!
//! Validates a source file and prints the diagnostics, one per line.
//! Exits with status 1 when the file has errors or cannot be read.

use clap::Parser;
use std::fs;
use std::path::PathBuf;

use validador::lexer::lex;

/// validador - checks programs written in the teaching language
#[derive(Parser, Debug)]
#[command(name = "validador")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input source file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Only run the lexer and print each line's tokens (for debugging)
    #[arg(long)]
    tokens: bool,

    /// Run the compile step after a successful validation
    #[arg(long)]
    compile: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let source = match fs::read_to_string(&args.input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading '{}': {}", args.input.display(), e);
            std::process::exit(1);
        }
    };

    if args.verbose {
        println!("Validating: {}", args.input.display());
        println!("Source length: {} bytes", source.len());
    }

    if args.tokens {
        print_tokens(&args, &source);
        return;
    }

    let report = validador::validate(&source);
    for line in report.render() {
        println!("{}", line);
    }

    if !report.is_success() {
        log::info!("{} error(s) found", report.errors().len());
        std::process::exit(1);
    }

    if args.compile {
        validador::compile(&source);
        log::info!("compile step finished (no code generation)");
    }
}

fn print_tokens(args: &Args, source: &str) {
    println!("Tokens for {}:", args.input.display());
    println!("{:-<60}", "");

    for (index, line) in source.split('\n').enumerate() {
        let tokens = lex(line);
        // Skip empty lines in output for readability unless verbose
        if tokens.is_empty() && !args.verbose {
            continue;
        }

        println!("line {}:", index + 1);
        for token in tokens {
            println!(
                "  {:4}..{:<4} {:16} {:?}",
                token.span.start,
                token.span.end,
                format!("{:?}", token.kind),
                token.text
            );
        }
    }
}
