//! cs2js - CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cs2js::frontend::{lexer, parser};
use cs2js::util::logger::{self, LogLevel};
use cs2js::{translate, translate_file, NAME, VERSION};
use std::fs;
use std::path::PathBuf;

/// A demonstration C# to JavaScript transpiler
#[derive(Parser, Debug)]
#[command(name = "cs2js")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a C# source file to JavaScript
    Build {
        /// Source file to translate
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Translate C# code from the command line
    Eval {
        /// Code to translate
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Dump the token stream of a source file
    Tokens {
        /// Source file to tokenize
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Dump the parse tree of a source file
    Ast {
        /// Source file to parse
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print version information
    Version,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        logger::init_with_level(LogLevel::Debug);
    } else {
        logger::init();
    }

    match args.command {
        Commands::Build { file, output } => {
            let generated =
                translate_file(&file).with_context(|| format!("Failed to build: {}", file.display()))?;
            match output {
                Some(output) => {
                    fs::write(&output, generated.code)
                        .with_context(|| format!("Failed to write: {}", output.display()))?;
                    if let Some(entry) = generated.entry_point {
                        eprintln!("entry point: {entry}");
                    }
                }
                None => println!("{}", generated.code),
            }
        }
        Commands::Eval { code } => {
            let generated = translate(&code).context("Failed to translate code")?;
            println!("{}", generated.code);
        }
        Commands::Tokens { file } => {
            let source = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read file: {}", file.display()))?;
            let tokens = lexer::tokenize(&source)
                .with_context(|| format!("Failed to tokenize: {}", file.display()))?;
            for (index, token) in tokens.iter().enumerate() {
                println!("{index:4}  {:?} '{}'", token.kind, token.text);
            }
        }
        Commands::Ast { file } => {
            let source = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read file: {}", file.display()))?;
            let tokens = lexer::tokenize(&source)
                .with_context(|| format!("Failed to tokenize: {}", file.display()))?;
            let program = parser::parse(&tokens)
                .with_context(|| format!("Failed to parse: {}", file.display()))?;
            print!("{}", program.tree());
        }
        Commands::Version => {
            println!("{NAME} {VERSION}");
        }
    }

    Ok(())
}
