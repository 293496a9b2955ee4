use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use codespan_reporting::diagnostic::Diagnostic;
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use darija::error::ErrorCollector;
use darija::lexer::{reserved, Lexer, LexerOptions, Token};

#[derive(Parser)]
#[command(name = "darija")]
#[command(author, version, about = "The Darija language tokenizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// One token per line: kind, value, line, position
    #[value(name = "text")]
    Text,
    /// A JSON array of tokens
    #[value(name = "json")]
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tokens of a source file
    Tokens {
        /// The source file to tokenize ("-" reads stdin)
        input: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Line number of the first line of input
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..=usize::MAX as u64))]
        start_line: u64,

        /// Stop at the first lexical error and exit with failure
        #[arg(long)]
        strict: bool,
    },

    /// Report every lexical error in a source file
    Check {
        /// The source file to check ("-" reads stdin)
        input: PathBuf,
    },

    /// List the reserved words
    Keywords,
}

fn main() -> Result<()> {
    // Initialize logger before parsing CLI args
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let result = match cli.command {
        Commands::Tokens {
            input,
            format,
            start_line,
            strict,
        } => {
            let mut options = LexerOptions::default().start_line(start_line as usize);
            if strict {
                options = options.strict();
            }
            tokens(input, format, options)
        }
        Commands::Check { input } => check(input),
        Commands::Keywords => keywords(),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

/// A loaded source file and its diagnostic registry
struct SourceState {
    source: String,
    files: SimpleFiles<String, String>,
    file_id: usize,
}

impl SourceState {
    fn new(input: PathBuf) -> Result<Self> {
        let (name, source) = if input.as_os_str() == "-" {
            let source = io::read_to_string(io::stdin()).context("Failed to read stdin")?;
            ("<stdin>".to_string(), source)
        } else {
            let source = fs::read_to_string(&input)
                .with_context(|| format!("Failed to read source file: {:?}", input))?;
            (input.display().to_string(), source)
        };

        let mut files = SimpleFiles::new();
        let file_id = files.add(name, source.clone());

        Ok(Self {
            source,
            files,
            file_id,
        })
    }

    fn report_error(&self, diagnostic: &Diagnostic<usize>) -> Result<()> {
        let writer = StandardStream::stderr(ColorChoice::Auto);
        let config = codespan_reporting::term::Config::default();
        codespan_reporting::term::emit(&mut writer.lock(), &config, &self.files, diagnostic)?;
        Ok(())
    }

    fn report_all(&self, collector: &ErrorCollector) -> Result<()> {
        for diagnostic in collector.diagnostics() {
            self.report_error(&diagnostic)?;
        }
        Ok(())
    }
}

fn tokens(input: PathBuf, format: OutputFormat, options: LexerOptions) -> Result<()> {
    log::info!("Tokenizing {:?}", input);

    let state = SourceState::new(input)?;
    let mut collector = ErrorCollector::new(state.file_id);
    let (tokens, halted) = {
        let mut lexer = Lexer::with_sink(&state.source, options, &mut collector);
        let tokens: Vec<Token> = lexer.by_ref().collect();
        (tokens, lexer.halt_error().is_some())
    };
    log::debug!("Produced {} tokens", tokens.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => {
            for token in &tokens {
                writeln!(out, "{}", token)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &tokens)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    state.report_all(&collector)?;
    if halted {
        anyhow::bail!("Lexical analysis failed");
    }

    Ok(())
}

fn check(input: PathBuf) -> Result<()> {
    log::info!("Checking {:?}", input);

    let state = SourceState::new(input)?;
    let mut collector = ErrorCollector::new(state.file_id);

    log::debug!("Starting lexical analysis");
    let count = Lexer::with_sink(&state.source, LexerOptions::default(), &mut collector).count();
    log::debug!("Produced {} tokens", count);

    if collector.has_errors() {
        state.report_all(&collector)?;
        anyhow::bail!(
            "Lexical analysis failed with {} error(s)",
            collector.error_count()
        );
    }

    println!("{}: No lexical errors found", "success".green().bold());
    Ok(())
}

fn keywords() -> Result<()> {
    println!("{}", "=== Reserved words ===".blue().bold());
    for (word, kind) in reserved::words() {
        println!("{:<12} {}", word, kind);
    }
    Ok(())
}
