use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;

use pgenums::emit::{GoRenderer, Render, RustRenderer};
use pgenums::types::Strictness;

#[derive(Parser)]
#[command(name = "pgenums")]
#[command(version = "0.1.0")]
#[command(about = "Generate typed enum bindings from SQL CREATE TYPE ... AS ENUM declarations")]
struct Cli {
    /// Path to the input SQL schema file
    #[arg(short = 'i', long = "in", value_name = "FILE")]
    input: PathBuf,

    /// Path to the generated output file
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    output: PathBuf,

    /// Package name for the generated Go preamble (unused for Rust output)
    #[arg(short = 'p', long = "pkg", value_name = "NAME", default_value = "main")]
    package: String,

    /// Target language for the generated bindings
    #[arg(long, value_enum, default_value_t = Lang::Go)]
    lang: Lang,

    /// Require `--` for line comments and drop empty enum values
    #[arg(long)]
    strict: bool,

    /// Suppress the success summary
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Lang {
    Go,
    Rust,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let schema = fs::read_to_string(&cli.input)
        .with_context(|| format!("can not read input file {}", cli.input.display()))?;

    let renderer: Box<dyn Render> = match cli.lang {
        Lang::Go => Box::new(GoRenderer::new(&cli.package)),
        Lang::Rust => Box::new(RustRenderer::new()),
    };
    let strictness = if cli.strict {
        Strictness::Strict
    } else {
        Strictness::Lax
    };

    let generated = pgenums::generate(&schema, renderer.as_ref(), strictness)
        .context("rendering generated code failed")?;

    fs::write(&cli.output, &generated.code)
        .with_context(|| format!("can not write output file {}", cli.output.display()))?;

    if !cli.quiet {
        println!(
            "{} {} enum type{} -> {}",
            "pgenums:".green().bold(),
            generated.count,
            if generated.count == 1 { "" } else { "s" },
            cli.output.display()
        );
    }

    Ok(())
}
