//! Pagecalc CLI - formula page rendering and inspection tool

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pagecalc::prelude::*;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pcalc")]
#[command(
    author,
    version,
    about = "Formula page rendering and inspection tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a page with all formulas evaluated and output to stdout or file
    #[command(alias = "html")]
    Render {
        /// Input page file (html, htm, xhtml)
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Set an input value before rendering (repeatable)
        #[arg(short, long = "set", value_name = "ID=VALUE")]
        set: Vec<String>,
    },

    /// Show information about a page
    Info {
        /// Input page file
        input: PathBuf,
    },

    /// List all input fields on a page
    Inputs {
        /// Input page file
        input: PathBuf,
    },

    /// Bind a page, then apply id=value lines from stdin and print refreshed formulas
    Watch {
        /// Input page file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render { input, output, set } => render(&input, output.as_deref(), &set),
        Commands::Info { input } => show_info(&input),
        Commands::Inputs { input } => list_inputs(&input),
        Commands::Watch { input } => watch(&input),
    }
}

fn load(input: &Path) -> Result<Page> {
    Page::open(input).with_context(|| format!("Failed to open '{}'", input.display()))
}

/// Split an `id=value` assignment argument
fn parse_assignment(arg: &str) -> Result<(&str, &str)> {
    match arg.split_once('=') {
        Some((id, value)) if !id.trim().is_empty() => Ok((id.trim(), value)),
        _ => bail!("Invalid assignment '{}', expected id=value", arg),
    }
}

fn render(input: &Path, output: Option<&Path>, sets: &[String]) -> Result<()> {
    let mut page = load(input)?;

    let (binder, stats) = page.bind();
    eprintln!(
        "Bound {} of {} formulas ({} errors)",
        stats.bound, stats.formula_count, stats.errors
    );

    // Assignments go through the live-update path so only dependent
    // formulas are re-evaluated
    for arg in sets {
        let (id, value) = parse_assignment(arg)?;
        binder
            .set_value(&mut page, id, value)
            .with_context(|| format!("Failed to set input '{}'", id))?;
    }

    let markup = HtmlWriter::render(&page);

    if let Some(output_path) = output {
        std::fs::write(output_path, &markup)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        eprintln!("Wrote '{}'", output_path.display());
    } else {
        io::stdout()
            .write_all(markup.as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}

fn show_info(input: &Path) -> Result<()> {
    let mut page = load(input)?;
    let (_, stats) = page.bind();

    println!("File: {}", input.display());
    println!("Inputs: {}", page.input_count());
    println!("Formulas: {}", stats.formula_count);
    println!("  Bound: {}", stats.bound);
    println!("  Constants: {}", stats.constants);
    println!("  Errors: {}", stats.errors);

    Ok(())
}

fn list_inputs(input: &Path) -> Result<()> {
    let page = load(input)?;

    for field in page.inputs() {
        println!("{}\t{}", field.id(), field.value());
    }

    Ok(())
}

fn watch(input: &Path) -> Result<()> {
    let mut page = load(input)?;
    let (binder, stats) = page.bind();

    eprintln!(
        "Bound {} of {} formulas ({} errors). Enter id=value lines, Ctrl-D to quit.",
        stats.bound, stats.formula_count, stats.errors
    );
    print_formulas(&page);

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (id, value) = match parse_assignment(line) {
            Ok(pair) => pair,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match binder.set_value(&mut page, id, value) {
            Ok(refreshed) => {
                eprintln!("Refreshed {} formulas", refreshed);
                print_formulas(&page);
            }
            Err(e) => eprintln!("{}", e),
        }
    }

    Ok(())
}

fn print_formulas(page: &Page) {
    for (key, formula) in page.formulas() {
        let expression = formula.expression().unwrap_or("-");
        println!("#{}\t{}\t{}", key.index(), expression, formula.text());
    }
}
