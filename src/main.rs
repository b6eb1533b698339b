//! xmldocmd — generate cross-linked Markdown from an XML documentation file
//! and a type metadata artifact.
//!
//! One-shot batch run: load both inputs, build the documentation index,
//! render, write the output document.

mod descriptor;
mod error;
mod index;
mod metadata;
mod model;
mod render;
mod signature;
mod transform;
mod xml;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{self, Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "xmldocmd",
    about = "Generate cross-linked Markdown from XML documentation and type metadata"
)]
struct Cli {
    /// XML documentation file
    documentation: PathBuf,

    /// Type metadata artifact (JSON)
    metadata: PathBuf,

    /// Output Markdown file
    output: PathBuf,
}

/// Accepted help spellings, including the slash forms clap cannot parse.
const HELP_FLAGS: &[&str] = &["--help", "-h", "/h", "-?", "/?", "--version"];

fn main() -> Result<()> {
    if std::env::args().skip(1).any(|a| HELP_FLAGS.contains(&a.as_str())) {
        print_usage();
        return Ok(());
    }

    let cli = Cli::try_parse().unwrap_or_else(|err| {
        // Wrong argument count (or shape): usage error, exit 1, nothing written.
        eprint!("{}", err.render());
        std::process::exit(1);
    });

    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let doc_path = absolute(&cli.documentation)?;
    let meta_path = absolute(&cli.metadata)?;
    let out_path = absolute(&cli.output)?;

    let source = fs::read_to_string(&doc_path)
        .with_context(|| format!("failed to read {}", doc_path.display()))?;
    let document = xml::parse(&source)?;
    let doc_index = index::build(&document)?;
    let artifact = metadata::JsonArtifact::load(&meta_path)?;

    println!("Writing documentation to {}", out_path.display());
    let markdown = render::render(&artifact, &doc_index)?;
    fs::write(&out_path, markdown)
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    println!("Done.");

    Ok(())
}

fn absolute(path: &Path) -> Result<PathBuf> {
    path::absolute(path).with_context(|| format!("failed to resolve path {}", path.display()))
}

fn print_usage() {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    println!("{}", env!("CARGO_PKG_DESCRIPTION"));
    println!();
    println!(
        "Usage: {} <documentation-file> <metadata-artifact> <output-file>",
        env!("CARGO_PKG_NAME")
    );
    println!();
    println!("  <documentation-file>  XML documentation file (doc/members format)");
    println!("  <metadata-artifact>   type metadata artifact (JSON)");
    println!("  <output-file>         Markdown document to write");
}
