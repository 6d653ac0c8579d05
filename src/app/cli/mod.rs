//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;

use crate::app::commands::replace::ReplaceOptions;
use crate::app::logging;
use crate::domain::{
    AppError, DEFAULT_END_TAG, DEFAULT_START_TAG, ReplacerFormat, SourceDescriptor, SourceKind,
    TagDelimiters,
};

#[derive(Parser)]
#[command(name = "tag-replacer")]
#[command(version)]
#[command(
    about = "Replace tags in a file based on a JSON, CSV, YAML, or environment replacer",
    long_about = None
)]
struct Cli {
    /// Replacer string, replacer file path, or comma-separated environment variable names
    #[arg(short, long)]
    replacer: String,
    /// Replacer type: string, file, or environment
    #[arg(short = 't', long = "type", default_value = "string")]
    kind: SourceKind,
    /// Format of the replacer when the type is string: json, yaml, or csv
    #[arg(short, long, default_value = "json")]
    format: ReplacerFormat,
    /// Input file path
    #[arg(short, long = "in")]
    input: PathBuf,
    /// Output file path
    #[arg(short, long = "out")]
    output: PathBuf,
    /// Start tag for placeholders
    #[arg(long = "start_tag", visible_alias = "start-tag", default_value = DEFAULT_START_TAG)]
    start_tag: String,
    /// End tag for placeholders
    #[arg(long = "end_tag", visible_alias = "end-tag", default_value = DEFAULT_END_TAG)]
    end_tag: String,
}

impl Cli {
    fn into_options(self) -> ReplaceOptions {
        ReplaceOptions {
            source: SourceDescriptor::new(self.kind, self.replacer, self.format),
            input: self.input,
            output: self.output,
            tags: TagDelimiters::new(self.start_tag, self.end_tag),
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init();

    if let Err(e) = run_replace(cli.into_options()) {
        println!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_replace(options: ReplaceOptions) -> Result<(), AppError> {
    let outcome = crate::replace_tags(&options)?;
    println!(
        "✅ Applied {} replacement(s) to {}",
        outcome.entries,
        outcome.output.display()
    );
    Ok(())
}
