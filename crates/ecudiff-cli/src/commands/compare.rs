//! Compare command
//!
//! Usage: ecudiff <BASE> <OTHER> [--output <FILE>] [--format <FORMAT>]

use clap::{Args, ValueEnum};
use ecudiff_core::{
    compare, load_snapshot, BlockAlignment, DiffOptions, EcuDiffError, HtmlRenderer,
    JsonRenderer, MarkdownRenderer, ReportRenderer,
};
use std::path::{Path, PathBuf};

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Markdown,
    Json,
}

impl OutputFormat {
    fn renderer(self) -> Box<dyn ReportRenderer> {
        match self {
            OutputFormat::Html => Box::new(HtmlRenderer),
            OutputFormat::Markdown => Box::new(MarkdownRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
        }
    }
}

/// Block alignment strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlignmentArg {
    /// Pair the n-th block of each kind
    ByKind,
    /// Pair blocks by index
    Positional,
}

impl From<AlignmentArg> for BlockAlignment {
    fn from(arg: AlignmentArg) -> Self {
        match arg {
            AlignmentArg::ByKind => BlockAlignment::ByKind,
            AlignmentArg::Positional => BlockAlignment::Positional,
        }
    }
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Base (original) backup, .json or .xml
    pub base: PathBuf,

    /// Other backup compared against the base, .json or .xml
    pub other: PathBuf,

    /// Output file path, `-` for stdout (default: result.<ext>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// TOML file with diff options
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Block alignment (overrides the config file)
    #[arg(long, value_enum)]
    pub alignment: Option<AlignmentArg>,

    /// Also report binary items present only in the other backup
    #[arg(long)]
    pub report_other_only_binary: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl CompareArgs {
    /// Options from the config file, with command-line flags applied on top
    fn options(&self) -> Result<DiffOptions, EcuDiffError> {
        let mut options = match &self.config {
            Some(path) => DiffOptions::load(path)?,
            None => DiffOptions::default(),
        };
        if let Some(alignment) = self.alignment {
            options.block_alignment = alignment.into();
        }
        if self.report_other_only_binary {
            options.report_other_only_binary = true;
        }
        Ok(options)
    }
}

/// Execute compare command
pub fn execute(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    let options = args.options()?;

    let base = load_snapshot(&args.base)?;
    let other = load_snapshot(&args.other)?;

    let report = compare(&base, &other, &options);

    let renderer = args.format.renderer();
    let rendered = renderer.render(&report)?;

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("result.{}", renderer.file_extension())));

    if output == Path::new("-") {
        print!("{}", rendered);
    } else {
        std::fs::write(&output, rendered).map_err(|e| EcuDiffError::Io {
            path: output.display().to_string(),
            reason: e.to_string(),
        })?;
        tracing::info!(
            component = module_path!(),
            path = %output.display(),
            rows = report.row_count(),
            "report written"
        );
        println!("✓ Report written to {}", output.display());
    }

    Ok(())
}
