//! Command-line arguments

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use trustreg_dashboard::{OutputFormat, Section};

#[derive(Parser, Debug)]
#[command(name = "trustreg", version)]
#[command(about = "TrustReg legal LLM governance dashboard", long_about = None)]
pub struct Cli {
    /// Decision CSV (default: outputs/trustreg_model_comparison.csv, then ../outputs/)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// JSON dashboard configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render one section
    Show {
        /// Section slug, menu label or menu number
        #[arg(value_parser = parse_section)]
        section: Section,
        /// terminal, html or json
        #[arg(short, long, value_parser = parse_format, default_value_t = OutputFormat::Terminal)]
        format: OutputFormat,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List sections in menu order
    Sections,
    /// Choose sections interactively
    Menu,
    /// Render every section into one document
    Export {
        #[arg(short, long)]
        output: PathBuf,
        #[arg(short, long, value_parser = parse_format, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
    },
}

/// Output format by name
pub fn parse_format(value: &str) -> Result<OutputFormat, String> {
    value.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Section by menu number, slug or label
pub fn parse_section(value: &str) -> Result<Section, String> {
    if let Ok(index) = value.trim().parse::<usize>() {
        return Section::from_menu_index(index)
            .ok_or_else(|| format!("menu number must be 1-{}", Section::ALL.len()));
    }
    value.parse::<Section>().map_err(|e| {
        let slugs: Vec<&str> = Section::ALL.iter().map(|s| s.slug()).collect();
        format!("{e}; expected one of: {}", slugs.join(", "))
    })
}
