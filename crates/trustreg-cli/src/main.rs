//! Command-line interface for the TrustReg governance dashboard

mod cli;
mod menu;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::fs;
use std::io;
use std::path::Path;
use tracing::info;
use trustreg_dashboard::{Dashboard, Section};
use trustreg_utils::DashboardConfig;

fn load_config(cli: &Cli) -> Result<DashboardConfig> {
    let mut config = match &cli.config {
        Some(path) => DashboardConfig::from_file(path)?,
        None => DashboardConfig::default(),
    }
    .with_env();

    if let Some(data) = &cli.data {
        config.data_path = Some(data.clone());
    }
    config.validate()?;
    Ok(config)
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = content.len(), "Wrote dashboard");
    println!("Wrote {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    trustreg_utils::init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let dashboard = Dashboard::new(config, &cwd);
    info!(data = %dashboard.data_path().display(), "Starting trustreg");

    match cli.command {
        Commands::Show {
            section,
            format,
            output,
        } => {
            let rendered = dashboard
                .render(&[section], format)
                .with_context(|| format!("Failed to render '{section}'"))?;
            match output {
                Some(path) => write_output(&path, &rendered)?,
                None => print!("{rendered}"),
            }
        }
        Commands::Sections => {
            for (i, section) in Section::ALL.iter().enumerate() {
                println!("{}. {} ({})", i + 1, section.label(), section.slug());
            }
        }
        Commands::Menu => {
            let stdin = io::stdin();
            menu::run_menu(&dashboard, stdin.lock(), &mut io::stdout())?;
        }
        Commands::Export { output, format } => {
            let rendered = dashboard
                .render(&Section::ALL, format)
                .context("Failed to render dashboard")?;
            write_output(&output, &rendered)?;
        }
    }

    Ok(())
}
