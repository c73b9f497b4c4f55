//! Generator CLI: build, check, and preview the homepage.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use homesite::{config, serve, site};

#[derive(Parser, Debug)]
#[command(name = "homesite")]
#[command(about = "Static site generator for a personal homepage")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the site into the output directory
    Build {
        /// Site configuration file
        #[arg(short, long, default_value = "siteconfig.json")]
        config: PathBuf,
        /// Output directory
        #[arg(short, long, default_value = "site")]
        out: PathBuf,
        /// Static asset tree copied into the output
        #[arg(long, default_value = "static")]
        static_dir: PathBuf,
        /// Language path segment for generated links (empty for none)
        #[arg(long, default_value = "")]
        language: String,
    },
    /// Validate the site configuration and referenced assets
    Check {
        /// Site configuration file
        #[arg(short, long, default_value = "siteconfig.json")]
        config: PathBuf,
        /// Static asset tree the images should exist in
        #[arg(long, default_value = "static")]
        static_dir: PathBuf,
    },
    /// Preview the generated site locally
    Serve {
        /// Output directory to serve
        #[arg(short, long, default_value = "site")]
        out: PathBuf,
        /// Port to bind (0 picks an ephemeral port)
        #[arg(short, long, default_value_t = 0)]
        port: u16,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match args.command {
        Command::Build {
            config: config_path,
            out,
            static_dir,
            language,
        } => {
            let site_config = config::load(&config_path)
                .with_context(|| format!("loading {}", config_path.display()))?;
            info!("building site for '{}'", site_config.title);
            let summary = site::build(&site_config, &language, Some(&static_dir), &out)?;
            println!(
                "{} {} pages, {} assets -> {}",
                "✓".green(),
                summary.pages_written,
                summary.assets_copied,
                out.display()
            );
            Ok(())
        }
        Command::Check {
            config: config_path,
            static_dir,
        } => {
            let site_config = config::load(&config_path)
                .with_context(|| format!("loading {}", config_path.display()))?;
            let static_dir = static_dir.is_dir().then_some(static_dir);
            let findings = config::lint(&site_config, static_dir.as_deref());
            if findings.is_empty() {
                println!("{} config looks good", "✓".green());
                return Ok(());
            }
            for finding in &findings {
                eprintln!("[homesite][check] {finding}");
            }
            bail!("{} problem(s) found", findings.len());
        }
        Command::Serve { out, port } => {
            if !out.is_dir() {
                bail!(
                    "output directory {} does not exist; run `homesite build` first",
                    out.display()
                );
            }
            serve::serve(&out, port)
        }
    }
}
