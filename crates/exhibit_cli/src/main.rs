//! Exhibit CLI
//!
//! Command-line tool for the exhibition page's motion pieces:
//!
//! - `exhibit count`: play a counter animation in the terminal
//! - `exhibit theme`: show, toggle or set the saved light/dark preference
//! - `exhibit init`: write a default exhibit.toml

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod config;
mod count;
mod theme;

use config::ExhibitConfig;
use count::CountOptions;
use exhibit_theme::{detect_system_color_scheme, ColorScheme, TomlFileStore};
use theme::ThemeAction;

#[derive(Parser)]
#[command(name = "exhibit")]
#[command(author, version, about = "Counters and theme preference for the exhibition page", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file or directory containing exhibit.toml
    #[arg(short, long, global = true, default_value = ".")]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate a number from one value to another
    Count {
        /// Target value
        to: f64,

        /// Starting value
        #[arg(long, default_value_t = 0.0)]
        from: f64,

        /// Duration in milliseconds
        #[arg(short, long)]
        duration: Option<f64>,

        /// Easing curve (quart, cubic, linear, ease-in-out, ...)
        #[arg(short, long)]
        easing: Option<String>,

        /// Locale used to group digits (e.g. vi-VN)
        #[arg(short, long)]
        locale: Option<String>,

        /// Frames per second
        #[arg(long)]
        fps: Option<u32>,
    },

    /// Show or change the saved color scheme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeCommand>,

        /// Preference file (overrides the config)
        #[arg(long)]
        store: Option<PathBuf>,

        /// Treat the system as preferring dark mode
        #[arg(long)]
        system_dark: bool,
    },

    /// Write a default exhibit.toml
    Init {
        /// Directory to write into
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

#[derive(Subcommand, Clone, Copy)]
enum ThemeCommand {
    /// Print the scheme in effect
    Show,
    /// Switch between light and dark
    Toggle,
    /// Save a specific scheme
    Set {
        #[arg(value_parser = parse_scheme)]
        scheme: ColorScheme,
    },
}

fn parse_scheme(s: &str) -> Result<ColorScheme, String> {
    s.parse().map_err(|e: exhibit_theme::ThemeError| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Count {
            to,
            from,
            duration,
            easing,
            locale,
            fps,
        } => {
            let config = ExhibitConfig::load(&cli.config)?;
            let defaults = &config.counter;
            let options = CountOptions::new(
                from,
                to,
                duration.unwrap_or(defaults.duration_ms),
                easing.as_deref().unwrap_or(&defaults.easing),
                locale.as_deref().or(defaults.locale.as_deref()),
                fps.unwrap_or(defaults.fps),
            )?;
            count::count(&options)
        }

        Commands::Theme {
            action,
            store,
            system_dark,
        } => {
            let config = ExhibitConfig::load(&cli.config)?;
            let path = store.unwrap_or_else(|| config.theme.store_path());
            let system_prefers_dark = system_dark || detect_system_color_scheme().is_dark();

            let action = match action.unwrap_or(ThemeCommand::Show) {
                ThemeCommand::Show => ThemeAction::Show,
                ThemeCommand::Toggle => ThemeAction::Toggle,
                ThemeCommand::Set { scheme } => ThemeAction::Set(scheme),
            };

            tracing::debug!(path = %path.display(), ?action, "theme command");
            let scheme = theme::apply(TomlFileStore::new(path), system_prefers_dark, action)?;
            println!("{scheme} ({})", scheme.icon_name());
            Ok(())
        }

        Commands::Init { path } => {
            let written = ExhibitConfig::init(&path)?;
            tracing::info!("Wrote {}", written.display());
            Ok(())
        }
    }
}
