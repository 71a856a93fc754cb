use anyhow::Result;
use clap::{Parser, Subcommand};
use folio::theme::{self, FileModeStore, MemoryModeStore, Mode, ModeStore, ThemeEngine};
use folio::{App, content};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the site content file
    #[arg(short, long, default_value = "site.json")]
    content: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in surprise palettes
    Palettes,
    /// Persist and apply a theme mode without launching the viewer
    Mode {
        /// One of light, dark or surprise
        mode: String,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Palettes) => {
            for palette in theme::palettes() {
                println!("{} ({})", palette.name, palette.style);
                for (slot, color) in palette.slots() {
                    println!("  {slot:<12} {color}");
                }
                println!("  {:<12} {}", "muted", theme::derive_muted(palette.background));
            }
        }
        Some(Commands::Mode { mode }) => {
            let mode: Mode = mode.parse()?;
            let mut engine = ThemeEngine::new(mode_store())?;
            engine.set_mode(mode);
            println!("theme mode set to {mode}");
        }
        None => {
            let data = content::load(&cli.content)?;
            let engine = ThemeEngine::new(mode_store())?;
            let mut app = App::new(data, engine)?;
            app.run()?;
        }
    }

    Ok(())
}

/// File-backed store when a config directory exists, in-memory otherwise
fn mode_store() -> Box<dyn ModeStore> {
    match FileModeStore::new() {
        Ok(store) => Box::new(store),
        Err(err) => {
            tracing::warn!("No config directory, theme mode will not persist: {err:#}");
            Box::new(MemoryModeStore::new())
        }
    }
}
