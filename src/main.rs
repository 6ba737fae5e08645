use anyhow::Context;
use clap::Parser;
use dartboard::config;
use dartboard::export;
use dartboard::gui::app::AppModel;
use relm4::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Render the board to this PNG file instead of opening a window
    #[arg(short, long, value_name = "PNG")]
    export: Option<PathBuf>,

    /// Side length of the exported image in pixels (defaults to the configured size)
    #[arg(short, long, requires = "export")]
    size: Option<u32>,

    /// Write the default config file if missing and print its path
    #[arg(long)]
    write_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.write_config {
        let path = config::write_default_config().context("Failed to write default config")?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = config::load_or_default();

    if let Some(path) = args.export {
        let size = args.size.unwrap_or(config.export.size);
        export::render_png(&path, size)
            .with_context(|| format!("Failed to export board to {}", path.display()))?;
        log::info!("Exported {}px board to {}", size, path.display());
        return Ok(());
    }

    // GTK would otherwise try to parse our own flags
    let app = RelmApp::new("org.dartboard.viewer").with_args(Vec::new());

    app.run::<AppModel>(config);
    Ok(())
}
