//! Main application entry point (headless).
//!
//! Usage: `jamboard [SCRIPT.json]` or `jamboard --shortcuts`.

use jamboard_app::{
    App, AppConfig, AppResult, Clipboard, MemoryClipboard, ShortcutRegistry, demo_script,
    load_script, run_script,
};
use chrono::Utc;
use std::path::PathBuf;

fn main() {
    #[cfg(feature = "native")]
    env_logger::init();
    log::info!("Starting Jamboard");

    let arg = std::env::args_os().nth(1);
    if arg.as_deref().is_some_and(|a| a == "--shortcuts") {
        ShortcutRegistry::print_all();
        return;
    }

    if let Err(e) = run(arg.map(PathBuf::from)) {
        log::error!("{}", e);
        eprintln!("jamboard: {}", e);
        std::process::exit(1);
    }
}

fn run(script: Option<PathBuf>) -> AppResult<()> {
    let config = AppConfig::from_env()?;
    let export_dir = config.export_dir.clone();
    let mut app = App::new(config, clipboard())?;

    let steps = match script {
        Some(path) => load_script(&path)?,
        None => {
            log::info!("No script given, running the demo");
            demo_script()
        }
    };
    run_script(&mut app, &steps);

    match app.history().to_json() {
        Ok(json) => log::debug!("history: {}", json),
        Err(e) => log::warn!("Failed to serialize history: {}", e),
    }
    for (title, label) in app.board_labels(Utc::now()) {
        log::info!("{}: {}", title, label);
    }

    for image in app.take_exports() {
        image.write_to(&export_dir)?;
    }
    let path = app.export_png()?.write_to(&export_dir)?;
    println!("{}", path.display());

    for toast in app.ui_mut().drain_toasts() {
        log::debug!("toast: {:?} {}", toast.kind, toast.message);
    }
    Ok(())
}

#[cfg(feature = "native")]
fn clipboard() -> Box<dyn Clipboard> {
    match jamboard_app::SystemClipboard::new() {
        Ok(clipboard) => Box::new(clipboard),
        Err(e) => {
            log::warn!("{}, share links stay in memory", e);
            Box::new(MemoryClipboard::new())
        }
    }
}

#[cfg(not(feature = "native"))]
fn clipboard() -> Box<dyn Clipboard> {
    Box::new(MemoryClipboard::new())
}
