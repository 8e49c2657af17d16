use std::process::ExitCode;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};

use content::ContentStore;
use ui::{App, build_app_context};

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load and validate the embedded quiz content before opening a window,
    // so a bad content edit fails fast on stderr instead of mid-render.
    let store = ContentStore::load()?;
    let context = build_app_context(Arc::new(store));

    // Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Enneagram Resonance Check")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}
