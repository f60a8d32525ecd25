//! Command-line entry point for the notification core.
//!
//! # Responsibility
//! - Verify `jewelcrm_core` linkage and print its version.
//! - Render the bell for a JSON snapshot of collaborator outputs.
//!
//! Usage: `jewelcrm_cli [snapshot.json]`. Set `JEWELCRM_LOG_DIR` to an
//! absolute directory to enable file logging.

use jewelcrm_core::{
    core_version, default_log_level, init_logging, AuthSnapshot, BellConfig, BellController,
    MemoryAudioBackend, NotificationFeed, NotificationSound, SoundConfig,
};
use serde::Deserialize;
use std::process::ExitCode;
use std::sync::Arc;

const LOG_DIR_ENV: &str = "JEWELCRM_LOG_DIR";

/// Collaborator outputs captured at one moment.
#[derive(Debug, Deserialize)]
struct Snapshot {
    auth: AuthSnapshot,
    feed: NotificationFeed,
    #[serde(default)]
    bell: BellConfig,
    #[serde(default)]
    sound: SoundConfig,
}

fn main() -> ExitCode {
    println!("jewelcrm_core version={}", core_version());

    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let Some(path) = std::env::args().nth(1) else {
        return ExitCode::SUCCESS;
    };

    match render_snapshot(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn render_snapshot(path: &str) -> Result<(), String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read snapshot `{path}`: {err}"))?;
    let snapshot: Snapshot = serde_json::from_str(&raw)
        .map_err(|err| format!("invalid snapshot `{path}`: {err}"))?;
    log::info!(
        "event=cli_snapshot module=cli status=ok notifications={}",
        snapshot.feed.notifications.len()
    );

    let mut bell = BellController::new(snapshot.bell);
    match bell.render(&snapshot.auth, &snapshot.feed) {
        None => println!("bell state=hidden"),
        Some(view) => {
            println!(
                "bell state={} scoped={} unread={} badge={}",
                view.state.as_str(),
                view.scoped_count,
                view.unread_count,
                view.badge.as_deref().unwrap_or("-")
            );
            if let Some(error) = view.error.as_deref() {
                println!("bell error={error}");
            }
        }
    }

    let backend = MemoryAudioBackend::default();
    let sound = NotificationSound::new(Arc::new(backend.clone()), snapshot.sound);
    let outcome = sound.play();
    let samples = backend
        .take_rendered()
        .first()
        .map(|tone| tone.samples.len())
        .unwrap_or(0);
    println!("sound outcome={outcome:?} samples={samples}");
    Ok(())
}
