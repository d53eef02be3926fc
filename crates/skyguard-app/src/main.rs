use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use skyguard_app::config::AppConfig;
use skyguard_app::error::AppError;
use skyguard_app::game_loop;
use skyguard_app::input;
use skyguard_app::state::new_shared_snapshot;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "skyguard failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading config");
            AppConfig::load(&path)?
        }
        None => AppConfig::default(),
    };

    let latest_snapshot = new_shared_snapshot();
    let handle = game_loop::spawn_game_loop(config.clone(), latest_snapshot)?;

    if config.stdin_commands {
        let tx = handle.commands();
        std::thread::Builder::new()
            .name("skyguard-stdin".into())
            .spawn(move || {
                let forwarded = input::forward_commands(BufReader::new(std::io::stdin()), &tx);
                tracing::debug!(forwarded, "command input finished");
            })
            .map_err(|source| AppError::Spawn {
                name: "stdin reader",
                source,
            })?;
    }

    let summary = handle.join()?;
    println!(
        "{}",
        serde_json::to_string_pretty(&summary.score).map_err(skyguard_app::core::SimError::from)?
    );
    Ok(())
}
