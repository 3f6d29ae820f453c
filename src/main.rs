//! Pomodoro Ring - A terminal work/rest cycle timer with a pausable progress ring
//!
//! This is the main entry point for the pomodoro-ring application.

use std::io;

use tokio::sync::{broadcast, mpsc, watch};
use tracing::{error, info};

use pomodoro_ring::{
    config::Config,
    display::{render_task, RenderMode},
    state::Session,
    tasks::{cycle_driver_task, spawn_stdin_reader, Command},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so they never tear the status line on stdout
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(format!("pomodoro_ring={}", config.log_level()))
        .init();

    let settings = config.settings()?;

    info!("Starting pomodoro-ring v0.1.0");
    info!(
        "Configuration: work={}s, rest={}s, refresh={}ms",
        settings.work_seconds(),
        settings.rest_seconds(),
        config.frame_interval().as_millis()
    );

    let session = Session::new(settings);
    let (snapshot_tx, snapshot_rx) = watch::channel(session.snapshot(std::time::Instant::now()));
    let (event_tx, event_rx) = broadcast::channel(64);
    let (command_tx, command_rx) = mpsc::channel(16);

    if config.autostart {
        command_tx.send(Command::Toggle).await?;
    }

    let mode = if config.json {
        RenderMode::Json
    } else {
        RenderMode::Text { color: !config.no_color }
    };
    tokio::spawn(render_task(io::stdout(), mode, snapshot_rx, event_rx));

    // Stdin is read on its own thread; it is abandoned when main returns
    spawn_stdin_reader(command_tx)?;

    let driver = tokio::spawn(cycle_driver_task(
        session,
        command_rx,
        snapshot_tx,
        event_tx,
        config.frame_interval(),
    ));

    tokio::select! {
        result = driver => {
            match result {
                Ok(session) => info!(
                    "Stopped in {} phase with {} remaining",
                    session.timer().phase(),
                    session.timer().formatted_remaining()
                ),
                Err(e) => error!("Cycle driver failed: {}", e),
            }
        }
        result = shutdown_signal() => {
            if let Err(e) = result {
                error!("Failed to listen for shutdown signals: {}", e);
            }
            info!("Shutdown signal received");
        }
    }

    if matches!(mode, RenderMode::Text { .. }) {
        println!();
    }
    info!("Shutdown complete");
    Ok(())
}
