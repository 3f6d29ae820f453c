//! Cycle driver background task

use std::time::Duration;

use tokio::{
    sync::{broadcast, mpsc, watch},
    time::{interval, Instant, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::state::{Session, Snapshot, TimerEvent, Toggle};

/// Control input delivered to the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start when paused, pause when running
    Toggle,
    /// Stop the driver and hand back the session
    Quit,
}

/// Background task that owns the session and feeds it one-second ticks.
///
/// Snapshots are republished on every tick, every toggle and every frame
/// while running. Timer events go out on `events` after the matching
/// snapshot. Returns the final session once [`Command::Quit`] arrives. If
/// the command channel closes, a running cycle keeps going until the task is
/// dropped and a paused one returns straight away.
pub async fn cycle_driver_task(
    mut session: Session,
    mut commands: mpsc::Receiver<Command>,
    snapshots: watch::Sender<Snapshot>,
    events: broadcast::Sender<TimerEvent>,
    frame_interval: Duration,
) -> Session {
    info!("Starting cycle driver task");

    let mut ticks = interval(Duration::from_secs(1));
    // Every missed second is still delivered, at its own deadline
    ticks.set_missed_tick_behavior(MissedTickBehavior::Burst);
    let mut frames = interval(frame_interval);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut input_open = true;

    publish(&session, &snapshots, Instant::now());

    loop {
        tokio::select! {
            // Countdown tick - only armed while running
            tick_at = ticks.tick(), if session.is_running() => {
                let fired = session.apply_due_ticks(tick_at.into_std());
                publish(&session, &snapshots, tick_at);
                announce(&events, fired);
            }

            // Frame refresh so the arc sweeps between ticks
            _ = frames.tick(), if session.is_running() => {
                publish(&session, &snapshots, Instant::now());
            }

            command = commands.recv(), if input_open => {
                match command {
                    Some(Command::Toggle) => {
                        let now = Instant::now();
                        // Count seconds that elapsed before the press
                        let fired = session.apply_due_ticks(now.into_std());
                        if !fired.is_empty() {
                            publish(&session, &snapshots, now);
                            announce(&events, fired);
                        }

                        match session.toggle(now.into_std()) {
                            Toggle::Started { next_tick } => {
                                ticks.reset_at(Instant::from_std(next_tick));
                                frames.reset();
                            }
                            Toggle::Paused => {}
                        }
                        publish(&session, &snapshots, now);
                    }
                    Some(Command::Quit) => {
                        info!("Quit requested, stopping cycle driver");
                        break;
                    }
                    None => {
                        warn!("Command channel closed, cycle continues without input");
                        input_open = false;
                    }
                }
            }

            else => {
                info!("Nothing left to drive, stopping cycle driver");
                break;
            }
        }
    }

    session
}

fn announce(events: &broadcast::Sender<TimerEvent>, fired: Vec<TimerEvent>) {
    for event in fired {
        debug!("Timer event: {:?}", event);
        if let Err(e) = events.send(event) {
            debug!("No event listeners: {}", e);
        }
    }
}

fn publish(session: &Session, snapshots: &watch::Sender<Snapshot>, now: Instant) {
    snapshots.send_replace(session.snapshot(now.into_std()));
}
