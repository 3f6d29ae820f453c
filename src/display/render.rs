//! Terminal rendering of the countdown and progress ring

use std::io::{self, Write};

use colored::Colorize;
use tokio::sync::{broadcast, watch};
use tracing::{debug, error, info, warn};

use super::records::EventRecord;
use crate::state::{Phase, Snapshot, TimerEvent};

const BAR_WIDTH: usize = 20;

/// How the display is written to its output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Single self-overwriting status line, time tinted by phase when `color`
    Text { color: bool },
    /// One JSON object per timer event
    Json,
}

/// Quarter-step ring glyph for an elapsed fraction
pub fn ring_glyph(fraction: f64) -> char {
    match (fraction.clamp(0.0, 1.0) * 4.0).floor() as u8 {
        0 => '○',
        1 => '◔',
        2 => '◑',
        3 => '◕',
        _ => '●',
    }
}

/// Horizontal sweep bar for an elapsed fraction
pub fn progress_bar(fraction: f64) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    let mut bar = String::with_capacity(BAR_WIDTH * 3 + 2);
    bar.push('[');
    bar.extend(std::iter::repeat('█').take(filled));
    bar.extend(std::iter::repeat('░').take(BAR_WIDTH - filled));
    bar.push(']');
    bar
}

/// Time label tinted orange for work and green for rest
pub fn paint_time(phase: Phase, formatted: &str) -> String {
    match phase {
        Phase::Work => formatted.truecolor(255, 149, 0).to_string(),
        Phase::Rest => formatted.truecolor(52, 199, 89).to_string(),
    }
}

/// Format one status line, e.g. `[WORK] ⏸ 24:13 ◔ [█████░░░...]  26%`.
///
/// The control glyph is what pressing the toggle would do: play while
/// stopped, pause while running.
pub fn render_line(snapshot: &Snapshot, color: bool) -> String {
    let control = if snapshot.running { '⏸' } else { '▶' };
    let percent = (snapshot.elapsed_fraction.clamp(0.0, 1.0) * 100.0).floor() as u8;
    let time = if color {
        paint_time(snapshot.phase, &snapshot.formatted)
    } else {
        snapshot.formatted.clone()
    };
    format!(
        "[{}] {} {} {} {} {:>3}%",
        snapshot.phase.label(),
        control,
        time,
        ring_glyph(snapshot.elapsed_fraction),
        progress_bar(snapshot.elapsed_fraction),
        percent,
    )
}

/// Write one event record as a JSON line
pub fn write_record<W: Write>(out: &mut W, record: &EventRecord) -> io::Result<()> {
    serde_json::to_writer(&mut *out, record)?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Background task that draws every published snapshot or event
pub async fn render_task<W: Write>(
    mut out: W,
    mode: RenderMode,
    mut snapshots: watch::Receiver<Snapshot>,
    mut events: broadcast::Receiver<TimerEvent>,
) {
    info!("Starting render task in {:?} mode", mode);

    let result = match mode {
        RenderMode::Text { color } => render_text(&mut out, &mut snapshots, color).await,
        RenderMode::Json => render_json(&mut out, &snapshots, &mut events).await,
    };

    if let Err(e) = result {
        error!("Display output failed: {}", e);
    }
}

async fn render_text<W: Write>(
    out: &mut W,
    snapshots: &mut watch::Receiver<Snapshot>,
    color: bool,
) -> io::Result<()> {
    let mut last_phase: Option<Phase> = None;
    let mut draw = |out: &mut W, snapshot: &Snapshot| -> io::Result<()> {
        // Leave the finished phase's last line in scrollback
        if last_phase.is_some_and(|phase| phase != snapshot.phase) {
            out.write_all(b"\n")?;
        }
        last_phase = Some(snapshot.phase);
        write!(out, "\r{}", render_line(snapshot, color))?;
        out.flush()
    };

    let initial = snapshots.borrow_and_update().clone();
    draw(&mut *out, &initial)?;

    while snapshots.changed().await.is_ok() {
        let snapshot = snapshots.borrow_and_update().clone();
        draw(&mut *out, &snapshot)?;
    }

    debug!("Snapshot channel closed, render task finished");
    Ok(())
}

async fn render_json<W: Write>(
    out: &mut W,
    snapshots: &watch::Receiver<Snapshot>,
    events: &mut broadcast::Receiver<TimerEvent>,
) -> io::Result<()> {
    loop {
        match events.recv().await {
            Ok(event) => {
                let snapshot = snapshots.borrow().clone();
                write_record(out, &EventRecord::new(event, snapshot))?;
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                warn!("Display fell behind, skipped {} events", skipped);
            }
            Err(broadcast::error::RecvError::Closed) => {
                debug!("Event channel closed, render task finished");
                return Ok(());
            }
        }
    }
}
