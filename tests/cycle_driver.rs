use std::time::Duration;

use tokio::{
    sync::{broadcast, mpsc, watch},
    task::JoinHandle,
    time::sleep,
};

use pomodoro_ring::{
    cycle_driver_task, Command, CycleSettings, Phase, Session, Snapshot, TimerEvent,
};

struct Harness {
    commands: mpsc::Sender<Command>,
    snapshots: watch::Receiver<Snapshot>,
    events: broadcast::Receiver<TimerEvent>,
    driver: JoinHandle<Session>,
}

fn spawn_driver(work: u64, rest: u64) -> Harness {
    let session = Session::new(CycleSettings::new(work, rest).unwrap());
    let (snapshot_tx, snapshots) = watch::channel(session.snapshot(std::time::Instant::now()));
    let (event_tx, events) = broadcast::channel(64);
    let (commands, command_rx) = mpsc::channel(8);

    let driver = tokio::spawn(cycle_driver_task(
        session,
        command_rx,
        snapshot_tx,
        event_tx,
        Duration::from_millis(250),
    ));

    Harness {
        commands,
        snapshots,
        events,
        driver,
    }
}

fn drain(events: &mut broadcast::Receiver<TimerEvent>) -> Vec<TimerEvent> {
    let mut out = Vec::new();
    while let Ok(event) = events.try_recv() {
        out.push(event);
    }
    out
}

#[tokio::test(start_paused = true)]
async fn test_seventh_tick_switches_work_to_rest() {
    let mut h = spawn_driver(7, 5);

    h.commands.send(Command::Toggle).await.unwrap();
    sleep(Duration::from_millis(7500)).await;
    h.commands.send(Command::Quit).await.unwrap();
    let session = h.driver.await.unwrap();

    assert_eq!(
        drain(&mut h.events),
        vec![
            TimerEvent::Tick(6),
            TimerEvent::Tick(5),
            TimerEvent::Tick(4),
            TimerEvent::Tick(3),
            TimerEvent::Tick(2),
            TimerEvent::Tick(1),
            TimerEvent::PhaseEnded(Phase::Work),
            TimerEvent::PhaseStarted(Phase::Rest),
        ]
    );
    assert_eq!(session.timer().phase(), Phase::Rest);
    assert_eq!(session.timer().remaining_seconds(), 5);
    assert_eq!(h.snapshots.borrow().formatted, "00:05");
}

#[tokio::test(start_paused = true)]
async fn test_pause_freezes_and_resume_keeps_arc_in_step() {
    let mut h = spawn_driver(10, 5);

    h.commands.send(Command::Toggle).await.unwrap();
    sleep(Duration::from_millis(3400)).await;
    h.commands.send(Command::Toggle).await.unwrap();
    sleep(Duration::from_secs(10)).await;

    {
        let paused = h.snapshots.borrow();
        assert!(!paused.running);
        assert_eq!(paused.remaining_seconds, 7);
        assert!((paused.elapsed_fraction - 0.34).abs() < 1e-6);
    }
    assert_eq!(drain(&mut h.events).len(), 3);

    h.commands.send(Command::Toggle).await.unwrap();
    sleep(Duration::from_millis(650)).await;

    {
        let resumed = h.snapshots.borrow();
        assert!(resumed.running);
        assert_eq!(resumed.remaining_seconds, 6);
        assert!((resumed.elapsed_fraction - 0.4).abs() < 1e-6);
    }
    assert_eq!(drain(&mut h.events), vec![TimerEvent::Tick(6)]);

    h.commands.send(Command::Quit).await.unwrap();
    h.driver.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_stays_idle_until_toggled() {
    let mut h = spawn_driver(7, 5);

    sleep(Duration::from_secs(30)).await;
    assert!(drain(&mut h.events).is_empty());
    assert_eq!(h.snapshots.borrow().formatted, "00:07");
    assert!(!h.snapshots.borrow().running);

    h.commands.send(Command::Quit).await.unwrap();
    let session = h.driver.await.unwrap();
    assert_eq!(session.timer().remaining_seconds(), 7);
}

#[tokio::test(start_paused = true)]
async fn test_closed_input_while_paused_ends_driver() {
    let h = spawn_driver(7, 5);
    drop(h.commands);

    let session = h.driver.await.unwrap();
    assert!(!session.is_running());
}

#[tokio::test(start_paused = true)]
async fn test_closed_input_while_running_keeps_counting() {
    let mut h = spawn_driver(3, 2);

    h.commands.send(Command::Toggle).await.unwrap();
    drop(h.commands);
    sleep(Duration::from_millis(5500)).await;

    assert_eq!(
        drain(&mut h.events),
        vec![
            TimerEvent::Tick(2),
            TimerEvent::Tick(1),
            TimerEvent::PhaseEnded(Phase::Work),
            TimerEvent::PhaseStarted(Phase::Rest),
            TimerEvent::Tick(1),
            TimerEvent::PhaseEnded(Phase::Rest),
            TimerEvent::PhaseStarted(Phase::Work),
        ]
    );
    assert_eq!(h.snapshots.borrow().phase, Phase::Work);
    h.driver.abort();
}

#[tokio::test(start_paused = true)]
async fn test_stalled_clock_keeps_countdown_and_arc_together() {
    let mut h = spawn_driver(10, 5);

    h.commands.send(Command::Toggle).await.unwrap();
    tokio::task::yield_now().await;
    tokio::time::advance(Duration::from_millis(3500)).await;
    sleep(Duration::from_millis(2600)).await;

    {
        let snap = h.snapshots.borrow();
        assert_eq!(snap.remaining_seconds, 4);
        assert!((snap.elapsed_fraction - 0.6).abs() < 1e-6);
    }
    assert_eq!(
        drain(&mut h.events),
        vec![
            TimerEvent::Tick(9),
            TimerEvent::Tick(8),
            TimerEvent::Tick(7),
            TimerEvent::Tick(6),
            TimerEvent::Tick(5),
            TimerEvent::Tick(4),
        ]
    );

    h.commands.send(Command::Quit).await.unwrap();
    h.driver.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_pause_after_stall_counts_missed_seconds() {
    let mut h = spawn_driver(10, 5);

    h.commands.send(Command::Toggle).await.unwrap();
    tokio::task::yield_now().await;
    tokio::time::advance(Duration::from_millis(3500)).await;
    h.commands.send(Command::Toggle).await.unwrap();
    sleep(Duration::from_secs(5)).await;

    {
        let paused = h.snapshots.borrow();
        assert!(!paused.running);
        assert_eq!(paused.remaining_seconds, 7);
        assert!((paused.elapsed_fraction - 0.35).abs() < 1e-6);
    }
    assert_eq!(drain(&mut h.events).len(), 3);

    h.commands.send(Command::Quit).await.unwrap();
    h.driver.await.unwrap();
}
