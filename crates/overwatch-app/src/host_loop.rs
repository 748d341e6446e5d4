//! Frame loop thread: runs the HUD engine at 60Hz and publishes snapshots.
//!
//! The engine is validated on the caller's thread and then moved into the
//! loop. Commands arrive via `mpsc` channel. Each snapshot is handed to an
//! emit callback and stored in shared state for synchronous polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use overwatch_core::constants::FRAME_RATE;
use overwatch_core::state::HudSnapshot;
use overwatch_engine::HudEngine;

use crate::state::HostCommand;

/// Nominal duration of one frame.
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Spawns the frame loop in a new thread.
///
/// Returns the command sender and the thread's join handle.
pub fn spawn_host_loop<F>(
    engine: HudEngine,
    latest_snapshot: Arc<Mutex<Option<HudSnapshot>>>,
    emit: F,
) -> io::Result<(mpsc::Sender<HostCommand>, JoinHandle<()>)>
where
    F: FnMut(&HudSnapshot) + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<HostCommand>();

    let handle = std::thread::Builder::new()
        .name("overwatch-frame-loop".into())
        .spawn(move || {
            run_host_loop(engine, cmd_rx, &latest_snapshot, emit);
        })?;

    Ok((cmd_tx, handle))
}

/// The frame loop. Runs until Shutdown command or channel disconnect.
fn run_host_loop<F>(
    mut engine: HudEngine,
    cmd_rx: mpsc::Receiver<HostCommand>,
    latest_snapshot: &Mutex<Option<HudSnapshot>>,
    mut emit: F,
) where
    F: FnMut(&HudSnapshot),
{
    let started = Instant::now();
    let mut next_frame_time = started;
    log::info!("frame loop started");

    loop {
        // 1. Drain all pending commands
        if !drain_commands(&cmd_rx, &mut engine) {
            log::info!("frame loop stopped after {} frames", engine.clock().frame);
            return;
        }

        // 2. Run one frame at the elapsed host time
        let now_ms = started.elapsed().as_millis() as u64;
        let snapshot = engine.frame(now_ms);

        // 3. Hand the snapshot to the emitter
        emit(&snapshot);

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            next_frame_time = now;
        }
    }
}

/// Queue every pending command. Returns `false` when the loop should stop.
fn drain_commands(cmd_rx: &mpsc::Receiver<HostCommand>, engine: &mut HudEngine) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(HostCommand::Command(cmd)) => engine.queue_command(cmd),
            Ok(HostCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use overwatch_core::commands::HudCommand;
    use overwatch_core::config::HudConfig;
    use overwatch_core::enums::WidgetKind;
    use overwatch_core::types::GaugeRange;

    fn engine() -> HudEngine {
        HudEngine::new(HudConfig::default()).unwrap()
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<HostCommand>();

        tx.send(HostCommand::Command(HudCommand::PauseAllNotifications))
            .unwrap();
        tx.send(HostCommand::Command(HudCommand::ResumeAllNotifications))
            .unwrap();
        tx.send(HostCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            HostCommand::Command(HudCommand::PauseAllNotifications)
        ));
        assert!(matches!(commands[2], HostCommand::Shutdown));
    }

    #[test]
    fn test_drain_stops_on_shutdown_or_disconnect() {
        let mut engine = engine();
        let (tx, rx) = mpsc::channel::<HostCommand>();
        tx.send(HostCommand::Command(HudCommand::PauseAllNotifications))
            .unwrap();
        assert!(drain_commands(&rx, &mut engine));
        assert!(engine.needs_frame(), "command queued for next frame");

        tx.send(HostCommand::Shutdown).unwrap();
        assert!(!drain_commands(&rx, &mut engine));

        drop(tx);
        assert!(!drain_commands(&rx, &mut engine));
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = engine();
        for i in 0..20 {
            engine.queue_command(HudCommand::MountGauge {
                widget_id: format!("g{i}"),
                kind: WidgetKind::MetricGauge,
                initial: i as f64,
                range: GaugeRange::default(),
                thresholds: None,
                duration_ms: None,
                easing: None,
            });
        }
        let snapshot = engine.frame(0);
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_loop_thread_applies_commands_and_publishes() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_host_loop(engine(), latest.clone(), |_| {}).unwrap();
        tx.send(HostCommand::Command(HudCommand::MountGauge {
            widget_id: "hull".into(),
            kind: WidgetKind::MetricGauge,
            initial: 75.0,
            range: GaugeRange::default(),
            thresholds: None,
            duration_ms: None,
            easing: None,
        }))
        .unwrap();

        let deadline = Instant::now() + Duration::from_secs(2);
        let mut mounted = false;
        while Instant::now() < deadline && !mounted {
            std::thread::sleep(FRAME_DURATION);
            mounted = latest
                .lock()
                .unwrap()
                .as_ref()
                .is_some_and(|snap| snap.gauges.len() == 1);
        }
        assert!(mounted, "frame loop never published the mounted gauge");

        tx.send(HostCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_frame_duration_constant() {
        // 60Hz = 16.666ms per frame
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(FRAME_DURATION.as_nanos(), expected_nanos as u128);
    }
}
