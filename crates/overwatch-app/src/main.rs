use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;

use overwatch_app::state::HostState;
use overwatch_core::config::HudConfig;
use overwatch_core::events::HudEvent;
use overwatch_engine::feed::{TelemetryFeed, READING_INTERVAL_MS};

#[derive(Parser)]
#[command(author, version, about = "Headless OVERWATCH HUD demo driven by a seeded telemetry feed")]
struct Args {
    /// Load HUD configuration from JSON
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for the demo telemetry feed
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// How long to run, in seconds
    #[arg(long, default_value_t = 10)]
    seconds: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = &args.config {
        HudConfig::load(path).with_context(|| format!("loading {}", path.display()))?
    } else {
        HudConfig::default()
    };

    let host = HostState::new();
    let (event_tx, event_rx) = mpsc::channel::<Vec<HudEvent>>();
    host.start(config, move |snapshot| {
        if !snapshot.events.is_empty() {
            let _ = event_tx.send(snapshot.events.clone());
        }
    })?;

    let mut feed = TelemetryFeed::new(args.seed);
    for command in feed.mount_commands() {
        host.send(command)?;
    }

    let started = Instant::now();
    let run_for = Duration::from_secs(args.seconds);
    let poll_interval = Duration::from_millis(READING_INTERVAL_MS / 5);
    let mut event_count = 0usize;

    while started.elapsed() < run_for {
        while let Ok(events) = event_rx.try_recv() {
            for event in &events {
                log_event(event);
            }
            event_count += events.len();
            feed.acknowledge(&events);
        }

        let now_ms = started.elapsed().as_millis() as u64;
        for command in feed.poll(now_ms) {
            host.send(command)?;
        }
        std::thread::sleep(poll_interval);
    }

    let snapshot = host.snapshot();
    host.shutdown()?;

    if let Some(snapshot) = snapshot {
        log::info!(
            "ran {} frames, {} events, {} visible / {} queued notifications",
            snapshot.clock.frame,
            event_count,
            snapshot.notifications.visible.len(),
            snapshot.notifications.queued.len()
        );
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}

fn log_event(event: &HudEvent) {
    match event {
        HudEvent::ThresholdCrossed {
            widget_id,
            previous,
            category,
            value,
        } => log::info!("{widget_id}: {previous:?} -> {category:?} at {value:.1}%"),
        HudEvent::ContactDetected {
            widget_id,
            contact_id,
            bearing_deg,
        } => log::info!("{widget_id}: ping {contact_id} at {bearing_deg:.1} deg"),
        HudEvent::NotificationAdded { record } => {
            log::info!("notification {} [{:?}] {}", record.id, record.category, record.title)
        }
        HudEvent::NotificationRemoved { id, reason } => {
            log::info!("notification {id} removed ({reason:?})")
        }
        other => log::debug!("{other:?}"),
    }
}
