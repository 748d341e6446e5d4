//! HUD engine, the core of the telemetry runtime.
//!
//! `HudEngine` owns the hecs ECS world of mounted widgets, processes
//! commands, runs the per-frame systems and the notification heartbeat, and
//! produces `HudSnapshot`s. Completely headless with injected time,
//! enabling deterministic testing.

use std::collections::{HashMap, VecDeque};

use hecs::{Entity, World};

use overwatch_core::commands::HudCommand;
use overwatch_core::components::*;
use overwatch_core::config::HudConfig;
use overwatch_core::enums::{Easing, WidgetKind};
use overwatch_core::error::{ensure_finite, HudError, HudResult};
use overwatch_core::events::HudEvent;
use overwatch_core::state::HudSnapshot;
use overwatch_core::types::{GaugeRange, HudClock, ThresholdOverrides, Thresholds};
use overwatch_notify::NotificationScheduler;
use overwatch_telemetry::{SweepDetector, ThresholdCrossing, ThresholdMonitor, ValueAnimator};

use crate::systems;
use crate::world_setup;

/// The HUD engine. Owns the ECS world and all presentation state.
pub struct HudEngine {
    world: World,
    config: HudConfig,
    clock: HudClock,
    scheduler: NotificationScheduler,
    widgets: HashMap<String, Entity>,
    next_mount_order: u64,
    last_heartbeat_ms: u64,
    command_queue: VecDeque<HudCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<HudEvent>,
    rejections: Vec<String>,
}

impl HudEngine {
    /// Create an engine with a validated config.
    pub fn new(config: HudConfig) -> HudResult<Self> {
        config.validate()?;
        Ok(Self {
            world: World::new(),
            scheduler: NotificationScheduler::new(config.notifications)?,
            config,
            clock: HudClock::default(),
            widgets: HashMap::new(),
            next_mount_order: 0,
            last_heartbeat_ms: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            rejections: Vec::new(),
        })
    }

    /// Queue a command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: HudCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = HudCommand>) {
        self.command_queue.extend(commands);
    }

    /// Apply a command immediately at the current clock time.
    ///
    /// Errors are returned to the caller and leave prior state unchanged.
    /// Events produced here are delivered with the next snapshot.
    pub fn apply(&mut self, command: HudCommand) -> HudResult<()> {
        self.handle_command(command)
    }

    /// Advance to `now_ms`, run one frame and return the resulting snapshot.
    pub fn frame(&mut self, now_ms: u64) -> HudSnapshot {
        let dt_ms = self.clock.advance_to(now_ms);
        let now = self.clock.now_ms;

        self.process_commands();
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        systems::animation::run(&mut self.world, now, &mut self.events);
        systems::radar::run(&mut self.world, dt_ms, now, &mut self.events);

        let since_heartbeat = now.saturating_sub(self.last_heartbeat_ms);
        if since_heartbeat >= self.config.notifications.heartbeat_interval_ms {
            self.heartbeat(now);
        }

        let events = std::mem::take(&mut self.events);
        for event in &events {
            if let Some(cue) = event.cue() {
                log::debug!("cue {cue:?} for {event:?}");
            }
        }
        let rejections = std::mem::take(&mut self.rejections);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.clock,
            &self.scheduler,
            events,
            rejections,
        )
    }

    /// Tick every visible notification timer.
    ///
    /// All expirations due at `now_ms` are removed before the freed slots
    /// are refilled. `frame` calls this on the configured cadence.
    pub fn heartbeat(&mut self, now_ms: u64) {
        self.last_heartbeat_ms = now_ms;
        let events = self.scheduler.heartbeat(now_ms);
        self.events.extend(events);
    }

    /// Whether another frame would change anything visible.
    pub fn needs_frame(&self) -> bool {
        !self.command_queue.is_empty()
            || self.world.query::<&RadarScope>().iter().next().is_some()
            || systems::animation::any_animating(&self.world)
            || self.scheduler.active_timer_count() > 0
    }

    /// Change the visible-set capacity, re-selecting immediately.
    pub fn set_max_visible(&mut self, max_visible: usize) -> HudResult<()> {
        let events = self.scheduler.set_max_visible(max_visible, self.clock.now_ms)?;
        self.config.notifications.max_visible = max_visible;
        self.events.extend(events);
        Ok(())
    }

    /// Events produced since the last snapshot, without building one.
    pub fn take_events(&mut self) -> Vec<HudEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clock(&self) -> HudClock {
        self.clock
    }

    pub fn config(&self) -> &HudConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &NotificationScheduler {
        &self.scheduler
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn is_mounted(&self, widget_id: &str) -> bool {
        self.widgets.contains_key(widget_id)
    }

    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    /// Process all queued commands. Failures are logged and reported in
    /// the next snapshot.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(err) = self.handle_command(command) {
                log::warn!("rejected command: {err}");
                self.rejections.push(err.to_string());
            }
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: HudCommand) -> HudResult<()> {
        let now = self.clock.now_ms;
        match command {
            HudCommand::MountGauge {
                widget_id,
                kind,
                initial,
                range,
                thresholds,
                duration_ms,
                easing,
            } => self.mount_gauge(
                widget_id,
                kind,
                initial,
                range,
                thresholds.unwrap_or(self.config.thresholds),
                duration_ms.unwrap_or(self.config.animation.duration_ms),
                easing.unwrap_or(self.config.animation.easing),
            ),
            HudCommand::MountRadar {
                widget_id,
                sweep_rate_deg_per_sec,
            } => self.mount_radar(
                widget_id,
                sweep_rate_deg_per_sec.unwrap_or(self.config.radar.sweep_rate_deg_per_sec),
            ),
            HudCommand::Unmount { widget_id } => {
                let entity = self
                    .widgets
                    .remove(&widget_id)
                    .ok_or_else(|| HudError::UnknownWidget(widget_id.clone()))?;
                self.despawn_buffer.push(entity);
                log::info!("unmounted {widget_id}");
                Ok(())
            }
            HudCommand::SetValue { widget_id, value } => {
                let entity = self.entity_of(&widget_id)?;
                let (gauge, animator, monitor) = self
                    .world
                    .query_one_mut::<(&Gauge, &mut ValueAnimator, &mut ThresholdMonitor)>(entity)
                    .map_err(|_| not_a(&widget_id, "gauge"))?;
                animator.set_target(value, now)?;
                let crossing = monitor.evaluate(gauge.range.percent(value))?;
                self.push_crossing(&widget_id, crossing);
                Ok(())
            }
            HudCommand::SetThresholds {
                widget_id,
                thresholds,
            } => {
                let entity = self.entity_of(&widget_id)?;
                let monitor = self
                    .world
                    .query_one_mut::<&mut ThresholdMonitor>(entity)
                    .map_err(|_| not_a(&widget_id, "gauge"))?;
                let crossing = monitor.set_thresholds(thresholds)?;
                self.push_crossing(&widget_id, crossing);
                Ok(())
            }
            HudCommand::SetOverrides {
                widget_id,
                critical,
                warning,
            } => {
                let entity = self.entity_of(&widget_id)?;
                let monitor = self
                    .world
                    .query_one_mut::<&mut ThresholdMonitor>(entity)
                    .map_err(|_| not_a(&widget_id, "gauge"))?;
                let crossing = monitor.set_overrides(ThresholdOverrides { critical, warning });
                self.push_crossing(&widget_id, crossing);
                Ok(())
            }
            HudCommand::SetContacts {
                widget_id,
                contacts,
            } => {
                let entity = self.entity_of(&widget_id)?;
                for contact in &contacts {
                    contact.validate()?;
                }
                let list = self
                    .world
                    .query_one_mut::<&mut ContactList>(entity)
                    .map_err(|_| not_a(&widget_id, "radar"))?;
                list.contacts = contacts;
                Ok(())
            }
            HudCommand::SetSweepAngle {
                widget_id,
                angle_deg,
            } => {
                let entity = self.entity_of(&widget_id)?;
                let (contacts, detector) = self
                    .world
                    .query_one_mut::<(&ContactList, &mut SweepDetector)>(entity)
                    .map_err(|_| not_a(&widget_id, "radar"))?;
                let report = detector.set_angle(angle_deg, &contacts.contacts, now)?;
                systems::radar::push_report(&widget_id, &report, contacts, detector, &mut self.events);
                Ok(())
            }
            HudCommand::SetNotifications { records } => {
                let events = self.scheduler.reconcile(&records, now);
                self.events.extend(events);
                Ok(())
            }
            HudCommand::PauseNotification { id } => {
                self.scheduler.pause(&id, now);
                Ok(())
            }
            HudCommand::ResumeNotification { id } => {
                self.scheduler.resume(&id, now);
                Ok(())
            }
            HudCommand::PauseAllNotifications => {
                self.scheduler.pause_all(now);
                Ok(())
            }
            HudCommand::ResumeAllNotifications => {
                self.scheduler.resume_all(now);
                Ok(())
            }
            HudCommand::DismissNotification { id } => {
                let events = self.scheduler.dismiss(&id, now);
                self.events.extend(events);
                Ok(())
            }
            HudCommand::InvokeAction { id, action_id } => {
                let events = self.scheduler.invoke_action(&id, &action_id, now);
                self.events.extend(events);
                Ok(())
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn mount_gauge(
        &mut self,
        widget_id: String,
        kind: WidgetKind,
        initial: f64,
        range: GaugeRange,
        thresholds: Thresholds,
        duration_ms: i64,
        easing: Easing,
    ) -> HudResult<()> {
        self.ensure_unmounted(&widget_id)?;
        if kind == WidgetKind::Radar {
            return Err(HudError::invalid(format!(
                "{widget_id}: radar widgets are mounted with MountRadar"
            )));
        }
        range.validate()?;
        let animator = ValueAnimator::new(initial, duration_ms, easing)?;
        let mut monitor = ThresholdMonitor::new(thresholds)?;
        let crossing = monitor.evaluate(range.percent(initial))?;

        let order = self.next_order();
        let entity = world_setup::spawn_gauge(
            &mut self.world,
            &widget_id,
            Gauge { kind, range },
            animator,
            monitor,
            order,
        );
        self.widgets.insert(widget_id.clone(), entity);
        log::info!("mounted {kind:?} {widget_id}");
        self.push_crossing(&widget_id, crossing);
        Ok(())
    }

    fn mount_radar(&mut self, widget_id: String, sweep_rate_deg_per_sec: f64) -> HudResult<()> {
        self.ensure_unmounted(&widget_id)?;
        let rate = ensure_finite("sweep_rate_deg_per_sec", sweep_rate_deg_per_sec)?;
        if rate <= 0.0 {
            return Err(HudError::invalid(format!(
                "sweep_rate_deg_per_sec must be positive, got {rate}"
            )));
        }
        let detector = SweepDetector::new(self.config.radar.half_width_deg)?;

        let order = self.next_order();
        let entity = world_setup::spawn_radar(
            &mut self.world,
            &widget_id,
            RadarScope {
                sweep_rate_deg_per_sec: rate,
            },
            detector,
            order,
        );
        self.widgets.insert(widget_id.clone(), entity);
        log::info!("mounted radar {widget_id}");
        Ok(())
    }

    fn ensure_unmounted(&self, widget_id: &str) -> HudResult<()> {
        if self.widgets.contains_key(widget_id) {
            return Err(HudError::DuplicateWidget(widget_id.to_string()));
        }
        Ok(())
    }

    fn entity_of(&self, widget_id: &str) -> HudResult<Entity> {
        self.widgets
            .get(widget_id)
            .copied()
            .ok_or_else(|| HudError::UnknownWidget(widget_id.to_string()))
    }

    fn next_order(&mut self) -> MountOrder {
        let order = MountOrder(self.next_mount_order);
        self.next_mount_order += 1;
        order
    }

    fn push_crossing(&mut self, widget_id: &str, crossing: Option<ThresholdCrossing>) {
        if let Some(crossing) = crossing {
            self.events.push(HudEvent::ThresholdCrossed {
                widget_id: widget_id.to_string(),
                previous: crossing.previous,
                category: crossing.category,
                value: crossing.value,
            });
        }
    }
}

fn not_a(widget_id: &str, kind: &str) -> HudError {
    HudError::invalid(format!("{widget_id} is not a {kind}"))
}
