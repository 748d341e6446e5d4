//! Radar sweep / ping detection.
//!
//! The beam rotates counter-clockwise in degrees. A contact is inside the
//! beam when the circular distance between its bearing and the beam angle
//! is within the half-width. Detection is edge-triggered: a contact pings
//! once on entry and is eligible again only after the beam has left it.

use std::collections::HashMap;

use overwatch_core::constants::FULL_CIRCLE_DEG;
use overwatch_core::error::{ensure_finite, HudError, HudResult};
use overwatch_core::types::{circular_distance_deg, normalize_degrees, RadarContact};

/// Per-contact detection state, keyed by contact id.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContactState {
    /// Beam is over the contact right now.
    pub inside: bool,
    pub last_detected_angle: Option<f64>,
    pub last_detected_ms: Option<u64>,
}

impl ContactState {
    /// Time since the last ping.
    pub fn ping_age_ms(&self, now_ms: u64) -> Option<u64> {
        self.last_detected_ms.map(|at| now_ms.saturating_sub(at))
    }
}

/// Outcome of one beam step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepReport {
    /// Contacts that entered the beam this step, in input order.
    pub detected: Vec<String>,
    /// The beam wrapped past 0 degrees during this step.
    pub sweep_complete: bool,
}

/// Beam travel during one `advance` step.
#[derive(Debug, Clone, Copy)]
struct SweptArc {
    from_deg: f64,
    delta_deg: f64,
}

impl SweptArc {
    /// Whether the window touched `bearing` anywhere between the start and
    /// end of the step, i.e. `bearing` lies in `[from - w, from + delta + w]`.
    fn covers(&self, bearing: f64, half_width_deg: f64) -> bool {
        let span = self.delta_deg + 2.0 * half_width_deg;
        if span >= FULL_CIRCLE_DEG {
            return true;
        }
        normalize_degrees(bearing - (self.from_deg - half_width_deg)) <= span
    }
}

#[derive(Debug, Clone)]
pub struct SweepDetector {
    half_width_deg: f64,
    angle_deg: f64,
    rotations: u64,
    states: HashMap<String, ContactState>,
}

impl SweepDetector {
    pub fn new(half_width_deg: f64) -> HudResult<Self> {
        let half_width_deg = ensure_finite("half_width_deg", half_width_deg)?;
        if !(0.0..=180.0).contains(&half_width_deg) {
            return Err(HudError::invalid(format!(
                "half_width_deg must be within [0, 180], got {half_width_deg}"
            )));
        }
        Ok(Self {
            half_width_deg,
            angle_deg: 0.0,
            rotations: 0,
            states: HashMap::new(),
        })
    }

    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    pub fn half_width_deg(&self) -> f64 {
        self.half_width_deg
    }

    /// Completed rotations.
    pub fn rotations(&self) -> u64 {
        self.rotations
    }

    pub fn state(&self, contact_id: &str) -> Option<&ContactState> {
        self.states.get(contact_id)
    }

    /// Rotate the beam forward by `delta_deg` and scan `contacts`.
    ///
    /// Every contact the window passed over during the step is detected,
    /// so a coarse step never skips a bearing.
    pub fn advance(
        &mut self,
        delta_deg: f64,
        contacts: &[RadarContact],
        now_ms: u64,
    ) -> HudResult<SweepReport> {
        let delta_deg = ensure_finite("delta_deg", delta_deg)?;
        if delta_deg < 0.0 {
            return Err(HudError::invalid(format!(
                "beam only rotates forward, got delta {delta_deg}"
            )));
        }
        let swept = SweptArc {
            from_deg: self.angle_deg,
            delta_deg,
        };
        let unwrapped = self.angle_deg + delta_deg;
        let wraps = (unwrapped / FULL_CIRCLE_DEG).floor() as u64;
        self.angle_deg = normalize_degrees(unwrapped);
        Ok(self.finish_step(wraps, contacts, now_ms, Some(swept)))
    }

    /// Place the beam at an absolute angle and scan `contacts`.
    ///
    /// The beam is assumed to move forward, so a smaller angle than the
    /// previous one is read as a wrap past 0.
    pub fn set_angle(
        &mut self,
        angle_deg: f64,
        contacts: &[RadarContact],
        now_ms: u64,
    ) -> HudResult<SweepReport> {
        let angle_deg = normalize_degrees(ensure_finite("angle_deg", angle_deg)?);
        let wraps = u64::from(angle_deg < self.angle_deg);
        self.angle_deg = angle_deg;
        Ok(self.finish_step(wraps, contacts, now_ms, None))
    }

    /// Scan without moving the beam, e.g. after the contact list changed.
    pub fn rescan(&mut self, contacts: &[RadarContact], now_ms: u64) -> Vec<String> {
        self.scan(contacts, now_ms, None)
    }

    fn finish_step(
        &mut self,
        wraps: u64,
        contacts: &[RadarContact],
        now_ms: u64,
        swept: Option<SweptArc>,
    ) -> SweepReport {
        if wraps > 0 {
            self.rotations += wraps;
            log::debug!("sweep complete, rotation {}", self.rotations);
        }
        SweepReport {
            detected: self.scan(contacts, now_ms, swept),
            sweep_complete: wraps > 0,
        }
    }

    fn scan(
        &mut self,
        contacts: &[RadarContact],
        now_ms: u64,
        swept: Option<SweptArc>,
    ) -> Vec<String> {
        // Forget contacts the caller no longer supplies.
        self.states
            .retain(|id, _| contacts.iter().any(|contact| &contact.id == id));

        let mut detected = Vec::new();
        for contact in contacts {
            let bearing = contact.bearing_deg();
            let inside = circular_distance_deg(self.angle_deg, bearing) <= self.half_width_deg;
            let passed = swept.is_some_and(|arc| arc.covers(bearing, self.half_width_deg));
            let state = self.states.entry(contact.id.clone()).or_default();
            if (inside || passed) && !state.inside {
                state.last_detected_angle = Some(self.angle_deg);
                state.last_detected_ms = Some(now_ms);
                log::debug!("contact {} detected at {:.1} deg", contact.id, self.angle_deg);
                detected.push(contact.id.clone());
            }
            state.inside = inside;
        }
        detected
    }
}
