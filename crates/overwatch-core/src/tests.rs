#[cfg(test)]
mod tests {
    use crate::commands::HudCommand;
    use crate::config::HudConfig;
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::{ensure_duration, ensure_finite, HudError};
    use crate::events::HudEvent;
    use crate::types::*;

    // ---- Config ----

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = HudConfig::from_json_str("{}").unwrap();
        assert_eq!(config, HudConfig::default());
        assert_eq!(config.animation.duration_ms, 300);
        assert_eq!(config.animation.easing, Easing::EaseOut);
        assert_eq!(config.thresholds, Thresholds::new(15.0, 30.0, 80.0));
        assert_eq!(config.notifications.max_visible, 5);
        assert_eq!(config.notifications.default_duration_ms, 5000);
        assert!(config.notifications.pause_on_hover);
        assert_eq!(config.radar.half_width_deg, 10.0);
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let json = r#"{ "notifications": { "max_visible": 3 }, "animation": { "easing": "linear" } }"#;
        let config = HudConfig::from_json_str(json).unwrap();
        assert_eq!(config.notifications.max_visible, 3);
        assert_eq!(
            config.notifications.heartbeat_interval_ms,
            DEFAULT_HEARTBEAT_INTERVAL_MS
        );
        assert_eq!(config.animation.easing, Easing::Linear);
        assert_eq!(config.animation.duration_ms, 300);
    }

    #[test]
    fn test_config_rejects_negative_animation_duration() {
        let err = HudConfig::from_json_str(r#"{ "animation": { "duration_ms": -5 } }"#)
            .unwrap_err();
        assert!(matches!(err, HudError::InvalidConfig(_)), "got {err:?}");
    }

    #[test]
    fn test_config_rejects_zero_max_visible() {
        let err = HudConfig::from_json_str(r#"{ "notifications": { "max_visible": 0 } }"#)
            .unwrap_err();
        assert!(matches!(err, HudError::InvalidConfig(_)));
    }

    #[test]
    fn test_config_malformed_json_is_load_error() {
        let err = HudConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, HudError::ConfigLoad(_)));
    }

    #[test]
    fn test_config_missing_file_is_load_error() {
        let err = HudConfig::load("/nonexistent/overwatch.json").unwrap_err();
        assert!(matches!(err, HudError::ConfigLoad(_)));
    }

    // ---- Validation helpers ----

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("v", 1.5), Ok(1.5));
        assert!(ensure_finite("v", f64::NAN).is_err());
        assert!(ensure_finite("v", f64::INFINITY).is_err());
        assert!(ensure_finite("v", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_ensure_duration() {
        assert_eq!(ensure_duration("d", 0), Ok(0));
        assert_eq!(ensure_duration("d", 250), Ok(250));
        assert!(ensure_duration("d", -1).is_err());
    }

    #[test]
    fn test_thresholds_validation() {
        assert!(Thresholds::default().validate().is_ok());
        assert!(Thresholds::new(-1.0, 30.0, 80.0).validate().is_err());
        assert!(Thresholds::new(15.0, 130.0, 80.0).validate().is_err());
        assert!(Thresholds::new(15.0, 30.0, f64::NAN).validate().is_err());
        // Reversed critical/warning is accepted (only logged).
        assert!(Thresholds::new(50.0, 20.0, 80.0).validate().is_ok());
    }

    #[test]
    fn test_gauge_range_percent() {
        let range = GaugeRange::new(0.0, 200.0);
        assert!(range.validate().is_ok());
        assert_eq!(range.percent(50.0), 25.0);
        assert_eq!(range.percent(-10.0), 0.0);
        assert_eq!(range.percent(500.0), 100.0);
        assert!(GaugeRange::new(5.0, 5.0).validate().is_err());
        assert!(GaugeRange::new(10.0, 0.0).validate().is_err());
    }

    // ---- Radar geometry ----

    #[test]
    fn test_contact_bearing() {
        let east = RadarContact::new("e", 1.0, 0.0);
        let north = RadarContact::new("n", 0.0, 1.0);
        let west = RadarContact::new("w", -1.0, 0.0);
        let south = RadarContact::new("s", 0.0, -1.0);
        assert!((east.bearing_deg() - 0.0).abs() < 1e-9);
        assert!((north.bearing_deg() - 90.0).abs() < 1e-9);
        assert!((west.bearing_deg() - 180.0).abs() < 1e-9);
        assert!((south.bearing_deg() - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_contact_validation() {
        assert!(RadarContact::new("a", 0.5, -0.5).validate().is_ok());
        assert!(RadarContact::new("a", 1.5, 0.0).validate().is_err());
        assert!(RadarContact::new("a", 0.0, f64::NAN).validate().is_err());
        assert!(RadarContact::new("a", 0.0, 0.0)
            .with_strength(1.2)
            .validate()
            .is_err());
        assert!(RadarContact::new("a", 0.0, 0.0)
            .with_strength(0.4)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_circular_distance_wraps() {
        assert!((circular_distance_deg(355.0, 5.0) - 10.0).abs() < 1e-9);
        assert!((circular_distance_deg(5.0, 355.0) - 10.0).abs() < 1e-9);
        assert!((circular_distance_deg(90.0, 270.0) - 180.0).abs() < 1e-9);
        assert!((circular_distance_deg(-10.0, 10.0) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        let tiny = normalize_degrees(-1e-20);
        assert!((0.0..360.0).contains(&tiny));
    }

    // ---- Records ----

    #[test]
    fn test_record_effective_duration() {
        let base = NotificationRecord::new("n", NotificationCategory::Info);
        assert_eq!(base.effective_duration_ms(5000), 5000);
        assert_eq!(base.clone().persistent().effective_duration_ms(5000), 0);
        assert_eq!(base.clone().with_duration_ms(-200).effective_duration_ms(5000), 0);
        assert_eq!(base.with_duration_ms(1200).effective_duration_ms(5000), 1200);
    }

    #[test]
    fn test_record_deserializes_with_defaults() {
        let record: NotificationRecord = serde_json::from_str(r#"{ "id": "n1" }"#).unwrap();
        assert_eq!(record.id, "n1");
        assert_eq!(record.category, NotificationCategory::Info);
        assert_eq!(record.priority, DEFAULT_NOTIFICATION_PRIORITY);
        assert_eq!(record.duration_ms, None);
        assert!(record.actions.is_empty());
    }

    #[test]
    fn test_command_uses_type_tag() {
        let json = r#"{ "type": "SetValue", "widget_id": "hull", "value": 42.0 }"#;
        let cmd: HudCommand = serde_json::from_str(json).unwrap();
        assert!(matches!(
            cmd,
            HudCommand::SetValue { ref widget_id, value } if widget_id == "hull" && value == 42.0
        ));
    }

    // ---- Events ----

    #[test]
    fn test_event_cues() {
        let crossed = |category| HudEvent::ThresholdCrossed {
            widget_id: "g".into(),
            previous: StatusCategory::Normal,
            category,
            value: 1.0,
        };
        assert_eq!(crossed(StatusCategory::Critical).cue(), Some(AudioCue::Alarm));
        assert_eq!(crossed(StatusCategory::Warning).cue(), Some(AudioCue::Alert));
        assert_eq!(crossed(StatusCategory::Normal).cue(), None);

        let added = HudEvent::NotificationAdded {
            record: NotificationRecord::new("n", NotificationCategory::Success),
        };
        assert_eq!(added.cue(), Some(AudioCue::Chime));

        let removed = HudEvent::NotificationRemoved {
            id: "n".into(),
            reason: RemovalReason::Expired,
        };
        assert_eq!(removed.cue(), None);
    }

    // ---- Clock ----

    #[test]
    fn test_clock_advance() {
        let mut clock = HudClock::default();
        assert_eq!(clock.advance_to(0), 0);
        assert_eq!(clock.advance_to(16), 16);
        assert_eq!(clock.advance_to(33), 17);
        assert_eq!(clock.frame, 3);
        // A stale timestamp does not move time backwards.
        assert_eq!(clock.advance_to(20), 0);
        assert_eq!(clock.now_ms, 33);
        assert_eq!(clock.frame, 4);
    }

    #[test]
    fn test_clock_first_frame_sets_origin() {
        let mut clock = HudClock::default();
        let epoch = 1_700_000_000_000;
        assert_eq!(clock.advance_to(epoch), 0);
        assert_eq!(clock.origin_ms, Some(epoch));
        assert_eq!(clock.now_ms, 0);
        assert_eq!(clock.advance_to(epoch + 250), 250);
        assert_eq!(clock.now_ms, 250);
        // Host time before the origin clamps to it.
        assert_eq!(clock.advance_to(epoch - 5_000), 0);
        assert_eq!(clock.now_ms, 250);
    }
}
