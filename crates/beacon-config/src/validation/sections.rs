//! Validation for the presence, notifications, and logging sections.

use crate::schema::BeaconConfig;

use super::helpers::{validate_non_empty, validate_range};

/// Validate presence constraints.
pub(crate) fn validate_presence(errors: &mut Vec<String>, config: &BeaconConfig) {
    let presence = &config.presence;
    if !presence.enabled {
        return;
    }
    if presence.client_id <= 0 {
        errors.push(format!(
            "presence.client_id = {} must be positive",
            presence.client_id
        ));
    }
    validate_range(
        errors,
        "presence.publish_interval_ms",
        presence.publish_interval_ms,
        1000,
        60_000,
    );
    validate_range(
        errors,
        "presence.handshake_timeout_secs",
        presence.handshake_timeout_secs,
        1,
        60,
    );
    validate_non_empty(errors, "presence.app_name", &presence.app_name);
}

/// Validate notification bridge constraints.
pub(crate) fn validate_notifications(errors: &mut Vec<String>, config: &BeaconConfig) {
    if !config.notifications.enabled {
        return;
    }
    validate_non_empty(
        errors,
        "notifications.sender_id",
        &config.notifications.sender_id,
    );
}

/// Validate logging constraints.
pub(crate) fn validate_logging(errors: &mut Vec<String>, config: &BeaconConfig) {
    validate_range(errors, "logging.keep_days", config.logging.keep_days, 1, 90);
}
