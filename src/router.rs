use tracing::{info, warn};

use crate::models::{payload::Payload, route::RouteAction};

#[derive(Debug, Clone, Copy)]
enum Target {
    Complaint,
    Order,
    Logout,
}

/// Known `type` values and where each one leads. Adding a notification
/// type is a table entry, not a new match arm.
const DISPATCH_TABLE: &[(&str, Target)] = &[
    ("complaint_replay", Target::Complaint),
    ("trainer_changed", Target::Order),
    ("end_order_by_package_duration", Target::Order),
    ("change_order_session_status", Target::Order),
    ("block", Target::Logout),
];

/// Classifies a decoded payload into the action the application should
/// take. Pure function of its input: no error leaves this boundary, a
/// missing or malformed required field downgrades the event to
/// [`RouteAction::Unhandled`].
pub fn route(payload: &Payload) -> RouteAction {
    let Some(kind) = payload.get("type") else {
        info!("notification payload carries no type field");
        return RouteAction::Unhandled(None);
    };

    let Some(target) = DISPATCH_TABLE
        .iter()
        .find(|(name, _)| *name == kind)
        .map(|(_, target)| *target)
    else {
        info!(notification_type = %kind, "unhandled notification type");
        return RouteAction::Unhandled(Some(kind.to_string()));
    };

    match target {
        Target::Logout => RouteAction::Logout,
        Target::Complaint => with_identifier(payload, kind, "complaint_id", RouteAction::ViewComplaint),
        Target::Order => with_identifier(payload, kind, "order_id", RouteAction::ViewOrder),
    }
}

fn with_identifier(
    payload: &Payload,
    kind: &str,
    field: &'static str,
    make: fn(i64) -> RouteAction,
) -> RouteAction {
    let Some(raw) = payload.get(field) else {
        warn!(notification_type = %kind, field, "required identifier missing from payload");
        return RouteAction::Unhandled(Some(kind.to_string()));
    };

    match raw.parse::<i64>() {
        Ok(id) => make(id),
        Err(_) => {
            warn!(
                notification_type = %kind,
                field,
                value = %raw,
                "required identifier is not numeric"
            );
            RouteAction::Unhandled(Some(kind.to_string()))
        }
    }
}
