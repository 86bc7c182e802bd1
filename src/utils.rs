use std::sync::Arc;

use tokio::sync::mpsc::Receiver;
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

use crate::{
    clients::{account::AccountGateway, display::LocalDisplay, navigation::Navigator},
    codec,
    config::Config,
    models::{
        event::{NotificationEvent, RemoteMessage},
        health::DispatchStats,
        payload::Payload,
        route::{RouteAction, ScreenKind},
    },
    router,
};

/// The application surfaces the router drives, injected rather than
/// looked up, so every one of them can be swapped in tests.
pub struct Collaborators {
    pub display: Arc<dyn LocalDisplay>,
    pub navigator: Arc<dyn Navigator>,
    pub account: Arc<dyn AccountGateway>,
}

/// Drains the transport's delivery queue until every producer handle is
/// dropped. Events are handled one at a time and independently; a failing
/// collaborator never stops the loop.
pub async fn run_dispatcher(
    mut events: Receiver<NotificationEvent>,
    collaborators: Collaborators,
    config: Config,
    stats: Arc<DispatchStats>,
) {
    info!("notification dispatcher started");

    while let Some(event) = events.recv().await {
        process_event(event, &collaborators, &config, &stats);
    }

    info!("delivery queue closed, dispatcher stopping");
}

pub fn process_event(
    event: NotificationEvent,
    collaborators: &Collaborators,
    config: &Config,
    stats: &DispatchStats,
) {
    let event_id = Uuid::new_v4();
    let span = info_span!("notification_event", %event_id);
    let _guard = span.enter();

    stats.record_received();

    match event {
        NotificationEvent::Foreground(message) => {
            process_foreground(&message, collaborators, config);
        }
        NotificationEvent::Background(message) => process_background(&message),
        NotificationEvent::Opened(message) => {
            dispatch_payload(&message.data, collaborators, stats);
        }
        NotificationEvent::LocalTap(raw) => {
            debug!(raw = %raw, "decoding tapped notification payload");
            let payload = codec::decode(&raw);
            dispatch_payload(&payload, collaborators, stats);
        }
    }
}

/// Foreground deliveries never route; they show the notification so the
/// user can tap it later. The one exception is the block directive, which
/// tears the account down immediately on receipt.
fn process_foreground(message: &RemoteMessage, collaborators: &Collaborators, config: &Config) {
    if message.data.get("type") == Some("block") {
        warn!("block directive delivered in foreground, tearing down account");
        if let Err(e) = collaborators.account.logout_and_delete_account() {
            warn!(error = %e, "account teardown failed");
        }
    }

    match (&message.title, &message.body) {
        (Some(title), Some(body)) => {
            let payload = codec::encode(&message.data);
            if let Err(e) =
                collaborators
                    .display
                    .show(config.display_notification_id, title, body, &payload)
            {
                warn!(error = %e, "local notification display failed");
            }
        }
        _ => debug!("foreground delivery has no display fields, nothing to show"),
    }
}

fn process_background(message: &RemoteMessage) {
    // Constrained execution window; routing waits for the user's tap.
    debug!(
        notification_type = message.data.get("type").unwrap_or("-"),
        "background delivery received"
    );
}

fn dispatch_payload(payload: &Payload, collaborators: &Collaborators, stats: &DispatchStats) {
    let action = router::route(payload);

    match action {
        RouteAction::Unhandled(_) => stats.record_unhandled(),
        _ => stats.record_routed(),
    }

    execute_action(action, collaborators);
}

/// Executes a routed action against the collaborators. Failures degrade
/// to a logged no-op; nothing propagates past this point.
pub fn execute_action(action: RouteAction, collaborators: &Collaborators) {
    match action {
        RouteAction::ViewComplaint(id) => {
            if let Err(e) = collaborators.navigator.navigate_to(ScreenKind::Complaint, id) {
                warn!(error = %e, complaint_id = id, "navigation failed");
            }
        }
        RouteAction::ViewOrder(id) => {
            if let Err(e) = collaborators.navigator.navigate_to(ScreenKind::Order, id) {
                warn!(error = %e, order_id = id, "navigation failed");
            }
        }
        RouteAction::Logout => {
            if let Err(e) = collaborators.account.logout_and_delete_account() {
                warn!(error = %e, "account teardown failed");
            }
        }
        RouteAction::Unhandled(kind) => {
            info!(notification_type = ?kind, "no action for notification");
        }
    }
}
