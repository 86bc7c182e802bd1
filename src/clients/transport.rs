use anyhow::{Error, Result, anyhow};
use tokio::sync::mpsc::{self, Receiver, Sender};
use tracing::info;
use uuid::Uuid;

use crate::models::event::{NotificationEvent, RemoteMessage};

/// In-process delivery queue standing in for the platform push SDK. The
/// queue itself is opaque to the dispatcher, which only ever sees the
/// receiving end.
pub struct ChannelTransport {
    token: String,
    sender: Sender<NotificationEvent>,
    receiver: Option<Receiver<NotificationEvent>>,
}

impl ChannelTransport {
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = mpsc::channel(capacity);
        let token = Uuid::new_v4().to_string();

        info!("push transport registered");

        Self {
            token,
            sender,
            receiver: Some(receiver),
        }
    }

    /// Registration token identifying this device to the sender side.
    pub fn request_token(&self) -> String {
        self.token.clone()
    }

    pub fn handle(&self) -> TransportHandle {
        TransportHandle {
            sender: self.sender.clone(),
        }
    }

    /// Hands the event stream to the dispatcher. Single consumer: the
    /// second call returns `None`.
    pub fn take_events(&mut self) -> Option<Receiver<NotificationEvent>> {
        self.receiver.take()
    }
}

/// Producer side of the delivery queue, one helper per delivery path the
/// platform SDK exposes.
#[derive(Clone)]
pub struct TransportHandle {
    sender: Sender<NotificationEvent>,
}

impl TransportHandle {
    pub async fn deliver_foreground(&self, message: RemoteMessage) -> Result<(), Error> {
        self.send(NotificationEvent::Foreground(message)).await
    }

    pub async fn deliver_background(&self, message: RemoteMessage) -> Result<(), Error> {
        self.send(NotificationEvent::Background(message)).await
    }

    pub async fn deliver_opened(&self, message: RemoteMessage) -> Result<(), Error> {
        self.send(NotificationEvent::Opened(message)).await
    }

    pub async fn deliver_foreground_json(&self, raw: &str) -> Result<(), Error> {
        self.deliver_foreground(RemoteMessage::from_json(raw)?).await
    }

    pub async fn deliver_background_json(&self, raw: &str) -> Result<(), Error> {
        self.deliver_background(RemoteMessage::from_json(raw)?).await
    }

    pub async fn deliver_opened_json(&self, raw: &str) -> Result<(), Error> {
        self.deliver_opened(RemoteMessage::from_json(raw)?).await
    }

    /// Tap on a locally displayed notification; carries only the payload
    /// string the notification was shown with.
    pub async fn deliver_local_tap(&self, payload: impl Into<String>) -> Result<(), Error> {
        self.send(NotificationEvent::LocalTap(payload.into())).await
    }

    async fn send(&self, event: NotificationEvent) -> Result<(), Error> {
        self.sender
            .send(event)
            .await
            .map_err(|_| anyhow!("delivery queue closed"))
    }
}
