//! Fire-and-forget event logging.
//!
//! [`EventLogger::log_event`] builds a [`LogEvent`] and pushes it onto an
//! unbounded channel; it never waits. A delivery task drains the channel and
//! spawns one POST per event. Delivery failures go to the diagnostic log and
//! nowhere else. Nothing is retried.

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::agent::browser_name;
use crate::error::{StorefrontError, StorefrontResult};
use crate::models::{Action, EventDetails, LogEvent};
use crate::traits::{json_headers, HttpClient};

/// Receiving end of the outbound event channel.
pub type EventReceiver = mpsc::UnboundedReceiver<LogEvent>;

/// Builds interaction events and hands them off without acknowledgment.
#[derive(Debug, Clone)]
pub struct EventLogger {
    tx: mpsc::UnboundedSender<LogEvent>,
    agent: &'static str,
}

impl EventLogger {
    /// Logger plus the receiver its events arrive on.
    pub fn channel(user_agent: &str) -> (Self, EventReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        let logger = Self {
            tx,
            agent: browser_name(user_agent),
        };
        (logger, rx)
    }

    /// Logger wired to a delivery task posting to `endpoint`.
    pub fn spawn(
        user_agent: &str,
        http: Arc<dyn HttpClient>,
        endpoint: impl Into<String>,
    ) -> (Self, JoinHandle<()>) {
        let (logger, rx) = Self::channel(user_agent);
        let handle = spawn_delivery(http, endpoint.into(), rx);
        (logger, handle)
    }

    /// Detected client name sent as `agent`.
    pub fn agent(&self) -> &'static str {
        self.agent
    }

    /// Emit an event. Returns immediately.
    pub fn log_event(&self, action: Action, details: EventDetails, route: &str) {
        let event = LogEvent {
            action,
            details,
            route: route.to_string(),
            agent: self.agent.to_string(),
        };
        tracing::debug!("event {}", event.to_json());
        if self.tx.send(event).is_err() {
            tracing::warn!("Event delivery task is gone; dropped {} event", action);
        }
    }
}

/// Drain `rx`, posting each event on its own task.
pub fn spawn_delivery(
    http: Arc<dyn HttpClient>,
    endpoint: String,
    mut rx: EventReceiver,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            let http = Arc::clone(&http);
            let endpoint = endpoint.clone();
            tokio::spawn(async move {
                if let Err(err) = deliver(http.as_ref(), &endpoint, &event).await {
                    tracing::warn!(code = err.error_code(), "Error logging event: {}", err);
                }
            });
        }
        tracing::debug!("Event channel closed; delivery task exiting");
    })
}

/// POST one event. The response status and body are not checked.
pub async fn deliver(
    http: &dyn HttpClient,
    endpoint: &str,
    event: &LogEvent,
) -> StorefrontResult<()> {
    let body = event.to_json().to_string();
    let response = http
        .post(endpoint, &body, &json_headers())
        .await
        .map_err(|err| StorefrontError::Logging {
            endpoint: endpoint.to_string(),
            message: err.to_string(),
        })?;
    if !response.is_success() {
        tracing::debug!(
            "Logging endpoint answered {} for {} event",
            response.status,
            event.action
        );
    }
    Ok(())
}
