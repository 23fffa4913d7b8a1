//! Change notifications for the order form
//!
//! A [`FormSession`](crate::client::FormSession) publishes one event after
//! every mutation, before the next mutation is processed. Anything that
//! renders the form (or just wants to log it) subscribes to the bus.
//!
//! ```text
//! FormSession::set() ──▶ EventBus::publish() ──▶ broadcast channel ──▶ subscribers
//! FormSession::submit() ┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! let bus = EventBus::new(64);
//! let mut rx = bus.subscribe();
//!
//! let mut session = FormSession::new().with_event_bus(bus);
//! session.set(OrderField::City, "Toronto")?;
//!
//! if let Ok(envelope) = rx.recv().await {
//!     println!("{:?}", envelope.event);
//! }
//! ```

use super::field::{FieldValue, OrderField};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

/// Where a submission currently stands, as reported in events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    Idle,
    Submitting,
    Confirmed,
    Failed,
}

/// Events emitted by a form session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormEvent {
    /// A field was assigned
    FieldChanged {
        session_id: Uuid,
        field: OrderField,
        value: FieldValue,
        is_valid: bool,
    },
    /// The submission moved to a new phase
    SubmissionChanged {
        session_id: Uuid,
        phase: SubmissionPhase,
    },
    /// The session was reset with a fresh order
    SessionStarted { session_id: Uuid },
}

impl FormEvent {
    pub fn session_id(&self) -> Uuid {
        match self {
            FormEvent::FieldChanged { session_id, .. }
            | FormEvent::SubmissionChanged { session_id, .. }
            | FormEvent::SessionStarted { session_id } => *session_id,
        }
    }

    pub fn event_kind(&self) -> &str {
        match self {
            FormEvent::FieldChanged { .. } => "field_changed",
            FormEvent::SubmissionChanged { .. } => "submission_changed",
            FormEvent::SessionStarted { .. } => "session_started",
        }
    }
}

/// Envelope wrapping a form event with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique event ID
    pub id: Uuid,
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
    /// The actual event
    pub event: FormEvent,
}

impl EventEnvelope {
    pub fn new(event: FormEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            event,
        }
    }
}

/// Broadcast-based event bus
///
/// Cheap to clone; all clones feed the same channel.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<EventEnvelope>,
}

impl EventBus {
    /// Create a new EventBus with the given channel capacity
    ///
    /// Receivers that fall more than `capacity` events behind get a
    /// `Lagged` error on their next `recv()`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all subscribers
    ///
    /// Never fails. Returns the number of receivers reached.
    pub fn publish(&self, event: FormEvent) -> usize {
        let envelope = EventEnvelope::new(event);
        // send() returns Err only if there are no receivers
        self.sender.send(envelope).unwrap_or(0)
    }

    /// Subscribe to events published from now on
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.sender.subscribe()
    }

    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
