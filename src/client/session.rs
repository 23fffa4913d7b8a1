//! Form session: one order, its derived presentation, one submission

use super::submission::place_order;
use super::transport::OrderTransport;
use crate::core::error::{SubmissionError, ValidationError};
use crate::core::events::{EventBus, FormEvent, SubmissionPhase};
use crate::core::field::{FieldValue, OrderField};
use crate::core::options::CatalogOptions;
use crate::core::order::Order;
use crate::core::validation::{check_selection, first_missing_address};
use uuid::Uuid;

/// Submission state of a session
///
/// `Idle → Submitting → {Confirmed, Failed}`. Both terminal states stay put
/// until [`FormSession::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Confirmed { message: String },
    Failed { code: &'static str, reason: String },
}

impl SubmissionState {
    pub fn phase(&self) -> SubmissionPhase {
        match self {
            SubmissionState::Idle => SubmissionPhase::Idle,
            SubmissionState::Submitting => SubmissionPhase::Submitting,
            SubmissionState::Confirmed { .. } => SubmissionPhase::Confirmed,
            SubmissionState::Failed { .. } => SubmissionPhase::Failed,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SubmissionState::Confirmed { .. } | SubmissionState::Failed { .. }
        )
    }
}

/// What the form should currently show, derived after every edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPresentation {
    /// Hair length and hypoallergenic controls are visible
    pub show_special_options: bool,
    /// The place-order action is enabled
    pub submit_enabled: bool,
    /// Set once the echoed order was confirmed
    pub confirmation: Option<String>,
}

/// A single form session
///
/// `submit` borrows the session mutably, so two submissions of the same
/// session can never overlap.
#[derive(Debug)]
pub struct FormSession {
    id: Uuid,
    order: Order,
    options: CatalogOptions,
    state: SubmissionState,
    event_bus: Option<EventBus>,
}

impl FormSession {
    pub fn new() -> Self {
        Self::with_options(*CatalogOptions::standard())
    }

    pub fn with_options(options: CatalogOptions) -> Self {
        Self {
            id: Uuid::new_v4(),
            order: Order::new(),
            options,
            state: SubmissionState::Idle,
            event_bus: None,
        }
    }

    /// Publish change events to `bus`
    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.event_bus = Some(bus);
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn options(&self) -> &CatalogOptions {
        &self.options
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Assign a field and return the presentation derived afterwards
    ///
    /// Indices must address their option list and the age must be within
    /// [`AGE_RANGE`](crate::core::validation::AGE_RANGE); rejected values
    /// leave the order untouched and publish nothing.
    pub fn set(
        &mut self,
        field: OrderField,
        value: impl Into<FieldValue>,
    ) -> Result<FormPresentation, ValidationError> {
        let value = value.into();
        check_selection(field, &value, &self.options)?;
        self.order.set_field(field, value.clone())?;

        self.publish(FormEvent::FieldChanged {
            session_id: self.id,
            field,
            value,
            is_valid: self.order.is_valid(),
        });

        Ok(self.presentation())
    }

    pub fn presentation(&self) -> FormPresentation {
        FormPresentation {
            show_special_options: self.order.special_request,
            submit_enabled: self.can_submit(),
            confirmation: match &self.state {
                SubmissionState::Confirmed { message } => Some(message.clone()),
                _ => None,
            },
        }
    }

    pub fn can_submit(&self) -> bool {
        self.order.is_valid() && self.state == SubmissionState::Idle
    }

    /// Move to `Submitting` and hand out the order to send
    ///
    /// Use together with [`apply_outcome`](Self::apply_outcome) when the
    /// exchange runs on a separate task.
    pub fn begin_submission(&mut self) -> Result<(Uuid, Order), SubmissionError> {
        if self.state != SubmissionState::Idle {
            tracing::debug!(session_id = %self.id, state = ?self.state.phase(), "Duplicate submit ignored");
            return Err(SubmissionError::AlreadySubmitted);
        }
        let order = &self.order;
        if let Some(missing) = first_missing_address([
            order.name.as_str(),
            order.street_address.as_str(),
            order.city.as_str(),
            order.postal_code.as_str(),
        ]) {
            tracing::debug!(session_id = %self.id, %missing, "Submit refused");
            return Err(SubmissionError::InvalidOrder);
        }

        self.transition(SubmissionState::Submitting);
        Ok((self.id, self.order.clone()))
    }

    /// Record the result of an exchange started with `begin_submission`
    ///
    /// Returns `false` and changes nothing when the outcome belongs to an
    /// earlier session or this session is not submitting.
    pub fn apply_outcome(
        &mut self,
        session_id: Uuid,
        outcome: &Result<String, SubmissionError>,
    ) -> bool {
        if session_id != self.id || self.state != SubmissionState::Submitting {
            tracing::debug!(
                session_id = %session_id,
                current = %self.id,
                "Discarding stale submission outcome"
            );
            return false;
        }

        let next = match outcome {
            Ok(message) => SubmissionState::Confirmed {
                message: message.clone(),
            },
            Err(e) => SubmissionState::Failed {
                code: e.error_code(),
                reason: e.to_string(),
            },
        };
        self.transition(next);
        true
    }

    /// Submit the order and wait for the confirmation
    pub async fn submit<T>(&mut self, transport: &T) -> Result<String, SubmissionError>
    where
        T: OrderTransport + ?Sized,
    {
        let (session_id, order) = self.begin_submission()?;
        let outcome = place_order(&order, transport, &self.options).await;
        self.apply_outcome(session_id, &outcome);
        outcome
    }

    /// Discard the order and start over with a fresh session id
    pub fn reset(&mut self) {
        self.id = Uuid::new_v4();
        self.order = Order::new();
        self.state = SubmissionState::Idle;
        self.publish(FormEvent::SessionStarted {
            session_id: self.id,
        });
    }

    fn transition(&mut self, next: SubmissionState) {
        self.state = next;
        self.publish(FormEvent::SubmissionChanged {
            session_id: self.id,
            phase: self.state.phase(),
        });
    }

    fn publish(&self, event: FormEvent) {
        if let Some(bus) = &self.event_bus {
            bus.publish(event);
        }
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_address(session: &mut FormSession) {
        session.set(OrderField::Name, "Trang").unwrap();
        session.set(OrderField::StreetAddress, "1 Main St").unwrap();
        session.set(OrderField::City, "Toronto").unwrap();
        session.set(OrderField::PostalCode, "M5V").unwrap();
    }

    #[test]
    fn test_submit_enabled_follows_validity() {
        let mut session = FormSession::new();
        assert!(!session.presentation().submit_enabled);

        fill_address(&mut session);
        assert!(session.presentation().submit_enabled);

        let presentation = session.set(OrderField::City, "").unwrap();
        assert!(!presentation.submit_enabled);
    }

    #[test]
    fn test_special_request_toggles_options() {
        let mut session = FormSession::new();
        assert!(!session.presentation().show_special_options);

        let presentation = session.set(OrderField::SpecialRequest, true).unwrap();
        assert!(presentation.show_special_options);
    }

    #[test]
    fn test_set_rejects_out_of_range_selection() {
        let mut session = FormSession::new();
        assert!(session.set(OrderField::Color, 5).is_err());
        assert!(session.set(OrderField::Age, 49).is_err());
        assert_eq!(session.order().color, 0);
        assert_eq!(session.order().age, 0);

        session.set(OrderField::Age, 48).unwrap();
        assert_eq!(session.order().age, 48);
    }

    #[test]
    fn test_begin_submission_requires_valid_order() {
        let mut session = FormSession::new();
        let err = session.begin_submission().unwrap_err();
        assert!(matches!(err, SubmissionError::InvalidOrder));
        assert_eq!(session.state(), &SubmissionState::Idle);
    }

    #[test]
    fn test_begin_submission_twice_is_refused() {
        let mut session = FormSession::new();
        fill_address(&mut session);

        session.begin_submission().unwrap();
        assert!(!session.presentation().submit_enabled);
        let err = session.begin_submission().unwrap_err();
        assert!(matches!(err, SubmissionError::AlreadySubmitted));
    }

    #[test]
    fn test_apply_outcome_confirms() {
        let mut session = FormSession::new();
        fill_address(&mut session);

        let (id, _) = session.begin_submission().unwrap();
        assert!(session.apply_outcome(id, &Ok("done".to_string())));
        assert_eq!(session.presentation().confirmation.as_deref(), Some("done"));
        assert!(session.state().is_terminal());
    }

    #[test]
    fn test_stale_outcome_is_ignored_after_reset() {
        let mut session = FormSession::new();
        fill_address(&mut session);

        let (old_id, _) = session.begin_submission().unwrap();
        session.reset();

        assert!(!session.apply_outcome(old_id, &Ok("late".to_string())));
        assert_eq!(session.state(), &SubmissionState::Idle);
        assert_eq!(session.presentation().confirmation, None);
        assert!(!session.order().is_valid());
    }

    #[tokio::test]
    async fn test_events_published_per_mutation() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();
        let mut session = FormSession::new().with_event_bus(bus);

        session.set(OrderField::Type, 3).unwrap();
        session.set(OrderField::Hypoallergenic, true).unwrap();

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        assert!(matches!(
            first.event,
            FormEvent::FieldChanged {
                field: OrderField::Type,
                ..
            }
        ));
        assert!(matches!(
            second.event,
            FormEvent::FieldChanged {
                field: OrderField::Hypoallergenic,
                ..
            }
        ));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_rejected_edit_publishes_nothing() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();
        let mut session = FormSession::new().with_event_bus(bus);

        assert!(session.set(OrderField::Type, 8).is_err());
        assert!(rx.try_recv().is_err());
    }
}
