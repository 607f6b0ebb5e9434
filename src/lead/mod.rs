pub mod sink;

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use yew::Reducible;

use crate::config::ACKNOWLEDGEMENT_MS;

pub use sink::{LeadSink, SharedLeadSink};

/// Contact details captured by the tour-booking form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub requirement: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Email,
    Phone,
    Organization,
    Requirement,
}

impl LeadField {
    pub const ALL: [LeadField; 5] = [
        LeadField::Name,
        LeadField::Email,
        LeadField::Phone,
        LeadField::Organization,
        LeadField::Requirement,
    ];

    /// The `name`/`id` attribute of the matching form control.
    pub fn key(self) -> &'static str {
        match self {
            LeadField::Name => "name",
            LeadField::Email => "email",
            LeadField::Phone => "phone",
            LeadField::Organization => "organization",
            LeadField::Requirement => "requirement",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, LeadField::Name | LeadField::Email | LeadField::Phone)
    }
}

impl std::fmt::Display for LeadField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeadError {
    #[error("required field `{0}` is empty")]
    MissingField(LeadField),
    #[error("previous submission is still being acknowledged")]
    AwaitingAcknowledgement,
}

/// Field values plus the acknowledgment window that follows a submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadForm {
    fields: Lead,
    acknowledged_until: Option<f64>,
}

impl LeadForm {
    pub fn value(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.fields.name,
            LeadField::Email => &self.fields.email,
            LeadField::Phone => &self.fields.phone,
            LeadField::Organization => &self.fields.organization,
            LeadField::Requirement => &self.fields.requirement,
        }
    }

    pub fn set(&mut self, field: LeadField, value: impl Into<String>) {
        let slot = match field {
            LeadField::Name => &mut self.fields.name,
            LeadField::Email => &mut self.fields.email,
            LeadField::Phone => &mut self.fields.phone,
            LeadField::Organization => &mut self.fields.organization,
            LeadField::Requirement => &mut self.fields.requirement,
        };
        *slot = value.into();
    }

    pub fn is_submitted(&self) -> bool {
        self.acknowledged_until.is_some()
    }

    /// Snapshot of the current fields, or the first empty required field.
    pub fn lead(&self) -> Result<Lead, LeadError> {
        if self.is_submitted() {
            return Err(LeadError::AwaitingAcknowledgement);
        }
        if let Some(field) = LeadField::ALL
            .into_iter()
            .find(|field| field.is_required() && self.value(*field).is_empty())
        {
            return Err(LeadError::MissingField(field));
        }
        Ok(self.fields.clone())
    }

    /// Captures the lead, empties every field and opens the acknowledgment
    /// window starting at `now_ms`. On error nothing changes.
    pub fn submit(&mut self, now_ms: f64) -> Result<Lead, LeadError> {
        self.lead()?;
        self.acknowledged_until = Some(now_ms + f64::from(ACKNOWLEDGEMENT_MS));
        Ok(std::mem::take(&mut self.fields))
    }

    /// Closes the acknowledgment window once `now_ms` reaches its end.
    /// Returns whether the form went back to accepting input.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        match self.acknowledged_until {
            Some(until) if now_ms >= until => {
                self.acknowledged_until = None;
                true
            }
            _ => false,
        }
    }
}

pub enum LeadAction {
    Edit(LeadField, String),
    Submit { now_ms: f64 },
    Tick { now_ms: f64 },
}

impl Reducible for LeadForm {
    type Action = LeadAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LeadAction::Edit(field, value) => next.set(field, value),
            LeadAction::Submit { now_ms } => {
                if let Err(err) = next.submit(now_ms) {
                    log::warn!("Lead submission rejected: {}", err);
                    return self;
                }
            }
            LeadAction::Tick { now_ms } => {
                if !next.tick(now_ms) {
                    return self;
                }
            }
        }
        next.into()
    }
}

/// Validates the current fields and hands the resulting lead to `sink`.
/// The form itself is left untouched; the caller dispatches
/// [`LeadAction::Submit`] once this succeeds.
pub fn hand_off(form: &LeadForm, sink: &dyn LeadSink) -> Result<(), LeadError> {
    let lead = form.lead()?;
    sink.deliver(lead);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::sink::MockLeadSink;
    use super::*;

    fn filled() -> LeadForm {
        let mut form = LeadForm::default();
        form.set(LeadField::Name, "A");
        form.set(LeadField::Email, "a@b.com");
        form.set(LeadField::Phone, "123");
        form
    }

    #[test]
    fn keystrokes_update_fields() {
        let mut form = LeadForm::default();
        form.set(LeadField::Organization, "Payleaf");
        form.set(LeadField::Requirement, "Two cabins");
        assert_eq!(form.value(LeadField::Organization), "Payleaf");
        assert_eq!(form.value(LeadField::Requirement), "Two cabins");
        assert_eq!(form.value(LeadField::Name), "");
    }

    #[test]
    fn valid_submission_clears_fields_and_acknowledges() {
        let mut form = filled();
        form.set(LeadField::Organization, "Payleaf");

        let lead = form.submit(0.0).unwrap();
        assert_eq!(lead.name, "A");
        assert_eq!(lead.organization, "Payleaf");
        assert!(form.is_submitted());
        for field in LeadField::ALL {
            assert_eq!(form.value(field), "", "{field} not cleared");
        }
    }

    #[test]
    fn acknowledgement_ends_exactly_after_three_seconds() {
        let mut form = filled();
        form.submit(10_000.0).unwrap();

        assert!(!form.tick(12_999.0));
        assert!(form.is_submitted());

        assert!(form.tick(13_000.0));
        assert!(!form.is_submitted());
        for field in LeadField::ALL {
            assert_eq!(form.value(field), "");
        }

        // nothing left to expire
        assert!(!form.tick(20_000.0));
    }

    #[test]
    fn empty_required_field_blocks_submission_and_keeps_values() {
        let mut form = filled();
        form.set(LeadField::Phone, "");
        form.set(LeadField::Organization, "Payleaf");

        assert_eq!(
            form.submit(0.0),
            Err(LeadError::MissingField(LeadField::Phone))
        );
        assert!(!form.is_submitted());
        assert_eq!(form.value(LeadField::Name), "A");
        assert_eq!(form.value(LeadField::Email), "a@b.com");
        assert_eq!(form.value(LeadField::Organization), "Payleaf");
    }

    #[test]
    fn optional_fields_may_stay_empty() {
        assert!(filled().lead().is_ok());
    }

    #[test]
    fn resubmission_during_acknowledgement_is_rejected() {
        let mut form = filled();
        form.submit(0.0).unwrap();
        form.set(LeadField::Name, "B");
        form.set(LeadField::Email, "b@c.com");
        form.set(LeadField::Phone, "456");
        assert_eq!(form.submit(1.0), Err(LeadError::AwaitingAcknowledgement));
    }

    #[test]
    fn reducer_applies_actions_in_order() {
        let form = Rc::new(LeadForm::default());
        let form = form.reduce(LeadAction::Edit(LeadField::Name, "A".into()));
        let form = form.reduce(LeadAction::Edit(LeadField::Email, "a@b.com".into()));

        // incomplete: reducer hands back the same state
        let before = Rc::clone(&form);
        let form = form.reduce(LeadAction::Submit { now_ms: 0.0 });
        assert!(Rc::ptr_eq(&before, &form));

        let form = form.reduce(LeadAction::Edit(LeadField::Phone, "123".into()));
        let form = form.reduce(LeadAction::Submit { now_ms: 0.0 });
        assert!(form.is_submitted());

        let form = form.reduce(LeadAction::Tick { now_ms: 3_000.0 });
        assert!(!form.is_submitted());
        assert_eq!(form.value(LeadField::Name), "");
    }

    #[test]
    fn hand_off_delivers_complete_leads_once() {
        let mut sink = MockLeadSink::new();
        sink.expect_deliver()
            .withf(|lead| lead.name == "A" && lead.phone == "123")
            .times(1)
            .return_const(());

        assert!(hand_off(&filled(), &sink).is_ok());
    }

    #[test]
    fn hand_off_skips_incomplete_leads() {
        let mut sink = MockLeadSink::new();
        sink.expect_deliver().times(0);

        let mut form = filled();
        form.set(LeadField::Email, "");
        assert_eq!(
            hand_off(&form, &sink),
            Err(LeadError::MissingField(LeadField::Email))
        );
    }
}
