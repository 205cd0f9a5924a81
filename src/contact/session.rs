use std::str::FromStr;

use thiserror::Error;

use super::relay::SubmissionOutcome;
use super::{FormField, FormInput, ValidationResult};

/// How a failed delivery is shown to the visitor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeliveryPolicy {
    /// Report every submission as sent and only log failures.
    #[default]
    Lenient,
    /// Show the failure and keep the form so it can be retried.
    Strict,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown delivery policy: {0}")]
pub struct UnknownPolicy(String);

impl FromStr for DeliveryPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Sent,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Holds the snapshot under validation. Edits made meanwhile only touch
    /// the live form.
    Validating(FormInput),
    Submitting,
    /// Accepts edits and new submissions exactly like `Idle`.
    Done(Banner),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSession {
    form: FormInput,
    errors: ValidationResult,
    phase: Phase,
    policy: DeliveryPolicy,
}

impl ContactSession {
    pub fn new(policy: DeliveryPolicy) -> Self {
        Self {
            form: FormInput::default(),
            errors: ValidationResult::default(),
            phase: Phase::Idle,
            policy,
        }
    }

    pub fn form(&self) -> &FormInput {
        &self.form
    }

    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn banner(&self) -> Option<&Banner> {
        match &self.phase {
            Phase::Done(banner) => Some(banner),
            _ => None,
        }
    }

    pub fn submit_enabled(&self) -> bool {
        !matches!(self.phase, Phase::Validating(_) | Phase::Submitting)
    }

    pub fn is_verifying(&self) -> bool {
        matches!(self.phase, Phase::Validating(_))
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn edit(&mut self, field: FormField, value: String) {
        self.form.set(field, value);
        self.errors.remove(field);
    }

    /// Starts a submission and hands back the form to validate. Returns `None`
    /// while a previous submission is still running.
    pub fn begin(&mut self) -> Option<FormInput> {
        if !self.submit_enabled() {
            log::debug!("ignoring submit while {:?}", self.phase);
            return None;
        }
        let snapshot = self.form.clone();
        self.phase = Phase::Validating(snapshot.clone());
        Some(snapshot)
    }

    /// Returns the snapshot taken by [`begin`](Self::begin) when `result` is
    /// clean, so only the validated input is ever dispatched.
    pub fn validated(&mut self, result: ValidationResult) -> Option<FormInput> {
        if !self.is_verifying() {
            return None;
        }
        let valid = result.is_valid();
        self.errors = result;
        let next = if valid { Phase::Submitting } else { Phase::Idle };
        match std::mem::replace(&mut self.phase, next) {
            Phase::Validating(snapshot) if valid => Some(snapshot),
            _ => None,
        }
    }

    pub fn finish(&mut self, outcome: SubmissionOutcome) {
        if self.phase != Phase::Submitting {
            return;
        }
        let banner = match (outcome, self.policy) {
            (SubmissionOutcome::Success, _)
            | (SubmissionOutcome::Failure(_), DeliveryPolicy::Lenient) => {
                self.form.clear();
                Banner::Sent
            }
            (SubmissionOutcome::Failure(e), DeliveryPolicy::Strict) => {
                Banner::Failed(e.to_string())
            }
        };
        self.errors = ValidationResult::default();
        self.phase = Phase::Done(banner);
    }
}

impl Default for ContactSession {
    fn default() -> Self {
        Self::new(DeliveryPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::relay::DispatchError;
    use crate::contact::{check_fields, FieldError};

    fn filled(policy: DeliveryPolicy) -> ContactSession {
        let mut session = ContactSession::new(policy);
        session.edit(FormField::Name, "Ada".to_string());
        session.edit(FormField::Email, "ada@gmail.com".to_string());
        session.edit(FormField::Message, "Hello there, friend".to_string());
        session
    }

    fn run_to_submitting(session: &mut ContactSession) -> FormInput {
        let form = session.begin().expect("idle session should start");
        let result = check_fields(&form);
        session.validated(result).expect("form should be valid")
    }

    #[test]
    fn test_submit_disabled_while_busy() {
        let mut session = filled(DeliveryPolicy::Lenient);
        assert!(session.submit_enabled());

        session.begin().unwrap();
        assert!(!session.submit_enabled());
        assert!(session.is_verifying());
        assert!(session.begin().is_none());

        session.validated(ValidationResult::default()).unwrap();
        assert!(!session.submit_enabled());
        assert!(session.is_submitting());
        assert!(session.begin().is_none());

        session.finish(SubmissionOutcome::Success);
        assert!(session.submit_enabled());
    }

    #[test]
    fn test_invalid_form_returns_to_idle_with_errors() {
        let mut session = ContactSession::default();
        let form = session.begin().unwrap();
        assert!(session.validated(check_fields(&form)).is_none());
        assert_eq!(session.phase(), &Phase::Idle);
        assert_eq!(session.errors().len(), 3);
        assert!(session.submit_enabled());
    }

    #[test]
    fn test_edits_during_validation_are_not_dispatched() {
        let mut session = filled(DeliveryPolicy::Lenient);
        let snapshot = session.begin().unwrap();

        session.edit(FormField::Email, String::new());
        session.edit(FormField::Message, "x".to_string());

        let sent = session.validated(check_fields(&snapshot)).unwrap();
        assert_eq!(sent, snapshot);
        assert!(check_fields(&sent).is_valid());
        assert_eq!(sent.email, "ada@gmail.com");
        // the live form keeps what was typed
        assert_eq!(session.form().message, "x");
    }

    #[test]
    fn test_edit_clears_field_error() {
        let mut session = ContactSession::default();
        let form = session.begin().unwrap();
        session.validated(check_fields(&form));
        assert_eq!(
            session.errors().get(FormField::Name),
            Some(&FieldError::Required(FormField::Name))
        );

        session.edit(FormField::Name, "A".to_string());
        assert!(session.errors().get(FormField::Name).is_none());
        assert!(session.errors().get(FormField::Email).is_some());
    }

    #[test]
    fn test_success_clears_form() {
        let mut session = filled(DeliveryPolicy::Strict);
        let sent = run_to_submitting(&mut session);
        assert_eq!(sent.name, "Ada");

        session.finish(SubmissionOutcome::Success);
        assert_eq!(session.banner(), Some(&Banner::Sent));
        assert!(session.form().is_blank());
    }

    #[test]
    fn test_lenient_failure_looks_like_success() {
        let mut session = filled(DeliveryPolicy::Lenient);
        run_to_submitting(&mut session);

        session.finish(SubmissionOutcome::Failure(DispatchError::TimedOut));
        assert_eq!(session.banner(), Some(&Banner::Sent));
        assert!(session.form().is_blank());
        assert!(session.submit_enabled());
    }

    #[test]
    fn test_strict_failure_keeps_form() {
        let mut session = filled(DeliveryPolicy::Strict);
        run_to_submitting(&mut session);

        session.finish(SubmissionOutcome::Failure(DispatchError::TimedOut));
        assert_eq!(
            session.banner(),
            Some(&Banner::Failed("form relay did not answer in time".to_string()))
        );
        assert_eq!(session.form().name, "Ada");

        // retry from Done
        assert!(session.begin().is_some());
        assert!(session.banner().is_none());
    }

    #[test]
    fn test_out_of_order_events_are_ignored() {
        let mut session = filled(DeliveryPolicy::Lenient);
        session.finish(SubmissionOutcome::Success);
        assert_eq!(session.phase(), &Phase::Idle);
        assert!(session.validated(ValidationResult::default()).is_none());
        assert_eq!(session.form().name, "Ada");
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("strict".parse::<DeliveryPolicy>(), Ok(DeliveryPolicy::Strict));
        assert_eq!(" Lenient ".parse::<DeliveryPolicy>(), Ok(DeliveryPolicy::Lenient));
        assert!("loud".parse::<DeliveryPolicy>().is_err());
    }
}
