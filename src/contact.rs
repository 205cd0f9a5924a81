pub mod plausibility;
pub mod relay;
pub mod session;

use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use plausibility::{PlausibilityError, Verdict};

pub use relay::{
    dispatch, DispatchError, FormRelay, HttpRelay, RelayConfig, RelayPayload, RelayReply,
    SubmissionOutcome,
};
pub use session::{Banner, ContactSession, DeliveryPolicy, Phase};

pub const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email shape pattern is valid")
});

const SUSPICIOUS_TOKENS: &[&str] = &[
    "temp",
    "fake",
    "test",
    "dummy",
    "sample",
    "example",
    "10minutemail",
    "guerrillamail",
    "mailinator",
    "throwaway",
    "disposable",
    "tempmail",
    "yopmail",
    "maildrop",
];

const DISPOSABLE_DOMAINS: &[&str] = &[
    "10minutemail.com",
    "guerrillamail.com",
    "mailinator.com",
    "tempmail.org",
    "yopmail.com",
    "maildrop.cc",
    "throwaway.email",
    "temp-mail.org",
    "fakeinbox.com",
    "dispostable.com",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormInput {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Subject => self.subject = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_blank(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|s| s.trim().is_empty())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(FormField),
    #[error("Please enter a valid email address")]
    InvalidFormat,
    #[error("Please use a valid personal or business email address")]
    Suspicious,
    #[error("Temporary email addresses are not allowed. Please use your personal email.")]
    Disposable,
    #[error("This email address does not exist or cannot receive emails")]
    DoesNotExist,
    #[error("Message must be at least {min} characters")]
    TooShort { min: usize },
}

/// Per-field errors from one validation pass. Empty means the form may be sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<FormField, FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: FormField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn insert(&mut self, field: FormField, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn remove(&mut self, field: FormField) -> Option<FieldError> {
        self.errors.remove(&field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &FieldError)> {
        self.errors.iter().map(|(f, e)| (*f, e))
    }
}

/// Synchronous rules only. The heuristic email check is left to [`validate`].
pub fn check_fields(form: &FormInput) -> ValidationResult {
    let mut result = ValidationResult::default();

    if form.name.trim().is_empty() {
        result.insert(FormField::Name, FieldError::Required(FormField::Name));
    }

    if let Some(err) = check_email_shape(form.email.trim()) {
        result.insert(FormField::Email, err);
    }

    let message = form.message.trim();
    if message.is_empty() {
        result.insert(FormField::Message, FieldError::Required(FormField::Message));
    } else if message.chars().count() < MIN_MESSAGE_CHARS {
        result.insert(
            FormField::Message,
            FieldError::TooShort {
                min: MIN_MESSAGE_CHARS,
            },
        );
    }

    result
}

fn check_email_shape(email: &str) -> Option<FieldError> {
    if email.is_empty() {
        return Some(FieldError::Required(FormField::Email));
    }
    if !EMAIL_SHAPE.is_match(email) {
        return Some(FieldError::InvalidFormat);
    }

    let email = email.to_lowercase();
    let domain = email.split('@').nth(1).unwrap_or_default();
    if DISPOSABLE_DOMAINS.contains(&domain) {
        Some(FieldError::Disposable)
    } else if SUSPICIOUS_TOKENS.iter().any(|t| email.contains(t)) {
        Some(FieldError::Suspicious)
    } else {
        None
    }
}

/// Runs every rule. `pause` is awaited before the heuristic email check and
/// only when the email passed the synchronous rules, so the caller decides how
/// long "verifying" lasts.
pub async fn validate<P>(form: &FormInput, pause: P) -> ValidationResult
where
    P: Future<Output = ()>,
{
    let mut result = check_fields(form);
    if result.get(FormField::Email).is_some() {
        return result;
    }

    pause.await;
    if let Some(err) = classify(plausibility::verify(form.email.trim())) {
        result.insert(FormField::Email, err);
    }
    log::debug!("validated contact form with {} error(s)", result.len());
    result
}

/// Maps a heuristic verdict to a field error. A heuristic fault lets the
/// address through.
fn classify(verdict: Result<Verdict, PlausibilityError>) -> Option<FieldError> {
    match verdict {
        Ok(Verdict::Plausible) => None,
        Ok(Verdict::Suspicious) => Some(FieldError::Suspicious),
        Ok(Verdict::UnknownDomain) => Some(FieldError::DoesNotExist),
        Err(e) => {
            log::warn!("email verification failed, allowing submission: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::ready;

    fn form(name: &str, email: &str, message: &str) -> FormInput {
        FormInput {
            name: name.to_string(),
            email: email.to_string(),
            subject: String::new(),
            message: message.to_string(),
        }
    }

    fn validate_now(form: &FormInput) -> ValidationResult {
        block_on(validate(form, ready(())))
    }

    #[test]
    fn test_blank_fields_are_required() {
        for blank in ["", "   ", "\t\n"] {
            let result = validate_now(&form(blank, blank, blank));
            assert_eq!(result.len(), 3);
            assert_eq!(
                result.get(FormField::Name),
                Some(&FieldError::Required(FormField::Name))
            );
            assert_eq!(
                result.get(FormField::Email),
                Some(&FieldError::Required(FormField::Email))
            );
            assert_eq!(
                result.get(FormField::Message),
                Some(&FieldError::Required(FormField::Message))
            );
        }
    }

    #[test]
    fn test_email_without_tld_is_invalid() {
        let result = validate_now(&form("Ada", "a@b", "Hello there, friend"));
        assert_eq!(result.get(FormField::Email), Some(&FieldError::InvalidFormat));

        for bad in ["plainaddress", "two@@signs.com", "spa ce@gmail.com", "@gmail.com"] {
            let result = check_fields(&form("Ada", bad, "Hello there, friend"));
            assert_eq!(
                result.get(FormField::Email),
                Some(&FieldError::InvalidFormat),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_email_shape_pattern() {
        assert!(EMAIL_SHAPE.is_match("someone@gmail.com"));
        assert!(!EMAIL_SHAPE.is_match("someone@gmail"));
    }

    #[test]
    fn test_test_token_is_suspicious() {
        let result = validate_now(&form("Ada", "test123@gmail.com", "Hello there, friend"));
        assert_eq!(result.get(FormField::Email), Some(&FieldError::Suspicious));
    }

    #[test]
    fn test_disposable_domain_wins_over_token() {
        let result = validate_now(&form("Ada", "someone@mailinator.com", "Hello there, friend"));
        assert_eq!(result.get(FormField::Email), Some(&FieldError::Disposable));

        let result = validate_now(&form("Ada", "someone@Dispostable.com", "Hello there, friend"));
        assert_eq!(result.get(FormField::Email), Some(&FieldError::Disposable));
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let result = validate_now(&form("Ada", "someone@gmail.com", "Hello there, friend"));
        assert!(result.is_valid());
        assert!(result.is_empty());
    }

    #[test]
    fn test_message_length_boundary() {
        let result = validate_now(&form("Ada", "someone@gmail.com", "short"));
        assert_eq!(
            result.get(FormField::Message),
            Some(&FieldError::TooShort { min: 10 })
        );

        let result = validate_now(&form("Ada", "someone@gmail.com", "0123456789"));
        assert!(result.get(FormField::Message).is_none());

        // trimmed before counting
        let result = validate_now(&form("Ada", "someone@gmail.com", "   012345678   "));
        assert_eq!(
            result.get(FormField::Message),
            Some(&FieldError::TooShort { min: 10 })
        );

        // chars, not bytes
        let result = validate_now(&form("Ada", "someone@gmail.com", "héllo wörld"));
        assert!(result.get(FormField::Message).is_none());
    }

    #[test]
    fn test_errors_are_collected_across_fields() {
        let result = validate_now(&form("", "a@b", "short"));
        assert_eq!(result.len(), 3);
        let fields = result.iter().map(|(f, _)| f).collect::<Vec<_>>();
        assert_eq!(
            fields,
            vec![FormField::Name, FormField::Email, FormField::Message]
        );
    }

    #[test]
    fn test_heuristic_runs_after_pause() {
        // passes the synchronous rules but not the deny patterns
        let f = form("Ada", "jo.qwerty@gmail.com", "Hello there, friend");
        assert!(check_fields(&f).is_valid());
        let result = validate_now(&f);
        assert_eq!(result.get(FormField::Email), Some(&FieldError::Suspicious));

        let result = validate_now(&form("Ada", "someone@company.xyz", "Hello there, friend"));
        assert_eq!(result.get(FormField::Email), Some(&FieldError::DoesNotExist));
    }

    #[test]
    fn test_heuristic_fault_fails_open() {
        let faults = [
            PlausibilityError::MissingDomain,
            PlausibilityError::PatternsUnavailable("bad pattern".to_string()),
        ];
        for fault in faults {
            assert_eq!(classify(Err(fault)), None);
        }
        assert_eq!(classify(Ok(Verdict::Plausible)), None);
        assert_eq!(
            classify(Ok(Verdict::Suspicious)),
            Some(FieldError::Suspicious)
        );
        assert_eq!(
            classify(Ok(Verdict::UnknownDomain)),
            Some(FieldError::DoesNotExist)
        );
    }

    #[test]
    fn test_pause_skipped_when_email_already_failed() {
        use std::cell::Cell;

        let awaited = Cell::new(false);
        let pause = async {
            awaited.set(true);
        };
        let result = block_on(validate(&form("Ada", "a@b", "Hello there, friend"), pause));
        assert!(!awaited.get());
        assert_eq!(result.get(FormField::Email), Some(&FieldError::InvalidFormat));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FieldError::Required(FormField::Name).to_string(),
            "Name is required"
        );
        assert_eq!(
            FieldError::TooShort { min: 10 }.to_string(),
            "Message must be at least 10 characters"
        );
        assert!(FieldError::DoesNotExist.to_string().contains("does not exist"));
    }

    #[test]
    fn test_form_input_set_and_clear() {
        let mut f = FormInput::default();
        assert!(f.is_blank());
        f.set(FormField::Subject, "Hi".to_string());
        assert_eq!(f.get(FormField::Subject), "Hi");
        assert!(!f.is_blank());
        f.clear();
        assert_eq!(f, FormInput::default());
    }
}
