use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{select, Either};
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::session::DeliveryPolicy;
use super::FormInput;

pub const DEFAULT_ENDPOINT: &str = "https://api.web3forms.com/submit";
pub const DEFAULT_SUBJECT: &str = "New message from portfolio";
pub const DEFAULT_TO_EMAIL: &str = "pulagorlamounica@gmail.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how contact submissions are delivered.
///
/// Values are fixed at build time; the access key ends up in the client
/// bundle, so treat it as public.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub access_key: String,
    pub to_email: String,
    pub default_subject: String,
    pub timeout: Duration,
    pub policy: DeliveryPolicy,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            access_key: String::new(),
            to_email: DEFAULT_TO_EMAIL.to_string(),
            default_subject: DEFAULT_SUBJECT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            policy: DeliveryPolicy::default(),
        }
    }
}

impl RelayConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("CONTACT_RELAY_URL"),
            option_env!("CONTACT_ACCESS_KEY"),
            option_env!("CONTACT_TO_EMAIL"),
            option_env!("CONTACT_TIMEOUT_SECS"),
            option_env!("CONTACT_DELIVERY_POLICY"),
        )
    }

    fn from_values(
        endpoint: Option<&str>,
        access_key: Option<&str>,
        to_email: Option<&str>,
        timeout_secs: Option<&str>,
        policy: Option<&str>,
    ) -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = endpoint.filter(|s| !s.is_empty()) {
            config.endpoint = endpoint.to_string();
        }
        if let Some(key) = access_key {
            config.access_key = key.to_string();
        }
        if let Some(to) = to_email.filter(|s| !s.is_empty()) {
            config.to_email = to.to_string();
        }
        match timeout_secs.map(str::parse::<u64>) {
            Some(Ok(secs)) if secs > 0 => config.timeout = Duration::from_secs(secs),
            Some(_) => log::warn!("ignoring invalid CONTACT_TIMEOUT_SECS"),
            None => {}
        }
        if let Some(policy) = policy {
            match policy.parse() {
                Ok(p) => config.policy = p,
                Err(e) => log::warn!("{e}"),
            }
        }
        config
    }
}

/// JSON body accepted by the form relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayPayload {
    pub access_key: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub from_name: String,
    pub to_email: String,
}

impl RelayPayload {
    pub fn new(form: &FormInput, config: &RelayConfig) -> Self {
        let name = form.name.trim().to_string();
        let subject = match form.subject.trim() {
            "" => config.default_subject.clone(),
            s => s.to_string(),
        };
        Self {
            access_key: config.access_key.clone(),
            from_name: name.clone(),
            name,
            email: form.email.trim().to_string(),
            subject,
            message: form.message.clone(),
            to_email: config.to_email.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RelayReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("could not reach form relay: {0}")]
    Transport(String),
    #[error("form relay rejected the message: {0}")]
    Rejected(String),
    #[error("form relay did not answer in time")]
    TimedOut,
}

impl From<reqwest::Error> for DispatchError {
    fn from(value: reqwest::Error) -> Self {
        DispatchError::Transport(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure(DispatchError),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success)
    }
}

pub trait FormRelay {
    fn send(
        &self,
        payload: &RelayPayload,
    ) -> impl Future<Output = Result<RelayReply, DispatchError>>;
}

pub struct HttpRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl FormRelay for HttpRelay {
    async fn send(&self, payload: &RelayPayload) -> Result<RelayReply, DispatchError> {
        let reply = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await?
            .json::<RelayReply>()
            .await?;
        Ok(reply)
    }
}

/// Makes exactly one attempt. Whichever finishes first of the relay call and
/// `deadline` decides the outcome.
pub async fn dispatch<R, D>(relay: &R, payload: &RelayPayload, deadline: D) -> SubmissionOutcome
where
    R: FormRelay,
    D: Future<Output = ()>,
{
    let send = pin!(relay.send(payload));
    let deadline = pin!(deadline);
    let outcome = match select(send, deadline).await {
        Either::Left((Ok(reply), _)) if reply.success => SubmissionOutcome::Success,
        Either::Left((Ok(reply), _)) => SubmissionOutcome::Failure(DispatchError::Rejected(
            reply
                .message
                .unwrap_or_else(|| "Form submission failed".to_string()),
        )),
        Either::Left((Err(e), _)) => SubmissionOutcome::Failure(e),
        Either::Right(((), _)) => SubmissionOutcome::Failure(DispatchError::TimedOut),
    };
    match &outcome {
        SubmissionOutcome::Success => log::debug!("contact form delivered"),
        SubmissionOutcome::Failure(e) => log::error!("contact form delivery failed: {e}"),
    }
    outcome
}
