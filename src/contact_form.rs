//! Headless state for the contact form: field values, the in-flight flag and
//! the feedback shown after a submission.
use crate::api_client::{ApiClient, ContactPayload};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    Success(String),
    Error(String),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FormRejection {
    #[error("A submission is already in progress.")]
    InFlight,
    #[error("Please fill in the {} field.", .0.as_str())]
    MissingField(Field),
}

#[derive(Default)]
struct FormState {
    fields: ContactPayload,
    status: Option<SubmitStatus>,
}

pub struct ContactFormController {
    api_client: ApiClient,
    state: Mutex<FormState>,
    submitting: AtomicBool,
}

/// Clears the in-flight flag when the submission ends, even if it is dropped.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ContactFormController {
    pub fn new(api_client: ApiClient) -> Self {
        Self {
            api_client,
            state: Mutex::new(FormState::default()),
            submitting: AtomicBool::new(false),
        }
    }

    fn state(&self) -> MutexGuard<'_, FormState> {
        // The state is plain data; a poisoned lock still holds a usable value.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        let mut state = self.state();
        let value = value.into();
        match field {
            Field::Name => state.fields.name = value,
            Field::Email => state.fields.email = value,
            Field::Subject => state.fields.subject = value,
            Field::Message => state.fields.message = value,
        }
    }

    pub fn fields(&self) -> ContactPayload {
        self.state().fields.clone()
    }

    pub fn status(&self) -> Option<SubmitStatus> {
        self.state().status.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Sends the current fields and records exactly one outcome.
    ///
    /// Fields are cleared on success and kept on failure.
    #[tracing::instrument(name = "Submit the contact form from the client", skip(self))]
    pub async fn submit(&self) -> Result<SubmitStatus, FormRejection> {
        if self
            .submitting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(FormRejection::InFlight);
        }
        let _in_flight = InFlight(&self.submitting);
        let payload = {
            let fields = self.fields();
            let missing = [
                (Field::Name, &fields.name),
                (Field::Email, &fields.email),
                (Field::Subject, &fields.subject),
                (Field::Message, &fields.message),
            ]
            .into_iter()
            .find(|(_, value)| value.trim().is_empty());
            if let Some((field, _)) = missing {
                return Err(FormRejection::MissingField(field));
            }
            fields
        };

        self.state().status = None;

        let status = match self.api_client.submit_contact(&payload).await {
            Ok(ack) => {
                self.state().fields = ContactPayload::default();
                SubmitStatus::Success(ack.message)
            }
            Err(e) => {
                tracing::warn!(error.message = %e, "Contact form submission failed");
                SubmitStatus::Error(e.to_string())
            }
        };
        self.state().status = Some(status.clone());
        Ok(status)
    }
}
