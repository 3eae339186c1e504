use crate::domain::{ContactFormData, ContactSubmission};
use crate::mail_dispatch::{MailDispatcher, ACKNOWLEDGEMENT};
use crate::util::error_chain_fmt;
use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{post, web, HttpRequest, HttpResponse, ResponseError};
use std::fmt;
use std::fmt::Formatter;

pub const DISPATCH_FAILURE: &str = "Failed to send message. Please try again later.";

#[derive(serde::Serialize)]
struct MessageBody<'a> {
    message: &'a str,
}

#[derive(serde::Serialize)]
struct ValidationErrorBody<'a> {
    message: &'a str,
    details: &'a str,
}

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("{}", DISPATCH_FAILURE)]
    Dispatch(#[source] anyhow::Error),
}

impl fmt::Debug for ContactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Dispatch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        match self {
            Self::Validation(details) => response.json(ValidationErrorBody {
                message: "Validation error",
                details,
            }),
            Self::Dispatch(_) => response.json(MessageBody {
                message: DISPATCH_FAILURE,
            }),
        }
    }
}

/// Reports undecodable request bodies the same way as field violations.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ContactError::Validation(err.to_string()).into()
}

#[post("/api/contact")]
#[tracing::instrument(
    name = "Handle a contact form submission",
    skip(form, dispatcher),
    fields(
        contact_email = tracing::field::Empty,
        contact_name = tracing::field::Empty,
    )
)]
pub async fn submit_contact(
    form: web::Json<ContactFormData>,
    dispatcher: web::Data<MailDispatcher>,
) -> Result<HttpResponse, ContactError> {
    let submission: ContactSubmission = form.into_inner().try_into().map_err(|e: String| {
        tracing::info!(validation.error = %e, "Rejected a contact form submission");
        ContactError::Validation(e)
    })?;
    tracing::Span::current()
        .record("contact_email", &tracing::field::display(&submission.email))
        .record(
            "contact_name",
            &tracing::field::display(submission.name.as_ref()),
        );

    dispatcher.dispatch(&submission).await.map_err(|e| {
        tracing::error!(
            error.cause_chain = ?e,
            error.message = %e,
            "Failed to dispatch a contact form submission"
        );
        ContactError::Dispatch(e)
    })?;

    Ok(HttpResponse::Ok().json(MessageBody {
        message: ACKNOWLEDGEMENT,
    }))
}
