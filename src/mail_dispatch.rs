use crate::configuration::EmailClientSettings;
use crate::domain::{ContactEmail, ContactSubmission};
use crate::email_client::{EmailClient, OutgoingEmail};
use anyhow::Context;
use askama::Template;

pub const ACKNOWLEDGEMENT: &str = "Thank you for your message! I will get back to you soon.";
pub const SUBJECT_PREFIX: &str = "Portfolio Contact: ";

#[derive(Template)]
#[template(path = "contact_email.html")]
struct ContactEmailTemplate<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message_lines: Vec<&'a str>,
}

/// Delivers validated submissions to the site owner.
///
/// The mode is fixed at construction: `Relay` when a sender account and its
/// credential were configured, `Demo` otherwise. Both modes acknowledge a
/// successful dispatch identically.
#[derive(Debug)]
pub enum MailDispatcher {
    Relay {
        email_client: EmailClient,
        recipient: ContactEmail,
    },
    Demo,
}

impl MailDispatcher {
    pub fn from_settings(settings: &EmailClientSettings) -> Result<Self, anyhow::Error> {
        let credentials = settings
            .relay_credentials()
            .map_err(anyhow::Error::msg)
            .context("Invalid sender email address.")?;
        let credentials = match credentials {
            Some(credentials) => credentials,
            None => return Ok(Self::Demo),
        };
        let recipient = settings
            .recipient()
            .map_err(anyhow::Error::msg)
            .context("Invalid recipient email address.")?;
        let email_client = EmailClient::new(
            &settings.base_url,
            credentials.sender,
            credentials.authorization_token,
            settings.timeout(),
        )?;
        Ok(Self::Relay {
            email_client,
            recipient,
        })
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, Self::Demo)
    }

    #[tracing::instrument(name = "Dispatch a contact submission", skip(self, submission))]
    pub async fn dispatch(&self, submission: &ContactSubmission) -> Result<(), anyhow::Error> {
        match self {
            Self::Relay {
                email_client,
                recipient,
            } => {
                let email = compose_email(submission)?;
                email_client
                    .send_email(recipient, &email)
                    .await
                    .context("Failed to send the contact email through the relay.")?;
            }
            Self::Demo => {
                tracing::info!(
                    contact.name = %submission.name.as_ref(),
                    contact.email = %submission.email,
                    contact.subject = %submission.subject.as_ref(),
                    contact.message = %submission.message.as_ref(),
                    "Contact form submission (mail relay not configured, nothing was sent)"
                );
            }
        }
        Ok(())
    }
}

pub fn compose_email(submission: &ContactSubmission) -> Result<OutgoingEmail, anyhow::Error> {
    let html_body = ContactEmailTemplate {
        name: submission.name.as_ref(),
        email: submission.email.as_ref(),
        subject: submission.subject.as_ref(),
        message_lines: submission.message.as_ref().lines().collect(),
    }
    .render()
    .context("Failed to render the contact email template.")?;
    let text_body = format!(
        "New Contact Form Submission\n\n\
        Name: {}\n\
        Email: {}\n\
        Subject: {}\n\
        Message:\n{}\n",
        submission.name.as_ref(),
        submission.email,
        submission.subject.as_ref(),
        submission.message.as_ref(),
    );
    Ok(OutgoingEmail {
        subject: format!("{}{}", SUBJECT_PREFIX, submission.subject.as_ref()),
        html_body,
        text_body,
        reply_to: Some(submission.email.to_string()),
    })
}
