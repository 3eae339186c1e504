use crate::domain::ContactEmail;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};

/// HTTP client for the transactional mail relay.
#[derive(Debug)]
pub struct EmailClient {
    http_client: Client,
    endpoint: Url,
    sender: ContactEmail,
    authorization_token: Secret<String>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html_body: &'a str,
    text_body: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

/// A fully composed outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
    pub reply_to: Option<String>,
}

impl EmailClient {
    pub fn new(
        base_url: &str,
        sender: ContactEmail,
        authorization_token: Secret<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, anyhow::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        let endpoint = Url::parse(base_url)?.join("email")?;
        Ok(Self {
            http_client,
            endpoint,
            sender,
            authorization_token,
        })
    }

    #[tracing::instrument(name = "Send an email through the relay", skip(self, email))]
    pub async fn send_email(
        &self,
        recipient: &ContactEmail,
        email: &OutgoingEmail,
    ) -> Result<(), reqwest::Error> {
        let request_body = SendEmailRequest {
            from: self.sender.as_ref(),
            to: recipient.as_ref(),
            subject: &email.subject,
            html_body: &email.html_body,
            text_body: &email.text_body,
            reply_to: email.reply_to.as_deref(),
        };
        self.http_client
            .post(self.endpoint.clone())
            .header(
                "X-Postmark-Server-Token",
                self.authorization_token.expose_secret(),
            )
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
