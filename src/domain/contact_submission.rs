use crate::domain::{ContactEmail, ContactMessage, ContactName, ContactSubject};

/// Raw contact form body as received over the wire.
#[derive(Debug, serde::Deserialize)]
pub struct ContactFormData {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: ContactEmail,
    pub subject: ContactSubject,
    pub message: ContactMessage,
}

fn required(field: &str, value: Option<String>) -> Result<String, String> {
    value.ok_or_else(|| format!("\"{}\" is required", field))
}

impl TryFrom<ContactFormData> for ContactSubmission {
    type Error = String;

    // Fails on the first violated constraint: name, email, subject, message.
    fn try_from(value: ContactFormData) -> Result<Self, Self::Error> {
        let name = ContactName::parse(required("name", value.name)?)?;
        let email = ContactEmail::parse(required("email", value.email)?)?;
        let subject = ContactSubject::parse(required("subject", value.subject)?)?;
        let message = ContactMessage::parse(required("message", value.message)?)?;
        Ok(Self {
            name,
            email,
            subject,
            message,
        })
    }
}
