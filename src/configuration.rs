use crate::domain::ContactEmail;
use secrecy::{ExposeSecret, Secret};
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

#[derive(serde::Deserialize, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_email: Option<String>,
    pub authorization_token: Option<Secret<String>>,
    pub recipient_email: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

/// Sender account and credential for the mail relay.
#[derive(Debug)]
pub struct RelayCredentials {
    pub sender: ContactEmail,
    pub authorization_token: Secret<String>,
}

impl EmailClientSettings {
    /// `None` unless both the sender account and its credential are set.
    pub fn relay_credentials(&self) -> Result<Option<RelayCredentials>, String> {
        let sender = self
            .sender_email
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());
        let token = self
            .authorization_token
            .as_ref()
            .filter(|t| !t.expose_secret().trim().is_empty());

        match (sender, token) {
            (Some(sender), Some(token)) => Ok(Some(RelayCredentials {
                sender: ContactEmail::parse(sender)?,
                authorization_token: token.clone(),
            })),
            _ => Ok(None),
        }
    }

    pub fn recipient(&self) -> Result<ContactEmail, String> {
        ContactEmail::parse(&self.recipient_email)
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT.");

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(true))
        .add_source(
            config::File::from(
                configuration_directory.join(format!("{}.yaml", environment.as_str())),
            )
            .required(true),
        )
        // e.g. `APP_EMAIL_CLIENT__SENDER_EMAIL=me@example.com`
        .add_source(config::Environment::with_prefix("app").separator("__"))
        .build()?;

    settings.try_deserialize()
}

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
