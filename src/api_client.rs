use crate::catalog::Project;
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const NETWORK_ERROR: &str = "Network error. Please try again.";

/// Body of `POST /api/contact`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Acknowledgement {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectList {
    pub projects: Vec<Project>,
    pub total: usize,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    details: Option<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        details: Option<String>,
    },
    /// No response was received at all.
    #[error("{}", NETWORK_ERROR)]
    Network(#[source] reqwest::Error),
    #[error("Received an unexpected response from the server.")]
    Decode(#[source] reqwest::Error),
}

/// Thin JSON client for the portfolio API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: std::time::Duration) -> Result<Self, anyhow::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        let base_url = Url::parse(base_url)?
            .as_str()
            .trim_end_matches('/')
            .to_string();
        Ok(Self {
            http_client,
            base_url,
        })
    }

    #[tracing::instrument(name = "Submit the contact form", skip(self, payload))]
    pub async fn submit_contact(
        &self,
        payload: &ContactPayload,
    ) -> Result<Acknowledgement, ApiError> {
        self.request(Method::POST, "/api/contact", Some(payload)).await
    }

    pub async fn get_projects(&self) -> Result<ProjectList, ApiError> {
        self.request::<(), _>(Method::GET, "/api/projects", None).await
    }

    pub async fn get_skills(&self) -> Result<serde_json::Value, ApiError> {
        self.request::<(), _>(Method::GET, "/api/skills", None).await
    }

    pub async fn health_check(&self) -> Result<serde_json::Value, ApiError> {
        self.request::<(), _>(Method::GET, "/api/health", None).await
    }

    async fn request<B, T>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut request = self.http_client.request(method, url);
        if let Some(body) = body {
            // `json` also sets `Content-Type: application/json`.
            request = request.json(body);
        }
        let response = request.send().await.map_err(|e| {
            tracing::warn!(error.cause_chain = ?e, "API request failed");
            ApiError::Network(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return response.json::<T>().await.map_err(ApiError::Decode);
        }

        let body = response.json::<ErrorBody>().await.ok();
        let (message, details) = match body {
            Some(ErrorBody {
                message: Some(message),
                details,
            }) => (message, details),
            _ => (format!("HTTP error! status: {}", status.as_u16()), None),
        };
        Err(ApiError::Http {
            status: status.as_u16(),
            message,
            details,
        })
    }
}
