use crate::config::RelayConfig;
use crate::domain::{ContactEnquiry, PropertyEnquiry};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Failure surfaced by a relay endpoint. Submissions are fire-and-forget:
/// there is no retry and no idempotency key, the user resubmits manually.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("relay transport failed: {0}")]
    Transport(String),
    #[error("relay rejected submission: {0}")]
    Rejected(String),
}

/// Outbound seam for the hosted enquiry endpoints.
#[async_trait]
pub trait FormRelay: Send + Sync {
    async fn submit_contact(&self, enquiry: &ContactEnquiry) -> Result<(), RelayError>;
    async fn submit_property(&self, enquiry: &PropertyEnquiry) -> Result<(), RelayError>;
}

/// Response shape shared by both relay endpoints.
#[derive(Debug, Deserialize)]
struct RelayResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP implementation posting JSON payloads to the configured endpoints.
pub struct HttpFormRelay {
    http: reqwest::Client,
    contact_url: String,
    property_url: String,
}

impl HttpFormRelay {
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|err| RelayError::Transport(err.to_string()))?;

        Ok(Self {
            http,
            contact_url: config.contact_url.clone(),
            property_url: config.property_url.clone(),
        })
    }

    async fn post<T: Serialize + Sync>(&self, url: &str, payload: &T) -> Result<(), RelayError> {
        let response = self
            .http
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|err| RelayError::Transport(err.to_string()))?;

        let body: RelayResponse = response
            .json()
            .await
            .map_err(|err| RelayError::Transport(err.to_string()))?;

        if body.success {
            Ok(())
        } else {
            Err(RelayError::Rejected(body.error.unwrap_or_else(|| {
                "submission was not accepted".to_string()
            })))
        }
    }
}

#[async_trait]
impl FormRelay for HttpFormRelay {
    async fn submit_contact(&self, enquiry: &ContactEnquiry) -> Result<(), RelayError> {
        self.post(&self.contact_url, enquiry).await?;
        info!(enquiry_type = %enquiry.enquiry_type, "contact enquiry relayed");
        Ok(())
    }

    async fn submit_property(&self, enquiry: &PropertyEnquiry) -> Result<(), RelayError> {
        self.post(&self.property_url, enquiry).await?;
        info!(property = %enquiry.property_slug, "property enquiry relayed");
        Ok(())
    }
}
