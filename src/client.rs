//! This module provides a client for the classification service

use std::error::Error;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::traits::Classify;

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct ClassifyResponse {
    category: String,
}

/// A [`Classify`] source backed by an HTTP classification service.
///
/// The service receives `{"text": ...}` as a `POST` and is expected to answer `{"category": ...}`. \
/// Whatever label it answers with is passed through untouched; no retry is attempted on failure.
pub struct HttpClassifier {
    endpoint: Url,
    http_client: reqwest::Client,
}

impl HttpClassifier {
    /// Create a classifier that talks to the configured default endpoint
    /// (see [`CLASSIFIER_ENDPOINT`](crate::config::CLASSIFIER_ENDPOINT)).
    /// This does not start a connection
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let endpoint = crate::config::CLASSIFIER_ENDPOINT.lock().unwrap().clone();
        Self::with_endpoint(&endpoint)
    }

    /// Create a classifier that talks to a specific endpoint
    pub fn with_endpoint<S: AsRef<str>>(endpoint: S) -> Result<Self, Box<dyn Error>> {
        let endpoint = Url::parse(endpoint.as_ref())?;
        Ok(Self {
            endpoint,
            http_client: reqwest::Client::new(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Classify for HttpClassifier {
    async fn classify(&self, text: &str) -> Result<String, Box<dyn Error>> {
        let response = self.http_client
            .post(self.endpoint.as_str())
            .json(&ClassifyRequest { text })
            .send()
            .await?
            .error_for_status()?;

        let body: ClassifyResponse = response.json().await?;
        log::debug!("Classification service answered {:?} for {:?}", body.category, text);
        Ok(body.category)
    }
}
