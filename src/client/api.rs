//! HTTP client for the upload and search endpoints.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::models::{Dataset, ErrorResponse, SearchResponse, UploadResponse};

const UPLOAD_CONTEXT: &str = "Error uploading file";
const SEARCH_CONTEXT: &str = "Error searching data";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with a non-success status.
    #[error("{context}: {message}")]
    Server {
        context: &'static str,
        status: u16,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Could not read file: {0}")]
    File(#[from] std::io::Error),

    #[error("unknown error: {0}")]
    Unknown(String),
}

impl ClientError {
    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_decode() || err.is_builder() {
            ClientError::Unknown(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a file as the multipart part `file`, with a content type guessed
    /// from its extension.
    pub async fn upload_file(&self, path: &Path) -> Result<UploadResponse, ClientError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.csv".to_string());
        let content_type = mime_guess::from_path(path).first_or_octet_stream();

        info!(file = %path.display(), content_type = %content_type, size = bytes.len(), "Uploading file");

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(content_type.as_ref())
            .map_err(ClientError::from_reqwest)?;
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(format!("{}/api/files", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(ClientError::from_reqwest)?;

        decode(response, UPLOAD_CONTEXT).await
    }

    pub async fn search(&self, query: &str) -> Result<Dataset, ClientError> {
        debug!(query, "Searching");

        let response = self
            .http
            .get(format!("{}/api/users", self.base_url))
            .query(&[("q", query)])
            .send()
            .await
            .map_err(ClientError::from_reqwest)?;

        let body: SearchResponse = decode(response, SEARCH_CONTEXT).await?;
        Ok(body.data)
    }
}

async fn decode<T: DeserializeOwned>(
    response: Response,
    context: &'static str,
) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        return Err(ClientError::Server {
            context,
            status: status.as_u16(),
            message,
        });
    }

    response.json::<T>().await.map_err(ClientError::from_reqwest)
}
