//! Upload flow state machine
//!
//! ```text
//! Idle ──select──▶ ReadyUpload ──submit──▶ Uploading ──ok──▶ ReadyUsage
//!                    ▲    ▲                    │
//!                    │    └──select────┐       │ err
//!                    └──────select──── Error ◀─┘
//! ```
//!
//! ReadyUsage is terminal: the upload input is hidden and only search remains.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::client::api::ClientError;
use crate::client::notify::Notifications;
use crate::models::{Dataset, UploadResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppStatus {
    #[default]
    Idle,
    Error,
    ReadyUpload,
    Uploading,
    ReadyUsage,
}

impl AppStatus {
    pub fn button_text(&self) -> Option<&'static str> {
        match self {
            AppStatus::ReadyUpload => Some("Upload file"),
            AppStatus::Uploading => Some("Uploading..."),
            _ => None,
        }
    }

    pub fn shows_input(&self) -> bool {
        *self != AppStatus::ReadyUsage
    }

    pub fn input_disabled(&self) -> bool {
        *self == AppStatus::Uploading
    }
}

#[derive(Debug, Default)]
pub struct UploadFlow {
    status: AppStatus,
    file: Option<PathBuf>,
    data: Dataset,
}

impl UploadFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> AppStatus {
        self.status
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Dataset returned by the last successful upload.
    pub fn data(&self) -> &Dataset {
        &self.data
    }

    /// Record the chosen file. Returns false when the input is unavailable.
    pub fn select_file(&mut self, path: impl Into<PathBuf>) -> bool {
        match self.status {
            AppStatus::Idle | AppStatus::Error | AppStatus::ReadyUpload => {
                self.file = Some(path.into());
                self.status = AppStatus::ReadyUpload;
                true
            }
            AppStatus::Uploading | AppStatus::ReadyUsage => false,
        }
    }

    /// Move to Uploading and hand back the file to send. Only valid in ReadyUpload.
    pub fn begin_upload(&mut self) -> Option<PathBuf> {
        if self.status != AppStatus::ReadyUpload {
            return None;
        }
        let file = self.file.clone()?;
        self.status = AppStatus::Uploading;
        Some(file)
    }

    pub fn finish(
        &mut self,
        result: Result<UploadResponse, ClientError>,
        notifications: &mut Notifications,
    ) {
        if self.status != AppStatus::Uploading {
            warn!(status = ?self.status, "Upload result arrived outside Uploading");
            return;
        }

        match result {
            Ok(response) => {
                info!(records = response.data.len(), message = %response.message, "Upload finished");
                self.status = AppStatus::ReadyUsage;
                self.data = response.data;
                notifications.success("File uploaded");
            }
            Err(err) => {
                warn!(error = %err, "Upload failed");
                self.status = AppStatus::Error;
                notifications.error(err.to_string());
            }
        }
    }
}
