use axum::{
    body::Bytes,
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::{debug, info};

use crate::models::{AppState, UploadResponseRef};
use crate::parser::parse_csv;
use crate::types::{AppError, AppResult, FILE_NOT_CSV, FILE_REQUIRED};

const FILE_FIELD: &str = "file";

pub fn router(state: AppState) -> Router {
    let limit = state.config.server.max_upload_bytes;
    Router::new()
        .route("/api/files", post(upload_file))
        .layer(DefaultBodyLimit::max(limit))
        .with_state(state)
}

struct FilePart {
    file_name: String,
    content_type: Option<String>,
    bytes: Bytes,
}

/// POST /api/files - Replace the dataset with an uploaded CSV file
async fn upload_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Response> {
    let mut multipart = multipart.map_err(|rejection| {
        debug!(%rejection, "Upload is not a multipart body");
        AppError::validation(FILE_REQUIRED)
    })?;

    let file = read_file_part(&mut multipart)
        .await?
        .ok_or_else(|| AppError::validation(FILE_REQUIRED))?;

    info!(
        file_name = %file.file_name,
        content_type = file.content_type.as_deref().unwrap_or("-"),
        size = file.bytes.len(),
        "File upload request received"
    );

    if !is_csv(file.content_type.as_deref()) {
        return Err(AppError::validation(FILE_NOT_CSV));
    }

    let dataset = parse_csv(&file.bytes)?;
    let stored = state.store.replace(dataset).await;
    info!(records = stored.len(), "Dataset replaced");

    Ok(Json(UploadResponseRef {
        data: stored.as_slice(),
        message: "file was loaded",
    })
    .into_response())
}

/// First part named `file` that carries a filename.
async fn read_file_part(multipart: &mut Multipart) -> AppResult<Option<FilePart>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(AppError::Upload)?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(file_name) = field.file_name().map(str::to_owned) else {
            continue;
        };
        let content_type = field.content_type().map(str::to_owned);
        let bytes = field.bytes().await.map_err(AppError::Upload)?;

        return Ok(Some(FilePart {
            file_name,
            content_type,
            bytes,
        }));
    }
    Ok(None)
}

fn is_csv(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|ct| ct.parse::<mime::Mime>().ok())
        .map(|m| m.essence_str() == mime::TEXT_CSV.essence_str())
        .unwrap_or(false)
}
