use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::{HeaderMap, StatusCode},
    response::Json,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tempfile::TempPath;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{AnalysisResponse, UploadedDocument};
use crate::services::{build_prompt, ContractAnalyzer, TextExtractor};

/// Shared, read-only state handed to every request.
pub struct AppState<A> {
    pub analyzer: Arc<A>,
    pub extractor: Arc<TextExtractor>,
    pub retain_uploads: bool,
    pub limits: UploadLimits,
}

/// Size limits taken from [`Config`] at startup.
#[derive(Debug, Clone, Copy)]
pub struct UploadLimits {
    pub max_file_size_mb: usize,
    pub max_file_bytes: usize,
    pub max_body_bytes: usize,
}

impl UploadLimits {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_file_size_mb: config.max_file_size_mb,
            max_file_bytes: config.max_file_bytes(),
            max_body_bytes: config.max_body_bytes(),
        }
    }
}

impl<A> AppState<A> {
    pub fn new(analyzer: A, config: &Config) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            extractor: Arc::new(TextExtractor::new()),
            retain_uploads: config.retain_uploads,
            limits: UploadLimits::from_config(config),
        }
    }
}

impl<A> Clone for AppState<A> {
    fn clone(&self) -> Self {
        Self {
            analyzer: Arc::clone(&self.analyzer),
            extractor: Arc::clone(&self.extractor),
            retain_uploads: self.retain_uploads,
            limits: self.limits,
        }
    }
}

/// Upload written to disk for the extractor. Retained files outlive the
/// request; scoped ones are removed when dropped.
enum StoredUpload {
    Retained(PathBuf),
    Scoped(TempPath),
}

impl StoredUpload {
    fn path(&self) -> &Path {
        match self {
            StoredUpload::Retained(path) => path,
            StoredUpload::Scoped(path) => path,
        }
    }
}

pub async fn analyze_handler<A: ContractAnalyzer>(
    State(state): State<AppState<A>>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<AnalysisResponse>> {
    let start = Instant::now();
    let request_id = headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.chars().take(8).collect::<String>())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()[..8].to_string());

    info!(request_id = %request_id, "Starting contract analysis request");

    let mut multipart = multipart.map_err(|e| AppError::InvalidUpload {
        message: e.body_text(),
    })?;

    let file = extract_file_from_multipart(&mut multipart, state.limits).await?;
    let extension = file.extension();

    info!(
        request_id = %request_id,
        file_name = %file.name,
        file_size = file.size,
        extension = %extension,
        "File extracted from multipart form"
    );

    let stored = store_upload(&file, &extension, state.retain_uploads)?;
    debug!(request_id = %request_id, path = %stored.path().display(), "Upload written to disk");

    if !file.kind().is_supported() {
        info!(request_id = %request_id, extension = %extension, "Unsupported document format");
        return Err(AppError::unsupported(extension));
    }

    let text = match state.extractor.extract(stored.path(), &extension).await {
        Ok(text) => text,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "Text extraction failed");
            return Err(e);
        }
    };

    info!(request_id = %request_id, text_length = text.len(), "Text extracted");

    let prompt = build_prompt(&text);
    let result = match state.analyzer.analyze(&prompt).await {
        Ok(result) => result,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "Remote analysis failed");
            return Err(e);
        }
    };

    info!(
        request_id = %request_id,
        response_length = result.len(),
        total_time_ms = start.elapsed().as_millis() as u64,
        "Request completed successfully"
    );

    Ok(Json(AnalysisResponse::result(result)))
}

async fn extract_file_from_multipart(
    multipart: &mut Multipart,
    limits: UploadLimits,
) -> AppResult<UploadedDocument> {
    let too_large = AppError::FileTooLarge { limit_mb: limits.max_file_size_mb };
    let read_error = |e: MultipartError, context: &str| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::FileTooLarge { limit_mb: limits.max_file_size_mb }
        } else {
            AppError::InvalidUpload {
                message: format!("{}: {}", context, e),
            }
        }
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| read_error(e, "Failed to read multipart field"))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| read_error(e, "Failed to read file data"))?;

        if data.len() > limits.max_file_bytes {
            warn!(
                file_size = data.len(),
                max_size = limits.max_file_bytes,
                "File size exceeds limit"
            );
            return Err(too_large);
        }

        let file = UploadedDocument::new(file_name, data);
        debug!("Extracted file: {} ({} bytes)", file.name, file.size);

        return Ok(file);
    }

    warn!("Multipart body had no `file` field");
    Err(AppError::MissingFile)
}

fn store_upload(file: &UploadedDocument, extension: &str, retain: bool) -> AppResult<StoredUpload> {
    let mut temp_file = tempfile::Builder::new()
        .prefix("upload-")
        .suffix(extension)
        .tempfile()
        .map_err(|e| AppError::internal(format!("Failed to create temporary file: {}", e)))?;

    temp_file
        .write_all(&file.content)
        .and_then(|_| temp_file.flush())
        .map_err(|e| AppError::internal(format!("Failed to write upload to temporary file: {}", e)))?;

    let temp_path = temp_file.into_temp_path();
    if retain {
        let path = temp_path
            .keep()
            .map_err(|e| AppError::internal(format!("Failed to retain temporary file: {}", e)))?;
        Ok(StoredUpload::Retained(path))
    } else {
        Ok(StoredUpload::Scoped(temp_path))
    }
}
