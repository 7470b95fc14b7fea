use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::AnalysisResponse;

pub type AppResult<T> = Result<T, AppError>;

/// Message returned for uploads whose extension has no extractor.
pub const UNSUPPORTED_FORMAT_MESSAGE: &str = "Formato não suportado";
/// Message returned when the multipart body carries no usable file.
pub const MISSING_FILE_MESSAGE: &str = "Nenhum arquivo enviado";
/// Message returned when the upload exceeds the body limit.
pub const FILE_TOO_LARGE_MESSAGE: &str = "Arquivo excede o tamanho máximo permitido";
/// Generic message for every failure past the extension check.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Falha ao analisar o contrato";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unsupported document format: {extension:?}")]
    UnsupportedFormat { extension: String },

    #[error("Missing file in request")]
    MissingFile,

    #[error("File too large: exceeds limit of {limit_mb}MB")]
    FileTooLarge { limit_mb: usize },

    #[error("Invalid upload: {message}")]
    InvalidUpload { message: String },

    #[error("Text extraction failed: {message}")]
    Extraction { message: String },

    #[error("Remote analysis service failed: {message}")]
    RemoteService { message: String },

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            AppError::MissingFile => "MISSING_FILE",
            AppError::FileTooLarge { .. } => "FILE_TOO_LARGE",
            AppError::InvalidUpload { .. } => "INVALID_UPLOAD",
            AppError::Extraction { .. } => "EXTRACTION_ERROR",
            AppError::RemoteService { .. } => "REMOTE_SERVICE_ERROR",
            AppError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Unsupported formats are reported in the body only, so they keep 200.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnsupportedFormat { .. } => StatusCode::OK,
            AppError::MissingFile => StatusCode::BAD_REQUEST,
            AppError::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::InvalidUpload { .. } => StatusCode::BAD_REQUEST,
            AppError::Extraction { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::RemoteService { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text shown to the caller. Server-side failures never leak details.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::UnsupportedFormat { .. } => UNSUPPORTED_FORMAT_MESSAGE,
            AppError::MissingFile | AppError::InvalidUpload { .. } => MISSING_FILE_MESSAGE,
            AppError::FileTooLarge { .. } => FILE_TOO_LARGE_MESSAGE,
            AppError::Extraction { .. }
            | AppError::RemoteService { .. }
            | AppError::Internal { .. } => ANALYSIS_FAILED_MESSAGE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(
                error_code = error_code,
                status_code = %status,
                error_message = %message,
                "Request failed"
            );
        } else {
            tracing::warn!(
                error_code = error_code,
                status_code = %status,
                error_message = %message,
                "Request rejected"
            );
        }

        let body = Json(AnalysisResponse::error(self.public_message()));

        (status, body).into_response()
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal {
            message: format!("IO error: {}", err),
        }
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Internal {
            message: format!("Blocking task failed: {}", err),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::RemoteService {
            message: err.to_string(),
        }
    }
}

impl AppError {
    pub fn unsupported(extension: impl Into<String>) -> Self {
        AppError::UnsupportedFormat {
            extension: extension.into(),
        }
    }

    pub fn extraction(message: impl Into<String>) -> Self {
        AppError::Extraction {
            message: message.into(),
        }
    }

    pub fn remote(message: impl Into<String>) -> Self {
        AppError::RemoteService {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::Internal {
            message: message.into(),
        }
    }
}
