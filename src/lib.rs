//! Contract Analyzer Service
//!
//! Accepts an internship-agreement document (PDF or DOCX), extracts its text
//! and asks a remote generative-language model whether it is compliant.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
