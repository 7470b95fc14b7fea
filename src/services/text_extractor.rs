use std::path::{Path, PathBuf};
use std::time::Instant;

use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use lopdf::Document;

use crate::error::{AppError, AppResult};
use crate::models::DocumentKind;

/// Separator placed between pages and paragraphs.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Reads plain text out of a document on disk, choosing the reader from the
/// file extension.
pub struct TextExtractor;

impl TextExtractor {
    pub fn new() -> Self {
        Self
    }

    pub async fn extract(&self, path: &Path, extension: &str) -> AppResult<String> {
        let kind = DocumentKind::from_extension(extension);
        let reader: fn(&Path) -> AppResult<String> = match kind {
            DocumentKind::Pdf => read_pdf,
            DocumentKind::Word => read_docx,
            DocumentKind::Unsupported => return Err(AppError::unsupported(extension)),
        };

        let start = Instant::now();
        let owned_path: PathBuf = path.to_path_buf();

        tracing::info!(
            "Starting text extraction for {} ({:?})",
            owned_path.display(),
            kind
        );

        let text = tokio::task::spawn_blocking(move || reader(&owned_path)).await??;

        tracing::info!(
            "Text extraction completed in {}ms, extracted {} characters",
            start.elapsed().as_millis(),
            text.len()
        );

        Ok(text)
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts every page in order. A page without text, or one lopdf cannot
/// decode, contributes an empty string.
pub fn read_pdf(path: &Path) -> AppResult<String> {
    let doc = Document::load(path)
        .map_err(|e| AppError::extraction(format!("Failed to load PDF: {}", e)))?;

    let pages: Vec<String> = doc
        .get_pages()
        .keys()
        .map(|&page_number| match doc.extract_text(&[page_number]) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Failed to extract text from page {}: {}", page_number, e);
                String::new()
            }
        })
        .collect();

    tracing::debug!("PDF has {} pages", pages.len());

    Ok(pages.join(BLOCK_SEPARATOR))
}

/// Extracts top-level body paragraphs in order, dropping empty ones.
pub fn read_docx(path: &Path) -> AppResult<String> {
    let data = std::fs::read(path)
        .map_err(|e| AppError::extraction(format!("Failed to read DOCX: {}", e)))?;
    let docx = docx_rs::read_docx(&data)
        .map_err(|e| AppError::extraction(format!("Failed to parse DOCX: {}", e)))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => {
                let mut text = String::new();
                collect_paragraph_text(&paragraph.children, &mut text);
                Some(text)
            }
            _ => None,
        })
        .filter(|text| !text.is_empty())
        .collect();

    tracing::debug!("DOCX has {} non-empty paragraphs", paragraphs.len());

    Ok(paragraphs.join(BLOCK_SEPARATOR))
}

fn collect_paragraph_text(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) => out.push('\t'),
                        RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => collect_paragraph_text(&link.children, out),
            _ => {}
        }
    }
}
