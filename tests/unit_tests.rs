//! Unit tests for individual components

mod common;

use axum::http::StatusCode;
use contract_analyzer::{
    error::{AppError, ANALYSIS_FAILED_MESSAGE, UNSUPPORTED_FORMAT_MESSAGE},
    models::{extension_of, AnalysisResponse, DocumentKind},
    services::{build_prompt, read_docx, read_pdf, TextExtractor, BLOCK_SEPARATOR, CONTRACT_LABEL},
};

use common::{docx_with_paragraphs, pdf_with_pages, write_fixture};

#[test]
fn test_pdf_text_is_extracted() {
    let file = write_fixture(&pdf_with_pages(&["Termo de Compromisso assinado"]), ".pdf");

    let text = read_pdf(file.path()).unwrap();
    assert!(text.contains("Termo de Compromisso assinado"));
}

#[test]
fn test_pdf_pages_are_joined_in_order() {
    let file = write_fixture(&pdf_with_pages(&["Clausula primeira", "Clausula segunda"]), ".pdf");

    let text = read_pdf(file.path()).unwrap();
    let first = text.find("Clausula primeira").unwrap();
    let second = text.find("Clausula segunda").unwrap();
    assert!(first < second);
    assert!(text[first..second].contains(BLOCK_SEPARATOR));
}

#[test]
fn test_pdf_without_text_yields_empty_string() {
    let file = write_fixture(&pdf_with_pages(&[""]), ".pdf");

    let text = read_pdf(file.path()).unwrap();
    assert_eq!(text, "");
}

#[test]
fn test_pdf_blank_page_contributes_empty_block() {
    let file = write_fixture(&pdf_with_pages(&["", "Recesso de 30 dias"]), ".pdf");

    let text = read_pdf(file.path()).unwrap();
    assert!(text.starts_with(BLOCK_SEPARATOR));
    assert!(text.contains("Recesso de 30 dias"));
}

#[test]
fn test_docx_paragraphs_are_joined_and_empty_ones_skipped() {
    let file = write_fixture(
        &docx_with_paragraphs(&["Termo de Compromisso", "", "Plano de Atividades"]),
        ".docx",
    );

    let text = read_docx(file.path()).unwrap();
    assert_eq!(text, "Termo de Compromisso\n\nPlano de Atividades");
}

#[test]
fn test_docx_with_only_empty_paragraphs_yields_empty_string() {
    let file = write_fixture(&docx_with_paragraphs(&["", "", ""]), ".docx");

    let text = read_docx(file.path()).unwrap();
    assert_eq!(text, "");
}

#[tokio::test]
async fn test_extractor_dispatches_on_extension() {
    let extractor = TextExtractor::default();
    let docx = write_fixture(&docx_with_paragraphs(&["Seguro contra acidentes"]), ".docx");

    let text = extractor.extract(docx.path(), ".docx").await.unwrap();
    assert_eq!(text, "Seguro contra acidentes");

    // Declared extension wins over the actual content.
    let err = extractor.extract(docx.path(), ".pdf").await.unwrap_err();
    assert!(matches!(err, AppError::Extraction { .. }));

    let pdf = write_fixture(&pdf_with_pages(&["Bolsa e auxilio transporte"]), ".pdf");
    let text = extractor.extract(pdf.path(), ".pdf").await.unwrap();
    assert!(text.contains("Bolsa e auxilio transporte"));

    let err = extractor.extract(docx.path(), ".DOCX").await.unwrap_err();
    assert!(matches!(err, AppError::UnsupportedFormat { .. }));
}

#[test]
fn test_document_kind_mapping() {
    assert_eq!(DocumentKind::from_extension(&extension_of("contract.pdf")), DocumentKind::Pdf);
    assert_eq!(DocumentKind::from_extension(&extension_of("contract.docx")), DocumentKind::Word);
    assert_eq!(DocumentKind::from_extension(&extension_of("contract.txt")), DocumentKind::Unsupported);
    assert_eq!(DocumentKind::from_extension(&extension_of("contract")), DocumentKind::Unsupported);
}

#[test]
fn test_prompt_embeds_text_verbatim() {
    let text = "Termo de Compromisso assinado...\n\nRecesso remunerado de 30 dias.";
    let prompt = build_prompt(text);

    let label_at = prompt.rfind(CONTRACT_LABEL).unwrap();
    assert!(prompt[label_at + CONTRACT_LABEL.len()..].starts_with(text));
    assert_eq!(build_prompt(text), prompt);
}

#[test]
fn test_error_codes() {
    assert_eq!(AppError::unsupported(".txt").error_code(), "UNSUPPORTED_FORMAT");
    assert_eq!(AppError::MissingFile.error_code(), "MISSING_FILE");
    assert_eq!(AppError::extraction("bad").error_code(), "EXTRACTION_ERROR");
    assert_eq!(AppError::remote("quota").error_code(), "REMOTE_SERVICE_ERROR");
    assert_eq!(AppError::internal("io").error_code(), "INTERNAL_ERROR");
}

#[test]
fn test_error_status_codes() {
    assert_eq!(AppError::unsupported(".txt").status_code(), StatusCode::OK);
    assert_eq!(AppError::MissingFile.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(AppError::FileTooLarge { limit_mb: 10 }.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(AppError::extraction("bad").status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(AppError::remote("quota").status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_server_errors_hide_details() {
    let err = AppError::remote("HTTP 403: API key not valid");
    assert_eq!(err.public_message(), ANALYSIS_FAILED_MESSAGE);
    assert!(err.to_string().contains("403"));

    assert_eq!(AppError::unsupported(".odt").public_message(), UNSUPPORTED_FORMAT_MESSAGE);
}

#[test]
fn test_error_conversions() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
    let app_error: AppError = io_error.into();
    match app_error {
        AppError::Internal { message } => assert!(message.contains("IO error")),
        _ => panic!("Expected Internal error"),
    }
}

#[test]
fn test_response_envelope_round_trips() {
    let parsed: AnalysisResponse = serde_json::from_str(r#"{"result":"ok"}"#).unwrap();
    assert_eq!(parsed, AnalysisResponse::result("ok"));
    assert!(parsed.is_success());

    let parsed: AnalysisResponse = serde_json::from_str(r#"{"error":"Formato não suportado"}"#).unwrap();
    assert!(!parsed.is_success());
}
