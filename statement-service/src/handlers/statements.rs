use crate::dtos::{LedgerResponse, ViewRequest, ViewResponse};
use crate::ledger::{assemble_statement, view_transactions, LedgerQuery, Transaction};
use crate::services::prompt::build_prompt;
use crate::startup::AppState;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use service_core::error::AppError;
use validator::Validate;

/// Multipart field name the statement file must arrive under.
const UPLOAD_FIELD: &str = "file";

pub async fn upload_statement(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut file: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!("Failed to read multipart field: {}", e))
    })? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let original_name = field.file_name().unwrap_or("unnamed").to_string();
        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Failed to read file bytes: {}", e)))?
            .to_vec();

        file = Some((original_name, mime_type, data));
        break;
    }

    let Some((original_name, mime_type, data)) = file else {
        return Err(AppError::BadRequest(anyhow::anyhow!("No file uploaded")));
    };

    if data.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Uploaded file is empty"
        )));
    }

    if data.len() > state.config.limits.max_upload_bytes {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "File too large (max {} bytes)",
            state.config.limits.max_upload_bytes
        )));
    }

    tracing::info!(
        filename = %original_name,
        mime_type = %mime_type,
        size = data.len(),
        "Statement upload started"
    );

    let text = match state.extractor.extract(&data, &mime_type).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(filename = %original_name, error = %e, "Text extraction failed");
            return Ok(extraction_failure(format!("Failed to extract text: {}", e)));
        }
    };

    let prompt = build_prompt(&text, state.config.limits.transcription_char_budget);

    let transcription = match state.transcriber.transcribe(&prompt).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(filename = %original_name, error = %e, "Transcription failed");
            return Ok(extraction_failure(format!("Failed to transcribe: {}", e)));
        }
    };

    tracing::debug!(
        input_tokens = transcription.input_tokens,
        output_tokens = transcription.output_tokens,
        "Transcription complete"
    );

    match assemble_statement(&transcription.text) {
        Ok(ledger) => {
            tracing::info!(
                transaction_count = ledger.transactions.len(),
                reconciles = ?ledger.reconciles,
                "Statement assembled"
            );
            Ok((StatusCode::OK, Json(LedgerResponse::from(ledger))).into_response())
        }
        Err(e) => {
            tracing::warn!(filename = %original_name, error = %e, "Statement assembly failed");
            Ok(extraction_failure(format!(
                "Failed to interpret transcription: {}",
                e
            )))
        }
    }
}

// Extraction and transcription failures keep the full ledger shape so
// consumers never special-case the error path structurally.
fn extraction_failure(error: String) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(LedgerResponse::failed(error)),
    )
        .into_response()
}

// The ledger lives with the caller; the view is recomputed per request.
pub async fn view_statement(
    Json(request): Json<ViewRequest>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;

    let transactions: Vec<Transaction> = request
        .transactions
        .into_iter()
        .map(Into::into)
        .collect();

    let query = LedgerQuery::from_parts(request.search, request.page, request.page_size);
    let view = view_transactions(&transactions, &query);

    Ok(Json(ViewResponse::from(view)))
}
