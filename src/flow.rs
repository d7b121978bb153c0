//! User-triggered flows. Each takes a state snapshot and a dispatch callback,
//! performs at most one request, and reports every transition as an
//! [`Action`].

use crate::api::WorksheetApi;
use crate::error::Result;
use crate::state::{Action, AppState, Selection};

/// Saves a downloaded payload under a filename.
pub trait FileSaver {
    fn save(&self, filename: &str, bytes: &[u8]) -> Result<()>;
}

pub async fn generate_worksheet<A, D>(api: &A, selection: &Selection, dispatch: D)
where
    A: WorksheetApi,
    D: Fn(Action),
{
    let request = match selection.generate_request() {
        Ok(request) => request,
        Err(err) => {
            dispatch(Action::Prompt(err));
            return;
        }
    };

    dispatch(Action::GenerationStarted);

    match api.generate_worksheet(&request).await {
        Ok(worksheet) => {
            if let Some(analysis) = &worksheet.mood_analysis {
                log::debug!("Mood analysis: {}", analysis);
            }
            log::info!("Worksheet {} generated", worksheet.worksheet_id);
            dispatch(Action::GenerationSucceeded(worksheet));
        }
        Err(err) => {
            log::error!("Error generating worksheet: {}", err);
            dispatch(Action::GenerationFailed(err));
        }
    }
}

pub async fn download_pdf<A, S, D>(api: &A, saver: &S, state: &AppState, dispatch: D)
where
    A: WorksheetApi,
    S: FileSaver,
    D: Fn(Action),
{
    let request = match state.pdf_request() {
        Ok(request) => request,
        Err(err) => {
            dispatch(Action::Prompt(err));
            return;
        }
    };

    dispatch(Action::PdfStarted);

    let saved = match api.generate_pdf(&request).await {
        Ok(doc) => saver.save(&doc.filename, &doc.bytes).map(|_| doc.filename),
        Err(err) => Err(err),
    };

    match saved {
        Ok(filename) => {
            log::info!("Saved {}", filename);
            dispatch(Action::PdfSaved { filename });
        }
        Err(err) => {
            log::error!("PDF Error: {}", err);
            dispatch(Action::PdfFailed(err));
        }
    }
}

/// Startup probe; only logs.
pub async fn check_backend_health<A: WorksheetApi>(api: &A) -> bool {
    match api.health().await {
        Ok(status) => {
            log::info!("Backend health: {}", status.status);
            if !status.is_healthy() {
                log::warn!("Backend is not healthy; worksheet generation may fail.");
            }
            status.is_healthy()
        }
        Err(err) => {
            log::warn!("Backend health check failed: {}", err);
            false
        }
    }
}
