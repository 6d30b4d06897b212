use serde::{Deserialize, Serialize};

use crate::logging::{log, warn};
use crate::models::Course;
use crate::selection::SelectionModel;

/// How the server answered a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// 2xx; the host should navigate to the timetable view
    Accepted,
    /// Any other status; the selection is kept for a retry
    Rejected { status: u16 },
}

impl SubmitOutcome {
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            200..=299 => Self::Accepted,
            _ => Self::Rejected { status },
        }
    }

    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Join the page origin and the configured endpoint path
#[must_use]
pub fn submit_url(origin: &str, endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return endpoint.to_string();
    }
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

/// POST the selected courses as JSON
///
/// # Errors
///
/// Returns an error if the request cannot be sent (network failure,
/// invalid URL). A non-2xx answer is a [`SubmitOutcome::Rejected`], not an
/// error.
pub async fn submit_selection(url: &str, courses: &[Course]) -> Result<SubmitOutcome, String> {
    log!("Submitting {} selected courses to {}", courses.len(), url);

    let response = reqwest::Client::new()
        .post(url)
        .json(courses)
        .send()
        .await
        .map_err(|e| {
            warn!("Error saving courses: {}", e);
            format!("Request failed: {e}")
        })?;

    let outcome = SubmitOutcome::from_status(response.status().as_u16());
    if let SubmitOutcome::Rejected { status } = outcome {
        warn!("Selection rejected with status {}", status);
    }
    Ok(outcome)
}

/// Export the model's selection and submit it to the configured endpoint.
///
/// The model is only read, so a failed submission can be retried as-is.
///
/// # Errors
///
/// Returns an error if the request cannot be sent
pub async fn submit_model(model: &SelectionModel, origin: &str) -> Result<SubmitOutcome, String> {
    let url = submit_url(origin, &model.settings().submit_endpoint);
    submit_selection(&url, &model.export_selection()).await
}

/// Fire the submission on the browser event loop and report back through
/// `on_done`
#[cfg(target_arch = "wasm32")]
pub fn spawn_submission<F>(url: String, courses: Vec<Course>, on_done: F)
where
    F: FnOnce(Result<SubmitOutcome, String>) + 'static,
{
    wasm_bindgen_futures::spawn_local(async move {
        on_done(submit_selection(&url, &courses).await);
    });
}
