pub mod submit;

pub use submit::{submit_model, submit_selection, submit_url, SubmitOutcome};

#[cfg(target_arch = "wasm32")]
pub use submit::spawn_submission;
