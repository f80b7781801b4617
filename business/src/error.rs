use thiserror::Error;

/// Message shown when a bulk delete is attempted with nothing selected.
pub const EMPTY_SELECTION_MESSAGE: &str = "Please select the row for confirming deletion.";

/// Rejected table operations. These are advisories shown to the operator,
/// never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("Please select the row for confirming deletion.")]
    EmptySelection,
}

/// Why loading the member list failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Data source returned status: {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("Failed to parse member list: {0}")]
    Parse(String),
}
