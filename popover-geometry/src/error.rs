use popover_core::error::CoreError;
use thiserror::Error;

/// Errors surfaced around the placement engine.
///
/// The engine itself is total and never returns one of these. They report
/// caller-level precondition violations (see [`crate::GeometryRequest::validate`])
/// and misuse of the [`crate::ModalGate`].
#[derive(Error, Debug)]
pub enum GeometryError {
    /// The measured content has zero or negative width or height.
    #[error("Degenerate content size: {width}x{height}")]
    DegenerateContentSize { width: f64, height: f64 },

    /// An input that must be a finite number was NaN or infinite.
    #[error("Non-finite value for {field}")]
    NonFiniteInput { field: &'static str },

    /// A modal overlay is already showing on behalf of another owner.
    #[error("A modal popover is already showing (owner: {owner})")]
    ModalAlreadyShowing { owner: String },

    /// The caller tried to release a modal it does not hold.
    #[error("Modal popover is not owned by {requester}")]
    ModalNotOwned { requester: String },

    /// Configuration or logging failure from the core layer.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}
