use thiserror::Error;

/// Errors that abort a rounding request.
///
/// Corners that cannot be rounded are not errors; they are skipped and
/// counted in [`crate::Diagnostics`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RoundError {
    #[error("need at least one selected node in the path")]
    NoSelection,

    #[error("invalid selection key: {0:?} (expected pathId:subpath:node)")]
    InvalidSelection(String),

    #[error("radius must be finite and non-zero, got {0}")]
    InvalidRadius(f64),

    #[error("unknown method {0:?}: one of 'arc', 'arc+cross', 'line'")]
    UnknownMethod(String),

    #[error("selection {subpath}:{index} processed after {subpath}:{last}; corners must be rounded in ascending order")]
    OutOfOrder { subpath: usize, index: usize, last: usize },

    #[error("no path with id {0:?}")]
    PathNotFound(String),

    #[error("path data error at byte {pos}: {message}")]
    PathSyntax { pos: usize, message: String },

    #[error("unsupported path command '{0}'")]
    UnsupportedCommand(char),

    #[error("input exceeds limit: {0}")]
    LimitExceeded(&'static str),

    #[error("invalid transform: {0}")]
    InvalidTransform(String),

    #[error("non-finite value in {0}")]
    NonFinite(&'static str),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
