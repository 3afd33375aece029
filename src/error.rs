use thiserror::Error;

/// Errors surfaced by strict-mode serialization and typed conversion.
///
/// Lenient serialization (the default) never constructs any of these.
#[derive(Debug, Error)]
pub enum Error {
    #[error("path conflict in field `{field}` at segment `{segment}`: {detail}")]
    PathConflict {
        field: String,
        segment: String,
        detail: String,
    },

    #[error("deserialize failed: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn path_conflict(
        field: impl Into<String>,
        segment: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Error::PathConflict {
            field: field.into(),
            segment: segment.into(),
            detail: detail.into(),
        }
    }
}
