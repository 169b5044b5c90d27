use thiserror::Error;

/// Failures while loading data before the simulation starts.
///
/// Nothing inside a tick returns these; the simulation itself falls back to
/// safe defaults instead of failing.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("level set contains no levels")]
    NoLevels,
    #[error("sprite `{0}` is missing from the asset manifest")]
    MissingSprite(String),
    #[error("sprite `{name}` has no frames in animation {index}")]
    EmptyAnimation { name: String, index: usize },
    #[error("sprite `{name}` references sheet {sheet}, but only {count} sheets exist")]
    UnknownSheet { name: String, sheet: u32, count: usize },
    #[error("collision insets for `{0}` leave no collision area")]
    DegenerateInsets(String),
}
