use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("site content is not valid JSON: {0}")]
    Content(#[from] serde_json::Error),

    #[error("{unit} must be at most {max}, got {value}")]
    DurationField {
        unit: &'static str,
        value: u32,
        max: u32,
    },

    #[error("event start `{0}` is not an RFC 3339 timestamp")]
    StartsAt(String),

    #[error("site content defines no problem categories")]
    NoCategories,

    #[error("problem category `{0}` is defined twice")]
    DuplicateCategory(String),

    #[error("unknown problem category `{0}`")]
    UnknownCategory(String),
}
