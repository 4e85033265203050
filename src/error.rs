use thiserror::Error;

/// Format errors raised while turning LRC text into an [`crate::Lrc`].
///
/// Every variant aborts the whole parse; no partial document is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LrcError {
    #[error("Not a string of lrc: no line starts with a [name:value] tag")]
    NoLines,

    #[error("Line #{line}: not a string of tags: {group:?}")]
    EmptyTagGroup { line: usize, group: String },

    #[error("Line #{line}: not a string of tag: {token:?}")]
    MalformedTag { line: usize, token: String },

    #[error("Line #{line}: invalid seconds {value:?} in timestamp [{name}:{value}]")]
    InvalidTimestamp {
        line: usize,
        name: String,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, LrcError>;
