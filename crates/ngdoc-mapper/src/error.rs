use crate::vocabulary::TagKind;
use thiserror::Error;

/// Malformed-input failures. Any of these aborts the whole mapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("{declaring} comment has no {tag} tag")]
    MissingTag {
        tag: TagKind,
        declaring: &'static str,
    },

    #[error("{declaring} name is empty (raw name: {raw:?})")]
    EmptyName { declaring: &'static str, raw: String },
}

pub type Result<T> = std::result::Result<T, MapError>;
