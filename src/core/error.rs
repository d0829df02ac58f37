//! Error taxonomy for the deck-building core.
//!
//! Every failure maps to an [`ErrorKind`] so the presentation layer can
//! decide how to surface it:
//!
//! - `UserInput`: shown to the user, nothing changed
//! - `NotFound`: a referenced deck or card does not exist
//! - `ExternalService`: the card search capability failed
//! - `Storage`: the persistent store or (de)serialization failed

use thiserror::Error;

/// Coarse classification of a [`DeckError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UserInput,
    NotFound,
    ExternalService,
    Storage,
}

/// Errors produced by the card search capability.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The service could not be reached.
    #[error("card search unavailable: {0}")]
    Unavailable(String),
    /// The service answered with an error payload.
    #[error("card search failed ({status}): {details}")]
    Api { status: u16, details: String },
}

/// Errors produced by deck, registry, codec and session operations.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("deck name must not be empty")]
    EmptyDeckName,
    #[error("a deck named {0:?} already exists")]
    DuplicateName(String),
    #[error("deck {0:?} not found")]
    DeckNotFound(String),
    #[error("the current deck has no cards")]
    EmptyDeck,
    #[error("decklist text is empty")]
    EmptyImportText,
    #[error("no decklist line could be resolved ({} unresolved)", unresolved.len())]
    EmptyImport { unresolved: Vec<String> },
    #[error("select at least one filter to search")]
    NoFiltersSelected,
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("serialize error: {0}")]
    Serialize(String),
}

impl DeckError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            DeckError::EmptyDeckName
            | DeckError::DuplicateName(_)
            | DeckError::EmptyDeck
            | DeckError::EmptyImportText
            | DeckError::EmptyImport { .. }
            | DeckError::NoFiltersSelected => ErrorKind::UserInput,
            DeckError::DeckNotFound(_) => ErrorKind::NotFound,
            DeckError::Search(_) => ErrorKind::ExternalService,
            DeckError::Storage(_) | DeckError::Serialize(_) => ErrorKind::Storage,
        }
    }
}

impl From<serde_json::Error> for DeckError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value.to_string())
    }
}

impl From<std::io::Error> for DeckError {
    fn from(value: std::io::Error) -> Self {
        Self::Storage(value.to_string())
    }
}

/// Result alias used throughout the crate.
pub type DeckResult<T> = Result<T, DeckError>;
