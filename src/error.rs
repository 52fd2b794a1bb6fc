//! Crate-level error type for widgets that render fallible content.

use thiserror::Error;

use crate::state::shortcuts::ShortcutError;
use crate::util::storage::StorageError;

/// Error surfaced to a [`crate::components::boundary::WidgetBoundary`].
#[derive(Debug, Error)]
pub enum WidgetError {
    /// A lazily loaded part of the UI could not be produced.
    #[error("{0} failed to load")]
    LoadFailed(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Shortcut(#[from] ShortcutError),
}
