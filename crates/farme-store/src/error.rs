//! Store errors.

use farme_commerce::CommerceError;
use thiserror::Error;

/// Reasons a dispatched action is rejected.
///
/// A rejected action leaves the store unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The cart refused the change.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// The action needs a signed-in user.
    #[error("not signed in")]
    NotAuthenticated,
}
