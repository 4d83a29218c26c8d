//! Client-side state container for the Farme storefront.
//!
//! The store holds two slices, the cart and the signed-in user, and changes
//! only through [`Action`]s passed to [`StoreState::dispatch`]. It has no UI
//! dependency; the storefront wraps it in a reactive context.

mod action;
mod error;
mod state;
mod user;

pub use action::Action;
pub use error::StoreError;
pub use state::StoreState;
pub use user::{User, UserProfile};
