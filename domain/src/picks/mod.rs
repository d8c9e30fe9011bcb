//! Picks domain
//!
//! A [`Pick`] is a nominated restaurant that can collect votes. The
//! [`PickStore`] is the ordered collection for one room; it knows nothing
//! about locking, which lives in [`crate::voting`].

pub mod entities;
pub mod store;

pub use entities::{NOTE_MAX_LENGTH, Note, Pick, PickId};
pub use store::PickStore;
