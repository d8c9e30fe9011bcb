//! Directory search domain
//!
//! Value types exchanged with the restaurant directory: the validated
//! [`SearchQuery`] sent out and the [`Business`] records that come back.
//! Both are checked at the boundary so nothing downstream deals with
//! half-formed records.

pub mod business;
pub mod query;

pub use business::Business;
pub use query::{SearchLocation, SearchQuery};
