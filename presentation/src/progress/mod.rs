//! Spinner-based progress display

pub mod reporter;
