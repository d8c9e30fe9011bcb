//! Output formatting for search results and room state

pub mod console;
