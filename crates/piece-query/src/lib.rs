//! Command-line queries against the chess piece rules.
//!
//! - [`query`] - parsing of piece descriptions and single questions
//! - [`batch`] - TOML files holding many questions at once

pub mod batch;
pub mod query;
