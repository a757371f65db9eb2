//! Caller-side helpers shared by the CLI and the web server.
//!
//! The matching engine trusts its input and never reorders its output;
//! these helpers check requests before they reach it and arrange results
//! for display afterwards.

pub mod display;
pub mod validation;
