//! gadocalc-cli
//!
//! Command-line front end: collects form fields, runs the form checks,
//! calls the evaluator, and prints the result with the educational
//! disclaimer.

pub mod args;
pub mod commands;
pub mod error;
pub mod exit;
pub mod form;
pub mod logging;
pub mod render;
