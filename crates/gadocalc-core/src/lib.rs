//! gadocalc-core
//!
//! Patient input and evaluation result types, the dose-volume formula, and
//! the ordered rule chain that decides whether a volume may be shown.
//!
//! Illustrative rule set for teaching. Not a clinical decision system.

pub mod dose;
pub mod error;
pub mod evaluation;
pub mod evaluator;
pub mod patient;

pub use dose::{calc_volume, calc_volume_with_dose};
pub use evaluation::{BlockReason, Evaluation};
pub use evaluator::evaluate;
pub use patient::PatientInput;
