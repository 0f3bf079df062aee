//! Scoring rules.
//!
//! Lower totals are better: a finished game is won by whoever has the
//! lowest cumulative total, and ties are reported as such.

pub mod outcome;

pub use outcome::{Outcome, Winners};
