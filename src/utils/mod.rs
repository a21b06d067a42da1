//! Input validation and string/number formatting helpers shared by the engines.

pub mod format;
pub mod validation;
