pub mod python;
pub mod refactor;
