//! Infrastructure layer - persistence implementations and report export

pub mod persistence;
pub mod report_csv;
