//! Domain layer for spark-tracker
//!
//! The trip economics engine lives in [`service`]. It is pure: no I/O and no
//! shared state, so every function may be called from any thread.

pub mod model;
pub mod repository;
pub mod service;
