// src/domain/ports/mod.rs

pub mod statistics;

pub use statistics::JobStatistics;
