//! Gradebook Core Library
//!
//! Score records, letter grades, competition ranking and statistics over a
//! pluggable repository, with a SQLite-backed store.

pub mod clock;
pub mod config;
pub mod db;
pub mod error;
pub mod format;
pub mod grade;
pub mod gradebook;
pub mod logging;
pub mod rank;
pub mod record;
pub mod records;
pub mod repository;
pub mod stats;
pub mod store;
