//! CLI commands for gradebook

pub mod add;
pub mod delete;
pub mod dispatch;
pub mod format;
pub mod import;
pub mod init;
pub mod list;
pub mod rank;
pub mod report;
pub mod search;
pub mod stats;
