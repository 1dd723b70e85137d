//! Application services (use case implementations).
//!
//! Each service orchestrates a specific use case using domain logic
//! and driven ports.

pub mod log_service;
pub mod scaffold_service;

pub use log_service::{LOGS_FOLDER, LogEntry, LogService, logs_folder, next_log_path};
pub use scaffold_service::ScaffoldService;
