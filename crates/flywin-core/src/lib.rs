//! Flywin Core Library
//!
//! Opportunity audit model, prompt, Claude client and view state.

pub mod audit;
pub mod config;
pub mod error;
pub mod view;

pub use audit::AuditService;
pub use config::AuditConfig;
pub use error::{FlywinError, FlywinResult};
