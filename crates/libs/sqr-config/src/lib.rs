//! Configuration management for the sqr reporter.
//!
//! Configuration files are TOML (`.toml`) or JSON (any other extension).
//!
//! # Usage
//!
//! ```rust
//! use sqr_config::SqrConfig;
//!
//! let config = SqrConfig::from_toml(r#"
//!     [project_map]
//!     phys01 = "Physics"
//!
//!     [slack]
//!     token = "xoxb-token"
//!     channel = "C0123456"
//! "#).unwrap();
//!
//! let tables = config.lookup_tables();
//! assert_eq!(tables.project_label("PHYS01"), Some("Physics"));
//! ```

pub mod error;
pub mod prelude;
pub mod slack_config;
pub mod sqr_config;
pub mod squeue_config;

pub use sqr_config::{ConfigFormat, SqrConfig};
