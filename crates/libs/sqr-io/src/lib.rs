//! Process execution for the sqr reporter.
//!
//! Runs the scheduler query command and captures its output.
//!
//! # Usage
//!
//! ```rust,no_run
//! use sqr_io::squeue::SqueueQuery;
//!
//! #[tokio::main]
//! async fn main() {
//!     let query = SqueueQuery::new("squeue", vec!["phys01"]).unwrap();
//!     let table = query.run().await.unwrap();
//!     println!("{table}");
//! }
//! ```

pub mod error;
pub mod prelude;
pub mod process;
pub mod squeue;
