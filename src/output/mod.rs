//! Result formatting and display
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Size formatting and name truncation
//! - `table` - Fixed-width results table

mod config;
mod table;
mod utils;

pub use config::OutputConfig;
pub use table::{ResultPresenter, sort_results, total_size, write_results};
pub use utils::{format_size, truncate};
