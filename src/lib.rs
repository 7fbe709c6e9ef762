//! Bilingual (Korean/English) sample data as SQL INSERT scripts.
//!
//! # Example
//!
//! ```rust
//! use sample_data_gen::{Dialect, Generator, Renderer, Table};
//!
//! // Same seed, same data
//! let mut gen = Generator::new(42);
//! let data = gen.generate(10).unwrap();
//!
//! let renderer = Renderer::new(Dialect::MySql);
//! let sql = renderer.render_to_string(&data, &[Table::Customers]).unwrap();
//!
//! assert!(sql.starts_with("-- Customers (10 records)\n"));
//! ```

pub mod config;
pub mod dialect;
pub mod fake;
pub mod generator;
pub mod model;
pub mod render;
pub mod table;
pub mod writer;

pub use config::{GenerateSettings, GenerateYamlConfig, OutputTarget};
pub use dialect::Dialect;
pub use generator::{GeneratedData, Generator};
pub use render::{Record, Renderer, SqlValue};
pub use table::Table;
