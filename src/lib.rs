// Library exports for cursorfont-gen

pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;

pub use config::{Config, MappingTarget};
pub use error::{GenError, Result};
pub use model::Entry;
pub use pipeline::{collect_entries, generate_source, run};
