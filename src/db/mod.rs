pub mod pool;
pub mod queries;
pub mod source;
pub mod stats;

pub use source::{RecordSource, SqliteSource, StaticSource};
