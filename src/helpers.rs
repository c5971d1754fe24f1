pub mod time;
pub mod tracing;
