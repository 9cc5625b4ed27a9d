pub mod in_memory_log;
pub mod log_file;

pub use in_memory_log::InMemoryRunLog;
pub use log_file::LogFileSink;
