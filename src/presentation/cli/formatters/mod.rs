pub mod run_fmt;
pub mod status_fmt;
