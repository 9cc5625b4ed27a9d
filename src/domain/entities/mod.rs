pub mod endpoint;
pub mod probe;
pub mod run_config;
pub mod run_result;
pub mod verdict;

pub use endpoint::Endpoint;
pub use probe::ProbeOutcome;
pub use run_config::RunConfig;
pub use run_result::{NotificationStatus, RunResult};
pub use verdict::RunVerdict;
