pub mod aggregator;
pub mod orchestrator;
