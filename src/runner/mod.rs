//! @ai:module:intent Benchmark execution: scheduling and orchestration
//! @ai:module:layer application
//! @ai:module:public_api run_all, BenchmarkOrchestrator

pub mod orchestrator;
pub mod pool;

pub use orchestrator::BenchmarkOrchestrator;
pub use pool::run_all;
