pub mod bell;
pub mod latency;
