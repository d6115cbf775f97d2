pub mod fare;
pub mod latency;
