pub mod chime;
pub mod console;
pub mod history;
pub mod latency;
pub mod output;
pub mod registry;
pub mod suggest;
