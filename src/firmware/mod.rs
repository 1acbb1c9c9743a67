pub mod capture;
pub mod clock;
pub mod config;
pub mod hal;
pub mod queue;
pub mod runtime;
pub mod scheduler;
pub mod transfer;
pub mod types;
