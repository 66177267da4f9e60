//! Interaction event reporting.

mod agent;
mod logger;

pub use agent::{browser_name, UNKNOWN_AGENT};
pub use logger::{deliver, spawn_delivery, EventLogger, EventReceiver};
