pub mod config;
pub mod error;
pub mod forwarder;
pub mod input;
pub mod models;
pub mod telegram;

pub use config::Config;
pub use error::ForwardError;
pub use forwarder::{NotificationForwarder, handle};
pub use models::InvocationResponse;
