pub mod client;
pub mod formatter;
