//! Infrastructure layer - External service implementations

pub mod entry;
pub mod flow;
pub mod groq;
pub mod http;
pub mod logging;
