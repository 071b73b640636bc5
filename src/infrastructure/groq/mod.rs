//! GroqCloud provider integration

mod catalog;
mod validator;

pub use catalog::{ModelCatalog, ModelDescriptor};
pub use validator::GroqValidator;
