//! Config flow orchestration

mod service;

pub use service::ConfigFlowService;
