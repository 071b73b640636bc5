//! HTTP client seam

mod client;

pub use client::{HttpClient, HttpClientTrait, HttpResponse};

#[cfg(test)]
pub use client::mock;
