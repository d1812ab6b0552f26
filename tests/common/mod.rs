//! Integration test common infrastructure.
//!
//! Provides a test server that serves the API router over an in-memory
//! fixture store on an ephemeral port.

pub mod server;

#[allow(unused_imports)]
pub use server::TestServer;
