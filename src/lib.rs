//! Heartbeat: a standalone health-check endpoint service.
//!
//! Exposes a single HTTP route, `GET /health`, that answers with a fixed
//! JSON status payload. The library surface exists so the binary and the
//! integration tests share the router, configuration, and server plumbing.

pub mod config;
pub mod middleware;
pub mod routes;
pub mod server;
