//! Weather Proxy - caching proxy for the weatherapi.com current-conditions API
//!
//! This library exposes the core modules for testing and reuse.

pub mod common;
pub mod config;
pub mod error;
pub mod routes;
pub mod services;
pub mod weatherapi;
