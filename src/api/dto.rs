//! Data Transfer Objects
//!
//! Response types for the server's own endpoints. The transactions body
//! is the shared wire model in [`crate::models`].

use serde::{Deserialize, Serialize};

/// Full health status response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: healthy, empty
    pub status: String,
    /// Number of transactions served
    pub transactions: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
