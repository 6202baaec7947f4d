//! API Layer
//!
//! HTTP client for the EduRev server and the submission gateway.

pub mod client;
pub mod gateway;

pub use client::{fetch_dashboard, saved_api_base, set_api_base};
pub use gateway::SimulatedGateway;
