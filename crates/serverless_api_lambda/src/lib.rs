//! AWS-oriented adapters and handlers for the demo serverless API.
//!
//! This crate owns runtime integration details (Lambda entry points, the
//! execution-context adapter, and the event-publisher seam) on top of the
//! pure contracts in `serverless_api_core`.

pub mod adapters;
pub mod handlers;
