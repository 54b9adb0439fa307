//! Shared contracts for the demo serverless API.
//!
//! This crate owns the request/response contracts and the deterministic
//! handling logic behind them. It intentionally excludes AWS SDK and Lambda
//! runtime concerns.

pub mod context;
pub mod contract;
pub mod greeting;
pub mod orders;
