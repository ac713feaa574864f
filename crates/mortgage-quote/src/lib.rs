//! Mortgage rate-quote client.
//!
//! Holds applicant form state, validates it against domain constraints, and submits a
//! normalized payload to an external rate-calculation backend. The pricing rules
//! themselves live behind the HTTP contract in [`quote::client`]; this crate only
//! owns the request side: validation, payload construction, and result handling.

pub mod config;
pub mod error;
pub mod quote;
pub mod telemetry;
