//! Mortgage request validation and submission.
//!
//! The modules here mirror the lifecycle of one application: [`domain`] holds the
//! form state and wire types, [`validation`] checks a snapshot, [`client`] talks to
//! the rate backend, [`session`] orchestrates a submission, and [`export`] writes
//! the returned options as CSV.

pub mod client;
pub mod domain;
pub mod export;
pub mod format;
pub mod session;
pub mod validation;

pub use client::{QuoteClient, QuoteError, FALLBACK_ERROR};
pub use domain::{
    HomeType, MortgageApplication, MortgageOption, QuoteRequest, UnknownHomeType, UnknownState,
    UsState,
};
pub use format::{format_amount, parse_amount, AmountParseError};
pub use session::{QuoteSession, SubmitOutcome};
pub use validation::{validate, FieldErrors};
