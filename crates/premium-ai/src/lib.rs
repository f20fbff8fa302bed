//! Health insurance premium quoting.
//!
//! The crate models a single interaction: a validated applicant [`underwriting::Profile`]
//! is priced by a pluggable [`underwriting::PremiumPredictor`] and independently screened
//! by a deterministic risk classifier. Nothing is persisted; every quote is computed from
//! scratch per request.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod underwriting;
