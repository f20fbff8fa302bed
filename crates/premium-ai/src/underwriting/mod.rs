//! Quote intake, risk screening, and premium prediction.
//!
//! The flow is strictly sequential: a raw [`QuoteRequest`] is validated into a
//! [`Profile`] at the intake boundary, the profile is priced by the configured
//! [`PremiumPredictor`], and only after pricing succeeds is the deterministic
//! risk classifier consulted. A failed prediction never produces a partial
//! quote.

pub mod domain;
pub mod intake;
pub mod pricing;
pub mod risk;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    BmiCategory, EmploymentStatus, Gender, InsurancePlan, MaritalStatus, MedicalHistory, Profile,
    QuoteRequest, Region, SmokingStatus,
};
pub use intake::{IntakeBounds, IntakeError, ProfileIntake};
pub use pricing::{LinearPremiumModel, PredictionError, PremiumPredictor, PricingConfig};
pub use risk::{classify_risk, RiskAssessment, RiskComponent, RiskFactor, RiskLevel};
pub use router::quote_router;
pub use service::{PremiumQuote, QuoteService, QuoteServiceError};
