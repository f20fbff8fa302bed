use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Profile, QuoteRequest};
use super::intake::{IntakeBounds, IntakeError, ProfileIntake};
use super::pricing::{PredictionError, PremiumPredictor};
use super::risk::{self, RiskComponent, RiskLevel};

/// Result of a successful evaluation. Never persisted; its lifetime ends when
/// the caller renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PremiumQuote {
    pub premium: f64,
    pub risk_level: RiskLevel,
    pub risk_score: u8,
    pub risk_components: Vec<RiskComponent>,
    pub generated_at: DateTime<Utc>,
}

/// Service composing the intake guard, the pricing collaborator, and the risk
/// classifier. Stateless: each quote is computed independently.
pub struct QuoteService<P> {
    intake: ProfileIntake,
    predictor: Arc<P>,
}

impl<P> QuoteService<P>
where
    P: PremiumPredictor + 'static,
{
    pub fn new(predictor: Arc<P>) -> Self {
        Self::with_intake(ProfileIntake::default(), predictor)
    }

    pub fn with_bounds(bounds: IntakeBounds, predictor: Arc<P>) -> Self {
        Self::with_intake(ProfileIntake::with_bounds(bounds), predictor)
    }

    fn with_intake(intake: ProfileIntake, predictor: Arc<P>) -> Self {
        Self { intake, predictor }
    }

    /// Validate a raw submission and evaluate it in one step.
    pub fn quote(&self, request: QuoteRequest) -> Result<PremiumQuote, QuoteServiceError> {
        let profile = self.intake.profile_from_request(request)?;
        self.evaluate(&profile)
    }

    /// Price the profile, then derive the risk label.
    ///
    /// The predictor runs first; if it fails the error propagates as-is and
    /// the risk classifier is never consulted.
    pub fn evaluate(&self, profile: &Profile) -> Result<PremiumQuote, QuoteServiceError> {
        let premium = self.predictor.predict(profile)?;

        let assessment = risk::assess(
            profile.smoking_status,
            profile.medical_history,
            profile.bmi_category,
            profile.age,
        );

        Ok(PremiumQuote {
            premium,
            risk_level: assessment.level,
            risk_score: assessment.score,
            risk_components: assessment.components,
            generated_at: Utc::now(),
        })
    }
}

/// Error raised by the quote service.
#[derive(Debug, thiserror::Error)]
pub enum QuoteServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Prediction(#[from] PredictionError),
}
