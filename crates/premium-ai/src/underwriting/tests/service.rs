use std::sync::Arc;

use super::common::*;
use crate::underwriting::domain::{BmiCategory, MedicalHistory, SmokingStatus};
use crate::underwriting::pricing::PredictionError;
use crate::underwriting::risk::{classify_risk, RiskLevel};
use crate::underwriting::service::{QuoteService, QuoteServiceError};

#[test]
fn quote_returns_premium_with_matching_risk_label() {
    let service = default_service();

    let quote = service.quote(baseline_request()).expect("quote issued");

    assert!(quote.premium > 0.0);
    assert_eq!(quote.risk_level, RiskLevel::Low);
    assert_eq!(quote.risk_score, 0);
    assert_eq!(quote.risk_components.len(), 4);
}

#[test]
fn evaluate_risk_label_agrees_with_classifier() {
    let service = default_service();
    let mut profile = baseline_profile();
    profile.smoking_status = SmokingStatus::Regular;
    profile.medical_history = MedicalHistory::HeartDisease;
    profile.bmi_category = BmiCategory::Obesity;
    profile.age = 60;

    let quote = service.evaluate(&profile).expect("quote issued");

    assert_eq!(
        quote.risk_level,
        classify_risk(
            profile.smoking_status,
            profile.medical_history,
            profile.bmi_category,
            profile.age,
        )
    );
    assert_eq!(quote.risk_level, RiskLevel::High);
    assert_eq!(quote.risk_score, 7);
}

#[test]
fn predictor_failure_propagates_without_partial_result() {
    let service = QuoteService::new(Arc::new(UnavailablePredictor));

    let result = service.quote(baseline_request());

    match result {
        Err(QuoteServiceError::Prediction(PredictionError::Unavailable(cause))) => {
            assert!(cause.contains("offline"));
        }
        other => panic!("expected prediction failure, got {other:?}"),
    }
}

#[test]
fn out_of_range_submission_never_reaches_the_predictor() {
    let predictor = Arc::new(CountingPredictor::default());
    let service = QuoteService::new(predictor.clone());

    let mut request = baseline_request();
    request.age = 17;

    let result = service.quote(request);

    assert!(matches!(result, Err(QuoteServiceError::Intake(_))));
    assert_eq!(predictor.call_count(), 0);
}

#[test]
fn successful_quote_consults_the_predictor_exactly_once() {
    let predictor = Arc::new(CountingPredictor::default());
    let service = QuoteService::new(predictor.clone());

    let quote = service.quote(baseline_request()).expect("quote issued");

    assert_eq!(quote.premium, 12_345.0);
    assert_eq!(predictor.call_count(), 1);
}
