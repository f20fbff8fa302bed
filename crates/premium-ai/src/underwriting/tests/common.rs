use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::underwriting::domain::{
    BmiCategory, EmploymentStatus, Gender, InsurancePlan, MaritalStatus, MedicalHistory, Profile,
    QuoteRequest, Region, SmokingStatus,
};
use crate::underwriting::pricing::{LinearPremiumModel, PredictionError, PremiumPredictor};
use crate::underwriting::service::QuoteService;

pub(super) fn baseline_request() -> QuoteRequest {
    QuoteRequest {
        age: 30,
        dependants: 2,
        income_lakhs: 15,
        genetical_risk: 2,
        gender: Gender::Female,
        marital_status: MaritalStatus::Married,
        bmi_category: BmiCategory::Normal,
        smoking_status: SmokingStatus::NoSmoking,
        employment_status: EmploymentStatus::Salaried,
        region: Region::Northwest,
        medical_history: MedicalHistory::NoDisease,
        insurance_plan: InsurancePlan::Bronze,
    }
}

pub(super) fn baseline_profile() -> Profile {
    Profile {
        age: 30,
        dependants: 2,
        income_lakhs: 15,
        genetical_risk: 2,
        gender: Gender::Female,
        marital_status: MaritalStatus::Married,
        bmi_category: BmiCategory::Normal,
        smoking_status: SmokingStatus::NoSmoking,
        employment_status: EmploymentStatus::Salaried,
        region: Region::Northwest,
        medical_history: MedicalHistory::NoDisease,
        insurance_plan: InsurancePlan::Bronze,
    }
}

pub(super) fn default_service() -> QuoteService<LinearPremiumModel> {
    QuoteService::new(Arc::new(LinearPremiumModel::default()))
}

/// Predictor that always fails, for propagation tests.
pub(super) struct UnavailablePredictor;

impl PremiumPredictor for UnavailablePredictor {
    fn predict(&self, _profile: &Profile) -> Result<f64, PredictionError> {
        Err(PredictionError::Unavailable(
            "model endpoint offline".to_string(),
        ))
    }
}

/// Predictor that records how often it is consulted.
#[derive(Default)]
pub(super) struct CountingPredictor {
    pub(super) calls: AtomicUsize,
}

impl PremiumPredictor for CountingPredictor {
    fn predict(&self, _profile: &Profile) -> Result<f64, PredictionError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(12_345.0)
    }
}

impl CountingPredictor {
    pub(super) fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}
