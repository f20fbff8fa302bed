use super::domain::{
    BmiCategory, EmploymentStatus, Gender, InsurancePlan, MaritalStatus, Profile, Region,
    SmokingStatus,
};

/// Error raised when a pricing collaborator cannot produce a premium.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("model produced an unusable premium: {value}")]
    InvalidOutput { value: f64 },
    #[error("pricing model unavailable: {0}")]
    Unavailable(String),
}

/// Opaque pricing boundary.
///
/// Implementations must be side-effect-free and safe to retry; the quote
/// service itself never retries, but callers may.
pub trait PremiumPredictor: Send + Sync {
    fn predict(&self, profile: &Profile) -> Result<f64, PredictionError>;
}

/// Additive rates backing the default model. Multiplicative loadings for the
/// enum fields are fixed in code alongside the scoring rules.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingConfig {
    /// Annual premium for an 18 year old baseline applicant on Bronze.
    pub base_premium: f64,
    /// Added per year of age above the minimum insurable age.
    pub age_rate: f64,
    /// Added per covered dependant.
    pub dependant_rate: f64,
    /// Added per lakh of declared annual income (higher cover follows income).
    pub income_rate: f64,
    /// Added per point of genetical risk (0-5).
    pub genetical_risk_rate: f64,
    /// Added per underlying condition named by the medical history label.
    pub condition_rate: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_premium: 8_000.0,
            age_rate: 180.0,
            dependant_rate: 600.0,
            income_rate: 45.0,
            genetical_risk_rate: 900.0,
            condition_rate: 3_500.0,
        }
    }
}

/// Deterministic weight-table premium model.
///
/// Stands in for an externally trained regressor: the rest of the system only
/// sees the [`PremiumPredictor`] contract, so swapping in a real model is a
/// matter of providing another implementation.
#[derive(Debug, Clone, Default)]
pub struct LinearPremiumModel {
    config: PricingConfig,
}

impl LinearPremiumModel {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }
}

impl PremiumPredictor for LinearPremiumModel {
    fn predict(&self, profile: &Profile) -> Result<f64, PredictionError> {
        let config = &self.config;
        let insured_years = f64::from(profile.age.saturating_sub(18));

        let mut premium = config.base_premium
            + config.age_rate * insured_years
            + config.dependant_rate * f64::from(profile.dependants)
            + config.income_rate * f64::from(profile.income_lakhs)
            + config.genetical_risk_rate * f64::from(profile.genetical_risk)
            + config.condition_rate * f64::from(profile.medical_history.condition_count());

        premium += gender_loading(profile.gender)
            + marital_loading(profile.marital_status)
            + employment_loading(profile.employment_status)
            + region_loading(profile.region);

        premium *= smoking_multiplier(profile.smoking_status)
            * bmi_multiplier(profile.bmi_category)
            * plan_multiplier(profile.insurance_plan);

        let premium = premium.round();
        if !premium.is_finite() || premium < 0.0 {
            return Err(PredictionError::InvalidOutput { value: premium });
        }

        Ok(premium)
    }
}

const fn smoking_multiplier(status: SmokingStatus) -> f64 {
    match status {
        SmokingStatus::Regular => 1.45,
        SmokingStatus::Occasional => 1.18,
        SmokingStatus::NoSmoking => 1.0,
    }
}

const fn bmi_multiplier(category: BmiCategory) -> f64 {
    match category {
        BmiCategory::Obesity => 1.30,
        BmiCategory::Overweight => 1.15,
        BmiCategory::Underweight => 1.05,
        BmiCategory::Normal => 1.0,
    }
}

const fn plan_multiplier(plan: InsurancePlan) -> f64 {
    match plan {
        InsurancePlan::Bronze => 1.0,
        InsurancePlan::Silver => 1.35,
        InsurancePlan::Gold => 1.75,
    }
}

const fn gender_loading(gender: Gender) -> f64 {
    match gender {
        Gender::Male => 200.0,
        Gender::Female => 0.0,
    }
}

const fn marital_loading(status: MaritalStatus) -> f64 {
    match status {
        MaritalStatus::Married => 0.0,
        MaritalStatus::Unmarried => 250.0,
    }
}

const fn employment_loading(status: EmploymentStatus) -> f64 {
    match status {
        EmploymentStatus::Salaried => 0.0,
        EmploymentStatus::SelfEmployed => 350.0,
        EmploymentStatus::Freelancer => 500.0,
    }
}

const fn region_loading(region: Region) -> f64 {
    match region {
        Region::Northwest => 0.0,
        Region::Southwest => 150.0,
        Region::Northeast => 250.0,
        Region::Southeast => 400.0,
    }
}
