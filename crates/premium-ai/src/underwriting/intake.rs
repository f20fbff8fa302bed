use std::ops::RangeInclusive;

use super::domain::{Profile, QuoteRequest};

/// Validation errors raised at the collector boundary.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("{field} out of range: expected {min}..={max}, found {found}")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
        found: u32,
    },
}

/// Numeric domains accepted by the collector form.
///
/// Enum fields need no counterpart here; serde already rejects labels outside
/// the closed sets declared in [`super::domain`].
#[derive(Debug, Clone)]
pub struct IntakeBounds {
    pub age: RangeInclusive<u8>,
    pub dependants: RangeInclusive<u8>,
    pub income_lakhs: RangeInclusive<u16>,
    pub genetical_risk: RangeInclusive<u8>,
}

impl Default for IntakeBounds {
    fn default() -> Self {
        Self {
            age: 18..=100,
            dependants: 0..=20,
            income_lakhs: 0..=200,
            genetical_risk: 0..=5,
        }
    }
}

/// Guard responsible for producing validated [`Profile`] instances.
#[derive(Debug, Clone, Default)]
pub struct ProfileIntake {
    bounds: IntakeBounds,
}

impl ProfileIntake {
    pub fn with_bounds(bounds: IntakeBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> &IntakeBounds {
        &self.bounds
    }

    /// Convert an inbound request into a validated applicant profile.
    pub fn profile_from_request(&self, request: QuoteRequest) -> Result<Profile, IntakeError> {
        let age = bounded("age", request.age, &self.bounds.age)?;
        let dependants = bounded("dependants", request.dependants, &self.bounds.dependants)?;
        let income_lakhs = bounded(
            "income_lakhs",
            request.income_lakhs,
            &self.bounds.income_lakhs,
        )?;
        let genetical_risk = bounded(
            "genetical_risk",
            request.genetical_risk,
            &self.bounds.genetical_risk,
        )?;

        Ok(Profile {
            age,
            dependants,
            income_lakhs,
            genetical_risk,
            gender: request.gender,
            marital_status: request.marital_status,
            bmi_category: request.bmi_category,
            smoking_status: request.smoking_status,
            employment_status: request.employment_status,
            region: request.region,
            medical_history: request.medical_history,
            insurance_plan: request.insurance_plan,
        })
    }
}

fn bounded<T>(
    field: &'static str,
    value: T,
    range: &RangeInclusive<T>,
) -> Result<T, IntakeError>
where
    T: Copy + PartialOrd + Into<u32>,
{
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(IntakeError::OutOfRange {
            field,
            min: (*range.start()).into(),
            max: (*range.end()).into(),
            found: value.into(),
        })
    }
}
