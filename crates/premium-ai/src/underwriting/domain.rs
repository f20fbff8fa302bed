use serde::{Deserialize, Serialize};

/// Applicant attributes as submitted by the collector, prior to bounds checks.
///
/// Enum fields are already closed domains thanks to serde: an unknown label
/// fails deserialization at the wire boundary. The numeric fields still need
/// the range validation performed by [`super::intake::ProfileIntake`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub age: u8,
    pub dependants: u8,
    pub income_lakhs: u16,
    pub genetical_risk: u8,
    pub gender: Gender,
    pub marital_status: MaritalStatus,
    pub bmi_category: BmiCategory,
    pub smoking_status: SmokingStatus,
    pub employment_status: EmploymentStatus,
    pub region: Region,
    pub medical_history: MedicalHistory,
    pub insurance_plan: InsurancePlan,
}

/// Validated applicant profile handed to pricing and risk screening.
///
/// Construction goes through the intake guard, so downstream code may assume
/// every field is inside its documented domain and never re-validates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub age: u8,
    pub dependants: u8,
    pub income_lakhs: u16,
    pub genetical_risk: u8,
    pub gender: Gender,
    pub marital_status: MaritalStatus,
    pub bmi_category: BmiCategory,
    pub smoking_status: SmokingStatus,
    pub employment_status: EmploymentStatus,
    pub region: Region,
    pub medical_history: MedicalHistory,
    pub insurance_plan: InsurancePlan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaritalStatus {
    Married,
    Unmarried,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Normal,
    Obesity,
    Overweight,
    Underweight,
}

impl BmiCategory {
    /// Whether the category carries excess weight for risk screening purposes.
    pub const fn is_elevated(self) -> bool {
        matches!(self, BmiCategory::Obesity | BmiCategory::Overweight)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmokingStatus {
    #[serde(rename = "No Smoking")]
    NoSmoking,
    Regular,
    Occasional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentStatus {
    Salaried,
    #[serde(rename = "Self-Employed")]
    SelfEmployed,
    Freelancer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    Northwest,
    Southeast,
    Northeast,
    Southwest,
}

/// Fixed disease-combination labels offered by the collector form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MedicalHistory {
    #[serde(rename = "No Disease")]
    NoDisease,
    Diabetes,
    #[serde(rename = "High Blood Pressure")]
    HighBloodPressure,
    #[serde(rename = "Diabetes & High BP")]
    DiabetesAndHighBloodPressure,
    Thyroid,
    #[serde(rename = "Heart Disease")]
    HeartDisease,
    #[serde(rename = "BP & Heart Disease")]
    BloodPressureAndHeartDisease,
    #[serde(rename = "Diabetes & Thyroid")]
    DiabetesAndThyroid,
    #[serde(rename = "Diabetes & Heart Disease")]
    DiabetesAndHeartDisease,
}

impl MedicalHistory {
    /// Risk screening treats any disease label the same; only the absence of
    /// disease is distinguished.
    pub const fn involves_disease(self) -> bool {
        !matches!(self, MedicalHistory::NoDisease)
    }

    /// Number of underlying conditions named by the label, used by the
    /// default pricing model.
    pub const fn condition_count(self) -> u8 {
        match self {
            MedicalHistory::NoDisease => 0,
            MedicalHistory::Diabetes
            | MedicalHistory::HighBloodPressure
            | MedicalHistory::Thyroid
            | MedicalHistory::HeartDisease => 1,
            MedicalHistory::DiabetesAndHighBloodPressure
            | MedicalHistory::BloodPressureAndHeartDisease
            | MedicalHistory::DiabetesAndThyroid
            | MedicalHistory::DiabetesAndHeartDisease => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsurancePlan {
    Bronze,
    Silver,
    Gold,
}

impl InsurancePlan {
    pub const fn label(self) -> &'static str {
        match self {
            InsurancePlan::Bronze => "bronze",
            InsurancePlan::Silver => "silver",
            InsurancePlan::Gold => "gold",
        }
    }
}
