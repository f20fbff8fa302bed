use serde::{Deserialize, Serialize};

use super::domain::{BmiCategory, MedicalHistory, SmokingStatus};

const LOW_MAX_SCORE: u8 = 1;
const MEDIUM_MAX_SCORE: u8 = 3;
const ELEVATED_AGE_THRESHOLD: u8 = 50;

/// Three-valued classification derived independently of the premium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    const fn from_score(score: u8) -> Self {
        if score <= LOW_MAX_SCORE {
            RiskLevel::Low
        } else if score <= MEDIUM_MAX_SCORE {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

/// Profile fields consulted by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskFactor {
    Smoking,
    MedicalHistory,
    BodyMass,
    Age,
}

/// Discrete contribution to an assessment, allowing transparent output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskComponent {
    pub factor: RiskFactor,
    pub points: u8,
    pub notes: String,
}

/// Full screening result: level, additive score, and per-factor breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub score: u8,
    pub components: Vec<RiskComponent>,
}

/// Score the four screening factors and threshold the total.
///
/// Pure and exhaustive over the closed enum domains; there is no failure case.
pub fn assess(
    smoking_status: SmokingStatus,
    medical_history: MedicalHistory,
    bmi_category: BmiCategory,
    age: u8,
) -> RiskAssessment {
    let mut components = Vec::with_capacity(4);

    let smoking_points = match smoking_status {
        SmokingStatus::Regular => 3,
        SmokingStatus::Occasional => 1,
        SmokingStatus::NoSmoking => 0,
    };
    components.push(RiskComponent {
        factor: RiskFactor::Smoking,
        points: smoking_points,
        notes: match smoking_status {
            SmokingStatus::Regular => "regular tobacco use".to_string(),
            SmokingStatus::Occasional => "occasional tobacco use".to_string(),
            SmokingStatus::NoSmoking => "no tobacco use".to_string(),
        },
    });

    // Any disease combination scores the same flat amount; there is no
    // per-disease weighting.
    let medical_points = if medical_history.involves_disease() {
        2
    } else {
        0
    };
    components.push(RiskComponent {
        factor: RiskFactor::MedicalHistory,
        points: medical_points,
        notes: if medical_history.involves_disease() {
            "declared medical condition(s)".to_string()
        } else {
            "no declared conditions".to_string()
        },
    });

    let bmi_points = u8::from(bmi_category.is_elevated());
    components.push(RiskComponent {
        factor: RiskFactor::BodyMass,
        points: bmi_points,
        notes: if bmi_category.is_elevated() {
            "elevated BMI category".to_string()
        } else {
            "BMI category within range".to_string()
        },
    });

    let age_points = u8::from(age > ELEVATED_AGE_THRESHOLD);
    components.push(RiskComponent {
        factor: RiskFactor::Age,
        points: age_points,
        notes: format!("age {age}"),
    });

    let score = smoking_points + medical_points + bmi_points + age_points;

    RiskAssessment {
        level: RiskLevel::from_score(score),
        score,
        components,
    }
}

/// Threshold-only form of [`assess`] for callers that need just the label.
pub fn classify_risk(
    smoking_status: SmokingStatus,
    medical_history: MedicalHistory,
    bmi_category: BmiCategory,
    age: u8,
) -> RiskLevel {
    assess(smoking_status, medical_history, bmi_category, age).level
}
