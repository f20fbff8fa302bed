use std::path::PathBuf;

use clap::Args;
use premium_ai::error::AppError;
use premium_ai::underwriting::{
    BmiCategory, EmploymentStatus, Gender, InsurancePlan, MaritalStatus, MedicalHistory,
    PremiumQuote, QuoteRequest, Region, SmokingStatus,
};

use crate::infra::{build_quote_service, load_request};

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// JSON file containing a collector submission
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Emit the full quote as JSON instead of a human summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Emit each quote as JSON instead of a human summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let request = load_request(&args.profile)?;
    let service = build_quote_service();
    let quote = service.quote(request)?;

    if args.json {
        match serde_json::to_string_pretty(&quote) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("quote payload unavailable: {err}"),
        }
    } else {
        render_quote(&quote);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = build_quote_service();

    println!("Premium quoting demo");
    for (description, request) in demo_profiles() {
        println!("\n{description}");
        let quote = service.quote(request)?;
        if args.json {
            match serde_json::to_string_pretty(&quote) {
                Ok(json) => println!("{json}"),
                Err(err) => println!("  quote payload unavailable: {err}"),
            }
        } else {
            render_quote(&quote);
        }
    }

    Ok(())
}

fn render_quote(quote: &PremiumQuote) {
    println!("  Predicted annual premium: {}", format_inr(quote.premium));
    println!(
        "  Risk level: {} (score {})",
        quote.risk_level.label(),
        quote.risk_score
    );
    println!("  Screening factors:");
    for component in &quote.risk_components {
        println!(
            "    - {:?}: +{} ({})",
            component.factor, component.points, component.notes
        );
    }
}

fn demo_profiles() -> Vec<(&'static str, QuoteRequest)> {
    let base = QuoteRequest {
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
    };

    let mut high_risk = base.clone();
    high_risk.age = 60;
    high_risk.smoking_status = SmokingStatus::Regular;
    high_risk.medical_history = MedicalHistory::HeartDisease;
    high_risk.bmi_category = BmiCategory::Obesity;
    high_risk.insurance_plan = InsurancePlan::Gold;

    let mut occasional = base.clone();
    occasional.smoking_status = SmokingStatus::Occasional;

    let mut medium_risk = base.clone();
    medium_risk.age = 45;
    medium_risk.medical_history = MedicalHistory::Diabetes;
    medium_risk.bmi_category = BmiCategory::Overweight;
    medium_risk.insurance_plan = InsurancePlan::Silver;

    vec![
        ("Salaried non-smoker, no conditions (Bronze)", base),
        ("Occasional smoker, no conditions (Bronze)", occasional),
        ("Diabetic, overweight, mid-career (Silver)", medium_risk),
        ("Regular smoker with heart disease, 60 (Gold)", high_risk),
    ]
}

/// Format a premium as whole rupees with thousands separators.
fn format_inr(amount: f64) -> String {
    let rupees = amount.round().max(0.0) as u64;
    let digits = rupees.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("\u{20B9}{grouped}")
}
