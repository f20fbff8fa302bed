use super::common::*;
use crate::underwriting::intake::{IntakeBounds, IntakeError, ProfileIntake};

fn assert_out_of_range(result: Result<crate::underwriting::Profile, IntakeError>, field: &str) {
    match result {
        Err(IntakeError::OutOfRange { field: found, .. }) => assert_eq!(found, field),
        other => panic!("expected {field} rejection, got {other:?}"),
    }
}

#[test]
fn accepts_in_domain_request_and_preserves_fields() {
    let intake = ProfileIntake::default();
    let request = baseline_request();

    let profile = intake
        .profile_from_request(request.clone())
        .expect("baseline request validates");

    assert_eq!(profile.age, request.age);
    assert_eq!(profile.income_lakhs, request.income_lakhs);
    assert_eq!(profile.medical_history, request.medical_history);
    assert_eq!(profile.insurance_plan, request.insurance_plan);
}

#[test]
fn rejects_age_below_minimum() {
    let intake = ProfileIntake::default();
    let mut request = baseline_request();
    request.age = 17;

    assert_out_of_range(intake.profile_from_request(request), "age");
}

#[test]
fn rejects_excess_dependants() {
    let intake = ProfileIntake::default();
    let mut request = baseline_request();
    request.dependants = 21;

    assert_out_of_range(intake.profile_from_request(request), "dependants");
}

#[test]
fn rejects_income_above_cap() {
    let intake = ProfileIntake::default();
    let mut request = baseline_request();
    request.income_lakhs = 201;

    assert_out_of_range(intake.profile_from_request(request), "income_lakhs");
}

#[test]
fn rejects_genetical_risk_above_scale() {
    let intake = ProfileIntake::default();
    let mut request = baseline_request();
    request.genetical_risk = 6;

    assert_out_of_range(intake.profile_from_request(request), "genetical_risk");
}

#[test]
fn boundary_values_are_inclusive() {
    let intake = ProfileIntake::default();

    let mut request = baseline_request();
    request.age = 18;
    request.dependants = 20;
    request.income_lakhs = 200;
    request.genetical_risk = 5;
    assert!(intake.profile_from_request(request).is_ok());

    let mut request = baseline_request();
    request.age = 100;
    request.dependants = 0;
    request.income_lakhs = 0;
    request.genetical_risk = 0;
    assert!(intake.profile_from_request(request).is_ok());
}

#[test]
fn custom_bounds_tighten_the_domain() {
    let intake = ProfileIntake::with_bounds(IntakeBounds {
        age: 21..=65,
        ..IntakeBounds::default()
    });

    let mut request = baseline_request();
    request.age = 70;

    assert_out_of_range(intake.profile_from_request(request), "age");
    assert_eq!(*intake.bounds().age.end(), 65);
}

#[test]
fn error_message_names_the_domain() {
    let intake = ProfileIntake::default();
    let mut request = baseline_request();
    request.age = 101;

    let message = intake
        .profile_from_request(request)
        .expect_err("out of range")
        .to_string();

    assert!(message.contains("18..=100"), "message was: {message}");
    assert!(message.contains("101"), "message was: {message}");
}
