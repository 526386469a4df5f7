//! Golden tests for risk scoring and specialist matching.
//!
//! Each case runs a full input set through the engine and checks the score,
//! level and recommended specialties.

use health_risk_core::models::{Gender, RiskLevel, UserProfile, VitalReading, VitalSnapshot};
use health_risk_core::HealthEngine;

/// Test case for one complete input set.
struct GoldenCase {
    id: &'static str,
    age_years: u32,
    gender: Gender,
    heart_rate_bpm: f64,
    systolic_mmhg: f64,
    diastolic_mmhg: f64,
    weight_kg: f64,
    height_cm: f64,
    expected_score: u32,
    expected_level: RiskLevel,
    expected_specialties: &'static [&'static str],
}

fn get_golden_cases() -> Vec<GoldenCase> {
    vec![
        GoldenCase {
            id: "stage2-bp-middle-aged",
            age_years: 45,
            gender: Gender::Male,
            heart_rate_bpm: 72.0,
            systolic_mmhg: 150.0,
            diastolic_mmhg: 95.0,
            weight_kg: 80.0,
            height_cm: 175.0,
            // 15 + 0 + 25 + 10
            expected_score: 50,
            expected_level: RiskLevel::High,
            expected_specialties: &["Cardiologist", "General Physician"],
        },
        GoldenCase {
            id: "healthy-young-adult",
            age_years: 25,
            gender: Gender::Female,
            heart_rate_bpm: 70.0,
            systolic_mmhg: 115.0,
            diastolic_mmhg: 75.0,
            weight_kg: 65.0,
            height_cm: 175.0,
            expected_score: 5,
            expected_level: RiskLevel::Low,
            expected_specialties: &["General Physician"],
        },
        GoldenCase {
            id: "elderly-all-dimensions-high",
            age_years: 75,
            gender: Gender::Male,
            heart_rate_bpm: 130.0,
            systolic_mmhg: 185.0,
            diastolic_mmhg: 125.0,
            weight_kg: 110.0,
            height_cm: 170.0,
            // 30 + 25 + 35 + 30, clamped
            expected_score: 100,
            expected_level: RiskLevel::VeryHigh,
            expected_specialties: &[
                "Cardiologist",
                "Cardiac Electrophysiologist",
                "Endocrinologist",
                "General Physician",
            ],
        },
        GoldenCase {
            id: "bradycardia-underweight",
            age_years: 35,
            gender: Gender::Other,
            heart_rate_bpm: 45.0,
            systolic_mmhg: 118.0,
            diastolic_mmhg: 78.0,
            weight_kg: 50.0,
            height_cm: 175.0,
            // 10 + 15 + 0 + 10; underweight scores exactly the threshold
            expected_score: 35,
            expected_level: RiskLevel::Moderate,
            expected_specialties: &["Cardiac Electrophysiologist", "General Physician"],
        },
        GoldenCase {
            id: "elevated-bp-overweight",
            age_years: 30,
            gender: Gender::Female,
            heart_rate_bpm: 60.0,
            systolic_mmhg: 125.0,
            diastolic_mmhg: 79.0,
            weight_kg: 75.0,
            height_cm: 173.0,
            // 10 + 0 + 5 + 10
            expected_score: 25,
            expected_level: RiskLevel::Moderate,
            expected_specialties: &["General Physician"],
        },
        GoldenCase {
            id: "high-level-upper-bound",
            age_years: 60,
            gender: Gender::Male,
            heart_rate_bpm: 80.0,
            systolic_mmhg: 160.0,
            diastolic_mmhg: 100.0,
            weight_kg: 80.0,
            height_cm: 175.0,
            // 25 + 0 + 25 + 10; age alone never triggers a specialist
            expected_score: 60,
            expected_level: RiskLevel::High,
            expected_specialties: &["Cardiologist", "General Physician"],
        },
    ]
}

fn vitals_for(case: &GoldenCase) -> VitalSnapshot {
    VitalSnapshot::new()
        .with(VitalReading::HeartRate {
            bpm: case.heart_rate_bpm,
        })
        .with(VitalReading::BloodPressure {
            systolic_mmhg: case.systolic_mmhg,
            diastolic_mmhg: case.diastolic_mmhg,
        })
        .with(VitalReading::Body {
            weight_kg: case.weight_kg,
            height_cm: case.height_cm,
        })
}

#[test]
fn test_golden_cases() {
    let engine = HealthEngine::default();

    for case in get_golden_cases() {
        let profile = UserProfile::new(case.age_years, case.gender);
        let evaluation = engine.evaluate(Some(&profile), &vitals_for(&case));

        let assessment = evaluation
            .assessment
            .unwrap_or_else(|| panic!("Case {}: no assessment", case.id));

        assert_eq!(
            assessment.risk_score, case.expected_score,
            "Case {}: score mismatch",
            case.id
        );
        assert_eq!(
            assessment.risk_level.level, case.expected_level,
            "Case {}: level mismatch",
            case.id
        );
        assert_eq!(assessment.factors.len(), 4, "Case {}: factor count", case.id);
        assert_eq!(
            assessment.recommendations.len(),
            5,
            "Case {}: recommendation count",
            case.id
        );

        let specialties: Vec<&str> = evaluation
            .doctors
            .iter()
            .map(|d| d.specialty.as_str())
            .collect();
        assert_eq!(
            specialties, case.expected_specialties,
            "Case {}: specialty mismatch",
            case.id
        );
    }
}

#[test]
fn test_factor_descriptions_for_reference_case() {
    let engine = HealthEngine::default();
    let cases = get_golden_cases();
    let case = &cases[0];
    let profile = UserProfile::new(case.age_years, case.gender);
    let assessment = engine.score(Some(&profile), &vitals_for(case)).unwrap();

    let names: Vec<&str> = assessment.factors.iter().map(|f| f.factor.as_str()).collect();
    assert_eq!(names, vec!["Age Risk", "Heart Rate", "Blood Pressure", "BMI"]);
    assert!(assessment.factors[2].description.contains("150/95"));
    assert_eq!(assessment.risk_level.label, "High Risk");
}

#[test]
fn test_missing_any_input_yields_no_assessment() {
    let engine = HealthEngine::default();
    let cases = get_golden_cases();
    let full = vitals_for(&cases[0]);
    let profile = UserProfile::new(45, Gender::Male);

    let mut no_heart_rate = full.clone();
    no_heart_rate.heart_rate_bpm = None;
    let mut no_bp = full.clone();
    no_bp.blood_pressure = None;
    let mut no_body = full.clone();
    no_body.body = None;

    assert!(engine.score(None, &full).is_none());
    assert!(engine.score(Some(&profile), &no_heart_rate).is_none());
    assert!(engine.score(Some(&profile), &no_bp).is_none());
    assert!(engine.score(Some(&profile), &no_body).is_none());
}
