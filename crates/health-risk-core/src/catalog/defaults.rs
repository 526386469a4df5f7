//! Built-in catalog data.
//!
//! Vaccine schedules follow the Indian immunization schedule for children and
//! common adult guidance for later brackets.

use crate::models::{
    AgeGroup, HealthcareMeasure, MedicationAdvice, Priority, RiskDimension, SpecialistEntry,
    SpecialistTrigger, Vaccine,
};

use crate::models::Priority::{High, Low, Medium};

use super::{CareBracket, CareCatalog, Gendered, SpecialistCatalog};

pub const CARE_CATALOG_VERSION: &str = "2025.1";
pub const SPECIALIST_CATALOG_VERSION: &str = "2025.1";

fn v(name: &str, description: &str, age_range: &str, priority: Priority, schedule: &str) -> Vaccine {
    Vaccine::new(name, description, age_range, priority, schedule)
}

fn m(category: &str, measures: &[&str], priority: Priority) -> HealthcareMeasure {
    HealthcareMeasure::new(category, measures, priority)
}

fn a(category: &str, advice: &[&str], priority: Priority) -> MedicationAdvice {
    MedicationAdvice::new(category, advice, priority)
}

fn bracket(
    group: AgeGroup,
    vaccines: Vec<Vaccine>,
    healthcare_measures: Gendered<HealthcareMeasure>,
    medication_advice: Gendered<MedicationAdvice>,
) -> CareBracket {
    CareBracket {
        group,
        label: group.label().to_string(),
        vaccines,
        healthcare_measures,
        medication_advice,
    }
}

fn infant() -> CareBracket {
    bracket(
        AgeGroup::Infant,
        vec![
            v("BCG", "Tuberculosis vaccine", "At birth", High, "Single dose"),
            v("Hepatitis B", "Hepatitis B vaccine", "At birth, 6 weeks, 10-14 weeks", High, "3 doses"),
            v("OPV/IPV", "Polio vaccine", "6, 10, 14 weeks", High, "3 doses"),
            v("DPT", "Diphtheria, Pertussis, Tetanus", "6, 10, 14 weeks", High, "3 doses"),
            v("Hib", "Haemophilus influenzae type b", "6, 10, 14 weeks", High, "3 doses"),
            v("Rotavirus", "Rotavirus vaccine", "6, 10, 14 weeks", High, "3 doses"),
            v("PCV", "Pneumococcal conjugate vaccine", "6, 10, 14 weeks", High, "3 doses"),
            v("MMR", "Measles, Mumps, Rubella", "9-12 months", High, "1st dose"),
        ],
        Gendered::Shared(vec![
            m("Nutrition", &["Exclusive breastfeeding for 6 months", "Iron and Vitamin D supplements as prescribed"], High),
            m("Growth Monitoring", &["Monthly weight checks", "Growth chart plotting", "Developmental milestones tracking"], High),
            m("Hygiene", &["Hand hygiene for caregivers", "Clean feeding equipment", "Safe water use"], High),
        ]),
        Gendered::Shared(vec![
            a("Supplements", &["Vitamin D drops (400 IU daily)", "Iron supplements as prescribed by doctor"], High),
            a("Safety", &["Avoid honey before 12 months", "No cow milk before 12 months", "Paracetamol only as prescribed"], High),
        ]),
    )
}

fn child() -> CareBracket {
    bracket(
        AgeGroup::Child,
        vec![
            v("DPT Booster", "Diphtheria, Pertussis, Tetanus booster", "16-24 months, 4-6 years", High, "Booster doses"),
            v("OPV Booster", "Polio vaccine booster", "16-24 months, 4-6 years", High, "Booster doses"),
            v("MMR 2nd dose", "Measles, Mumps, Rubella 2nd dose", "16-24 months", High, "2nd dose"),
            v("Typhoid", "Typhoid vaccine", "2+ years", Medium, "Every 3 years"),
            v("Hepatitis A", "Hepatitis A vaccine", "2+ years", Medium, "2 doses"),
            v("Varicella", "Chickenpox vaccine", "12+ months", Medium, "2 doses"),
        ],
        Gendered::Shared(vec![
            m("Nutrition", &["Balanced diet with fruits and vegetables", "Adequate protein intake", "Limit junk food"], High),
            m("Physical Activity", &["At least 1 hour daily physical activity", "Outdoor play time", "Limit screen time to 2 hours"], High),
            m("Dental Health", &["Brush teeth twice daily", "Regular dental checkups", "Fluoride toothpaste"], High),
            m("Sleep", &["10-11 hours of sleep daily", "Regular sleep schedule", "Screen-free bedroom"], Medium),
        ]),
        Gendered::Shared(vec![
            a("Supplements", &["Vitamin D as recommended", "Multivitamins if diet is inadequate"], Medium),
            a("Medicine Safety", &["Use child-proof medicine containers", "Age-appropriate dosages only", "Complete antibiotic courses"], High),
        ]),
    )
}

fn adolescent() -> CareBracket {
    bracket(
        AgeGroup::Adolescent,
        vec![
            v("Tdap", "Tetanus, Diphtheria, Pertussis booster", "11-12 years", High, "1 dose"),
            v("HPV", "Human Papillomavirus vaccine", "9-26 years", High, "2-3 doses"),
            v("Meningococcal", "Meningococcal conjugate vaccine", "11-12 years", Medium, "1-2 doses"),
            v("Annual Flu", "Seasonal influenza vaccine", "Yearly", Medium, "Annual"),
        ],
        Gendered::ByBranch {
            female: vec![
                m("Reproductive Health", &["Menstrual hygiene education", "Iron supplementation during menstruation", "Annual gynecological consultation"], High),
                m("Nutrition", &["Iron-rich foods", "Calcium supplementation", "Folic acid rich foods"], High),
                m("Mental Health", &["Body image counseling", "Stress management techniques", "Open communication about changes"], Medium),
                m("Physical Activity", &["Regular exercise (30 mins daily)", "Sports participation", "Strength training"], Medium),
            ],
            default: vec![
                m("Physical Development", &["Regular health checkups", "Height and weight monitoring", "Puberty counseling"], High),
                m("Nutrition", &["High protein diet", "Calcium and Vitamin D", "Avoid excessive junk food"], High),
                m("Mental Health", &["Stress management", "Social skills development", "Academic pressure counseling"], Medium),
                m("Physical Activity", &["Daily sports/exercise", "Strength building activities", "Outdoor activities"], Medium),
            ],
        },
        Gendered::Shared(vec![
            a("Supplements", &["Iron supplements if anemic", "Vitamin D3 (1000-2000 IU daily)", "Calcium supplements"], Medium),
            a("Mental Health", &["Avoid substance abuse", "Seek help for depression/anxiety", "Maintain sleep hygiene"], High),
        ]),
    )
}

fn young_adult() -> CareBracket {
    bracket(
        AgeGroup::YoungAdult,
        vec![
            v("Annual Flu", "Seasonal influenza vaccine", "Yearly", Medium, "Annual"),
            v("Tdap", "Tetanus, Diphtheria, Pertussis booster", "Every 10 years", High, "Every 10 years"),
            v("HPV", "Human Papillomavirus vaccine (if not received)", "Up to 26 years", High, "2-3 doses"),
            v("Hepatitis B", "Hepatitis B vaccine (if not immune)", "Any age", Medium, "3 doses"),
            v("MMR", "Measles, Mumps, Rubella (if not immune)", "Any age", Medium, "1-2 doses"),
        ],
        Gendered::ByBranch {
            female: vec![
                m("Reproductive Health", &["Annual Pap smear (21+ years)", "Breast self-examination", "Contraception counseling", "Preconception care if planning pregnancy"], High),
                m("Preventive Screening", &["Blood pressure check yearly", "Cholesterol screening", "Diabetes screening if risk factors"], High),
                m("Lifestyle", &["Regular exercise (150 mins/week)", "Healthy diet", "Stress management", "Avoid smoking/alcohol"], Medium),
            ],
            default: vec![
                m("Preventive Screening", &["Blood pressure check yearly", "Cholesterol screening every 5 years", "Diabetes screening if risk factors"], High),
                m("Men's Health", &["Testicular self-examination", "Prostate awareness", "Mental health screening"], High),
                m("Lifestyle", &["Regular exercise (150 mins/week)", "Healthy diet", "Stress management", "Limit alcohol consumption"], Medium),
            ],
        },
        Gendered::Shared(vec![
            a("Supplements", &["Vitamin D3 if deficient", "Multivitamin if diet inadequate", "Omega-3 supplements"], Low),
            a("Preventive Care", &["Regular health checkups", "Maintain healthy weight", "Monitor blood pressure"], High),
        ]),
    )
}

fn middle_aged() -> CareBracket {
    bracket(
        AgeGroup::MiddleAged,
        vec![
            v("Annual Flu", "Seasonal influenza vaccine", "Yearly", High, "Annual"),
            v("Tdap", "Tetanus, Diphtheria, Pertussis booster", "Every 10 years", High, "Every 10 years"),
            v("Zoster (Shingles)", "Herpes Zoster vaccine", "50+ years", Medium, "1-2 doses"),
            v("Pneumococcal", "Pneumococcal vaccine", "50+ years with risk factors", Medium, "1-2 doses"),
        ],
        Gendered::ByBranch {
            female: vec![
                m("Women's Health", &["Annual mammography (40+ years)", "Pap smear every 3 years", "Bone density screening (65+ or risk factors)", "Menopause management"], High),
                m("Chronic Disease Prevention", &["Blood pressure monitoring", "Cholesterol screening", "Diabetes screening", "Thyroid function tests"], High),
                m("Lifestyle", &["Weight management", "Regular exercise", "Stress reduction", "Adequate sleep"], Medium),
            ],
            default: vec![
                m("Men's Health", &["Prostate screening (50+ years)", "Colonoscopy (45+ years)", "Cardiovascular risk assessment"], High),
                m("Chronic Disease Prevention", &["Blood pressure monitoring", "Cholesterol screening", "Diabetes screening", "Kidney function tests"], High),
                m("Lifestyle", &["Weight management", "Regular exercise", "Smoking cessation", "Limit alcohol"], Medium),
            ],
        },
        Gendered::Shared(vec![
            a("Chronic Conditions", &["Take prescribed medications regularly", "Monitor blood pressure", "Diabetes management if applicable"], High),
            a("Supplements", &["Calcium and Vitamin D", "Omega-3 fatty acids", "Multivitamin with B12"], Medium),
        ]),
    )
}

fn elderly() -> CareBracket {
    bracket(
        AgeGroup::Elderly,
        vec![
            v("Annual Flu", "High-dose influenza vaccine", "Yearly", High, "Annual"),
            v("Pneumococcal", "Pneumococcal vaccines (PCV13 & PPSV23)", "65+ years", High, "Both vaccines"),
            v("Zoster (Shingles)", "Herpes Zoster vaccine", "65+ years", High, "2 doses"),
            v("Tdap", "Tetanus, Diphtheria, Pertussis booster", "Every 10 years", High, "Every 10 years"),
            v("COVID-19", "COVID-19 vaccine and boosters", "As recommended", High, "As per guidelines"),
        ],
        Gendered::Shared(vec![
            m("Chronic Disease Management", &["Regular medication review", "Blood pressure monitoring", "Diabetes management", "Heart health monitoring"], High),
            m("Fall Prevention", &["Balance exercises", "Home safety assessment", "Vision and hearing checks", "Medication review for side effects"], High),
            m("Cognitive Health", &["Memory screening", "Social engagement", "Mental stimulation", "Depression screening"], High),
            m("Nutrition", &["Adequate protein intake", "Hydration monitoring", "Vitamin B12 and D supplementation", "Regular meals"], Medium),
        ]),
        Gendered::Shared(vec![
            a("Medication Management", &["Use pill organizers", "Regular medication reviews", "Monitor for drug interactions", "Keep updated medication list"], High),
            a("Essential Supplements", &["Vitamin D3 (800-1000 IU daily)", "Vitamin B12 supplements", "Calcium supplements", "Omega-3 fatty acids"], High),
            a("Safety", &["Regular eye exams", "Blood pressure monitoring", "Fall risk assessment", "Emergency contact information"], High),
        ]),
    )
}

/// The built-in care catalog.
pub fn care_catalog() -> CareCatalog {
    let brackets = vec![
        infant(),
        child(),
        adolescent(),
        young_adult(),
        middle_aged(),
        elderly(),
    ];
    CareCatalog::from_parts(CARE_CATALOG_VERSION.to_string(), brackets)
}

#[allow(clippy::too_many_arguments)]
fn doctor(
    id: &str,
    specialty: &str,
    name: &str,
    hospital: &str,
    experience_years: u32,
    rating: f64,
    consultation_fee: u32,
    available_slots: u32,
    is_online: bool,
    reason: &str,
) -> SpecialistEntry {
    SpecialistEntry {
        id: id.to_string(),
        specialty: specialty.to_string(),
        doctor_name: name.to_string(),
        hospital: hospital.to_string(),
        experience_years,
        rating,
        consultation_fee,
        available_slots,
        is_online,
        reason: reason.to_string(),
        triggers: Vec::new(),
    }
}

/// The built-in specialist catalog.
pub fn specialist_catalog() -> SpecialistCatalog {
    let specialists = vec![
        doctor(
            "doc-001",
            "Cardiologist",
            "Dr. Sarah Cardiovascular",
            "Heart Care Hospital",
            12,
            4.8,
            150,
            3,
            true,
            "Your blood pressure readings indicate potential cardiovascular risk",
        )
        .with_trigger(SpecialistTrigger::FactorContains(
            RiskDimension::BloodPressure.label().to_string(),
        )),
        doctor(
            "doc-002",
            "Cardiac Electrophysiologist",
            "Dr. Michael Rhythm",
            "Advanced Cardiac Center",
            8,
            4.7,
            200,
            2,
            false,
            "Your heart rate patterns may require specialized cardiac evaluation",
        )
        .with_trigger(SpecialistTrigger::FactorContains(
            RiskDimension::HeartRate.label().to_string(),
        )),
        doctor(
            "doc-003",
            "Endocrinologist",
            "Dr. Lisa Nutrition",
            "Wellness Medical Center",
            10,
            4.9,
            120,
            5,
            true,
            "Your BMI suggests potential metabolic concerns that need attention",
        )
        .with_trigger(SpecialistTrigger::FactorContains(
            RiskDimension::Bmi.label().to_string(),
        )),
    ];

    let generalist = doctor(
        "doc-004",
        "General Physician",
        "Dr. James General",
        "City General Hospital",
        15,
        4.6,
        80,
        8,
        true,
        "Recommended for overall health monitoring and preventive care",
    );

    SpecialistCatalog::from_parts(
        SPECIALIST_CATALOG_VERSION.to_string(),
        specialists,
        generalist,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalogs_pass_validation() {
        let care = care_catalog();
        let revalidated =
            CareCatalog::new(care.version().to_string(), care.brackets().to_vec()).unwrap();
        assert_eq!(revalidated, care);

        let doctors = specialist_catalog();
        let revalidated = SpecialistCatalog::new(
            doctors.version().to_string(),
            doctors.specialists().to_vec(),
            doctors.generalist().clone(),
        )
        .unwrap();
        assert_eq!(revalidated, doctors);
    }

    #[test]
    fn test_branched_brackets() {
        let catalog = care_catalog();
        for group in AgeGroup::ALL {
            let branched = catalog.bracket(group).healthcare_measures.is_branched();
            let expected = matches!(
                group,
                AgeGroup::Adolescent | AgeGroup::YoungAdult | AgeGroup::MiddleAged
            );
            assert_eq!(branched, expected, "{:?}", group);
        }
    }

    #[test]
    fn test_vaccine_names_unique_per_bracket() {
        let catalog = care_catalog();
        for bracket in catalog.brackets() {
            let mut names: Vec<_> = bracket.vaccines.iter().map(|v| &v.name).collect();
            let total = names.len();
            names.sort();
            names.dedup();
            assert_eq!(names.len(), total, "{:?}", bracket.group);
        }
    }

    #[test]
    fn test_specialists_in_catalog_order() {
        let catalog = specialist_catalog();
        let specialties: Vec<_> = catalog
            .specialists()
            .iter()
            .map(|s| s.specialty.as_str())
            .collect();
        assert_eq!(
            specialties,
            vec!["Cardiologist", "Cardiac Electrophysiologist", "Endocrinologist"]
        );
        assert_eq!(catalog.generalist().specialty, "General Physician");
    }
}
