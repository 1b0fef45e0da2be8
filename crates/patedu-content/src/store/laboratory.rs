//! Blood tests and laboratory procedures.

use patedu_model::{
    AnesthesiaKind, CareSetting, ComplexityLevel, ProcedureCategory, ProcedureEntry,
};

pub(super) const ENTRIES: &[ProcedureEntry] = &[
    ProcedureEntry {
        id: "lab-cbc",
        name: "Complete Blood Count (CBC)",
        spanish_name: "Hemograma completo",
        category: ProcedureCategory::Diagnostic,
        description: "Measures red cells, white cells, hemoglobin, hematocrit, and platelets to evaluate overall health.",
        specialties: &["primary-care", "hematology", "internal-medicine"],
        body_regions: &["blood"],
        complexity: ComplexityLevel::Minimal,
        settings: &[CareSetting::OutpatientClinic, CareSetting::Laboratory],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "A quick blood draw from your arm vein, results typically within hours.",
        patient_explanation: "A CBC checks the different types of cells in your blood to look for infections, anemia, clotting problems, and other conditions. It is one of the most commonly ordered blood tests.",
    },
    ProcedureEntry {
        id: "lab-bmp",
        name: "Basic Metabolic Panel (BMP)",
        spanish_name: "Panel metabólico básico",
        category: ProcedureCategory::Diagnostic,
        description: "Measures glucose, electrolytes, kidney function markers, and calcium levels in the blood.",
        specialties: &["primary-care", "internal-medicine", "nephrology"],
        body_regions: &["blood"],
        complexity: ComplexityLevel::Minimal,
        settings: &[CareSetting::OutpatientClinic, CareSetting::Laboratory],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "Standard blood draw; fasting for 8-12 hours may be required.",
        patient_explanation: "This test checks your blood sugar, kidney function, and important minerals like sodium and potassium to make sure your body chemistry is balanced.",
    },
    ProcedureEntry {
        id: "lab-cmp",
        name: "Comprehensive Metabolic Panel (CMP)",
        spanish_name: "Panel metabólico completo",
        category: ProcedureCategory::Diagnostic,
        description: "Includes all BMP tests plus liver enzymes, total protein, albumin, and bilirubin.",
        specialties: &["primary-care", "internal-medicine", "hepatology"],
        body_regions: &["blood"],
        complexity: ComplexityLevel::Minimal,
        settings: &[CareSetting::OutpatientClinic, CareSetting::Laboratory],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "Standard blood draw; fasting for 10-12 hours is typically required.",
        patient_explanation: "This broader blood panel checks your kidneys, liver, blood sugar, and electrolytes all in one test to give a more complete picture of your overall health.",
    },
    ProcedureEntry {
        id: "lab-lipid",
        name: "Lipid Panel",
        spanish_name: "Panel de lípidos",
        category: ProcedureCategory::Screening,
        description: "Measures total cholesterol, LDL, HDL, and triglycerides to assess cardiovascular risk.",
        specialties: &["primary-care", "cardiology"],
        body_regions: &["blood"],
        complexity: ComplexityLevel::Minimal,
        settings: &[CareSetting::OutpatientClinic, CareSetting::Laboratory],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "Blood draw after 9-12 hours of fasting; results within 1-2 days.",
        patient_explanation: "This test measures your cholesterol and fat levels in the blood to help determine your risk for heart disease and stroke.",
    },
    ProcedureEntry {
        id: "lab-hba1c",
        name: "Hemoglobin A1C",
        spanish_name: "Hemoglobina glicosilada A1C",
        category: ProcedureCategory::Diagnostic,
        description: "Measures average blood sugar levels over the past 2-3 months for diabetes screening and monitoring.",
        specialties: &["primary-care", "endocrinology"],
        body_regions: &["blood"],
        complexity: ComplexityLevel::Minimal,
        settings: &[CareSetting::OutpatientClinic, CareSetting::Laboratory],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "Simple blood draw, no fasting required; results in 1-2 days.",
        patient_explanation: "This test shows your average blood sugar over the past 2-3 months, helping to diagnose diabetes or see how well your diabetes is being controlled.",
    },
    ProcedureEntry {
        id: "lab-tsh",
        name: "Thyroid Stimulating Hormone (TSH)",
        spanish_name: "Hormona estimulante de la tiroides",
        category: ProcedureCategory::Diagnostic,
        description: "Measures TSH levels to screen for and monitor thyroid disorders.",
        specialties: &["primary-care", "endocrinology"],
        body_regions: &["blood", "endocrine"],
        complexity: ComplexityLevel::Minimal,
        settings: &[CareSetting::OutpatientClinic, CareSetting::Laboratory],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "Blood draw, typically drawn in the morning; results in 1-2 days.",
        patient_explanation: "This test checks how well your thyroid gland is working. High levels may mean an underactive thyroid, while low levels may mean an overactive thyroid.",
    },
    ProcedureEntry {
        id: "lab-pt-inr",
        name: "PT/INR (Coagulation Test)",
        spanish_name: "Tiempo de protrombina / INR",
        category: ProcedureCategory::Diagnostic,
        description: "Measures how long it takes blood to clot, used to monitor blood-thinning medications.",
        specialties: &["hematology", "cardiology", "primary-care"],
        body_regions: &["blood"],
        complexity: ComplexityLevel::Minimal,
        settings: &[CareSetting::OutpatientClinic, CareSetting::Laboratory],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "Quick blood draw; results same day or next day.",
        patient_explanation: "This test checks how fast your blood clots. It is especially important if you take blood-thinning medications like warfarin.",
    },
    ProcedureEntry {
        id: "lab-urinalysis",
        name: "Urinalysis",
        spanish_name: "Análisis de orina",
        category: ProcedureCategory::Diagnostic,
        description: "Analyzes urine for signs of infection, kidney disease, diabetes, and other conditions.",
        specialties: &["primary-care", "urology", "nephrology"],
        body_regions: &["urinary"],
        complexity: ComplexityLevel::Minimal,
        settings: &[CareSetting::OutpatientClinic, CareSetting::Laboratory],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "You provide a urine sample in a cup; results available within hours.",
        patient_explanation: "This test examines your urine for bacteria, blood, sugar, or protein that may indicate an infection, kidney problem, or other health issue.",
    },
    ProcedureEntry {
        id: "lab-troponin",
        name: "Troponin Test",
        spanish_name: "Prueba de troponina",
        category: ProcedureCategory::Diagnostic,
        description: "Measures cardiac troponin protein levels to detect heart muscle damage.",
        specialties: &["cardiology", "emergency-medicine"],
        body_regions: &["blood", "heart"],
        complexity: ComplexityLevel::Minimal,
        settings: &[
            CareSetting::EmergencyDepartment,
            CareSetting::HospitalInpatient,
        ],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "Blood draw, often repeated at intervals; results in 1-2 hours.",
        patient_explanation: "This test looks for a protein released when your heart muscle is damaged, helping doctors determine if you are having or recently had a heart attack.",
    },
    ProcedureEntry {
        id: "lab-psa",
        name: "Prostate-Specific Antigen (PSA)",
        spanish_name: "Antígeno prostático específico",
        category: ProcedureCategory::Screening,
        description: "Measures PSA protein levels in blood to screen for prostate cancer.",
        specialties: &["urology", "primary-care"],
        body_regions: &["blood", "prostate"],
        complexity: ComplexityLevel::Minimal,
        settings: &[CareSetting::OutpatientClinic, CareSetting::Laboratory],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "Standard blood draw; results in 1-3 days.",
        patient_explanation: "This blood test measures a protein made by the prostate gland. Elevated levels may indicate prostate cancer, but can also be raised by other conditions.",
    },
    ProcedureEntry {
        id: "lab-d-dimer",
        name: "D-Dimer Test",
        spanish_name: "Prueba de dímero D",
        category: ProcedureCategory::Diagnostic,
        description: "Blood test that measures a protein fragment produced when a blood clot dissolves, used to rule out clotting events.",
        specialties: &["emergency-medicine", "hematology", "pulmonology"],
        body_regions: &["blood"],
        complexity: ComplexityLevel::Minimal,
        settings: &[CareSetting::EmergencyDepartment, CareSetting::Laboratory],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "Simple blood draw; results within hours; often used in emergency settings.",
        patient_explanation: "This blood test helps rule out dangerous blood clots like deep vein thrombosis or pulmonary embolism. A normal result makes a blood clot very unlikely.",
    },
];
