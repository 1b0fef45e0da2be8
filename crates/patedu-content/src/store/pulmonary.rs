//! Pulmonary procedures.

use patedu_model::{
    AnesthesiaKind, CareSetting, ComplexityLevel, ProcedureCategory, ProcedureEntry,
};

pub(super) const ENTRIES: &[ProcedureEntry] = &[
    ProcedureEntry {
        id: "pulm-pft",
        name: "Pulmonary Function Tests (PFTs)",
        spanish_name: "Pruebas de función pulmonar",
        category: ProcedureCategory::Diagnostic,
        description: "Measures lung volumes, airflow rates, and gas exchange to evaluate breathing capacity.",
        specialties: &["pulmonology", "allergy-immunology"],
        body_regions: &["lungs"],
        complexity: ComplexityLevel::Low,
        settings: &[CareSetting::OutpatientClinic, CareSetting::HospitalOutpatient],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "Breathe into a mouthpiece with nose clipped; perform various breathing maneuvers; 30-60 minutes.",
        patient_explanation: "You breathe into a machine that measures how much air your lungs hold and how well you move air in and out. It diagnoses asthma, COPD, and other lung conditions.",
    },
    ProcedureEntry {
        id: "pulm-bronchoscopy",
        name: "Bronchoscopy",
        spanish_name: "Broncoscopia",
        category: ProcedureCategory::Diagnostic,
        description: "A thin, flexible camera is inserted through the nose or mouth into the airways to examine the bronchial tubes.",
        specialties: &["pulmonology", "thoracic-surgery"],
        body_regions: &["lungs", "airways"],
        complexity: ComplexityLevel::Moderate,
        settings: &[CareSetting::EndoscopySuite, CareSetting::OperatingRoom],
        anesthesia: &[AnesthesiaKind::Sedation, AnesthesiaKind::General],
        what_to_expect: "Fast 6 hours; sedation or general anesthesia; scope passed through nose/mouth; biopsies possible; 30-60 minutes.",
        patient_explanation: "A thin camera is placed through your nose or mouth into your airways to look for infections, tumors, or bleeding. Tissue samples or fluid can be collected during the procedure.",
    },
    ProcedureEntry {
        id: "pulm-thoracentesis",
        name: "Thoracentesis",
        spanish_name: "Toracocentesis",
        category: ProcedureCategory::Therapeutic,
        description: "A needle drains fluid from the space between the lungs and chest wall (pleural space).",
        specialties: &["pulmonology", "interventional-radiology"],
        body_regions: &["chest", "pleural-space"],
        complexity: ComplexityLevel::Moderate,
        settings: &[CareSetting::Bedside, CareSetting::HospitalOutpatient],
        anesthesia: &[AnesthesiaKind::Local],
        what_to_expect: "Sit upright leaning forward; area numbed; needle guided by ultrasound; fluid drained; 15-30 minutes.",
        patient_explanation: "A needle is inserted through your back into the fluid around your lung. Removing this fluid helps you breathe easier and allows the fluid to be tested to find the cause.",
    },
    ProcedureEntry {
        id: "pulm-chest-tube",
        name: "Chest Tube Insertion",
        spanish_name: "Inserción de tubo torácico",
        category: ProcedureCategory::Therapeutic,
        description: "A tube is placed through the chest wall into the pleural space to drain air, blood, or fluid.",
        specialties: &[
            "pulmonology",
            "thoracic-surgery",
            "emergency-medicine",
        ],
        body_regions: &["chest", "pleural-space"],
        complexity: ComplexityLevel::Moderate,
        settings: &[
            CareSetting::EmergencyDepartment,
            CareSetting::HospitalInpatient,
            CareSetting::Bedside,
        ],
        anesthesia: &[AnesthesiaKind::Local, AnesthesiaKind::Sedation],
        what_to_expect: "Area numbed; small incision between ribs; tube inserted and connected to drainage system; tube remains until drainage stops.",
        patient_explanation: "A tube is placed through a small incision between your ribs to drain air or fluid that has collected around your lung. The tube stays in place until the problem resolves, usually days.",
    },
    ProcedureEntry {
        id: "pulm-sleep-study",
        name: "Polysomnography (Sleep Study)",
        spanish_name: "Polisomnografía (estudio del sueño)",
        category: ProcedureCategory::Diagnostic,
        description: "Overnight recording of brain waves, oxygen levels, heart rate, and breathing during sleep.",
        specialties: &["pulmonology", "sleep-medicine", "neurology"],
        body_regions: &["whole-body"],
        complexity: ComplexityLevel::Low,
        settings: &[CareSetting::HospitalOutpatient, CareSetting::Home],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "Spend a night in a sleep lab; sensors placed on head, face, chest, and legs; sleep monitored all night.",
        patient_explanation: "You sleep overnight in a lab (or at home with a portable device) while sensors monitor your breathing, oxygen, brain waves, and movements to diagnose sleep apnea and other sleep disorders.",
    },
];
