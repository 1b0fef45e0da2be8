//! Biopsy procedures.

use patedu_model::{
    AnesthesiaKind, CareSetting, ComplexityLevel, ProcedureCategory, ProcedureEntry,
};

pub(super) const ENTRIES: &[ProcedureEntry] = &[
    ProcedureEntry {
        id: "bx-skin",
        name: "Skin Biopsy",
        spanish_name: "Biopsia de piel",
        category: ProcedureCategory::Diagnostic,
        description: "Removes a small sample of skin tissue for microscopic examination to diagnose skin conditions.",
        specialties: &["dermatology", "primary-care"],
        body_regions: &["skin"],
        complexity: ComplexityLevel::Low,
        settings: &[CareSetting::OutpatientClinic],
        anesthesia: &[AnesthesiaKind::Local],
        what_to_expect: "Area numbed with local anesthetic; small tissue sample taken with punch, shave, or excision; 5-15 minutes.",
        patient_explanation: "A small piece of skin is removed after numbing the area, then examined under a microscope to diagnose rashes, moles, or possible skin cancers.",
    },
    ProcedureEntry {
        id: "bx-breast",
        name: "Breast Biopsy (Core Needle)",
        spanish_name: "Biopsia de mama con aguja gruesa",
        category: ProcedureCategory::Diagnostic,
        description: "Uses a hollow needle to extract tissue samples from a breast abnormality, often guided by ultrasound or mammography.",
        specialties: &["radiology", "breast-surgery"],
        body_regions: &["breast"],
        complexity: ComplexityLevel::Moderate,
        settings: &[CareSetting::ImagingCenter, CareSetting::OutpatientClinic],
        anesthesia: &[AnesthesiaKind::Local],
        what_to_expect: "Breast numbed; needle guided by imaging; several samples taken; pressure applied after; 30-60 minutes.",
        patient_explanation: "After numbing the area, a needle is used to take small tissue samples from a lump or abnormality found on your mammogram or ultrasound. It avoids the need for surgery in most cases.",
    },
    ProcedureEntry {
        id: "bx-bone-marrow",
        name: "Bone Marrow Biopsy",
        spanish_name: "Biopsia de médula ósea",
        category: ProcedureCategory::Diagnostic,
        description: "Extracts a small core of bone marrow, usually from the hip bone, to evaluate blood cell production and detect cancers.",
        specialties: &["hematology", "oncology"],
        body_regions: &["bone", "hip"],
        complexity: ComplexityLevel::Moderate,
        settings: &[CareSetting::OutpatientClinic, CareSetting::HospitalOutpatient],
        anesthesia: &[AnesthesiaKind::Local, AnesthesiaKind::Sedation],
        what_to_expect: "Lie on your side; area numbed; needle inserted into hip bone; pressure sensation; 15-30 minutes.",
        patient_explanation: "A needle is inserted into your hip bone to take a small sample of bone marrow, where blood cells are made. It helps diagnose leukemia, lymphoma, anemia, and other blood disorders.",
    },
    ProcedureEntry {
        id: "bx-liver",
        name: "Liver Biopsy",
        spanish_name: "Biopsia hepática",
        category: ProcedureCategory::Diagnostic,
        description: "A needle extracts a small sample of liver tissue to evaluate liver disease severity and type.",
        specialties: &[
            "hepatology",
            "gastroenterology",
            "interventional-radiology",
        ],
        body_regions: &["liver"],
        complexity: ComplexityLevel::Moderate,
        settings: &[
            CareSetting::HospitalOutpatient,
            CareSetting::InterventionalRadiology,
        ],
        anesthesia: &[AnesthesiaKind::Local, AnesthesiaKind::Sedation],
        what_to_expect: "Ultrasound-guided; local anesthetic; brief needle insertion during breath-hold; 2-4 hours observation after.",
        patient_explanation: "After numbing the skin, a needle is briefly inserted between your ribs into the liver to take a tiny tissue sample. It helps determine the cause and severity of liver disease.",
    },
    ProcedureEntry {
        id: "bx-prostate",
        name: "Prostate Biopsy",
        spanish_name: "Biopsia de próstata",
        category: ProcedureCategory::Diagnostic,
        description: "Ultrasound-guided needle biopsy of the prostate gland to check for cancer.",
        specialties: &["urology"],
        body_regions: &["prostate"],
        complexity: ComplexityLevel::Moderate,
        settings: &[
            CareSetting::OutpatientClinic,
            CareSetting::OutpatientSurgeryCenter,
        ],
        anesthesia: &[AnesthesiaKind::Local, AnesthesiaKind::Sedation],
        what_to_expect: "Ultrasound probe used for guidance; 10-12 needle samples taken; antibiotics given; 20-30 minutes.",
        patient_explanation: "Small tissue samples are taken from the prostate using a needle guided by ultrasound. It is done to check whether an elevated PSA or abnormal exam is due to cancer.",
    },
];
