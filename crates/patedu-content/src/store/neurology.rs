//! Neurologic procedures.

use patedu_model::{
    AnesthesiaKind, CareSetting, ComplexityLevel, ProcedureCategory, ProcedureEntry,
};

pub(super) const ENTRIES: &[ProcedureEntry] = &[
    ProcedureEntry {
        id: "neuro-lp",
        name: "Lumbar Puncture (Spinal Tap)",
        spanish_name: "Punción lumbar",
        category: ProcedureCategory::Diagnostic,
        description: "A needle is inserted into the lower spine to collect cerebrospinal fluid for analysis.",
        specialties: &["neurology", "emergency-medicine", "anesthesiology"],
        body_regions: &["spine", "nervous-system"],
        complexity: ComplexityLevel::Moderate,
        settings: &[
            CareSetting::HospitalOutpatient,
            CareSetting::EmergencyDepartment,
            CareSetting::Bedside,
        ],
        anesthesia: &[AnesthesiaKind::Local],
        what_to_expect: "Curl on your side or sit bent forward; local numbing; needle between vertebrae; 20-30 minutes; lie flat 1-2 hours after.",
        patient_explanation: "A needle is placed in your lower back to collect a small amount of the fluid surrounding your brain and spinal cord. It helps diagnose meningitis, multiple sclerosis, and other neurological conditions.",
    },
    ProcedureEntry {
        id: "neuro-eeg",
        name: "Electroencephalogram (EEG)",
        spanish_name: "Electroencefalograma",
        category: ProcedureCategory::Diagnostic,
        description: "Records electrical activity of the brain using electrodes placed on the scalp.",
        specialties: &["neurology"],
        body_regions: &["brain"],
        complexity: ComplexityLevel::Low,
        settings: &[
            CareSetting::OutpatientClinic,
            CareSetting::HospitalOutpatient,
            CareSetting::Bedside,
        ],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "Electrodes glued to scalp; lie quietly for 20-40 minutes; may be asked to hyperventilate or look at flashing lights.",
        patient_explanation: "Small sensors are placed on your scalp to record your brain waves. It is the main test used to diagnose epilepsy and evaluate seizure types.",
    },
    ProcedureEntry {
        id: "neuro-emg",
        name: "Electromyography (EMG) / Nerve Conduction Study",
        spanish_name: "Electromiografía y velocidad de conducción nerviosa",
        category: ProcedureCategory::Diagnostic,
        description: "Tests the electrical activity of muscles and the speed of nerve signal transmission.",
        specialties: &["neurology", "physical-medicine"],
        body_regions: &["nerves", "muscles"],
        complexity: ComplexityLevel::Low,
        settings: &[CareSetting::OutpatientClinic, CareSetting::HospitalOutpatient],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "Small electrical shocks to nerves; thin needle inserted into muscles; mild discomfort; 30-60 minutes.",
        patient_explanation: "This two-part test checks how well your nerves and muscles work. Small electrical impulses test nerve speed, and a thin needle in the muscle records its electrical activity to diagnose nerve damage or muscle disease.",
    },
    ProcedureEntry {
        id: "neuro-carotid-us",
        name: "Carotid Ultrasound",
        spanish_name: "Ultrasonido carotídeo",
        category: ProcedureCategory::Diagnostic,
        description: "Uses ultrasound to evaluate blood flow in the carotid arteries and detect plaque buildup.",
        specialties: &["neurology", "vascular-surgery", "radiology"],
        body_regions: &["neck", "carotid-arteries"],
        complexity: ComplexityLevel::Minimal,
        settings: &[CareSetting::OutpatientClinic, CareSetting::ImagingCenter],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "Gel on neck; probe moved along both sides; painless; 20-30 minutes.",
        patient_explanation: "An ultrasound probe is moved along your neck to see the arteries that supply blood to your brain. It detects narrowing or plaque that could increase your stroke risk.",
    },
];
