//! X-ray, CT, MRI, ultrasound and nuclear imaging.

use patedu_model::{
    AnesthesiaKind, CareSetting, ComplexityLevel, ProcedureCategory, ProcedureEntry,
};

pub(super) const ENTRIES: &[ProcedureEntry] = &[
    ProcedureEntry {
        id: "img-xray-chest",
        name: "Chest X-Ray",
        spanish_name: "Radiografía de tórax",
        category: ProcedureCategory::Diagnostic,
        description: "Uses low-dose radiation to create images of the heart, lungs, airways, and chest bones.",
        specialties: &["radiology", "pulmonology", "emergency-medicine"],
        body_regions: &["chest", "lungs", "heart"],
        complexity: ComplexityLevel::Minimal,
        settings: &[
            CareSetting::OutpatientClinic,
            CareSetting::ImagingCenter,
            CareSetting::EmergencyDepartment,
        ],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "Stand against a plate, hold your breath briefly; done in under 5 minutes.",
        patient_explanation: "A chest X-ray takes a quick picture of your lungs and heart using a small amount of radiation. It helps detect pneumonia, heart problems, and other chest conditions.",
    },
    ProcedureEntry {
        id: "img-ct-head",
        name: "CT Scan - Head",
        spanish_name: "Tomografía computarizada de cabeza",
        category: ProcedureCategory::Diagnostic,
        description: "Creates detailed cross-sectional images of the brain and skull using X-rays.",
        specialties: &[
            "radiology",
            "neurology",
            "emergency-medicine",
            "neurosurgery",
        ],
        body_regions: &["head", "brain"],
        complexity: ComplexityLevel::Low,
        settings: &[
            CareSetting::ImagingCenter,
            CareSetting::HospitalOutpatient,
            CareSetting::EmergencyDepartment,
        ],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "Lie still on a table that slides through a ring-shaped scanner; takes 5-10 minutes.",
        patient_explanation: "A CT of the head uses X-rays from many angles to build detailed images of your brain. It can quickly detect bleeding, stroke, tumors, and skull fractures.",
    },
    ProcedureEntry {
        id: "img-ct-abdomen",
        name: "CT Scan - Abdomen/Pelvis",
        spanish_name: "Tomografía de abdomen y pelvis",
        category: ProcedureCategory::Diagnostic,
        description: "Detailed imaging of abdominal and pelvic organs, often with IV contrast dye.",
        specialties: &[
            "radiology",
            "gastroenterology",
            "surgery",
            "emergency-medicine",
        ],
        body_regions: &["abdomen", "pelvis"],
        complexity: ComplexityLevel::Low,
        settings: &[
            CareSetting::ImagingCenter,
            CareSetting::HospitalOutpatient,
            CareSetting::EmergencyDepartment,
        ],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "May drink oral contrast; IV contrast may be injected; scan takes 10-15 minutes.",
        patient_explanation: "This scan creates detailed images of your abdominal organs like the liver, kidneys, and intestines. Contrast dye helps organs and blood vessels show up more clearly.",
    },
    ProcedureEntry {
        id: "img-ct-chest",
        name: "CT Scan - Chest",
        spanish_name: "Tomografía de tórax",
        category: ProcedureCategory::Diagnostic,
        description: "High-resolution imaging of the lungs, mediastinum, and chest structures.",
        specialties: &["radiology", "pulmonology", "oncology"],
        body_regions: &["chest", "lungs"],
        complexity: ComplexityLevel::Low,
        settings: &[CareSetting::ImagingCenter, CareSetting::HospitalOutpatient],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "Lie still, hold your breath when told; IV contrast may be used; takes about 10 minutes.",
        patient_explanation: "A chest CT provides much more detail than a regular X-ray, showing the lungs and surrounding structures to detect tumors, infections, blood clots, and other problems.",
    },
    ProcedureEntry {
        id: "img-mri-brain",
        name: "MRI - Brain",
        spanish_name: "Resonancia magnética de cerebro",
        category: ProcedureCategory::Diagnostic,
        description: "Uses magnetic fields and radio waves to create detailed images of brain structures without radiation.",
        specialties: &["radiology", "neurology", "neurosurgery"],
        body_regions: &["head", "brain"],
        complexity: ComplexityLevel::Low,
        settings: &[CareSetting::ImagingCenter, CareSetting::HospitalOutpatient],
        anesthesia: &[AnesthesiaKind::None, AnesthesiaKind::Sedation],
        what_to_expect: "Lie inside a tube-shaped magnet for 30-60 minutes; loud knocking sounds; earplugs provided.",
        patient_explanation: "An MRI uses powerful magnets (no radiation) to create extremely detailed pictures of your brain. It is the best way to see brain tumors, multiple sclerosis, and many other conditions.",
    },
    ProcedureEntry {
        id: "img-mri-spine",
        name: "MRI - Spine",
        spanish_name: "Resonancia magnética de columna",
        category: ProcedureCategory::Diagnostic,
        description: "Detailed imaging of spinal cord, nerve roots, vertebrae, and discs without radiation.",
        specialties: &["radiology", "neurology", "orthopedics", "neurosurgery"],
        body_regions: &["spine"],
        complexity: ComplexityLevel::Low,
        settings: &[CareSetting::ImagingCenter, CareSetting::HospitalOutpatient],
        anesthesia: &[AnesthesiaKind::None, AnesthesiaKind::Sedation],
        what_to_expect: "Lie still in the scanner for 30-45 minutes; may need contrast injection.",
        patient_explanation: "A spine MRI shows detailed images of your spinal cord, discs, and nerves to identify herniated discs, spinal stenosis, tumors, or infections.",
    },
    ProcedureEntry {
        id: "img-ultrasound-abdomen",
        name: "Abdominal Ultrasound",
        spanish_name: "Ultrasonido abdominal",
        category: ProcedureCategory::Diagnostic,
        description: "Uses sound waves to image abdominal organs including liver, gallbladder, kidneys, and pancreas.",
        specialties: &["radiology", "gastroenterology", "primary-care"],
        body_regions: &["abdomen"],
        complexity: ComplexityLevel::Minimal,
        settings: &[CareSetting::OutpatientClinic, CareSetting::ImagingCenter],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "Gel applied to skin; technician moves a probe over your abdomen; takes 20-30 minutes.",
        patient_explanation: "An ultrasound uses sound waves (no radiation) to create pictures of your organs. It is commonly used to check the gallbladder, liver, kidneys, and look for fluid or masses.",
    },
    ProcedureEntry {
        id: "img-echo",
        name: "Echocardiogram (Transthoracic)",
        spanish_name: "Ecocardiograma transtorácico",
        category: ProcedureCategory::Diagnostic,
        description: "Ultrasound of the heart to evaluate structure, valves, and pumping function.",
        specialties: &["cardiology"],
        body_regions: &["heart"],
        complexity: ComplexityLevel::Low,
        settings: &[CareSetting::OutpatientClinic, CareSetting::HospitalOutpatient],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "Gel on chest; probe pressed against chest wall; takes 30-60 minutes.",
        patient_explanation: "An echocardiogram is an ultrasound of your heart. It shows how well your heart pumps, whether your valves work properly, and if there are any structural problems.",
    },
    ProcedureEntry {
        id: "img-mammogram",
        name: "Mammogram",
        spanish_name: "Mamografía",
        category: ProcedureCategory::Screening,
        description: "Low-dose X-ray of the breast tissue to screen for and detect breast cancer.",
        specialties: &["radiology", "breast-surgery"],
        body_regions: &["breast"],
        complexity: ComplexityLevel::Minimal,
        settings: &[CareSetting::ImagingCenter, CareSetting::OutpatientClinic],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "Breast compressed between two plates for a few seconds per view; mild discomfort; 15-20 minutes.",
        patient_explanation: "A mammogram is an X-ray of your breasts that can find cancers too small to feel. Regular screening mammograms are recommended starting between ages 40-50.",
    },
    ProcedureEntry {
        id: "img-dexa",
        name: "DEXA Scan (Bone Density)",
        spanish_name: "Densitometría ósea DEXA",
        category: ProcedureCategory::Screening,
        description: "Low-dose X-ray that measures bone mineral density to diagnose osteoporosis.",
        specialties: &["radiology", "endocrinology", "rheumatology"],
        body_regions: &["spine", "hip", "bone"],
        complexity: ComplexityLevel::Minimal,
        settings: &[CareSetting::ImagingCenter, CareSetting::OutpatientClinic],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "Lie on a table while a scanner passes over your hip and spine; painless; 10-15 minutes.",
        patient_explanation: "A DEXA scan measures how strong your bones are. It helps detect osteoporosis (weak bones) so treatment can start before a fracture happens.",
    },
    ProcedureEntry {
        id: "img-pet-ct",
        name: "PET/CT Scan",
        spanish_name: "Tomografía PET/CT",
        category: ProcedureCategory::Diagnostic,
        description: "Combines PET and CT imaging using a radioactive tracer to detect cancer, assess treatment response, and evaluate metabolic activity.",
        specialties: &["radiology", "oncology", "nuclear-medicine"],
        body_regions: &["whole-body"],
        complexity: ComplexityLevel::Moderate,
        settings: &[CareSetting::ImagingCenter, CareSetting::HospitalOutpatient],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "Radioactive sugar injected; wait 60 minutes; lie still for 30-45 minute scan.",
        patient_explanation: "A PET/CT scan uses a small amount of radioactive sugar to highlight areas of high activity in your body, which can reveal cancer, assess if treatment is working, and detect recurrence.",
    },
];
