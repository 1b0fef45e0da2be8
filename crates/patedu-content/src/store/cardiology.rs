//! Cardiac procedures.

use patedu_model::{
    AnesthesiaKind, CareSetting, ComplexityLevel, ProcedureCategory, ProcedureEntry,
};

pub(super) const ENTRIES: &[ProcedureEntry] = &[
    ProcedureEntry {
        id: "card-ecg",
        name: "Electrocardiogram (ECG/EKG)",
        spanish_name: "Electrocardiograma",
        category: ProcedureCategory::Diagnostic,
        description: "Records the electrical activity of the heart using electrodes placed on the skin.",
        specialties: &["cardiology", "primary-care", "emergency-medicine"],
        body_regions: &["heart"],
        complexity: ComplexityLevel::Minimal,
        settings: &[
            CareSetting::OutpatientClinic,
            CareSetting::EmergencyDepartment,
            CareSetting::Bedside,
        ],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "Stickers placed on chest, arms, and legs; lie still for 10 seconds; completely painless.",
        patient_explanation: "Small sticky patches on your skin record your heart rhythm. It takes less than a minute and helps detect irregular heartbeats, heart attacks, and other heart problems.",
    },
    ProcedureEntry {
        id: "card-holter",
        name: "Holter Monitor (24-48hr)",
        spanish_name: "Monitor Holter",
        category: ProcedureCategory::Diagnostic,
        description: "Portable device that continuously records heart rhythm over 24-48 hours during normal activities.",
        specialties: &["cardiology"],
        body_regions: &["heart"],
        complexity: ComplexityLevel::Minimal,
        settings: &[CareSetting::OutpatientClinic],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "Electrodes stuck to chest; small recorder worn on belt; keep a symptom diary; return device in 1-2 days.",
        patient_explanation: "You wear a small device that records every heartbeat for 1-2 days while you go about your daily life. It catches irregular rhythms that a brief ECG might miss.",
    },
    ProcedureEntry {
        id: "card-stress-test",
        name: "Exercise Stress Test",
        spanish_name: "Prueba de esfuerzo",
        category: ProcedureCategory::Diagnostic,
        description: "Monitors heart rhythm, blood pressure, and symptoms while walking on a treadmill at increasing intensity.",
        specialties: &["cardiology"],
        body_regions: &["heart"],
        complexity: ComplexityLevel::Low,
        settings: &[CareSetting::OutpatientClinic, CareSetting::HospitalOutpatient],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "ECG leads placed; walk on treadmill with increasing speed/incline; 15-30 minutes total.",
        patient_explanation: "You walk on a treadmill while your heart rate, blood pressure, and ECG are monitored. It shows how well your heart handles physical activity and whether exercise triggers abnormal rhythms or chest pain.",
    },
    ProcedureEntry {
        id: "card-cath",
        name: "Cardiac Catheterization",
        spanish_name: "Cateterismo cardíaco",
        category: ProcedureCategory::Diagnostic,
        description: "A catheter is threaded through blood vessels to the heart to measure pressures, take images, and assess coronary arteries.",
        specialties: &["cardiology", "interventional-cardiology"],
        body_regions: &["heart", "coronary-arteries"],
        complexity: ComplexityLevel::High,
        settings: &[CareSetting::CardiacCathLab],
        anesthesia: &[AnesthesiaKind::Local, AnesthesiaKind::Sedation],
        what_to_expect: "Catheter inserted via wrist or groin; dye injected; X-ray images taken; 30-60 minutes; 2-6 hours recovery.",
        patient_explanation: "A thin tube is threaded from your wrist or groin to your heart. Dye is injected to show your coronary arteries on X-ray, identifying any blockages that may need treatment.",
    },
    ProcedureEntry {
        id: "card-pci",
        name: "Percutaneous Coronary Intervention (Angioplasty/Stent)",
        spanish_name: "Angioplastia coronaria con stent",
        category: ProcedureCategory::Therapeutic,
        description: "Opens blocked coronary arteries using a balloon catheter and often places a stent to keep the artery open.",
        specialties: &["interventional-cardiology"],
        body_regions: &["coronary-arteries", "heart"],
        complexity: ComplexityLevel::High,
        settings: &[CareSetting::CardiacCathLab],
        anesthesia: &[AnesthesiaKind::Local, AnesthesiaKind::Sedation],
        what_to_expect: "Done during or after catheterization; balloon inflated in artery; stent deployed; 1-2 hours; overnight stay.",
        patient_explanation: "A tiny balloon is inflated inside a blocked heart artery to open it up, and a small metal mesh tube (stent) is placed to keep it open. This restores blood flow to the heart muscle.",
    },
    ProcedureEntry {
        id: "card-ablation",
        name: "Cardiac Ablation",
        spanish_name: "Ablación cardíaca",
        category: ProcedureCategory::Therapeutic,
        description: "Uses heat or cold energy delivered through catheters to destroy small areas of heart tissue causing abnormal rhythms.",
        specialties: &["electrophysiology", "cardiology"],
        body_regions: &["heart"],
        complexity: ComplexityLevel::High,
        settings: &[CareSetting::CardiacCathLab, CareSetting::OperatingRoom],
        anesthesia: &[AnesthesiaKind::Sedation, AnesthesiaKind::General],
        what_to_expect: "Catheters inserted through groin veins; map heart rhythm; ablate abnormal tissue; 2-4 hours; overnight stay.",
        patient_explanation: "Thin wires are threaded to your heart to find the exact spot causing your abnormal heartbeat. That spot is then carefully destroyed using heat or freezing, often curing the arrhythmia.",
    },
    ProcedureEntry {
        id: "card-cardioversion",
        name: "Electrical Cardioversion",
        spanish_name: "Cardioversión eléctrica",
        category: ProcedureCategory::Therapeutic,
        description: "Delivers a controlled electrical shock to restore a normal heart rhythm from atrial fibrillation or flutter.",
        specialties: &["cardiology", "emergency-medicine"],
        body_regions: &["heart"],
        complexity: ComplexityLevel::Moderate,
        settings: &[
            CareSetting::HospitalOutpatient,
            CareSetting::EmergencyDepartment,
        ],
        anesthesia: &[AnesthesiaKind::Sedation],
        what_to_expect: "Pads placed on chest; brief sedation; single shock delivered; wake up quickly; 1-2 hours total.",
        patient_explanation: "While you are briefly asleep from sedation, a controlled electrical shock is delivered through pads on your chest to reset your heart back to its normal rhythm.",
    },
];
