//! Endoscopy and GI procedures.

use patedu_model::{
    AnesthesiaKind, CareSetting, ComplexityLevel, ProcedureCategory, ProcedureEntry,
};

pub(super) const ENTRIES: &[ProcedureEntry] = &[
    ProcedureEntry {
        id: "endo-egd",
        name: "Upper Endoscopy (EGD)",
        spanish_name: "Endoscopia digestiva alta",
        category: ProcedureCategory::Diagnostic,
        description: "A flexible camera is passed through the mouth to examine the esophagus, stomach, and upper small intestine.",
        specialties: &["gastroenterology"],
        body_regions: &["esophagus", "stomach", "duodenum"],
        complexity: ComplexityLevel::Moderate,
        settings: &[
            CareSetting::EndoscopySuite,
            CareSetting::OutpatientSurgeryCenter,
        ],
        anesthesia: &[AnesthesiaKind::Sedation],
        what_to_expect: "Fast 6-8 hours before; IV sedation given; scope inserted through mouth; 15-20 minutes.",
        patient_explanation: "A thin, flexible camera is placed through your mouth into your stomach. It lets the doctor see ulcers, inflammation, or growths and take tissue samples if needed.",
    },
    ProcedureEntry {
        id: "endo-colonoscopy",
        name: "Colonoscopy",
        spanish_name: "Colonoscopia",
        category: ProcedureCategory::Screening,
        description: "A flexible camera examines the entire colon and rectum for polyps, cancer, and inflammatory conditions.",
        specialties: &["gastroenterology", "colorectal-surgery"],
        body_regions: &["colon", "rectum"],
        complexity: ComplexityLevel::Moderate,
        settings: &[
            CareSetting::EndoscopySuite,
            CareSetting::OutpatientSurgeryCenter,
        ],
        anesthesia: &[AnesthesiaKind::Sedation],
        what_to_expect: "Bowel prep day before; IV sedation; scope inserted through rectum; 30-60 minutes.",
        patient_explanation: "A camera on a flexible tube is placed through the rectum to examine your entire colon. Polyps can be removed during the procedure, preventing them from becoming cancer.",
    },
    ProcedureEntry {
        id: "endo-sigmoidoscopy",
        name: "Flexible Sigmoidoscopy",
        spanish_name: "Sigmoidoscopia flexible",
        category: ProcedureCategory::Diagnostic,
        description: "Examines the rectum and lower colon (sigmoid) with a flexible scope.",
        specialties: &["gastroenterology", "colorectal-surgery"],
        body_regions: &["colon", "rectum"],
        complexity: ComplexityLevel::Low,
        settings: &[CareSetting::OutpatientClinic, CareSetting::EndoscopySuite],
        anesthesia: &[AnesthesiaKind::None, AnesthesiaKind::Sedation],
        what_to_expect: "Enema prep; shorter scope than colonoscopy; usually no sedation needed; 10-20 minutes.",
        patient_explanation: "Similar to a colonoscopy but only examines the lower portion of your colon. It requires less preparation and often no sedation.",
    },
    ProcedureEntry {
        id: "endo-ercp",
        name: "ERCP (Endoscopic Retrograde Cholangiopancreatography)",
        spanish_name: "Colangiopancreatografía retrógrada endoscópica",
        category: ProcedureCategory::Therapeutic,
        description: "Combines endoscopy and fluoroscopy to diagnose and treat bile duct and pancreatic duct problems.",
        specialties: &["gastroenterology", "interventional-endoscopy"],
        body_regions: &["bile-ducts", "pancreas"],
        complexity: ComplexityLevel::High,
        settings: &[CareSetting::EndoscopySuite, CareSetting::HospitalOutpatient],
        anesthesia: &[AnesthesiaKind::Sedation, AnesthesiaKind::General],
        what_to_expect: "Fast overnight; deep sedation or general anesthesia; scope to bile ducts; 30-90 minutes.",
        patient_explanation: "A special scope is passed through your mouth to where the bile duct enters your intestine. Dye is injected to see the ducts on X-ray, and stones can be removed or blockages opened.",
    },
    ProcedureEntry {
        id: "endo-capsule",
        name: "Capsule Endoscopy",
        spanish_name: "Endoscopia por cápsula",
        category: ProcedureCategory::Diagnostic,
        description: "A swallowed pill-sized camera takes thousands of images as it travels through the small intestine.",
        specialties: &["gastroenterology"],
        body_regions: &["small-intestine"],
        complexity: ComplexityLevel::Low,
        settings: &[CareSetting::OutpatientClinic],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "Swallow a pill-sized camera; wear a sensor belt for 8 hours; camera passes naturally.",
        patient_explanation: "You swallow a tiny camera in a capsule that takes pictures as it travels through your small intestine, an area regular endoscopes cannot easily reach. It passes naturally in your stool.",
    },
];
