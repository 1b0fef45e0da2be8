//! Image-guided interventional radiology procedures.

use patedu_model::{
    AnesthesiaKind, CareSetting, ComplexityLevel, ProcedureCategory, ProcedureEntry,
};

pub(super) const ENTRIES: &[ProcedureEntry] = &[
    ProcedureEntry {
        id: "ir-picc-line",
        name: "PICC Line Placement",
        spanish_name: "Colocación de línea PICC",
        category: ProcedureCategory::Therapeutic,
        description: "A peripherally inserted central catheter (PICC) is threaded from an arm vein to a large vein near the heart, providing long-term intravenous access for medications, nutrition, or blood draws.",
        specialties: &["interventional-radiology", "vascular-access"],
        body_regions: &["upper-extremity", "chest", "vasculature"],
        complexity: ComplexityLevel::Low,
        settings: &[
            CareSetting::InterventionalRadiology,
            CareSetting::Bedside,
            CareSetting::HospitalInpatient,
        ],
        anesthesia: &[AnesthesiaKind::Local],
        what_to_expect: "Ultrasound guides a thin catheter through a vein in your upper arm to a large vein near your heart. The procedure takes 30-60 minutes. You will feel a pinch from the numbing injection and pressure as the catheter advances.",
        patient_explanation: "A PICC line is a long, thin tube placed in your arm that reaches a large vein near your heart. It allows nurses to give you medications, fluids, or nutrition without repeatedly poking your veins. It can stay in for weeks to months.",
    },
    ProcedureEntry {
        id: "ir-port-a-cath",
        name: "Port-a-Cath (Mediport) Placement",
        spanish_name: "Colocación de puerto implantable (Mediport)",
        category: ProcedureCategory::Therapeutic,
        description: "An implantable port is a small device placed under the skin of the chest, connected to a catheter in a large vein, providing long-term vascular access for chemotherapy, blood draws, and infusions.",
        specialties: &["interventional-radiology", "oncology", "vascular-surgery"],
        body_regions: &["chest", "vasculature"],
        complexity: ComplexityLevel::Moderate,
        settings: &[
            CareSetting::InterventionalRadiology,
            CareSetting::OperatingRoom,
        ],
        anesthesia: &[AnesthesiaKind::Local, AnesthesiaKind::Sedation],
        what_to_expect: "Two small incisions are made: one on the chest wall for the port and one near the collarbone for vein access. The port is placed in a pocket under the skin and connected to a catheter in a large vein. The procedure takes 45-60 minutes under sedation.",
        patient_explanation: "A port is a small disc-shaped device placed under the skin of your upper chest. It connects to a large vein and is accessed by a special needle through the skin. It is hidden under your skin and allows chemotherapy or other treatments without repeated needle sticks in your arms.",
    },
    ProcedureEntry {
        id: "ir-image-guided-biopsy",
        name: "Image-Guided Biopsy (CT, Ultrasound, MRI)",
        spanish_name: "Biopsia guiada por imagen (TC, ultrasonido, RM)",
        category: ProcedureCategory::Diagnostic,
        description: "A tissue sample is obtained from a suspicious lesion using a needle guided by CT, ultrasound, or MRI to ensure precise targeting for pathologic diagnosis.",
        specialties: &["interventional-radiology", "oncology", "pathology"],
        body_regions: &["lung", "liver", "kidney", "bone", "soft-tissue", "lymph-node", "breast", "thyroid"],
        complexity: ComplexityLevel::Moderate,
        settings: &[
            CareSetting::InterventionalRadiology,
            CareSetting::ImagingCenter,
        ],
        anesthesia: &[AnesthesiaKind::Local, AnesthesiaKind::Sedation],
        what_to_expect: "You will lie on a table and the area will be numbed with local anesthetic. Using imaging, the doctor guides a thin needle to the abnormal area and takes small tissue samples. You may hear clicking from the biopsy device. The procedure takes 30-60 minutes depending on the target.",
        patient_explanation: "An image-guided biopsy uses special imaging technology to precisely guide a needle to an abnormal area in your body and take a small tissue sample. This sample is examined under a microscope to determine whether it is benign (not cancer) or malignant (cancer), and what type it is.",
    },
    ProcedureEntry {
        id: "ir-abscess-drainage",
        name: "Percutaneous Abscess Drainage",
        spanish_name: "Drenaje percutáneo de absceso",
        category: ProcedureCategory::Therapeutic,
        description: "Image-guided placement of a drainage catheter into an abscess to evacuate pus and allow healing, often avoiding surgery.",
        specialties: &["interventional-radiology", "surgery", "infectious-disease"],
        body_regions: &["abdomen", "pelvis", "chest", "soft-tissue"],
        complexity: ComplexityLevel::Moderate,
        settings: &[
            CareSetting::InterventionalRadiology,
            CareSetting::HospitalInpatient,
        ],
        anesthesia: &[AnesthesiaKind::Local, AnesthesiaKind::Sedation],
        what_to_expect: "The skin is cleaned and numbed. Using CT or ultrasound guidance, a needle is inserted into the abscess and fluid is drained. A small catheter is often left in place to continue draining. You will feel pressure but the local anesthetic minimizes pain. Takes 30-60 minutes.",
        patient_explanation: "An abscess is a pocket of infected fluid (pus) inside your body. Instead of surgery, the doctor uses imaging to guide a thin tube through your skin into the pocket and drain the infection. A small tube may be left in place for days until the infection clears.",
    },
    ProcedureEntry {
        id: "ir-angioplasty-stenting",
        name: "Angioplasty and Stenting",
        spanish_name: "Angioplastia y colocación de stent",
        category: ProcedureCategory::Therapeutic,
        description: "A balloon catheter is used to open narrowed or blocked blood vessels, and a metallic stent is deployed to keep the vessel open and restore blood flow.",
        specialties: &["interventional-radiology", "vascular-surgery", "cardiology"],
        body_regions: &["vasculature", "lower-extremity", "renal", "carotid", "iliac"],
        complexity: ComplexityLevel::High,
        settings: &[
            CareSetting::InterventionalRadiology,
            CareSetting::CardiacCathLab,
        ],
        anesthesia: &[AnesthesiaKind::Local, AnesthesiaKind::Sedation],
        what_to_expect: "A catheter is inserted through a small puncture in the groin or wrist artery. Using X-ray guidance and contrast dye, the catheter is navigated to the narrowed vessel. A balloon inflates to open the blockage and a stent may be placed. You will feel pressure at the puncture site and warmth from the contrast dye. Takes 1-3 hours.",
        patient_explanation: "Over time, fatty deposits can narrow your blood vessels and reduce blood flow, causing pain or organ damage. In this procedure, a doctor threads a tiny balloon through your blood vessels to the blocked area, inflates it to open the blockage, and often places a small metal tube (stent) to keep it open.",
    },
    ProcedureEntry {
        id: "ir-nephrostomy-tube",
        name: "Nephrostomy Tube Placement",
        spanish_name: "Colocación de tubo de nefrostomía",
        category: ProcedureCategory::Therapeutic,
        description: "Image-guided placement of a drainage tube through the skin and into the kidney collecting system to relieve urinary obstruction when the normal pathway is blocked.",
        specialties: &["interventional-radiology", "urology", "oncology"],
        body_regions: &["kidney", "urinary", "flank"],
        complexity: ComplexityLevel::Moderate,
        settings: &[
            CareSetting::InterventionalRadiology,
            CareSetting::HospitalInpatient,
        ],
        anesthesia: &[AnesthesiaKind::Local, AnesthesiaKind::Sedation],
        what_to_expect: "Lying on your stomach or side, the skin over your flank is numbed. Under ultrasound and fluoroscopic guidance, a needle is advanced into the kidney, contrast confirms position within the collecting system, and a drainage catheter is placed. Urine drains into an external bag. The procedure takes 30-60 minutes.",
        patient_explanation: "When urine cannot drain from your kidney through the normal route (because of a stone, tumor, or swelling), pressure builds up and can damage the kidney. This procedure places a small tube through your back into the kidney to let urine drain into a bag, relieving pressure and protecting your kidney.",
    },
];
