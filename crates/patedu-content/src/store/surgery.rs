//! Common surgeries.

use patedu_model::{
    AnesthesiaKind, CareSetting, ComplexityLevel, ProcedureCategory, ProcedureEntry,
};

pub(super) const ENTRIES: &[ProcedureEntry] = &[
    ProcedureEntry {
        id: "surg-appendectomy",
        name: "Appendectomy",
        spanish_name: "Apendicectomía",
        category: ProcedureCategory::Surgical,
        description: "Surgical removal of the appendix, most commonly for acute appendicitis.",
        specialties: &["general-surgery", "emergency-medicine"],
        body_regions: &["abdomen", "appendix"],
        complexity: ComplexityLevel::Moderate,
        settings: &[CareSetting::OperatingRoom],
        anesthesia: &[AnesthesiaKind::General],
        what_to_expect: "Usually laparoscopic (small incisions); general anesthesia; 30-60 minutes; go home same day or next day.",
        patient_explanation: "The inflamed appendix is removed, usually through small incisions using a camera (laparoscopic). Most people go home the same or next day and recover within 1-3 weeks.",
    },
    ProcedureEntry {
        id: "surg-cholecystectomy",
        name: "Cholecystectomy (Gallbladder Removal)",
        spanish_name: "Colecistectomía",
        category: ProcedureCategory::Surgical,
        description: "Surgical removal of the gallbladder, most commonly for gallstones causing pain or inflammation.",
        specialties: &["general-surgery"],
        body_regions: &["abdomen", "gallbladder"],
        complexity: ComplexityLevel::Moderate,
        settings: &[CareSetting::OperatingRoom],
        anesthesia: &[AnesthesiaKind::General],
        what_to_expect: "Usually laparoscopic; 3-4 small incisions; general anesthesia; 1-2 hours; same-day or overnight stay.",
        patient_explanation: "Your gallbladder is removed through small incisions using a camera. You can live normally without a gallbladder. Most people go home the same day and recover in 1-2 weeks.",
    },
    ProcedureEntry {
        id: "surg-hernia-inguinal",
        name: "Inguinal Hernia Repair",
        spanish_name: "Reparación de hernia inguinal",
        category: ProcedureCategory::Surgical,
        description: "Repairs a weakness in the groin area where tissue or intestine bulges through the abdominal wall.",
        specialties: &["general-surgery"],
        body_regions: &["groin", "abdomen"],
        complexity: ComplexityLevel::Moderate,
        settings: &[
            CareSetting::OperatingRoom,
            CareSetting::OutpatientSurgeryCenter,
        ],
        anesthesia: &[
            AnesthesiaKind::General,
            AnesthesiaKind::Regional,
            AnesthesiaKind::Local,
        ],
        what_to_expect: "Open or laparoscopic; mesh typically placed to reinforce area; 1-2 hours; same-day discharge usually.",
        patient_explanation: "The bulging tissue is pushed back into place and the weak spot is reinforced, usually with surgical mesh. Most people go home the same day and return to normal activity in 2-4 weeks.",
    },
    ProcedureEntry {
        id: "surg-cesarean",
        name: "Cesarean Section (C-Section)",
        spanish_name: "Cesárea",
        category: ProcedureCategory::Surgical,
        description: "Delivery of a baby through surgical incisions in the abdomen and uterus.",
        specialties: &["obstetrics-gynecology"],
        body_regions: &["abdomen", "uterus"],
        complexity: ComplexityLevel::High,
        settings: &[CareSetting::OperatingRoom],
        anesthesia: &[
            AnesthesiaKind::Spinal,
            AnesthesiaKind::Epidural,
            AnesthesiaKind::General,
        ],
        what_to_expect: "Spinal or epidural anesthesia; horizontal incision; baby delivered in minutes; surgery completed in 45-60 minutes; 2-4 day stay.",
        patient_explanation: "Your baby is delivered through an incision in your lower abdomen. You are usually awake with numbing from the waist down. Recovery takes about 6 weeks, longer than vaginal delivery.",
    },
    ProcedureEntry {
        id: "surg-tonsillectomy",
        name: "Tonsillectomy",
        spanish_name: "Amigdalectomía",
        category: ProcedureCategory::Surgical,
        description: "Surgical removal of the tonsils, typically for recurrent infections or obstructive sleep apnea.",
        specialties: &["otolaryngology"],
        body_regions: &["throat", "tonsils"],
        complexity: ComplexityLevel::Moderate,
        settings: &[
            CareSetting::OperatingRoom,
            CareSetting::OutpatientSurgeryCenter,
        ],
        anesthesia: &[AnesthesiaKind::General],
        what_to_expect: "General anesthesia; tonsils removed through mouth; 20-30 minutes; go home same day; 10-14 days recovery.",
        patient_explanation: "Your tonsils are removed through your mouth while you are asleep. Throat pain lasts 7-14 days. It is more commonly done in children but adults may need it too.",
    },
    ProcedureEntry {
        id: "surg-cabg",
        name: "Coronary Artery Bypass Grafting (CABG)",
        spanish_name: "Cirugía de derivación coronaria",
        category: ProcedureCategory::Surgical,
        description: "Open-heart surgery that creates new routes around blocked coronary arteries using grafted blood vessels.",
        specialties: &["cardiothoracic-surgery"],
        body_regions: &["heart", "coronary-arteries", "chest"],
        complexity: ComplexityLevel::VeryHigh,
        settings: &[CareSetting::OperatingRoom],
        anesthesia: &[AnesthesiaKind::General],
        what_to_expect: "Open-heart surgery; heart-lung machine used; 3-6 hours; ICU stay; 5-7 day hospitalization; 6-12 week recovery.",
        patient_explanation: "Blood vessels from your leg, arm, or chest are used to bypass blocked heart arteries, restoring blood flow. It is major open-heart surgery with a long recovery but can dramatically improve symptoms and survival.",
    },
    ProcedureEntry {
        id: "eye-cataract",
        name: "Cataract Surgery",
        spanish_name: "Cirugía de cataratas",
        category: ProcedureCategory::Surgical,
        description: "Removes the clouded natural lens and replaces it with a clear artificial intraocular lens.",
        specialties: &["ophthalmology"],
        body_regions: &["eye"],
        complexity: ComplexityLevel::Moderate,
        settings: &[CareSetting::OutpatientSurgeryCenter],
        anesthesia: &[AnesthesiaKind::Topical, AnesthesiaKind::Local],
        what_to_expect: "Eye numbed with drops; tiny incision; cloudy lens removed and replaced; 15-30 minutes; go home same day.",
        patient_explanation: "Your cloudy lens is removed through a tiny incision and replaced with a clear artificial lens. You are awake but your eye is completely numb. Vision improves within days.",
    },
    ProcedureEntry {
        id: "derm-excision",
        name: "Skin Lesion Excision",
        spanish_name: "Escisión de lesión cutánea",
        category: ProcedureCategory::Surgical,
        description: "Surgical removal of a skin growth, mole, or skin cancer with a margin of normal tissue.",
        specialties: &["dermatology", "plastic-surgery"],
        body_regions: &["skin"],
        complexity: ComplexityLevel::Low,
        settings: &[
            CareSetting::OutpatientClinic,
            CareSetting::OutpatientSurgeryCenter,
        ],
        anesthesia: &[AnesthesiaKind::Local],
        what_to_expect: "Area numbed; lesion cut out with margin; stitches placed; 15-30 minutes; sent to pathology.",
        patient_explanation: "The suspicious growth is cut out along with a small border of normal skin, then sent to a lab to be examined. The area is closed with stitches.",
    },
];
