//! Screening and preventive procedures.

use patedu_model::{
    AnesthesiaKind, CareSetting, ComplexityLevel, ProcedureCategory, ProcedureEntry,
};

pub(super) const ENTRIES: &[ProcedureEntry] = &[
    ProcedureEntry {
        id: "screen-pap",
        name: "Pap Smear (Cervical Cytology)",
        spanish_name: "Papanicolaou (citología cervical)",
        category: ProcedureCategory::Screening,
        description: "Collects cells from the cervix to screen for cervical cancer and precancerous changes.",
        specialties: &["obstetrics-gynecology", "primary-care"],
        body_regions: &["cervix"],
        complexity: ComplexityLevel::Minimal,
        settings: &[CareSetting::OutpatientClinic],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "Speculum inserted; cells gently brushed from cervix; mild discomfort; less than 5 minutes.",
        patient_explanation: "During a pelvic exam, a small brush collects cells from your cervix. These cells are checked for abnormal changes that could lead to cervical cancer. Recommended every 3-5 years for most women.",
    },
    ProcedureEntry {
        id: "screen-fobt",
        name: "Fecal Occult Blood Test (FOBT/FIT)",
        spanish_name: "Prueba de sangre oculta en heces",
        category: ProcedureCategory::Screening,
        description: "Tests stool samples for hidden blood that may indicate colon cancer or polyps.",
        specialties: &["primary-care", "gastroenterology"],
        body_regions: &["colon"],
        complexity: ComplexityLevel::Minimal,
        settings: &[CareSetting::Home, CareSetting::OutpatientClinic],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "Collect small stool sample at home using a kit; mail to lab; results in days.",
        patient_explanation: "You collect a small stool sample at home and send it to a lab. The test checks for tiny amounts of blood that you cannot see, which could be an early sign of colon polyps or cancer.",
    },
    ProcedureEntry {
        id: "prev-vaccination",
        name: "Vaccination / Immunization",
        spanish_name: "Vacunación / Inmunización",
        category: ProcedureCategory::Preventive,
        description: "Administration of a vaccine to stimulate immune protection against infectious diseases.",
        specialties: &["primary-care", "pediatrics", "infectious-disease"],
        body_regions: &["arm", "immune-system"],
        complexity: ComplexityLevel::Minimal,
        settings: &[CareSetting::OutpatientClinic, CareSetting::Home],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "Quick injection in the upper arm or thigh; mild soreness at site; 5 minutes.",
        patient_explanation: "A vaccine teaches your immune system to recognize and fight specific germs. You may feel mild soreness at the injection site or brief flu-like symptoms as your body builds protection.",
    },
    ProcedureEntry {
        id: "prev-flu-shot",
        name: "Influenza Vaccine",
        spanish_name: "Vacuna contra la influenza",
        category: ProcedureCategory::Preventive,
        description: "Annual vaccination to protect against seasonal influenza strains.",
        specialties: &["primary-care", "pediatrics"],
        body_regions: &["arm", "immune-system"],
        complexity: ComplexityLevel::Minimal,
        settings: &[CareSetting::OutpatientClinic, CareSetting::Home],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "Single injection in upper arm; mild soreness for 1-2 days; get annually before flu season.",
        patient_explanation: "A yearly flu shot protects you from the most common flu strains expected that season. It is recommended for everyone 6 months and older, especially those with chronic conditions.",
    },
    ProcedureEntry {
        id: "gyn-iud",
        name: "IUD Insertion",
        spanish_name: "Inserción de dispositivo intrauterino (DIU)",
        category: ProcedureCategory::Preventive,
        description: "Places an intrauterine device in the uterus for long-acting reversible contraception.",
        specialties: &["obstetrics-gynecology", "primary-care"],
        body_regions: &["uterus"],
        complexity: ComplexityLevel::Low,
        settings: &[CareSetting::OutpatientClinic],
        anesthesia: &[AnesthesiaKind::None, AnesthesiaKind::Local],
        what_to_expect: "Speculum placed; IUD inserted through cervix into uterus; cramping expected; 5-10 minutes.",
        patient_explanation: "A small T-shaped device is placed inside your uterus for birth control. You may feel cramping during and after insertion. It provides effective contraception for 3-12 years depending on the type.",
    },
];
