//! Emergency and resuscitation procedures.

use patedu_model::{
    AnesthesiaKind, CareSetting, ComplexityLevel, ProcedureCategory, ProcedureEntry,
};

pub(super) const ENTRIES: &[ProcedureEntry] = &[
    ProcedureEntry {
        id: "emerg-intubation",
        name: "Endotracheal Intubation",
        spanish_name: "Intubación endotraqueal",
        category: ProcedureCategory::Therapeutic,
        description: "Insertion of an endotracheal tube through the mouth or nose into the trachea to secure the airway and enable mechanical ventilation.",
        specialties: &["emergency-medicine", "anesthesiology", "critical-care", "pulmonology"],
        body_regions: &["airway", "trachea"],
        complexity: ComplexityLevel::High,
        settings: &[
            CareSetting::EmergencyDepartment,
            CareSetting::OperatingRoom,
            CareSetting::HospitalInpatient,
            CareSetting::Bedside,
        ],
        anesthesia: &[AnesthesiaKind::Sedation],
        what_to_expect: "You will be sedated and paralyzed with medications. The doctor uses a laryngoscope to visualize your vocal cords and passes a breathing tube through your mouth into your windpipe. A balloon is inflated to seal the airway and the tube is connected to a ventilator.",
        patient_explanation: "Intubation places a breathing tube into your windpipe when you cannot breathe adequately on your own. It protects your lungs from stomach contents and connects you to a breathing machine. You will be deeply sedated and will not feel or remember the procedure.",
    },
    ProcedureEntry {
        id: "emerg-central-line",
        name: "Central Venous Catheterization",
        spanish_name: "Cateterización venosa central",
        category: ProcedureCategory::Therapeutic,
        description: "Insertion of a large-bore catheter into a central vein for hemodynamic monitoring, medication administration, or dialysis access.",
        specialties: &["emergency-medicine", "critical-care", "anesthesiology", "surgery"],
        body_regions: &["neck", "chest", "groin", "vasculature"],
        complexity: ComplexityLevel::Moderate,
        settings: &[
            CareSetting::EmergencyDepartment,
            CareSetting::HospitalInpatient,
            CareSetting::OperatingRoom,
            CareSetting::Bedside,
        ],
        anesthesia: &[AnesthesiaKind::Local, AnesthesiaKind::Sedation],
        what_to_expect: "The skin over the chosen vein (usually neck, below the collarbone, or groin) is numbed with local anesthetic. Using ultrasound guidance, a needle is placed into the vein and the catheter is threaded in. You may feel pressure but should not feel sharp pain.",
        patient_explanation: "A central line is a special IV placed in a large vein near your heart. It allows doctors to give strong medications, monitor heart pressures, or provide dialysis. The procedure is done with sterile technique and ultrasound guidance for safety.",
    },
    ProcedureEntry {
        id: "emerg-io-access",
        name: "Intraosseous Access",
        spanish_name: "Acceso intraóseo",
        category: ProcedureCategory::Therapeutic,
        description: "Insertion of a needle into the bone marrow cavity for emergency vascular access when peripheral and central access fail.",
        specialties: &["emergency-medicine", "critical-care", "pediatrics", "trauma-surgery"],
        body_regions: &["bone", "tibia", "humerus"],
        complexity: ComplexityLevel::Low,
        settings: &[
            CareSetting::EmergencyDepartment,
            CareSetting::HospitalInpatient,
            CareSetting::Bedside,
            CareSetting::OperatingRoom,
        ],
        anesthesia: &[AnesthesiaKind::Local, AnesthesiaKind::None],
        what_to_expect: "When IV access cannot be obtained quickly in an emergency, a special needle is drilled or pushed through the skin into the bone marrow, usually in the shin or upper arm. Fluids and medications can then be given through this route.",
        patient_explanation: "Intraosseous access provides emergency medication and fluid delivery through the bone marrow when regular IVs cannot be started. It works as fast as an IV and can be life-saving in emergencies when every second counts.",
    },
    ProcedureEntry {
        id: "emerg-chest-tube",
        name: "Chest Tube Thoracostomy",
        spanish_name: "Toracostomía con tubo torácico",
        category: ProcedureCategory::Therapeutic,
        description: "Insertion of a tube through the chest wall into the pleural space to drain air, blood, or fluid.",
        specialties: &["emergency-medicine", "trauma-surgery", "thoracic-surgery", "pulmonology"],
        body_regions: &["chest", "pleural-space"],
        complexity: ComplexityLevel::Moderate,
        settings: &[
            CareSetting::EmergencyDepartment,
            CareSetting::HospitalInpatient,
            CareSetting::Bedside,
            CareSetting::OperatingRoom,
        ],
        anesthesia: &[AnesthesiaKind::Local, AnesthesiaKind::Sedation],
        what_to_expect: "You will lie on your side or back. The area between your ribs is numbed with local anesthetic. A small incision is made and a tube is guided into the space around your lung. The tube connects to a drainage system to remove air or fluid and allow your lung to re-expand.",
        patient_explanation: "A chest tube is placed through your chest wall into the space between your lung and ribcage to drain air or fluid that has collected there. This helps your lung fully expand so you can breathe normally again. The tube stays in place until the problem resolves.",
    },
    ProcedureEntry {
        id: "emerg-cpr",
        name: "Cardiopulmonary Resuscitation (CPR)",
        spanish_name: "Resucitación cardiopulmonar (RCP)",
        category: ProcedureCategory::Therapeutic,
        description: "Emergency procedure to manually preserve brain function until spontaneous circulation is restored through chest compressions and artificial ventilation.",
        specialties: &["emergency-medicine", "critical-care", "cardiology", "anesthesiology"],
        body_regions: &["chest", "heart"],
        complexity: ComplexityLevel::Moderate,
        settings: &[
            CareSetting::EmergencyDepartment,
            CareSetting::HospitalInpatient,
            CareSetting::Bedside,
        ],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "If your heart stops, medical personnel will push hard and fast on your chest to circulate blood to your brain and heart. They may also use a breathing mask or tube and deliver electric shocks if needed to restart your heart.",
        patient_explanation: "CPR is performed when your heart stops beating. Chest compressions manually pump blood to keep your brain alive, rescue breaths provide oxygen, and defibrillation shocks can restart a heart in certain rhythms. It gives you a chance of survival until the underlying problem is treated.",
    },
    ProcedureEntry {
        id: "emerg-defibrillation",
        name: "Defibrillation/Cardioversion",
        spanish_name: "Desfibrilación/Cardioversión",
        category: ProcedureCategory::Therapeutic,
        description: "Delivery of electrical current through the chest to terminate life-threatening cardiac arrhythmias.",
        specialties: &["emergency-medicine", "critical-care", "cardiology"],
        body_regions: &["heart", "chest"],
        complexity: ComplexityLevel::Moderate,
        settings: &[
            CareSetting::EmergencyDepartment,
            CareSetting::HospitalInpatient,
            CareSetting::Bedside,
        ],
        anesthesia: &[AnesthesiaKind::Sedation],
        what_to_expect: "Sticky pads are placed on your chest and back. For cardioversion (when you have a pulse) you will receive sedation first, and a controlled electrical shock is delivered to reset your heart rhythm. For defibrillation in cardiac arrest, the shock is given immediately without sedation.",
        patient_explanation: "Defibrillation delivers an electric shock to stop a chaotic heart rhythm (ventricular fibrillation) so the heart can restart normally. Cardioversion is a planned, sedated procedure to convert an abnormal fast rhythm back to normal using a timed electrical shock.",
    },
    ProcedureEntry {
        id: "emerg-pericardiocentesis",
        name: "Pericardiocentesis",
        spanish_name: "Pericardiocentesis",
        category: ProcedureCategory::Therapeutic,
        description: "Aspiration of fluid from the pericardial space to relieve cardiac tamponade.",
        specialties: &["emergency-medicine", "cardiology", "cardiothoracic-surgery", "critical-care"],
        body_regions: &["heart", "pericardium", "chest"],
        complexity: ComplexityLevel::High,
        settings: &[
            CareSetting::EmergencyDepartment,
            CareSetting::HospitalInpatient,
            CareSetting::Bedside,
        ],
        anesthesia: &[AnesthesiaKind::Local, AnesthesiaKind::Sedation],
        what_to_expect: "You will lie at a 30-45 degree angle. Ultrasound guides placement of a needle below your breastbone or between ribs to drain fluid from around your heart. The fluid is removed with a syringe and catheter to relieve pressure on your heart.",
        patient_explanation: "Pericardiocentesis drains fluid that has collected around your heart, compressing it and preventing normal beating. A needle is guided by ultrasound or ECG to safely enter the pericardial sac and remove the fluid, which immediately improves heart function.",
    },
];
