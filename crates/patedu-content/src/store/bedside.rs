//! Bedside procedures with fully bilingual education text.

use patedu_model::{
    AnesthesiaKind, BedsideCategory, BedsideScreeningEntry, CareSetting, ComplexityLevel,
};

pub(super) const ENTRIES: &[BedsideScreeningEntry] = &[
    BedsideScreeningEntry {
        id: "bed-wound-care",
        name: "Wound Care and Dressing Changes",
        spanish_name: "Cuidado de heridas y cambio de apósitos",
        category: BedsideCategory::Bedside,
        description: "Cleaning, treating, and applying fresh dressings to wounds to promote healing and prevent infection.",
        spanish_description: "Limpieza, tratamiento y aplicación de apósitos nuevos en heridas para promover la cicatrización y prevenir infecciones.",
        specialties: &["nursing", "wound-care", "surgery", "primary-care"],
        body_regions: &["skin", "soft-tissue"],
        complexity: ComplexityLevel::Minimal,
        settings: &[
            CareSetting::Bedside,
            CareSetting::OutpatientClinic,
            CareSetting::Home,
            CareSetting::EmergencyDepartment,
        ],
        anesthesia: &[AnesthesiaKind::None, AnesthesiaKind::Topical],
        patient_explanation: "Wound care involves gently cleaning your wound, removing old bandages, inspecting for signs of infection, and applying a fresh sterile dressing. Keeping the wound clean and properly covered helps it heal faster and prevents bacteria from entering.",
        spanish_patient_explanation: "El cuidado de heridas consiste en limpiar suavemente su herida, retirar los vendajes antiguos, inspeccionar en busca de signos de infección y aplicar un apósito estéril nuevo. Mantener la herida limpia y correctamente cubierta ayuda a que cicatrice más rápido y evita la entrada de bacterias.",
        preparation: "No special preparation is usually required. Gather clean supplies, wash your hands thoroughly, and have fresh dressings and saline or prescribed wound cleanser ready. Pain medication may be taken 30 minutes before if changes are uncomfortable.",
        spanish_preparation: "Generalmente no se requiere preparación especial. Reúna suministros limpios, lávese bien las manos y tenga listos apósitos nuevos y solución salina o el limpiador de heridas recetado. Se puede tomar medicación para el dolor 30 minutos antes si los cambios son incómodos.",
        what_to_expect: "The old dressing is carefully removed, the wound is gently cleaned with saline or antiseptic, the area is inspected for redness, drainage, or odor, and a fresh dressing is applied. The process takes 10-30 minutes depending on wound size. You may feel mild stinging during cleaning.",
        spanish_what_to_expect: "Se retira cuidadosamente el apósito viejo, se limpia la herida suavemente con solución salina o antiséptico, se inspecciona el área en busca de enrojecimiento, secreción u olor, y se aplica un apósito nuevo. El proceso dura de 10 a 30 minutos según el tamaño de la herida. Puede sentir un leve ardor durante la limpieza.",
        risks: "Risks include infection if sterile technique is not maintained, delayed healing, skin irritation from adhesives or solutions, minor bleeding during cleaning, and pain or discomfort during dressing removal. Contact your provider if you notice increasing redness, swelling, warmth, foul odor, or fever.",
        spanish_risks: "Los riesgos incluyen infección si no se mantiene la técnica estéril, cicatrización retrasada, irritación de la piel por adhesivos o soluciones, sangrado menor durante la limpieza y dolor o molestia al retirar el apósito. Contacte a su proveedor si nota aumento de enrojecimiento, hinchazón, calor, mal olor o fiebre.",
        follow_up: "Dressing changes are typically done every 1-3 days or as directed. Monitor for signs of infection at each change. Follow up with your care team if healing stalls, drainage increases, or new symptoms develop. Sutures or staples may need removal in 7-14 days.",
        spanish_follow_up: "Los cambios de apósito generalmente se realizan cada 1 a 3 días o según las indicaciones. Vigile signos de infección en cada cambio. Haga seguimiento con su equipo de atención si la cicatrización se detiene, aumenta la secreción o aparecen nuevos síntomas. Las suturas o grapas pueden necesitar retirarse en 7 a 14 días.",
    },
    BedsideScreeningEntry {
        id: "bed-central-line-care",
        name: "Central Line Care",
        spanish_name: "Cuidado de línea central",
        category: BedsideCategory::Bedside,
        description: "Maintenance and dressing changes for a central venous catheter to prevent infection and ensure function.",
        spanish_description: "Mantenimiento y cambio de apósitos de un catéter venoso central para prevenir infecciones y asegurar su funcionamiento.",
        specialties: &["nursing", "critical-care", "oncology", "internal-medicine"],
        body_regions: &["chest", "neck", "upper-extremity", "blood-vessels"],
        complexity: ComplexityLevel::Moderate,
        settings: &[
            CareSetting::Bedside,
            CareSetting::HospitalInpatient,
            CareSetting::OutpatientClinic,
            CareSetting::Home,
        ],
        anesthesia: &[AnesthesiaKind::None],
        patient_explanation: "A central line is a special IV catheter placed in a large vein near your heart. Central line care means cleaning the area around the catheter site, changing the dressing using sterile technique, flushing the line to keep it open, and checking for signs of infection. This careful maintenance helps prevent serious bloodstream infections.",
        spanish_patient_explanation: "Una línea central es un catéter intravenoso especial colocado en una vena grande cerca del corazón. El cuidado de la línea central significa limpiar el área alrededor del sitio del catéter, cambiar el apósito con técnica estéril, irrigar la línea para mantenerla abierta y verificar signos de infección. Este mantenimiento cuidadoso ayuda a prevenir infecciones graves del torrente sanguíneo.",
        preparation: "Use strict sterile technique. Prepare a clean workspace with a sterile dressing kit, chlorhexidine swabs, new transparent dressing, and clean gloves plus sterile gloves. The patient should turn their head away from the catheter site and wear a mask if possible.",
        spanish_preparation: "Utilice técnica estéril estricta. Prepare un espacio de trabajo limpio con un kit de apósito estéril, hisopos de clorhexidina, apósito transparente nuevo y guantes limpios más guantes estériles. El paciente debe girar la cabeza en dirección opuesta al sitio del catéter y usar mascarilla si es posible.",
        what_to_expect: "The old dressing is peeled off carefully. The insertion site is inspected for redness, swelling, or discharge. The area is cleaned with chlorhexidine in a back-and-forth scrubbing motion and allowed to dry. A new sterile transparent dressing is applied. The line may be flushed with saline or heparin. The process takes 15-30 minutes.",
        spanish_what_to_expect: "El apósito viejo se retira cuidadosamente. Se inspecciona el sitio de inserción en busca de enrojecimiento, hinchazón o secreción. El área se limpia con clorhexidina con movimientos de frotación y se deja secar. Se aplica un nuevo apósito transparente estéril. La línea puede irrigarse con solución salina o heparina. El proceso dura de 15 a 30 minutos.",
        risks: "Central line-associated bloodstream infection (CLABSI) is the most serious risk. Other risks include air embolism if the line is left open, catheter dislodgement, skin irritation or breakdown at the insertion site, and catheter occlusion. Report fever, chills, redness, swelling, or drainage at the site immediately.",
        spanish_risks: "La infección del torrente sanguíneo asociada a línea central (CLABSI) es el riesgo más grave. Otros riesgos incluyen embolia aérea si la línea queda abierta, desplazamiento del catéter, irritación o deterioro de la piel en el sitio de inserción y oclusión del catéter. Reporte fiebre, escalofríos, enrojecimiento, hinchazón o secreción en el sitio de inmediato.",
        follow_up: "Dressings are changed every 7 days for transparent dressings, every 2 days for gauze dressings, or whenever the dressing becomes damp, loose, or soiled. Caps and tubing are changed per hospital protocol (typically every 96 hours). The line is removed as soon as it is no longer needed.",
        spanish_follow_up: "Los apósitos se cambian cada 7 días para apósitos transparentes, cada 2 días para apósitos de gasa, o cuando el apósito se humedezca, afloje o ensucie. Las tapas y tubos se cambian según el protocolo hospitalario (generalmente cada 96 horas). La línea se retira tan pronto como ya no sea necesaria.",
    },
    BedsideScreeningEntry {
        id: "bed-venipuncture",
        name: "Blood Draw / Venipuncture",
        spanish_name: "Extracción de sangre / Venopunción",
        category: BedsideCategory::Bedside,
        description: "Collection of a blood sample from a vein using a needle for laboratory testing.",
        spanish_description: "Recolección de una muestra de sangre de una vena usando una aguja para pruebas de laboratorio.",
        specialties: &[
            "nursing",
            "phlebotomy",
            "laboratory-medicine",
            "primary-care",
        ],
        body_regions: &["upper-extremity", "blood-vessels", "blood"],
        complexity: ComplexityLevel::Minimal,
        settings: &[
            CareSetting::Bedside,
            CareSetting::OutpatientClinic,
            CareSetting::Laboratory,
            CareSetting::HospitalInpatient,
            CareSetting::EmergencyDepartment,
        ],
        anesthesia: &[AnesthesiaKind::None],
        patient_explanation: "A blood draw is the process of taking a small sample of blood from a vein in your arm. A healthcare worker wraps a tourniquet around your upper arm, cleans the skin, inserts a small needle, and collects blood into one or more tubes. The blood is then sent to a lab for testing. The process is quick, taking just a few minutes.",
        spanish_patient_explanation: "Una extracción de sangre es el proceso de tomar una pequeña muestra de sangre de una vena en su brazo. Un profesional de salud coloca un torniquete en la parte superior del brazo, limpia la piel, inserta una aguja pequeña y recolecta sangre en uno o más tubos. La sangre se envía a un laboratorio para análisis. El proceso es rápido, tomando solo unos minutos.",
        preparation: "Some blood tests require fasting for 8-12 hours (water is usually allowed). Wear short sleeves or a top with loose sleeves that can be pushed up. Stay well hydrated to make veins easier to find. Inform the phlebotomist if you have a history of fainting, difficult veins, or are taking blood thinners.",
        spanish_preparation: "Algunas pruebas de sangre requieren ayuno de 8 a 12 horas (generalmente se permite agua). Use mangas cortas o una prenda con mangas sueltas que se puedan subir. Manténgase bien hidratado para que las venas sean más fáciles de encontrar. Informe al flebotomista si tiene antecedentes de desmayos, venas difíciles o si toma anticoagulantes.",
        what_to_expect: "A tourniquet is placed on your upper arm and you may be asked to make a fist. The skin is cleaned with alcohol. A needle is inserted into a vein, which feels like a quick pinch or sting. Blood fills one or more collection tubes. The needle is removed, and pressure is applied with gauze for 1-2 minutes. A bandage is placed over the site. The whole process takes 3-5 minutes.",
        spanish_what_to_expect: "Se coloca un torniquete en la parte superior del brazo y se le puede pedir que haga un puño. La piel se limpia con alcohol. Se inserta una aguja en una vena, lo cual se siente como un pellizco o pinchazo rápido. La sangre llena uno o más tubos de recolección. Se retira la aguja y se aplica presión con gasa durante 1 a 2 minutos. Se coloca un vendaje sobre el sitio. Todo el proceso toma de 3 a 5 minutos.",
        risks: "Risks are minimal: temporary bruising at the needle site, slight soreness, and rarely, infection. Some people may feel lightheaded or faint. Excessive bleeding is uncommon but more likely if you take blood thinners. A small hard lump (hematoma) can form if blood leaks under the skin. Nerve injury is extremely rare.",
        spanish_risks: "Los riesgos son mínimos: moretones temporales en el sitio de la aguja, leve dolor y, raramente, infección. Algunas personas pueden sentir mareo o desmayarse. El sangrado excesivo es poco común pero más probable si toma anticoagulantes. Un pequeño bulto duro (hematoma) puede formarse si la sangre se filtra bajo la piel. La lesión nerviosa es extremadamente rara.",
        follow_up: "Keep the bandage on for at least 15-30 minutes. Avoid heavy lifting with that arm for several hours. Results are typically available within hours to a few days depending on the test. Your healthcare provider will review the results and contact you if any action is needed.",
        spanish_follow_up: "Mantenga el vendaje puesto durante al menos 15 a 30 minutos. Evite levantar objetos pesados con ese brazo durante varias horas. Los resultados generalmente están disponibles en horas a unos días según la prueba. Su proveedor de salud revisará los resultados y lo contactará si se necesita alguna acción.",
    },
    BedsideScreeningEntry {
        id: "bed-iv-insertion",
        name: "IV Insertion (Peripheral Intravenous Access)",
        spanish_name: "Inserción de vía intravenosa periférica",
        category: BedsideCategory::Bedside,
        description: "Placement of a small catheter into a peripheral vein for fluid, medication, or blood product administration.",
        spanish_description: "Colocación de un pequeño catéter en una vena periférica para administración de líquidos, medicamentos o productos sanguíneos.",
        specialties: &["nursing", "emergency-medicine", "anesthesiology"],
        body_regions: &["upper-extremity", "blood-vessels"],
        complexity: ComplexityLevel::Low,
        settings: &[
            CareSetting::Bedside,
            CareSetting::HospitalInpatient,
            CareSetting::EmergencyDepartment,
            CareSetting::OutpatientClinic,
            CareSetting::OutpatientSurgeryCenter,
        ],
        anesthesia: &[AnesthesiaKind::None, AnesthesiaKind::Topical],
        patient_explanation: "An IV (intravenous) line is a small flexible plastic tube inserted into a vein in your hand or arm. It allows your medical team to give you fluids, medications, or blood products directly into your bloodstream. A small needle is used to guide the plastic tube into the vein, then the needle is removed, leaving only the soft tube in place.",
        spanish_patient_explanation: "Una vía intravenosa (IV) es un pequeño tubo de plástico flexible que se inserta en una vena de la mano o el brazo. Permite que su equipo médico le administre líquidos, medicamentos o productos sanguíneos directamente en el torrente sanguíneo. Se usa una aguja pequeña para guiar el tubo de plástico hacia la vena, luego se retira la aguja dejando solo el tubo suave en su lugar.",
        preparation: "No special preparation is needed. The site is selected based on vein accessibility and treatment needs. For children or anxious patients, a topical numbing cream may be applied 30-60 minutes before. Stay hydrated and keep your arms warm to make veins more visible.",
        spanish_preparation: "No se necesita preparación especial. El sitio se selecciona según la accesibilidad de la vena y las necesidades del tratamiento. Para niños o pacientes ansiosos, se puede aplicar una crema anestésica tópica 30 a 60 minutos antes. Manténgase hidratado y mantenga los brazos calientes para que las venas sean más visibles.",
        what_to_expect: "A tourniquet is applied and a vein is selected. The skin is cleaned with antiseptic. You will feel a quick pinch as the needle enters the vein. The plastic catheter is advanced and the needle is withdrawn. The catheter is secured with tape and a transparent dressing. IV tubing is connected. The process takes 2-5 minutes.",
        spanish_what_to_expect: "Se aplica un torniquete y se selecciona una vena. La piel se limpia con antiséptico. Sentirá un pellizco rápido cuando la aguja entre en la vena. El catéter de plástico se avanza y se retira la aguja. El catéter se asegura con cinta y un apósito transparente. Se conecta el tubo de infusión. El proceso toma de 2 a 5 minutos.",
        risks: "Common risks include bruising, mild pain at the site, and phlebitis (vein inflammation causing redness and tenderness along the vein). Infiltration can occur if the catheter slips out of the vein, causing swelling. Infection at the site is possible but uncommon with proper care. Alert staff if you notice pain, swelling, redness, or leaking at the IV site.",
        spanish_risks: "Los riesgos comunes incluyen moretones, dolor leve en el sitio y flebitis (inflamación de la vena que causa enrojecimiento y sensibilidad a lo largo de la vena). La infiltración puede ocurrir si el catéter se sale de la vena, causando hinchazón. La infección en el sitio es posible pero poco común con el cuidado adecuado. Alerte al personal si nota dolor, hinchazón, enrojecimiento o fugas en el sitio de la IV.",
        follow_up: "Peripheral IVs are typically replaced every 72-96 hours or if complications develop. The site is assessed regularly for signs of infection, infiltration, or phlebitis. When no longer needed, the catheter is gently removed and pressure is applied for a few minutes. A small bandage is placed over the site.",
        spanish_follow_up: "Las vías IV periféricas generalmente se reemplazan cada 72 a 96 horas o si se desarrollan complicaciones. El sitio se evalúa regularmente en busca de signos de infección, infiltración o flebitis. Cuando ya no es necesario, el catéter se retira suavemente y se aplica presión durante unos minutos. Se coloca un pequeño vendaje sobre el sitio.",
    },
    BedsideScreeningEntry {
        id: "bed-lumbar-puncture",
        name: "Lumbar Puncture (Spinal Tap)",
        spanish_name: "Punción lumbar",
        category: BedsideCategory::Bedside,
        description: "Insertion of a needle into the lower spinal canal to collect cerebrospinal fluid (CSF) for diagnostic testing or therapeutic drainage.",
        spanish_description: "Inserción de una aguja en el canal espinal inferior para recolectar líquido cefalorraquídeo (LCR) para pruebas diagnósticas o drenaje terapéutico.",
        specialties: &[
            "neurology",
            "emergency-medicine",
            "anesthesiology",
            "oncology",
        ],
        body_regions: &["spine", "nervous-system"],
        complexity: ComplexityLevel::High,
        settings: &[
            CareSetting::Bedside,
            CareSetting::HospitalInpatient,
            CareSetting::EmergencyDepartment,
            CareSetting::OutpatientClinic,
        ],
        anesthesia: &[AnesthesiaKind::Local],
        patient_explanation: "A lumbar puncture collects a small amount of the fluid that surrounds your brain and spinal cord. You will curl up on your side or sit hunched forward. After numbing the skin on your lower back, the doctor inserts a thin needle between the bones of your lower spine into the fluid-filled space. A small amount of fluid is collected for testing. The needle does not touch the spinal cord, which ends above this level.",
        spanish_patient_explanation: "Una punción lumbar recolecta una pequeña cantidad del líquido que rodea su cerebro y médula espinal. Se acurrucará de lado o se sentará inclinado hacia adelante. Después de adormecer la piel de su espalda baja, el médico inserta una aguja delgada entre los huesos de la columna inferior hasta el espacio lleno de líquido. Se recolecta una pequeña cantidad de líquido para análisis. La aguja no toca la médula espinal, que termina por encima de este nivel.",
        preparation: "Blood tests may be done beforehand to check clotting function. You may need to stop blood thinners (as directed by your doctor). An informed consent form is signed. You will be positioned either lying on your side with knees pulled to your chest, or sitting up and leaning forward over a table. The lower back is cleaned with antiseptic.",
        spanish_preparation: "Se pueden realizar análisis de sangre previos para verificar la función de coagulación. Es posible que necesite suspender los anticoagulantes (según las indicaciones de su médico). Se firma un formulario de consentimiento informado. Se le posicionará acostado de lado con las rodillas hacia el pecho, o sentado e inclinado hacia adelante sobre una mesa. La espalda baja se limpia con antiséptico.",
        what_to_expect: "The skin is numbed with local anesthetic, which stings briefly. The spinal needle is slowly advanced; you may feel pressure or a brief sharp sensation. Opening pressure is measured. Several small tubes of clear cerebrospinal fluid are collected. The needle is removed, the site is bandaged, and you lie flat for 30-60 minutes. The procedure takes 20-45 minutes.",
        spanish_what_to_expect: "La piel se adormece con anestesia local, que arde brevemente. La aguja espinal se avanza lentamente; puede sentir presión o una sensación aguda breve. Se mide la presión de apertura. Se recolectan varios tubos pequeños de líquido cefalorraquídeo transparente. Se retira la aguja, se venda el sitio y se acuesta boca arriba durante 30 a 60 minutos. El procedimiento toma de 20 a 45 minutos.",
        risks: "The most common side effect is a post-lumbar-puncture headache (10-30% of patients), typically worse when upright and relieved by lying flat. Other risks include back pain at the needle site, bleeding, infection (meningitis is extremely rare), nerve irritation causing brief leg tingling, and rarely, brain herniation in patients with elevated intracranial pressure.",
        spanish_risks: "El efecto secundario más común es el dolor de cabeza post-punción lumbar (10-30% de los pacientes), generalmente peor al estar de pie y aliviado al acostarse. Otros riesgos incluyen dolor de espalda en el sitio de la aguja, sangrado, infección (la meningitis es extremadamente rara), irritación nerviosa que causa hormigueo breve en las piernas y, raramente, herniación cerebral en pacientes con presión intracraneal elevada.",
        follow_up: "Lie flat for 1-2 hours after the procedure. Drink plenty of fluids and caffeine. Avoid strenuous activity for 24 hours. A post-procedure headache usually resolves within 24-48 hours. If a severe headache persists beyond 24 hours, a blood patch procedure may be offered. CSF results are typically available within hours to a few days.",
        spanish_follow_up: "Permanezca acostado durante 1 a 2 horas después del procedimiento. Beba abundantes líquidos y cafeína. Evite actividad extenuante durante 24 horas. El dolor de cabeza post-procedimiento generalmente se resuelve en 24 a 48 horas. Si un dolor de cabeza severo persiste más de 24 horas, se puede ofrecer un parche de sangre. Los resultados del LCR generalmente están disponibles en horas a unos días.",
    },
    BedsideScreeningEntry {
        id: "bed-thoracentesis",
        name: "Thoracentesis",
        spanish_name: "Toracentesis",
        category: BedsideCategory::Bedside,
        description: "Removal of fluid from the pleural space around the lungs using a needle, performed for diagnosis or symptom relief.",
        spanish_description: "Extracción de líquido del espacio pleural alrededor de los pulmones usando una aguja, realizada para diagnóstico o alivio de síntomas.",
        specialties: &[
            "pulmonology",
            "internal-medicine",
            "emergency-medicine",
            "critical-care",
        ],
        body_regions: &["chest", "lungs"],
        complexity: ComplexityLevel::High,
        settings: &[
            CareSetting::Bedside,
            CareSetting::HospitalInpatient,
            CareSetting::EmergencyDepartment,
            CareSetting::OutpatientClinic,
        ],
        anesthesia: &[AnesthesiaKind::Local],
        patient_explanation: "Thoracentesis removes fluid that has collected between your lungs and chest wall (called a pleural effusion). This fluid can make it hard to breathe. You sit up and lean forward over a table while the doctor numbs an area on your back, then inserts a needle to drain the fluid. The procedure helps you breathe more easily and provides fluid samples for testing.",
        spanish_patient_explanation: "La toracentesis extrae el líquido que se ha acumulado entre los pulmones y la pared torácica (llamado derrame pleural). Este líquido puede dificultar la respiración. Se sienta y se inclina hacia adelante sobre una mesa mientras el médico adormece un área de su espalda, luego inserta una aguja para drenar el líquido. El procedimiento le ayuda a respirar más fácilmente y proporciona muestras de líquido para análisis.",
        preparation: "An ultrasound is typically performed to locate the fluid and select the safest insertion point. Blood tests for clotting function may be done. You will sit upright on the edge of the bed, leaning forward with arms resting on a bedside table. Informed consent is obtained. You should report any blood thinner use to your doctor.",
        spanish_preparation: "Generalmente se realiza una ecografía para localizar el líquido y seleccionar el punto de inserción más seguro. Se pueden realizar análisis de coagulación. Se sentará erguido en el borde de la cama, inclinado hacia adelante con los brazos apoyados en una mesa. Se obtiene el consentimiento informado. Debe informar a su médico sobre cualquier uso de anticoagulantes.",
        what_to_expect: "The skin on your back is cleaned and numbed with local anesthetic. A needle is inserted through the chest wall into the pleural space under ultrasound guidance. You may feel pressure or a brief sharp sensation. Fluid is drained into collection bottles. For diagnostic taps, about 50-100 mL is removed. For therapeutic taps, 1-1.5 liters may be removed. You must remain still and avoid coughing during the procedure. It takes 15-30 minutes.",
        spanish_what_to_expect: "La piel de su espalda se limpia y se adormece con anestesia local. Se inserta una aguja a través de la pared torácica en el espacio pleural bajo guía ecográfica. Puede sentir presión o una sensación aguda breve. El líquido se drena en frascos de recolección. Para tomas diagnósticas, se retiran unos 50-100 mL. Para tomas terapéuticas, se pueden retirar 1 a 1.5 litros. Debe permanecer quieto y evitar toser durante el procedimiento. Toma de 15 a 30 minutos.",
        risks: "Risks include pneumothorax (air leak causing partial lung collapse, occurring in 5-10% of cases), bleeding, infection, pain at the insertion site, re-expansion pulmonary edema if too much fluid is removed too quickly, and organ injury (spleen, liver, diaphragm). A chest X-ray is often done after the procedure to check for pneumothorax.",
        spanish_risks: "Los riesgos incluyen neumotórax (fuga de aire que causa colapso parcial del pulmón, ocurre en 5-10% de los casos), sangrado, infección, dolor en el sitio de inserción, edema pulmonar por reexpansión si se retira demasiado líquido rápidamente, y lesión de órganos (bazo, hígado, diafragma). Frecuentemente se realiza una radiografía de tórax después del procedimiento para verificar neumotórax.",
        follow_up: "A chest X-ray is typically obtained 1-2 hours after the procedure to rule out pneumothorax. Vital signs and oxygen levels are monitored. Fluid analysis results are usually available within hours. Seek immediate attention if you develop sudden shortness of breath, chest pain, or cough after the procedure. Recurrent effusions may need a pleural drain or pleurodesis.",
        spanish_follow_up: "Generalmente se obtiene una radiografía de tórax 1 a 2 horas después del procedimiento para descartar neumotórax. Se monitorean signos vitales y niveles de oxígeno. Los resultados del análisis del líquido generalmente están disponibles en horas. Busque atención inmediata si desarrolla dificultad respiratoria repentina, dolor torácico o tos después del procedimiento. Los derrames recurrentes pueden necesitar un drenaje pleural o pleurodesis.",
    },
];
