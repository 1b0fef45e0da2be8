//! Screening procedures with fully bilingual education text.

use patedu_model::{
    AnesthesiaKind, BedsideCategory, BedsideScreeningEntry, CareSetting, ComplexityLevel,
};

pub(super) const ENTRIES: &[BedsideScreeningEntry] = &[
    BedsideScreeningEntry {
        id: "scr-colonoscopy",
        name: "Colonoscopy",
        spanish_name: "Colonoscopia",
        category: BedsideCategory::Screening,
        description: "Examination of the entire colon using a flexible camera to screen for colorectal cancer and polyps.",
        spanish_description: "Examen de todo el colon usando una cámara flexible para detectar cáncer colorrectal y pólipos.",
        specialties: &[
            "gastroenterology",
            "colorectal-surgery",
            "primary-care",
        ],
        body_regions: &["colon", "rectum", "gastrointestinal"],
        complexity: ComplexityLevel::Moderate,
        settings: &[
            CareSetting::EndoscopySuite,
            CareSetting::HospitalOutpatient,
            CareSetting::OutpatientSurgeryCenter,
        ],
        anesthesia: &[AnesthesiaKind::Sedation],
        patient_explanation: "A colonoscopy allows the doctor to look at the entire lining of your large intestine using a long, flexible tube with a camera on the end. It is the gold standard screening test for colorectal cancer. If polyps (small growths) are found, they can be removed during the same procedure before they become cancerous. The procedure is done under sedation so you will be comfortable and likely will not remember it.",
        spanish_patient_explanation: "Una colonoscopia permite al médico examinar todo el revestimiento de su intestino grueso usando un tubo largo y flexible con una cámara en el extremo. Es la prueba de detección estándar de oro para el cáncer colorrectal. Si se encuentran pólipos (pequeños crecimientos), se pueden extirpar durante el mismo procedimiento antes de que se vuelvan cancerosos. El procedimiento se realiza bajo sedación para que esté cómodo y probablemente no lo recuerde.",
        preparation: "Preparation begins 1-3 days before. Switch to a clear liquid diet the day before. The evening before (and sometimes the morning of), drink a prescribed bowel preparation solution that causes diarrhea to empty the colon. Stop certain medications (blood thinners, iron, certain diabetes medications) as directed. Arrange transportation home because sedation is used. Do not eat or drink anything after midnight.",
        spanish_preparation: "La preparación comienza 1 a 3 días antes. Cambie a una dieta de líquidos claros el día anterior. La noche anterior (y a veces la mañana del procedimiento), beba una solución de preparación intestinal recetada que causa diarrea para vaciar el colon. Suspenda ciertos medicamentos (anticoagulantes, hierro, ciertos medicamentos para diabetes) según las indicaciones. Organice transporte a casa porque se usa sedación. No coma ni beba nada después de la medianoche.",
        what_to_expect: "You change into a hospital gown and an IV is started. Sedation makes you sleepy and relaxed. You lie on your left side. The colonoscope is gently inserted through the rectum and advanced through the colon. Air or carbon dioxide is used to inflate the colon for better visibility. The doctor examines the lining and removes any polyps found. The procedure takes 20-45 minutes. You recover in a monitored area for 30-60 minutes. Mild bloating and gas are common afterward.",
        spanish_what_to_expect: "Se cambia a una bata de hospital y se inicia una IV. La sedación lo hace sentir somnoliento y relajado. Se acuesta del lado izquierdo. El colonoscopio se inserta suavemente a través del recto y se avanza por el colon. Se usa aire o dióxido de carbono para inflar el colon y mejorar la visibilidad. El médico examina el revestimiento y extirpa cualquier pólipo encontrado. El procedimiento toma de 20 a 45 minutos. Se recupera en un área monitoreada durante 30 a 60 minutos. La distensión leve y los gases son comunes después.",
        risks: "Risks include bleeding (especially after polyp removal, 1-2%), perforation (hole in the colon wall, less than 0.1%), adverse reaction to sedation, post-polypectomy syndrome (abdominal pain and fever), and rarely, missed lesions. Significant bleeding or perforation may require hospitalization or surgery. Call your doctor immediately if you experience severe abdominal pain, heavy rectal bleeding, fever, or persistent vomiting.",
        spanish_risks: "Los riesgos incluyen sangrado (especialmente después de la extirpación de pólipos, 1-2%), perforación (agujero en la pared del colon, menos del 0.1%), reacción adversa a la sedación, síndrome post-polipectomía (dolor abdominal y fiebre) y, raramente, lesiones no detectadas. El sangrado significativo o la perforación pueden requerir hospitalización o cirugía. Llame a su médico de inmediato si experimenta dolor abdominal severo, sangrado rectal abundante, fiebre o vómitos persistentes.",
        follow_up: "Do not drive or make important decisions for 24 hours after sedation. Resume your normal diet as tolerated. If polyps were removed, biopsy results take 1-2 weeks. Screening intervals depend on findings: if normal, repeat in 10 years; if polyps found, repeat in 3-5 years. Average-risk screening begins at age 45.",
        spanish_follow_up: "No conduzca ni tome decisiones importantes durante 24 horas después de la sedación. Reanude su dieta normal según la tolere. Si se extirparon pólipos, los resultados de la biopsia tardan 1 a 2 semanas. Los intervalos de detección dependen de los hallazgos: si es normal, repita en 10 años; si se encontraron pólipos, repita en 3 a 5 años. La detección de riesgo promedio comienza a los 45 años.",
    },
    BedsideScreeningEntry {
        id: "scr-mammography",
        name: "Mammography",
        spanish_name: "Mamografía",
        category: BedsideCategory::Screening,
        description: "Low-dose X-ray imaging of the breast to screen for and detect breast cancer at an early stage.",
        spanish_description: "Imagen de rayos X de baja dosis de la mama para detectar cáncer de mama en una etapa temprana.",
        specialties: &[
            "radiology",
            "breast-surgery",
            "oncology",
            "primary-care",
        ],
        body_regions: &["breast"],
        complexity: ComplexityLevel::Minimal,
        settings: &[
            CareSetting::ImagingCenter,
            CareSetting::OutpatientClinic,
            CareSetting::HospitalOutpatient,
        ],
        anesthesia: &[AnesthesiaKind::None],
        patient_explanation: "A mammogram is a special X-ray of your breasts that can find cancers too small to feel during a physical exam. Each breast is gently compressed between two flat plates while X-ray images are taken from different angles. While the compression can be uncomfortable, it lasts only a few seconds and is necessary to get clear images. Mammography is one of the best tools for early detection of breast cancer.",
        spanish_patient_explanation: "Una mamografía es una radiografía especial de sus senos que puede encontrar cánceres demasiado pequeños para detectarlos durante un examen físico. Cada seno se comprime suavemente entre dos placas planas mientras se toman imágenes de rayos X desde diferentes ángulos. Aunque la compresión puede ser incómoda, dura solo unos segundos y es necesaria para obtener imágenes claras. La mamografía es una de las mejores herramientas para la detección temprana del cáncer de mama.",
        preparation: "Schedule your mammogram for 1-2 weeks after your period when breasts are least tender. Do not wear deodorant, antiperspirant, powder, or lotion under your arms or on your breasts the day of the exam (these can appear as white spots on the image). Wear a two-piece outfit for easy undressing from the waist up. Bring prior mammogram images if done at a different facility.",
        spanish_preparation: "Programe su mamografía para 1 a 2 semanas después de su período cuando los senos están menos sensibles. No use desodorante, antitranspirante, talco o loción debajo de los brazos o en los senos el día del examen (estos pueden aparecer como manchas blancas en la imagen). Use un conjunto de dos piezas para desvestirse fácilmente de la cintura hacia arriba. Traiga imágenes de mamografías anteriores si se realizaron en otro centro.",
        what_to_expect: "You undress from the waist up and put on a gown. A technologist positions one breast at a time on the X-ray plate. A clear plastic plate gently presses down to compress and flatten the breast. Two views are taken of each breast (top-down and side). Compression lasts about 10-15 seconds per view. The entire appointment takes 15-30 minutes. Results are mailed or available online, usually within 1-2 weeks.",
        spanish_what_to_expect: "Se desviste de la cintura hacia arriba y se pone una bata. Una tecnóloga posiciona un seno a la vez en la placa de rayos X. Una placa de plástico transparente presiona suavemente para comprimir y aplanar el seno. Se toman dos vistas de cada seno (de arriba hacia abajo y lateral). La compresión dura aproximadamente 10 a 15 segundos por vista. Toda la cita toma de 15 a 30 minutos. Los resultados se envían por correo o están disponibles en línea, generalmente en 1 a 2 semanas.",
        risks: "Mammography involves very low radiation exposure (equivalent to about 7 weeks of natural background radiation). Risks include brief discomfort from compression, false positives (being called back for additional images that turn out normal), false negatives (a small cancer may be missed especially in dense breast tissue), and the anxiety associated with abnormal results. The benefits of early cancer detection far outweigh these risks.",
        spanish_risks: "La mamografía involucra una exposición a radiación muy baja (equivalente a unas 7 semanas de radiación natural de fondo). Los riesgos incluyen molestia breve por la compresión, falsos positivos (ser llamada para imágenes adicionales que resultan normales), falsos negativos (un cáncer pequeño puede no detectarse especialmente en tejido mamario denso) y la ansiedad asociada con resultados anormales. Los beneficios de la detección temprana del cáncer superan con creces estos riesgos.",
        follow_up: "Results are reported using the BI-RADS scale (0-6). BI-RADS 1-2 is normal or benign; you continue routine screening. BI-RADS 0 or 3 means additional imaging (ultrasound or follow-up mammogram) is recommended. BI-RADS 4-5 is suspicious and biopsy is recommended. Average-risk women should have mammograms every 1-2 years starting at age 40-50, depending on guidelines followed. Women at high risk may start earlier and add breast MRI.",
        spanish_follow_up: "Los resultados se reportan usando la escala BI-RADS (0-6). BI-RADS 1-2 es normal o benigno; continúe la detección rutinaria. BI-RADS 0 o 3 significa que se recomienda imágenes adicionales (ecografía o mamografía de seguimiento). BI-RADS 4-5 es sospechoso y se recomienda biopsia. Las mujeres de riesgo promedio deben hacerse mamografías cada 1 a 2 años comenzando entre los 40 y 50 años, según las guías seguidas. Las mujeres de alto riesgo pueden comenzar antes y agregar resonancia magnética mamaria.",
    },
    BedsideScreeningEntry {
        id: "scr-dexa",
        name: "DEXA Scan (Bone Density Test)",
        spanish_name: "Densitometría ósea DEXA",
        category: BedsideCategory::Screening,
        description: "Low-dose X-ray scan measuring bone mineral density to screen for osteoporosis and fracture risk.",
        spanish_description: "Escaneo de rayos X de baja dosis que mide la densidad mineral ósea para detectar osteoporosis y riesgo de fracturas.",
        specialties: &[
            "endocrinology",
            "rheumatology",
            "primary-care",
            "radiology",
        ],
        body_regions: &["spine", "hip", "bone"],
        complexity: ComplexityLevel::Minimal,
        settings: &[
            CareSetting::ImagingCenter,
            CareSetting::OutpatientClinic,
            CareSetting::HospitalOutpatient,
        ],
        anesthesia: &[AnesthesiaKind::None],
        patient_explanation: "A DEXA scan (Dual-Energy X-ray Absorptiometry) measures how strong and dense your bones are. It is the gold standard test for diagnosing osteoporosis (thinning of the bones). You lie on a padded table while a scanning arm passes over your body, typically focusing on the hip and spine. The test uses a very small amount of radiation, much less than a standard X-ray, and is completely painless.",
        spanish_patient_explanation: "Un escaneo DEXA (Absorciometría de Rayos X de Doble Energía) mide qué tan fuertes y densas son sus huesos. Es la prueba estándar de oro para diagnosticar osteoporosis (adelgazamiento de los huesos). Se acuesta en una mesa acolchada mientras un brazo de escaneo pasa sobre su cuerpo, generalmente enfocándose en la cadera y la columna. La prueba usa una cantidad muy pequeña de radiación, mucho menos que una radiografía estándar, y es completamente indolora.",
        preparation: "No special preparation is required. Wear comfortable clothing without metal zippers, buttons, or snaps (you may be given a gown). Do not take calcium supplements for 24 hours before the test. Inform the technologist if you have had a barium study, contrast CT, or nuclear medicine scan recently, as residual contrast material can affect results. Inform if you could be pregnant.",
        spanish_preparation: "No se requiere preparación especial. Use ropa cómoda sin cierres metálicos, botones o broches (se le puede dar una bata). No tome suplementos de calcio durante 24 horas antes de la prueba. Informe al tecnólogo si ha tenido un estudio con bario, una tomografía con contraste o una gammagrafía recientemente, ya que el material de contraste residual puede afectar los resultados. Informe si pudiera estar embarazada.",
        what_to_expect: "You lie flat on your back on an open, padded table. For the spine scan, your legs may be elevated on a padded block. For the hip scan, your foot is placed in a brace that rotates the hip inward. The scanning arm passes slowly above you without touching you. You must lie still for 10-20 minutes total. There are no injections, no enclosed spaces, and no discomfort.",
        spanish_what_to_expect: "Se acuesta boca arriba en una mesa abierta y acolchada. Para el escaneo de la columna, sus piernas pueden elevarse sobre un bloque acolchado. Para el escaneo de cadera, su pie se coloca en un soporte que rota la cadera hacia adentro. El brazo de escaneo pasa lentamente sobre usted sin tocarlo. Debe permanecer quieto durante 10 a 20 minutos en total. No hay inyecciones, no hay espacios cerrados y no hay molestias.",
        risks: "DEXA scans are extremely safe. Radiation exposure is minimal (about one-tenth of a chest X-ray). The main limitation is that results can be affected by spinal arthritis, prior fractures, or previous spinal surgery, which may falsely elevate bone density readings at those sites. There is no risk of claustrophobia as the scanner is open.",
        spanish_risks: "Los escaneos DEXA son extremadamente seguros. La exposición a radiación es mínima (aproximadamente una décima parte de una radiografía de tórax). La principal limitación es que los resultados pueden verse afectados por artritis espinal, fracturas previas o cirugía espinal previa, lo que puede elevar falsamente las lecturas de densidad ósea en esos sitios. No hay riesgo de claustrofobia ya que el escáner es abierto.",
        follow_up: "Results are reported as a T-score: above -1.0 is normal; -1.0 to -2.5 indicates osteopenia (low bone mass); below -2.5 indicates osteoporosis. Your doctor may start or adjust medications based on results. Lifestyle recommendations include weight-bearing exercise, adequate calcium and vitamin D intake, and fall prevention strategies. Follow-up scans are typically done every 1-2 years to monitor changes.",
        spanish_follow_up: "Los resultados se reportan como un T-score: por encima de -1.0 es normal; -1.0 a -2.5 indica osteopenia (baja masa ósea); por debajo de -2.5 indica osteoporosis. Su médico puede iniciar o ajustar medicamentos según los resultados. Las recomendaciones de estilo de vida incluyen ejercicio con soporte de peso, ingesta adecuada de calcio y vitamina D, y estrategias de prevención de caídas. Los escaneos de seguimiento generalmente se realizan cada 1 a 2 años para monitorear cambios.",
    },
    BedsideScreeningEntry {
        id: "scr-pap-smear",
        name: "Pap Smear / Cervical Screening",
        spanish_name: "Papanicolaou / Detección cervical",
        category: BedsideCategory::Screening,
        description: "Collection of cells from the cervix to screen for cervical cancer and precancerous changes, often combined with HPV testing.",
        spanish_description: "Recolección de células del cuello uterino para detectar cáncer cervical y cambios precancerosos, frecuentemente combinada con prueba de VPH.",
        specialties: &["obstetrics-gynecology", "primary-care"],
        body_regions: &["cervix", "reproductive"],
        complexity: ComplexityLevel::Minimal,
        settings: &[CareSetting::OutpatientClinic],
        anesthesia: &[AnesthesiaKind::None],
        patient_explanation: "A Pap smear is a screening test for cervical cancer. During a pelvic exam, the doctor gently collects a small sample of cells from your cervix (the lower part of the uterus). These cells are examined under a microscope for abnormalities that could lead to cervical cancer. The test can also be combined with HPV (human papillomavirus) testing, as HPV is the primary cause of cervical cancer. The test is quick, taking just a few minutes.",
        spanish_patient_explanation: "Un Papanicolaou es una prueba de detección de cáncer cervical. Durante un examen pélvico, el médico recolecta suavemente una pequeña muestra de células de su cuello uterino (la parte inferior del útero). Estas células se examinan bajo microscopio en busca de anormalidades que podrían conducir a cáncer cervical. La prueba también puede combinarse con la prueba de VPH (virus del papiloma humano), ya que el VPH es la causa principal del cáncer cervical. La prueba es rápida, tomando solo unos minutos.",
        preparation: "Schedule the test when you are not on your period (mid-cycle is ideal). Avoid vaginal intercourse, douching, or using vaginal medications, creams, or tampons for 2 days before the test, as these can wash away or obscure abnormal cells. No fasting is required. Empty your bladder before the exam for comfort.",
        spanish_preparation: "Programe la prueba cuando no esté en su período (la mitad del ciclo es ideal). Evite relaciones sexuales vaginales, duchas vaginales o usar medicamentos vaginales, cremas o tampones durante 2 días antes de la prueba, ya que estos pueden eliminar u ocultar células anormales. No se requiere ayuno. Vacíe su vejiga antes del examen para mayor comodidad.",
        what_to_expect: "You lie on an exam table with your feet in stirrups. The doctor inserts a speculum into the vagina to visualize the cervix. A small brush or spatula is used to gently scrape cells from the surface and inside the cervical canal. You may feel mild pressure or a brief cramping sensation. The cells are placed in a liquid vial and sent to a lab. The entire exam takes 5-10 minutes.",
        spanish_what_to_expect: "Se acuesta en una mesa de examen con los pies en estribos. El médico inserta un espéculo en la vagina para visualizar el cuello uterino. Se usa un pequeño cepillo o espátula para raspar suavemente las células de la superficie y del interior del canal cervical. Puede sentir presión leve o una breve sensación de calambre. Las células se colocan en un frasco con líquido y se envían al laboratorio. Todo el examen toma de 5 a 10 minutos.",
        risks: "Risks are extremely minimal. You may experience light spotting (a small amount of bleeding) for a day or two after the test. Mild cramping is possible but usually brief. False negatives (missing an abnormality) can occur but are reduced with regular screening. False positives may lead to unnecessary follow-up procedures. There is no significant health risk from the test itself.",
        spanish_risks: "Los riesgos son extremadamente mínimos. Puede experimentar manchado leve (una pequeña cantidad de sangrado) durante uno o dos días después de la prueba. Los calambres leves son posibles pero generalmente breves. Los falsos negativos (no detectar una anormalidad) pueden ocurrir pero se reducen con la detección regular. Los falsos positivos pueden llevar a procedimientos de seguimiento innecesarios. No hay riesgo significativo para la salud por la prueba en sí.",
        follow_up: "Results typically take 1-3 weeks. Normal results (negative) mean routine screening continues. Current guidelines recommend Pap smears every 3 years for ages 21-29, and co-testing (Pap + HPV) every 5 years or Pap alone every 3 years for ages 30-65. Abnormal results may require colposcopy (closer examination of the cervix) or repeat testing. HPV vaccination significantly reduces cervical cancer risk.",
        spanish_follow_up: "Los resultados generalmente tardan de 1 a 3 semanas. Los resultados normales (negativos) significan que continúa la detección rutinaria. Las guías actuales recomiendan Papanicolaou cada 3 años para edades de 21 a 29, y co-prueba (Papanicolaou + VPH) cada 5 años o Papanicolaou solo cada 3 años para edades de 30 a 65. Los resultados anormales pueden requerir colposcopia (examen más detallado del cuello uterino) o repetición de la prueba. La vacunación contra el VPH reduce significativamente el riesgo de cáncer cervical.",
    },
    BedsideScreeningEntry {
        id: "scr-aaa-ultrasound",
        name: "Abdominal Aortic Aneurysm (AAA) Ultrasound Screening",
        spanish_name: "Detección por ultrasonido de aneurisma de aorta abdominal",
        category: BedsideCategory::Screening,
        description: "One-time ultrasound screening of the abdominal aorta to detect aneurysms (abnormal enlargement) before rupture.",
        spanish_description: "Detección por ultrasonido única de la aorta abdominal para detectar aneurismas (agrandamiento anormal) antes de la ruptura.",
        specialties: &["vascular-surgery", "radiology", "primary-care"],
        body_regions: &["abdomen", "blood-vessels"],
        complexity: ComplexityLevel::Minimal,
        settings: &[
            CareSetting::OutpatientClinic,
            CareSetting::ImagingCenter,
            CareSetting::HospitalOutpatient,
        ],
        anesthesia: &[AnesthesiaKind::None],
        patient_explanation: "An abdominal aortic aneurysm (AAA) screening is a painless ultrasound test that checks whether the largest blood vessel in your body (the aorta) has become enlarged in the abdominal area. An aneurysm is a balloon-like bulge that can grow over time and may rupture if it gets too large, which is life-threatening. This one-time screening is recommended for men ages 65-75 who have ever smoked. Early detection allows monitoring and treatment before a rupture occurs.",
        spanish_patient_explanation: "Una detección de aneurisma de aorta abdominal (AAA) es una prueba de ultrasonido indolora que verifica si el vaso sanguíneo más grande de su cuerpo (la aorta) se ha agrandado en el área abdominal. Un aneurisma es una protuberancia como un globo que puede crecer con el tiempo y romperse si se hace demasiado grande, lo cual es potencialmente mortal. Esta detección única se recomienda para hombres de 65 a 75 años que alguna vez hayan fumado. La detección temprana permite el monitoreo y tratamiento antes de que ocurra una ruptura.",
        preparation: "You may be asked to fast for 8-12 hours before the test to reduce gas in the intestines, which can obscure the view of the aorta. Drink water as needed. Wear comfortable, loose-fitting clothing. The test requires no medications, no injections, and no contrast dye.",
        spanish_preparation: "Se le puede pedir que ayune durante 8 a 12 horas antes de la prueba para reducir los gases intestinales, que pueden oscurecer la vista de la aorta. Beba agua según sea necesario. Use ropa cómoda y holgada. La prueba no requiere medicamentos, inyecciones ni medio de contraste.",
        what_to_expect: "You lie on your back on an exam table. Warm gel is applied to your abdomen. A technologist moves an ultrasound probe (transducer) across your abdomen to visualize the aorta. You may feel mild pressure but no pain. The technologist measures the diameter of the aorta at several points. The exam takes 15-20 minutes. Results are usually available within a few days.",
        spanish_what_to_expect: "Se acuesta boca arriba en una mesa de examen. Se aplica gel tibio en su abdomen. Un tecnólogo mueve una sonda de ultrasonido (transductor) a través de su abdomen para visualizar la aorta. Puede sentir presión leve pero sin dolor. El tecnólogo mide el diámetro de la aorta en varios puntos. El examen toma de 15 a 20 minutos. Los resultados generalmente están disponibles en unos días.",
        risks: "AAA ultrasound screening has no physical risks. It uses sound waves (no radiation). The main concern is false positives leading to anxiety and potentially unnecessary follow-up tests or even surgery. Conversely, small aneurysms may be detected that require years of monitoring, causing ongoing worry. Overdiagnosis is possible for aneurysms that would never have ruptured. The benefit of detecting a large, treatable aneurysm before rupture outweighs these concerns.",
        spanish_risks: "La detección por ultrasonido de AAA no tiene riesgos físicos. Usa ondas sonoras (sin radiación). La principal preocupación son los falsos positivos que llevan a ansiedad y potencialmente pruebas de seguimiento innecesarias o incluso cirugía. Por el contrario, se pueden detectar aneurismas pequeños que requieren años de monitoreo, causando preocupación continua. El sobrediagnóstico es posible para aneurismas que nunca se habrían roto. El beneficio de detectar un aneurisma grande y tratable antes de la ruptura supera estas preocupaciones.",
        follow_up: "Normal aortic diameter is less than 3 cm; no further screening is needed. A small aneurysm (3-4.4 cm) is monitored with ultrasound every 6-12 months. A medium aneurysm (4.5-5.4 cm) is monitored every 3-6 months. A large aneurysm (5.5 cm or larger) is typically referred for surgical repair (open surgery or endovascular stent graft). Controlling blood pressure, quitting smoking, and managing cholesterol are essential regardless of findings.",
        spanish_follow_up: "El diámetro normal de la aorta es menor de 3 cm; no se necesita más detección. Un aneurisma pequeño (3-4.4 cm) se monitorea con ultrasonido cada 6 a 12 meses. Un aneurisma mediano (4.5-5.4 cm) se monitorea cada 3 a 6 meses. Un aneurisma grande (5.5 cm o más) generalmente se refiere para reparación quirúrgica (cirugía abierta o injerto de stent endovascular). Controlar la presión arterial, dejar de fumar y manejar el colesterol son esenciales independientemente de los hallazgos.",
    },
];
