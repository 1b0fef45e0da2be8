//! Type-safe enumerations for procedure metadata.
//!
//! The content stores tag every record with kebab-case string codes
//! (category, complexity, anesthesia, care setting). These enums give
//! those codes compile-time type safety while keeping the canonical
//! string form for display and machine output.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Category of a general medical procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProcedureCategory {
    /// Establishes or rules out a diagnosis (labs, imaging, endoscopy).
    Diagnostic,
    /// Treats an existing condition (drainage, ablation, stenting).
    Therapeutic,
    /// Operative intervention under anesthesia.
    Surgical,
    /// Early detection in asymptomatic patients.
    Screening,
    /// Prevents disease before it occurs.
    Preventive,
}

impl ProcedureCategory {
    /// All categories, in the order the content store lists them.
    pub const ALL: &[ProcedureCategory] = &[
        ProcedureCategory::Diagnostic,
        ProcedureCategory::Therapeutic,
        ProcedureCategory::Surgical,
        ProcedureCategory::Screening,
        ProcedureCategory::Preventive,
    ];

    /// Returns the canonical kebab-case code used in the content store.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcedureCategory::Diagnostic => "diagnostic",
            ProcedureCategory::Therapeutic => "therapeutic",
            ProcedureCategory::Surgical => "surgical",
            ProcedureCategory::Screening => "screening",
            ProcedureCategory::Preventive => "preventive",
        }
    }
}

impl fmt::Display for ProcedureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProcedureCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "diagnostic" => Ok(ProcedureCategory::Diagnostic),
            "therapeutic" => Ok(ProcedureCategory::Therapeutic),
            "surgical" => Ok(ProcedureCategory::Surgical),
            "screening" => Ok(ProcedureCategory::Screening),
            "preventive" => Ok(ProcedureCategory::Preventive),
            _ => Err(format!("Unknown procedure category: {s}")),
        }
    }
}

/// Category of a bedside/screening education record.
///
/// The bedside-and-screening store has its own two-value category
/// space, distinct from [`ProcedureCategory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BedsideCategory {
    /// Performed at the bedside (lines, tubes, punctures, wound care).
    Bedside,
    /// Routine screening exams (colonoscopy, mammography, DEXA).
    Screening,
}

impl BedsideCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BedsideCategory::Bedside => "bedside",
            BedsideCategory::Screening => "screening",
        }
    }
}

impl fmt::Display for BedsideCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BedsideCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bedside" => Ok(BedsideCategory::Bedside),
            "screening" => Ok(BedsideCategory::Screening),
            _ => Err(format!("Unknown bedside/screening category: {s}")),
        }
    }
}

/// Five-level complexity scale shared by both stores.
///
/// Complexity reflects invasiveness and recovery burden, not clinical
/// risk in isolation: a blood draw is `Minimal`, a cardiac ablation is
/// `High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplexityLevel {
    Minimal,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl ComplexityLevel {
    /// Returns the canonical kebab-case code used in the content store.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityLevel::Minimal => "minimal",
            ComplexityLevel::Low => "low",
            ComplexityLevel::Moderate => "moderate",
            ComplexityLevel::High => "high",
            ComplexityLevel::VeryHigh => "very-high",
        }
    }

    /// Numeric rank for ordering, Minimal=1 through VeryHigh=5.
    pub fn rank(&self) -> u8 {
        match self {
            ComplexityLevel::Minimal => 1,
            ComplexityLevel::Low => 2,
            ComplexityLevel::Moderate => 3,
            ComplexityLevel::High => 4,
            ComplexityLevel::VeryHigh => 5,
        }
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ComplexityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "minimal" => Ok(ComplexityLevel::Minimal),
            "low" => Ok(ComplexityLevel::Low),
            "moderate" => Ok(ComplexityLevel::Moderate),
            "high" => Ok(ComplexityLevel::High),
            "very-high" | "very high" => Ok(ComplexityLevel::VeryHigh),
            _ => Err(format!("Unknown complexity level: {s}")),
        }
    }
}

/// Anesthesia used for a procedure. Records carry a list since many
/// procedures are done under more than one regimen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnesthesiaKind {
    None,
    Local,
    Topical,
    Regional,
    Sedation,
    General,
    Spinal,
    Epidural,
}

impl AnesthesiaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnesthesiaKind::None => "none",
            AnesthesiaKind::Local => "local",
            AnesthesiaKind::Topical => "topical",
            AnesthesiaKind::Regional => "regional",
            AnesthesiaKind::Sedation => "sedation",
            AnesthesiaKind::General => "general",
            AnesthesiaKind::Spinal => "spinal",
            AnesthesiaKind::Epidural => "epidural",
        }
    }
}

impl fmt::Display for AnesthesiaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AnesthesiaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(AnesthesiaKind::None),
            "local" => Ok(AnesthesiaKind::Local),
            "topical" => Ok(AnesthesiaKind::Topical),
            "regional" => Ok(AnesthesiaKind::Regional),
            "sedation" => Ok(AnesthesiaKind::Sedation),
            "general" => Ok(AnesthesiaKind::General),
            "spinal" => Ok(AnesthesiaKind::Spinal),
            "epidural" => Ok(AnesthesiaKind::Epidural),
            _ => Err(format!("Unknown anesthesia kind: {s}")),
        }
    }
}

/// Care setting where a procedure takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CareSetting {
    OutpatientClinic,
    OutpatientSurgeryCenter,
    HospitalOutpatient,
    HospitalInpatient,
    EmergencyDepartment,
    OperatingRoom,
    CardiacCathLab,
    InterventionalRadiology,
    EndoscopySuite,
    Bedside,
    Laboratory,
    ImagingCenter,
    Home,
}

impl CareSetting {
    pub fn as_str(&self) -> &'static str {
        match self {
            CareSetting::OutpatientClinic => "outpatient-clinic",
            CareSetting::OutpatientSurgeryCenter => "outpatient-surgery-center",
            CareSetting::HospitalOutpatient => "hospital-outpatient",
            CareSetting::HospitalInpatient => "hospital-inpatient",
            CareSetting::EmergencyDepartment => "emergency-department",
            CareSetting::OperatingRoom => "operating-room",
            CareSetting::CardiacCathLab => "cardiac-cath-lab",
            CareSetting::InterventionalRadiology => "interventional-radiology",
            CareSetting::EndoscopySuite => "endoscopy-suite",
            CareSetting::Bedside => "bedside",
            CareSetting::Laboratory => "laboratory",
            CareSetting::ImagingCenter => "imaging-center",
            CareSetting::Home => "home",
        }
    }
}

impl fmt::Display for CareSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CareSetting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "outpatient-clinic" => Ok(CareSetting::OutpatientClinic),
            "outpatient-surgery-center" => Ok(CareSetting::OutpatientSurgeryCenter),
            "hospital-outpatient" => Ok(CareSetting::HospitalOutpatient),
            "hospital-inpatient" => Ok(CareSetting::HospitalInpatient),
            "emergency-department" => Ok(CareSetting::EmergencyDepartment),
            "operating-room" => Ok(CareSetting::OperatingRoom),
            "cardiac-cath-lab" => Ok(CareSetting::CardiacCathLab),
            "interventional-radiology" => Ok(CareSetting::InterventionalRadiology),
            "endoscopy-suite" => Ok(CareSetting::EndoscopySuite),
            "bedside" => Ok(CareSetting::Bedside),
            "laboratory" => Ok(CareSetting::Laboratory),
            "imaging-center" => Ok(CareSetting::ImagingCenter),
            "home" => Ok(CareSetting::Home),
            _ => Err(format!("Unknown care setting: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str() {
        assert_eq!(
            "diagnostic".parse::<ProcedureCategory>().unwrap(),
            ProcedureCategory::Diagnostic
        );
        assert_eq!(
            "SCREENING".parse::<ProcedureCategory>().unwrap(),
            ProcedureCategory::Screening
        );
        assert!("imaging".parse::<ProcedureCategory>().is_err());
    }

    #[test]
    fn test_complexity_rank_ordering() {
        assert!(ComplexityLevel::Minimal.rank() < ComplexityLevel::Low.rank());
        assert!(ComplexityLevel::High.rank() < ComplexityLevel::VeryHigh.rank());
    }

    #[test]
    fn test_complexity_round_trip() {
        for level in [
            ComplexityLevel::Minimal,
            ComplexityLevel::Low,
            ComplexityLevel::Moderate,
            ComplexityLevel::High,
            ComplexityLevel::VeryHigh,
        ] {
            assert_eq!(level.as_str().parse::<ComplexityLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_care_setting_round_trip() {
        assert_eq!(
            "cardiac-cath-lab".parse::<CareSetting>().unwrap(),
            CareSetting::CardiacCathLab
        );
        assert_eq!(
            CareSetting::EndoscopySuite.as_str().parse::<CareSetting>().unwrap(),
            CareSetting::EndoscopySuite
        );
    }

    #[test]
    fn test_bedside_category_from_str() {
        assert_eq!(
            "Bedside".parse::<BedsideCategory>().unwrap(),
            BedsideCategory::Bedside
        );
        assert!("diagnostic".parse::<BedsideCategory>().is_err());
    }
}
