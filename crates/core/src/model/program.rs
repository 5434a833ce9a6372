use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A study program offered on the platform.
///
/// The set is fixed; every catalog lookup, quiz and score entry is keyed by
/// one of these variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Program {
    Ai,
    Ml,
    BusinessAnalytics,
    Bba,
    DataAnalytics,
    Robotics,
    Biotechnology,
    Agriculture,
    Law,
    HospitalManagement,
    DigitalMarketing,
}

impl Program {
    /// All programs, in catalog order.
    pub const ALL: [Program; 11] = [
        Program::Ai,
        Program::Ml,
        Program::BusinessAnalytics,
        Program::Bba,
        Program::DataAnalytics,
        Program::Robotics,
        Program::Biotechnology,
        Program::Agriculture,
        Program::Law,
        Program::HospitalManagement,
        Program::DigitalMarketing,
    ];

    /// Returns the display name used throughout the catalogs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Program::Ai => "AI",
            Program::Ml => "ML",
            Program::BusinessAnalytics => "Business Analytics",
            Program::Bba => "BBA",
            Program::DataAnalytics => "Data Analytics",
            Program::Robotics => "Robotics",
            Program::Biotechnology => "Biotechnology",
            Program::Agriculture => "Agriculture",
            Program::Law => "Law",
            Program::HospitalManagement => "Hospital Management",
            Program::DigitalMarketing => "Digital Marketing",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing a program from its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseProgramError {
    name: String,
}

impl fmt::Display for ParseProgramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown program {:?}", self.name)
    }
}

impl std::error::Error for ParseProgramError {}

impl FromStr for Program {
    type Err = ParseProgramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Program::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParseProgramError {
                name: s.to_string(),
            })
    }
}
