//! Letter grades derived from a student's average score

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GradeError;

/// Letter grade, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D+")]
    DPlus,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "F")]
    F,
}

/// Closed lower bounds, checked highest first
const THRESHOLDS: [(f64, Grade); 7] = [
    (90.0, Grade::A),
    (85.0, Grade::BPlus),
    (80.0, Grade::B),
    (75.0, Grade::CPlus),
    (70.0, Grade::C),
    (65.0, Grade::DPlus),
    (60.0, Grade::D),
];

/// Map an average score to its letter grade.
///
/// | Average | Grade |
/// |---------|-------|
/// | >= 90   | A     |
/// | >= 85   | B+    |
/// | >= 80   | B     |
/// | >= 75   | C+    |
/// | >= 70   | C     |
/// | >= 65   | D+    |
/// | >= 60   | D     |
/// | < 60    | F     |
///
/// Total over `f64`: averages outside 0-100 still grade, and NaN grades F.
/// The average is compared unrounded.
pub fn grade_for(average: f64) -> Grade {
    THRESHOLDS
        .iter()
        .find(|(floor, _)| average >= *floor)
        .map(|(_, grade)| *grade)
        .unwrap_or(Grade::F)
}

impl Grade {
    pub const ALL: [Grade; 8] = [
        Grade::A,
        Grade::BPlus,
        Grade::B,
        Grade::CPlus,
        Grade::C,
        Grade::DPlus,
        Grade::D,
        Grade::F,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::DPlus => "D+",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grade::ALL
            .iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| GradeError::invalid_input("grade", s))
    }
}
