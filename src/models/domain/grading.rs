use std::fmt;

use async_graphql::{Enum, SimpleObject};
use serde::{Deserialize, Serialize};

use crate::constants::exam_defaults::{DEFAULT_GRADE_BANDS, FALLBACK_GRADE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, Enum)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        };
        f.write_str(letter)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct Classification {
    pub grade: LetterGrade,
    pub remark: String,
}

impl Classification {
    pub fn new(grade: LetterGrade, remark: &str) -> Self {
        Self {
            grade,
            remark: remark.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, SimpleObject)]
pub struct GradeBand {
    pub min_percentage: f64,
    pub grade: LetterGrade,
    pub remark: String,
}

/// Ordered threshold table. Bands are checked top-down; the fallback applies
/// when no band's lower bound is reached.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, SimpleObject)]
pub struct GradeScale {
    pub bands: Vec<GradeBand>,
    pub fallback: Classification,
}

impl Default for GradeScale {
    fn default() -> Self {
        let bands = DEFAULT_GRADE_BANDS
            .iter()
            .map(|(min_percentage, grade, remark)| GradeBand {
                min_percentage: *min_percentage,
                grade: *grade,
                remark: remark.to_string(),
            })
            .collect();
        let (grade, remark) = FALLBACK_GRADE;
        Self {
            bands,
            fallback: Classification::new(grade, remark),
        }
    }
}

/// Which column of the report card a sitting fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, Enum)]
#[serde(rename_all = "lowercase")]
pub enum TermSlot {
    Monthly1,
    Midterm,
    Monthly2,
    Final,
}
