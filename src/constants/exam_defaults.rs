use crate::models::domain::{ExamType, LetterGrade, TermSlot};

pub const DEFAULT_SUBJECTS: [&str; 10] = [
    "REL", "ARB", "SOMALI", "ENG", "MATH'S", "BIO", "CHEM", "PHYS", "GEO", "HIS",
];

pub const DEFAULT_TERM_MAPPING: [(ExamType, TermSlot); 4] = [
    (ExamType::MonthlyExam1, TermSlot::Monthly1),
    (ExamType::MidExam, TermSlot::Midterm),
    (ExamType::MonthlyExam2, TermSlot::Monthly2),
    (ExamType::FinalExam, TermSlot::Final),
];

// Inclusive lower bounds, highest first.
pub const DEFAULT_GRADE_BANDS: [(f64, LetterGrade, &str); 4] = [
    (90.0, LetterGrade::A, "Excellent"),
    (75.0, LetterGrade::B, "Very Good"),
    (60.0, LetterGrade::C, "Good"),
    (50.0, LetterGrade::D, "Acceptable"),
];

pub const FALLBACK_GRADE: (LetterGrade, &str) = (LetterGrade::F, "Fail");

/// Shown in report cells that have no recorded score.
pub const MISSING_SCORE_PLACEHOLDER: &str = "-";
