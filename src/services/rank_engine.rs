use async_graphql::SimpleObject;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq)]
pub struct RankCandidate {
    pub student_id: String,
    pub student_name: String,
    pub grand_total: f64,
}

impl RankCandidate {
    pub fn new(student_id: &str, student_name: &str, grand_total: f64) -> Self {
        Self {
            student_id: student_id.to_string(),
            student_name: student_name.to_string(),
            grand_total,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, SimpleObject)]
pub struct RankedStudent {
    pub student_id: String,
    pub student_name: String,
    pub grand_total: f64,
    pub rank: u32,
}

/// Students of one class in rank order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassRanking {
    students: Vec<RankedStudent>,
}

impl ClassRanking {
    pub fn students(&self) -> &[RankedStudent] {
        &self.students
    }

    pub fn into_students(self) -> Vec<RankedStudent> {
        self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn find(&self, student_id: &str) -> Option<&RankedStudent> {
        self.students.iter().find(|s| s.student_id == student_id)
    }

    /// "3 of 28" style label for a single report card.
    pub fn position_label(&self, student_id: &str) -> Option<String> {
        self.find(student_id)
            .map(|s| format!("{} of {}", s.rank, self.students.len()))
    }
}

pub struct RankEngine;

impl RankEngine {
    /// Competition ranking, highest total first. Equal totals share a rank and
    /// the next distinct total takes its 1-based position (1, 2, 2, 4).
    /// Exact ties keep their input order.
    pub fn rank(mut candidates: Vec<RankCandidate>) -> ClassRanking {
        candidates.sort_by(|a, b| b.grand_total.total_cmp(&a.grand_total));

        let mut students: Vec<RankedStudent> = Vec::with_capacity(candidates.len());
        for (index, candidate) in candidates.into_iter().enumerate() {
            let position = (index + 1) as u32;
            let rank = match students.last() {
                Some(previous) if previous.grand_total == candidate.grand_total => previous.rank,
                _ => position,
            };
            students.push(RankedStudent {
                student_id: candidate.student_id,
                student_name: candidate.student_name,
                grand_total: candidate.grand_total,
                rank,
            });
        }

        ClassRanking { students }
    }
}
