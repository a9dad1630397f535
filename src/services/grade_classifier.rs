use crate::models::domain::{Classification, GradeScale};

pub struct GradeClassifier<'a> {
    scale: &'a GradeScale,
}

impl<'a> GradeClassifier<'a> {
    pub fn new(scale: &'a GradeScale) -> Self {
        Self { scale }
    }

    /// Letter grade and remark for a percentage. Values outside 0..=100 are
    /// not clamped; they fall into the top band or the fallback.
    pub fn classify(&self, percentage: f64) -> Classification {
        self.scale
            .bands
            .iter()
            .find(|band| percentage >= band.min_percentage)
            .map(|band| Classification::new(band.grade, &band.remark))
            .unwrap_or_else(|| self.scale.fallback.clone())
    }
}
