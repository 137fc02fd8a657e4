use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Graded,
    Pending,
    Absent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentResult {
    pub assignment_id: Uuid,
    pub student_id: String,
    /// Only meaningful when `status` is `Graded`.
    #[serde(default)]
    pub grade: Option<f64>,
    pub max_grade: f64,
    pub status: ResultStatus,
}

impl AssignmentResult {
    /// The grade of a graded result, if it carries a usable one.
    pub fn graded_value(&self) -> Option<f64> {
        match (self.status, self.grade) {
            (ResultStatus::Graded, Some(grade)) if grade.is_finite() => Some(grade),
            _ => None,
        }
    }

    pub fn percentage(&self) -> Option<f64> {
        let grade = self.graded_value()?;
        (self.max_grade > 0.0).then(|| grade / self.max_grade * 100.0)
    }
}
