use crate::error::MatchingError;
use crate::grade::Grade;
use crate::subject::{Subject, SubjectSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Number of subjects counted towards the aggregate.
pub const BEST_OF: usize = SUBJECTS_COUNTED as usize;

const SUBJECTS_COUNTED: u32 = 7;

/// Aggregate points of a straight-A sheet.
pub const MAX_AGGREGATE: u32 = 84;

/// A candidate's KCSE results, one grade per subject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradeSheet {
    grades: BTreeMap<Subject, Grade>,
}

impl GradeSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or replaces the grade for `subject`.
    pub fn set(&mut self, subject: Subject, grade: Grade) -> Option<Grade> {
        self.grades.insert(subject, grade)
    }

    pub fn remove(&mut self, subject: Subject) -> Option<Grade> {
        self.grades.remove(&subject)
    }

    #[must_use]
    pub fn with(mut self, subject: Subject, grade: Grade) -> Self {
        self.set(subject, grade);
        self
    }

    #[must_use]
    pub fn get(&self, subject: Subject) -> Option<Grade> {
        self.grades.get(&subject).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.grades.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    /// Whether enough subjects are graded to compute an aggregate.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.grades.len() >= BEST_OF
    }

    #[must_use]
    pub fn graded(&self) -> SubjectSet {
        self.grades.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Subject, Grade)> + '_ {
        self.grades.iter().map(|(subject, grade)| (*subject, *grade))
    }

    /// Points of the best seven subjects.
    ///
    /// # Errors
    /// * [`MatchingError::IncompleteSheet`] with fewer than seven graded subjects.
    pub fn aggregate(&self) -> Result<u32, MatchingError> {
        if !self.is_complete() {
            return Err(MatchingError::IncompleteSheet {
                message: format!("{} of {BEST_OF} subjects graded", self.grades.len()).into(),
                context: None,
            });
        }

        let mut points: Vec<u32> = self.grades.values().map(|grade| grade.points()).collect();
        points.sort_unstable_by(|a, b| b.cmp(a));
        Ok(points.iter().take(BEST_OF).sum())
    }

    /// Mean grade over the best seven subjects, rounded to the nearest point.
    ///
    /// # Errors
    /// * [`MatchingError::IncompleteSheet`] with fewer than seven graded subjects.
    pub fn mean_grade(&self) -> Result<Grade, MatchingError> {
        let aggregate = self.aggregate()?;
        let mean = (aggregate + SUBJECTS_COUNTED / 2) / SUBJECTS_COUNTED;

        Grade::from_points(mean).ok_or_else(|| MatchingError::Internal {
            message: format!("mean of {mean} points has no grade").into(),
            context: None,
        })
    }
}

/// Parses `subject=grade` pairs separated by commas, e.g. `eng=A-,mat=B+,bio=B`.
impl FromStr for GradeSheet {
    type Err = MatchingError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut sheet = Self::new();

        for pair in input.split(',').map(str::trim).filter(|pair| !pair.is_empty()) {
            let Some((subject, grade)) = pair.split_once('=') else {
                return Err(MatchingError::InvalidGrade {
                    message: format!("expected subject=grade, got '{pair}'").into(),
                    context: None,
                });
            };
            sheet.set(Subject::parse(subject)?, Grade::parse(grade)?);
        }

        Ok(sheet)
    }
}

impl FromIterator<(Subject, Grade)> for GradeSheet {
    fn from_iter<I: IntoIterator<Item = (Subject, Grade)>>(iter: I) -> Self {
        Self { grades: iter.into_iter().collect() }
    }
}
