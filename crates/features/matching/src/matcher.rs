//! Cluster weights and course eligibility.

use crate::catalog::{Catalog, Course, MAX_WEIGHT};
use crate::error::MatchingError;
use crate::grade::Grade;
use crate::sheet::{GradeSheet, MAX_AGGREGATE};
use crate::subject::SubjectSet;
use serde::Serialize;
use tracing::debug;

/// Highest sum of four cluster subjects.
pub const MAX_CLUSTER_POINTS: u32 = 4 * Grade::MAX_POINTS;

/// `sqrt((r / 48) * (t / 84)) * 48`, rounded to three decimals.
///
/// `r` is the sum of the four cluster subjects, `t` the best-seven aggregate.
#[must_use]
pub fn cluster_weight(cluster_points: u32, aggregate: u32) -> f64 {
    let r = f64::from(cluster_points) / f64::from(MAX_CLUSTER_POINTS);
    let t = f64::from(aggregate) / f64::from(MAX_AGGREGATE);
    round3((r * t).sqrt() * MAX_WEIGHT)
}

/// Best total over the cluster slots, each filled by a distinct graded subject.
/// `None` when some slot cannot be filled.
#[must_use]
pub fn cluster_points(sheet: &GradeSheet, cluster: &[SubjectSet]) -> Option<u32> {
    best_assignment(sheet, cluster, SubjectSet::empty())
}

fn best_assignment(sheet: &GradeSheet, slots: &[SubjectSet], used: SubjectSet) -> Option<u32> {
    let Some((slot, rest)) = slots.split_first() else {
        return Some(0);
    };

    slot.difference(used)
        .subjects()
        .filter_map(|subject| {
            let grade = sheet.get(subject)?;
            best_assignment(sheet, rest, used | subject.flag()).map(|points| points + grade.points())
        })
        .max()
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// A course the candidate qualifies for.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseMatch {
    pub course_code: &'static str,
    pub course_name: &'static str,
    pub university: &'static str,
    pub weight: f64,
    pub cutoff: f64,
    /// `weight - cutoff`, never negative.
    pub margin: f64,
}

/// Outcome of matching a grade sheet against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub aggregate: u32,
    pub mean_grade: Grade,
    /// Eligible courses, widest margin first.
    pub matches: Vec<CourseMatch>,
}

impl Catalog {
    /// Scores `sheet` against every course.
    ///
    /// # Errors
    /// * [`MatchingError::IncompleteSheet`] with fewer than seven graded subjects.
    pub fn assess(&self, sheet: &GradeSheet) -> Result<MatchReport, MatchingError> {
        let aggregate = sheet.aggregate()?;
        let mean_grade = sheet.mean_grade()?;

        let mut matches: Vec<CourseMatch> = self
            .courses()
            .iter()
            .filter(|course| mean_grade >= course.minimum_mean)
            .filter_map(|course| self.score(course, sheet, aggregate))
            .collect();

        matches.sort_by(|a, b| {
            b.margin
                .total_cmp(&a.margin)
                .then_with(|| b.weight.total_cmp(&a.weight))
                .then_with(|| a.course_code.cmp(b.course_code))
        });

        debug!(aggregate, %mean_grade, eligible = matches.len(), "Grade sheet assessed");
        Ok(MatchReport { aggregate, mean_grade, matches })
    }

    /// Eligible courses for `sheet`, widest margin first.
    ///
    /// # Errors
    /// * [`MatchingError::IncompleteSheet`] with fewer than seven graded subjects.
    pub fn match_courses(&self, sheet: &GradeSheet) -> Result<Vec<CourseMatch>, MatchingError> {
        self.assess(sheet).map(|report| report.matches)
    }

    fn score(&self, course: &Course, sheet: &GradeSheet, aggregate: u32) -> Option<CourseMatch> {
        let points = cluster_points(sheet, &course.cluster)?;
        let weight = cluster_weight(points, aggregate);
        if weight < course.cutoff {
            return None;
        }

        let university = self.university(course.university).map_or(course.university, |u| u.name);
        Some(CourseMatch {
            course_code: course.code,
            course_name: course.name,
            university,
            weight,
            cutoff: course.cutoff,
            margin: round3(weight - course.cutoff),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subject::Subject;

    #[test]
    fn perfect_scores_reach_the_maximum_weight() {
        assert!((cluster_weight(48, 84) - 48.0).abs() < f64::EPSILON);
        assert!(cluster_weight(0, 84).abs() < f64::EPSILON);
    }

    #[test]
    fn weights_are_rounded_to_three_decimals() {
        // sqrt((40/48) * (70/84)) * 48 = 40.0
        assert!((cluster_weight(40, 70) - 40.0).abs() < f64::EPSILON);
        // sqrt((37/48) * (61/84)) * 48 = 35.9126...
        assert!((cluster_weight(37, 61) - 35.913).abs() < 1e-9);
    }

    #[test]
    fn distinct_subjects_fill_each_slot() {
        let sheet = GradeSheet::new()
            .with(Subject::Mat, Grade::A)
            .with(Subject::Phy, Grade::B)
            .with(Subject::Eng, Grade::C);

        // The broad first slot must not take MAT away from the MAT-only slot.
        let slots = [SubjectSet::all(), SubjectSet::MAT];
        assert_eq!(cluster_points(&sheet, &slots), Some(9 + 12));

        let missing = [SubjectSet::MAT, SubjectSet::BIO];
        assert_eq!(cluster_points(&sheet, &missing), None);

        let reused = [SubjectSet::MAT, SubjectSet::MAT];
        assert_eq!(cluster_points(&sheet, &reused), None);
    }
}
