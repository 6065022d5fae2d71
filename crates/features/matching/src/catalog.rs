//! Static registry of universities and the degree programmes they admit to.

use crate::error::MatchingError;
use crate::grade::Grade;
use crate::subject::SubjectSet;
use serde::Serialize;
use strum_macros::Display;

const ANY: SubjectSet = SubjectSet::all();
const LANGUAGE: SubjectSet = SubjectSet::LANGUAGES;
const MAT_OR_PHY: SubjectSet = SubjectSet::MAT.union(SubjectSet::PHY);
const BIO_OR_AGR: SubjectSet = SubjectSet::BIO.union(SubjectSet::AGR);
const SCIENCE_OR_MAT: SubjectSet = SubjectSet::SCIENCES.union(SubjectSet::MAT);
const HUMANITY: SubjectSet = SubjectSet::HUMANITIES;
const APPLIED: SubjectSet = SubjectSet::TECHNICAL.union(SubjectSet::HUMANITIES);

/// Highest cluster weight a candidate can reach.
pub const MAX_WEIGHT: f64 = 48.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum Ownership {
    Public,
    Private,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct University {
    pub code: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    pub ownership: Ownership,
}

/// A degree programme with its four cluster requirements.
///
/// Each cluster slot lists the subjects that may fill it; a subject fills at most one slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    pub code: &'static str,
    pub name: &'static str,
    pub university: &'static str,
    pub cluster: [SubjectSet; 4],
    /// Last cluster weight admitted in the previous placement cycle.
    pub cutoff: f64,
    pub minimum_mean: Grade,
}

const fn university(
    code: &'static str,
    name: &'static str,
    location: &'static str,
    ownership: Ownership,
) -> University {
    University { code, name, location, ownership }
}

const fn course(
    code: &'static str,
    name: &'static str,
    university: &'static str,
    cluster: [SubjectSet; 4],
    cutoff: f64,
    minimum_mean: Grade,
) -> Course {
    Course { code, name, university, cluster, cutoff, minimum_mean }
}

const MEDICINE: [SubjectSet; 4] = [SubjectSet::BIO, SubjectSet::CHE, MAT_OR_PHY, LANGUAGE];
const ENGINEERING: [SubjectSet; 4] = [SubjectSet::MAT, SubjectSet::PHY, SubjectSet::CHE, ANY];
const COMPUTING: [SubjectSet; 4] = [SubjectSet::MAT, SubjectSet::PHY, SubjectSet::SCIENCES, ANY];
const LAW: [SubjectSet; 4] = [SubjectSet::ENG, HUMANITY, SCIENCE_OR_MAT, ANY];
const COMMERCE: [SubjectSet; 4] = [SubjectSet::MAT, LANGUAGE, APPLIED, ANY];
const EDUCATION_ARTS: [SubjectSet; 4] = [LANGUAGE, HUMANITY, HUMANITY, ANY];
const AGRICULTURE: [SubjectSet; 4] = [BIO_OR_AGR, SubjectSet::CHE, MAT_OR_PHY.union(SubjectSet::GEO), ANY];

static UNIVERSITIES: &[University] = &[
    university("UON", "University of Nairobi", "Nairobi", Ownership::Public),
    university("KU", "Kenyatta University", "Nairobi", Ownership::Public),
    university("MU", "Moi University", "Eldoret", Ownership::Public),
    university("JKUAT", "Jomo Kenyatta University of Agriculture and Technology", "Juja", Ownership::Public),
    university("EGERTON", "Egerton University", "Njoro", Ownership::Public),
    university("MASENO", "Maseno University", "Kisumu", Ownership::Public),
    university("TUK", "Technical University of Kenya", "Nairobi", Ownership::Public),
    university("DEKUT", "Dedan Kimathi University of Technology", "Nyeri", Ownership::Public),
    university("SU", "Strathmore University", "Nairobi", Ownership::Private),
    university("USIU", "United States International University Africa", "Nairobi", Ownership::Private),
];

static COURSES: &[Course] = &[
    course("UON-MBCHB", "Bachelor of Medicine and Surgery", "UON", MEDICINE, 45.6, Grade::AMinus),
    course("UON-LLB", "Bachelor of Laws", "UON", LAW, 42.1, Grade::BPlus),
    course("UON-CIV", "BSc Civil Engineering", "UON", ENGINEERING, 43.2, Grade::BPlus),
    course("UON-BCOM", "Bachelor of Commerce", "UON", COMMERCE, 36.4, Grade::CPlus),
    course("KU-PHARM", "Bachelor of Pharmacy", "KU", MEDICINE, 43.8, Grade::BPlus),
    course("KU-NURS", "BSc Nursing", "KU", MEDICINE, 40.5, Grade::B),
    course("KU-EDA", "Bachelor of Education (Arts)", "KU", EDUCATION_ARTS, 30.2, Grade::CPlus),
    course("MU-MBCHB", "Bachelor of Medicine and Surgery", "MU", MEDICINE, 44.9, Grade::AMinus),
    course("MU-BCOM", "Bachelor of Business Management", "MU", COMMERCE, 31.5, Grade::CPlus),
    course("JKUAT-CS", "BSc Computer Science", "JKUAT", COMPUTING, 41.7, Grade::B),
    course("JKUAT-MECH", "BSc Mechanical Engineering", "JKUAT", ENGINEERING, 42.6, Grade::BPlus),
    course("EGERTON-AGR", "BSc Agriculture", "EGERTON", AGRICULTURE, 28.9, Grade::CPlus),
    course("MASENO-EDA", "Bachelor of Education (Arts)", "MASENO", EDUCATION_ARTS, 29.4, Grade::CPlus),
    course("TUK-IT", "BSc Information Technology", "TUK", COMPUTING, 36.8, Grade::CPlus),
    course("DEKUT-ELEC", "BSc Electrical Engineering", "DEKUT", ENGINEERING, 40.3, Grade::B),
    course("SU-BBIT", "Bachelor of Business Information Technology", "SU", COMPUTING, 38.2, Grade::CPlus),
    course("SU-LLB", "Bachelor of Laws", "SU", LAW, 39.5, Grade::B),
    course("USIU-IBA", "Bachelor of International Business Administration", "USIU", COMMERCE, 33.0, Grade::CPlus),
];

/// Universities and courses available to the matcher.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    universities: Vec<University>,
    courses: Vec<Course>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::kenya()
    }
}

impl Catalog {
    /// The bundled registry of Kenyan universities.
    #[must_use]
    pub fn kenya() -> Self {
        Self::new(UNIVERSITIES.to_vec(), COURSES.to_vec())
    }

    #[must_use]
    pub const fn new(universities: Vec<University>, courses: Vec<Course>) -> Self {
        Self { universities, courses }
    }

    #[must_use]
    pub fn universities(&self) -> &[University] {
        &self.universities
    }

    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    #[must_use]
    pub fn university(&self, code: &str) -> Option<&University> {
        self.universities.iter().find(|u| u.code.eq_ignore_ascii_case(code))
    }

    pub fn courses_at<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Course> + 'a {
        self.courses.iter().filter(move |c| c.university.eq_ignore_ascii_case(code))
    }

    /// Universities whose code, name or location contains `query`, ignoring case.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&University> {
        let needle = query.trim().to_lowercase();
        self.universities
            .iter()
            .filter(|u| {
                needle.is_empty()
                    || u.code.to_lowercase().contains(&needle)
                    || u.name.to_lowercase().contains(&needle)
                    || u.location.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Checks that every course points at a known university and has a reachable cutoff.
    ///
    /// # Errors
    /// * [`MatchingError::Internal`] naming the first offending course.
    pub fn validate(&self) -> Result<(), MatchingError> {
        for course in &self.courses {
            if self.university(course.university).is_none() {
                return Err(MatchingError::Internal {
                    message: format!("unknown university '{}'", course.university).into(),
                    context: Some(course.code.into()),
                });
            }
            if !(course.cutoff > 0.0 && course.cutoff <= MAX_WEIGHT) {
                return Err(MatchingError::Internal {
                    message: format!("cutoff {} outside (0, {MAX_WEIGHT}]", course.cutoff).into(),
                    context: Some(course.code.into()),
                });
            }
            if course.cluster.iter().any(|slot| slot.is_empty()) {
                return Err(MatchingError::Internal {
                    message: "empty cluster slot".into(),
                    context: Some(course.code.into()),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_is_consistent() {
        let catalog = Catalog::kenya();
        catalog.validate().unwrap();
        assert!(catalog.universities().len() >= 10);
        assert!(catalog.courses().len() >= 18);
    }

    #[test]
    fn search_matches_code_name_and_location() {
        let catalog = Catalog::kenya();

        assert_eq!(catalog.search("jkuat").len(), 1);
        assert_eq!(catalog.search("eldoret")[0].code, "MU");
        assert_eq!(catalog.search("").len(), catalog.universities().len());
        assert!(catalog.search("mombasa").is_empty());
    }

    #[test]
    fn courses_are_grouped_by_university() {
        let catalog = Catalog::kenya();
        let codes: Vec<_> = catalog.courses_at("su").map(|c| c.code).collect();
        assert_eq!(codes, ["SU-BBIT", "SU-LLB"]);
    }

    #[test]
    fn dangling_university_is_reported() {
        let mut courses = COURSES.to_vec();
        courses.push(course("X-1", "Orphan", "NOWHERE", MEDICINE, 40.0, Grade::C));
        let catalog = Catalog::new(UNIVERSITIES.to_vec(), courses);

        let err = catalog.validate().unwrap_err();
        assert_eq!(err.to_string(), "Internal matching error (X-1): unknown university 'NOWHERE'");
    }
}
