use crate::error::MatchingError;
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// KCSE subjects offered on the grade sheet. Parses from its code or full name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(ascii_case_insensitive)]
pub enum Subject {
    #[strum(to_string = "ENG", serialize = "English")]
    Eng,
    #[strum(to_string = "KIS", serialize = "Kiswahili")]
    Kis,
    #[strum(to_string = "MAT", serialize = "Mathematics", serialize = "Math")]
    Mat,
    #[strum(to_string = "BIO", serialize = "Biology")]
    Bio,
    #[strum(to_string = "CHE", serialize = "Chemistry")]
    Che,
    #[strum(to_string = "PHY", serialize = "Physics")]
    Phy,
    #[strum(to_string = "HIS", serialize = "History")]
    His,
    #[strum(to_string = "GEO", serialize = "Geography")]
    Geo,
    #[strum(to_string = "CRE")]
    Cre,
    #[strum(to_string = "BST", serialize = "Business")]
    Bst,
    #[strum(to_string = "AGR", serialize = "Agriculture")]
    Agr,
    #[strum(to_string = "CST", serialize = "Computer")]
    Cst,
}

impl Subject {
    /// Three-letter code, e.g. `MAT`.
    #[must_use]
    pub fn code(self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eng => "English",
            Self::Kis => "Kiswahili",
            Self::Mat => "Mathematics",
            Self::Bio => "Biology",
            Self::Che => "Chemistry",
            Self::Phy => "Physics",
            Self::His => "History",
            Self::Geo => "Geography",
            Self::Cre => "Christian Religious Education",
            Self::Bst => "Business Studies",
            Self::Agr => "Agriculture",
            Self::Cst => "Computer Studies",
        }
    }

    #[must_use]
    pub const fn flag(self) -> SubjectSet {
        match self {
            Self::Eng => SubjectSet::ENG,
            Self::Kis => SubjectSet::KIS,
            Self::Mat => SubjectSet::MAT,
            Self::Bio => SubjectSet::BIO,
            Self::Che => SubjectSet::CHE,
            Self::Phy => SubjectSet::PHY,
            Self::His => SubjectSet::HIS,
            Self::Geo => SubjectSet::GEO,
            Self::Cre => SubjectSet::CRE,
            Self::Bst => SubjectSet::BST,
            Self::Agr => SubjectSet::AGR,
            Self::Cst => SubjectSet::CST,
        }
    }

    /// # Errors
    /// * [`MatchingError::UnknownSubject`] if `input` is neither a code nor a known name.
    pub fn parse(input: &str) -> Result<Self, MatchingError> {
        Self::from_str(input.trim()).map_err(|_| MatchingError::UnknownSubject {
            message: format!("'{input}'").into(),
            context: None,
        })
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// A set of subjects, used for cluster requirements and graded coverage.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct SubjectSet: u16 {
        const ENG = 1 << 0;
        const KIS = 1 << 1;
        const MAT = 1 << 2;
        const BIO = 1 << 3;
        const CHE = 1 << 4;
        const PHY = 1 << 5;
        const HIS = 1 << 6;
        const GEO = 1 << 7;
        const CRE = 1 << 8;
        const BST = 1 << 9;
        const AGR = 1 << 10;
        const CST = 1 << 11;

        const LANGUAGES = Self::ENG.bits() | Self::KIS.bits();
        const SCIENCES = Self::BIO.bits() | Self::CHE.bits() | Self::PHY.bits();
        const HUMANITIES = Self::HIS.bits() | Self::GEO.bits() | Self::CRE.bits();
        const TECHNICAL = Self::BST.bits() | Self::AGR.bits() | Self::CST.bits();
    }
}

impl SubjectSet {
    /// Member subjects in declaration order.
    pub fn subjects(self) -> impl Iterator<Item = Subject> {
        use strum::IntoEnumIterator;
        Subject::iter().filter(move |subject| self.contains(subject.flag()))
    }
}

impl From<Subject> for SubjectSet {
    fn from(subject: Subject) -> Self {
        subject.flag()
    }
}

impl FromIterator<Subject> for SubjectSet {
    fn from_iter<I: IntoIterator<Item = Subject>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |set, subject| set | subject.flag())
    }
}

impl Serialize for SubjectSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u16(self.bits())
    }
}

impl<'de> Deserialize<'de> for SubjectSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u16::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subjects_parse_from_code_or_name() {
        assert_eq!(Subject::parse("mat").unwrap(), Subject::Mat);
        assert_eq!(Subject::parse("Chemistry").unwrap(), Subject::Che);
        assert_eq!(Subject::parse(" CRE ").unwrap(), Subject::Cre);
        assert!(matches!(Subject::parse("Latin"), Err(MatchingError::UnknownSubject { .. })));
    }

    #[test]
    fn sets_enumerate_their_members() {
        let set: SubjectSet = [Subject::Phy, Subject::Mat].into_iter().collect();
        assert_eq!(set.subjects().collect::<Vec<_>>(), [Subject::Mat, Subject::Phy]);
        assert_eq!(SubjectSet::SCIENCES.subjects().count(), 3);
    }
}
