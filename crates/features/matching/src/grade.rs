use crate::error::MatchingError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// KCSE letter grade; `A` carries 12 points and `E` carries 1.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Grade {
    #[serde(rename = "A")]
    #[strum(serialize = "A")]
    A,
    #[serde(rename = "A-")]
    #[strum(serialize = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    #[strum(serialize = "B+")]
    BPlus,
    #[serde(rename = "B")]
    #[strum(serialize = "B")]
    B,
    #[serde(rename = "B-")]
    #[strum(serialize = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    #[strum(serialize = "C+")]
    CPlus,
    #[serde(rename = "C")]
    #[strum(serialize = "C")]
    C,
    #[serde(rename = "C-")]
    #[strum(serialize = "C-")]
    CMinus,
    #[serde(rename = "D+")]
    #[strum(serialize = "D+")]
    DPlus,
    #[serde(rename = "D")]
    #[strum(serialize = "D")]
    D,
    #[serde(rename = "D-")]
    #[strum(serialize = "D-")]
    DMinus,
    #[serde(rename = "E")]
    #[strum(serialize = "E")]
    E,
}

impl Grade {
    pub const MAX_POINTS: u32 = 12;

    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::A => 12,
            Self::AMinus => 11,
            Self::BPlus => 10,
            Self::B => 9,
            Self::BMinus => 8,
            Self::CPlus => 7,
            Self::C => 6,
            Self::CMinus => 5,
            Self::DPlus => 4,
            Self::D => 3,
            Self::DMinus => 2,
            Self::E => 1,
        }
    }

    #[must_use]
    pub fn from_points(points: u32) -> Option<Self> {
        Self::iter().find(|grade| grade.points() == points)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// # Errors
    /// * [`MatchingError::InvalidGrade`] for anything but `A` .. `E` with an optional `+`/`-`.
    pub fn parse(input: &str) -> Result<Self, MatchingError> {
        Self::from_str(input.trim()).map_err(|_| MatchingError::InvalidGrade {
            message: format!("'{input}' is not a KCSE grade").into(),
            context: None,
        })
    }
}

impl PartialOrd for Grade {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordered by points: `A > A- > ... > E`.
impl Ord for Grade {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.points().cmp(&other.points())
    }
}
