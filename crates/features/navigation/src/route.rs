use edupath_domain::constants::{
    ADMIN_PATH, GRADE_INPUT_PATH, HOME_PATH, RESULTS_PATH, UNIVERSITIES_PATH,
};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Named views of the application; derived entirely from the URL path.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Route {
    #[default]
    Home,
    Universities,
    GradeInput,
    Results,
    Admin,
}

impl Route {
    /// Entries of the primary navigation, in display order.
    pub const PRIMARY: [Self; 3] = [Self::Home, Self::Universities, Self::GradeInput];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => HOME_PATH,
            Self::Universities => UNIVERSITIES_PATH,
            Self::GradeInput => GRADE_INPUT_PATH,
            Self::Results => RESULTS_PATH,
            Self::Admin => ADMIN_PATH,
        }
    }

    /// Resolves a URL path, ignoring the query string, fragment and a trailing slash.
    /// Unlisted paths resolve to `None`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => HOME_PATH,
            trimmed => trimmed,
        };

        match path {
            HOME_PATH => Some(Self::Home),
            UNIVERSITIES_PATH => Some(Self::Universities),
            GRADE_INPUT_PATH => Some(Self::GradeInput),
            RESULTS_PATH => Some(Self::Results),
            ADMIN_PATH => Some(Self::Admin),
            _ => None,
        }
    }

    /// Label of the desktop navigation.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Universities => "Universities",
            Self::GradeInput => "Course Matcher",
            Self::Results => "Results",
            Self::Admin => "Admin",
        }
    }

    /// Label of the mobile menu.
    #[must_use]
    pub const fn menu_label(self) -> &'static str {
        match self {
            Self::Universities => "Registry",
            Self::GradeInput => "Merit Matcher",
            other => other.label(),
        }
    }

    #[must_use]
    pub const fn is_home(self) -> bool {
        matches!(self, Self::Home)
    }
}
