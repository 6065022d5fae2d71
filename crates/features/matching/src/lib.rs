//! Grades-to-course matching: KCSE grade sheets, cluster weights and the bundled
//! registry of Kenyan universities.
//!
//! ```rust
//! use edupath_matching::{Catalog, GradeSheet};
//!
//! let sheet: GradeSheet = "eng=A,kis=A-,mat=A,bio=A,che=A-,phy=B+,geo=B".parse().unwrap();
//! let report = Catalog::kenya().assess(&sheet).unwrap();
//! assert_eq!(report.mean_grade.as_str(), "A-");
//! ```

mod catalog;
mod error;
mod grade;
mod matcher;
mod sheet;
mod subject;

#[cfg(feature = "client")]
pub mod client;

pub use crate::catalog::{Catalog, Course, MAX_WEIGHT, Ownership, University};
pub use crate::error::{MatchingError, MatchingErrorExt};
pub use crate::grade::Grade;
pub use crate::matcher::{CourseMatch, MAX_CLUSTER_POINTS, MatchReport, cluster_points, cluster_weight};
pub use crate::sheet::{BEST_OF, GradeSheet, MAX_AGGREGATE};
pub use crate::subject::{Subject, SubjectSet};

/// Matching feature state
#[edupath_derive::feature_slice]
pub struct Matching {
    pub catalog: Catalog,
}

/// Initialize the matching feature with the bundled catalog.
///
/// # Errors
/// * [`MatchingError::Internal`] if the catalog is inconsistent.
pub fn init() -> Result<Matching, MatchingError> {
    let catalog = Catalog::kenya();
    catalog.validate().context("Bundled catalog")?;

    tracing::info!(
        universities = catalog.universities().len(),
        courses = catalog.courses().len(),
        "Matching slice initialized"
    );
    Ok(Matching::new(MatchingInner { catalog }))
}
