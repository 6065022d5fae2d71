use edupath_matching::{
    Catalog, Grade, GradeSheet, MAX_WEIGHT, MatchingError, Subject, cluster_weight, init,
};
use edupath_kernel::domain::registry::FeatureSlice;
use proptest::prelude::*;
use strum::IntoEnumIterator;

const STRONG: &str = "eng=A,kis=A-,mat=A,bio=A,che=A-,phy=B+,geo=B";
const AVERAGE: &str = "eng=B,kis=B-,mat=C+,bio=C,che=C,his=B,geo=B-,bst=C+";

fn sheet(input: &str) -> GradeSheet {
    input.parse().unwrap()
}

fn codes(catalog: &Catalog, input: &str) -> Vec<&'static str> {
    catalog.match_courses(&sheet(input)).unwrap().iter().map(|m| m.course_code).collect()
}

#[test]
fn strong_sheet_is_ranked_by_margin() {
    let catalog = Catalog::kenya();
    let report = catalog.assess(&sheet(STRONG)).unwrap();

    assert_eq!(report.aggregate, 77);
    assert_eq!(report.mean_grade, Grade::AMinus);
    assert_eq!(report.matches.len(), 15);

    let first = &report.matches[0];
    assert_eq!(first.course_code, "EGERTON-AGR");
    assert_eq!(first.university, "Egerton University");
    assert!((first.weight - 45.475).abs() < 1e-9);
    assert!((first.margin - 16.575).abs() < 1e-6);

    assert!(report.matches.windows(2).all(|pair| pair[0].margin >= pair[1].margin));
}

#[test]
fn equal_margins_fall_back_to_weight_then_code() {
    let catalog = Catalog::kenya();
    let report = catalog.assess(&sheet(&format!("{STRONG},his=A"))).unwrap();

    for pair in report.matches.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if (a.margin - b.margin).abs() < f64::EPSILON {
            assert!(a.weight > b.weight || (a.weight == b.weight && a.course_code < b.course_code));
        }
    }
}

#[test]
fn cutoffs_above_the_weight_are_excluded() {
    let catalog = Catalog::kenya();
    // MEDICINE cluster weighs 45.475 here, under the 45.6 UON cutoff but over MU's 44.9.
    let matched = codes(&catalog, STRONG);

    assert!(!matched.contains(&"UON-MBCHB"));
    assert!(matched.contains(&"MU-MBCHB"));
}

#[test]
fn humanities_slots_need_distinct_subjects() {
    let catalog = Catalog::kenya();

    // GEO is the only humanity in the strong sheet, so EDUCATION_ARTS cannot be filled.
    assert!(!codes(&catalog, STRONG).iter().any(|code| code.ends_with("-EDA")));
    assert_eq!(codes(&catalog, AVERAGE), ["MASENO-EDA", "KU-EDA", "EGERTON-AGR", "MU-BCOM"]);
}

#[test]
fn minimum_mean_grade_gates_eligibility() {
    let catalog = Catalog::kenya();
    let report = catalog.assess(&sheet(AVERAGE)).unwrap();

    assert_eq!(report.aggregate, 54);
    assert_eq!(report.mean_grade, Grade::BMinus);
    for entry in &report.matches {
        let course = catalog.courses().iter().find(|c| c.code == entry.course_code).unwrap();
        assert!(report.mean_grade >= course.minimum_mean);
    }
}

#[test]
fn weak_sheet_matches_nothing() {
    let catalog = Catalog::kenya();
    let report = catalog.assess(&sheet("eng=D,kis=D,mat=E,bio=D-,che=E,his=D,geo=D")).unwrap();

    assert_eq!(report.mean_grade, Grade::DMinus);
    assert!(report.matches.is_empty());
}

#[test]
fn straight_a_reaches_every_course() {
    let catalog = Catalog::kenya();
    let report = catalog.assess(&sheet("eng=A,kis=A,mat=A,bio=A,che=A,phy=A,geo=A,his=A")).unwrap();

    assert_eq!(report.aggregate, 84);
    assert_eq!(report.matches.len(), catalog.courses().len());
    assert!(report.matches.iter().all(|m| (m.weight - MAX_WEIGHT).abs() < f64::EPSILON));
}

#[test]
fn incomplete_sheet_is_rejected() {
    let catalog = Catalog::kenya();
    let err = catalog.assess(&sheet("eng=A,mat=A,bio=A")).unwrap_err();

    assert!(matches!(err, MatchingError::IncompleteSheet { .. }));
    assert_eq!(err.to_string(), "Incomplete grade sheet: 3 of 7 subjects graded");
}

#[test]
fn report_serializes_in_camel_case() {
    let report = Catalog::kenya().assess(&sheet(AVERAGE)).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["meanGrade"], "B-");
    assert_eq!(json["matches"][0]["courseCode"], "MASENO-EDA");
}

#[test]
fn slice_carries_the_bundled_catalog() {
    let matching = init().unwrap();

    assert_eq!(matching.name(), "Matching");
    assert_eq!(matching.catalog, Catalog::kenya());
    assert_eq!(matching.clone(), matching);
}

fn any_sheet() -> impl Strategy<Value = GradeSheet> {
    let subjects: Vec<Subject> = Subject::iter().collect();
    let grades: Vec<Grade> = Grade::iter().collect();
    proptest::collection::btree_map(
        proptest::sample::select(subjects),
        proptest::sample::select(grades),
        7..=12,
    )
    .prop_map(|grades| grades.into_iter().collect())
}

proptest! {
    #[test]
    fn weights_stay_in_range(r in 0u32..=48, t in 0u32..=84) {
        let weight = cluster_weight(r, t);
        prop_assert!((0.0..=MAX_WEIGHT).contains(&weight));
    }

    #[test]
    fn every_match_clears_its_cutoff(sheet in any_sheet()) {
        let catalog = Catalog::kenya();
        let report = catalog.assess(&sheet).unwrap();

        prop_assert!(report.aggregate <= 84);
        for entry in &report.matches {
            prop_assert!(entry.margin >= 0.0);
            prop_assert!(entry.weight >= entry.cutoff);
            prop_assert!(entry.weight <= MAX_WEIGHT);
        }
    }
}
