//! Routed Dioxus application: the shell layout around the feature pages.

mod layout;
mod pages;

use crate::Platform;
use dioxus::prelude::*;
use edupath_matching::GradeSheet;
use edupath_navigation::Route;
use edupath_payment::PaymentRecord;

use layout::ShellLayout;
use pages::{AdminPage, GradeInputPage, Landing, ResultsPage, UniversitiesPage};

/// Router table; one variant per [`Route`].
#[derive(Debug, Clone, PartialEq, Routable)]
#[rustfmt::skip]
pub enum AppRoute {
    #[layout(ShellLayout)]
        #[route("/", Landing)]
        Home {},
        #[route("/universities", UniversitiesPage)]
        Universities {},
        #[route("/grade-input", GradeInputPage)]
        GradeInput {},
        #[route("/results", ResultsPage)]
        Results {},
        #[route("/admin", AdminPage)]
        Admin {},
}

impl From<Route> for AppRoute {
    fn from(route: Route) -> Self {
        match route {
            Route::Home => Self::Home {},
            Route::Universities => Self::Universities {},
            Route::GradeInput => Self::GradeInput {},
            Route::Results => Self::Results {},
            Route::Admin => Self::Admin {},
        }
    }
}

impl From<&AppRoute> for Route {
    fn from(route: &AppRoute) -> Self {
        match route {
            AppRoute::Home {} => Self::Home,
            AppRoute::Universities {} => Self::Universities,
            AppRoute::GradeInput {} => Self::GradeInput,
            AppRoute::Results {} => Self::Results,
            AppRoute::Admin {} => Self::Admin,
        }
    }
}

/// Payment that unlocked the full report in this session, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportAccess(pub Signal<Option<PaymentRecord>>);

impl ReportAccess {
    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        self.0.read().is_some()
    }
}

/// Application root. Expects a [`Platform`] in the root context.
#[component]
pub fn App() -> Element {
    let platform = use_context::<Platform>();
    use_context_provider(|| platform.payments.clone());
    use_context_provider(|| platform.matching.clone());

    let sheet = use_signal(GradeSheet::new);
    use_context_provider(|| sheet);
    let access = use_signal(|| None::<PaymentRecord>);
    use_context_provider(|| ReportAccess(access));

    rsx! {
        Router::<AppRoute> {}
    }
}
