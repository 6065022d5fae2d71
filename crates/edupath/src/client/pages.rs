use super::ReportAccess;
use dioxus::prelude::*;
use edupath_matching::client::{GradeInput, MatchReportView, Universities};
use edupath_matching::{GradeSheet, Matching};
use edupath_navigation::client::use_shell;
use edupath_navigation::{Route, ShellAction};
use edupath_payment::PaymentRecord;
use edupath_payment::client::{AdminDashboard, Checkout};
use tracing::info;

const CTA: &str = "bg-red-600 text-white px-10 py-5 rounded-2xl font-black text-lg uppercase tracking-widest shadow-2xl shadow-red-600/20 hover:bg-white hover:text-black transition-all active:scale-95 cursor-pointer";
const GHOST: &str = "border border-white/10 text-white px-10 py-5 rounded-2xl font-black text-lg uppercase tracking-widest hover:border-red-600 transition-all cursor-pointer";

#[component]
pub(super) fn Landing() -> Element {
    let shell = use_shell();

    rsx! {
        section { class: "max-w-7xl mx-auto px-4 md:px-6 py-24 md:py-40 flex flex-col gap-10",
            p { class: "text-red-600 text-[10px] font-black uppercase tracking-[0.5em]", "KUCCPS 2025 Placement Cycle" }
            h1 { class: "text-5xl md:text-8xl font-black uppercase tracking-tighter leading-[0.9]",
                "Your Grades. "
                span { class: "text-red-600", "Your Course." }
            }
            p { class: "text-gray-400 text-lg max-w-2xl",
                "Enter your KCSE results, see your cluster weights and every degree programme whose last cutoff you clear."
            }
            div { class: "flex flex-col sm:flex-row gap-4",
                button { class: CTA, onclick: move |_| shell.send(ShellAction::GetStarted), "GET STARTED" }
                button {
                    class: GHOST,
                    onclick: move |_| shell.send(ShellAction::Navigate(Route::Universities)),
                    "BROWSE UNIVERSITIES"
                }
            }
        }
    }
}

#[component]
pub(super) fn UniversitiesPage() -> Element {
    rsx! { Universities {} }
}

#[component]
pub(super) fn GradeInputPage() -> Element {
    let shell = use_shell();

    rsx! {
        GradeInput { on_submit: move |()| shell.send(ShellAction::Navigate(Route::Results)) }
    }
}

/// Match report with the payment form; the full list once a payment succeeds.
#[component]
pub(super) fn ResultsPage() -> Element {
    let shell = use_shell();
    let matching = use_context::<Matching>();
    let sheet = use_context::<Signal<GradeSheet>>();
    let access = use_context::<ReportAccess>();
    let locked = !access.is_unlocked();
    let ReportAccess(mut unlocked) = access;

    let report = matching.catalog.assess(&sheet.read());

    rsx! {
        section { class: "max-w-5xl mx-auto px-4 md:px-6 py-16 md:py-24 flex flex-col gap-10",
            div {
                p { class: "text-red-600 text-[10px] font-black uppercase tracking-[0.4em]", "Merit Report" }
                h1 { class: "text-4xl md:text-6xl font-black uppercase tracking-tighter", "Your Course Matches" }
            }
            {match report {
                Ok(report) => rsx! {
                    MatchReportView { report, locked }
                    if locked {
                        div { class: "bg-white/5 border border-red-600/30 rounded-[2rem] p-6 md:p-10",
                            Checkout {
                                student_name: "KCSE Candidate".to_owned(),
                                on_paid: move |record: PaymentRecord| {
                                    info!(checkout = %record.checkout_request_id, "Full report unlocked");
                                    unlocked.set(Some(record));
                                },
                            }
                        }
                    }
                },
                Err(e) => rsx! {
                    div { class: "flex flex-col gap-6 items-start",
                        p { class: "text-gray-400", "{e}" }
                        button {
                            class: CTA,
                            onclick: move |_| shell.send(ShellAction::Navigate(Route::GradeInput)),
                            "ENTER GRADES"
                        }
                    }
                },
            }}
        }
    }
}

#[component]
pub(super) fn AdminPage() -> Element {
    rsx! { AdminDashboard {} }
}
