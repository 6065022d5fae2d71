use crate::{CourseMatch, MatchReport};
use dioxus::prelude::*;

/// Courses shown before the report is unlocked.
pub const PREVIEW_LEN: usize = 3;

/// Match results; only a short preview is readable while `locked`.
#[component]
pub fn MatchReportView(report: MatchReport, locked: bool) -> Element {
    let total = report.matches.len();
    let visible: Vec<CourseMatch> = if locked {
        report.matches.iter().take(PREVIEW_LEN).cloned().collect()
    } else {
        report.matches.clone()
    };
    let hidden = total - visible.len();

    rsx! {
        div { class: "flex flex-col gap-8",
            div { class: "grid grid-cols-3 gap-4",
                Stat { label: "Mean Grade", value: report.mean_grade.to_string() }
                Stat { label: "Aggregate", value: format!("{} / 84", report.aggregate) }
                Stat { label: "Eligible", value: total.to_string() }
            }
            if total == 0 {
                p { class: "text-gray-500 font-black uppercase tracking-[0.3em] text-xs py-12 text-center",
                    "No course cutoff is met by this grade sheet"
                }
            }
            div { class: "flex flex-col gap-3",
                for entry in visible {
                    div { key: "{entry.course_code}", class: "flex justify-between items-center bg-white/5 border border-white/10 rounded-2xl p-5",
                        div {
                            p { class: "text-white font-black uppercase tracking-tight", "{entry.course_name}" }
                            p { class: "text-gray-500 text-xs font-black uppercase tracking-widest", "{entry.university}" }
                        }
                        div { class: "text-right font-mono",
                            p { class: "text-white font-black", "{entry.weight:.3}" }
                            p { class: "text-green-500 text-xs", "+{entry.margin:.3} over {entry.cutoff:.1}" }
                        }
                    }
                }
            }
            if hidden > 0 {
                p { class: "text-red-600 text-[10px] font-black uppercase tracking-[0.3em] text-center",
                    "{hidden} more courses in the full report"
                }
            }
        }
    }
}

#[component]
fn Stat(#[props(into)] label: String, value: String) -> Element {
    rsx! {
        div { class: "bg-white/5 border border-white/10 rounded-2xl p-5",
            p { class: "text-gray-500 text-[9px] font-black uppercase tracking-[0.3em]", "{label}" }
            p { class: "text-white text-2xl md:text-3xl font-black tracking-tighter mt-2", "{value}" }
        }
    }
}
