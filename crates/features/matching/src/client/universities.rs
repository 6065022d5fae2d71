use crate::{Catalog, Matching, University};
use dioxus::prelude::*;

/// Searchable registry of universities and their programmes.
#[component]
pub fn Universities() -> Element {
    let matching = use_context::<Matching>();
    let mut query = use_signal(String::new);
    let mut expanded = use_signal(|| None::<&'static str>);

    let catalog = &matching.catalog;
    let results = catalog.search(&query.read());

    rsx! {
        section { class: "max-w-7xl mx-auto px-4 md:px-6 py-16 md:py-24 flex flex-col gap-10",
            div {
                p { class: "text-red-600 text-[10px] font-black uppercase tracking-[0.4em]", "Registry" }
                h1 { class: "text-4xl md:text-6xl font-black uppercase tracking-tighter text-white", "Universities" }
            }
            input {
                class: "w-full bg-white/5 border border-white/10 rounded-2xl px-6 py-5 text-white font-black tracking-widest focus:border-red-600 outline-none",
                placeholder: "Search by name, code or town",
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
            }
            if results.is_empty() {
                p { class: "text-gray-600 font-black uppercase tracking-[0.3em] text-xs py-16 text-center",
                    "No university matches your search"
                }
            }
            div { class: "grid md:grid-cols-2 gap-4",
                for university in results {
                    UniversityCard {
                        key: "{university.code}",
                        university: university.clone(),
                        courses: course_lines(catalog, university.code),
                        open: expanded() == Some(university.code),
                        on_toggle: move |code: &'static str| {
                            let next = if expanded() == Some(code) { None } else { Some(code) };
                            expanded.set(next);
                        },
                    }
                }
            }
        }
    }
}

fn course_lines(catalog: &Catalog, code: &str) -> Vec<(String, String)> {
    catalog
        .courses_at(code)
        .map(|course| (course.name.to_owned(), format!("{:.1}", course.cutoff)))
        .collect()
}

#[component]
fn UniversityCard(
    university: University,
    courses: Vec<(String, String)>,
    open: bool,
    on_toggle: EventHandler<&'static str>,
) -> Element {
    let code = university.code;

    rsx! {
        div { class: "bg-white/5 border border-white/10 rounded-[2rem] p-6 md:p-8 flex flex-col gap-4",
            button {
                class: "flex justify-between items-start text-left cursor-pointer",
                onclick: move |_| on_toggle.call(code),
                div {
                    p { class: "text-red-600 text-[10px] font-black tracking-[0.3em]", "{university.code} · {university.ownership}" }
                    h3 { class: "text-xl font-black uppercase tracking-tighter text-white", "{university.name}" }
                    p { class: "text-gray-500 text-xs font-black uppercase tracking-widest", "{university.location}" }
                }
                span { class: "text-red-600 text-xl", if open { "−" } else { "+" } }
            }
            if open {
                ul { class: "flex flex-col gap-2",
                    for (name, cutoff) in courses {
                        li { class: "flex justify-between border-t border-white/5 pt-2 text-sm text-gray-300",
                            span { "{name}" }
                            span { class: "font-mono text-red-500", "{cutoff}" }
                        }
                    }
                }
            }
        }
    }
}
