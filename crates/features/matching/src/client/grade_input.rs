use crate::{BEST_OF, Grade, GradeSheet, Subject};
use dioxus::prelude::*;
use strum::IntoEnumIterator;

/// Grade entry form bound to the shared [`GradeSheet`] signal.
///
/// `on_submit` fires once at least seven subjects are graded.
#[component]
pub fn GradeInput(on_submit: EventHandler<()>) -> Element {
    let mut sheet = use_context::<Signal<GradeSheet>>();
    let graded = sheet.read().len();
    let ready = sheet.read().is_complete();

    rsx! {
        section { class: "max-w-5xl mx-auto px-4 md:px-6 py-16 md:py-24 flex flex-col gap-10",
            div {
                p { class: "text-red-600 text-[10px] font-black uppercase tracking-[0.4em]", "Merit Matcher" }
                h1 { class: "text-4xl md:text-6xl font-black uppercase tracking-tighter text-white", "Enter Your KCSE Grades" }
                p { class: "text-gray-500 text-sm mt-4", "{graded} subjects graded. At least {BEST_OF} are needed; the best seven count." }
            }
            div { class: "grid sm:grid-cols-2 gap-4",
                for subject in Subject::iter() {
                    div { key: "{subject.code()}", class: "flex items-center justify-between bg-white/5 border border-white/10 rounded-2xl px-5 py-4",
                        label { class: "text-white font-black uppercase tracking-tight text-sm", "{subject}" }
                        select {
                            class: "bg-black text-white border border-white/10 rounded-lg px-3 py-2 font-black",
                            value: sheet.read().get(subject).map_or("", Grade::as_str),
                            onchange: move |evt| {
                                let value = evt.value();
                                if value.is_empty() {
                                    sheet.write().remove(subject);
                                } else if let Ok(grade) = Grade::parse(&value) {
                                    sheet.write().set(subject, grade);
                                }
                            },
                            option { value: "", "-" }
                            for grade in Grade::iter() {
                                option { key: "{grade}", value: grade.as_str(), "{grade}" }
                            }
                        }
                    }
                }
            }
            button {
                class: "bg-red-600 text-white py-5 rounded-2xl font-black text-lg uppercase tracking-widest hover:bg-white hover:text-black transition-all active:scale-95 cursor-pointer disabled:opacity-40",
                disabled: !ready,
                onclick: move |_| on_submit.call(()),
                "ANALYZE MY MERIT"
            }
        }
    }
}
