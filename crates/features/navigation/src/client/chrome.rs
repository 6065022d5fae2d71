use crate::route::Route;
use crate::shell::{ShellAction, ShellSnapshot};
use dioxus::prelude::*;

const DESKTOP_LINK: &str = "transition-all hover:text-red-500 cursor-pointer";
const MENU_LINK: &str = "text-2xl font-black uppercase tracking-tighter py-5 border-b border-white/5 flex justify-between items-center group transition-colors cursor-pointer";

fn active_class(base: &str, active: bool, idle: &str) -> String {
    let tone = if active { "text-red-600" } else { idle };
    format!("{base} {tone}")
}

#[component]
fn Brand() -> Element {
    rsx! {
        div { class: "w-10 h-10 bg-red-600 rounded-xl flex items-center justify-center shadow-lg shadow-red-600/20",
            span { class: "text-white text-xl", "🎓" }
        }
        span { class: "text-xl md:text-2xl font-black tracking-tighter uppercase text-white",
            "EDU "
            span { class: "text-red-600", "PATH" }
        }
    }
}

/// Red system bar pinned above the header: support number, admin entry and live support.
#[component]
pub fn StatusBar(contact_phone: String, on_action: EventHandler<ShellAction>) -> Element {
    rsx! {
        div { class: "bg-red-600 text-white text-[9px] font-black py-2 px-4 md:px-6 flex justify-between items-center sticky top-0 z-[200] shadow-2xl uppercase tracking-[0.2em]",
            div { class: "flex items-center gap-4 md:gap-6",
                span { class: "flex items-center gap-1.5", "☎ {contact_phone}" }
                span { class: "hidden sm:inline-block opacity-30", "|" }
                span { class: "hidden sm:inline-block", "SAFARICOM REAL-TIME API SYNCED" }
            }
            div { class: "flex items-center gap-4 md:gap-6",
                button {
                    class: "flex items-center gap-1.5 hover:bg-white hover:text-black transition-all bg-black/20 px-3 py-1 rounded-md border border-white/10",
                    onclick: move |_| on_action.call(ShellAction::Navigate(Route::Admin)),
                    "ADMIN"
                }
                button {
                    class: "hover:text-black transition-colors",
                    onclick: move |_| on_action.call(ShellAction::OpenSupport),
                    "LIVE SUPPORT"
                }
            }
        }
    }
}

/// Sticky header with the back control, brand, desktop links and the mobile menu.
#[component]
pub fn Header(snapshot: ShellSnapshot, on_action: EventHandler<ShellAction>) -> Element {
    let menu_open = snapshot.menu.is_open();
    let toggle_label = if menu_open { "Close menu" } else { "Open menu" };
    let active = snapshot.route;

    rsx! {
        header { class: "border-b border-white/5 bg-black/60 backdrop-blur-2xl sticky top-[28px] z-[190]",
            nav { class: "max-w-7xl mx-auto px-4 md:px-6 h-20 flex items-center justify-between",
                div { class: "flex items-center gap-4 md:gap-6",
                    if snapshot.can_go_back {
                        button {
                            class: "p-3 bg-white/5 border border-white/10 rounded-xl text-red-600 hover:bg-red-600 hover:text-white transition-all cursor-pointer",
                            title: "Go Back",
                            onclick: move |_| on_action.call(ShellAction::GoBack),
                            "←"
                        }
                    }
                    button {
                        class: "flex items-center gap-2.5 cursor-pointer",
                        onclick: move |_| on_action.call(ShellAction::Navigate(Route::Home)),
                        Brand {}
                    }
                }

                div { class: "hidden md:flex items-center gap-10 text-[11px] font-black uppercase tracking-[0.2em]",
                    for route in Route::PRIMARY {
                        button {
                            key: "{route}",
                            class: active_class(DESKTOP_LINK, route == active, "text-gray-400"),
                            onclick: move |_| on_action.call(ShellAction::Navigate(route)),
                            {route.label()}
                        }
                    }
                    button {
                        class: "bg-red-600 text-white px-6 py-3 rounded-xl font-black hover:bg-white hover:text-black transition-all shadow-xl active:scale-95 flex items-center gap-2 cursor-pointer",
                        onclick: move |_| on_action.call(ShellAction::GetStarted),
                        "GET STARTED ↗"
                    }
                }

                button {
                    class: "md:hidden text-white text-2xl p-3 hover:bg-white/5 rounded-xl transition-all cursor-pointer z-[210]",
                    "aria-label": toggle_label,
                    onclick: move |_| on_action.call(ShellAction::ToggleMenu),
                    if menu_open { "✕" } else { "☰" }
                }
            }

            if menu_open {
                MobileMenu { active, on_action }
            }
        }
    }
}

#[component]
fn MobileMenu(active: Route, on_action: EventHandler<ShellAction>) -> Element {
    rsx! {
        div {
            class: "md:hidden fixed inset-0 bg-black/60 backdrop-blur-sm z-[170]",
            onclick: move |_| on_action.call(ShellAction::CloseMenu),
        }
        div { class: "md:hidden fixed inset-x-0 top-[108px] bg-black/95 backdrop-blur-3xl border-b border-white/5 p-6 flex flex-col gap-4 z-[180] rounded-b-[2.5rem]",
            for route in Route::PRIMARY {
                button {
                    key: "{route}",
                    class: active_class(MENU_LINK, route == active, "text-white"),
                    onclick: move |_| on_action.call(ShellAction::Navigate(route)),
                    {route.menu_label()}
                    span { class: "text-red-600 text-xl", "→" }
                }
            }
            button {
                class: "bg-red-600 text-white w-full py-5 rounded-2xl font-black text-lg mt-6 shadow-2xl shadow-red-600/20 active:scale-95 transition-all cursor-pointer",
                onclick: move |_| on_action.call(ShellAction::GetStarted),
                "ANALYZE MY MERIT NOW"
            }
            p { class: "text-center text-[8px] font-black text-gray-700 uppercase tracking-[0.5em] mt-4",
                "EDU PATH SECURITY CORE 2025"
            }
        }
    }
}

#[component]
pub fn Footer(on_action: EventHandler<ShellAction>) -> Element {
    rsx! {
        footer { class: "bg-black border-t border-white/5 pt-20 md:pt-32 pb-12 md:pb-16 px-6",
            div { class: "max-w-7xl mx-auto text-center md:text-left",
                div { class: "flex flex-col md:flex-row justify-between items-center gap-8 md:gap-10",
                    div { class: "flex items-center gap-3", Brand {} }
                    p { class: "text-gray-600 font-black text-[9px] md:text-[10px] uppercase tracking-[0.4em]",
                        "Kenya National Admissions Authority Independent Hub"
                    }
                    div { class: "flex gap-6 md:gap-8 text-[10px] font-black text-gray-500 uppercase tracking-widest",
                        button {
                            class: "hover:text-red-600 cursor-pointer",
                            onclick: move |_| on_action.call(ShellAction::Navigate(Route::Admin)),
                            "Admin"
                        }
                        span { class: "hover:text-red-600", "Privacy" }
                        button {
                            class: "hover:text-red-600 cursor-pointer",
                            onclick: move |_| on_action.call(ShellAction::OpenSupport),
                            "Support"
                        }
                    }
                }
                div { class: "mt-12 pt-12 border-t border-white/5 flex flex-col md:flex-row justify-between items-center gap-4 text-[8px] font-black text-gray-800 uppercase tracking-[0.3em]",
                    span { "© 2025 EDU PATH KENYA. ALL RIGHTS RESERVED." }
                }
            }
        }
    }
}
