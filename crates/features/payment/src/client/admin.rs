use crate::{PaymentRecord, PaymentStatus, Payments};
use dioxus::prelude::*;
use std::time::Duration;
use strum::IntoEnumIterator;

const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Operator view over the in-memory payment ledger.
#[component]
pub fn AdminDashboard() -> Element {
    let payments = use_context::<Payments>();
    let mut revision = use_signal(|| payments.ledger.revision());
    let mut filter = use_signal(|| None::<PaymentStatus>);

    let ledger = payments.ledger.clone();
    use_future(move || {
        let ledger = ledger.clone();
        async move {
            loop {
                tokio::time::sleep(POLL_INTERVAL).await;
                let latest = ledger.revision();
                if *revision.peek() != latest {
                    revision.set(latest);
                }
            }
        }
    });

    let refresh = {
        let ledger = payments.ledger.clone();
        move |_: Event<MouseData>| revision.set(ledger.revision())
    };

    // Reading the revision subscribes the page to ledger changes.
    let _ = revision();
    let selected = filter();
    let summary = payments.ledger.summary();
    let records: Vec<PaymentRecord> = payments
        .ledger
        .all()
        .into_iter()
        .filter(|r| selected.is_none_or(|status| r.status == status))
        .collect();

    rsx! {
        section { class: "max-w-7xl mx-auto px-4 md:px-6 py-16 md:py-24 flex flex-col gap-10",
            div { class: "flex flex-col md:flex-row justify-between md:items-end gap-6",
                div {
                    p { class: "text-red-600 text-[10px] font-black uppercase tracking-[0.4em]", "Command Center" }
                    h1 { class: "text-4xl md:text-6xl font-black uppercase tracking-tighter text-white", "Transactions" }
                }
                button {
                    class: "bg-white/5 border border-white/10 text-white px-6 py-3 rounded-xl font-black text-[11px] uppercase tracking-[0.2em] hover:bg-red-600 transition-all cursor-pointer",
                    onclick: refresh,
                    "REFRESH"
                }
            }

            div { class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                SummaryCard { label: "Attempts", value: summary.total.to_string() }
                SummaryCard { label: "Confirmed", value: summary.count(PaymentStatus::Success).to_string() }
                SummaryCard { label: "Failed", value: summary.count(PaymentStatus::Failed).to_string() }
                SummaryCard { label: "Collected", value: format!("KES {}", summary.collected) }
            }

            div { class: "flex flex-wrap gap-2",
                FilterChip { label: "ALL", active: selected.is_none(), onclick: move |_| filter.set(None) }
                for status in PaymentStatus::iter().filter(|s| *s != PaymentStatus::Idle) {
                    FilterChip {
                        key: "{status}",
                        label: status.to_string(),
                        active: selected == Some(status),
                        onclick: move |_| filter.set(Some(status)),
                    }
                }
            }

            if records.is_empty() {
                p { class: "text-gray-600 font-black uppercase tracking-[0.3em] text-xs py-16 text-center",
                    "No transactions recorded yet"
                }
            } else {
                div { class: "overflow-x-auto border border-white/5 rounded-[2rem]",
                    table { class: "w-full text-left text-sm",
                        thead { class: "text-[9px] font-black uppercase tracking-[0.3em] text-gray-500",
                            tr {
                                th { class: "p-4", "Checkout" }
                                th { class: "p-4", "Student" }
                                th { class: "p-4", "Phone" }
                                th { class: "p-4", "Amount" }
                                th { class: "p-4", "Status" }
                                th { class: "p-4", "Updated" }
                            }
                        }
                        tbody {
                            for record in records {
                                tr { key: "{record.id}", class: "border-t border-white/5 text-white",
                                    td { class: "p-4 font-mono text-xs", "{record.checkout_request_id}" }
                                    td { class: "p-4", "{record.student_name}" }
                                    td { class: "p-4 font-mono text-xs", {record.phone.masked()} }
                                    td { class: "p-4", "KES {record.amount}" }
                                    td { class: "p-4 font-black text-[10px] tracking-[0.2em]", "{record.status}" }
                                    td { class: "p-4 text-gray-500 text-xs", {record.updated_at.format("%H:%M:%S").to_string()} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SummaryCard(#[props(into)] label: String, value: String) -> Element {
    rsx! {
        div { class: "bg-white/5 border border-white/10 rounded-2xl p-6",
            p { class: "text-gray-500 text-[9px] font-black uppercase tracking-[0.3em]", "{label}" }
            p { class: "text-white text-3xl font-black tracking-tighter mt-2", "{value}" }
        }
    }
}

#[component]
fn FilterChip(#[props(into)] label: String, active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let tone = if active { "bg-red-600 text-white" } else { "bg-white/5 text-gray-400" };

    rsx! {
        button {
            class: "px-4 py-2 rounded-lg text-[9px] font-black tracking-[0.3em] cursor-pointer {tone}",
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}
