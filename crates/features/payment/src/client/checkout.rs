use crate::{CheckoutSession, PaymentRecord, PaymentStatus, Payments};
use dioxus::prelude::*;
use tracing::{error, warn};

const INPUT: &str = "w-full bg-white/5 border border-white/10 rounded-2xl px-6 py-5 text-white text-lg font-black tracking-widest focus:border-red-600 outline-none";
const PRIMARY: &str = "w-full bg-red-600 text-white py-5 rounded-2xl font-black uppercase tracking-widest hover:bg-white hover:text-black transition-all active:scale-95 cursor-pointer disabled:opacity-40";

/// STK push form that unlocks paid content.
///
/// A malformed number keeps the form idle with an inline error. A push that reaches the
/// phone is recorded in the ledger; `on_paid` fires once the PIN matches the issued code.
#[component]
pub fn Checkout(student_name: String, on_paid: EventHandler<PaymentRecord>) -> Element {
    let payments = use_context::<Payments>();
    let mut phone = use_signal(String::new);
    let mut pin = use_signal(String::new);
    let mut inline_error = use_signal(|| None::<String>);
    let mut session = use_signal(CheckoutSession::new);
    let fee = payments.report_fee;

    let start = {
        let payments = payments.clone();
        move |_| {
            let pending = match payments.gateway.initiate_stk_push(&phone.read(), fee, &student_name)
            {
                Ok(pending) => pending,
                Err(e) => {
                    inline_error.set(Some(e.to_string()));
                    return;
                },
            };
            if let Err(e) = session.write().begin() {
                warn!(error = %e, "Checkout already in progress");
                return;
            }
            inline_error.set(None);

            let payments = payments.clone();
            spawn(async move {
                let (msisdn, amount) = (pending.msisdn().clone(), pending.amount());
                let name = pending.student_name().to_owned();
                let request = pending.await;

                let otp = payments.gateway.generate_transaction_otp();
                payments.ledger.record(&request, msisdn, amount, name);
                payments.gateway.trigger_vibration();

                if let Err(e) = session.write().sent_to_phone(request, otp) {
                    error!(error = %e, "Checkout session out of sync");
                }
            });
        }
    };

    let confirm = move |_| {
        let submitted = {
            let mut current = session.write();
            current.enter_pin(&pin.read()).and_then(|()| current.verify())
        };
        if let Err(e) = submitted {
            inline_error.set(Some(e.to_string()));
            return;
        }

        let payments = payments.clone();
        spawn(async move {
            tokio::time::sleep(payments.gateway.latency()).await;
            let settled = session.write().settle(&payments.ledger);
            match settled {
                Ok(Some(record)) => {
                    payments.gateway.trigger_vibration();
                    on_paid.call(record);
                },
                Ok(None) => {},
                Err(e) => error!(error = %e, "Checkout verification failed"),
            }
        });
    };

    let current = session.read();
    let status = current.status();

    rsx! {
        div { class: "bg-white/5 border border-white/10 rounded-[2rem] p-8 md:p-10 flex flex-col gap-6",
            div { class: "flex justify-between items-center",
                h3 { class: "text-2xl font-black uppercase tracking-tighter text-white", "Unlock Full Report" }
                span { class: "text-red-600 font-black", "KES {fee}" }
            }
            StatusBadge { status }

            {match status {
                PaymentStatus::Idle => rsx! {
                    input {
                        class: INPUT,
                        r#type: "tel",
                        placeholder: "07XX XXX XXX",
                        value: "{phone}",
                        oninput: move |evt| phone.set(evt.value().trim().to_owned()),
                    }
                    button { class: PRIMARY, onclick: start, "PAY WITH M-PESA" }
                },
                PaymentStatus::Initiated => rsx! {
                    p { class: "text-gray-400 font-black uppercase tracking-widest text-xs animate-pulse",
                        "Contacting Safaricom gateway..."
                    }
                },
                PaymentStatus::SentToPhone => rsx! {
                    p { class: "text-gray-400 text-sm",
                        "Enter the code sent to your phone. Simulated SMS: "
                        span { class: "text-white font-black tracking-[0.3em]", {current.otp().unwrap_or_default()} }
                    }
                    input {
                        class: INPUT,
                        r#type: "text",
                        inputmode: "numeric",
                        maxlength: "4",
                        placeholder: "••••",
                        value: "{pin}",
                        oninput: move |evt| pin.set(evt.value()),
                    }
                    button { class: PRIMARY, onclick: confirm, "CONFIRM PAYMENT" }
                },
                PaymentStatus::PinEntered | PaymentStatus::Verifying => rsx! {
                    p { class: "text-gray-400 font-black uppercase tracking-widest text-xs animate-pulse",
                        "Verifying transaction..."
                    }
                },
                PaymentStatus::Success => rsx! {
                    p { class: "text-green-500 font-black uppercase tracking-widest text-sm", "Payment confirmed. Report unlocked." }
                },
                PaymentStatus::Failed => rsx! {
                    p { class: "text-red-500 font-black text-sm", {current.failure().unwrap_or("Payment failed")} }
                    button {
                        class: PRIMARY,
                        onclick: move |_| {
                            pin.set(String::new());
                            session.write().reset();
                        },
                        "TRY AGAIN"
                    }
                },
            }}

            if let Some(message) = inline_error() {
                p { class: "text-red-500 text-xs font-black uppercase tracking-widest", "{message}" }
            }
        }
    }
}

#[component]
fn StatusBadge(status: PaymentStatus) -> Element {
    let tone = match status {
        PaymentStatus::Success => "bg-green-600/20 text-green-500",
        PaymentStatus::Failed => "bg-red-600/20 text-red-500",
        _ => "bg-white/10 text-gray-400",
    };

    rsx! {
        span { class: "self-start px-3 py-1 rounded-md text-[9px] font-black tracking-[0.3em] {tone}",
            "{status}"
        }
    }
}
