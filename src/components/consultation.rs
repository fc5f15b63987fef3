use chrono::Utc;
use gloo_console::log;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::lead::controller::{LeadController, LeadForm, SubmitError, SubmitStatus, VisaType};
use crate::lead::device;
use crate::lead::store::BrowserStorage;
use crate::lead::supabase::SupabaseClient;

#[derive(Properties, PartialEq)]
pub struct ConsultationProps {
    /// Anchor for the "Book a slot" buttons to scroll to.
    pub section_ref: NodeRef,
    pub prefill_type: Option<VisaType>,
    pub on_prefill_handled: Callback<()>,
}

#[function_component(ConsultationForm)]
pub fn consultation_form(props: &ConsultationProps) -> Html {
    let form = use_state(LeadForm::default);
    let status = use_state(|| SubmitStatus::Idle);
    let message = use_state(String::new);
    let device_id = use_state(|| None::<String>);

    // Resolve the per-browser identity once on mount.
    {
        let device_id = device_id.clone();
        use_effect_with_deps(
            move |_| {
                let id = device::get_or_create_device_id(&BrowserStorage, device::browser_device_id);
                device_id.set(Some(id));
                || ()
            },
            (),
        );
    }

    // Service cards elsewhere on the page preselect a visa type.
    {
        let form = form.clone();
        let on_prefill_handled = props.on_prefill_handled.clone();
        use_effect_with_deps(
            move |prefill: &Option<VisaType>| {
                if let Some(visa_type) = *prefill {
                    let mut next = (*form).clone();
                    next.visa_type = visa_type;
                    form.set(next);
                    on_prefill_handled.emit(());
                }
                || ()
            },
            props.prefill_type,
        );
    }

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.name = input.value();
            form.set(next);
        })
    };
    let on_phone = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.phone = input.value();
            form.set(next);
        })
    };
    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.email = input.value();
            form.set(next);
        })
    };
    let on_type = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(visa_type) = VisaType::from_label(&select.value()) {
                let mut next = (*form).clone();
                next.visa_type = visa_type;
                form.set(next);
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        let message = message.clone();
        let device_id = device_id.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == SubmitStatus::Submitting {
                return;
            }
            status.set(SubmitStatus::Submitting);
            message.set(String::new());

            let form = form.clone();
            let status = status.clone();
            let message = message.clone();
            let submitted = (*form).clone();
            let device_id = (*device_id).clone();
            spawn_local(async move {
                let sink = SupabaseClient::from_config();
                let controller = LeadController::new(&BrowserStorage, sink.as_ref());
                let now_ms = Utc::now().timestamp_millis();

                match controller.submit(&submitted, device_id.as_deref(), now_ms).await {
                    Ok(()) => {
                        status.set(SubmitStatus::Succeeded);
                        message.set("Submitted! Our consultants will reach out shortly.".to_string());
                        // Entered values only clear on success; a failed
                        // attempt keeps them so the visitor can retry.
                        form.set(LeadForm::default());
                    }
                    Err(err) => {
                        match &err {
                            SubmitError::Insert(detail) => {
                                log!("Booking insert error:", detail.clone());
                            }
                            SubmitError::RateLimited { retry_in_ms } => {
                                log::info!(
                                    "submission throttled, window reopens in {} min",
                                    retry_in_ms / 60_000
                                );
                            }
                            SubmitError::NotConfigured => {
                                log::warn!("booking backend not configured, submission dropped");
                            }
                        }
                        status.set(SubmitStatus::Failed);
                        message.set(err.user_message().to_string());
                    }
                }
            });
        })
    };

    let submitting = *status == SubmitStatus::Submitting;
    let message_class = if *status == SubmitStatus::Failed {
        "form-message error"
    } else {
        "form-message success"
    };

    html! {
        <section ref={props.section_ref.clone()} id="consultation" class="section consultation">
            <div class="container split">
                <div class="consultation-intro">
                    <span class="eyebrow">{"Free consultation"}</span>
                    <h2>{"Let's tailor your visa path"}</h2>
                    <p class="section-subtitle">
                        {"Share a few details and we'll schedule a premium, no-pressure consultation."}
                    </p>
                    <ul class="perk-list">
                        <li>{"• Dedicated case strategist"}</li>
                        <li>{"• Document readiness checklist"}</li>
                        <li>{"• Clear timeline and fees upfront"}</li>
                    </ul>
                    <a
                        href="https://wa.me/9779707145321"
                        target="_blank"
                        rel="noreferrer"
                        class="chip-link whatsapp"
                    >
                        {"Contact on WhatsApp"}
                    </a>
                </div>
                <form class="consultation-form" onsubmit={onsubmit}>
                    <div class="field">
                        <label for="name">{"Name"}</label>
                        <input
                            id="name"
                            name="name"
                            required=true
                            placeholder="Your full name"
                            value={form.name.clone()}
                            oninput={on_name}
                        />
                    </div>
                    <div class="field-row">
                        <div class="field">
                            <label for="phone">{"Phone"}</label>
                            <input
                                id="phone"
                                name="phone"
                                required=true
                                placeholder="98XXXXXXXX"
                                value={form.phone.clone()}
                                oninput={on_phone}
                            />
                        </div>
                        <div class="field">
                            <label for="email">{"Email"}</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                placeholder="you@example.com"
                                value={form.email.clone()}
                                oninput={on_email}
                            />
                        </div>
                    </div>
                    <div class="field">
                        <label for="type">{"Visa Type"}</label>
                        <select id="type" name="type" onchange={on_type}>
                            {
                                VisaType::ALL.into_iter().map(|visa| html! {
                                    <option selected={form.visa_type == visa}>{visa.label()}</option>
                                }).collect::<Html>()
                            }
                        </select>
                    </div>
                    <button type="submit" class="btn-primary" disabled={submitting}>
                        { if submitting { "Submitting…" } else { "Submit & Schedule →" } }
                    </button>
                    {
                        if message.is_empty() {
                            html! {}
                        } else {
                            html! { <p class={message_class}>{(*message).clone()}</p> }
                        }
                    }
                </form>
            </div>
        </section>
    }
}
