use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::analytics::{self, AnalyticsEvent};
use crate::components::reveal::FadeIn;
use crate::config::ACKNOWLEDGEMENT_MS;
use crate::lead::{self, LeadAction, LeadField, LeadForm, SharedLeadSink};

/// Tour-booking form. A valid submission is handed to the lead sink, the
/// form is swapped for a confirmation panel, and it comes back empty a few
/// seconds later.
#[function_component(Invitation)]
pub fn invitation() -> Html {
    let form = use_reducer(LeadForm::default);
    let sink = use_context::<SharedLeadSink>().unwrap_or_default();
    let acknowledgement: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    {
        let acknowledgement = acknowledgement.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    // unmounting mid-acknowledgement must not touch the discarded form
                    if let Some(timeout) = acknowledgement.borrow_mut().take() {
                        drop(timeout);
                    }
                }
            },
            (),
        );
    }

    let on_input = |field: LeadField| {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let Some(target) = e.target() else {
                return;
            };
            let value = if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
                input.value()
            } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
                area.value()
            } else {
                return;
            };
            dispatcher.dispatch(LeadAction::Edit(field, value));
        })
    };

    let on_submit = {
        let form = form.clone();
        let acknowledgement = acknowledgement.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(err) = lead::hand_off(&form, sink.sink()) {
                log::warn!("Tour request not sent: {}", err);
                return;
            }
            analytics::track(AnalyticsEvent::TourRequested);

            let now_ms = js_sys::Date::now();
            form.dispatch(LeadAction::Submit { now_ms });

            let dispatcher = form.dispatcher();
            let deadline = now_ms + f64::from(ACKNOWLEDGEMENT_MS);
            let timeout = Timeout::new(ACKNOWLEDGEMENT_MS, move || {
                dispatcher.dispatch(LeadAction::Tick { now_ms: deadline });
            });
            // replacing an older handle cancels it
            *acknowledgement.borrow_mut() = Some(timeout);
        })
    };

    html! {
        <section id="tour" class="invitation">
            <style>
                {r#"
                    .invitation {
                        padding: 5rem 1.5rem 8rem;
                        background: #f4ede3;
                    }
                    .invitation-inner {
                        max-width: 48rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .invitation h2 {
                        font-size: 3rem;
                        font-weight: 700;
                        color: var(--ll-dark);
                        line-height: 1.1;
                        margin-bottom: 1.5rem;
                    }
                    .invitation h2 span {
                        color: var(--ll-gold);
                    }
                    .invitation-lede {
                        font-size: 1.25rem;
                        margin-bottom: 1rem;
                    }
                    .invitation-promise {
                        font-style: italic;
                        margin-bottom: 3rem;
                    }
                    .tour-form {
                        background: white;
                        border-radius: 1.5rem;
                        padding: 2.5rem;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                        text-align: left;
                    }
                    .tour-form-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .tour-form label {
                        display: block;
                        font-weight: 600;
                        color: var(--ll-dark);
                        margin-bottom: 0.5rem;
                    }
                    .tour-form input, .tour-form textarea {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        border: 1px solid #e5d9c8;
                        border-radius: 0.75rem;
                        font: inherit;
                        box-sizing: border-box;
                    }
                    .tour-form textarea {
                        min-height: 8rem;
                        margin-bottom: 2rem;
                    }
                    .tour-form button {
                        width: 100%;
                        padding: 1rem;
                        border: none;
                        border-radius: 9999px;
                        background: var(--ll-gold);
                        color: white;
                        font-size: 1.125rem;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .tour-acknowledgement {
                        background: #f0fdf4;
                        border: 2px solid #4ade80;
                        border-radius: 1.5rem;
                        padding: 2.5rem;
                        color: #15803d;
                        font-size: 1.25rem;
                        font-weight: 600;
                    }
                    .tour-acknowledgement i {
                        margin-right: 1rem;
                    }
                    @media (max-width: 768px) {
                        .tour-form-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="invitation-inner">
                <FadeIn delay={0.1}>
                    <h2>{"Book a Private Tour."}<br /><span>{"Feel the Difference."}</span></h2>
                </FadeIn>
                <FadeIn delay={0.2}>
                    <p class="invitation-lede">{"Step inside a workspace designed for clarity, culture, and calm."}</p>
                    <p class="invitation-promise">{"We don't promise perfection — just peace."}</p>
                </FadeIn>
                <FadeIn delay={0.3}>
                    if form.is_submitted() {
                        <div class="tour-acknowledgement">
                            <i class="fa-solid fa-circle-check"></i>
                            {"Tour Requested! We'll be in touch soon."}
                        </div>
                    } else {
                        <form class="tour-form" onsubmit={on_submit}>
                            <div class="tour-form-grid">
                                { text_input(LeadField::Name, "Name", "text", form.value(LeadField::Name), on_input(LeadField::Name)) }
                                { text_input(LeadField::Email, "Email", "email", form.value(LeadField::Email), on_input(LeadField::Email)) }
                                { text_input(LeadField::Phone, "Mobile", "tel", form.value(LeadField::Phone), on_input(LeadField::Phone)) }
                                { text_input(LeadField::Organization, "Company", "text", form.value(LeadField::Organization), on_input(LeadField::Organization)) }
                            </div>
                            <label for={LeadField::Requirement.key()}>{"Message"}</label>
                            <textarea
                                name={LeadField::Requirement.key()}
                                id={LeadField::Requirement.key()}
                                value={form.value(LeadField::Requirement).to_string()}
                                oninput={on_input(LeadField::Requirement)}
                                placeholder="Tell us about your workspace needs..."
                            />
                            <button type="submit">
                                {"Step Into the Limelight "}<i class="fa-solid fa-arrow-right"></i>
                            </button>
                        </form>
                    }
                </FadeIn>
            </div>
        </section>
    }
}

fn text_input(
    field: LeadField,
    label: &'static str,
    kind: &'static str,
    value: &str,
    oninput: Callback<InputEvent>,
) -> Html {
    html! {
        <div>
            <label for={field.key()}>{ label }</label>
            <input
                type={kind}
                name={field.key()}
                id={field.key()}
                value={value.to_string()}
                required={field.is_required()}
                {oninput}
            />
        </div>
    }
}
