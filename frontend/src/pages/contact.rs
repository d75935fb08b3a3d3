use log::{info, warn};
use web_sys::{window, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::forms::{ContactForm, SERVICE_OPTIONS};

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let error = use_state(|| None::<String>);

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.name = input.value();
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

    let on_service = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.service = select.value();
            form.set(next);
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.message = input.value();
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.mailto_href(config::get_contact_email()) {
                Ok(href) => {
                    error.set(None);
                    info!("Opening mail client for {}", form.service);
                    if let Some(window) = window() {
                        if let Err(e) = window.location().set_href(&href) {
                            warn!("Failed to open mail client: {:?}", e);
                        }
                    }
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        })
    };

    html! {
        <section id="contact" class="contact-section">
            <style>{CONTACT_CSS}</style>
            <div class="contact-grid">
                <Reveal class="contact-info">
                    <h2>{"Let's build something great together"}</h2>
                    <p class="contact-lead">
                        {"Have a project in mind? Fill out the form and your mail app will open with everything ready to send."}
                    </p>
                    <ul class="contact-list">
                        <li>
                            <span class="contact-label">{"Email"}</span>
                            <a href={format!("mailto:{}", config::get_contact_email())}>{config::get_contact_email()}</a>
                        </li>
                        <li>
                            <span class="contact-label">{"Phone"}</span>
                            <a href={format!("tel:{}", config::CONTACT_PHONE.replace(' ', ""))}>{config::CONTACT_PHONE}</a>
                        </li>
                        <li>
                            <span class="contact-label">{"Location"}</span>
                            <span>{config::CONTACT_LOCATION}</span>
                        </li>
                    </ul>
                </Reveal>
                <Reveal class="contact-form-wrapper" delay_ms={200}>
                    <form class="contact-form" onsubmit={on_submit}>
                        <input
                            type="text"
                            placeholder="Your Name"
                            value={form.name.clone()}
                            oninput={on_name}
                        />
                        <input
                            type="email"
                            placeholder="Your Email"
                            value={form.email.clone()}
                            oninput={on_email}
                        />
                        <select onchange={on_service}>
                            { for SERVICE_OPTIONS.iter().map(|option| html! {
                                <option
                                    key={*option}
                                    value={*option}
                                    selected={form.service == *option}
                                >
                                    {*option}
                                </option>
                            }) }
                        </select>
                        <textarea
                            rows="5"
                            placeholder="Tell me about your project"
                            value={form.message.clone()}
                            oninput={on_message}
                        />
                        {
                            if let Some(message) = &*error {
                                html! { <p class="form-error">{message}</p> }
                            } else {
                                html! {}
                            }
                        }
                        <button type="submit" class="hero-cta">{"Send Message ↗"}</button>
                    </form>
                </Reveal>
            </div>
        </section>
    }
}

const CONTACT_CSS: &str = r#"
    .contact-section {
        padding: 7rem 1.5rem;
        background: #121212;
        color: #fff;
    }
    .contact-grid {
        max-width: 72rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
    }
    .contact-info h2 {
        font-size: 2.5rem;
        margin: 0 0 1rem;
    }
    .contact-lead {
        color: #9ca3af;
        line-height: 1.7;
    }
    .contact-list {
        list-style: none;
        padding: 0;
        margin: 2rem 0 0;
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .contact-list a,
    .contact-list span {
        color: #e5e7eb;
        text-decoration: none;
    }
    .contact-label {
        display: block;
        font-size: 0.75rem;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        color: #34d399 !important;
    }
    .contact-form {
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .contact-form input,
    .contact-form select,
    .contact-form textarea {
        padding: 0.875rem 1rem;
        border: 1px solid #374151;
        border-radius: 0.5rem;
        background: rgba(255, 255, 255, 0.05);
        color: #fff;
        font: inherit;
    }
    .contact-form input:focus,
    .contact-form select:focus,
    .contact-form textarea:focus {
        outline: none;
        border-color: #10b981;
    }
    .contact-form .form-error {
        color: #f87171;
    }
    @media (max-width: 768px) {
        .contact-grid {
            grid-template-columns: 1fr;
        }
    }
"#;
