use chrono::{Datelike, Local};
use log::warn;
use web_sys::window;
use yew::prelude::*;

use crate::config;
use crate::content::{QUICK_LINKS, SOCIAL_LINKS};
use crate::pages::home::anchor_for;

pub fn copyright_line(year: i32) -> String {
    format!("© {} Samra Ateeque. All rights reserved.", year)
}

fn scroll_to_section(id: &str) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match element {
        Some(element) => element.scroll_into_view(),
        None => warn!("No section with id {}", id),
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    let on_get_in_touch = Callback::from(|_: MouseEvent| scroll_to_section("contact"));

    let on_back_to_top = Callback::from(|_: MouseEvent| {
        if let Some(window) = window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    html! {
        <footer class="site-footer">
            <style>{FOOTER_CSS}</style>
            <div class="footer-cta">
                <h2>{"Have a project in mind?"}</h2>
                <button class="hero-cta" onclick={on_get_in_touch}>{"Get in Touch ↗"}</button>
            </div>
            <div class="footer-grid">
                <div class="footer-brand">
                    <a href="#home" class="nav-logo">{"Samrateq"}</a>
                    <p>{"Modern, animated websites for brands that want to stand out."}</p>
                </div>
                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul class="footer-list">
                        { for QUICK_LINKS.iter().map(|link| html! {
                            <li key={*link}><a href={anchor_for(link)}>{*link}</a></li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h4>{"Contact"}</h4>
                    <ul class="footer-list">
                        <li><a href={format!("mailto:{}", config::get_contact_email())}>{config::get_contact_email()}</a></li>
                        <li>{config::CONTACT_PHONE}</li>
                        <li>{config::CONTACT_LOCATION}</li>
                    </ul>
                </div>
                <div>
                    <h4>{"Follow"}</h4>
                    <div class="footer-social">
                        { for SOCIAL_LINKS.iter().map(|social| html! {
                            <a
                                key={social.name}
                                href={social.url}
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label={social.name}
                            >
                                <img src={social.icon} alt={social.name} />
                            </a>
                        }) }
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{copyright_line(year)}</p>
                <button class="back-to-top" onclick={on_back_to_top}>{"Back to Top ↑"}</button>
            </div>
        </footer>
    }
}

const FOOTER_CSS: &str = r#"
    .site-footer {
        padding: 5rem 1.5rem 2rem;
        background: #0a0a0a;
        color: #9ca3af;
    }
    .footer-cta {
        max-width: 72rem;
        margin: 0 auto 4rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
        flex-wrap: wrap;
        gap: 1.5rem;
    }
    .footer-cta h2 {
        margin: 0;
        font-size: 2.5rem;
        color: #fff;
    }
    .footer-grid {
        max-width: 72rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: 2fr 1fr 1fr 1fr;
        gap: 2rem;
    }
    .footer-grid h4 {
        margin: 0 0 1rem;
        color: #fff;
    }
    .footer-list {
        list-style: none;
        padding: 0;
        margin: 0;
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
    }
    .footer-list a {
        color: inherit;
        text-decoration: none;
    }
    .footer-list a:hover {
        color: #10b981;
    }
    .footer-social {
        display: flex;
        gap: 1rem;
    }
    .footer-social img {
        width: 1.5rem;
        height: 1.5rem;
        filter: invert(1);
        opacity: 0.7;
    }
    .footer-bottom {
        max-width: 72rem;
        margin: 3rem auto 0;
        padding-top: 2rem;
        border-top: 1px solid #1f2937;
        display: flex;
        justify-content: space-between;
        align-items: center;
        font-size: 0.875rem;
    }
    .back-to-top {
        border: none;
        background: none;
        color: inherit;
    }
    .back-to-top:hover {
        color: #fff;
    }
    @media (max-width: 768px) {
        .footer-grid {
            grid-template-columns: 1fr 1fr;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_the_year() {
        assert_eq!(copyright_line(2025), "© 2025 Samra Ateeque. All rights reserved.");
    }
}
