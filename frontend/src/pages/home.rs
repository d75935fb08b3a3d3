use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::animated_words::AnimatedWords;
use crate::components::marquee::Marquee;
use crate::content::{BRANDS, NAV_LINKS};

// past this offset the nav gets a solid background
const SCROLLED_OFFSET: f64 = 80.0;

pub fn anchor_for(link: &str) -> String {
    format!("#{}", link.to_lowercase())
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::<dyn Fn()>::new(move || {
                    let offset = web_sys::window()
                        .and_then(|w| w.scroll_y().ok())
                        .unwrap_or(0.0);
                    is_scrolled.set(offset > SCROLLED_OFFSET);
                });
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(window) = &window {
                        let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo">{"Samrateq"}</a>
                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a key={*link} href={anchor_for(link)} class="nav-link">{*link}</a>
                    }) }
                </div>
                <a href="#contact" class="nav-cta">{"Get in touch ↗"}</a>
                <button class="burger-menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for NAV_LINKS.iter().map(|link| html! {
                                <a key={*link} href={anchor_for(link)} onclick={close_menu.clone()} class="mobile-link">{*link}</a>
                            }) }
                            <a href="#contact" onclick={close_menu.clone()} class="nav-cta mobile">{"Get in touch ↗"}</a>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <>
        <section id="home" class="hero">
            <style>{HERO_CSS}</style>
            <div class="hero-mesh"></div>
            <Nav />
            <div class="hero-content">
                <div class="hero-text">
                    <p class="hero-kicker">{"SAMRA ATEEQUE"}</p>
                    <AnimatedWords
                        text="Full Stack Developer"
                        stagger_ms={50}
                        delay_ms={100}
                        class="hero-title"
                    />
                    <p class="hero-subtitle">
                        {"Crafting elegant, performant, and visually stunning web experiences from concept to deployment using the MERN stack and modern animation libraries."}
                    </p>
                    <a href="#contact" class="hero-cta">{"Let's Collaborate ↗"}</a>
                </div>
                <div class="hero-shapes">
                    <div class="shape cube"></div>
                    <div class="shape sphere"></div>
                    <div class="shape rounded"></div>
                    <div class="shape center"></div>
                </div>
            </div>
        </section>
        <Marquee items={BRANDS} />
        </>
    }
}

const HERO_CSS: &str = r#"
    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        overflow: hidden;
        background: #121212;
    }
    .hero-mesh {
        position: absolute;
        inset: 0;
        opacity: 0.4;
        background:
            radial-gradient(circle at 10% 20%, #16a085 0%, transparent 40%),
            radial-gradient(circle at 80% 30%, #2980b9 0%, transparent 40%),
            radial-gradient(circle at 50% 80%, #8e44ad 0%, transparent 40%);
        animation: mesh-shift 20s linear infinite alternate;
    }
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        padding: 2rem;
        transition: background 0.3s ease, padding 0.3s ease;
    }
    .top-nav.scrolled {
        padding: 1rem 2rem;
        background: rgba(18, 18, 18, 0.85);
        backdrop-filter: blur(12px);
    }
    .nav-content {
        max-width: 80rem;
        margin: 0 auto;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .nav-logo {
        font-size: 1.5rem;
        font-weight: 700;
        color: #fff;
        text-decoration: none;
    }
    .nav-links {
        display: flex;
        gap: 2rem;
    }
    .nav-link {
        color: #9ca3af;
        text-decoration: none;
        border-bottom: 2px solid transparent;
        transition: color 0.3s ease, border-color 0.3s ease;
    }
    .nav-link:hover {
        color: #fff;
        border-color: #10b981;
    }
    .nav-cta,
    .hero-cta {
        background: linear-gradient(to right, #10b981, #3b82f6);
        color: #fff;
        padding: 0.625rem 1.5rem;
        border-radius: 9999px;
        font-weight: 600;
        text-decoration: none;
        transition: transform 0.2s ease;
    }
    .nav-cta:hover,
    .hero-cta:hover {
        transform: translateY(-2px) scale(1.05);
    }
    .burger-menu {
        display: none;
        background: none;
        border: none;
        color: #fff;
        font-size: 1.5rem;
    }
    .mobile-menu {
        position: absolute;
        top: 4rem;
        left: 1rem;
        right: 1rem;
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.5rem;
        padding: 1rem;
        border-radius: 0.5rem;
        background: rgba(17, 24, 39, 0.9);
        backdrop-filter: blur(12px);
    }
    .mobile-link {
        width: 100%;
        padding: 0.75rem;
        text-align: center;
        color: #d1d5db;
        text-decoration: none;
    }
    .hero-content {
        position: relative;
        z-index: 10;
        max-width: 80rem;
        width: 100%;
        margin: 0 auto;
        padding: 0 2rem;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
        align-items: center;
    }
    .hero-kicker {
        color: #34d399;
        letter-spacing: 0.1em;
    }
    .hero-title {
        font-size: 6rem;
        font-weight: 700;
        line-height: 1;
        color: #fff;
    }
    .hero-subtitle {
        max-width: 32rem;
        font-size: 1.25rem;
        line-height: 1.7;
        color: #9ca3af;
        margin-bottom: 2rem;
    }
    .hero-shapes {
        position: relative;
        height: 24rem;
    }
    .shape {
        position: absolute;
        border: 1px solid rgba(255, 255, 255, 0.1);
        backdrop-filter: blur(8px);
        animation: shape-float 18s linear infinite;
    }
    .shape.cube {
        top: 10%;
        left: 15%;
        width: 6rem;
        height: 6rem;
        border-radius: 0.5rem;
        background: linear-gradient(to bottom right, rgba(16, 185, 129, 0.3), rgba(59, 130, 246, 0.3));
    }
    .shape.sphere {
        bottom: 15%;
        right: 20%;
        width: 8rem;
        height: 8rem;
        border-radius: 9999px;
        background: linear-gradient(to bottom right, rgba(168, 85, 247, 0.2), rgba(236, 72, 153, 0.2));
        animation-delay: -4s;
    }
    .shape.rounded {
        top: 40%;
        right: 5%;
        width: 5rem;
        height: 5rem;
        border-radius: 0.75rem;
        background: linear-gradient(to bottom right, rgba(234, 179, 8, 0.3), rgba(249, 115, 22, 0.3));
        animation-delay: -8s;
    }
    .shape.center {
        top: 50%;
        left: 50%;
        width: 10rem;
        height: 10rem;
        margin: -5rem 0 0 -5rem;
        border-radius: 1rem;
        background: rgba(255, 255, 255, 0.08);
        animation-duration: 24s;
    }
    @keyframes shape-float {
        0% { opacity: 0; transform: scale(0.5) rotate(0deg); }
        25% { opacity: 0.5; transform: scale(1) rotate(90deg); }
        50% { opacity: 0.3; transform: scale(1.1) rotate(180deg); }
        75% { opacity: 0.5; transform: scale(1) rotate(270deg); }
        100% { opacity: 0; transform: scale(0.5) rotate(360deg); }
    }
    @keyframes mesh-shift {
        from { background-position: 0% 0%; }
        to { background-position: 100% 100%; }
    }
    @media (max-width: 768px) {
        .nav-links,
        .nav-content > .nav-cta {
            display: none;
        }
        .burger-menu {
            display: block;
        }
        .hero-content {
            grid-template-columns: 1fr;
        }
        .hero-shapes {
            display: none;
        }
        .hero-title {
            font-size: 3rem;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_are_lowercase_section_ids() {
        assert_eq!(anchor_for("Services"), "#services");
        assert_eq!(anchor_for("Home"), "#home");
    }
}
