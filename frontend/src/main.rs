use log::{info, Level};
use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

mod config;
mod content;
mod forms;
mod carousel {
    pub mod catalog;
    pub mod navigator;
    pub mod binding;
}
mod components {
    pub mod cursor;
    pub mod reveal;
    pub mod animated_words;
    pub mod marquee;
    pub mod stars;
}
mod shop {
    pub mod cart;
    pub mod packages;
    pub mod pricing;
}
mod pages {
    pub mod home;
    pub mod about;
    pub mod work;
    pub mod testimonials;
    pub mod contact;
    pub mod footer;
}

use components::cursor::CustomCursor;
use pages::{
    about::About,
    contact::Contact,
    footer::Footer,
    home::Hero,
    testimonials::Testimonials,
    work::Work,
};
use shop::pricing::Services;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Global css={css!(r#"
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    font-family: 'Inter', system-ui, sans-serif;
                    background: #121212;
                    color: #fff;
                    -webkit-font-smoothing: antialiased;
                }
                *, *::before, *::after {
                    box-sizing: border-box;
                }
                button {
                    font: inherit;
                    cursor: pointer;
                }
                @media (pointer: fine) {
                    body, a, button {
                        cursor: none;
                    }
                }
                .reveal {
                    opacity: 0;
                    transform: translateY(40px);
                    transition: opacity 0.8s ease-out, transform 0.8s ease-out;
                }
                .reveal.visible {
                    opacity: 1;
                    transform: none;
                }
                .animated-word,
                .animated-letter {
                    display: inline-block;
                    opacity: 0;
                    animation: rise-in 0.6s ease-out forwards;
                }
                .slide {
                    display: none;
                }
                .slide.active {
                    display: block;
                }
                .slide.enter-forward {
                    animation: enter-forward 0.5s ease-out;
                }
                .slide.enter-backward {
                    animation: enter-backward 0.5s ease-out;
                }
                .carousel-dots {
                    display: flex;
                    gap: 0.5rem;
                }
                .carousel-dot {
                    width: 0.625rem;
                    height: 0.625rem;
                    padding: 0;
                    border: none;
                    border-radius: 9999px;
                    background: #6b7280;
                    opacity: 0.5;
                    transition: width 0.3s ease, opacity 0.3s ease;
                }
                .carousel-dot.active {
                    width: 2rem;
                    background: #10b981;
                    opacity: 1;
                }
                .carousel-arrow {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(128, 128, 128, 0.4);
                    background: transparent;
                    color: inherit;
                }
                .star {
                    color: #d1d5db;
                    background: none;
                    border: none;
                    font-size: 1.25rem;
                    padding: 0;
                }
                .star.filled {
                    color: #f59e0b;
                }
                @keyframes rise-in {
                    from { opacity: 0; transform: translateY(100%); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes enter-forward {
                    from { opacity: 0; transform: translateX(60px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                @keyframes enter-backward {
                    from { opacity: 0; transform: translateX(-60px); }
                    to { opacity: 1; transform: translateX(0); }
                }
            "#)} />
            <CustomCursor />
            <main>
                <Hero />
                <About />
                <Services />
                <Work />
                <Testimonials />
                <Contact />
            </main>
            <Footer />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
