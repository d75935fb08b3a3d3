use yew::prelude::*;

use crate::components::animated_words::{AnimatedLetters, AnimatedWords};
use crate::components::reveal::Reveal;
use crate::content::{PRINCIPLES, TECH_LOGOS};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <>
        <section id="about" class="about-section">
            <style>{ABOUT_CSS}</style>
            <div class="about-blob left"></div>
            <div class="about-blob right"></div>
            <div class="tech-logos">
                { for TECH_LOGOS.iter().enumerate().map(|(i, (src, position))| html! {
                    <img
                        key={i}
                        src={*src}
                        alt="Tech logo"
                        class="tech-logo"
                        style={format!("{} animation-duration: {}ms;", position, 8000 + i * 500)}
                    />
                }) }
            </div>
            <Reveal class="about-content" amount={0.3}>
                <h1 class="about-name">
                    <AnimatedLetters text="Samra Ateeque" delay_ms={500} />
                </h1>
                <h2 class="about-title">{"Full-Stack Developer | MERN Stack Expert"}</h2>
                <div class="about-copy">
                    <AnimatedWords
                        text="Passionate developer crafting modern, fast, and visually engaging web applications with the MERN stack."
                        stagger_ms={20}
                        delay_ms={1200}
                    />
                    <AnimatedWords
                        text="Expertise in React, Node.js, and seamless animations using Framer Motion & GSAP."
                        stagger_ms={20}
                        delay_ms={1500}
                    />
                </div>
                <a href="#contact" class="hero-cta about-cta">{"Let’s Connect ↗"}</a>
            </Reveal>
        </section>
        <section class="principles">
            <div class="principles-grid">
                { for PRINCIPLES.iter().enumerate().map(|(i, principle)| html! {
                    <Reveal key={i} class="principle" delay_ms={(i as u32) * 200}>
                        <h3>{principle.title}</h3>
                        <p>{principle.description}</p>
                    </Reveal>
                }) }
            </div>
        </section>
        </>
    }
}

const ABOUT_CSS: &str = r#"
    .about-section {
        position: relative;
        isolation: isolate;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 10rem 1.5rem;
        overflow: hidden;
        background: #f0eeeb;
        color: #1f2937;
    }
    .about-blob {
        position: absolute;
        z-index: -10;
        border-radius: 9999px;
        filter: blur(64px);
        mix-blend-mode: multiply;
        animation: blob 20s infinite ease-in-out;
    }
    .about-blob.left {
        top: 20%;
        left: 15%;
        width: 16rem;
        height: 16rem;
        background: #d1fae5;
        opacity: 0.4;
    }
    .about-blob.right {
        bottom: 20%;
        right: 15%;
        width: 20rem;
        height: 20rem;
        background: #dbeafe;
        opacity: 0.3;
        animation-delay: -5s;
    }
    .tech-logos {
        position: absolute;
        inset: 0;
        z-index: -10;
        opacity: 0.3;
        overflow: hidden;
    }
    .tech-logo {
        position: absolute;
        width: 5rem;
        opacity: 0.7;
        animation: logo-drift ease-in-out infinite;
    }
    .about-content {
        max-width: 48rem;
        text-align: center;
    }
    .about-name {
        font-size: 4.5rem;
        font-weight: 700;
        color: #111827;
    }
    .about-title {
        margin-top: 1rem;
        font-size: 1.5rem;
        color: #047857;
    }
    .about-copy {
        margin-top: 2rem;
        font-size: 1.125rem;
        line-height: 1.7;
        color: #374151;
    }
    .about-cta {
        display: inline-block;
        margin-top: 3rem;
    }
    .principles {
        padding: 7rem 1.5rem;
        background: #fff;
        color: #1f2937;
    }
    .principles-grid {
        max-width: 80rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .principle + .principle {
        border-left: 1px solid #e5e7eb;
        padding-left: 2rem;
    }
    .principle h3 {
        font-size: 1.25rem;
        color: #111827;
    }
    .principle p {
        margin-top: 0.75rem;
        color: #4b5563;
        line-height: 1.7;
    }
    @keyframes blob {
        0%, 100% { border-radius: 60% 40% 30% 70% / 60% 30% 70% 40%; transform: translate(0px, 0px) scale(1); }
        33% { border-radius: 70% 30% 50% 50% / 30% 30% 70% 70%; transform: translate(30px, -20px) scale(1.05); }
        66% { border-radius: 100% 60% 60% 100% / 100% 100% 60% 60%; transform: translate(-20px, 30px) scale(0.95); }
    }
    @keyframes logo-drift {
        0%, 100% { transform: translateY(0) rotate(0deg) scale(1); }
        50% { transform: translateY(-15px) rotate(10deg) scale(1.05); }
    }
    @media (max-width: 768px) {
        .principles-grid {
            grid-template-columns: 1fr;
        }
        .principle + .principle {
            border-left: none;
            padding-left: 0;
        }
        .about-name {
            font-size: 3rem;
        }
    }
"#;
