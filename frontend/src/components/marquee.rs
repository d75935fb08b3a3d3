use yew::prelude::*;

/// The list twice in a row; translating by -50% then loops seamlessly.
pub fn looped<'a>(items: &[&'a str]) -> Vec<&'a str> {
    items.iter().chain(items.iter()).copied().collect()
}

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    pub items: &'static [&'static str],
    #[prop_or(30)]
    pub duration_secs: u32,
}

#[function_component(Marquee)]
pub fn marquee(props: &MarqueeProps) -> Html {
    html! {
        <div class="marquee">
            <style>
                {r#"
                    .marquee {
                        position: relative;
                        overflow: hidden;
                        padding: 3rem 0;
                        background: #121212;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .marquee::before,
                    .marquee::after {
                        content: '';
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        width: 4rem;
                        z-index: 1;
                    }
                    .marquee::before {
                        left: 0;
                        background: linear-gradient(to right, #121212, transparent);
                    }
                    .marquee::after {
                        right: 0;
                        background: linear-gradient(to left, #121212, transparent);
                    }
                    .marquee-track {
                        display: flex;
                        width: max-content;
                        white-space: nowrap;
                        animation: marquee-scroll linear infinite;
                    }
                    .marquee-item {
                        display: flex;
                        align-items: center;
                        color: #6b7280;
                        font-size: 1.25rem;
                        font-style: italic;
                    }
                    .marquee-separator {
                        margin: 0 2.5rem;
                        color: #374151;
                    }
                    @keyframes marquee-scroll {
                        from { transform: translateX(0); }
                        to { transform: translateX(-50%); }
                    }
                "#}
            </style>
            <div class="marquee-track" style={format!("animation-duration: {}s;", props.duration_secs)}>
                { for looped(props.items).into_iter().enumerate().map(|(i, item)| html! {
                    <div class="marquee-item" key={i}>
                        <span>{item}</span>
                        <span class="marquee-separator">{"•"}</span>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_the_list_in_order() {
        assert_eq!(looped(&["a", "b"]), vec!["a", "b", "a", "b"]);
        assert!(looped(&[]).is_empty());
    }
}
