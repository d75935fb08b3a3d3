use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

const POINTER_SELECTOR: &str = "a, button, [role='button']";
const TEXT_TAGS: [&str; 7] = ["P", "H1", "H2", "H3", "H4", "SPAN", "BLOCKQUOTE"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorVariant {
    Default,
    Hover,
    Text,
}

impl CursorVariant {
    /// Pointer targets win over text.
    pub fn classify(over_pointer: bool, tag_name: &str) -> Self {
        if over_pointer {
            CursorVariant::Hover
        } else if TEXT_TAGS.contains(&tag_name.to_ascii_uppercase().as_str()) {
            CursorVariant::Text
        } else {
            CursorVariant::Default
        }
    }

    pub fn size(self) -> (i32, i32) {
        match self {
            CursorVariant::Default => (32, 32),
            CursorVariant::Hover => (64, 64),
            CursorVariant::Text => (8, 80),
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            CursorVariant::Default => "cursor-follower",
            CursorVariant::Hover => "cursor-follower hover",
            CursorVariant::Text => "cursor-follower text",
        }
    }

    /// Inline style centering the follower on the pointer.
    pub fn style(self, x: i32, y: i32) -> String {
        let (width, height) = self.size();
        format!(
            "width: {}px; height: {}px; transform: translate({}px, {}px);",
            width,
            height,
            x - width / 2,
            y - height / 2
        )
    }
}

#[derive(Clone, Copy, PartialEq)]
struct CursorState {
    x: i32,
    y: i32,
    variant: CursorVariant,
}

fn variant_for(event: &MouseEvent) -> CursorVariant {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return CursorVariant::Default;
    };
    let over_pointer = matches!(target.closest(POINTER_SELECTOR), Ok(Some(_)));
    CursorVariant::classify(over_pointer, &target.tag_name())
}

/// Pointer follower. The `mousemove` listener lives exactly as long as the component.
#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let cursor = use_state(|| CursorState {
        x: -100,
        y: -100,
        variant: CursorVariant::Default,
    });

    {
        let cursor = cursor.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let callback = Closure::<dyn Fn(MouseEvent)>::new(move |e: MouseEvent| {
                    cursor.set(CursorState {
                        x: e.client_x(),
                        y: e.client_y(),
                        variant: variant_for(&e),
                    });
                });

                match &window {
                    Some(window) => {
                        if window
                            .add_event_listener_with_callback("mousemove", callback.as_ref().unchecked_ref())
                            .is_err()
                        {
                            warn!("Could not attach cursor listener");
                        }
                    }
                    None => warn!("No window, cursor follower disabled"),
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "mousemove",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let CursorState { x, y, variant } = *cursor;

    html! {
        <>
            <style>
                {r#"
                    .cursor-follower {
                        position: fixed;
                        top: 0;
                        left: 0;
                        border-radius: 9999px;
                        pointer-events: none;
                        z-index: 9999;
                        background: rgba(255, 255, 255, 0.1);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        transition: width 0.2s ease, height 0.2s ease, background 0.2s ease, transform 0.08s linear;
                    }
                    .cursor-follower.hover {
                        background: rgba(52, 211, 153, 0.1);
                        border: 1px solid rgba(52, 211, 153, 0.3);
                    }
                    .cursor-follower.text {
                        border-radius: 4px;
                        background: rgba(52, 211, 153, 0.5);
                        border: none;
                    }
                    @media (max-width: 768px) {
                        .cursor-follower {
                            display: none;
                        }
                    }
                "#}
            </style>
            <div class={variant.class()} style={variant.style(x, y)}></div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_targets_take_priority() {
        assert_eq!(CursorVariant::classify(true, "SPAN"), CursorVariant::Hover);
        assert_eq!(CursorVariant::classify(true, "DIV"), CursorVariant::Hover);
    }

    #[test]
    fn text_tags_get_text_bar() {
        assert_eq!(CursorVariant::classify(false, "P"), CursorVariant::Text);
        assert_eq!(CursorVariant::classify(false, "h2"), CursorVariant::Text);
        assert_eq!(CursorVariant::classify(false, "BLOCKQUOTE"), CursorVariant::Text);
        assert_eq!(CursorVariant::classify(false, "SECTION"), CursorVariant::Default);
    }

    #[test]
    fn style_centers_on_pointer() {
        assert_eq!(
            CursorVariant::Default.style(100, 50),
            "width: 32px; height: 32px; transform: translate(84px, 34px);"
        );
        assert_eq!(
            CursorVariant::Text.style(100, 50),
            "width: 8px; height: 80px; transform: translate(96px, 10px);"
        );
    }
}
