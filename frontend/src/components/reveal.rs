use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

/// Share of an element's height inside a viewport of `viewport_height`.
pub fn visible_fraction(top: f64, bottom: f64, viewport_height: f64) -> f64 {
    let height = bottom - top;
    if height <= 0.0 {
        return 0.0;
    }
    let overlap = bottom.min(viewport_height) - top.max(0.0);
    (overlap / height).clamp(0.0, 1.0)
}

pub fn should_reveal(top: f64, bottom: f64, viewport_height: f64, amount: f64) -> bool {
    let fraction = visible_fraction(top, bottom, viewport_height);
    fraction > 0.0 && fraction >= amount
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    // fraction of the element that must be on screen
    #[prop_or(0.2)]
    pub amount: f64,
    #[prop_or_default]
    pub delay_ms: u32,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        let amount = props.amount;
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                // the handle captured below never observes its own updates
                let done = Rc::new(Cell::new(false));
                let check = {
                    let done = done.clone();
                    move || {
                        if done.get() {
                            return;
                        }
                        let (Some(element), Some(window)) = (node.cast::<Element>(), web_sys::window()) else {
                            return;
                        };
                        let viewport_height = window
                            .inner_height()
                            .ok()
                            .and_then(|h| h.as_f64())
                            .unwrap_or(0.0);
                        let rect = element.get_bounding_client_rect();
                        if should_reveal(rect.top(), rect.bottom(), viewport_height, amount) {
                            done.set(true);
                            revealed.set(true);
                        }
                    }
                };
                check();

                let callback = Closure::<dyn Fn()>::new(check);
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node}
            class={classes!("reveal", (*revealed).then_some("visible"), props.class.clone())}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}
