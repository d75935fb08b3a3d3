use yew::prelude::*;

pub const MAX_STARS: u8 = 5;

/// Whether star `position` (1-based) is lit. A hover preview overrides the rating.
pub fn star_filled(position: u8, hover: u8, rating: u8) -> bool {
    let shown = if hover > 0 { hover } else { rating };
    position <= shown
}

fn star_class(filled: bool) -> &'static str {
    if filled {
        "star filled"
    } else {
        "star"
    }
}

#[derive(Properties, PartialEq)]
pub struct StarRatingProps {
    pub rating: u8,
}

#[function_component(StarRating)]
pub fn star_rating(props: &StarRatingProps) -> Html {
    html! {
        <div class="star-rating" aria-label={format!("{} out of {} stars", props.rating, MAX_STARS)}>
            { for (1..=MAX_STARS).map(|position| html! {
                <span class={star_class(star_filled(position, 0, props.rating))}>{"★"}</span>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StarRatingInputProps {
    pub rating: u8,
    pub on_change: Callback<u8>,
}

#[function_component(StarRatingInput)]
pub fn star_rating_input(props: &StarRatingInputProps) -> Html {
    let hover = use_state(|| 0u8);

    let on_leave = {
        let hover = hover.clone();
        Callback::from(move |_: MouseEvent| hover.set(0))
    };

    html! {
        <div class="star-rating input" onmouseleave={on_leave}>
            { for (1..=MAX_STARS).map(|position| {
                let on_click = {
                    let on_change = props.on_change.clone();
                    Callback::from(move |_: MouseEvent| on_change.emit(position))
                };
                let on_enter = {
                    let hover = hover.clone();
                    Callback::from(move |_: MouseEvent| hover.set(position))
                };
                html! {
                    <button
                        type="button"
                        class={star_class(star_filled(position, *hover, props.rating))}
                        onclick={on_click}
                        onmouseenter={on_enter}
                    >
                        {"★"}
                    </button>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_fills_from_the_left() {
        let lit: Vec<bool> = (1..=MAX_STARS).map(|p| star_filled(p, 0, 3)).collect();
        assert_eq!(lit, vec![true, true, true, false, false]);
    }

    #[test]
    fn hover_previews_over_rating() {
        assert!(star_filled(5, 5, 1));
        assert!(!star_filled(3, 2, 4));
    }

    #[test]
    fn unrated_is_dark() {
        assert!((1..=MAX_STARS).all(|p| !star_filled(p, 0, 0)));
    }
}
