use gloo_timers::callback::Timeout;
use log::{error, info};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::carousel::binding::{dot_class, slide_class, use_auto_advance};
use crate::carousel::catalog::{CatalogError, Entry};
use crate::carousel::navigator::{NavAction, Navigator, Step};
use crate::components::stars::{StarRating, StarRatingInput};
use crate::config;
use crate::content::{testimonial_catalog, Testimonial, TestimonialCatalog};
use crate::forms::ReviewDraft;

const REVIEW_SAVE_FAILED: &str = "Your review could not be added. Please try again.";

/// `catalog` with the review placed first under id `review-{serial}`.
pub fn with_review(
    catalog: &TestimonialCatalog,
    serial: u32,
    testimonial: Testimonial,
) -> Result<TestimonialCatalog, CatalogError> {
    catalog.prepend(Entry::new(format!("review-{}", serial), (), testimonial))
}

#[derive(Properties, PartialEq)]
struct CarouselProps {
    catalog: TestimonialCatalog,
}

#[function_component(TestimonialCarousel)]
fn testimonial_carousel(props: &CarouselProps) -> Html {
    let navigator = {
        let catalog = props.catalog.clone();
        use_reducer(move || Navigator::new(catalog, ()))
    };
    let snapshot = navigator.snapshot();

    use_auto_advance(
        navigator.dispatcher(),
        snapshot.len > 1,
        config::get_auto_advance_ms(),
    );

    if snapshot.current_entry.is_none() {
        return html! {
            <div class="testimonial-empty">
                <p>{"No reviews yet. Be the first to write one!"}</p>
            </div>
        };
    }

    let on_prev = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.dispatch(NavAction::Paginate(Step::Prev)))
    };
    let on_next = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.dispatch(NavAction::Paginate(Step::Next)))
    };

    html! {
        <div class="testimonial-carousel">
            <div class="slides">
                { for navigator.visible_entries().enumerate().map(|(position, entry)| {
                    let testimonial = &entry.item;
                    html! {
                        <figure key={entry.id.clone()} class={slide_class(position, snapshot.visible_index, snapshot.last_direction)}>
                            <StarRating rating={testimonial.rating} />
                            <blockquote class="testimonial-quote">{format!("“{}”", testimonial.quote)}</blockquote>
                            <figcaption class="testimonial-author">
                                <img class="testimonial-avatar" src={testimonial.avatar_src()} alt={testimonial.name.clone()} />
                                <div>
                                    <p class="author-name">{&testimonial.name}</p>
                                    <p class="author-company">{&testimonial.company}</p>
                                </div>
                            </figcaption>
                        </figure>
                    }
                }) }
            </div>
            <div class="carousel-controls">
                <button class="carousel-arrow prev" onclick={on_prev} aria-label="Previous review">{"←"}</button>
                <div class="carousel-dots">
                    { for (0..snapshot.len).map(|position| {
                        let on_dot = {
                            let navigator = navigator.clone();
                            Callback::from(move |_: MouseEvent| navigator.dispatch(NavAction::GoTo(position)))
                        };
                        html! {
                            <button
                                key={position}
                                class={dot_class(position, snapshot.visible_index)}
                                onclick={on_dot}
                                aria-label={format!("Go to review {}", position + 1)}
                            />
                        }
                    }) }
                </div>
                <button class="carousel-arrow next" onclick={on_next} aria-label="Next review">{"→"}</button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ReviewModalProps {
    open: bool,
    on_close: Callback<()>,
    // replies whether the review was stored
    on_submit: Callback<Testimonial, bool>,
}

#[function_component(ReviewModal)]
fn review_modal(props: &ReviewModalProps) -> Html {
    let draft = use_state(ReviewDraft::default);
    let error = use_state(|| None::<String>);
    let submitted = use_state(|| false);
    // auto-close after the thank-you panel; dropping it cancels the close
    let pending_close = use_mut_ref(|| None::<Timeout>);

    if !props.open {
        return html! {};
    }

    let on_name = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.name = input.value();
            draft.set(next);
        })
    };

    let on_review = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.review = input.value();
            draft.set(next);
        })
    };

    let on_rating = {
        let draft = draft.clone();
        Callback::from(move |rating: u8| {
            let mut next = (*draft).clone();
            next.rating = rating;
            draft.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let error = error.clone();
        let submitted = submitted.clone();
        let on_close = props.on_close.clone();
        let on_submit = props.on_submit.clone();
        let pending_close = pending_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let testimonial = match (*draft).clone().into_testimonial() {
                Ok(testimonial) => testimonial,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            if !on_submit.emit(testimonial) {
                error.set(Some(REVIEW_SAVE_FAILED.to_string()));
                return;
            }
            error.set(None);
            submitted.set(true);

            let draft = draft.clone();
            let submitted = submitted.clone();
            let on_close = on_close.clone();
            let timeout = Timeout::new(config::REVIEW_CLOSE_MS, move || {
                on_close.emit(());
                Timeout::new(config::REVIEW_RESET_MS, move || {
                    draft.set(ReviewDraft::default());
                    submitted.set(false);
                })
                .forget();
            });
            *pending_close.borrow_mut() = Some(timeout);
        })
    };

    let on_dismiss = {
        let draft = draft.clone();
        let error = error.clone();
        let submitted = submitted.clone();
        let on_close = props.on_close.clone();
        let pending_close = pending_close.clone();
        Callback::from(move |_: MouseEvent| {
            pending_close.borrow_mut().take();
            if *submitted {
                draft.set(ReviewDraft::default());
                submitted.set(false);
            }
            error.set(None);
            on_close.emit(());
        })
    };

    html! {
        <div class="modal-backdrop">
            <div class="review-modal">
                <button class="modal-close" onclick={on_dismiss} aria-label="Close">{"✕"}</button>
                {
                    if *submitted {
                        html! {
                            <div class="review-thanks">
                                <h3>{"Thank you!"}</h3>
                                <p>{"Your review has been added."}</p>
                            </div>
                        }
                    } else {
                        html! {
                            <form class="review-form" onsubmit={on_submit}>
                                <h3>{"Write a Review"}</h3>
                                <input
                                    type="text"
                                    placeholder="Your Name"
                                    value={draft.name.clone()}
                                    oninput={on_name}
                                />
                                <textarea
                                    rows="4"
                                    placeholder="Your Review"
                                    value={draft.review.clone()}
                                    oninput={on_review}
                                />
                                <StarRatingInput rating={draft.rating} on_change={on_rating} />
                                {
                                    if let Some(message) = &*error {
                                        html! { <p class="form-error">{message}</p> }
                                    } else {
                                        html! {}
                                    }
                                }
                                <button type="submit" class="hero-cta">{"Submit Review"}</button>
                            </form>
                        }
                    }
                }
            </div>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let catalog = use_state(testimonial_catalog);
    // bumped on every new review so the carousel restarts on the fresh catalog
    let version = use_state(|| 0u32);
    let modal_open = use_state(|| false);

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| modal_open.set(true))
    };

    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(false))
    };

    let add_review = {
        let catalog = catalog.clone();
        let version = version.clone();
        Callback::from(move |testimonial: Testimonial| {
            match with_review(&catalog, *version + 1, testimonial) {
                Ok(next) => {
                    info!("Added review, {} total", next.len());
                    catalog.set(next);
                    version.set(*version + 1);
                    true
                }
                Err(e) => {
                    error!("Failed to add review: {}", e);
                    false
                }
            }
        })
    };

    html! {
        <section id="testimonials" class="testimonials-section">
            <style>{TESTIMONIALS_CSS}</style>
            <div class="testimonials-header">
                <h2>{"What Clients Say"}</h2>
                <button class="hero-cta" onclick={open_modal}>{"Write a Review"}</button>
            </div>
            <TestimonialCarousel key={*version} catalog={(*catalog).clone()} />
            <ReviewModal open={*modal_open} on_close={close_modal} on_submit={add_review} />
        </section>
    }
}

const TESTIMONIALS_CSS: &str = r#"
    .testimonials-section {
        padding: 7rem 1.5rem;
        background: #f0eeeb;
        color: #1f2937;
    }
    .testimonials-header {
        max-width: 56rem;
        margin: 0 auto 3rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
        flex-wrap: wrap;
        gap: 1rem;
    }
    .testimonials-header h2 {
        font-size: 3rem;
        margin: 0;
    }
    .testimonial-carousel {
        max-width: 56rem;
        margin: 0 auto;
    }
    .testimonial-quote {
        margin: 1.5rem 0;
        font-size: 1.5rem;
        line-height: 1.6;
        color: #111827;
    }
    .testimonial-author {
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .testimonial-avatar {
        width: 3rem;
        height: 3rem;
        border-radius: 9999px;
        object-fit: cover;
    }
    .author-name {
        margin: 0;
        font-weight: 700;
    }
    .author-company {
        margin: 0;
        color: #6b7280;
    }
    .testimonial-empty {
        max-width: 56rem;
        margin: 0 auto;
        text-align: center;
        color: #6b7280;
    }
    .carousel-controls {
        margin-top: 2rem;
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 1.5rem;
    }
    .modal-backdrop {
        position: fixed;
        inset: 0;
        z-index: 100;
        display: flex;
        align-items: center;
        justify-content: center;
        background: rgba(0, 0, 0, 0.6);
        backdrop-filter: blur(4px);
    }
    .review-modal {
        position: relative;
        width: min(28rem, 90vw);
        padding: 2rem;
        border-radius: 1rem;
        background: #fff;
        color: #111827;
    }
    .modal-close {
        position: absolute;
        top: 1rem;
        right: 1rem;
        border: none;
        background: none;
        font-size: 1.25rem;
    }
    .review-form {
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .review-form input,
    .review-form textarea {
        padding: 0.75rem;
        border: 1px solid #d1d5db;
        border-radius: 0.5rem;
        font: inherit;
    }
    .review-thanks {
        text-align: center;
        padding: 2rem 0;
    }
    .form-error {
        margin: 0;
        color: #dc2626;
        font-size: 0.875rem;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::catalog::Catalog;

    fn review(name: &str) -> Testimonial {
        Testimonial {
            quote: "Lovely work".to_string(),
            name: name.to_string(),
            company: "Valued Client".to_string(),
            image: String::new(),
            rating: 5,
        }
    }

    #[test]
    fn new_review_goes_first() {
        let catalog = Catalog::new(vec![Entry::new("anita-sharma", (), review("Anita"))]).unwrap();
        let next = with_review(&catalog, 1, review("Ravi")).unwrap();
        assert_eq!(next.len(), 2);
        assert_eq!(next.entries()[0].id, "review-1");
        assert_eq!(next.entries()[0].item.name, "Ravi");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn clashing_review_id_is_rejected() {
        let catalog = Catalog::new(vec![Entry::new("review-1", (), review("Anita"))]).unwrap();
        assert_eq!(
            with_review(&catalog, 1, review("Ravi")),
            Err(CatalogError::DuplicateId("review-1".to_string()))
        );
    }
}
