use log::info;
use yew::prelude::*;

use crate::carousel::binding::{dot_class, slide_class};
use crate::carousel::navigator::{NavAction, Navigator, Step};
use crate::content::{project_catalog, Project, ProjectKind};

/// `03 / 04` style counter under the gallery.
pub fn counter_label(visible_index: Option<usize>, len: usize) -> String {
    match visible_index {
        Some(index) => format!("{:02} / {:02}", index + 1, len),
        None => String::from("00 / 00"),
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "filter-tab active"
    } else {
        "filter-tab"
    }
}

#[derive(Properties, PartialEq)]
struct ProjectSlideProps {
    project: Project,
    class: &'static str,
}

#[function_component(ProjectSlide)]
fn project_slide(props: &ProjectSlideProps) -> Html {
    let project = &props.project;
    html! {
        <div class={props.class}>
            <div class="project-image">
                <img src={project.image.clone()} alt={project.title.clone()} />
            </div>
            <div class="project-meta">
                <span class="project-category">{&project.category}</span>
                <h3 class="project-title">{&project.title}</h3>
                {
                    match &project.link {
                        Some(link) => html! {
                            <a href={link.clone()} target="_blank" rel="noopener noreferrer" class="project-link">
                                {"View Live Site ↗"}
                            </a>
                        },
                        None => html! {
                            <span class="project-link pending">{"In Progress"}</span>
                        },
                    }
                }
            </div>
        </div>
    }
}

#[function_component(Work)]
pub fn work() -> Html {
    let navigator = use_reducer(|| Navigator::new(project_catalog(), ProjectKind::Client));
    let snapshot = navigator.snapshot();

    let on_prev = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.dispatch(NavAction::Paginate(Step::Prev)))
    };
    let on_next = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.dispatch(NavAction::Paginate(Step::Next)))
    };

    html! {
        <section id="work" class="work-section">
            <style>{WORK_CSS}</style>
            <div class="work-header">
                <h2>{"Selected Work"}</h2>
                <div class="filter-tabs">
                    { for ProjectKind::ALL.iter().map(|&kind| {
                        let on_select = {
                            let navigator = navigator.clone();
                            Callback::from(move |_: MouseEvent| {
                                info!("Showing {}", kind.label());
                                navigator.dispatch(NavAction::SetGroup(kind));
                            })
                        };
                        html! {
                            <button
                                key={kind.label()}
                                class={tab_class(*snapshot.active_group == kind)}
                                onclick={on_select}
                            >
                                {kind.label()}
                            </button>
                        }
                    }) }
                </div>
            </div>
            {
                if snapshot.current_entry.is_none() {
                    html! {
                        <div class="work-empty">
                            <p>{"Nothing to show in this category yet."}</p>
                        </div>
                    }
                } else {
                    html! {
                        <>
                        <div class="work-stage">
                            <button class="carousel-arrow prev" onclick={on_prev} aria-label="Previous project">{"←"}</button>
                            <div class="slides">
                                { for navigator.visible_entries().enumerate().map(|(position, entry)| html! {
                                    <ProjectSlide
                                        key={entry.id.clone()}
                                        project={entry.item.clone()}
                                        class={slide_class(position, snapshot.visible_index, snapshot.last_direction)}
                                    />
                                }) }
                            </div>
                            <button class="carousel-arrow next" onclick={on_next} aria-label="Next project">{"→"}</button>
                        </div>
                        <div class="carousel-footer">
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
                                            aria-label={format!("Go to project {}", position + 1)}
                                        />
                                    }
                                }) }
                            </div>
                            <span class="carousel-counter">{counter_label(snapshot.visible_index, snapshot.len)}</span>
                        </div>
                        </>
                    }
                }
            }
        </section>
    }
}

const WORK_CSS: &str = r#"
    .work-section {
        padding: 7rem 1.5rem;
        background: #121212;
        color: #fff;
    }
    .work-header {
        max-width: 72rem;
        margin: 0 auto 3rem;
        display: flex;
        justify-content: space-between;
        align-items: flex-end;
        flex-wrap: wrap;
        gap: 1.5rem;
    }
    .work-header h2 {
        font-size: 3rem;
        margin: 0;
    }
    .filter-tabs {
        display: flex;
        gap: 0.5rem;
        padding: 0.25rem;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.05);
    }
    .filter-tab {
        padding: 0.5rem 1.25rem;
        border: none;
        border-radius: 9999px;
        background: transparent;
        color: #9ca3af;
        font-weight: 600;
        transition: background 0.3s ease, color 0.3s ease;
    }
    .filter-tab.active {
        background: #10b981;
        color: #fff;
    }
    .work-stage {
        max-width: 72rem;
        margin: 0 auto;
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .work-stage .slides {
        flex: 1;
    }
    .project-image img {
        width: 100%;
        aspect-ratio: 16 / 9;
        object-fit: cover;
        border-radius: 1rem;
    }
    .project-meta {
        margin-top: 1.5rem;
    }
    .project-category {
        color: #34d399;
        font-size: 0.875rem;
        text-transform: uppercase;
        letter-spacing: 0.1em;
    }
    .project-title {
        font-size: 2rem;
        margin: 0.5rem 0 1rem;
    }
    .project-link {
        color: #fff;
        font-weight: 600;
        text-decoration: none;
        border-bottom: 1px solid #10b981;
    }
    .project-link.pending {
        color: #6b7280;
        border-color: transparent;
    }
    .work-empty {
        max-width: 72rem;
        margin: 0 auto;
        padding: 4rem;
        text-align: center;
        color: #6b7280;
        border: 1px dashed #374151;
        border-radius: 1rem;
    }
    .carousel-footer {
        max-width: 72rem;
        margin: 2rem auto 0;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .carousel-counter {
        color: #6b7280;
        font-variant-numeric: tabular-nums;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_is_one_based_and_padded() {
        assert_eq!(counter_label(Some(0), 4), "01 / 04");
        assert_eq!(counter_label(Some(3), 4), "04 / 04");
        assert_eq!(counter_label(Some(9), 12), "10 / 12");
    }

    #[test]
    fn counter_for_empty_view() {
        assert_eq!(counter_label(None, 0), "00 / 00");
    }

    #[test]
    fn active_tab_is_highlighted() {
        assert_eq!(tab_class(true), "filter-tab active");
        assert_eq!(tab_class(false), "filter-tab");
    }
}
