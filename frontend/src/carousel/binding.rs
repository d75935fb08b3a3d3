use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use super::navigator::{Direction, NavAction, Navigator, Step};

impl<G, T> Reducible for Navigator<G, T>
where
    G: Clone + PartialEq + std::fmt::Debug + 'static,
    T: 'static,
{
    type Action = NavAction<G>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        debug!("navigator action: {:?}", action);
        let mut next = (*self).clone();
        next.apply(action);
        // Returning the same Rc skips the re-render for no-ops
        if next.same_state(&self) {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// CSS classes for the slide at `position` in the filtered view.
pub fn slide_class(position: usize, visible_index: Option<usize>, direction: Direction) -> &'static str {
    match visible_index {
        Some(current) if position == current => match direction {
            Direction::Forward => "slide active enter-forward",
            Direction::Backward => "slide active enter-backward",
            Direction::Still => "slide active",
        },
        Some(current) if position < current => "slide before",
        Some(_) => "slide after",
        None => "slide",
    }
}

pub fn dot_class(position: usize, visible_index: Option<usize>) -> &'static str {
    if visible_index == Some(position) {
        "carousel-dot active"
    } else {
        "carousel-dot"
    }
}

/// Advances the navigator every `period_ms` while `enabled`.
/// The interval is dropped on unmount or when the inputs change.
#[hook]
pub fn use_auto_advance<G, T>(
    dispatcher: UseReducerDispatcher<Navigator<G, T>>,
    enabled: bool,
    period_ms: u32,
) where
    G: Clone + PartialEq + std::fmt::Debug + 'static,
    T: 'static,
{
    use_effect_with_deps(
        move |&(enabled, period_ms)| {
            let interval = enabled.then(|| {
                Interval::new(period_ms, move || {
                    dispatcher.dispatch(NavAction::Paginate(Step::Next));
                })
            });
            move || drop(interval)
        },
        (enabled, period_ms),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::catalog::{Catalog, Entry};

    #[test]
    fn active_slide_carries_enter_direction() {
        assert_eq!(slide_class(2, Some(2), Direction::Forward), "slide active enter-forward");
        assert_eq!(slide_class(2, Some(2), Direction::Backward), "slide active enter-backward");
        assert_eq!(slide_class(0, Some(0), Direction::Still), "slide active");
    }

    #[test]
    fn inactive_slides_sit_before_or_after() {
        assert_eq!(slide_class(0, Some(2), Direction::Forward), "slide before");
        assert_eq!(slide_class(3, Some(2), Direction::Forward), "slide after");
        assert_eq!(slide_class(0, None, Direction::Still), "slide");
    }

    #[test]
    fn only_current_dot_is_active() {
        assert_eq!(dot_class(1, Some(1)), "carousel-dot active");
        assert_eq!(dot_class(0, Some(1)), "carousel-dot");
        assert_eq!(dot_class(0, None), "carousel-dot");
    }

    #[test]
    fn reduce_keeps_rc_for_noops() {
        let catalog = Catalog::new(vec![Entry::new("a", (), 1), Entry::new("b", (), 2)]).unwrap();
        let nav = Rc::new(Navigator::new(catalog, ()));

        let same = Rc::clone(&nav).reduce(NavAction::GoTo(9));
        assert!(Rc::ptr_eq(&nav, &same));

        let moved = Rc::clone(&nav).reduce(NavAction::Paginate(Step::Next));
        assert!(!Rc::ptr_eq(&nav, &moved));
        assert_eq!(moved.visible_index(), Some(1));
    }
}
