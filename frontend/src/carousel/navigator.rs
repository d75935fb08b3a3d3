//! Circular navigation over the filtered view of a [`Catalog`].
//!
//! The index always refers to the entries whose group matches the active
//! group, never to raw catalog positions. Every operation is total: an
//! empty view, a stale index or an unknown group never panic.

use super::catalog::{Catalog, Entry};

/// Direction of the last move. Only used to pick a transition animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Backward,
    #[default]
    Still,
    Forward,
}

impl Direction {
    /// sign(to - from)
    pub fn between(from: usize, to: usize) -> Self {
        match to.cmp(&from) {
            std::cmp::Ordering::Less => Direction::Backward,
            std::cmp::Ordering::Equal => Direction::Still,
            std::cmp::Ordering::Greater => Direction::Forward,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Prev,
    Next,
}

impl From<Step> for Direction {
    fn from(step: Step) -> Self {
        match step {
            Step::Prev => Direction::Backward,
            Step::Next => Direction::Forward,
        }
    }
}

/// Input events the presentation layer can send.
#[derive(Debug, Clone, PartialEq)]
pub enum NavAction<G> {
    Paginate(Step),
    GoTo(usize),
    SetGroup(G),
}

/// Read-only view handed to the presentation layer after each transition.
#[derive(Debug)]
pub struct Snapshot<'a, G, T> {
    pub active_group: &'a G,
    pub current_entry: Option<&'a Entry<G, T>>,
    pub visible_index: Option<usize>,
    pub len: usize,
    pub last_direction: Direction,
}

#[derive(Debug)]
pub struct Navigator<G, T> {
    catalog: Catalog<G, T>,
    active_group: G,
    // catalog positions of the filtered view
    visible: Vec<usize>,
    visible_index: Option<usize>,
    last_direction: Direction,
}

impl<G: Clone + PartialEq, T> Navigator<G, T> {
    pub fn new(catalog: Catalog<G, T>, default_group: G) -> Self {
        let visible = catalog.positions_in(&default_group);
        let visible_index = (!visible.is_empty()).then_some(0);
        Self {
            catalog,
            active_group: default_group,
            visible,
            visible_index,
            last_direction: Direction::Still,
        }
    }

    pub fn paginate(&mut self, step: Step) {
        let len = self.visible.len();
        let Some(index) = self.visible_index else {
            return;
        };
        if len == 0 {
            return;
        }
        self.last_direction = step.into();
        self.visible_index = Some(match step {
            Step::Next => (index + 1) % len,
            Step::Prev => (index + len - 1) % len,
        });
    }

    /// Out-of-range targets are ignored: they only come from stale UI
    /// references after a filter change.
    pub fn go_to_index(&mut self, target: usize) {
        let Some(index) = self.visible_index else {
            return;
        };
        if target >= self.visible.len() {
            return;
        }
        self.last_direction = Direction::between(index, target);
        self.visible_index = Some(target);
    }

    /// Switching groups always restarts at the first entry of the new view.
    pub fn set_group(&mut self, group: G) {
        if group == self.active_group {
            return;
        }
        self.visible = self.catalog.positions_in(&group);
        self.visible_index = (!self.visible.is_empty()).then_some(0);
        self.active_group = group;
        self.last_direction = Direction::Still;
    }

    pub fn apply(&mut self, action: NavAction<G>) {
        match action {
            NavAction::Paginate(step) => self.paginate(step),
            NavAction::GoTo(target) => self.go_to_index(target),
            NavAction::SetGroup(group) => self.set_group(group),
        }
    }

    pub fn current_entry(&self) -> Option<&Entry<G, T>> {
        let position = *self.visible.get(self.visible_index?)?;
        self.catalog.entries().get(position)
    }

    pub fn visible_entries(&self) -> impl Iterator<Item = &Entry<G, T>> + '_ {
        let entries = self.catalog.entries();
        self.visible.iter().filter_map(move |&position| entries.get(position))
    }

    pub fn snapshot(&self) -> Snapshot<'_, G, T> {
        Snapshot {
            active_group: &self.active_group,
            current_entry: self.current_entry(),
            visible_index: self.visible_index,
            len: self.visible.len(),
            last_direction: self.last_direction,
        }
    }

    /// Same group, index and direction.
    pub fn same_state(&self, other: &Self) -> bool {
        self.active_group == other.active_group
            && self.visible_index == other.visible_index
            && self.last_direction == other.last_direction
    }
}

// Components read state through `snapshot`; these are for assertions.
#[cfg(test)]
impl<G, T> Navigator<G, T> {
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn active_group(&self) -> &G {
        &self.active_group
    }

    pub fn visible_index(&self) -> Option<usize> {
        self.visible_index
    }

    pub fn last_direction(&self) -> Direction {
        self.last_direction
    }
}

impl<G: Clone, T> Clone for Navigator<G, T> {
    fn clone(&self) -> Self {
        Self {
            catalog: self.catalog.clone(),
            active_group: self.active_group.clone(),
            visible: self.visible.clone(),
            visible_index: self.visible_index,
            last_direction: self.last_direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Kind {
        Client,
        Demo,
        Archived,
    }

    // 4 client + 4 demo entries, interleaved so raw and filtered indices differ
    fn mixed_catalog() -> Catalog<Kind, u32> {
        let entries = (0..8)
            .map(|n| {
                let kind = if n % 2 == 0 { Kind::Client } else { Kind::Demo };
                Entry::new(format!("p{}", n), kind, n)
            })
            .collect();
        Catalog::new(entries).unwrap()
    }

    fn navigator() -> Navigator<Kind, u32> {
        Navigator::new(mixed_catalog(), Kind::Client)
    }

    #[test]
    fn starts_at_first_entry_of_default_group() {
        let nav = navigator();
        assert_eq!(nav.visible_index(), Some(0));
        assert_eq!(nav.len(), 4);
        assert_eq!(nav.last_direction(), Direction::Still);
        assert_eq!(nav.current_entry().map(|e| e.id.as_str()), Some("p0"));
    }

    #[test]
    fn scenario_a_forward_wraps_after_last() {
        let mut nav = navigator();
        let mut seen = vec![nav.visible_index()];
        for _ in 0..3 {
            nav.paginate(Step::Next);
            seen.push(nav.visible_index());
        }
        assert_eq!(seen, vec![Some(0), Some(1), Some(2), Some(3)]);

        nav.paginate(Step::Next);
        assert_eq!(nav.visible_index(), Some(0));
        assert_eq!(nav.last_direction(), Direction::Forward);
    }

    #[test]
    fn scenario_b_group_switch_resets_index() {
        let mut nav = navigator();
        nav.go_to_index(2);
        nav.set_group(Kind::Demo);
        assert_eq!(nav.active_group(), &Kind::Demo);
        assert_eq!(nav.visible_index(), Some(0));
        assert_eq!(nav.last_direction(), Direction::Still);
        assert_eq!(nav.current_entry().map(|e| e.id.as_str()), Some("p1"));
    }

    #[test]
    fn scenario_c_single_entry_wraps_onto_itself() {
        let catalog = Catalog::new(vec![
            Entry::new("only", Kind::Client, 1),
            Entry::new("other", Kind::Demo, 2),
        ])
        .unwrap();
        let mut nav = Navigator::new(catalog, Kind::Client);
        nav.paginate(Step::Next);
        assert_eq!(nav.visible_index(), Some(0));
        nav.paginate(Step::Prev);
        assert_eq!(nav.visible_index(), Some(0));
        assert_eq!(nav.current_entry().map(|e| e.item), Some(1));
    }

    #[test]
    fn scenario_d_empty_group_has_no_current_entry() {
        let mut nav = navigator();
        nav.set_group(Kind::Archived);
        assert!(nav.current_entry().is_none());
        assert_eq!(nav.visible_index(), None);

        nav.paginate(Step::Next);
        nav.paginate(Step::Prev);
        nav.go_to_index(0);
        assert_eq!(nav.visible_index(), None);
        assert_eq!(nav.last_direction(), Direction::Still);
    }

    #[test]
    fn empty_default_group_starts_without_index() {
        let nav = Navigator::new(Catalog::<Kind, u32>::empty(), Kind::Client);
        assert!(nav.is_empty());
        assert_eq!(nav.visible_index(), None);
        assert!(nav.snapshot().current_entry.is_none());
    }

    #[test]
    fn prev_from_first_wraps_to_last() {
        let mut nav = navigator();
        nav.paginate(Step::Prev);
        assert_eq!(nav.visible_index(), Some(3));
        assert_eq!(nav.last_direction(), Direction::Backward);
        assert_eq!(nav.current_entry().map(|e| e.id.as_str()), Some("p6"));
    }

    #[test]
    fn go_to_index_records_direction() {
        let mut nav = navigator();
        nav.go_to_index(3);
        assert_eq!(nav.last_direction(), Direction::Forward);
        nav.go_to_index(1);
        assert_eq!(nav.last_direction(), Direction::Backward);
        nav.go_to_index(1);
        assert_eq!(nav.last_direction(), Direction::Still);
        assert_eq!(nav.visible_index(), Some(1));
    }

    #[test]
    fn stale_index_after_filter_change_is_ignored() {
        let catalog = Catalog::new(vec![
            Entry::new("c1", Kind::Client, 1),
            Entry::new("c2", Kind::Client, 2),
            Entry::new("c3", Kind::Client, 3),
            Entry::new("d1", Kind::Demo, 4),
        ])
        .unwrap();
        let mut nav = Navigator::new(catalog, Kind::Client);
        nav.go_to_index(2);
        nav.set_group(Kind::Demo);

        let before = nav.clone();
        nav.go_to_index(2);
        assert!(nav.same_state(&before));
        assert_eq!(nav.current_entry().map(|e| e.id.as_str()), Some("d1"));
    }

    #[test]
    fn same_group_is_a_true_noop() {
        let mut nav = navigator();
        nav.paginate(Step::Next);
        nav.paginate(Step::Next);
        nav.set_group(Kind::Client);
        assert_eq!(nav.visible_index(), Some(2));
        assert_eq!(nav.last_direction(), Direction::Forward);
    }

    #[test]
    fn reset_happens_even_when_old_index_fits() {
        let mut nav = navigator();
        nav.go_to_index(1);
        nav.set_group(Kind::Demo);
        nav.go_to_index(1);
        nav.set_group(Kind::Client);
        assert_eq!(nav.visible_index(), Some(0));
    }

    #[test]
    fn apply_routes_actions() {
        let mut nav = navigator();
        nav.apply(NavAction::Paginate(Step::Next));
        nav.apply(NavAction::GoTo(3));
        assert_eq!(nav.visible_index(), Some(3));
        nav.apply(NavAction::SetGroup(Kind::Demo));
        assert_eq!(nav.active_group(), &Kind::Demo);
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut nav = navigator();
        nav.paginate(Step::Next);
        let snapshot = nav.snapshot();
        assert_eq!(snapshot.active_group, &Kind::Client);
        assert_eq!(snapshot.visible_index, Some(1));
        assert_eq!(snapshot.len, 4);
        assert_eq!(snapshot.last_direction, Direction::Forward);
        assert_eq!(snapshot.current_entry.map(|e| e.item), Some(2));
    }

    #[test]
    fn visible_entries_follow_catalog_order() {
        let mut nav = navigator();
        nav.set_group(Kind::Demo);
        let ids: Vec<_> = nav.visible_entries().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p3", "p5", "p7"]);
    }

    #[test]
    fn steps_map_to_directions() {
        assert_eq!(Direction::from(Step::Prev), Direction::Backward);
        assert_eq!(Direction::from(Step::Next), Direction::Forward);
        assert_eq!(Direction::default(), Direction::Still);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn catalog_from(groups: &[u8]) -> Catalog<u8, usize> {
        let entries = groups
            .iter()
            .enumerate()
            .map(|(n, &group)| Entry::new(format!("e{}", n), group, n))
            .collect();
        Catalog::new(entries).unwrap()
    }

    fn action_strategy() -> impl Strategy<Value = NavAction<u8>> {
        prop_oneof![
            Just(NavAction::Paginate(Step::Prev)),
            Just(NavAction::Paginate(Step::Next)),
            (0usize..12).prop_map(NavAction::GoTo),
            (0u8..4).prop_map(NavAction::SetGroup),
        ]
    }

    fn index_in_bounds(nav: &Navigator<u8, usize>) -> bool {
        match nav.visible_index() {
            Some(index) => index < nav.len(),
            None => nav.is_empty(),
        }
    }

    proptest! {
        #[test]
        fn every_reachable_state_is_consistent(
            groups in prop::collection::vec(0u8..3, 0..10),
            start in 0u8..4,
            actions in prop::collection::vec(action_strategy(), 0..40),
        ) {
            let mut nav = Navigator::new(catalog_from(&groups), start);
            prop_assert!(index_in_bounds(&nav));
            for action in actions {
                nav.apply(action);
                prop_assert!(index_in_bounds(&nav));
                let current = nav.current_entry().map(|e| e.group);
                prop_assert!(current.map_or(nav.is_empty(), |g| g == *nav.active_group()));
            }
        }

        #[test]
        fn n_steps_forward_closes_the_cycle(len in 1usize..9, start in 0usize..9) {
            let mut nav = Navigator::new(catalog_from(&vec![0; len]), 0);
            nav.go_to_index(start % len);
            let origin = nav.visible_index();
            for _ in 0..len {
                nav.paginate(Step::Next);
            }
            prop_assert_eq!(nav.visible_index(), origin);
        }

        #[test]
        fn prev_then_next_is_identity(len in 1usize..9, start in 0usize..9) {
            let mut nav = Navigator::new(catalog_from(&vec![0; len]), 0);
            nav.go_to_index(start % len);
            let origin = nav.visible_index();
            nav.paginate(Step::Prev);
            nav.paginate(Step::Next);
            prop_assert_eq!(nav.visible_index(), origin);
        }

        #[test]
        fn wraparound_at_both_ends(len in 1usize..9) {
            let mut nav = Navigator::new(catalog_from(&vec![0; len]), 0);
            nav.paginate(Step::Prev);
            prop_assert_eq!(nav.visible_index(), Some(len - 1));
            nav.paginate(Step::Next);
            prop_assert_eq!(nav.visible_index(), Some(0));
        }

        #[test]
        fn out_of_range_jump_changes_nothing(
            groups in prop::collection::vec(0u8..2, 0..10),
            offset in 0usize..5,
            moves in 0usize..5,
        ) {
            let mut nav = Navigator::new(catalog_from(&groups), 0);
            for _ in 0..moves {
                nav.paginate(Step::Next);
            }
            let before = nav.clone();
            nav.go_to_index(nav.len() + offset);
            prop_assert!(nav.same_state(&before));
        }

        #[test]
        fn set_group_resets_or_is_idempotent(
            groups in prop::collection::vec(0u8..3, 0..10),
            target in 0u8..4,
            moves in 0usize..5,
        ) {
            let mut nav = Navigator::new(catalog_from(&groups), 0);
            for _ in 0..moves {
                nav.paginate(Step::Next);
            }
            let before = nav.clone();
            nav.set_group(target);
            if target == 0 {
                prop_assert!(nav.same_state(&before));
            } else {
                let expected = (!nav.is_empty()).then_some(0);
                prop_assert_eq!(nav.visible_index(), expected);
                prop_assert_eq!(nav.last_direction(), Direction::Still);
            }
        }
    }
}
