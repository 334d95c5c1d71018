//! Minimal focus capability set and the drawer's Tab focus trap.

/// Selector for elements that can take keyboard focus inside the drawer.
pub const FOCUSABLE_SELECTOR: &str =
    "a,button,input,select,textarea,[tabindex]:not([tabindex=\"-1\"])";

/// An element that can receive focus. Equality is element identity.
pub trait Focusable: PartialEq {
    fn focus(&self);
    fn is_disabled(&self) -> bool;
    /// Still attached to the document (focus restore skips detached elements).
    fn is_connected(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabDirection {
    Forward,
    Backward,
}

impl TabDirection {
    pub fn from_shift(shift: bool) -> Self {
        if shift {
            Self::Backward
        } else {
            Self::Forward
        }
    }
}

/// Decide where a Tab press should land when focus is confined to `candidates`.
///
/// Returns the index the caller should focus (suppressing the browser's own
/// focus move), or `None` when there is no enabled candidate and the key is
/// left to the browser. Disabled candidates are skipped.
pub fn trap_tab<F: Focusable>(
    candidates: &[F],
    current: Option<&F>,
    direction: TabDirection,
) -> Option<usize> {
    let enabled: Vec<usize> = candidates
        .iter()
        .enumerate()
        .filter(|(_, el)| !el.is_disabled())
        .map(|(idx, _)| idx)
        .collect();

    let (&first, &last) = (enabled.first()?, enabled.last()?);

    let position = current.and_then(|cur| enabled.iter().position(|&idx| &candidates[idx] == cur));

    match (position, direction) {
        (None, TabDirection::Forward) => Some(first),
        (None, TabDirection::Backward) => Some(last),
        (Some(pos), TabDirection::Forward) if enabled[pos] == last => Some(first),
        (Some(pos), TabDirection::Backward) if enabled[pos] == first => Some(last),
        (Some(pos), TabDirection::Forward) => Some(enabled[pos + 1]),
        (Some(pos), TabDirection::Backward) => Some(enabled[pos - 1]),
    }
}


#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::testing::{FakeDocument, FakeElement};
    use super::*;

    fn elements(doc: &Rc<FakeDocument>) -> Vec<FakeElement> {
        vec![
            FakeElement::new(doc, 1),
            FakeElement::new(doc, 2).disabled(),
            FakeElement::new(doc, 3),
            FakeElement::new(doc, 4),
        ]
    }

    #[test]
    fn forward_past_last_wraps_to_first() {
        let doc = Rc::new(FakeDocument::default());
        let els = elements(&doc);
        assert_eq!(trap_tab(&els, Some(&els[3]), TabDirection::Forward), Some(0));
    }

    #[test]
    fn backward_past_first_wraps_to_last() {
        let doc = Rc::new(FakeDocument::default());
        let els = elements(&doc);
        assert_eq!(trap_tab(&els, Some(&els[0]), TabDirection::Backward), Some(3));
    }

    #[test]
    fn disabled_elements_are_skipped() {
        let doc = Rc::new(FakeDocument::default());
        let els = elements(&doc);
        assert_eq!(trap_tab(&els, Some(&els[0]), TabDirection::Forward), Some(2));
        assert_eq!(trap_tab(&els, Some(&els[2]), TabDirection::Backward), Some(0));
    }

    #[test]
    fn focus_outside_the_set_is_pulled_back_in() {
        let doc = Rc::new(FakeDocument::default());
        let els = elements(&doc);
        let stray = FakeElement::new(&doc, 99);
        assert_eq!(trap_tab(&els, Some(&stray), TabDirection::Forward), Some(0));
        assert_eq!(trap_tab(&els, None, TabDirection::Backward), Some(3));
    }

    #[test]
    fn empty_or_all_disabled_set_leaves_focus_alone() {
        let doc = Rc::new(FakeDocument::default());
        let none: Vec<FakeElement> = Vec::new();
        assert_eq!(trap_tab(&none, None, TabDirection::Forward), None);

        let all_disabled = vec![FakeElement::new(&doc, 1).disabled()];
        assert_eq!(trap_tab(&all_disabled, None, TabDirection::Forward), None);
    }

    #[test]
    fn repeated_tabbing_never_leaves_the_enabled_set() {
        let doc = Rc::new(FakeDocument::default());
        let els = elements(&doc);
        for direction in [TabDirection::Forward, TabDirection::Backward] {
            let mut current = 0usize;
            for _ in 0..10 {
                let next = trap_tab(&els, Some(&els[current]), direction).unwrap();
                assert!(!els[next].is_disabled());
                current = next;
            }
        }
    }
}
