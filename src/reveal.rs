//! One-shot reveal state for page sections.
//!
//! Each section registers when it mounts and starts out hidden. The first
//! report that it intersects the viewport with a fraction at or above its
//! threshold makes it visible for good.
//! Reports for a removed subscription are ignored, so a late event can never
//! reveal a section that is already gone.

use std::collections::HashMap;

use crate::config::DEFAULT_REVEAL_THRESHOLD;
use crate::section::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionVisibility {
    #[default]
    Hidden,
    Visible,
}

impl SectionVisibility {
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }
}

/// Handle returned by [`VisibilityAnimator::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    id: u64,
    section: Section,
}

#[derive(Debug, Clone)]
struct Observed {
    threshold: f64,
    state: SectionVisibility,
}

#[derive(Debug, Clone, Default)]
pub struct VisibilityAnimator {
    next_id: u64,
    observed: HashMap<u64, Observed>,
}

impl VisibilityAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking `section` with the default threshold.
    pub fn register(&mut self, section: Section) -> Subscription {
        self.register_with_threshold(section, DEFAULT_REVEAL_THRESHOLD)
    }

    pub fn register_with_threshold(&mut self, section: Section, threshold: f64) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.observed.insert(
            id,
            Observed {
                threshold: threshold.clamp(0.0, 1.0),
                state: SectionVisibility::Hidden,
            },
        );
        log::debug!("observing section {section} (threshold {threshold})");
        Subscription { id, section }
    }

    /// Feeds one intersection report. Returns true only on the hidden to visible transition.
    ///
    /// A report for a section outside the viewport never reveals it, even
    /// with a zero threshold.
    pub fn on_intersection(
        &mut self,
        sub: &Subscription,
        intersecting: bool,
        visible_fraction: f64,
    ) -> bool {
        let Some(observed) = self.observed.get_mut(&sub.id) else {
            return false;
        };
        if observed.state.is_visible() || !intersecting || visible_fraction < observed.threshold {
            return false;
        }
        observed.state = SectionVisibility::Visible;
        log::debug!("revealed section {} at {visible_fraction:.2}", sub.section);
        true
    }

    /// Reveals a section that cannot be observed. Returns true if it was hidden.
    pub fn force_visible(&mut self, sub: &Subscription) -> bool {
        match self.observed.get_mut(&sub.id) {
            Some(observed) if !observed.state.is_visible() => {
                observed.state = SectionVisibility::Visible;
                log::debug!("revealed section {} without observation", sub.section);
                true
            }
            _ => false,
        }
    }

    /// Stops tracking. Safe in either state; returns the state the section ended in.
    pub fn unregister(&mut self, sub: &Subscription) -> Option<SectionVisibility> {
        let removed = self.observed.remove(&sub.id).map(|o| o.state);
        if removed.is_some() {
            log::debug!("stopped observing section {}", sub.section);
        }
        removed
    }
}

#[cfg(test)]
impl VisibilityAnimator {
    /// Current state, or `None` once the subscription has been removed.
    pub fn visibility(&self, sub: &Subscription) -> Option<SectionVisibility> {
        self.observed.get(&sub.id).map(|o| o.state)
    }

    pub fn is_visible(&self, sub: &Subscription) -> bool {
        self.visibility(sub).is_some_and(SectionVisibility::is_visible)
    }

    pub fn len(&self) -> usize {
        self.observed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }
}
