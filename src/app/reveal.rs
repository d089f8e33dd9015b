use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::reveal::VisibilityAnimator;
use crate::section::Section;

/// Shared by every section on the page.
#[derive(Clone, Copy)]
pub struct RevealContext {
    animator: StoredValue<VisibilityAnimator>,
    threshold: f64,
}

pub fn provide_reveal_context(threshold: f64) {
    provide_context(RevealContext {
        animator: StoredValue::new(VisibilityAnimator::new()),
        threshold,
    });
}

pub fn reveal_class(revealed: bool) -> &'static str {
    if revealed {
        "animate-fade-in"
    } else {
        "reveal-hidden opacity-0 transition-opacity duration-1000"
    }
}

/// Watches `target` and flips the returned signal to true the first time
/// enough of it is on screen.
pub fn use_reveal(section: Section, target: NodeRef<html::Section>) -> Signal<bool> {
    let RevealContext {
        animator,
        threshold,
    } = expect_context::<RevealContext>();
    let revealed = RwSignal::new(false);

    let Some(sub) = animator.try_update_value(|a| a.register_with_threshold(section, threshold))
    else {
        // nothing to observe with, never leave content hidden
        revealed.set(true);
        return revealed.into();
    };

    let UseIntersectionObserverReturn { is_supported, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if revealed.try_get_untracked().unwrap_or(true) {
                return;
            }
            let intersecting = entries.iter().any(|entry| entry.is_intersecting());
            let fraction = entries
                .iter()
                .filter(|entry| entry.is_intersecting())
                .map(|entry| entry.intersection_ratio())
                .fold(0.0, f64::max);
            if animator
                .try_update_value(|a| a.on_intersection(&sub, intersecting, fraction))
                .unwrap_or(false)
            {
                revealed.try_set(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    Effect::new(move |_| {
        if !is_supported.get_untracked()
            && animator
                .try_update_value(|a| a.force_visible(&sub))
                .unwrap_or(true)
        {
            log::warn!("IntersectionObserver unavailable, showing {section} without animation");
            revealed.set(true);
        }
    });

    on_cleanup(move || {
        animator.try_update_value(|a| a.unregister(&sub));
    });

    revealed.into()
}

/// A page section that fades in once it scrolls into view.
#[component]
pub fn RevealSection(
    section: Section,
    #[prop(into)] class: Signal<String>,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section, target);
    view! {
        <section
            id=section.id()
            node_ref=target
            class=move || format!("{} {}", class.get(), reveal_class(revealed.get()))
        >
            {children()}
        </section>
    }
}
