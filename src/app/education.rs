use leptos::prelude::*;

use super::reveal::RevealSection;
use crate::content::EducationItem;
use crate::section::Section;
use crate::theme::{Theme, Tone};

/// Left/right placement classes for the `index`th timeline entry.
fn timeline_side(index: usize) -> (&'static str, &'static str) {
    if index % 2 == 0 {
        ("md:pr-12 md:text-right md:ml-0 md:mr-auto", "md:right-[-8px]")
    } else {
        ("md:pl-12 md:ml-auto md:mr-0", "md:left-[-8px]")
    }
}

#[component]
pub fn Education(theme: Signal<Theme>, items: &'static [EducationItem]) -> impl IntoView {
    view! {
        <RevealSection
            section=Section::Education
            class=Signal::derive(move || format!("py-16 md:py-24 {}", theme.get().section(Tone::Deep)))
        >
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="mb-12 text-center">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Education"</h2>
                    <div class="w-20 h-1 bg-blue-500 mx-auto"></div>
                </div>
                <div class="max-w-4xl mx-auto">
                    <div class="relative">
                        <div class=move || {
                            format!(
                                "absolute left-0 md:left-1/2 transform md:-translate-x-1/2 w-1 h-full {}",
                                theme.get().pick("bg-gray-700", "bg-gray-300"),
                            )
                        }></div>
                        {items
                            .iter()
                            .enumerate()
                            .map(|(index, item)| {
                                let (side, dot) = timeline_side(index);
                                view! {
                                    <div class=format!("mb-12 relative md:w-1/2 {side}")>
                                        <div class=move || {
                                            format!(
                                                "absolute left-0 md:left-auto {dot} top-5 w-4 h-4 rounded-full bg-blue-500 border-4 {}",
                                                theme.get().pick("border-gray-900", "border-gray-50"),
                                            )
                                        }></div>
                                        <div class=move || {
                                            format!(
                                                "p-6 rounded-lg shadow-md transition-transform hover:scale-105 ml-8 md:ml-0 {}",
                                                theme
                                                    .get()
                                                    .pick(
                                                        "bg-gray-800 hover:bg-gray-700",
                                                        "bg-white hover:bg-gray-100",
                                                    ),
                                            )
                                        }>
                                            <h3 class="text-xl font-bold mb-1">{item.heading()}</h3>
                                            <div class="flex items-center mb-2 text-sm text-blue-500 gap-1">
                                                <i class="fas fa-building"></i>
                                                <span>{item.institution.clone()}</span>
                                            </div>
                                            <div class=move || {
                                                format!(
                                                    "flex items-center mb-4 text-sm gap-1 {}",
                                                    theme.get().pick("text-gray-400", "text-gray-600"),
                                                )
                                            }>
                                                <i class="fas fa-calendar"></i>
                                                <span>{item.period()}</span>
                                                <span class="mx-2">"•"</span>
                                                <span>{item.location.clone()}</span>
                                            </div>
                                            <p class=move || {
                                                format!("text-sm {}", theme.get().muted_text())
                                            }>{item.description.clone()}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </RevealSection>
    }
}
