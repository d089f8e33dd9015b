use leptos::prelude::*;

use super::reveal::RevealSection;
use crate::content::AboutContent;
use crate::section::Section;
use crate::theme::{Theme, Tone};

#[component]
pub fn About(theme: Signal<Theme>, about: &'static AboutContent) -> impl IntoView {
    let paragraph_count = about.paragraphs.len();
    view! {
        <RevealSection
            section=Section::About
            class=Signal::derive(move || format!("py-16 md:py-24 {}", theme.get().section(Tone::Base)))
        >
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="mb-12 text-center">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"About Me"</h2>
                    <div class="w-20 h-1 bg-blue-500 mx-auto"></div>
                </div>
                <div class="max-w-4xl mx-auto">
                    {about
                        .paragraphs
                        .iter()
                        .enumerate()
                        .map(|(i, text)| {
                            // the last paragraph sits on top of the cards
                            let spacing = if i + 1 == paragraph_count { "mb-12" } else { "mb-8" };
                            view! {
                                <p class=move || {
                                    format!(
                                        "text-lg leading-relaxed {spacing} {}",
                                        theme.get().pick("text-gray-300", "text-gray-700"),
                                    )
                                }>{text.clone()}</p>
                            }
                        })
                        .collect_view()}
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                        {about
                            .highlights
                            .iter()
                            .map(|item| {
                                view! {
                                    <div class=move || {
                                        format!(
                                            "p-6 rounded-lg text-center transition-transform hover:scale-105 {}",
                                            theme
                                                .get()
                                                .pick(
                                                    "bg-gray-700 hover:bg-gray-600",
                                                    "bg-gray-50 hover:bg-gray-100",
                                                ),
                                        )
                                    }>
                                        <div class="mb-4 flex justify-center text-blue-500 text-3xl">
                                            <i class=item.icon.clone()></i>
                                        </div>
                                        <h3 class="text-xl font-bold mb-2">{item.title.clone()}</h3>
                                        <p class=move || {
                                            theme.get().muted_text()
                                        }>{item.description.clone()}</p>
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
