use leptos::prelude::*;

use super::reveal::RevealSection;
use crate::config::SiteConfig;
use crate::section::Section;
use crate::theme::{Theme, Tone};

#[component]
pub fn Hero(theme: Signal<Theme>, site: &'static SiteConfig) -> impl IntoView {
    view! {
        <RevealSection
            section=Section::Hero
            class=Signal::derive(move || {
                format!(
                    "min-h-screen flex items-center justify-center relative {}",
                    theme.get().section(Tone::Deep),
                )
            })
        >
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-16 md:py-24">
                <div class="max-w-3xl mx-auto text-center">
                    <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold mb-4 leading-tight">
                        <span class="relative inline-block">
                            <span class="relative z-10">{site.owner.clone()}</span>
                            <span class="absolute -bottom-2 left-0 right-0 w-full h-3 bg-blue-500 opacity-30 rounded"></span>
                        </span>
                    </h1>
                    <h2 class="text-2xl md:text-3xl lg:text-4xl font-light mb-8 text-blue-500">
                        {site.role.clone()}
                    </h2>
                    <p class=move || {
                        format!(
                            "text-lg md:text-xl mb-12 max-w-2xl mx-auto leading-relaxed {}",
                            theme.get().pick("text-gray-300", "text-gray-700"),
                        )
                    }>{site.tagline.clone()}</p>
                    <div class="flex flex-wrap justify-center gap-4">
                        <a
                            href=Section::Contact.href()
                            class="px-8 py-3 text-base font-medium rounded-lg bg-blue-500 text-white hover:bg-blue-600 transition-colors duration-300"
                        >
                            "Get in Touch"
                        </a>
                        <a
                            href=Section::Projects.href()
                            class=move || {
                                format!(
                                    "px-8 py-3 text-base font-medium rounded-lg border-2 transition-colors duration-300 {}",
                                    theme
                                        .get()
                                        .pick(
                                            "border-gray-700 hover:border-gray-600 text-white",
                                            "border-gray-300 hover:border-gray-400 text-gray-900",
                                        ),
                                )
                            }
                        >
                            "View Projects"
                        </a>
                    </div>
                </div>
            </div>
            <a
                href=Section::About.href()
                aria-label="Scroll down"
                class=move || {
                    format!(
                        "absolute bottom-8 left-1/2 transform -translate-x-1/2 flex flex-col items-center animate-bounce transition-colors {}",
                        theme.get().pick("text-gray-400 hover:text-white", "text-gray-500 hover:text-gray-900"),
                    )
                }
            >
                <span class="text-sm mb-2">"Scroll Down"</span>
                <i class="fas fa-arrow-down"></i>
            </a>
        </RevealSection>
    }
}
