use leptos::prelude::*;

use super::reveal::RevealSection;
use crate::content::Certification;
use crate::section::Section;
use crate::theme::{Theme, Tone};

#[component]
pub fn Certifications(theme: Signal<Theme>, items: &'static [Certification]) -> impl IntoView {
    view! {
        <RevealSection
            section=Section::Certifications
            class=Signal::derive(move || format!("py-16 md:py-24 {}", theme.get().section(Tone::Deep)))
        >
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="mb-12 text-center">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Certifications"</h2>
                    <div class="w-20 h-1 bg-blue-500 mx-auto"></div>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 max-w-6xl mx-auto">
                    {items
                        .iter()
                        .map(|cert| {
                            view! {
                                <div class=move || {
                                    format!(
                                        "rounded-lg overflow-hidden shadow-md transition-all hover:shadow-lg {}",
                                        theme.get().pick("bg-gray-800 hover:bg-gray-700", "bg-white hover:bg-gray-50"),
                                    )
                                }>
                                    <div class="h-40 overflow-hidden">
                                        <img
                                            src=cert.logo.clone()
                                            alt=format!("{} logo", cert.organization)
                                            class="w-full h-full object-cover"
                                        />
                                    </div>
                                    <div class="p-6">
                                        <h3 class="text-lg font-bold mb-1">{cert.title.clone()}</h3>
                                        <div class=move || {
                                            format!("text-sm mb-2 {}", theme.get().pick("text-blue-400", "text-blue-600"))
                                        }>{cert.organization.clone()}</div>
                                        <div class=move || {
                                            format!(
                                                "flex items-center text-sm mb-3 gap-1 {}",
                                                theme.get().pick("text-gray-400", "text-gray-600"),
                                            )
                                        }>
                                            <i class="fas fa-calendar"></i>
                                            <span>{cert.date.clone()}</span>
                                        </div>
                                        <p class=move || {
                                            format!("text-sm mb-4 {}", theme.get().muted_text())
                                        }>{cert.description.clone()}</p>
                                        {cert
                                            .verification_url
                                            .clone()
                                            .map(|url| {
                                                view! {
                                                    <a
                                                        href=url
                                                        target="_blank"
                                                        rel="noopener noreferrer"
                                                        class=move || {
                                                            format!(
                                                                "inline-flex items-center gap-1 text-sm font-medium {}",
                                                                theme
                                                                    .get()
                                                                    .pick(
                                                                        "text-blue-400 hover:text-blue-300",
                                                                        "text-blue-600 hover:text-blue-700",
                                                                    ),
                                                            )
                                                        }
                                                    >
                                                        "Verify Certification"
                                                        <i class="fas fa-external-link-alt"></i>
                                                    </a>
                                                }
                                            })}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}
