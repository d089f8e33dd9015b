use leptos::prelude::*;

use super::reveal::RevealSection;
use crate::content::Project;
use crate::filter::{tag_label, TagFilter};
use crate::section::Section;
use crate::theme::{Theme, Tone};

fn tag_button_class(active: bool, theme: Theme) -> &'static str {
    if active {
        "px-4 py-2 rounded-full text-sm font-medium transition-colors bg-blue-500 text-white"
    } else {
        theme.pick(
            "px-4 py-2 rounded-full text-sm font-medium transition-colors bg-gray-700 text-gray-300 hover:bg-gray-600",
            "px-4 py-2 rounded-full text-sm font-medium transition-colors bg-gray-200 text-gray-700 hover:bg-gray-300",
        )
    }
}

#[component]
pub fn Projects(
    theme: Signal<Theme>,
    projects: &'static [Project],
    client_projects: &'static [Project],
) -> impl IntoView {
    let filter = RwSignal::new(TagFilter::new(projects.to_vec()));
    let vocabulary = filter.with_untracked(|f| f.vocabulary().to_vec());

    view! {
        <RevealSection
            section=Section::Projects
            class=Signal::derive(move || format!("py-16 md:py-24 {}", theme.get().section(Tone::Base)))
        >
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="mb-12 text-center">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Projects"</h2>
                    <div class="w-20 h-1 bg-blue-500 mx-auto mb-8"></div>
                    <div class="flex flex-wrap justify-center gap-2 mb-8">
                        {vocabulary
                            .into_iter()
                            .map(|tag| {
                                let label = tag_label(&tag);
                                let selected = tag.clone();
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            tag_button_class(filter.with(|f| f.is_active(&tag)), theme.get())
                                        }
                                        on:click=move |_| {
                                            filter.update(|f| {
                                                f.select_tag(&selected);
                                            })
                                        }
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    {move || {
                        let visible = filter.with(|f| f.visible().to_vec());
                        view! { <ProjectGrid theme projects=visible /> }
                    }}
                </div>
                <div class="mt-16 text-center">
                    <h2 class="text-2xl md:text-3xl font-bold mb-4">"Other / Client Projects"</h2>
                    <div class="w-16 h-1 bg-blue-500 mx-auto mb-8"></div>
                    <ProjectGrid theme projects=client_projects.to_vec() />
                </div>
            </div>
        </RevealSection>
    }
}

/// An empty list renders as an empty grid.
#[component]
fn ProjectGrid(theme: Signal<Theme>, projects: Vec<Project>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
            {projects
                .into_iter()
                .map(|project| view! { <ProjectCard theme project /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProjectCard(theme: Signal<Theme>, project: Project) -> impl IntoView {
    let Project {
        title,
        description,
        image,
        tags,
        links,
        ..
    } = project;
    view! {
        <div class=move || {
            format!(
                "rounded-lg overflow-hidden shadow-lg text-left transition-transform hover:scale-105 {}",
                theme.get().card(),
            )
        }>
            <div class="relative h-48 overflow-hidden">
                <img
                    src=image
                    alt=title.clone()
                    class="w-full h-full object-cover transition-transform hover:scale-110 duration-500"
                />
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold mb-2">{title}</h3>
                <p class=move || format!("text-sm mb-4 {}", theme.get().muted_text())>{description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {tags
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <span class=move || {
                                    format!(
                                        "text-xs px-2 py-1 rounded-full {}",
                                        theme.get().pick("bg-gray-800 text-gray-300", "bg-gray-200 text-gray-700"),
                                    )
                                }>{tag}</span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-3">
                    {links
                        .iter()
                        .map(|(kind, url)| {
                            view! {
                                <a
                                    href=url.to_string()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=kind.label()
                                    class="text-blue-500 hover:text-blue-600 transition-colors text-xl"
                                >
                                    <i class=kind.icon_class()></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_button_ignores_theme() {
        assert_eq!(
            tag_button_class(true, Theme::Dark),
            tag_button_class(true, Theme::Light)
        );
        assert_ne!(
            tag_button_class(false, Theme::Dark),
            tag_button_class(false, Theme::Light)
        );
    }
}
