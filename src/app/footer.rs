use chrono::{DateTime, Datelike, Utc};
use leptos::{ev::MouseEvent, prelude::*};

use crate::theme::Theme;

fn build_date() -> Option<String> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|d| d.format("%b %e, %Y").to_string())
}

#[component]
pub fn Footer(theme: Signal<Theme>, owner: String) -> impl IntoView {
    let year = Utc::now().year();
    let scroll_to_top = move |_: MouseEvent| window().scroll_to_with_x_and_y(0.0, 0.0);

    view! {
        <footer class=move || {
            format!("py-8 {}", theme.get().pick("bg-gray-900 text-white", "bg-gray-100 text-gray-900"))
        }>
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <div class=move || {
                        format!(
                            "mb-4 md:mb-0 text-sm {}",
                            theme.get().pick("text-gray-400", "text-gray-600"),
                        )
                    }>
                        <p>{format!("© {year} {owner}. All rights reserved.")}</p>
                        {build_date().map(|d| view! { <p class="text-xs mt-1">"Last updated " {d}</p> })}
                    </div>
                    <button
                        type="button"
                        on:click=scroll_to_top
                        aria-label="Scroll to top"
                        class=move || {
                            format!(
                                "p-2 rounded-full transition-colors {}",
                                theme
                                    .get()
                                    .pick(
                                        "bg-gray-800 text-gray-400 hover:text-white hover:bg-gray-700",
                                        "bg-gray-200 text-gray-600 hover:text-gray-900 hover:bg-gray-300",
                                    ),
                            )
                        }
                    >
                        <i class="fas fa-arrow-up"></i>
                    </button>
                </div>
            </div>
        </footer>
    }
}
