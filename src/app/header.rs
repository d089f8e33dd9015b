use leptos::{either::Either, prelude::*};
use leptos_use::use_window_scroll;

use crate::section::{Section, NAV_SECTIONS};
use crate::theme::Theme;

#[component]
pub fn Header(
    theme: Signal<Theme>,
    on_toggle: Callback<()>,
    brand: String,
    scroll_offset: f64,
) -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = Memo::new(move |_| scroll_y.get() > scroll_offset);
    let (menu_open, set_menu_open) = signal(false);

    let nav_link = move |section: Section, mobile: bool| {
        let class = move || {
            let t = theme.get();
            if mobile {
                format!(
                    "block py-3 px-4 text-lg font-medium rounded-md transition-colors {}",
                    t.pick("text-white hover:bg-gray-800", "text-gray-900 hover:bg-gray-100"),
                )
            } else {
                format!(
                    "text-sm font-medium transition-colors hover:text-blue-500 {}",
                    t.pick("text-gray-300 hover:text-blue-400", "text-gray-700"),
                )
            }
        };
        view! {
            <a href=section.href() class=class on:click=move |_| set_menu_open.set(false)>
                {section.label()}
            </a>
        }
    };

    view! {
        <header class=move || {
            let shade = if is_scrolled.get() {
                theme
                    .get()
                    .pick(
                        "bg-gray-900/95 shadow-gray-900/20 backdrop-blur-md shadow-lg",
                        "bg-white/95 shadow-gray-200/20 backdrop-blur-md shadow-lg",
                    )
            } else {
                "bg-transparent"
            };
            format!("fixed top-0 left-0 right-0 z-50 transition-all duration-300 {shade}")
        }>
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16 sm:h-20">
                    <div class="flex-shrink-0">
                        <a
                            href=Section::Hero.href()
                            class=move || {
                                format!(
                                    "text-xl font-bold transition-colors {}",
                                    theme.get().pick("text-white", "text-gray-900"),
                                )
                            }
                        >
                            {brand}
                        </a>
                    </div>
                    <div class="hidden md:block">
                        <nav class="ml-10 flex items-center space-x-8">
                            {NAV_SECTIONS.iter().map(|s| nav_link(*s, false)).collect_view()}
                        </nav>
                    </div>
                    <div class="flex items-center space-x-4">
                        <button
                            type="button"
                            aria-label="Toggle dark mode"
                            on:click=move |_| on_toggle.run(())
                            class=move || {
                                format!(
                                    "p-2 rounded-full transition-colors {}",
                                    theme.get().pick("text-yellow-300 hover:bg-gray-800", "text-gray-700 hover:bg-gray-100"),
                                )
                            }
                        >
                            <i class=move || theme.get().pick("fas fa-sun", "fas fa-moon")></i>
                        </button>
                        <button
                            type="button"
                            aria-label="Toggle menu"
                            class=move || {
                                format!(
                                    "md:hidden p-2 rounded-full transition-colors {}",
                                    theme.get().pick("text-white", "text-gray-900"),
                                )
                            }
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            <i class=move || {
                                if menu_open.get() { "fas fa-times" } else { "fas fa-bars" }
                            }></i>
                        </button>
                    </div>
                </div>
            </div>
            {move || {
                if menu_open.get() {
                    Either::Left(
                        view! {
                            <div class=move || {
                                format!(
                                    "md:hidden fixed inset-0 top-16 z-40 transition-all duration-300 ease-in-out {}",
                                    theme.get().pick("bg-gray-900", "bg-white"),
                                )
                            }>
                                <nav class="flex flex-col space-y-4 p-4">
                                    {NAV_SECTIONS.iter().map(|s| nav_link(*s, true)).collect_view()}
                                </nav>
                            </div>
                        },
                    )
                } else {
                    Either::Right(())
                }
            }}
        </header>
    }
}
