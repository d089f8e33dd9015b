mod about;
mod certifications;
mod contact;
mod education;
mod footer;
mod header;
mod hero;
mod projects;
mod reveal;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::use_preferred_dark;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::content::{site_content, SiteContent};
use crate::theme::Theme;

use about::About;
use certifications::Certifications;
use contact::Contact;
use education::Education;
use footer::Footer;
use header::Header;
use hero::Hero;
use projects::Projects;
use reveal::provide_reveal_context;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"
                />
                // without scripts nothing would ever fade in
                <noscript>
                    <style>".reveal-hidden { opacity: 1 !important; }"</style>
                </noscript>
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let owner = site_content()
        .map(|c| c.site.owner.clone())
        .unwrap_or_default();

    view! {
        <Title formatter=move |title| format!("{owner} - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    match site_content() {
        Ok(content) => Either::Left(view! { <Portfolio content /> }),
        Err(e) => {
            log::error!("site content failed to load: {e}");
            Either::Right(view! {
                <Title text="Unavailable" />
                <main class="min-h-screen flex items-center justify-center p-8">
                    <pre class="whitespace-pre-wrap text-red-600">{e.to_string()}</pre>
                </main>
            })
        }
    }
}

/// Dark mode preference: stored choice first, then the OS setting.
fn use_theme() -> (Signal<Theme>, Callback<()>) {
    #[cfg(feature = "hydrate")]
    let (stored, set_stored, _) = use_local_storage::<Option<Theme>, JsonSerdeWasmCodec>("theme");
    #[cfg(not(feature = "hydrate"))]
    let (stored, set_stored) = signal(None::<Theme>);

    let prefers_dark = use_preferred_dark();
    let theme = Signal::derive(move || {
        stored
            .get()
            .unwrap_or_else(|| Theme::from_dark(prefers_dark.get()))
    });
    let toggle = Callback::new(move |_: ()| {
        let next = theme.get_untracked().toggled();
        log::debug!("theme -> {next:?}");
        set_stored.set(Some(next));
    });
    (theme, toggle)
}

#[component]
fn Portfolio(content: &'static SiteContent) -> impl IntoView {
    let (theme, toggle_theme) = use_theme();
    provide_reveal_context(content.site.reveal_threshold);
    let site = &content.site;

    view! {
        <Title text=site.role.clone() />
        <div class=move || {
            format!(
                "min-h-screen transition-colors duration-300 {}",
                theme.get().pick("bg-gray-900 text-white", "bg-gray-50 text-gray-900"),
            )
        }>
            <Header
                theme
                on_toggle=toggle_theme
                brand=site.brand.clone()
                scroll_offset=site.header_scroll_offset
            />
            <main>
                <Hero theme site />
                <About theme about=&content.about />
                <Education theme items=&content.education />
                <Projects
                    theme
                    projects=&content.projects
                    client_projects=&content.client_projects
                />
                <Certifications theme items=&content.certifications />
                <Contact
                    theme
                    contact=&content.contact
                    submit_delay=site.submit_delay()
                    clear_delay=site.status_clear_delay()
                />
            </main>
            <Footer theme owner=site.owner.clone() />
        </div>
    }
}
