use std::time::Duration;

use futures::future::{abortable, AbortHandle};
use leptos::{either::Either, ev::SubmitEvent, prelude::*, task::spawn_local};

use super::reveal::RevealSection;
use crate::contact::{
    clear_banner, drive_submission, ContactForm, Field, FormUpdate, PageTimer, SimulatedSender,
    SubmitStatus, Submission,
};
use crate::content::ContactContent;
use crate::section::Section;
use crate::theme::{Theme, Tone};

fn input_class(theme: Theme) -> &'static str {
    theme.pick(
        "w-full px-4 py-2 rounded-lg bg-gray-800 border-gray-700 text-white focus:border-blue-400 border focus:outline-none focus:ring-2 focus:ring-blue-500/20",
        "w-full px-4 py-2 rounded-lg bg-gray-50 border-gray-300 text-gray-900 focus:border-blue-500 border focus:outline-none focus:ring-2 focus:ring-blue-500/20",
    )
}

#[component]
pub fn Contact(
    theme: Signal<Theme>,
    contact: &'static ContactContent,
    submit_delay: Duration,
    clear_delay: Duration,
) -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let sender = StoredValue::new(SimulatedSender {
        delay: submit_delay,
        timer: PageTimer,
    });
    let in_flight = StoredValue::new(None::<AbortHandle>);

    on_cleanup(move || {
        if let Some(handle) = in_flight.try_update_value(Option::take).flatten() {
            log::debug!("contact form unmounted, aborting submission");
            handle.abort();
        }
    });

    // `None` once the form has been disposed
    let apply = move |update: FormUpdate| form.try_update(|f| f.apply(update));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(submission) = form.try_update(ContactForm::begin_submit) else {
            return;
        };
        match submission {
            Submission::Busy => {}
            Submission::Rejected { ticket, .. } => {
                spawn_local(clear_banner(PageTimer, ticket, clear_delay, apply));
            }
            Submission::Started { ticket, message } => {
                let sender = sender.get_value();
                let (task, handle) = abortable(async move {
                    drive_submission(&sender, PageTimer, ticket, message, clear_delay, apply).await;
                });
                in_flight.set_value(Some(handle));
                spawn_local(async move {
                    if task.await.is_err() {
                        log::debug!("contact submission aborted");
                    }
                });
            }
        }
    };

    let label_class = move || {
        format!(
            "block text-sm font-medium mb-2 {}",
            theme.get().pick("text-gray-300", "text-gray-700"),
        )
    };
    let text_input = move |field: Field, input_type: &'static str| {
        view! {
            <div>
                <label for=field.key() class=label_class>
                    {field.label()}
                </label>
                <input
                    type=input_type
                    id=field.key()
                    name=field.key()
                    required
                    prop:value=move || form.with(|f| f.field(field).to_string())
                    on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
                    class=move || input_class(theme.get())
                />
            </div>
        }
    };

    view! {
        <RevealSection
            section=Section::Contact
            class=Signal::derive(move || format!("py-16 md:py-24 {}", theme.get().section(Tone::Base)))
        >
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="mb-12 text-center">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Get In Touch"</h2>
                    <div class="w-20 h-1 bg-blue-500 mx-auto mb-6"></div>
                    <p class=move || format!("max-w-2xl mx-auto {}", theme.get().muted_text())>
                        "I'm always open to new opportunities and collaborations. Feel free to reach out if you have a question or just want to connect."
                    </p>
                </div>
                <div class="max-w-5xl mx-auto">
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                        <div class="md:col-span-1">
                            <ContactDetails theme contact />
                        </div>
                        <div class="md:col-span-2">
                            <form
                                on:submit=on_submit
                                class=move || {
                                    format!("p-6 rounded-lg shadow-md {}", theme.get().card())
                                }
                            >
                                <h3 class="text-xl font-bold mb-6">"Send a Message"</h3>
                                <div class="grid grid-cols-1 sm:grid-cols-2 gap-6 mb-6">
                                    {text_input(Field::Name, "text")}
                                    {text_input(Field::Email, "email")}
                                </div>
                                <div class="mb-6">{text_input(Field::Subject, "text")}</div>
                                <div class="mb-6">
                                    <label for=Field::Message.key() class=label_class>
                                        {Field::Message.label()}
                                    </label>
                                    <textarea
                                        id=Field::Message.key()
                                        name=Field::Message.key()
                                        required
                                        rows="5"
                                        prop:value=move || form.with(|f| f.field(Field::Message).to_string())
                                        on:input=move |ev| {
                                            form.update(|f| f.set_field(Field::Message, event_target_value(&ev)))
                                        }
                                        class=move || input_class(theme.get())
                                    ></textarea>
                                </div>
                                <StatusBanner form />
                                <button
                                    type="submit"
                                    disabled=move || form.with(ContactForm::is_submitting)
                                    class=move || {
                                        let busy = if form.with(ContactForm::is_submitting) {
                                            "opacity-70 cursor-not-allowed"
                                        } else {
                                            ""
                                        };
                                        format!(
                                            "px-6 py-3 rounded-lg flex items-center justify-center gap-2 transition-colors text-white {busy} {}",
                                            theme.get().pick("bg-blue-500 hover:bg-blue-600", "bg-blue-600 hover:bg-blue-700"),
                                        )
                                    }
                                >
                                    {move || {
                                        if form.with(ContactForm::is_submitting) {
                                            Either::Left(
                                                view! {
                                                    <i class="fas fa-spinner animate-spin"></i>
                                                    "Sending..."
                                                },
                                            )
                                        } else {
                                            Either::Right(
                                                view! {
                                                    <i class="fas fa-paper-plane"></i>
                                                    "Send Message"
                                                },
                                            )
                                        }
                                    }}
                                </button>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn StatusBanner(form: RwSignal<ContactForm>) -> impl IntoView {
    move || {
        form.with(|f| match f.status() {
            SubmitStatus::Success => Some(Either::Left(view! {
                <div class="mb-6 p-3 rounded-lg bg-green-100 text-green-800">
                    "Message sent successfully! I'll get back to you soon."
                </div>
            })),
            SubmitStatus::Error => {
                let detail = f.error().map(ToString::to_string);
                Some(Either::Right(view! {
                    <div class="mb-6 p-3 rounded-lg bg-red-100 text-red-800">
                        <p>"There was an error sending your message. Please try again."</p>
                        {detail.map(|d| view! { <p class="text-sm mt-1">{d}</p> })}
                    </div>
                }))
            }
            SubmitStatus::Idle | SubmitStatus::Pending => None,
        })
    }
}

#[component]
fn ContactDetails(theme: Signal<Theme>, contact: &'static ContactContent) -> impl IntoView {
    view! {
        <div class=move || {
            format!("p-6 rounded-lg {}", theme.get().pick("bg-gray-700", "bg-gray-50"))
        }>
            <h3 class="text-xl font-bold mb-6">"Contact Information"</h3>
            <div class="space-y-6">
                {contact
                    .info
                    .iter()
                    .map(|info| {
                        let link_class = move || {
                            format!(
                                "font-medium hover:underline {}",
                                theme.get().pick("text-blue-400", "text-blue-600"),
                            )
                        };
                        view! {
                            <div class="flex items-start">
                                <div class=move || {
                                    format!(
                                        "mr-3 mt-1 p-2 rounded-full {}",
                                        theme.get().pick("bg-gray-600 text-blue-400", "bg-blue-100 text-blue-600"),
                                    )
                                }>
                                    <i class=info.icon.clone()></i>
                                </div>
                                <div>
                                    <p class=move || {
                                        format!("text-sm {}", theme.get().pick("text-gray-400", "text-gray-500"))
                                    }>{info.label.clone()}</p>
                                    {match &info.link {
                                        Some(link) => Either::Left(view! {
                                            <a href=link.clone() class=link_class>
                                                {info.value.clone()}
                                            </a>
                                        }),
                                        None => Either::Right(view! {
                                            <p class="font-medium">{info.value.clone()}</p>
                                        }),
                                    }}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="mt-8">
                <h4 class="text-lg font-medium mb-4">"Follow Me"</h4>
                <div class="flex space-x-4">
                    {contact
                        .socials
                        .iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.url.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=social.label.clone()
                                    class=move || {
                                        format!(
                                            "p-2 rounded-full transition-colors {}",
                                            theme
                                                .get()
                                                .pick(
                                                    "bg-gray-600 text-white hover:bg-blue-500",
                                                    "bg-gray-200 text-gray-700 hover:bg-blue-500 hover:text-white",
                                                ),
                                        )
                                    }
                                >
                                    <i class=format!("{} w-5 h-5", social.icon)></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
