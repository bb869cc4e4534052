use leptos::{either::EitherOf4, ev::SubmitEvent, html, prelude::*, task::spawn_local};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::animate::RevealOptions;
use crate::contact::{
    mailto_link, validate, ContactFields, Field, FieldErrors, SubmissionStatus, STATUS_RESET_MS,
};

use super::email::{send_message, use_delivery_ready, OWNER_EMAIL};
use super::hooks::{reveal_class, use_reveal};
use super::toast::Toasts;

const SEND_FAILED_MSG: &str =
    "Failed to send message. Please try again later or contact directly via email.";

const CONTACT_INFO: &[(&str, &str, &str)] = &[
    ("Email", "indugundam2004@gmail.com", "mailto:indugundam2004@gmail.com"),
    ("Phone", "+91 9676067989", "tel:+919676067989"),
    ("Location", "Visakhapatnam, AP", "#contact"),
    ("GitHub", "github.com/indugundam", "https://github.com/indugundam"),
    ("LinkedIn", "linkedin.com/in/indugundam", "https://linkedin.com/in/indugundam"),
];

/// Contact section: info links plus the form.
///
/// The form validates synchronously, sends through the EmailJS collaborator
/// when possible, and always keeps the mail-client handoff available as a
/// path that cannot fail for reasons other than validation.
#[component]
pub fn ContactSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_reveal(section_ref, RevealOptions::default());
    let revealed = Signal::derive(move || reveal.get().is_revealed);

    let toasts = expect_context::<Toasts>();
    let delivery_ready = use_delivery_ready();

    let fields = RwSignal::new(ContactFields::default());
    let errors = RwSignal::new(FieldErrors::default());
    let (status, set_status) = signal(SubmissionStatus::Idle);

    let UseTimeoutFnReturn {
        start: start_status_reset,
        stop: stop_status_reset,
        ..
    } = use_timeout_fn(
        move |_: ()| {
            set_status.set(SubmissionStatus::Idle);
        },
        STATUS_RESET_MS,
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // One delivery attempt at a time; a double-click must not fire a
        // second overlapping send.
        if status.get_untracked() == SubmissionStatus::Sending {
            return;
        }
        let current = fields.get_untracked();
        let found = validate(&current);
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        stop_status_reset();
        set_status.set(SubmissionStatus::Sending);
        let start_status_reset = start_status_reset.clone();
        spawn_local(async move {
            let outcome = send_message(&current).await;
            set_status.set(SubmissionStatus::from_outcome(&outcome));
            match outcome {
                Ok(res) if res.is_success() => {
                    fields.set(ContactFields::default());
                    toasts.success("Message sent successfully! I'll get back to you soon.");
                }
                Ok(res) => {
                    log::error!("message delivery rejected: {} {}", res.status, res.text);
                    toasts.error(SEND_FAILED_MSG);
                }
                Err(err) => {
                    log::error!("message delivery failed: {err}");
                    toasts.error(SEND_FAILED_MSG);
                }
            }
            // The settled status stays on the button for a moment, then the
            // form returns to idle.
            start_status_reset(());
        });
    };

    let open_mail_client = move |_| {
        let current = fields.get_untracked();
        let found = validate(&current);
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        let href = mailto_link(OWNER_EMAIL, &current);
        fields.set(ContactFields::default());
        toasts.success("Opening your mail client...");
        if let Err(err) = window().location().set_href(&href) {
            log::error!("failed to open mail client: {err:?}");
        }
    };

    view! {
        <section
            id="contact"
            node_ref=section_ref
            class="py-20 scroll-section relative overflow-hidden"
        >
            <div class="absolute inset-0 pointer-events-none opacity-30">
                <div class="absolute top-0 right-0 w-96 h-96 bg-purple-200 dark:bg-purple-900 rounded-full blur-3xl"></div>
                <div class="absolute bottom-0 left-0 w-80 h-80 bg-blue-200 dark:bg-blue-900 rounded-full blur-3xl"></div>
            </div>

            <div class="container mx-auto px-4 relative z-10">
                <div class="text-center max-w-3xl mx-auto mb-16">
                    <h2 class=move || {
                        reveal_class(
                            revealed.get(),
                            "text-3xl font-bold mb-4 bg-clip-text text-transparent bg-gradient-to-r from-primary to-indigo-500",
                        )
                    }>"Get In Touch"</h2>
                    <p class=move || {
                        reveal_class(revealed.get(), "text-muted-foreground delay-200")
                    }>"Have a question or want to work together? Feel free to reach out!"</p>
                </div>

                <div class="max-w-5xl mx-auto">
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-10">
                        <div class=move || reveal_class(revealed.get(), "")>
                            <div class="glass-morphism p-8 rounded-xl h-full">
                                <h3 class="text-xl font-semibold mb-6">"Contact Information"</h3>
                                <div class="space-y-4">
                                    {CONTACT_INFO
                                        .iter()
                                        .map(|(label, value, href)| {
                                            let external = href.starts_with("http");
                                            view! {
                                                <a
                                                    href=*href
                                                    target=external.then_some("_blank")
                                                    rel=external.then_some("noopener noreferrer")
                                                    class="flex items-center space-x-3 group"
                                                >
                                                    <div class="w-10 h-10 rounded-full bg-gradient-to-br from-primary/10 to-indigo-500/10 flex items-center justify-center group-hover:from-primary/20 group-hover:to-indigo-500/20 transition-all">
                                                        "✉"
                                                    </div>
                                                    <div>
                                                        <p class="text-sm text-muted-foreground">{*label}</p>
                                                        <p class="text-sm font-medium group-hover:text-primary transition-all">
                                                            {*value}
                                                        </p>
                                                    </div>
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>

                        <div class=move || reveal_class(revealed.get(), "delay-300")>
                            <form on:submit=on_submit class="glass-morphism p-8 rounded-xl">
                                <h3 class="text-xl font-semibold mb-6">"Send Message"</h3>

                                <div class="space-y-4">
                                    <div>
                                        <label for="name" class="block text-sm font-medium mb-1">
                                            "Name"
                                        </label>
                                        <input
                                            type="text"
                                            id="name"
                                            name="name"
                                            placeholder="Your name"
                                            class="w-full px-4 py-2 border border-primary/10 rounded-lg bg-white/5 backdrop-blur-sm focus:outline-none focus:ring-1 focus:ring-primary transition-all"
                                            prop:value=move || fields.with(|f| f.name.clone())
                                            on:input=move |ev| {
                                                fields
                                                    .update(|f| f.set(Field::Name, event_target_value(&ev)));
                                                errors.update(|e| e.clear(Field::Name));
                                            }
                                        />
                                        <FieldError errors field=Field::Name />
                                    </div>

                                    <div>
                                        <label for="email" class="block text-sm font-medium mb-1">
                                            "Email"
                                        </label>
                                        <input
                                            type="email"
                                            id="email"
                                            name="email"
                                            placeholder="Your email"
                                            class="w-full px-4 py-2 border border-primary/10 rounded-lg bg-white/5 backdrop-blur-sm focus:outline-none focus:ring-1 focus:ring-primary transition-all"
                                            prop:value=move || fields.with(|f| f.email.clone())
                                            on:input=move |ev| {
                                                fields
                                                    .update(|f| f.set(Field::Email, event_target_value(&ev)));
                                                errors.update(|e| e.clear(Field::Email));
                                            }
                                        />
                                        <FieldError errors field=Field::Email />
                                    </div>

                                    <div>
                                        <label for="message" class="block text-sm font-medium mb-1">
                                            "Message"
                                        </label>
                                        <textarea
                                            id="message"
                                            name="message"
                                            rows="4"
                                            placeholder="Your message"
                                            class="w-full px-4 py-2 border border-primary/10 rounded-lg bg-white/5 backdrop-blur-sm focus:outline-none focus:ring-1 focus:ring-primary transition-all resize-none"
                                            prop:value=move || fields.with(|f| f.message.clone())
                                            on:input=move |ev| {
                                                fields
                                                    .update(|f| {
                                                        f.set(Field::Message, event_target_value(&ev))
                                                    });
                                                errors.update(|e| e.clear(Field::Message));
                                            }
                                        ></textarea>
                                        <FieldError errors field=Field::Message />
                                    </div>

                                    <button
                                        type="submit"
                                        disabled=move || status.get() == SubmissionStatus::Sending
                                        class=move || {
                                            let tone = if status.get() == SubmissionStatus::Sending {
                                                "bg-gradient-blue/70 cursor-not-allowed"
                                            } else {
                                                "bg-gradient-blue hover:shadow-lg"
                                            };
                                            format!(
                                                "w-full px-6 py-3 flex items-center justify-center space-x-2 rounded-lg font-medium transition-all text-primary-foreground shadow-md {tone}",
                                            )
                                        }
                                    >
                                        {move || match status.get() {
                                            SubmissionStatus::Sending => {
                                                EitherOf4::A(
                                                    view! {
                                                        <div class="w-4 h-4 border-2 border-white border-t-transparent rounded-full animate-spin"></div>
                                                        <span>"Sending..."</span>
                                                    },
                                                )
                                            }
                                            SubmissionStatus::Success => {
                                                EitherOf4::B(view! { <span>"Message Sent!"</span> })
                                            }
                                            SubmissionStatus::Error => {
                                                EitherOf4::C(view! { <span>"Failed to send. Try again"</span> })
                                            }
                                            SubmissionStatus::Idle => {
                                                EitherOf4::D(view! { <span>"Send Message"</span> })
                                            }
                                        }}
                                    </button>

                                    {move || {
                                        (!delivery_ready.get())
                                            .then(|| {
                                                view! {
                                                    <p class="text-xs text-muted-foreground">
                                                        "The email service is still loading. The button below opens your mail client directly."
                                                    </p>
                                                }
                                            })
                                    }}

                                    <button
                                        type="button"
                                        on:click=open_mail_client
                                        class="w-full px-6 py-3 glass-morphism rounded-lg font-medium hover:bg-white/10 transition-all"
                                    >
                                        "Open Mail Client Instead"
                                    </button>
                                </div>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FieldError(errors: RwSignal<FieldErrors>, field: Field) -> impl IntoView {
    view! {
        {move || {
            errors
                .get()
                .get(field)
                .map(|msg| view! { <p class="text-xs text-red-500 mt-1">{msg}</p> })
        }}
    }
}
