use std::time::Duration;

use leptos::{either::Either, ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::contact::{
    dispatch, validate, Banner, ContactSession, FieldError, FormField, HttpRelay, RelayConfig,
    RelayPayload,
};

use super::reveal::{RevealSection, SectionHeader};
use super::sleep;

/// How long the "Verifying email address..." indicator stays up. No lookup
/// happens during this time.
pub const VERIFY_DELAY: Duration = Duration::from_secs(1);

const CONTACT_INFO: &[(&str, &str, &str, &str)] = &[
    (
        "📧",
        "Email",
        "pulagorlamounica@gmail.com",
        "Send me an email anytime",
    ),
    ("📞", "Phone", "+91 9347813886", "Call me for quick discussions"),
    (
        "📍",
        "Location",
        "Narasaraopet, Andhra Pradesh, India",
        "Available for local meetups",
    ),
];

const SOCIAL_LINKS: &[(&str, &str, &str)] = &[
    ("GitHub", "https://github.com/22471A05H5", "devicon-github-plain"),
    (
        "LinkedIn",
        "https://www.linkedin.com/in/mounica-pulagorla-3a8272276/",
        "devicon-linkedin-plain",
    ),
];

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <RevealSection id="contact">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    badge="💬 Get In Touch"
                    title="Let's Connect & Create Together"
                    subtitle="Ready to bring your ideas to life? Let's discuss your next project and explore how we can work together to create something amazing."
                />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-start">
                    <ContactInfo />
                    <ContactForm />
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <h3 class="text-2xl font-bold text-blue-100 mb-6">"⭐ Contact Information"</h3>
            <div class="space-y-6">
                {CONTACT_INFO
                    .iter()
                    .map(|(icon, title, value, description)| {
                        view! {
                            <div class="group bg-gray-900/50 backdrop-blur-sm rounded-2xl p-6 border border-gray-800/50 hover:border-blue-500/30 transition-all duration-300 hover:scale-105">
                                <div class="flex items-start gap-4">
                                    <div class="p-3 rounded-xl bg-gradient-to-br from-blue-500/20 to-cyan-500/20 border border-gray-700/50 text-xl group-hover:scale-110 transition-transform duration-300">
                                        {*icon}
                                    </div>
                                    <div class="flex-1">
                                        <h4 class="text-lg font-semibold text-blue-100 mb-1">{*title}</h4>
                                        <p class="text-blue-300 font-medium mb-2">{*value}</p>
                                        <p class="text-blue-200 text-sm">{*description}</p>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div>
                <h4 class="text-lg font-semibold text-blue-100 mb-4">"⚡ Connect on Social"</h4>
                <div class="flex gap-4">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|(label, href, icon)| {
                            view! {
                                <a
                                    href=*href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=*label
                                    class="p-3 rounded-xl bg-gray-900/50 border border-gray-800/50 hover:border-blue-500/30 text-gray-300 hover:text-white text-xl transition-all duration-300 hover:scale-110"
                                >
                                    <i class=*icon></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let config = StoredValue::new(RelayConfig::from_build_env());
    let session = RwSignal::new(ContactSession::new(config.with_value(|c| c.policy)));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(form) = session.try_update(|s| s.begin()).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = validate(&form, sleep(VERIFY_DELAY)).await;
            let Some(form) = session.try_update(|s| s.validated(result)).flatten() else {
                return;
            };
            let config = config.get_value();
            let payload = RelayPayload::new(&form, &config);
            let relay = HttpRelay::new(config.endpoint.clone());
            let outcome = dispatch(&relay, &payload, sleep(config.timeout)).await;
            session.update(|s| s.finish(outcome));
        });
    };

    view! {
        <div class="bg-gray-900/50 backdrop-blur-sm rounded-3xl p-8 border border-gray-800/50 hover:border-blue-500/20 transition-all duration-300">
            <h3 class="text-2xl font-bold text-blue-100 mb-6">"✉ Send Me a Message"</h3>
            <form on:submit=on_submit class="space-y-6" novalidate=true>
                {move || {
                    session
                        .with(|s| s.banner().cloned())
                        .map(|banner| match banner {
                            Banner::Sent => Either::Left(view! {
                                <div class="p-4 bg-green-500/20 border border-green-500/30 text-green-300 rounded-xl">
                                    "⭐ Thank you for your message! I'll get back to you soon."
                                </div>
                            }),
                            Banner::Failed(reason) => Either::Right(view! {
                                <div class="p-4 bg-red-500/20 border border-red-500/30 text-red-300 rounded-xl">
                                    <p>"Your message could not be sent. Please try again."</p>
                                    <p class="text-sm mt-1 opacity-80">{reason}</p>
                                </div>
                            }),
                        })
                }}
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <FormControl session field=FormField::Name label="Name *" placeholder="Your name" />
                    <FormControl
                        session
                        field=FormField::Email
                        label="Email *"
                        placeholder="your.email@example.com"
                        input_type="email"
                    />
                </div>
                <FormControl
                    session
                    field=FormField::Subject
                    label="Subject"
                    placeholder="What's this about?"
                />
                <FormControl
                    session
                    field=FormField::Message
                    label="Message *"
                    placeholder="Tell me about your project or idea..."
                    multiline=true
                />
                <button
                    type="submit"
                    disabled=move || !session.with(|s| s.submit_enabled())
                    class="w-full bg-gradient-to-r from-blue-500 to-cyan-500 hover:from-blue-600 hover:to-cyan-600 text-white font-semibold px-8 py-4 rounded-xl shadow-lg hover:shadow-blue-500/25 transition-all duration-300 hover:scale-105 active:scale-95 disabled:opacity-50 disabled:cursor-not-allowed disabled:hover:scale-100"
                >
                    {move || {
                        if session.with(|s| s.is_submitting()) {
                            "Sending Message..."
                        } else {
                            "➤ Send Message"
                        }
                    }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn FormControl(
    session: RwSignal<ContactSession>,
    field: FormField,
    label: &'static str,
    placeholder: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || session.with(|s| s.form().get(field).to_string());
    let error = move || session.with(|s| s.errors().get(field).cloned());
    let busy = move || !session.with(|s| s.submit_enabled());
    let on_input = move |ev: leptos::ev::Event| session.update(|s| s.edit(field, event_target_value(&ev)));
    let class = move || {
        let border = if error().is_some() {
            "border-red-500/50"
        } else {
            "border-gray-700/50 hover:border-blue-500/30"
        };
        let resize = if multiline { "resize-none" } else { "" };
        format!("w-full px-4 py-3 bg-gray-800/50 backdrop-blur-sm border rounded-xl focus:outline-none focus:ring-2 focus:ring-blue-400/50 transition-all duration-300 text-blue-100 placeholder-blue-300/50 {border} {resize}")
    };
    let name = field.to_string().to_lowercase();

    view! {
        <div>
            <label for=name.clone() class="block text-blue-200 font-medium mb-2">
                {label}
            </label>
            {if multiline {
                Either::Left(view! {
                    <textarea
                        id=name.clone()
                        name=name
                        rows=5
                        placeholder=placeholder
                        class=class
                        readonly=busy
                        prop:value=value
                        on:input=on_input
                    ></textarea>
                })
            } else {
                Either::Right(view! {
                    <input
                        id=name.clone()
                        name=name
                        type=input_type.unwrap_or("text")
                        placeholder=placeholder
                        class=class
                        readonly=busy
                        prop:value=value
                        on:input=on_input
                    />
                })
            }}
            {move || {
                (field == FormField::Email && session.with(|s| s.is_verifying()))
                    .then(|| {
                        view! {
                            <p class="text-blue-400 text-sm mt-1 flex items-center">
                                <span class="animate-spin mr-2">"◌"</span>
                                "Verifying email address..."
                            </p>
                        }
                    })
            }}
            {move || {
                error()
                    .map(|err| {
                        let hint = (err == FieldError::DoesNotExist)
                            .then(|| {
                                view! {
                                    <span class="block mt-1 text-yellow-400">
                                        "Please double-check your email address and try again."
                                    </span>
                                }
                            });
                        view! {
                            <p class="text-red-400 text-sm mt-1">{err.to_string()} {hint}</p>
                        }
                    })
            }}
        </div>
    }
}
