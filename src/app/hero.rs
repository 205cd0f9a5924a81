use leptos::prelude::*;

use super::{scroll_to_section, OWNER, RESUME_PATH};

const SOCIALS: &[(&str, &str, &str)] = &[
    ("GitHub", "https://github.com/22471A05H5", "devicon-github-plain"),
    (
        "LinkedIn",
        "https://www.linkedin.com/in/mounica-pulagorla-3a8272276/",
        "devicon-linkedin-plain",
    ),
];

#[component]
pub fn Hero() -> impl IntoView {
    let (visible, set_visible) = signal(false);
    // kick the entrance transition on the first frame after mount
    Effect::new(move |_| set_visible.set(true));

    let fade = move |delay: &'static str| {
        let state = if visible.get() {
            "opacity-100 translate-y-0"
        } else {
            "opacity-0 translate-y-4"
        };
        format!("transition-all duration-700 {delay} {state}")
    };

    view! {
        <section
            id="hero"
            class="min-h-screen flex items-center justify-center bg-black relative overflow-hidden pt-24"
        >
            <div class="absolute inset-0 pointer-events-none">
                <div class="absolute top-0 left-0 w-96 h-96 bg-gradient-to-br from-blue-500/30 to-cyan-400/20 rounded-full blur-3xl animate-pulse -translate-x-1/2 -translate-y-1/2"></div>
                <div class="absolute bottom-0 right-0 w-80 h-80 bg-gradient-to-tl from-purple-500/20 to-blue-600/30 rounded-full blur-3xl animate-float translate-x-1/2 translate-y-1/2"></div>
                <div class="absolute inset-0 hero-grid"></div>
            </div>

            <div class="container mx-auto z-10 flex flex-col-reverse lg:flex-row items-center justify-between px-4 sm:px-6 lg:px-12">
                <div class="w-full lg:w-1/2 text-center lg:text-left space-y-8 mt-8 lg:mt-0">
                    <div class=move || {
                        format!(
                            "inline-flex items-center gap-2 px-4 py-2 bg-green-500/10 border border-green-500/20 rounded-full text-green-400 text-sm font-medium {}",
                            fade(""),
                        )
                    }>
                        <div class="w-2 h-2 bg-green-400 rounded-full animate-pulse"></div>
                        <span>"Available for opportunities"</span>
                    </div>

                    <h1 class=move || {
                        format!("text-3xl sm:text-4xl md:text-5xl xl:text-6xl font-bold leading-tight {}", fade(""))
                    }>
                        <span class="text-white">"Hi, I'm "</span>
                        <span class="bg-gradient-to-r from-blue-400 via-cyan-300 to-blue-500 bg-clip-text text-transparent">
                            {OWNER}
                        </span>
                        <span class="text-lg sm:text-xl md:text-2xl xl:text-3xl text-gray-300 font-normal block mt-2">
                            "Aspiring Java Full Stack Developer"
                        </span>
                    </h1>

                    <p class=move || {
                        format!("text-base text-gray-300 max-w-2xl leading-relaxed mx-auto lg:mx-0 {}", fade("delay-200"))
                    }>
                        "Currently learning and building expertise in "
                        <span class="text-blue-400 font-semibold">"Java Full Stack Development"</span>
                        " with "
                        <span class="text-green-400 font-semibold">"Spring Boot"</span>
                        " and "
                        <span class="text-blue-400 font-semibold">"React"</span>
                        ". Passionate about creating scalable enterprise applications and modern web solutions."
                    </p>

                    <div class=move || {
                        format!("flex flex-wrap gap-4 lg:gap-6 justify-center lg:justify-start text-gray-400 text-sm {}", fade("delay-300"))
                    }>
                        <span>"💻 5+ Projects"</span>
                        <span>"✨ Multiple Certifications"</span>
                        <span>"📍 India"</span>
                    </div>

                    <div class=move || {
                        format!("flex justify-center lg:justify-start gap-4 {}", fade("delay-400"))
                    }>
                        {SOCIALS
                            .iter()
                            .map(|(label, href, icon)| {
                                view! {
                                    <a
                                        href=*href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=*label
                                        class="p-3 bg-gray-800/50 hover:bg-gray-700/50 border border-gray-700 hover:border-blue-400/50 rounded-xl text-gray-400 hover:text-blue-400 text-xl transition-all duration-300 hover:scale-110"
                                    >
                                        <i class=*icon></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a
                            href="mailto:pulagorlamounica@gmail.com"
                            aria-label="Email"
                            class="p-3 bg-gray-800/50 hover:bg-gray-700/50 border border-gray-700 hover:border-blue-400/50 rounded-xl text-xl transition-all duration-300 hover:scale-110"
                        >
                            "📧"
                        </a>
                    </div>

                    <div class=move || {
                        format!("flex flex-col sm:flex-row gap-4 justify-center lg:justify-start {}", fade("delay-500"))
                    }>
                        <button
                            class="bg-gradient-to-r from-blue-500 to-cyan-400 hover:from-blue-600 hover:to-cyan-500 text-white px-8 py-4 rounded-xl font-semibold shadow-lg hover:shadow-blue-500/25 transition-all duration-300 hover:scale-105 active:scale-95"
                            on:click=move |_| {
                                scroll_to_section("about");
                            }
                        >
                            "Explore My Work ↓"
                        </button>
                        <a
                            href=RESUME_PATH
                            download=""
                            class="bg-gray-800/50 hover:bg-gray-700/50 border-2 border-gray-700 hover:border-blue-400/50 text-gray-300 hover:text-white px-8 py-4 rounded-xl font-semibold transition-all duration-300 hover:scale-105 active:scale-95"
                        >
                            "⬇ Download CV"
                        </a>
                    </div>
                </div>

                <div class="w-full lg:w-1/2 flex justify-center relative mb-8 lg:mb-0">
                    <div class="relative w-64 h-64 sm:w-80 sm:h-80 lg:w-96 lg:h-96 rounded-full p-1 bg-gradient-to-r from-blue-500 via-cyan-400 to-blue-600 animate-spin-slow-border">
                        <img
                            src="/assets/profile.jpg"
                            alt=OWNER
                            class="w-full h-full object-cover rounded-full border-4 border-black"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
