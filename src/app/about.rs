use leptos::prelude::*;

use super::reveal::{RevealSection, SectionHeader};
use super::{scroll_to_section, RESUME_PATH};

struct InfoItem {
    icon: &'static str,
    label: &'static str,
    value: &'static str,
    color: &'static str,
}

const INFO: &[InfoItem] = &[
    InfoItem {
        icon: "📅",
        label: "Born",
        value: "June 24, 2004",
        color: "from-pink-500/20 to-rose-500/20",
    },
    InfoItem {
        icon: "📍",
        label: "Location",
        value: "Narasaraopet",
        color: "from-green-500/20 to-emerald-500/20",
    },
    InfoItem {
        icon: "💼",
        label: "Focus",
        value: "Java Full Stack Development",
        color: "from-purple-500/20 to-violet-500/20",
    },
    InfoItem {
        icon: "🎓",
        label: "Degree",
        value: "B.Tech. in Computer Science",
        color: "from-yellow-500/20 to-amber-500/20",
    },
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <RevealSection id="about">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    badge="👤 Who I Am"
                    title="About Me"
                    subtitle="A quick introduction to who I am and what I'm working towards."
                />
                <div class="max-w-4xl mx-auto space-y-6">
                    <div class="bg-gradient-to-br from-gray-900/80 to-gray-800/60 backdrop-blur-xl p-6 rounded-3xl border border-blue-500/20 shadow-2xl hover:scale-[1.02] transition-all duration-500 text-center">
                        <h3 class="text-xl font-bold text-white mb-1">"Pulagorla Mounica"</h3>
                        <p class="text-blue-400 font-medium text-sm mb-4">
                            "Aspiring Java Full Stack Developer"
                        </p>
                        <p class="text-gray-300 leading-relaxed mb-4">
                            "I'm a passionate Computer Science student currently learning "
                            <span class="text-green-400 font-semibold">"Java Full Stack Development"</span>
                            ". My journey focuses on mastering "
                            <span class="text-blue-400 font-semibold">"Spring Boot"</span>
                            " for backend development and "
                            <span class="text-cyan-400 font-semibold">"React"</span>
                            " for creating dynamic user interfaces. I'm dedicated to building scalable enterprise applications and continuously expanding my expertise in modern full-stack technologies."
                        </p>
                        <div class="flex items-center justify-center gap-6 text-sm text-gray-400">
                            <span>"🎯 Always Learning"</span>
                            <span>"⚡ Problem Solver"</span>
                        </div>
                    </div>

                    <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-4">
                        {INFO
                            .iter()
                            .map(|info| {
                                view! {
                                    <div class="group bg-gray-900/60 backdrop-blur-lg p-4 rounded-2xl border border-gray-700/50 hover:border-blue-500/30 transition-all duration-300 hover:scale-105">
                                        <div class="flex items-start gap-3">
                                            <div class=format!(
                                                "p-2 rounded-xl bg-gradient-to-br {} group-hover:scale-110 transition-all duration-300",
                                                info.color,
                                            )>{info.icon}</div>
                                            <div class="flex-1">
                                                <p class="text-gray-400 text-xs font-medium mb-1">{info.label}</p>
                                                <p class="text-white font-semibold text-xs leading-tight">{info.value}</p>
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="bg-gradient-to-r from-gray-900/60 to-gray-800/40 backdrop-blur-xl p-6 rounded-3xl border border-blue-500/20">
                        <h4 class="text-lg font-bold text-white mb-4 text-center">"Let's Connect"</h4>
                        <div class="flex flex-col sm:flex-row gap-3 max-w-md mx-auto">
                            <button
                                class="flex-1 bg-gradient-to-r from-blue-500 to-cyan-400 hover:from-blue-600 hover:to-cyan-500 text-white px-4 py-3 rounded-xl font-medium shadow-lg transition-all duration-300 hover:scale-105 text-sm"
                                on:click=move |_| {
                                    scroll_to_section("contact");
                                }
                            >
                                "📧 Get In Touch"
                            </button>
                            <a
                                href=RESUME_PATH
                                download=""
                                class="flex-1 bg-gray-800/50 hover:bg-gray-700/50 border-2 border-gray-600 hover:border-blue-400/50 text-gray-300 hover:text-white px-4 py-3 rounded-xl font-medium transition-all duration-300 hover:scale-105 text-sm text-center"
                            >
                                "⬇ Download Resume"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </RevealSection>
    }
}
