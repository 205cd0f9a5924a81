use leptos::prelude::*;

use super::modal::{Detail, DetailModal};
use super::reveal::{RevealSection, SectionHeader};

struct Achievement {
    detail: Detail,
    icon: &'static str,
    gradient: &'static str,
    highlight: bool,
}

const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        detail: Detail {
            title: "Certificate of Excellence - Coding Contest",
            source: "Programming Competition",
            date: "2024",
            description: "Awarded Certificate of Excellence in Coding Contest by NEC Engineering College for outstanding performance in collaborative programming and computer science fundamentals.",
            image: "/assets/achievements/coding-contest.jpg",
        },
        icon: "🏆",
        gradient: "from-yellow-500/20 to-orange-500/20",
        highlight: true,
    },
    Achievement {
        detail: Detail {
            title: "Hi-Tech Chase Certificate - NEC Fest",
            source: "Technical Event",
            date: "2025",
            description: "Certificate of participation in Hi-Tech Chase technical event during NEC Fest 2025, showcasing skills in technology management and cultural sports activities.",
            image: "/assets/achievements/hitech-chase.jpg",
        },
        icon: "⚡",
        gradient: "from-red-500/20 to-orange-500/20",
        highlight: false,
    },
    Achievement {
        detail: Detail {
            title: "Idea Pitching Competition Certificate",
            source: "Innovation Challenge",
            date: "2024",
            description: "Participated in Idea Pitching competition organized by NEC Engineering College, demonstrating innovation and entrepreneurial thinking in technology solutions.",
            image: "/assets/achievements/idea-pitching.jpg",
        },
        icon: "⭐",
        gradient: "from-blue-500/20 to-purple-500/20",
        highlight: false,
    },
    Achievement {
        detail: Detail {
            title: "Hack-A-Thon Participation Certificate",
            source: "Hackathon",
            date: "2024",
            description: "Certificate of participation in Hack-A-Thon event, demonstrating skills in rapid prototyping, collaborative development, and innovative problem-solving.",
            image: "/assets/achievements/hackathon.jpg",
        },
        icon: "👑",
        gradient: "from-purple-500/20 to-pink-500/20",
        highlight: true,
    },
    Achievement {
        detail: Detail {
            title: "Android App Development using Kotlin",
            source: "Technical Workshop",
            date: "2024",
            description: "Successfully completed Android App Development workshop using Kotlin, gaining hands-on experience in mobile application development and modern Android frameworks.",
            image: "/assets/achievements/android-kotlin.jpg",
        },
        icon: "🏅",
        gradient: "from-green-500/20 to-teal-500/20",
        highlight: false,
    },
];

const STATS: &[(&str, &str, &str)] = &[
    ("🏆", "5+", "Competition Certificates"),
    ("⚡", "4+", "Technical Events"),
    ("💡", "2+", "Innovation Challenges"),
];

#[component]
pub fn Achievements() -> impl IntoView {
    let selected = RwSignal::new(None::<Detail>);

    view! {
        <RevealSection id="achievements">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    badge="🏆 Milestones"
                    title="Achievements"
                    subtitle="Competitions, events and workshops along the way."
                />
                <div class="grid grid-cols-1 sm:grid-cols-3 gap-6 mb-12">
                    {STATS
                        .iter()
                        .map(|(icon, value, label)| {
                            view! {
                                <div class="bg-gray-900/50 backdrop-blur-sm rounded-2xl p-6 border border-gray-800/50 text-center">
                                    <div class="text-2xl mb-2">{*icon}</div>
                                    <div class="text-3xl font-bold text-blue-300">{*value}</div>
                                    <div class="text-sm text-gray-400">{*label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {ACHIEVEMENTS
                        .iter()
                        .map(|a| {
                            let detail = a.detail;
                            let border = if a.highlight {
                                "border-yellow-500/40 shadow-lg shadow-yellow-500/10"
                            } else {
                                "border-gray-800/50"
                            };
                            view! {
                                <button
                                    class=format!(
                                        "group relative text-left bg-gray-900/50 backdrop-blur-sm rounded-3xl overflow-hidden border hover:border-blue-500/30 transition-all duration-500 hover:scale-105 {border}",
                                    )
                                    on:click=move |_| selected.set(Some(detail))
                                >
                                    <div class=format!(
                                        "absolute inset-0 bg-gradient-to-br {} opacity-0 group-hover:opacity-100 transition-opacity duration-500",
                                        a.gradient,
                                    )></div>
                                    <img
                                        src=detail.image
                                        alt=detail.title
                                        loading="lazy"
                                        class="relative w-full h-48 object-cover"
                                    />
                                    <div class="relative p-6">
                                        <div class="flex items-center justify-between mb-3 text-sm">
                                            <span class="text-2xl">{a.icon}</span>
                                            <span class="text-gray-400">{detail.date}</span>
                                        </div>
                                        {a
                                            .highlight
                                            .then(|| {
                                                view! {
                                                    <span class="inline-block mb-2 px-2 py-0.5 rounded-full bg-yellow-500/20 text-yellow-300 text-xs">
                                                        "Highlight"
                                                    </span>
                                                }
                                            })}
                                        <h3 class="text-lg font-bold text-white mb-2">{detail.title}</h3>
                                        <p class="text-xs text-blue-400 mb-2">{detail.source}</p>
                                        <p class="text-sm text-blue-200 line-clamp-3">{detail.description}</p>
                                    </div>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
        <DetailModal selected />
    }
}
