use leptos::prelude::*;

use super::modal::{Detail, DetailModal};
use super::reveal::{RevealSection, SectionHeader};

const CERTIFICATES: &[Detail] = &[
    Detail {
        title: "Enterprise Design Thinking",
        source: "IBM",
        date: "July 2024",
        description: "Practitioner-level badge from IBM validating design thinking methodologies.",
        image: "/assets/certificates/ibm-design-thinking.jpg",
    },
    Detail {
        title: "Introduction to Internet of Things",
        source: "NPTEL",
        date: "April 2024",
        description: "An introductory course to the Internet of Things concepts and applications.",
        image: "/assets/certificates/nptel-iot.jpg",
    },
    Detail {
        title: "Python Basics",
        source: "HackerRank",
        date: "June 2023",
        description: "Certificate of completion for basic Python programming concepts.",
        image: "/assets/certificates/hackerrank-python.jpg",
    },
    Detail {
        title: "Machine Learning Training",
        source: "SkillUp",
        date: "Feb 2025",
        description: "Completed machine learning training including supervised and unsupervised algorithms.",
        image: "/assets/certificates/skillup-ml.jpg",
    },
    Detail {
        title: "SQL Basics",
        source: "HackerRank",
        date: "August 2024",
        description: "Demonstrated proficiency in writing basic SQL queries and database management.",
        image: "/assets/certificates/hackerrank-sql.jpg",
    },
    Detail {
        title: "JavaScript Basics",
        source: "HackerRank",
        date: "Nov 2023",
        description: "Completed the basics of JavaScript programming language on HackerRank.",
        image: "/assets/certificates/hackerrank-js.jpg",
    },
];

fn issuer_style(issuer: &str) -> (&'static str, &'static str) {
    match issuer.to_lowercase().as_str() {
        "ibm" => ("from-blue-500 to-blue-600", "🏢"),
        "nptel" => ("from-green-500 to-green-600", "⭐"),
        "hackerrank" => ("from-emerald-500 to-emerald-600", "✅"),
        "skillup" => ("from-purple-500 to-purple-600", "🏆"),
        _ => ("from-gray-500 to-gray-600", "🎖"),
    }
}

#[component]
pub fn Certificates() -> impl IntoView {
    let selected = RwSignal::new(None::<Detail>);

    view! {
        <RevealSection id="certificates">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    badge="📜 Credentials"
                    title="Certificates"
                    subtitle="Courses and certifications that back up my learning journey."
                />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {CERTIFICATES
                        .iter()
                        .map(|cert| {
                            let cert = *cert;
                            let (gradient, icon) = issuer_style(cert.source);
                            view! {
                                <button
                                    class="group relative text-left bg-gray-900/50 backdrop-blur-sm rounded-3xl overflow-hidden border border-gray-800/50 hover:border-blue-500/30 transition-all duration-500 hover:scale-105"
                                    on:click=move |_| selected.set(Some(cert))
                                >
                                    <img
                                        src=cert.image
                                        alt=cert.title
                                        loading="lazy"
                                        class="w-full h-48 object-cover group-hover:scale-110 transition-transform duration-500"
                                    />
                                    <div class="p-6">
                                        <div class="flex items-start gap-3 mb-3">
                                            <div class=format!(
                                                "p-2 rounded-xl bg-gradient-to-r {gradient} group-hover:scale-110 transition-transform duration-300",
                                            )>{icon}</div>
                                            <div>
                                                <h3 class="text-lg font-bold text-white group-hover:text-blue-300 transition-colors">
                                                    {cert.title}
                                                </h3>
                                                <p class="text-blue-400 text-sm">{cert.description}</p>
                                            </div>
                                        </div>
                                        <div class="flex items-center justify-between text-sm text-gray-400">
                                            <span class="font-medium">{cert.source}</span>
                                            <span>{cert.date}</span>
                                        </div>
                                    </div>
                                    <div class=format!(
                                        "absolute bottom-0 left-0 right-0 h-1 bg-gradient-to-r {gradient} transform scale-x-0 group-hover:scale-x-100 transition-transform duration-300",
                                    )></div>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
        // outside the animated wrapper so `fixed` is relative to the viewport
        <DetailModal selected />
    }
}
