use leptos::prelude::*;

use super::reveal::{RevealSection, SectionHeader};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }

    fn badge_class(self) -> &'static str {
        match self {
            Level::Beginner => "bg-yellow-500/20 text-yellow-300 border-yellow-500/30",
            Level::Intermediate => "bg-blue-500/20 text-blue-300 border-blue-500/30",
            Level::Advanced => "bg-green-500/20 text-green-300 border-green-500/30",
        }
    }
}

struct Skill {
    name: &'static str,
    percent: u8,
    level: Level,
    color: &'static str,
    experience: &'static str,
}

struct Category {
    title: &'static str,
    gradient: &'static str,
    description: &'static str,
    skills: &'static [Skill],
}

const fn skill(
    name: &'static str,
    percent: u8,
    level: Level,
    color: &'static str,
    experience: &'static str,
) -> Skill {
    Skill {
        name,
        percent,
        level,
        color,
        experience,
    }
}

use Level::*;

const CATEGORIES: &[Category] = &[
    Category {
        title: "Programming Languages",
        gradient: "from-blue-500 to-cyan-400",
        description: "Core programming languages I work with",
        skills: &[
            skill("Java", 85, Advanced, "#f89820", "Academic"),
            skill("Python", 90, Advanced, "#3776ab", "Academic"),
            skill("JavaScript", 90, Advanced, "#f7df1e", "Projects"),
        ],
    },
    Category {
        title: "Frontend Development",
        gradient: "from-pink-500 to-rose-400",
        description: "Modern frontend technologies and frameworks",
        skills: &[
            skill("React", 88, Advanced, "#61dafb", "Projects"),
            skill("HTML5", 95, Advanced, "#e34f26", "Academic"),
            skill("CSS3", 95, Advanced, "#1572b6", "Academic"),
        ],
    },
    Category {
        title: "Backend & Database",
        gradient: "from-green-500 to-emerald-400",
        description: "Server-side technologies and database management",
        skills: &[
            skill("Node.js", 82, Intermediate, "#339933", "Projects"),
            skill("Spring Boot", 40, Beginner, "#6db33f", "Learning"),
            skill("MongoDB", 75, Intermediate, "#47a248", "Projects"),
            skill("MySQL", 82, Intermediate, "#4479a1", "Academic"),
        ],
    },
    Category {
        title: "Development Tools",
        gradient: "from-purple-500 to-violet-400",
        description: "Development tools, IDEs, and productivity software",
        skills: &[
            skill("VS Code", 90, Advanced, "#007acc", "Daily Use"),
            skill("Git", 85, Intermediate, "#f05032", "Projects"),
            skill("GitHub", 88, Intermediate, "#6e7681", "Projects"),
            skill("Maven", 60, Beginner, "#c71a36", "Learning"),
        ],
    },
    Category {
        title: "Frontend Frameworks",
        gradient: "from-cyan-500 to-blue-400",
        description: "CSS frameworks and UI libraries",
        skills: &[
            skill("Tailwind CSS", 85, Intermediate, "#06b6d4", "Projects"),
            skill("Bootstrap", 80, Intermediate, "#7952b3", "Academic"),
        ],
    },
];

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <RevealSection id="skills">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    badge="🛠 Tech Stack"
                    title="Skills & Expertise"
                    subtitle="The languages, frameworks and tools I use to bring ideas to life."
                />
                <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-8">
                    {CATEGORIES.iter().map(|c| view! { <CategoryCard category=c /> }).collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn CategoryCard(category: &'static Category) -> impl IntoView {
    view! {
        <div class="bg-gray-900/50 backdrop-blur-sm rounded-3xl p-6 border border-gray-800/50 hover:border-blue-500/30 transition-all duration-300">
            <div class=format!("h-1 w-16 rounded-full bg-gradient-to-r {} mb-4", category.gradient)></div>
            <h3 class="text-xl font-bold text-blue-100 mb-1">{category.title}</h3>
            <p class="text-sm text-blue-300 mb-6">{category.description}</p>
            <ul class="space-y-4">
                {category
                    .skills
                    .iter()
                    .map(|s| {
                        view! {
                            <li>
                                <div class="flex items-center justify-between mb-1 text-sm">
                                    <span class="font-medium text-white">{s.name}</span>
                                    <span class="flex items-center gap-2">
                                        <span class="text-gray-400 text-xs">{s.experience}</span>
                                        <span class=format!(
                                            "px-2 py-0.5 rounded-full border text-xs {}",
                                            s.level.badge_class(),
                                        )>{s.level.label()}</span>
                                        <span class="text-blue-300">{format!("{}%", s.percent)}</span>
                                    </span>
                                </div>
                                <div class="h-2 w-full rounded-full bg-gray-800 overflow-hidden">
                                    <div
                                        class="h-full rounded-full transition-all duration-1000"
                                        style=format!(
                                            "width: {}%; background-color: {}",
                                            s.percent,
                                            s.color,
                                        )
                                    ></div>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
