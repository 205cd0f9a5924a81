use leptos::prelude::*;

use super::reveal::{RevealSection, SectionHeader};

#[derive(Clone, Copy)]
enum Category {
    FullStack,
    Mobile,
    Frontend,
}

impl Category {
    fn label(self) -> &'static str {
        match self {
            Category::FullStack => "fullstack",
            Category::Mobile => "mobile",
            Category::Frontend => "frontend",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Category::FullStack => "🌐",
            Category::Mobile => "📱",
            Category::Frontend => "🎨",
        }
    }

    fn gradient(self) -> &'static str {
        match self {
            Category::FullStack => "from-blue-500 to-cyan-500",
            Category::Mobile => "from-green-500 to-emerald-500",
            Category::Frontend => "from-purple-500 to-pink-500",
        }
    }
}

struct Project {
    title: &'static str,
    description: &'static str,
    image: &'static str,
    technologies: &'static [&'static str],
    code_link: &'static str,
    category: Category,
    featured: bool,
    year: &'static str,
    status: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Placement Beacon",
        description: "A comprehensive placement management platform with real-time notifications, student tracking, and company management features.",
        image: "/assets/projects/placement.jpg",
        technologies: &["React", "Node.js", "MongoDB", "Express"],
        code_link: "https://github.com/22471A05H5/react",
        category: Category::FullStack,
        featured: true,
        year: "2024",
        status: "Completed",
    },
    Project {
        title: "Food Donation Platform",
        description: "A social impact web application connecting food donors with NGOs to reduce food waste and help communities.",
        image: "/assets/projects/food.jpg",
        technologies: &["Angular", "MySQL", "TypeScript"],
        code_link: "https://github.com/22471A05H5/CSP-Project",
        category: Category::FullStack,
        featured: true,
        year: "2024",
        status: "Completed",
    },
    Project {
        title: "Android High School App",
        description: "A modern school management mobile app with task tracking, notifications, and student-teacher communication.",
        image: "/assets/projects/android.jpg",
        technologies: &["Kotlin", "XML", "Firebase", "Material Design"],
        code_link: "https://github.com/22471A05H5/AndroidProject-1",
        category: Category::Mobile,
        featured: false,
        year: "2023",
        status: "Completed",
    },
    Project {
        title: "Jubli Sports Site",
        description: "A responsive sports showcase website with interactive galleries, team profiles, and event management.",
        image: "/assets/projects/sport.jpg",
        technologies: &["HTML5", "CSS3", "JavaScript", "Bootstrap"],
        code_link: "https://github.com/22471A05H5/jubli",
        category: Category::Frontend,
        featured: false,
        year: "2023",
        status: "Completed",
    },
];

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <RevealSection id="projects">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    badge="🚀 Portfolio"
                    title="Featured Projects"
                    subtitle="A selection of things I've designed and built."
                />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {PROJECTS.iter().map(|p| view! { <ProjectCard project=p /> }).collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let category = project.category;
    view! {
        <article class="group relative bg-gray-900/50 backdrop-blur-sm rounded-3xl overflow-hidden border border-gray-800/50 hover:border-blue-500/30 transition-all duration-500 hover:scale-[1.02]">
            <div class="relative overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    loading="lazy"
                    class="w-full h-56 object-cover group-hover:scale-110 transition-transform duration-700"
                />
                {project
                    .featured
                    .then(|| {
                        view! {
                            <span class="absolute top-4 left-4 px-3 py-1 rounded-full bg-gradient-to-r from-yellow-500 to-orange-500 text-white text-xs font-semibold">
                                "★ Featured"
                            </span>
                        }
                    })}
                <span class=format!(
                    "absolute top-4 right-4 flex items-center gap-1 bg-gradient-to-r {} text-white px-3 py-1 rounded-full text-xs font-medium",
                    category.gradient(),
                )>{category.icon()} " " {category.label()}</span>
            </div>
            <div class="p-6">
                <div class="flex items-center justify-between mb-2 text-sm text-gray-400">
                    <span>{project.year}</span>
                    <span class="text-green-400">{project.status}</span>
                </div>
                <h3 class="text-xl font-bold text-white mb-2 group-hover:text-blue-300 transition-colors">
                    {project.title}
                </h3>
                <p class="text-blue-200 text-sm leading-relaxed mb-4">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .technologies
                        .iter()
                        .map(|t| {
                            view! {
                                <span class="px-3 py-1 rounded-full bg-blue-500/10 border border-blue-500/20 text-blue-300 text-xs">
                                    {*t}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <a
                    href=project.code_link
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-flex items-center gap-2 px-4 py-2 rounded-xl bg-gray-800/50 border border-gray-700 hover:border-blue-400/50 text-gray-300 hover:text-white text-sm transition-all duration-300"
                >
                    <i class="devicon-github-plain"></i>
                    "View Code"
                </a>
            </div>
        </article>
    }
}
