use leptos::{html, prelude::*};

use crate::animate::RevealOptions;

use super::hooks::{reveal_class, use_reveal};

struct Project {
    title: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    github: Option<&'static str>,
    demo: Option<&'static str>,
    image: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Lottery Hub",
        description: "A secure platform for managing lottery tickets and results. Implemented real-time updates, ticket verification, and a personalized user dashboard.",
        tags: &["React", "Tailwind CSS", "TypeScript", "Node.js"],
        github: Some("https://github.com/Indugundam/LotteryHub"),
        demo: Some("https://ticket-treasure-hub.vercel.app/"),
        image: "/images/lottery-hub.png",
    },
    Project {
        title: "Food Finder",
        description: "Web application that helps users discover nearby restaurants, explore menus, and find the best food deals based on their preferences.",
        tags: &["React", "Tailwind CSS", "JavaScript"],
        github: Some("https://github.com/Indugundam/Food_Finder"),
        demo: Some("https://food-finder-navy.vercel.app/"),
        image: "/images/food-finder.png",
    },
    Project {
        title: "Extensible Desktop Search",
        description: "High-performance desktop application as a robust alternative to Windows' native search tool, leveraging Swings to deliver lightning-fast query results with minimal latency.",
        tags: &["Java", "Swings"],
        github: None,
        demo: None,
        image: "/images/desktop-search.png",
    },
];

#[component]
pub fn Projects() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_reveal(section_ref, RevealOptions::default());
    let revealed = Signal::derive(move || reveal.get().is_revealed);

    view! {
        <section
            id="projects"
            node_ref=section_ref
            class="py-12 scroll-section relative overflow-hidden"
        >
            <div class="absolute inset-0 pointer-events-none opacity-30">
                <div class="absolute top-1/4 right-0 w-80 h-80 bg-purple-200 dark:bg-purple-900 rounded-full blur-3xl"></div>
                <div class="absolute bottom-1/3 left-0 w-96 h-96 bg-blue-200 dark:bg-blue-900 rounded-full blur-3xl"></div>
            </div>

            <div class="container mx-auto px-4 relative z-10">
                <div class="text-center max-w-3xl mx-auto mb-10">
                    <h2 class=move || {
                        reveal_class(
                            revealed.get(),
                            "text-3xl font-bold mb-4 bg-clip-text text-transparent bg-gradient-to-r from-primary to-indigo-500",
                        )
                    }>"Projects"</h2>
                    <p class=move || {
                        reveal_class(revealed.get(), "text-muted-foreground delay-200")
                    }>
                        "A collection of projects that showcase my skills and experience in various technologies"
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <ProjectCard project delay_ms=i * 100 + 300 revealed />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(
    project: &'static Project,
    delay_ms: usize,
    revealed: Signal<bool>,
) -> impl IntoView {
    view! {
        <div
            class=move || {
                reveal_class(
                    revealed.get(),
                    "group relative glass-morphism overflow-hidden rounded-xl shadow-lg",
                )
            }
            style=format!("transition-delay: {delay_ms}ms")
        >
            <div class="aspect-video bg-gradient-to-br from-secondary/50 to-secondary/20 overflow-hidden">
                <a
                    href=project.demo.unwrap_or("#projects")
                    target=project.demo.map(|_| "_blank")
                    rel=project.demo.map(|_| "noopener noreferrer")
                    class=if project.demo.is_some() { "cursor-pointer" } else { "cursor-default" }
                >
                    <img
                        src=project.image
                        alt=project.title
                        class="w-full h-full object-cover transition-transform duration-300"
                    />
                </a>
            </div>

            <div class="p-6">
                <div class="flex flex-wrap gap-2 mb-3">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="text-xs px-2 py-1 rounded-full font-medium bg-primary/20 text-primary dark:bg-primary/30 dark:text-primary-foreground shadow-sm">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>

                <h3 class="text-xl font-semibold mb-2 bg-clip-text text-transparent bg-gradient-to-r from-foreground to-foreground/80 group-hover:from-primary group-hover:to-indigo-500 transition-all duration-300">
                    {project.title}
                </h3>
                <p class="text-sm text-muted-foreground mb-4">{project.description}</p>

                <div class="flex items-center space-x-3">
                    {project
                        .github
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="inline-flex items-center justify-center space-x-2 text-sm text-foreground/80 hover:text-primary transition-colors"
                                >
                                    <i class="devicon-github-original text-sm"></i>
                                    <span>"View Code"</span>
                                </a>
                            }
                        })}
                    {project
                        .demo
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="inline-flex items-center justify-center space-x-2 text-sm text-foreground/80 hover:text-primary transition-colors"
                                >
                                    <span>"↗"</span>
                                    <span>"Live Demo"</span>
                                </a>
                            }
                        })}
                </div>
            </div>

            <div class="absolute bottom-0 left-0 w-full h-1 bg-gradient-to-r from-primary to-indigo-500 transition-transform duration-500 translate-y-full group-hover:translate-y-0"></div>
        </div>
    }
}
