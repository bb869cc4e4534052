use leptos::{html, prelude::*};

use crate::animate::RevealOptions;

use super::hooks::{reveal_class, use_reveal};

struct Experience {
    title: &'static str,
    company: &'static str,
    date: &'static str,
    bullets: &'static [&'static str],
}

const EXPERIENCES: &[Experience] = &[
    Experience {
        title: "AWS Cloud Architecting Virtual Internship",
        company: "AWS / Fashion Startup",
        date: "May 2023 - Oct 2023",
        bullets: &[
            "Built a serverless e-commerce platform using AWS S3 for hosting, CloudFront for global delivery, and Lambda for backend functionality.",
            "Leveraged DynamoDB for product storage, and IAM for secure access.",
            "Automated infrastructure with CloudFormation, followed AWS Well-Architected Framework for scalability and reliability.",
        ],
    },
    Experience {
        title: "Vice President",
        company: "AlgoRhythm",
        date: "2024 - Present",
        bullets: &[
            "Managed a competitive coding club focused on algorithm optimization and data structures.",
            "Conducted regular coding challenges and hackathons to enhance problem-solving skills.",
            "Collaborated with faculty to integrate competitive programming into the curriculum.",
        ],
    },
];

#[component]
pub fn Experience() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_reveal(section_ref, RevealOptions::default());
    let revealed = Signal::derive(move || reveal.get().is_revealed);

    view! {
        <section
            id="experience"
            node_ref=section_ref
            class="py-12 bg-gradient-section scroll-section relative overflow-hidden"
        >
            <div class="absolute inset-0 pointer-events-none opacity-30">
                <div class="absolute bottom-0 right-0 w-96 h-96 bg-indigo-200 dark:bg-indigo-900 rounded-full blur-3xl"></div>
                <div class="absolute top-1/3 left-0 w-80 h-80 bg-blue-200 dark:bg-blue-900 rounded-full blur-3xl"></div>
            </div>

            <div class="container mx-auto px-4 relative z-10">
                <div class="text-center max-w-3xl mx-auto mb-10">
                    <h2 class=move || {
                        reveal_class(
                            revealed.get(),
                            "text-3xl font-bold mb-4 bg-clip-text text-transparent bg-gradient-to-r from-primary to-indigo-500",
                        )
                    }>"Experience & Achievements"</h2>
                    <p class=move || {
                        reveal_class(revealed.get(), "text-muted-foreground delay-200")
                    }>"My professional journey and key leadership roles"</p>
                </div>

                <div class="max-w-3xl mx-auto">
                    {EXPERIENCES
                        .iter()
                        .enumerate()
                        .map(|(i, experience)| {
                            view! {
                                <TimelineItem
                                    experience
                                    delay_ms=i * 200 + 300
                                    is_last=i == EXPERIENCES.len() - 1
                                    revealed
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineItem(
    experience: &'static Experience,
    delay_ms: usize,
    is_last: bool,
    revealed: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="relative">
            {(!is_last)
                .then(|| {
                    view! {
                        <div class="absolute top-6 left-4 bottom-0 w-0.5 bg-gradient-to-b from-primary/50 via-primary/30 to-primary/10">
                            <div
                                class=move || {
                                    let fill = if revealed.get() { "h-full" } else { "h-0" };
                                    format!(
                                        "w-full bg-gradient-to-b from-primary via-primary/80 to-primary/60 transition-all duration-1000 {fill}",
                                    )
                                }
                                style=format!("transition-delay: {}ms", delay_ms + 500)
                            ></div>
                        </div>
                    }
                })}

            <div class="flex">
                <div class="flex-shrink-0 mr-4">
                    <div
                        class=move || {
                            let state = if revealed.get() {
                                "opacity-100 scale-100"
                            } else {
                                "opacity-0 scale-0"
                            };
                            format!(
                                "w-8 h-8 rounded-full border-2 border-primary/30 flex items-center justify-center z-10 relative transition-all duration-500 bg-background shadow-md {state}",
                            )
                        }
                        style=format!("transition-delay: {delay_ms}ms")
                    >
                        <div class="w-3.5 h-3.5 rounded-full bg-gradient-blue"></div>
                    </div>
                </div>

                <div
                    class=move || {
                        reveal_class(
                            revealed.get(),
                            "glass-morphism rounded-xl p-6 mb-10 w-full shadow-lg scale-on-hover",
                        )
                    }
                    style=format!("transition-delay: {delay_ms}ms")
                >
                    <div class="flex flex-col md:flex-row md:items-center md:justify-between mb-2">
                        <h3 class="text-lg font-semibold bg-clip-text text-transparent bg-gradient-to-r from-foreground to-foreground/80">
                            {experience.title}
                        </h3>
                        <span class="text-sm text-primary mt-1 md:mt-0 font-medium">
                            {experience.date}
                        </span>
                    </div>

                    <p class="text-base font-medium bg-clip-text text-transparent bg-gradient-to-r from-primary to-indigo-500 mb-3">
                        {experience.company}
                    </p>

                    <ul class="list-disc list-inside text-sm text-muted-foreground space-y-1">
                        {experience
                            .bullets
                            .iter()
                            .map(|bullet| view! { <li>{*bullet}</li> })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}
