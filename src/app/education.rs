use leptos::{html, prelude::*};

use crate::animate::RevealOptions;

use super::hooks::{reveal_class, use_reveal};

struct Entry {
    heading: &'static str,
    subheading: Option<&'static str>,
    detail: &'static str,
}

const EDUCATION: &[Entry] = &[
    Entry {
        heading: "Bachelor's in Information Technology",
        subheading: Some("Gayatri Vidya Parishad College (2022-Current)"),
        detail: "9.62 CGPA",
    },
    Entry {
        heading: "Intermediate",
        subheading: Some("Narayana Junior College, Kurnool (2020-2022)"),
        detail: "98.9%",
    },
    Entry {
        heading: "Xth Grade",
        subheading: Some("Jyothi High School, Bandiātmakur (2020)"),
        detail: "98.8%",
    },
];

const ACHIEVEMENTS: &[Entry] = &[
    Entry {
        heading: "Academic Topper",
        subheading: None,
        detail: "of our department (2022-2023) and (2023-2024)",
    },
    Entry {
        heading: "Leadership Roles",
        subheading: None,
        detail: "President, Code Chronicles (2024) and Vice President, AlgoRhythm",
    },
    Entry {
        heading: "Certifications",
        subheading: None,
        detail: "Google Cloud, AWS Technologies, and Udemy certified Java Programmer",
    },
];

#[component]
pub fn Education() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_reveal(section_ref, RevealOptions::default().threshold(0.2));
    let revealed = move || reveal.get().is_revealed;

    view! {
        <section
            id="education"
            node_ref=section_ref
            class="py-20 bg-gradient-section scroll-section relative overflow-hidden"
        >
            <div class="absolute inset-0 pointer-events-none opacity-30">
                <div class="absolute top-0 left-0 w-96 h-96 bg-indigo-200 dark:bg-indigo-900 rounded-full blur-3xl"></div>
                <div class="absolute bottom-0 right-0 w-80 h-80 bg-blue-200 dark:bg-blue-900 rounded-full blur-3xl"></div>
            </div>

            <div class="container mx-auto px-4 relative z-10">
                <div class="max-w-5xl mx-auto">
                    <h2 class=move || {
                        reveal_class(
                            revealed(),
                            "text-3xl font-bold mb-12 text-center bg-clip-text text-transparent bg-gradient-to-r from-primary to-indigo-500",
                        )
                    }>"Education & Achievements"</h2>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-10">
                        <EntryCard
                            title="Education"
                            icon="🎓"
                            entries=EDUCATION
                            revealed=Signal::derive(revealed)
                            delay="delay-200"
                        />
                        <EntryCard
                            title="Achievements"
                            icon="🏆"
                            entries=ACHIEVEMENTS
                            revealed=Signal::derive(revealed)
                            delay="delay-[400ms]"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn EntryCard(
    title: &'static str,
    icon: &'static str,
    entries: &'static [Entry],
    revealed: Signal<bool>,
    delay: &'static str,
) -> impl IntoView {
    view! {
        <div class=move || {
            reveal_class(
                revealed.get(),
                &format!("glass-morphism p-8 rounded-2xl shadow-lg scale-on-hover {delay}"),
            )
        }>
            <div class="flex items-center mb-6">
                <div class="p-3 bg-gradient-to-br from-primary/10 to-indigo-500/10 rounded-xl mr-4 text-xl">
                    {icon}
                </div>
                <h3 class="text-xl font-semibold bg-clip-text text-transparent bg-gradient-to-r from-foreground to-foreground/80">
                    {title}
                </h3>
            </div>

            <ul class="space-y-6">
                {entries
                    .iter()
                    .map(|entry| {
                        view! {
                            <li class="relative pl-8 before:content-[''] before:absolute before:left-0 before:top-3 before:w-3 before:h-3 before:bg-gradient-blue before:rounded-full">
                                <h4 class="text-base font-medium">{entry.heading}</h4>
                                {entry
                                    .subheading
                                    .map(|sub| {
                                        view! {
                                            <p class="text-sm text-transparent bg-clip-text bg-gradient-to-r from-primary to-indigo-500 font-medium mt-1">
                                                {sub}
                                            </p>
                                        }
                                    })}
                                <p class="text-sm text-muted-foreground mt-1">{entry.detail}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
