use leptos::{html, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::animate::RevealOptions;

use super::hooks::{reveal_class, use_reveal};

const SKILL_CARDS: &[(&str, &str, &str)] = &[
    (
        "💻",
        "Programming Languages",
        "Proficient in Java, Python, and various web technologies. Experienced in building robust applications.",
    ),
    (
        "☁️",
        "Cloud Technologies",
        "Experienced with AWS and Azure services. Completed certifications and built cloud-native applications.",
    ),
    (
        "🔍",
        "Problem Solving",
        "Strong algorithm skills and analytical thinking. Capable of debugging complex issues efficiently.",
    ),
    (
        "🌐",
        "Web Development",
        "Experience with React, HTML, CSS, and JavaScript to create responsive and interactive web applications.",
    ),
    (
        "🗄️",
        "Database Management",
        "Proficient in SQL, MySQL, Oracle, and NoSQL databases. Experience in database design and optimization.",
    ),
    (
        "🔄",
        "Version Control",
        "Experienced with Git and GitHub for collaboration, code management, and version control.",
    ),
];

const PROGRAMMING_SKILLS: &[(&str, u8)] = &[
    ("Java", 95),
    ("Python", 85),
    ("JavaScript", 80),
    ("SQL", 90),
    ("HTML/CSS", 85),
];

const DEVELOPMENT_SKILLS: &[(&str, u8)] = &[
    ("React", 80),
    ("Cloud (AWS & Azure)", 85),
    ("Node.js", 75),
    ("Git/GitHub", 90),
    ("Debugging", 95),
];

#[component]
pub fn Skills() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_reveal(section_ref, RevealOptions::default());
    let revealed = Signal::derive(move || reveal.get().is_revealed);

    view! {
        <section
            id="skills"
            node_ref=section_ref
            class="py-20 bg-gradient-section scroll-section relative overflow-hidden"
        >
            <div class="absolute inset-0 pointer-events-none opacity-30">
                <div class="absolute top-0 right-0 w-64 h-64 bg-blue-200 dark:bg-blue-900 rounded-full blur-3xl"></div>
                <div class="absolute bottom-0 left-0 w-72 h-72 bg-indigo-200 dark:bg-indigo-900 rounded-full blur-3xl"></div>
            </div>

            <div class="container mx-auto px-4 relative z-10">
                <div class="text-center max-w-3xl mx-auto mb-16">
                    <h2 class=move || {
                        reveal_class(
                            revealed.get(),
                            "text-3xl font-bold mb-4 bg-clip-text text-transparent bg-gradient-to-r from-primary to-indigo-500",
                        )
                    }>"Skills & Expertise"</h2>
                    <p class=move || {
                        reveal_class(revealed.get(), "text-muted-foreground delay-200")
                    }>
                        "Here are the technologies and skills I've developed throughout my academic journey and projects"
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 mb-16">
                    {SKILL_CARDS
                        .iter()
                        .enumerate()
                        .map(|(i, (icon, title, description))| {
                            let delay_ms = i * 100 + 300;
                            view! {
                                <div
                                    class=move || {
                                        reveal_class(
                                            revealed.get(),
                                            "glass-morphism rounded-xl p-6 shadow-lg scale-on-hover",
                                        )
                                    }
                                    style=format!("transition-delay: {delay_ms}ms")
                                >
                                    <div class="w-12 h-12 flex items-center justify-center bg-gradient-blue bg-opacity-10 rounded-lg mb-4 text-xl shadow-sm">
                                        {*icon}
                                    </div>
                                    <h3 class="text-lg font-semibold mb-2">{*title}</h3>
                                    <p class="text-sm text-muted-foreground">{*description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class=move || {
                    reveal_class(
                        revealed.get(),
                        "grid grid-cols-1 md:grid-cols-2 gap-10 max-w-4xl mx-auto delay-500",
                    )
                }>
                    <SkillColumn title="Programming Languages" skills=PROGRAMMING_SKILLS revealed base_delay=0.0 />
                    <SkillColumn title="Development Skills" skills=DEVELOPMENT_SKILLS revealed base_delay=300.0 />
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillColumn(
    title: &'static str,
    skills: &'static [(&'static str, u8)],
    revealed: Signal<bool>,
    base_delay: f64,
) -> impl IntoView {
    view! {
        <div class="glass-morphism p-6 rounded-xl shadow-lg">
            <h3 class="text-xl font-semibold mb-6 bg-clip-text text-transparent bg-gradient-to-r from-foreground to-foreground/80">
                {title}
            </h3>
            {skills
                .iter()
                .enumerate()
                .map(|(i, (name, percentage))| {
                    view! {
                        <SkillBar
                            name=*name
                            percentage=*percentage
                            delay_ms=base_delay + (i as f64) * 100.0
                            revealed
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Progress bar that fills from zero to its percentage once the section has
/// been revealed, staggered by `delay_ms`.
#[component]
fn SkillBar(
    name: &'static str,
    percentage: u8,
    delay_ms: f64,
    revealed: Signal<bool>,
) -> impl IntoView {
    let (width, set_width) = signal(0u8);

    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |pct: u8| {
            set_width.set(pct);
        },
        delay_ms,
    );
    Effect::new(move |_| {
        if revealed.get() {
            start(percentage);
        }
    });

    view! {
        <div class="mb-6">
            <div class="flex justify-between mb-2">
                <span class="text-sm font-medium">{name}</span>
                <span class="text-sm font-medium text-primary">{percentage}"%"</span>
            </div>
            <div class="h-2 bg-secondary/40 rounded-full overflow-hidden shadow-inner backdrop-blur-sm">
                <div
                    class="h-full bg-gradient-to-r from-primary to-indigo-500 transition-all duration-1000 ease-out rounded-full"
                    style:width=move || format!("{}%", width.get())
                ></div>
            </div>
        </div>
    }
}
