use leptos::{html, prelude::*};

use crate::animate::RevealOptions;

use super::hooks::{reveal_class, use_reveal};

#[component]
pub fn About() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_reveal(section_ref, RevealOptions::default().threshold(0.2));
    let revealed = move || reveal.get().is_revealed;

    view! {
        <section
            id="about"
            node_ref=section_ref
            class="py-12 scroll-section relative overflow-hidden"
        >
            <div class="absolute inset-0 pointer-events-none opacity-30">
                <div class="absolute top-1/3 right-0 w-80 h-80 bg-purple-200 dark:bg-purple-900 rounded-full blur-3xl"></div>
                <div class="absolute bottom-0 left-1/4 w-96 h-96 bg-blue-200 dark:bg-blue-900 rounded-full blur-3xl"></div>
            </div>

            <div class="container mx-auto px-4 relative z-10">
                <div class="max-w-5xl mx-auto">
                    <div class="grid grid-cols-1 md:grid-cols-5 gap-10 items-stretch">
                        <div class="md:col-span-2 flex flex-col h-full">
                            <h2 class=move || {
                                reveal_class(
                                    revealed(),
                                    "text-3xl font-bold mb-8 bg-clip-text text-transparent bg-gradient-to-r from-primary to-indigo-500",
                                )
                            }>"About Me"</h2>

                            <div class=move || {
                                reveal_class(
                                    revealed(),
                                    "relative overflow-hidden rounded-2xl w-full max-w-xs delay-300 shadow-lg h-full",
                                )
                            }>
                                <div class="h-full rounded-2xl flex items-center justify-center glass-morphism overflow-hidden">
                                    <img
                                        src="/images/portrait.png"
                                        alt="Indu Gundam"
                                        class="w-full h-full object-cover"
                                    />
                                </div>
                                <div class="absolute inset-0 rounded-2xl border border-primary/10"></div>
                            </div>

                            <div class=move || {
                                reveal_class(
                                    revealed(),
                                    "mt-6 flex justify-center md:justify-start space-x-4 delay-500",
                                )
                            }>
                                <a
                                    href="/IndugundamResume.pdf"
                                    target="_blank"
                                    class="inline-flex items-center justify-center space-x-2 px-4 py-2 text-sm glass-morphism rounded-lg font-medium hover:bg-white/10 transition-all shadow-md"
                                >
                                    "View Resume"
                                </a>
                                <a
                                    href="/IndugundamResume.pdf"
                                    download="Indu_Gundam_Resume.pdf"
                                    class="inline-flex items-center justify-center space-x-2 px-4 py-2 text-sm bg-gradient-blue text-primary-foreground rounded-lg font-medium hover:shadow-lg transition-all shadow-md"
                                >
                                    "Download Resume"
                                </a>
                            </div>
                        </div>

                        <div class=move || {
                            reveal_class(
                                revealed(),
                                "md:col-span-3 delay-300 glass-morphism p-6 rounded-2xl shadow-lg flex flex-col justify-center h-full",
                            )
                        }>
                            <div class="space-y-4 text-base leading-relaxed text-foreground/90">
                                <p>
                                    "Passionate and dedicated student currently pursuing my undergraduate studies in Information Technology. I have a strong academic background with real-time exposure in implementing various projects in Java, Cloud (Azure), and Web related technologies."
                                </p>
                                <p>
                                    "My focus lies in problem solving (Algorithms), debugging, and communication skills. I'm committed to continuous learning and applying cutting-edge technologies to solve real-world problems."
                                </p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
