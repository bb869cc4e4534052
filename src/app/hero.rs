use leptos::prelude::*;

use super::hooks::{reveal_class, use_mount_fade, use_typing};

const TAGLINE: &str = "Developer, Problem Solver, Innovation Enthusiast";
const TYPE_SPEED_MS: u64 = 35;

/// Landing banner. Unlike the scroll sections this fades in on a short
/// mount timer (it is already in the viewport) and types out the tagline.
#[component]
pub fn Hero() -> impl IntoView {
    let visible = use_mount_fade(100.0);
    let typing = use_typing(TAGLINE, TYPE_SPEED_MS);

    view! {
        <section
            id="home"
            class="relative min-h-[90vh] flex flex-col items-center justify-center py-12 overflow-hidden scroll-section"
        >
            <div class="absolute inset-0 pointer-events-none">
                <div class="absolute top-1/4 -right-10 w-72 h-72 bg-primary/20 rounded-full blur-[100px]"></div>
                <div class="absolute bottom-1/4 -left-20 w-80 h-80 bg-indigo-500/20 rounded-full blur-[100px]"></div>
            </div>

            <div class="container mx-auto px-4 relative z-10">
                <div class="max-w-4xl mx-auto">
                    <div class=move || {
                        reveal_class(
                            visible.get(),
                            "px-4 py-2 rounded-full glass-morphism inline-flex items-center mb-8 shadow-sm",
                        )
                    }>
                        <span class="text-sm font-medium">"Bachelor of Information Technology"</span>
                    </div>

                    <h1 class=move || {
                        reveal_class(
                            visible.get(),
                            "text-4xl md:text-6xl lg:text-7xl font-bold mb-4 leading-tight tracking-tight",
                        )
                    }>
                        <span class="block bg-clip-text text-transparent bg-gradient-to-r from-foreground to-foreground/80">
                            "Hello, I'm Indu Gundam"
                        </span>
                    </h1>

                    <div class=move || {
                        reveal_class(visible.get(), "h-12 md:h-16 overflow-hidden delay-300")
                    }>
                        <span class="text-2xl md:text-3xl text-muted-foreground font-light">
                            {move || typing.with(|t| t.visible().to_string())}
                        </span>
                        <span class=move || {
                            if typing.with(|t| t.is_complete()) {
                                "hidden"
                            } else {
                                "inline-block w-0.5 h-5 bg-primary animate-pulse ml-1"
                            }
                        }></span>
                    </div>

                    <div class=move || {
                        reveal_class(
                            visible.get(),
                            "mt-8 max-w-xl text-muted-foreground text-balance leading-relaxed delay-500",
                        )
                    }>
                        <p>
                            "Passionate student with a focus on Java, Cloud technologies, and Web development. Building solutions that solve real problems."
                        </p>
                    </div>

                    <div class=move || {
                        reveal_class(visible.get(), "mt-10 space-x-4 delay-700")
                    }>
                        <a
                            href="#projects"
                            class="px-6 py-3 bg-gradient-blue text-primary-foreground rounded-lg font-medium hover:shadow-lg transition-all duration-300 shadow-md"
                        >
                            "View My Work"
                        </a>
                        <a
                            href="#contact"
                            class="px-6 py-3 glass-morphism rounded-lg font-medium hover:bg-white/10 transition-all duration-300"
                        >
                            "Get In Touch"
                        </a>
                    </div>
                </div>
            </div>

            <div class=move || {
                let state = if visible.get() { "opacity-100" } else { "opacity-0" };
                format!(
                    "absolute bottom-8 left-1/2 transform -translate-x-1/2 float transition-all duration-700 delay-1000 {state}",
                )
            }>
                <a
                    href="#about"
                    aria-label="Scroll to About section"
                    class="flex flex-col items-center justify-center"
                >
                    <span class="text-sm text-muted-foreground mb-2">"Scroll Down"</span>
                    <span class="text-primary animate-bounce">"↓"</span>
                </a>
            </div>
        </section>
    }
}
