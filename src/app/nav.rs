use leptos::prelude::*;
use leptos_use::{use_preferred_dark, use_window_scroll};
use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum Theme {
    Light,
    Dark,
}

impl Theme {
    fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "#home"),
    ("About", "#about"),
    ("Skills", "#skills"),
    ("Projects", "#projects"),
    ("Experience", "#experience"),
    ("Contact", "#contact"),
];

#[component]
pub fn Navigation() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Signal::derive(move || scroll_y.get() > 50.0);

    // Saved preference wins; otherwise follow the system color scheme.
    #[cfg(feature = "hydrate")]
    let (stored_theme, set_stored_theme, _) =
        use_local_storage::<Option<Theme>, JsonSerdeWasmCodec>("theme");
    #[cfg(not(feature = "hydrate"))]
    let (stored_theme, set_stored_theme) = signal(None::<Theme>);

    let prefers_dark = use_preferred_dark();
    let theme = Signal::derive(move || {
        stored_theme.get().unwrap_or(if prefers_dark.get() {
            Theme::Dark
        } else {
            Theme::Light
        })
    });

    // Tailwind's class-strategy dark mode keys off the root element.
    Effect::new(move |_| {
        let Some(root) = document().document_element() else {
            return;
        };
        let classes = root.class_list();
        let res = match theme.get() {
            Theme::Dark => classes.add_1("dark"),
            Theme::Light => classes.remove_1("dark"),
        };
        if let Err(err) = res {
            log::error!("failed to apply theme class: {err:?}");
        }
    });

    let toggle_theme = move |_| set_stored_theme.set(Some(theme.get_untracked().flipped()));
    let theme_icon = move || match theme.get() {
        Theme::Light => "🌙",
        Theme::Dark => "☀️",
    };

    view! {
        <header class=move || {
            let bar = if scrolled.get() {
                "py-4 bg-background/80 backdrop-blur-md border-b"
            } else {
                "py-6 bg-transparent"
            };
            format!(
                "fixed top-0 left-0 w-full z-50 transition-all duration-300 ease-in-out {bar}",
            )
        }>
            <div class="container mx-auto px-4 flex items-center justify-between">
                <a href="#home" class="text-xl font-bold tracking-tight">
                    "Indu Gundam"
                </a>

                <nav class="hidden md:flex items-center space-x-8">
                    {NAV_LINKS
                        .iter()
                        .map(|(name, href)| {
                            view! {
                                <a
                                    href=*href
                                    class="text-sm text-foreground/80 hover:text-foreground transition-colors duration-200 hover:underline underline-offset-4"
                                >
                                    {*name}
                                </a>
                            }
                        })
                        .collect_view()}

                    <div class="flex items-center space-x-4">
                        <SocialLinks />
                        <button
                            on:click=toggle_theme
                            class="w-9 h-9 flex items-center justify-center rounded-full bg-secondary hover:bg-secondary/80 transition-colors"
                            aria-label="Toggle theme"
                        >
                            {theme_icon}
                        </button>
                    </div>
                </nav>

                <div class="md:hidden flex items-center">
                    <button
                        on:click=toggle_theme
                        class="mr-4 w-9 h-9 flex items-center justify-center rounded-full bg-secondary hover:bg-secondary/80 transition-colors"
                        aria-label="Toggle theme"
                    >
                        {theme_icon}
                    </button>
                    <button
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        class="w-9 h-9 flex items-center justify-center rounded-full bg-secondary hover:bg-secondary/80 transition-colors"
                        aria-label="Toggle menu"
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            {move || {
                menu_open
                    .get()
                    .then(|| {
                        view! {
                            <div class="md:hidden absolute top-full left-0 w-full bg-background border-b animate-slide-down">
                                <div class="container mx-auto px-4 py-4">
                                    <nav class="flex flex-col space-y-4">
                                        {NAV_LINKS
                                            .iter()
                                            .map(|(name, href)| {
                                                view! {
                                                    <a
                                                        href=*href
                                                        class="text-foreground/80 hover:text-foreground py-2 transition-colors duration-200"
                                                        on:click=move |_| set_menu_open.set(false)
                                                    >
                                                        {*name}
                                                    </a>
                                                }
                                            })
                                            .collect_view()}
                                        <div class="flex items-center space-x-4 py-2">
                                            <SocialLinks />
                                        </div>
                                    </nav>
                                </div>
                            </div>
                        }
                    })
            }}
        </header>
    }
}

#[component]
fn SocialLinks() -> impl IntoView {
    view! {
        <a
            href="https://github.com/indugundam"
            target="_blank"
            rel="noopener noreferrer"
            class="w-9 h-9 flex items-center justify-center rounded-full bg-secondary hover:bg-secondary/80 transition-colors"
            aria-label="GitHub"
        >
            <i class="devicon-github-original"></i>
        </a>
        <a
            href="https://linkedin.com/in/indugundam"
            target="_blank"
            rel="noopener noreferrer"
            class="w-9 h-9 flex items-center justify-center rounded-full bg-secondary hover:bg-secondary/80 transition-colors"
            aria-label="LinkedIn"
        >
            <i class="devicon-linkedin-plain"></i>
        </a>
        <a
            href="mailto:indugundam2004@gmail.com"
            class="w-9 h-9 flex items-center justify-center rounded-full bg-secondary hover:bg-secondary/80 transition-colors"
            aria-label="Email"
        >
            "@"
        </a>
    }
}
