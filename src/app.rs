mod about;
mod blog;
mod contact;
mod education;
mod email;
mod experience;
mod hero;
mod home;
mod hooks;
mod nav;
mod projects;
mod skills;
mod toast;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use home::HomePage;
use nav::Navigation;
use toast::{Toaster, Toasts};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                // Delivery SDK for the contact form. It may load late or not
                // at all; the form polls for the global and keeps the mailto
                // fallback working regardless.
                <script src="https://cdn.jsdelivr.net/npm/@emailjs/browser@3/dist/email.min.js"></script>
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(Toasts::new());

    view! {
        // sets the document title
        <Title formatter=|title| format!("Indu Gundam - {title}") />

        <Router>
            <div class="min-h-screen bg-gradient-hero text-foreground overflow-x-hidden relative">
                <Navigation />
                <main class="w-full mx-auto relative z-10">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
                <Toaster />
            </div>
        </Router>
    }
}

const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
fn Footer() -> impl IntoView {
    // BUILD_TIME is RFC 3339, so the year is the leading four characters
    let year = &BUILD_TIME[..4];
    view! {
        <footer class="w-full py-8 border-t border-primary/10 text-center text-sm text-muted-foreground relative z-10 backdrop-blur-sm">
            <div class="container mx-auto">
                <p>"© " {year} " Indu Gundam. All rights reserved."</p>
                <p class="mt-1">"Built with Leptos & Tailwind CSS"</p>
            </div>
        </footer>
    }
}
