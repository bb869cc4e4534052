use leptos::{html, prelude::*};

use crate::animate::RevealOptions;

use super::hooks::{reveal_class, use_reveal};

struct Post {
    title: &'static str,
    excerpt: &'static str,
    image: &'static str,
    date: &'static str,
    url: &'static str,
}

const POSTS: &[Post] = &[
    Post {
        title: "System Informer",
        excerpt: "A deep dive into System Informer, an open-source diagnostic and system utility tool for Windows that provides detailed insights into system performance, processes, services, and more.",
        image: "/images/blog-system-informer.png",
        date: "Dec 2024",
        url: "https://medium.com/@indugundam/system-informer-eb952516b199",
    },
    Post {
        title: "Engineering is No Longer a Passion, It's a Fashion",
        excerpt: "Exploring how engineering education has evolved from a passionate pursuit of knowledge to a fashionable career choice, and the implications this shift has on the quality of engineering graduates.",
        image: "/images/blog-engineering.png",
        date: "Oct 2024",
        url: "https://medium.com/@indugundam/engineering-is-no-longer-a-passion-its-a-fashion-2d2829eda634",
    },
    Post {
        title: "How the Web Became What It is Today",
        excerpt: "A journey through the history and evolution of the web - from ARPANET and Tim Berners-Lee's invention to Web 3.0 and beyond. Exploring key technologies, protocols, and paradigm shifts.",
        image: "/images/blog-web-history.png",
        date: "Sep 2024",
        url: "https://medium.com/@indugundam/how-the-web-became-what-it-is-today-e7cda47c1c1b",
    },
];

#[component]
pub fn Blog() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_reveal(section_ref, RevealOptions::default());
    let revealed = Signal::derive(move || reveal.get().is_revealed);

    view! {
        <section id="blog" node_ref=section_ref class="py-12 scroll-section">
            <div class="container mx-auto px-4">
                <div class="text-center max-w-3xl mx-auto mb-10">
                    <h2 class=move || {
                        reveal_class(revealed.get(), "text-3xl font-bold mb-4 text-primary")
                    }>"Blog"</h2>
                    <p class=move || {
                        reveal_class(revealed.get(), "text-muted-foreground delay-200")
                    }>"Thoughts, ideas, and insights on technology and development"</p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {POSTS
                        .iter()
                        .enumerate()
                        .map(|(i, post)| {
                            view! { <BlogCard post delay_ms=i * 100 + 300 revealed /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn BlogCard(post: &'static Post, delay_ms: usize, revealed: Signal<bool>) -> impl IntoView {
    view! {
        <a
            href=post.url
            target="_blank"
            rel="noopener noreferrer"
            class=move || {
                reveal_class(
                    revealed.get(),
                    "group flex flex-col h-full glass-morphism rounded-2xl overflow-hidden shadow-lg",
                )
            }
            style=format!("transition-delay: {delay_ms}ms")
        >
            <div class="aspect-video overflow-hidden">
                <img
                    src=post.image
                    alt=post.title
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-105"
                />
            </div>
            <div class="flex flex-col flex-grow p-6">
                <span class="text-xs text-muted-foreground mb-2">{post.date}</span>
                <h3 class="text-lg font-semibold mb-2 group-hover:text-primary transition-colors duration-300">
                    {post.title}
                </h3>
                <p class="text-sm text-muted-foreground flex-grow">{post.excerpt}</p>
                <span class="mt-4 inline-flex items-center text-sm font-medium text-primary">
                    "Read More" <span class="ml-1 transition-transform duration-300 group-hover:translate-x-1">"→"</span>
                </span>
            </div>
        </a>
    }
}
