use leptos::prelude::*;
use leptos_meta::Title;

use super::about::About;
use super::blog::Blog;
use super::contact::ContactSection;
use super::education::Education;
use super::experience::Experience;
use super::hero::Hero;
use super::projects::Projects;
use super::skills::Skills;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="space-y-0">
            <Hero />
            <About />
            <Education />
            <Skills />
            <Projects />
            <Experience />
            <Blog />
            <ContactSection />
        </div>
    }
}
