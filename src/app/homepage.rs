use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    contact::ContactSection,
    lazy::LazySection,
    projects::Projects,
    sections::{About, Certifications, Hero, Services, Testimonials},
};
use crate::section::Skeleton;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Full Stack Developer" />
        <LazySection skeleton=Skeleton::Hero>
            <Hero />
        </LazySection>
        <LazySection>
            <About />
        </LazySection>
        <LazySection skeleton=Skeleton::Card>
            <Services />
        </LazySection>
        <LazySection skeleton=Skeleton::Grid>
            <Projects />
        </LazySection>
        <LazySection skeleton=Skeleton::Card>
            <Certifications />
        </LazySection>
        <LazySection>
            <Testimonials />
        </LazySection>
        <LazySection>
            <ContactSection />
        </LazySection>
    }
}
