use leptos::prelude::*;

use crate::content::CASE_STUDIES;
use crate::ui::{Container, Pill, SectionTitle};

#[component]
pub fn CaseStudiesPage() -> impl IntoView {
    view! {
        <section class="page">
            <Container>
                <SectionTitle
                    eyebrow="Case Studies"
                    title="Real-world impact"
                    subtitle="Selected wins and pilots across sectors."
                />
                <div class="split-grid">
                    {CASE_STUDIES
                        .iter()
                        .map(|study| view! {
                            <article class="card">
                                <h3 class="card-title">{study.title}</h3>
                                <p class="card-text">{study.summary}</p>
                                <div class="tag-row">
                                    {study.tags.iter().map(|tag| view! { <Pill>{*tag}</Pill> }).collect_view()}
                                </div>
                            </article>
                        })
                        .collect_view()}
                </div>
            </Container>
        </section>
    }
}
