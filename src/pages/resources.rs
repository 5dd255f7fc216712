use leptos::prelude::*;

use crate::content::RESOURCES;
use crate::ui::{Button, ButtonVariant, Container, SectionTitle};

#[component]
pub fn ResourcesPage() -> impl IntoView {
    view! {
        <section class="page">
            <Container>
                <SectionTitle
                    eyebrow="Resources"
                    title="Guides, docs, and updates"
                    subtitle="Everything you need to evaluate, integrate, and deploy NAIN."
                />
                <div class="card-grid">
                    {RESOURCES
                        .iter()
                        .map(|title| view! {
                            <div class="card">
                                <h3 class="card-title">{*title}</h3>
                                <p class="card-text">"Short intro paragraph and a link to learn more."</p>
                                <Button variant=ButtonVariant::Ghost href="#">"Read more"</Button>
                            </div>
                        })
                        .collect_view()}
                </div>
            </Container>
        </section>
    }
}
