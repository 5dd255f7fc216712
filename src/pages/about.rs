use leptos::prelude::*;

use crate::content::ABOUT_HIGHLIGHTS;
use crate::ui::{Container, SectionTitle};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page">
            <Container>
                <SectionTitle
                    eyebrow="About"
                    title="Built by practitioners of applied AI"
                    subtitle="Founder: Govind Sharma — Data Scientist, Researcher."
                />
                <div class="split-grid">
                    <div class="card">
                        <h3 class="card-title">"Mission"</h3>
                        <p class="card-text">
                            "We believe AI should not be a luxury. Every human voice deserves access to "
                            "intelligence — no matter where they are or what device they use."
                        </p>
                    </div>
                    <div class="card">
                        <h3 class="card-title">"Highlights"</h3>
                        <ul class="card-list">
                            {ABOUT_HIGHLIGHTS
                                .iter()
                                .map(|highlight| view! { <li>{*highlight}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </Container>
        </section>
    }
}
