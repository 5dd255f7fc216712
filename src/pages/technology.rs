use leptos::prelude::*;

use crate::content::{ARCHITECTURE_STEPS, SECURITY_POINTS};
use crate::ui::{Container, SectionTitle};

#[component]
pub fn TechnologyPage() -> impl IntoView {
    view! {
        <section class="page">
            <Container>
                <SectionTitle
                    eyebrow="Technology"
                    title="Modular, secure, and offline-friendly"
                    subtitle="Telephony → Voice → LLM stack with governance and analytics."
                />
                <div class="split-grid">
                    <div class="card">
                        <h3 class="card-title">"Architecture"</h3>
                        <ol class="card-list">
                            {ARCHITECTURE_STEPS
                                .iter()
                                .map(|step| view! { <li>{*step}</li> })
                                .collect_view()}
                        </ol>
                    </div>
                    <div class="card">
                        <h3 class="card-title">"Security & Compliance"</h3>
                        <ul class="card-list">
                            {SECURITY_POINTS
                                .iter()
                                .map(|point| view! { <li>{*point}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </Container>
        </section>
    }
}
