use leptos::prelude::*;

use crate::content::HOW_IT_WORKS;
use crate::ui::{Container, SectionTitle};

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section class="how-it-works">
            <Container>
                <SectionTitle
                    eyebrow="How it works"
                    title="Telephony → Voice AI → On-device LLM"
                    subtitle="Modular stack that runs on low-cost, offline-friendly hardware."
                />
                <div class="step-grid">
                    {HOW_IT_WORKS
                        .iter()
                        .enumerate()
                        .map(|(index, step)| view! {
                            <div class="card step-card">
                                <div class="card-icon">{step.icon.render()}</div>
                                <p class="step-number">{format!("Step {}", index + 1)}</p>
                                <h3 class="card-title">{step.title}</h3>
                                <p class="card-text">{step.text}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </Container>
        </section>
    }
}
