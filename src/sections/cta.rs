use leptos::prelude::*;

use crate::ui::{Button, ButtonVariant, Container};

#[component]
pub fn Cta() -> impl IntoView {
    view! {
        <section class="cta">
            <Container>
                <div class="cta-panel">
                    <div class="cta-copy">
                        <h3 class="cta-title">"Ready to pilot NAIN in your organization?"</h3>
                        <p class="cta-text">
                            "Deploy in weeks, not months. Works with existing helplines. "
                            "Start with one workflow and scale."
                        </p>
                    </div>
                    <div class="cta-actions">
                        <Button variant=ButtonVariant::Outline href="/resources">"View Integration Guide"</Button>
                        <Button href="/contact">"Book a Demo"</Button>
                    </div>
                </div>
            </Container>
        </section>
    }
}
