use leptos::prelude::*;

use crate::content::PRODUCT_FEATURES;
use crate::sections::FeatureCard;
use crate::ui::{Container, SectionTitle};

#[component]
pub fn ProductPage() -> impl IntoView {
    view! {
        <section class="page">
            <Container>
                <SectionTitle
                    eyebrow="Product"
                    title="Everything you need to run Voice-AI without internet"
                    subtitle="NAIN ships with admin console, call flows, model adapters, analytics, and tools for domain tuning."
                />
                <div class="card-grid">
                    {PRODUCT_FEATURES
                        .iter()
                        .map(|feature| view! { <FeatureCard feature=feature /> })
                        .collect_view()}
                </div>
            </Container>
        </section>
    }
}
