use leptos::prelude::*;

use crate::content::{Feature, HOME_FEATURES};
use crate::ui::{Container, SectionTitle};

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="features">
            <Container>
                <SectionTitle
                    eyebrow="Why NAIN"
                    title="AI access with zero tech barriers"
                    subtitle="Designed for landlines, 2G and low-literacy users. Multilingual, resilient, and secure."
                />
                <div class="card-grid">
                    {HOME_FEATURES
                        .iter()
                        .map(|feature| view! { <FeatureCard feature=feature /> })
                        .collect_view()}
                </div>
            </Container>
        </section>
    }
}

/// Icon + title + blurb card; the product page reuses it over its own list.
#[component]
pub fn FeatureCard(feature: &'static Feature) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-icon">{feature.icon.render()}</div>
            <h3 class="card-title">{feature.title}</h3>
            <p class="card-text">{feature.text}</p>
        </div>
    }
}
