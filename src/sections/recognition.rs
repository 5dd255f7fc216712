use leptos::prelude::*;

use crate::content::RECOGNITIONS;
use crate::ui::Container;

#[component]
pub fn Recognition() -> impl IntoView {
    view! {
        <section class="recognition">
            <Container>
                <p class="recognition-label">"Recognitions & Wins"</p>
                <div class="recognition-grid">
                    {RECOGNITIONS
                        .iter()
                        .map(|name| view! { <div class="recognition-card">{*name}</div> })
                        .collect_view()}
                </div>
            </Container>
        </section>
    }
}
