use leptos::prelude::*;

use crate::content::OPEN_ROLES;
use crate::ui::{Button, ButtonVariant, Container, SectionTitle};

#[component]
pub fn CareersPage() -> impl IntoView {
    view! {
        <section class="page">
            <Container>
                <SectionTitle
                    eyebrow="Careers"
                    title="Join us"
                    subtitle="We're hiring builders who care about access and inclusion."
                />
                <div class="split-grid">
                    {OPEN_ROLES
                        .iter()
                        .map(|role| view! {
                            <div class="card">
                                <h3 class="card-title">{*role}</h3>
                                <p class="card-text">"Describe responsibilities, requirements, and impact. Add an Apply link."</p>
                                <Button variant=ButtonVariant::Ghost href="/contact">"View role"</Button>
                            </div>
                        })
                        .collect_view()}
                </div>
            </Container>
        </section>
    }
}
