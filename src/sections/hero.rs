use leptos::prelude::*;

use crate::content::{HERO_STATS, HERO_USE_CASES};
use crate::ui::icon::IconKind;
use crate::ui::{Button, ButtonVariant, Container, Pill};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <Container class="hero-grid">
                <div class="hero-content">
                    <Pill>{IconKind::BadgeCheck.render()} "No-Internet AI Network"</Pill>
                    <h1 class="hero-title">"Talk to AI over a simple phone call."</h1>
                    <p class="hero-description">
                        "NAIN lets anyone access AI via landline or 2G — no apps, no screens, no internet. "
                        "Healthcare, government schemes, education, and more — in any language."
                    </p>
                    <div class="hero-actions">
                        <Button href="/signup">"Get Started" {IconKind::ArrowRight.render()}</Button>
                        <Button variant=ButtonVariant::Ghost href="/technology">
                            "See how it works"
                            {IconKind::ArrowUpRight.render()}
                        </Button>
                    </div>
                    <div class="hero-stats">
                        {HERO_STATS
                            .iter()
                            .map(|stat| view! {
                                <div class="stat-card">
                                    <p class="stat-value">{stat.value}</p>
                                    <p class="stat-label">{stat.label}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="hero-visual">
                    <div class="hero-panel">
                        <div class="use-case-grid">
                            {HERO_USE_CASES
                                .iter()
                                .map(|use_case| view! {
                                    <div class="use-case-card">
                                        <div class="card-icon">{use_case.icon.render()}</div>
                                        <p class="use-case-label">{use_case.label}</p>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="hero-panel-badge">
                        <Pill class="pill-accent">"Built for low-connectivity regions"</Pill>
                    </div>
                </div>
            </Container>
        </section>
    }
}
