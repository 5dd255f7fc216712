// Home page - hero plus highlight sections
use leptos::prelude::*;

use crate::sections::{Cta, Features, Hero, HowItWorks, Recognition};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <Recognition />
        <Features />
        <HowItWorks />
        <Cta />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_hero_stats_and_feature_grid() {
        let html = view! { <HomePage /> }.to_html();
        assert!(html.contains("Talk to AI over a simple phone call."));
        assert!(html.contains("2.5B"));
        assert!(html.contains("900M+"));
        assert!(html.contains("Why NAIN"));
        assert!(html.contains("Voice-only Interface"));
        assert!(html.contains("Step 3"));
        assert!(html.contains("Ready to pilot NAIN in your organization?"));
    }
}
