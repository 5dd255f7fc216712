use leptos::prelude::*;

use crate::ui::Container;

/// Shared placeholder for the privacy, terms, and security routes.
#[component]
pub fn LegalPage(title: &'static str) -> impl IntoView {
    view! {
        <section class="page">
            <Container>
                <h1 class="page-title">{title}</h1>
                <p class="page-description">
                    {format!(
                        "Your {} content goes here. Update with your policies and compliance statements.",
                        title.to_lowercase()
                    )}
                </p>
            </Container>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn derives_body_copy_from_the_title() {
        let html = view! { <LegalPage title="Privacy Policy" /> }.to_html();
        assert!(html.contains("Privacy Policy"));
        assert!(html.contains("Your privacy policy content goes here."));
    }
}
