use leptos::prelude::*;

use crate::ui::{Button, Container};

/// Fallback for any path outside the route mapping.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page not-found">
            <Container class="container-narrow">
                <h1 class="not-found-code">"404"</h1>
                <p class="page-description">"That page does not exist. It may have moved, or the link is stale."</p>
                <Button href="/">"Go Home"</Button>
            </Container>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_the_fallback_view() {
        let html = view! { <NotFoundPage /> }.to_html();
        assert!(html.contains("404"));
        assert!(html.contains("href=\"/\""));
    }
}
