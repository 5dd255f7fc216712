// Contact page. The form is collection-only: fields are uncontrolled and
// submission is intercepted without dispatching anywhere, since no backend
// endpoint exists yet.

use leptos::prelude::*;

use crate::content::{SALES_EMAIL, SUPPORT_EMAIL};
use crate::ui::{Button, Container, SectionTitle};

#[component]
pub fn ContactPage() -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        tracing::debug!("contact form submitted, no endpoint wired up");
    };

    view! {
        <section class="page">
            <Container>
                <SectionTitle
                    eyebrow="Contact"
                    title="Let's talk"
                    subtitle="Tell us about your use-case and timeline. We'll get back within 24 hours."
                />
                <div class="split-grid">
                    <form class="card form" on:submit=on_submit>
                        <div class="form-grid">
                            <label class="field">
                                <span class="field-label">"Name"</span>
                                <input type="text" placeholder="Your name" />
                            </label>
                            <label class="field">
                                <span class="field-label">"Email"</span>
                                <input type="email" placeholder="you@company.com" />
                            </label>
                            <label class="field field-wide">
                                <span class="field-label">"Company"</span>
                                <input type="text" placeholder="Organization" />
                            </label>
                            <label class="field field-wide">
                                <span class="field-label">"Message"</span>
                                <textarea rows="5" placeholder="What would you like to build with NAIN?"></textarea>
                            </label>
                        </div>
                        <Button>"Send"</Button>
                    </form>
                    <div class="contact-panels">
                        <div class="card">
                            <h3 class="card-title">"Sales"</h3>
                            <p class="card-text">
                                <a href=format!("mailto:{SALES_EMAIL}")>{SALES_EMAIL}</a>
                            </p>
                        </div>
                        <div class="card">
                            <h3 class="card-title">"Support"</h3>
                            <p class="card-text">{SUPPORT_EMAIL}</p>
                        </div>
                    </div>
                </div>
            </Container>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_form_fields_and_contact_addresses() {
        let html = view! { <ContactPage /> }.to_html();
        assert!(html.contains("<form"));
        assert!(html.contains("Your name"));
        assert!(html.contains("you@company.com"));
        assert!(html.contains("What would you like to build with NAIN?"));
        assert!(html.contains("mailto:hello@nain.ai"));
        assert!(html.contains("support@nain.ai"));
    }
}
