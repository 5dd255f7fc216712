// Signup page. Same placeholder boundary as the contact form: capture
// only, no dispatch.

use leptos::prelude::*;

use crate::content::SIGNUP_USE_CASES;
use crate::ui::{Button, Container, SectionTitle};

#[component]
pub fn SignupPage() -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        tracing::debug!("signup form submitted, no endpoint wired up");
    };

    view! {
        <section class="page">
            <Container class="container-narrow">
                <SectionTitle
                    eyebrow="Get Started"
                    title="Create your pilot account"
                    subtitle="We'll set up a sandbox with sample call flows."
                />
                <form class="card form" on:submit=on_submit>
                    <div class="form-stack">
                        <input type="email" placeholder="Work email" />
                        <input type="text" placeholder="Company" />
                        <select>
                            {SIGNUP_USE_CASES
                                .iter()
                                .map(|use_case| view! { <option>{format!("Use-case: {use_case}")}</option> })
                                .collect_view()}
                        </select>
                        <Button>"Create account"</Button>
                    </div>
                </form>
            </Container>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_signup_fields_and_use_case_options() {
        let html = view! { <SignupPage /> }.to_html();
        assert!(html.contains("Work email"));
        assert!(html.contains("<select"));
        assert!(html.contains("Use-case: Healthcare"));
        assert!(html.contains("Use-case: Other"));
        assert!(html.contains("Create account"));
    }
}
