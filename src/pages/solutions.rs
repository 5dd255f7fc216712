use leptos::prelude::*;

use crate::content::SOLUTIONS;
use crate::ui::{Container, SectionTitle};

#[component]
pub fn SolutionsPage() -> impl IntoView {
    view! {
        <section class="page">
            <Container>
                <SectionTitle
                    eyebrow="Solutions"
                    title="Purpose-built playbooks"
                    subtitle="Healthcare triage, government schemes advisor, agri support, education tutoring, voice news, and more."
                />
                <div class="card-grid">
                    {SOLUTIONS
                        .iter()
                        .map(|solution| view! {
                            <article class="card">
                                <div class="card-icon">{solution.icon.render()}</div>
                                <h3 class="card-title">{solution.title}</h3>
                                <ul class="card-list">
                                    {solution.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                                </ul>
                            </article>
                        })
                        .collect_view()}
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
    fn renders_all_playbooks_with_their_items() {
        let html = view! { <SolutionsPage /> }.to_html();
        for title in ["Healthcare Helpline", "Govt Schemes", "Education", "Voice News", "Rural Services", "Call Centers"] {
            assert!(html.contains(title), "missing {title}");
        }
        assert!(html.contains("Symptom triage"));
        assert!(html.contains("Deadline reminders"));
    }
}
