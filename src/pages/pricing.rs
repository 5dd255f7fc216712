use leptos::prelude::*;

use crate::content::{Plan, PLANS};
use crate::ui::icon::IconKind;
use crate::ui::{Button, Container, SectionTitle};

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <section class="page">
            <Container>
                <SectionTitle
                    eyebrow="Pricing"
                    title="Simple plans for pilots and scale"
                    subtitle="Start small, pay as you grow. Custom SLAs available."
                />
                <div class="plan-grid">
                    {PLANS
                        .iter()
                        .enumerate()
                        .map(|(index, plan)| {
                            let featured = index == 1;
                            view! { <PlanCard plan=plan featured=featured /> }
                        })
                        .collect_view()}
                </div>
                <p class="pricing-footnote">"Prices are indicative. Taxes extra. Volume discounts available."</p>
            </Container>
        </section>
    }
}

#[component]
fn PlanCard(plan: &'static Plan, featured: bool) -> impl IntoView {
    let class = if featured { "card plan-card featured" } else { "card plan-card" };
    view! {
        <div class=class>
            <h3 class="card-title">{plan.name}</h3>
            <p class="plan-price">{plan.price}</p>
            <ul class="plan-features">
                {plan
                    .features
                    .iter()
                    .map(|feature| view! { <li>{IconKind::CheckCircle.render()} {*feature}</li> })
                    .collect_view()}
            </ul>
            <Button href="/signup">{format!("Choose {}", plan.name)}</Button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_three_plans_in_order() {
        let html = view! { <PricingPage /> }.to_html();
        let pilot = html.find("Pilot").expect("Pilot card");
        let growth = html.find("Growth").expect("Growth card");
        let enterprise = html.find("Enterprise").expect("Enterprise card");
        assert!(pilot < growth && growth < enterprise);
        assert!(html.contains("₹29,000/mo"));
        assert!(html.contains("Talk to Sales"));
    }

    #[test]
    fn only_the_growth_card_is_emphasized() {
        let html = view! { <PricingPage /> }.to_html();
        assert_eq!(html.matches("plan-card featured").count(), 1);

        // The emphasized card segment (up to the next card) is the Growth one.
        let start = html.find("plan-card featured").unwrap();
        let rest = &html[start..];
        let end = rest[1..].find("plan-card").map(|i| i + 1).unwrap_or(rest.len());
        assert!(rest[..end].contains("Growth"));
    }
}
