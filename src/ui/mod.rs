// Shared UI primitives. Stateless, no I/O, no failure paths; variants
// select classes and nothing else.

pub mod icon;

use leptos::prelude::*;

/// Visual variants for [`Button`]. Style only, never behavior.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
    Outline,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Ghost => "btn btn-ghost",
            ButtonVariant::Outline => "btn btn-outline",
        }
    }
}

/// Centered max-width wrapper; pass-through for children.
#[component]
pub fn Container(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let class = if class.is_empty() {
        "container".to_owned()
    } else {
        format!("container {class}")
    };
    view! { <div class=class>{children()}</div> }
}

/// Renders a hyperlink when `href` is given, a `<button>` otherwise. An
/// optional click callback is forwarded unchanged on either form; on the
/// link form it runs before navigation, which is how the mobile drawer
/// closes itself on its call-to-action links.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] href: Option<&'static str>,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let class = variant.class();
    match href {
        Some(href) => view! {
            <a href=href class=class on:click=move |_| { if let Some(cb) = on_click { cb.run(()); } }>
                {children()}
            </a>
        }
        .into_any(),
        None => view! {
            <button class=class on:click=move |_| { if let Some(cb) = on_click { cb.run(()); } }>
                {children()}
            </button>
        }
        .into_any(),
    }
}

/// Inline badge.
#[component]
pub fn Pill(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let class = if class.is_empty() {
        "pill".to_owned()
    } else {
        format!("pill {class}")
    };
    view! { <span class=class>{children()}</span> }
}

/// Optional eyebrow pill, required heading, optional subtitle.
#[component]
pub fn SectionTitle(
    #[prop(optional)] eyebrow: Option<&'static str>,
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="section-header">
            {eyebrow.map(|text| view! { <div class="section-eyebrow"><Pill>{text}</Pill></div> })}
            <h2 class="section-title">{title}</h2>
            {subtitle.map(|text| view! { <p class="section-description">{text}</p> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn button_with_href_renders_an_anchor() {
        let html = view! { <Button href="/signup">"Get Started"</Button> }.to_html();
        assert!(html.contains("<a"));
        assert!(html.contains("href=\"/signup\""));
        assert!(html.contains("btn btn-primary"));
        assert!(html.contains("Get Started"));
    }

    #[test]
    fn button_without_href_renders_a_button() {
        let html = view! { <Button variant=ButtonVariant::Ghost>"Send"</Button> }.to_html();
        assert!(html.contains("<button"));
        assert!(html.contains("btn btn-ghost"));
        assert!(!html.contains("<a"));
    }

    #[test]
    fn variants_select_only_the_class() {
        assert_eq!(ButtonVariant::default().class(), "btn btn-primary");
        assert_eq!(ButtonVariant::Outline.class(), "btn btn-outline");
    }

    #[test]
    fn container_merges_extra_classes() {
        let html = view! { <Container class="hero-grid">"x"</Container> }.to_html();
        assert!(html.contains("container hero-grid"));
    }

    #[test]
    fn section_title_skips_missing_eyebrow_and_subtitle() {
        let html = view! { <SectionTitle title="Pricing" /> }.to_html();
        assert!(html.contains("Pricing"));
        assert!(!html.contains("section-eyebrow"));
        assert!(!html.contains("section-description"));

        let full = view! {
            <SectionTitle eyebrow="Why NAIN" title="Zero tech barriers" subtitle="Designed for 2G." />
        }
        .to_html();
        assert!(full.contains("section-eyebrow"));
        assert!(full.contains("pill"));
        assert!(full.contains("Designed for 2G."));
    }
}
