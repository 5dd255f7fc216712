// Navigation bar. One signal: the mobile drawer's open flag. Selecting any
// drawer link (the call-to-action buttons included) closes the drawer in
// the same click turn that triggers navigation, so a stale open menu is
// never observable after a route change.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::content;
use crate::routes::{self, NAV_LINKS};
use crate::ui::icon::IconKind;
use crate::ui::{Button, ButtonVariant, Container};

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let pathname = use_location().pathname;

    // Keep the document title in sync with the active route.
    Effect::new(move |_| {
        let path = pathname.get();
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            document.set_title(routes::title_for(&path));
        }
    });

    let toggle = move |_: leptos::ev::MouseEvent| {
        set_menu_open.update(|open| *open = !*open);
        tracing::debug!(open = menu_open.get_untracked(), "mobile menu toggled");
    };
    let close = Callback::new(move |()| set_menu_open.set(false));

    view! {
        <header class="nav">
            <Container class="nav-inner">
                <a href="/" class="nav-brand">
                    <span class="nav-logo"></span>
                    <span class="nav-title">{content::BRAND}</span>
                </a>
                <nav class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let path = link.path;
                            view! {
                                <a href=path class=move || routes::link_class(&pathname.get(), path)>
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="nav-actions">
                    <Button variant=ButtonVariant::Ghost href="/contact">
                        {IconKind::Phone.render()}
                        "Talk to Sales"
                    </Button>
                    <Button href="/signup">"Get Started" {IconKind::ArrowRight.render()}</Button>
                </div>
                <button class="nav-toggle" aria-label="Toggle menu" on:click=toggle>
                    {move || {
                        if menu_open.get() { IconKind::Close.render() } else { IconKind::Menu.render() }
                    }}
                </button>
            </Container>
            <Show when=move || menu_open.get()>
                <div class="nav-drawer">
                    <Container class="nav-drawer-inner">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                let path = link.path;
                                view! {
                                    <a
                                        href=path
                                        class=move || routes::link_class(&pathname.get(), path)
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <div class="nav-drawer-actions">
                            <Button variant=ButtonVariant::Ghost href="/contact" on_click=close>
                                {IconKind::Phone.render()}
                                "Talk to Sales"
                            </Button>
                            <Button href="/signup" on_click=close>"Get Started"</Button>
                        </div>
                    </Container>
                </div>
            </Show>
        </header>
    }
}
