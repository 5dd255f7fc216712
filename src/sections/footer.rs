use leptos::prelude::*;

use crate::content::{self, SOCIAL_LINKS};
use crate::ui::Container;

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <Container class="footer-grid">
                <div class="footer-brand">
                    <a href="/" class="nav-brand">
                        <span class="nav-logo"></span>
                        <span class="nav-title">{content::BRAND}</span>
                    </a>
                    <p class="footer-tagline">{content::TAGLINE}</p>
                    <div class="footer-social">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| view! {
                                <a href=link.href aria-label=link.label class="footer-social-link">
                                    {link.icon.render()}
                                </a>
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="footer-column">
                    <h4>"Product"</h4>
                    <ul>
                        <li><a href="/product">"Overview"</a></li>
                        <li><a href="/technology">"How it works"</a></li>
                        <li><a href="/pricing">"Pricing"</a></li>
                        <li><a href="/case-studies">"Case studies"</a></li>
                    </ul>
                </div>
                <div class="footer-column">
                    <h4>"Company"</h4>
                    <ul>
                        <li><a href="/about">"About"</a></li>
                        <li><a href="/careers">"Careers"</a></li>
                        <li><a href="/contact">"Contact"</a></li>
                        <li><a href="/legal/privacy">"Privacy"</a></li>
                    </ul>
                </div>
            </Container>
            <div class="footer-bottom">
                <Container class="footer-bottom-inner">
                    <p class="footer-copyright">
                        {format!("© {} {} Protocol. All rights reserved.", current_year(), content::BRAND)}
                    </p>
                    <div class="footer-legal">
                        <a href="/legal/terms">"Terms"</a>
                        <a href="/legal/privacy">"Privacy"</a>
                        <a href="/legal/security">"Security"</a>
                    </div>
                </Container>
            </div>
        </footer>
    }
}
