// App shell: router plus the chrome shared by every page.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::{
    AboutPage, CareersPage, CaseStudiesPage, ContactPage, HomePage, LegalPage, NotFoundPage,
    PricingPage, ProductPage, ResourcesPage, SignupPage, SolutionsPage, TechnologyPage,
};
use crate::sections::{Footer, Nav};

/// Root component. The nav bar and footer wrap every route, including the
/// not-found fallback; page selection is a pure path lookup.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Nav />
            <main>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/product") view=ProductPage />
                    <Route path=path!("/solutions") view=SolutionsPage />
                    <Route path=path!("/technology") view=TechnologyPage />
                    <Route path=path!("/pricing") view=PricingPage />
                    <Route path=path!("/case-studies") view=CaseStudiesPage />
                    <Route path=path!("/resources") view=ResourcesPage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/careers") view=CareersPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/signup") view=SignupPage />
                    <Route path=path!("/legal/privacy") view=|| view! { <LegalPage title="Privacy Policy" /> } />
                    <Route path=path!("/legal/terms") view=|| view! { <LegalPage title="Terms of Service" /> } />
                    <Route path=path!("/legal/security") view=|| view! { <LegalPage title="Security" /> } />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
