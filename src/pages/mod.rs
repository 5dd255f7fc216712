// One module per routed page, plus the not-found fallback.

mod about;
mod careers;
mod case_studies;
mod contact;
mod home;
mod legal;
mod not_found;
mod pricing;
mod product;
mod resources;
mod signup;
mod solutions;
mod technology;

pub use about::AboutPage;
pub use careers::CareersPage;
pub use case_studies::CaseStudiesPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use legal::LegalPage;
pub use not_found::NotFoundPage;
pub use pricing::PricingPage;
pub use product::ProductPage;
pub use resources::ResourcesPage;
pub use signup::SignupPage;
pub use solutions::SolutionsPage;
pub use technology::TechnologyPage;
