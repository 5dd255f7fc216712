// Site chrome and home-page sections.

mod cta;
mod features;
mod footer;
mod hero;
mod how_it_works;
mod nav;
mod recognition;

pub use cta::Cta;
pub use features::{FeatureCard, Features};
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use nav::Nav;
pub use recognition::Recognition;
