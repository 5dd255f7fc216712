// Route table and path helpers shared by the nav, footer, and app shell.
// The active-link rule is exact path equality after trailing-slash
// normalization: `/` is active on `/` and nowhere else.

/// One navigable entry: a client-side path and its link label.
pub struct RouteEntry {
    pub path: &'static str,
    pub label: &'static str,
}

/// The link set shared verbatim by the desktop row and the mobile drawer.
pub static NAV_LINKS: [RouteEntry; 9] = [
    RouteEntry { path: "/", label: "Home" },
    RouteEntry { path: "/product", label: "Product" },
    RouteEntry { path: "/solutions", label: "Solutions" },
    RouteEntry { path: "/technology", label: "Technology" },
    RouteEntry { path: "/pricing", label: "Pricing" },
    RouteEntry { path: "/case-studies", label: "Case Studies" },
    RouteEntry { path: "/resources", label: "Resources" },
    RouteEntry { path: "/about", label: "About" },
    RouteEntry { path: "/contact", label: "Contact" },
];

/// Document title for a path; unknown paths get the not-found title.
pub fn title_for(path: &str) -> &'static str {
    match normalize(path) {
        "/" => "NAIN — Talk to AI over a phone call",
        "/product" => "Product — NAIN",
        "/solutions" => "Solutions — NAIN",
        "/technology" => "Technology — NAIN",
        "/pricing" => "Pricing — NAIN",
        "/case-studies" => "Case Studies — NAIN",
        "/resources" => "Resources — NAIN",
        "/about" => "About — NAIN",
        "/careers" => "Careers — NAIN",
        "/contact" => "Contact — NAIN",
        "/signup" => "Get Started — NAIN",
        "/legal/privacy" => "Privacy Policy — NAIN",
        "/legal/terms" => "Terms of Service — NAIN",
        "/legal/security" => "Security — NAIN",
        _ => "Page not found — NAIN",
    }
}

pub fn is_active(current: &str, path: &str) -> bool {
    normalize(current) == normalize(path)
}

pub fn link_class(current: &str, path: &str) -> &'static str {
    if is_active(current, path) {
        "nav-link active"
    } else {
        "nav-link"
    }
}

fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn active_matching_is_exact() {
        assert!(is_active("/", "/"));
        assert!(is_active("/pricing", "/pricing"));
        assert!(!is_active("/product", "/"));
        assert!(!is_active("/", "/product"));
        assert!(!is_active("/case-studies", "/case"));
    }

    #[test]
    fn trailing_slashes_normalize() {
        assert!(is_active("/pricing/", "/pricing"));
        assert!(is_active("/legal/privacy/", "/legal/privacy"));
        assert!(is_active("/", "/"));
    }

    #[test]
    fn link_class_marks_only_the_matching_link() {
        assert_eq!(link_class("/pricing", "/pricing"), "nav-link active");
        assert_eq!(link_class("/pricing", "/about"), "nav-link");
        let active = NAV_LINKS
            .iter()
            .filter(|link| link_class("/solutions", link.path).ends_with("active"))
            .count();
        assert_eq!(active, 1);
    }

    #[test]
    fn every_nav_link_has_a_dedicated_title() {
        let fallback = title_for("/no-such-page");
        for link in &NAV_LINKS {
            assert_ne!(title_for(link.path), fallback, "missing title for {}", link.path);
        }
    }

    #[test]
    fn every_mapped_path_has_a_dedicated_title() {
        let fallback = title_for("/no-such-page");
        let mapped = [
            "/", "/product", "/solutions", "/technology", "/pricing", "/case-studies",
            "/resources", "/about", "/careers", "/contact", "/signup", "/legal/privacy",
            "/legal/terms", "/legal/security",
        ];
        for path in mapped {
            assert_ne!(title_for(path), fallback, "missing title for {path}");
        }
        assert_eq!(title_for("/also/missing"), fallback);
    }
}
