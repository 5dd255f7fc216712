// Inline SVG icon set. Each icon is a single compound stroke path on a
// 24x24 viewBox, so the whole set renders through one helper.

use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    Phone,
    Shield,
    Headphones,
    Globe,
    Mic,
    MapPin,
    HeartPulse,
    BookOpen,
    Radio,
    Brain,
    Server,
    Cpu,
    Sparkles,
    ArrowRight,
    ArrowUpRight,
    BadgeCheck,
    CheckCircle,
    Menu,
    Close,
    Linkedin,
    Github,
    Twitter,
    Mail,
}

impl IconKind {
    fn shape(self) -> &'static str {
        match self {
            IconKind::Phone => "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6A19.79 19.79 0 0 1 2.08 4.18 2 2 0 0 1 4.06 2h3a2 2 0 0 1 2 1.72c.13.96.37 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.33 1.85.57 2.81.7A2 2 0 0 1 22 16.92z",
            IconKind::Shield => "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z",
            IconKind::Headphones => "M3 18v-6a9 9 0 0 1 18 0v6M21 19a2 2 0 0 1-2 2h-1a2 2 0 0 1-2-2v-3a2 2 0 0 1 2-2h3v5zM3 19a2 2 0 0 0 2 2h1a2 2 0 0 0 2-2v-3a2 2 0 0 0-2-2H3v5z",
            IconKind::Globe => "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20zM2 12h20M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z",
            IconKind::Mic => "M12 1a3 3 0 0 0-3 3v8a3 3 0 0 0 6 0V4a3 3 0 0 0-3-3zM19 10v2a7 7 0 0 1-14 0v-2M12 19v4M8 23h8",
            IconKind::MapPin => "M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0zM12 7a3 3 0 1 0 0 6 3 3 0 1 0 0-6z",
            IconKind::HeartPulse => "M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78L12 21.23l8.84-8.84a5.5 5.5 0 0 0 0-7.78z",
            IconKind::BookOpen => "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2zM22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
            IconKind::Radio => "M12 10a2 2 0 1 0 0 4 2 2 0 1 0 0-4zM16.24 7.76a6 6 0 0 1 0 8.49M7.76 16.24a6 6 0 0 1 0-8.49M19.07 4.93a10 10 0 0 1 0 14.14M4.93 19.07a10 10 0 0 1 0-14.14",
            IconKind::Brain => "M9.5 2A2.5 2.5 0 0 0 7 4.5v.55A4 4 0 0 0 4.5 11 4 4 0 0 0 6 18.45V19a2.5 2.5 0 0 0 5 0V4.5A2.5 2.5 0 0 0 9.5 2zM14.5 2A2.5 2.5 0 0 1 17 4.5v.55A4 4 0 0 1 19.5 11 4 4 0 0 1 18 18.45V19a2.5 2.5 0 0 1-5 0V4.5A2.5 2.5 0 0 1 14.5 2z",
            IconKind::Server => "M4 2h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2zM4 14h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2v-4a2 2 0 0 1 2-2zM6 6h.01M6 18h.01",
            IconKind::Cpu => "M9 2v2M15 2v2M9 20v2M15 20v2M2 9h2M2 15h2M20 9h2M20 15h2M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM9 9h6v6H9z",
            IconKind::Sparkles => "M12 3l1.9 5.7a2 2 0 0 0 1.4 1.4L21 12l-5.7 1.9a2 2 0 0 0-1.4 1.4L12 21l-1.9-5.7a2 2 0 0 0-1.4-1.4L3 12l5.7-1.9a2 2 0 0 0 1.4-1.4L12 3zM5 3v4M3 5h4M19 17v4M17 19h4",
            IconKind::ArrowRight => "M5 12h14M12 5l7 7-7 7",
            IconKind::ArrowUpRight => "M7 17L17 7M7 7h10v10",
            IconKind::BadgeCheck => "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20zM16 9.5l-5 5-3-3",
            IconKind::CheckCircle => "M22 11.08V12a10 10 0 1 1-5.93-9.14M22 4L12 14.01l-3-3",
            IconKind::Menu => "M4 6h16M4 12h16M4 18h16",
            IconKind::Close => "M18 6L6 18M6 6l12 12",
            IconKind::Linkedin => "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4V9h4v1.57A6 6 0 0 1 16 8zM6 9H2v12h4zM4 2a2 2 0 1 0 0 4 2 2 0 1 0 0-4z",
            IconKind::Github => "M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22",
            IconKind::Twitter => "M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.1a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z",
            IconKind::Mail => "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM22 6l-10 7L2 6",
        }
    }

    pub fn render(self) -> impl IntoView {
        view! {
            <svg
                class="icon"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                <path d=self.shape()></path>
            </svg>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn icons_render_as_stroke_svgs() {
        let html = IconKind::Phone.render().to_html();
        assert!(html.contains("<svg"));
        assert!(html.contains("stroke=\"currentColor\""));
        assert!(html.contains("<path"));
    }
}
