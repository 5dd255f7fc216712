// Static content records, decoupled from the components that render them.
// Entries carry no identity beyond their position; every list is defined
// once and never mutated.

use crate::ui::icon::IconKind;

pub const BRAND: &str = "NAIN";
pub const TAGLINE: &str = "Talk to AI without apps, screens, or internet. \
    The No-Internet AI Network that works over landlines and 2G.";
pub const SALES_EMAIL: &str = "hello@nain.ai";
pub const SUPPORT_EMAIL: &str = "support@nain.ai";

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static HERO_STATS: [Stat; 3] = [
    Stat { value: "2.5B", label: "2G users" },
    Stat { value: "900M+", label: "2G in India" },
    Stat { value: "₹30–60", label: "Avg. call cost" },
];

pub struct UseCase {
    pub icon: IconKind,
    pub label: &'static str,
}

pub static HERO_USE_CASES: [UseCase; 4] = [
    UseCase { icon: IconKind::Globe, label: "Govt Services" },
    UseCase { icon: IconKind::HeartPulse, label: "Healthcare" },
    UseCase { icon: IconKind::BookOpen, label: "Education" },
    UseCase { icon: IconKind::Radio, label: "News & Radio" },
];

pub static RECOGNITIONS: [&str; 4] = [
    "IEEE Hackathon Winner",
    "IIT Hyderabad Hackathon",
    "Aithemis Legal LLM",
    "Nirwana.AI $13M Valuation",
];

/// Icon + title + blurb card; used for home features, product features,
/// and the how-it-works steps alike.
pub struct Feature {
    pub icon: IconKind,
    pub title: &'static str,
    pub text: &'static str,
}

pub static HOME_FEATURES: [Feature; 6] = [
    Feature {
        icon: IconKind::Mic,
        title: "Voice-only Interface",
        text: "Call a number, speak naturally, get answers. No apps or data required.",
    },
    Feature {
        icon: IconKind::Shield,
        title: "Private & Secure",
        text: "End-to-end safeguards with on-prem inference options for sensitive use-cases.",
    },
    Feature {
        icon: IconKind::Headphones,
        title: "Scale Helplines",
        text: "Augment hotlines with AI triage to reduce wait times and costs.",
    },
    Feature {
        icon: IconKind::MapPin,
        title: "Rural-ready",
        text: "Optimized for patchy networks with graceful fallbacks to SMS/IVR flows.",
    },
    Feature {
        icon: IconKind::Brain,
        title: "Domain LLMs",
        text: "Plug domain-specific models for healthcare, agriculture, education and more.",
    },
    Feature {
        icon: IconKind::Sparkles,
        title: "Multilingual",
        text: "Serve users in local languages with intent routing and TTS/STT pipelines.",
    },
];

pub static HOW_IT_WORKS: [Feature; 3] = [
    Feature {
        icon: IconKind::Phone,
        title: "Telephony Layer",
        text: "GSM/SIP call capture & routing with IVR orchestration and queueing.",
    },
    Feature {
        icon: IconKind::Mic,
        title: "Voice Interface",
        text: "Speech-to-text + text-to-speech pipelines tuned for noisy calls.",
    },
    Feature {
        icon: IconKind::Cpu,
        title: "Core Intelligence",
        text: "On-device LLM inference engine with domain tools and guardrails.",
    },
];

pub static PRODUCT_FEATURES: [Feature; 6] = [
    Feature {
        icon: IconKind::Server,
        title: "Edge/On-Prem Deployments",
        text: "Run on low-cost edge servers. Keep data local for compliance.",
    },
    Feature {
        icon: IconKind::Headphones,
        title: "Smart Helplines",
        text: "AI triage + live agent handoff. Reduce average handling time.",
    },
    Feature {
        icon: IconKind::Shield,
        title: "Governance",
        text: "Audit logs, red teaming, and content safety guardrails by design.",
    },
    Feature {
        icon: IconKind::Sparkles,
        title: "LLM Adapters",
        text: "Plug in domain models (healthcare, agri, education) and tools.",
    },
    Feature {
        icon: IconKind::Globe,
        title: "Language Packs",
        text: "Hindi, English, and regional languages with TTS/STT tuning.",
    },
    Feature {
        icon: IconKind::BadgeCheck,
        title: "Reliability",
        text: "Designed for patchy networks: retries, SMS fallbacks, caching.",
    },
];

pub struct Solution {
    pub icon: IconKind,
    pub title: &'static str,
    pub items: [&'static str; 3],
}

pub static SOLUTIONS: [Solution; 6] = [
    Solution {
        icon: IconKind::HeartPulse,
        title: "Healthcare Helpline",
        items: ["Symptom triage", "Protocol-based guidance", "Escalation & handoff"],
    },
    Solution {
        icon: IconKind::Globe,
        title: "Govt Schemes",
        items: ["Eligibility Q&A", "Document checklist", "Deadline reminders"],
    },
    Solution {
        icon: IconKind::BookOpen,
        title: "Education",
        items: ["Concept explainers", "Practice questions", "Local languages"],
    },
    Solution {
        icon: IconKind::Radio,
        title: "Voice News",
        items: ["Daily bulletins", "IVR subscriptions", "Regional feeds"],
    },
    Solution {
        icon: IconKind::MapPin,
        title: "Rural Services",
        items: ["Navigation & info", "Kiosk mode", "SMS fallback"],
    },
    Solution {
        icon: IconKind::Headphones,
        title: "Call Centers",
        items: ["Agent assist", "Deflection flows", "Analytics"],
    },
];

pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub features: [&'static str; 3],
}

pub static PLANS: [Plan; 3] = [
    Plan {
        name: "Pilot",
        price: "₹29,000/mo",
        features: ["Up to 5K minutes", "1 use-case", "Email support"],
    },
    Plan {
        name: "Growth",
        price: "₹99,000/mo",
        features: ["Up to 50K minutes", "3 use-cases", "9×5 support"],
    },
    Plan {
        name: "Enterprise",
        price: "Talk to Sales",
        features: ["Unlimited minutes", "On-prem options", "24×7 support"],
    },
];

pub static ARCHITECTURE_STEPS: [&str; 5] = [
    "GSM/SIP ingress with IVR router and queue.",
    "STT pipeline → Intent Router → Tools/KB.",
    "On-device LLM inference with guardrails.",
    "TTS pipeline → Telephony egress with fallbacks.",
    "Observability: Logs, red-teaming, analytics.",
];

pub static SECURITY_POINTS: [&str; 4] = [
    "PII minimization with on-prem storage option.",
    "Access controls, audit trails, and rate-limits.",
    "Content safety filters and jailbreak protection.",
    "Region-specific data residency.",
];

pub struct CaseStudy {
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: [&'static str; 3],
}

const CASE_SUMMARY: &str = "Describe the problem, solution, and outcome in 4–6 lines. \
    Include baseline metrics and measured improvements (e.g., 40% faster response, 60% call deflection).";

pub static CASE_STUDIES: [CaseStudy; 4] = [
    CaseStudy { title: "Project #1", summary: CASE_SUMMARY, tags: ["Healthcare", "2G", "On-prem"] },
    CaseStudy { title: "Project #2", summary: CASE_SUMMARY, tags: ["Healthcare", "2G", "On-prem"] },
    CaseStudy { title: "Project #3", summary: CASE_SUMMARY, tags: ["Healthcare", "2G", "On-prem"] },
    CaseStudy { title: "Project #4", summary: CASE_SUMMARY, tags: ["Healthcare", "2G", "On-prem"] },
];

pub static RESOURCES: [&str; 6] = [
    "Integration Guide",
    "Telephony Playbook",
    "Safety & Guardrails",
    "Rural UX Checklist",
    "LLM Tuning",
    "FAQ",
];

pub static ABOUT_HIGHLIGHTS: [&str; 4] = [
    "Built India's first domain-specific Legal LLM for law schools and firms.",
    "Scaled a GenAI product to $13M valuation by cutting delivery time by 85%.",
    "Offline SMS-based AI clinical care system for low-connectivity regions.",
    "Winners/shortlists at IEEE + IIT Hyderabad hackathons.",
];

pub static OPEN_ROLES: [&str; 4] = [
    "Voice/Telephony Engineer",
    "Full-stack Engineer",
    "AI Engineer (LLMs)",
    "Customer Success",
];

pub static SIGNUP_USE_CASES: [&str; 4] = ["Healthcare", "Govt Schemes", "Education", "Other"];

pub struct SocialLink {
    pub icon: IconKind,
    pub label: &'static str,
    pub href: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { icon: IconKind::Linkedin, label: "LinkedIn", href: "#" },
    SocialLink { icon: IconKind::Twitter, label: "Twitter", href: "#" },
    SocialLink { icon: IconKind::Github, label: "GitHub", href: "#" },
    SocialLink { icon: IconKind::Mail, label: "Email", href: "mailto:hello@nain.ai" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn three_plans_in_pilot_growth_enterprise_order() {
        let names: Vec<_> = PLANS.iter().map(|plan| plan.name).collect();
        assert_eq!(names, vec!["Pilot", "Growth", "Enterprise"]);
    }

    #[test]
    fn solution_cards_each_carry_three_items() {
        assert_eq!(SOLUTIONS.len(), 6);
        for solution in &SOLUTIONS {
            assert!(solution.items.iter().all(|item| !item.is_empty()));
        }
    }

    #[test]
    fn card_grids_are_fully_populated() {
        assert_eq!(HOME_FEATURES.len(), 6);
        assert_eq!(PRODUCT_FEATURES.len(), 6);
        assert_eq!(HOW_IT_WORKS.len(), 3);
        assert_eq!(CASE_STUDIES.len(), 4);
        assert_eq!(RESOURCES.len(), 6);
    }
}
