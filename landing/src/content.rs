//! Marketing copy for every section, kept apart from the markup.

use crate::icons::*;

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Features", href: "#features" },
    NavLink { label: "Testimonials", href: "#testimonials" },
    NavLink { label: "FAQ", href: "#faq" },
    NavLink { label: "Contact", href: "#contact" },
];

/// A headline number with its caption.
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

// -----------------------------------------------------------------------------
// Hero
// -----------------------------------------------------------------------------

pub const HERO_BADGE: &str = "Trusted by 1,500+ Financial Professionals";
pub const HERO_SUBHEADLINE: &str = "Stop losing time on manual record keeping. Our secure transaction management system helps brokers and financial professionals track, monitor, and manage all transactions with enterprise-grade security and compliance.";
pub const HERO_BENEFITS: &[&str] = &["Real-time Monitoring", "Compliance Ready", "Enterprise Security"];

pub const HERO_STATS: &[Stat] = &[
    Stat { value: "1.5K+", label: "Active Users" },
    Stat { value: "99.9%", label: "Uptime" },
    Stat { value: "50+", label: "Integrations" },
];

/// Tint shared by a dashboard card and its label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Purple,
    Green,
    Blue,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Purple => "tone-purple",
            Tone::Green => "tone-green",
            Tone::Blue => "tone-blue",
        }
    }
}

pub struct DashboardCard {
    pub value: &'static str,
    pub label: &'static str,
    pub tone: Tone,
}

pub const DASHBOARD_CARDS: &[DashboardCard] = &[
    DashboardCard { value: "$2.4M", label: "Total Volume", tone: Tone::Purple },
    DashboardCard { value: "1,247", label: "Transactions", tone: Tone::Green },
    DashboardCard { value: "98.5%", label: "Success Rate", tone: Tone::Blue },
];

pub struct SampleTransaction {
    pub description: &'static str,
    pub amount: &'static str,
    pub tone: Tone,
}

pub const SAMPLE_TRANSACTIONS: &[SampleTransaction] = &[
    SampleTransaction { description: "Stock Purchase - AAPL", amount: "+$15,420", tone: Tone::Green },
    SampleTransaction { description: "Bond Sale - GOVT", amount: "+$8,750", tone: Tone::Blue },
    SampleTransaction { description: "Crypto Trade - BTC", amount: "+$23,100", tone: Tone::Purple },
];

// -----------------------------------------------------------------------------
// Features
// -----------------------------------------------------------------------------

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub benefits: [&'static str; 4],
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: ICON_CHART_BARS,
        title: "Real-Time Transaction Monitoring",
        description: "Track all your transactions as they happen with live updates, instant notifications, and comprehensive monitoring dashboards.",
        benefits: ["Live transaction feeds", "Instant alert system", "Custom monitoring rules", "Performance analytics"],
    },
    Feature {
        icon: ICON_SHIELD_CHECK,
        title: "Enterprise-Grade Security",
        description: "Bank-level encryption, multi-factor authentication, and security protocols that meet the highest industry standards.",
        benefits: ["256-bit encryption", "Multi-factor authentication", "SOC 2 compliance", "Regular security audits"],
    },
    Feature {
        icon: ICON_COLUMNS,
        title: "Automated Compliance Tracking",
        description: "Stay compliant with automated documentation, audit trails, and regulatory reporting that adapts to your industry requirements.",
        benefits: ["Automated audit trails", "Regulatory reporting", "Compliance templates", "Document management"],
    },
    Feature {
        icon: ICON_USERS,
        title: "Multi-User Collaboration",
        description: "Enable your entire team with role-based access, collaborative tools, and seamless workflow management across departments.",
        benefits: ["Role-based permissions", "Team collaboration tools", "Workflow automation", "Activity tracking"],
    },
    Feature {
        icon: ICON_BOLT,
        title: "Lightning-Fast Performance",
        description: "Process thousands of transactions per second with our optimized infrastructure, ensuring your business never slows down.",
        benefits: ["Sub-second response times", "High-volume processing", "99.9% uptime guarantee", "Global CDN delivery"],
    },
    Feature {
        icon: ICON_TERMINAL,
        title: "Seamless Integrations",
        description: "Connect with your existing tools and systems through our comprehensive API and pre-built integrations with popular platforms.",
        benefits: ["RESTful API access", "50+ pre-built integrations", "Webhook support", "Custom integration support"],
    },
];

pub const PAIN_POINTS: &[&str] = &[
    "Hours wasted on manual data entry and record keeping",
    "Risk of human errors in critical financial transactions",
    "Difficulty tracking compliance and audit requirements",
    "Limited visibility into transaction patterns and trends",
    "Security vulnerabilities with spreadsheet-based systems",
];

pub const SOLUTIONS: &[&str] = &[
    "Automated transaction processing and real-time updates",
    "Built-in validation and error prevention mechanisms",
    "Automatic compliance documentation and audit trails",
    "Advanced analytics and reporting dashboard",
    "Enterprise-grade security with encryption and backups",
];

// -----------------------------------------------------------------------------
// Trust signals
// -----------------------------------------------------------------------------

pub struct TrustStat {
    pub emoji: &'static str,
    pub stat: Stat,
}

pub const TRUST_STATS: &[TrustStat] = &[
    TrustStat { emoji: "👥", stat: Stat { value: "1,500+", label: "Active Financial Professionals" } },
    TrustStat { emoji: "💰", stat: Stat { value: "$2.4B+", label: "Transaction Volume Processed" } },
    TrustStat { emoji: "⚡", stat: Stat { value: "99.9%", label: "System Uptime Guarantee" } },
    TrustStat { emoji: "🌍", stat: Stat { value: "50+", label: "Countries Served" } },
];

pub const MAX_RATING: u8 = 5;

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub image: &'static str,
    pub quote: &'static str,
    pub rating: u8,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Chen",
        role: "Senior Financial Advisor",
        company: "Goldman Securities",
        image: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=80&h=80&fit=crop&crop=face",
        quote: "TransactPro reduced our transaction processing time by 75%. The compliance tracking alone has saved us countless hours during audits.",
        rating: 5,
    },
    Testimonial {
        name: "Michael Rodriguez",
        role: "Compliance Director",
        company: "Investment Partners LLC",
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=80&h=80&fit=crop&crop=face",
        quote: "The automated audit trails and compliance reporting have transformed how we handle regulatory requirements. It's a game-changer.",
        rating: 5,
    },
    Testimonial {
        name: "Jennifer Park",
        role: "Operations Manager",
        company: "Capital Growth Fund",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=80&h=80&fit=crop&crop=face",
        quote: "We've eliminated manual errors completely since switching to TransactPro. The real-time monitoring gives us confidence in every transaction.",
        rating: 5,
    },
];

pub struct Certification {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification { name: "SOC 2 Type II", description: "Security & Compliance", icon: ICON_SHIELD_CHECK },
    Certification { name: "PCI DSS Level 1", description: "Payment Security", icon: ICON_CREDIT_CARD },
    Certification { name: "ISO 27001", description: "Information Security", icon: ICON_LOCK },
    Certification { name: "GDPR Compliant", description: "Data Protection", icon: ICON_SHIELD_CHECK },
];

pub const PARTNERS: &[&str] = &["QuickBooks", "Salesforce", "Microsoft", "Stripe", "AWS"];

// -----------------------------------------------------------------------------
// FAQ
// -----------------------------------------------------------------------------

pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[FaqItem] = &[
    FaqItem {
        question: "What is a Transaction Management System?",
        answer: "A Transaction Management System is a secure digital platform that helps brokers and financial professionals track, manage, and monitor all their transactions in real-time. It replaces manual record-keeping with automated, compliant, and secure digital processes. Our system handles everything from transaction logging and compliance tracking to automated reporting and audit trail generation.",
    },
    FaqItem {
        question: "How does it improve compliance tracking?",
        answer: "Our system automatically generates audit trails, maintains compliance documentation, and provides real-time reporting to meet regulatory requirements. All transactions are logged with timestamps, user information, and complete documentation trails. We support various regulatory frameworks including SEC, FINRA, and international compliance standards, ensuring you're always audit-ready.",
    },
    FaqItem {
        question: "Is my transaction data secure?",
        answer: "Yes, we use enterprise-grade encryption, secure cloud infrastructure, and follow industry best practices for data protection. Your transaction data is encrypted both in transit and at rest with AES-256 encryption. We maintain SOC 2 Type II certification, PCI DSS Level 1 compliance, and conduct regular third-party security audits. Our infrastructure is hosted on secure, geographically distributed data centers with 99.9% uptime guarantee.",
    },
    FaqItem {
        question: "Can multiple team members access the system?",
        answer: "Absolutely. Our system supports multi-user access with role-based permissions, allowing different team members to have appropriate access levels while maintaining security and audit trails for all actions. You can set up custom roles for brokers, compliance officers, administrators, and support staff, each with tailored permissions and access controls.",
    },
    FaqItem {
        question: "How quickly can I get started?",
        answer: "You can get started immediately with our free demo. Full setup typically takes less than 24 hours, including data migration assistance and team training to ensure a smooth transition from your current system. Our onboarding team provides comprehensive training, data import services, and ongoing support to help you maximize the platform's benefits from day one.",
    },
    FaqItem {
        question: "What integrations are available?",
        answer: "We offer 50+ pre-built integrations with popular financial platforms including QuickBooks, Salesforce, Microsoft Office 365, trading platforms, CRM systems, and accounting software. Our RESTful API allows for custom integrations, and we provide webhook support for real-time data synchronization. Our technical team can assist with custom integration requirements.",
    },
    FaqItem {
        question: "How much does it cost?",
        answer: "Our pricing is flexible and scales with your business needs. We offer plans starting from $99/month for small teams up to enterprise solutions for large organizations. All plans include core features, security compliance, and customer support. Contact our sales team for a customized quote based on your specific requirements and user count.",
    },
    FaqItem {
        question: "What kind of support do you provide?",
        answer: "We provide comprehensive support including 24/7 technical assistance, dedicated account management for enterprise clients, comprehensive documentation, video tutorials, and live training sessions. Our support team consists of financial industry experts who understand your specific needs and can provide both technical and business guidance.",
    },
];

// -----------------------------------------------------------------------------
// Call to action
// -----------------------------------------------------------------------------

pub const CTA_BADGE: &str = "Limited Time: 30-Day Free Trial + Migration Support";
pub const CTA_SUBHEADLINE: &str = "Join over 1,500 financial professionals who have eliminated manual errors, improved compliance, and saved hours every day with our secure transaction management platform.";
pub const CTA_VALUE_PROPS: &[&str] = &["30-Day Free Trial", "No Setup Fees", "24/7 Support"];
pub const CTA_DISCLAIMER: &str = "* No credit card required for trial. Cancel anytime during your trial period with no obligations.";

/// Trust line under the CTA buttons; the first one carries a lock instead of a check.
pub const CTA_TRUST_INDICATORS: &[(&str, &str)] = &[
    (ICON_LOCK_CLOSED, "Bank-Level Security"),
    (ICON_CHECK, "SOC 2 Certified"),
    (ICON_CHECK, "99.9% Uptime SLA"),
];

// -----------------------------------------------------------------------------
// Footer
// -----------------------------------------------------------------------------

pub const FOOTER_BLURB: &str = "The leading transaction management system for brokers and financial professionals. Secure, compliant, and built for scale.";

pub struct LinkColumn {
    pub heading: &'static str,
    pub links: &'static [NavLink],
}

pub const FOOTER_COLUMNS: &[LinkColumn] = &[
    LinkColumn {
        heading: "Product",
        links: &[
            NavLink { label: "Features", href: "#features" },
            NavLink { label: "Pricing", href: "#" },
            NavLink { label: "Integrations", href: "#" },
            NavLink { label: "API Documentation", href: "#" },
        ],
    },
    LinkColumn {
        heading: "Support",
        links: &[
            NavLink { label: "Help Center", href: "#" },
            NavLink { label: "Contact Support", href: "#" },
            NavLink { label: "System Status", href: "#" },
            NavLink { label: "Security", href: "#" },
        ],
    },
];

pub const LEGAL_LINKS: &[NavLink] = &[
    NavLink { label: "Privacy Policy", href: "#" },
    NavLink { label: "Terms of Service", href: "#" },
    NavLink { label: "Cookie Policy", href: "#" },
];

/// (accessible label, brand icon)
pub const SOCIAL_LINKS: &[(&str, &str)] = &[("Twitter", ICON_TWITTER), ("LinkedIn", ICON_LINKEDIN)];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    /// Ids the sections render; `#` alone scrolls to the top.
    const SECTION_IDS: &[&str] = &["features", "testimonials", "faq", "final-cta", "contact"];

    fn anchor_resolves(href: &str) -> bool {
        match href.strip_prefix('#') {
            Some("") => true,
            Some(id) => SECTION_IDS.contains(&id),
            None => false,
        }
    }

    #[test]
    fn section_counts() {
        assert_eq!(FEATURES.len(), 6);
        assert_eq!(PAIN_POINTS.len(), SOLUTIONS.len());
        assert_eq!(TESTIMONIALS.len(), 3);
        assert_eq!(CERTIFICATIONS.len(), 4);
        assert_eq!(TRUST_STATS.len(), 4);
        assert_eq!(FAQS.len(), 8);
    }

    #[test]
    fn nav_and_footer_anchors_resolve() {
        for link in NAV_LINKS {
            assert!(anchor_resolves(link.href), "dangling nav link {}", link.href);
        }
        for column in FOOTER_COLUMNS {
            for link in column.links {
                assert!(anchor_resolves(link.href), "dangling footer link {}", link.href);
            }
        }
    }

    #[test]
    fn anchor_resolution_rules() {
        assert!(anchor_resolves("#"));
        assert!(anchor_resolves("#final-cta"));
        assert!(!anchor_resolves("#pricing"));
        assert!(!anchor_resolves("https://example.com"));
    }

    #[test]
    fn ratings_within_scale() {
        for t in TESTIMONIALS {
            assert!((1..=MAX_RATING).contains(&t.rating), "{} has rating {}", t.name, t.rating);
        }
    }

    #[test]
    fn titles_and_questions_unique() {
        let titles: HashSet<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(titles.len(), FEATURES.len());
        let questions: HashSet<_> = FAQS.iter().map(|f| f.question).collect();
        assert_eq!(questions.len(), FAQS.len());
    }

    #[test]
    fn copy_is_not_blank() {
        assert!(FEATURES.iter().all(|f| f.benefits.iter().all(|b| !b.trim().is_empty())));
        assert!(FAQS.iter().all(|f| f.answer.len() > f.question.len()));
        assert!(TESTIMONIALS.iter().all(|t| t.image.starts_with("https://")));
    }
}
