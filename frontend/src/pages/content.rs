//! Copy for the landing page. Everything here is display-only.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    /// Shown verbatim, e.g. `"3 Weeks"`.
    pub number: &'static str,
    /// Numeric part for stats that count up on scroll.
    pub count: Option<i64>,
    pub suffix: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProcessStep {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub duration: &'static str,
    pub deliverables: [&'static str; 4],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Benefit {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub value_proposition: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: [&'static str; 4],
    pub cta: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub position: &'static str,
    pub company: &'static str,
    pub result: &'static str,
    pub quote: &'static str,
    pub rating: u8,
}

impl Testimonial {
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FooterLink {
    pub label: &'static str,
    pub section: &'static str,
}

pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection { id: "home", label: "Home", icon: "🏠" },
    NavSection { id: "about", label: "About", icon: "ℹ️" },
    NavSection { id: "services", label: "Services", icon: "⚙️" },
    NavSection { id: "testimonials", label: "Testimonials", icon: "💬" },
    NavSection { id: "contact", label: "Contact", icon: "📧" },
];

pub const NAV_SECTION_IDS: &[&str] = &["home", "about", "services", "testimonials", "contact"];

pub const NAV_CTA: NavSection = NavSection { id: "contact", label: "Get Quote", icon: "💰" };

pub const TRUST_POINTS: &[&str] = &["No obligation", "24-hour response", "Free consultation"];

pub const SOCIAL_PROOF_STATS: &[Stat] = &[
    Stat { number: "150+", count: Some(150), suffix: "+", label: "Projects Delivered", icon: "🚀" },
    Stat { number: "98%", count: Some(98), suffix: "%", label: "Client Satisfaction", icon: "⭐" },
    Stat { number: "300%", count: Some(300), suffix: "%", label: "Average ROI Increase", icon: "📈" },
    Stat { number: "3 Weeks", count: None, suffix: "", label: "Average Delivery", icon: "⚡" },
];

pub const CLIENTS: &[&str] = &[
    "TechStart Solutions",
    "Urban Fitness Studio",
    "Artisan Jewelry Co.",
    "Digital Dynamics",
    "Growth Labs",
];

pub const PROBLEMS: &[&str] = &[
    "Your website looks outdated and unprofessional",
    "Visitors leave without taking action or contacting you",
    "You're invisible on Google and losing to competitors",
    "Your site is slow and doesn't work well on mobile",
];

pub const SOLUTIONS: &[&str] = &[
    "Modern, professional websites that build trust",
    "High-converting designs that turn visitors into customers",
    "SEO optimization that gets you found on Google",
    "Mobile-first, lightning-fast performance",
];

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        number: 1,
        title: "Discovery & Strategy",
        description: "We dive deep into your business goals, analyze your target audience, and study your competition to create a winning digital strategy.",
        icon: "🎯",
        duration: "Week 1",
        deliverables: ["Market Research", "Competitor Analysis", "Strategy Blueprint", "Goals & KPIs"],
    },
    ProcessStep {
        number: 2,
        title: "Design & Prototype",
        description: "We craft beautiful, conversion-focused designs that reflect your brand identity and create engaging user experiences.",
        icon: "🎨",
        duration: "Week 2",
        deliverables: ["Wireframes", "Visual Design", "Interactive Prototype", "Brand Guidelines"],
    },
    ProcessStep {
        number: 3,
        title: "Development & Build",
        description: "We build your website with clean, modern code, ensuring it's lightning-fast, secure, and works flawlessly on all devices.",
        icon: "💻",
        duration: "Week 3-4",
        deliverables: ["Responsive Website", "Performance Optimization", "Security Setup", "Testing & QA"],
    },
    ProcessStep {
        number: 4,
        title: "Launch & Optimize",
        description: "We launch your site with comprehensive monitoring and continuously optimize for maximum performance and conversions.",
        icon: "🚀",
        duration: "Week 5+",
        deliverables: ["Site Launch", "Analytics Setup", "Performance Monitoring", "Ongoing Optimization"],
    },
];

pub const BENEFITS: &[Benefit] = &[
    Benefit {
        icon: "⚡",
        title: "Fast Delivery",
        description: "Most projects completed in 3-5 weeks with regular updates and transparent communication throughout.",
    },
    Benefit {
        icon: "🎯",
        title: "Results-Focused",
        description: "Every decision is data-driven, focused on increasing conversions and growing your bottom line.",
    },
    Benefit {
        icon: "🛡️",
        title: "Risk-Free",
        description: "100% satisfaction guarantee with unlimited revisions until you're completely happy.",
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Website Development",
        value_proposition: "Turn visitors into customers with high-converting designs",
        description: "Professional websites built for speed, security, and results. Modern responsive design that works perfectly on all devices.",
        icon: "💻",
        features: ["Mobile-First Design", "Lightning Fast Loading", "SEO Optimized", "Conversion Focused"],
        cta: "View Website Projects",
    },
    Service {
        title: "Digital Marketing",
        value_proposition: "Get found on Google and grow your business",
        description: "Complete SEO, PPC, and social media strategies that drive qualified traffic and increase your online visibility.",
        icon: "📈",
        features: ["Google SEO", "Paid Advertising", "Social Media", "Analytics & Reporting"],
        cta: "Boost My Visibility",
    },
    Service {
        title: "E-commerce Solutions",
        value_proposition: "Online stores that sell 24/7 automatically",
        description: "From product showcases to secure checkout, we build e-commerce sites that maximize sales and customer satisfaction.",
        icon: "🛒",
        features: ["Secure Payments", "Inventory Management", "Mobile Shopping", "Sales Analytics"],
        cta: "Start Selling Online",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        position: "CEO",
        company: "TechStart Solutions",
        result: "300% increase in leads",
        quote: "WebsiteExpertz transformed our online presence completely. Our new website not only looks amazing but actually converts visitors into customers. The results speak for themselves - we've tripled our lead generation in just 3 months.",
        rating: 5,
    },
    Testimonial {
        name: "Michael Chen",
        position: "Founder",
        company: "Urban Fitness Studio",
        result: "250% boost in bookings",
        quote: "The team understood our vision perfectly. They created a mobile-first website that makes it easy for clients to book classes. Our online bookings have increased dramatically since the launch.",
        rating: 5,
    },
    Testimonial {
        name: "Emma Rodriguez",
        position: "Owner",
        company: "Artisan Jewelry Co.",
        result: "400% growth in sales",
        quote: "Our e-commerce site is now our biggest revenue driver. The design is beautiful and the checkout process is seamless. We've seen a 400% increase in online sales since working with WebsiteExpertz.",
        rating: 5,
    },
];

pub const RESULT_STATS: &[Stat] = &[
    Stat { number: "150+", count: Some(150), suffix: "+", label: "Projects Completed", icon: "🚀" },
    Stat { number: "98%", count: Some(98), suffix: "%", label: "Client Satisfaction", icon: "⭐" },
    Stat { number: "300%", count: Some(300), suffix: "%", label: "Average ROI Increase", icon: "📈" },
    Stat { number: "24/7", count: None, suffix: "", label: "Support Available", icon: "🛟" },
];

pub const FOOTER_SERVICES: &[FooterLink] = &[
    FooterLink { label: "Website Development", section: "services" },
    FooterLink { label: "Digital Marketing", section: "services" },
    FooterLink { label: "E-commerce Solutions", section: "services" },
    FooterLink { label: "SEO Optimization", section: "services" },
];

pub const FOOTER_COMPANY: &[FooterLink] = &[
    FooterLink { label: "About Us", section: "about" },
    FooterLink { label: "Our Process", section: "about" },
    FooterLink { label: "Case Studies", section: "testimonials" },
    FooterLink { label: "Social Proof", section: "social-proof" },
];

pub const HERO_PHRASES: &[&str] = &["Drive Real Results", "Win More Customers", "Grow Your Revenue"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_ids_match_nav_sections() {
        let ids: Vec<&str> = NAV_SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids, NAV_SECTION_IDS);
        assert!(NAV_SECTION_IDS.contains(&NAV_CTA.id));
    }

    #[test]
    fn counted_stats_agree_with_their_label() {
        for stat in SOCIAL_PROOF_STATS.iter().chain(RESULT_STATS) {
            if let Some(count) = stat.count {
                assert_eq!(format!("{}{}", count, stat.suffix), stat.number);
            }
        }
    }

    #[test]
    fn process_steps_are_numbered_in_order() {
        for (index, step) in PROCESS_STEPS.iter().enumerate() {
            assert_eq!(step.number as usize, index + 1);
        }
    }

    #[test]
    fn testimonial_initial_is_first_letter() {
        assert_eq!(TESTIMONIALS[0].initial(), "S");
        assert!(TESTIMONIALS.iter().all(|t| t.rating <= 5));
    }

    #[test]
    fn footer_links_point_at_real_sections() {
        let known = ["home", "social-proof", "about", "services", "testimonials", "contact"];
        for link in FOOTER_SERVICES.iter().chain(FOOTER_COMPANY) {
            assert!(known.contains(&link.section), "{}", link.section);
        }
    }
}
