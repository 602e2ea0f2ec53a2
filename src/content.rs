//! Static site copy. Everything here is read-only and defined at load time.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceDescriptor {
    pub index: usize,
    pub count: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub image: &'static str,
    pub stats: &'static [Stat],
}

pub static SERVICES: [ServiceDescriptor; 6] = [
    ServiceDescriptor {
        index: 0,
        count: "01",
        icon: "🤖",
        title: "AI Agents",
        description: "Your digital workforce that never sleeps. Deploy intelligent agents that handle complex customer interactions, automate decision-making, and scale your operations beyond human limitations.",
        features: &[
            "Conversational AI that understands context & intent",
            "Self-learning systems that get smarter over time",
            "Lightning-fast responses across all channels",
            "Deep analytics that reveal customer psychology",
            "WhatsApp, Web & omnichannel deployment",
        ],
        image: "/images/AI.png",
        stats: &[
            Stat { value: "150+", label: "clients" },
            Stat { value: "85%", label: "efficiency" },
            Stat { value: "24/7", label: "support" },
        ],
    },
    ServiceDescriptor {
        index: 1,
        count: "02",
        icon: "🌐",
        title: "AI Websites",
        description: "Websites that think, adapt, and convert. Your digital storefront becomes a living entity that learns from every visitor, personalizes experiences, and turns browsers into buyers.",
        features: &[
            "Self-optimizing layouts that boost conversions",
            "AI-driven personalization for every visitor",
            "Blazing-fast performance that Google loves",
            "Built-in SEO intelligence that ranks higher",
        ],
        image: "/images/AI2.png",
        stats: &[
            Stat { value: "200+", label: "projects" },
            Stat { value: "+40%", label: "conversion" },
            Stat { value: "99%", label: "speed" },
        ],
    },
    ServiceDescriptor {
        index: 2,
        count: "03",
        icon: "☁️",
        title: "SaaS",
        description: "Transform your business model overnight. Custom SaaS platforms that turn your expertise into recurring revenue streams while automating everything from billing to user onboarding.",
        features: &[
            "Multi-tenant architecture that scales infinitely",
            "Frictionless user management & onboarding",
            "Smart subscription billing that maximizes LTV",
            "Real-time dashboards that reveal growth opportunities",
        ],
        image: "/images/saas.png",
        stats: &[
            Stat { value: "10K+", label: "users" },
            Stat { value: "99.9%", label: "uptime" },
            Stat { value: "∞", label: "scale" },
        ],
    },
    ServiceDescriptor {
        index: 3,
        count: "04",
        icon: "🔍",
        title: "SEO Services",
        description: "Own page one. AI-powered SEO strategies that don't just rank your content, they make your brand the definitive answer in your industry.",
        features: &[
            "AI keyword intelligence that predicts trends",
            "Content optimization that search engines crave",
            "Technical SEO that leaves competitors behind",
            "Performance tracking that proves ROI",
        ],
        image: "/images/SEO2.png",
        stats: &[
            Stat { value: "+300%", label: "ranking" },
            Stat { value: "+150%", label: "traffic" },
            Stat { value: "500+", label: "keywords" },
        ],
    },
    ServiceDescriptor {
        index: 4,
        count: "05",
        icon: "🧠",
        title: "Generative Engine Optimization",
        description: "The future of search is conversational. Position your brand as the go-to source when AI assistants like ChatGPT, Claude, and Perplexity answer your customers' questions.",
        features: &[
            "AI-first content strategies that get cited",
            "Structured data optimization for AI engines",
            "LLM-friendly content that gets recommended",
            "Future-proof visibility across all AI platforms",
        ],
        image: "/images/geo.png",
        stats: &[
            Stat { value: "+250%", label: "visibility" },
            Stat { value: "1M+", label: "queries" },
            Stat { value: "10+", label: "engines" },
        ],
    },
    ServiceDescriptor {
        index: 5,
        count: "06",
        icon: "⚡",
        title: "Automation Systems",
        description: "Eliminate the mundane. Amplify the extraordinary. Custom automation that handles your repetitive tasks while you focus on what truly matters: growing your business.",
        features: &[
            "Workflow automation that runs while you sleep",
            "Data processing that turns chaos into insights",
            "API integrations that connect your entire stack",
            "Business intelligence that predicts the future",
        ],
        image: "/images/auto2.png",
        stats: &[
            Stat { value: "95%", label: "automation" },
            Stat { value: "$50K+", label: "savings" },
            Stat { value: "80%", label: "time" },
        ],
    },
];

pub static HERO_STATS: [Stat; 3] = [
    Stat { value: "50+", label: "Projects Delivered" },
    Stat { value: "100%", label: "Client Satisfaction" },
    Stat { value: "24/7", label: "AI Support" },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub bio: &'static str,
}

pub static TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Mandlenkosi Ndiweni",
        role: "CTO",
        image: "/images/team-cto.jpg",
        bio: "Leading our technical vision and AI innovation strategy",
    },
    TeamMember {
        name: "Mqhelisi Mzizi",
        role: "Chief Marketing Officer",
        image: "/images/team-cmo.jpg",
        bio: "Driving growth through strategic marketing and brand development",
    },
    TeamMember {
        name: "Stanlake Phiri",
        role: "Research Lead",
        image: "/images/team-research.jpg",
        bio: "Pioneering research in AI and automation technologies",
    },
    TeamMember {
        name: "Pious Ncube",
        role: "Operations Manager",
        image: "/images/team-ops.jpg",
        bio: "Ensuring smooth operations and project delivery excellence",
    },
];

pub static CLIENT_LOGOS: [&str; 9] = [
    "Python",
    "React",
    "Javascript",
    "NodeJs",
    "Langflow",
    "n8n",
    "Make",
    "SQL",
    "Tensorflow",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub image: &'static str,
}

pub static PROJECTS: [Project; 4] = [
    Project {
        title: "E-commerce AI Assistant",
        description: "Intelligent chatbot that increased customer engagement by 300% for a major retailer",
        category: "AI Agents",
        image: "/images/project-ecommerce.jpg",
    },
    Project {
        title: "Healthcare Management Platform",
        description: "Comprehensive healthcare platform with AI-powered patient management and analytics",
        category: "SaaS",
        image: "/images/project-healthcare.jpg",
    },
    Project {
        title: "Financial Services SEO Campaign",
        description: "Achieved 400% increase in organic traffic for a fintech startup through AI-driven SEO",
        category: "SEO Services",
        image: "/images/project-fintech.jpg",
    },
    Project {
        title: "Manufacturing Automation System",
        description: "Automated production line monitoring system that reduced downtime by 60%",
        category: "Automation Systems",
        image: "/images/project-manufacturing.jpg",
    },
];

pub static DATA_POINTS: [&str; 3] = [
    "Real-time Data Processing",
    "Advanced Analytics & Insights",
    "Predictive Intelligence",
];

pub static ACTION_POINTS: [&str; 4] = [
    "AI-Powered Business Intelligence",
    "Real-time Data Processing",
    "Automated Workflow Systems",
    "Advanced SEO Analytics",
];

pub static ACTION_STEPS: [(&str, &str); 4] = [
    ("AI Agent Analysis", "Processing customer data..."),
    ("Generate SEO insights", "Optimization recommendations active"),
    ("Automate workflow systems", "Cross-platform integration"),
    ("Deploy AI website features", "Enhanced user experience"),
];

/// In-page navigation targets as (section id, label).
pub static NAV_LINKS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("services", "Services"),
    ("about", "About"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_indices_match_positions() {
        for (position, service) in SERVICES.iter().enumerate() {
            assert_eq!(service.index, position);
            assert_eq!(service.count, format!("{:02}", position + 1));
            assert!(!service.features.is_empty());
        }
    }

    #[test]
    fn services_line_up_with_project_types() {
        use crate::contact::lead::ProjectType;
        let titles: Vec<&str> = SERVICES.iter().map(|s| s.title).collect();
        let offered: Vec<&str> = ProjectType::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(titles, offered);
    }
}
