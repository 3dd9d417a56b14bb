#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Web3,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub category: ProjectCategory,
    pub title: &'static str,
    pub summary: &'static str,
    pub demo: Option<&'static str>,
    pub highlights: &'static [&'static str],
    pub focus: &'static [&'static str],
}

impl Project {
    /// Demo link worth rendering. Placeholder `#` links are skipped.
    pub fn demo_link(&self) -> Option<&'static str> {
        self.demo.filter(|href| *href != "#" && !href.is_empty())
    }
}

pub static PROJECTS: &[Project] = &[
    Project {
        category: ProjectCategory::Web3,
        title: "On-Chain Prediction Markets — WHEN",
        summary: "Solana-based prediction platform for live on-chain events with deterministic PDAs and safe upgrades.",
        demo: Some("https://when.markets/"),
        highlights: &[
            "Market creation + resolution logic",
            "Treasury and fee flows",
            "Upgradeable Anchor programs",
        ],
        focus: &["Economic correctness", "Invariants", "Program safety"],
    },
    Project {
        category: ProjectCategory::Web3,
        title: "Airdrop Infrastructure — dogl.fun",
        summary: "High-volume token distribution with batching, retries, and cost-aware execution.",
        demo: Some("https://dogl.fun/"),
        highlights: &[
            "Large recipient lists + batching",
            "Failure handling + retry logic",
            "Auditable and transparent flows",
        ],
        focus: &["Operational reliability", "Tooling", "Scalability"],
    },
    Project {
        category: ProjectCategory::Web3,
        title: "Wallets, Identity & Auth",
        summary: "Wallet-based auth with secure session handling and minimal UX friction.",
        demo: Some("#"),
        highlights: &[
            "Privy wallet auth integration",
            "Signing-based verification",
            "Session persistence without webhook reliance",
        ],
        focus: &["Security", "Auth UX", "Web3 onboarding"],
    },
    Project {
        category: ProjectCategory::Web3,
        title: "Web3 Backend & Indexing",
        summary: "Indexing services for on-chain activity, user positions, and protocol analytics.",
        demo: None,
        highlights: &[
            "On-chain event indexing + state tracking",
            "Analytics APIs for dashboards",
            "Linux + NGINX + PM2 deployment",
        ],
        focus: &["Data pipelines", "Infra", "Observability"],
    },
    Project {
        category: ProjectCategory::Web3,
        title: "Web3 Frontend Engineering",
        summary: "Next.js dashboards with transaction states, confirmations, and error handling.",
        demo: None,
        highlights: &[
            "Multi-subdomain routing for protocol tools",
            "Wallet UX for confirmations and errors",
            "UX built for real user behavior",
        ],
        focus: &["Product UX", "Reliability", "Front-end systems"],
    },
    Project {
        category: ProjectCategory::Other,
        title: "Encrypted Notes & Data Systems",
        summary: "Encrypted notes with secure sharing, cross-device sync, and access validation.",
        demo: Some("https://anzora.app/"),
        highlights: &[
            "AES-GCM encryption with session keys",
            "Master key + optional password access",
            "CryptoService + encrypted local storage + Prisma sync",
        ],
        focus: &["Security", "Cryptography", "Data integrity", "UX constraints"],
    },
    Project {
        category: ProjectCategory::Other,
        title: "Advanced Admin Dashboards & Reporting",
        summary: "Dynamic report generators with filters, previews, and CSV/PDF exports across business data.",
        demo: Some("https://themannafood.com/"),
        highlights: &[
            "Sales, inventory, products, customers, affiliates",
            "Date, location, payment method, report-type filters",
            "Custom DataTables with export controls",
        ],
        focus: &["Business intelligence", "Performance", "Data modeling"],
    },
    Project {
        category: ProjectCategory::Other,
        title: "eCommerce & POS Systems",
        summary: "Food & pastry commerce platform with inventory, reporting, and real-world operations.",
        demo: Some("https://themannafood.com/"),
        highlights: &[
            "Online + in-store sales",
            "Inventory management and reports",
            "Admin product management",
        ],
        focus: &["Real-world commerce", "Reliability", "Operator UX"],
    },
    Project {
        category: ProjectCategory::Other,
        title: "Affiliate & Referral Platforms",
        summary: "Dedicated affiliate dashboard with attribution, analytics, and payout logic.",
        demo: Some("https://themannafood.com/"),
        highlights: &[
            "Referral links + click/conversion tracking",
            "Earnings calculations",
            "Attribution + payout pipelines",
        ],
        focus: &["Tracking accuracy", "Analytics", "Scalability"],
    },
    Project {
        category: ProjectCategory::Other,
        title: "Temporary Email Platform",
        summary: "Temporary inbox service with alias routing and mailbox resolution.",
        demo: None,
        highlights: &[
            "Custom Prisma schema for aliases and messages",
            "Postfix lookup logic for subdomains",
            "Mailbox routing + alias resolution",
        ],
        focus: &["Email infra", "Backend architecture"],
    },
    Project {
        category: ProjectCategory::Other,
        title: "Payments & Scheduling (Church App)",
        summary: "Recurring and one-time payments with reminders and user history.",
        demo: Some("https://spiritcityglobal.com/"),
        highlights: &[
            "Scheduled + one-time payments",
            "Automated email reminders",
            "Payment status tracking",
        ],
        focus: &["Payments", "Scheduling", "Reliability"],
    },
];

/// Split projects into the persona's primary category and everything else,
/// keeping the listed order in both halves.
pub fn partition(
    projects: &'static [Project],
    primary: ProjectCategory,
) -> (Vec<&'static Project>, Vec<&'static Project>) {
    projects.iter().partition(|p| p.category == primary)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetails {
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub availability: &'static str,
    pub github: &'static str,
}

impl ContactDetails {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone)
    }
}

pub static CONTACT: ContactDetails = ContactDetails {
    email: "ngenedaniel16@gmail.com",
    phone: "+2349066666515",
    location: "Lagos, Nigeria",
    availability: "2026 Q1",
    github: crate::persona::GITHUB_URL,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_web3_primary() {
        let (primary, other) = partition(PROJECTS, ProjectCategory::Web3);
        assert_eq!(primary.len(), 5);
        assert_eq!(other.len(), 6);
        assert!(primary.iter().all(|p| p.category == ProjectCategory::Web3));
        assert_eq!(primary[0].title, "On-Chain Prediction Markets — WHEN");
        assert_eq!(other[0].title, "Encrypted Notes & Data Systems");
    }

    #[test]
    fn test_partition_other_primary() {
        let (primary, other) = partition(PROJECTS, ProjectCategory::Other);
        assert_eq!(primary.len(), 6);
        assert_eq!(other.len(), 5);
        assert_eq!(other.last().map(|p| p.title), Some("Web3 Frontend Engineering"));
    }

    #[test]
    fn test_demo_link_skips_placeholders() {
        let auth = PROJECTS
            .iter()
            .find(|p| p.title == "Wallets, Identity & Auth")
            .unwrap();
        assert_eq!(auth.demo_link(), None);
        assert_eq!(PROJECTS[0].demo_link(), Some("https://when.markets/"));
    }

    #[test]
    fn test_contact_links() {
        assert_eq!(CONTACT.mailto(), "mailto:ngenedaniel16@gmail.com");
        assert_eq!(CONTACT.tel(), "tel:+2349066666515");
    }
}
