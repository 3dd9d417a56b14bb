use serde::Serialize;

use crate::projects::ProjectCategory;

pub const OWNER: &str = "Ngene Daniel";
pub const GITHUB_URL: &str = "https://github.com/DanielChristLight1999";
/// Site-root paths of the static images, served from `public/`.
pub const PORTRAIT_SRC: &str = "/portrait.svg";
pub const FAVICON_SRC: &str = "/favicon.svg";

/// Mode flag values that select the software engineer persona.
const SOFTWARE_FLAGS: [&str; 4] = ["js", "javascript", "software", "fullstack"];

/// Which content bundle the site renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PortfolioMode {
    #[default]
    Web3,
    Software,
}

impl PortfolioMode {
    /// Case-insensitive lookup. Unknown or missing flags fall back to Web3.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some(f) if SOFTWARE_FLAGS.contains(&f.to_ascii_lowercase().as_str()) => {
                Self::Software
            }
            _ => Self::Web3,
        }
    }

    /// Mode baked in at compile time from `PORTFOLIO_MODE`, so the server
    /// render and the hydrated bundle always agree.
    pub fn from_build_env() -> Self {
        Self::from_flag(option_env!("PORTFOLIO_MODE"))
    }

    pub fn persona(self) -> &'static Persona {
        match self {
            Self::Web3 => &WEB3,
            Self::Software => &SOFTWARE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledItem {
    pub label: &'static str,
    pub value: &'static str,
}

const fn item(label: &'static str, value: &'static str) -> LabeledItem {
    LabeledItem { label, value }
}

/// Head metadata for a persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

/// Every piece of copy that differs between the two personas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Persona {
    pub meta: SiteMeta,
    pub hero_tagline: &'static str,
    pub about_title: &'static str,
    pub about_body: &'static str,
    pub about_tags: &'static [&'static str],
    pub core_strengths: &'static [&'static str],
    pub build_heading: &'static str,
    pub what_i_build: &'static [&'static str],
    pub projects_heading: &'static str,
    pub projects_intro: &'static str,
    pub other_projects_heading: &'static str,
    pub other_projects_intro: &'static str,
    pub experience_heading: &'static str,
    pub experience_body: &'static str,
    pub capabilities: &'static [LabeledItem],
    pub tech_stack_intro: &'static str,
    pub tech_stack: &'static [LabeledItem],
    pub how_i_work_heading: &'static str,
    pub how_i_work_body: &'static str,
    pub work_principles: &'static [&'static str],
    pub contact_heading: &'static str,
    pub contact_body: &'static str,
    pub primary_category: ProjectCategory,
}

pub static WEB3: Persona = Persona {
    meta: SiteMeta {
        title: "Ngene Daniel — Web3 Engineer (Solana-Focused)",
        description: "Web3 engineer building production-grade Solana applications across smart contracts, protocol tooling, indexing infrastructure, and Web3 frontends.",
        keywords: &[
            "Ngene Daniel",
            "Web3",
            "Solana",
            "Anchor",
            "blockchain",
            "smart contracts",
            "Lagos",
            "Nigeria",
        ],
    },
    hero_tagline: "Web3 Engineer (Solana-Focused)",
    about_title: "Web3 engineer focused on secure Solana systems.",
    about_body: "I’m a Web3 engineer building production-grade Solana applications across smart contracts, protocol tooling, indexing infrastructure, and Web3 frontends. I ship systems that are secure, scalable, and actually usable by real users.",
    about_tags: &["Security-first", "Protocol-focused", "Systems builder", "User-ready UX"],
    core_strengths: &[
        "Solana programs with PDA validation and safe authority models",
        "Protocol tooling for markets, fees, and treasury flows",
        "Indexing pipelines for analytics and protocol state",
        "Web3 UX with reliable transaction handling",
    ],
    build_heading: "End-to-end Web3 systems for real users.",
    what_i_build: &[
        "Solana programs with deterministic PDA structures and safe upgrades",
        "Protocol tooling for treasury, fees, and market lifecycle management",
        "Indexing and analytics pipelines for on-chain state + user positions",
        "Web3 frontends with clear transaction states and wallet UX",
        "Operational infrastructure for high-volume token distributions",
    ],
    projects_heading: "Solana projects built for safety and scale.",
    projects_intro: "Highlighted Web3 projects plus other production systems built across security, analytics, and real-world operations.",
    other_projects_heading: "Other Projects",
    other_projects_intro: "Additional systems shipped across security, analytics, and commerce.",
    experience_heading: "Reliability across on-chain and off-chain systems.",
    experience_body: "I build and operate Solana programs, protocol tooling, and indexing services with production-grade reliability. The focus stays on invariants, safety, and clean UX.",
    capabilities: &[
        item("Solana program architecture", "Safety & logic"),
        item("Indexing + analytics", "Data pipelines"),
        item("Wallet auth + sessions", "Security & UX"),
        item("Web3 frontends", "Transaction UX"),
    ],
    tech_stack_intro: "Writing on Solana engineering, system design, and Web3 UX soon. Here’s the stack behind my recent work.",
    tech_stack: &[
        item("Blockchain", "Solana, Anchor"),
        item("Frontend", "Next.js, React, Tailwind"),
        item("Backend", "Node.js, NestJS, Prisma"),
        item("Infra", "Linux, NGINX, PM2"),
        item("Auth", "Wallet adapters, Privy"),
        item("Tooling", "Custom Solana scripts & services"),
    ],
    how_i_work_heading: "Web3 execution with a reliability mindset.",
    how_i_work_body: "I treat Web3 infrastructure as financial infrastructure. That means explicit invariants, safe authority models, and transaction UX that users can trust.",
    work_principles: &[
        "Treat Web3 infra like financial infrastructure",
        "Prioritize safety, invariants, and clear failure modes",
        "Ship usable UX with reliable transaction flows",
        "Build for long-term maintainability and upgrades",
    ],
    contact_heading: "Open to Web3 collaborations.",
    contact_body: "Reach out for Solana programs, protocol tooling, or Web3 product work.",
    primary_category: ProjectCategory::Web3,
};

pub static SOFTWARE: Persona = Persona {
    meta: SiteMeta {
        title: "Ngene Daniel — Software Engineer",
        description: "Full-stack software engineer building production-grade web apps, internal tools, and scalable systems. JavaScript, Node.js, React, and Solana.",
        keywords: &[
            "Ngene Daniel",
            "Software Engineer",
            "JavaScript",
            "React",
            "Node.js",
            "full-stack",
            "Lagos",
            "Nigeria",
        ],
    },
    hero_tagline: "Software Engineer & Product Builder",
    about_title: "Full-stack engineer focused on secure, scalable systems.",
    about_body: "I’m a full-stack software engineer with 4+ years of experience building production-grade web apps, internal tools, and on-chain products. I turn complex ideas into scalable, secure, and maintainable systems — from business dashboards and eCommerce platforms to encrypted apps and Solana smart contracts.",
    about_tags: &["Security-first", "Product-minded", "Systems builder", "Operational UX"],
    core_strengths: &[
        "Secure applications with encryption, auth flows, and sensitive data",
        "Admin-heavy systems with reporting, analytics, and role-based dashboards",
        "Real business tools for payments, inventory, affiliates, and subscriptions",
        "Blockchain & Web3 products with Solana + Anchor",
    ],
    build_heading: "From database design to polished customer experience.",
    what_i_build: &[
        "End-to-end products: database → backend → frontend → deployment",
        "Admin-heavy systems with reporting, analytics, and role-based dashboards",
        "Secure applications with encryption, auth flows, and sensitive data",
        "Blockchain & Web3 products, especially on Solana",
        "Business tools: POS, payments, inventory, affiliates, subscriptions",
    ],
    projects_heading: "Products built for security, scale, and real business needs.",
    projects_intro: "Highlighted software systems plus other production work across commerce, analytics, and security.",
    other_projects_heading: "Other Projects",
    other_projects_intro: "Additional work across Web3, infrastructure, and security.",
    experience_heading: "Delivery across business-critical systems.",
    experience_body: "I’ve shipped dashboards, commerce platforms, encrypted systems, and on-chain products with production-grade reliability. My focus stays on durability, clarity, and measurable business impact.",
    capabilities: &[
        item("Encrypted data platforms", "Security & UX"),
        item("Admin analytics & reporting", "BI & performance"),
        item("Commerce + POS", "Operations"),
        item("Solana programs", "On-chain logic"),
    ],
    tech_stack_intro: "Writing on systems, security, and shipping soon. Meanwhile, here’s the stack behind my recent work.",
    tech_stack: &[
        item("Frontend", "Next.js, React, Tailwind, shadcn/ui"),
        item("Backend", "Node.js, NestJS, Prisma"),
        item("Database", "PostgreSQL"),
        item("Security", "AES-GCM, session keys, secure storage"),
        item("Blockchain", "Solana, Anchor, Web3 integrations"),
        item("Infra", "NGINX, PM2, Linux servers, WSL, subdomains"),
        item("Payments & Email", "Schedulers, delivery pipelines"),
    ],
    how_i_work_heading: "Calm execution with a product-first mindset.",
    how_i_work_body: "I prioritize clarity, resilience, and measurable outcomes. I’m comfortable navigating complex codebases, evolving requirements, and long-term maintainability.",
    work_principles: &[
        "Product-minded: features, users, edge cases",
        "Comfortable with complex systems and refactors",
        "Strong debugging instincts (infra, backend, smart contracts)",
        "Build for long-term maintainability, not hacks",
    ],
    contact_heading: "Open to new collaborations.",
    contact_body: "Reach out for product builds, infrastructure upgrades, or on-chain experiments.",
    primary_category: ProjectCategory::Other,
};

/// schema.org `Person` emitted as JSON-LD in the page head.
#[derive(Debug, Serialize)]
pub struct PersonSchema<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    #[serde(rename = "jobTitle")]
    job_title: &'a str,
    description: &'a str,
    url: &'a str,
    #[serde(rename = "knowsAbout")]
    knows_about: &'a [&'a str],
}

impl Persona {
    pub fn person_schema(&self) -> PersonSchema<'_> {
        PersonSchema {
            context: "https://schema.org",
            kind: "Person",
            name: OWNER,
            job_title: self.hero_tagline,
            description: self.meta.description,
            url: GITHUB_URL,
            knows_about: self.meta.keywords,
        }
    }

    pub fn person_json_ld(&self) -> String {
        // plain data with string fields only
        serde_json::to_string(&self.person_schema()).unwrap_or_default()
    }

    pub fn keywords(&self) -> String {
        self.meta.keywords.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_images_exist() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for src in [PORTRAIT_SRC, FAVICON_SRC] {
            let path = public.join(src.trim_start_matches('/'));
            assert!(path.is_file(), "missing {}", path.display());
        }
    }

    #[test]
    fn test_mode_default_is_web3() {
        assert_eq!(PortfolioMode::from_flag(None), PortfolioMode::Web3);
        assert_eq!(PortfolioMode::from_flag(Some("")), PortfolioMode::Web3);
        assert_eq!(PortfolioMode::from_flag(Some("web3")), PortfolioMode::Web3);
    }

    #[test]
    fn test_mode_software_flags_any_case() {
        for flag in ["fullstack", "FullStack", "FULLSTACK", "js", "JavaScript", "software"] {
            assert_eq!(
                PortfolioMode::from_flag(Some(flag)),
                PortfolioMode::Software,
                "flag {flag}"
            );
        }
    }

    #[test]
    fn test_mode_unknown_falls_back() {
        assert_eq!(PortfolioMode::from_flag(Some("banana")), PortfolioMode::Web3);
        assert_eq!(PortfolioMode::from_flag(Some("full stack")), PortfolioMode::Web3);
    }

    #[test]
    fn test_persona_selection() {
        let web3 = PortfolioMode::Web3.persona();
        assert_eq!(web3.hero_tagline, "Web3 Engineer (Solana-Focused)");
        assert_eq!(web3.primary_category, ProjectCategory::Web3);

        let software = PortfolioMode::Software.persona();
        assert_eq!(software.hero_tagline, "Software Engineer & Product Builder");
        assert_eq!(software.primary_category, ProjectCategory::Other);
        assert!(software.meta.title.ends_with("Software Engineer"));
    }

    #[test]
    fn test_person_json_ld() {
        let json = WEB3.person_json_ld();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["@type"], "Person");
        assert_eq!(value["name"], OWNER);
        assert_eq!(value["jobTitle"], WEB3.hero_tagline);
        assert_eq!(value["knowsAbout"].as_array().unwrap().len(), WEB3.meta.keywords.len());
    }

    #[test]
    fn test_keywords() {
        assert!(SOFTWARE.keywords().starts_with("Ngene Daniel, Software Engineer"));
    }
}
