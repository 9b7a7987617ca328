//! Static directory data: legacy resources, featured network links, and
//! the product-intel hub's category groups and curated collections.

/// Entry in the legacy resource directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceItem {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
    pub category: &'static str,
}

/// External link shown in the network section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLink {
    pub title: &'static str,
    pub url: &'static str,
}

/// One product entry inside a hub category group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubEntry {
    pub name: &'static str,
    pub description: &'static str,
}

/// Named group of hub entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub name: &'static str,
    pub items: &'static [HubEntry],
}

/// Curated tool collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub title: &'static str,
    pub description: &'static str,
    pub tools: &'static [&'static str],
}

const RESOURCES: [ResourceItem; 6] = [
    ResourceItem {
        id: "product-hunt",
        name: "Product Hunt",
        description: "Discover new digital products daily. The place to launch and find the next big thing.",
        url: "https://producthunt.com",
        icon: "target",
        category: "Discovery",
    },
    ResourceItem {
        id: "indie-hackers",
        name: "Indie Hackers",
        description: "Community of profitable bootstrappers and founders sharing revenue numbers.",
        url: "https://indiehackers.com",
        icon: "users",
        category: "Community",
    },
    ResourceItem {
        id: "gumroad",
        name: "Gumroad",
        description: "Platform to sell digital downloads, courses, and memberships.",
        url: "https://gumroad.com",
        icon: "shopping-bag",
        category: "E-commerce",
    },
    ResourceItem {
        id: "stripe-atlas",
        name: "Stripe Atlas",
        description: "Incorporate your digital business securely and easily from anywhere.",
        url: "https://stripe.com/atlas",
        icon: "globe",
        category: "Legal",
    },
    ResourceItem {
        id: "vercel",
        name: "Vercel",
        description: "Deploy your web projects instantly with a global edge network.",
        url: "https://vercel.com",
        icon: "zap",
        category: "DevOps",
    },
    ResourceItem {
        id: "openai",
        name: "OpenAI API",
        description: "Build next-gen apps with GPT-4 and Embeddings.",
        url: "https://openai.com",
        icon: "cpu",
        category: "AI Core",
    },
];

const FEATURED_LINKS: [ExternalLink; 2] = [
    ExternalLink {
        title: "Rainbow Lamington",
        url: "https://rainbow-lamington-d97751.netlify.app",
    },
    ExternalLink {
        title: "Digutal",
        url: "https://digutal.netlify.app",
    },
];

const PRODUCT_CATEGORIES: [CategoryGroup; 6] = [
    CategoryGroup {
        name: "Artificial Intelligence",
        items: &[
            HubEntry { name: "Jasper", description: "AI copywriter for enterprise marketing teams." },
            HubEntry { name: "Midjourney", description: "Generative AI for hyper-realistic images." },
            HubEntry { name: "Runway", description: "AI video generation and editing tools." },
            HubEntry { name: "Hugging Face", description: "The platform for open source AI models." },
            HubEntry { name: "LangChain", description: "Framework for developing LLM applications." },
            HubEntry { name: "Claude", description: "Anthropic's helpful and harmless AI assistant." },
        ],
    },
    CategoryGroup {
        name: "Design & Creative",
        items: &[
            HubEntry { name: "Figma", description: "The collaborative interface design tool." },
            HubEntry { name: "Spline", description: "Design and collaborate in 3D." },
            HubEntry { name: "Rive", description: "Interactive animations for every platform." },
            HubEntry { name: "Canva", description: "Graphic design platform for social media." },
            HubEntry { name: "Linearity", description: "Vector design software for iPad and Mac." },
            HubEntry { name: "Framer", description: "Design and publish websites visually." },
        ],
    },
    CategoryGroup {
        name: "Development & Infrastructure",
        items: &[
            HubEntry { name: "Supabase", description: "The open source Firebase alternative." },
            HubEntry { name: "Railway", description: "Instant deployments for any application." },
            HubEntry { name: "PlanetScale", description: "The serverless MySQL platform." },
            HubEntry { name: "Clerk", description: "Authentication and user management." },
            HubEntry { name: "Docker", description: "Accelerate how you build, share, and run applications." },
            HubEntry { name: "Turso", description: "SQLite for the Edge." },
        ],
    },
    CategoryGroup {
        name: "No-Code & Automation",
        items: &[
            HubEntry { name: "Webflow", description: "Visual web development platform." },
            HubEntry { name: "Zapier", description: "Automate workflows between apps." },
            HubEntry { name: "Airtable", description: "Low-code platform for building collaborative apps." },
            HubEntry { name: "Make", description: "Visual platform for designing complex workflows." },
            HubEntry { name: "Bubble", description: "Full-stack no-code app builder." },
            HubEntry { name: "Softr", description: "Build client portals from Airtable data." },
        ],
    },
    CategoryGroup {
        name: "Productivity & Knowledge",
        items: &[
            HubEntry { name: "Notion", description: "All-in-one workspace for notes & docs." },
            HubEntry { name: "Raycast", description: "Blazingly fast, extensible launcher." },
            HubEntry { name: "Cron", description: "The next-generation calendar for pros." },
            HubEntry { name: "Linear", description: "Issue tracking built for speed." },
            HubEntry { name: "Obsidian", description: "A second brain for your private thoughts." },
            HubEntry { name: "Arc", description: "The browser that browses for you." },
        ],
    },
    CategoryGroup {
        name: "Marketing & Analytics",
        items: &[
            HubEntry { name: "Beehiiv", description: "The newsletter platform built for growth." },
            HubEntry { name: "Typeform", description: "People-friendly forms and surveys." },
            HubEntry { name: "PostHog", description: "Open source product OS." },
            HubEntry { name: "Lemlist", description: "Personalized cold outreach emails." },
            HubEntry { name: "Plausible", description: "Simple and privacy-friendly analytics." },
            HubEntry { name: "June", description: "Product analytics for B2B SaaS." },
        ],
    },
];

const COLLECTIONS: [Collection; 3] = [
    Collection {
        title: "The Startup Starter Pack",
        description: "Essential tools to get from zero to one for under $50/mo.",
        tools: &["Linear", "Notion", "Supabase", "Vercel"],
    },
    Collection {
        title: "Enterprise Scale",
        description: "Robust infrastructure for high-compliance environments.",
        tools: &["Auth0", "AWS", "Salesforce", "Jira"],
    },
    Collection {
        title: "Creator Economy Toolkit",
        description: "Everything you need to monetize your audience.",
        tools: &["Gumroad", "Beehiiv", "Circle", "Canva"],
    },
];

/// The legacy resource directory.
pub fn resources() -> &'static [ResourceItem] {
    &RESOURCES
}

/// External links shown in the network section.
pub fn featured_links() -> &'static [ExternalLink] {
    &FEATURED_LINKS
}

/// Hub category groups.
pub fn product_categories() -> &'static [CategoryGroup] {
    &PRODUCT_CATEGORIES
}

/// Curated tool collections.
pub fn collections() -> &'static [Collection] {
    &COLLECTIONS
}

/// Look up a directory resource by identifier or name, case-insensitive.
pub fn find_resource(key: &str) -> Option<&'static ResourceItem> {
    RESOURCES
        .iter()
        .find(|resource| resource.id.eq_ignore_ascii_case(key) || resource.name.eq_ignore_ascii_case(key))
}

/// Trim a hub search query; an effectively empty query is ignored.
pub fn normalize_query(query: &str) -> Option<&str> {
    let query = query.trim();
    (!query.is_empty()).then_some(query)
}
