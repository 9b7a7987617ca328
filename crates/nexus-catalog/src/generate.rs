//! Static seed products and procedural catalog generation.

use crate::model::{Category, Product};
use log::info;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Purchase link shared by every listing in the demo catalog.
const BUY_URL: &str = "https://buy.stripe.com/test_4gM28r0k5dxs5JB6lq93y00";

const ADJECTIVES: [&str; 20] = [
    "Ultimate",
    "Pro",
    "Essential",
    "Advanced",
    "AI-Powered",
    "Minimalist",
    "Modern",
    "Viral",
    "Automated",
    "Complete",
    "Elite",
    "Master",
    "Dynamic",
    "Smart",
    "Growth",
    "Strategic",
    "Rapid",
    "Seamless",
    "Next-Gen",
    "Turbo",
];

const TOPICS: [&str; 24] = [
    "React",
    "Next.js",
    "Figma",
    "SEO",
    "Marketing",
    "Python",
    "Finance",
    "3D Blender",
    "Notion",
    "Obsidian",
    "Copywriting",
    "Email",
    "SaaS",
    "E-commerce",
    "Crypto",
    "Trading",
    "Wellness",
    "Fitness",
    "Productivity",
    "Leadership",
    "Data Science",
    "Machine Learning",
    "UX Design",
    "Branding",
];

/// Noun forms with the category each one implies.
const NOUNS: [(&str, Category); 17] = [
    ("Kit", Category::Template),
    ("Stack", Category::Software),
    ("Boilerplate", Category::Software),
    ("Course", Category::Course),
    ("System", Category::Template),
    ("Bundle", Category::Creative),
    ("Assets", Category::Creative),
    ("Icons", Category::Creative),
    ("Templates", Category::Template),
    ("Guide", Category::Ebook),
    ("Blueprint", Category::Ebook),
    ("Framework", Category::Marketing),
    ("Engine", Category::Software),
    ("Dashboard", Category::Template),
    ("Masterclass", Category::Course),
    ("Prompts", Category::AiPack),
    ("Scripts", Category::Software),
];

const GRADIENTS: [&str; 15] = [
    "from-gray-100 to-gray-300",
    "from-gray-200 to-gray-400",
    "from-gray-100 to-white",
    "from-black to-gray-800",
    "from-purple-100 to-blue-100",
    "from-stone-100 to-stone-300",
    "from-blue-50 to-indigo-100",
    "from-orange-100 to-yellow-100",
    "from-green-50 to-emerald-100",
    "from-red-50 to-pink-100",
    "from-slate-100 to-slate-300",
    "from-cyan-50 to-blue-100",
    "from-purple-50 to-fuchsia-100",
    "from-rose-50 to-rose-200",
    "from-violet-50 to-violet-200",
];

/// Build the fixed seed listings that open the catalog.
pub fn seed_products() -> Vec<Product> {
    const SEEDS: [(&str, &str, &str, Category, &str); 16] = [
        (
            "The Solopreneur AI Stack",
            "Complete guide to automating your business with LLMs.",
            "$49.00",
            Category::Ebook,
            "from-gray-100 to-gray-300",
        ),
        (
            "SaaS Marketing Kit 2025",
            "Email templates, social posts, and strategy decks.",
            "$129.00",
            Category::Marketing,
            "from-gray-200 to-gray-400",
        ),
        (
            "Next.js + AI Boilerplate",
            "Production ready starter kit for AI wrappers.",
            "$249.00",
            Category::Software,
            "from-gray-100 to-white",
        ),
        (
            "500+ Midjourney Prompts",
            "High fidelity artistic prompts for creative professionals.",
            "$19.00",
            Category::AiPack,
            "from-black to-gray-800",
        ),
        (
            "Ultimate Figma UI Kit",
            "Over 2000+ components for rapid prototyping and design.",
            "$89.00",
            Category::Template,
            "from-purple-100 to-blue-100",
        ),
        (
            "Notion Life OS",
            "The all-in-one productivity system for your second brain.",
            "$39.00",
            Category::Template,
            "from-stone-100 to-stone-300",
        ),
        (
            "React Native Starter",
            "Build mobile apps faster with this pre-configured template.",
            "$149.00",
            Category::Software,
            "from-blue-50 to-indigo-100",
        ),
        (
            "Procreate Brushes Vol. 1",
            "Hand-crafted texture brushes for digital artists.",
            "$29.00",
            Category::Creative,
            "from-orange-100 to-yellow-100",
        ),
        (
            "SEO Mastery Course",
            "Rank #1 on Google with this comprehensive video guide.",
            "$199.00",
            Category::Course,
            "from-green-50 to-emerald-100",
        ),
        (
            "Email Marketing Sequences",
            "Copy-paste email scripts that convert leads into customers.",
            "$59.00",
            Category::Marketing,
            "from-red-50 to-pink-100",
        ),
        (
            "Python for Finance Scripts",
            "Automate stock analysis with these Python modules.",
            "$79.00",
            Category::Software,
            "from-slate-100 to-slate-300",
        ),
        (
            "3D Blender Assets Pack",
            "Low-poly models ready for your next game project.",
            "$45.00",
            Category::Creative,
            "from-cyan-50 to-blue-100",
        ),
        (
            "Lo-Fi Beats Pack",
            "Royalty-free chill beats for content creators.",
            "$25.00",
            Category::Creative,
            "from-purple-50 to-fuchsia-100",
        ),
        (
            "Instagram Growth Guide",
            "Strategies to grow from 0 to 100k followers organically.",
            "$35.00",
            Category::Ebook,
            "from-rose-50 to-rose-200",
        ),
        (
            "Modern Resume Templates",
            "Stand out to recruiters with these clean, ATS-friendly designs.",
            "$15.00",
            Category::Template,
            "from-gray-50 to-gray-200",
        ),
        (
            "Obsidian Vaults Starter",
            "Pre-linked knowledge graphs for researchers and writers.",
            "$29.00",
            Category::Template,
            "from-violet-50 to-violet-200",
        ),
    ];

    SEEDS
        .iter()
        .enumerate()
        .map(|(index, (title, description, price, category, gradient))| Product {
            id: (index + 1).to_string(),
            title: (*title).to_string(),
            description: (*description).to_string(),
            price: (*price).to_string(),
            category: *category,
            gradient: (*gradient).to_string(),
            buy_url: BUY_URL.to_string(),
        })
        .collect()
}

/// Generate the full catalog: seed listings followed by `count` procedurally
/// generated entries built from the fixed word lists.
pub fn generate_products(count: usize, rng: &mut impl Rng) -> Vec<Product> {
    let mut products = seed_products();
    let mut id_counter = products.len() + 1;

    for _ in 0..count {
        let adjective = ADJECTIVES.choose(rng).copied().unwrap_or("Ultimate");
        let topic = TOPICS.choose(rng).copied().unwrap_or("SaaS");
        let (noun, category) = NOUNS.choose(rng).copied().unwrap_or(NOUNS[0]);
        let gradient = GRADIENTS.choose(rng).copied().unwrap_or(GRADIENTS[0]);
        let price = rng.random_range(9..209);
        let noun_lower = noun.to_lowercase();

        let description = match rng.random_range(0..5) {
            0 => format!("Boost your {topic} workflow with this professional {noun_lower}."),
            1 => format!("The only {noun_lower} you need to master {topic}."),
            2 => format!("High-quality resources for serious {topic} professionals."),
            3 => format!("Accelerate your projects with this pre-built {topic} {noun_lower}."),
            _ => format!("Save 100+ hours with the {adjective} {topic} {noun_lower}."),
        };

        products.push(Product {
            id: id_counter.to_string(),
            title: format!("{adjective} {topic} {noun}"),
            description,
            price: format!("${price}.00"),
            category,
            gradient: gradient.to_string(),
            buy_url: BUY_URL.to_string(),
        });
        id_counter += 1;
    }
    products
}

/// The full in-memory record set, static seeds plus generated entries.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog with `generated_count` procedural entries.
    pub fn generate(generated_count: usize, rng: &mut impl Rng) -> Self {
        let products = generate_products(generated_count, rng);
        info!("generated catalog (total={})", products.len());
        Self { products }
    }

    /// Build a catalog from explicit records, for tests and fixtures.
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All records in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Total record count.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Catalog, generate_products, seed_products};
    use crate::model::Category;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn seed_list_is_stable() {
        let seeds = seed_products();
        assert_eq!(seeds.len(), 16);
        assert_eq!(seeds[0].title, "The Solopreneur AI Stack");
        assert_eq!(seeds[0].id, "1");
        assert_eq!(seeds[15].id, "16");
        assert_eq!(seeds[2].category, Category::Software);
    }

    #[test]
    fn generation_appends_after_seeds_with_sequential_ids() {
        let mut rng = StdRng::seed_from_u64(1);
        let products = generate_products(10, &mut rng);
        assert_eq!(products.len(), 26);
        assert_eq!(products[16].id, "17");
        assert_eq!(products[25].id, "26");
    }

    #[test]
    fn generated_prices_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(2);
        let catalog = Catalog::generate(500, &mut rng);
        for product in &catalog.products()[16..] {
            let value = product.price_value();
            assert!((9.0..=208.0).contains(&value), "price {value} out of range");
            assert!(product.price.starts_with('$'));
            assert!(product.price.ends_with(".00"));
        }
    }

    #[test]
    fn generation_is_reproducible_for_a_seed() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        assert_eq!(generate_products(50, &mut a), generate_products(50, &mut b));
    }
}
