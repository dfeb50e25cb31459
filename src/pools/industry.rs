/// Known industry keys. Free-text industry values are matched
/// case-insensitively against these; anything else falls back to
/// `technology`.
pub const INDUSTRIES: &[&str] = &[
    "technology",
    "fashion",
    "food",
    "health",
    "fitness",
    "finance",
    "education",
    "travel",
    "beauty",
    "realestate",
    "automotive",
    "gaming",
    "ecommerce",
];

pub fn resolve_industry(value: &str) -> &'static str {
    let normalized: String = value
        .to_lowercase()
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .collect();
    INDUSTRIES
        .iter()
        .copied()
        .find(|key| *key == normalized)
        .unwrap_or("technology")
}

pub fn industry_keywords(industry: &str) -> &'static [&'static str] {
    match resolve_industry(industry) {
        "fashion" => &[
            "style",
            "outfit",
            "trendy",
            "wardrobe",
            "designer",
            "streetwear",
            "apparel",
            "runway",
            "accessories",
            "seasonal collection",
        ],
        "food" => &[
            "foodie",
            "delicious",
            "recipes",
            "gourmet",
            "organic",
            "tasty",
            "restaurant",
            "chef",
            "fresh ingredients",
            "comfort food",
        ],
        "health" => &[
            "wellness",
            "healthy living",
            "selfcare",
            "nutrition",
            "mindfulness",
            "vitality",
            "immunity",
            "balance",
            "clean eating",
            "holistic",
        ],
        "fitness" => &[
            "workout",
            "gym",
            "training",
            "cardio",
            "strength",
            "athlete",
            "fitfam",
            "endurance",
            "body goals",
            "active lifestyle",
        ],
        "finance" => &[
            "investing",
            "savings",
            "wealth",
            "budgeting",
            "financial freedom",
            "stocks",
            "credit",
            "retirement",
            "passive income",
            "money tips",
        ],
        "education" => &[
            "learning",
            "courses",
            "study",
            "skills",
            "certification",
            "tutoring",
            "elearning",
            "knowledge",
            "classroom",
            "career growth",
        ],
        "travel" => &[
            "adventure",
            "wanderlust",
            "vacation",
            "explore",
            "destinations",
            "getaway",
            "roadtrip",
            "passport",
            "sightseeing",
            "travel deals",
        ],
        "beauty" => &[
            "skincare",
            "makeup",
            "glow",
            "cosmetics",
            "haircare",
            "selflove",
            "routine",
            "serum",
            "natural beauty",
            "spa day",
        ],
        "realestate" => &[
            "property",
            "homes",
            "listings",
            "mortgage",
            "dream home",
            "open house",
            "investment property",
            "realtor",
            "housing market",
            "curb appeal",
        ],
        "automotive" => &[
            "cars",
            "driving",
            "horsepower",
            "test drive",
            "dealership",
            "electric vehicle",
            "maintenance",
            "detailing",
            "road ready",
            "car lovers",
        ],
        "gaming" => &[
            "gamer",
            "esports",
            "gameplay",
            "streaming setup",
            "console",
            "pc gaming",
            "multiplayer",
            "speedrun",
            "game night",
            "patch notes",
        ],
        "ecommerce" => &[
            "online shopping",
            "free shipping",
            "checkout",
            "deals",
            "storewide",
            "cart",
            "bestsellers",
            "flash sale",
            "new arrivals",
            "customer favorites",
        ],
        _ => &[
            "software",
            "innovation",
            "tech",
            "digital transformation",
            "saas",
            "cloud",
            "automation",
            "startup tools",
            "ai tools",
            "gadgets",
        ],
    }
}
