use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::{truncate_chars, Objective, Tone};

#[derive(Debug, Clone)]
pub struct SelectedTemplates {
    pub headline: String,
    pub description: String,
    pub call_to_action: String,
}

pub fn headline_templates(objective: Objective) -> &'static [&'static str] {
    match objective {
        Objective::Awareness => &[
            "Discover {product} Today",
            "Meet {product}",
            "{product}: Made for You",
            "Say Hello to {product}",
            "The Story Behind {product}",
        ],
        Objective::Traffic => &[
            "Explore {product} Now",
            "See What {product} Can Do",
            "{product}: Take a Look",
            "Your Guide to {product}",
            "Inside {product}",
        ],
        Objective::Conversions => &[
            "Get {product} Today",
            "{product}: Order Now",
            "Own {product} Now",
            "Don't Miss {product}",
            "{product} Is Waiting",
        ],
        Objective::Engagement => &[
            "What Do You Think of {product}?",
            "{product} Wants to Hear You",
            "Join the {product} Community",
            "Share Your {product} Story",
            "Rate {product} Today",
        ],
        Objective::Leads => &[
            "Try {product} Free",
            "{product}: Start Your Trial",
            "Get a {product} Demo",
            "Unlock {product} Today",
            "{product}: Sign Up Now",
        ],
        Objective::Sales => &[
            "{product} On Sale Now",
            "Save Big on {product}",
            "{product}: Limited-Time Deal",
            "Huge Savings on {product}",
            "{product} Price Drop",
        ],
    }
}

pub fn description_templates(objective: Objective) -> &'static [&'static str] {
    match objective {
        Objective::Awareness => &[
            "{product} is changing how people think about quality. See what makes it different.",
            "There's a reason people keep talking about {product}. Find out for yourself.",
            "{product} was built to stand out. Take a closer look today.",
            "New here? {product} is the name to remember this year.",
        ],
        Objective::Traffic => &[
            "Everything you want to know about {product} is one click away.",
            "Curious about {product}? The full story is on our site.",
            "See features, photos, and reviews of {product} in one place.",
            "Your next favorite find is waiting. Come see {product} up close.",
        ],
        Objective::Conversions => &[
            "{product} is in stock and ready to ship. Order in minutes.",
            "Thousands have already chosen {product}. Your turn today.",
            "Stop scrolling, start owning. {product} is a few clicks away.",
            "{product} at its best price, with fast delivery and easy returns.",
        ],
        Objective::Engagement => &[
            "We made {product} for you. Tell us what you think in the comments.",
            "Love it or not? Rate {product} and join the conversation.",
            "Your opinion shapes {product}. Drop a comment and tag a friend.",
            "The {product} community is growing every day. Come say hi.",
        ],
        Objective::Leads => &[
            "Try {product} free, no credit card required. Sign up in seconds.",
            "Get a personal {product} demo and see the difference yourself.",
            "Download the free {product} guide and start smarter.",
            "Join the {product} newsletter for tips, offers, and early access.",
        ],
        Objective::Sales => &[
            "For a limited time, {product} is marked down. Don't wait.",
            "The {product} sale ends soon. Grab yours before it's gone.",
            "Big savings on {product} this week only. Stock is limited.",
            "{product} at its lowest price of the season. Save today.",
        ],
    }
}

pub fn cta_templates(objective: Objective) -> &'static [&'static str] {
    match objective {
        Objective::Awareness => &["Learn More", "Discover Now", "See How", "Find Out More", "Explore"],
        Objective::Traffic => &["Visit Site", "Browse Now", "Take a Look", "Read More", "Check It Out"],
        Objective::Conversions => &["Buy Now", "Get Started", "Order Today", "Shop Now", "Buy Today"],
        Objective::Engagement => &["Join In", "Comment Below", "Share Now", "Tag a Friend", "Vote Now"],
        Objective::Leads => &["Sign Up", "Get a Quote", "Start Free Trial", "Book a Demo", "Download Guide"],
        Objective::Sales => &["Shop the Sale", "Save Now", "Grab the Deal", "Claim Discount", "Buy and Save"],
    }
}

fn tagline_templates(tone: Tone) -> &'static [&'static str] {
    match tone {
        Tone::Professional => &["{product}. Built for results.", "{product}. Work smarter."],
        Tone::Casual => &["{product}. Yeah, it's that good.", "{product}, no big deal. Except it is."],
        Tone::Funny => &["{product}: resistance is futile.", "{product}. Your wallet saw this coming."],
        Tone::Urgent => &["{product}. Today, not tomorrow.", "{product}. The clock is ticking."],
        Tone::Inspirational => &["{product}. Go further.", "{product}. Start something."],
        Tone::Emotional => &["{product}, made with heart.", "{product}. Because you matter."],
        Tone::Authoritative => &["{product}. The standard.", "{product}. Proven where it counts."],
    }
}

fn value_proposition_templates(tone: Tone) -> &'static [&'static str] {
    match tone {
        Tone::Professional => &[
            "{product} delivers measurable value from day one, without the usual overhead.",
            "Teams choose {product} because it does exactly what it promises.",
        ],
        Tone::Casual => &[
            "{product} just works, looks good doing it, and won't break the bank.",
            "No fine print, no fuss. {product} keeps it simple.",
        ],
        Tone::Funny => &[
            "{product}: all the benefits, none of the boring parts.",
            "We'd list everything {product} does, but you have plans today.",
        ],
        Tone::Urgent => &[
            "Every day without {product} is a day you're leaving results on the table.",
            "{product} is ready now, and now is when it matters.",
        ],
        Tone::Inspirational => &[
            "{product} helps you build the version of your day you actually want.",
            "Big goals need the right tools. {product} is one of them.",
        ],
        Tone::Emotional => &[
            "{product} was made for the moments that matter most to you.",
            "You give your best every day. {product} gives it back.",
        ],
        Tone::Authoritative => &[
            "{product} sets the benchmark others measure against.",
            "When the outcome matters, professionals reach for {product}.",
        ],
    }
}

const BENEFITS: &[&str] = &[
    "Quick setup, no learning curve",
    "Backed by responsive support",
    "Loved by thousands of customers",
    "Flexible options for every budget",
    "Quality you can count on",
    "Easy returns, zero hassle",
];

pub fn select_templates(
    objective: Objective,
    product_name: &str,
    rng: &mut StdRng,
) -> Result<SelectedTemplates, String> {
    let product = product_or_default(product_name);

    let headline = headline_templates(objective)
        .choose(rng)
        .ok_or_else(|| "empty headline bucket".to_string())?;
    let description = description_templates(objective)
        .choose(rng)
        .ok_or_else(|| "empty description bucket".to_string())?;
    let call_to_action = cta_templates(objective)
        .choose(rng)
        .ok_or_else(|| "empty cta bucket".to_string())?;

    Ok(SelectedTemplates {
        headline: substitute(headline, product),
        description: substitute(description, product),
        call_to_action: call_to_action.to_string(),
    })
}

/// Alternate headlines from the same objective bucket, skipping the one
/// already chosen.
pub fn alternate_headlines(
    objective: Objective,
    product_name: &str,
    chosen: &str,
    count: usize,
    max_chars: usize,
) -> Vec<String> {
    let product = product_or_default(product_name);
    headline_templates(objective)
        .iter()
        .map(|template| truncate_chars(&substitute(template, product), max_chars))
        .filter(|headline| headline.as_str() != chosen)
        .take(count)
        .collect()
}

pub fn select_tagline(tone: Tone, product_name: &str, rng: &mut StdRng) -> String {
    let product = product_or_default(product_name);
    let template = tagline_templates(tone)
        .choose(rng)
        .copied()
        .unwrap_or("{product}. Built for you.");
    substitute(template, product)
}

pub fn select_value_proposition(tone: Tone, product_name: &str, rng: &mut StdRng) -> String {
    let product = product_or_default(product_name);
    let template = value_proposition_templates(tone)
        .choose(rng)
        .copied()
        .unwrap_or("{product} combines quality and value you can see from day one.");
    substitute(template, product)
}

pub fn select_benefits(rng: &mut StdRng) -> Vec<String> {
    let mut benefits: Vec<&str> = BENEFITS.to_vec();
    benefits.shuffle(rng);
    benefits.into_iter().take(3).map(str::to_string).collect()
}

fn substitute(template: &str, product: &str) -> String {
    template.replace("{product}", product)
}

fn product_or_default(product_name: &str) -> &str {
    let trimmed = product_name.trim();
    if trimmed.is_empty() {
        "Your Product"
    } else {
        trimmed
    }
}
