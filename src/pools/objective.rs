use crate::Objective;

pub fn objective_keywords(objective: Objective) -> &'static [&'static str] {
    match objective {
        Objective::Awareness => &[
            "brand awareness",
            "visibility",
            "reach",
            "impressions",
            "new audience",
            "brand story",
            "first impression",
            "top of mind",
        ],
        Objective::Traffic => &[
            "click through",
            "visit now",
            "web traffic",
            "learn more",
            "discover",
            "browse",
            "explore more",
            "site visits",
        ],
        Objective::Conversions => &[
            "buy now",
            "limited offer",
            "checkout now",
            "order today",
            "conversion",
            "special deal",
            "act fast",
            "secure purchase",
        ],
        Objective::Engagement => &[
            "join the conversation",
            "like and share",
            "comment below",
            "tag a friend",
            "interactive",
            "community love",
            "poll",
            "giveaway",
        ],
        Objective::Leads => &[
            "sign up",
            "free trial",
            "get a quote",
            "download guide",
            "newsletter signup",
            "book a demo",
            "contact us",
            "lead magnet",
        ],
        Objective::Sales => &[
            "sale",
            "discount",
            "clearance",
            "best price",
            "save big",
            "bundle deal",
            "final hours",
            "price drop",
        ],
    }
}

pub fn objective_emojis(objective: Objective) -> &'static [&'static str] {
    match objective {
        Objective::Awareness => &["✨", "🌟", "👀", "📣", "🎯", "💡", "🚀", "🔥"],
        Objective::Traffic => &["👉", "🔗", "🖱️", "📈", "🧭", "💻", "⚡", "🔎"],
        Objective::Conversions => &["🛒", "💳", "✅", "🎁", "⏰", "🔥", "💥", "🤑"],
        Objective::Engagement => &["💬", "❤️", "👍", "🙌", "🎉", "🤝", "😍", "🔁"],
        Objective::Leads => &["📋", "✍️", "📞", "📧", "🆓", "📥", "🤙", "🗓️"],
        Objective::Sales => &["💰", "🏷️", "🤩", "📉", "🛍️", "💸", "🎊", "⚡"],
    }
}
