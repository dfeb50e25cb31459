use crate::Platform;

pub fn platform_keywords(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Facebook => &[
            "community",
            "share this",
            "facebook ads",
            "social proof",
            "local audience",
            "groups",
            "marketplace",
            "page followers",
        ],
        Platform::Instagram => &[
            "visual story",
            "reels",
            "aesthetic",
            "influencer",
            "instadaily",
            "photo dump",
            "carousel",
            "explore page",
        ],
        Platform::Google => &[
            "search intent",
            "ppc",
            "landing page",
            "quality score",
            "ad rank",
            "search network",
            "display ads",
            "keyword planner",
        ],
        Platform::Youtube => &[
            "video content",
            "subscribe",
            "watch time",
            "creator",
            "tutorials",
            "preroll",
            "thumbnail",
            "channel growth",
        ],
        Platform::Linkedin => &[
            "b2b",
            "networking",
            "professionals",
            "thought leadership",
            "hiring",
            "industry insights",
            "decision makers",
            "lead gen",
        ],
        Platform::Tiktok => &[
            "viral",
            "fyp",
            "short form",
            "trending sounds",
            "duet",
            "challenge",
            "creators",
            "gen z",
        ],
        Platform::Twitter => &[
            "threads",
            "real time",
            "trending topics",
            "retweet ready",
            "hot takes",
            "news cycle",
            "hashtag game",
            "followers",
        ],
        Platform::Website => &[
            "seo",
            "conversion rate",
            "user experience",
            "call to action",
            "organic traffic",
            "blog content",
            "newsletter",
            "landing pages",
        ],
    }
}

pub fn platform_emojis(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Facebook => &["👥", "📘", "💙", "📱"],
        Platform::Instagram => &["📸", "🌈", "🤳", "💫"],
        Platform::Google => &["🔍", "🌐", "📊", "🧠"],
        Platform::Youtube => &["▶️", "🎬", "🔔", "📺"],
        Platform::Linkedin => &["💼", "📄", "🏢", "🎓"],
        Platform::Tiktok => &["🎵", "🕺", "⏱️", "😂"],
        Platform::Twitter => &["🐦", "🧵", "💭", "📰"],
        Platform::Website => &["🖥️", "🧩", "🛠️", "📝"],
    }
}

pub fn platform_hashtag_seeds(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Facebook => &[
            "#facebook",
            "#socialmedia",
            "#community",
            "#marketing",
            "#business",
        ],
        Platform::Instagram => &[
            "#instagram",
            "#instagood",
            "#reels",
            "#explorepage",
            "#photooftheday",
        ],
        Platform::Google => &[
            "#google",
            "#searchads",
            "#ppc",
            "#digitalmarketing",
            "#sem",
        ],
        Platform::Youtube => &[
            "#youtube",
            "#video",
            "#subscribe",
            "#creator",
            "#youtubechannel",
        ],
        Platform::Linkedin => &[
            "#linkedin",
            "#b2b",
            "#networking",
            "#career",
            "#professional",
        ],
        Platform::Tiktok => &["#tiktok", "#fyp", "#viral", "#trending", "#foryou"],
        Platform::Twitter => &["#twitter", "#tweet", "#trendingnow", "#news", "#threads"],
        Platform::Website => &[
            "#website",
            "#seo",
            "#blog",
            "#onlinebusiness",
            "#webdesign",
        ],
    }
}
