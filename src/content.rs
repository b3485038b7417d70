//! Static Marketing Content
//!
//! Copy and asset tables rendered by the home page, layout and cart drawer.

pub struct Goal {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const GOALS: &[Goal] = &[
    Goal { title: "Sleep", description: "Optimize your sleep patterns.", image: "/placeholder.jpg" },
    Goal {
        title: "Cognitive Function",
        description: "Enhance your brain's performance and connectivity",
        image: "/placeholder.jpg",
    },
    Goal {
        title: "Foundational Health",
        description: "Promoting healthy, natural deep sleep day to day",
        image: "/placeholder.jpg",
    },
    Goal {
        title: "Athletic Performance",
        description: "Increase your healthy tissue, muscle, and energy",
        image: "/placeholder.jpg",
    },
    Goal { title: "Hormone Support", description: "Boost your mood, libido, and vitality", image: "/placeholder.jpg" },
];

/// Goal cards visible at once in the goals carousel
pub const GOALS_PER_VIEW: usize = 3;

/// Bundle category pills share the goal titles
pub fn bundle_categories() -> impl Iterator<Item = &'static str> {
    GOALS.iter().map(|g| g.title)
}

pub struct Testimonial {
    pub video: &'static str,
    pub title: &'static str,
    pub handle: &'static str,
    pub price: &'static str,
    pub currency_code: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial { video: "/assets/1.mp4", title: "Omega-3", handle: "omega-3", price: "49.95", currency_code: "USD" },
    Testimonial {
        video: "/assets/2.mp4",
        title: "Magnesium L-Threonate",
        handle: "magnesium-l-threonate",
        price: "49.95",
        currency_code: "USD",
    },
    Testimonial {
        video: "/assets/3.mp4",
        title: "Energy Bundle",
        handle: "energy-bundle",
        price: "139.99",
        currency_code: "USD",
    },
    Testimonial {
        video: "/assets/4.mp4",
        title: "Focus Bundle",
        handle: "focus-bundle",
        price: "119.99",
        currency_code: "USD",
    },
    Testimonial {
        video: "/assets/5.mp4",
        title: "Wellness Bundle",
        handle: "wellness-bundle",
        price: "159.99",
        currency_code: "USD",
    },
];

/// The reel opens centered on the third video
pub const TESTIMONIAL_START: usize = 2;
pub const TESTIMONIAL_SLIDE_WIDTH: f64 = 400.0;
pub const TESTIMONIAL_GAP: f64 = 32.0;

pub struct Article {
    pub category: &'static str,
    pub title: &'static str,
    pub author: &'static str,
    pub date: &'static str,
    pub image: &'static str,
}

/// First entry is the featured article
pub const ARTICLES: &[Article] = &[
    Article {
        category: "Balanced Diet",
        title: "Foundational Supplements: Build a Better You",
        author: "Emily Thompson",
        date: "August 31, 2023",
        image: "/assets/Rectangle460.png",
    },
    Article {
        category: "Balanced Diet",
        title: "Taming the Fire Within: Everything You Need to Know About Inflammation",
        author: "Emily Thompson",
        date: "August 31, 2023",
        image: "/assets/Rectangle461.png",
    },
    Article {
        category: "Balanced Diet",
        title: "Optimize Your Sleep with These 15 Strategies",
        author: "Emily Thompson",
        date: "August 31, 2023",
        image: "/assets/Rectangle5511.png",
    },
];

/// (image, alt)
pub const PRESS_LOGOS: &[(&str, &str)] = &[
    ("/assets/rollingstone.png", "Rolling Stone"),
    ("/assets/mensjournal.png", "Men's Journal"),
    ("/assets/laweekly.png", "LA Weekly"),
    ("/assets/herb.png", "Herb"),
    ("/assets/nyt.png", "New York Times"),
    ("/assets/bbc.png", "BBC News"),
];

pub const MARQUEE_REPEAT: usize = 6;
pub const MARQUEE_PHRASES: &[&str] = &["Independently Certified", "Expert Driven"];

/// (title, body)
pub const VALUE_PROPS: &[(&str, &str)] = &[
    ("We Make It Easy", "Personalized Solutions & Guidance Mean You Get Just What You Need Nothing More"),
    ("Clean & Effective", "Proven Ingredients, not Artificial, Crafted By Experts For Optimal Effectiveness"),
    ("Your Free Dietitian", "Every Gainful Subscriber Gets Free, 1:1 Access Their Own Registered Dietitian."),
    ("Made For You", "Performance is Personal. Personalized & Customizable Products For Your Needs, Body & Goals"),
];

pub const INSTAGRAM_HANDLE: &str = "@uncmfrt.com";
pub const INSTAGRAM_URL: &str = "https://instagram.com/";
pub const INSTAGRAM_POSTS: usize = 10;

pub fn instagram_image(n: usize) -> String {
    format!("/assets/Instagram{}.png", n)
}

pub struct MenuLink {
    pub id: &'static str,
    pub title: &'static str,
    pub to: &'static str,
}

pub const MENU: &[MenuLink] = &[
    MenuLink { id: "science", title: "Science", to: "/science" },
    MenuLink { id: "shop", title: "Shop", to: "/shop" },
    MenuLink { id: "podcasts", title: "Podcasts", to: "/podcasts" },
    MenuLink { id: "trainers", title: "Trainers", to: "/trainers" },
    MenuLink { id: "blog", title: "Blog", to: "/blog" },
];

pub struct FooterColumn {
    pub heading: &'static str,
    /// (label, href)
    pub links: &'static [(&'static str, &'static str)],
}

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "About Us",
        links: &[("Blog", "/blog"), ("Product Reviews", "/reviews"), ("Our Story", "/our-story"), ("Delivery", "/delivery")],
    },
    FooterColumn {
        heading: "Support",
        links: &[("Order Status", "/order-status"), ("Help Center", "/help"), ("Contact Us", "/contact"), ("Returns", "/returns")],
    },
    FooterColumn {
        heading: "Important Link",
        links: &[
            ("Maintenance", "/maintenance"),
            ("Warranty", "/warranty"),
            ("Canadian Customers", "/canadian-customers"),
            ("Setup", "/setup"),
        ],
    },
    FooterColumn {
        heading: "Legal",
        links: &[
            ("Privacy Policy", "/privacy"),
            ("Accessibility", "/accessibility"),
            ("Terms of Service", "/terms"),
            ("Affiliate Program", "/affiliate"),
            ("Articles", "/articles"),
        ],
    },
];

pub const CONTACT_PHONE: &str = "(888) 860-0572";

/// (icon, alt)
pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("/assets/instagram.svg", "Instagram"),
    ("/assets/twitter.svg", "Twitter"),
    ("/assets/facebook.svg", "Facebook"),
    ("/assets/youtube.svg", "YouTube"),
];

/// Marketing product tile used in the cart drawer and empty cart
pub struct PromoProduct {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub price: &'static str,
    pub tags: &'static [&'static str],
}

/// Wrap-around slider at the top of the cart drawer
pub const CART_SLIDER: &[PromoProduct] = &[
    PromoProduct {
        title: "Magnesium L-Threonate",
        description: "Enhances the quality of sleep",
        image: "/assets/Product1.png",
        price: "",
        tags: &["GMO Free", "Gluten Free", "Vegan"],
    },
    PromoProduct {
        title: "Whey Protein Isolate",
        description: "Muscle Performance & Recovery",
        image: "/assets/Product2.png",
        price: "",
        tags: &["GMO Free", "Low Calorie", "Fast Absorbing"],
    },
    PromoProduct {
        title: "Pre-Workout Formula",
        description: "Energy & Focus Enhancement",
        image: "/assets/Product3.png",
        price: "",
        tags: &["Sugar Free", "Natural", "Vegan"],
    },
];

pub const CART_RECOMMENDED: &[PromoProduct] = &[
    PromoProduct {
        title: "PR Lotion Starter Bundle",
        description: "Supports cognitive function",
        image: "/assets/3Product.png",
        price: "$99.99",
        tags: &["GMO Free", "Gluten Free", "Vegan"],
    },
    PromoProduct {
        title: "Male Hormone Support Bundle",
        description: "Supports hormone balance",
        image: "/assets/3Product.png",
        price: "$99.99",
        tags: &["GMO Free", "Gluten Free", "Vegan"],
    },
];

/// Upsell row under the cart lines
pub const CART_UPSELL: &[(&str, &str)] = &[
    ("Tongkat & Fadogia 60 Day Supply", "$49.95"),
    ("Male Hormone Support Bundle", "$49.95"),
    ("Complete Test Bundle", "$49.95"),
];

/// Dietary tags shown on every product card
pub const PRODUCT_CARD_TAGS: &[&str] = &["GMO Free", "Gluten Free", "Vegan", "Dairy Free"];

/// Protein showcase blend badges and ingredient blurb
pub const SHOWCASE_BLEND: &[&str] = &["Whey Based", "Build Muscle", "Clean Ingredients"];
pub const SHOWCASE_INGREDIENT: (&str, &str) = (
    "Whey Protein Isolate",
    "Low Calorie With Virtually No Fat or Lactose, Quickly Absorbed To Maximize Muscle Building & Repair.",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_consistent() {
        assert_eq!(GOALS.len(), 5);
        assert_eq!(bundle_categories().count(), GOALS.len());
        assert!(TESTIMONIAL_START < TESTIMONIALS.len());
        assert!(!ARTICLES.is_empty());
        assert_eq!(MENU.len(), 5);
        assert!(FOOTER_COLUMNS.iter().all(|c| !c.links.is_empty()));
    }

    #[test]
    fn test_testimonial_prices_parse() {
        for t in TESTIMONIALS {
            assert!(t.price.parse::<f64>().is_ok(), "{}", t.title);
        }
    }

    #[test]
    fn test_instagram_image() {
        assert_eq!(instagram_image(3), "/assets/Instagram3.png");
    }
}
