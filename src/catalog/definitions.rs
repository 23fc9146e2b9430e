//! The built-in catalog table.
//!
//! `deals_offers`, `announcement` and `business` are defined twice below, as they
//! were in the table the existing stores were generated from. The table is
//! resolved with [`category_table`]: first position, last definition.

use indexmap::IndexMap;
use tracing::warn;

pub struct CategoryDefinition {
    pub category: &'static str,
    pub templates: &'static [(&'static str, &'static str)],
}

const DEALS_OFFERS: &[(&str, &str)] = &[
    ("limited_time", "Limited Time Offers"),
    ("premium_deals", "Premium Member Deals"),
    ("special_bundles", "Special Bundle Offers"),
    ("clearance_sale", "Clearance Sale Deals"),
    ("combo_deals", "Combo Deals & Savings"),
    ("exclusive_offers", "Exclusive VIP Offers"),
];

const BUSINESS: &[(&str, &str)] = &[
    ("company_overview", "Company Overview"),
    ("investment_proposal", "Investment Proposal"),
    ("quarterly_report", "Quarterly Business Report"),
    ("business_pitch", "Business Pitch Deck"),
    ("market_analysis", "Market Analysis Report"),
    ("annual_report", "Annual Report Summary"),
];

const ANNOUNCEMENT: &[(&str, &str)] = &[
    ("product_launch", "New Product Launch"),
    ("brand_refresh", "Brand Refresh Unveiling"),
    ("milestone", "Company Milestone Celebration"),
    ("collaboration", "Strategic Collaboration"),
    ("award_win", "Award Recognition"),
    ("innovation_launch", "Innovation Announcement"),
    ("achievement", "Achievement Announcement"),
    ("brand_launch", "Brand Launch Announcement"),
    ("expansion_news", "Business Expansion News"),
    ("partnership", "Partnership Announcement"),
    ("store_opening", "Store Opening Announcement"),
    ("website_redesign", "Website Redesign Announcement"),
];

pub const CATALOG: &[CategoryDefinition] = &[
    CategoryDefinition {
        category: "ecommerce",
        templates: &[
            ("product_page", "Product Details Page"),
            ("category_listing", "Category Products Listing"),
            ("shopping_cart", "Shopping Cart Page"),
            ("checkout_page", "Checkout Process"),
            ("order_confirmation", "Order Confirmation"),
            ("account_dashboard", "Customer Account Dashboard"),
        ],
    },
    CategoryDefinition {
        category: "holiday",
        templates: &[
            ("christmas_special", "Christmas Special"),
            ("new_year_celebration", "New Year Celebration"),
            ("thanksgiving_event", "Thanksgiving Event"),
            ("halloween_party", "Halloween Party"),
            ("easter_celebration", "Easter Celebration"),
            ("valentines_special", "Valentine's Special"),
        ],
    },
    CategoryDefinition {
        category: "events_invitations",
        templates: &[
            ("corporate_gala", "Corporate Gala Night"),
            ("product_launch_event", "Product Launch Event"),
            ("networking_mixer", "Professional Networking Mixer"),
            ("workshop_seminar", "Workshop & Seminar"),
            ("award_ceremony", "Awards Ceremony"),
            ("conference_summit", "Conference & Summit"),
        ],
    },
    CategoryDefinition { category: "deals_offers", templates: DEALS_OFFERS },
    CategoryDefinition { category: "business", templates: BUSINESS },
    CategoryDefinition { category: "announcement", templates: ANNOUNCEMENT },
    CategoryDefinition {
        category: "black_friday",
        templates: &[
            ("mega_deal", "Black Friday Mega Deals"),
            ("vip_early_access", "VIP Early Access Sale"),
            ("cyber_monday_tech", "Cyber Monday Tech Bonanza"),
            ("flash_sale", "Flash Sale Alert"),
            ("countdown_deals", "Countdown Deals Spectacular"),
            ("exclusive_bundle", "Exclusive Black Friday Bundles"),
        ],
    },
    CategoryDefinition {
        category: "newsletter",
        templates: &[
            ("monthly_update", "Monthly Newsletter"),
            ("product_launch", "New Product Announcement"),
            ("company_news", "Company Updates"),
            ("industry_insights", "Industry Insights"),
            ("success_stories", "Customer Success Stories"),
            ("upcoming_events", "Upcoming Events"),
        ],
    },
    CategoryDefinition {
        category: "promotional",
        templates: &[
            ("summer_sale", "Summer Sale Spectacular"),
            ("holiday_special", "Holiday Special Offers"),
            ("clearance", "Clearance Sale"),
            ("bundle_deal", "Bundle and Save"),
            ("loyalty_rewards", "Loyalty Member Rewards"),
            ("new_collection", "New Collection Launch"),
        ],
    },
    CategoryDefinition {
        category: "feedback",
        templates: &[
            ("customer_satisfaction", "Customer Satisfaction Survey"),
            ("product_review", "Product Review Request"),
            ("service_feedback", "Service Experience Feedback"),
            ("post_purchase", "Post-Purchase Follow-up"),
            ("website_feedback", "Website Experience Survey"),
            ("nps_survey", "NPS Survey"),
        ],
    },
    CategoryDefinition {
        category: "survey",
        templates: &[
            ("market_research", "Market Research Survey"),
            ("preference_survey", "Customer Preference Study"),
            ("brand_awareness", "Brand Awareness Survey"),
            ("demographic_study", "Demographic Study"),
            ("feature_request", "Product Feature Survey"),
            ("exit_survey", "Exit Survey"),
        ],
    },
    CategoryDefinition {
        category: "quizzes",
        templates: &[
            ("product_quiz", "Product Recommendation Quiz"),
            ("knowledge_test", "Industry Knowledge Test"),
            ("style_finder", "Personal Style Finder"),
            ("preference_match", "Preference Matching Quiz"),
            ("personality_test", "Brand Personality Test"),
            ("engagement_quiz", "Customer Engagement Quiz"),
        ],
    },
    CategoryDefinition {
        category: "sales",
        templates: &[
            ("end_of_season", "End of Season Sale"),
            ("inventory_clearance", "Inventory Clearance"),
            ("members_only", "Members Only Sale"),
            ("weekend_special", "Weekend Special"),
            ("flash_deals", "24-Hour Flash Deals"),
            ("bulk_discount", "Bulk Purchase Discount"),
        ],
    },
    CategoryDefinition { category: "deals_offers", templates: DEALS_OFFERS },
    CategoryDefinition {
        category: "seasonal",
        templates: &[
            ("spring_collection", "Spring Collection"),
            ("summer_essentials", "Summer Essentials"),
            ("fall_fashion", "Fall Fashion Preview"),
            ("winter_sale", "Winter Wonderland Sale"),
            ("holiday_gift", "Holiday Gift Guide"),
            ("new_year", "New Year New Deals"),
        ],
    },
    CategoryDefinition {
        category: "blog_updates",
        templates: &[
            ("featured_articles", "Featured Articles Roundup"),
            ("latest_posts", "Latest Blog Posts"),
            ("monthly_digest", "Monthly Content Digest"),
            ("tech_insights", "Technology Insights"),
            ("industry_news", "Industry News Roundup"),
            ("success_stories", "Customer Success Stories"),
        ],
    },
    CategoryDefinition { category: "announcement", templates: ANNOUNCEMENT },
    CategoryDefinition { category: "business", templates: BUSINESS },
];

/// Categories offered by the UI pickers.
pub const UI_CATEGORIES: &[&str] = &[
    "black_friday",
    "announcement",
    "blog_updates",
    "business",
    "deals_offers",
    "ecommerce",
    "events_invitations",
    "holiday",
    "notification",
    "survey_quizzes",
];

/// Resolves [`CATALOG`] into an ordered map. A repeated category keeps the
/// position of its first definition and the templates of its last one.
pub fn category_table() -> IndexMap<&'static str, &'static [(&'static str, &'static str)]> {
    let mut table = IndexMap::new();
    for definition in CATALOG {
        if table.insert(definition.category, definition.templates).is_some() {
            warn!(
                "Category '{}' is defined more than once; using its last definition",
                definition.category
            );
        }
    }
    table
}

/// Category keys that appear more than once in [`CATALOG`], in order of first repeat.
pub fn duplicate_categories() -> Vec<&'static str> {
    let mut seen = Vec::new();
    let mut duplicates = Vec::new();
    for definition in CATALOG {
        if seen.contains(&definition.category) {
            if !duplicates.contains(&definition.category) {
                duplicates.push(definition.category);
            }
        } else {
            seen.push(definition.category);
        }
    }
    duplicates
}
