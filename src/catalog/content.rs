//! HTML for generated templates: the shared page skeleton, per-category accent
//! styles and the content fragments dropped into the page body.

/// Header accents, rendered as `.category { ... }` rules in every page.
pub const ACCENT_STYLES: &[(&str, &str)] = &[
    ("black_friday", "background: linear-gradient(135deg, #1e293b 0%, #0f172a 100%); color: white;"),
    ("newsletter", "background: linear-gradient(135deg, #0ea5e9 0%, #0284c7 100%);"),
    ("promotional", "background: linear-gradient(135deg, #f43f5e 0%, #e11d48 100%);"),
    ("feedback", "background: linear-gradient(135deg, #8b5cf6 0%, #7c3aed 100%);"),
    ("survey", "background: linear-gradient(135deg, #10b981 0%, #059669 100%);"),
    ("quizzes", "background: linear-gradient(135deg, #f59e0b 0%, #d97706 100%);"),
    ("sales", "background: linear-gradient(135deg, #ec4899 0%, #db2777 100%);"),
    ("seasonal", "background: linear-gradient(135deg, #6366f1 0%, #4f46e5 100%);"),
    ("announcement", "background: linear-gradient(135deg, #14b8a6 0%, #0d9488 100%);"),
    ("blog_updates", "background: linear-gradient(135deg, #818cf8 0%, #6366f1 100%);"),
    ("business", "background: linear-gradient(135deg, #4ade80 0%, #22c55e 100%);"),
];

const FALLBACK_FRAGMENT: &str = r##"
            <h2>Welcome!</h2>
            <p>Thank you for being a valued customer.</p>
            <p>We have some exciting news to share with you.</p>
            <a href="#" class="button">Learn More</a>
        "##;

const MEGA_DEAL: &str = r##"
                    <div class="flash-sale-banner">
                        <div class="flash-icon">⚡</div>
                        <h2 class="animate__animated animate__heartBeat">BLACK FRIDAY MEGA DEALS</h2>
                        <div class="timer" id="countdown">Ends in: <span id="timer">23:59:59</span></div>
                    </div>

                    <div class="deals-grid">
                        <div class="deal-card animate__animated animate__fadeInLeft">
                            <div class="discount-tag">70% OFF</div>
                            <h3>Premium Electronics</h3>
                            <p>Latest gadgets at unbeatable prices</p>
                            <div class="original-price">$999</div>
                            <div class="sale-price">$299</div>
                        </div>

                        <div class="deal-card animate__animated animate__fadeInRight">
                            <div class="discount-tag">BOGO</div>
                            <h3>Fashion & Accessories</h3>
                            <p>Buy one get one free on all items</p>
                            <div class="special-offer">Limited Stock!</div>
                        </div>
                    </div>

                    <div class="features-list">
                        <div class="feature">
                            <span class="feature-icon">🚚</span>
                            <span>Free Express Shipping</span>
                        </div>
                        <div class="feature">
                            <span class="feature-icon">💳</span>
                            <span>Buy Now, Pay Later</span>
                        </div>
                        <div class="feature">
                            <span class="feature-icon">🎁</span>
                            <span>Free Gift Wrapping</span>
                        </div>
                    </div>

                    <div class="cta-section">
                        <p class="highlight animate__animated animate__pulse">⏰ Don't Wait! Offer ends in <span id="timer2">23:59:59</span></p>
                        <a href="#" class="mega-button">SHOP NOW</a>
                        <p class="terms">*Terms and conditions apply</p>
                    </div>
                "##;

const VIP_EARLY_ACCESS: &str = r##"
                    <h2>🌟 Exclusive VIP Early Access</h2>
                    <p>Dear VIP Customer,</p>
                    <p>Get ahead of the crowd with exclusive early access to our Black Friday deals!</p>
                    <p class="highlight">24 hours before everyone else</p>
                    <a href="#" class="button">Access Early Deals</a>
                "##;

const MONTHLY_UPDATE: &str = r##"
                    <h2>📰 Your Monthly Update Is Here</h2>
                    <p>Inside this month's newsletter:</p>
                    <ul>
                        <li>Company highlights</li>
                        <li>New product launches</li>
                        <li>Customer success stories</li>
                        <li>Upcoming events</li>
                    </ul>
                    <a href="#" class="button">Read More</a>
                "##;

const SUMMER_SALE: &str = r##"
                    <h2>☀️ Summer Sale Spectacular!</h2>
                    <p>Heat up your summer with these amazing deals:</p>
                    <ul>
                        <li>Up to 50% off summer essentials</li>
                        <li>Free shipping on orders over $50</li>
                        <li>Special bundle offers</li>
                    </ul>
                    <a href="#" class="button">Shop Summer Sale</a>
                "##;

/// Body fragment for a template, or the generic welcome block.
pub fn content_fragment(category: &str, template_id: &str) -> &'static str {
    match (category, template_id) {
        ("black_friday", "mega_deal") => MEGA_DEAL,
        ("black_friday", "vip_early_access") => VIP_EARLY_ACCESS,
        ("newsletter", "monthly_update") => MONTHLY_UPDATE,
        ("promotional", "summer_sale") => SUMMER_SALE,
        _ => FALLBACK_FRAGMENT,
    }
}

const PAGE_STYLES: &str = r##"    <style>
        /* Reset styles */
        body {
            margin: 0;
            padding: 0;
            font-family: 'Poppins', sans-serif;
            line-height: 1.6;
            background-color: #f5f5f5;
        }

        .container {
            max-width: 600px;
            margin: 0 auto;
            padding: 20px;
            background-color: #ffffff;
        }

        .header {
            background: linear-gradient(135deg, #6366f1 0%, #4f46e5 100%);
            color: white;
            padding: 30px 20px;
            text-align: center;
            border-radius: 8px 8px 0 0;
        }

        .content {
            padding: 30px 20px;
        }

        .button {
            display: inline-block;
            padding: 12px 24px;
            background: linear-gradient(135deg, #6366f1 0%, #4f46e5 100%);
            color: white;
            text-decoration: none;
            border-radius: 6px;
            font-weight: bold;
            margin: 20px 0;
            transition: transform 0.2s;
        }

        .button:hover {
            transform: translateY(-2px);
        }

        .footer {
            background-color: #f8f9fa;
            padding: 20px;
            text-align: center;
            border-radius: 0 0 8px 8px;
            color: #6b7280;
            font-size: 0.9em;
        }

        .highlight {
            background: #fef3c7;
            padding: 2px 6px;
            border-radius: 4px;
            font-weight: bold;
        }

        /* Category-specific styles */"##;

const RESPONSIVE_STYLES: &str = r##"
        /* Responsive design */
        @media only screen and (max-width: 600px) {
            .container {
                width: 100%;
                padding: 10px;
            }
        }
    </style>
</head>
"##;

const PAGE_FOOTER: &str = r##"
        </div>

        <div class="footer">
            <p>© 2025 Your Company Name. All rights reserved.</p>
            <p>
                <a href="#" style="color: #6b7280; text-decoration: underline;">Unsubscribe</a> |
                <a href="#" style="color: #6b7280; text-decoration: underline;">Privacy Policy</a>
            </p>
        </div>
    </div>

    <script>
        // Lift call-to-action buttons on hover
        document.addEventListener('DOMContentLoaded', function() {
            const buttons = document.querySelectorAll('.button');
            buttons.forEach(button => {
                button.addEventListener('mouseover', () => {
                    button.style.transform = 'translateY(-2px)';
                });
                button.addEventListener('mouseout', () => {
                    button.style.transform = 'translateY(0)';
                });
            });
        });
    </script>
</body>
</html>"##;

/// Renders a complete email document. The title is inserted verbatim; catalog
/// titles are trusted literals.
pub fn render_page(title: &str, category: &str, template_id: &str) -> String {
    let mut html = String::with_capacity(8 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!("    <title>{}</title>\n", title));
    html.push_str("    <link href=\"https://fonts.googleapis.com/css2?family=Poppins:wght@400;500;600;700&display=swap\" rel=\"stylesheet\">\n");

    html.push_str(PAGE_STYLES);
    for (name, style) in ACCENT_STYLES {
        html.push_str(&format!("        .{} {{ {} }}\n", name, style));
    }
    html.push_str(RESPONSIVE_STYLES);

    html.push_str("<body>\n    <div class=\"container\">\n");
    html.push_str(&format!("        <div class=\"header {}\">\n", category));
    html.push_str(&format!("            <h1>{}</h1>\n", title));
    html.push_str("        </div>\n        \n        <div class=\"content\">\n            ");
    html.push_str(content_fragment(category, template_id));
    html.push_str(PAGE_FOOTER);

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_fragment_is_used() {
        let page = render_page("Black Friday Mega Deals", "black_friday", "mega_deal");
        assert!(page.contains("BLACK FRIDAY MEGA DEALS"));
        assert!(page.contains("<title>Black Friday Mega Deals</title>"));
        assert!(page.contains(r##"<div class="header black_friday">"##));
        assert!(!page.contains("Welcome!"));
    }

    #[test]
    fn test_unknown_template_gets_fallback() {
        let page = render_page("Shopping Cart Page", "ecommerce", "shopping_cart");
        assert!(page.contains("<h2>Welcome!</h2>"));
        assert!(page.contains(r##"<a href="#" class="button">Learn More</a>"##));
    }

    #[test]
    fn test_page_skeleton_is_complete() {
        let page = render_page("Exit Survey", "survey", "exit_survey");
        assert!(page.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(page.ends_with("</html>"));
        assert!(page.contains("/* Category-specific styles */        .black_friday {"));
        assert!(page.contains(".business { background: linear-gradient(135deg, #4ade80 0%, #22c55e 100%); }"));
        assert!(page.contains("button.addEventListener('mouseover'"));
        assert!(page.contains("Unsubscribe"));
    }
}
