//! Landing Page Copy

/// Link in the top navigation bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    /// Opens in a new browsing context
    pub external: bool,
}

/// Card in the "What We Analyze" grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Headline figure in the stats strip
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const BRAND: &str = "InsightEngine";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Features",
        href: "#features",
        external: false,
    },
    NavLink {
        label: "How it Works",
        href: "#how-it-works",
        external: false,
    },
    NavLink {
        label: "GitHub",
        href: "https://github.com",
        external: true,
    },
];

pub const HERO_BADGE: &str = "AI-Powered SEO Analysis";
pub const HERO_HEADLINE: &str = "Is Your Website Ready for";
pub const HERO_HIGHLIGHT: &str = "AI Search?";
pub const HERO_DESCRIPTION: &str = "Analyze how well your website is optimized for ChatGPT, \
    Perplexity, Google AI Overviews, and other AI-powered search engines. Get actionable \
    recommendations powered by AI.";

pub const URL_PLACEHOLDER: &str = "Enter your website URL (e.g., https://example.com)";
pub const SUBMIT_LABEL: &str = "Analyze Now";
pub const SUBMITTING_LABEL: &str = "Analyzing...";

pub const FEATURES_TITLE: &str = "What We Analyze";

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "🤖",
        title: "AI Crawler Access",
        description: "Check if your robots.txt allows GPTBot, ClaudeBot, PerplexityBot, and \
            other AI crawlers to access your content.",
    },
    Feature {
        icon: "📊",
        title: "Structured Data",
        description: "Validate your JSON-LD schema markup to ensure AI systems can accurately \
            extract and understand your content.",
    },
    Feature {
        icon: "📝",
        title: "Content Structure",
        description: "Analyze your heading hierarchy, FAQ sections, and answer-first content \
            patterns for LLM extractability.",
    },
    Feature {
        icon: "⚡",
        title: "Technical SEO",
        description: "Evaluate meta tags, semantic HTML, and page accessibility for optimal AI \
            crawling and indexing.",
    },
    Feature {
        icon: "📄",
        title: "llms.txt Detection",
        description: "Check for the emerging llms.txt standard - the robots.txt equivalent for \
            AI assistants.",
    },
    Feature {
        icon: "✨",
        title: "AI Recommendations",
        description: "Get personalized, AI-generated suggestions to improve your content's \
            visibility in AI search results.",
    },
];

pub const STATS: &[Stat] = &[
    Stat {
        value: "5",
        label: "Analysis Categories",
    },
    Stat {
        value: "6+",
        label: "AI Crawlers Checked",
    },
    Stat {
        value: "∞",
        label: "Free Analyses",
    },
];

pub const FOOTER: &str = "Built with ❤️ for the AI-first web • InsightEngine © 2024";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_page_anchors_stay_local() {
        for link in NAV_LINKS {
            assert_eq!(link.href.starts_with('#'), !link.external, "{}", link.label);
        }
    }

    #[test]
    fn test_features_section_anchor_exists() {
        assert!(NAV_LINKS.iter().any(|l| l.href == "#features"));
        assert_eq!(FEATURES.len(), 6);
    }

    #[test]
    fn test_copy_has_no_wrapped_whitespace() {
        let texts = FEATURES
            .iter()
            .map(|f| f.description)
            .chain([HERO_DESCRIPTION]);
        for text in texts {
            assert!(!text.contains("  "), "{text}");
        }
    }
}
