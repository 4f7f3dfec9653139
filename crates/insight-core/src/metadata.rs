//! Document Metadata
//!
//! Static head fields for every page. Fixed at compile time and exposed
//! read-only.

use serde::Serialize;

/// Open Graph social-preview fields
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OpenGraph {
    pub title: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Document-level metadata
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SiteMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub open_graph: OpenGraph,
}

impl SiteMetadata {
    /// Keywords joined for a `<meta name="keywords">` tag
    pub fn keywords_content(&self) -> String {
        self.keywords.join(", ")
    }
}

/// Metadata for the InsightEngine site
pub const SITE: SiteMetadata = SiteMetadata {
    title: "InsightEngine - AI SEO Analyzer | Optimize for AI Search",
    description: "Analyze your website's AI SEO readiness. Get actionable recommendations to \
                  optimize for ChatGPT, Perplexity, Google AI Overviews, and more AI-powered \
                  search engines.",
    keywords: &[
        "AI SEO",
        "GEO",
        "Generative Engine Optimization",
        "ChatGPT SEO",
        "Perplexity SEO",
        "LLM optimization",
    ],
    open_graph: OpenGraph {
        title: "InsightEngine - AI SEO Analyzer",
        description: "Is your website ready for AI-powered search? Find out now.",
        kind: "website",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_content() {
        assert_eq!(
            SITE.keywords_content(),
            "AI SEO, GEO, Generative Engine Optimization, ChatGPT SEO, Perplexity SEO, LLM optimization"
        );
    }

    #[test]
    fn test_description_has_single_spaces() {
        assert!(!SITE.description.contains("  "));
        assert!(SITE.description.ends_with("AI-powered search engines."));
    }

    #[test]
    fn test_serializes_open_graph_type() {
        let json = serde_json::to_value(SITE).unwrap();
        assert_eq!(json["open_graph"]["type"], "website");
        assert_eq!(json["keywords"].as_array().unwrap().len(), 6);
    }
}
