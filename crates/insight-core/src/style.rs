//! Style Roles
//!
//! Stylesheet class names keyed by what an element is, so markup never
//! spells class strings inline.

/// Semantic role of a styled element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    BgPattern,
    BgGrid,
    Container,
    Nav,
    Logo,
    LogoIcon,
    NavLinks,
    Hero,
    Badge,
    BadgeDot,
    GradientText,
    HeroDescription,
    UrlForm,
    UrlInput,
    AnalyzeButton,
    Spinner,
    Features,
    FeaturesTitle,
    FeaturesGrid,
    FeatureCard,
    FeatureIcon,
    Stats,
    Stat,
    StatValue,
    StatLabel,
    Footer,
}

impl Role {
    pub const ALL: [Self; 26] = [
        Self::BgPattern,
        Self::BgGrid,
        Self::Container,
        Self::Nav,
        Self::Logo,
        Self::LogoIcon,
        Self::NavLinks,
        Self::Hero,
        Self::Badge,
        Self::BadgeDot,
        Self::GradientText,
        Self::HeroDescription,
        Self::UrlForm,
        Self::UrlInput,
        Self::AnalyzeButton,
        Self::Spinner,
        Self::Features,
        Self::FeaturesTitle,
        Self::FeaturesGrid,
        Self::FeatureCard,
        Self::FeatureIcon,
        Self::Stats,
        Self::Stat,
        Self::StatValue,
        Self::StatLabel,
        Self::Footer,
    ];

    /// Class name in `static/style.css`
    pub const fn class(self) -> &'static str {
        match self {
            Self::BgPattern => "bg-pattern",
            Self::BgGrid => "bg-grid",
            Self::Container => "container",
            Self::Nav => "nav",
            Self::Logo => "logo",
            Self::LogoIcon => "logo-icon",
            Self::NavLinks => "nav-links",
            Self::Hero => "hero",
            Self::Badge => "badge",
            Self::BadgeDot => "badge-dot",
            Self::GradientText => "gradient-text",
            Self::HeroDescription => "hero-desc",
            Self::UrlForm => "url-form",
            Self::UrlInput => "url-input",
            Self::AnalyzeButton => "analyze-btn",
            Self::Spinner => "spinner",
            Self::Features => "features",
            Self::FeaturesTitle => "features-title",
            Self::FeaturesGrid => "features-grid",
            Self::FeatureCard => "feature-card",
            Self::FeatureIcon => "feature-icon",
            Self::Stats => "stats",
            Self::Stat => "stat",
            Self::StatValue => "stat-value",
            Self::StatLabel => "stat-label",
            Self::Footer => "footer",
        }
    }
}
