//! UI Components

use insight_core::Role;
use insight_core::content::{BRAND, FOOTER, Feature, NAV_LINKS, NavLink, Stat};
use leptos::prelude::*;

/// Top bar with logo and section links
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class=Role::Nav.class()>
            <div class=Role::Logo.class()>
                <div class=Role::LogoIcon.class()>
                    <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="white" stroke-width="2.5">
                        <path d="M12 2L2 7l10 5 10-5-10-5zM2 17l10 5 10-5M2 12l10 5 10-5" />
                    </svg>
                </div>
                {BRAND}
            </div>
            <ul class=Role::NavLinks.class()>
                {NAV_LINKS.iter().map(|link| view! { <li><NavAnchor link=*link /></li> }).collect_view()}
            </ul>
        </nav>
    }
}

#[component]
fn NavAnchor(link: NavLink) -> impl IntoView {
    view! {
        <a
            href=link.href
            target=link.external.then_some("_blank")
            rel=link.external.then_some("noopener noreferrer")
        >
            {link.label}
        </a>
    }
}

/// Card in the features grid
#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class=Role::FeatureCard.class()>
            <div class=Role::FeatureIcon.class()>{feature.icon}</div>
            <h3>{feature.title}</h3>
            <p>{feature.description}</p>
        </div>
    }
}

#[component]
pub fn StatTile(stat: Stat) -> impl IntoView {
    view! {
        <div class=Role::Stat.class()>
            <div class=Role::StatValue.class()>{stat.value}</div>
            <div class=Role::StatLabel.class()>{stat.label}</div>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class=Role::Footer.class()>
            <p>{FOOTER}</p>
        </footer>
    }
}
