//! Page Shell
//!
//! Document head tags and the background frame shared by every page.

use insight_core::{Role, SITE};
use leptos::prelude::*;
use leptos_meta::{Meta, Title};

/// Wraps page content in the fixed site frame
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <SiteMeta />
        <div class=Role::BgPattern.class()>
            <div class=Role::BgGrid.class()></div>
        </div>
        {children()}
    }
}

#[component]
fn SiteMeta() -> impl IntoView {
    let og = SITE.open_graph;

    view! {
        <Title text=SITE.title />
        <Meta name="description" content=SITE.description />
        <Meta name="keywords" content=SITE.keywords_content() />
        <Meta property="og:title" content=og.title />
        <Meta property="og:description" content=og.description />
        <Meta property="og:type" content=og.kind />
    }
}
