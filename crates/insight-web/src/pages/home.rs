//! Home Page

use insight_core::content::{
    FEATURES, FEATURES_TITLE, HERO_BADGE, HERO_DESCRIPTION, HERO_HEADLINE, HERO_HIGHLIGHT,
    STATS, SUBMIT_LABEL, SUBMITTING_LABEL, URL_PLACEHOLDER,
};
use insight_core::{Role, Submission};
use leptos::either::Either;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::{FeatureCard, Footer, NavBar, StatTile};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class=Role::Container.class()>
            <NavBar />

            <section class=Role::Hero.class()>
                <div class=Role::Badge.class()>
                    <span class=Role::BadgeDot.class()></span>
                    {HERO_BADGE}
                </div>

                <h1>
                    {HERO_HEADLINE}" "
                    <span class=Role::GradientText.class()>{HERO_HIGHLIGHT}</span>
                </h1>

                <p class=Role::HeroDescription.class()>{HERO_DESCRIPTION}</p>

                <UrlForm />
            </section>

            <section class=Role::Features.class() id="features">
                <h2 class=Role::FeaturesTitle.class()>{FEATURES_TITLE}</h2>
                <div class=Role::FeaturesGrid.class()>
                    {FEATURES.iter().map(|f| view! { <FeatureCard feature=*f /> }).collect_view()}
                </div>
            </section>

            <section class=Role::Stats.class()>
                {STATS.iter().map(|s| view! { <StatTile stat=*s /> }).collect_view()}
            </section>

            <Footer />
        </div>
    }
}

/// URL entry form that hands off to the analysis route
///
/// The loading state is never cleared here; navigation unmounts the page.
#[component]
fn UrlForm() -> impl IntoView {
    let submission = RwSignal::new(Submission::new());
    let navigate = use_navigate();
    let loading = move || submission.with(Submission::is_loading);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // blank input is dropped silently
        if let Some(Ok(target)) = submission.try_update(Submission::submit) {
            navigate(&target.to_href(), Default::default());
        }
    };

    view! {
        <form class=Role::UrlForm.class() on:submit=on_submit>
            <input
                type="url"
                class=Role::UrlInput.class()
                placeholder=URL_PLACEHOLDER
                prop:value=move || submission.with(|s| s.url().to_owned())
                on:input=move |ev| submission.update(|s| s.set_url(event_target_value(&ev)))
                required
            />
            <button type="submit" class=Role::AnalyzeButton.class() disabled=loading>
                {move || {
                    if loading() {
                        Either::Left(view! {
                            <span class=Role::Spinner.class()></span>
                            {SUBMITTING_LABEL}
                        })
                    } else {
                        Either::Right(SUBMIT_LABEL)
                    }
                }}
            </button>
        </form>
    }
}
