//! Main App Component

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{components::*, path};

use crate::pages::HomePage;
use crate::shell::Shell;

/// Root application component
///
/// `/analyze` belongs to the analysis service and is not routed here.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </Shell>
        </Router>
    }
}
