use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{A, Route, Router, Routes};
use leptos_router::path;

use crate::pages::{DashboardPage, RewardsPage};
use crate::state::DashboardState;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    // Rewards claimed on one page stay claimed when navigating back
    DashboardState::provide();

    view! {
        <Title text="Pocketwise" />
        <Router>
            <nav class="topnav">
                <A href="/">"Dashboard"</A>
                <A href="/rewards">"Rewards"</A>
            </nav>
            <Routes fallback=|| view! { <p>"404 - Page not found"</p> }>
                <Route path=path!("/") view=DashboardPage />
                <Route path=path!("/rewards") view=RewardsPage />
            </Routes>
        </Router>
    }
}
