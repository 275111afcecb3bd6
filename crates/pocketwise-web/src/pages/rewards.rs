use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{RewardDialog, Section, open_reward};
use crate::state::use_dashboard;

#[component]
pub fn RewardsPage() -> impl IntoView {
    let state = use_dashboard();
    let rewards = Memo::new(move |_| state.dataset.with(|d| d.rewards.clone()));

    view! {
        <main class="container">
            <header class="page-header">
                <h1>"Rewards"</h1>
                <A href="/">"← back to dashboard"</A>
            </header>

            <Section id="giveaways" title="Giveaways">
                <div class="grid-3">
                    <For
                        each=move || rewards.get()
                        key=|r| (r.id.clone(), r.is_claimed())
                        children=move |r| {
                            let id = r.id.clone();
                            let claimed = r.is_claimed();
                            view! {
                                <div class="card giveaway">
                                    <h3>{r.title()}</h3>
                                    <p>"Prize: " {r.prize.clone()}</p>
                                    <button
                                        class="btn"
                                        disabled=claimed
                                        on:click=move |_| open_reward(state, &id)
                                    >
                                        {if claimed { "Claimed" } else { "Enter Giveaway" }}
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
            </Section>

            <RewardDialog />
        </main>
    }
}
