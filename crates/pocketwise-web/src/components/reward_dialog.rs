//! Slot machine dialog driving the reward claim flow

use gloo_timers::future::TimeoutFuture;
use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;
use pocketwise_core::{ClaimError, ClaimFlow, REEL_COUNT, SPIN_DURATION_MS, SlotSymbol, spin};
use rand::SeedableRng;
use rand::rngs::StdRng;
use web_sys::window;

use crate::state::{DashboardState, use_dashboard};

/// Reel redraws while spinning
const SPIN_FRAMES: u32 = 10;

/// Fresh generator seeded from the browser's Math.random
fn browser_rng() -> StdRng {
    StdRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64)
}

/// Check if user prefers reduced motion
fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Apply one claim-flow step and surface its error in the dialog
fn step<T>(state: DashboardState, action: impl FnOnce(&mut ClaimFlow) -> Result<T, ClaimError>) -> Option<T> {
    match state.claim.try_update(action)? {
        Ok(value) => {
            state.claim_error.set(None);
            Some(value)
        }
        Err(e) => {
            warn!("claim flow: {e}");
            state.claim_error.set(Some(e.to_string()));
            None
        }
    }
}

/// Open the dialog for a reward
pub fn open_reward(state: DashboardState, reward_id: &str) {
    let Some(reward) = state.dataset.with_untracked(|d| d.reward(reward_id).cloned()) else {
        warn!("unknown reward {reward_id}");
        return;
    };
    step(state, |flow| flow.open(&reward));
}

/// Start the reels, animate them on a timer, then reveal the outcome
fn pull_lever(state: DashboardState, reels: RwSignal<[SlotSymbol; REEL_COUNT]>) {
    let Some(ticket) = step(state, ClaimFlow::start_spin) else {
        return;
    };
    // False once the dialog closed or a newer spin started
    let still_current = move || state.claim.with_untracked(|f| f.is_spinning_for(ticket));

    spawn_local(async move {
        let mut rng = browser_rng();
        if prefers_reduced_motion() {
            TimeoutFuture::new(SPIN_DURATION_MS).await;
        } else {
            for _ in 0..SPIN_FRAMES {
                TimeoutFuture::new(SPIN_DURATION_MS / SPIN_FRAMES).await;
                if !still_current() {
                    return;
                }
                reels.set(spin(&mut rng).reels);
            }
        }

        if !still_current() {
            return;
        }
        let outcome = spin(&mut rng);
        reels.set(outcome.reels);
        log!("spin finished: {:?}", outcome.result);
        step(state, |flow| flow.finish_spin(ticket, outcome));
    });
}

fn claim(state: DashboardState) {
    let mut result = Ok(());
    state.dataset.update(|d| {
        state.claim.update(|flow| result = flow.claim(&mut d.rewards));
    });
    match result {
        Ok(()) => state.claim_error.set(None),
        Err(e) => {
            warn!("claim flow: {e}");
            state.claim_error.set(Some(e.to_string()));
        }
    }
}

#[component]
pub fn RewardDialog() -> impl IntoView {
    let state = use_dashboard();
    let reels = RwSignal::new([SlotSymbol::Seven; REEL_COUNT]);

    let reward_title = move || {
        let id = state.claim.with(|f| f.reward_id().map(str::to_string))?;
        state.dataset.with(|d| d.reward(&id).map(|r| (r.title(), r.prize.clone())))
    };

    let close = move |_: leptos::ev::MouseEvent| {
        state.claim.update(ClaimFlow::close);
        state.claim_error.set(None);
    };

    view! {
        <Show when=move || state.claim.with(ClaimFlow::is_open)>
            <div class="backdrop">
                <div class="dialog" role="dialog" aria-modal="true">
                    {move || reward_title().map(|(title, prize)| view! {
                        <h3>{title}</h3>
                        <p class="muted">"Prize: " {prize}</p>
                    })}

                    <div class="reels" class:spinning=move || state.claim.with(ClaimFlow::is_spinning)>
                        {move || reels.get().map(|s| view! { <span class="reel">{s.glyph()}</span> }).into_iter().collect_view()}
                    </div>

                    {move || match state.claim.get() {
                        ClaimFlow::Confirming { .. } => view! {
                            <button class="btn" on:click=move |_| pull_lever(state, reels)>"Spin to win"</button>
                        }.into_any(),
                        ClaimFlow::Spinning { .. } => view! {
                            <p class="muted">"Spinning..."</p>
                        }.into_any(),
                        ClaimFlow::Revealed { outcome, .. } if outcome.is_win() => view! {
                            <p class="text-success">{outcome.headline()}</p>
                            <button class="btn" on:click=move |_| claim(state)>"Claim reward"</button>
                        }.into_any(),
                        ClaimFlow::Revealed { outcome, .. } => view! {
                            <p class="text-error">{outcome.headline()}</p>
                            <button class="btn" on:click=move |_| pull_lever(state, reels)>"Spin again"</button>
                        }.into_any(),
                        ClaimFlow::Claimed { .. } => view! {
                            <p class="text-success">"Reward claimed! We'll be in touch."</p>
                        }.into_any(),
                        ClaimFlow::Idle => ().into_any(),
                    }}

                    {move || state.claim_error.get().map(|e| view! { <p class="text-error caption">{e}</p> })}

                    <button class="btn btn-ghost" on:click=close>"Close"</button>
                </div>
            </div>
        </Show>
    }
}
