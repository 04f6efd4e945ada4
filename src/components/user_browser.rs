//! User Browser Component
//!
//! Owns the list state machine and wires the search input, the scroll
//! sentinel, and per-row delete actions into the renderer.

use gloo_timers::future::TimeoutFuture;
use leptos::html::Li;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::components::UserList;
use crate::debounce::Debounce;
use crate::models::User;
use crate::names;
use crate::state::ListState;
use crate::watch::SentinelWatcher;

/// Synthetic users seeded at mount
const USER_COUNT: u32 = 500;
/// Simulated page-fetch latency
const FETCH_DELAY_MS: u32 = 3_000;
/// Trailing-edge window for search keystrokes
const FILTER_DEBOUNCE_MS: u32 = 500;

#[component]
pub fn UserBrowser() -> impl IntoView {
    let (state, set_state) = signal(ListState::new(names::synthetic_users(USER_COUNT)));
    let displayed = Memo::new(move |_| state.with(|s| s.displayed().to_vec()));
    let loading = Memo::new(move |_| state.with(|s| s.loading()));

    let sentinel = NodeRef::<Li>::new();
    let watcher = StoredValue::new_local(None::<SentinelWatcher>);

    // Kick off one simulated page fetch. The ticket invalidates the append
    // if the active collection changes while the fetch is in flight.
    let start_fetch = move || {
        let Some(ticket) = set_state.try_update(|s| s.begin_load()).flatten() else {
            return;
        };
        web_sys::console::log_1(&"[UserBrowser] fetching next page".into());
        spawn_local(async move {
            TimeoutFuture::new(FETCH_DELAY_MS).await;
            set_state.update(|s| s.complete_load(ticket));
        });
    };

    // Rebind the viewport watcher whenever the window re-renders: the last
    // row's node identity changes on every append, reset, and delete. The
    // previous watcher is released before the new one is bound.
    Effect::new(move |_| {
        displayed.track();
        watcher.set_value(None);
        if let Some(node) = sentinel.get() {
            watcher.set_value(SentinelWatcher::observe(&node, start_fetch));
        }
    });

    // Debounced search: only the last keystroke inside the window fires,
    // and it reads the state as it is then.
    let debounced_filter = StoredValue::new_local(Debounce::new(
        FILTER_DEBOUNCE_MS,
        move |text: String| {
            web_sys::console::log_1(&format!("[UserBrowser] filter: {:?}", text).into());
            set_state.update(|s| s.set_filter(&text));
        },
    ));

    let on_delete = Callback::new(move |id: u32| {
        set_state.update(|s| s.delete(id));
    });

    // Swiping a row deletes it, same as the row's delete button.
    let on_swipe = Callback::new(move |(user, _index): (User, usize)| {
        on_delete.run(user.id);
    });

    let row = Callback::new(move |(user, _index): (User, usize)| {
        let User { id, name, place } = user;
        view! {
            <div class="user-row">
                <span class="user-avatar">"👤"</span>
                <span class="user-text">
                    <span class="user-name">{name}</span>
                    <span class="user-place">{place}</span>
                </span>
                <button
                    class="user-delete"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_delete.run(id);
                    }
                >
                    "🗑"
                </button>
            </div>
        }
        .into_any()
    });

    view! {
        <div class="user-browser">
            <input
                class="user-search"
                type="search"
                placeholder="Search Users"
                autocomplete="off"
                on:input=move |ev| {
                    let Some(input) = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                    else {
                        return;
                    };
                    debounced_filter.with_value(|d| d.call(input.value()));
                }
            />
            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>
            <div class="user-scroll">
                <UserList items=displayed on_swipe=on_swipe row=row sentinel=sentinel />
            </div>
            <p class="user-count">
                {move || state.with(|s| format!("{} of {} users", s.displayed().len(), s.total()))}
            </p>
        </div>
    }
}
