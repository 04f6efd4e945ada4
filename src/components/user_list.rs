//! User List Component
//!
//! Stateless projection of an ordered item sequence into rows. Each row
//! is wrapped in a swipe region; the optional sentinel ref is attached to
//! the last row only, and follows it because rows are re-projected on
//! every change to `items`.

use leptos::html::Li;
use leptos::prelude::*;
use leptos_swipe::{
    create_swipe_signals, make_on_pointercancel, make_on_pointerdown, make_on_pointerup,
    SwipeDirection,
};

use crate::models::User;

/// List renderer
///
/// Props:
/// - items: the rows to show, in order
/// - on_swipe: invoked with the swiped item and its current index
/// - row: renders one item's content
/// - sentinel: when given, bound to the DOM node of the last row
#[component]
pub fn UserList(
    #[prop(into)] items: Signal<Vec<User>>,
    #[prop(into)] on_swipe: Callback<(User, usize)>,
    #[prop(into)] row: Callback<(User, usize), AnyView>,
    #[prop(strip_option)] sentinel: Option<NodeRef<Li>>,
) -> impl IntoView {
    view! {
        <ul class="user-list">
            {move || {
                let list = items.get();
                let count = list.len();
                list.into_iter()
                    .enumerate()
                    .map(|(index, user)| {
                        let swipe = create_swipe_signals();
                        let on_pointerdown = make_on_pointerdown(swipe);
                        let on_pointercancel = make_on_pointercancel(swipe);
                        let swiped_user = user.clone();
                        let on_row_swipe = Callback::new(move |_direction: SwipeDirection| {
                            on_swipe.run((swiped_user.clone(), index));
                        });
                        let on_pointerup = make_on_pointerup(swipe, on_row_swipe);
                        let content = row.run((user, index));

                        if index + 1 == count {
                            if let Some(node_ref) = sentinel {
                                return view! {
                                    <li
                                        class="user-list-row"
                                        node_ref=node_ref
                                        on:pointerdown=on_pointerdown
                                        on:pointerup=on_pointerup
                                        on:pointercancel=on_pointercancel
                                    >
                                        {content}
                                    </li>
                                }
                                .into_any();
                            }
                        }
                        view! {
                            <li
                                class="user-list-row"
                                on:pointerdown=on_pointerdown
                                on:pointerup=on_pointerup
                                on:pointercancel=on_pointercancel
                            >
                                {content}
                            </li>
                        }
                        .into_any()
                    })
                    .collect_view()
            }}
        </ul>
    }
}
