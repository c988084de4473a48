use std::time::Duration;

use wasm_bindgen_futures::spawn_local;
use yew::platform::time::sleep;
use yew::prelude::*;

use super::BookmarkStoreHandle;
use crate::config::DEFAULT_TINT_ANIMATION_MS;
use crate::theme::{Color, TintAnimator, TintPalette};
use crate::toggle::{bind as bind_toggle, BookmarkToggle};

const FRAME: Duration = Duration::from_millis(16);

#[derive(Properties, PartialEq)]
pub struct BookmarkButtonProps {
    pub session_id: AttrValue,
    pub store: BookmarkStoreHandle,
    #[prop_or_default]
    pub palette: TintPalette,
    #[prop_or(DEFAULT_TINT_ANIMATION_MS)]
    pub animation_ms: u32,
}

/// Bookmark icon button bound to the store entry for `session_id`.
///
/// The toggle state is created once per mounted component, so parents
/// should key the button by session id.
#[function_component(BookmarkButton)]
pub fn bookmark_button(props: &BookmarkButtonProps) -> Html {
    let toggle = {
        let session_id = props.session_id.to_string();
        use_reducer(move || BookmarkToggle::new(session_id))
    };

    // Subscription lives as long as the button, and is renewed if the store changes
    {
        let dispatcher = toggle.dispatcher();
        use_effect_with(
            (props.session_id.clone(), props.store.clone()),
            move |(session_id, store)| {
                let subscription = bind_toggle(&**store, session_id, move |action| dispatcher.dispatch(action));
                move || subscription.cancel()
            },
        );
    }

    let tint = use_animated_tint(toggle.tint(&props.palette), props.animation_ms);
    let icon = toggle.icon();

    let onclick = {
        let toggle = toggle.clone();
        let store = props.store.clone();
        Callback::from(move |_: MouseEvent| toggle.activate(&*store))
    };

    html! {
        <button
            type="button"
            class="bookmark-toggle"
            aria-pressed={toggle.is_bookmarked().to_string()}
            aria-label={icon.label()}
            title={icon.label()}
            {onclick}
            style="background:none; border:none; cursor:pointer; padding:0.5em; line-height:0;"
        >
            <span class="material-symbols-rounded" style={format!("color:{}; font-size:24px;", tint)}>
                { icon.ligature() }
            </span>
        </button>
    }
}

/// Color that follows `target` through a timed transition instead of jumping.
#[hook]
fn use_animated_tint(target: Color, duration_ms: u32) -> Color {
    let tint = use_state_eq(|| target);
    let animator = use_mut_ref(|| TintAnimator::new(target));

    {
        let tint = tint.clone();
        use_effect_with((target, duration_ms), move |&(target, duration_ms)| {
            let run = animator.borrow_mut().retarget(target, js_sys::Date::now(), duration_ms);

            match run {
                Some(run) => {
                    let animator = animator.clone();
                    spawn_local(async move {
                        loop {
                            // None once a newer target or an unmount invalidates the run
                            let next = animator.borrow().frame(&run, js_sys::Date::now());
                            let Some(frame) = next else {
                                break;
                            };
                            tint.set(frame.color);
                            if frame.finished {
                                break;
                            }
                            sleep(FRAME).await;
                        }
                    });
                }
                None => tint.set(target),
            }

            move || {
                animator.borrow_mut().cancel();
            }
        });
    }

    *tint
}
