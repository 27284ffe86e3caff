//! Terminal view component.
//!
//! Renders the scrollback and the prompt line, and feeds window key events
//! into the session.

use leptos::ev;
use leptos::prelude::*;
use web_sys::KeyboardEvent;

use super::output::Output;
use super::timers::apply_effect;
use crate::app::AppContext;
use crate::models::Key;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

// ============================================================================
// Effect Setup Functions
// ============================================================================

/// Route every keydown on the page to the session.
fn setup_key_listener(ctx: AppContext) {
    let handle = window_event_listener(ev::keydown, move |event: KeyboardEvent| {
        let key = Key::from_dom(&event.key(), event.ctrl_key() || event.meta_key());
        if key != Key::Other {
            event.prevent_default();
        }
        if let Some(effect) = ctx.session.try_update(|s| s.handle_key(key)).flatten() {
            apply_effect(effect, ctx.session, ctx.timers);
        }
    });
    on_cleanup(move || handle.remove());
}

/// Auto-scroll output to bottom when the session changes.
fn setup_autoscroll_effect(ctx: AppContext, output_ref: NodeRef<leptos::html::Div>) {
    Effect::new(move || {
        ctx.session.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });
}

// ============================================================================
// Terminal Component
// ============================================================================

#[component]
pub fn Terminal() -> impl IntoView {
    let Some(ctx) = use_context::<AppContext>() else {
        return view! { <div class=css::container>"Terminal unavailable"</div> }.into_any();
    };
    let session = ctx.session;
    let output_ref = NodeRef::<leptos::html::Div>::new();

    setup_key_listener(ctx);
    setup_autoscroll_effect(ctx, output_ref);

    view! {
        <div class=css::container style:color=move || session.with(|s| s.text_color())>
            <div node_ref=output_ref class=css::output>
                <For
                    each=move || session.with(|s| s.output().to_vec())
                    key=|line| line.id
                    children=|line| view! { <Output line=line /> }
                />
            </div>

            <Show when=move || !session.with(|s| s.is_halted())>
                <div class=css::inputLine>
                    <span class=css::prompt>{move || session.with(|s| s.prompt())}</span>
                    <span class=css::input>{move || session.with(|s| s.input().to_string())}</span>
                    <span class=css::cursor>"_"</span>
                </div>
            </Show>
        </div>
    }
    .into_any()
}
