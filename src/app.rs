//! Film Crawl App
//!
//! Single screen: header, divider, and the list of film cards.
//! Owns the view state and the one fetch that fills it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{debug, info, warn};

use crate::components::{ErrorCard, FilmCard, Header, LoadingIndicator};
use crate::config::ClientConfig;
use crate::context::ViewContext;
use crate::graphql;
use crate::render::{render_plan, Block};
use crate::state::ViewState;
use crate::theme::{style, Style};

#[component]
pub fn App() -> impl IntoView {
    // State
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let state = RwSignal::new(ViewState::Unloaded);
    let (attempt, set_attempt) = signal(0u32);

    // Provide context to all children
    let ctx = ViewContext::new(state, (attempt, set_attempt));
    provide_context(ctx);

    // Results that land after teardown are dropped
    let mounted = StoredValue::new(true);
    on_cleanup(move || {
        mounted.try_set_value(false);
    });

    // Fetch on mount; reruns only when `retry` bumps the attempt counter
    Effect::new(move |_| {
        let attempt = ctx.attempt.get();
        let config = config.clone();
        info!(attempt, endpoint = %config.endpoint, "fetching films");

        spawn_local(async move {
            let outcome = graphql::fetch_dataset(&config).await;
            if let Err(err) = &outcome {
                warn!(attempt, error = %err, "films fetch failed");
            }

            // A disposed flag reads as unmounted
            let still_mounted = mounted.try_get_value().unwrap_or(false);
            let applied = state
                .try_update(|s| s.settle(still_mounted, outcome))
                .unwrap_or(false);
            if !applied {
                debug!(attempt, still_mounted, "dropping fetch result");
            }
        });
    });

    let blocks = move || state.with(render_plan);

    view! {
        <div class="app-layout" style=style(Style::Container)>
            <Header />
            <div class="divider" style=style(Style::Divider)></div>

            <main class="film-list" style=style(Style::ScrollContainer)>
                <For
                    each=blocks
                    key=|block| block.key()
                    children=move |block| {
                        match block {
                            Block::Loading => view! { <LoadingIndicator /> }.into_any(),
                            Block::Failed { message } => view! { <ErrorCard message=message /> }.into_any(),
                            Block::Film(card) => view! { <FilmCard card=card /> }.into_any(),
                        }
                    }
                />
            </main>
        </div>
    }
}
