//! Root application component.

use crate::components::{BoardView, StatusLine};
use leptos::prelude::*;
use noughts::{GamePhase, GameSession};

/// The page: title, status line, board, and a reset control that only
/// appears once the game is finished.
#[component]
pub fn App() -> impl IntoView {
    // The session lives as long as the view; discarded on unmount.
    let session = RwSignal::new(GameSession::new());

    let finished = move || session.with(|s| s.state().phase() == GamePhase::Finished);

    let card_style = "background: white; border-radius: 8px; \
                      box-shadow: 0 8px 24px rgba(0,0,0,0.15); \
                      padding: 32px; max-width: 420px; margin: 0 auto;";

    view! {
        <main style="min-height: 100vh; display: flex; align-items: center; \
                     justify-content: center; background: #eef2ff; \
                     font-family: sans-serif;">
            <div style=card_style>
                <h1 style="text-align: center; margin-bottom: 24px;">"Tic-Tac-Toe"</h1>

                <StatusLine session=session/>
                <BoardView session=session/>

                <Show when=finished>
                    <div style="margin-top: 24px; text-align: center;">
                        <button
                            style="padding: 8px 24px; background: #2563eb; color: white; \
                                   border: none; border-radius: 8px; font-weight: 600; \
                                   cursor: pointer;"
                            on:click=move |_| session.update(|s| s.reset())
                        >
                            "Play again"
                        </button>
                    </div>
                </Show>
            </div>
        </main>
    }
}
