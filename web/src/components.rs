//! View components: the cell grid and the status line.

use leptos::prelude::*;
use noughts::{Cell, GamePhase, GameSession, Winner};

/// The 3x3 grid of clickable cells.
///
/// A cell is disabled when it is occupied or the game is finished, so
/// every click that reaches the session is a legal command.
#[component]
pub fn BoardView(session: RwSignal<GameSession>) -> impl IntoView {
    let grid_style = "display: grid; grid-template-columns: repeat(3, 96px); \
                      grid-template-rows: repeat(3, 96px); gap: 8px; \
                      justify-content: center;";

    view! {
        <div style=grid_style>
            {(0..9)
                .map(|position| {
                    let cell = move || {
                        session.with(|s| s.state().board().cell(position).unwrap_or(Cell::Empty))
                    };
                    let label = move || match cell() {
                        Cell::Occupied(mark) => mark.to_string(),
                        Cell::Empty => String::new(),
                    };
                    let finished =
                        move || session.with(|s| s.state().phase() == GamePhase::Finished);
                    let disabled = move || finished() || cell() != Cell::Empty;

                    view! {
                        <button
                            style="font-size: 40px; font-weight: bold; \
                                   border: 2px solid #ccc; border-radius: 8px; \
                                   background: white; cursor: pointer;"
                            disabled=disabled
                            on:click=move |_| session.update(|s| s.apply_move(position))
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// The status line above the board.
#[component]
pub fn StatusLine(session: RwSignal<GameSession>) -> impl IntoView {
    let message = move || {
        session.with(|s| {
            let state = s.state();
            match state.phase() {
                GamePhase::Finished => match state.winner() {
                    Winner::Draw => "It's a draw!".to_string(),
                    winner => match winner.mark() {
                        Some(mark) => format!("Player {} wins!", mark),
                        None => String::new(),
                    },
                },
                GamePhase::Playing => format!("Player {}'s turn", state.current_player()),
            }
        })
    };
    let playing = move || session.with(|s| s.state().phase() == GamePhase::Playing);

    view! {
        <div style="text-align: center; margin-bottom: 24px;">
            <div style="font-size: 24px; font-weight: bold;">{message}</div>
            <Show when=playing>
                <div style="font-size: 13px; color: #666; margin-top: 8px;">
                    "Click an empty cell to make your move"
                </div>
            </Show>
        </div>
    }
}
