//! Browser frontend for the `noughts` engine.
//!
//! Client-side rendered Leptos app: a 3x3 grid of buttons over a
//! [`noughts::GameSession`] held in a reactive signal. Every click goes
//! through the session's command surface and the view re-renders from
//! the committed snapshot.

pub mod app;
pub mod components;
