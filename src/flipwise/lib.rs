//! # Flipwise Architecture
//!
//! Flipwise is a **UI-agnostic flashcard study library**. The interactive
//! terminal session in `cli/` is one client of it; nothing below the API layer
//! knows a terminal exists.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads command lines, prompts for card fields, renders    │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over the controller and a DeckStore          │
//! │  - Turns recoverable failures into notices                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Controller (controller.rs)                                 │
//! │  - Deck, category filter, view order, cursor, shuffle mode  │
//! │  - Produces the ReadModel a front end draws                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Deck and Storage (deck.rs, view.rs, shuffle.rs, store/)    │
//! │  - Card collection, filtering, ordering                     │
//! │  - JSON document format, FileStore and InMemoryStore        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Views and the Cursor
//!
//! The deck keeps cards in insertion order. What the user browses is a *view*:
//! the cards matching the active [`model::Category`], sorted by front text, or
//! a random permutation of them while shuffle is on. The cursor is a position
//! in that view plus the visible face. Every mutation rebuilds the view and
//! leaves the cursor in range.
//!
//! ## Testing Strategy
//!
//! 1. **Deck, view, shuffle and controller**: unit tests of the study rules,
//!    with a seeded RNG where order matters.
//! 2. **API**: dispatch and notice tests over `InMemoryStore`.
//! 3. **CLI**: command-line parsing, rendering, and scripted sessions over an
//!    in-memory terminal; `tests/` drives the real binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for every user intent
//! - [`controller`]: Study session state and the read model
//! - [`deck`]: The card collection
//! - [`model`]: `Card`, `CardDraft`, `Face`, `Category`
//! - [`view`]: Filtering, natural order and the cursor
//! - [`shuffle`]: Shuffle mode and permutations
//! - [`store`]: Deck document format and storage backends
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod config;
pub mod controller;
pub mod deck;
pub mod error;
pub mod model;
pub mod shuffle;
pub mod store;
pub mod view;
