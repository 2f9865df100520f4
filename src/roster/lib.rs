//! # Roster Architecture
//!
//! Roster is a small student record manager: an ordered, densely numbered list
//! of records with CSV load/save, driven from an interactive menu.
//!
//! The menu is just one client. Everything it does goes through a library that
//! never touches the terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell (cli/, wired by main.rs)                             │
//! │  - Menu loop, prompts, numeric re-prompting, "cancel"       │
//! │  - The ONLY place that reads stdin or writes stdout         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Roster and the DataStore                        │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, pure logic                     │
//! │  - Dialogues delegated through DeleteResolver               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record Store (roster.rs)   │  Storage (store/, format.rs)  │
//! │  - Vec + id → position map  │  - DataStore trait            │
//! │  - Dense ids, renumbering   │  - CSV codec, load policies   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dense ids
//!
//! Ids are always exactly `1..=N` in list order. Deleting a record renumbers
//! every record after it. See [`roster`] for details.
//!
//! ## Testing Strategy
//!
//! 1. **Record store and codec**: invariants (density, index consistency,
//!    parsing policies) in `roster.rs` and `format.rs`.
//! 2. **Commands**: behaviour and messages, against `InMemoryStore` and the
//!    `RosterFixture` builder.
//! 3. **API**: dispatch only.
//! 4. **Shell**: scripted stdin in unit tests, plus end-to-end runs of the
//!    binary in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`roster`]: The in-memory record store
//! - [`store`]: Storage abstraction and implementations
//! - [`format`]: CSV parsing and rendering
//! - [`model`]: Core data types (`Student`, `StudentFields`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod roster;
pub mod store;
