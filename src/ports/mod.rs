//! Ports (trait boundaries) for the engine's collaborators.
//!
//! The engine only depends on [`MoveSelector`]. Persistence and presentation
//! live outside the engine and are reached by drivers through the other two
//! ports.

pub mod observer;
pub mod repository;
pub mod selector;

pub use observer::EpisodeObserver;
pub use repository::ValueFunctionRepository;
pub use selector::MoveSelector;
