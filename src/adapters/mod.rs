//! Adapters implementing the ports.
//!
//! Selectors implement [`crate::ports::MoveSelector`], repositories implement
//! [`crate::ports::ValueFunctionRepository`] and the renderer implements
//! [`crate::ports::EpisodeObserver`].

pub mod fn_selector;
pub mod greedy_selector;
pub mod in_memory_repository;
pub mod msgpack_repository;
pub mod random_selector;
pub mod text_renderer;

pub use fn_selector::FnSelector;
pub use greedy_selector::GreedyValueSelector;
pub use in_memory_repository::InMemoryRepository;
pub use msgpack_repository::MsgPackRepository;
pub use random_selector::RandomSelector;
pub use text_renderer::TextRenderer;
