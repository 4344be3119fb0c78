//! Service layer
//!
//! Seams between the poll loop and the outside world: where statuses come
//! from and where messages go. Both are traits so the loop can be driven by
//! test doubles.

mod notifier;
mod source;

// Re-export traits
pub use notifier::Notifier;
pub use source::StatusSource;

// Re-export implementations
pub use notifier::TelegramNotifier;
