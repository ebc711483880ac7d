pub mod errors;
pub mod events;
pub mod id;

pub use errors::{ConfigError, DockError};
pub use events::{DockEvent, EventBus};
pub use id::new_widget_id;

pub type Result<T> = std::result::Result<T, DockError>;
