pub mod resize_debouncer;
pub mod visibility;

pub use resize_debouncer::ResizeDebouncer;
pub use visibility::VisibilityTracker;
