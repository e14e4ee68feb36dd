pub mod pointer;
pub mod theme;
pub mod viewport;

pub use pointer::{wire_hover_boost, wire_pointer_move};
pub use theme::{load_saved_theme, wire_theme_toggle};
pub use viewport::wire_viewport_resize;
