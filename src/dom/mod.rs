// ============================================================================
// DOM MODULE - Helpers para manipulación DOM
// ============================================================================

pub mod busy;
pub mod element;
pub mod events;

pub use busy::*;
pub use element::*;
pub use events::*;
