// ============================================================================
// VIEWMODELS - Máquinas de estado puras (sin web-sys)
// ============================================================================
// Los componentes consultan estos estados y aplican el resultado al DOM.
// Al no tocar el DOM son testeables fuera del navegador.
// ============================================================================

pub mod pagination;
pub mod submission;

pub use pagination::{PageRequest, PaginationState};
pub use submission::SubmissionState;
