// ============================================================================
// BUSY GUARD - Estado visual de carga con liberación garantizada
// ============================================================================

use web_sys::Element;

use crate::dom::element::{add_class, hide, remove_class, show};

/// Clase del tema que marca un control como ocupado
pub const LOADING_CLASS: &str = "loading";
/// Selector del spinner dentro del control
pub const SPINNER_SELECTOR: &str = ".loading__spinner";

/// Marca un control como ocupado (spinner visible) mientras vive el guard.
///
/// El Drop restaura el control en TODAS las salidas del task asíncrono:
/// éxito, error HTTP o error de parseo.
pub struct BusyGuard {
    control: Element,
}

impl BusyGuard {
    pub fn engage(control: &Element) -> Self {
        let _ = add_class(control, LOADING_CLASS);
        if let Ok(Some(spinner)) = control.query_selector(SPINNER_SELECTOR) {
            show(&spinner);
        }
        Self {
            control: control.clone(),
        }
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        let _ = remove_class(&self.control, LOADING_CLASS);
        if let Ok(Some(spinner)) = self.control.query_selector(SPINNER_SELECTOR) {
            hide(&spinner);
        }
    }
}
