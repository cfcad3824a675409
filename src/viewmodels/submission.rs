use crate::models::CartAddRequest;

/// Cantidad fija por click de "añadir al carrito"
const ADD_TO_CART_QUANTITY: u32 = 1;

/// Estado de envío de una tarjeta de producto.
///
/// Invariante: como mucho UNA petición en vuelo por tarjeta. El guard no es
/// una cola: un segundo click mientras `is_submitting` es true se ignora,
/// no se reintenta.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionState {
    variant_id: String,
    is_submitting: bool,
}

impl SubmissionState {
    pub fn new(variant_id: impl Into<String>) -> Self {
        Self {
            variant_id: variant_id.into(),
            is_submitting: false,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Arranca un envío si el guard lo permite.
    ///
    /// `sections` viene del colaborador de carrito cuando está presente:
    /// (render targets a refrescar, path actual de la página).
    pub fn begin_submit(&mut self, sections: Option<(Vec<String>, String)>) -> Option<CartAddRequest> {
        if self.is_submitting {
            return None;
        }

        self.is_submitting = true;
        let (sections, sections_url) = match sections {
            Some((ids, url)) => (Some(ids), Some(url)),
            None => (None, None),
        };

        Some(CartAddRequest {
            variant_id: self.variant_id.clone(),
            quantity: ADD_TO_CART_QUANTITY,
            sections,
            sections_url,
        })
    }

    /// Libera el guard. Se invoca en TODAS las salidas del envío.
    pub fn end_submit(&mut self) {
        self.is_submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn un_envio_en_vuelo_bloquea_el_segundo() {
        let mut state = SubmissionState::new("40931234");

        let first = state.begin_submit(None);
        assert!(first.is_some());
        assert!(state.is_submitting());

        // Segundo click antes de resolverse el primero: no-op
        assert_eq!(state.begin_submit(None), None);

        state.end_submit();
        assert!(state.begin_submit(None).is_some());
    }

    #[test]
    fn la_peticion_lleva_cantidad_fija_y_variante() {
        let mut state = SubmissionState::new("40931234");
        let request = state.begin_submit(None).unwrap();

        assert_eq!(request.variant_id, "40931234");
        assert_eq!(request.quantity, 1);
        assert_eq!(request.sections, None);
        assert_eq!(request.sections_url, None);
    }

    #[test]
    fn con_colaborador_viajan_secciones_y_path() {
        let mut state = SubmissionState::new("40931234");
        let sections = vec![
            "cart-notification-product".to_string(),
            "cart-icon-bubble".to_string(),
        ];

        let request = state
            .begin_submit(Some((sections.clone(), "/collections/all".to_string())))
            .unwrap();

        assert_eq!(request.sections.as_deref(), Some(sections.as_slice()));
        assert_eq!(request.sections_url.as_deref(), Some("/collections/all"));
    }
}
