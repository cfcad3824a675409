/// Petición de la siguiente página de una colección
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub handle: String,
    pub page: u32,
    pub limit: u32,
}

/// Estado de paginación de una colección destacada.
///
/// Invariantes:
/// - `current_page` solo avanza de 1 en 1 y solo tras un fetch exitoso que
///   reportó que existe otra página
/// - una vez `has_more` pasa a false no vuelve a true (estado terminal)
/// - `is_loading` serializa las activaciones: un segundo click con un fetch
///   en vuelo es un no-op
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationState {
    collection_handle: String,
    page_size: u32,
    current_page: u32,
    has_more: bool,
    is_loading: bool,
}

impl PaginationState {
    pub fn new(collection_handle: impl Into<String>, page_size: u32, current_page: u32) -> Self {
        Self {
            collection_handle: collection_handle.into(),
            page_size: page_size.max(1),
            current_page: current_page.max(1),
            has_more: true,
            is_loading: false,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Arranca un fetch si el guard lo permite.
    ///
    /// Devuelve la petición de la página siguiente, con un item extra de
    /// lookahead en el límite: el backend solo renderiza el marcador
    /// "load more" si existe al menos un producto más allá de la página
    /// pedida.
    pub fn begin_fetch(&mut self) -> Option<PageRequest> {
        if self.is_loading || !self.has_more {
            return None;
        }

        self.is_loading = true;
        Some(PageRequest {
            handle: self.collection_handle.clone(),
            page: self.current_page + 1,
            limit: self.page_size + 1,
        })
    }

    /// Aplica el resultado de un fetch exitoso.
    /// `more_pages` = el fragmento traía el marcador "load more".
    pub fn apply_success(&mut self, more_pages: bool) {
        if more_pages {
            self.current_page += 1;
        } else {
            self.has_more = false;
        }
    }

    /// Libera el guard de carga. Se invoca en TODAS las salidas
    /// (éxito, error de transporte, error de parseo).
    pub fn end_fetch(&mut self) {
        self.is_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetch_ok(state: &mut PaginationState, more_pages: bool) -> PageRequest {
        let request = state.begin_fetch().expect("guard libre");
        state.apply_success(more_pages);
        state.end_fetch();
        request
    }

    #[test]
    fn la_pagina_avanza_de_uno_en_uno() {
        let mut state = PaginationState::new("summer-sale", 4, 1);

        let first = fetch_ok(&mut state, true);
        assert_eq!(first.page, 2);
        assert_eq!(first.limit, 5); // page_size + 1 de lookahead
        assert_eq!(state.current_page(), 2);

        let second = fetch_ok(&mut state, true);
        assert_eq!(second.page, 3);
        assert_eq!(state.current_page(), 3);
    }

    #[test]
    fn sin_marcador_el_estado_es_terminal_y_absorbente() {
        let mut state = PaginationState::new("summer-sale", 4, 1);

        fetch_ok(&mut state, true);
        fetch_ok(&mut state, false);

        assert!(!state.has_more());
        assert_eq!(state.current_page(), 2); // la última página no avanza el índice

        // Tercera activación: no se emite ninguna petición
        assert_eq!(state.begin_fetch(), None);
        assert!(!state.has_more());
    }

    #[test]
    fn segunda_activacion_en_vuelo_es_noop() {
        let mut state = PaginationState::new("summer-sale", 4, 1);

        let first = state.begin_fetch();
        assert!(first.is_some());

        // Click sincrónico mientras el primero sigue en vuelo
        assert_eq!(state.begin_fetch(), None);

        state.apply_success(true);
        state.end_fetch();
        assert!(state.begin_fetch().is_some());
    }

    #[test]
    fn el_error_no_toca_pagina_ni_has_more() {
        let mut state = PaginationState::new("summer-sale", 4, 1);

        state.begin_fetch().expect("guard libre");
        // Fallo de transporte: solo se libera el guard
        state.end_fetch();

        assert_eq!(state.current_page(), 1);
        assert!(state.has_more());
        assert!(!state.is_loading());
    }

    #[test]
    fn el_indice_inicial_se_respeta_y_se_normaliza() {
        let resumed = PaginationState::new("all", 4, 3);
        assert_eq!(resumed.current_page(), 3);

        let mut clamped = PaginationState::new("all", 0, 0);
        assert_eq!(clamped.current_page(), 1);
        assert_eq!(clamped.begin_fetch().unwrap().limit, 2);
    }
}
