// ============================================================================
// FEATURED COLLECTION - Paginación incremental de tarjetas de producto
// ============================================================================
// Controla un `custom-featured-collection` renderizado por el servidor:
// el botón "load more" pide la página siguiente al section rendering
// endpoint, extrae las tarjetas del fragmento devuelto y las añade al
// contenedor. Sin marcador "load more" en el fragmento, el botón se oculta
// para siempre (estado terminal).
//
// Data attributes consumidos:
// - data-collection-handle: colección a paginar
// - data-max-products-per-row: tamaño de página
// - data-current-index: índice actual, re-escrito tras cada avance para que
//   un re-montaje retome donde quedó
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DomParser, Element, SupportedType};

use crate::components::{
    clear_inline_error, ensure_error_container, show_error, CartDisplay, ProductCard, BOUND_ATTR,
    PRODUCT_CARD_SELECTOR,
};
use crate::config::StorefrontConfig;
use crate::dom::{get_attribute, on_click, set_attribute, set_display_none, BusyGuard};
use crate::services::ShopClient;
use crate::viewmodels::PaginationState;

/// Contenedor al que se añaden las tarjetas
const PRODUCTS_CONTAINER_SELECTOR: &str = ".products-container";
/// Control "load more"; su presencia en un fragmento marca que hay más páginas
const LOAD_MORE_SELECTOR: &str = ".load-more-btn";
/// Tamaño de página si el atributo falta o no parsea
const DEFAULT_PAGE_SIZE: u32 = 4;

pub struct FeaturedCollection;

impl FeaturedCollection {
    /// Adjunta el controlador a un elemento `custom-featured-collection`.
    /// Los elementos sin handle o sin botón "load more" se dejan estáticos.
    pub fn mount(
        element: &Element,
        client: ShopClient,
        cart: Option<Rc<dyn CartDisplay>>,
        config: StorefrontConfig,
    ) -> Result<(), JsValue> {
        if get_attribute(element, BOUND_ATTR).is_some() {
            return Ok(());
        }
        set_attribute(element, BOUND_ATTR, "true")?;

        let Some(handle) = get_attribute(element, "data-collection-handle") else {
            log::warn!("⚠️ custom-featured-collection sin data-collection-handle, no se monta");
            return Ok(());
        };
        let page_size = get_attribute(element, "data-max-products-per-row")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PAGE_SIZE);
        let current_page = get_attribute(element, "data-current-index")
            .and_then(|v| v.parse().ok())
            .unwrap_or(1);

        let Some(container) = element.query_selector(PRODUCTS_CONTAINER_SELECTOR)? else {
            log::warn!("⚠️ '{}' sin contenedor de productos, no se monta", handle);
            return Ok(());
        };
        let Some(load_more_btn) = element.query_selector(LOAD_MORE_SELECTOR)? else {
            // Colección de una sola página: nada que paginar
            return Ok(());
        };

        let state = Rc::new(RefCell::new(PaginationState::new(
            handle, page_size, current_page,
        )));
        let element = element.clone();

        on_click(&load_more_btn.clone(), move |_event| {
            // Guard: con un fetch en vuelo o en estado terminal, no-op
            let request = match state.borrow_mut().begin_fetch() {
                Some(request) => request,
                None => return,
            };

            let element = element.clone();
            let container = container.clone();
            let load_more_btn = load_more_btn.clone();
            let state = state.clone();
            let client = client.clone();
            let cart = cart.clone();
            let config = config.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let _busy = BusyGuard::engage(&load_more_btn);
                let _fetch = FetchGuard {
                    state: state.clone(),
                };
                // Cada intento nuevo esconde el error del anterior
                clear_inline_error(&element);

                match client.fetch_collection_page(&request).await {
                    Ok(html) => {
                        match apply_page(&container, &html, &client, &cart, &config) {
                            Ok(more_pages) => {
                                let mut state = state.borrow_mut();
                                state.apply_success(more_pages);
                                if more_pages {
                                    // Persistir el índice para retomar tras un re-montaje
                                    let _ = set_attribute(
                                        &element,
                                        "data-current-index",
                                        &state.current_page().to_string(),
                                    );
                                } else {
                                    // Estado terminal: el botón no vuelve a mostrarse
                                    set_display_none(&load_more_btn);
                                }
                            }
                            Err(e) => {
                                log::error!("❌ Fragmento de colección ilegible: {:?}", e);
                                report_fetch_error(&element, "Could not load more products.");
                            }
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando más productos: {}", e);
                        report_fetch_error(&element, &e.to_string());
                    }
                }
            });
        })?;

        Ok(())
    }
}

/// Libera el guard de paginación en todas las salidas del task
struct FetchGuard {
    state: Rc<RefCell<PaginationState>>,
}

impl Drop for FetchGuard {
    fn drop(&mut self) {
        self.state.borrow_mut().end_fetch();
    }
}

/// Extrae del fragmento devuelto las tarjetas de producto, en orden de
/// documento, y si el fragmento trae el marcador "load more".
pub fn parse_product_cards(html: &str) -> Result<(Vec<Element>, bool), JsValue> {
    let parser = DomParser::new()?;
    let fragment = parser.parse_from_string(html, SupportedType::TextHtml)?;

    let nodes = fragment.query_selector_all(PRODUCT_CARD_SELECTOR)?;
    let mut cards = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(card) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            cards.push(card);
        }
    }

    let more_pages = fragment.query_selector(LOAD_MORE_SELECTOR)?.is_some();
    Ok((cards, more_pages))
}

/// Añade las tarjetas del fragmento al contenedor y las monta.
/// El resto del markup del fragmento se ignora.
fn apply_page(
    container: &Element,
    html: &str,
    client: &ShopClient,
    cart: &Option<Rc<dyn CartDisplay>>,
    config: &StorefrontConfig,
) -> Result<bool, JsValue> {
    let (cards, more_pages) = parse_product_cards(html)?;
    log::info!("📦 {} tarjetas nuevas (más páginas: {})", cards.len(), more_pages);

    for card in &cards {
        container.append_child(card)?;
        // El paginador es quien activa las tarjetas recién añadidas
        ProductCard::mount(card, client.clone(), cart.clone(), config.clone())?;
    }

    Ok(more_pages)
}

/// Error visible bajo el botón, mismo tratamiento que en la tarjeta de
/// producto. El estado de paginación no se toca: se puede reintentar.
fn report_fetch_error(element: &Element, message: &str) {
    if let Ok(container) = ensure_error_container(element) {
        show_error(&container, message);
    }
}
