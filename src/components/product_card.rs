// ============================================================================
// PRODUCT CARD - Añadir al carrito vía AJAX
// ============================================================================
// Controla un `custom-product-card` renderizado por el servidor: el click en
// su botón envía la variante al carrito. Con colaborador de carrito en la
// página, la respuesta trae las secciones renderizadas y el colaborador las
// aplica; sin colaborador, se redirige a la página del carrito.
//
// Data attributes consumidos:
// - data-variant-id: variante comprable de la tarjeta
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::components::{ensure_error_container, hide_error, show_error, CartDisplay, BOUND_ATTR};
use crate::config::StorefrontConfig;
use crate::dom::{current_pathname, get_attribute, on_click, redirect_to, set_attribute, BusyGuard};
use crate::models::CartAddOutcome;
use crate::services::ShopClient;
use crate::viewmodels::SubmissionState;

/// Botón que dispara el envío
const ADD_TO_CART_SELECTOR: &str = "[data-js-add-to-cart]";

pub struct ProductCard;

impl ProductCard {
    /// Adjunta el controlador a un elemento `custom-product-card`.
    /// Idempotente: las tarjetas ya montadas (marcador presente) se saltan,
    /// cubre el solape entre el montaje inicial y el del paginador.
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

        let Some(variant_id) = get_attribute(element, "data-variant-id") else {
            log::warn!("⚠️ custom-product-card sin data-variant-id, no se monta");
            return Ok(());
        };
        let Some(button) = element.query_selector(ADD_TO_CART_SELECTOR)? else {
            log::warn!("⚠️ Tarjeta de la variante {} sin botón de añadir", variant_id);
            return Ok(());
        };

        // Contenedor de error: creado una vez, reutilizado entre fallos
        let error_container = ensure_error_container(element)?;
        let state = Rc::new(RefCell::new(SubmissionState::new(variant_id)));

        on_click(&button.clone(), move |event| {
            // El botón no es un submit nativo
            event.prevent_default();

            // Guard: con un envío en vuelo, el click se ignora (no es cola)
            let sections = cart
                .as_ref()
                .map(|c| (c.sections_to_render(), current_pathname()));
            let request = match state.borrow_mut().begin_submit(sections) {
                Some(request) => request,
                None => return,
            };

            let button = button.clone();
            let error_container = error_container.clone();
            let state = state.clone();
            let client = client.clone();
            let cart = cart.clone();
            let config = config.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let _busy = BusyGuard::engage(&button);
                let _submit = SubmitGuard {
                    state: state.clone(),
                };
                // Cada intento nuevo esconde el error anterior
                hide_error(&error_container);

                match client.add_to_cart(&request).await {
                    Ok(payload) => match payload.outcome() {
                        CartAddOutcome::Added(payload) => match &cart {
                            // Tema con carrito no-AJAX: recarga completa
                            None => redirect_to(&config.cart_url),
                            Some(collaborator) => {
                                collaborator.render_contents(&payload);
                                collaborator.clear_empty_state();
                            }
                        },
                        CartAddOutcome::Rejected { status, description } => {
                            log::warn!("⚠️ Carrito rechazó la variante ({}): {}", status, description);
                            show_error(&error_container, &description);
                        }
                    },
                    Err(e) => {
                        log::error!("❌ Error añadiendo al carrito: {}", e);
                        show_error(&error_container, &e.to_string());
                    }
                }
            });
        })?;

        Ok(())
    }
}

/// Libera el guard de envío en todas las salidas del task
struct SubmitGuard {
    state: Rc<RefCell<SubmissionState>>,
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.state.borrow_mut().end_submit();
    }
}
