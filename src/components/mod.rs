// ============================================================================
// COMPONENTS - Controladores DOM
// ============================================================================
// Cada componente se monta una vez por elemento compatible encontrado en el
// documento. El paginador monta él mismo las tarjetas que añade, así que el
// atributo marcador evita montajes dobles.
// ============================================================================

pub mod cart_display;
pub mod featured_collection;
pub mod product_card;

pub use cart_display::{detect_cart_display, CartDisplay, DrawerCart, NotificationCart};
pub use featured_collection::FeaturedCollection;
pub use product_card::ProductCard;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::config::StorefrontConfig;
use crate::dom::{add_class, create_element, document, show, HIDDEN_CLASS};
use crate::services::ShopClient;

/// Atributo marcador: el elemento ya tiene su controlador
pub const BOUND_ATTR: &str = "data-widget-bound";
/// Selector de los elementos de colección destacada
pub const FEATURED_COLLECTION_SELECTOR: &str = "custom-featured-collection";
/// Selector de las tarjetas de producto (también dentro de fragmentos fetched)
pub const PRODUCT_CARD_SELECTOR: &str = "custom-product-card";
/// Clase del contenedor de error inline
pub const ERROR_MESSAGE_CLASS: &str = "error-message";

/// Monta todos los componentes presentes en el documento.
///
/// El colaborador de carrito se detecta UNA sola vez aquí y se comparte con
/// todas las tarjetas, en vez de re-consultarse en cada envío.
pub fn mount_all(config: &StorefrontConfig) -> Result<(), JsValue> {
    let document = document().ok_or_else(|| JsValue::from_str("No document"))?;

    let cart = detect_cart_display(&document);
    let client = ShopClient::new(config.clone());

    let collections = document.query_selector_all(FEATURED_COLLECTION_SELECTOR)?;
    for i in 0..collections.length() {
        if let Some(element) = collections.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            FeaturedCollection::mount(&element, client.clone(), cart.clone(), config.clone())?;
        }
    }

    let cards = document.query_selector_all(PRODUCT_CARD_SELECTOR)?;
    for i in 0..cards.length() {
        if let Some(element) = cards.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            ProductCard::mount(&element, client.clone(), cart.clone(), config.clone())?;
        }
    }

    log::info!(
        "✅ Componentes montados: {} colecciones, {} tarjetas",
        collections.length(),
        cards.length()
    );
    Ok(())
}

/// Contenedor de error inline debajo de un control.
///
/// Se crea perezosamente la primera vez, se adjunta UNA vez al host y se
/// reutiliza entre fallos (se oculta, no se elimina).
pub fn ensure_error_container(host: &Element) -> Result<Element, JsValue> {
    if let Some(existing) = host.query_selector(&format!(".{}", ERROR_MESSAGE_CLASS))? {
        return Ok(existing);
    }

    let container = create_element("div")?;
    container.class_list().add_2(ERROR_MESSAGE_CLASS, HIDDEN_CLASS)?;
    if let Some(html) = container.dyn_ref::<web_sys::HtmlElement>() {
        html.style().set_property("color", "red")?;
    }
    host.append_child(&container)?;
    Ok(container)
}

/// Muestra un mensaje en el contenedor de error
pub fn show_error(container: &Element, message: &str) {
    container.set_text_content(Some(message));
    show(container);
}

/// Oculta el contenedor de error (al arrancar cada nuevo intento)
pub fn hide_error(container: &Element) {
    let _ = add_class(container, HIDDEN_CLASS);
}

/// Esconde el error inline de un host si existe, sin crearlo.
/// Para controles cuyo contenedor es perezoso (el paginador): cada intento
/// nuevo arranca sin el mensaje del intento fallido anterior.
pub fn clear_inline_error(host: &Element) {
    if let Ok(Some(container)) = host.query_selector(&format!(".{}", ERROR_MESSAGE_CLASS)) {
        hide_error(&container);
    }
}
