// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

/// Clase usada por el tema para ocultar elementos
pub const HIDDEN_CLASS: &str = "hidden";

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Agregar clase
pub fn add_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().add_1(class)
}

/// Remover clase
pub fn remove_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().remove_1(class)
}

/// Verificar si tiene clase
pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Ocultar elemento vía la clase `hidden` del tema
pub fn hide(element: &Element) {
    let _ = add_class(element, HIDDEN_CLASS);
}

/// Mostrar elemento oculto con la clase `hidden`
pub fn show(element: &Element) {
    let _ = remove_class(element, HIDDEN_CLASS);
}

/// Quitar el elemento del flujo de layout de forma permanente
/// (estado terminal del botón "load more")
pub fn set_display_none(element: &Element) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property("display", "none");
    }
}

/// Obtener atributo
pub fn get_attribute(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(name)
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Path actual de la página (para `sections_url`)
pub fn current_pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Navegación completa (modo carrito no-AJAX)
pub fn redirect_to(url: &str) {
    if let Some(w) = window() {
        if let Err(e) = w.location().set_href(url) {
            log::error!("❌ No se pudo redirigir a {}: {:?}", url, e);
        }
    }
}
