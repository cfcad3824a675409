// ============================================================================
// EVENT HANDLING - Registro de listeners
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Los listeners se registran sobre elementos del DOM: cuando el elemento se
//   destruye, el navegador limpia los listeners asociados, por lo que
//   closure.forget() es seguro aquí.
// - Listeners globales (window/document) no se registran en este crate.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

/// Helper para registrar un click handler sobre un elemento
/// Nota: closure.forget() es necesario para mantener el closure vivo en WASM.
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
