// ============================================================================
// CART DISPLAY - Colaborador de resumen de carrito
// ============================================================================
// El tema puede llevar una notificación inline o un drawer deslizante; los
// dos exponen el mismo contrato y la variante se elige UNA vez al arrancar
// (nada de re-consultar el DOM en cada envío).
// ============================================================================

use std::rc::Rc;

use web_sys::{Document, Element};

use crate::models::CartAddResponse;

/// Clase del tema que marca el carrito como vacío
const IS_EMPTY_CLASS: &str = "is-empty";

/// Contrato mínimo del colaborador de carrito.
pub trait CartDisplay {
    /// Render targets que el backend debe devolver junto al add-to-cart
    fn sections_to_render(&self) -> Vec<String>;

    /// Aplica los fragmentos renderizados de la respuesta y revela el carrito
    fn render_contents(&self, payload: &CartAddResponse);

    /// Limpia el estado visual "carrito vacío" tras añadir un item
    fn clear_empty_state(&self);
}

/// Detecta el colaborador presente en la página, si lo hay.
/// Ausencia = tema con carrito no-AJAX (redirección tras añadir).
pub fn detect_cart_display(document: &Document) -> Option<Rc<dyn CartDisplay>> {
    if let Ok(Some(element)) = document.query_selector("cart-notification") {
        log::info!("🔔 Colaborador de carrito: notificación inline");
        return Some(Rc::new(NotificationCart::new(element)));
    }

    if let Ok(Some(element)) = document.query_selector("cart-drawer") {
        log::info!("🗄️ Colaborador de carrito: drawer");
        return Some(Rc::new(DrawerCart::new(element)));
    }

    log::info!("ℹ️ Sin colaborador de carrito: modo redirección");
    None
}

/// Variante notificación inline (`cart-notification`)
pub struct NotificationCart {
    element: Element,
}

impl NotificationCart {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl CartDisplay for NotificationCart {
    fn sections_to_render(&self) -> Vec<String> {
        vec![
            "cart-notification-product".to_string(),
            "cart-notification-button".to_string(),
            "cart-icon-bubble".to_string(),
        ]
    }

    fn render_contents(&self, payload: &CartAddResponse) {
        apply_rendered_sections(&self.sections_to_render(), payload);
        reveal(&self.element);
    }

    fn clear_empty_state(&self) {
        let _ = self.element.class_list().remove_1(IS_EMPTY_CLASS);
    }
}

/// Variante drawer deslizante (`cart-drawer`)
pub struct DrawerCart {
    element: Element,
}

impl DrawerCart {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl CartDisplay for DrawerCart {
    fn sections_to_render(&self) -> Vec<String> {
        vec!["cart-drawer".to_string(), "cart-icon-bubble".to_string()]
    }

    fn render_contents(&self, payload: &CartAddResponse) {
        apply_rendered_sections(&self.sections_to_render(), payload);
        reveal(&self.element);
    }

    fn clear_empty_state(&self) {
        let _ = self.element.class_list().remove_1(IS_EMPTY_CLASS);
    }
}

/// Vuelca cada fragmento renderizado en su render target de la página
fn apply_rendered_sections(section_ids: &[String], payload: &CartAddResponse) {
    let Some(sections) = &payload.sections else {
        log::warn!("⚠️ Respuesta de carrito sin secciones renderizadas");
        return;
    };
    let Some(document) = crate::dom::document() else {
        return;
    };

    for id in section_ids {
        let Some(markup) = sections.get(id) else {
            continue;
        };
        match document.get_element_by_id(&format!("shopify-section-{}", id)) {
            Some(target) => target.set_inner_html(markup),
            None => log::warn!("⚠️ Render target #shopify-section-{} no existe en la página", id),
        }
    }
}

fn reveal(element: &Element) {
    let _ = element.class_list().add_2("animate", "active");
}
