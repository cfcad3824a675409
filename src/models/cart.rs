use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mensaje genérico cuando el backend no manda descripción del error
pub const GENERIC_CART_ERROR: &str = "An error occurred while adding to the cart.";

/// Petición de añadir al carrito.
///
/// `sections` y `sections_url` solo viajan cuando hay un colaborador de
/// carrito en la página: el backend devuelve en la misma respuesta los
/// fragmentos renderizados de esas secciones.
#[derive(Debug, Clone, PartialEq)]
pub struct CartAddRequest {
    pub variant_id: String,
    pub quantity: u32,
    pub sections: Option<Vec<String>>,
    pub sections_url: Option<String>,
}

/// Respuesta del endpoint de añadir al carrito.
///
/// El endpoint señala errores de negocio DENTRO del payload JSON (campo
/// `status` presente), no con el código HTTP; el resto de campos del item
/// añadido no nos interesan y serde los ignora.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartAddResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Fragmentos renderizados por id de render target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<HashMap<String, String>>,
}

/// Interpretación del payload: éxito o error de negocio
#[derive(Debug, Clone, PartialEq)]
pub enum CartAddOutcome {
    /// El item se añadió; el payload trae las secciones pedidas (si las hubo)
    Added(CartAddResponse),
    /// Error de negocio (p.ej. sin stock); `description` ya trae fallback
    Rejected { status: u16, description: String },
}

impl CartAddResponse {
    /// Clasifica la respuesta según el contrato del endpoint
    pub fn outcome(self) -> CartAddOutcome {
        match self.status {
            Some(status) => CartAddOutcome::Rejected {
                status,
                description: self
                    .description
                    .filter(|d| !d.is_empty())
                    .unwrap_or_else(|| GENERIC_CART_ERROR.to_string()),
            },
            None => CartAddOutcome::Added(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respuesta_con_status_es_error_de_negocio() {
        let payload: CartAddResponse =
            serde_json::from_str(r#"{"status": 422, "message": "Cart Error", "description": "Sold out"}"#)
                .unwrap();

        assert_eq!(
            payload.outcome(),
            CartAddOutcome::Rejected {
                status: 422,
                description: "Sold out".to_string(),
            }
        );
    }

    #[test]
    fn error_sin_descripcion_usa_mensaje_generico() {
        let payload: CartAddResponse = serde_json::from_str(r#"{"status": 422}"#).unwrap();

        match payload.outcome() {
            CartAddOutcome::Rejected { description, .. } => {
                assert_eq!(description, GENERIC_CART_ERROR)
            }
            other => panic!("se esperaba Rejected, llegó {:?}", other),
        }
    }

    #[test]
    fn respuesta_de_exito_conserva_secciones() {
        let payload: CartAddResponse = serde_json::from_str(
            r#"{
                "id": 44632214278,
                "quantity": 1,
                "sections": {
                    "cart-icon-bubble": "<div class=\"bubble\">1</div>",
                    "cart-notification-product": "<div>Producto</div>"
                }
            }"#,
        )
        .unwrap();

        match payload.outcome() {
            CartAddOutcome::Added(response) => {
                let sections = response.sections.expect("secciones presentes");
                assert_eq!(sections.len(), 2);
                assert!(sections.contains_key("cart-icon-bubble"));
            }
            other => panic!("se esperaba Added, llegó {:?}", other),
        }
    }
}
