use serde::{Deserialize, Serialize};

/// Configuración de rutas del storefront.
///
/// Reemplaza los globals `window.Shopify.routes` / `window.routes` del tema:
/// cada componente recibe esta estructura en su construcción en lugar de
/// depender de estado a nivel de página.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Raíz de las rutas del storefront (con barra final)
    pub root_path: String,
    /// Endpoint AJAX de añadir al carrito
    pub cart_add_path: String,
    /// URL de la página del carrito (redirección en modo no-AJAX)
    pub cart_url: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            root_path: "/".to_string(),
            cart_add_path: "/cart/add.js".to_string(),
            cart_url: "/cart".to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Carga la configuración desde variables de entorno en tiempo de
    /// compilación (inyectadas por build.rs desde .env si existe)
    pub fn from_env() -> Self {
        Self {
            root_path: option_env!("STOREFRONT_ROOT").unwrap_or("/").to_string(),
            cart_add_path: option_env!("CART_ADD_PATH")
                .unwrap_or("/cart/add.js")
                .to_string(),
            cart_url: option_env!("CART_URL").unwrap_or("/cart").to_string(),
        }
    }

    /// URL del endpoint de section rendering para una página de colección.
    ///
    /// `limit` llega ya con el item de lookahead incluido (ver
    /// `PaginationState::begin_fetch`); la vista `enriched` devuelve el
    /// fragmento con las tarjetas `custom-product-card`.
    pub fn collection_page_url(&self, handle: &str, page: u32, limit: u32) -> String {
        format!(
            "{}collections/{}?page={}&limit={}&view=enriched",
            self.root_path, handle, page, limit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_url_incluye_pagina_y_limite() {
        let config = StorefrontConfig::default();
        let url = config.collection_page_url("summer-sale", 3, 5);
        assert_eq!(url, "/collections/summer-sale?page=3&limit=5&view=enriched");
    }

    #[test]
    fn collection_url_respeta_root_configurado() {
        let config = StorefrontConfig {
            root_path: "/fr-ca/".to_string(),
            ..StorefrontConfig::default()
        };
        let url = config.collection_page_url("all", 2, 4);
        assert!(url.starts_with("/fr-ca/collections/all?"));
    }
}
