// ============================================================================
// SHOP CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace las dos requests del storefront:
// fragmento paginado de colección y añadir al carrito.
// ============================================================================

use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::config::StorefrontConfig;
use crate::error::ShopError;
use crate::models::{CartAddRequest, CartAddResponse};
use crate::viewmodels::PageRequest;

/// Cliente del backend del storefront - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ShopClient {
    config: StorefrontConfig,
}

impl ShopClient {
    pub fn new(config: StorefrontConfig) -> Self {
        Self { config }
    }

    /// Pide al section rendering endpoint la siguiente página de la
    /// colección; devuelve el fragmento HTML crudo.
    pub async fn fetch_collection_page(&self, request: &PageRequest) -> Result<String, ShopError> {
        let url = self
            .config
            .collection_page_url(&request.handle, request.page, request.limit);

        log::info!("📦 Pidiendo página {} de '{}'", request.page, request.handle);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ShopError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ShopError::Status(response.status()));
        }

        response
            .text()
            .await
            .map_err(|e| ShopError::Parse(e.to_string()))
    }

    /// Envía el formulario de añadir al carrito.
    ///
    /// Ojo: este endpoint reporta los errores de negocio DENTRO del JSON
    /// (campo `status`), así que aquí no se inspecciona el código HTTP;
    /// la clasificación la hace `CartAddResponse::outcome`.
    pub async fn add_to_cart(&self, request: &CartAddRequest) -> Result<CartAddResponse, ShopError> {
        let form = build_cart_form(request).map_err(|e| {
            ShopError::Network(format!("No se pudo construir el FormData: {:?}", e))
        })?;

        log::info!("🛒 Añadiendo variante {} al carrito", request.variant_id);

        let response = Request::post(&self.config.cart_add_path)
            .header("X-Requested-With", "XMLHttpRequest")
            .header("Accept", "application/javascript")
            .body(form)
            .map_err(|e| ShopError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ShopError::Network(e.to_string()))?;

        response
            .json::<CartAddResponse>()
            .await
            .map_err(|e| ShopError::Parse(e.to_string()))
    }
}

fn build_cart_form(request: &CartAddRequest) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    form.append_with_str("id", &request.variant_id)?;
    form.append_with_str("quantity", &request.quantity.to_string())?;

    if let Some(sections) = &request.sections {
        form.append_with_str("sections", &sections.join(","))?;
    }
    if let Some(sections_url) = &request.sections_url {
        form.append_with_str("sections_url", sections_url)?;
    }

    Ok(form)
}
