// ============================================================================
// STOREFRONT WIDGETS - Componentes de tienda en Rust puro (WASM)
// ============================================================================
// Dos widgets independientes montados sobre el HTML renderizado por el tema:
// - FeaturedCollection: paginación incremental de tarjetas de producto
// - ProductCard: "añadir al carrito" vía AJAX con feedback inline
//
// Arquitectura:
// - components: controladores DOM (glue)
// - viewmodels: máquinas de estado puras (sin web-sys)
// - services: SOLO comunicación HTTP
// - models: payloads del backend (serde)
// - dom: helpers de manipulación DOM
// ============================================================================

pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod services;
pub mod viewmodels;

use wasm_bindgen::prelude::*;

pub use config::StorefrontConfig;
pub use error::ShopError;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook para mejor debugging en consola
    console_error_panic_hook::set_once();

    // Inicializar logging
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🛒 Storefront widgets iniciando...");

    // Configuración explícita de rutas (sin globals de window)
    let config = StorefrontConfig::from_env();

    // Montar todos los componentes presentes en el documento
    components::mount_all(&config)?;

    Ok(())
}
