use thiserror::Error;

/// Errores de las operaciones contra el backend del storefront.
///
/// Los mensajes de `Network` y `Cart` se muestran tal cual al usuario en el
/// contenedor de error inline, por eso van en el idioma del tema.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShopError {
    /// Fallo de transporte (red caída, CORS, etc.)
    #[error("Network error: {0}")]
    Network(String),

    /// Respuesta HTTP no exitosa del endpoint de colecciones
    #[error("HTTP {0}")]
    Status(u16),

    /// Error de negocio del endpoint del carrito (p.ej. sin stock)
    #[error("{description}")]
    Cart { status: u16, description: String },

    /// Cuerpo de respuesta ilegible
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<gloo_net::Error> for ShopError {
    fn from(err: gloo_net::Error) -> Self {
        ShopError::Network(err.to_string())
    }
}
