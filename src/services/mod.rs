pub mod shop_client;

pub use shop_client::ShopClient;
