pub mod cart;

pub use cart::{CartAddOutcome, CartAddRequest, CartAddResponse, GENERIC_CART_ERROR};
