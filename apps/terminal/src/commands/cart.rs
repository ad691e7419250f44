//! # Cart Commands
//!
//! `add`, `remove`, `clear` and `cart`. Products are looked up in the
//! loaded product list, so nothing can be added while it is loading or
//! after it failed.

use super::Reply;
use crate::error::AppResult;
use crate::render::render_cart;
use crate::state::AppState;

/// Adds `quantity` of a loaded product.
pub fn add_to_cart(state: &AppState, product_id: i64, quantity: i64) -> AppResult<Reply> {
    state.add_to_cart(product_id, quantity)?;
    Ok(Reply::Continue(Some(format!(
        "Agregado al carrito: producto {} x{}",
        product_id, quantity
    ))))
}

pub fn remove_from_cart(state: &AppState, product_id: i64) -> AppResult<Reply> {
    state.remove_from_cart(product_id)?;
    Ok(Reply::Continue(None))
}

pub fn clear_cart(state: &AppState) -> AppResult<Reply> {
    state.clear_cart()?;
    Ok(Reply::Continue(None))
}

/// Prints every cart line with totals.
pub fn show_cart(state: &AppState) -> AppResult<Reply> {
    let cart = state.cart()?;
    Ok(Reply::Continue(Some(render_cart(&cart))))
}
