//! Command implementations

mod calc;
mod convert;
mod export;
mod price;
mod render;
mod search;
mod validate;

pub use calc::calc;
pub use convert::convert;
pub use export::export;
pub use price::price;
pub use render::render;
pub use search::search;
pub use validate::validate;
