//! Domain and wire types.
//!
//! These are validated domain objects, kept separate from database row types
//! (rows are private to the `db` modules). Wire DTOs serialize as camelCase,
//! matching the JSON shape the shop's clients already consume.

pub mod cart;
pub mod order;
pub mod product;
pub mod profile;
pub mod user;

pub use cart::{CartItem, ShoppingCart};
pub use order::Order;
pub use product::Product;
pub use profile::{Profile, ProfileUpdate};
pub use user::User;
