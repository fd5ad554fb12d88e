pub mod category;
pub mod product;
pub mod user;

pub use category::{Category, CategoryId};
pub use product::{Product, ProductId};
pub use user::{Sex, User, UserId};
