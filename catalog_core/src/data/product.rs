use super::category::CategoryId;

/// A unique ID that can be used to refer to a product.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct ProductId(pub u64);

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Product {
    pub id: ProductId,
    /// Display name, e.g. "Bread". The search filter matches against this.
    pub name: String,
    /// The category this product belongs to. Must refer to an existing
    /// category.
    pub category_id: CategoryId,
}
