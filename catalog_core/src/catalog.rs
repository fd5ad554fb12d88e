use thiserror::Error;

use crate::data::{Category, CategoryId, Product, ProductId, User, UserId};

/// The enriched product catalog: every product joined to its category and
/// that category's owning user. Built once at startup and immutable
/// afterwards; the view only ever reads it.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

/// A product together with its resolved category and owning user.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CatalogEntry {
    pub product: Product,
    pub category: Category,
    pub user: User,
}

/// Error type for building a catalog from inconsistent static data.
///
/// A dangling reference is a defect in the data set itself, detected once at
/// startup; the view never sees a partially built catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("product {product:?} references unknown category {category:?}")]
    UnknownCategory { product: ProductId, category: CategoryId },
    #[error("category {category:?} references unknown owner {owner:?}")]
    UnknownOwner { category: CategoryId, owner: UserId },
}

impl Catalog {
    /// Joins each product to its category and that category's owner,
    /// preserving the products' input order. Fails on the first dangling
    /// reference.
    pub fn build(
        users: &[User],
        categories: &[Category],
        products: &[Product],
    ) -> Result<Self, CatalogError> {
        let entries = products
            .iter()
            .map(|product| {
                let category = categories
                    .iter()
                    .find(|category| category.id == product.category_id)
                    .ok_or(CatalogError::UnknownCategory {
                        product: product.id,
                        category: product.category_id,
                    })?;
                let user = users
                    .iter()
                    .find(|user| user.id == category.owner_id)
                    .ok_or(CatalogError::UnknownOwner {
                        category: category.id,
                        owner: category.owner_id,
                    })?;
                Ok(CatalogEntry {
                    product: product.clone(),
                    category: category.clone(),
                    user: user.clone(),
                })
            })
            .collect::<Result<_, _>>()?;

        Ok(Catalog { entries })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod test {
    use crate::data::Sex;

    use super::*;

    fn gen_user(id: u64, name: &str) -> User {
        User { id: UserId(id), name: name.to_string(), sex: Sex::Male }
    }

    fn gen_category(id: u64, title: &str, owner: u64) -> Category {
        Category {
            id: CategoryId(id),
            title: title.to_string(),
            icon: "📦".to_string(),
            owner_id: UserId(owner),
        }
    }

    fn gen_product(id: u64, name: &str, category: u64) -> Product {
        Product { id: ProductId(id), name: name.to_string(), category_id: CategoryId(category) }
    }

    #[test]
    fn join_resolves_category_and_owner_for_every_product() {
        let users = vec![gen_user(1, "Roma"), gen_user(2, "Anna")];
        let categories = vec![gen_category(1, "Grocery", 2), gen_category(2, "Drinks", 1)];
        let products = vec![
            gen_product(1, "Milk", 2),
            gen_product(2, "Bread", 1),
            gen_product(3, "Beer", 2),
        ];

        let catalog = Catalog::build(&users, &categories, &products).unwrap();

        assert_eq!(catalog.len(), 3);
        for (entry, product) in catalog.entries().iter().zip(&products) {
            assert_eq!(entry.product, *product);
            assert_eq!(entry.category.id, product.category_id);
            assert_eq!(entry.user.id, entry.category.owner_id);
        }
    }

    #[test]
    fn join_preserves_product_order() {
        let users = vec![gen_user(1, "Roma")];
        let categories = vec![gen_category(1, "Drinks", 1)];
        let products = vec![
            gen_product(9, "Beer", 1),
            gen_product(3, "Milk", 1),
            gen_product(7, "Juice", 1),
        ];

        let catalog = Catalog::build(&users, &categories, &products).unwrap();

        let ids = catalog.entries().iter().map(|e| e.product.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![ProductId(9), ProductId(3), ProductId(7)]);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let users = vec![gen_user(1, "Roma")];
        let categories = vec![gen_category(1, "Drinks", 1)];
        let products = vec![gen_product(1, "Milk", 1), gen_product(2, "Socks", 5)];

        let err = Catalog::build(&users, &categories, &products).unwrap_err();
        assert_eq!(err, CatalogError::UnknownCategory {
            product: ProductId(2),
            category: CategoryId(5),
        });
    }

    #[test]
    fn unknown_owner_is_rejected() {
        let users = vec![gen_user(1, "Roma")];
        let categories = vec![gen_category(1, "Clothes", 3)];
        let products = vec![gen_product(1, "Jacket", 1)];

        let err = Catalog::build(&users, &categories, &products).unwrap_err();
        assert_eq!(err, CatalogError::UnknownOwner {
            category: CategoryId(1),
            owner: UserId(3),
        });
    }

    #[test]
    fn empty_product_list_builds_empty_catalog() {
        let users = vec![gen_user(1, "Roma")];
        let categories = vec![gen_category(1, "Drinks", 1)];

        let catalog = Catalog::build(&users, &categories, &[]).unwrap();
        assert!(catalog.is_empty());
    }
}
