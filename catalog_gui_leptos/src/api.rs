//! Hard-coded demo data, standing in for the backend the app does not have.
//! The catalog builder treats these collections as read-only input.

use catalog_core::data::{Category, CategoryId, Product, ProductId, Sex, User, UserId};

pub fn users() -> Vec<User> {
    vec![
        User { id: UserId(1), name: "Roma".to_string(), sex: Sex::Male },
        User { id: UserId(2), name: "Anna".to_string(), sex: Sex::Female },
        User { id: UserId(3), name: "Max".to_string(), sex: Sex::Male },
        User { id: UserId(4), name: "John".to_string(), sex: Sex::Male },
    ]
}

pub fn categories() -> Vec<Category> {
    fn category(id: u64, title: &str, icon: &str, owner: u64) -> Category {
        Category {
            id: CategoryId(id),
            title: title.to_string(),
            icon: icon.to_string(),
            owner_id: UserId(owner),
        }
    }

    vec![
        category(1, "Grocery", "🍞", 2),
        category(2, "Drinks", "🍺", 1),
        category(3, "Fruits", "🍏", 2),
        category(4, "Electronics", "💻", 1),
        category(5, "Clothes", "👚", 3),
    ]
}

pub fn products() -> Vec<Product> {
    fn product(id: u64, name: &str, category: u64) -> Product {
        Product { id: ProductId(id), name: name.to_string(), category_id: CategoryId(category) }
    }

    vec![
        product(1, "Milk", 2),
        product(2, "Bread", 1),
        product(3, "Eggs", 1),
        product(4, "Jacket", 5),
        product(5, "Sugar", 1),
        product(6, "Banana", 3),
        product(7, "Beer", 2),
        product(8, "Socks", 5),
        product(9, "Apples", 3),
    ]
}

#[cfg(test)]
mod test {
    use catalog_core::Catalog;

    use super::*;

    // The builder panicking at startup is the only handling dangling
    // references get, so the shipped data must join cleanly.
    #[test]
    fn demo_data_is_internally_consistent() {
        let catalog = Catalog::build(&users(), &categories(), &products()).unwrap();
        assert_eq!(catalog.len(), products().len());
    }
}
