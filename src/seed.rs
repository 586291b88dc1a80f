//! Demo accounts, categories and products loaded at startup.

use tracing::info;

use crate::domain::{Account, CategoryCreate, ProductCreate, Role};
use crate::error::MarketError;
use crate::marketplace::Marketplace;

const ACCOUNTS: [(&str, &str, &str, &str, Role); 3] = [
    ("user1", "john_doe", "password123", "john@email.com", Role::Customer),
    ("user2", "jane_smith", "password456", "jane@email.com", Role::Customer),
    ("admin1", "admin", "admin123", "admin@email.com", Role::Admin),
];

const CATEGORIES: [(&str, &str); 3] = [
    ("Electronics", "Electronic devices and gadgets"),
    ("Clothing", "Apparel and fashion items"),
    ("Books", "Books and educational materials"),
];

/// (name, price, category index, description, stock)
const PRODUCTS: [(&str, f64, usize, &str, i64); 5] = [
    ("Smartphone", 25000.0, 0, "Latest model smartphone", 10),
    ("Laptop", 55000.0, 0, "High-performance laptop", 5),
    ("T-Shirt", 500.0, 1, "Cotton t-shirt", 20),
    ("Jeans", 1500.0, 1, "Denim jeans", 15),
    ("Python Book", 800.0, 2, "Learn Python programming", 8),
];

/// Loads the demo data set into an empty marketplace.
///
/// Categories come out as `cat1..cat3` and products as `prod1..prod5`.
pub fn seed_demo_data(market: &mut Marketplace) -> Result<(), MarketError> {
    for (id, username, password, email, role) in ACCOUNTS {
        market.register_account(Account::new(id, username, password, email, role))?;
    }

    let mut category_ids = Vec::with_capacity(CATEGORIES.len());
    for (name, description) in CATEGORIES {
        let id = market.catalog_mut().add_category(CategoryCreate {
            name: name.to_string(),
            description: description.to_string(),
        })?;
        category_ids.push(id);
    }

    for (name, price, category, description, stock) in PRODUCTS {
        market.catalog_mut().add_product(ProductCreate {
            name: name.to_string(),
            price,
            category_id: category_ids[category].clone(),
            description: description.to_string(),
            stock,
        })?;
    }

    info!(
        accounts = ACCOUNTS.len(),
        categories = category_ids.len(),
        products = PRODUCTS.len(),
        "Demo data loaded"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_and_stock() {
        let mut market = Marketplace::new();
        seed_demo_data(&mut market).unwrap();

        let catalog = market.catalog();
        assert_eq!(catalog.list_active_categories().len(), 3);
        let laptop = catalog.get_product("prod2").unwrap();
        assert_eq!(laptop.name, "Laptop");
        assert_eq!(laptop.price, 55000.0);
        assert_eq!(laptop.stock, 5);
        assert_eq!(catalog.listing(catalog.get_product("prod5").unwrap()).category_name, "Books");
    }

    #[test]
    fn test_seeding_twice_fails() {
        let mut market = Marketplace::new();
        seed_demo_data(&mut market).unwrap();
        assert!(seed_demo_data(&mut market).is_err());
    }
}
