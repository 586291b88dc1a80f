use crate::catalog::{CategorySummary, ProductListing};
use crate::domain::{CategoryCreate, Product, ProductCreate, ProductPatch};
use crate::session::SessionToken;

market_client!(
    /// Catalog management. Every call needs an admin session.
    AdminClient
);

client_method!(AdminClient => fn add_product(token: SessionToken, payload: ProductCreate) -> String as AddProduct);
client_method!(AdminClient => fn update_product(token: SessionToken, product_id: String, patch: ProductPatch) -> Product as UpdateProduct);
client_method!(AdminClient => fn delete_product(token: SessionToken, product_id: String) -> () as DeleteProduct);
client_method!(AdminClient => fn add_category(token: SessionToken, payload: CategoryCreate) -> String as AddCategory);
client_method!(AdminClient => fn delete_category(token: SessionToken, category_id: String) -> () as DeleteCategory);
client_method!(AdminClient => fn list_products(token: SessionToken) -> Vec<ProductListing> as ListProducts);
client_method!(AdminClient => fn list_categories(token: SessionToken) -> Vec<CategorySummary> as ListCategories);
