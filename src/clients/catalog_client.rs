use crate::catalog::ProductListing;
use crate::session::SessionToken;

market_client!(
    /// Read-only catalog access for signed-in customers.
    CatalogClient
);

client_method!(CatalogClient => fn browse_catalog(token: SessionToken) -> Vec<ProductListing> as BrowseCatalog);
client_method!(CatalogClient => fn product_details(token: SessionToken, product_id: String) -> ProductListing as ProductDetails);
