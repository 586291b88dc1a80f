use crate::cart::CartSummary;
use crate::session::SessionToken;

market_client!(CartClient);

client_method!(CartClient => fn add_to_cart(token: SessionToken, product_id: String, quantity: i64) -> CartSummary as AddToCart);
client_method!(CartClient => fn remove_from_cart(token: SessionToken, product_id: String) -> CartSummary as RemoveFromCart);
client_method!(CartClient => fn update_cart_quantity(token: SessionToken, product_id: String, quantity: i64) -> CartSummary as UpdateCartQuantity);
client_method!(CartClient => fn view_cart(token: SessionToken) -> CartSummary as ViewCart);
client_method!(CartClient => fn clear_cart(token: SessionToken) -> () as ClearCart);
