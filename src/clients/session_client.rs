use crate::domain::Credentials;
use crate::session::SessionToken;

market_client!(
    /// Login and logout for customers and admins.
    SessionClient
);

client_method!(SessionClient => fn login_customer(credentials: Credentials) -> SessionToken as LoginCustomer);
client_method!(SessionClient => fn login_admin(credentials: Credentials) -> SessionToken as LoginAdmin);
client_method!(SessionClient => fn logout(token: SessionToken) -> () as Logout);
