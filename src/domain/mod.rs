//! Business domain entities. Pure data structures with no actor-specific concerns.

pub mod category;
pub mod product;
pub mod transaction;
pub mod user;

pub use category::*;
pub use product::*;
pub use transaction::*;
pub use user::*;
