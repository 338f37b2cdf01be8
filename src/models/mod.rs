pub mod balance;
pub mod order;
pub mod response;
pub mod transaction;

pub use balance::*;
pub use order::*;
pub use response::*;
pub use transaction::*;
