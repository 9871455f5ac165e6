mod contact;
mod order;
mod product;

pub use contact::*;
pub use order::*;
pub use product::*;
