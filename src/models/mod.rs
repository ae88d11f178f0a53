pub mod boss;
pub mod item;

pub use boss::*;
pub use item::*;
