pub mod card;
pub mod list;
pub mod view;

pub use card::*;
pub use list::*;
pub use view::*;
