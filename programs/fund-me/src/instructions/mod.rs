pub mod deposit;
pub mod initialize;
pub mod views;
pub mod withdraw;

pub use deposit::*;
pub use initialize::*;
pub use views::*;
pub use withdraw::*;
