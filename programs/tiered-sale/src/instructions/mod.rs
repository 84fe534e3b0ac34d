//! Instruction handlers for TieredSale.

pub mod admin;
pub mod buy;
pub mod fund;
pub mod initialize;
pub mod reclaim;
pub mod views;

pub use admin::*;
pub use buy::*;
pub use fund::*;
pub use initialize::*;
pub use reclaim::*;
pub use views::*;
