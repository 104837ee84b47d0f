mod common;
mod domain;
mod list;
mod rule;

pub use common::*;
pub use domain::*;
pub use list::*;
pub use rule::*;
