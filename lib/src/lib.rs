#![deny(non_snake_case)]
#![deny(unused_must_use)]

#[macro_use]
mod macros;

mod error;
mod util;
pub mod version;

pub use error::{FormatError, Result};
pub use version::{compare, compare_tokens, DisplayFields, Field, Version};
