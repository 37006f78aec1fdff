#![doc = include_str!("../README.md")]
#![no_std]
#![deny(clippy::mod_module_files)]

extern crate alloc;

pub mod command;
pub mod errors;
pub(crate) mod lexer;
pub mod operation;
pub mod table_name;
#[cfg(feature = "testing")]
pub mod testing;

// Re-export main types
pub use command::{CommandText, Route};
pub use operation::OperationKind;
pub use table_name::is_valid_table_name;

// Re-export errors
pub use errors::Error;
