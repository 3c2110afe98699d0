//! Conversion pipeline - validate, assemble the pandoc command, execute

pub mod command;
pub mod convert;
pub mod error;
pub mod layout;
pub mod runner;
pub mod templates;

pub use command::*;
pub use convert::*;
pub use error::*;
pub use layout::*;
pub use runner::*;
pub use templates::*;
