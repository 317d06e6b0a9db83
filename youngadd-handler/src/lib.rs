#![warn(clippy::pedantic)]

//! Request handling for the `youngadd` CGI: turns a query string of the form
//! `intA&intB` into a complete HTTP-style response whose HTML body shows the
//! sum of the two integers.

pub mod query;
pub mod render;
pub mod response;
pub mod serve;

pub use query::{Operands, ParseError};
pub use response::{Response, Status};
pub use serve::serve_query;
