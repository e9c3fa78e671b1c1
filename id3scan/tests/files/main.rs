#![allow(missing_docs)]

mod naming;
mod path;
mod read;
pub(crate) mod util;
