pub(crate) use collector::*;
pub(crate) use deb822::*;
pub(crate) use entry::*;
pub(crate) use legacy::*;

mod collector;
mod deb822;
mod entry;
mod legacy;
