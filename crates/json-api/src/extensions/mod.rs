//! Extension traits

mod depot;
mod path;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use path::PathParamExt as _;
pub(crate) use result::ResultExt as _;
