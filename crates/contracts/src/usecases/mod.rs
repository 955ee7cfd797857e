pub mod common;
pub mod u001_browse_catalog;
