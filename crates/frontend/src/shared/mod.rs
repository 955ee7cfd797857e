pub mod address_bar;
pub mod api_utils;
pub mod date_utils;
pub mod list_utils;
