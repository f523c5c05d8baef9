pub mod api_utils;
pub mod charts;
pub mod components;
pub mod date_utils;
pub mod http;
pub mod icons;
pub mod latest;
pub mod page_frame;
pub mod page_standard;
