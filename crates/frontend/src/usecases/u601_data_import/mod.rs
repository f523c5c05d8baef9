pub mod api;
pub mod upload_button;
pub mod view;

pub use upload_button::UploadButton;
pub use view::{DataImportPage, ImportAlert};
