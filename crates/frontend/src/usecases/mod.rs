pub mod u601_data_import;
