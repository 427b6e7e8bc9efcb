pub mod u501_upload_products;
pub mod u502_delete_all_products;
