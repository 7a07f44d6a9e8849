pub mod order_import;
