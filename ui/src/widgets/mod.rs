mod admin_table;

pub use admin_table::admin_table_panel;
