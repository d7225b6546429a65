pub use tables::{Error, TABLES_F64, iter_tables, table};

mod tables;
