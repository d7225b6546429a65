use csv_parser::table_from_reader;

use include_dir::{Dir, include_dir};
use lazy_static::lazy_static;
use symbolic_features::Float;
use symbolic_features::ndarray::Array2;

mod csv_parser;
mod types;

pub use types::Error;

const TABLES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/../test-data/tables");

/// All bundled tables with their file stems as names, in file name order
pub fn iter_tables<T>() -> impl Iterator<Item = (String, Array2<T>)>
where
    T: Float,
{
    let mut files: Vec<_> = TABLES_DIR.find("*.csv").unwrap().collect();
    files.sort_by_key(|entry| entry.path().to_owned());
    files.into_iter().map(|entry| {
        let file = entry.as_file().unwrap();
        let name = file
            .path()
            .file_stem()
            .unwrap()
            .to_string_lossy()
            .into_owned();
        let table = table_from_reader(file.contents()).unwrap();
        (name, table)
    })
}

/// Bundled table by its file stem, e.g. `quadratic`
pub fn table<T>(name: &str) -> Result<Array2<T>, Error>
where
    T: Float,
{
    let file = TABLES_DIR
        .get_file(format!("{name}.csv"))
        .ok_or_else(|| Error::UnknownTable(name.to_owned()))?;
    table_from_reader(file.contents())
}

lazy_static! {
    pub static ref TABLES_F64: Vec<(String, Array2<f64>)> = iter_tables().collect();
}
