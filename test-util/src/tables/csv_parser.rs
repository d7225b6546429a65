use crate::tables::Error;

use itertools::{Itertools, process_results};
use std::io::Read;
use symbolic_features::Float;
use symbolic_features::ndarray::Array2;

/// Table from CSV with a header row, one column per base variable
pub(super) fn table_from_reader<T, R>(reader: R) -> Result<Array2<T>, Error>
where
    T: Float,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new().from_reader(reader);
    let ncols = csv_reader.headers()?.len();
    let rows = csv_reader.deserialize::<Vec<T>>();
    let values: Vec<T> = process_results(rows, |rows| rows.flatten().collect_vec())?;
    let nrows = values.len() / ncols.max(1);
    Ok(Array2::from_shape_vec((nrows, ncols), values)?)
}
