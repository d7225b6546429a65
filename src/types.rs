use ndarray::{Array1, ArrayView2, CowArray, Ix2};

/// Input table, rows are samples and columns are base variables
pub type TableView<'a, T> = ArrayView2<'a, T>;

/// Evaluated feature column, one value per table row
pub type Column<T> = Array1<T>;

/// Feature matrix borrowed from the fit-time cache or freshly computed
pub type CowArray2<'a, T> = CowArray<'a, T, Ix2>;
