use symbolic_features::ndarray::ShapeError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    CsvError(#[from] csv::Error),
    #[error(transparent)]
    ShapeError(#[from] ShapeError),
    #[error("no bundled table named {0:?}")]
    UnknownTable(String),
}
