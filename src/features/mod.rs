//! Candidate feature variants

mod constant;
pub use constant::Constant;

mod monomial;
pub use monomial::Monomial;

mod product;
pub use product::Product;

mod unary_op;
pub use unary_op::UnaryOp;
