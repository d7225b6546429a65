use crate::operators::operator::*;

macro_const! {
    const DOC: &str = r"
User-defined unary operator

Wraps a function pointer under a display name. Two custom operators are equal when both the
name and the function are the same.
";
}

#[doc = DOC!()]
#[derive(Clone, Debug)]
pub struct CustomOperator<T> {
    name: String,
    func: fn(T) -> T,
}

impl<T> CustomOperator<T> {
    pub fn new(name: impl Into<String>, func: fn(T) -> T) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }

    pub const fn doc() -> &'static str {
        DOC
    }
}

impl<T> PartialEq for CustomOperator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && std::ptr::fn_addr_eq(self.func, other.func)
    }
}

impl<T> OperatorPropsTrait for CustomOperator<T> {
    fn name(&self) -> &str {
        &self.name
    }
}

impl<T: Float> OperatorTrait<T> for CustomOperator<T> {
    #[inline]
    fn apply(&self, x: T) -> T {
        (self.func)(x)
    }
}
