use std::fmt::{self, Debug, Formatter};

/// A [`Debug`] value that formats itself by calling the wrapped closure, used to nest custom
/// output inside [`Formatter::debug_struct`] fields.
pub struct DebugWith<F: Fn(&mut Formatter<'_>) -> fmt::Result>(F);

/// Creates a [`DebugWith`] from the provided formatting closure.
pub fn debug_with<F: Fn(&mut Formatter<'_>) -> fmt::Result>(func: F) -> DebugWith<F> {
    DebugWith(func)
}

impl<F: Fn(&mut Formatter<'_>) -> fmt::Result> Debug for DebugWith<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (self.0)(f)
    }
}
