//! Type-erased runtime values handed to a test method.

use std::any::{self, Any};
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

type DebugFn = fn(&(dyn Any + Send + Sync), &mut fmt::Formatter<'_>) -> fmt::Result;

/// One argument of a test invocation.
///
/// Cloning is cheap: the value is shared, so the same inline value can be
/// placed in every vector produced from an array entry.
#[derive(Clone)]
pub struct Argument {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
    debug: DebugFn,
}

impl Argument {
    pub fn new<T>(value: T) -> Self
    where
        T: Any + fmt::Debug + Send + Sync,
    {
        Self {
            value: Arc::new(value),
            type_name: any::type_name::<T>(),
            debug: debug_as::<T>,
        }
    }

    /// Borrow the value if it is a `T`.
    pub fn get<T: Any>(&self) -> Option<&T> {
        (*self.value).downcast_ref::<T>()
    }

    pub fn is<T: Any>(&self) -> bool {
        (*self.value).is::<T>()
    }

    pub fn cloned<T: Any + Clone>(&self) -> Option<T> {
        self.get::<T>().cloned()
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

fn debug_as<T: Any + fmt::Debug>(
    value: &(dyn Any + Send + Sync),
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    match value.downcast_ref::<T>() {
        Some(value) => fmt::Debug::fmt(value, f),
        None => f.write_str("<unknown>"),
    }
}

impl fmt::Debug for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.debug)(&*self.value, f)
    }
}

macro_rules! impl_from_literal {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Argument {
                fn from(value: $ty) -> Self {
                    Argument::new(value)
                }
            }
        )*
    };
}

impl_from_literal!(
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    String,
    serde_json::Value,
);

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Argument::new(value.to_string())
    }
}

/// The ordered arguments of one test invocation, aligned with the
/// method's parameter list.
#[derive(Debug, Clone, Default)]
pub struct ArgumentVector(Vec<Argument>);

impl ArgumentVector {
    pub fn new(arguments: Vec<Argument>) -> Self {
        Self(arguments)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Argument> {
        self.0.get(index)
    }

    /// Borrow the argument at `index` as a `T`.
    pub fn get_as<T: Any>(&self, index: usize) -> Option<&T> {
        self.0.get(index).and_then(Argument::get::<T>)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Argument> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<Argument> {
        self.0
    }
}

impl Index<usize> for ArgumentVector {
    type Output = Argument;

    fn index(&self, index: usize) -> &Argument {
        &self.0[index]
    }
}

impl IntoIterator for ArgumentVector {
    type Item = Argument;
    type IntoIter = std::vec::IntoIter<Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ArgumentVector {
    type Item = &'a Argument;
    type IntoIter = std::slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Argument> for ArgumentVector {
    fn from_iter<I: IntoIterator<Item = Argument>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
