use std::marker::PhantomData;

pub use derive_enum_impl::{EnumCount, EnumFrom, EnumName};

pub trait EnumCount {
    const COUNT: usize;
}

/// Maps a unit enum to and from its declaration index.
pub trait EnumFrom: Sized {
    fn from_index(i: usize) -> Option<Self>;
    fn index(&self) -> usize;

    /// Every variant, in declaration order.
    fn all() -> EnumFromIter<Self> {
        EnumFromIter(0, PhantomData)
    }
}

pub trait EnumName {
    /// Kebab-case variant name, e.g. `NorthEast` is `"north-east"`.
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone)]
pub struct EnumFromIter<T: EnumFrom>(usize, PhantomData<T>);

impl<T: EnumFrom> Iterator for EnumFromIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        let ret = T::from_index(self.0);
        if ret.is_some() {
            self.0 += 1;
        }
        ret
    }
}
