use variadics_please::all_tuples;

use crate::{ElemType, Scalar};

/// A list of scalar types known at compile time, written as a tuple: `(f32, i32, u8)`.
///
/// Turning the tuple into tags keeps the order of the tuple, so a pack can feed an axis of a
/// combinatorial sweep without losing the author's ordering.
pub trait TypePack {
    /// Number of types in the pack.
    const LEN: usize;

    /// The element kinds, in tuple order.
    fn elems() -> Vec<ElemType>;

    /// The display names, in tuple order.
    fn names() -> Vec<&'static str> {
        Self::elems().iter().map(ElemType::name).collect()
    }
}

macro_rules! count {
    () => { 0usize };
    ($head:ident $($tail:ident)*) => { 1usize + count!($($tail)*) };
}

macro_rules! impl_type_pack {
    ($(#[$meta:meta])* $($params:ident),*) => {
        $(#[$meta])*
        impl<$($params: Scalar),*> TypePack for ($($params,)*) {
            const LEN: usize = count!($($params)*);

            fn elems() -> Vec<ElemType> {
                vec![$($params::ELEM),*]
            }
        }
    };
}

all_tuples!(impl_type_pack, 0, 16, T);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FloatKind, IntKind, bf16};
    use pretty_assertions::assert_eq;

    #[test]
    fn tuple_order_is_preserved() {
        type Pack = (f32, i8, bf16);

        assert_eq!(Pack::LEN, 3);
        assert_eq!(
            Pack::elems(),
            vec![
                ElemType::Float(FloatKind::F32),
                ElemType::Int(IntKind::I8),
                ElemType::Float(FloatKind::BF16),
            ]
        );
        assert_eq!(Pack::names(), vec!["f32", "i8", "bf16"]);
    }

    #[test]
    fn empty_pack_has_no_elems() {
        assert_eq!(<() as TypePack>::LEN, 0);
        assert!(<() as TypePack>::elems().is_empty());
    }
}
