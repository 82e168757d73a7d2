use core::iter::FusedIterator;

use crate::{DiagnosticContext, ElemType, Entry, EntryList, HarnessError, Literal, Payload};

/// One entry picked from every axis of a sweep.
///
/// A combination borrows its entries from the lists and only lives for the action call it is
/// built for.
#[derive(Debug, Clone, PartialEq)]
pub struct Combination<'a, P> {
    index: usize,
    indices: Vec<usize>,
    entries: Vec<&'a Entry<P>>,
}

impl<'a, P> Combination<'a, P> {
    fn new(lists: &[&'a EntryList<P>], index: usize, indices: Vec<usize>) -> Self {
        let entries = lists
            .iter()
            .zip(indices.iter())
            .map(|(list, position)| &list.entries()[*position])
            .collect();

        Self {
            index,
            indices,
            entries,
        }
    }

    /// Position of the combination in the enumeration order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Position of the picked entry on every axis.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of axes.
    pub fn axes(&self) -> usize {
        self.entries.len()
    }

    /// The entry picked on `axis`.
    pub fn entry(&self, axis: usize) -> Option<&'a Entry<P>> {
        self.entries.get(axis).copied()
    }

    /// The payloads in axis order.
    pub fn payloads(&self) -> impl Iterator<Item = &'a P> + '_ {
        self.entries.iter().copied().map(Entry::payload)
    }

    /// The entry names in axis order.
    pub fn names(&self) -> Vec<&'a str> {
        self.entries.iter().copied().map(Entry::name).collect()
    }

    /// The entry names joined with [DELIMITER](crate::DELIMITER).
    pub fn composed_name(&self) -> String {
        self.context().composed_name()
    }

    /// A self-contained description of the combination for failure reports.
    pub fn context(&self) -> DiagnosticContext {
        DiagnosticContext::new(
            self.index,
            self.indices.clone(),
            self.entries
                .iter()
                .map(|entry| entry.name().to_string())
                .collect(),
        )
    }
}

impl<P> Combination<'_, P> {
    fn payload_at(&self, axis: usize) -> Result<&P, HarnessError> {
        self.entries
            .get(axis)
            .map(|entry| entry.payload())
            .ok_or(HarnessError::AxisOutOfRange {
                axis,
                axes: self.entries.len(),
            })
    }

    fn mismatch(&self, axis: usize, expected: &'static str) -> HarnessError {
        HarnessError::PayloadMismatch {
            axis,
            name: self.entries[axis].name().to_string(),
            expected,
        }
    }
}

impl Combination<'_, Payload> {
    /// The element type picked on `axis`.
    pub fn elem(&self, axis: usize) -> Result<ElemType, HarnessError> {
        self.payload_at(axis)?
            .as_type()
            .ok_or_else(|| self.mismatch(axis, "type"))
    }

    /// The literal picked on `axis`.
    pub fn value(&self, axis: usize) -> Result<Literal, HarnessError> {
        self.payload_at(axis)?
            .as_value()
            .ok_or_else(|| self.mismatch(axis, "value"))
    }
}

/// The Cartesian product of an ordered list of axes.
///
/// Combinations are enumerated like nested loops: the first axis varies slowest and the last
/// axis fastest. The product is a pure function of its axes, so every call to
/// [iter](Self::iter) replays the same sequence from the start.
#[derive(Debug, Clone)]
pub struct CartesianProduct<'a, P> {
    lists: Vec<&'a EntryList<P>>,
    len: usize,
}

impl<'a, P> CartesianProduct<'a, P> {
    /// Combine the given axes, in order.
    ///
    /// Without any axis the product holds a single empty combination; with an empty axis it
    /// holds none.
    pub fn new(lists: &[&'a EntryList<P>]) -> Result<Self, HarnessError> {
        let len = if lists.iter().any(|list| list.is_empty()) {
            0
        } else {
            lists
                .iter()
                .try_fold(1usize, |acc, list| acc.checked_mul(list.len()))
                .ok_or_else(|| HarnessError::CombinationOverflow {
                    sizes: lists.iter().map(|list| list.len()).collect(),
                })?
        };

        Ok(Self {
            lists: lists.to_vec(),
            len,
        })
    }

    /// Number of combinations.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the product holds no combination.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of axes.
    pub fn axes(&self) -> usize {
        self.lists.len()
    }

    /// Enumerate every combination from the first one.
    pub fn iter(&self) -> Combinations<'a, P> {
        Combinations {
            lists: self.lists.clone(),
            counter: vec![0; self.lists.len()],
            position: 0,
            len: self.len,
        }
    }

    /// The combination at `index` in the enumeration order.
    pub fn get(&self, index: usize) -> Option<Combination<'a, P>> {
        if index >= self.len {
            return None;
        }

        let mut rest = index;
        let mut indices = vec![0; self.lists.len()];

        for axis in (0..self.lists.len()).rev() {
            let size = self.lists[axis].len();
            indices[axis] = rest % size;
            rest /= size;
        }

        Some(Combination::new(&self.lists, index, indices))
    }
}

impl<'a, 'b, P> IntoIterator for &'b CartesianProduct<'a, P> {
    type Item = Combination<'a, P>;
    type IntoIter = Combinations<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy enumeration of a [CartesianProduct], driven by an odometer over the axis indices.
#[derive(Debug, Clone)]
pub struct Combinations<'a, P> {
    lists: Vec<&'a EntryList<P>>,
    counter: Vec<usize>,
    position: usize,
    len: usize,
}

impl<'a, P> Iterator for Combinations<'a, P> {
    type Item = Combination<'a, P>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.len {
            return None;
        }

        let combination = Combination::new(&self.lists, self.position, self.counter.clone());
        self.position += 1;

        // The last axis is the innermost loop.
        for axis in (0..self.counter.len()).rev() {
            self.counter[axis] += 1;
            if self.counter[axis] < self.lists[axis].len() {
                break;
            }
            self.counter[axis] = 0;
        }

        Some(combination)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.position;
        (remaining, Some(remaining))
    }
}

impl<P> ExactSizeIterator for Combinations<'_, P> {}

impl<P> FusedIterator for Combinations<'_, P> {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn letters() -> EntryList<u32> {
        EntryList::make_named([0, 1], ["A", "B"]).unwrap()
    }

    fn digits() -> EntryList<u32> {
        EntryList::make_named([1, 2, 3], ["1", "2", "3"]).unwrap()
    }

    #[test]
    fn enumerates_outermost_axis_slowest() {
        let letters = EntryList::make_named(["A", "B"], ["A", "B"]).unwrap();
        let digits = EntryList::make_named(["1", "2", "3"], ["1", "2", "3"]).unwrap();
        let product = CartesianProduct::new(&[&letters, &digits]).unwrap();

        let names = product
            .iter()
            .map(|combination| combination.composed_name())
            .collect::<Vec<_>>();

        assert_eq!(product.len(), 6);
        assert_eq!(names, vec!["A,1", "A,2", "A,3", "B,1", "B,2", "B,3"]);
    }

    #[test]
    fn names_match_the_entry_at_each_axis_index() {
        let lhs = digits();
        let mid = EntryList::make_named([10u32, 20], ["ten", "twenty"]).unwrap();
        let rhs = digits();
        let product = CartesianProduct::new(&[&lhs, &mid, &rhs]).unwrap();
        let lists = [&lhs, &mid, &rhs];

        for combination in product.iter() {
            for (axis, name) in combination.names().into_iter().enumerate() {
                let index = combination.indices()[axis];
                assert_eq!(Some(name), lists[axis].entry_at(index).map(Entry::name));
            }
        }
        assert_eq!(product.len(), lhs.len() * mid.len() * rhs.len());
        assert_eq!(product.iter().count(), 18);
    }

    #[test]
    fn empty_axis_yields_nothing() {
        let empty = EntryList::<u32>::make_named([], Vec::<&str>::new()).unwrap();
        let digits = digits();
        let product = CartesianProduct::new(&[&empty, &digits]).unwrap();

        assert!(product.is_empty());
        assert_eq!(product.iter().next(), None);
        assert_eq!(product.get(0), None);
    }

    #[test]
    fn no_axis_yields_one_empty_combination() {
        let product = CartesianProduct::<u32>::new(&[]).unwrap();
        let combinations = product.iter().collect::<Vec<_>>();

        assert_eq!(combinations.len(), 1);
        assert_eq!(combinations[0].axes(), 0);
        assert_eq!(combinations[0].composed_name(), "");
    }

    #[test]
    fn iteration_restarts_from_scratch() {
        let letters = letters();
        let digits = digits();
        let product = CartesianProduct::new(&[&letters, &digits]).unwrap();

        let first = product.iter().map(|c| c.context()).collect::<Vec<_>>();
        let second = product.iter().map(|c| c.context()).collect::<Vec<_>>();

        assert_eq!(first, second);
    }

    #[test]
    fn random_access_matches_enumeration() {
        let letters = letters();
        let digits = digits();
        let product = CartesianProduct::new(&[&digits, &letters, &digits]).unwrap();

        for (index, combination) in product.iter().enumerate() {
            assert_eq!(product.get(index), Some(combination));
        }
        assert_eq!(product.get(product.len()), None);
    }

    #[test]
    fn exact_size_counts_down() {
        let letters = letters();
        let digits = digits();
        let product = CartesianProduct::new(&[&letters, &digits]).unwrap();
        let mut iter = product.iter();

        assert_eq!(iter.len(), 6);
        iter.next();
        assert_eq!(iter.len(), 5);
    }

    #[test]
    fn overflowing_product_is_rejected() {
        let pair = EntryList::make([0u8, 1]);
        let axes = vec![&pair; usize::BITS as usize];

        let result = CartesianProduct::new(&axes);

        assert!(matches!(
            result,
            Err(HarnessError::CombinationOverflow { .. })
        ));
    }

    #[test]
    fn payload_accessors_check_the_kind() {
        let types = EntryList::of_types::<(f32,)>();
        let sizes = EntryList::values([4u32]);
        let product = CartesianProduct::new(&[&types, &sizes]).unwrap();
        let combination = product.get(0).unwrap();

        assert_eq!(combination.elem(0).map(|elem| elem.name()), Ok("f32"));
        assert_eq!(combination.value(1), Ok(Literal::UInt(4)));
        assert_eq!(
            combination.elem(1),
            Err(HarnessError::PayloadMismatch {
                axis: 1,
                name: "4".to_string(),
                expected: "type",
            })
        );
        assert_eq!(
            combination.value(2),
            Err(HarnessError::AxisOutOfRange { axis: 2, axes: 2 })
        );
    }
}
