use crate::{ElemType, HarnessError, Literal, Payload, TypePack};

/// A payload with the name used to identify it in diagnostics.
///
/// The name is advisory: it is never compared or looked up, only printed.
#[derive(new, Debug, Clone, PartialEq)]
pub struct Entry<P> {
    payload: P,
    #[new(into)]
    name: String,
}

impl<P> Entry<P> {
    /// The payload.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// The display name, empty for entries of an unnamed list.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An ordered, immutable axis of a combinatorial sweep.
///
/// The order of the entries is the order in which the axis is enumerated, and entry `i`
/// always carries name `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryList<P = Payload> {
    entries: Vec<Entry<P>>,
}

impl<P> EntryList<P> {
    /// Build a list without names.
    ///
    /// Every entry gets an empty name, so such a list shouldn't be relied on to tell
    /// combinations apart in failure messages.
    pub fn make<I: IntoIterator<Item = P>>(payloads: I) -> Self {
        Self {
            entries: payloads
                .into_iter()
                .map(|payload| Entry::new(payload, String::new()))
                .collect(),
        }
    }

    /// Build a list pairing every payload with the name at the same position.
    ///
    /// Fails when the two sequences have different lengths.
    pub fn make_named<I, N, S>(payloads: I, names: N) -> Result<Self, HarnessError>
    where
        I: IntoIterator<Item = P>,
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let payloads = payloads.into_iter().collect::<Vec<_>>();
        let names = names.into_iter().map(Into::into).collect::<Vec<String>>();

        if payloads.len() != names.len() {
            return Err(HarnessError::NameCountMismatch {
                payloads: payloads.len(),
                names: names.len(),
            });
        }

        Ok(Self {
            entries: payloads
                .into_iter()
                .zip(names)
                .map(|(payload, name)| Entry::new(payload, name))
                .collect(),
        })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of entries, same as [len](Self::len).
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Whether the list has no entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at position `index`.
    pub fn entry_at(&self, index: usize) -> Option<&Entry<P>> {
        self.entries.get(index)
    }

    pub(crate) fn entries(&self) -> &[Entry<P>] {
        &self.entries
    }

    /// Iterate over the entries in order.
    pub fn iter(&self) -> core::slice::Iter<'_, Entry<P>> {
        self.entries.iter()
    }

    /// The names of the entries in order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(Entry::name).collect()
    }

    /// Whether every entry has a non-empty name.
    pub fn is_named(&self) -> bool {
        self.entries.iter().all(|entry| !entry.name.is_empty())
    }
}

impl<P: Clone> EntryList<P> {
    /// A new list holding the entries of `self` followed by those of `other`.
    pub fn concat(&self, other: &Self) -> Self {
        Self {
            entries: self.entries.iter().chain(other.iter()).cloned().collect(),
        }
    }
}

impl EntryList<Payload> {
    /// A type axis named after the canonical name of each kind.
    pub fn types(elems: &[ElemType]) -> Self {
        Self {
            entries: elems
                .iter()
                .map(|elem| Entry::new(Payload::Type(*elem), elem.name()))
                .collect(),
        }
    }

    /// A type axis from a compile-time pack, e.g. `EntryList::of_types::<(f32, i32)>()`.
    pub fn of_types<T: TypePack>() -> Self {
        Self::types(&T::elems())
    }

    /// A type axis with explicit names.
    pub fn named_types<N, S>(elems: &[ElemType], names: N) -> Result<Self, HarnessError>
    where
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::make_named(elems.iter().copied().map(Payload::Type), names)
    }

    /// A value axis named after the printed form of each value.
    pub fn values<I, L>(values: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Literal>,
    {
        Self {
            entries: values
                .into_iter()
                .map(|value| {
                    let value = value.into();
                    Entry::new(Payload::Value(value), value.to_string())
                })
                .collect(),
        }
    }
}

impl<'a, P> IntoIterator for &'a EntryList<P> {
    type Item = &'a Entry<P>;
    type IntoIter = core::slice::Iter<'a, Entry<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{FloatKind, IntKind};

    #[test]
    fn named_list_pairs_payloads_and_names_by_position() {
        let list = EntryList::make_named(['a', 'b', 'c'], ["A", "B", "C"]).unwrap();

        assert_eq!(list.size(), 3);
        assert_eq!(list.entry_at(1).map(Entry::name), Some("B"));
        assert_eq!(list.entry_at(2).map(Entry::payload), Some(&'c'));
        assert_eq!(list.entry_at(3), None);
        assert!(list.is_named());
    }

    #[test]
    fn named_list_rejects_mismatched_counts() {
        let result = EntryList::make_named([1, 2, 3], ["1", "2"]);

        assert_eq!(
            result,
            Err(HarnessError::NameCountMismatch {
                payloads: 3,
                names: 2
            })
        );
    }

    #[test]
    fn unnamed_list_has_empty_names() {
        let list = EntryList::make([1, 2]);

        assert_eq!(list.names(), vec!["", ""]);
        assert!(!list.is_named());
    }

    #[test]
    fn empty_named_list_is_valid() {
        let list = EntryList::<u8>::make_named([], Vec::<String>::new()).unwrap();

        assert!(list.is_empty());
    }

    #[test]
    fn type_and_value_axes_are_named_automatically() {
        let types = EntryList::of_types::<(i32, f32)>();
        let values = EntryList::values([1u32, 4, 16]);

        assert_eq!(types.names(), vec!["i32", "f32"]);
        assert_eq!(
            types.entry_at(1).map(Entry::payload),
            Some(&Payload::Type(ElemType::Float(FloatKind::F32)))
        );
        assert_eq!(values.names(), vec!["1", "4", "16"]);
        assert_eq!(
            values.entry_at(2).and_then(|entry| entry.payload().as_value()),
            Some(Literal::UInt(16))
        );
    }

    #[test]
    fn concat_appends_without_touching_inputs() {
        let base = EntryList::types(&[ElemType::Int(IntKind::I32)]);
        let extra = EntryList::named_types(&[ElemType::Float(FloatKind::F64)], ["double"]).unwrap();

        let full = base.concat(&extra);

        assert_eq!(full.names(), vec!["i32", "double"]);
        assert_eq!(base.len(), 1);
    }
}
