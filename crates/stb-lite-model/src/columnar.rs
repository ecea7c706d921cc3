// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Column-oriented record sets
//!
//! Each collection keeps one `Vec` per attribute. Rows are only ever added
//! through [`Columnar::push`], which extends every field at once, so all
//! sequences of a collection always have the same length.

/// Common interface of every generated collection
pub trait Columnar: Default {
    /// One row, with every field owned
    type Record;

    /// Append one row, extending every attribute sequence together
    fn push(&mut self, record: Self::Record);

    /// Number of rows
    fn len(&self) -> usize;

    /// True when no rows have been loaded
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check that every attribute sequence has exactly `len()` entries
    fn is_aligned(&self) -> bool;
}

/// Generate a record struct and its column-oriented collection
///
/// No field may be called `len`; that name holds the row count.
///
/// ```ignore
/// columnar! {
///     /// Doc for the collection
///     pub struct StbThings => ThingRecord {
///         /// Doc for the field (copied to the record and the accessor)
///         id: i32,
///     }
/// }
/// ```
macro_rules! columnar {
    (
        $(#[$meta:meta])*
        pub struct $coll:ident => $rec:ident {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty ),+ $(,)?
        }
    ) => {
        #[doc = concat!("One row of [`", stringify!($coll), "`]")]
        #[derive(Clone, Debug, PartialEq, ::serde::Serialize)]
        pub struct $rec {
            $( $(#[$fmeta])* pub $field: $ty, )+
        }

        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, ::serde::Serialize)]
        pub struct $coll {
            #[serde(skip)]
            len: usize,
            $( $field: Vec<$ty>, )+
        }

        impl $coll {
            /// Create an empty collection
            pub fn new() -> Self {
                Self::default()
            }

            /// Number of rows
            pub fn len(&self) -> usize {
                self.len
            }

            /// True when no rows have been loaded
            pub fn is_empty(&self) -> bool {
                self.len == 0
            }

            $(
                $(#[$fmeta])*
                pub fn $field(&self) -> &[$ty] {
                    &self.$field
                }
            )+

            /// Copy row `index` out as a record
            pub fn get(&self, index: usize) -> Option<$rec> {
                if index >= self.len {
                    return None;
                }
                Some($rec {
                    $( $field: self.$field[index].clone(), )+
                })
            }

            /// Iterate rows in document order
            pub fn iter(&self) -> impl Iterator<Item = $rec> + '_ {
                (0..self.len).filter_map(move |i| self.get(i))
            }

            /// Move every row of `other` to the end of this collection
            pub fn append(&mut self, other: $coll) {
                self.len += other.len;
                $( self.$field.extend(other.$field); )+
            }
        }

        impl $crate::columnar::Columnar for $coll {
            type Record = $rec;

            fn push(&mut self, record: $rec) {
                self.len += 1;
                $( self.$field.push(record.$field); )+
            }

            fn len(&self) -> usize {
                self.len
            }

            fn is_aligned(&self) -> bool {
                true $( && self.$field.len() == self.len )+
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::Columnar;

    columnar! {
        /// Test collection
        pub struct Things => ThingRecord {
            /// Identifier
            id: i32,
            /// Label
            label: String,
            /// Values
            values: Vec<f64>,
        }
    }

    fn thing(id: i32) -> ThingRecord {
        ThingRecord {
            id,
            label: format!("T{id}"),
            values: vec![id as f64],
        }
    }

    #[test]
    fn test_push_keeps_alignment() {
        let mut things = Things::new();
        assert!(things.is_empty());
        things.push(thing(1));
        things.push(thing(2));

        assert_eq!(things.len(), 2);
        assert!(things.is_aligned());
        assert_eq!(things.id(), &[1, 2]);
        assert_eq!(things.label()[1], "T2");
    }

    #[test]
    fn test_get_and_iter() {
        let mut things = Things::new();
        things.push(thing(7));

        assert_eq!(things.get(0), Some(thing(7)));
        assert_eq!(things.get(1), None);
        assert_eq!(things.iter().count(), 1);
    }

    #[test]
    fn test_append() {
        let mut a = Things::new();
        a.push(thing(1));
        let mut b = Things::new();
        b.push(thing(2));
        b.push(thing(3));

        a.append(b);
        assert_eq!(a.len(), 3);
        assert!(a.is_aligned());
        assert_eq!(a.id(), &[1, 2, 3]);
    }
}
