//! Debug formatting that keeps pixel buffers out of `{:?}` output.

use std::collections::BTreeMap;
use std::fmt;

const FIRST_N_ELEMENTS: usize = 3;

/// Collections that can be printed in trimmed form
pub trait TrimmedCollection {
    /// Element type
    type Item: fmt::Debug;

    /// All elements as a slice
    fn elements(&self) -> &[Self::Item];
}

impl<T: fmt::Debug> TrimmedCollection for Vec<T> {
    type Item = T;

    fn elements(&self) -> &[T] {
        self
    }
}

impl<T: fmt::Debug, const N: usize> TrimmedCollection for [T; N] {
    type Item = T;

    fn elements(&self) -> &[T] {
        self
    }
}

/// Prints the first few elements followed by the number of remaining ones
pub fn trimmed_collection_fmt<C: TrimmedCollection>(
    n: &C,
    f: &mut fmt::Formatter,
) -> fmt::Result {
    let elements = n.elements();
    let first = &elements[..elements.len().min(FIRST_N_ELEMENTS)];
    let remaining = elements.len() - first.len();

    if remaining == 0 {
        write!(f, "{:?}", first)
    } else {
        write!(f, "{:?} + {} elements", first, remaining)
    }
}

/// Prints a level map as level index to buffer length
pub fn level_map_fmt(map: &BTreeMap<usize, Vec<u8>>, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_map()
        .entries(map.iter().map(|(level, bytes)| (level, bytes.len())))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Wrapper(Vec<u8>);

    impl fmt::Debug for Wrapper {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            trimmed_collection_fmt(&self.0, f)
        }
    }

    #[test]
    fn test_trimmed_output() {
        assert_eq!(format!("{:?}", Wrapper(vec![1, 2])), "[1, 2]");
        assert_eq!(
            format!("{:?}", Wrapper(vec![1, 2, 3, 4, 5])),
            "[1, 2, 3] + 2 elements"
        );
    }
}
