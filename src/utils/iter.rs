//! Iterator utilities.
use std::cmp::{Ordering, PartialOrd};
use thiserror::Error;

/// Maximum of a collection of items where the maximum might not exist.
pub trait PartialMax {
    type Item;

    /// A maximum element of an iterator when one exists.
    ///
    /// # Errors
    /// Returns a [`PartialMaxError`] if there are no elements or the elements are not comparable.
    fn partial_max(self) -> Result<Self::Item, PartialMaxError>;
}

impl<T, I> PartialMax for I
where
    T: PartialOrd,
    I: Iterator<Item = T>,
{
    type Item = T;

    fn partial_max(mut self) -> Result<Self::Item, PartialMaxError> {
        let max = self.try_fold(None, |acc: Option<T>, x| match acc {
            None => Ok(Some(x)),
            Some(a) => match a.partial_cmp(&x) {
                None => Err(PartialMaxError::Incomparable),
                Some(Ordering::Less) => Ok(Some(x)),
                Some(_) => Ok(Some(a)),
            },
        })?;
        max.ok_or(PartialMaxError::Empty)
    }
}

/// Reason that the maximum does not exist.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum PartialMaxError {
    /// The collection is empty, there is no maximum.
    #[error("empty collection")]
    Empty,
    /// Some pair of elements cannot be compared.
    #[error("incomparable elements")]
    Incomparable,
}

/// The index of a maximal element in a collection, according to a comparison function.
///
/// # Example
/// Get the argmax of an iterator of floats:
///
/// ```
/// use bandit_regret::utils::iter::ArgMaxBy;
///
/// let v = vec![1.0, 2.5, -3.0, 2.5];
/// let argmax = v.into_iter().argmax_by(f64::total_cmp);
/// assert_eq!(argmax, Some(1));
/// ```
pub trait ArgMaxBy {
    type Item;

    /// The index of an element that gives the maximum value from the specified function.
    ///
    /// If several elements are equally maximum, the first index is returned.
    /// If the iterator is empty, None is returned.
    fn argmax_by<F>(self, compare: F) -> Option<usize>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering;
}

impl<I: Iterator> ArgMaxBy for I {
    type Item = <Self as Iterator>::Item;

    fn argmax_by<F>(self, mut compare: F) -> Option<usize>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.enumerate()
            .reduce(|best, item| {
                // Replace only on a strict improvement so that ties keep the earliest index
                if compare(&item.1, &best.1) == Ordering::Greater {
                    item
                } else {
                    best
                }
            })
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod partial_max {
    use super::*;
    use std::f64;

    #[test]
    fn iter_float() {
        assert_eq!(vec![0.0, 3.2, -5.0].into_iter().partial_max(), Ok(3.2));
    }

    #[test]
    fn iter_float_inf() {
        assert_eq!(
            vec![0.0, f64::INFINITY, f64::NEG_INFINITY]
                .into_iter()
                .partial_max(),
            Ok(f64::INFINITY)
        );
    }

    #[test]
    fn iter_float_nan() {
        assert_eq!(
            vec![0.0, f64::NAN, -5.0].into_iter().partial_max(),
            Err(PartialMaxError::Incomparable)
        );
    }

    #[test]
    fn iter_float_empty() {
        assert_eq!(
            Vec::<f64>::new().into_iter().partial_max(),
            Err(PartialMaxError::Empty)
        );
    }
}

#[cfg(test)]
mod argmax_by {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![0.1, 0.5, 0.9], Some(2))]
    #[case(vec![0.9, 0.5, 0.1], Some(0))]
    #[case(vec![0.0, 0.0, 0.0], Some(0))]
    #[case(vec![0.2, 0.7, 0.7], Some(1))]
    #[case(vec![], None)]
    fn first_maximum(#[case] values: Vec<f64>, #[case] expected: Option<usize>) {
        assert_eq!(values.into_iter().argmax_by(f64::total_cmp), expected);
    }
}
