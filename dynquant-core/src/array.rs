//! Homogeneous collections of quantities sharing one dimension.
//!
//! Storing the dimension once beside a plain `Vec<T>` keeps the memory
//! layout identical to a bare numeric vector, so large arrays pay for
//! dimensional safety only at the API boundary.

use crate::dimensions::Dimensions;
use crate::error::{QuantityError, Result};
use crate::exponent::Exponent;
use crate::fixed_rational::FixedRational;
use crate::quantity::{Quantity, Scalar};

/// A vector of values that all carry the same dimension.
///
/// Reads yield full [`Quantity`] values; bare-value writes through
/// [`set`](Self::set) implicitly adopt the array's dimension, while
/// quantity writes through [`set_quantity`](Self::set_quantity) are
/// rejected so a stray element can never silently change meaning.
///
/// ```
/// use dynquant_core::{Dimensions, QuantityArray};
///
/// let lengths: QuantityArray<f64> =
///     QuantityArray::from_raw(vec![1.0, 2.0, 3.0], Dimensions::length());
/// assert_eq!(lengths.get(1).unwrap().value(), 2.0);
/// assert_eq!(lengths.get(1).unwrap().dimensions(), Dimensions::length());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuantityArray<T: Scalar, R: Exponent = FixedRational> {
    values: Vec<T>,
    dims: Dimensions<R>,
}

impl<T: Scalar, R: Exponent> QuantityArray<T, R> {
    /// Wraps raw values with a shared dimension.
    #[inline]
    pub fn from_raw(values: Vec<T>, dims: Dimensions<R>) -> Self {
        Self { values, dims }
    }

    /// Builds an array by scaling raw values by a reference quantity.
    ///
    /// Every element is multiplied by the quantity's value and the result
    /// adopts the quantity's dimension, so `from_quantity(v, meters(1e-3))`
    /// converts a millimetre-valued vector into metre-dimensioned storage.
    pub fn from_quantity(values: Vec<T>, reference: Quantity<T, R>) -> Self {
        let scale = reference.value();
        Self {
            values: values.into_iter().map(|v| v * scale).collect(),
            dims: reference.dimensions(),
        }
    }

    /// Collects quantities into an array, taking the dimension from the
    /// first element.
    ///
    /// An empty input yields a dimensionless empty array. The remaining
    /// elements' dimensions are **not** checked; callers that cannot
    /// guarantee homogeneity should validate before collecting.
    pub fn from_quantities<I>(quantities: I) -> Self
    where
        I: IntoIterator<Item = Quantity<T, R>>,
    {
        let mut iter = quantities.into_iter();
        match iter.next() {
            Some(first) => {
                let dims = first.dimensions();
                let mut values = vec![first.value()];
                values.extend(iter.map(|q| q.value()));
                Self { values, dims }
            }
            None => Self {
                values: Vec::new(),
                dims: Dimensions::dimensionless(),
            },
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The dimension shared by every element.
    #[inline]
    pub fn dimensions(&self) -> Dimensions<R> {
        self.dims
    }

    /// The element at `index` as a full quantity, or `None` out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Quantity<T, R>> {
        self.values.get(index).map(|&v| Quantity::new(v, self.dims))
    }

    /// Overwrites the element at `index` with a bare value, which adopts
    /// the array's dimension.
    ///
    /// Fails with [`QuantityError::IndexOutOfBounds`] when the slot does not
    /// exist.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.values.len();
        match self.values.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(QuantityError::IndexOutOfBounds { index, len }),
        }
    }

    /// Rejects writing a quantity into the array.
    ///
    /// Always fails: accepting a matching-dimension quantity here would
    /// make the success of a write depend on runtime dimension state, and
    /// a mismatched one could corrupt the array's meaning. Strip the value
    /// first and use [`set`](Self::set) instead.
    pub fn set_quantity(&mut self, index: usize, quantity: &Quantity<T, R>) -> Result<()> {
        Err(QuantityError::InvalidAssignment {
            index,
            value: quantity.to_string(),
        })
    }

    /// A zero-filled array with the same length and dimension.
    pub fn similar(&self) -> Self {
        Self {
            values: vec![T::zero(); self.values.len()],
            dims: self.dims,
        }
    }

    /// Consumes the array, returning the bare values.
    #[inline]
    pub fn ustrip(self) -> Vec<T> {
        self.values
    }

    /// Iterates over the elements as full quantities.
    pub fn iter(&self) -> impl Iterator<Item = Quantity<T, R>> + '_ {
        let dims = self.dims;
        self.values.iter().map(move |&v| Quantity::new(v, dims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dims;

    fn speeds() -> QuantityArray<f64> {
        QuantityArray::from_raw(vec![1.0, 2.0, 3.0], dims!(length: 1, time: -1))
    }

    #[test]
    fn get_attaches_shared_dimension() {
        let arr = speeds();
        let q = arr.get(2).unwrap();
        assert_eq!(q.value(), 3.0);
        assert_eq!(q.dimensions(), dims!(length: 1, time: -1));
        assert!(arr.get(3).is_none());
    }

    #[test]
    fn bare_value_write_adopts_dimension() {
        let mut arr = speeds();
        arr.set(1, 9.0).unwrap();
        assert_eq!(arr.get(1).unwrap().value(), 9.0);
        assert_eq!(arr.get(1).unwrap().dimensions(), arr.dimensions());
    }

    #[test]
    fn out_of_bounds_write_is_reported_as_such() {
        let mut arr = speeds();
        let err = arr.set(7, 1.0).unwrap_err();
        assert!(matches!(
            err,
            QuantityError::IndexOutOfBounds { index: 7, len: 3 }
        ));
    }

    #[test]
    fn quantity_write_is_always_rejected() {
        let mut arr = speeds();
        let q = arr.get(0).unwrap();
        let err = arr.set_quantity(0, &q).unwrap_err();
        assert!(matches!(
            err,
            QuantityError::InvalidAssignment { index: 0, .. }
        ));
        // The array is untouched.
        assert_eq!(arr, speeds());
    }

    #[test]
    fn from_quantity_scales_elements() {
        let millimetres = vec![1000.0, 2500.0];
        let arr = QuantityArray::from_quantity(
            millimetres,
            Quantity::<f64>::new(1e-3, Dimensions::length()),
        );
        assert_eq!(arr.dimensions(), Dimensions::length());
        assert_eq!(arr.get(0).unwrap().value(), 1.0);
        assert_eq!(arr.get(1).unwrap().value(), 2.5);
    }

    #[test]
    fn from_quantities_takes_first_dimension() {
        let arr = QuantityArray::from_quantities(vec![
            Quantity::<f64>::new(1.0, Dimensions::mass()),
            Quantity::new(2.0, Dimensions::mass()),
        ]);
        assert_eq!(arr.len(), 2);
        assert_eq!(arr.dimensions(), Dimensions::mass());

        let empty = QuantityArray::<f64>::from_quantities(Vec::new());
        assert!(empty.is_empty());
        assert!(empty.dimensions().is_dimensionless());
    }

    #[test]
    fn similar_is_zeroed_with_same_shape() {
        let arr = speeds();
        let blank = arr.similar();
        assert_eq!(blank.len(), arr.len());
        assert_eq!(blank.dimensions(), arr.dimensions());
        assert!(blank.iter().all(|q| q.value() == 0.0));
    }

    #[test]
    fn iter_and_ustrip_round_trip() {
        let arr = speeds();
        let collected: Vec<f64> = arr.iter().map(|q| q.value()).collect();
        assert_eq!(collected, vec![1.0, 2.0, 3.0]);
        assert_eq!(arr.ustrip(), vec![1.0, 2.0, 3.0]);
    }
}
