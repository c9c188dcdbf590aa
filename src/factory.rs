//! Order validation and the family-parameterised entry point.

use crate::machine::BesselFloat;
use crate::modified::ModifiedBessel;
use crate::ordinary::OrdinaryBessel;
use crate::types::{Error, Family};

/// Largest supported order.
pub const MAX_ORDER: u32 = 100;

/// Whether `order` lies in `0..=MAX_ORDER`, i.e. whether
/// [`instance_of`] would accept it.
#[inline]
pub fn accepts_parameter(order: i32) -> bool {
    u32::try_from(order).is_ok_and(|n| n <= MAX_ORDER)
}

/// Convert a requested order into a checked one.
pub(crate) fn validate(order: i32) -> Result<u32, Error> {
    match u32::try_from(order) {
        Ok(n) if n <= MAX_ORDER => Ok(n),
        _ => {
            log::debug!("rejected Bessel order {order}, supported range is 0..={MAX_ORDER}");
            Err(Error::InvalidOrder(order))
        }
    }
}

/// An engine of either family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bessel<T> {
    /// J and Y.
    Ordinary(OrdinaryBessel<T>),
    /// I, K and their scaled forms.
    Modified(ModifiedBessel<T>),
}

impl<T: BesselFloat> Bessel<T> {
    /// The family this engine evaluates.
    pub fn family(&self) -> Family {
        match self {
            Bessel::Ordinary(_) => Family::Ordinary,
            Bessel::Modified(_) => Family::Modified,
        }
    }

    /// The order n.
    pub fn order(&self) -> u32 {
        match self {
            Bessel::Ordinary(e) => e.order(),
            Bessel::Modified(e) => e.order(),
        }
    }

    /// The ordinary engine, if this is one.
    pub fn as_ordinary(&self) -> Option<&OrdinaryBessel<T>> {
        match self {
            Bessel::Ordinary(e) => Some(e),
            Bessel::Modified(_) => None,
        }
    }

    /// The modified engine, if this is one.
    pub fn as_modified(&self) -> Option<&ModifiedBessel<T>> {
        match self {
            Bessel::Modified(e) => Some(e),
            Bessel::Ordinary(_) => None,
        }
    }
}

/// Engine of `family` for `order`.
///
/// Orders 0 and 1 resolve to the constant kernels
/// ([`OrdinaryBessel::ORDER_0`] and friends); higher orders get their
/// per-order constants computed here.
///
/// # Errors
///
/// [`Error::InvalidOrder`] if `order` is negative or above [`MAX_ORDER`].
///
/// # Example
///
/// ```
/// use real_bessel::{Family, factory};
///
/// let engine = factory::instance_of::<f64>(Family::Modified, 3).unwrap();
/// assert_eq!(engine.order(), 3);
/// assert!(factory::instance_of::<f64>(Family::Ordinary, 101).is_err());
/// ```
pub fn instance_of<T: BesselFloat>(family: Family, order: i32) -> Result<Bessel<T>, Error> {
    let n = validate(order)?;
    Ok(match family {
        Family::Ordinary => Bessel::Ordinary(OrdinaryBessel::with_order(n)),
        Family::Modified => Bessel::Modified(ModifiedBessel::with_order(n)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_range() {
        assert!(accepts_parameter(0));
        assert!(accepts_parameter(100));
        assert!(!accepts_parameter(-1));
        assert!(!accepts_parameter(101));
        assert!(!accepts_parameter(i32::MIN));
        assert!(!accepts_parameter(i32::MAX));
    }

    #[test]
    fn validation_matches_predicate() {
        for order in [-5, -1, 0, 1, 2, 50, 100, 101, 1000] {
            assert_eq!(validate(order).is_ok(), accepts_parameter(order));
        }
        assert_eq!(validate(-5), Err(Error::InvalidOrder(-5)));
        assert_eq!(validate(42), Ok(42));
    }

    #[test]
    fn instance_of_builds_requested_family() {
        let b = instance_of::<f64>(Family::Ordinary, 0).unwrap();
        assert_eq!(b, Bessel::Ordinary(OrdinaryBessel::ORDER_0));
        assert_eq!(b.family(), Family::Ordinary);

        let m = instance_of::<f64>(Family::Modified, 1).unwrap();
        assert_eq!(m.as_modified(), Some(&ModifiedBessel::ORDER_1));
        assert_eq!(m.as_ordinary(), None);

        let high = instance_of::<f64>(Family::Modified, 57).unwrap();
        assert_eq!(high.order(), 57);
        assert_eq!(high.family(), Family::Modified);

        assert_eq!(
            instance_of::<f64>(Family::Ordinary, 101),
            Err(Error::InvalidOrder(101))
        );
    }
}
