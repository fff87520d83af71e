use std::{collections::BTreeMap, fmt};

use numlab_core::ScalarFunction;

use super::{Error, MAX_DERIVATIVE_ORDER};

/// The function and its derivatives, keyed by derivative order.
///
/// Order `0` is the function itself and is always present. Orders up to
/// [`MAX_DERIVATIVE_ORDER`] can be registered with [`Derivatives::with`].
pub struct Derivatives<'a> {
    function: Box<dyn ScalarFunction + 'a>,
    by_order: BTreeMap<usize, Box<dyn ScalarFunction + 'a>>,
}

impl<'a> Derivatives<'a> {
    /// Starts a map holding only the function `f`.
    pub fn new(f: impl ScalarFunction + 'a) -> Self {
        Self {
            function: Box::new(f),
            by_order: BTreeMap::new(),
        }
    }

    /// Registers the derivative of the given order, replacing any previous
    /// one. Order `0` replaces the function.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDerivativeOrder`] if `order` exceeds
    /// [`MAX_DERIVATIVE_ORDER`].
    pub fn with(mut self, order: usize, derivative: impl ScalarFunction + 'a) -> Result<Self, Error> {
        if order > MAX_DERIVATIVE_ORDER {
            return Err(Error::UnsupportedDerivativeOrder {
                order,
                max: MAX_DERIVATIVE_ORDER,
            });
        }
        if order == 0 {
            self.function = Box::new(derivative);
        } else {
            self.by_order.insert(order, Box::new(derivative));
        }
        Ok(self)
    }

    /// Returns the function itself.
    #[must_use]
    pub fn function(&self) -> &(dyn ScalarFunction + 'a) {
        &*self.function
    }

    /// Returns the callable for `order`, if registered.
    #[must_use]
    pub fn get(&self, order: usize) -> Option<&(dyn ScalarFunction + 'a)> {
        if order == 0 {
            Some(self.function())
        } else {
            self.by_order.get(&order).map(|f| &**f)
        }
    }

    /// Returns true if `order` is registered.
    #[must_use]
    pub fn contains(&self, order: usize) -> bool {
        order == 0 || self.by_order.contains_key(&order)
    }

    /// Returns the registered orders in ascending order.
    pub fn orders(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::once(0).chain(self.by_order.keys().copied())
    }
}

impl fmt::Debug for Derivatives<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Derivatives")
            .field("orders", &self.orders().collect::<Vec<_>>())
            .finish()
    }
}
