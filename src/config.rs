use crate::Error;
use crate::hash_table::bucket_layout;

/// Number of buckets allocated by the default constructors.
pub const DEFAULT_INITIAL_CAPACITY: usize = 8;

/// Entry-to-bucket ratio above which the default constructors grow.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Construction parameters for a [`HashTable`](crate::HashTable) or
/// [`HashMap`](crate::HashMap).
///
/// `initial_capacity` is the number of buckets allocated up front. The table
/// doubles its bucket count whenever an insertion would push `len / capacity`
/// above `load_factor`.
///
/// # Examples
///
/// ```rust
/// use chain_hash::Config;
///
/// let config = Config::default()
///     .with_initial_capacity(32)
///     .with_load_factor(1.5);
/// assert!(config.validate().is_ok());
///
/// assert!(Config::default().with_initial_capacity(0).validate().is_err());
/// assert!(Config::default().with_load_factor(f64::NAN).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Number of buckets allocated at construction. Must be positive.
    pub initial_capacity: usize,
    /// Growth threshold. Must be finite and greater than zero.
    pub load_factor: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

impl Config {
    /// Returns this config with a different initial bucket count.
    pub fn with_initial_capacity(self, initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..self
        }
    }

    /// Returns this config with a different load factor.
    pub fn with_load_factor(self, load_factor: f64) -> Self {
        Self {
            load_factor,
            ..self
        }
    }

    /// Checks that both parameters are in range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `initial_capacity` is zero or too
    /// large for a bucket array on this target, or if `load_factor` is NaN,
    /// infinite, or not greater than zero.
    pub fn validate(&self) -> Result<(), Error> {
        if self.initial_capacity == 0 {
            return Err(Error::InvalidArgument {
                argument: "initial_capacity",
                reason: "must be greater than zero",
            });
        }

        if bucket_layout(self.initial_capacity).is_none() {
            return Err(Error::InvalidArgument {
                argument: "initial_capacity",
                reason: "exceeds the maximum bucket array size",
            });
        }

        if !self.load_factor.is_finite() || self.load_factor <= 0.0 {
            return Err(Error::InvalidArgument {
                argument: "load_factor",
                reason: "must be a finite number greater than zero",
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert_eq!(config.initial_capacity, 8);
        assert_eq!(config.load_factor, 0.75);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_capacity() {
        let err = Config::default()
            .with_initial_capacity(0)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidArgument {
                argument: "initial_capacity",
                ..
            }
        ));
    }

    #[test]
    fn rejects_oversized_capacity() {
        let err = Config::default()
            .with_initial_capacity(usize::MAX)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArgument {
                argument: "initial_capacity",
                reason: "exceeds the maximum bucket array size",
            }
        );
    }

    #[test]
    fn rejects_bad_load_factors() {
        for lf in [0.0, -0.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = Config::default().with_load_factor(lf).validate().unwrap_err();
            assert!(
                matches!(
                    err,
                    Error::InvalidArgument {
                        argument: "load_factor",
                        ..
                    }
                ),
                "load factor {lf} should be rejected"
            );
        }
    }

    #[test]
    fn accepts_unusual_but_valid_values() {
        let config = Config::default()
            .with_initial_capacity(1)
            .with_load_factor(4.0);
        assert_eq!(config.validate(), Ok(()));

        let config = Config::default().with_load_factor(0.01);
        assert_eq!(config.validate(), Ok(()));
    }
}
