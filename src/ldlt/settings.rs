use super::SettingsError;
use crate::algebra::*;
use derive_builder::Builder;

/// Settings for [`Ldlt`](crate::ldlt::Ldlt) and [`LdltN`](crate::ldlt::LdltN)
///
/// Construct with [`LdltSettingsBuilder`], e.g.
/// ```
/// use ldlt::ldlt::LdltSettingsBuilder;
/// let settings = LdltSettingsBuilder::<f64>::default()
///     .check_pivots(true)
///     .pivot_tol(1e-12)
///     .build()
///     .unwrap();
/// assert!(settings.check_pivots);
/// ```

#[derive(Builder, Debug, Clone)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct LdltSettings<T: FloatT> {
    /// reject factorizations producing a pivot with `|D[k]| <= pivot_tol`
    /// or a non-finite pivot.   When `false`, degenerate pivots propagate
    /// non-finite values silently.
    #[builder(default = "false")]
    pub check_pivots: bool,

    /// pivot magnitude threshold used when `check_pivots` is enabled.
    /// Pivots must satisfy `|D[k]| > pivot_tol`, so a NaN value set
    /// directly on the field rejects every factorization.
    #[builder(default = "(0.0).as_T()")]
    pub pivot_tol: T,

    /// log a warning when an unchecked factorization produces a
    /// zero or non-finite pivot
    #[builder(default = "true")]
    pub warn_degenerate: bool,
}

impl<T> Default for LdltSettings<T>
where
    T: FloatT,
{
    fn default() -> LdltSettings<T> {
        LdltSettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T> LdltSettings<T>
where
    T: FloatT,
{
    /// Checks that the settings are valid
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_pivot_tol(self.pivot_tol)
    }

    // threshold passed to the factor kernel, if any
    pub(crate) fn pivot_check(&self) -> Option<T> {
        self.check_pivots.then_some(self.pivot_tol)
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for LdltSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        LdltSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> LdltSettingsBuilder<T>
where
    T: FloatT,
{
    /// check that the specified pivot_tol is valid
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(pivot_tol) = self.pivot_tol {
            validate_pivot_tol(pivot_tol)?;
        }
        Ok(())
    }
}

fn validate_pivot_tol<T: FloatT>(pivot_tol: T) -> Result<(), SettingsError> {
    // NB: written so that NaN fails
    if pivot_tol >= T::zero() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("pivot_tol"))
    }
}

#[test]
fn test_settings_defaults() {
    let settings = LdltSettings::<f64>::default();
    assert!(!settings.check_pivots);
    assert_eq!(settings.pivot_tol, 0.0);
    assert!(settings.warn_degenerate);
    assert_eq!(settings.pivot_check(), None);
    assert!(settings.validate().is_ok());
}

#[test]
fn test_settings_validation() {
    let settings = LdltSettingsBuilder::<f32>::default()
        .check_pivots(true)
        .pivot_tol(1e-6)
        .build()
        .unwrap();
    assert_eq!(settings.pivot_check(), Some(1e-6));

    let err = LdltSettingsBuilder::<f64>::default()
        .pivot_tol(-1.0)
        .build()
        .unwrap_err();
    assert!(matches!(err, LdltSettingsBuilderError::ValidationError(_)));

    assert!(LdltSettingsBuilder::<f64>::default()
        .pivot_tol(f64::NAN)
        .build()
        .is_err());

    // direct modification bypasses the builder, but is caught by validate
    let mut settings = LdltSettings::<f64>::default();
    settings.pivot_tol = -1.0;
    assert_eq!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("pivot_tol"))
    );
}
