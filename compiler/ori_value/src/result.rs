//! The two-variant result sum.

use std::fmt;

use crate::dynamic::Dynamic;
use crate::error::{fatal, RuntimeError};
use crate::hash::hash_constructor;
use crate::shared::ThreadSafe;
use crate::value::Structural;

/// Constructor tag of `Ok`.
const OK_TAG: u32 = 0;
/// Constructor tag of `Error`.
const ERROR_TAG: u32 = 1;

/// Runtime result: `Ok(value)` or `Error(error)`.
///
/// Hashes are constructor-tagged (`Ok` is tag 0, `Error` tag 1), so
/// `Ok(x)` and `Error(x)` differ even when the payload hashes coincide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultValue<T, E> {
    Ok(T),
    Error(E),
}

impl<T, E> ResultValue<T, E> {
    pub fn is_ok(&self) -> bool {
        matches!(self, ResultValue::Ok(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResultValue::Error(_))
    }

    /// The `Ok` payload.
    ///
    /// Fatal ([`RuntimeError::WrongVariantAccess`]) on an `Error` value.
    pub fn as_ok(&self) -> &T {
        match self.try_as_ok() {
            Ok(value) => value,
            Err(error) => fatal(error),
        }
    }

    /// The `Error` payload.
    ///
    /// Fatal ([`RuntimeError::WrongVariantAccess`]) on an `Ok` value.
    pub fn as_error(&self) -> &E {
        match self.try_as_error() {
            Ok(error) => error,
            Err(fault) => fatal(fault),
        }
    }

    pub fn try_as_ok(&self) -> Result<&T, RuntimeError> {
        match self {
            ResultValue::Ok(value) => Ok(value),
            ResultValue::Error(_) => Err(RuntimeError::WrongVariantAccess { expected: "Ok" }),
        }
    }

    pub fn try_as_error(&self) -> Result<&E, RuntimeError> {
        match self {
            ResultValue::Error(error) => Ok(error),
            ResultValue::Ok(_) => Err(RuntimeError::WrongVariantAccess { expected: "Error" }),
        }
    }
}

impl<T, E> ResultValue<T, E>
where
    T: Structural + Clone + fmt::Debug + ThreadSafe + 'static,
    E: Structural + Clone + fmt::Debug + ThreadSafe + 'static,
{
    /// Erased view: `(ok payload, error payload, is_ok)`. Exactly one payload
    /// slot is populated.
    pub fn to_dynamic(&self) -> (Option<Dynamic>, Option<Dynamic>, bool) {
        match self {
            ResultValue::Ok(value) => (Some(Dynamic::new(value.clone())), None, true),
            ResultValue::Error(error) => (None, Some(Dynamic::new(error.clone())), false),
        }
    }
}

impl<T: Structural, E: Structural> Structural for ResultValue<T, E> {
    fn hash32(&self) -> u32 {
        match self {
            ResultValue::Ok(value) => hash_constructor(OK_TAG, &[value.hash32()]),
            ResultValue::Error(error) => hash_constructor(ERROR_TAG, &[error.hash32()]),
        }
    }

    /// Compares within one variant only; `Ok` never equals `Error`.
    fn equal(&self, other: &Self) -> bool {
        match (self, other) {
            (ResultValue::Ok(a), ResultValue::Ok(b)) => a.equal(b),
            (ResultValue::Error(a), ResultValue::Error(b)) => a.equal(b),
            _ => false,
        }
    }
}

impl<T, E> From<Result<T, E>> for ResultValue<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => ResultValue::Ok(value),
            Err(error) => ResultValue::Error(error),
        }
    }
}

impl<T, E> From<ResultValue<T, E>> for Result<T, E> {
    fn from(result: ResultValue<T, E>) -> Self {
        match result {
            ResultValue::Ok(value) => Ok(value),
            ResultValue::Error(error) => Err(error),
        }
    }
}
