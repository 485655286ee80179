//! # Answer Validation
//!
//! The rules a raw answer must satisfy before a prompt accepts it. Each rule
//! implements [`Validate`]: it either turns the answer into a typed value, or
//! returns a [`Rejection`] whose `Display` is the hint shown to the
//! user before asking again.
//!
//! Rules see the line exactly as typed. Number and yes/no rules ignore
//! surrounding whitespace; [`OneOf`] does not.
//!
//! ## Rules
//! - [`OneOf`]: the answer must be one of a fixed, ordered set of options
//! - [`IsInt`] / [`IntBetween`]: a base-10 integer, optionally bounded
//! - [`IsReal`] / [`RealBetween`]: a finite decimal number, optionally bounded
//! - [`IsYesOrNo`]: `yes` or `no`, in any letter case
//!
//! Bounds are inclusive. An inverted range (`lo > hi`) is accepted as given and
//! simply never matches.
//!
//! ## Example
//! ```rust
//! use textkit::utils::{IntBetween, Rejection, Validate};
//!
//! let rule = IntBetween::new(1, 10);
//! assert_eq!(rule.validate("7"), Ok(7));
//! assert_eq!(rule.validate("11"), Err(Rejection::IntOutOfRange(1, 10)));
//! ```
use std::fmt::Display;
use std::ops::RangeInclusive;
use std::str::FromStr;

use thiserror::Error;

/// A rule that a raw answer is checked against.
///
/// `input` is the answer without its line ending, otherwise untouched.
pub trait Validate {
    type Output;

    fn validate(&self, input: &str) -> Result<Self::Output, Rejection>;
}

/// Why an answer was refused. The message is the hint printed to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    #[error("You must choose one of the following: {}", .0.join(", "))]
    NotAnOption(Vec<String>),
    #[error("(Please input an Int i.e. 0, 999, -1)")]
    NotAnInt,
    #[error("(Please input a number between {0} and {1})")]
    IntOutOfRange(i64, i64),
    #[error("(Please input a Double i.e. 3.1415)")]
    NotADouble,
    #[error("(Please input a number between {0} and {1})")]
    RealOutOfRange(f64, f64),
    #[error("(Please input either yes or no)")]
    NotYesOrNo,
}

/// The answer must match one of the given options exactly.
#[derive(Debug, Clone)]
pub struct OneOf {
    options: Vec<String>,
}

impl OneOf {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }
}

impl Validate for OneOf {
    type Output = String;

    fn validate(&self, input: &str) -> Result<String, Rejection> {
        if self.options.iter().any(|option| option == input) {
            Ok(input.to_string())
        } else {
            Err(Rejection::NotAnOption(self.options.clone()))
        }
    }
}

/// The answer must parse as a base-10 integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsInt;

impl Validate for IsInt {
    type Output = i64;

    fn validate(&self, input: &str) -> Result<i64, Rejection> {
        input.trim().parse::<i64>().map_err(|_| Rejection::NotAnInt)
    }
}

/// The answer must be an integer inside `[lo, hi]`.
#[derive(Debug, Clone)]
pub struct IntBetween(RangeInclusive<i64>);

impl IntBetween {
    pub fn new(lo: i64, hi: i64) -> Self {
        Self(lo..=hi)
    }
}

impl From<RangeInclusive<i64>> for IntBetween {
    fn from(range: RangeInclusive<i64>) -> Self {
        Self(range)
    }
}

impl Validate for IntBetween {
    type Output = i64;

    fn validate(&self, input: &str) -> Result<i64, Rejection> {
        let value = IsInt.validate(input)?;
        if self.0.contains(&value) {
            Ok(value)
        } else {
            Err(Rejection::IntOutOfRange(*self.0.start(), *self.0.end()))
        }
    }
}

/// The answer must parse as a finite decimal number.
///
/// `inf` and `NaN` spell valid `f64`s but are not numbers a player can mean,
/// so they are refused.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsReal;

impl Validate for IsReal {
    type Output = f64;

    fn validate(&self, input: &str) -> Result<f64, Rejection> {
        match input.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(Rejection::NotADouble),
        }
    }
}

/// The answer must be a decimal number inside `[lo, hi]`.
#[derive(Debug, Clone)]
pub struct RealBetween(RangeInclusive<f64>);

impl RealBetween {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self(lo..=hi)
    }
}

impl From<RangeInclusive<f64>> for RealBetween {
    fn from(range: RangeInclusive<f64>) -> Self {
        Self(range)
    }
}

impl Validate for RealBetween {
    type Output = f64;

    fn validate(&self, input: &str) -> Result<f64, Rejection> {
        let value = IsReal.validate(input)?;
        if self.0.contains(&value) {
            Ok(value)
        } else {
            Err(Rejection::RealOutOfRange(*self.0.start(), *self.0.end()))
        }
    }
}

/// A yes or no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YesOrNo {
    Yes,
    No,
}

impl YesOrNo {
    pub fn is_yes(self) -> bool {
        self == YesOrNo::Yes
    }
}

impl FromStr for YesOrNo {
    type Err = Rejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yes" => Ok(YesOrNo::Yes),
            "no" => Ok(YesOrNo::No),
            _ => Err(Rejection::NotYesOrNo),
        }
    }
}

impl Display for YesOrNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yes => write!(f, "yes"),
            Self::No => write!(f, "no"),
        }
    }
}

impl From<YesOrNo> for bool {
    fn from(answer: YesOrNo) -> Self {
        answer.is_yes()
    }
}

impl From<bool> for YesOrNo {
    fn from(value: bool) -> Self {
        if value { YesOrNo::Yes } else { YesOrNo::No }
    }
}

/// The answer must be `yes` or `no`, ignoring case.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsYesOrNo;

impl Validate for IsYesOrNo {
    type Output = YesOrNo;

    fn validate(&self, input: &str) -> Result<YesOrNo, Rejection> {
        input.trim().parse()
    }
}
