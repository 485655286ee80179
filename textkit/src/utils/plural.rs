//! Plural suffixes for counts in game text.
//!
//! ```rust
//! use textkit::utils::Plural;
//!
//! let guesses: u32 = 3;
//! assert_eq!(format!("{} question{} left", guesses, guesses.s()), "3 questions left");
//! ```

/// `""` for exactly one, `"s"` for anything else (zero included).
pub trait Plural {
    fn s(&self) -> &'static str;
}

macro_rules! impl_plural {
    ($($t:ty),+) => {
        $(
            impl Plural for $t {
                fn s(&self) -> &'static str {
                    if *self == 1 { "" } else { "s" }
                }
            }
        )+
    };
}

impl_plural!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
