pub mod sanitize;
pub use sanitize::{
    IntBetween, IsInt, IsReal, IsYesOrNo, OneOf, RealBetween, Rejection, Validate, YesOrNo,
};

pub mod terminal;
pub use terminal::{EofPolicy, PROMPT_MARKER, Terminal, TerminalOptions};

pub mod pacing;
pub use pacing::wait;

pub mod plural;
pub use plural::Plural;
