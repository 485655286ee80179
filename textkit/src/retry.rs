//! # Re-askable Questions
//!
//! A [`RetryStack`] holds one "ask again" flag per active `ask` block. A block
//! that dislikes the answer it got calls [`RetryStack::ask_again`] and the
//! whole block runs once more after it returns.
//!
//! - Flags are pushed on entry and popped on exit, strictly last-in first-out.
//! - `ask_again` only ever targets the innermost running block.
//! - Calling it several times during one pass has the same effect as once.
//! - Calling it outside of any block does nothing.
//!
//! Every [`Terminal`](crate::utils::Terminal) owns its own stack, so separate
//! conversations never share state.
//!
//! ## Example
//! ```rust
//! use textkit::retry::RetryStack;
//!
//! let mut stack = RetryStack::new();
//! let mut passes = 0;
//! stack.ask(|stack| {
//!     passes += 1;
//!     if passes < 3 {
//!         stack.ask_again();
//!     }
//! });
//! assert_eq!(passes, 3);
//! assert_eq!(stack.depth(), 0);
//! ```
use log::trace;

#[derive(Debug, Default)]
pub struct RetryStack {
    flags: Vec<bool>,
}

impl RetryStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `ask` blocks currently running.
    pub fn depth(&self) -> usize {
        self.flags.len()
    }

    /// Requests another pass of the innermost running `ask` block.
    pub fn ask_again(&mut self) {
        if let Some(top) = self.flags.last_mut() {
            *top = true;
        }
    }

    /// Whether the innermost running block has asked to run again.
    pub fn is_flagged(&self) -> bool {
        self.flags.last().copied().unwrap_or(false)
    }

    /// Runs `block` until a pass completes without calling [`ask_again`].
    ///
    /// [`ask_again`]: RetryStack::ask_again
    pub fn ask<F>(&mut self, mut block: F)
    where
        F: FnMut(&mut RetryStack),
    {
        self.enter();
        loop {
            block(self);
            if !self.take_flag() {
                break;
            }
        }
        self.leave();
    }

    pub(crate) fn enter(&mut self) {
        self.flags.push(false);
        trace!("ask block entered at depth {}", self.flags.len());
    }

    /// Clears the innermost flag and reports whether it was set.
    pub(crate) fn take_flag(&mut self) -> bool {
        match self.flags.last_mut() {
            Some(top) if *top => {
                *top = false;
                trace!("ask block at depth {} runs again", self.flags.len());
                true
            }
            _ => false,
        }
    }

    pub(crate) fn leave(&mut self) {
        trace!("ask block left at depth {}", self.flags.len());
        self.flags.pop();
    }
}
