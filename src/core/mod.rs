pub mod naming;
pub mod ranges;
pub mod time;

pub use crate::domain::model::{RangeInput, TimeFormat, TimeOfDay, DEFAULT_TIME_FORMAT};
pub use crate::utils::error::Result;

/// Removes every whitespace character, counting the ASCII separators
/// `\x1c`..`\x1f` as whitespace too.
pub(crate) fn strip_whitespace(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace() && !('\x1c'..='\x1f').contains(c))
        .collect()
}
