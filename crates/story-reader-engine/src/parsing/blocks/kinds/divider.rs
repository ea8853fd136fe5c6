/// Horizontal divider line type with owned marker constant.
pub struct Divider;

impl Divider {
    /// The exact content of a divider line once surrounding whitespace is trimmed.
    pub const MARKER: &'static str = "---";

    /// Returns true if the trimmed line is a divider.
    pub fn matches(trimmed: &str) -> bool {
        trimmed == Self::MARKER
    }
}
