/// Quoted dialogue inline type with owned delimiter constant.
///
/// The quote characters stay visible when rendered, so the same constant is
/// used to re-wrap the text.
pub struct Quoted;

impl Quoted {
    /// The straight double quote that both opens and closes dialogue.
    pub const MARK: u8 = b'"';

    /// The mark as a char, for reconstructing and rendering text.
    pub const MARK_CHAR: char = '"';
}
