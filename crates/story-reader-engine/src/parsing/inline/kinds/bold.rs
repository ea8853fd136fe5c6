/// Bold inline type with owned delimiter constant.
pub struct Bold;

impl Bold {
    /// The double asterisk that both opens and closes a bold run.
    pub const MARKER: &'static [u8] = b"**";

    /// The marker as a string, for reconstructing source text.
    pub const MARKER_STR: &'static str = "**";
}
