/// Section header line type with owned prefix constant.
pub struct Header;

impl Header {
    /// Prefix that opens a header line.
    pub const PREFIX: &'static str = "##";

    /// Returns the header text if the trimmed line is a header.
    ///
    /// The text is whatever follows the prefix, trimmed. Extra `#` characters
    /// are not stripped: `### Part` has the text `# Part`.
    pub fn text(trimmed: &str) -> Option<&str> {
        trimmed.strip_prefix(Self::PREFIX).map(str::trim)
    }
}
