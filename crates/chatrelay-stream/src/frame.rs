//! Wire line classification.
//!
//! The backend emits two framings for the same payload: SSE-style lines
//! prefixed `data: ` and bare JSON object lines. Everything else on the
//! wire (blank separators, keep-alive comments) is ignorable noise.

/// Classification of one wire line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawFrame<'a> {
    /// SSE-style line; holds the payload after the `data: ` prefix.
    Data(&'a str),
    /// Bare JSON object line; holds the whole trimmed line.
    Bare(&'a str),
    /// Blank line, keep-alive comment, or other protocol noise.
    Ignored,
}

/// Classify one line of the wire stream. Pure classification; JSON decoding
/// is the decoder's step.
pub fn classify(line: &str) -> RawFrame<'_> {
    let line = line.trim();
    if line.is_empty() {
        return RawFrame::Ignored;
    }
    if let Some(payload) = line.strip_prefix("data: ") {
        return RawFrame::Data(payload);
    }
    if line.starts_with('{') {
        return RawFrame::Bare(line);
    }
    RawFrame::Ignored
}
