use crate::yaml::QuoteStripping;

const QUOTE: u8 = b'"';

/// Removes the JSON quoting around a single string token.
///
/// Assumes `raw` is exactly one JSON string token; escape sequences inside
/// it are left as they are. Values shorter than two bytes are returned
/// untouched. Under [`QuoteStripping::Verified`] the boundary bytes must both
/// be `"`, otherwise the value is taken as already unquoted.
pub fn strip_quotes(raw: &[u8], policy: QuoteStripping) -> &[u8] {
    if raw.len() < 2 {
        return raw;
    }

    let inner = &raw[1..raw.len() - 1];
    match policy {
        QuoteStripping::Positional => inner,
        QuoteStripping::Verified => {
            if raw[0] == QUOTE && raw[raw.len() - 1] == QUOTE {
                inner
            } else {
                raw
            }
        }
    }
}
