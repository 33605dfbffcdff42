// crates/addrverify-core/src/text.rs

/// Separator between the segments of a formatted street address.
pub const SEGMENT_SEPARATOR: &str = ", ";

/// Joins the non-empty address parts with single spaces, keeping their order.
///
/// Empty parts are skipped entirely, so no doubled or dangling spaces appear.
///
/// # Examples
///
/// ```rust
/// use addrverify_core::text::join_address_parts;
///
/// let q = join_address_parts(["12 Smith St", "", "Fitzroy", "VIC", "3065"]);
/// assert_eq!(q, "12 Smith St Fitzroy VIC 3065");
/// ```
pub fn join_address_parts<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lower-cases `s`, then upper-cases the first letter of every word.
///
/// Words are separated by whitespace or hyphens, and a word's first letter
/// is capitalized even after leading digits or punctuation. Casing is
/// Unicode-aware.
///
/// # Examples
///
/// ```rust
/// use addrverify_core::text::title_case;
///
/// assert_eq!(title_case("NORTH MELBOURNE"), "North Melbourne");
/// assert_eq!(title_case("st kilda-east"), "St Kilda-East");
/// assert_eq!(title_case("3RD AVENUE"), "3Rd Avenue");
/// ```
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word_start = true;
    for ch in s.chars() {
        if ch.is_whitespace() || ch == '-' {
            word_start = true;
            out.push(ch);
        } else if word_start && ch.is_alphabetic() {
            out.extend(ch.to_uppercase());
            word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Splits a formatted street address into its non-empty segments.
pub fn split_street_address(s: &str) -> Vec<&str> {
    s.split(SEGMENT_SEPARATOR).filter(|p| !p.is_empty()).collect()
}

/// Confidence as a whole percentage, truncated toward zero. A missing score
/// reads as 0%.
pub fn confidence_percentage(confidence: Option<f64>) -> i32 {
    (confidence.unwrap_or(0.0) * 100.0) as i32
}
