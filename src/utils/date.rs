/// Reorders an ISO `yyyy-mm-dd` date into the regional `dd-mm-yyyy` layout.
///
/// Segments are moved verbatim, nothing is parsed or padded. Input that
/// does not split into exactly three hyphen-separated parts is returned
/// unchanged, and empty input yields an empty string.
pub fn format_date_regional(iso_date: &str) -> String {
    if iso_date.is_empty() {
        return String::new();
    }

    let parts: Vec<&str> = iso_date.split('-').collect();
    match parts.as_slice() {
        [year, month, day] => format!("{}-{}-{}", day, month, year),
        _ => iso_date.to_string(),
    }
}
