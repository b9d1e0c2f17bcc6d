//! Cleanup of user-typed VAT-IDs.

/// Characters stripped anywhere inside a VAT-ID.
const SEPARATORS: [char; 4] = [' ', '-', '.', ','];

/// Normalize a raw VAT-ID: trim, drop separators, uppercase.
///
/// ```
/// assert_eq!(vatid::normalize_vat_id(" de-27,3616.207"), "DE273616207");
/// ```
pub fn normalize_vat_id(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !SEPARATORS.contains(c))
        .flat_map(char::to_uppercase)
        .collect()
}

/// Split a normalized VAT-ID into `(country_code, vat_number)`.
///
/// The country code is the first two characters. Shorter input yields an empty number.
pub fn split_vat_id(vat_id: &str) -> (&str, &str) {
    let at = vat_id
        .char_indices()
        .nth(2)
        .map_or(vat_id.len(), |(i, _)| i);
    vat_id.split_at(at)
}
