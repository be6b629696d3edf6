use crate::domain::entities::external::ExternalRecord;
use crate::domain::entities::row::{Row, RowKind};

/// Comparison key: lowercase, trimmed, internal whitespace runs collapsed to
/// a single space.
pub fn normalize_key(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Finds the existing member row that plausibly corresponds to an external
/// record. Pass 1 requires both the name and a non-empty institution to
/// match; pass 2 falls back to the name alone. Rows are scanned in
/// collection order and the first hit wins, including when two members carry
/// the same normalized name.
pub fn find_matching_member<'a>(external: &ExternalRecord, rows: &'a [Row]) -> Option<&'a Row> {
    let name = normalize_key(&external.full_name);
    let institution = normalize_key(&external.institution);

    let exact = rows.iter().find(|row| {
        row.kind == RowKind::Member
            && row
                .title
                .as_deref()
                .is_some_and(|title| normalize_key(title) == name)
            && row
                .institution
                .as_deref()
                .filter(|value| !value.is_empty())
                .is_some_and(|value| normalize_key(value) == institution)
    });
    if exact.is_some() {
        return exact;
    }

    rows.iter().find(|row| {
        row.kind == RowKind::Member
            && row
                .title
                .as_deref()
                .is_some_and(|title| normalize_key(title) == name)
    })
}

/// First info row attached to the given member, if any.
pub fn find_associated_info_row<'a>(member_id: &str, rows: &'a [Row]) -> Option<&'a Row> {
    rows.iter()
        .find(|row| row.kind == RowKind::Info && row.parent_id.as_deref() == Some(member_id))
}
