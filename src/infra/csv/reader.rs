use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::row::{non_empty, Row, RowKind};
use crate::infra::import::tokenizer::{self, FieldMap};

/// Parses organogram-format CSV text into rows. Column position is
/// irrelevant; values are looked up by header name. Rows with a missing or
/// unrecognized `type` tag are dropped rather than guessed at.
pub fn parse_rows(text: &str) -> Vec<Row> {
    tokenizer::parse(text).iter().filter_map(row_from_fields).collect()
}

pub fn read_rows(path: &Path) -> Result<Vec<Row>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read csv: {}", path.display()))?;
    Ok(parse_rows(&text))
}

fn row_from_fields(fields: &FieldMap) -> Option<Row> {
    let kind = RowKind::parse(fields.get("type").map(String::as_str).unwrap_or(""))?;
    let get = |key: &str| non_empty(fields.get(key).map(String::as_str).unwrap_or(""));

    let mut row = Row::new(
        fields.get("id").cloned().unwrap_or_default(),
        kind,
    );
    row.parent_id = get("parentId");
    row.title = get("title");
    row.acronym = get("acronym");
    row.institution = get("institution");
    row.country = get("country");
    row.picture = get("picture");
    row.pi = get("pi");
    row.link = get("link");
    row.bio = get("bio");
    row.expertise = get("expertise");
    row.role = get("role");
    Some(row)
}
