use serde::{Deserialize, Serialize};

/// Variant tag for an organogram row. The tag is carried explicitly on every
/// row and is never inferred from which fields happen to be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Group,
    Project,
    Member,
    Info,
}

impl RowKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowKind::Group => "group",
            RowKind::Project => "project",
            RowKind::Member => "member",
            RowKind::Info => "info",
        }
    }

    pub fn parse(value: &str) -> Option<RowKind> {
        match value {
            "group" => Some(RowKind::Group),
            "project" => Some(RowKind::Project),
            "member" => Some(RowKind::Member),
            "info" => Some(RowKind::Info),
            _ => None,
        }
    }
}

/// One node of the organogram. All thirteen canonical columns are carried on
/// every row; which of them are meaningful depends on `kind`. Empty CSV
/// cells map to `None`. The serialized JSON shape matches the persisted
/// snapshot format (`type` tag, `parentId` casing, absent fields omitted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub id: String,
    #[serde(rename = "parentId", skip_serializing_if = "Option::is_none", default)]
    pub parent_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: RowKind,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub acronym: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub institution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub expertise: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub role: Option<String>,
}

impl Row {
    pub fn new(id: impl Into<String>, kind: RowKind) -> Self {
        Row {
            id: id.into(),
            parent_id: None,
            kind,
            title: None,
            acronym: None,
            institution: None,
            country: None,
            picture: None,
            pi: None,
            link: None,
            bio: None,
            expertise: None,
            role: None,
        }
    }

    /// String-keyed accessor over the canonical column names. Unknown names
    /// and absent values both come back as `None`; callers pick their own
    /// fallback ("" on the CSV surface, "-" in display code).
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(&self.id),
            "parentId" => self.parent_id.as_deref(),
            "type" => Some(self.kind.as_str()),
            "title" => self.title.as_deref(),
            "acronym" => self.acronym.as_deref(),
            "institution" => self.institution.as_deref(),
            "country" => self.country.as_deref(),
            "picture" => self.picture.as_deref(),
            "pi" => self.pi.as_deref(),
            "link" => self.link.as_deref(),
            "bio" => self.bio.as_deref(),
            "expertise" => self.expertise.as_deref(),
            "role" => self.role.as_deref(),
            _ => None,
        }
    }
}

/// `None` for empty input, `Some` otherwise. Empty cells and absent fields
/// are interchangeable on the CSV surface.
pub fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
