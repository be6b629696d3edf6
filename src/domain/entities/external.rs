use crate::infra::import::tokenizer::FieldMap;

/// One line of a foreign roster CSV, before reconciliation. The source
/// carries no identifier that is stable across exports; identity is
/// established later by fuzzy-matching on name and institution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalRecord {
    pub full_name: String,
    pub country_residence: String,
    pub orcid: String,
    pub email: String,
    pub highest_qualification: String,
    pub expertise: String,
    pub institution: String,
    pub project_role: String,
    pub start_date: String,
    pub initial_position: String,
    pub current_position: String,
    pub wgs: String,
}

impl ExternalRecord {
    /// Builds a record from a tokenized field map. Missing columns become
    /// empty strings; extra columns are ignored.
    pub fn from_fields(fields: &FieldMap) -> Self {
        let get = |key: &str| fields.get(key).cloned().unwrap_or_default();
        ExternalRecord {
            full_name: get("full_name"),
            country_residence: get("country_residence"),
            orcid: get("orcid"),
            email: get("email"),
            highest_qualification: get("highest_qualification"),
            expertise: get("expertise"),
            institution: get("institution"),
            project_role: get("project_role"),
            start_date: get("start_date"),
            initial_position: get("initial_position"),
            current_position: get("current_position"),
            wgs: get("wgs"),
        }
    }
}
