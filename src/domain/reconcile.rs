use std::collections::HashMap;

use crate::domain::entities::external::ExternalRecord;
use crate::domain::entities::role::Role;
use crate::domain::entities::row::{non_empty, Row, RowKind};
use crate::domain::matching::{find_associated_info_row, find_matching_member};

/// Partitioned result of one reconciliation run. Updated rows keep their
/// existing ids; new rows carry freshly allocated ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileOutcome {
    pub new_members: Vec<Row>,
    pub updated_members: Vec<Row>,
    pub new_info_rows: Vec<Row>,
    pub updated_info_rows: Vec<Row>,
}

/// Preview counts for the import dialog, computed without allocating ids or
/// touching any state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub new_members: usize,
    pub updated_members: usize,
    pub new_info_rows: usize,
    pub updated_info_rows: usize,
}

/// One counter serves both member and info allocation within a run, so ids
/// stay contiguous and are never reused across the two row kinds.
struct IdCounter(u64);

impl IdCounter {
    fn next(&mut self) -> String {
        self.0 += 1;
        self.0.to_string()
    }
}

/// Reconciles external roster records against the existing collection. For
/// each record in input order: match an existing member (update it) or mint
/// a new one, then update or mint the associated info row when the record
/// carries expertise.
pub fn reconcile(
    externals: &[ExternalRecord],
    existing: &[Row],
    last_id: u64,
    default_parent_id: Option<&str>,
) -> ReconcileOutcome {
    let mut outcome = ReconcileOutcome::default();
    let mut counter = IdCounter(last_id);

    for external in externals {
        let role = Role::normalize(&external.project_role);

        let member_id = match find_matching_member(external, existing) {
            Some(member) => {
                let mut updated = member.clone();
                updated.title = non_empty(&external.full_name);
                updated.institution = non_empty(&external.institution);
                updated.country = non_empty(&external.country_residence);
                updated.role = Some(role.label().to_string());
                if !external.expertise.is_empty() {
                    updated.expertise = Some(external.expertise.clone());
                }
                let id = updated.id.clone();
                outcome.updated_members.push(updated);
                id
            }
            None => {
                let id = counter.next();
                let mut member = Row::new(id.clone(), RowKind::Member);
                member.parent_id = default_parent_id.map(str::to_string);
                member.title = non_empty(&external.full_name);
                member.role = Some(role.label().to_string());
                member.institution = non_empty(&external.institution);
                member.country = non_empty(&external.country_residence);
                member.expertise = non_empty(&external.expertise);
                outcome.new_members.push(member);
                id
            }
        };

        match find_associated_info_row(&member_id, existing) {
            Some(info) => {
                let mut updated = info.clone();
                if !external.expertise.is_empty() {
                    updated.expertise = Some(external.expertise.clone());
                }
                outcome.updated_info_rows.push(updated);
            }
            None if !external.expertise.is_empty() => {
                let mut info = Row::new(counter.next(), RowKind::Info);
                info.parent_id = Some(member_id);
                info.link = Some(String::new());
                info.bio = Some(String::new());
                info.expertise = Some(external.expertise.clone());
                outcome.new_info_rows.push(info);
            }
            None => {}
        }
    }

    outcome
}

/// Merges an outcome into the canonical collection: existing rows whose id
/// appears among the updated rows are replaced in place, every other row is
/// untouched and keeps its position, and new members then new info rows are
/// appended at the end.
pub fn apply(existing: &[Row], outcome: &ReconcileOutcome) -> Vec<Row> {
    let updated_by_id: HashMap<&str, &Row> = outcome
        .updated_members
        .iter()
        .chain(outcome.updated_info_rows.iter())
        .map(|row| (row.id.as_str(), row))
        .collect();

    let mut merged: Vec<Row> = existing
        .iter()
        .map(|row| match updated_by_id.get(row.id.as_str()) {
            Some(updated) => (*updated).clone(),
            None => row.clone(),
        })
        .collect();
    merged.extend(outcome.new_members.iter().cloned());
    merged.extend(outcome.new_info_rows.iter().cloned());
    merged
}

/// Dry run of the matcher lookups for the preview dialog.
pub fn plan(externals: &[ExternalRecord], existing: &[Row]) -> ImportStats {
    let mut stats = ImportStats::default();

    for external in externals {
        match find_matching_member(external, existing) {
            Some(member) => {
                stats.updated_members += 1;
                match find_associated_info_row(&member.id, existing) {
                    Some(_) => stats.updated_info_rows += 1,
                    None if !external.expertise.is_empty() => stats.new_info_rows += 1,
                    None => {}
                }
            }
            None => {
                stats.new_members += 1;
                // A brand-new member cannot have a pre-existing info row.
                if !external.expertise.is_empty() {
                    stats.new_info_rows += 1;
                }
            }
        }
    }

    stats
}
