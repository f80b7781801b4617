//! State of the members table: search, selection, inline edit and paging.
//!
//! Everything the table shows is derived from this one struct, and every
//! change goes through its methods. That keeps `members` and
//! `filtered_members` consistent: a delete or save is applied to both lists
//! in the same call.

use std::any::Any;
use std::collections::{BTreeSet, HashMap, HashSet};

use log::{debug, info, warn};
use roster_states::State;

use crate::error::TableError;
use crate::member::{Member, MemberField, MemberId, MemberPatch};

/// Rows per page.
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone)]
pub struct MembersTable {
    members: Vec<Member>,
    /// Result of the last applied search, in `members` order.
    filtered_members: Vec<Member>,
    selected_ids: BTreeSet<MemberId>,
    /// 1-based.
    current_page: usize,
    editing_id: Option<MemberId>,
    pending_edits: HashMap<MemberId, MemberPatch>,
    /// Text in the search box. Only applied by `apply_search`.
    search_term: String,
    alert: Option<String>,
}

impl Default for MembersTable {
    fn default() -> Self {
        Self {
            members: Vec::new(),
            filtered_members: Vec::new(),
            selected_ids: BTreeSet::new(),
            current_page: 1,
            editing_id: None,
            pending_edits: HashMap::new(),
            search_term: String::new(),
            alert: None,
        }
    }
}

impl State for MembersTable {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl MembersTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_members(members: Vec<Member>) -> Self {
        let mut table = Self::new();
        table.load(members);
        table
    }

    /// Replace the whole list with a fresh fetch result.
    ///
    /// Order is preserved. A repeated id keeps its first occurrence.
    pub fn load(&mut self, members: Vec<Member>) {
        let mut seen = HashSet::with_capacity(members.len());
        let members: Vec<Member> = members
            .into_iter()
            .filter(|member| {
                let first = seen.insert(member.id);
                if !first {
                    warn!("MembersTable: dropping duplicate member id {}", member.id);
                }
                first
            })
            .collect();

        info!("MembersTable: loaded {} members", members.len());

        self.filtered_members = members.clone();
        self.members = members;
        self.selected_ids.clear();
        self.editing_id = None;
        self.pending_edits.clear();
        self.current_page = 1;
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn filtered_members(&self) -> &[Member] {
        &self.filtered_members
    }

    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|member| member.id == id)
    }

    // =====================
    // Search
    // =====================

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Search box buffer, for text inputs.
    pub fn search_term_mut(&mut self) -> &mut String {
        &mut self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Filter by the text currently in the search box.
    pub fn apply_search(&mut self) {
        let term = self.search_term.clone();
        self.filter(&term);
    }

    /// Put `term` in the search box and filter by it.
    pub fn search(&mut self, term: &str) {
        self.search_term = term.to_owned();
        self.filter(term);
    }

    // Leaves `current_page` where it was.
    fn filter(&mut self, term: &str) {
        let needle = term.to_lowercase();
        self.filtered_members = self
            .members
            .iter()
            .filter(|member| member.matches(&needle))
            .cloned()
            .collect();

        debug!(
            "MembersTable: search {:?} matched {} of {} members",
            term,
            self.filtered_members.len(),
            self.members.len()
        );
    }

    // =====================
    // Selection
    // =====================

    /// Check `id` if unchecked, uncheck it otherwise.
    pub fn toggle_select(&mut self, id: MemberId) {
        if self.selected_ids.remove(&id) {
            return;
        }

        if self.member(id).is_some() {
            self.selected_ids.insert(id);
        } else {
            debug!("MembersTable: ignoring selection of unknown member {id}");
        }
    }

    pub fn is_selected(&self, id: MemberId) -> bool {
        self.selected_ids.contains(&id)
    }

    pub fn selected_ids(&self) -> &BTreeSet<MemberId> {
        &self.selected_ids
    }

    pub fn selected_count(&self) -> usize {
        self.selected_ids.len()
    }

    // =====================
    // Deletion
    // =====================

    /// Remove every selected member from both lists and clear the selection.
    ///
    /// With nothing selected the lists are untouched and the advisory is
    /// raised (see [`MembersTable::alert`]). Returns the number of removed
    /// members.
    pub fn delete_selected(&mut self) -> Result<usize, TableError> {
        if self.selected_ids.is_empty() {
            let err = TableError::EmptySelection;
            self.alert = Some(err.to_string());
            return Err(err);
        }

        let selected = std::mem::take(&mut self.selected_ids);
        let removed = self.remove_where(|member| selected.contains(&member.id));

        info!("MembersTable: deleted {removed} selected members");
        Ok(removed)
    }

    /// Remove exactly one member, regardless of the selection.
    ///
    /// Returns `false` if `id` is not in the table.
    pub fn delete_row(&mut self, id: MemberId) -> bool {
        let removed = self.remove_where(|member| member.id == id);
        self.selected_ids.remove(&id);

        if removed > 0 {
            info!("MembersTable: deleted member {id}");
        }
        removed > 0
    }

    fn remove_where(&mut self, doomed: impl Fn(&Member) -> bool) -> usize {
        let before = self.members.len();
        self.members.retain(|member| !doomed(member));
        self.filtered_members.retain(|member| !doomed(member));

        // Edit state for vanished rows would otherwise linger.
        self.pending_edits
            .retain(|id, _| self.members.iter().any(|member| member.id == *id));
        if let Some(id) = self.editing_id
            && !self.members.iter().any(|member| member.id == id)
        {
            self.editing_id = None;
        }

        before - self.members.len()
    }

    // =====================
    // Inline edit
    // =====================

    /// Put `id` in edit mode, discarding any stale pending values for it.
    pub fn begin_edit(&mut self, id: MemberId) {
        self.editing_id = Some(id);
        self.pending_edits.remove(&id);
    }

    /// Leave edit mode and discard the pending values of `id`.
    pub fn cancel_edit(&mut self, id: MemberId) {
        self.editing_id = None;
        self.pending_edits.remove(&id);
    }

    /// Record a changed input value without committing it.
    pub fn update_edit_field(&mut self, id: MemberId, field: MemberField, value: impl Into<String>) {
        self.pending_edits
            .entry(id)
            .or_default()
            .set(field, value.into());
    }

    /// Commit the pending values of `id` to both lists and leave edit mode.
    ///
    /// Fields that were never touched keep their current values.
    pub fn save_edit(&mut self, id: MemberId) {
        self.editing_id = None;

        let Some(patch) = self.pending_edits.remove(&id) else {
            debug!("MembersTable: nothing to save for member {id}");
            return;
        };

        for member in self
            .members
            .iter_mut()
            .chain(self.filtered_members.iter_mut())
            .filter(|member| member.id == id)
        {
            member.apply(&patch);
        }

        info!("MembersTable: saved edits for member {id}");
    }

    pub fn editing_id(&self) -> Option<MemberId> {
        self.editing_id
    }

    pub fn is_editing(&self, id: MemberId) -> bool {
        self.editing_id == Some(id)
    }

    pub fn pending_edit(&self, id: MemberId) -> Option<&MemberPatch> {
        self.pending_edits.get(&id)
    }

    /// What an edit input for `field` of `id` should display: the pending
    /// value if the field was touched, otherwise the member's current value.
    pub fn edit_value(&self, id: MemberId, field: MemberField) -> &str {
        if let Some(value) = self.pending_edit(id).and_then(|patch| patch.get(field)) {
            return value;
        }

        self.member(id).map_or("", |member| member.field(field))
    }

    // =====================
    // Pagination
    // =====================

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.filtered_members.len().div_ceil(PAGE_SIZE)
    }

    /// Rows of the current page. Empty when the page lies past the end of
    /// the filtered list.
    pub fn current_items(&self) -> &[Member] {
        let start = self.current_page.saturating_sub(1) * PAGE_SIZE;
        if start >= self.filtered_members.len() {
            return &[];
        }
        let end = (start + PAGE_SIZE).min(self.filtered_members.len());
        &self.filtered_members[start..end]
    }

    pub fn first_page(&mut self) {
        self.current_page = 1;
    }

    pub fn prev_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    pub fn next_page(&mut self) {
        let total = self.total_pages();
        if total == 0 {
            return;
        }
        self.current_page = (self.current_page + 1).min(total);
    }

    pub fn last_page(&mut self) {
        let total = self.total_pages();
        if total == 0 {
            return;
        }
        self.current_page = total;
    }

    /// Jump to `page`, clamped to the existing pages.
    pub fn go_to_page(&mut self, page: usize) {
        let total = self.total_pages();
        if total == 0 {
            return;
        }
        self.current_page = page.clamp(1, total);
    }

    /// Page numbers shown around the current one: previous, current, next,
    /// limited to pages that exist.
    pub fn page_window(&self) -> Vec<usize> {
        let total = self.total_pages();
        let current = self.current_page;
        (current.saturating_sub(1)..=current + 1)
            .filter(|page| (1..=total).contains(page))
            .collect()
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages())
    }

    pub fn selection_label(&self) -> String {
        format!("{} row(s) selected.", self.selected_count())
    }

    // =====================
    // Advisory
    // =====================

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
