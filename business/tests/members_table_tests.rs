//! Behaviour of the members table as seen by the presentation layer.

use roster_business::{
    EMPTY_SELECTION_MESSAGE, Member, MemberField, MemberId, MembersTable, PAGE_SIZE, TableError,
    parse_members,
};

const TWO_MEMBERS: &str = r#"[
    {"id": 1, "name": "Amy", "email": "a@x.com", "role": "admin"},
    {"id": 2, "name": "Bo", "email": "b@x.com", "role": "member"}
]"#;

fn roster(count: u64) -> MembersTable {
    let roles = ["admin", "member", "Member", "guest"];
    MembersTable::with_members(
        (1..=count)
            .map(|n| {
                Member::new(
                    n,
                    format!("Person {n}"),
                    format!("person{n}@Mailinator.com"),
                    roles[(n % 4) as usize],
                )
            })
            .collect(),
    )
}

/// End-to-end walk through fetch → search → select → delete.
mod scenario {
    use super::*;

    #[test]
    fn test_search_select_delete() {
        let members = parse_members(TWO_MEMBERS.as_bytes()).expect("fixture should parse");
        let mut table = MembersTable::with_members(members);

        table.search("admin");
        let found: Vec<_> = table.filtered_members().iter().map(|m| m.id).collect();
        assert_eq!(found, [MemberId::from(1_u64)]);
        assert_eq!(table.filtered_members()[0].name, "Amy");

        table.toggle_select(MemberId::from(1_u64));
        assert_eq!(table.delete_selected(), Ok(1));

        assert!(table.filtered_members().is_empty());
        assert!(table.selected_ids().is_empty());
        assert!(table.member(MemberId::from(1_u64)).is_none());
        // Bo was never selected.
        assert_eq!(table.members().len(), 1);
        assert_eq!(table.members()[0].name, "Bo");
    }

    #[test]
    fn test_delete_everything_empties_both_lists() {
        let members = parse_members(TWO_MEMBERS.as_bytes()).expect("fixture should parse");
        let mut table = MembersTable::with_members(members);

        table.toggle_select(MemberId::from(1_u64));
        table.toggle_select(MemberId::from(2_u64));
        assert_eq!(table.delete_selected(), Ok(2));

        assert!(table.members().is_empty());
        assert!(table.filtered_members().is_empty());
        assert!(table.selected_ids().is_empty());
        assert_eq!(table.page_label(), "Page 1 of 0");
    }
}

/// Search returns exactly the members matching in name, email or role.
mod search_tests {
    use super::*;

    #[test]
    fn test_search_result_is_exact() {
        let mut table = roster(40);

        for term in ["member", "MAILINATOR", "person 1", "guest", "zzz", "", "3@"] {
            table.search(term);
            let needle = term.to_lowercase();

            for member in table.filtered_members() {
                assert!(
                    MemberField::ALL
                        .iter()
                        .any(|f| member.field(*f).to_lowercase().contains(&needle)),
                    "{member:?} should match {term:?}"
                );
            }

            let expected = table
                .members()
                .iter()
                .filter(|m| m.matches(&needle))
                .count();
            assert_eq!(table.filtered_members().len(), expected, "term {term:?}");
        }
    }

    #[test]
    fn test_search_preserves_source_order() {
        let mut table = roster(12);
        table.search("member");

        let ids: Vec<_> = table.filtered_members().iter().map(|m| m.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_by_key(|id| id.as_str().parse::<u64>().unwrap_or_default());
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_search_after_delete_does_not_resurrect() {
        let mut table = roster(5);
        table.toggle_select(MemberId::from(2_u64));
        table.delete_selected().expect("one row selected");

        table.search("");
        assert_eq!(table.filtered_members().len(), 4);
        assert!(
            table
                .filtered_members()
                .iter()
                .all(|m| m.id != MemberId::from(2_u64))
        );
    }
}

/// Bulk delete guard and effects.
mod delete_tests {
    use super::*;

    #[test]
    fn test_empty_selection_is_rejected() {
        let mut table = roster(3);
        let before = table.members().to_vec();

        assert_eq!(table.delete_selected(), Err(TableError::EmptySelection));
        assert_eq!(table.members(), before.as_slice());
        assert_eq!(table.filtered_members(), before.as_slice());
        assert_eq!(table.alert(), Some(EMPTY_SELECTION_MESSAGE));
    }

    #[test]
    fn test_selection_survives_across_pages() {
        let mut table = roster(25);
        table.toggle_select(MemberId::from(3_u64));
        table.last_page();
        table.toggle_select(MemberId::from(24_u64));

        assert_eq!(table.selection_label(), "2 row(s) selected.");
        assert_eq!(table.delete_selected(), Ok(2));
        assert_eq!(table.members().len(), 23);
        assert_eq!(table.total_pages(), 3);
    }
}

/// Inline edit with partial patches.
mod edit_tests {
    use super::*;

    #[test]
    fn test_save_changes_only_touched_field() {
        let mut table = roster(3);
        let id = MemberId::from(2_u64);
        let original = table.member(id).cloned().expect("member 2 exists");

        table.begin_edit(id);
        table.update_edit_field(id, MemberField::Name, "X");
        table.save_edit(id);

        let saved = table.member(id).expect("member 2 still exists");
        assert_eq!(saved.name, "X");
        assert_eq!(saved.email, original.email);
        assert_eq!(saved.role, original.role);
        assert_eq!(table.editing_id(), None);
        assert!(table.pending_edit(id).is_none());
    }

    #[test]
    fn test_last_keystroke_wins() {
        let mut table = roster(1);
        let id = MemberId::from(1_u64);

        table.begin_edit(id);
        for partial in ["a", "ad", "adm"] {
            table.update_edit_field(id, MemberField::Role, partial);
        }
        table.save_edit(id);

        assert_eq!(table.member(id).map(|m| m.role.as_str()), Some("adm"));
    }

    #[test]
    fn test_edited_value_is_searchable() {
        let mut table = roster(3);
        let id = MemberId::from(3_u64);

        table.begin_edit(id);
        table.update_edit_field(id, MemberField::Email, "unique@example.org");
        table.save_edit(id);

        table.search("example.org");
        assert_eq!(table.filtered_members().len(), 1);
        assert_eq!(table.filtered_members()[0].id, id);
    }
}

/// Page arithmetic.
mod pagination_tests {
    use super::*;

    #[test]
    fn test_twenty_five_members_make_three_pages() {
        let mut table = roster(25);
        assert_eq!(PAGE_SIZE, 10);
        assert_eq!(table.total_pages(), 3);
        assert_eq!(table.current_items().len(), 10);

        table.go_to_page(3);
        assert_eq!(table.current_items().len(), 5);
        assert_eq!(table.page_label(), "Page 3 of 3");
    }

    #[test]
    fn test_boundaries_are_no_ops() {
        let mut table = roster(25);

        table.prev_page();
        assert_eq!(table.current_page(), 1);

        table.last_page();
        table.next_page();
        assert_eq!(table.current_page(), 3);
    }

    #[test]
    fn test_pages_cover_every_member_once() {
        let mut table = roster(37);
        let mut seen = Vec::new();

        table.first_page();
        loop {
            seen.extend(table.current_items().iter().map(|m| m.id));
            if table.current_page() == table.total_pages() {
                break;
            }
            table.next_page();
        }

        let all: Vec<_> = table.members().iter().map(|m| m.id).collect();
        assert_eq!(seen, all);
    }

    #[test]
    fn test_deleting_last_page_rows_leaves_page_past_end() {
        let mut table = roster(11);
        table.last_page();
        table.toggle_select(MemberId::from(11_u64));
        table.delete_selected().expect("one row selected");

        assert_eq!(table.total_pages(), 1);
        assert_eq!(table.current_page(), 2);
        assert!(table.current_items().is_empty());

        table.prev_page();
        assert_eq!(table.current_items().len(), 10);
    }
}
