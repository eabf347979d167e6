//! Workspace-level tests: open/edit/save flows over the memory store

use crate::state::WorkspaceState;
use crate::store::{MemoryPageStore, PageStore};
use pagecraft_editor::SectionMutation;
use pagecraft_model::SectionKind;
use std::sync::Arc;

fn workspace() -> (WorkspaceState, Arc<MemoryPageStore>) {
    let store = Arc::new(MemoryPageStore::new());
    (WorkspaceState::new(store.clone()), store)
}

#[test]
fn test_unknown_page_opens_empty() {
    let (mut ws, _store) = workspace();
    let doc = ws.open("fresh").unwrap();
    assert_eq!(doc.page_id(), "fresh");
    assert!(doc.sections().is_empty());
    assert!(!doc.is_dirty());
}

#[test]
fn test_open_is_idempotent() {
    let (mut ws, _store) = workspace();
    ws.apply(
        "landing",
        &SectionMutation::AppendSection {
            kind: SectionKind::Hero,
        },
    )
    .unwrap();

    // Re-opening returns the same live document, edits intact
    let doc = ws.open("landing").unwrap();
    assert_eq!(doc.sections().len(), 1);
    assert_eq!(doc.version(), 1);
}

#[test]
fn test_saved_page_reloads_in_fresh_workspace() {
    let store = Arc::new(MemoryPageStore::new());
    {
        let mut ws = WorkspaceState::new(store.clone());
        ws.apply(
            "landing",
            &SectionMutation::AppendSection {
                kind: SectionKind::Hero,
            },
        )
        .unwrap();
        ws.apply(
            "landing",
            &SectionMutation::AppendSection {
                kind: SectionKind::Footer,
            },
        )
        .unwrap();
        let notice = ws.save("landing").unwrap();
        assert!(!notice.is_error());
    }

    let mut ws = WorkspaceState::new(store);
    let doc = ws.open("landing").unwrap();
    assert_eq!(doc.sections().len(), 2);
    assert_eq!(doc.sections().items()[0].kind(), SectionKind::Hero);
}

#[test]
fn test_save_clears_dirty_flag() {
    let (mut ws, _store) = workspace();
    ws.apply(
        "landing",
        &SectionMutation::AppendSection {
            kind: SectionKind::Hero,
        },
    )
    .unwrap();
    assert!(ws.open("landing").unwrap().is_dirty());

    ws.save("landing").unwrap();
    assert!(!ws.open("landing").unwrap().is_dirty());
}

#[test]
fn test_failed_save_leaves_local_state_untouched() {
    let (mut ws, store) = workspace();
    ws.apply(
        "landing",
        &SectionMutation::AppendSection {
            kind: SectionKind::Hero,
        },
    )
    .unwrap();
    ws.apply(
        "landing",
        &SectionMutation::AppendSection {
            kind: SectionKind::Footer,
        },
    )
    .unwrap();

    let before = ws.open("landing").unwrap().page();
    let version_before = ws.open("landing").unwrap().version();

    store.reject_writes(true);
    let notice = ws.save("landing").unwrap();
    assert!(notice.is_error());

    // Document unchanged: same sections, same version, still dirty,
    // history still walkable
    let doc = ws.open("landing").unwrap();
    assert_eq!(doc.page(), before);
    assert_eq!(doc.version(), version_before);
    assert!(doc.is_dirty());
    assert!(doc.can_undo());

    // Nothing reached the store either
    assert!(store.load("landing").unwrap().is_none());

    // Retrying after the store recovers just works
    store.reject_writes(false);
    let notice = ws.save("landing").unwrap();
    assert!(!notice.is_error());
    assert_eq!(store.load("landing").unwrap().unwrap(), before);
}

#[test]
fn test_undo_redo_through_workspace() {
    let (mut ws, _store) = workspace();
    ws.apply(
        "landing",
        &SectionMutation::AppendSection {
            kind: SectionKind::Hero,
        },
    )
    .unwrap();

    let (changed, version) = ws.undo("landing").unwrap();
    assert!(changed);
    assert_eq!(version, 2);
    assert!(ws.open("landing").unwrap().sections().is_empty());

    let (changed, _) = ws.redo("landing").unwrap();
    assert!(changed);
    assert_eq!(ws.open("landing").unwrap().sections().len(), 1);

    // Nothing further to redo
    let (changed, _) = ws.redo("landing").unwrap();
    assert!(!changed);
}

#[test]
fn test_rejected_mutation_surfaces_as_error() {
    let (mut ws, _store) = workspace();
    ws.apply(
        "landing",
        &SectionMutation::AppendSection {
            kind: SectionKind::Hero,
        },
    )
    .unwrap();

    let result = ws.apply("landing", &SectionMutation::MoveSection { from: 0, to: 5 });
    assert!(result.is_err());
    assert_eq!(ws.open("landing").unwrap().sections().len(), 1);
}

#[test]
fn test_delete_closes_open_document() {
    let (mut ws, store) = workspace();
    ws.apply(
        "landing",
        &SectionMutation::AppendSection {
            kind: SectionKind::Hero,
        },
    )
    .unwrap();
    ws.save("landing").unwrap();
    assert_eq!(ws.list().unwrap().len(), 1);

    assert!(ws.delete("landing").unwrap());
    assert!(store.load("landing").unwrap().is_none());

    // Reopening starts from scratch, not from the stale document
    let doc = ws.open("landing").unwrap();
    assert!(doc.sections().is_empty());
}
