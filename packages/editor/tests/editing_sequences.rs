//! Tests for complete editing sequences
//!
//! This covers:
//! - Reorder + duplicate + remove chains
//! - Undo/redo across mixed mutations
//! - Selection behavior through the whole flow
//! - Live drag gestures
//! - Document integrity after rejected operations

use pagecraft_editor::{FieldMutation, FieldPatch, FormEditor, PageDocument, SectionMutation};
use pagecraft_model::{FieldType, SectionContent, SectionKind};

fn doc_abc() -> PageDocument {
    let mut doc = PageDocument::new("landing");
    for kind in [
        SectionKind::Hero,
        SectionKind::Features,
        SectionKind::Footer,
    ] {
        doc.apply(&SectionMutation::AppendSection { kind }).unwrap();
    }
    doc
}

fn order(doc: &PageDocument) -> Vec<String> {
    doc.sections()
        .items()
        .iter()
        .map(|s| s.id.clone())
        .collect()
}

#[test]
fn test_move_duplicate_remove_sequence() {
    let mut doc = doc_abc();
    let ids = order(&doc);
    let (a, b, c) = (ids[0].clone(), ids[1].clone(), ids[2].clone());

    // [A,B,C] --move(0,2)--> [B,C,A]
    doc.apply(&SectionMutation::MoveSection { from: 0, to: 2 })
        .unwrap();
    assert_eq!(order(&doc), vec![b.clone(), c.clone(), a.clone()]);

    // Duplicate C: the copy sits immediately after its source
    doc.apply(&SectionMutation::DuplicateSection {
        section_id: c.clone(),
    })
    .unwrap();
    let after_dup = order(&doc);
    assert_eq!(after_dup.len(), 4);
    assert_eq!(after_dup[1], c);
    let copy = after_dup[2].clone();
    assert_ne!(copy, c);
    assert_eq!(after_dup[3], a);

    // Remove B while B is selected: selection clears
    doc.select(&b);
    doc.apply(&SectionMutation::RemoveSection {
        section_id: b.clone(),
    })
    .unwrap();
    assert_eq!(order(&doc), vec![c, copy, a]);
    assert!(doc.selected_id().is_none());
}

#[test]
fn test_undo_walks_back_through_the_sequence() {
    let mut doc = doc_abc();
    let initial = order(&doc);

    doc.apply(&SectionMutation::MoveSection { from: 0, to: 2 })
        .unwrap();
    let moved = order(&doc);

    doc.apply(&SectionMutation::RemoveSection {
        section_id: moved[0].clone(),
    })
    .unwrap();
    assert_eq!(doc.sections().len(), 2);

    assert!(doc.undo());
    assert_eq!(order(&doc), moved);

    assert!(doc.undo());
    assert_eq!(order(&doc), initial);

    assert!(doc.redo());
    assert_eq!(order(&doc), moved);
}

#[test]
fn test_mutation_after_undo_truncates_redo() {
    let mut doc = doc_abc();

    doc.apply(&SectionMutation::MoveSection { from: 0, to: 1 })
        .unwrap();
    doc.undo();
    assert!(doc.can_redo());

    // A fresh mutation invalidates the undone future
    doc.apply(&SectionMutation::AppendSection {
        kind: SectionKind::Cta,
    })
    .unwrap();
    assert!(!doc.can_redo());
    assert!(!doc.redo());
}

#[test]
fn test_content_edits_are_undoable() {
    let mut doc = doc_abc();
    let hero_id = order(&doc)[0].clone();

    doc.apply(&SectionMutation::ReplaceContent {
        section_id: hero_id.clone(),
        content: SectionContent::Hero {
            heading: "Launch week".to_string(),
            subheading: "Everything new, all at once.".to_string(),
            cta_label: "See what shipped".to_string(),
            cta_url: "/launch".to_string(),
        },
    })
    .unwrap();

    let heading = |doc: &PageDocument| match &doc.sections().get(&hero_id).unwrap().content {
        SectionContent::Hero { heading, .. } => heading.clone(),
        other => panic!("unexpected content: {other:?}"),
    };
    assert_eq!(heading(&doc), "Launch week");

    doc.undo();
    assert_eq!(heading(&doc), "Your product, explained");

    doc.redo();
    assert_eq!(heading(&doc), "Launch week");
}

#[test]
fn test_visibility_and_lock_toggles_snapshot() {
    let mut doc = doc_abc();
    let hero_id = order(&doc)[0].clone();

    doc.apply(&SectionMutation::SetVisibility {
        section_id: hero_id.clone(),
        visible: false,
    })
    .unwrap();
    assert!(!doc.sections().get(&hero_id).unwrap().visible);

    doc.undo();
    assert!(doc.sections().get(&hero_id).unwrap().visible);
}

#[test]
fn test_locked_section_survives_drag_attempts() {
    let mut doc = doc_abc();
    let footer_id = order(&doc)[2].clone();
    doc.apply(&SectionMutation::SetLocked {
        section_id: footer_id,
        locked: true,
    })
    .unwrap();

    let before = order(&doc);

    // Starting a drag on the locked section fails outright
    assert!(doc.begin_drag(2).is_err());

    // A direct move with the locked section as source fails too
    assert!(doc
        .apply(&SectionMutation::MoveSection { from: 2, to: 0 })
        .is_err());
    assert_eq!(order(&doc), before);
}

#[test]
fn test_full_drag_gesture_then_undo_all() {
    let mut doc = doc_abc();
    let initial = order(&doc);
    let dragged = initial[2].clone();

    // Drag the footer from the bottom to the top, crossing each index
    doc.begin_drag(2).unwrap();
    doc.drag_over(1).unwrap();
    doc.drag_over(0).unwrap();
    doc.end_drag();
    assert_eq!(order(&doc)[0], dragged);

    // Each crossed index was one committed move
    doc.undo();
    assert_eq!(order(&doc)[1], dragged);
    doc.undo();
    assert_eq!(order(&doc), initial);
}

#[test]
fn test_form_fields_roundtrip_through_section_content() -> anyhow::Result<()> {
    let mut doc = PageDocument::new("landing");
    doc.apply(&SectionMutation::AppendSection {
        kind: SectionKind::Form,
    })?;
    let form_id = order(&doc)[0].clone();

    // Pull the field list out of the form section and edit it
    let (heading, submit_label, fields) = match &doc.sections().get(&form_id).unwrap().content {
        SectionContent::Form {
            heading,
            submit_label,
            fields,
        } => (heading.clone(), submit_label.clone(), fields.clone()),
        other => panic!("unexpected content: {other:?}"),
    };

    let mut editor = FormEditor::from_fields(fields);
    editor.apply(&FieldMutation::AppendField {
        field_type: FieldType::Text,
    })?;
    let name_id = editor.fields()[1].id.clone();
    editor.apply(&FieldMutation::UpdateField {
        field_id: name_id,
        patch: FieldPatch {
            label: Some("Your name".to_string()),
            required: Some(true),
            ..FieldPatch::default()
        },
    })?;
    editor.apply(&FieldMutation::MoveField { from: 1, to: 0 })?;

    // Commit the edited list back as one content replacement
    doc.apply(&SectionMutation::ReplaceContent {
        section_id: form_id.clone(),
        content: SectionContent::Form {
            heading,
            submit_label,
            fields: editor.into_fields(),
        },
    })?;

    match &doc.sections().get(&form_id).unwrap().content {
        SectionContent::Form { fields, .. } => {
            assert_eq!(fields.len(), 2);
            assert_eq!(fields[0].label, "Your name");
            assert!(fields[0].required);
            assert_eq!(fields[1].field_type, FieldType::Email);
        }
        other => panic!("unexpected content: {other:?}"),
    }

    // The whole field-editing commit is one undo step
    doc.undo();
    match &doc.sections().get(&form_id).unwrap().content {
        SectionContent::Form { fields, .. } => assert_eq!(fields.len(), 1),
        other => panic!("unexpected content: {other:?}"),
    }

    Ok(())
}

#[test]
fn test_rejected_mutations_never_corrupt_order() {
    let mut doc = doc_abc();
    let before = order(&doc);

    assert!(doc
        .apply(&SectionMutation::MoveSection { from: 7, to: 0 })
        .is_err());
    assert!(doc
        .apply(&SectionMutation::MoveSection { from: 0, to: 7 })
        .is_err());
    assert_eq!(order(&doc), before);

    // Retrying with valid indices works — nothing is poisoned
    doc.apply(&SectionMutation::MoveSection { from: 0, to: 1 })
        .unwrap();
    assert_eq!(doc.sections().len(), 3);
}
