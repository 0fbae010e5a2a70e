use std::cell::Cell;
use std::rc::Rc;

use tactile_core::{Role, SemNode, ViewKind};
use tactile_ui::{Button, ButtonConfig, Column, Disableable, Text, compose};

fn dump(nodes: &[SemNode]) -> String {
    nodes
        .iter()
        .map(|n| {
            format!(
                "{} {} {:?}{}",
                n.id,
                n.role,
                n.label.as_deref().unwrap_or(""),
                if n.enabled { "" } else { " [disabled]" }
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn renders_button_semantics() {
    let view = ButtonConfig::new("Test Button").render();
    let sem = view.semantics.as_ref().expect("button has semantics");
    assert_eq!(sem.role, Role::Button);
    assert_eq!(sem.label.as_deref(), Some("Test Button"));
    assert!(sem.enabled);
}

#[test]
fn config_accessors_reflect_builder() {
    let cfg = ButtonConfig::new("Disabled Button");
    assert_eq!(cfg.label(), "Disabled Button");
    assert!(cfg.is_enabled());

    let cfg = cfg.disabled(true);
    assert!(!cfg.is_enabled());
    assert!(cfg.clone().enabled(true).is_enabled());
}

#[test]
fn disabled_flag_mirrors_enabled() {
    let view = ButtonConfig::new("Disabled Button").enabled(false).render();
    assert!(!view.semantics.as_ref().expect("semantics").enabled);
    match &view.kind {
        ViewKind::Button { enabled, .. } => assert!(!enabled),
        other => panic!("expected a button, got {other:?}"),
    }
}

#[test]
fn activate_invokes_handler_once_per_call() {
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    let cfg = ButtonConfig::new("Click me").on_activate(move || c.set(c.get() + 1));

    assert!(cfg.activate());
    assert_eq!(count.get(), 1);

    for _ in 0..4 {
        cfg.activate();
    }
    assert_eq!(count.get(), 5);
}

#[test]
fn disabled_button_never_invokes_handler() {
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    let cfg = ButtonConfig::new("Nope")
        .on_activate(move || c.set(c.get() + 1))
        .disabled(true);

    for _ in 0..10 {
        assert!(!cfg.activate());
    }
    assert_eq!(count.get(), 0);
}

#[test]
fn activate_without_handler_is_a_noop() {
    let cfg = ButtonConfig::new("Idle");
    assert!(!cfg.activate());
}

#[test]
fn disabled_buttons_get_no_hit_region() {
    let root = Column(vec![
        Button("Save", || {}),
        Button("Delete", || {}).disabled(true),
    ]);
    let (hits, sems) = compose(&root, None);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 2);
    assert!(hits[0].focusable);

    insta::assert_snapshot!(dump(&sems), @r#"
    1 group ""
    2 button "Save"
    3 button "Delete" [disabled]
    "#);
}

#[test]
fn focus_is_reported_only_on_enabled_buttons() {
    let root = Column(vec![
        Text("Actions"),
        Button("Save", || {}),
        Button("Delete", || {}).disabled(true),
    ]);

    let (_, sems) = compose(&root, Some(3));
    assert!(sems.iter().find(|n| n.id == 3).is_some_and(|n| n.focused));

    let (_, sems) = compose(&root, Some(4));
    assert!(sems.iter().all(|n| !n.focused));
}

#[test]
fn label_is_kept_verbatim() {
    let view = ButtonConfig::new("  Mixed CASE  label ").render();
    let (_, sems) = compose(&view, None);
    assert_eq!(sems[0].label.as_deref(), Some("  Mixed CASE  label "));
}
