#![allow(non_snake_case)]
//! Widgets and frame composition.

pub mod button;

pub use button::{Button, ButtonConfig, Disableable};

use tactile_core::*;

pub fn Column(children: Vec<View>) -> View {
    View::new(0, ViewKind::Column)
        .with_children(children)
        .semantics(Semantics::new(Role::Container))
}

pub fn Text(text: impl Into<String>) -> View {
    let text = text.into();
    View::new(0, ViewKind::Text { text: text.clone() })
        .semantics(Semantics::new(Role::Text).label(text))
}

/// Stamps ids onto `root` and flattens it into hit regions and semantics
/// nodes. Ids start at 1 and follow depth-first order.
pub fn compose(root: &View, focused: Option<ViewId>) -> (Vec<HitRegion>, Vec<SemNode>) {
    fn stamp(mut v: View, id: &mut u64) -> View {
        v.id = *id;
        *id += 1;
        v.children = v.children.into_iter().map(|c| stamp(c, id)).collect();
        v
    }
    let mut id = 1u64;
    let root = stamp(root.clone(), &mut id);

    let mut hits: Vec<HitRegion> = vec![];
    let mut sems: Vec<SemNode> = vec![];

    for v in root.walk() {
        match &v.kind {
            ViewKind::Column => {
                sems.push(SemNode {
                    id: v.id,
                    role: Role::Container,
                    label: None,
                    focused: false,
                    enabled: true,
                });
            }
            ViewKind::Text { text } => {
                sems.push(SemNode {
                    id: v.id,
                    role: Role::Text,
                    label: Some(text.clone()),
                    focused: false,
                    enabled: true,
                });
            }
            ViewKind::Button {
                label,
                enabled,
                on_click,
            } => {
                // Disabled buttons stay in the semantics tree but take no input.
                let enabled = *enabled && v.semantics.as_ref().is_none_or(|s| s.enabled);
                if enabled {
                    hits.push(HitRegion {
                        id: v.id,
                        on_click: on_click.clone(),
                        focusable: true,
                    });
                }
                sems.push(SemNode {
                    id: v.id,
                    role: Role::Button,
                    label: v
                        .semantics
                        .as_ref()
                        .and_then(|s| s.label.clone())
                        .or_else(|| Some(label.clone())),
                    focused: enabled && focused == Some(v.id),
                    enabled,
                });
            }
        }
    }

    (hits, sems)
}
