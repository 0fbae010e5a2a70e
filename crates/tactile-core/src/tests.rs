#[cfg(test)]
mod tests {
    use crate::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn frame_with_chain(chain: Vec<ViewId>) -> Frame {
        Frame {
            focus_chain: chain,
            ..Frame::default()
        }
    }

    #[test]
    fn test_role_aria_names() {
        assert_eq!(Role::Button.aria_name(), "button");
        assert_eq!(Role::Container.to_string(), "group");
        assert_eq!(Role::Text.to_string(), "text");
    }

    #[test]
    fn test_semantics_defaults_enabled() {
        let s = Semantics::new(Role::Button).label("Save");
        assert!(s.enabled);
        assert!(!s.focused);
        assert_eq!(s.label.as_deref(), Some("Save"));
        assert!(!s.enabled(false).enabled);
    }

    #[test]
    fn test_walk_is_depth_first() {
        let tree = View::new(1, ViewKind::Column).with_children(vec![
            View::new(2, ViewKind::Column).with_children(vec![View::new(
                3,
                ViewKind::Text { text: "a".into() },
            )]),
            View::new(4, ViewKind::Text { text: "b".into() }),
        ]);
        let ids: Vec<ViewId> = tree.walk().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_focus_traversal_wraps() {
        let f = frame_with_chain(vec![2, 5, 7]);
        assert_eq!(f.next_focus(None, false), Some(2));
        assert_eq!(f.next_focus(Some(2), false), Some(5));
        assert_eq!(f.next_focus(Some(7), false), Some(2));
        assert_eq!(f.next_focus(Some(2), true), Some(7));
        assert_eq!(f.next_focus(None, true), Some(7));
        // Unknown id restarts the chain
        assert_eq!(f.next_focus(Some(99), false), Some(2));
    }

    #[test]
    fn test_focus_traversal_empty_chain() {
        let f = frame_with_chain(vec![]);
        assert_eq!(f.next_focus(None, false), None);
        assert_eq!(f.next_focus(Some(1), true), None);
    }

    #[test]
    fn test_scheduler_builds_focus_chain_from_focusable_hits() {
        let mut sched = Scheduler::new();
        let frame = sched.compose(
            |_| View::new(0, ViewKind::Column),
            |_, _| {
                let hits = vec![
                    HitRegion {
                        id: 1,
                        on_click: None,
                        focusable: true,
                    },
                    HitRegion {
                        id: 2,
                        on_click: None,
                        focusable: false,
                    },
                ];
                (hits, vec![])
            },
        );
        assert_eq!(frame.focus_chain, vec![1]);
        assert_eq!(sched.frames(), 1);
    }

    #[test]
    fn test_scheduler_drops_stale_focus() {
        let mut sched = Scheduler::new();
        sched.focused = Some(3);
        let _ = sched.compose(|_| View::new(0, ViewKind::Column), |_, _| (vec![], vec![]));
        assert_eq!(sched.focused, None);
    }

    #[test]
    fn test_hit_region_callback_invocation() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let f = Frame {
            hit_regions: vec![HitRegion {
                id: 1,
                on_click: Some(Rc::new(move || c.set(c.get() + 1))),
                focusable: true,
            }],
            ..Frame::default()
        };
        if let Some(cb) = f.hit(1).and_then(|h| h.on_click.as_ref()) {
            cb();
        }
        assert_eq!(count.get(), 1);
        assert!(f.hit(2).is_none());
    }

    #[test]
    fn test_key_activation() {
        assert!(Key::Enter.activates());
        assert!(Key::Space.activates());
        assert!(!Key::Tab.activates());
        assert!(!Key::Escape.activates());
        assert!(!Key::Character('a').activates());
    }
}
