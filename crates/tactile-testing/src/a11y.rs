use std::cell::RefCell;
use std::rc::Rc;

use tactile_core::SemNode;

// Accessibility bridge: what the host tells assistive technology.
pub trait A11yBridge {
    fn publish_tree(&mut self, nodes: &[SemNode]);
    fn focus_changed(&mut self, node: Option<&SemNode>);
    fn announce(&mut self, msg: &str);
}

/// Writes everything to the log.
#[derive(Default)]
pub struct LogA11y;

impl A11yBridge for LogA11y {
    fn publish_tree(&mut self, nodes: &[SemNode]) {
        log::debug!("A11y: publish {} nodes", nodes.len());
    }
    fn focus_changed(&mut self, node: Option<&SemNode>) {
        if let Some(n) = node {
            log::info!("A11y focus: {:?} {:?}", n.role, n.label);
        } else {
            log::info!("A11y focus: None");
        }
    }
    fn announce(&mut self, msg: &str) {
        log::info!("A11y announce: {msg}");
    }
}

/// Keeps announcements and focus changes so tests can assert on them.
/// Clones share the same log.
#[derive(Clone, Default)]
pub struct RecordingA11y {
    log: Rc<RefCell<A11yLog>>,
}

#[derive(Default, Debug)]
struct A11yLog {
    announcements: Vec<String>,
    focus: Vec<Option<String>>,
    published: usize,
}

impl RecordingA11y {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn announcements(&self) -> Vec<String> {
        self.log.borrow().announcements.clone()
    }

    /// Labels of each focus change, `None` when focus was cleared.
    pub fn focus_history(&self) -> Vec<Option<String>> {
        self.log.borrow().focus.clone()
    }

    /// How many trees were published.
    pub fn published(&self) -> usize {
        self.log.borrow().published
    }
}

impl A11yBridge for RecordingA11y {
    fn publish_tree(&mut self, nodes: &[SemNode]) {
        LogA11y.publish_tree(nodes);
        self.log.borrow_mut().published += 1;
    }
    fn focus_changed(&mut self, node: Option<&SemNode>) {
        LogA11y.focus_changed(node);
        self.log
            .borrow_mut()
            .focus
            .push(node.map(|n| n.label.clone().unwrap_or_default()));
    }
    fn announce(&mut self, msg: &str) {
        LogA11y.announce(msg);
        self.log.borrow_mut().announcements.push(msg.to_string());
    }
}
