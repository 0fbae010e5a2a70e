use tactile_core::{Frame, Key, Role, Scheduler, SemNode, View, ViewId};
use tactile_ui::compose;

use crate::a11y::{A11yBridge, RecordingA11y};
use crate::error::{QueryError, QueryResult};
use crate::query::{MatchOptions, TextMatch};

/// Snapshot of a semantics node returned by a query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    id: ViewId,
    role: Role,
    name: Option<String>,
    enabled: bool,
    focused: bool,
}

impl Element {
    fn from_node(n: &SemNode) -> Self {
        Self {
            id: n.id,
            role: n.role,
            name: n.label.clone(),
            enabled: n.enabled,
            focused: n.focused,
        }
    }

    pub fn id(&self) -> ViewId {
        self.id
    }
    pub fn role(&self) -> Role {
        self.role
    }
    /// Accessible name, verbatim from the label.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
    pub fn is_disabled(&self) -> bool {
        !self.enabled
    }
    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

/// Headless host: mounts a view, answers role/name queries and feeds it
/// clicks and key presses.
///
/// Every input event recomposes from the mounted builder, so the frame always
/// reflects the current configuration.
pub struct Screen {
    build: Box<dyn FnMut() -> View>,
    sched: Scheduler,
    frame: Frame,
    options: MatchOptions,
    recorder: RecordingA11y,
    bridge: Option<Box<dyn A11yBridge>>,
}

impl Screen {
    /// Mounts a fixed view.
    pub fn render(view: View) -> Self {
        Self::render_with(move || view.clone())
    }

    /// Mounts a builder that is re-run on every recomposition.
    pub fn render_with(build: impl FnMut() -> View + 'static) -> Self {
        let mut screen = Screen {
            build: Box::new(build),
            sched: Scheduler::new(),
            frame: Frame::default(),
            options: MatchOptions::default(),
            recorder: RecordingA11y::new(),
            bridge: None,
        };
        screen.recompose();
        screen
    }

    #[must_use]
    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Forwards a11y events to `bridge` as well as the built-in recorder.
    #[must_use]
    pub fn with_bridge(mut self, bridge: impl A11yBridge + 'static) -> Self {
        let mut bridge: Box<dyn A11yBridge> = Box::new(bridge);
        bridge.publish_tree(&self.frame.semantics_nodes);
        self.bridge = Some(bridge);
        self
    }

    /// Replaces the mounted view. Focus is kept if the focused id is still
    /// focusable in the new frame.
    pub fn rerender(&mut self, view: View) {
        self.build = Box::new(move || view.clone());
        let before = self.sched.focused;
        self.recompose();
        if before.is_some() && self.sched.focused.is_none() {
            self.emit(|b| b.focus_changed(None));
        }
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn announcements(&self) -> Vec<String> {
        self.recorder.announcements()
    }

    pub fn recorder(&self) -> &RecordingA11y {
        &self.recorder
    }

    fn recompose(&mut self) {
        let build = &mut self.build;
        self.frame = self.sched.compose(|_| build(), compose);
        let nodes = self.frame.semantics_nodes.clone();
        self.emit(|b| b.publish_tree(&nodes));
    }

    fn emit(&mut self, mut f: impl FnMut(&mut dyn A11yBridge)) {
        f(&mut self.recorder);
        if let Some(b) = self.bridge.as_deref_mut() {
            f(b);
        }
    }

    // Queries

    pub fn get_all_by_role(
        &self,
        role: Role,
        name: impl Into<TextMatch>,
    ) -> QueryResult<Vec<Element>> {
        let name = name.into();
        let found = self.find(role, &name)?;
        if found.is_empty() {
            return Err(QueryError::NotFound {
                role,
                name: name.to_string(),
            });
        }
        Ok(found)
    }

    /// Exactly one match, or an error.
    pub fn get_by_role(&self, role: Role, name: impl Into<TextMatch>) -> QueryResult<Element> {
        let name = name.into();
        match self.query_by_role(role, name.clone())? {
            Some(el) => Ok(el),
            None => Err(QueryError::NotFound {
                role,
                name: name.to_string(),
            }),
        }
    }

    /// Zero or one match; more than one is still an error.
    pub fn query_by_role(
        &self,
        role: Role,
        name: impl Into<TextMatch>,
    ) -> QueryResult<Option<Element>> {
        let name = name.into();
        let mut found = self.find(role, &name)?;
        match found.len() {
            0 => Ok(None),
            1 => Ok(found.pop()),
            count => Err(QueryError::MultipleMatches {
                role,
                name: name.to_string(),
                count,
            }),
        }
    }

    fn find(&self, role: Role, name: &TextMatch) -> QueryResult<Vec<Element>> {
        let matcher = name.matcher(&self.options)?;
        Ok(self
            .frame
            .semantics_nodes
            .iter()
            .filter(|n| n.role == role && matcher.is_match(n.label.as_deref()))
            .map(Element::from_node)
            .collect())
    }

    /// Re-reads an element from the current frame. The node at the element's
    /// id must still have the same role; its name may have changed.
    pub fn refresh(&self, el: &Element) -> QueryResult<Element> {
        self.frame
            .node(el.id)
            .filter(|n| n.role == el.role)
            .map(Element::from_node)
            .ok_or(QueryError::Detached { id: el.id })
    }

    /// The node `el` was taken from. Ids are positional, so a node at the same
    /// id with a different role or name is some other control.
    fn resolve(&self, el: &Element) -> QueryResult<&SemNode> {
        self.frame
            .node(el.id)
            .filter(|n| n.role == el.role && n.label == el.name)
            .ok_or(QueryError::Detached { id: el.id })
    }

    // Input

    /// Clicks `el`. Returns whether a handler ran; disabled elements swallow
    /// the click.
    pub fn click(&mut self, el: &Element) -> QueryResult<bool> {
        let node = self.resolve(el)?;
        if !node.enabled {
            log::debug!("click on disabled {} {:?} suppressed", node.role, node.label);
            return Ok(false);
        }
        Ok(self.activate(el.id))
    }

    /// Moves focus to `el` if it is focusable.
    pub fn focus(&mut self, el: &Element) -> QueryResult<bool> {
        self.resolve(el)?;
        if !self.frame.focus_chain.contains(&el.id) {
            return Ok(false);
        }
        self.set_focus(Some(el.id));
        Ok(true)
    }

    pub fn focused(&self) -> Option<Element> {
        let id = self.sched.focused?;
        self.frame.node(id).map(Element::from_node)
    }

    pub fn tab(&mut self) -> Option<Element> {
        self.traverse(false)
    }

    pub fn shift_tab(&mut self) -> Option<Element> {
        self.traverse(true)
    }

    fn traverse(&mut self, backwards: bool) -> Option<Element> {
        let next = self.frame.next_focus(self.sched.focused, backwards)?;
        self.set_focus(Some(next));
        self.focused()
    }

    /// Sends a key to the focused element. Enter/Space activate it, Tab moves
    /// focus and Escape clears it. Returns whether a handler ran.
    pub fn press_key(&mut self, key: Key) -> bool {
        match key {
            Key::Tab => {
                self.tab();
                return false;
            }
            Key::Escape => {
                if self.sched.focused.is_some() {
                    self.set_focus(None);
                }
                return false;
            }
            _ => {}
        }
        match self.sched.focused {
            Some(id) if key.activates() => self.activate(id),
            _ => false,
        }
    }

    fn set_focus(&mut self, id: Option<ViewId>) {
        self.sched.focused = id;
        self.recompose();
        let node = id.and_then(|id| self.frame.node(id).cloned());
        self.emit(|b| b.focus_changed(node.as_ref()));
    }

    fn activate(&mut self, id: ViewId) -> bool {
        let Some(cb) = self.frame.hit(id).and_then(|h| h.on_click.clone()) else {
            return false;
        };
        cb();
        let label = self
            .frame
            .node(id)
            .and_then(|n| n.label.clone())
            .unwrap_or_default();
        self.emit(|b| b.announce(&format!("Activated {}", label)));
        self.recompose();
        true
    }

    /// One line per semantics node, e.g. `button "Save" [disabled]`.
    pub fn debug_tree(&self) -> String {
        self.frame
            .semantics_nodes
            .iter()
            .map(|n| {
                let mut line = match &n.label {
                    Some(l) => format!("{} {:?}", n.role, l),
                    None => n.role.to_string(),
                };
                if !n.enabled {
                    line.push_str(" [disabled]");
                }
                if n.focused {
                    line.push_str(" [focused]");
                }
                line
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
