/// Keys the host forwards to focused widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Tab,
    /// Clears focus.
    Escape,
    Character(char),
}

impl Key {
    /// Space/Enter activate the focused control.
    pub fn activates(self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}
