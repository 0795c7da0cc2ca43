//! Open/closed flags for the header's slide-out drawer.
//!
//! DESIGN
//! ======
//! The header component owns one `DrawerState` in a local signal and mutates
//! it only through `set`. Nothing else reads or writes it, and it is never
//! persisted.

#[cfg(test)]
#[path = "drawer_test.rs"]
mod drawer_test;

/// Viewport edge a drawer can be anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawerSide {
    Top,
    Left,
    Bottom,
    Right,
}

impl DrawerSide {
    pub const ALL: [DrawerSide; 4] = [Self::Top, Self::Left, Self::Bottom, Self::Right];

    /// Parse a side name (`top`, `left`, `bottom`, `right`).
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "top" => Some(Self::Top),
            "left" => Some(Self::Left),
            "bottom" => Some(Self::Bottom),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Bottom => "bottom",
            Self::Right => "right",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Left => 1,
            Self::Bottom => 2,
            Self::Right => 3,
        }
    }
}

/// Per-side "is open" flags. Every side starts closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawerState {
    open: [bool; 4],
}

impl DrawerState {
    pub fn is_open(&self, side: DrawerSide) -> bool {
        self.open[side.index()]
    }

    /// Set `side` to `open`. Repeating the current value changes nothing.
    pub fn set(&mut self, side: DrawerSide, open: bool) {
        self.open[side.index()] = open;
    }

    /// Set a side by name. Unrecognized names leave the state untouched.
    pub fn set_by_name(&mut self, name: &str, open: bool) {
        match DrawerSide::parse(name) {
            Some(side) => self.set(side, open),
            None => log::debug!("ignoring drawer toggle for unknown side {name:?}"),
        }
    }

    /// Whether any side is currently open.
    pub fn any_open(&self) -> bool {
        self.open.iter().any(|open| *open)
    }
}
