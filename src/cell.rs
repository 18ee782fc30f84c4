/// The contents of one board cell.
///
/// `Blocked` is a cell that exists on the grid but can never hold a marble; it is distinct from a cell missing entirely from a ragged row.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Cell {
    /// A cell no marble may ever occupy or cross.
    Blocked,
    /// A depression with no marble in it.
    #[default]
    Empty,
    /// A cell currently holding a marble.
    Marble,
}

impl Cell {
    // byte fed to the grid digest; must be distinct per tag
    pub(crate) fn tag_byte(&self) -> u8 {
        match self {
            Cell::Blocked => 0,
            Cell::Empty => 1,
            Cell::Marble => 2,
        }
    }

    pub(crate) fn glyph(&self) -> char {
        match self {
            Cell::Blocked => ' ',
            Cell::Empty => '.',
            Cell::Marble => 'o',
        }
    }
}
