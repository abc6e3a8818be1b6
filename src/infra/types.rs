/// Opaque identifier of a maze cell. Stable for the duration of a game.
pub type Vertex = usize;

/// Grid coordinates of a cell. Signed so that off-grid probes (one step
/// beyond an edge) can be represented before being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coords {
    pub row: i32,
    pub col: i32,
}

impl Coords {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The coordinates one step in the given direction. `Stay` maps to self.
    pub fn shifted(&self, action: Action) -> Coords {
        match action {
            Action::North => Coords::new(self.row - 1, self.col),
            Action::South => Coords::new(self.row + 1, self.col),
            Action::West => Coords::new(self.row, self.col - 1),
            Action::East => Coords::new(self.row, self.col + 1),
            Action::Stay => *self,
        }
    }
}

/// The single move command a policy emits each decision step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    North,
    South,
    East,
    West,
    Stay,
}

impl Action {
    /// The four directional moves, in the order fallback code probes them.
    pub const DIRECTIONS: [Action; 4] = [Action::North, Action::South, Action::East, Action::West];
}
