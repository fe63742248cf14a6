use std::fmt;
use std::str::FromStr;

use crate::grid::Rotation;

pub const NUM_FACES: usize = 6;

/// Names both the physical faces of the cube and the six slots they can
/// occupy relative to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Up,
    Front,
    Down,
    Back,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Twist {
    U,
    L,
    D,
    R,
}

impl Face {
    pub fn all() -> [Face; NUM_FACES] {
        [
            Face::Up,
            Face::Front,
            Face::Down,
            Face::Back,
            Face::Left,
            Face::Right,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            Face::Up => 0,
            Face::Front => 1,
            Face::Down => 2,
            Face::Back => 3,
            Face::Left => 4,
            Face::Right => 5,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Face::Up => "UP",
            Face::Front => "FRONT",
            Face::Down => "DOWN",
            Face::Back => "BACK",
            Face::Left => "LEFT",
            Face::Right => "RIGHT",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Face {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Face::Up),
            "front" => Ok(Face::Front),
            "down" => Ok(Face::Down),
            "back" => Ok(Face::Back),
            "left" => Ok(Face::Left),
            "right" => Ok(Face::Right),
            _ => anyhow::bail!("unknown face: {}", s),
        }
    }
}

/// A grid rotation that a transition requires, keyed by the face label
/// whose grids must turn.
pub type FaceRotation = (Face, Rotation);

/// Which face label currently sits in each slot. Always a permutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orientation {
    slots: [Face; NUM_FACES],
}

impl Orientation {
    pub fn new() -> Orientation {
        Orientation { slots: Face::all() }
    }

    pub fn occupant(&self, slot: Face) -> Face {
        self.slots[slot.index()]
    }

    #[cfg(test)]
    pub fn slot_of(&self, face: Face) -> Face {
        Face::all()
            .into_iter()
            .find(|slot| self.occupant(*slot) == face)
            .expect("orientation is always a permutation")
    }

    pub fn active_face(&self) -> Face {
        self.occupant(Face::Up)
    }

    fn set(&mut self, slot: Face, face: Face) {
        self.slots[slot.index()] = face;
    }

    /// Ring advance: UP <- FRONT <- DOWN <- BACK <- UP.
    fn advance_ring(&mut self) -> Vec<FaceRotation> {
        let old_up = self.occupant(Face::Up);
        let old_front = self.occupant(Face::Front);
        let old_down = self.occupant(Face::Down);
        let old_back = self.occupant(Face::Back);

        self.set(Face::Up, old_front);
        self.set(Face::Front, old_down);
        self.set(Face::Down, old_back);
        self.set(Face::Back, old_up);

        vec![
            (self.occupant(Face::Left), Rotation::CounterClockwise),
            (self.occupant(Face::Right), Rotation::Clockwise),
        ]
    }

    /// Four-way exchange between the side slots and the UP/DOWN slots.
    fn exchange_sides(&mut self) -> Vec<FaceRotation> {
        let old_up = self.occupant(Face::Up);
        let old_down = self.occupant(Face::Down);
        let old_left = self.occupant(Face::Left);
        let old_right = self.occupant(Face::Right);

        self.set(Face::Left, old_up);
        self.set(Face::Right, old_down);
        self.set(Face::Up, old_right);
        self.set(Face::Down, old_left);

        vec![
            (self.occupant(Face::Front), Rotation::CounterClockwise),
            (self.occupant(Face::Right), Rotation::Half),
            (self.occupant(Face::Down), Rotation::Half),
            (self.occupant(Face::Back), Rotation::Clockwise),
        ]
    }

    /// Applies a twist and returns the grid rotations it implies, in the
    /// order they must be performed.
    pub fn twist(&mut self, twist: Twist) -> Vec<FaceRotation> {
        match twist {
            Twist::U => self.advance_ring(),
            Twist::L => self.exchange_sides(),
            Twist::D => (0..3).flat_map(|_| self.advance_ring()).collect(),
            Twist::R => (0..3).flat_map(|_| self.exchange_sides()).collect(),
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::new()
    }
}
