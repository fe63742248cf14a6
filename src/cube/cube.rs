use tracing::debug;

use crate::clamp::clamp;
use crate::error::PuzzleError;
use crate::grid::Grid;
use crate::orientation::{Face, FaceRotation, Orientation, Twist, NUM_FACES};
use crate::parse::{Instruction, Target};

type GridSet = [Grid; NUM_FACES];

fn new_grid_set() -> GridSet {
    std::array::from_fn(|_| Grid::square(1))
}

fn paint(
    grid: &mut Grid,
    target: Target,
    magnitude: i64,
    line: usize,
) -> Result<(), PuzzleError> {
    let update = |cell: &mut i64| -> Result<(), PuzzleError> {
        let sum = cell
            .checked_add(magnitude)
            .ok_or(PuzzleError::Overflow { line })?;
        *cell = clamp(sum);
        Ok(())
    };
    match target {
        Target::Face => grid.iter_mut().try_for_each(update),
        Target::Col(x) => grid.column_mut(x).try_for_each(update),
        Target::Row(y) => grid.row_mut(y).try_for_each(update),
    }
}

#[derive(Debug)]
pub struct Cube {
    orientation: Orientation,
    absorption: [i64; NUM_FACES],
    primary: GridSet,
    secondary: GridSet,
}

impl Cube {
    pub fn new() -> Cube {
        Cube {
            orientation: Orientation::new(),
            absorption: [0; NUM_FACES],
            primary: new_grid_set(),
            secondary: new_grid_set(),
        }
    }

    pub fn active_face(&self) -> Face {
        self.orientation.active_face()
    }

    #[cfg(test)]
    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    pub fn absorption(&self) -> &[i64; NUM_FACES] {
        &self.absorption
    }

    pub fn primary(&self, face: Face) -> &Grid {
        &self.primary[face.index()]
    }

    pub fn secondary(&self, face: Face) -> &Grid {
        &self.secondary[face.index()]
    }

    pub fn primary_grids(&self) -> &[Grid] {
        &self.primary
    }

    pub fn secondary_grids(&self) -> &[Grid] {
        &self.secondary
    }

    fn rotate_grids(&mut self, rotations: &[FaceRotation]) {
        for (face, rotation) in rotations {
            self.primary[face.index()].rotate(*rotation);
            self.secondary[face.index()].rotate(*rotation);
        }
    }

    pub fn apply_twist(&mut self, twist: Option<Twist>) {
        let Some(twist) = twist else {
            return;
        };
        let rotations = self.orientation.twist(twist);
        self.rotate_grids(&rotations);
        debug!(?twist, active = %self.active_face(), "twisted");
    }

    pub fn apply_instruction(&mut self, instruction: &Instruction) -> Result<(), PuzzleError> {
        let face = self.active_face();
        let Instruction {
            line,
            target,
            magnitude,
            ..
        } = *instruction;

        debug!(line, %face, ?target, magnitude, verb = %instruction.verb, "painting");

        let absorbed = magnitude
            .checked_mul(target.cells_touched())
            .and_then(|x| x.checked_add(self.absorption[face.index()]))
            .ok_or(PuzzleError::Overflow { line })?;
        self.absorption[face.index()] = absorbed;

        paint(&mut self.primary[face.index()], target, magnitude, line)?;

        // The secondary set paints each face that passes through UP while
        // cycling a full turn; orientation ends where it started.
        match target {
            Target::Face => paint(&mut self.secondary[face.index()], target, magnitude, line)?,
            Target::Col(_) => self.paint_cycle(target, magnitude, line, Twist::U)?,
            Target::Row(_) => self.paint_cycle(target, magnitude, line, Twist::R)?,
        }

        debug_assert_eq!(self.active_face(), face);
        Ok(())
    }

    fn paint_cycle(
        &mut self,
        target: Target,
        magnitude: i64,
        line: usize,
        twist: Twist,
    ) -> Result<(), PuzzleError> {
        for _ in 0..4 {
            let face = self.active_face();
            paint(&mut self.secondary[face.index()], target, magnitude, line)?;
            self.apply_twist(Some(twist));
        }
        Ok(())
    }
}

impl Default for Cube {
    fn default() -> Self {
        Cube::new()
    }
}
