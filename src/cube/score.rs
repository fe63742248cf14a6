use itertools::Itertools;

use crate::cube::Cube;
use crate::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answers {
    pub part1: i128,
    pub part2: i128,
    pub part3: i128,
}

/// Product of the two largest entries.
pub fn top_two_product(values: &[i64]) -> i128 {
    values
        .iter()
        .sorted_by(|a, b| b.cmp(a))
        .take(2)
        .map(|x| *x as i128)
        .product()
}

pub fn dominant_product(grids: &[Grid]) -> i128 {
    grids.iter().map(|grid| grid.dominant_sum() as i128).product()
}

pub fn answers(cube: &Cube) -> Answers {
    Answers {
        part1: top_two_product(cube.absorption()),
        part2: dominant_product(cube.primary_grids()),
        part3: dominant_product(cube.secondary_grids()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_two_product() {
        assert_eq!(top_two_product(&[0, 0, 0, 0, 0, 0]), 0);
        assert_eq!(top_two_product(&[19200, 0, 0, 0, 0, 0]), 0);
        assert_eq!(top_two_product(&[3, 9, 1, 7, 2, 0]), 63);
        assert_eq!(top_two_product(&[-3, -9, -1, -7, -2, -4]), 2);
    }

    #[test]
    fn test_dominant_product() {
        let grids = vec![Grid::square(1), Grid::square(4), Grid::square(1)];
        assert_eq!(dominant_product(&grids), 80 * 320 * 80);
    }

    #[test]
    fn test_fresh_cube_answers() {
        let cube = Cube::new();
        assert_eq!(
            answers(&cube),
            Answers {
                part1: 0,
                part2: 80i128.pow(6),
                part3: 80i128.pow(6),
            }
        );
    }
}
