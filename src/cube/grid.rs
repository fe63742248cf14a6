pub const SIDE: usize = 80;

pub type Grid = Map<i64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
    Half,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map<T> {
    number_of_rows: usize,
    number_of_columns: usize,
    row_data: Vec<Vec<T>>,
}

impl<T> Map<T>
where
    T: Clone,
{
    pub fn new(number_of_columns: usize, number_of_rows: usize, starting_value: &T) -> Map<T> {
        let row_data = (0..number_of_rows)
            .map(|_| {
                (0..number_of_columns)
                    .map(|_| starting_value.clone())
                    .collect()
            })
            .collect();
        Map {
            number_of_rows,
            number_of_columns,
            row_data,
        }
    }

    #[cfg(test)]
    pub fn at(&self, (col, row): (usize, usize)) -> Option<&T> {
        self.row_data.get(row)?.get(col)
    }

    #[cfg(test)]
    pub fn at_mut(&mut self, (col, row): (usize, usize)) -> Option<&mut T> {
        self.row_data.get_mut(row)?.get_mut(col)
    }

    #[cfg(test)]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.at((col, row)).cloned()
    }

    #[cfg(test)]
    pub fn set(&mut self, row: usize, col: usize, value: T) -> bool {
        match self.at_mut((col, row)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.row_data.iter_mut().flatten()
    }

    pub fn row_mut(&mut self, row: usize) -> impl Iterator<Item = &mut T> {
        self.row_data.get_mut(row).into_iter().flatten()
    }

    pub fn column_mut(&mut self, col: usize) -> impl Iterator<Item = &mut T> {
        self.row_data.iter_mut().filter_map(move |row| row.get_mut(col))
    }

    fn indexed_map<F>(&self, f: F) -> Map<T>
    where
        F: Fn((usize, usize)) -> T,
    {
        let row_data = (0..self.number_of_rows)
            .map(|row| (0..self.number_of_columns).map(|col| f((col, row))).collect())
            .collect();
        Map {
            number_of_rows: self.number_of_rows,
            number_of_columns: self.number_of_columns,
            row_data,
        }
    }

    fn side(&self) -> usize {
        assert!(
            self.number_of_rows == self.number_of_columns,
            "only square maps can be rotated"
        );
        self.number_of_rows
    }

    /// new[r][c] = old[n-1-c][r]
    pub fn rotate_clockwise(&mut self) {
        let n = self.side();
        *self = self.indexed_map(|(c, r)| self.row_data[n - 1 - c][r].clone());
    }

    /// Inverse of `rotate_clockwise`, done in a single pass.
    pub fn rotate_counter_clockwise(&mut self) {
        let n = self.side();
        *self = self.indexed_map(|(c, r)| self.row_data[c][n - 1 - r].clone());
    }

    pub fn rotate_half(&mut self) {
        let n = self.side();
        *self = self.indexed_map(|(c, r)| self.row_data[n - 1 - r][n - 1 - c].clone());
    }

    pub fn rotate(&mut self, rotation: Rotation) {
        match rotation {
            Rotation::Clockwise => self.rotate_clockwise(),
            Rotation::CounterClockwise => self.rotate_counter_clockwise(),
            Rotation::Half => self.rotate_half(),
        }
    }

    pub fn show<F>(&self, format_cell: F) -> String
    where
        F: Fn(&T) -> String,
    {
        let mut rv: Vec<String> = Vec::new();

        for row in &self.row_data {
            for col in row {
                rv.push(format_cell(col));
            }
            rv.push("\n".to_string());
        }

        rv.join("")
    }
}

impl Map<i64> {
    pub fn square(starting_value: i64) -> Grid {
        Map::new(SIDE, SIDE, &starting_value)
    }

    /// Largest row or column sum, never below zero.
    pub fn dominant_sum(&self) -> i64 {
        let mut best = 0;
        for i in 0..self.side() {
            let row_sum: i64 = self.row_data[i].iter().sum();
            let col_sum: i64 = self.row_data.iter().map(|row| row[i]).sum();
            best = best.max(row_sum).max(col_sum);
        }
        best
    }
}
