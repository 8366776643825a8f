use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use arrayvec::ArrayVec;

use crate::point::Point;

lazy_static! {
    static ref TABLES: RwLock<HashMap<(u8, u8), Arc<Geometry>>> = RwLock::new(HashMap::new());
}

/// Precomputed adjacency tables for one board size.
///
/// Built once per `(rows, cols)` pair on first use and shared between
/// every board of that size from then on.
#[derive(Debug)]
pub struct Geometry {
    num_rows: u8,
    num_cols: u8,
    neighbors: Vec<ArrayVec<Point, 4>>,
    corners: Vec<ArrayVec<Point, 4>>,
}

impl Geometry {
    /// Get the shared tables for the given dimensions.
    pub fn shared(num_rows: u8, num_cols: u8) -> Arc<Geometry> {
        if let Some(geometry) = TABLES
            .read()
            .expect("geometry table lock poisoned")
            .get(&(num_rows, num_cols))
        {
            return Arc::clone(geometry);
        }
        let mut tables = TABLES.write().expect("geometry table lock poisoned");
        Arc::clone(
            tables
                .entry((num_rows, num_cols))
                .or_insert_with(|| Arc::new(Geometry::new(num_rows, num_cols))),
        )
    }

    fn new(num_rows: u8, num_cols: u8) -> Self {
        let mut neighbors = Vec::with_capacity(num_rows as usize * num_cols as usize);
        let mut corners = Vec::with_capacity(num_rows as usize * num_cols as usize);
        for row in 1..=num_rows {
            for col in 1..=num_cols {
                neighbors.push(Geometry::in_bounds(
                    num_rows,
                    num_cols,
                    [(-1, 0), (1, 0), (0, -1), (0, 1)],
                    row,
                    col,
                ));
                corners.push(Geometry::in_bounds(
                    num_rows,
                    num_cols,
                    [(-1, -1), (-1, 1), (1, -1), (1, 1)],
                    row,
                    col,
                ));
            }
        }
        Geometry {
            num_rows,
            num_cols,
            neighbors,
            corners,
        }
    }

    fn in_bounds(
        num_rows: u8,
        num_cols: u8,
        offsets: [(i16, i16); 4],
        row: u8,
        col: u8,
    ) -> ArrayVec<Point, 4> {
        offsets
            .into_iter()
            .filter_map(|(row_offset, col_offset)| {
                let row = row as i16 + row_offset;
                let col = col as i16 + col_offset;
                ((1..=num_rows as i16).contains(&row) && (1..=num_cols as i16).contains(&col))
                    .then(|| Point::new(row as u8, col as u8))
            })
            .collect()
    }

    fn index(&self, point: Point) -> usize {
        (point.row as usize - 1) * self.num_cols as usize + (point.col as usize - 1)
    }

    pub fn is_on_grid(&self, point: Point) -> bool {
        (1..=self.num_rows).contains(&point.row) && (1..=self.num_cols).contains(&point.col)
    }

    /// In-bounds orthogonal neighbors of a point.
    pub fn neighbors(&self, point: Point) -> &[Point] {
        &self.neighbors[self.index(point)]
    }

    /// In-bounds diagonal neighbors of a point.
    pub fn corners(&self, point: Point) -> &[Point] {
        &self.corners[self.index(point)]
    }
}
