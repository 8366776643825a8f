/// A dense rank-3 array of `f32` in plane-major order.
///
/// This is the interchange format between game encoding and move
/// evaluators: plane index first, then row, then column, exactly the
/// layout a convolutional model consumes.
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor {
    planes: usize,
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Tensor {
    pub fn zeros(planes: usize, rows: usize, cols: usize) -> Self {
        Tensor {
            planes,
            rows,
            cols,
            data: vec![0.0; planes * rows * cols],
        }
    }

    pub fn shape(&self) -> (usize, usize, usize) {
        (self.planes, self.rows, self.cols)
    }

    pub fn get(&self, plane: usize, row: usize, col: usize) -> f32 {
        self.data[self.index(plane, row, col)]
    }

    pub fn set(&mut self, plane: usize, row: usize, col: usize, value: f32) {
        let index = self.index(plane, row, col);
        self.data[index] = value;
    }

    /// Set every cell of one plane to `value`.
    pub fn fill_plane(&mut self, plane: usize, value: f32) {
        debug_assert!(plane < self.planes);
        let size = self.rows * self.cols;
        let start = plane * size;
        self.data[start..start + size].fill(value);
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    fn index(&self, plane: usize, row: usize, col: usize) -> usize {
        debug_assert!(plane < self.planes && row < self.rows && col < self.cols);
        (plane * self.rows + row) * self.cols + col
    }
}
