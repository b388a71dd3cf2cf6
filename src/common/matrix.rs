use super::error::{QRError, QRResult};

// Module matrix
//------------------------------------------------------------------------------

/// Square grid of modules produced by a symbol encoder, `true` being dark.
/// The matrix holds the symbol only; the quiet zone is added when rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    w: usize,
    grid: Vec<bool>,
}

impl ModuleMatrix {
    /// Builds a matrix from row-major modules. Fails if the module count is not
    /// `width * width` or the width is zero.
    pub fn new(width: usize, modules: Vec<bool>) -> QRResult<Self> {
        if width == 0 || modules.len() != width * width {
            return Err(QRError::InvalidMatrix);
        }
        Ok(Self { w: width, grid: modules })
    }

    /// Builds a matrix by evaluating `f(r, c)` for every module.
    pub fn from_fn<F: FnMut(usize, usize) -> bool>(width: usize, mut f: F) -> QRResult<Self> {
        let grid = (0..width * width).map(|i| f(i / width, i % width)).collect();
        Self::new(width, grid)
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn modules(&self) -> &[bool] {
        &self.grid
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&&m| m).count()
    }

    /// Module at row `r`, column `c`, or `None` outside the matrix.
    pub fn get(&self, r: usize, c: usize) -> Option<bool> {
        if r >= self.w || c >= self.w {
            return None;
        }
        Some(self.grid[r * self.w + c])
    }
}

#[cfg(test)]
mod matrix_tests {
    use super::ModuleMatrix;
    use crate::QRError;

    #[test]
    fn test_new_rejects_bad_len() {
        assert!(matches!(ModuleMatrix::new(3, vec![false; 8]), Err(QRError::InvalidMatrix)));
        assert!(matches!(ModuleMatrix::new(0, vec![]), Err(QRError::InvalidMatrix)));
    }

    #[test]
    fn test_get_bounds() {
        let m = ModuleMatrix::from_fn(5, |r, c| r == 4 && c == 0).unwrap();
        assert_eq!(m.get(4, 0), Some(true));
        assert_eq!(m.get(0, 4), Some(false));
        assert_eq!(m.get(5, 0), None);
        assert_eq!(m.get(0, 5), None);
        assert_eq!(m.get(usize::MAX, usize::MAX), None);
        assert_eq!(m.count_dark_modules(), 1);
    }

    #[test]
    fn test_row_major() {
        let m = ModuleMatrix::from_fn(3, |r, _| r == 0).unwrap();
        assert_eq!(m.modules(), &[true, true, true, false, false, false, false, false, false]);
    }
}
