use crate::prelude::{HscoreError, HscoreResult};
use ndarray::{Array2, ArrayView2};

pub struct MatrixHelper;

impl MatrixHelper {
    /// Packs row vectors into a dense matrix, rejecting empty or ragged input.
    pub fn from_rows(rows: &[Vec<f64>]) -> HscoreResult<Array2<f64>> {
        let first = rows
            .first()
            .ok_or_else(|| HscoreError::InvalidInput("matrix has no rows".into()))?;
        let p = first.len();

        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != p) {
            return Err(HscoreError::InvalidInput(format!(
                "ragged matrix: row {} has {} columns, expected {}",
                idx,
                row.len(),
                p
            )));
        }

        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        let matrix = Array2::from_shape_vec((rows.len(), p), flat)
            .map_err(|err| HscoreError::Internal(format!("packing rows: {}", err)))?;
        Self::check_shape(matrix.view())?;
        Ok(matrix)
    }

    /// Returns `(n, p)` when the matrix has at least one row and one column.
    pub fn check_shape(mat: ArrayView2<f64>) -> HscoreResult<(usize, usize)> {
        let (n, p) = mat.dim();
        if n == 0 {
            return Err(HscoreError::InvalidInput("matrix has no rows".into()));
        }
        if p == 0 {
            return Err(HscoreError::InvalidInput("matrix has no columns".into()));
        }
        Ok((n, p))
    }

    /// Copies the strictly lower triangle onto the upper one. The diagonal is untouched.
    pub fn mirror_lower(mat: &mut Array2<f64>) {
        let n = mat.nrows().min(mat.ncols());
        for i in 0..n {
            for j in 0..i {
                mat[[j, i]] = mat[[i, j]];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn from_rows_packs_rectangular_input() {
        let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
        let matrix = MatrixHelper::from_rows(&rows).unwrap();
        assert_eq!(matrix.dim(), (3, 2));
        assert_eq!(matrix[[2, 1]], 6.0);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]];
        let err = MatrixHelper::from_rows(&rows).unwrap_err();
        assert!(matches!(err, HscoreError::InvalidInput(msg) if msg.contains("row 1")));
    }

    #[test]
    fn from_rows_rejects_empty_and_columnless_input() {
        assert!(matches!(
            MatrixHelper::from_rows(&[]),
            Err(HscoreError::InvalidInput(_))
        ));
        assert!(matches!(
            MatrixHelper::from_rows(&[vec![], vec![]]),
            Err(HscoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn mirror_lower_leaves_diagonal() {
        let mut mat = array![[7.0, 0.0, 0.0], [1.0, 7.0, 0.0], [2.0, 3.0, 7.0]];
        MatrixHelper::mirror_lower(&mut mat);
        assert_eq!(
            mat,
            array![[7.0, 1.0, 2.0], [1.0, 7.0, 3.0], [2.0, 3.0, 7.0]]
        );
    }
}
