use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::{data::Dataset, features::FeatureMap};

/// The featurized dataset: inputs expanded through a feature map into an
/// (m, d) matrix, targets as a length-m vector.
///
/// Built once before training and immutable afterwards. Every loss and
/// gradient evaluation reads from the same matrix, so the feature map runs
/// exactly once per sample.
#[derive(Debug, Clone)]
pub struct DesignMatrix {
    x: Array2<f32>,
    y: Array1<f32>,
}

impl DesignMatrix {
    /// Featurizes `data` through `map`.
    ///
    /// # Panics
    /// - if `map.dim()` is zero
    pub fn new<F: FeatureMap + ?Sized>(data: &Dataset, map: &F) -> Self {
        let m = data.len();
        let d = map.dim();
        assert!(d > 0, "feature map must produce at least one feature");

        let mut x = Array2::zeros((m, d));
        for (i, &raw) in data.xs().iter().enumerate() {
            let mut row = x.row_mut(i);
            map.write(raw, row.as_slice_mut().unwrap());
        }

        let y = Array1::from_vec(data.ys().to_vec());
        Self { x, y }
    }

    /// Number of samples (rows).
    #[inline]
    pub fn len(&self) -> usize {
        self.x.nrows()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.nrows() == 0
    }

    /// Number of features per sample (columns), which is also the weight
    /// dimensionality any fit against this matrix must have.
    #[inline]
    pub fn dim(&self) -> usize {
        self.x.ncols()
    }

    #[inline]
    pub fn x(&self) -> ArrayView2<'_, f32> {
        self.x.view()
    }

    #[inline]
    pub fn y(&self) -> ArrayView1<'_, f32> {
        self.y.view()
    }
}
