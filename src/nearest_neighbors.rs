use nalgebra::DVector;

use crate::error::Error;
use crate::parse::Sample;

/// Seam between the classifier loop and the search strategy, so the
/// brute-force scan can be swapped for a spatial index later.
pub trait Classifier {
    fn classify(&self, query: &DVector<f64>, neighbor_count: usize) -> f64;
}

pub struct KNearestNeighbors {
    samples: Vec<Sample>,
}

impl KNearestNeighbors {
    pub fn new(samples: Vec<Sample>) -> Result<Self, Error> {
        let Some(first) = samples.first() else {
            return Err(Error::InvalidParameter {
                reason: "training set is empty".to_owned(),
            });
        };

        let dimensions = first.features.len();
        if samples
            .iter()
            .any(|sample| sample.features.len() != dimensions)
        {
            return Err(Error::InvalidParameter {
                reason: "training vectors have mismatched dimensionality".to_owned(),
            });
        }

        Ok(Self { samples })
    }

    pub fn dimensions(&self) -> usize {
        self.samples[0].features.len()
    }
}

impl Classifier for KNearestNeighbors {
    /// Majority vote among the `neighbor_count` training samples nearest
    /// to the query. A `neighbor_count` larger than the training set
    /// falls back to the whole set. Equidistant samples keep training-set
    /// order; a tied vote goes to the label whose nearest representative
    /// is closest to the query.
    fn classify(&self, query: &DVector<f64>, neighbor_count: usize) -> f64 {
        assert_eq!(
            query.len(),
            self.dimensions(),
            "query dimensionality must match the training set"
        );

        // Squared distances preserve the nearest-k ordering.
        let mut distances: Vec<(f64, usize)> = self
            .samples
            .iter()
            .enumerate()
            .map(|(index, sample)| ((&sample.features - query).norm_squared(), index))
            .collect();
        distances.sort_by(|(first, _), (second, _)| first.total_cmp(second));

        let neighbors = &distances[..neighbor_count.min(self.samples.len())];

        let mut predicted_label = self.samples[neighbors[0].1].label;
        let mut winning_votes = 0;

        for &(_, index) in neighbors {
            let label = self.samples[index].label;

            #[allow(clippy::float_cmp)]
            let votes = neighbors
                .iter()
                .filter(|(_, other)| self.samples[*other].label == label)
                .count();

            if votes > winning_votes {
                winning_votes = votes;
                predicted_label = label;
            }
        }

        predicted_label
    }
}
