//! Creation of the arrays to sort

use rand::{Rng, distr::Distribution as _, seq::SliceRandom as _};

use crate::engine::Value;

/// The array shown when the visualizer opens
pub const DEFAULT_VALUES: [Value; 6] = [23, 41, 25, 54, 18, 14];

/// Upper bound (exclusive) of uniformly drawn values, keeps labels short
pub const MAX_UNIFORM_VALUE: Value = 100;

/// A trait for generalizing sorting data creation
pub trait Data {
    /// Initialize a vector of the given size
    fn initialize(size: usize, rng: &mut impl Rng) -> Vec<Value>;
}

/// Values drawn uniformly from `1..MAX_UNIFORM_VALUE`, duplicates allowed
#[derive(Debug)]
pub struct UniformData;

impl Data for UniformData {
    fn initialize(size: usize, rng: &mut impl Rng) -> Vec<Value> {
        rand::distr::Uniform::new(1, MAX_UNIFORM_VALUE)
            .expect("range is non-empty")
            .sample_iter(rng)
            .take(size)
            .collect()
    }
}

/// A random permutation of `1..=size`
#[derive(Debug)]
pub struct PermutationData;

impl Data for PermutationData {
    fn initialize(size: usize, rng: &mut impl Rng) -> Vec<Value> {
        let mut values: Vec<Value> = (1..).take(size).collect();
        values.shuffle(rng);
        values
    }
}

/// Available kinds of random data
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DataType {
    Uniform,
    Permutation,
}

impl DataType {
    /// Generate `size` values of this kind
    pub fn generate(self, size: usize, rng: &mut impl Rng) -> Vec<Value> {
        match self {
            DataType::Uniform => UniformData::initialize(size, rng),
            DataType::Permutation => PermutationData::initialize(size, rng),
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            DataType::Uniform => "uniform",
            DataType::Permutation => "permutation",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutation_contains_every_value_once() {
        let mut rng = crate::test::test_rng();
        let mut values = DataType::Permutation.generate(20, &mut rng);

        values.sort();
        assert_eq!(values, (1..=20).collect::<Vec<Value>>());
    }

    #[test]
    fn uniform_values_are_in_range() {
        let mut rng = crate::test::test_rng();
        let values = DataType::Uniform.generate(200, &mut rng);

        assert_eq!(values.len(), 200);
        assert!(values.iter().all(|value| (1..MAX_UNIFORM_VALUE).contains(value)));
    }

    #[test]
    fn empty() {
        let mut rng = crate::test::test_rng();
        assert!(DataType::Uniform.generate(0, &mut rng).is_empty());
        assert!(DataType::Permutation.generate(0, &mut rng).is_empty());
    }
}
