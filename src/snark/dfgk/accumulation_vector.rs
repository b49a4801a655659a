// Copyright (C) 2023-2024 The squarespan developers
// This file is part of the squarespan library.

// The squarespan library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The squarespan library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the squarespan library. If not, see <https://www.gnu.org/licenses/>.

use itertools::Itertools;
use snarkvm_curves::traits::{AffineCurve, ProjectiveCurve};
use snarkvm_utilities::serialize::*;

/// An encoded commitment query supporting incremental inner products: a
/// running accumulator together with the query elements that have not been
/// folded in yet.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct AccumulationVector<G: AffineCurve> {
    /// The accumulated portion of the query.
    pub first: G,
    /// The query elements still open for accumulation.
    pub rest: Vec<G>,
}

impl<G: AffineCurve> AccumulationVector<G> {
    pub fn new(first: G, rest: Vec<G>) -> Self {
        Self { first, rest }
    }

    /// The number of scalars this vector can still absorb.
    pub fn domain_size(&self) -> usize {
        self.rest.len()
    }

    /// The total number of group elements held.
    pub fn size(&self) -> usize {
        1 + self.rest.len()
    }

    pub fn is_fully_accumulated(&self) -> bool {
        self.rest.is_empty()
    }

    /// Folds `Σ scalars[i] · rest[offset + i]` into the accumulator,
    /// consuming the covered positions of `rest`. Returns `None` when the
    /// scalars do not fit in the remaining domain.
    pub fn accumulate_chunk(&self, scalars: &[G::ScalarField], offset: usize) -> Option<Self> {
        let end = offset.checked_add(scalars.len())?;
        if end > self.rest.len() {
            return None;
        }

        let mut accumulator = self.first.to_projective();
        for (scalar, base) in scalars.iter().zip_eq(&self.rest[offset..end]) {
            accumulator += *base * *scalar;
        }

        let mut rest = Vec::with_capacity(self.rest.len() - scalars.len());
        rest.extend_from_slice(&self.rest[..offset]);
        rest.extend_from_slice(&self.rest[end..]);

        Some(Self { first: accumulator.to_affine(), rest })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;
    use snarkvm_curves::bls12_377::{Fr, G1Affine, G1Projective};
    use snarkvm_fields::Zero;
    use snarkvm_utilities::rand::Uniform;

    fn random_vector(len: usize) -> (AccumulationVector<G1Affine>, Vec<Fr>) {
        let mut rng = XorShiftRng::seed_from_u64(1187447362u64);
        let first = G1Projective::rand(&mut rng).to_affine();
        let rest = (0..len).map(|_| G1Projective::rand(&mut rng).to_affine()).collect();
        let scalars = (0..len).map(|_| Fr::rand(&mut rng)).collect();
        (AccumulationVector::new(first, rest), scalars)
    }

    #[test]
    fn full_accumulation() {
        let (vector, scalars) = random_vector(7);

        let mut expected = vector.first.to_projective();
        for (scalar, base) in scalars.iter().zip(&vector.rest) {
            expected += *base * *scalar;
        }

        let accumulated = vector.accumulate_chunk(&scalars, 0).unwrap();
        assert!(accumulated.is_fully_accumulated());
        assert_eq!(accumulated.domain_size(), 0);
        assert_eq!(accumulated.first, expected.to_affine());
    }

    #[test]
    fn partial_accumulation_keeps_the_tail() {
        let (vector, scalars) = random_vector(7);

        let accumulated = vector.accumulate_chunk(&scalars[..3], 0).unwrap();
        assert!(!accumulated.is_fully_accumulated());
        assert_eq!(accumulated.domain_size(), 4);
        assert_eq!(accumulated.rest, vector.rest[3..]);

        // Folding the tail afterwards matches one full pass.
        let resumed = accumulated.accumulate_chunk(&scalars[3..], 0).unwrap();
        let whole = vector.accumulate_chunk(&scalars, 0).unwrap();
        assert_eq!(resumed, whole);
    }

    #[test]
    fn zero_scalars_contribute_nothing() {
        let (vector, _) = random_vector(5);
        let zeros = vec![Fr::zero(); 5];
        let accumulated = vector.accumulate_chunk(&zeros, 0).unwrap();
        assert_eq!(accumulated.first, vector.first);
    }

    #[test]
    fn oversized_chunk_is_rejected() {
        let (vector, _) = random_vector(3);
        let scalars = vec![Fr::zero(); 4];
        assert!(vector.accumulate_chunk(&scalars, 0).is_none());
        assert!(vector.accumulate_chunk(&scalars[..3], 1).is_none());
    }

    #[test]
    fn serialization_round_trip() {
        let (vector, _) = random_vector(4);
        let mut bytes = vec![];
        vector.serialize_compressed(&mut bytes).unwrap();
        let recovered = AccumulationVector::<G1Affine>::deserialize_compressed(&bytes[..]).unwrap();
        assert_eq!(vector, recovered);
    }
}
