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

use crate::{cfg_chunks, cfg_into_iter};
use snarkvm_curves::traits::{AffineCurve, ProjectiveCurve};
use snarkvm_fields::{FieldParameters, One, PrimeField, Zero};
use snarkvm_utilities::biginteger::BigInteger;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub struct VariableBase;

impl VariableBase {
    /// Computes `Σ scalars[i] · bases[i]` with the Pippenger bucket method,
    /// accumulating affine bases into projective buckets by mixed addition.
    pub fn msm<G: AffineCurve>(
        bases: &[G],
        scalars: &[<G::ScalarField as PrimeField>::BigInteger],
    ) -> G::Projective {
        let c = if scalars.len() < 32 {
            3
        } else {
            (2.0 / 3.0 * (scalars.len() as f64).log2() + 2.0).ceil() as usize
        };

        let num_bits = <G::ScalarField as PrimeField>::Parameters::MODULUS_BITS as usize;
        let fr_one = G::ScalarField::one().to_bigint();

        let zero = G::Projective::zero();
        let window_starts: Vec<_> = (0..num_bits).step_by(c).collect();

        // Each window is of size `c`. We divide up the bits 0..num_bits into
        // windows of size `c` and process each window independently.
        let window_sums: Vec<_> = cfg_into_iter!(window_starts)
            .map(|w_start| {
                let mut res = zero;
                // We don't need the "zero" bucket, so we only have 2^c - 1 buckets.
                let mut buckets = vec![zero; (1 << c) - 1];
                scalars.iter().zip(bases).filter(|(s, _)| !s.is_zero()).for_each(|(&scalar, base)| {
                    if scalar == fr_one {
                        // Unit scalars are processed once, in the first window.
                        if w_start == 0 {
                            res.add_assign_mixed(base);
                        }
                    } else {
                        let mut scalar = scalar;

                        // Right-shift the scalar by `w_start`, thus getting rid
                        // of the lower bits.
                        scalar.divn(w_start as u32);

                        // Mod the remaining bits by the window size.
                        let scalar = scalar.as_ref()[0] % (1 << c);

                        // If the scalar is non-zero, we update the
                        // corresponding bucket.
                        if scalar != 0 {
                            buckets[(scalar - 1) as usize].add_assign_mixed(base);
                        }
                    }
                });

                // Compute sum_{i in 0..num_buckets} (sum_{j in i..num_buckets} bucket[j])
                // by traversing the buckets from the highest to the lowest.
                let mut running_sum = G::Projective::zero();
                for bucket in buckets.into_iter().rev() {
                    running_sum += &bucket;
                    res += &running_sum;
                }

                res
            })
            .collect();

        // We store the sum for the lowest window.
        let lowest = *window_sums.first().unwrap();

        // We're traversing windows from high to low.
        lowest
            + window_sums[1..].iter().rev().fold(zero, |mut total, sum_i| {
                total += sum_i;
                for _ in 0..c {
                    total.double_in_place();
                }
                total
            })
    }

    /// Computes `Σ scalars[i] · bases[i]` by partitioning the input into
    /// `chunks` contiguous pieces and combining the partial sums. Any chunk
    /// count yields the same point.
    pub fn msm_chunked<G: AffineCurve>(
        bases: &[G],
        scalars: &[<G::ScalarField as PrimeField>::BigInteger],
        chunks: usize,
    ) -> G::Projective {
        if scalars.is_empty() {
            return G::Projective::zero();
        }
        let chunks = chunks.clamp(1, scalars.len());
        if chunks == 1 {
            return Self::msm(bases, scalars);
        }

        let chunk_size = (scalars.len() + chunks - 1) / chunks;
        cfg_chunks!(bases, chunk_size)
            .zip(cfg_chunks!(scalars, chunk_size))
            .map(|(bases, scalars)| Self::msm(bases, scalars))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;
    use snarkvm_curves::bls12_377::{Fr, G1Affine, G1Projective};
    use snarkvm_utilities::rand::Uniform;

    fn test_data(samples: usize) -> (Vec<G1Affine>, Vec<Fr>) {
        let mut rng = XorShiftRng::seed_from_u64(234872846u64);

        let v = (0..samples).map(|_| Fr::rand(&mut rng)).collect::<Vec<_>>();
        let g = (0..samples).map(|_| G1Projective::rand(&mut rng).to_affine()).collect::<Vec<_>>();

        (g, v)
    }

    fn to_bigints(scalars: &[Fr]) -> Vec<<Fr as PrimeField>::BigInteger> {
        scalars.iter().map(|s| s.to_bigint()).collect()
    }

    fn naive_msm(bases: &[G1Affine], scalars: &[Fr]) -> G1Projective {
        let mut acc = G1Projective::zero();
        for (base, scalar) in bases.iter().zip(scalars.iter()) {
            acc += *base * *scalar;
        }
        acc
    }

    #[test]
    fn test_msm_matches_naive() {
        let (bases, scalars) = test_data(100);
        let naive = naive_msm(&bases, &scalars);
        let pippenger = VariableBase::msm(bases.as_slice(), to_bigints(&scalars).as_slice());
        assert_eq!(naive, pippenger);
    }

    #[test]
    fn test_msm_chunking_invariance() {
        let (bases, scalars) = test_data(1 << 10);
        let scalars = to_bigints(&scalars);
        let whole = VariableBase::msm(bases.as_slice(), scalars.as_slice());
        for chunks in [1, 2, 3, 8, 64] {
            let chunked = VariableBase::msm_chunked(bases.as_slice(), scalars.as_slice(), chunks);
            assert_eq!(whole, chunked);
        }
    }

    #[test]
    fn test_msm_empty_input() {
        assert_eq!(VariableBase::msm_chunked::<G1Affine>(&[], &[], 8), G1Projective::zero());
    }
}
