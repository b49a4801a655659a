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

use crate::{cfg_iter, cfg_iter_mut};
use snarkvm_curves::traits::ProjectiveCurve;
use snarkvm_fields::{PrimeField, Zero};
use snarkvm_utilities::biginteger::BigInteger;
use snarkvm_utilities::ToBits;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Windowed exponentiation of a fixed base, used by the setup to encode
/// whole tables of field elements in one pass.
pub struct FixedBase;

impl FixedBase {
    /// The window size to use for `num_scalars` exponentiations of the same base.
    pub fn get_mul_window_size(num_scalars: usize) -> usize {
        if num_scalars < 32 {
            3
        } else {
            (num_scalars as f64).ln().ceil() as usize
        }
    }

    /// Precompute the multiples `(2^{window·j} · i) · g` for every window `j`
    /// and every `i` in the window, normalized to affine form.
    pub fn get_window_table<T: ProjectiveCurve>(scalar_size: usize, window: usize, g: T) -> Vec<Vec<T::Affine>> {
        let in_window = 1 << window;
        let outerc = (scalar_size + window - 1) / window;
        let last_in_window = 1 << (scalar_size - (outerc - 1) * window);

        let mut multiples_of_g = vec![vec![T::zero(); in_window]; outerc];

        let mut g_outer = g;
        let mut g_outers = Vec::with_capacity(outerc);
        for _ in 0..outerc {
            g_outers.push(g_outer);
            for _ in 0..window {
                g_outer.double_in_place();
            }
        }

        cfg_iter_mut!(multiples_of_g).enumerate().zip(g_outers).for_each(
            |((outer, multiples), g_outer)| {
                let cur_in_window = if outer == outerc - 1 { last_in_window } else { in_window };

                let mut g_inner = T::zero();
                for inner in multiples.iter_mut().take(cur_in_window) {
                    *inner = g_inner;
                    g_inner += &g_outer;
                }
            },
        );

        multiples_of_g.into_iter().map(|multiples| T::batch_normalization_into_affine(multiples)).collect()
    }

    /// Compute `scalar · g` using the window table for `g`.
    pub fn windowed_mul<T: ProjectiveCurve>(
        outerc: usize,
        window: usize,
        multiples_of_g: &[Vec<T::Affine>],
        scalar: &T::ScalarField,
    ) -> T {
        let modulus_size = T::ScalarField::size_in_bits();
        let scalar_bits = scalar.to_bigint().to_bits_le();

        let mut res = T::zero();
        for outer in 0..outerc {
            let mut inner = 0usize;
            for i in 0..window {
                if outer * window + i < modulus_size && scalar_bits[outer * window + i] {
                    inner |= 1 << i;
                }
            }
            res.add_assign_mixed(&multiples_of_g[outer][inner]);
        }
        res
    }

    /// Compute `scalar_i · g` for every scalar in `v`, sharing one window table.
    pub fn msm<T: ProjectiveCurve>(
        scalar_size: usize,
        window: usize,
        table: &[Vec<T::Affine>],
        v: &[T::ScalarField],
    ) -> Vec<T> {
        let outerc = (scalar_size + window - 1) / window;
        debug_assert!(outerc <= table.len());

        cfg_iter!(v).map(|e| Self::windowed_mul::<T>(outerc, window, table, e)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;
    use snarkvm_curves::{
        bls12_377::{Fr, G1Projective, G2Projective},
        traits::ProjectiveCurve,
    };
    use snarkvm_utilities::rand::Uniform;

    fn batch_exp_matches_mul<T: ProjectiveCurve<ScalarField = Fr>>(samples: usize) {
        let mut rng = XorShiftRng::seed_from_u64(234872846u64);

        let v = (0..samples).map(|_| Fr::rand(&mut rng)).collect::<Vec<_>>();
        let g = T::rand(&mut rng);

        let scalar_size = Fr::size_in_bits();
        let window = FixedBase::get_mul_window_size(samples);
        let table = FixedBase::get_window_table::<T>(scalar_size, window, g);

        let result = FixedBase::msm::<T>(scalar_size, window, &table, &v);
        for (computed, scalar) in result.into_iter().zip(v) {
            assert_eq!(computed, g * scalar);
        }
    }

    #[test]
    fn test_batch_exp_g1() {
        batch_exp_matches_mul::<G1Projective>(100);
    }

    #[test]
    fn test_batch_exp_g2() {
        batch_exp_matches_mul::<G2Projective>(10);
    }
}
