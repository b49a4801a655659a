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

use crate::{
    cfg_iter,
    errors::SNARKError,
    msm::FixedBase,
    snark::dfgk::{AccumulationVector, Keypair, ProvingKey, UscsToSsp, VerifyingKey},
    uscs::ConstraintSystem,
};
use snarkvm_curves::traits::{PairingEngine, ProjectiveCurve};
use snarkvm_fields::{PrimeField, Zero};
use snarkvm_utilities::rand::Uniform;

use rand::{CryptoRng, Rng};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Produces a proving key and a verifying key for the given constraint
/// system.
///
/// The evaluation point `t` and the scalars `alpha` and `tilde` are drawn
/// from `rng` and must be discarded with it; every trusted setup must be
/// given its own independent randomness stream.
pub fn generate_random_parameters<E: PairingEngine, R: Rng + CryptoRng>(
    constraint_system: &ConstraintSystem<E::Fr>,
    rng: &mut R,
) -> Result<Keypair<E>, SNARKError> {
    let setup_time = start_timer!(|| "DFGK::Generator");

    let t = E::Fr::rand(rng);
    let ssp = UscsToSsp::instance_map_with_evaluation(constraint_system, &t)?;
    let zt = ssp.zt;

    let mut vt_table = ssp.vt;
    vt_table.push(zt);
    let ht_table = ssp.ht;

    debug_assert_eq!(vt_table.len(), ssp.num_variables + 2);
    debug_assert_eq!(ht_table.len(), ssp.degree + 1);

    if vt_table.len() < ssp.num_inputs + 1 {
        return Err(SNARKError::MalformedInstance);
    }
    let (xt_table, vt_minus_xt_table) = vt_table.split_at(ssp.num_inputs + 1);

    // An input whose selector vanishes at `t` cannot be committed to.
    if let Some(index) = xt_table.iter().position(|xt| xt.is_zero()) {
        return Err(SNARKError::ZeroInputEncoding(index));
    }

    let alpha = E::Fr::rand(rng);

    let scalar_bits = E::Fr::size_in_bits();

    let g1_exp_count = 2 * vt_minus_xt_table.len() + ht_table.len();
    let g2_exp_count = vt_table.len();

    let g1_window = FixedBase::get_mul_window_size(g1_exp_count);
    let g2_window = FixedBase::get_mul_window_size(g2_exp_count);

    let g1_one = E::G1Projective::prime_subgroup_generator();
    let g2_one = E::G2Projective::prime_subgroup_generator();

    let table_time = start_timer!(|| "Compute window tables");
    let g1_table = FixedBase::get_window_table::<E::G1Projective>(scalar_bits, g1_window, g1_one);
    let g2_table = FixedBase::get_window_table::<E::G2Projective>(scalar_bits, g2_window, g2_one);
    end_timer!(table_time);

    let queries_time = start_timer!(|| "Compute proving key queries");
    let v_g1_query = FixedBase::msm::<E::G1Projective>(scalar_bits, g1_window, &g1_table, vt_minus_xt_table);

    let alpha_vt_minus_xt_table = cfg_iter!(vt_minus_xt_table).map(|vt| alpha * vt).collect::<Vec<_>>();
    let alpha_v_g1_query =
        FixedBase::msm::<E::G1Projective>(scalar_bits, g1_window, &g1_table, &alpha_vt_minus_xt_table);

    let h_g1_query = FixedBase::msm::<E::G1Projective>(scalar_bits, g1_window, &g1_table, &ht_table);

    let v_g2_query = FixedBase::msm::<E::G2Projective>(scalar_bits, g2_window, &g2_table, &vt_table);
    end_timer!(queries_time);

    let tilde = E::Fr::rand(rng);
    let tilde_g2 = (g2_one * tilde).to_affine();
    let alpha_tilde_g2 = (g2_one * (alpha * tilde)).to_affine();
    let z_g2 = (g2_one * zt).to_affine();

    let ic_time = start_timer!(|| "Compute the input-commitment query");
    let encoded_ic_base = (g1_one * xt_table[0]).to_affine();
    let encoded_ic_values = E::G1Projective::batch_normalization_into_affine(FixedBase::msm::<E::G1Projective>(
        scalar_bits,
        g1_window,
        &g1_table,
        &xt_table[1..],
    ));
    end_timer!(ic_time);

    let verifying_key = VerifyingKey {
        tilde_g2,
        alpha_tilde_g2,
        z_g2,
        encoded_ic_query: AccumulationVector::new(encoded_ic_base, encoded_ic_values),
    };

    let proving_key = ProvingKey {
        v_g1_query: E::G1Projective::batch_normalization_into_affine(v_g1_query),
        alpha_v_g1_query: E::G1Projective::batch_normalization_into_affine(alpha_v_g1_query),
        h_g1_query: E::G1Projective::batch_normalization_into_affine(h_g1_query),
        v_g2_query: E::G2Projective::batch_normalization_into_affine(v_g2_query),
        constraint_system: constraint_system.clone(),
    };

    end_timer!(setup_time);
    Ok(Keypair::new(proving_key, verifying_key))
}
