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
    msm::{self, VariableBase},
    snark::dfgk::{Proof, ProvingKey, UscsToSsp},
    uscs::SynthesisError,
};
use snarkvm_curves::traits::{AffineCurve, PairingEngine, ProjectiveCurve};
use snarkvm_fields::PrimeField;
use snarkvm_utilities::rand::Uniform;

use rand::{CryptoRng, Rng};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Produces a proof that the primary input extends to a satisfying
/// assignment of the constraint system embedded in `proving_key`, blinded
/// by a scalar drawn from `rng`.
pub fn create_random_proof<E: PairingEngine, R: Rng + CryptoRng>(
    proving_key: &ProvingKey<E>,
    primary_input: &[E::Fr],
    auxiliary_input: &[E::Fr],
    rng: &mut R,
) -> Result<Proof<E>, SNARKError> {
    let d = E::Fr::rand(rng);
    create_proof(proving_key, primary_input, auxiliary_input, d)
}

/// Produces a proof with the given blinding scalar `d`. The output is a
/// pure function of the arguments; callers wanting zero-knowledge must draw
/// `d` uniformly at random.
pub fn create_proof<E: PairingEngine>(
    proving_key: &ProvingKey<E>,
    primary_input: &[E::Fr],
    auxiliary_input: &[E::Fr],
    d: E::Fr,
) -> Result<Proof<E>, SNARKError> {
    let prover_time = start_timer!(|| "DFGK::Prover");

    let constraint_system = &proving_key.constraint_system;
    if !constraint_system.is_satisfied(primary_input, auxiliary_input)? {
        return Err(SynthesisError::Unsatisfiable.into());
    }

    let witness = UscsToSsp::witness_map(constraint_system, primary_input, auxiliary_input, d)?;
    let num_variables = witness.num_variables;
    let num_inputs = witness.num_inputs;
    let degree = witness.degree;

    if proving_key.v_g1_query.len() != num_variables - num_inputs + 1
        || proving_key.alpha_v_g1_query.len() != num_variables - num_inputs + 1
        || proving_key.h_g1_query.len() != degree + 1
        || proving_key.v_g2_query.len() != num_variables + 2
    {
        return Err(SNARKError::MalformedInstance);
    }

    let coefficients_for_vs =
        cfg_iter!(witness.coefficients_for_vs).map(|c| c.to_bigint()).collect::<Vec<_>>();
    let coefficients_for_h =
        cfg_iter!(witness.coefficients_for_h).map(|c| c.to_bigint()).collect::<Vec<_>>();

    let chunks = msm::num_chunks();

    // The queries keep the blinding slots at the end; seed each component
    // with its blinding contribution before the multi-exponentiations.
    let v_time = start_timer!(|| "Compute the V query in G1");
    let mut v_g1 = proving_key.v_g1_query[num_variables - num_inputs] * d;
    v_g1 += VariableBase::msm_chunked(
        &proving_key.v_g1_query[..num_variables - num_inputs],
        &coefficients_for_vs[num_inputs..num_variables],
        chunks,
    );
    end_timer!(v_time);

    let alpha_v_time = start_timer!(|| "Compute the alpha·V query in G1");
    let mut alpha_v_g1 = proving_key.alpha_v_g1_query[num_variables - num_inputs] * d;
    alpha_v_g1 += VariableBase::msm_chunked(
        &proving_key.alpha_v_g1_query[..num_variables - num_inputs],
        &coefficients_for_vs[num_inputs..num_variables],
        chunks,
    );
    end_timer!(alpha_v_time);

    let h_time = start_timer!(|| "Compute the H query in G1");
    let h_g1 = VariableBase::msm_chunked(
        &proving_key.h_g1_query[..degree + 1],
        &coefficients_for_h[..degree + 1],
        chunks,
    );
    end_timer!(h_time);

    let v_g2_time = start_timer!(|| "Compute the V query in G2");
    let mut v_g2 = proving_key.v_g2_query[0].to_projective() + proving_key.v_g2_query[num_variables + 1] * d;
    v_g2 += VariableBase::msm_chunked(
        &proving_key.v_g2_query[1..num_variables + 1],
        &coefficients_for_vs[..num_variables],
        chunks,
    );
    end_timer!(v_g2_time);

    end_timer!(prover_time);
    Ok(Proof {
        v_g1: v_g1.to_affine(),
        alpha_v_g1: alpha_v_g1.to_affine(),
        h_g1: h_g1.to_affine(),
        v_g2: v_g2.to_affine(),
    })
}
