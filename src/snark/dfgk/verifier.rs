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
    errors::SNARKError,
    snark::dfgk::{PreparedVerifyingKey, Proof, VerifyingKey},
    uscs::SynthesisError,
};
use snarkvm_curves::traits::{AffineCurve, PairingCurve, PairingEngine, ProjectiveCurve};
use snarkvm_fields::One;

use core::ops::Neg;

/// Converts a verifying key into the prepared form consumed by the online
/// verifiers. The result is read-only and may be cached across many
/// verifications.
pub fn prepare_verifying_key<E: PairingEngine>(vk: VerifyingKey<E>) -> PreparedVerifyingKey<E> {
    let g1_one = E::G1Affine::prime_subgroup_generator();
    let g2_one = E::G2Affine::prime_subgroup_generator();

    PreparedVerifyingKey {
        g1_one_prepared: g1_one.prepare(),
        g2_one_prepared: g2_one.prepare(),
        tilde_g2_prepared: vk.tilde_g2.prepare(),
        alpha_tilde_g2_prepared: vk.alpha_tilde_g2.prepare(),
        z_g2_prepared: vk.z_g2.prepare(),
        pairing_of_g1_and_g2: E::pairing(g1_one, g2_one),
        vk,
    }
}

/// Verifies a proof against a prepared key with strong input consistency:
/// the primary input must cover every declared input.
pub fn verify_proof<E: PairingEngine>(
    prepared_verifying_key: &PreparedVerifyingKey<E>,
    proof: &Proof<E>,
    primary_input: &[E::Fr],
) -> Result<bool, SNARKError> {
    if prepared_verifying_key.encoded_ic_query().domain_size() != primary_input.len() {
        return Ok(false);
    }
    verify_proof_with_weak_input_consistency(prepared_verifying_key, proof, primary_input)
}

/// Verifies a proof against a prepared key with weak input consistency:
/// declared inputs beyond the supplied primary input are taken to be zero.
pub fn verify_proof_with_weak_input_consistency<E: PairingEngine>(
    prepared_verifying_key: &PreparedVerifyingKey<E>,
    proof: &Proof<E>,
    primary_input: &[E::Fr],
) -> Result<bool, SNARKError> {
    let pvk = prepared_verifying_key;

    // Zero scalars contribute nothing to the inner product, so the positions
    // left unaccumulated stand for implicitly-zero inputs.
    let accumulated_ic = match pvk.encoded_ic_query().accumulate_chunk(primary_input, 0) {
        Some(accumulated) => accumulated,
        None => return Ok(false),
    };
    let acc = accumulated_ic.first;

    if !proof.is_well_formed() {
        return Ok(false);
    }

    let v_g1_with_acc = proof.v_g1.to_projective().add_mixed(&acc).to_affine();
    let v_g1_with_acc_prepared = v_g1_with_acc.prepare();
    let v_g2_prepared = proof.v_g2.prepare();

    // Membership: e(V + acc, G2) = e(G1, V_g2).
    let v_g2_neg_prepared = proof.v_g2.neg().prepare();
    let membership = E::final_exponentiation(&E::miller_loop(
        [(&v_g1_with_acc_prepared, &pvk.g2_one_prepared), (&pvk.g1_one_prepared, &v_g2_neg_prepared)]
            .iter()
            .copied(),
    ))
    .ok_or(SynthesisError::UnexpectedIdentity)?;
    if !membership.is_one() {
        return Ok(false);
    }

    // Divisibility: e(V + acc, V_g2) = e(G1, G2) · e(H, Z).
    let h_g1_neg_prepared = proof.h_g1.neg().prepare();
    let divisibility = E::final_exponentiation(&E::miller_loop(
        [(&v_g1_with_acc_prepared, &v_g2_prepared), (&h_g1_neg_prepared, &pvk.z_g2_prepared)]
            .iter()
            .copied(),
    ))
    .ok_or(SynthesisError::UnexpectedIdentity)?;
    if divisibility != pvk.pairing_of_g1_and_g2 {
        return Ok(false);
    }

    // Same coefficients: e(V, alpha·tilde) = e(alpha·V, tilde).
    let v_g1_prepared = proof.v_g1.prepare();
    let alpha_v_g1_neg_prepared = proof.alpha_v_g1.neg().prepare();
    let same_coefficients = E::final_exponentiation(&E::miller_loop(
        [(&v_g1_prepared, &pvk.alpha_tilde_g2_prepared), (&alpha_v_g1_neg_prepared, &pvk.tilde_g2_prepared)]
            .iter()
            .copied(),
    ))
    .ok_or(SynthesisError::UnexpectedIdentity)?;

    Ok(same_coefficients.is_one())
}

/// Prepares the verifying key and runs the strong verifier.
pub fn verify<E: PairingEngine>(
    verifying_key: &VerifyingKey<E>,
    proof: &Proof<E>,
    primary_input: &[E::Fr],
) -> Result<bool, SNARKError> {
    let prepared_verifying_key = prepare_verifying_key(verifying_key.clone());
    verify_proof(&prepared_verifying_key, proof, primary_input)
}

/// Prepares the verifying key and runs the weak verifier.
pub fn verify_with_weak_input_consistency<E: PairingEngine>(
    verifying_key: &VerifyingKey<E>,
    proof: &Proof<E>,
    primary_input: &[E::Fr],
) -> Result<bool, SNARKError> {
    let prepared_verifying_key = prepare_verifying_key(verifying_key.clone());
    verify_proof_with_weak_input_consistency(&prepared_verifying_key, proof, primary_input)
}
