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

use crate::{snark::dfgk::AccumulationVector, uscs::ConstraintSystem};
use snarkvm_curves::traits::{AffineCurve, PairingCurve, PairingEngine};
use snarkvm_utilities::{
    io::{self, Read, Write},
    serialize::*,
    FromBytes,
    ToBytes,
};

/// A proving key for the USCS ppzkSNARK.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct ProvingKey<E: PairingEngine> {
    /// Encodings `V_i(t) · G1` for the non-input variables, with the
    /// vanishing value `Z(t) · G1` in the trailing blinding slot.
    pub v_g1_query: Vec<E::G1Affine>,
    /// The same query scaled by `alpha`.
    pub alpha_v_g1_query: Vec<E::G1Affine>,
    /// Encodings `t^i · G1` for `0 <= i <= degree`.
    pub h_g1_query: Vec<E::G1Affine>,
    /// Encodings `V_i(t) · G2` for every variable. Index 0 holds the
    /// constant-one slot and the last index holds the blinding slot.
    pub v_g2_query: Vec<E::G2Affine>,
    /// The constraint system; proving re-derives the witness map from it.
    pub constraint_system: ConstraintSystem<E::Fr>,
}

impl<E: PairingEngine> ProvingKey<E> {
    /// The number of G1 elements held across all queries.
    pub fn num_g1_elements(&self) -> usize {
        self.v_g1_query.len() + self.alpha_v_g1_query.len() + self.h_g1_query.len()
    }

    /// The number of G2 elements held.
    pub fn num_g2_elements(&self) -> usize {
        self.v_g2_query.len()
    }
}

impl<E: PairingEngine> ToBytes for ProvingKey<E> {
    fn write_le<W: Write>(&self, mut writer: W) -> io::Result<()> {
        self.serialize_compressed(&mut writer).map_err(|_| error("could not serialize ProvingKey"))
    }
}

impl<E: PairingEngine> FromBytes for ProvingKey<E> {
    fn read_le<R: Read>(mut reader: R) -> io::Result<Self> {
        Self::deserialize_compressed(&mut reader).map_err(|_| error("could not deserialize ProvingKey"))
    }
}

/// A verifying key for the USCS ppzkSNARK.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct VerifyingKey<E: PairingEngine> {
    pub tilde_g2: E::G2Affine,
    pub alpha_tilde_g2: E::G2Affine,
    pub z_g2: E::G2Affine,
    /// The input-commitment query; its domain size equals the number of inputs.
    pub encoded_ic_query: AccumulationVector<E::G1Affine>,
}

impl<E: PairingEngine> VerifyingKey<E> {
    pub fn num_g1_elements(&self) -> usize {
        self.encoded_ic_query.size()
    }

    pub fn num_g2_elements(&self) -> usize {
        3
    }
}

impl<E: PairingEngine> ToBytes for VerifyingKey<E> {
    fn write_le<W: Write>(&self, mut writer: W) -> io::Result<()> {
        self.serialize_compressed(&mut writer).map_err(|_| error("could not serialize VerifyingKey"))
    }
}

impl<E: PairingEngine> FromBytes for VerifyingKey<E> {
    fn read_le<R: Read>(mut reader: R) -> io::Result<Self> {
        Self::deserialize_compressed(&mut reader).map_err(|_| error("could not deserialize VerifyingKey"))
    }
}

/// A proving key together with the matching verifying key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keypair<E: PairingEngine> {
    pub proving_key: ProvingKey<E>,
    pub verifying_key: VerifyingKey<E>,
}

impl<E: PairingEngine> Keypair<E> {
    pub fn new(proving_key: ProvingKey<E>, verifying_key: VerifyingKey<E>) -> Self {
        Self { proving_key, verifying_key }
    }
}

/// A verifying key prepared (preprocessed) for use in pairings.
///
/// Compared to a plain verifying key, this carries a small constant amount of
/// precomputed information that makes online verification faster. It is
/// read-only and may be cached across many verifications.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct PreparedVerifyingKey<E: PairingEngine> {
    /// The plain verifying key, kept for the input-commitment query.
    pub vk: VerifyingKey<E>,
    pub g1_one_prepared: <E::G1Affine as PairingCurve>::Prepared,
    pub g2_one_prepared: <E::G2Affine as PairingCurve>::Prepared,
    pub tilde_g2_prepared: <E::G2Affine as PairingCurve>::Prepared,
    pub alpha_tilde_g2_prepared: <E::G2Affine as PairingCurve>::Prepared,
    pub z_g2_prepared: <E::G2Affine as PairingCurve>::Prepared,
    /// `e(G1::one, G2::one)`, after final exponentiation.
    pub pairing_of_g1_and_g2: E::Fqk,
}

impl<E: PairingEngine> PreparedVerifyingKey<E> {
    pub fn encoded_ic_query(&self) -> &AccumulationVector<E::G1Affine> {
        &self.vk.encoded_ic_query
    }
}

impl<E: PairingEngine> From<PreparedVerifyingKey<E>> for VerifyingKey<E> {
    fn from(other: PreparedVerifyingKey<E>) -> Self {
        other.vk
    }
}

impl<E: PairingEngine> ToBytes for PreparedVerifyingKey<E> {
    fn write_le<W: Write>(&self, mut writer: W) -> io::Result<()> {
        self.serialize_compressed(&mut writer).map_err(|_| error("could not serialize PreparedVerifyingKey"))
    }
}

impl<E: PairingEngine> FromBytes for PreparedVerifyingKey<E> {
    fn read_le<R: Read>(mut reader: R) -> io::Result<Self> {
        Self::deserialize_compressed(&mut reader).map_err(|_| error("could not deserialize PreparedVerifyingKey"))
    }
}

/// A proof for the USCS ppzkSNARK.
///
/// While the proof has a structure, callers merely produce, serialize, and
/// verify proofs; the layout is exposed for statistics only.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Proof<E: PairingEngine> {
    pub v_g1: E::G1Affine,
    pub alpha_v_g1: E::G1Affine,
    pub h_g1: E::G1Affine,
    pub v_g2: E::G2Affine,
}

impl<E: PairingEngine> Proof<E> {
    /// Checks that every component is on its curve and in the prime-order subgroup.
    pub fn is_well_formed(&self) -> bool {
        let g1_well_formed = |p: &E::G1Affine| p.is_on_curve() && p.is_in_correct_subgroup_assuming_on_curve();
        g1_well_formed(&self.v_g1)
            && g1_well_formed(&self.alpha_v_g1)
            && g1_well_formed(&self.h_g1)
            && self.v_g2.is_on_curve()
            && self.v_g2.is_in_correct_subgroup_assuming_on_curve()
    }

    pub fn num_g1_elements(&self) -> usize {
        3
    }

    pub fn num_g2_elements(&self) -> usize {
        1
    }

    /// The byte length of a compressed proof.
    pub fn compressed_proof_size() -> usize {
        Self::default().serialized_size(Compress::Yes)
    }

    /// The byte length of an uncompressed proof.
    pub fn uncompressed_proof_size() -> usize {
        Self::default().serialized_size(Compress::No)
    }
}

impl<E: PairingEngine> Default for Proof<E> {
    /// An invalid proof made of valid curve points.
    fn default() -> Self {
        Self {
            v_g1: E::G1Affine::prime_subgroup_generator(),
            alpha_v_g1: E::G1Affine::prime_subgroup_generator(),
            h_g1: E::G1Affine::prime_subgroup_generator(),
            v_g2: E::G2Affine::prime_subgroup_generator(),
        }
    }
}

impl<E: PairingEngine> ToBytes for Proof<E> {
    fn write_le<W: Write>(&self, mut writer: W) -> io::Result<()> {
        self.serialize_compressed(&mut writer).map_err(|_| error("could not serialize Proof"))
    }
}

impl<E: PairingEngine> FromBytes for Proof<E> {
    fn read_le<R: Read>(mut reader: R) -> io::Result<Self> {
        Self::deserialize_compressed(&mut reader).map_err(|_| error("could not deserialize Proof"))
    }
}

fn error(message: &str) -> io::Error {
    io::Error::new(io::ErrorKind::Other, message.to_string())
}
