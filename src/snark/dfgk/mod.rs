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

//! A preprocessing zkSNARK for unitary-square constraint systems.
//!
//! The scheme instantiates the square-span-program protocol of [DFGK14],
//! following, extending, and optimizing the approach described in [BCTV14].
//! It consists of a generator producing a proving and a verifying key for a
//! fixed constraint system, a prover emitting four-group-element proofs, and
//! verifiers (for plain and prepared keys, with strong or weak input
//! consistency) deciding acceptance with three pairing checks.
//!
//! [DFGK14]: https://eprint.iacr.org/2014/718
//! [BCTV14]: https://eprint.iacr.org/2013/879

mod accumulation_vector;
pub use accumulation_vector::*;

mod data_structures;
pub use data_structures::*;

mod generator;
pub use generator::*;

mod prover;
pub use prover::*;

mod uscs_to_ssp;
pub use uscs_to_ssp::*;

mod verifier;
pub use verifier::*;
