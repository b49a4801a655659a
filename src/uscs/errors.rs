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

/// This is an error that could occur while working with a constraint system.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SynthesisError {
    #[error("the variable assignment does not match the declared variables")]
    AssignmentMissing,

    #[error("the number of constraints exceeds the largest supported evaluation domain")]
    PolynomialDegreeTooLarge,

    #[error("encountered an identity element in a pairing product")]
    UnexpectedIdentity,

    #[error("the constraint system is unsatisfied by the assignment")]
    Unsatisfiable,
}
