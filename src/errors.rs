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

use crate::uscs::SynthesisError;

#[derive(Debug, Error)]
pub enum SNARKError {
    #[error("{}", _0)]
    AnyhowError(#[from] anyhow::Error),

    #[error("the query lengths in the proving key contradict the constraint system")]
    MalformedInstance,

    #[error("{}", _0)]
    Message(String),

    #[error("{}", _0)]
    SynthesisError(SynthesisError),

    #[error("the encoding of input {} is the identity and cannot commit to anything", _0)]
    ZeroInputEncoding(usize),
}

impl From<SynthesisError> for SNARKError {
    fn from(error: SynthesisError) -> Self {
        SNARKError::SynthesisError(error)
    }
}
