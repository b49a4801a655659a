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

use crate::uscs::Variable;
use snarkvm_fields::Field;
use snarkvm_utilities::serialize::*;

use std::ops::{Add, AddAssign, MulAssign, Neg, Sub};

/// A linear combination of variables with field coefficients. A constraint
/// asserts that the value of the combination squares to one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinearCombination<F: Field>(pub Vec<(Variable, F)>);

impl<F: Field> Default for LinearCombination<F> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<F: Field> LinearCombination<F> {
    /// Returns an empty linear combination.
    #[inline]
    pub fn zero() -> Self {
        LinearCombination(vec![])
    }

    /// Returns the number of terms in the combination.
    pub fn num_terms(&self) -> usize {
        self.0.len()
    }

    /// Negate the coefficients of all variables in `self`.
    pub fn negate_in_place(&mut self) {
        self.0.iter_mut().for_each(|(_, coeff)| *coeff = -*coeff);
    }

    fn append(mut self, coeff: F, variable: Variable) -> Self {
        // Coalesce with an existing term instead of growing the combination.
        match self.0.iter_mut().find(|(other, _)| *other == variable) {
            Some((_, existing)) => *existing += coeff,
            None => self.0.push((variable, coeff)),
        }
        self
    }
}

impl<F: Field> From<Variable> for LinearCombination<F> {
    #[inline]
    fn from(variable: Variable) -> Self {
        LinearCombination(vec![(variable, F::one())])
    }
}

impl<F: Field> From<(F, Variable)> for LinearCombination<F> {
    #[inline]
    fn from((coeff, variable): (F, Variable)) -> Self {
        LinearCombination(vec![(variable, coeff)])
    }
}

impl<F: Field> Add<Variable> for LinearCombination<F> {
    type Output = Self;

    fn add(self, other: Variable) -> Self {
        self.append(F::one(), other)
    }
}

impl<F: Field> Sub<Variable> for LinearCombination<F> {
    type Output = Self;

    fn sub(self, other: Variable) -> Self {
        self.append(-F::one(), other)
    }
}

impl<F: Field> Add<(F, Variable)> for LinearCombination<F> {
    type Output = Self;

    fn add(self, (coeff, variable): (F, Variable)) -> Self {
        self.append(coeff, variable)
    }
}

impl<F: Field> Sub<(F, Variable)> for LinearCombination<F> {
    type Output = Self;

    fn sub(self, (coeff, variable): (F, Variable)) -> Self {
        self.append(-coeff, variable)
    }
}

impl<F: Field> AddAssign<(F, Variable)> for LinearCombination<F> {
    fn add_assign(&mut self, (coeff, variable): (F, Variable)) {
        let this = core::mem::take(self);
        *self = this.append(coeff, variable);
    }
}

impl<F: Field> Neg for LinearCombination<F> {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.negate_in_place();
        self
    }
}

impl<F: Field> MulAssign<F> for LinearCombination<F> {
    fn mul_assign(&mut self, scalar: F) {
        self.0.iter_mut().for_each(|(_, coeff)| *coeff *= scalar);
    }
}

impl<F: Field> CanonicalSerialize for LinearCombination<F> {
    fn serialize_with_mode<W: Write>(&self, mut writer: W, compress: Compress) -> Result<(), SerializationError> {
        self.0.len().serialize_with_mode(&mut writer, compress)?;
        for (variable, coefficient) in &self.0 {
            variable.serialize_with_mode(&mut writer, compress)?;
            coefficient.serialize_with_mode(&mut writer, compress)?;
        }
        Ok(())
    }

    fn serialized_size(&self, compress: Compress) -> usize {
        self.0.len().serialized_size(compress)
            + self
                .0
                .iter()
                .map(|(variable, coefficient)| {
                    variable.serialized_size(compress) + coefficient.serialized_size(compress)
                })
                .sum::<usize>()
    }
}

impl<F: Field> Valid for LinearCombination<F> {
    fn check(&self) -> Result<(), SerializationError> {
        Ok(())
    }
}

impl<F: Field> CanonicalDeserialize for LinearCombination<F> {
    fn deserialize_with_mode<R: Read>(
        mut reader: R,
        compress: Compress,
        validate: Validate,
    ) -> Result<Self, SerializationError> {
        let num_terms = usize::deserialize_with_mode(&mut reader, compress, validate)?;
        let mut terms = Vec::with_capacity(num_terms);
        for _ in 0..num_terms {
            let variable = Variable::deserialize_with_mode(&mut reader, compress, validate)?;
            let coefficient = F::deserialize_with_mode(&mut reader, compress, validate)?;
            terms.push((variable, coefficient));
        }
        Ok(LinearCombination(terms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uscs::Index;
    use snarkvm_curves::bls12_377::Fr;
    use snarkvm_fields::{Field, One};

    #[test]
    fn add_coalesces_repeated_variables() {
        let x = Variable::new_unchecked(Index::Public(1));
        let lc = LinearCombination::<Fr>::zero() + x + x;
        assert_eq!(lc.num_terms(), 1);
        assert_eq!(lc.0[0].1, Fr::one() + Fr::one());
    }

    #[test]
    fn serialization_round_trip() {
        let x = Variable::new_unchecked(Index::Public(1));
        let w = Variable::new_unchecked(Index::Private(0));
        let lc = LinearCombination::<Fr>::zero() + (Fr::one().double(), x) - w;

        let mut bytes = vec![];
        lc.serialize_compressed(&mut bytes).unwrap();
        let recovered = LinearCombination::<Fr>::deserialize_compressed(&bytes[..]).unwrap();
        assert_eq!(lc, recovered);
    }
}
