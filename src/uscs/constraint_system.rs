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

use crate::uscs::{errors::SynthesisError, Index, LinearCombination, Variable};
use snarkvm_fields::Field;
use snarkvm_utilities::serialize::*;

/// A unitary-square constraint system over `F`.
///
/// Each constraint is a linear combination `⟨a, z⟩` over the full variable
/// assignment `z = (1, primary, auxiliary)` and is satisfied when
/// `⟨a, z⟩^2 = 1`. The public variable at index 0 is fixed to the constant
/// one; the remaining public variables form the primary input.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct ConstraintSystem<F: Field> {
    constraints: Vec<LinearCombination<F>>,
    num_public_variables: usize,
    num_private_variables: usize,
}

impl<F: Field> Default for ConstraintSystem<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Field> ConstraintSystem<F> {
    /// Returns a constraint system with no constraints and no variables
    /// besides the constant one.
    pub fn new() -> Self {
        Self { constraints: Vec::new(), num_public_variables: 1, num_private_variables: 0 }
    }

    /// Returns the variable fixed to the constant one.
    pub fn one() -> Variable {
        Variable::new_unchecked(Index::Public(0))
    }

    /// Allocates a public (input) variable.
    pub fn alloc_input(&mut self) -> Variable {
        let variable = Variable::new_unchecked(Index::Public(self.num_public_variables));
        self.num_public_variables += 1;
        variable
    }

    /// Allocates a private (auxiliary) variable.
    pub fn alloc(&mut self) -> Variable {
        let variable = Variable::new_unchecked(Index::Private(self.num_private_variables));
        self.num_private_variables += 1;
        variable
    }

    /// Adds the constraint `⟨a, z⟩^2 = 1` for the given combination `a`.
    pub fn enforce(&mut self, a: LinearCombination<F>) {
        self.constraints.push(a);
    }

    pub fn constraints(&self) -> &[LinearCombination<F>] {
        &self.constraints
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// The number of public variables, including the constant one.
    pub fn num_public_variables(&self) -> usize {
        self.num_public_variables
    }

    pub fn num_private_variables(&self) -> usize {
        self.num_private_variables
    }

    /// The length of the primary input.
    pub fn num_inputs(&self) -> usize {
        self.num_public_variables - 1
    }

    /// The number of assignable variables, excluding the constant one.
    pub fn num_variables(&self) -> usize {
        self.num_inputs() + self.num_private_variables
    }

    /// Evaluates a linear combination over the full variable assignment
    /// `(1, primary, auxiliary)`.
    pub fn evaluate_constraint(&self, constraint: &LinearCombination<F>, assignment: &[F]) -> F {
        let mut accumulator = F::zero();
        for (variable, coefficient) in &constraint.0 {
            let index = match variable.get_unchecked() {
                Index::Public(i) => i,
                Index::Private(i) => self.num_public_variables + i,
            };
            accumulator += assignment[index] * coefficient;
        }
        accumulator
    }

    /// Checks whether every constraint squares to one under the assignment.
    pub fn is_satisfied(&self, primary_input: &[F], auxiliary_input: &[F]) -> Result<bool, SynthesisError> {
        if primary_input.len() != self.num_inputs() || auxiliary_input.len() != self.num_private_variables {
            return Err(SynthesisError::AssignmentMissing);
        }

        let mut assignment = Vec::with_capacity(self.num_variables() + 1);
        assignment.push(F::one());
        assignment.extend_from_slice(primary_input);
        assignment.extend_from_slice(auxiliary_input);

        for constraint in &self.constraints {
            if self.evaluate_constraint(constraint, &assignment).square() != F::one() {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snarkvm_curves::bls12_377::Fr;
    use snarkvm_fields::{Field, One, Zero};

    fn boolean_system() -> (ConstraintSystem<Fr>, Variable, Variable) {
        // x public and y private, both constrained to {0, 1} via (2v - 1)^2 = 1.
        let mut cs = ConstraintSystem::new();
        let one = ConstraintSystem::<Fr>::one();
        let x = cs.alloc_input();
        let y = cs.alloc();
        let two = Fr::one().double();
        cs.enforce(LinearCombination::zero() + (two, x) - one);
        cs.enforce(LinearCombination::zero() + (two, y) - one);
        (cs, x, y)
    }

    #[test]
    fn counts() {
        let (cs, _, _) = boolean_system();
        assert_eq!(cs.num_constraints(), 2);
        assert_eq!(cs.num_inputs(), 1);
        assert_eq!(cs.num_public_variables(), 2);
        assert_eq!(cs.num_private_variables(), 1);
        assert_eq!(cs.num_variables(), 2);
    }

    #[test]
    fn satisfaction() {
        let (cs, _, _) = boolean_system();
        assert!(cs.is_satisfied(&[Fr::zero()], &[Fr::one()]).unwrap());
        assert!(cs.is_satisfied(&[Fr::one()], &[Fr::one()]).unwrap());
        assert!(!cs.is_satisfied(&[Fr::one().double()], &[Fr::one()]).unwrap());
    }

    #[test]
    fn assignment_length_is_checked() {
        let (cs, _, _) = boolean_system();
        assert_eq!(cs.is_satisfied(&[], &[Fr::one()]), Err(SynthesisError::AssignmentMissing));
        assert_eq!(cs.is_satisfied(&[Fr::one()], &[]), Err(SynthesisError::AssignmentMissing));
    }

    #[test]
    fn serialization_round_trip() {
        let (cs, _, _) = boolean_system();
        let mut bytes = vec![];
        cs.serialize_compressed(&mut bytes).unwrap();
        let recovered = ConstraintSystem::<Fr>::deserialize_compressed(&bytes[..]).unwrap();
        assert_eq!(cs, recovered);
    }
}
