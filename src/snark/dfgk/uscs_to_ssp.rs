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
    cfg_iter_mut,
    fft::EvaluationDomain,
    uscs::{ConstraintSystem, Index, LinearCombination, SynthesisError},
};
use snarkvm_fields::{Field, PrimeField};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[inline]
fn get_var_index(index: Index, num_public_variables: usize) -> usize {
    match index {
        Index::Public(i) => i,
        Index::Private(i) => num_public_variables + i,
    }
}

fn evaluate_constraint<F: PrimeField>(
    constraint: &LinearCombination<F>,
    assignment: &[F],
    num_public_variables: usize,
) -> F {
    cfg_iter!(constraint.0)
        .map(|(variable, coefficient)| {
            let index = get_var_index(variable.get_unchecked(), num_public_variables);
            assignment[index] * coefficient
        })
        .sum()
}

/// A square span program evaluated at a fixed field element `t`:
/// `vt[i] = V_i(t)`, `ht[i] = t^i`, and `zt = Z(t)` for the vanishing
/// polynomial `Z` of the constraint domain.
#[derive(Clone, Debug)]
pub struct SspInstance<F: PrimeField> {
    pub vt: Vec<F>,
    pub ht: Vec<F>,
    pub zt: F,
    pub num_variables: usize,
    pub num_inputs: usize,
    pub degree: usize,
}

/// The coefficients a satisfying assignment contributes to the proof: the
/// assignment itself (for the `V` polynomials) and the coefficients of the
/// quotient polynomial `H`, blinded by `d`.
#[derive(Clone, Debug)]
pub struct SspWitness<F: PrimeField> {
    pub coefficients_for_vs: Vec<F>,
    pub coefficients_for_h: Vec<F>,
    pub d: F,
    pub num_variables: usize,
    pub num_inputs: usize,
    pub degree: usize,
}

pub(crate) struct UscsToSsp;

impl UscsToSsp {
    /// Evaluates the square span program of `cs` at the point `t`.
    ///
    /// Constraints are interpolated over a radix-2 domain of size at least
    /// `cs.num_constraints()`; the rows past the last constraint hold the
    /// dummy constraint `1^2 = 1`, whose Lagrange values fold into the
    /// constant-one selector `vt[0]`.
    pub(crate) fn instance_map_with_evaluation<F: PrimeField>(
        cs: &ConstraintSystem<F>,
        t: &F,
    ) -> Result<SspInstance<F>, SynthesisError> {
        let domain =
            EvaluationDomain::<F>::new(cs.num_constraints()).ok_or(SynthesisError::PolynomialDegreeTooLarge)?;
        let degree = domain.size();

        let zt = domain.evaluate_vanishing_polynomial(*t);
        let u = domain.evaluate_all_lagrange_coefficients(*t);

        let num_public_variables = cs.num_public_variables();

        let mut vt = vec![F::zero(); cs.num_variables() + 1];
        for (u_i, constraint) in u.iter().zip(cs.constraints()) {
            for (variable, coefficient) in &constraint.0 {
                let index = get_var_index(variable.get_unchecked(), num_public_variables);
                vt[index] += *u_i * coefficient;
            }
        }
        for u_i in &u[cs.num_constraints()..] {
            vt[0] += u_i;
        }

        let mut ht = Vec::with_capacity(degree + 1);
        let mut t_i = F::one();
        for _ in 0..=degree {
            ht.push(t_i);
            t_i *= t;
        }

        Ok(SspInstance {
            vt,
            ht,
            zt,
            num_variables: cs.num_variables(),
            num_inputs: cs.num_inputs(),
            degree,
        })
    }

    /// Computes the coefficients contributed by a satisfying assignment,
    /// with the quotient blinded by `d`: the interpolated constraint
    /// polynomial `V` satisfies `Z | V^2 - 1`, and the returned `H` encodes
    /// `(V^2 - 1)/Z + 2·d·V + d^2·Z`.
    pub(crate) fn witness_map<F: PrimeField>(
        cs: &ConstraintSystem<F>,
        primary_input: &[F],
        auxiliary_input: &[F],
        d: F,
    ) -> Result<SspWitness<F>, SynthesisError> {
        if primary_input.len() != cs.num_inputs() || auxiliary_input.len() != cs.num_private_variables() {
            return Err(SynthesisError::AssignmentMissing);
        }

        let domain =
            EvaluationDomain::<F>::new(cs.num_constraints()).ok_or(SynthesisError::PolynomialDegreeTooLarge)?;
        let degree = domain.size();

        let mut full_assignment = Vec::with_capacity(cs.num_variables() + 1);
        full_assignment.push(F::one());
        full_assignment.extend_from_slice(primary_input);
        full_assignment.extend_from_slice(auxiliary_input);

        let num_public_variables = cs.num_public_variables();

        let mut v = vec![F::zero(); degree];
        cfg_iter_mut!(v[..cs.num_constraints()]).zip(cs.constraints()).for_each(|(value, constraint)| {
            *value = evaluate_constraint(constraint, &full_assignment, num_public_variables);
        });
        // dummy constraints: 1^2 = 1
        for value in &mut v[cs.num_constraints()..] {
            *value = F::one();
        }

        domain.ifft_in_place(&mut v);

        let mut coefficients_for_h = vec![F::zero(); degree + 1];
        let two_d = d.double();
        cfg_iter_mut!(coefficients_for_h[..degree]).zip(&v).for_each(|(h, v)| {
            *h = two_d * v;
        });
        // The blinding square lands on the vanishing polynomial: d^2 · (x^degree - 1).
        let d_squared = d.square();
        coefficients_for_h[degree] += d_squared;
        coefficients_for_h[0] -= d_squared;

        domain.coset_fft_in_place(&mut v);
        cfg_iter_mut!(v).for_each(|value| *value = value.square() - F::one());
        domain.divide_by_vanishing_poly_on_coset_in_place(&mut v);
        domain.coset_ifft_in_place(&mut v);

        cfg_iter_mut!(coefficients_for_h[..degree]).zip(&v).for_each(|(h, v)| {
            *h += v;
        });

        Ok(SspWitness {
            coefficients_for_vs: [primary_input, auxiliary_input].concat(),
            coefficients_for_h,
            d,
            num_variables: cs.num_variables(),
            num_inputs: cs.num_inputs(),
            degree,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snarkvm_curves::bls12_377::Fr;
    use snarkvm_fields::{Field, One, Zero};
    use snarkvm_utilities::rand::Uniform;

    fn boolean_system() -> ConstraintSystem<Fr> {
        let mut cs = ConstraintSystem::new();
        let one = ConstraintSystem::<Fr>::one();
        let x = cs.alloc_input();
        let y = cs.alloc();
        let two = Fr::one().double();
        cs.enforce(LinearCombination::zero() + (two, x) - one);
        cs.enforce(LinearCombination::zero() + (two, y) - one);
        cs.enforce(LinearCombination::zero() + x - y);
        cs
    }

    #[test]
    fn instance_lengths() {
        let cs = boolean_system();
        let t = Fr::rand(&mut rand::thread_rng());
        let instance = UscsToSsp::instance_map_with_evaluation(&cs, &t).unwrap();

        assert_eq!(instance.num_variables, 2);
        assert_eq!(instance.num_inputs, 1);
        assert_eq!(instance.vt.len(), instance.num_variables + 1);
        assert_eq!(instance.ht.len(), instance.degree + 1);
        assert!(instance.degree >= cs.num_constraints());
    }

    #[test]
    fn witness_lengths() {
        let cs = boolean_system();
        let rng = &mut rand::thread_rng();
        let witness =
            UscsToSsp::witness_map(&cs, &[Fr::one()], &[Fr::zero()], Fr::rand(rng)).unwrap();

        assert_eq!(witness.coefficients_for_vs.len(), witness.num_variables);
        assert_eq!(witness.coefficients_for_h.len(), witness.degree + 1);
    }

    #[test]
    fn mismatched_assignment_is_rejected() {
        let cs = boolean_system();
        assert_eq!(
            UscsToSsp::witness_map(&cs, &[], &[Fr::zero()], Fr::one()).unwrap_err(),
            SynthesisError::AssignmentMissing
        );
    }

    /// The divisibility identity behind the SNARK: with
    /// `V = Σ z_k · V_k(t) + d·Z(t)` and `H = Σ h_i · t^i`, a satisfying
    /// assignment gives `V^2 - 1 = H · Z(t)`.
    #[test]
    fn instance_and_witness_satisfy_the_divisibility_identity() {
        let cs = boolean_system();
        let rng = &mut rand::thread_rng();

        for (primary, auxiliary) in [([Fr::one()], [Fr::zero()]), ([Fr::zero()], [Fr::one()])] {
            let t = Fr::rand(rng);
            let d = Fr::rand(rng);
            let instance = UscsToSsp::instance_map_with_evaluation(&cs, &t).unwrap();
            let witness = UscsToSsp::witness_map(&cs, &primary, &auxiliary, d).unwrap();

            let mut v_at_t = instance.vt[0] + d * instance.zt;
            for (z, vt) in witness.coefficients_for_vs.iter().zip(&instance.vt[1..]) {
                v_at_t += *z * vt;
            }

            let mut h_at_t = Fr::zero();
            for (h, t_i) in witness.coefficients_for_h.iter().zip(&instance.ht) {
                h_at_t += *h * t_i;
            }

            assert_eq!(v_at_t.square() - Fr::one(), h_at_t * instance.zt);
        }
    }
}
