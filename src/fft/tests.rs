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

use crate::fft::EvaluationDomain;
use snarkvm_curves::bls12_377::Fr;
use snarkvm_fields::{FftField, Field, One, Zero};
use snarkvm_utilities::rand::Uniform;

fn evaluate(coeffs: &[Fr], point: Fr) -> Fr {
    coeffs.iter().rev().fold(Fr::zero(), |acc, coeff| acc * point + coeff)
}

#[test]
fn fft_composition() {
    let rng = &mut rand::thread_rng();

    for log_coeffs in 0..10 {
        let coeffs = 1 << log_coeffs;

        let mut v = vec![];
        for _ in 0..coeffs {
            v.push(Fr::rand(rng));
        }
        let mut v2 = v.clone();

        let domain = EvaluationDomain::<Fr>::new(coeffs).unwrap();
        domain.ifft_in_place(&mut v2);
        domain.fft_in_place(&mut v2);
        assert_eq!(v, v2, "ifft(fft(.)) != iden");

        domain.fft_in_place(&mut v2);
        domain.ifft_in_place(&mut v2);
        assert_eq!(v, v2, "fft(ifft(.)) != iden");

        domain.coset_ifft_in_place(&mut v2);
        domain.coset_fft_in_place(&mut v2);
        assert_eq!(v, v2, "coset_ifft(coset_fft(.)) != iden");

        domain.coset_fft_in_place(&mut v2);
        domain.coset_ifft_in_place(&mut v2);
        assert_eq!(v, v2, "coset_fft(coset_ifft(.)) != iden");
    }
}

#[test]
fn fft_matches_naive_evaluation() {
    let rng = &mut rand::thread_rng();

    let domain = EvaluationDomain::<Fr>::new(8).unwrap();
    let coeffs = (0..8).map(|_| Fr::rand(rng)).collect::<Vec<_>>();

    let mut evals = coeffs.clone();
    domain.fft_in_place(&mut evals);

    for (element, eval) in domain.elements().zip(&evals) {
        assert_eq!(*eval, evaluate(&coeffs, element));
    }
}

#[test]
fn lagrange_coefficients_interpolate() {
    let rng = &mut rand::thread_rng();

    let domain = EvaluationDomain::<Fr>::new(8).unwrap();
    let tau = Fr::rand(rng);

    let mut evals = vec![];
    for _ in 0..domain.size() {
        evals.push(Fr::rand(rng));
    }

    let mut coeffs = evals.clone();
    domain.ifft_in_place(&mut coeffs);

    let lagrange_coefficients = domain.evaluate_all_lagrange_coefficients(tau);
    let interpolated = lagrange_coefficients
        .iter()
        .zip(&evals)
        .map(|(l, e)| *l * e)
        .fold(Fr::zero(), |acc, term| acc + term);

    assert_eq!(interpolated, evaluate(&coeffs, tau));
}

#[test]
fn lagrange_coefficients_on_domain_elements() {
    let domain = EvaluationDomain::<Fr>::new(4).unwrap();

    for (i, element) in domain.elements().enumerate() {
        let lagrange_coefficients = domain.evaluate_all_lagrange_coefficients(element);
        for (j, coefficient) in lagrange_coefficients.into_iter().enumerate() {
            let expected = if i == j { Fr::one() } else { Fr::zero() };
            assert_eq!(coefficient, expected);
        }
    }
}

#[test]
fn vanishing_polynomial_vanishes_on_domain() {
    let rng = &mut rand::thread_rng();

    let domain = EvaluationDomain::<Fr>::new(16).unwrap();
    for element in domain.elements() {
        assert!(domain.evaluate_vanishing_polynomial(element).is_zero());
    }
    let tau = Fr::rand(rng);
    assert_eq!(domain.evaluate_vanishing_polynomial(tau), tau.pow([16]) - Fr::one());
}

#[test]
fn divide_by_vanishing_polynomial_on_coset() {
    let rng = &mut rand::thread_rng();

    let domain = EvaluationDomain::<Fr>::new(8).unwrap();
    let size = domain.size();

    // The vanishing polynomial takes the constant value g^size - 1 on the
    // coset g·H, so dividing evaluations of Z * q by Z must recover q.
    let quotient = (0..size).map(|_| Fr::rand(rng)).collect::<Vec<_>>();
    let mut quotient_on_coset = quotient.clone();
    domain.coset_fft_in_place(&mut quotient_on_coset);

    let z_on_coset = domain.evaluate_vanishing_polynomial(Fr::multiplicative_generator());
    let mut product_on_coset =
        quotient_on_coset.iter().map(|q| *q * z_on_coset).collect::<Vec<_>>();

    domain.divide_by_vanishing_poly_on_coset_in_place(&mut product_on_coset);
    assert_eq!(product_on_coset, quotient_on_coset);
}
