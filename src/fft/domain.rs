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

//! A multiplicative subgroup of order `2^k` in the scalar field, together
//! with the FFTs it supports. The vanishing polynomial of such a domain is
//! `Z(x) = x^size - 1`, which can be evaluated (and divided out on a coset)
//! in constant time per point.

use crate::cfg_iter_mut;
use snarkvm_fields::{batch_inversion, FftField, FftParameters, Field, PrimeField, Zero};

use core::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A radix-2 evaluation domain for a prime field.
#[derive(Copy, Clone, Hash, Eq, PartialEq)]
pub struct EvaluationDomain<F: PrimeField> {
    /// The size of the domain.
    pub size: u64,
    /// `log_2(self.size)`.
    pub log_size_of_group: u32,
    /// Size of the domain as a field element.
    pub size_as_field_element: F,
    /// Inverse of the size in the field.
    pub size_inv: F,
    /// A generator of the subgroup.
    pub group_gen: F,
    /// Inverse of the generator of the subgroup.
    pub group_gen_inv: F,
    /// Inverse of the multiplicative generator of the field.
    pub generator_inv: F,
}

impl<F: PrimeField> fmt::Debug for EvaluationDomain<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Radix-2 evaluation domain of size {}", self.size)
    }
}

impl<F: PrimeField> EvaluationDomain<F> {
    /// Construct a domain that is large enough for evaluations of a
    /// polynomial having `num_coeffs` coefficients.
    pub fn new(num_coeffs: usize) -> Option<Self> {
        let size = num_coeffs.checked_next_power_of_two()? as u64;
        let log_size_of_group = size.trailing_zeros();
        if log_size_of_group > <F::FftParameters as FftParameters>::TWO_ADICITY {
            return None;
        }

        let group_gen = F::get_root_of_unity(size as usize)?;
        debug_assert_eq!(group_gen.pow([size]), F::one());

        let size_as_field_element = F::from(size);
        let size_inv = size_as_field_element.inverse()?;
        let group_gen_inv = group_gen.inverse()?;
        let generator_inv = F::multiplicative_generator().inverse()?;

        Some(Self {
            size,
            log_size_of_group,
            size_as_field_element,
            size_inv,
            group_gen,
            group_gen_inv,
            generator_inv,
        })
    }

    /// Return the size of a domain that is large enough for evaluations of a
    /// polynomial having `num_coeffs` coefficients.
    pub fn compute_size_of_domain(num_coeffs: usize) -> Option<usize> {
        let size = num_coeffs.checked_next_power_of_two()?;
        if size.trailing_zeros() > <F::FftParameters as FftParameters>::TWO_ADICITY {
            None
        } else {
            Some(size)
        }
    }

    /// Return the size of `self`.
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Compute an FFT, modifying the vector in place.
    pub fn fft_in_place(&self, coeffs: &mut Vec<F>) {
        coeffs.resize(self.size(), F::zero());
        Self::serial_fft(coeffs, self.group_gen, self.log_size_of_group);
    }

    /// Compute an inverse FFT, modifying the vector in place.
    pub fn ifft_in_place(&self, evals: &mut Vec<F>) {
        evals.resize(self.size(), F::zero());
        Self::serial_fft(evals, self.group_gen_inv, self.log_size_of_group);
        let size_inv = self.size_inv;
        cfg_iter_mut!(evals).for_each(|eval| *eval *= size_inv);
    }

    /// Compute an FFT over the coset `g·H`, modifying the input vector in place.
    pub fn coset_fft_in_place(&self, coeffs: &mut Vec<F>) {
        Self::distribute_powers(coeffs, F::multiplicative_generator());
        self.fft_in_place(coeffs);
    }

    /// Compute an inverse FFT over the coset `g·H`, modifying the input vector in place.
    pub fn coset_ifft_in_place(&self, evals: &mut Vec<F>) {
        self.ifft_in_place(evals);
        Self::distribute_powers(evals, self.generator_inv);
    }

    /// Multiply the `i`-th element of `coeffs` with `g^i`.
    fn distribute_powers(coeffs: &mut [F], g: F) {
        let mut pow = F::one();
        coeffs.iter_mut().for_each(|coeff| {
            *coeff *= pow;
            pow *= g;
        });
    }

    /// Evaluate all the Lagrange polynomials defined over this domain at the
    /// point `tau`.
    pub fn evaluate_all_lagrange_coefficients(&self, tau: F) -> Vec<F> {
        // Evaluate all Lagrange polynomials at tau to get the lagrange
        // coefficients.
        //
        // We then compute L_{i,H}(tau) as
        //     L_{i,H}(tau) = Z_H(tau) * v_i / (tau - g^i),
        // where Z_H(tau) = (tau^size - 1) and v_i = g^i / size.
        let size = self.size();
        let z_h_at_tau = self.evaluate_vanishing_polynomial(tau);

        if z_h_at_tau.is_zero() {
            // tau is in the domain: the coefficients are the indicator vector
            // of its position.
            let mut u = vec![F::zero(); size];
            let mut omega_i = F::one();
            for u_i in u.iter_mut().take(size) {
                if omega_i == tau {
                    *u_i = F::one();
                    break;
                }
                omega_i *= self.group_gen;
            }
            u
        } else {
            let mut l = z_h_at_tau * self.size_inv;
            let mut r = F::one();
            let mut u = vec![F::zero(); size];
            let mut ls = vec![F::zero(); size];
            for i in 0..size {
                u[i] = tau - r;
                ls[i] = l;
                l *= &self.group_gen;
                r *= &self.group_gen;
            }

            batch_inversion(u.as_mut_slice());

            cfg_iter_mut!(u).zip(ls).for_each(|(tau_minus_r, l)| {
                *tau_minus_r = l * *tau_minus_r;
            });

            u
        }
    }

    /// This evaluates the vanishing polynomial for this domain at tau.
    /// For multiplicative subgroups, this polynomial is `z(X) = X^self.size - 1`.
    pub fn evaluate_vanishing_polynomial(&self, tau: F) -> F {
        tau.pow([self.size]) - F::one()
    }

    /// Given an index, this computes `self.group_gen ^ index`.
    pub fn element(&self, index: usize) -> F {
        self.group_gen.pow([index as u64])
    }

    /// Return an iterator over the elements of the domain.
    pub fn elements(&self) -> impl Iterator<Item = F> {
        let group_gen = self.group_gen;
        (0..self.size()).scan(F::one(), move |current, _| {
            let this = *current;
            *current *= group_gen;
            Some(this)
        })
    }

    /// The vanishing polynomial is constant over the coset `g·H`, so dividing
    /// evaluations by it amounts to one scaling.
    pub fn divide_by_vanishing_poly_on_coset_in_place(&self, evals: &mut [F]) {
        let z_h_on_coset_inv = self
            .evaluate_vanishing_polynomial(F::multiplicative_generator())
            .inverse()
            .expect("the coset does not intersect the domain");
        cfg_iter_mut!(evals).for_each(|eval| *eval *= z_h_on_coset_inv);
    }

    pub(crate) fn serial_fft(a: &mut [F], omega: F, log_n: u32) {
        let n = a.len();
        debug_assert_eq!(n, 1 << log_n);

        for k in 0..n as u32 {
            let rk = Self::bitreverse(k, log_n);
            if k < rk {
                a.swap(rk as usize, k as usize);
            }
        }

        let mut m = 1;
        for _ in 0..log_n {
            let w_m = omega.pow([(n / (2 * m)) as u64]);

            let mut k = 0;
            while k < n {
                let mut w = F::one();
                for j in 0..m {
                    let mut t = a[k + j + m];
                    t *= w;
                    let mut tmp = a[k + j];
                    tmp -= t;
                    a[k + j + m] = tmp;
                    a[k + j] += t;
                    w *= w_m;
                }
                k += 2 * m;
            }

            m *= 2;
        }
    }

    #[inline]
    fn bitreverse(mut n: u32, l: u32) -> u32 {
        let mut r = 0;
        for _ in 0..l {
            r = (r << 1) | (n & 1);
            n >>= 1;
        }
        r
    }
}
