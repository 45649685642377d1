//! For fixed widths the energy is a rayleigh quotient in the coefficients, so the best
//! coefficients solve the generalized eigenvalue problem H c = E S c. Nothing in the
//! descent loop depends on this module; it is used to judge how far the coefficients are
//! from their optimum.
use nalgebra::{DMatrix, DVector};

use crate::integrals::{DefaultIntegrator, Integrator};

use super::utils;

/// The lowest solution of H c = E S c for a set of widths.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearOptimum {
    pub energy: f64,
    /// Coefficients of the lowest eigenvector, normalized such that c^T S c = 1
    pub coefficients: DVector<f64>,
    /// All eigenvalues in ascending order
    pub eigenvalues: Vec<f64>,
}

pub fn overlap_matrix_with(
    integrator: &impl Integrator<Function = f64>,
    widths: &DVector<f64>,
) -> DMatrix<f64> {
    utils::symmetric_matrix(widths.len(), |i, j| {
        let overlap_ij = integrator.overlap((&widths[i], &widths[j]));
        log::trace!("overlap ({i}{j}) = {overlap_ij}");
        overlap_ij
    })
}

pub fn hamiltonian_matrix_with(
    integrator: &impl Integrator<Function = f64>,
    widths: &DVector<f64>,
) -> DMatrix<f64> {
    utils::symmetric_matrix(widths.len(), |i, j| {
        let hamiltonian_ij = integrator.energy((&widths[i], &widths[j]));
        log::trace!("hamiltonian ({i}{j}) = {hamiltonian_ij}");
        hamiltonian_ij
    })
}

pub fn overlap_matrix(widths: &DVector<f64>) -> DMatrix<f64> {
    overlap_matrix_with(&DefaultIntegrator::default(), widths)
}

pub fn hamiltonian_matrix(widths: &DVector<f64>) -> DMatrix<f64> {
    hamiltonian_matrix_with(&DefaultIntegrator::default(), widths)
}

/// Solve for the best coefficients given the widths.
///
/// The widths have to be positive and linearly independent enough for the overlap matrix
/// to be positive definite, otherwise the result is NaN.
pub fn linear_optimum(widths: &DVector<f64>) -> LinearOptimum {
    let overlap = overlap_matrix(widths);
    let hamiltonian = hamiltonian_matrix(widths);

    let transform = compute_transformation_matrix(&overlap);
    let transformed = &transform.transpose() * (&hamiltonian * &transform);
    let (transformed_coefficients, eigenvalues) = utils::sorted_eigs(transformed);

    let mut coefficients = &transform * transformed_coefficients.column(0);
    // the sign of an eigenvector is arbitrary, pick the one with psi(0) > 0
    if coefficients.sum() < 0.0 {
        coefficients.neg_mut();
    }

    LinearOptimum {
        energy: eigenvalues[0],
        coefficients,
        eigenvalues: eigenvalues.as_slice().to_vec(),
    }
}

/// S^(-1/2), symmetric (löwdin) orthogonalization
fn compute_transformation_matrix(overlap: &DMatrix<f64>) -> DMatrix<f64> {
    let (u, _) = utils::eigs(overlap.clone());
    let diagonal_matrix = &u.transpose() * (overlap * &u);

    let diagonal_inv_sqrt =
        DMatrix::from_diagonal(&diagonal_matrix.map_diagonal(|f| f.sqrt().recip()));
    &u * (diagonal_inv_sqrt * &u.transpose())
}
