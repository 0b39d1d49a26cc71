//! Density matrix of a two-level atom.

use num_complex::Complex64;

/// The four density matrix elements of a two-level atom.
///
/// `rho_gg` and `rho_ee` are the ground and excited state populations;
/// `rho_ge` and `rho_eg` are the coherences, complex conjugates of each
/// other in a physical state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DensityMatrix {
    /// Ground state population.
    pub rho_gg: Complex64,
    /// Excited state population.
    pub rho_ee: Complex64,
    /// Ground-excited coherence.
    pub rho_ge: Complex64,
    /// Excited-ground coherence.
    pub rho_eg: Complex64,
}

impl Default for DensityMatrix {
    fn default() -> Self {
        Self::ground()
    }
}

impl DensityMatrix {
    /// All population in the ground state, no coherence.
    ///
    /// ```rust
    /// use sim_optbloch::state::DensityMatrix;
    ///
    /// let rho = DensityMatrix::ground();
    /// assert_eq!(rho.populations(), (1.0, 0.0));
    /// ```
    pub fn ground() -> Self {
        Self {
            rho_gg: Complex64::new(1.0, 0.0),
            rho_ee: Complex64::new(0.0, 0.0),
            rho_ge: Complex64::new(0.0, 0.0),
            rho_eg: Complex64::new(0.0, 0.0),
        }
    }

    /// Moduli `(|rho_gg|, |rho_ee|)`.
    #[inline]
    pub fn populations(&self) -> (f64, f64) {
        (self.rho_gg.norm(), self.rho_ee.norm())
    }

    /// `rho_gg + rho_ee`; 1 for a normalised state.
    #[inline]
    pub fn trace(&self) -> Complex64 {
        self.rho_gg + self.rho_ee
    }

    /// Exact check that the coherences are complex conjugates.
    #[inline]
    pub fn is_hermitian(&self) -> bool {
        self.rho_ge == self.rho_eg.conj()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_state() {
        let rho = DensityMatrix::ground();
        assert_eq!(rho.trace(), Complex64::new(1.0, 0.0));
        assert!(rho.is_hermitian());
        assert_eq!(rho, DensityMatrix::default());
    }

    #[test]
    fn test_hermitian_check() {
        let mut rho = DensityMatrix::ground();
        rho.rho_ge = Complex64::new(0.25, -0.5);
        rho.rho_eg = Complex64::new(0.25, 0.5);
        assert!(rho.is_hermitian());

        rho.rho_eg = Complex64::new(0.25, -0.5);
        assert!(!rho.is_hermitian());
    }

    #[test]
    fn test_populations_are_moduli() {
        let rho = DensityMatrix {
            rho_gg: Complex64::new(0.6, 0.8),
            rho_ee: Complex64::new(-0.5, 0.0),
            ..DensityMatrix::ground()
        };
        let (gg, ee) = rho.populations();
        assert!((gg - 1.0).abs() < 1e-15);
        assert_eq!(ee, 0.5);
    }
}
