//! Pairwise interaction potentials Φ over a particle displacement.
//!
//! A potential is either *radial* (a function of the scalar pair distance,
//! isotropic forces) or *vector* (a function of the full displacement,
//! anisotropic forces). The shape is fixed when the potential is built and
//! carried by the [`Interaction`] discriminant, so force accumulation
//! branches on it once per configuration rather than per particle pair.

use crate::{norm_squared, NORM_FLOOR};

/// Smoothing width ε shared by the soft-indicator windows of
/// [`SmoothedStep`]. Kept as an implementation constant; it trades a small
/// transition width for a force field that is differentiable at the
/// transition radii.
pub const SMOOTHING_WIDTH: f64 = 0.05;

/// Radial interaction: depends only on the pair distance r ≥ 0.
pub trait RadialPotential: Send + Sync {
    /// Potential value at distance `r`.
    fn value(&self, r: f64) -> f64;

    /// Radial derivative dΦ/dr at distance `r`.
    fn derivative(&self, r: f64) -> f64;
}

/// Vector interaction: depends on the full displacement vector.
pub trait VectorPotential: Send + Sync {
    /// Potential value at displacement `dx`.
    fn evaluate(&self, dx: &[f64]) -> f64;

    /// Write ∇Φ(dx) into `out` (same length as `dx`).
    fn gradient(&self, dx: &[f64], out: &mut [f64]);
}

/// Interaction shape, decided when the potential is constructed.
pub enum Interaction {
    /// Isotropic: force along the displacement direction, magnitude dΦ/dr.
    Radial(Box<dyn RadialPotential>),
    /// Anisotropic: gradient taken on the displacement itself.
    Vector(Box<dyn VectorPotential>),
}

impl Interaction {
    /// Wrap a radial potential.
    pub fn radial(potential: impl RadialPotential + 'static) -> Self {
        Self::Radial(Box::new(potential))
    }

    /// Wrap a vector potential.
    pub fn vector(potential: impl VectorPotential + 'static) -> Self {
        Self::Vector(Box::new(potential))
    }

    /// Potential value at displacement `dx`.
    pub fn evaluate(&self, dx: &[f64]) -> f64 {
        match self {
            Self::Radial(p) => p.value(norm_squared(dx).sqrt()),
            Self::Vector(p) => p.evaluate(dx),
        }
    }

    /// Write ∇Φ(dx) into `out`.
    ///
    /// For a radial potential this projects dΦ/dr onto the unit displacement
    /// direction, with the distance floor-clamped before dividing.
    pub fn gradient(&self, dx: &[f64], out: &mut [f64]) {
        match self {
            Self::Radial(p) => {
                let r = norm_squared(dx).sqrt().max(NORM_FLOOR);
                let coef = p.derivative(r) / r;
                for (o, &c) in out.iter_mut().zip(dx) {
                    *o = coef * c;
                }
            }
            Self::Vector(p) => p.gradient(dx, out),
        }
    }
}

/// Gaussian bump: Φ(r) = A exp(−r² / 2w²).
#[derive(Clone, Debug)]
pub struct GaussianBump {
    /// Peak height A.
    pub amplitude: f64,
    /// Length scale w.
    pub width: f64,
}

impl GaussianBump {
    /// Create a Gaussian bump.
    pub fn new(amplitude: f64, width: f64) -> Self {
        Self { amplitude, width }
    }
}

impl RadialPotential for GaussianBump {
    fn value(&self, r: f64) -> f64 {
        self.amplitude * (-0.5 * r * r / (self.width * self.width)).exp()
    }

    fn derivative(&self, r: f64) -> f64 {
        -r / (self.width * self.width) * self.value(r)
    }
}

/// Smoothed piecewise-constant window: height h on (r_inner, r_outer),
/// zero outside, built from a difference of two tanh soft indicators with
/// shared width [`SMOOTHING_WIDTH`]:
///
/// Φ(r) = h/2 · (tanh((r − r_inner)/ε) − tanh((r − r_outer)/ε))
#[derive(Clone, Debug)]
pub struct SmoothedStep {
    /// Plateau height h.
    pub height: f64,
    /// Inner transition radius.
    pub r_inner: f64,
    /// Outer transition radius.
    pub r_outer: f64,
}

impl SmoothedStep {
    /// Create a smoothed window between `r_inner` and `r_outer`.
    pub fn new(height: f64, r_inner: f64, r_outer: f64) -> Self {
        Self {
            height,
            r_inner,
            r_outer,
        }
    }
}

impl RadialPotential for SmoothedStep {
    fn value(&self, r: f64) -> f64 {
        let inner = ((r - self.r_inner) / SMOOTHING_WIDTH).tanh();
        let outer = ((r - self.r_outer) / SMOOTHING_WIDTH).tanh();
        0.5 * self.height * (inner - outer)
    }

    fn derivative(&self, r: f64) -> f64 {
        // d/dr tanh(u) = sech²(u) / ε
        let sech2 = |u: f64| {
            let c = u.cosh();
            1.0 / (c * c)
        };
        let inner = sech2((r - self.r_inner) / SMOOTHING_WIDTH);
        let outer = sech2((r - self.r_outer) / SMOOTHING_WIDTH);
        0.5 * self.height / SMOOTHING_WIDTH * (inner - outer)
    }
}

/// Inverse-distance (Coulomb-like) interaction: Φ(r) = γ / r.
///
/// The distance is floor-clamped, so value and derivative stay finite at
/// near-contact.
#[derive(Clone, Debug)]
pub struct InverseDistance {
    /// Coupling strength γ; positive is repulsive.
    pub gamma: f64,
}

impl InverseDistance {
    /// Create an inverse-distance interaction.
    pub fn new(gamma: f64) -> Self {
        Self { gamma }
    }
}

impl RadialPotential for InverseDistance {
    fn value(&self, r: f64) -> f64 {
        self.gamma / r.max(NORM_FLOOR)
    }

    fn derivative(&self, r: f64) -> f64 {
        let r = r.max(NORM_FLOOR);
        -self.gamma / (r * r)
    }
}

/// Morse interaction: Φ(r) = D (1 − e^(−a(r − r₀)))².
#[derive(Clone, Debug)]
pub struct Morse {
    /// Well depth D.
    pub depth: f64,
    /// Inverse width a.
    pub width: f64,
    /// Equilibrium distance r₀.
    pub r0: f64,
}

impl Morse {
    /// Create a Morse interaction.
    pub fn new(depth: f64, width: f64, r0: f64) -> Self {
        Self { depth, width, r0 }
    }
}

impl RadialPotential for Morse {
    fn value(&self, r: f64) -> f64 {
        let e = (-self.width * (r - self.r0)).exp();
        let m = 1.0 - e;
        self.depth * m * m
    }

    fn derivative(&self, r: f64) -> f64 {
        let e = (-self.width * (r - self.r0)).exp();
        2.0 * self.depth * self.width * (1.0 - e) * e
    }
}

/// Truncated-and-shifted Lennard-Jones 12-6:
/// Φ(r) = 4ε [(σ/r)¹² − (σ/r)⁶] − Φ_cut for r < r_cut, exactly 0 beyond.
///
/// The shift makes the value continuous at the cutoff; the divisor distance
/// is floor-clamped so near-contact pairs stay finite.
#[derive(Clone, Debug)]
pub struct LennardJones {
    /// Well depth ε.
    pub epsilon: f64,
    /// Zero-crossing distance σ.
    pub sigma: f64,
    /// Cutoff radius.
    pub r_cut: f64,
    shift: f64,
}

impl LennardJones {
    /// Create a truncated-and-shifted Lennard-Jones interaction.
    pub fn new(epsilon: f64, sigma: f64, r_cut: f64) -> Self {
        let mut lj = Self {
            epsilon,
            sigma,
            r_cut,
            shift: 0.0,
        };
        lj.shift = lj.unshifted(r_cut);
        lj
    }

    fn unshifted(&self, r: f64) -> f64 {
        let s_r = self.sigma / r.max(NORM_FLOOR);
        let s_r6 = s_r.powi(6);
        let s_r12 = s_r6 * s_r6;
        4.0 * self.epsilon * (s_r12 - s_r6)
    }
}

impl RadialPotential for LennardJones {
    fn value(&self, r: f64) -> f64 {
        if r >= self.r_cut {
            return 0.0;
        }
        self.unshifted(r) - self.shift
    }

    fn derivative(&self, r: f64) -> f64 {
        if r >= self.r_cut {
            return 0.0;
        }
        let r = r.max(NORM_FLOOR);
        let s_r = self.sigma / r;
        let s_r6 = s_r.powi(6);
        let s_r12 = s_r6 * s_r6;
        24.0 * self.epsilon / r * (s_r6 - 2.0 * s_r12)
    }
}

/// Anisotropic Gaussian with an independent length scale per axis:
/// Φ(dx) = A exp(−½ Σₖ dxₖ² / lₖ²).
#[derive(Clone, Debug)]
pub struct AnisotropicGaussian {
    /// Peak height A.
    pub amplitude: f64,
    /// Per-axis length scales lₖ.
    pub scales: Vec<f64>,
}

impl AnisotropicGaussian {
    /// Create an anisotropic Gaussian interaction.
    pub fn new(amplitude: f64, scales: Vec<f64>) -> Self {
        Self { amplitude, scales }
    }
}

impl VectorPotential for AnisotropicGaussian {
    fn evaluate(&self, dx: &[f64]) -> f64 {
        let q: f64 = dx
            .iter()
            .zip(&self.scales)
            .map(|(&c, &l)| c * c / (l * l))
            .sum();
        self.amplitude * (-0.5 * q).exp()
    }

    fn gradient(&self, dx: &[f64], out: &mut [f64]) {
        let value = self.evaluate(dx);
        for ((o, &c), &l) in out.iter_mut().zip(dx).zip(&self.scales) {
            *o = -c / (l * l) * value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Centered finite difference of a radial value.
    fn fd_radial(pot: &dyn RadialPotential, r: f64, h: f64) -> f64 {
        (pot.value(r + h) - pot.value(r - h)) / (2.0 * h)
    }

    fn check_radial(pot: &dyn RadialPotential, radii: &[f64]) {
        for &r in radii {
            let analytic = pot.derivative(r);
            let numeric = fd_radial(pot, r, 1e-6);
            assert_relative_eq!(analytic, numeric, epsilon = 1e-6, max_relative = 1e-5);
        }
    }

    #[test]
    fn test_gaussian_bump_derivative() {
        check_radial(&GaussianBump::new(2.0, 0.7), &[0.2, 0.8, 1.5]);
    }

    #[test]
    fn test_smoothed_step_derivative() {
        check_radial(&SmoothedStep::new(1.5, 0.5, 1.2), &[0.3, 0.5, 0.9, 1.2, 1.6]);
    }

    #[test]
    fn test_smoothed_step_plateau() {
        let step = SmoothedStep::new(2.0, 0.5, 1.5);
        // Deep inside the window the value sits at the plateau height.
        assert_relative_eq!(step.value(1.0), 2.0, max_relative = 1e-6);
        // Far outside it vanishes.
        assert_relative_eq!(step.value(3.0), 0.0, epsilon = 1e-9);
        assert_relative_eq!(step.value(0.0), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_inverse_distance_derivative() {
        check_radial(&InverseDistance::new(0.5), &[0.4, 1.0, 2.5]);
    }

    #[test]
    fn test_inverse_distance_finite_at_contact() {
        let pot = InverseDistance::new(0.5);
        assert!(pot.value(0.0).is_finite());
        assert!(pot.derivative(0.0).is_finite());
    }

    #[test]
    fn test_morse_derivative() {
        let morse = Morse::new(1.2, 2.0, 1.0);
        check_radial(&morse, &[0.6, 1.0, 1.8]);
        // Equilibrium at r0: zero force.
        assert_relative_eq!(morse.derivative(1.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_lennard_jones_derivative() {
        check_radial(&LennardJones::new(1.0, 1.0, 2.5), &[0.9, 1.2, 2.0]);
    }

    #[test]
    fn test_lennard_jones_cutoff() {
        let lj = LennardJones::new(1.0, 1.0, 2.5);
        // At and beyond the cutoff: exactly zero, value and derivative.
        assert_eq!(lj.value(2.5), 0.0);
        assert_eq!(lj.value(3.0), 0.0);
        assert_eq!(lj.derivative(2.5), 0.0);
        assert_eq!(lj.derivative(4.0), 0.0);
        // Just below: the shifted formula, continuous through the cutoff.
        let r = 2.5_f64 - 1e-9;
        let s6 = (1.0_f64 / r).powi(6);
        let sc6 = (1.0_f64 / 2.5).powi(6);
        let expected = 4.0 * (s6 * s6 - s6) - 4.0 * (sc6 * sc6 - sc6);
        assert_relative_eq!(lj.value(r), expected, max_relative = 1e-9);
        assert!(lj.value(r).abs() < 1e-8);
        assert!(lj.value(r) != 0.0);
    }

    #[test]
    fn test_lennard_jones_finite_at_contact() {
        let lj = LennardJones::new(1.0, 1.0, 2.5);
        assert!(lj.value(0.0).is_finite());
        assert!(lj.derivative(0.0).is_finite());
    }

    #[test]
    fn test_anisotropic_gaussian_gradient() {
        let pot = AnisotropicGaussian::new(1.5, vec![0.8, 1.6]);
        let dx = [0.4, -0.7];
        let mut analytic = [0.0; 2];
        pot.gradient(&dx, &mut analytic);

        let h = 1e-6;
        let mut probe = dx;
        for k in 0..2 {
            probe[k] = dx[k] + h;
            let plus = pot.evaluate(&probe);
            probe[k] = dx[k] - h;
            let minus = pot.evaluate(&probe);
            probe[k] = dx[k];
            let numeric = (plus - minus) / (2.0 * h);
            assert_relative_eq!(analytic[k], numeric, epsilon = 1e-8, max_relative = 1e-5);
        }
    }

    #[test]
    fn test_radial_gradient_projection() {
        // ∇Φ through the Interaction wrapper equals dΦ/dr · dx/r.
        let inter = Interaction::radial(InverseDistance::new(0.5));
        let dx = [3.0, 4.0];
        let mut grad = [0.0; 2];
        inter.gradient(&dx, &mut grad);
        let r = 5.0;
        let dphi = -0.5 / (r * r);
        assert_relative_eq!(grad[0], dphi * 3.0 / r, epsilon = 1e-15);
        assert_relative_eq!(grad[1], dphi * 4.0 / r, epsilon = 1e-15);
    }

    #[test]
    fn test_pairwise_forces_antisymmetric() {
        // Newton's third law at the pair level: ∇Φ(dx) = −∇Φ(−dx).
        let inter = Interaction::radial(GaussianBump::new(1.0, 0.9));
        let dx = [0.6, -0.2, 0.3];
        let neg: Vec<f64> = dx.iter().map(|c| -c).collect();
        let mut fwd = [0.0; 3];
        let mut rev = [0.0; 3];
        inter.gradient(&dx, &mut fwd);
        inter.gradient(&neg, &mut rev);
        for (f, r) in fwd.iter().zip(&rev) {
            assert_relative_eq!(*f, -r, epsilon = 1e-14);
        }
    }
}
