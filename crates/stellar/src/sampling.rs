use rand::Rng;
use rand_chacha::ChaChaRng;

/// Sample from a power-law distribution
///
/// Samples from p(x) ∝ x^α between x_min and x_max using inverse transform sampling.
/// α = -1 is handled with the logarithmic inverse.
///
/// # Arguments
/// * `x_min` - Minimum value
/// * `x_max` - Maximum value
/// * `alpha` - Power-law exponent (e.g., -2.3 for Salpeter-like high-mass slope)
/// * `rng` - Random number generator
pub fn sample_power_law(x_min: f64, x_max: f64, alpha: f64, rng: &mut ChaChaRng) -> f64 {
    let u: f64 = rng.random();
    let alpha1 = alpha + 1.0;
    if alpha1.abs() < 1e-12 {
        return x_min * (x_max / x_min).powf(u);
    }
    (u * (x_max.powf(alpha1) - x_min.powf(alpha1)) + x_min.powf(alpha1)).powf(1.0 / alpha1)
}

/// ∫ x^α dx between `a` and `b`
fn power_law_integral(a: f64, b: f64, alpha: f64) -> f64 {
    let alpha1 = alpha + 1.0;
    if alpha1.abs() < 1e-12 {
        (b / a).ln()
    } else {
        (b.powf(alpha1) - a.powf(alpha1)) / alpha1
    }
}

/// A continuous broken power-law mass function
///
/// Segment `k` spans `boundaries[k]..boundaries[k + 1]` with slope
/// `exponents[k]`; coefficients are chosen so the density is continuous at the
/// breaks.
#[derive(Debug, Clone, PartialEq)]
pub struct BrokenPowerLaw {
    boundaries: Vec<f64>,
    exponents: Vec<f64>,
    /// Cumulative segment probabilities, last entry is 1
    cumulative: Vec<f64>,
}

impl BrokenPowerLaw {
    /// Build a broken power law; `None` when the shape is inconsistent
    ///
    /// Requires `boundaries.len() == exponents.len() + 1`, positive strictly
    /// increasing boundaries and at least one segment.
    pub fn new(boundaries: Vec<f64>, exponents: Vec<f64>) -> Option<Self> {
        if exponents.is_empty() || boundaries.len() != exponents.len() + 1 {
            return None;
        }
        if boundaries[0] <= 0.0 || boundaries.windows(2).any(|w| w[1] <= w[0]) {
            return None;
        }

        let mut coefficient = 1.0;
        let mut weights = Vec::with_capacity(exponents.len());
        for (k, &alpha) in exponents.iter().enumerate() {
            if k > 0 {
                // Continuity at the break between segment k-1 and k
                coefficient *= boundaries[k].powf(exponents[k - 1] - alpha);
            }
            weights.push(coefficient * power_law_integral(boundaries[k], boundaries[k + 1], alpha));
        }

        let total: f64 = weights.iter().sum();
        let mut running = 0.0;
        let cumulative = weights
            .iter()
            .map(|w| {
                running += w / total;
                running
            })
            .collect();

        Some(Self {
            boundaries,
            exponents,
            cumulative,
        })
    }

    /// Kroupa (2001) IMF between 0.01 M☉ and `max_mass`
    ///
    /// - 0.01 ≤ M < 0.08 M☉: α = -0.3
    /// - 0.08 ≤ M < 0.5 M☉: α = -1.3
    /// - 0.5 ≤ M ≤ max_mass: α = -2.3
    ///
    /// Segments above `max_mass` are dropped; `max_mass` must exceed 0.01 M☉.
    ///
    /// # Example
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaChaRng;
    /// use stellar::sampling::BrokenPowerLaw;
    ///
    /// let imf = BrokenPowerLaw::kroupa(100.0).unwrap();
    /// let mut rng = ChaChaRng::seed_from_u64(42);
    /// let masses = imf.sample_many(&mut rng, 1000);
    ///
    /// assert!(masses.iter().all(|&m| (0.01..=100.0).contains(&m)));
    /// ```
    pub fn kroupa(max_mass: f64) -> Option<Self> {
        let breaks = [(0.01, -0.3), (0.08, -1.3), (0.5, -2.3)];

        let mut boundaries = Vec::new();
        let mut exponents = Vec::new();
        for &(lower, alpha) in breaks.iter().filter(|(lower, _)| *lower < max_mass) {
            boundaries.push(lower);
            exponents.push(alpha);
        }
        boundaries.push(max_mass);

        Self::new(boundaries, exponents)
    }

    /// Lower and upper mass limits
    pub fn range(&self) -> (f64, f64) {
        (self.boundaries[0], self.boundaries[self.boundaries.len() - 1])
    }

    /// Draw one mass
    pub fn sample(&self, rng: &mut ChaChaRng) -> f64 {
        let u: f64 = rng.random();
        let segment = self
            .cumulative
            .iter()
            .position(|&c| u < c)
            .unwrap_or(self.exponents.len() - 1);

        sample_power_law(
            self.boundaries[segment],
            self.boundaries[segment + 1],
            self.exponents[segment],
            rng,
        )
    }

    /// Draw `n` masses
    pub fn sample_many(&self, rng: &mut ChaChaRng, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.sample(rng)).collect()
    }
}
