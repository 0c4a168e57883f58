//! Tiny LCG + Box-Muller for the demo generator.
//! Avoids a rand dependency.

#[derive(Clone)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    #[must_use]
    pub fn seed(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn seed_from_time() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        Self::seed(
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_nanos() as u64,
        )
    }

    #[inline]
    fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1);
        f64::from((self.state >> 32) as u32) / f64::from(u32::MAX)
    }

    /// Normal sample 𝒩(mu, sigma²).
    #[inline]
    pub fn normal(&mut self, mu: f64, sigma: f64) -> f64 {
        let u1 = self.next_f64().max(f64::MIN_POSITIVE);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        sigma.mul_add(z, mu)
    }
}
