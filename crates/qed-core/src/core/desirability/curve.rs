use super::params::DesirabilityParams;

/// Evaluates the asymmetric double-sigmoid desirability curve at `x`.
///
/// The curve rises around `c - d/2` with steepness `e`, plateaus at roughly
/// `(a + b) / dmax` over a window of width `d` centred on `c`, and falls around `c + d/2`
/// with steepness `f`:
///
/// ```text
/// (a + b / (1 + exp(-(x - c + d/2) / e)) * (1 - 1 / (1 + exp(-(x - c - d/2) / f)))) / dmax
/// ```
///
/// Total over finite `x`: saturating exponentials only drive a sigmoid to 0 or 1.
#[inline]
pub fn ads(x: f64, p: &DesirabilityParams) -> f64 {
    let rising = p.b / (1.0 + (-(x - p.c + p.d / 2.0) / p.e).exp());
    let falling = 1.0 - 1.0 / (1.0 + (-(x - p.c - p.d / 2.0) / p.f).exp());
    (p.a + rising * falling) / p.dmax
}
