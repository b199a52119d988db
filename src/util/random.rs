//! Uniform random index draws for the simulation generators.
//!
//! Uses the browser's unseeded `Math.random()`; reproducibility is out of
//! scope. Callers that need determinism (tests) inject fixed picks instead
//! of calling this.

/// Draw a uniform index in `0..n`. Returns 0 for `n == 0` and outside a
/// browser environment.
pub fn random_below(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let drawn = (js_sys::Math::random() * n as f64).floor() as usize;
        drawn.min(n - 1)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
