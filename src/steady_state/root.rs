//! Scalar root-finding on the positive half-line
//!
//! A bracket is grown geometrically around the starting point, then refined
//! with Brent's method. Any non-finite function value is a domain error. The
//! error type here never leaves the steady-state module.

use thiserror::Error;

/// Why the root-find gave up
#[derive(Error, Debug, Clone, PartialEq)]
pub(crate) enum RootFindNonconvergence {
    #[error("function is not finite at {at}")]
    Domain { at: f64 },

    #[error("no sign change found after {steps} bracket expansions")]
    NoBracket { steps: usize },

    #[error("Brent iteration did not converge in {iterations} steps")]
    MaxIterations { iterations: usize },
}

/// Controls for [`find_positive_root`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RootFindControl {
    pub tolerance: f64,
    pub max_iterations: usize,
    pub bracket_growth: f64,
    pub max_bracket_steps: usize,
}

fn eval<F: Fn(f64) -> f64>(f: &F, x: f64) -> Result<f64, RootFindNonconvergence> {
    let fx = f(x);
    if fx.is_finite() {
        Ok(fx)
    } else {
        Err(RootFindNonconvergence::Domain { at: x })
    }
}

/// Find `x > 0` with `f(x) = 0`, starting from `x0 > 0`
pub(crate) fn find_positive_root<F: Fn(f64) -> f64>(
    f: F,
    x0: f64,
    control: &RootFindControl,
) -> Result<f64, RootFindNonconvergence> {
    let f0 = eval(&f, x0)?;
    if f0 == 0.0 {
        return Ok(x0);
    }

    // Walk outward on both sides of x0 until the sign changes.
    let (mut lo, mut f_lo) = (x0, f0);
    let (mut hi, mut f_hi) = (x0, f0);
    for _ in 0..control.max_bracket_steps {
        let next_hi = hi * control.bracket_growth;
        let f_next_hi = eval(&f, next_hi)?;
        if f_next_hi.signum() != f_hi.signum() {
            return brent(&f, (hi, f_hi), (next_hi, f_next_hi), control);
        }
        hi = next_hi;
        f_hi = f_next_hi;

        let next_lo = lo / control.bracket_growth;
        let f_next_lo = eval(&f, next_lo)?;
        if f_next_lo.signum() != f_lo.signum() {
            return brent(&f, (next_lo, f_next_lo), (lo, f_lo), control);
        }
        lo = next_lo;
        f_lo = f_next_lo;
    }

    Err(RootFindNonconvergence::NoBracket {
        steps: control.max_bracket_steps,
    })
}

/// Brent's method on a bracket `[a, b]` with `f(a)` and `f(b)` of opposite sign
fn brent<F: Fn(f64) -> f64>(
    f: &F,
    (mut a, mut fa): (f64, f64),
    (mut b, mut fb): (f64, f64),
    control: &RootFindControl,
) -> Result<f64, RootFindNonconvergence> {
    if fa == 0.0 {
        return Ok(a);
    }
    if fb == 0.0 {
        return Ok(b);
    }

    let (mut c, mut fc) = (a, fa);
    let mut d = b - a;
    let mut e = d;

    for _ in 0..control.max_iterations {
        if fb.signum() == fc.signum() {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol = 2.0 * f64::EPSILON * b.abs() + 0.5 * control.tolerance;
        let m = 0.5 * (c - b);
        if m.abs() <= tol || fb == 0.0 {
            return Ok(b);
        }

        if e.abs() >= tol && fa.abs() > fb.abs() {
            // Inverse quadratic interpolation, or secant when a == c
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                (2.0 * m * s, 1.0 - s)
            } else {
                let q = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * m * q * (q - r) - (b - a) * (r - 1.0)),
                    (q - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };
            if p > 0.0 {
                q = -q;
            } else {
                p = -p;
            }

            if 2.0 * p < (3.0 * m * q - (tol * q).abs()).min((e * q).abs()) {
                e = d;
                d = p / q;
            } else {
                d = m;
                e = m;
            }
        } else {
            // Bisection
            d = m;
            e = m;
        }

        a = b;
        fa = fb;
        b += if d.abs() > tol { d } else { tol.copysign(m) };
        fb = eval(f, b)?;
    }

    Err(RootFindNonconvergence::MaxIterations {
        iterations: control.max_iterations,
    })
}
