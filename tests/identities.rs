//! Structural identities that must hold across every regime boundary.

use approx::assert_relative_eq;
use real_bessel::{MAX_ORDER, ModifiedBessel, OrdinaryBessel, Regime};

const ARGS: [f64; 16] = [
    0.3, 1.0, 1.99, 2.0, 2.5, 4.0, 7.5, 10.0, 15.0, 24.0, 33.0, 60.0, 99.0, 150.0, 400.0, 900.0,
];

fn ordinary(n: u32) -> OrdinaryBessel<f64> {
    OrdinaryBessel::instance_of(n as i32).unwrap()
}

fn modified(n: u32) -> ModifiedBessel<f64> {
    ModifiedBessel::instance_of(n as i32).unwrap()
}

/// `|a - b + c|` measured against the magnitudes of its terms.
fn residual(a: f64, b: f64, c: f64) -> f64 {
    (a - b + c).abs() / (a.abs() + b.abs() + c.abs())
}

#[test]
fn three_term_recurrence() {
    for n in 1..100 {
        let (lo, mid, hi) = (ordinary(n - 1), ordinary(n), ordinary(n + 1));
        let (mlo, mmid, mhi) = (modified(n - 1), modified(n), modified(n + 1));
        for x in ARGS {
            let r = 2.0 * f64::from(n) / x;

            let (a, b, c) = (hi.bessel_j(x), r * mid.bessel_j(x), lo.bessel_j(x));
            if a != 0.0 || c != 0.0 {
                assert!(residual(a, b, c) < 1e-13, "J n={n} x={x}");
            }

            let (a, b, c) = (hi.bessel_y(x), r * mid.bessel_y(x), lo.bessel_y(x));
            if a.is_finite() && b.is_finite() {
                assert!(residual(a, b, c) < 1e-13, "Y n={n} x={x}");
            }

            // Scaled forms share the recurrence: I_{n+1} = I_{n-1} - (2n/x) I_n.
            let (a, b, c) = (mhi.bessel_ic(x), -r * mmid.bessel_ic(x), -mlo.bessel_ic(x));
            if a > 0.0 {
                assert!(residual(a, b, c) < 1e-13, "I n={n} x={x}");
            }

            // K_{n+1} = K_{n-1} + (2n/x) K_n.
            let (a, b, c) = (mhi.bessel_kc(x), r * mmid.bessel_kc(x), -mlo.bessel_kc(x));
            if a.is_finite() && b.is_finite() {
                assert!(residual(a, b, c) < 1e-13, "K n={n} x={x}");
            }
        }
    }
}

#[test]
fn wronskians() {
    for n in 0..100 {
        let (o, o1) = (ordinary(n), ordinary(n + 1));
        let (m, m1) = (modified(n), modified(n + 1));
        for x in ARGS {
            // J_{n+1} Y_n - J_n Y_{n+1} = 2/(πx)
            let p = o1.bessel_j(x) * o.bessel_y(x);
            let q = o.bessel_j(x) * o1.bessel_y(x);
            if p.is_finite() && q.is_finite() {
                let w = 2.0 / (core::f64::consts::PI * x);
                assert!((p - q - w).abs() < 1e-13 * (p.abs() + q.abs()), "JY n={n} x={x}");
            }

            // I_n K_{n+1} + I_{n+1} K_n = 1/x, in scaled form.
            let s = m.bessel_ic(x) * m1.bessel_kc(x) + m1.bessel_ic(x) * m.bessel_kc(x);
            if s.is_finite() && m1.bessel_ic(x) > 0.0 {
                assert_relative_eq!(s * x, 1.0, max_relative = 1e-13);
            }
        }
    }
}

#[test]
fn scaling_consistency() {
    for n in [0, 1, 2, 5, 20, 64, 100] {
        let m = modified(n);
        for x in [0.5, 1.5, 3.0, 11.0, 30.0, 80.0, 200.0, 600.0] {
            let i = m.bessel_i(x);
            if i.is_finite() && i > 0.0 {
                assert_relative_eq!(m.bessel_ic(x) * x.exp(), i, max_relative = 1e-13);
            }
            let k = m.bessel_k(x);
            if k.is_finite() && k > f64::MIN_POSITIVE {
                assert_relative_eq!(m.bessel_kc(x) * (-x).exp(), k, max_relative = 1e-13);
            }
        }
    }
}

/// Compare `f` one ulp below `t` with its value at `t`, corrected by the
/// slope `df(t)` so that only a jump between regimes shows up.
fn assert_continuous(f: impl Fn(f64) -> f64, df: impl Fn(f64) -> f64, t: f64, scale: f64, what: &str) {
    let below = t * (1.0 - f64::EPSILON);
    let predicted = f(t) - (t - below) * df(t);
    let jump = (f(below) - predicted).abs();
    assert!(jump < 1e-13 * scale, "{what} at x={t}: jump {jump:e}");
}

// Slopes come from the order below only, so the top order needs no
// engine beyond MAX_ORDER:
//   J'_n = J_{n-1} - (n/x) J_n, and likewise for Y
//   (I_n e^{-x})' = I_{n-1} e^{-x} - (n/x + 1) I_n e^{-x}
//   (K_n e^{x})' = -K_{n-1} e^{x} - (n/x - 1) K_n e^{x}
#[test]
fn continuous_across_regime_switches() {
    for n in [2_u32, 3, 5, 7, 10, 16, 31, 50, 71, 99, MAX_ORDER] {
        let (lo, mid) = (ordinary(n - 1), ordinary(n));
        let nf = f64::from(n);
        for t in [2.0, nf, (nf * nf).max(25.0)] {
            let envelope = (2.0 / (core::f64::consts::PI * t)).sqrt();
            assert_continuous(
                |x| mid.bessel_j(x),
                |x| lo.bessel_j(x) - nf / x * mid.bessel_j(x),
                t,
                mid.bessel_j(t).abs().max(envelope),
                &format!("J_{n}"),
            );
        }
        for t in [2.0, nf] {
            assert_continuous(
                |x| mid.bessel_y(x),
                |x| lo.bessel_y(x) - nf / x * mid.bessel_y(x),
                t,
                mid.bessel_y(t).abs(),
                &format!("Y_{n}"),
            );
        }

        let (mlo, mmid) = (modified(n - 1), modified(n));
        for t in [2.0, 24.0, (0.5 * nf * nf).max(24.0)] {
            assert_continuous(
                |x| mmid.bessel_ic(x),
                |x| mlo.bessel_ic(x) - (nf / x + 1.0) * mmid.bessel_ic(x),
                t,
                mmid.bessel_ic(t),
                &format!("Ic_{n}"),
            );
            assert_continuous(
                |x| mmid.bessel_kc(x),
                |x| -mlo.bessel_kc(x) - (nf / x - 1.0) * mmid.bessel_kc(x),
                t,
                mmid.bessel_kc(t),
                &format!("Kc_{n}"),
            );
        }
    }
}

#[test]
fn top_order_regime_switches_are_exercised() {
    let top = ordinary(MAX_ORDER);
    assert_eq!(top.j_regime(99.99), Some(Regime::BackwardRecurrence));
    assert_eq!(top.j_regime(100.0), Some(Regime::ForwardRecurrence));
    assert_eq!(top.j_regime(10_000.0), Some(Regime::Asymptotic));
    let mtop = modified(MAX_ORDER);
    assert_eq!(mtop.i_regime(4_999.0), Some(Regime::BackwardRecurrence));
    assert_eq!(mtop.i_regime(5_000.0), Some(Regime::Asymptotic));
}

#[test]
fn engines_are_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OrdinaryBessel<f64>>();
    assert_send_sync::<ModifiedBessel<f64>>();

    let j = ordinary(37);
    let k = modified(37);
    let xs: Vec<f64> = (1..=64).map(|i| f64::from(i) * 0.75).collect();
    let expected: Vec<(f64, f64)> = xs.iter().map(|&x| (j.bessel_j(x), k.bessel_kc(x))).collect();

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for (x, want) in xs.iter().zip(&expected) {
                    assert_eq!((j.bessel_j(*x), k.bessel_kc(*x)), *want);
                }
            });
        }
    });
}
