use crate::hex::Hex;
use anyhow::anyhow;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A real-valued point in cube coordinates. These show up as intermediate
/// values, e.g. mid-interpolation or after converting a world position into
/// hex space, and are always rounded back to a [Hex] before being handed to
/// anything that cares about tiles.
///
/// Like [Hex], `q + r + s = 0`, but only within floating point tolerance.
#[derive(Copy, Clone, Debug, PartialEq, Display, Serialize, Deserialize)]
#[display(fmt = "({}, {}, {})", "self.q", "self.r", "self.s")]
pub struct FractionalHex {
    q: f64,
    r: f64,
    s: f64,
}

impl FractionalHex {
    /// Maximum drift from `q + r + s = 0` that we accept during validation
    pub const TOLERANCE: f64 = 1e-6;

    /// Construct a new point from all three components. Returns an error if
    /// they don't (approximately) sum to zero.
    pub fn new(q: f64, r: f64, s: f64) -> anyhow::Result<Self> {
        if (q + r + s).abs() > Self::TOLERANCE {
            Err(anyhow!(
                "Invalid fractional hex ({}, {}, {}); must satisfy q+r+s=0",
                q,
                r,
                s
            ))
        } else {
            Ok(Self { q, r, s })
        }
    }

    /// Construct a new point from q and r, deriving s. Never fails.
    pub fn new_qr(q: f64, r: f64) -> Self {
        Self { q, r, s: -q - r }
    }

    pub fn q(&self) -> f64 {
        self.q
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn s(&self) -> f64 {
        self.s
    }

    /// Interpolate between two hexes. `t=0` gives `a`, `t=1` gives `b`.
    pub fn lerp(a: Hex, b: Hex, t: f64) -> Self {
        Self {
            q: precise_lerp(a.q().into(), b.q().into(), t),
            r: precise_lerp(a.r().into(), b.r().into(), t),
            s: precise_lerp(a.s().into(), b.s().into(), t),
        }
    }

    /// Round to the nearest whole hex. Each component is rounded on its own,
    /// then whichever component moved the most during rounding gets
    /// recomputed from the other two, so the result lands exactly on the
    /// plane. Ties go to `q` first, then `r`, and `s` absorbs everything else.
    /// This order decides which tile a point on a boundary belongs to, so
    /// lines and world lookups depend on it.
    pub fn round(self) -> Hex {
        let mut q = self.q.round();
        let mut r = self.r.round();
        let s = self.s.round();

        let q_diff = (q - self.q).abs();
        let r_diff = (r - self.r).abs();
        let s_diff = (s - self.s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            q = -r - s;
        } else if r_diff > s_diff {
            r = -q - s;
        }
        // Otherwise s is the one that gets recomputed, which Hex does for us

        Hex::new_qr(q as i32, r as i32)
    }
}

impl From<Hex> for FractionalHex {
    fn from(hex: Hex) -> Self {
        Self {
            q: hex.q().into(),
            r: hex.r().into(),
            s: hex.s().into(),
        }
    }
}

/// Linear interpolation in the form `a(1-t) + bt`. This is exact at both
/// `t=0` and `t=1`, which `a + (b-a)t` doesn't guarantee.
fn precise_lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_new_validates() {
        assert!(FractionalHex::new(0.5, -0.25, -0.25).is_ok());
        assert!(FractionalHex::new(0.5, 0.5, 0.5).is_err());
    }

    #[test]
    fn test_round_exact() {
        for hex in [Hex::ORIGIN, Hex::new_qr(3, -7), Hex::new_qr(-12, 5)] {
            assert_eq!(FractionalHex::from(hex).round(), hex);
        }
    }

    #[test]
    fn test_round_nearest() {
        assert_eq!(
            FractionalHex::new_qr(0.9, -0.1).round(),
            Hex::new_qr(1, 0)
        );
        assert_eq!(
            FractionalHex::new_qr(1.8, -0.9).round(),
            Hex::new_qr(2, -1)
        );
    }

    #[test]
    fn test_round_tie_break() {
        // q has the largest error, so it gets recomputed: r=-1, s=0 -> q=1
        assert_eq!(
            FractionalHex::new(0.6, -0.8, 0.2).unwrap().round(),
            Hex::new_qr(1, -1)
        );
        // r has the largest error: q=0, s=0 -> r=0
        assert_eq!(
            FractionalHex::new(0.1, -0.4, 0.3).unwrap().round(),
            Hex::ORIGIN
        );
        // q and r both move 0.5, so q isn't strictly the largest. r beats s
        // and gets recomputed from q=1, s=0
        assert_eq!(
            FractionalHex::new(0.5, -0.5, 0.0).unwrap().round(),
            Hex::new_qr(1, -1)
        );
        // q and s both move 0.5, so s absorbs the tie: q=1, r=0 -> s=-1
        assert_eq!(
            FractionalHex::new(0.5, 0.0, -0.5).unwrap().round(),
            Hex::new_qr(1, 0)
        );
        // r and s both move 0.5, so s absorbs the tie: q=0, r=1 -> s=-1
        assert_eq!(
            FractionalHex::new(0.0, 0.5, -0.5).unwrap().round(),
            Hex::new_qr(0, 1)
        );
    }

    #[test]
    fn test_lerp() {
        let a = Hex::new_qr(0, 0);
        let b = Hex::new_qr(4, -2);
        let mid = FractionalHex::lerp(a, b, 0.5);
        assert_approx_eq!(mid.q(), 2.0);
        assert_approx_eq!(mid.r(), -1.0);
        assert_approx_eq!(mid.s(), -1.0);
        assert_eq!(FractionalHex::lerp(a, b, 0.0).round(), a);
        assert_eq!(FractionalHex::lerp(a, b, 1.0).round(), b);
    }
}
