//! This sub-module contains the integer coordinate type and the lattice
//! directions. See the parent module documentation for more info on the
//! coordinate system.

use anyhow::{anyhow, bail, Context};
use derive_more::{Add, Display, Mul, Neg, Sub};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{EnumIter, IntoEnumIterator};

/// A single cell in the hex lattice, in cube coordinates. See the
/// module-level documentation for a description of the coordinate system.
///
/// ## Implementation
///
/// Since `q + r + s = 0` for every tile, this struct only stores `q` and `r`
/// and derives `s` as needed. A nice side effect is that an invalid [Hex] is
/// unrepresentable: the only way to pass in all three components is
/// [Hex::new], which validates them.
///
/// The derived ordering is lexicographic on `(q, r)`, which is the same as
/// lexicographic on `(q, r, s)` because `s` is a function of the other two.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Add,
    Sub,
    Neg,
    Mul,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q", "self.r", "self.s()")]
pub struct Hex {
    q: i32,
    r: i32,
}

impl Hex {
    pub const ORIGIN: Self = Self::new_qr(0, 0);

    /// Construct a new hex from all three cube components. Returns an error if
    /// the components don't satisfy `q + r + s = 0`. Invalid coordinates are
    /// never silently corrected.
    pub fn new(q: i32, r: i32, s: i32) -> anyhow::Result<Self> {
        // Widen so extreme components can't overflow the check
        if i64::from(q) + i64::from(r) + i64::from(s) != 0 {
            Err(anyhow!(
                "Invalid hex coordinate ({}, {}, {}); must satisfy q+r+s=0",
                q,
                r,
                s
            ))
        } else {
            Ok(Self::new_qr(q, r))
        }
    }

    /// Construct a new hex with the given q and r. Since q+r+s=0 for all
    /// hexes, we can derive s from q & r, so this can never fail.
    pub const fn new_qr(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    pub fn q(&self) -> i32 {
        self.q
    }

    pub fn r(&self) -> i32 {
        self.r
    }

    pub fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Multiply each component by an integer
    pub fn scale(self, multiplier: i32) -> Self {
        self * multiplier
    }

    /// Divide each component by an integer (truncating, like any integer
    /// division). The quotient is re-validated, so this fails if the
    /// truncation would land the point off the plane `q + r + s = 0`, or if
    /// the divisor is zero.
    pub fn divide(self, divisor: i32) -> anyhow::Result<Self> {
        if divisor == 0 {
            bail!("Cannot divide hex {} by zero", self);
        }
        Self::new(self.q / divisor, self.r / divisor, self.s() / divisor)
            .with_context(|| format!("error dividing {} by {}", self, divisor))
    }

    /// The number of steps between this hex and the origin. Saturates at
    /// `i32::MAX` for hexes near the edge of the coordinate space.
    pub fn length(self) -> i32 {
        let q = i64::from(self.q);
        let r = i64::from(self.r);
        let s = -q - r;
        // Sum of absolute values is always even for a point on the plane, so
        // this division is exact
        let length = (q.abs() + r.abs() + s.abs()) / 2;
        i32::try_from(length).unwrap_or(i32::MAX)
    }

    /// Calculate the path distance between two hexes, meaning the number of
    /// hops it takes to get from one to the other. 0 if the hexes are equal,
    /// 1 if they are adjacent, 2 if there is 1 tile between them, etc.
    pub fn distance_to(self, other: Hex) -> i32 {
        (self - other).length()
    }

    /// Sum of the absolute component differences. This is always exactly
    /// double [Self::distance_to], and is only used as a search heuristic.
    pub fn manhattan_distance_to(self, other: Hex) -> i32 {
        (self.q - other.q).abs()
            + (self.r - other.r).abs()
            + (self.s() - other.s()).abs()
    }

    /// Get the unit offset for a direction index. The index wraps, so any
    /// `usize` is valid.
    pub fn direction(index: usize) -> Hex {
        DIRECTIONS[index % DIRECTIONS.len()]
    }

    /// Get the location of the hex adjacent to this one in a direction
    pub fn neighbor(self, direction: HexDirection) -> Hex {
        self + direction.offset()
    }

    /// Get an iterator of all the hexes directly adjacent to this one, in
    /// direction order. The iterator will always contain exactly 6 values.
    /// These are **not** checked against any grid.
    pub fn adjacents(self) -> impl Iterator<Item = Hex> {
        HexDirection::iter().map(move |dir| self.neighbor(dir))
    }

    /// Is the given hex exactly one step away from this one?
    pub fn is_adjacent_to(self, other: Hex) -> bool {
        self.distance_to(other) == 1
    }
}

/// Parse from `q,r` or `q,r,s`. The three-component form is validated.
impl FromStr for Hex {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components = s
            .split(',')
            .map(|component| {
                component.trim().parse::<i32>().with_context(|| {
                    format!("invalid hex component {:?}", component)
                })
            })
            .collect::<anyhow::Result<Vec<i32>>>()?;
        match components.as_slice() {
            [q, r] => Ok(Self::new_qr(*q, *r)),
            [q, r, s] => Self::new(*q, *r, *s),
            _ => Err(anyhow!(
                "expected hex in the format `q,r` or `q,r,s`, got {:?}",
                s
            )),
        }
    }
}

/// The 6 unit offsets between adjacent hexes, in direction order. **This
/// order is part of the public contract**: direction index 0 is always
/// `(1, 0, -1)`, and neighbor enumeration follows this sequence.
pub const DIRECTIONS: [Hex; 6] = [
    Hex::new_qr(1, 0),
    Hex::new_qr(1, -1),
    Hex::new_qr(0, -1),
    Hex::new_qr(-1, 0),
    Hex::new_qr(-1, 1),
    Hex::new_qr(0, 1),
];

/// The 6 directions in which hexes can line up side-to-side. The names
/// describe how each direction appears in a flat-top layout, where `+y` is up.
/// Iteration order (via [strum::IntoEnumIterator]) matches [DIRECTIONS].
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HexDirection {
    UpRight,
    DownRight,
    Down,
    DownLeft,
    UpLeft,
    Up,
}

impl HexDirection {
    /// Position of this direction in [DIRECTIONS]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Get an offset that would move a hex one tile in this direction
    pub fn offset(self) -> Hex {
        DIRECTIONS[self.index()]
    }

    /// Get the direction pointing the opposite way
    pub fn opposite(self) -> Self {
        match self {
            Self::UpRight => Self::DownLeft,
            Self::DownRight => Self::UpLeft,
            Self::Down => Self::Up,
            Self::DownLeft => Self::UpRight,
            Self::UpLeft => Self::DownRight,
            Self::Up => Self::Down,
        }
    }
}

/// A trait that denotes any type that has a singular assigned position in the
/// hex grid.
pub trait HasHexPosition: Sized {
    fn position(&self) -> Hex;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{assert_tokens, Token};

    #[test]
    fn test_new_validates() {
        assert_eq!(Hex::new(1, -1, 0).unwrap(), Hex::new_qr(1, -1));
        assert_eq!(Hex::new(0, 0, 0).unwrap(), Hex::ORIGIN);
        let err = Hex::new(1, 1, 1).unwrap_err();
        assert!(err.to_string().contains("(1, 1, 1)"), "{}", err);
    }

    #[test]
    fn test_new_extreme_components() {
        let hex: Hex = "2147483647,1,-2147483648".parse().unwrap();
        assert_eq!(hex.q(), i32::MAX);
        assert_eq!(hex.s(), i32::MIN);
        assert_eq!(hex.length(), i32::MAX);
        assert!(Hex::new(i32::MAX, i32::MAX, i32::MAX).is_err());
        assert!("2147483647,1,-2147483647".parse::<Hex>().is_err());
        assert_eq!(Hex::new_qr(i32::MIN, i32::MAX).length(), i32::MAX);
    }

    #[test]
    fn test_s_derived() {
        let hex = Hex::new_qr(3, -7);
        assert_eq!(hex.s(), 4);
        assert_eq!(hex.q() + hex.r() + hex.s(), 0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Hex::new_qr(1, -3);
        let b = Hex::new_qr(3, -7);
        assert_eq!(a + b, Hex::new_qr(4, -10));
        assert_eq!(a - b, Hex::new_qr(-2, 4));
        assert_eq!(-a, Hex::new_qr(-1, 3));
        assert_eq!(a.scale(2), Hex::new_qr(2, -6));
        assert_eq!(Hex::new_qr(4, -2).divide(2).unwrap(), Hex::new_qr(2, -1));
    }

    #[test]
    fn test_divide_errors() {
        // (1, 1, -2) / 2 truncates to (0, 0, -1), which is off the plane
        assert!(Hex::new_qr(1, 1).divide(2).is_err());
        assert!(Hex::new_qr(1, 1).divide(0).is_err());
    }

    #[test]
    fn test_distance_to() {
        let p0 = Hex::ORIGIN;
        let p1 = Hex::new_qr(-1, 1);
        let p2 = Hex::new_qr(2, -1);
        let p3 = Hex::new_qr(2, -3);

        assert_eq!(p0.distance_to(p0), 0);
        assert_eq!(p3.distance_to(p3), 0);

        assert_eq!(p0.distance_to(p1), 1);
        assert_eq!(p0.distance_to(p2), 2);
        assert_eq!(p0.distance_to(p3), 3);

        assert_eq!(p1.distance_to(p2), 3);
        assert_eq!(p1.distance_to(p3), 4);
        assert_eq!(p2.distance_to(p3), 2);
        assert_eq!(p3.distance_to(p2), 2);
    }

    #[test]
    fn test_manhattan_distance() {
        let a = Hex::new_qr(2, -3);
        for b in [Hex::ORIGIN, Hex::new_qr(-4, 1), Hex::new_qr(5, 5)] {
            assert_eq!(a.manhattan_distance_to(b), 2 * a.distance_to(b));
        }
    }

    #[test]
    fn test_directions() {
        assert_eq!(Hex::direction(0), Hex::new(1, 0, -1).unwrap());
        assert_eq!(Hex::direction(5), Hex::new(0, 1, -1).unwrap());
        assert_eq!(Hex::direction(6), Hex::direction(0));
        for (i, dir) in HexDirection::iter().enumerate() {
            assert_eq!(dir.offset(), Hex::direction(i));
            assert_eq!(dir.offset().length(), 1);
            assert_eq!(dir.offset() + dir.opposite().offset(), Hex::ORIGIN);
        }
    }

    #[test]
    fn test_adjacents() {
        let center = Hex::new_qr(3, -1);
        let adjacents: Vec<Hex> = center.adjacents().collect();
        assert_eq!(adjacents.len(), 6);
        assert_eq!(adjacents[0], Hex::new_qr(4, -1));
        assert!(adjacents.iter().all(|adj| center.is_adjacent_to(*adj)));
    }

    #[test]
    fn test_ordering() {
        let mut hexes =
            vec![Hex::new_qr(1, 0), Hex::new_qr(0, 1), Hex::new_qr(0, -1)];
        hexes.sort();
        assert_eq!(
            hexes,
            vec![Hex::new_qr(0, -1), Hex::new_qr(0, 1), Hex::new_qr(1, 0)]
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("2,-1".parse::<Hex>().unwrap(), Hex::new_qr(2, -1));
        assert_eq!(" 2, -1, -1 ".parse::<Hex>().unwrap(), Hex::new_qr(2, -1));
        assert!("2,-1,0".parse::<Hex>().is_err());
        assert!("2".parse::<Hex>().is_err());
        assert!("a,b".parse::<Hex>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Hex::new_qr(2, -3).to_string(), "(2, -3, 1)");
    }

    #[test]
    fn test_serde() {
        assert_tokens(
            &Hex::new_qr(2, -3),
            &[
                Token::Struct {
                    name: "Hex",
                    len: 2,
                },
                Token::Str("q"),
                Token::I32(2),
                Token::Str("r"),
                Token::I32(-3),
                Token::StructEnd,
            ],
        );
    }
}
