pub mod unit;

use crate::{
    config::{LayoutConfig, Orientation},
    layout::unit::{Point2, Point3},
    FractionalHex, Hex,
};
use anyhow::{anyhow, Context};
use nalgebra::{Matrix2, Vector2};
use validator::Validate;

/// Converts between hex space and world space. A layout is created from a
/// [LayoutConfig], and from there can be used for any number of conversions.
/// It holds no mutable state, so it's safe to share between threads.
///
/// Config options cannot be changed after creating a layout, but layouts are
/// very cheap to create so if you need to change the config, just create a new
/// one.
///
/// ## Math
///
/// Both orientations are linear maps from `(q, r)` to `(x, y)`. For flat-top
/// tiles, with `H = 1.5 * outer_radius` and `V = inner_radius`:
///
/// ```text
/// x = q * H
/// y = q * V + r * 2V
/// ```
///
/// For pointy-top tiles, with `W = inner_radius`:
///
/// ```text
/// x = q * 2W + r * W
/// y = r * 1.5 * outer_radius
/// ```
///
/// Going the other way uses the inverse matrix. For regular hexagons in the
/// flat-top orientation, that works out to the familiar
/// `q = 2/3 * x/R`, `r = -1/3 * x/R + sqrt(3)/3 * y/R`.
#[derive(Clone, Debug)]
pub struct Layout {
    config: LayoutConfig,
    /// Hex (q, r) to world (x, y)
    forward: Matrix2<f64>,
    /// World (x, y) to fractional hex (q, r)
    inverse: Matrix2<f64>,
}

impl Layout {
    /// Unit vectors shorter than this are considered to have no direction
    const DIRECTION_EPSILON: f64 = 1e-9;

    /// Initialize a new layout with the given config. Returns an error if the
    /// config is invalid.
    pub fn new(config: LayoutConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid layout config")?;

        let forward = match config.orientation {
            Orientation::FlatTop => {
                let horizontal = config.outer_radius * 1.5;
                let vertical = config.inner_radius;
                Matrix2::new(horizontal, 0.0, vertical, vertical * 2.0)
            }
            Orientation::PointyTop => {
                let horizontal = config.inner_radius;
                let vertical = config.outer_radius * 1.5;
                Matrix2::new(horizontal * 2.0, horizontal, 0.0, vertical)
            }
        };
        // Validation keeps both radii positive, so this should always work
        let inverse = forward.try_inverse().ok_or_else(|| {
            anyhow!("layout transform for {:?} is not invertible", config)
        })?;

        Ok(Self {
            config,
            forward,
            inverse,
        })
    }

    /// Get a reference to the config that this layout uses
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Get the position of a tile's center in 2D world space
    pub fn hex_to_world(&self, hex: Hex) -> Point2 {
        let axial = Vector2::new(f64::from(hex.q()), f64::from(hex.r()));
        (self.forward * axial).into()
    }

    /// Get the position of a tile's center in 3D world space. This is the 2D
    /// position at the configured tile elevation, shifted by the tile offset.
    pub fn hex_to_world_location(&self, hex: Hex) -> Point3 {
        let point = self.hex_to_world(hex);
        Point3::new(point.x, point.y, self.config.tile_elevation)
            + self.config.tile_offset
    }

    /// Convert a world position into (unrounded) hex space
    pub fn world_to_fractional_hex(&self, point: Point2) -> FractionalHex {
        let axial = self.inverse * Vector2::from(point);
        FractionalHex::new_qr(axial.x, axial.y)
    }

    /// Find the tile that contains a world position
    pub fn world_to_hex(&self, point: Point2) -> Hex {
        self.world_to_fractional_hex(point).round()
    }

    /// Find the tile under a 3D world location, e.g. a pointer ray hit. The
    /// tile offset is removed and the height is ignored.
    pub fn world_location_to_hex(&self, location: Point3) -> Hex {
        self.world_to_hex((location - self.config.tile_offset).xy())
    }

    /// Get the unit vector pointing from one tile's center to another's, in
    /// world space. Returns `None` if the two are the same tile.
    pub fn world_direction(&self, from: Hex, to: Hex) -> Option<Vector2<f64>> {
        let delta: Vector2<f64> =
            (self.hex_to_world(to) - self.hex_to_world(from)).into();
        delta.try_normalize(Self::DIRECTION_EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use strum::IntoEnumIterator;

    fn flat() -> Layout {
        Layout::new(LayoutConfig::default()).unwrap()
    }

    #[test]
    fn test_hex_to_world_flat() {
        let layout = flat();
        let point = layout.hex_to_world(Hex::new_qr(1, 0));
        assert_approx_eq!(point.x, 150.0);
        assert_approx_eq!(point.y, 86.60254037844386);

        let point = layout.hex_to_world(Hex::new_qr(0, 1));
        assert_approx_eq!(point.x, 0.0);
        assert_approx_eq!(point.y, 173.20508075688772);

        assert_eq!(layout.hex_to_world(Hex::ORIGIN), Point2::new(0.0, 0.0));
    }

    #[test]
    fn test_hex_to_world_pointy() {
        let layout =
            Layout::new(LayoutConfig::regular(100.0, Orientation::PointyTop))
                .unwrap();
        let point = layout.hex_to_world(Hex::new_qr(1, 0));
        assert_approx_eq!(point.x, 173.20508075688772);
        assert_approx_eq!(point.y, 0.0);

        let point = layout.hex_to_world(Hex::new_qr(0, 1));
        assert_approx_eq!(point.x, 86.60254037844386);
        assert_approx_eq!(point.y, 150.0);
    }

    #[test]
    fn test_world_to_fractional_matches_closed_form() {
        let layout = flat();
        let radius = 100.0;
        let point = Point2::new(123.0, -45.0);
        let fractional = layout.world_to_fractional_hex(point);
        let q = 2.0 / 3.0 * point.x / radius;
        let r = -1.0 / 3.0 * point.x / radius
            + 3f64.sqrt() / 3.0 * point.y / radius;
        assert_approx_eq!(fractional.q(), q);
        assert_approx_eq!(fractional.r(), r);
        assert_approx_eq!(fractional.s(), -q - r);
    }

    #[test]
    fn test_round_trip() {
        for orientation in Orientation::iter() {
            let layout =
                Layout::new(LayoutConfig::regular(37.5, orientation)).unwrap();
            for q in -6..=6 {
                for r in -6..=6 {
                    let hex = Hex::new_qr(q, r);
                    assert_eq!(
                        layout.world_to_hex(layout.hex_to_world(hex)),
                        hex,
                        "round trip failed for {} in {}",
                        hex,
                        orientation
                    );
                }
            }
        }
    }

    #[test]
    fn test_world_to_hex_near_center() {
        let layout = flat();
        let center = layout.hex_to_world(Hex::new_qr(2, -1));
        // Anything well inside the tile belongs to it
        let nudged = center + Point2::new(30.0, -20.0);
        assert_eq!(layout.world_to_hex(nudged), Hex::new_qr(2, -1));
    }

    #[test]
    fn test_world_location() {
        let layout = Layout::new(LayoutConfig {
            tile_offset: Point3::new(10.0, 20.0, 5.0),
            tile_elevation: 1.0,
            ..Default::default()
        })
        .unwrap();
        let hex = Hex::new_qr(1, -2);
        let location = layout.hex_to_world_location(hex);
        let point = layout.hex_to_world(hex);
        assert_approx_eq!(location.x, point.x + 10.0);
        assert_approx_eq!(location.y, point.y + 20.0);
        assert_approx_eq!(location.z, 6.0);
        assert_eq!(layout.world_location_to_hex(location), hex);
    }

    #[test]
    fn test_world_direction() {
        let layout = flat();
        let up = layout
            .world_direction(Hex::ORIGIN, Hex::new_qr(0, 1))
            .unwrap();
        assert_approx_eq!(up.x, 0.0);
        assert_approx_eq!(up.y, 1.0);
        assert!(layout.world_direction(Hex::ORIGIN, Hex::ORIGIN).is_none());
    }

    #[test]
    fn test_invalid_config() {
        let config = LayoutConfig {
            outer_radius: 0.0,
            ..Default::default()
        };
        assert!(Layout::new(config).is_err());
    }
}
