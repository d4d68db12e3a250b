use glam::Vec3;

/// Fixed cube lattice: cubes sit on every other integer coordinate.
#[derive(Debug, Clone, Copy)]
pub struct CubeGrid {
    /// Cubes along each axis.
    pub per_axis: u32,
    /// Distance between neighboring cube origins.
    pub stride: u32,
}

impl Default for CubeGrid {
    fn default() -> Self {
        Self {
            per_axis: 10,
            stride: 2,
        }
    }
}

impl CubeGrid {
    pub fn cube_count(&self) -> u32 {
        self.per_axis.pow(3)
    }

    /// Cube origin offsets in draw order.
    ///
    /// The x coordinate varies slowest and the y coordinate fastest, so the
    /// lattice is walked column by column.
    pub fn offsets(&self) -> Vec<Vec3> {
        let mut offsets = Vec::with_capacity(self.cube_count() as usize);
        for i in 0..self.per_axis {
            for j in 0..self.per_axis {
                for k in 0..self.per_axis {
                    offsets.push(Vec3::new(
                        (i * self.stride) as f32,
                        (k * self.stride) as f32,
                        (j * self.stride) as f32,
                    ));
                }
            }
        }
        offsets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_has_a_thousand_cubes() {
        let grid = CubeGrid::default();
        assert_eq!(grid.cube_count(), 1000);
        assert_eq!(grid.offsets().len(), 1000);
    }

    #[test]
    fn offsets_are_even_coordinates_up_to_eighteen() {
        for offset in CubeGrid::default().offsets() {
            for value in [offset.x, offset.y, offset.z] {
                assert!(value >= 0.0 && value <= 18.0);
                assert_eq!(value as u32 % 2, 0);
                assert_eq!(value.fract(), 0.0);
            }
        }
    }

    #[test]
    fn draw_order_walks_y_fastest() {
        let offsets = CubeGrid::default().offsets();
        assert_eq!(offsets[0], Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(offsets[1], Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(offsets[10], Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(offsets[100], Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn custom_grid_dimensions() {
        let grid = CubeGrid {
            per_axis: 3,
            stride: 4,
        };
        assert_eq!(grid.cube_count(), 27);
        let offsets = grid.offsets();
        assert_eq!(offsets.len(), 27);
        assert_eq!(offsets[1], Vec3::new(0.0, 4.0, 0.0));
    }
}
