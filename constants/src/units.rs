/// All document geometry is stored in decimal feet. Manifests and the
/// viewport use the same unit; metric values are display-only.
pub const FEET_PER_METRE: f32 = 3.280_839_9;

pub fn metres_to_feet(metres: f32) -> f32 {
    metres * FEET_PER_METRE
}

pub fn feet_to_metres(feet: f32) -> f32 {
    feet / FEET_PER_METRE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_invert() {
        let elevation = 10.0;
        assert!((metres_to_feet(feet_to_metres(elevation)) - elevation).abs() < 1e-4);
    }
}
