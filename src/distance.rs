//! Great-circle angular separation.

/// Compute the angular separation between two points on the celestial
/// sphere, in degrees.
///
/// This uses the haversine formulation rather than the spherical law of
/// cosines: the latter loses precision for nearly-identical points (where
/// `acos` is evaluated near 1.0). Inputs are equatorial coordinates in
/// degrees; the conversion to radians happens once, here, at the boundary.
///
/// The function is pure and safe to call concurrently from any number of
/// workers. It is symmetric in its two points, and returns 0 (within
/// floating-point tolerance) when the points coincide.
pub fn angular_separation_deg(ra1_deg: f64, dec1_deg: f64, ra2_deg: f64, dec2_deg: f64) -> f64 {
    let dec1 = dec1_deg.to_radians();
    let dec2 = dec2_deg.to_radians();
    let half_ddec = 0.5 * (dec2 - dec1);
    let half_dra = 0.5 * (ra2_deg - ra1_deg).to_radians();

    let h = half_ddec.sin().powi(2) + dec1.cos() * dec2.cos() * half_dra.sin().powi(2);
    // rounding can push h infinitesimally past 1 for antipodal points
    2.0 * h.sqrt().min(1.0).asin().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn isclose(actual: f64, ref_val: f64, rtol: f64, atol: f64) -> bool {
        (actual - ref_val).abs() <= (atol + rtol * ref_val.abs())
    }

    #[test]
    fn coincident_points() {
        assert!(angular_separation_deg(24.25, -30.5, 24.25, -30.5).abs() < 1e-12);
    }

    #[test]
    fn equator_to_pole() {
        let d = angular_separation_deg(0.0, 0.0, 0.0, 90.0);
        assert!(isclose(d, 90.0, 1e-12, 0.0));
    }

    #[test]
    fn antipodal() {
        let d = angular_separation_deg(0.0, 0.0, 180.0, 0.0);
        assert!(isclose(d, 180.0, 1e-12, 0.0));
    }

    #[test]
    fn along_equator() {
        // along the equator, separation in RA is the separation
        let d = angular_separation_deg(10.0, 0.0, 55.0, 0.0);
        assert!(isclose(d, 45.0, 1e-12, 0.0));
    }

    #[test]
    fn symmetry() {
        let coords = [
            (0.0, 0.0),
            (123.4, 56.7),
            (359.9, -89.9),
            (42.0, 13.0),
            (200.5, -45.25),
        ];
        for &(ra1, dec1) in coords.iter() {
            for &(ra2, dec2) in coords.iter() {
                let ab = angular_separation_deg(ra1, dec1, ra2, dec2);
                let ba = angular_separation_deg(ra2, dec2, ra1, dec1);
                assert_eq!(ab, ba);
                assert!(ab >= 0.0);
            }
        }
    }

    #[test]
    fn tiny_separation_is_stable() {
        // the law-of-cosines form would collapse this to 0
        let d = angular_separation_deg(10.0, 20.0, 10.0, 20.0 + 1e-7);
        assert!(isclose(d, 1e-7, 1e-6, 0.0));
    }
}
