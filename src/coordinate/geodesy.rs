//! Geodesic computations on the WGS84 ellipsoid
//!
//! Implements Vincenty's direct and inverse formulae. Circle queries use the
//! direct solution to turn a radius into an enclosing rectangle.

use std::f64::consts::PI;

use log::trace;

use super::point::WGS84Point;
use crate::geohash::constants::ranges::{MAX_LON, MIN_LON};
use crate::geohash::errors::{GeoHashError, GeoHashResult};

/// Geodesic solver on the WGS84 ellipsoid
pub struct VincentyGeodesy;

impl VincentyGeodesy {
    /// Equatorial radius in meters
    pub const EQUATOR_RADIUS: f64 = 6378137.0;
    /// Polar radius in meters
    pub const POLE_RADIUS: f64 = 6356752.3142;
    /// Flattening
    pub const FLATTENING: f64 = 1.0 / 298.257223563;
    /// Convergence threshold for the iterations
    pub const EPSILON: f64 = 1e-12;

    const DEG_TO_RAD: f64 = PI / 180.0;
    const MAX_INVERSE_ITERATIONS: u32 = 20;
    const MAX_DIRECT_ITERATIONS: u32 = 200;

    /// Point reached by travelling `distance_in_meters` from `point` along
    /// the initial bearing `bearing_in_degrees` (0 = north, 90 = east)
    ///
    /// # Arguments
    /// * `point` - Where to start
    /// * `bearing_in_degrees` - Initial bearing, must be within [0, 360]
    /// * `distance_in_meters` - How far to move
    ///
    /// # Returns
    /// The destination point or an error for a bearing out of range
    pub fn move_in_direction(point: &WGS84Point, bearing_in_degrees: f64, distance_in_meters: f64) -> GeoHashResult<WGS84Point> {
        if !(0.0..=360.0).contains(&bearing_in_degrees) {
            return Err(GeoHashError::InvalidArgument(format!(
                "Bearing must be within [0,360], got {}",
                bearing_in_degrees
            )));
        }

        let a = Self::EQUATOR_RADIUS;
        let b = Self::POLE_RADIUS;
        let f = Self::FLATTENING;

        let alpha1 = bearing_in_degrees * Self::DEG_TO_RAD;
        let (sin_alpha1, cos_alpha1) = alpha1.sin_cos();

        let tan_u1 = (1.0 - f) * (point.latitude() * Self::DEG_TO_RAD).tan();
        let cos_u1 = 1.0 / (1.0 + tan_u1 * tan_u1).sqrt();
        let sin_u1 = tan_u1 * cos_u1;
        let sigma1 = tan_u1.atan2(cos_alpha1);
        let sin_alpha = cos_u1 * sin_alpha1;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
        let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
        let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));

        let mut sin_sigma = 0.0;
        let mut cos_sigma = 0.0;
        let mut cos_2sigma_m = 0.0;
        let mut sigma = distance_in_meters / (b * big_a);
        let mut sigma_p = 2.0 * PI;
        let mut iterations = 0;

        while (sigma - sigma_p).abs() > Self::EPSILON && iterations < Self::MAX_DIRECT_ITERATIONS {
            cos_2sigma_m = (2.0 * sigma1 + sigma).cos();
            sin_sigma = sigma.sin();
            cos_sigma = sigma.cos();
            let delta_sigma = big_b * sin_sigma
                * (cos_2sigma_m + big_b / 4.0
                    * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                        - big_b / 6.0 * cos_2sigma_m
                            * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                            * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));
            sigma_p = sigma;
            sigma = distance_in_meters / (b * big_a) + delta_sigma;
            iterations += 1;
        }
        trace!("Vincenty direct converged after {} iterations", iterations);

        let tmp = sin_u1 * sin_sigma - cos_u1 * cos_sigma * cos_alpha1;
        let lat2 = (sin_u1 * cos_sigma + cos_u1 * sin_sigma * cos_alpha1)
            .atan2((1.0 - f) * (sin_alpha * sin_alpha + tmp * tmp).sqrt());
        let lambda = (sin_sigma * sin_alpha1).atan2(cos_u1 * cos_sigma - sin_u1 * sin_sigma * cos_alpha1);
        let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
        let l = lambda - (1.0 - c) * f * sin_alpha
            * (sigma + c * sin_sigma * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

        let new_lat = lat2 / Self::DEG_TO_RAD;
        let mut new_lon = point.longitude() + l / Self::DEG_TO_RAD;
        if new_lon > MAX_LON {
            new_lon -= 360.0;
        }
        if new_lon < MIN_LON {
            new_lon += 360.0;
        }

        WGS84Point::new(new_lat, new_lon)
    }

    /// Geodesic distance between two points in meters
    ///
    /// Returns 0 for coincident points and NaN when the iteration does not
    /// converge (nearly antipodal points).
    pub fn distance_in_meters(from: &WGS84Point, to: &WGS84Point) -> f64 {
        let a = Self::EQUATOR_RADIUS;
        let b = Self::POLE_RADIUS;
        let f = Self::FLATTENING;

        let l = (to.longitude() - from.longitude()) * Self::DEG_TO_RAD;
        let u1 = ((1.0 - f) * (from.latitude() * Self::DEG_TO_RAD).tan()).atan();
        let u2 = ((1.0 - f) * (to.latitude() * Self::DEG_TO_RAD).tan()).atan();
        let (sin_u1, cos_u1) = u1.sin_cos();
        let (sin_u2, cos_u2) = u2.sin_cos();

        let mut lambda = l;
        let mut cos_sq_alpha;
        let mut sin_sigma;
        let mut cos_sigma;
        let mut cos_2sigma_m;
        let mut sigma;
        let mut iterations_left = Self::MAX_INVERSE_ITERATIONS;

        loop {
            let (sin_lambda, cos_lambda) = lambda.sin_cos();
            let cross = cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda;
            sin_sigma = ((cos_u2 * sin_lambda) * (cos_u2 * sin_lambda) + cross * cross).sqrt();
            if sin_sigma == 0.0 {
                return 0.0;
            }
            cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
            sigma = sin_sigma.atan2(cos_sigma);
            let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
            cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
            cos_2sigma_m = cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha;
            if cos_2sigma_m.is_nan() {
                // equatorial line
                cos_2sigma_m = 0.0;
            }
            let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
            let lambda_p = lambda;
            lambda = l + (1.0 - c) * f * sin_alpha
                * (sigma + c * sin_sigma * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

            iterations_left -= 1;
            if (lambda - lambda_p).abs() <= Self::EPSILON {
                break;
            }
            if iterations_left == 0 {
                return f64::NAN;
            }
        }

        let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
        let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
        let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
        let delta_sigma = big_b * sin_sigma
            * (cos_2sigma_m + big_b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                    - big_b / 6.0 * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));

        b * big_a * (sigma - delta_sigma)
    }
}
