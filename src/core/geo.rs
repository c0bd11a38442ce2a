use crate::core::coerce::coordinate_of;
use crate::domain::model::{Coordinate, RawRecord, ReferencePoint};

/// Haversine 大圓距離（公里）
pub fn haversine_km(from: Coordinate, to: Coordinate, earth_radius_km: f64) -> f64 {
    let lat_difference = (to.latitude - from.latitude).to_radians();
    let lon_difference = (to.longitude - from.longitude).to_radians();

    let a = (lat_difference / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (lon_difference / 2.0).sin().powi(2);

    // 浮點誤差可能讓 a 稍微超出 [0, 1]
    2.0 * earth_radius_km * a.clamp(0.0, 1.0).sqrt().asin()
}

/// 以固定參考點與半徑篩選紀錄
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoFilter {
    reference: ReferencePoint,
}

impl GeoFilter {
    pub fn new(reference: ReferencePoint) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> &ReferencePoint {
        &self.reference
    }

    pub fn distance_km(&self, point: Coordinate) -> f64 {
        haversine_km(self.reference.origin, point, self.reference.earth_radius_km)
    }

    /// 邊界包含在內：距離剛好等於半徑時保留
    pub fn within_radius(&self, point: Coordinate) -> bool {
        self.distance_km(point) <= self.reference.radius_km
    }

    /// 缺少座標的紀錄會被當成 (0, 0) 計算，不做特別處理
    pub fn retains(&self, record: &RawRecord) -> bool {
        self.within_radius(coordinate_of(record))
    }
}

impl Default for GeoFilter {
    fn default() -> Self {
        Self::new(ReferencePoint::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::EARTH_RADIUS_KM;
    use serde_json::json;

    fn record(value: serde_json::Value) -> RawRecord {
        RawRecord {
            data: serde_json::from_value(value).unwrap(),
        }
    }

    #[test]
    fn test_distance_to_reference_is_zero() {
        let filter = GeoFilter::default();
        let origin = filter.reference().origin;
        assert_eq!(filter.distance_km(origin), 0.0);
        assert!(filter.within_radius(origin));
    }

    #[test]
    fn test_nearby_point_distance() {
        let filter = GeoFilter::default();
        let distance = filter.distance_km(Coordinate::new(19.0760, 72.8777));
        assert!(distance > 12.0 && distance < 14.0, "distance: {}", distance);
        assert!(filter.within_radius(Coordinate::new(19.0760, 72.8777)));
    }

    #[test]
    fn test_far_point_is_excluded() {
        let filter = GeoFilter::default();
        let far = Coordinate::new(25.0, 80.0);
        assert!(filter.distance_km(far) > 900.0);
        assert!(!filter.within_radius(far));
    }

    #[test]
    fn test_known_distance_between_cities() {
        // 倫敦到巴黎約 343.5 km
        let london = Coordinate::new(51.5074, -0.1278);
        let paris = Coordinate::new(48.8566, 2.3522);
        let distance = haversine_km(london, paris, EARTH_RADIUS_KM);
        assert!((distance - 343.5).abs() < 1.0, "distance: {}", distance);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Coordinate::new(19.0760, 72.8777);
        let b = Coordinate::new(-33.8688, 151.2093);
        let ab = haversine_km(a, b, EARTH_RADIUS_KM);
        let ba = haversine_km(b, a, EARTH_RADIUS_KM);
        assert!((ab - ba).abs() < 1e-6);
    }

    #[test]
    fn test_antipodal_points_stay_finite() {
        let distance = haversine_km(
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 180.0),
            EARTH_RADIUS_KM,
        );
        assert!((distance - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn test_radius_boundary_is_inclusive() {
        let point = Coordinate::new(19.5, 73.1);
        let exact = GeoFilter::default().distance_km(point);

        let mut reference = ReferencePoint::default();
        reference.radius_km = exact;
        assert!(GeoFilter::new(reference).within_radius(point));

        reference.radius_km = exact - 1e-9;
        assert!(!GeoFilter::new(reference).within_radius(point));
    }

    #[test]
    fn test_alternate_reference_point() {
        let reference = ReferencePoint::new(Coordinate::new(0.0, 0.0), 10.0);
        let filter = GeoFilter::new(reference);
        assert!(filter.retains(&record(json!({"user_id": 1}))));
        assert!(!GeoFilter::default().retains(&record(json!({"user_id": 1}))));
    }

    #[test]
    fn test_out_of_range_coordinates_flow_through() {
        let filter = GeoFilter::default();
        let distance = filter.distance_km(Coordinate::new(379.0590317, 72.7553452));
        assert!(distance.is_finite());
        assert!(distance < 1e-6, "distance: {}", distance);
    }

    #[test]
    fn test_retains_string_and_numeric_coordinates() {
        let filter = GeoFilter::default();
        assert!(filter.retains(&record(json!({"latitude": "19.0760", "longitude": "72.8777"}))));
        assert!(filter.retains(&record(json!({"latitude": 19.0760, "longitude": 72.8777}))));
        assert!(!filter.retains(&record(json!({"latitude": "25.0000", "longitude": "80.0000"}))));
    }
}
