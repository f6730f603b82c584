use super::FeatureReport;
use crate::geodesy::GeoPoint;

/// Text rendering options for [`FeatureReport::render`].
#[derive(Debug, Clone, Copy)]
pub struct ReportFormat {
    /// Digits after the decimal point.
    pub decimals: usize,
    /// Print longitudes in `[0, 360)` instead of as given.
    pub lon360: bool,
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self {
            decimals: 2,
            lon360: false,
        }
    }
}

/// Formats a position as `"<lon> E, <lat>"`.
///
/// With `lon360`, negative longitudes are shifted by 360 degrees.
#[must_use]
pub fn format_coord(geo: GeoPoint, format: &ReportFormat) -> String {
    let lon = if format.lon360 && geo.lon < 0.0 {
        geo.lon + 360.0
    } else {
        geo.lon
    };
    let d = format.decimals;
    format!("{lon:.d$} E, {lat:.d$}", lat = geo.lat)
}

impl FeatureReport {
    /// Renders a multi-line summary headed by `name`.
    #[must_use]
    pub fn render(&self, name: &str, format: &ReportFormat) -> String {
        let d = format.decimals;
        let marker = if self.geodesic.converged {
            ""
        } else {
            " (not converged)"
        };
        let rows = [
            ("Centroid:", format_coord(self.extent.centroid, format)),
            (
                "Bounding box:",
                format!(
                    "{} and {}",
                    format_coord(self.extent.min, format),
                    format_coord(self.extent.max, format)
                ),
            ),
            ("Area:", format!("{:.d$} km^2", self.area_km2)),
            ("Longest dimension:", format!("{:.d$} km", self.diameter_km)),
            (
                "Endpoints:",
                format!(
                    "{} and {}",
                    format_coord(self.endpoints.0, format),
                    format_coord(self.endpoints.1, format)
                ),
            ),
            ("Haversine:", format!("{:.d$} km", self.haversine_km)),
            ("Geodesic:", format!("{:.d$} km{marker}", self.geodesic_km())),
        ];
        std::iter::once(format!("{name}:\n"))
            .chain(rows.iter().map(|(label, value)| format!("{label:>20} {value}\n")))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::analysis::AnalyzeFeature;
    use crate::geodesy::{Ellipsoid, MOON};
    use crate::math::Point2;
    use crate::projection::LonLat;

    #[test]
    fn coord_default_format() {
        let s = format_coord(GeoPoint::new(-12.3456, 45.678), &ReportFormat::default());
        assert_eq!(s, "-12.35 E, 45.68");
    }

    #[test]
    fn coord_lon360() {
        let fmt = ReportFormat {
            decimals: 1,
            lon360: true,
        };
        assert_eq!(format_coord(GeoPoint::new(-90.0, 0.0), &fmt), "270.0 E, 0.0");
        assert_eq!(format_coord(GeoPoint::new(90.0, -1.26), &fmt), "90.0 E, -1.3");
    }

    #[test]
    fn coord_zero_decimals() {
        let fmt = ReportFormat {
            decimals: 0,
            lon360: false,
        };
        assert_eq!(format_coord(GeoPoint::new(1.6, 2.4), &fmt), "2 E, 2");
    }

    #[test]
    fn render_lists_every_measurement() {
        let ring = vec![
            Point2::new(-0.1, -0.1),
            Point2::new(0.1, -0.1),
            Point2::new(0.1, 0.1),
            Point2::new(-0.1, 0.1),
        ];
        let report = AnalyzeFeature::new(&ring, &LonLat, MOON).execute().unwrap();
        let text = report.render("Crater", &ReportFormat::default());
        assert!(text.starts_with("Crater:\n"));
        for label in [
            "Centroid:",
            "Bounding box:",
            "Area:",
            "Longest dimension:",
            "Haversine:",
            "Geodesic:",
        ] {
            assert!(text.contains(label), "missing {label} in\n{text}");
        }
        assert!(text.contains("km^2"));
        assert!(text.contains("\n           Centroid: "), "{text}");
        assert!(text.contains("\n  Longest dimension: "), "{text}");
        assert_eq!(text.lines().count(), 8);
        assert!(!text.contains("not converged"));
    }

    #[test]
    fn render_flags_fallback() {
        let ring = vec![Point2::new(-20.0, -1.0), Point2::new(20.0, 1.0)];
        let body = Ellipsoid::new(3_396_190.0, 3_376_200.0).unwrap();
        let report = AnalyzeFeature::new(&ring, &LonLat, body)
            .with_geodesic_params(crate::geodesy::GeodesicParams {
                max_iterations: 0,
                tolerance: 1e-12,
            })
            .closed(false)
            .execute()
            .unwrap();
        assert!(!report.geodesic.converged);
        let text = report.render("Trough", &ReportFormat::default());
        assert!(text.contains("(not converged)"), "{text}");
    }
}
