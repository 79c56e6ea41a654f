//! Narrowing of the wire catalog to a practical band around the template.

/// Metric wire diameters (mm) stocked by typical spring makers.
pub const DEFAULT_WIRE_SERIES: &[f64] = &[
    0.2, 0.25, 0.3, 0.35, 0.4, 0.45, 0.5, 0.55, 0.6, 0.65, 0.7, 0.8, 0.9, 1.0, 1.1, 1.2, 1.4, 1.5,
    1.6, 1.8, 2.0, 2.2, 2.5, 2.8, 3.0, 3.2, 3.5, 3.8, 4.0, 4.5, 5.0, 5.5, 6.0, 6.5, 7.0, 8.0, 9.0,
    10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0,
];

const BAND_LOW: f64 = 0.4;
const BAND_HIGH: f64 = 1.6;

/// Returns the catalog diameters within `[0.4·d0, 1.6·d0]`, in catalog order.
///
/// If no diameter falls inside the band, returns the single diameter closest
/// to `d0`, preferring the earliest on ties. Only an empty catalog yields an
/// empty series.
#[must_use]
pub fn practical_series(catalog: &[f64], d0: f64) -> Vec<f64> {
    let low = BAND_LOW * d0;
    let high = BAND_HIGH * d0;

    let band: Vec<f64> = catalog
        .iter()
        .copied()
        .filter(|&d| low <= d && d <= high)
        .collect();

    if !band.is_empty() {
        return band;
    }

    closest(catalog, d0).into_iter().collect()
}

fn closest(catalog: &[f64], d0: f64) -> Option<f64> {
    catalog.iter().copied().fold(None, |best, d| match best {
        Some(b) if (b - d0).abs() <= (d - d0).abs() => Some(b),
        _ => Some(d),
    })
}
