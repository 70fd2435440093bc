//! Frequency-to-band lookup and default choice lists.

/// Band name returned when no amateur band contains the frequency.
pub const NO_BAND: &str = "NONE";

/// Amateur band edges in MHz with their band names.
const BAND_EDGES: &[(f64, f64, &str)] = &[
    (1.8, 2.0, "160m"),
    (3.5, 4.0, "80m"),
    (5.06, 5.45, "60m"),
    (7.0, 7.3, "40m"),
    (10.1, 10.15, "30m"),
    (14.0, 14.35, "20m"),
    (18.068, 18.168, "17m"),
    (21.0, 21.45, "15m"),
    (24.89, 24.99, "12m"),
    (28.0, 29.7, "10m"),
    (50.0, 54.0, "6m"),
    (144.0, 148.0, "2m"),
    (222.0, 225.0, "1.25m"),
    (420.0, 450.0, "70cm"),
];

/// Returns the band name containing `freq_mhz`, or [`NO_BAND`] when the
/// frequency falls outside every band.
pub fn freq2band(freq_mhz: f64) -> &'static str {
    BAND_EDGES
        .iter()
        .find(|(lo, hi, _)| freq_mhz >= *lo && freq_mhz <= *hi)
        .map(|(_, _, name)| *name)
        .unwrap_or(NO_BAND)
}

/// Default band choices for combo population.
pub const BANDS: &[&str] = &[
    "160m", "80m", "60m", "40m", "30m", "20m", "17m", "15m", "12m", "10m", "6m", "2m", "1.25m",
    "70cm",
];

/// Default mode choices for combo population.
pub const MODES: &[&str] = &[
    "SSB", "CW", "AM", "FM", "FT8", "FT4", "RTTY", "PSK31", "JS8", "SSTV",
];
