//! Data used in tests.

use std::fs;

/// Format one data row in the archive's fixed width layout.
///
/// Each of the eleven fields is either blank or printed right aligned in a 7 character
/// column, the way the archive prints them.
pub fn data_line(fields: &[Option<f64>; 11]) -> String {
    fields
        .iter()
        .map(|field| match field {
            Some(value) => format!("{:7.1}", value),
            None => "       ".to_owned(),
        })
        .collect()
}

/// The five banner/column header lines that precede the data in every listing.
pub fn header_lines() -> Vec<String> {
    vec![
        String::new(),
        "-".repeat(77),
        "   PRES   HGHT   TEMP   DWPT   RELH   MIXR   DRCT   SKNT   THTA   THTE   THTV"
            .to_owned(),
        "    hPa     m      C      C      %    g/kg    deg   knot     K      K      K "
            .to_owned(),
        "-".repeat(77),
    ]
}

/// Build a complete listing from data rows, headers included.
pub fn listing(rows: &[[Option<f64>; 11]]) -> Vec<String> {
    let mut lines = header_lines();
    lines.extend(rows.iter().map(data_line));
    lines
}

/// The lines of the canned Tateno sounding in `tests/data`.
///
/// The profile deliberately has blank fields: one level reports no height, and the upper
/// levels report no dew point or equivalent potential temperature. Column lengths after
/// parsing are 20 (pressure, temperature, theta, virtual theta), 19 (height) and
/// 13 (dew point, theta-e).
pub fn tateno_block() -> Vec<String> {
    let text = fs::read_to_string("tests/data/tateno_2020020100z.txt")
        .expect("error reading test data file");
    text.lines().map(str::to_owned).collect()
}

pub fn approx_equal(tgt: f64, guess: f64, tol: f64) -> bool {
    assert!(tol > 0.0);

    f64::abs(tgt - guess) <= tol
}

#[test]
fn data_lines_have_the_expected_width() {
    let line = data_line(&[
        Some(1000.0),
        None,
        Some(20.0),
        Some(15.0),
        None,
        None,
        None,
        None,
        None,
        Some(300.0),
        None,
    ]);
    assert_eq!(line.len(), crate::parse::LINE_WIDTH);
}

#[test]
fn canned_sounding_is_well_formed() {
    let lines = tateno_block();
    assert!(lines.len() > 5);

    for line in lines.iter().skip(5) {
        assert_eq!(line.len(), crate::parse::LINE_WIDTH);
    }
}
