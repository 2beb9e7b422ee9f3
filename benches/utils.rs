use emagram::{FormatVariant, Sounding};
use std::fs;

#[allow(dead_code)] // Not every bench uses every helper.
pub fn load_tateno_lines() -> Vec<String> {
    let text = fs::read_to_string("tests/data/tateno_2020020100z.txt")
        .expect("error reading test data file");
    text.lines().map(str::to_owned).collect()
}

#[allow(dead_code)]
pub fn load_tateno_sounding() -> Sounding {
    emagram::sounding_from_text(
        &load_tateno_lines(),
        "47646 Tateno Observations at 00Z 01 Feb 2020",
        FormatVariant::Extended,
    )
    .expect("error parsing test data file")
}
