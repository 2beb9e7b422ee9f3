//! Assemble a complete profile record from the raw text of a sounding.

use crate::{
    error::Result,
    parse::{parse_sounding, FormatVariant},
    profile,
    sounding::Sounding,
};

/// Attach all derivable profiles to a parsed sounding.
///
/// Currently that is the saturation equivalent potential temperature. When the profiles it
/// depends on are missing, for example after parsing a legacy listing with
/// [`FormatVariant::Narrow`], the derived profile is left empty rather than failing, and
/// the plotting side skips the series.
pub fn derive(snd: Sounding) -> Sounding {
    let theta_es = profile::saturation_theta_e(&snd);
    snd.with_theta_es_profile(theta_es)
}

/// Parse the text body of a sounding and derive everything derivable from it.
///
/// This is the whole pipeline between the retrieval layer and the plotting layer: feed it
/// the lines of the archive's `<pre>` block and the page title, get back a [`Sounding`]
/// ready to hand to a renderer.
pub fn sounding_from_text<L, S>(lines: L, title: &str, variant: FormatVariant) -> Result<Sounding>
where
    L: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_sounding(lines, title, variant).map(derive)
}
