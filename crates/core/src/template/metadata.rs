//! Template version and logical height.

use super::{TemplateVersion, VERSION_ID};
use crate::error::ReadError;
use sfsym_markup::{MarkupNode, find_by_id};
use sfsym_types::Scale;

/// Reads the revision from the `template-version` element's text.
pub fn template_version<'a, N: MarkupNode<'a> + 'a>(root: N) -> Result<TemplateVersion, ReadError> {
    let element = find_by_id(root, VERSION_ID).ok_or(ReadError::MissingVersion)?;
    let text = element.text();

    if text.contains("2.0") {
        Ok(TemplateVersion::V2)
    } else if text.contains("3.0") {
        Ok(TemplateVersion::V3)
    } else {
        Err(ReadError::UnknownVersion(text))
    }
}

/// Symbol height in template units: `Baseline-{scale}.y1 - Capline-{scale}.y1`
/// for the first scale whose two guidelines both have a numeric `y1`.
///
/// An inverted pair (baseline at or above the capline) is kept as is, with a
/// warning.
pub fn template_height<'a, N: MarkupNode<'a> + 'a>(root: N) -> Result<f64, ReadError> {
    let (scale, height) = Scale::ALL
        .into_iter()
        .find_map(|scale| {
            let cap = guideline_y(root, "Capline", scale)?;
            let base = guideline_y(root, "Baseline", scale)?;
            Some((scale, base - cap))
        })
        .ok_or(ReadError::MissingGuidelines)?;

    if height <= 0.0 {
        log::warn!(
            "Guidelines for scale {} are inverted: symbol height is {}",
            scale,
            height
        );
    }
    Ok(height)
}

fn guideline_y<'a, N: MarkupNode<'a> + 'a>(root: N, kind: &str, scale: Scale) -> Option<f64> {
    let id = format!("{}-{}", kind, scale);
    let y = find_by_id(root, &id)?.attribute("y1")?;
    y.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
