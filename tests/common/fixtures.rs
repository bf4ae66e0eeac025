use sfsym::Weight;

/// Height every fixture template declares through its guidelines.
pub const HEIGHT: f64 = 70.5;

/// Width of every fixture variant: labels sit 30 units right of the symbols.
pub const WIDTH: f64 = 60.0;

const SYMBOL_X: f64 = 100.0;

fn guidelines() -> String {
    [("S", 625.5), ("M", 1025.5), ("L", 1425.5)]
        .iter()
        .map(|(scale, cap)| {
            format!(
                r#"<line id="Capline-{scale}" x1="0" y1="{cap}" x2="3000" y2="{cap}"/>
    <line id="Baseline-{scale}" x1="0" y1="{base}" x2="3000" y2="{base}"/>
    "#,
                scale = scale,
                cap = cap,
                base = cap + HEIGHT
            )
        })
        .collect()
}

fn weight_labels() -> String {
    Weight::ALL
        .iter()
        .map(|w| {
            format!(
                r#"<text transform="matrix(1 0 0 1 {} 1126)">{}</text>"#,
                SYMBOL_X + WIDTH / 2.0,
                w
            )
        })
        .collect()
}

/// A revision 2.0 template. Each entry is an element id and the path data of
/// its `path` children.
pub fn revision2(symbols: &[(&str, &[&str])]) -> String {
    let body: String = symbols
        .iter()
        .map(|(id, paths)| {
            let paths: String = paths
                .iter()
                .map(|d| format!(r#"<path d="{}"/>"#, d))
                .collect();
            format!(
                r#"<g id="{}" transform="matrix(1 0 0 1 {} 1096)">{}</g>"#,
                id, SYMBOL_X, paths
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg version="1.1" xmlns="http://www.w3.org/2000/svg" width="3300" height="2200">
  <g id="Notes">
    {labels}
    <text id="template-version" transform="matrix(1 0 0 1 2900 1933)">Template v.2.0</text>
  </g>
  <g id="Guides">
    {guides}
  </g>
  <g id="Symbols">{body}</g>
</svg>"#,
        labels = weight_labels(),
        guides = guidelines(),
        body = body
    )
}

/// A revision 3.0 template. Each entry is an element id and its
/// `(path data, class)` layers.
pub fn revision3(symbols: &[(&str, &[(&str, &str)])]) -> String {
    let body: String = symbols
        .iter()
        .map(|(id, layers)| {
            let paths: String = layers
                .iter()
                .map(|(d, class)| format!(r#"<path class="{}" d="{}"/>"#, class, d))
                .collect();
            format!(r#"<g id="{}">{}</g>"#, id, paths)
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg version="1.1" xmlns="http://www.w3.org/2000/svg" width="3300" height="2200">
  <g id="Notes">
    <text id="template-version">Template v.3.0</text>
  </g>
  <g id="Symbols">{}</g>
</svg>"#,
        body
    )
}

/// A well-formed two-layer asset: `Regular-M` and `Bold-L`, with the
/// revision 3.0 document splitting the outlines into primary and secondary.
pub fn layered_asset() -> (String, String) {
    let v2 = revision2(&[
        ("Regular-M", &["M10 10L20 20Z", "M 30 30 L 40.125 40 Z M 50 50 Z"]),
        ("Bold-L", &["M 0 0 L 5 5 Z"]),
    ]);
    let v3 = revision3(&[(
        "Regular-M",
        &[
            ("M 30 30 L 40.125 40 Z", "monochrome-0 hierarchical-0:secondary"),
            ("M 10 10 L 20 20 Z M 50 50 Z", "monochrome-1 hierarchical-1:primary"),
        ],
    )]);
    (v2, v3)
}

/// An asset whose revision 3.0 outlines differ from its revision 2.0 ones.
pub fn inconsistent_asset() -> (String, String) {
    let v2 = revision2(&[("Regular-S", &["M 1 1 Z"])]);
    let v3 = revision3(&[("Regular-S", &[("M 2 2 Z", "hierarchical-0:primary")])]);
    (v2, v3)
}
