//! Translation offsets of positioned template elements.

use crate::error::ReadError;
use sfsym_markup::MarkupNode;
use sfsym_pathdata::parse_matrix;

/// Returns the `(x, y)` translation of `element`.
///
/// No `transform` attribute means no offset. A present transform must be a
/// pure translation written as an identity `matrix(...)`.
pub fn transform_offset<'a, N: MarkupNode<'a>>(element: N) -> Result<(f64, f64), ReadError> {
    let Some(transform) = element.attribute("transform") else {
        return Ok((0.0, 0.0));
    };

    let matrix = parse_matrix(transform)?;
    if !matrix.is_translation() {
        return Err(ReadError::UnsupportedTransform(transform.to_string()));
    }
    Ok(matrix.translation())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sfsym_markup::MockTree;

    fn offset_of(transform: Option<&str>) -> Result<(f64, f64), ReadError> {
        let mut tree = MockTree::new("svg");
        let root = tree.root_id();
        let attrs: Vec<(&str, &str)> = transform.map(|t| ("transform", t)).into_iter().collect();
        let node = tree.add_element(root, "g", &attrs);
        transform_offset(tree.node(node))
    }

    #[test]
    fn test_absent_transform_is_origin() {
        assert_eq!(offset_of(None).unwrap(), (0.0, 0.0));
    }

    #[test]
    fn test_identity_matrix_offset() {
        assert_eq!(
            offset_of(Some("matrix(1 0 0 1 1391.31 696)")).unwrap(),
            (1391.31, 696.0)
        );
    }

    #[test]
    fn test_scaled_matrix_is_unsupported() {
        assert!(matches!(
            offset_of(Some("matrix(2 0 0 2 10 10)")),
            Err(ReadError::UnsupportedTransform(_))
        ));
    }

    #[test]
    fn test_non_finite_offset_is_rejected() {
        assert!(matches!(
            offset_of(Some("matrix(1 0 0 1 inf 0)")),
            Err(ReadError::Transform(_))
        ));
        assert!(matches!(
            offset_of(Some("matrix(1 0 0 1 1e400 696)")),
            Err(ReadError::Transform(_))
        ));
    }

    #[test]
    fn test_non_matrix_transform_is_rejected() {
        assert!(matches!(
            offset_of(Some("translate(10 10)")),
            Err(ReadError::Transform(_))
        ));
    }
}
