//! Flow-rule attribute validation.

use crate::error::{AttrField, FlowError, FlowResult};
use crate::types::{FlowAttributes, TablePlacement};

/// Verifies that `attrs` will be understood by the NIC at this platform
/// tier and decides the table placement for the rule.
///
/// Checks run in a fixed order (group, priority, transfer, ingress) and
/// the first failing check wins. Pure function; no side effects, no partial
/// validation state.
///
/// # Errors
///
/// Returns [`FlowError::AttributeUnsupported`] naming the offending field.
pub fn validate_attributes(attrs: &FlowAttributes) -> FlowResult<TablePlacement> {
    if attrs.group != 0 {
        return Err(FlowError::attribute_unsupported(
            AttrField::Group,
            "groups are not supported",
        ));
    }
    if attrs.priority != 0 {
        return Err(FlowError::attribute_unsupported(
            AttrField::Priority,
            "priorities are not supported",
        ));
    }
    if attrs.transfer {
        return Err(FlowError::attribute_unsupported(
            AttrField::Transfer,
            "transfer not supported",
        ));
    }
    if !attrs.ingress {
        return Err(FlowError::attribute_unsupported(
            AttrField::Ingress,
            "must specify ingress only",
        ));
    }
    // No non-root table support at this tier; everything lands in root.
    Ok(TablePlacement::Root)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingress_attrs() -> FlowAttributes {
        FlowAttributes {
            ingress: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_accepts_root_ingress() {
        let attrs = FlowAttributes {
            group: 0,
            priority: 0,
            ingress: true,
            egress: false,
            transfer: false,
        };
        assert_eq!(validate_attributes(&attrs), Ok(TablePlacement::Root));
    }

    #[test]
    fn test_rejects_each_field() {
        let cases = [
            (
                FlowAttributes {
                    group: 5,
                    ..ingress_attrs()
                },
                AttrField::Group,
            ),
            (
                FlowAttributes {
                    priority: 1,
                    ..ingress_attrs()
                },
                AttrField::Priority,
            ),
            (
                FlowAttributes {
                    transfer: true,
                    ..ingress_attrs()
                },
                AttrField::Transfer,
            ),
            (FlowAttributes::default(), AttrField::Ingress),
        ];
        for (attrs, field) in cases {
            let err = validate_attributes(&attrs).unwrap_err();
            assert_eq!(err.attr_field(), Some(field), "attrs: {:?}", attrs);
        }
    }

    #[test]
    fn test_check_order_is_fixed() {
        // Everything wrong at once: group is reported because it is
        // checked first.
        let attrs = FlowAttributes {
            group: 3,
            priority: 9,
            ingress: false,
            egress: true,
            transfer: true,
        };
        let err = validate_attributes(&attrs).unwrap_err();
        assert_eq!(err.attr_field(), Some(AttrField::Group));

        // Group fixed: priority is next.
        let attrs = FlowAttributes { group: 0, ..attrs };
        let err = validate_attributes(&attrs).unwrap_err();
        assert_eq!(err.attr_field(), Some(AttrField::Priority));

        // Priority fixed: transfer is next.
        let attrs = FlowAttributes {
            priority: 0,
            ..attrs
        };
        let err = validate_attributes(&attrs).unwrap_err();
        assert_eq!(err.attr_field(), Some(AttrField::Transfer));

        // Transfer fixed: ingress is last.
        let attrs = FlowAttributes {
            transfer: false,
            ..attrs
        };
        let err = validate_attributes(&attrs).unwrap_err();
        assert_eq!(err.attr_field(), Some(AttrField::Ingress));
    }

    #[test]
    fn test_validation_is_pure() {
        let attrs = ingress_attrs();
        let first = validate_attributes(&attrs);
        let second = validate_attributes(&attrs);
        assert_eq!(first, second);
    }
}
