//! The indicator catalog: the single source of truth for which
//! indicators exist, their display order, and their provenance labels.

use crate::domain::error::DomainError;
use crate::domain::values::indicator::IndicatorId;
use serde::Serialize;

/// One registered indicator. Constructed at catalog initialization and
/// never mutated.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct IndicatorDefinition {
    pub id: IndicatorId,
    pub name: &'static str,
    pub source_label: &'static str,
}

/// Ordered sequence of every registered indicator, including the
/// synthetic aggregate entry. Registration order is fixed; it is the
/// canonical display and iteration order.
pub fn definitions() -> Vec<IndicatorDefinition> {
    IndicatorId::ALL
        .iter()
        .map(|&id| IndicatorDefinition {
            id,
            name: id.display_name(),
            source_label: id.source_label(),
        })
        .collect()
}

/// Look up an indicator by display name or normalized key
/// (case-insensitive). The only fault in the system that propagates to
/// the caller: an unregistered name is a programming error, not a
/// data-availability condition.
pub fn lookup(name: &str) -> Result<IndicatorDefinition, DomainError> {
    let id: IndicatorId = name
        .parse()
        .map_err(|_| DomainError::UnknownIndicator(name.to_string()))?;
    Ok(IndicatorDefinition {
        id,
        name: id.display_name(),
        source_label: id.source_label(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_order_is_stable() {
        let defs = definitions();
        assert_eq!(defs.len(), 14);
        assert_eq!(defs[0].name, "US P/E Ratio");
        assert_eq!(defs[6].name, "US 10-Year Yield");
        assert_eq!(defs.last().unwrap().name, "US All Metrics");
    }

    #[test]
    fn test_lookup_by_name_and_key() {
        assert_eq!(lookup("US CAPE Ratio").unwrap().id, IndicatorId::CapeRatio);
        assert_eq!(lookup("cape_ratio").unwrap().id, IndicatorId::CapeRatio);
    }

    #[test]
    fn test_unknown_name_is_a_fault() {
        let err = lookup("US Unemployment").unwrap_err();
        assert!(matches!(err, DomainError::UnknownIndicator(_)));
    }
}
