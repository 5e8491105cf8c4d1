//! Ordered dimension sequences.
//!
//! A [`DimSet`] is the fixed-length, ordered list of dimension references
//! attached to a variable (or compound field) declaration. Every query is
//! pure and total: a non-dimension id behaves as a bounded dimension of
//! size 1, and "not found" answers are the sequence length, matching the
//! search conventions generators rely on.

use smallvec::SmallVec;

use cdl_diagnostic::{Diagnostic, ErrorCode};
use cdl_types::Kind;

use crate::{DimSize, SymbolId, SymbolTable};

/// Ordered sequence of dimension-symbol references.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DimSet {
    dims: SmallVec<[SymbolId; 4]>,
}

impl DimSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, dim: SymbolId) {
        self.dims.push(dim);
    }

    pub fn len(&self) -> usize {
        self.dims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<SymbolId> {
        self.dims.get(index).copied()
    }

    /// The raw id sequence, declaration order.
    pub fn ids(&self) -> &[SymbolId] {
        &self.dims
    }

    /// Declared size at `index`; total — anything that is not an unlimited
    /// dimension reads as bounded.
    fn size_at(&self, table: &SymbolTable, index: usize) -> DimSize {
        self.get(index)
            .and_then(|id| table.symbol(id).as_dimension())
            .unwrap_or(DimSize::Fixed(1))
    }

    /// True if any dimension is unlimited.
    pub fn has_unlimited(&self, table: &SymbolTable) -> bool {
        (0..self.len()).any(|i| self.size_at(table, i).is_unlimited())
    }

    /// True iff index 0 exists and is unlimited.
    pub fn first_is_unlimited(&self, table: &SymbolTable) -> bool {
        !self.is_empty() && self.size_at(table, 0).is_unlimited()
    }

    /// True iff the classic placement rule holds: either no dimension is
    /// unlimited, or the single unlimited dimension sits at index 0 — i.e.
    /// the index of the last unlimited dimension is less than 1.
    pub fn is_classic_unlimited(&self, table: &SymbolTable) -> bool {
        let mut last = None;
        for i in 0..self.len() {
            if self.size_at(table, i).is_unlimited() {
                last = Some(i);
            }
        }
        match last {
            None => true,
            Some(index) => index < 1,
        }
    }

    /// True iff no dimension is unlimited.
    pub fn is_bounded(&self, table: &SymbolTable) -> bool {
        !self.has_unlimited(table)
    }

    /// Index of the first unlimited dimension at or after `start`, or the
    /// sequence length if there is none.
    pub fn find_unlimited_from(&self, table: &SymbolTable, start: usize) -> usize {
        (start..self.len())
            .find(|&i| self.size_at(table, i).is_unlimited())
            .unwrap_or(self.len())
    }

    /// Index of the last unlimited dimension, or the sequence length if
    /// there is none.
    pub fn find_last_unlimited(&self, table: &SymbolTable) -> usize {
        (0..self.len())
            .rev()
            .find(|&i| self.size_at(table, i).is_unlimited())
            .unwrap_or(self.len())
    }

    /// Number of unlimited dimensions.
    pub fn count_unlimited(&self, table: &SymbolTable) -> usize {
        (0..self.len())
            .filter(|&i| self.size_at(table, i).is_unlimited())
            .count()
    }

    /// Product of declared sizes over the half-open range `[start, stop)`.
    ///
    /// Callers must not include an unlimited dimension: its declared size
    /// is zero before any data is written, which zeroes the product.
    pub fn cross_product(&self, table: &SymbolTable, start: usize, stop: usize) -> u64 {
        (start..stop.min(self.len()))
            .map(|i| self.size_at(table, i).declared())
            .product()
    }

    /// Total array length of the leading dimensions through index `last`.
    pub fn prefix_array_length(&self, table: &SymbolTable, last: usize) -> u64 {
        self.cross_product(table, 0, last + 1)
    }

    /// Whether this sequence satisfies the dialect's unlimited-placement
    /// rule: legacy dialects demand the classic rule, modern dialects
    /// accept any placement.
    pub fn conforms_to(&self, table: &SymbolTable, kind: Kind) -> bool {
        kind.supports_multiple_unlimited() || self.is_classic_unlimited(table)
    }

    /// Report a diagnostic when the sequence breaks the dialect's
    /// unlimited-placement rule. `owner` names the declaring variable.
    pub fn check_dialect(
        &self,
        table: &SymbolTable,
        kind: Kind,
        owner: &str,
    ) -> Result<(), Diagnostic> {
        if self.conforms_to(table, kind) {
            return Ok(());
        }
        Err(Diagnostic::error(ErrorCode::E2002).with_message(format!(
            "{owner}: in the {} format, only the leading dimension may be unlimited",
            kind.name()
        )))
    }
}

impl FromIterator<SymbolId> for DimSet {
    fn from_iter<I: IntoIterator<Item = SymbolId>>(iter: I) -> Self {
        DimSet {
            dims: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Symbol;
    use pretty_assertions::assert_eq;

    fn dims(table: &mut SymbolTable, sizes: &[DimSize]) -> DimSet {
        sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| table.register(Symbol::dimension(format!("d{i}"), size)))
            .collect()
    }

    #[test]
    fn classic_rule_allows_leading_unlimited_only() {
        let mut table = SymbolTable::new();
        let leading = dims(&mut table, &[DimSize::Unlimited, DimSize::Fixed(4)]);
        let trailing = dims(&mut table, &[DimSize::Fixed(4), DimSize::Unlimited]);
        let bounded = dims(&mut table, &[DimSize::Fixed(4), DimSize::Fixed(2)]);
        let empty = DimSet::new();

        assert!(leading.is_classic_unlimited(&table));
        assert!(!trailing.is_classic_unlimited(&table));
        assert!(bounded.is_classic_unlimited(&table));
        assert!(empty.is_classic_unlimited(&table));
    }

    #[test]
    fn unlimited_queries() {
        let mut table = SymbolTable::new();
        let set = dims(
            &mut table,
            &[
                DimSize::Fixed(3),
                DimSize::Unlimited,
                DimSize::Fixed(5),
                DimSize::Unlimited,
            ],
        );

        assert!(set.has_unlimited(&table));
        assert!(!set.first_is_unlimited(&table));
        assert!(!set.is_bounded(&table));
        assert_eq!(set.count_unlimited(&table), 2);
        assert_eq!(set.find_unlimited_from(&table, 0), 1);
        assert_eq!(set.find_unlimited_from(&table, 2), 3);
        assert_eq!(set.find_unlimited_from(&table, 4), 4);
        assert_eq!(set.find_last_unlimited(&table), 3);
    }

    #[test]
    fn searches_report_length_when_absent() {
        let mut table = SymbolTable::new();
        let set = dims(&mut table, &[DimSize::Fixed(3), DimSize::Fixed(4)]);

        assert_eq!(set.find_unlimited_from(&table, 0), 2);
        assert_eq!(set.find_last_unlimited(&table), 2);
        assert_eq!(set.count_unlimited(&table), 0);
        assert!(set.is_bounded(&table));
    }

    #[test]
    fn cross_product_multiplies_declared_sizes() {
        let mut table = SymbolTable::new();
        let set = dims(
            &mut table,
            &[DimSize::Fixed(3), DimSize::Fixed(4), DimSize::Fixed(5)],
        );

        assert_eq!(set.cross_product(&table, 0, 2), 12);
        assert_eq!(set.cross_product(&table, 0, 3), 60);
        assert_eq!(set.cross_product(&table, 1, 3), 20);
        assert_eq!(set.cross_product(&table, 2, 2), 1);
        assert_eq!(set.prefix_array_length(&table, 1), 12);
    }

    #[test]
    fn cross_product_over_unlimited_is_zero() {
        let mut table = SymbolTable::new();
        let set = dims(&mut table, &[DimSize::Unlimited, DimSize::Fixed(4)]);

        // misuse: the unlimited dimension's declared size is zero
        assert_eq!(set.cross_product(&table, 0, 2), 0);
        // excluding it behaves normally
        assert_eq!(set.cross_product(&table, 1, 2), 4);
    }

    #[test]
    fn dialect_conformance() {
        let mut table = SymbolTable::new();
        let trailing = dims(&mut table, &[DimSize::Fixed(4), DimSize::Unlimited]);
        let leading = dims(&mut table, &[DimSize::Unlimited, DimSize::Fixed(4)]);

        assert!(!trailing.conforms_to(&table, Kind::Classic));
        assert!(!trailing.conforms_to(&table, Kind::Offset64));
        assert!(trailing.conforms_to(&table, Kind::NetCdf4));
        assert!(trailing.conforms_to(&table, Kind::NetCdf4Classic));

        assert!(leading.conforms_to(&table, Kind::Classic));
        assert!(leading.conforms_to(&table, Kind::NetCdf4));
    }

    #[test]
    fn dialect_violation_is_a_reported_error() {
        let mut table = SymbolTable::new();
        let trailing = dims(&mut table, &[DimSize::Fixed(4), DimSize::Unlimited]);

        assert!(trailing.check_dialect(&table, Kind::NetCdf4, "v").is_ok());
        let err = match trailing.check_dialect(&table, Kind::Classic, "v") {
            Err(d) => d,
            Ok(()) => panic!("classic placement must be rejected"),
        };
        assert_eq!(err.code, cdl_diagnostic::ErrorCode::E2002);
        assert!(err.message.contains("classic"));
        assert!(err.message.starts_with("v:"));
    }

    #[test]
    fn non_dimension_ids_read_as_bounded() {
        let mut table = SymbolTable::new();
        let group = table.register(Symbol::group("g"));
        let set: DimSet = [group].into_iter().collect();

        assert!(set.is_bounded(&table));
        assert_eq!(set.cross_product(&table, 0, 1), 1);
    }
}
