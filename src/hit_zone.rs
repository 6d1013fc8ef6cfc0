//! Hit-zone dispatch - toggle or navigate from a pointer position
//!
//! The disclosure glyph sits in the row's indentation, so the left part of a
//! row up to `base_offset + indent * level` toggles and the rest navigates.
//! Both constants must match the stylesheet's indentation.

use serde::{Deserialize, Serialize};

use crate::error::{SidebarError, SidebarResult};
use crate::tree::Node;

/// Indentation geometry of sidebar rows, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitZone {
    #[serde(default = "default_base_offset")]
    pub base_offset: f64,
    #[serde(default = "default_indent")]
    pub indent: f64,
}

fn default_base_offset() -> f64 { 20.0 }
fn default_indent() -> f64 { 16.0 }

impl Default for HitZone {
    fn default() -> Self {
        Self {
            base_offset: default_base_offset(),
            indent: default_indent(),
        }
    }
}

/// Pointer x relative to the row label's left edge
///
/// Both arguments are in viewport coordinates, so a click landing on markup
/// nested inside the label still measures from the label itself.
pub fn label_x(client_x: f64, label_left: f64) -> f64 {
    client_x - label_left
}

/// What a click on a row should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Toggle,
    Navigate,
}

impl HitZone {
    pub fn new(base_offset: f64, indent: f64) -> Self {
        Self { base_offset, indent }
    }

    pub fn validate(&self) -> SidebarResult<()> {
        for (name, value) in [("base_offset", self.base_offset), ("indent", self.indent)] {
            if !value.is_finite() || value < 0.0 {
                return Err(SidebarError::InvalidConfig(format!(
                    "hit_zone.{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Width of the toggle zone for a row at `level`
    pub fn width(&self, level: usize) -> f64 {
        self.base_offset + self.indent * level as f64
    }

    /// Decide the intent of a click at `pointer_x` on `node`'s row
    pub fn intent(&self, node: &Node, pointer_x: f64) -> Intent {
        if node.disclosure().is_leaf() {
            return Intent::Navigate;
        }
        if pointer_x <= self.width(node.level()) {
            Intent::Toggle
        } else {
            Intent::Navigate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Disclosure, RowSpec, SidebarTree};

    #[test]
    fn test_zone_width() {
        let zone = HitZone::new(20.0, 16.0);
        assert_eq!(zone.width(0), 20.0);
        assert_eq!(zone.width(3), 68.0);
    }

    #[test]
    fn test_leaf_always_navigates() {
        let tree = SidebarTree::from_rows([RowSpec::new("a", 0, Disclosure::Leaf)]).unwrap();
        let zone = HitZone::default();
        let node = tree.get("a").unwrap();
        assert_eq!(zone.intent(node, 0.0), Intent::Navigate);
        assert_eq!(zone.intent(node, 1.0), Intent::Navigate);
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let tree = SidebarTree::from_rows([
            RowSpec::new("a", 0, Disclosure::Expanded),
            RowSpec::new("b", 1, Disclosure::Collapsed),
        ])
        .unwrap();
        let zone = HitZone::new(10.0, 5.0);
        let b = tree.get("b").unwrap();
        assert_eq!(zone.intent(b, 15.0), Intent::Toggle);
        assert_eq!(zone.intent(b, 15.01), Intent::Navigate);
        assert_eq!(zone.intent(b, -3.0), Intent::Toggle);
    }

    #[test]
    fn test_click_on_nested_markup_measures_from_label() {
        let tree = SidebarTree::from_rows([RowSpec::new("a", 0, Disclosure::Collapsed)]).unwrap();
        let zone = HitZone::new(20.0, 16.0);
        let node = tree.get("a").unwrap();

        // label at x=100, a <span> 40px into it, clicked 2px into the span
        let x = label_x(100.0 + 40.0 + 2.0, 100.0);
        assert_eq!(x, 42.0);
        assert_eq!(zone.intent(node, x), Intent::Navigate);
        assert_eq!(zone.intent(node, label_x(112.0, 100.0)), Intent::Toggle);
    }

    #[test]
    fn test_invalid_geometry() {
        assert!(HitZone::new(-1.0, 4.0).validate().is_err());
        assert!(HitZone::new(4.0, f64::NAN).validate().is_err());
        assert!(HitZone::new(0.0, 0.0).validate().is_ok());
    }
}
