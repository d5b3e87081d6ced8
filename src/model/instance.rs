//! Immutable problem instance.

use crate::error::{BinPackingError, Result};

/// A one-dimensional bin packing instance.
///
/// Holds the shared bin capacity and the item weights. Instances are
/// validated on construction and never mutated afterwards, so the lower
/// bound is computed once and cached.
///
/// # Examples
///
/// ```
/// use u_binpack::model::Instance;
///
/// let instance = Instance::new(10.0, vec![9.0, 1.0, 8.0, 2.0, 7.0, 3.0]).unwrap();
/// assert_eq!(instance.lower_bound(), 3);
/// assert_eq!(instance.len(), 6);
/// ```
///
/// With the `serde` feature, deserialization goes through [`Instance::new`]
/// and recomputes the lower bound.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "InstanceRepr"))]
pub struct Instance {
    name: Option<String>,
    capacity: f64,
    items: Vec<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    lower_bound: usize,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct InstanceRepr {
    #[serde(default)]
    name: Option<String>,
    capacity: f64,
    items: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<InstanceRepr> for Instance {
    type Error = BinPackingError;

    fn try_from(repr: InstanceRepr) -> Result<Self> {
        let instance = Instance::new(repr.capacity, repr.items)?;
        Ok(match repr.name {
            Some(name) => instance.with_name(name),
            None => instance,
        })
    }
}

impl Instance {
    /// Creates a new instance.
    ///
    /// # Errors
    ///
    /// - [`BinPackingError::InvalidCapacity`] if `capacity` is not positive and finite.
    /// - [`BinPackingError::EmptyInstance`] if `items` is empty.
    /// - [`BinPackingError::InvalidItem`] if any weight is not positive and finite.
    /// - [`BinPackingError::OversizedItem`] if any weight exceeds `capacity`.
    pub fn new(capacity: f64, items: Vec<f64>) -> Result<Self> {
        if !(capacity.is_finite() && capacity > 0.0) {
            return Err(BinPackingError::InvalidCapacity(capacity));
        }
        if items.is_empty() {
            return Err(BinPackingError::EmptyInstance);
        }
        for &item in &items {
            if !(item.is_finite() && item > 0.0) {
                return Err(BinPackingError::InvalidItem(item));
            }
            if item > capacity {
                return Err(BinPackingError::OversizedItem { item, capacity });
            }
        }

        let total: f64 = items.iter().sum();
        let lower_bound = (total / capacity).ceil() as usize;

        Ok(Self {
            name: None,
            capacity,
            items,
            lower_bound,
        })
    }

    /// Attaches a human-readable name (e.g. the source file name).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Instance name, if one was attached.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Capacity shared by every bin.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Item weights in instance order.
    pub fn items(&self) -> &[f64] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`: empty instances are rejected on construction.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all item weights.
    pub fn total_weight(&self) -> f64 {
        self.items.iter().sum()
    }

    /// Minimum number of bins any packing needs: `ceil(total / capacity)`.
    pub fn lower_bound(&self) -> usize {
        self.lower_bound
    }

    /// Returns a copy with items sorted by decreasing weight.
    pub fn sort_decreasing(&self) -> Instance {
        let mut items = self.items.clone();
        items.sort_by(|a, b| b.total_cmp(a));
        Instance {
            name: self.name.clone(),
            capacity: self.capacity,
            items,
            lower_bound: self.lower_bound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_bound_rounds_up() {
        let instance = Instance::new(10.0, vec![9.0, 1.0, 8.0, 2.0, 7.0, 3.0]).unwrap();
        assert_eq!(instance.lower_bound(), 3);

        let instance = Instance::new(10.0, vec![6.0, 5.0]).unwrap();
        assert_eq!(instance.lower_bound(), 2);
    }

    #[test]
    fn test_sort_decreasing_keeps_original() {
        let instance = Instance::new(10.0, vec![1.0, 5.0, 3.0]).unwrap();
        let sorted = instance.sort_decreasing();
        assert_eq!(sorted.items(), &[5.0, 3.0, 1.0]);
        assert_eq!(instance.items(), &[1.0, 5.0, 3.0]);
        assert_eq!(sorted.lower_bound(), instance.lower_bound());
    }

    #[test]
    fn test_rejects_bad_capacity() {
        assert_eq!(
            Instance::new(0.0, vec![1.0]),
            Err(BinPackingError::InvalidCapacity(0.0))
        );
        assert!(matches!(
            Instance::new(f64::NAN, vec![1.0]),
            Err(BinPackingError::InvalidCapacity(_))
        ));
    }

    #[test]
    fn test_rejects_bad_items() {
        assert_eq!(
            Instance::new(10.0, vec![1.0, 0.0]),
            Err(BinPackingError::InvalidItem(0.0))
        );
        assert_eq!(
            Instance::new(10.0, vec![-2.0]),
            Err(BinPackingError::InvalidItem(-2.0))
        );
        assert_eq!(
            Instance::new(10.0, vec![11.0]),
            Err(BinPackingError::OversizedItem {
                item: 11.0,
                capacity: 10.0
            })
        );
        assert_eq!(Instance::new(10.0, vec![]), Err(BinPackingError::EmptyInstance));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates() {
        let instance: Instance =
            serde_json::from_str(r#"{"name":"u","capacity":10.0,"items":[9.0,1.0,8.0]}"#).unwrap();
        assert_eq!(instance.lower_bound(), 2);
        assert_eq!(instance.name(), Some("u"));

        let json = serde_json::to_string(&instance).unwrap();
        assert!(!json.contains("lower_bound"));
        assert_eq!(serde_json::from_str::<Instance>(&json).unwrap(), instance);

        let bad = r#"{"capacity":10.0,"items":[-5.0,0.0,40.0],"lower_bound":0}"#;
        assert!(serde_json::from_str::<Instance>(bad).is_err());
        assert!(serde_json::from_str::<Instance>(r#"{"capacity":10.0,"items":[40.0]}"#).is_err());
        assert!(serde_json::from_str::<Instance>(r#"{"capacity":10.0,"items":[]}"#).is_err());
    }

    #[test]
    fn test_name() {
        let instance = Instance::new(10.0, vec![1.0]).unwrap().with_name("u120_00");
        assert_eq!(instance.name(), Some("u120_00"));
        assert_eq!(instance.sort_decreasing().name(), Some("u120_00"));
    }
}
