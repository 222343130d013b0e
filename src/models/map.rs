//! Map-provider boundary.

/// Warehouse location identifier in the map provider's id space.
pub type NodeId = usize;

/// Travel-cost source for pairs of warehouse locations.
///
/// This is the boundary to the external map provider: the solver never sees
/// shelf layouts or aisle geometry, only pairwise travel costs. Costs are
/// non-negative and may be asymmetric (one-way aisles); `f64::INFINITY`
/// marks a pair with no route between them.
///
/// [`DistanceMatrix`](crate::distance::DistanceMatrix) implements this
/// trait, so an explicit matrix can stand in for a full map provider.
///
/// # Examples
///
/// ```
/// use pickpath::models::{NodeId, WarehouseMap};
///
/// /// All locations one unit apart.
/// struct UniformMap;
///
/// impl WarehouseMap for UniformMap {
///     fn cost(&self, from: NodeId, to: NodeId) -> f64 {
///         if from == to {
///             f64::INFINITY
///         } else {
///             1.0
///         }
///     }
/// }
///
/// assert_eq!(UniformMap.cost(2, 5), 1.0);
/// ```
pub trait WarehouseMap {
    /// Travel cost from `from` to `to`, `f64::INFINITY` if unreachable.
    fn cost(&self, from: NodeId, to: NodeId) -> f64;
}
