//! Boolean combination of slab stacks.
//!
//! Both operands are cut at every elevation where either one changes, each
//! band is combined in 2D, identical neighbouring bands are merged back
//! together, and the result is split into connected components.

use super::region::{shapes_overlap, Region};
use super::solid::{PrismSolid, Slab};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    Union,
    Difference,
}

/// Combines two slab stacks band by band.
#[must_use]
pub fn combine(a: &[Slab], b: &[Slab], op: BooleanOp, tol: f64) -> Vec<Slab> {
    let min_area = tol * tol;
    let levels = breakpoints(a, b, tol);
    let empty = Region::default();

    let mut result = Vec::with_capacity(levels.len());
    for pair in levels.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        let ra = region_within(a, lo, hi, tol).unwrap_or(&empty);
        let rb = region_within(b, lo, hi, tol).unwrap_or(&empty);
        let region = match op {
            BooleanOp::Union => ra.union(rb, min_area),
            BooleanOp::Difference => ra.difference(rb, min_area),
        };
        if !region.is_empty() {
            result.push(Slab {
                bottom: lo,
                top: hi,
                region,
            });
        }
    }
    coalesce(result, tol)
}

/// Sorted elevations at which either stack starts or ends a slab. Values
/// closer than `tol` collapse into one.
fn breakpoints(a: &[Slab], b: &[Slab], tol: f64) -> Vec<f64> {
    let mut levels: Vec<f64> = a
        .iter()
        .chain(b)
        .flat_map(|s| [s.bottom, s.top])
        .collect();
    levels.sort_by(f64::total_cmp);
    levels.dedup_by(|next, kept| (*next - *kept).abs() <= tol);
    levels
}

/// The region of the slab that covers `[lo, hi]`, if any.
fn region_within(slabs: &[Slab], lo: f64, hi: f64, tol: f64) -> Option<&Region> {
    slabs
        .iter()
        .find(|s| s.bottom <= lo + tol && s.top >= hi - tol)
        .map(|s| &s.region)
}

/// Merges vertically adjacent slabs whose regions are identical.
fn coalesce(slabs: Vec<Slab>, tol: f64) -> Vec<Slab> {
    let min_area = tol * tol;
    let mut merged: Vec<Slab> = Vec::with_capacity(slabs.len());
    for slab in slabs {
        if let Some(last) = merged.last_mut() {
            if (last.top - slab.bottom).abs() <= tol
                && last.region.same_as(&slab.region, min_area)
            {
                last.top = slab.top;
                continue;
            }
        }
        merged.push(slab);
    }
    merged
}

/// Splits a slab stack into connected solids.
///
/// Two shapes are connected when they sit in vertically touching slabs and
/// overlap in plan by more than `tol²`. Shapes inside one slab are disjoint
/// by construction. Components are returned in order of their lowest shape.
#[must_use]
pub fn split_components(slabs: Vec<Slab>, tol: f64) -> Vec<PrismSolid> {
    let min_area = tol * tol;

    // Node index for every (slab, shape) pair.
    let mut offsets = Vec::with_capacity(slabs.len());
    let mut count = 0;
    for slab in &slabs {
        offsets.push(count);
        count += slab.region.shapes().len();
    }
    let mut parents: Vec<usize> = (0..count).collect();

    for (i, pair) in slabs.windows(2).enumerate() {
        let (lower, upper) = (&pair[0], &pair[1]);
        if (lower.top - upper.bottom).abs() > tol {
            continue;
        }
        for (a, shape_a) in lower.region.shapes().iter().enumerate() {
            for (b, shape_b) in upper.region.shapes().iter().enumerate() {
                if shapes_overlap(shape_a, shape_b, min_area) {
                    unite(&mut parents, offsets[i] + a, offsets[i + 1] + b);
                }
            }
        }
    }

    let mut roots: Vec<usize> = Vec::new();
    let mut groups: Vec<Vec<Slab>> = Vec::new();
    for (s, slab) in slabs.iter().enumerate() {
        let mut per_group: Vec<(usize, Vec<_>)> = Vec::new();
        for (k, shape) in slab.region.shapes().iter().enumerate() {
            let root = find(&mut parents, offsets[s] + k);
            let group = if let Some(g) = roots.iter().position(|&r| r == root) {
                g
            } else {
                roots.push(root);
                groups.push(Vec::new());
                roots.len() - 1
            };
            match per_group.iter_mut().find(|(g, _)| *g == group) {
                Some((_, shapes)) => shapes.push(shape.clone()),
                None => per_group.push((group, vec![shape.clone()])),
            }
        }
        for (group, shapes) in per_group {
            groups[group].push(Slab {
                bottom: slab.bottom,
                top: slab.top,
                region: Region::from_shapes(shapes, 0.0),
            });
        }
    }

    groups
        .into_iter()
        .map(|g| PrismSolid::from_slabs(coalesce(g, tol)))
        .collect()
}

fn find(parents: &mut [usize], mut node: usize) -> usize {
    while parents[node] != node {
        parents[node] = parents[parents[node]];
        node = parents[node];
    }
    node
}

fn unite(parents: &mut [usize], a: usize, b: usize) {
    let ra = find(parents, a);
    let rb = find(parents, b);
    if ra != rb {
        parents[rb.max(ra)] = ra.min(rb);
    }
}
