//! Unit tests for hv-field.

use hv_core::{Position, ResourceId, SimRng};

use crate::{FlatTerrain, ResourceField, ResourceNode, ScatterParams, ScatterSpawner, MAX_GRID_SIDE};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn node(quantity: u32) -> ResourceNode {
    ResourceNode::new(ResourceId(0), Position::ORIGIN, quantity)
}

/// Three nodes on the x axis at 10, 20, 30.
fn line_field() -> (ResourceField, [ResourceId; 3]) {
    let mut field = ResourceField::new();
    let a = field.insert(Position::flat(10.0, 0.0), 10);
    let b = field.insert(Position::flat(20.0, 0.0), 10);
    let c = field.insert(Position::flat(30.0, 0.0), 10);
    (field, [a, b, c])
}

// ── ResourceNode ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod node_tests {
    use super::*;

    #[test]
    fn extract_reduces_quantity() {
        let mut n = node(10);
        assert_eq!(n.extract(4), 4);
        assert_eq!(n.remaining(), 6);
    }

    #[test]
    fn extract_floors_at_zero() {
        let mut n = node(3);
        assert_eq!(n.extract(20), 3);
        assert_eq!(n.remaining(), 0);
        assert!(n.is_depleted());
    }

    #[test]
    fn extract_zero_is_noop() {
        let mut n = node(7);
        assert_eq!(n.extract(0), 0);
        assert_eq!(n.remaining(), 7);
    }

    #[test]
    fn extract_from_empty_stays_empty() {
        let mut n = node(0);
        assert_eq!(n.extract(5), 0);
        assert_eq!(n.extract(5), 0);
        assert_eq!(n.remaining(), 0);
    }
}

// ── ResourceField ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod field_tests {
    use super::*;

    #[test]
    fn empty_field_has_no_nearest() {
        let field = ResourceField::new();
        assert_eq!(field.find_nearest(Position::ORIGIN), None);
    }

    #[test]
    fn nearest_is_closest() {
        let (field, [_, b, _]) = line_field();
        assert_eq!(field.find_nearest(Position::flat(19.0, 1.0)), Some(b));
    }

    #[test]
    fn ties_go_to_first_inserted() {
        let mut field = ResourceField::new();
        let first = field.insert(Position::flat(5.0, 0.0), 1);
        let _second = field.insert(Position::flat(-5.0, 0.0), 1);
        assert_eq!(field.find_nearest(Position::ORIGIN), Some(first));
    }

    #[test]
    fn depleting_extract_removes_node_immediately() {
        let (mut field, [a, b, _]) = line_field();
        assert_eq!(field.extract(a, 4), 4);
        assert!(field.contains(a));
        assert_eq!(field.extract(a, 100), 6);
        assert!(!field.contains(a));
        assert_eq!(field.len(), 2);
        assert_eq!(field.find_nearest(Position::ORIGIN), Some(b));
    }

    #[test]
    fn extract_from_missing_node_yields_zero() {
        let (mut field, [a, ..]) = line_field();
        field.remove(a);
        assert_eq!(field.extract(a, 5), 0);
        assert_eq!(field.extract(ResourceId::INVALID, 5), 0);
    }

    #[test]
    fn lookups_survive_middle_removal() {
        let (mut field, [a, b, c]) = line_field();
        assert!(field.remove(b).is_some());
        assert_eq!(field.position_of(a), Some(Position::flat(10.0, 0.0)));
        assert_eq!(field.position_of(c), Some(Position::flat(30.0, 0.0)));
        assert!(field.require(b).is_err());
        let order: Vec<_> = field.iter().map(|n| n.id).collect();
        assert_eq!(order, vec![a, c]);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut field = ResourceField::new();
        let a = field.insert(Position::ORIGIN, 1);
        field.extract(a, 1);
        let b = field.insert(Position::ORIGIN, 1);
        assert_ne!(a, b);
        assert!(!field.contains(a));
    }

    #[test]
    fn zero_quantity_insert_is_rejected() {
        let mut field = ResourceField::new();
        assert_eq!(field.insert(Position::ORIGIN, 0), ResourceId::INVALID);
        assert!(field.is_empty());
    }

    #[test]
    fn total_remaining_sums_nodes() {
        let (field, _) = line_field();
        assert_eq!(field.total_remaining(), 30);
    }
}

// ── ScatterSpawner ────────────────────────────────────────────────────────────

#[cfg(test)]
mod spawner_tests {
    use super::*;

    fn params() -> ScatterParams {
        ScatterParams {
            ring_min: 10.0,
            ring_max: 80.0,
            ..ScatterParams::default()
        }
    }

    #[test]
    fn spawned_nodes_lie_inside_ring() {
        let p = params();
        let mut spawner = ScatterSpawner::new(p.clone()).unwrap();
        let mut field = ResourceField::new();
        let placed = spawner.populate(&mut field, &mut SimRng::new(7), &FlatTerrain(0.0));
        assert!(placed > 0);
        assert_eq!(placed, field.len());
        for n in field.iter() {
            let d = n.position.distance(p.center);
            assert!(d > p.ring_min && d < p.ring_max, "node at {d}");
            assert_eq!(n.remaining(), p.node_quantity);
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let run = |seed| {
            let mut spawner = ScatterSpawner::new(params()).unwrap();
            let mut field = ResourceField::new();
            spawner.populate(&mut field, &mut SimRng::new(seed), &FlatTerrain(0.0));
            field.iter().map(|n| n.position).collect::<Vec<_>>()
        };
        assert_eq!(run(3), run(3));
    }

    #[test]
    fn nodes_keep_their_distance() {
        let p = params();
        let mut spawner = ScatterSpawner::new(p.clone()).unwrap();
        let mut field = ResourceField::new();
        spawner.populate(&mut field, &mut SimRng::new(11), &FlatTerrain(0.0));
        let nodes: Vec<_> = field.iter().collect();
        for (i, a) in nodes.iter().enumerate() {
            for b in &nodes[i + 1..] {
                // Distinct cells at least one cell apart in some axis.
                assert!(a.position.distance(b.position) > p.cell_size * 0.5);
            }
        }
    }

    #[test]
    fn heights_come_from_terrain() {
        let mut spawner = ScatterSpawner::new(params()).unwrap();
        let mut field = ResourceField::new();
        spawner.populate(&mut field, &mut SimRng::new(1), &FlatTerrain(3.5));
        assert!(field.iter().all(|n| n.position.y == 3.5));
    }

    #[test]
    fn max_nodes_caps_output() {
        let p = ScatterParams { max_nodes: 3, ..params() };
        let mut spawner = ScatterSpawner::new(p).unwrap();
        let mut field = ResourceField::new();
        assert!(spawner.populate(&mut field, &mut SimRng::new(5), &FlatTerrain(0.0)) <= 3);
    }

    #[test]
    fn empty_ring_rejected() {
        let p = ScatterParams { ring_min: 50.0, ring_max: 50.0, ..params() };
        assert!(ScatterSpawner::new(p).is_err());
    }

    #[test]
    fn repopulate_reuses_spawner() {
        let mut spawner = ScatterSpawner::new(params()).unwrap();
        let mut first = ResourceField::new();
        let mut second = ResourceField::new();
        let a = spawner.populate(&mut first, &mut SimRng::new(9), &FlatTerrain(0.0));
        let b = spawner.populate(&mut second, &mut SimRng::new(9), &FlatTerrain(0.0));
        assert!(a > 0);
        assert_eq!(a, b);
        let pos = |f: &ResourceField| f.iter().map(|n| n.position).collect::<Vec<_>>();
        assert_eq!(pos(&first), pos(&second));
    }

    #[test]
    fn oversized_grid_rejected() {
        let p = ScatterParams { ring_max: 1.0e5, cell_size: 1.0, ..params() };
        assert!(p.validate().is_err());
        assert!(ScatterSpawner::new(p).is_err());
    }

    #[test]
    fn grid_at_side_limit_accepted() {
        let side = MAX_GRID_SIDE as f32;
        let p = ScatterParams { ring_max: side / 2.0, cell_size: 1.0, ..params() };
        assert!(p.validate().is_ok());
    }
}
