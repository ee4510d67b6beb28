use flappy_bird::geom::*;

// ── HitBox accessors ──────────────────────────────────────────────────────────

#[test]
fn box_edges() {
    let b = HitBox::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(b.right(), 40.0);
    assert_eq!(b.bottom(), 60.0);
}

#[test]
fn box_corners_cover_all_extremes() {
    let b = HitBox::new(1.0, 2.0, 3.0, 4.0);
    let c = b.corners();
    assert_eq!(c.len(), 4);
    let xs: Vec<f64> = c.iter().map(|v| v.x).collect();
    let ys: Vec<f64> = c.iter().map(|v| v.y).collect();
    assert!(xs.contains(&1.0) && xs.contains(&4.0));
    assert!(ys.contains(&2.0) && ys.contains(&6.0));
}

#[test]
fn box_translated_moves_position_only() {
    let b = HitBox::new(5.0, 5.0, 10.0, 10.0);
    let t = b.translated(-2.0, 3.0);
    assert_eq!(t.pos, Vector::new(3.0, 8.0));
    assert_eq!(t.w, 10.0);
    assert_eq!(t.h, 10.0);
    // Original untouched
    assert_eq!(b.pos, Vector::new(5.0, 5.0));
}

// ── Intersection ──────────────────────────────────────────────────────────────

#[test]
fn overlapping_boxes_intersect() {
    let a = HitBox::new(0.0, 0.0, 10.0, 10.0);
    let b = HitBox::new(5.0, 5.0, 10.0, 10.0);
    assert!(boxes_intersect(&a, &b));
    assert!(boxes_intersect(&b, &a));
}

#[test]
fn contained_box_intersects() {
    let outer = HitBox::new(0.0, 0.0, 100.0, 100.0);
    let inner = HitBox::new(40.0, 40.0, 5.0, 5.0);
    assert!(boxes_intersect(&outer, &inner));
    assert!(boxes_intersect(&inner, &outer));
}

#[test]
fn disjoint_boxes_do_not_intersect() {
    let a = HitBox::new(0.0, 0.0, 10.0, 10.0);
    // Separated horizontally
    assert!(!boxes_intersect(&a, &HitBox::new(20.0, 0.0, 10.0, 10.0)));
    // Separated vertically
    assert!(!boxes_intersect(&a, &HitBox::new(0.0, 30.0, 10.0, 10.0)));
    // Separated diagonally
    assert!(!boxes_intersect(&a, &HitBox::new(11.0, 11.0, 10.0, 10.0)));
}

#[test]
fn touching_edges_count_as_intersecting() {
    let a = HitBox::new(0.0, 0.0, 10.0, 10.0);
    let b = HitBox::new(10.0, 0.0, 10.0, 10.0);
    assert!(boxes_intersect(&a, &b));
}

#[test]
fn polygon_test_is_symmetric() {
    let a = HitBox::new(0.0, 0.0, 4.0, 4.0).corners();
    let b = HitBox::new(100.0, 100.0, 4.0, 4.0).corners();
    assert!(!polygons_intersect(&a, &b));
    assert!(!polygons_intersect(&b, &a));

    let c = HitBox::new(2.0, 2.0, 4.0, 4.0).corners();
    assert!(polygons_intersect(&a, &c));
    assert!(polygons_intersect(&c, &a));
}

#[test]
fn thin_boxes_still_collide() {
    // Degenerate-width boxes (like a tightly scaled head cap) must still
    // register against an overlapping area.
    let sliver = HitBox::new(5.0, 0.0, 0.5, 100.0);
    let wide = HitBox::new(0.0, 40.0, 100.0, 1.0);
    assert!(boxes_intersect(&sliver, &wide));
}
