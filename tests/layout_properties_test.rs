// Property tests for the hemicycle layout engine: seat counts, determinism,
// canvas containment, row growth, and aisle placement, plus the reference
// configurations the original chart shipped with.

use parliament_chart_wasm::layout::rows::build_rows;
use parliament_chart_wasm::{compute_seat_positions, LayoutOptions, Point};

fn outermost_radius(points: &[Point], center_x: f32) -> f32 {
    points
        .iter()
        .map(|p| p.radius_from(center_x))
        .fold(0.0, f32::max)
}

/// Seat angle in (0, PI], measured like the engine measures it.
fn seat_angle(point: &Point, center_x: f32) -> f32 {
    point.y.atan2(point.x - center_x)
}

/// Group points into rows by rounded radius, sorted innermost first.
fn group_by_row(points: &[Point], center_x: f32) -> Vec<(f32, Vec<Point>)> {
    let mut rows: Vec<(f32, Vec<Point>)> = Vec::new();
    for p in points {
        let r = p.radius_from(center_x);
        match rows.iter_mut().find(|(radius, _)| (r - *radius).abs() < 0.5) {
            Some((_, members)) => members.push(*p),
            None => rows.push((r, vec![*p])),
        }
    }
    rows.sort_by(|a, b| a.0.total_cmp(&b.0));
    rows
}

#[test]
fn test_count_preserved_for_all_configurations() {
    let configurations = [
        LayoutOptions::default(),
        LayoutOptions::default().with_sections(1),
        LayoutOptions::default().with_sections(2).with_section_gap(0.0),
        LayoutOptions::new().with_sections(1).with_seat_radius(16.0).with_row_height(45.0),
    ];
    for opts in configurations {
        for count in [0usize, 1, 2, 7, 50, 111, 333] {
            let points = compute_seat_positions(count, &opts, 840.0).unwrap();
            assert_eq!(
                points.len(),
                count,
                "expected {} seats for {:?}, got {}",
                count,
                opts,
                points.len()
            );
        }
    }
}

#[test]
fn test_identical_inputs_give_bit_identical_output() {
    let opts = LayoutOptions::default();
    let first = compute_seat_positions(151, &opts, 777.0).unwrap();
    let second = compute_seat_positions(151, &opts, 777.0).unwrap();
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.x.to_bits(), b.x.to_bits(), "x must be bit-identical across calls");
        assert_eq!(a.y.to_bits(), b.y.to_bits(), "y must be bit-identical across calls");
    }
}

#[test]
fn test_all_seats_inside_canvas() {
    // includes widths far too small for the seat count, where overlap is
    // accepted but coordinates must still stay inside the canvas
    let cases = [(111usize, 840.0f32), (400, 840.0), (500, 300.0), (50, 30.0)];
    for (count, width) in cases {
        let points = compute_seat_positions(count, &LayoutOptions::default(), width).unwrap();
        for p in &points {
            assert!(
                p.x >= 0.0 && p.x <= width,
                "seat x {} escapes [0, {}] with {} seats",
                p.x,
                width,
                count
            );
            assert!(p.y >= 0.0, "seat y {} is above the flat edge", p.y);
        }
    }
}

#[test]
fn test_outermost_row_radius_grows_monotonically() {
    let opts = LayoutOptions::default().with_sections(1);
    let mut previous = 0.0f32;
    for count in 1..=160usize {
        let points = compute_seat_positions(count, &opts, 840.0).unwrap();
        let outer = outermost_radius(&points, 420.0);
        assert!(
            outer >= previous - 1e-3,
            "outermost radius shrank from {} to {} at {} seats",
            previous,
            outer,
            count
        );
        previous = outer;
    }
}

#[test]
fn test_single_section_rows_are_contiguous() {
    let opts = LayoutOptions::default().with_sections(1);
    // exactly fill the first four rows
    let plans = build_rows(10_000, &opts, 840.0);
    let count: usize = plans[..4].iter().map(|p| p.capacity).sum();

    let points = compute_seat_positions(count, &opts, 840.0).unwrap();
    for (radius, members) in group_by_row(&points, 420.0) {
        if members.len() < 2 {
            continue;
        }
        let mut angles: Vec<f32> = members.iter().map(|p| seat_angle(p, 420.0)).collect();
        angles.sort_by(|a, b| b.total_cmp(a));
        for pair in angles.windows(2) {
            let separation = (pair[0] - pair[1]) * radius;
            assert!(
                separation < opts.section_gap,
                "single-section row has an aisle-sized hole ({} px at radius {})",
                separation,
                radius
            );
        }
    }
}

#[test]
fn test_full_rows_leave_one_aisle_per_boundary() {
    let opts = LayoutOptions::default(); // 4 sections, 60px aisles
    let plans = build_rows(10_000, &opts, 840.0);
    let count: usize = plans[..4].iter().map(|p| p.capacity).sum();

    let points = compute_seat_positions(count, &opts, 840.0).unwrap();
    let rows = group_by_row(&points, 420.0);
    assert_eq!(rows.len(), 4, "four fully filled rows expected");

    for (radius, members) in rows {
        let mut angles: Vec<f32> = members.iter().map(|p| seat_angle(p, 420.0)).collect();
        angles.sort_by(|a, b| b.total_cmp(a));
        let wide_gaps = angles
            .windows(2)
            .filter(|pair| (pair[0] - pair[1]) * radius >= opts.section_gap - 1e-2)
            .count();
        assert_eq!(
            wide_gaps, 3,
            "a full 4-section row must show exactly 3 aisles (radius {})",
            radius
        );
    }
}

#[test]
fn test_zero_seats_empty_chart() {
    let opts = LayoutOptions::default();
    assert_eq!(compute_seat_positions(0, &opts, 800.0).unwrap(), vec![]);
}

#[test]
fn test_single_seat_centers_on_innermost_row() {
    let opts = LayoutOptions::new()
        .with_sections(1)
        .with_section_gap(60.0)
        .with_seat_radius(12.0)
        .with_row_height(42.0);
    let points = compute_seat_positions(1, &opts, 800.0).unwrap();
    assert_eq!(points.len(), 1);
    let seat = points[0];
    assert!((seat.x - 400.0).abs() < 1e-2, "lone seat sits on the center line, got x = {}", seat.x);
    let plans = build_rows(1, &opts, 800.0);
    assert!(
        (seat.radius_from(400.0) - plans[0].radius).abs() < 1e-3,
        "lone seat sits on the innermost row"
    );
}

#[test]
fn test_member_chart_packs_into_concentric_rows() {
    // the original deployment: 111 members, one section, 840px wide
    let opts = LayoutOptions::new()
        .with_sections(1)
        .with_section_gap(60.0)
        .with_seat_radius(16.0)
        .with_row_height(45.0);
    let points = compute_seat_positions(111, &opts, 840.0).unwrap();
    assert_eq!(points.len(), 111);

    for p in &points {
        assert!(p.x >= 0.0 && p.x <= 840.0);
        assert!(p.y >= 0.0);
    }

    // all seats distinct
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            let d = (a.x - b.x).hypot(a.y - b.y);
            assert!(d > 0.1, "seats coincide at ({}, {})", a.x, a.y);
        }
    }

    let rows = group_by_row(&points, 420.0);
    assert!(rows.len() >= 4, "111 seats should need several rows, got {}", rows.len());
    // inner full rows grow in capacity going outward; the outermost row may
    // be partially filled and is not compared
    for pair in rows[..rows.len() - 1].windows(2) {
        assert!(
            pair[1].1.len() > pair[0].1.len(),
            "outer row at {} should hold more than inner row at {}",
            pair[1].0,
            pair[0].0
        );
    }
}

#[test]
fn test_divisible_count_spreads_evenly_over_sections() {
    let opts = LayoutOptions::default(); // 4 sections
    let count = 48usize; // divisible by the section count

    let points = compute_seat_positions(count, &opts, 840.0).unwrap();
    assert_eq!(points.len(), count);

    // every fully filled row splits into 4 angular clusters separated by
    // aisles; a sparse trailing row spreads wide and is not checked
    let plans = build_rows(count, &opts, 840.0);
    let rows = group_by_row(&points, 420.0);
    let mut full_rows = 0;
    for (plan, (radius, members)) in plans.iter().zip(&rows) {
        if members.len() != plan.capacity {
            continue;
        }
        full_rows += 1;
        let mut angles: Vec<f32> = members.iter().map(|p| seat_angle(p, 420.0)).collect();
        angles.sort_by(|a, b| b.total_cmp(a));
        let clusters = 1 + angles
            .windows(2)
            .filter(|pair| (pair[0] - pair[1]) * radius >= opts.section_gap - 1e-2)
            .count();
        assert_eq!(clusters, 4, "row at radius {} should split into 4 clusters", radius);
    }
    assert!(full_rows >= 3, "expected several fully filled rows, got {}", full_rows);
}
