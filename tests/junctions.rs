use glam::dvec2;
use linework::{
    Circle, ClassifyConfig, HatchedPolygon, JoinConfig, JoinError, Joinable, JoinableArena,
    JoinableEnum, JoinableId, JunctionId, LineJoin, LineSegment, Primitive, TextJoin, TextRun,
    build_junctions, classify_lines, resolve_common_point,
};

fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> LineSegment {
    LineSegment::new(dvec2(x0, y0), dvec2(x1, y1))
}

/// Vertical rungs centred on y=0, two units apart, starting at x=0
fn wedge(lengths: &[f64]) -> Vec<LineSegment> {
    lengths
        .iter()
        .enumerate()
        .map(|(i, &len)| {
            let x = 2.0 * i as f64;
            line(x, -len / 2.0, x, len / 2.0)
        })
        .collect()
}

// =============================================================================
// Pairwise resolution
// =============================================================================

#[test]
fn resolution_is_symmetric() {
    let config = JoinConfig::default();
    let joinables: Vec<JoinableEnum> = vec![
        LineJoin::new(JoinableId(0), line(8.0, 0.0, 30.0, 0.0), &config).into(),
        HatchedPolygon::new(JoinableId(1), wedge(&[10.0, 8.0, 6.0, 4.0]), &config)
            .unwrap()
            .into(),
        TextJoin::new(JoinableId(2), TextRun::new(dvec2(31.0, 1.0), 6.0, "O"), &config).into(),
        LineJoin::new(JoinableId(3), line(30.0, 0.0, 30.0, 25.0), &config).into(),
    ];

    for a in &joinables {
        for b in &joinables {
            if a.id() == b.id() {
                continue;
            }
            assert_eq!(
                resolve_common_point(a, b).unwrap(),
                resolve_common_point(b, a).unwrap(),
                "{} vs {}",
                a.id(),
                b.id()
            );
        }
    }
}

#[test]
fn resolving_a_joinable_with_itself_fails() {
    let config = JoinConfig::default();
    let joinables: Vec<JoinableEnum> = vec![
        LineJoin::new(JoinableId(0), line(0.0, 0.0, 10.0, 0.0), &config).into(),
        HatchedPolygon::new(JoinableId(1), wedge(&[6.0, 4.0]), &config)
            .unwrap()
            .into(),
        TextJoin::new(JoinableId(2), TextRun::new(dvec2(0.0, 0.0), 6.0, "N"), &config).into(),
    ];
    for j in &joinables {
        assert_eq!(
            resolve_common_point(j, j),
            Err(JoinError::SelfJoin { id: j.id() })
        );
    }
}

#[test]
fn hatched_polygon_claims_a_shared_point() {
    let config = JoinConfig::default();
    let hatched = HatchedPolygon::new(JoinableId(0), wedge(&[10.0, 8.0, 6.0, 4.0]), &config).unwrap();
    let bond = LineJoin::new(JoinableId(1), line(8.0, 0.0, 30.0, 0.0), &config);

    let point = resolve_common_point(&bond, &hatched).unwrap().unwrap();
    assert_eq!(point.owner, hatched.id());
    assert_eq!(point.priority, hatched.priority());
    assert!(point.location.abs_diff_eq(dvec2(8.0, 0.0), 1e-9));
}

#[test]
fn text_outranks_lines_at_an_atom() {
    let config = JoinConfig::default();
    let bond = LineJoin::new(JoinableId(0), line(0.0, 0.0, 20.0, 0.0), &config);
    let atom = TextJoin::new(JoinableId(1), TextRun::new(dvec2(23.0, 0.0), 8.0, "N"), &config);
    let point = resolve_common_point(&bond, &atom).unwrap().unwrap();
    assert_eq!(point.owner, JoinableId(1));
    assert_eq!(point.location, dvec2(23.0, 0.0));
}

// =============================================================================
// Junctions
// =============================================================================

#[test]
fn shared_endpoint_makes_one_junction() {
    let mut arena = JoinableArena::default();
    arena.extend_from_primitives(&[
        Primitive::Line(line(0.0, 0.0, 20.0, 0.0)),
        Primitive::Line(line(20.0, 0.0, 20.0, 20.0)),
    ]);
    let junctions = build_junctions(&mut arena).unwrap();

    assert_eq!(junctions.len(), 1);
    insta::assert_snapshot!(&junctions[0], @"junction#0 (20,0) [joinable#0 joinable#1]");
    for j in arena.iter() {
        assert_eq!(j.junctions(), &[JunctionId(0)]);
    }
}

#[test]
fn star_shares_a_single_junction() {
    let mut arena = JoinableArena::default();
    arena.add_line(line(0.0, 0.0, 20.0, 0.0));
    arena.add_line(line(0.0, 0.0, 0.0, 20.0));
    arena.add_line(line(0.0, 0.0, -20.0, 0.0));
    let junctions = build_junctions(&mut arena).unwrap();

    assert_eq!(junctions.len(), 1);
    assert_eq!(
        junctions[0].members(),
        &[JoinableId(0), JoinableId(1), JoinableId(2)]
    );
}

#[test]
fn disjoint_lines_make_no_junctions() {
    let mut arena = JoinableArena::default();
    arena.add_line(line(0.0, 0.0, 10.0, 0.0));
    arena.add_line(line(50.0, 50.0, 60.0, 50.0));
    assert!(build_junctions(&mut arena).unwrap().is_empty());
}

#[test]
fn unsupported_primitives_are_skipped() {
    let mut arena = JoinableArena::default();
    let circle = Primitive::Circle(Circle {
        center: dvec2(5.0, 5.0),
        radius: 1.0,
    });
    let err = arena.add_primitive(&circle).unwrap_err();
    insta::assert_snapshot!(err, @"unsupported primitive: circle");

    arena.extend_from_primitives(&[circle, Primitive::Line(line(0.0, 0.0, 1.0, 1.0))]);
    assert_eq!(arena.len(), 1);
}

// =============================================================================
// Full pipeline
// =============================================================================

#[test]
fn classified_drawing_to_junctions() {
    let lines = vec![line(0.0, 0.0, 20.0, 0.0), line(20.0, 0.0, 35.0, 0.0)];
    let texts = vec![TextRun::new(dvec2(40.0, 0.0), 10.0, "OH")];

    let classified = classify_lines(&lines, &ClassifyConfig::default());
    assert_eq!(classified.singles.len(), 2);

    let mut arena =
        JoinableArena::from_classified(classified, &texts, JoinConfig::default()).unwrap();
    let junctions = build_junctions(&mut arena).unwrap();

    let summary: Vec<String> = junctions.iter().map(ToString::to_string).collect();
    insta::assert_snapshot!(summary.join("\n"), @r"
    junction#0 (20,0) [joinable#0 joinable#1]
    junction#1 (40,0) [joinable#1 joinable#2]
    ");

    let middle = arena.get(JoinableId(1)).unwrap();
    assert_eq!(middle.junctions(), &[JunctionId(0), JunctionId(1)]);
}

#[test]
fn wedge_and_double_bond_pipeline() {
    let mut lines = wedge(&[10.0, 8.0, 6.0, 4.0]);
    // double bond leaving the narrow end of the wedge
    lines.push(line(8.0, -1.5, 28.0, -1.5));
    lines.push(line(9.0, 1.5, 27.0, 1.5));

    let classified = classify_lines(&lines, &ClassifyConfig::default());
    assert_eq!(classified.sequences.len(), 1);
    assert_eq!(classified.tram_pairs.len(), 1);
    assert!(classified.singles.is_empty());

    let mut arena = JoinableArena::from_classified(classified, &[], JoinConfig::default()).unwrap();
    let junctions = build_junctions(&mut arena).unwrap();
    assert_eq!(junctions.len(), 1);
    assert_eq!(junctions[0].members().len(), 2);
}
