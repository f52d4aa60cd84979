//! End-to-end parsing of puzzle-shaped inputs through the public API

use aoc_utils::error::ParseError;
use aoc_utils::parser::{Parser, ParserRegistry, Template, arr, int, named, one_of, tuple, vec};
use aoc_utils::{Grid, SparseGrid, Vec3, vec2, vec3};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn bricks_from_template_lines() {
    init_logger();
    let registry = ParserRegistry::builder().with_builtins().build();
    let brick = Template::compile(&registry, "${start|vec3}~${end|vec3}").unwrap();

    let input = "1,0,1~1,2,1\n0,0,2~2,0,2\n0,2,3~2,2,3";
    let bricks: Vec<(Vec3, Vec3)> = input
        .lines()
        .map(|line| {
            let record = brick.parse(line)?;
            Ok((record.field("start")?, record.field("end")?))
        })
        .collect::<Result<_, ParseError>>()
        .unwrap();

    assert_eq!(bricks.len(), 3);
    assert_eq!(bricks[0], (vec3(1, 0, 1), vec3(1, 2, 1)));
    assert_eq!(bricks[2].1, vec3(2, 2, 3));
}

#[test]
fn instructions_with_custom_enum_type() {
    init_logger();
    let registry = ParserRegistry::builder()
        .with_builtins()
        .register("turn", one_of(["L", "R"]))
        .unwrap()
        .build();
    let step = Template::compile(&registry, "${turn|turn}${steps|int}").err();

    // Adjacent slots have no literal to split on
    assert!(matches!(step, Some(ParseError::TemplateSyntax(_))));

    let rotations = arr(tuple((one_of(["L", "R"]), int())).map(|(turn, n)| {
        if turn == "L" { -n } else { n }
    }));
    let moves = rotations.parse("L 68\nR 48\nL 5").unwrap();
    assert_eq!(moves, vec![-68, 48, -5]);
}

#[test]
fn robots_with_typed_builder() {
    init_logger();
    let robot = Template::builder()
        .literal("p=")
        .slot(named("p", vec()))
        .literal(" v=")
        .slot(named("v", vec()))
        .build()
        .unwrap();

    let moved: Vec<_> = "p=0,4 v=3,-3\np=6,3 v=-1,-3"
        .lines()
        .map(|line| robot.parse(line).unwrap())
        .map(|record| {
            let p: aoc_utils::Vec2 = record.field("p").unwrap();
            let v: aoc_utils::Vec2 = record.field("v").unwrap();
            p + v
        })
        .collect();
    assert_eq!(moved, vec![vec2(3, 1), vec2(5, 0)]);
}

#[test]
fn grids_from_text() {
    init_logger();
    let dense = Grid::parse("#..\n.#.\n..#").unwrap();
    let diagonal = dense.iter().filter(|cell| *cell.value == '#').count();
    assert_eq!(diagonal, 3);
    assert_eq!(dense.rotate_cw().to_string(), "..#\n.#.\n#..");

    assert!(Grid::parse("ab\nc").is_err());

    let sparse = SparseGrid::parse("ab\nc");
    assert_eq!(sparse.len(), 3);
    assert_eq!(sparse.get(vec2(0, 1)), Some(&'c'));
    assert_eq!(sparse.get(vec2(1, 1)), None);
}
