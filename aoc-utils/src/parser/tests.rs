//! Tests for the parser combinators, registry and templates.

use super::*;
use crate::error::RegistrationError;
use crate::vec::{self as coords, Vec2, vec2};

fn builtins() -> ParserRegistry {
    ParserRegistry::builder().with_builtins().build()
}

#[test]
fn test_int_trims_and_rejects_garbage() {
    assert_eq!(int().parse(" -17 ").unwrap(), -17);
    assert!(matches!(
        int().parse("12a"),
        Err(ParseError::InvalidInt { ref input, .. }) if input == "12a"
    ));
    assert!(int().parse("").is_err());
}

#[test]
fn test_vectors_use_detected_separator() {
    assert_eq!(vec().parse("3,4").unwrap(), vec2(3, 4));
    assert_eq!(vec().parse("3 -> 4").unwrap(), vec2(3, 4));
    assert_eq!(vec().parse("1, -2").unwrap(), vec2(1, -2));
    assert_eq!(vec().parse("-3,4").unwrap(), vec2(-3, 4));
    assert_eq!(vec3().parse("1,0,1").unwrap(), coords::vec3(1, 0, 1));
}

#[test]
fn test_vector_errors() {
    assert_eq!(
        vec().parse("34").unwrap_err(),
        ParseError::NoSeparator {
            kind: "vec",
            input: "34".to_string()
        }
    );
    assert_eq!(
        vec().parse("1,2,3").unwrap_err(),
        ParseError::Arity {
            kind: "vec",
            expected: 2,
            actual: 3,
            input: "1,2,3".to_string()
        }
    );
    assert!(matches!(
        vec3().parse("1 2"),
        Err(ParseError::Arity {
            expected: 3,
            actual: 2,
            ..
        })
    ));
}

#[test]
fn test_arr() {
    assert_eq!(arr(int()).parse("1,2,3").unwrap(), vec![1, 2, 3]);
    assert_eq!(arr(int()).parse("1 2  3").unwrap(), vec![1, 2, 3]);
    assert_eq!(arr(int()).parse("7").unwrap(), vec![7]);
    assert!(arr(int()).parse("").unwrap().is_empty());

    let points = arr(vec()).parse("1,2\n3,4").unwrap();
    assert_eq!(points, vec![vec2(1, 2), vec2(3, 4)]);

    let nested = arr(arr(int())).parse("1 2\n3 4 5").unwrap();
    assert_eq!(nested, vec![vec![1, 2], vec![3, 4, 5]]);
}

#[test]
fn test_arr_lone_negative_needs_explicit_separator() {
    // Auto detection picks "-" and drops the empty leading part
    assert_eq!(arr(int()).parse("-5").unwrap(), vec![5]);
    assert_eq!(arr_sep(int(), ",").parse("-5").unwrap(), vec![-5]);
    assert_eq!(arr(int()).parse("-5,3").unwrap(), vec![-5, 3]);
}

#[test]
fn test_vec3_parser_builds_coordinates() {
    let parsed: crate::vec::Vec3 = vec3().parse("-1 2 3").unwrap();
    assert_eq!(parsed, coords::vec3(-1, 2, 3));
}

#[test]
fn test_arr_with_explicit_separator() {
    let semi = arr_sep(int(), Separator::regex(r"\s*;\s*").unwrap());
    assert_eq!(semi.parse("1 ; 2;3").unwrap(), vec![1, 2, 3]);

    let pipes = arr_sep(str(), "|");
    assert_eq!(pipes.parse("a|b c|d").unwrap(), vec!["a", "b c", "d"]);
}

#[test]
fn test_tuple() {
    let (name, count) = tuple((str(), int())).parse("abc 5").unwrap();
    assert_eq!(name, "abc");
    assert_eq!(count, 5);

    let (a, b, label) = tuple((int(), int(), str())).parse("1,2,x").unwrap();
    assert_eq!((a, b, label.as_str()), (1, 2, "x"));

    let (from, to) = tuple_sep((vec(), vec()), " -> ").parse("0,9 -> 5,9").unwrap();
    assert_eq!((from, to), (vec2(0, 9), vec2(5, 9)));
}

#[test]
fn test_tuple_arity_is_checked() {
    assert!(matches!(
        tuple((int(), int(), str())).parse("1,2"),
        Err(ParseError::Arity {
            expected: 3,
            actual: 2,
            ..
        })
    ));
    assert!(matches!(
        tuple((str(), int())).parse("abc"),
        Err(ParseError::Arity {
            expected: 2,
            actual: 1,
            ..
        })
    ));
}

#[test]
fn test_one_of() {
    let dir = one_of(["U", "D", "L", "R"]);
    assert_eq!(dir.parse("L").unwrap(), "L");
    assert_eq!(
        dir.parse("X").unwrap_err(),
        ParseError::InvalidEnum {
            value: "X".to_string(),
            allowed: vec!["U".into(), "D".into(), "L".into(), "R".into()],
        }
    );
}

#[test]
fn test_map_and_try_map() {
    assert_eq!(int().map(|n| n * 2).parse("21").unwrap(), 42);

    let positive = int().try_map(|n| {
        u32::try_from(n).map_err(|_| ParseError::Custom(format!("{n} is negative")))
    });
    assert_eq!(positive.parse("9").unwrap(), 9);
    assert_eq!(
        positive.parse("-1").unwrap_err(),
        ParseError::Custom("-1 is negative".to_string())
    );
    // Inner errors pass through untouched
    assert!(matches!(
        positive.parse("x"),
        Err(ParseError::InvalidInt { .. })
    ));

    let len = from_fn(|s: &str| Ok::<_, ParseError>(s.len()));
    assert_eq!(len.parse("abc").unwrap(), 3);
}

#[test]
fn test_parsers_through_references() {
    let boxed: Box<dyn Parser<Output = i64>> = Box::new(int());
    assert_eq!(boxed.parse("5").unwrap(), 5);
    assert_eq!(arr(&boxed).parse("1,2").unwrap(), vec![1, 2]);
}

#[test]
fn test_registry_builtins() {
    let registry = builtins();
    assert_eq!(registry.names(), vec!["int", "str", "vec", "vec3"]);
    assert!(registry.contains("vec3"));
    assert!(!registry.contains("int[]"));

    assert_eq!(registry.parse("int", "42").unwrap(), Value::Int(42));
    assert_eq!(registry.parse("vec", "3,4").unwrap(), Value::Vec2(vec2(3, 4)));
    assert_eq!(
        registry.parse("dir", "U").unwrap_err(),
        ParseError::UnknownType("dir".to_string())
    );
}

#[test]
fn test_registry_composite_types() {
    let registry = builtins();

    let list = registry.parse("int[]", "1,2").unwrap();
    assert_eq!(list, Value::List(vec![Value::Int(1), Value::Int(2)]));

    let pair: (i64, String) = registry.parse("(int,str)", "5 abc").unwrap().try_into().unwrap();
    assert_eq!(pair, (5, "abc".to_string()));

    let pairs: Vec<(String, i64)> = registry
        .parse("(str,int)[]", "a 1\nb 2")
        .unwrap()
        .try_into()
        .unwrap();
    assert_eq!(pairs, vec![("a".to_string(), 1), ("b".to_string(), 2)]);

    assert_eq!(
        registry.parse("(int,dir)", "1,U").unwrap_err(),
        ParseError::UnknownType("dir".to_string())
    );
    assert!(matches!(
        registry.parse("(int,int)", "1,2,3"),
        Err(ParseError::Arity {
            expected: 2,
            actual: 3,
            ..
        })
    ));
}

#[test]
fn test_registration_errors() {
    let duplicate = ParserRegistry::builder().with_builtins().register("int", int()).err();
    assert_eq!(
        duplicate,
        Some(RegistrationError::DuplicateParser("int".to_string()))
    );

    let spaced = ParserRegistry::builder().register("two words", str()).err();
    assert_eq!(
        spaced,
        Some(RegistrationError::InvalidName("two words".to_string()))
    );

    let array = ParserRegistry::builder().register("x[]", str()).err();
    assert!(matches!(array, Some(RegistrationError::InvalidName(_))));
}

#[test]
fn test_registered_parser_in_template() {
    let registry = ParserRegistry::builder()
        .with_builtins()
        .register("dir", one_of(["U", "D", "L", "R"]))
        .unwrap()
        .register("color", str().map(|s: String| s.trim_start_matches('#').to_string()))
        .unwrap()
        .build();

    let step = Template::compile(&registry, "${dir|dir} ${len|int} (${color|color})").unwrap();
    let record = step.parse("R 6 (#70c710)").unwrap();
    assert_eq!(record.field::<String>("dir").unwrap(), "R");
    assert_eq!(record.field::<i64>("len").unwrap(), 6);
    assert_eq!(record.field::<String>("color").unwrap(), "70c710");

    assert!(matches!(
        step.parse("X 6 (#70c710)"),
        Err(ParseError::InvalidEnum { .. })
    ));
}

#[test]
fn test_template_with_vec3_slots() {
    let brick = Template::compile(&builtins(), "${start|vec3}~${end|vec3}").unwrap();
    let record = brick.parse("1,0,1~1,2,1").unwrap();
    assert_eq!(record.field::<crate::vec::Vec3>("start").unwrap(), coords::vec3(1, 0, 1));
    assert_eq!(record.field::<crate::vec::Vec3>("end").unwrap(), coords::vec3(1, 2, 1));
    assert_eq!(brick.field_names().collect::<Vec<_>>(), vec!["start", "end"]);
}

#[test]
fn test_template_list_slot() {
    let tower = Template::compile(
        &builtins(),
        "${name|str} (${weight|int}) -> ${children|str[]}",
    )
    .unwrap();
    let record = tower.parse("fwft (72) -> ktlj, cntj, xhth").unwrap();
    assert_eq!(record.field::<String>("name").unwrap(), "fwft");
    assert_eq!(record.field::<i64>("weight").unwrap(), 72);
    assert_eq!(
        record.field::<Vec<String>>("children").unwrap(),
        vec!["ktlj", "cntj", "xhth"]
    );
}

#[test]
fn test_template_missing_literals() {
    let moves = Template::compile(&builtins(), "move ${n|int} from ${from|int}").unwrap();

    assert_eq!(
        moves.parse("go 3 from 1").unwrap_err(),
        ParseError::MissingLiteral {
            literal: "move ".to_string(),
            input: "go 3 from 1".to_string(),
        }
    );
    assert!(matches!(
        moves.parse("move 3 to 1"),
        Err(ParseError::MissingLiteral { ref literal, .. }) if literal == " from "
    ));
    assert!(matches!(
        moves.parse("move x from 1"),
        Err(ParseError::InvalidInt { .. })
    ));
}

#[test]
fn test_template_ignores_text_after_final_literal() {
    let head = Template::compile(&builtins(), "${x|int},").unwrap();
    let record = head.parse("5,rest of line").unwrap();
    assert_eq!(record.len(), 1);
    assert_eq!(record.field::<i64>("x").unwrap(), 5);
}

#[test]
fn test_template_syntax_errors() {
    let registry = builtins();
    for source in ["${a|int}${b|int}", "${a}", "${a|int", "${a|int} ${a|int}", "${|int}"] {
        assert!(
            matches!(
                Template::compile(&registry, source),
                Err(ParseError::TemplateSyntax(_))
            ),
            "{source} should not compile"
        );
    }
    assert_eq!(
        Template::compile(&registry, "${a|nope}").unwrap_err(),
        ParseError::UnknownType("nope".to_string())
    );
}

#[test]
fn test_template_builder() {
    let template = Template::builder()
        .literal("p=")
        .slot(named("p", vec()))
        .literal(" v=")
        .slot(named("v", vec()))
        .build()
        .unwrap();
    let record = template.parse("p=0,4 v=3,-3").unwrap();
    assert_eq!(record.field::<Vec2>("p").unwrap(), vec2(0, 4));
    assert_eq!(record.field::<Vec2>("v").unwrap(), vec2(3, -3));

    let adjacent = Template::builder()
        .slot(named("a", int()))
        .slot(named("b", int()))
        .build();
    assert!(matches!(adjacent, Err(ParseError::TemplateSyntax(_))));
}

#[test]
fn test_record_field_type_mismatch() {
    let record = Template::compile(&builtins(), "${n|int}").unwrap().parse("4").unwrap();
    assert_eq!(
        record.field::<Vec2>("n").unwrap_err(),
        ParseError::TypeMismatch {
            expected: "vec",
            found: "int"
        }
    );
    assert_eq!(
        record.field::<i64>("m").unwrap_err(),
        ParseError::MissingField("m".to_string())
    );
}
