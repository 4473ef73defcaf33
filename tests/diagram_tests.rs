// Diagram generation tests

use nassi::diagram::Branch;
use nassi::program::builders::*;
use nassi::{
    ArrayType, AssignTarget, DiagramConfig, MatchArm, Notation, PrimitiveType, Program,
    RelationalOperator, Statement, Symbol, Value, ValueKind,
};
use pretty_assertions::assert_eq;

fn diagram(statements: Vec<Statement>) -> Symbol {
    Program::new(statements)
        .expect("Program construction failed")
        .to_diagram()
        .into_root()
}

fn diagram_with(statements: Vec<Statement>, config: &DiagramConfig) -> Symbol {
    Program::new(statements)
        .expect("Program construction failed")
        .to_diagram_with(config)
        .into_root()
}

fn imperative(text: &str) -> Symbol {
    Symbol::imperative(text)
}

fn sum_program() -> Vec<Statement> {
    vec![
        Statement::input("n", PrimitiveType::Integer),
        Statement::input("xs", ArrayType::sized_by(PrimitiveType::Integer, "n")),
        Statement::assign("sum", int(0)),
        Statement::assign("i", int(0)),
        Statement::while_loop(
            lt(var("i"), var("n")),
            vec![
                Statement::assign("sum", add(var("sum"), element("xs", var("i")))),
                Statement::assign("i", add(var("i"), int(1))),
            ],
        ),
        Statement::if_then_else(
            gt(var("sum"), int(10)),
            vec![Statement::output("big {sum}")],
            vec![Statement::output("small")],
        ),
    ]
}

#[test]
fn test_plain_diagram() {
    let expected = Symbol::Serial {
        children: vec![
            imperative("Input: n"),
            imperative("Input: xs[n]"),
            imperative("sum := 0"),
            imperative("i := 0"),
            Symbol::PreTestedIteration {
                header: "i < n".to_string(),
                body: Box::new(Symbol::Serial {
                    children: vec![imperative("sum := sum + xs[i]"), imperative("i := i + 1")],
                }),
            },
            Symbol::DyadicSelective {
                condition: "sum > 10?".to_string(),
                yes: Branch::new("yes", imperative("Output: big `sum`")),
                no: Branch::new("no", imperative("Output: small")),
            },
        ],
    };

    assert_eq!(diagram(sum_program()), expected);
}

#[test]
fn test_latex_german_diagram() {
    let root = diagram_with(sum_program(), &DiagramConfig::latex_german());
    let Symbol::Serial { children } = root else {
        panic!("expected a serial root, got {:?}", root);
    };

    assert_eq!(children[0], imperative(r"Eingabe: \texttt{n}"));
    assert_eq!(children[1], imperative(r"Eingabe: \texttt{xs}[\texttt{n}]"));
    assert_eq!(children[2], imperative(r"$\texttt{sum} := 0$"));
    assert_eq!(
        children[4],
        Symbol::PreTestedIteration {
            header: r"$\texttt{i} < \texttt{n}$".to_string(),
            body: Box::new(Symbol::Serial {
                children: vec![
                    imperative(r"$\texttt{sum} := \texttt{sum} + \texttt{xs}[\texttt{i}]$"),
                    imperative(r"$\texttt{i} := \texttt{i} + 1$"),
                ],
            }),
        }
    );
    assert_eq!(
        children[5],
        Symbol::DyadicSelective {
            condition: r"$\texttt{sum} > 10$?".to_string(),
            yes: Branch::new("ja", imperative(r"Ausgabe: big \texttt{sum}")),
            no: Branch::new("nein", imperative("Ausgabe: small")),
        }
    );
}

#[test]
fn test_latex_operators() {
    let config = DiagramConfig {
        notation: Notation::Latex,
        ..DiagramConfig::default()
    };
    let root = diagram_with(
        vec![Statement::assign(
            AssignTarget::element("xs", modulo(var("n_max"), int(2))),
            mul(add(var("a"), float(0.5)), float(2.0)),
        )],
        &config,
    );

    assert_eq!(
        root,
        imperative(
            r"$\texttt{xs}[\texttt{n\_max} \:\texttt{MOD}\: 2] := (\texttt{a} + 0{,}5) \cdot 2$"
        )
    );
}

#[test]
fn test_latex_output_escapes_special_characters() {
    let config = DiagramConfig {
        notation: Notation::Latex,
        ..DiagramConfig::default()
    };
    let root = diagram_with(
        vec![Statement::output(r"Set {1, 2} has {n} items, 50% ^ ~ \ ok")],
        &config,
    );

    assert_eq!(
        root,
        imperative(
            r"Output: Set \{1, 2\} has \texttt{n} items, 50\% \textasciicircum{} \textasciitilde{} \textbackslash{} ok"
        )
    );
}

// === COLLAPSING ===

#[test]
fn test_single_statement_is_not_wrapped() {
    let statement = Statement::output("hello");
    let alone = diagram(vec![statement.clone()]);
    let with_hidden = diagram(vec![Statement::assign("x", int(1)).hidden(), statement]);

    assert_eq!(alone, imperative("Output: hello"));
    assert_eq!(with_hidden, alone);
    assert_eq!(with_hidden.count(), 1);
}

#[test]
fn test_empty_program_is_empty_serial() {
    assert_eq!(diagram(Vec::new()), Symbol::Serial { children: Vec::new() });
    assert_eq!(
        diagram(vec![Statement::output("x").hidden()]),
        Symbol::Serial { children: Vec::new() }
    );
}

#[test]
fn test_hidden_statements_are_dropped_in_nested_blocks() {
    let root = diagram(vec![Statement::endless_loop(vec![
        Statement::assign("i", add(var("i"), int(1))).hidden(),
        Statement::output("{i}"),
        Statement::output("trace").hidden(),
    ])]);

    assert_eq!(
        root,
        Symbol::ContinuousIteration {
            body: Box::new(imperative("Output: `i`")),
        }
    );
}

// === SELECTION ===

#[test]
fn test_if_without_else_is_monadic() {
    let expected = Symbol::MonadicSelective {
        condition: "x ≠ 0?".to_string(),
        branch: Branch::new("yes", imperative("x := 0")),
    };

    let no_else = diagram(vec![Statement::if_then(
        ne(var("x"), int(0)),
        vec![Statement::assign("x", int(0))],
    )]);
    let empty_else = diagram(vec![Statement::if_then_else(
        ne(var("x"), int(0)),
        vec![Statement::assign("x", int(0))],
        Vec::new(),
    )]);

    assert_eq!(no_else, expected);
    assert_eq!(empty_else, expected);
}

#[test]
fn test_else_with_only_hidden_statements_stays_dyadic() {
    let root = diagram(vec![Statement::if_then_else(
        boolean(true),
        vec![Statement::output("a")],
        vec![Statement::output("b").hidden()],
    )]);

    assert_eq!(
        root,
        Symbol::DyadicSelective {
            condition: "true?".to_string(),
            yes: Branch::new("yes", imperative("Output: a")),
            no: Branch::new("no", Symbol::Serial { children: Vec::new() }),
        }
    );
}

#[test]
fn test_match_branch_captions() {
    let root = diagram(vec![Statement::match_on(
        var("grade"),
        vec![
            MatchArm::new(RelationalOperator::LessThan, int(40), vec![Statement::output("a")]),
            MatchArm::new(
                RelationalOperator::GreaterOrEqual,
                mul(int(2), int(20)),
                vec![Statement::output("b"), Statement::output("c")],
            ),
        ],
    )]);

    assert_eq!(
        root,
        Symbol::MultipleExclusiveSelective {
            discriminant: "grade".to_string(),
            branches: vec![
                Branch::new("< 40", imperative("Output: a")),
                Branch::new(
                    "≥ 2 · 20",
                    Symbol::Serial {
                        children: vec![imperative("Output: b"), imperative("Output: c")],
                    },
                ),
            ],
        }
    );
}

// === ITERATION ===

#[test]
fn test_loops_and_termination() {
    let root = diagram(vec![
        Statement::labeled_while(
            "outer",
            le(var("i"), int(3)),
            vec![Statement::labeled_do_while(
                "inner",
                vec![Statement::break_to("outer")],
                eq(var("j"), int(0)),
            )],
        ),
        Statement::labeled_loop("forever", vec![Statement::break_to("forever")]),
    ]);

    assert_eq!(
        root,
        Symbol::Serial {
            children: vec![
                Symbol::PreTestedIteration {
                    header: "outer: i ≤ 3".to_string(),
                    body: Box::new(Symbol::PostTestedIteration {
                        footer: "inner: j = 0".to_string(),
                        body: Box::new(Symbol::Termination {
                            label: "outer".to_string(),
                        }),
                    }),
                },
                Symbol::ContinuousIteration {
                    body: Box::new(Symbol::Termination {
                        label: "forever".to_string(),
                    }),
                },
            ],
        }
    );
}

#[test]
fn test_documented_block_caption() {
    let statements = vec![Statement::documented(
        "read_input",
        vec![Statement::input("n", PrimitiveType::Float)],
    )];

    assert_eq!(
        diagram(statements.clone()),
        Symbol::Block {
            caption: "read_input".to_string(),
            body: Box::new(imperative("Input: n")),
        }
    );

    let config = DiagramConfig {
        notation: Notation::Latex,
        ..DiagramConfig::default()
    };
    assert_eq!(
        diagram_with(statements, &config),
        Symbol::Block {
            caption: r"read\_input".to_string(),
            body: Box::new(imperative(r"Input: \texttt{n}")),
        }
    );
}

#[test]
fn test_diagram_does_not_execute() {
    // A break with no enclosing loop fails at run time but draws fine
    let root = diagram(vec![
        Statement::input("xs", ArrayType::fixed(PrimitiveType::Boolean, 4)),
        Statement::break_to("nowhere"),
    ]);

    assert_eq!(root.count(), 2);
    assert_eq!(
        root,
        Symbol::Serial {
            children: vec![
                imperative("Input: xs[4]"),
                Symbol::Termination {
                    label: "nowhere".to_string(),
                },
            ],
        }
    );
}

// === SERIALIZATION ===

#[test]
fn test_symbol_json_shape() {
    let json = serde_json::to_value(imperative("x := 1")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "symbol": "imperative", "text": "x := 1" })
    );

    let json = serde_json::to_value(Symbol::Termination {
        label: "L".to_string(),
    })
    .unwrap();
    assert_eq!(json, serde_json::json!({ "symbol": "termination", "label": "L" }));
}

#[test]
fn test_diagram_json_round_trip() {
    let diagram = Program::new(sum_program()).unwrap().to_diagram();
    let json = serde_json::to_string(&diagram).unwrap();
    let back: nassi::Diagram = serde_json::from_str(&json).unwrap();
    assert_eq!(back, diagram);
}

#[test]
fn test_config_from_json() {
    let config: DiagramConfig = serde_json::from_str(r#"{ "notation": "latex" }"#).unwrap();
    assert_eq!(config.notation, Notation::Latex);
    assert_eq!(config.labels, nassi::diagram::ENGLISH_LABELS);

    let config: DiagramConfig = serde_json::from_str(
        r#"{
            "notation": "latex",
            "labels": { "input": "Eingabe", "output": "Ausgabe", "yes": "ja", "no": "nein" }
        }"#,
    )
    .unwrap();
    assert_eq!(config, DiagramConfig::latex_german());

    let config: DiagramConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, DiagramConfig::default());
}

#[test]
fn test_value_json_round_trip() {
    let value = Value::Array(vec![
        Value::Integer(-3),
        Value::Float(0.5),
        Value::Array(vec![Value::Boolean(true)]),
    ]);

    assert_eq!(
        serde_json::to_value(&value).unwrap(),
        serde_json::json!({
            "Array": [{ "Integer": -3 }, { "Float": 0.5 }, { "Array": [{ "Boolean": true }] }]
        })
    );

    let back: Value = serde_json::from_str(&serde_json::to_string(&value).unwrap()).unwrap();
    assert_eq!(back, value);

    let kind: ValueKind = serde_json::from_str(r#""Float""#).unwrap();
    assert_eq!(kind, ValueKind::Float);
    assert_eq!(serde_json::to_string(&back.kind()).unwrap(), r#""Array""#);
}
