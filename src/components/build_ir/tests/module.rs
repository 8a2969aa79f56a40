mod common;

use build_ir::{BuildErrorKind, BuildOptions, SymbolScope};
use common::*;
use diagnostics::{DiagnosticFlags, Diagnostics};
use indoc::indoc;
use pretty_assertions::assert_eq;
use primitives::{BinaryOp, ConversionOp, IntPred};
use source_files::SourceFiles;

#[test]
fn test_round_trip() {
    let module = ast::Module {
        type_defs: vec![type_def(
            "Node",
            structure(vec![ptr(named("Node")), int(32)]),
        )],
        globals: vec![global_def(
            "head",
            ptr(named("Node")),
            Some(null(ptr(named("Node")))),
        )],
        funcs: vec![
            declare("puts", int(32), vec![ptr(int(8))]),
            func(
                "main",
                int(32),
                vec![param("argc", int(32))],
                vec![
                    block(
                        "entry",
                        vec![
                            ast::InstrKind::Binary {
                                op: BinaryOp::Add,
                                x: local("argc"),
                                y: int_value(32, 1),
                            }
                            .named("sum", here()),
                            ast::InstrKind::ICmp {
                                pred: IntPred::Sgt.to_string(),
                                x: local("sum"),
                                y: int_value(32, 10),
                            }
                            .named("big", here()),
                        ],
                        ast::TermKind::CondBr {
                            cond: local("big"),
                            true_target: label("yes"),
                            false_target: label("no"),
                        },
                    ),
                    block("yes", vec![], ret(local("sum"))),
                    block("no", vec![], ret(int_value(32, 0))),
                ],
            ),
        ],
    };

    let built = build(&module);
    assert!(built.errors.is_empty(), "{:?}", built.errors);

    assert_eq!(
        built.module.to_string(),
        indoc! {"
            %Node = type { %Node*, i32 }

            @head = global %Node* null

            declare i32 @puts(i8*)

            define i32 @main(i32 %argc) {
            entry:
              %sum = add i32 %argc, 1
              %big = icmp sgt i32 %sum, 10
              br i1 %big, label %yes, label %no

            yes:
              ret i32 %sum

            no:
              ret i32 0
            }
        "}
    );
}

#[test]
fn test_self_referential_struct() {
    let module = ast::Module {
        type_defs: vec![type_def("T", structure(vec![ptr(named("T"))]))],
        globals: vec![global_def("g", ptr(named("T")), Some(null(ptr(named("T")))))],
        funcs: vec![func(
            "f",
            void(),
            vec![],
            vec![block(
                "entry",
                vec![
                    ast::InstrKind::Alloca {
                        elem: named("T"),
                        count: None,
                    }
                    .named("p", here()),
                ],
                ret_void(),
            )],
        )],
    };

    let built = build(&module);
    assert!(built.errors.is_empty(), "{:?}", built.errors);
    assert_eq!(instr_type(&built, "f", 0), "%T*");

    let g = built.module.find_global("g").expect("global exists");
    assert_eq!(
        built.module.globals[g].ty().display(&built.module).to_string(),
        "%T**"
    );
}

#[test]
fn test_forward_references_between_globals_and_funcs() {
    let module = ast::Module {
        type_defs: vec![],
        globals: vec![
            global_def("first", ptr(ptr(int(32))), Some(global_ref(ptr(ptr(int(32))), "second"))),
            global_def("second", ptr(int(32)), Some(null(ptr(int(32))))),
        ],
        funcs: vec![
            func(
                "caller",
                void(),
                vec![],
                vec![block(
                    "entry",
                    vec![
                        ast::InstrKind::Call {
                            return_type: void(),
                            callee: global("callee"),
                            args: vec![],
                        }
                        .at(here()),
                    ],
                    ret_void(),
                )],
            ),
            func("callee", void(), vec![], vec![block("entry", vec![], ret_void())]),
        ],
    };

    let built = build(&module);
    assert!(built.errors.is_empty(), "{:?}", built.errors);

    assert_eq!(
        built.module.to_string(),
        indoc! {"
            @first = global i32** @second
            @second = global i32* null

            define void @caller() {
            entry:
              call void @callee()
              ret void
            }

            define void @callee() {
            entry:
              ret void
            }
        "}
    );
}

#[test]
fn test_duplicate_symbol() {
    let mut first = global_def("x", int(32), Some(int_const(32, 1)));
    first.source = line(1);
    let mut second = global_def("x", int(64), Some(int_const(64, 2)));
    second.source = line(2);

    let module = ast::Module {
        type_defs: vec![],
        globals: vec![first, second],
        funcs: vec![func("ok", void(), vec![], vec![block("entry", vec![], ret_void())])],
    };

    let built = build(&module);
    assert_eq!(built.errors.len(), 1);

    let error = &built.errors[0];
    assert_eq!(error.source.location.line, 2);

    match &error.kind {
        BuildErrorKind::DuplicateSymbol {
            name,
            scope,
            previous,
        } => {
            assert_eq!(name, "x");
            assert_eq!(*scope, SymbolScope::Global);
            assert_eq!(previous.location.line, 1);
        }
        kind => panic!("unexpected error {:?}", kind),
    }

    let x = built.module.find_global("x").expect("first declaration kept");
    assert_eq!(built.module.globals[x].content_type, ir::Type::Integer(32));

    let ok = built.module.find_func("ok").expect("function resolved");
    assert!(!built.module.funcs[ok].is_declaration());
}

#[test]
fn test_globals_and_funcs_share_namespace() {
    let module = ast::Module {
        type_defs: vec![],
        globals: vec![global_def("main", int(32), None)],
        funcs: vec![func("main", void(), vec![], vec![block("entry", vec![], ret_void())])],
    };

    let built = build(&module);
    assert!(matches!(
        error_kinds(&built)[..],
        [BuildErrorKind::DuplicateSymbol { .. }]
    ));
    assert!(built.module.funcs.is_empty());
}

#[test]
fn test_unknown_type() {
    let module = ast::Module {
        type_defs: vec![],
        globals: vec![
            global_def("bad", ptr(named("Missing")), None),
            global_def("good", int(8), Some(int_const(8, 0))),
        ],
        funcs: vec![],
    };

    let built = build(&module);

    assert!(matches!(
        error_kinds(&built)[..],
        [BuildErrorKind::UnknownType { name }] if name == "Missing"
    ));

    let good = built.module.find_global("good").expect("global exists");
    assert!(built.module.globals[good].init.is_some());
}

#[test]
fn test_alias_cycle() {
    let module = ast::Module {
        type_defs: vec![
            type_def("A", named("B")),
            type_def("B", named("A")),
            type_def("C", ptr(named("C"))),
        ],
        globals: vec![],
        funcs: vec![],
    };

    let built = build(&module);
    let cyclic = error_kinds(&built)
        .into_iter()
        .filter(|kind| kind.is_cyclic_type_definition())
        .count();

    assert_eq!(cyclic, 2);
    assert_eq!(built.errors.len(), 2);
}

#[test]
fn test_initializer_type_is_authoritative() {
    let module = ast::Module {
        type_defs: vec![],
        globals: vec![global_def("g", int(64), Some(int_const(32, 5)))],
        funcs: vec![],
    };

    let built = build(&module);
    assert!(matches!(
        error_kinds(&built)[..],
        [BuildErrorKind::OperandTypeMismatch { .. }]
    ));

    let g = built.module.find_global("g").expect("global exists");
    assert_eq!(built.module.globals[g].content_type, ir::Type::Integer(32));
}

#[test]
fn test_parallel_matches_sequential() {
    let funcs = (0..8)
        .map(|i| {
            let x = if i % 3 == 0 {
                local("missing")
            } else {
                local("a")
            };

            func(
                &format!("f{}", i),
                int(32),
                vec![param("a", int(32))],
                vec![block(
                    "entry",
                    vec![
                        ast::InstrKind::Binary {
                            op: BinaryOp::Mul,
                            x,
                            y: int_value(32, i),
                        }
                        .named("r", here()),
                    ],
                    ret(local("r")),
                )],
            )
        })
        .collect();

    let module = ast::Module {
        type_defs: vec![],
        globals: vec![],
        funcs,
    };

    let sequential = build(&module);
    let parallel = build_ir::build(
        &module,
        &BuildOptions {
            parallel_bodies: true,
            ..Default::default()
        },
    );

    let messages = |built: &build_ir::Built| {
        built
            .errors
            .iter()
            .map(|error| error.kind.to_string())
            .collect::<Vec<_>>()
    };

    assert_eq!(messages(&sequential).len(), 3);
    assert_eq!(messages(&sequential), messages(&parallel));
    assert_eq!(sequential.module.to_string(), parallel.module.to_string());
}

#[test]
fn test_report_into_diagnostics() {
    let module = ast::Module {
        type_defs: vec![],
        globals: vec![global_def("g", named("Nope"), None)],
        funcs: vec![],
    };

    let built = build(&module);
    let source_files = SourceFiles::new();
    let mut diagnostics = Diagnostics::new(&source_files, DiagnosticFlags::default());
    built.report(&mut diagnostics);

    assert!(built.has_errors());
    assert_eq!(diagnostics.num_errors(), 1);
}

#[test]
fn test_opaque_type() {
    let module = ast::Module {
        type_defs: vec![ast::TypeDef {
            name: "O".into(),
            def: None,
            source: here(),
        }],
        globals: vec![global_def(
            "p",
            ptr(named("O")),
            Some(null(ptr(named("O")))),
        )],
        funcs: vec![],
    };

    let built = build(&module);
    assert!(built.errors.is_empty(), "{:?}", built.errors);

    assert_eq!(
        built.module.to_string(),
        indoc! {"
            %O = type opaque

            @p = global %O* null
        "}
    );
}

fn const_expr(ty: ast::Type, expr: ast::ConstExpr) -> ast::Constant {
    ast::ConstantKind::Expr(Box::new(expr)).at(ty, here())
}

#[test]
fn test_constant_expressions() {
    let module = ast::Module {
        type_defs: vec![],
        globals: vec![
            global_def("x", int(32), Some(int_const(32, 0))),
            global_def("arr", array(2, int(32)), Some(zero(array(2, int(32))))),
            global_def(
                "addr",
                int(64),
                Some(const_expr(
                    int(64),
                    ast::ConstExpr::Conversion {
                        op: ConversionOp::PtrToInt,
                        from: global_ref(ptr(int(32)), "x"),
                        to: int(64),
                    },
                )),
            ),
            global_def(
                "second",
                ptr(int(32)),
                Some(const_expr(
                    ptr(int(32)),
                    ast::ConstExpr::GetElementPtr {
                        elem: array(2, int(32)),
                        src: global_ref(ptr(array(2, int(32))), "arr"),
                        indices: vec![int_const(64, 0), int_const(64, 1)],
                        in_bounds: true,
                    },
                )),
            ),
        ],
        funcs: vec![],
    };

    let built = build(&module);
    assert!(built.errors.is_empty(), "{:?}", built.errors);

    let content_type = |name: &str| {
        let global = built.module.find_global(name).expect("global exists");
        built.module.globals[global]
            .content_type
            .display(&built.module)
            .to_string()
    };

    assert_eq!(content_type("addr"), "i64");
    assert_eq!(content_type("second"), "i32*");
}

#[test]
fn test_aggregate_constant_checks() {
    let pair = structure(vec![int(32), int(32)]);

    let too_few_fields = ast::Module {
        type_defs: vec![],
        globals: vec![global_def(
            "s",
            pair.clone(),
            Some(ast::ConstantKind::Struct(vec![int_const(32, 1)]).at(pair, here())),
        )],
        funcs: vec![],
    };

    let built = build(&too_few_fields);
    assert!(matches!(
        error_kinds(&built)[..],
        [BuildErrorKind::InvalidConstant { .. }]
    ));

    let wrong_element = ast::Module {
        type_defs: vec![],
        globals: vec![global_def(
            "a",
            array(2, int(32)),
            Some(
                ast::ConstantKind::Array(vec![int_const(32, 1), int_const(64, 2)])
                    .at(array(2, int(32)), here()),
            ),
        )],
        funcs: vec![],
    };

    let built = build(&wrong_element);
    assert!(matches!(
        error_kinds(&built)[..],
        [BuildErrorKind::OperandTypeMismatch { .. }]
    ));
}

#[test]
fn test_content_type_follows_referenced_initializer() {
    let module = ast::Module {
        type_defs: vec![],
        globals: vec![
            global_def("a", ptr(int(32)), Some(global_ref(ptr(int(32)), "b"))),
            global_def("b", int(32), Some(int_const(64, 5))),
        ],
        funcs: vec![],
    };

    let built = build(&module);
    assert!(matches!(
        error_kinds(&built)[..],
        [BuildErrorKind::OperandTypeMismatch { .. }]
    ));

    let module = &built.module;
    let a = module.find_global("a").expect("global exists");
    let b = module.find_global("b").expect("global exists");
    assert_eq!(module.globals[b].content_type, ir::Type::Integer(64));
    assert_eq!(module.globals[a].content_type, module.globals[b].ty());
}
