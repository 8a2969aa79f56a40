mod common;

use build_ir::{BuildErrorKind, BuildOptions, SymbolScope};
use common::*;
use diagnostics::Severity;
use indoc::indoc;
use ir::{BlockRef, ParamRef};
use pretty_assertions::assert_eq;
use primitives::{BinaryOp, ConversionOp};

fn single_func(func: ast::Func) -> ast::Module {
    ast::Module {
        type_defs: vec![],
        globals: vec![],
        funcs: vec![func],
    }
}

fn add(name: &str, x: ast::Value, y: ast::Value) -> ast::Instr {
    ast::InstrKind::Binary {
        op: BinaryOp::Add,
        x,
        y,
    }
    .named(name, here())
}

#[test]
fn test_forward_branch() {
    let module = single_func(func(
        "f",
        int(32),
        vec![param("a", int(32))],
        vec![
            block("entry", vec![], ast::TermKind::Br(label("next"))),
            block("next", vec![], ret(local("a"))),
        ],
    ));

    let built = build(&module);
    assert!(built.errors.is_empty(), "{:?}", built.errors);

    let f = &built.module.funcs[built.module.find_func("f").expect("function exists")];
    assert!(matches!(f.blocks[0].term.kind, ir::TermKind::Br(BlockRef(1))));
    assert_eq!(f.blocks[0].term.kind.successors(), [BlockRef(1)]);
    assert!(matches!(
        f.blocks[1].term.kind,
        ir::TermKind::Ret(Some(ir::Value::Param(ParamRef(0))))
    ));
}

#[test]
fn test_binary_operand_mismatch() {
    let module = single_func(func(
        "f",
        int(32),
        vec![param("a", int(32)), param("b", int(64))],
        vec![block(
            "entry",
            vec![add("x", local("a"), local("b"))],
            ret(local("x")),
        )],
    ));

    let built = build(&module);
    assert!(matches!(
        error_kinds(&built)[..],
        [BuildErrorKind::OperandTypeMismatch { .. }]
    ));
    assert_eq!(instr_type(&built, "f", 0), "i32");
}

fn load_mismatch_module() -> ast::Module {
    single_func(func(
        "f",
        void(),
        vec![],
        vec![block(
            "entry",
            vec![
                ast::InstrKind::Alloca {
                    elem: int(32),
                    count: None,
                }
                .named("p", here()),
                ast::InstrKind::Load {
                    elem: int(64),
                    src: local("p"),
                }
                .named("v", here()),
            ],
            ret_void(),
        )],
    ))
}

#[test]
fn test_load_element_mismatch() {
    let built = build(&load_mismatch_module());

    match &error_kinds(&built)[..] {
        [BuildErrorKind::OperandTypeMismatch {
            expected, found, ..
        }] => {
            assert_eq!(expected, "i64");
            assert_eq!(found, "i32");
        }
        kinds => panic!("unexpected errors {:?}", kinds),
    }

    assert_eq!(instr_type(&built, "f", 1), "i32");
}

#[test]
fn test_load_element_mismatch_as_warning() {
    let built = build_ir::build(
        &load_mismatch_module(),
        &BuildOptions {
            load_element_mismatch: Severity::Warning,
            ..Default::default()
        },
    );

    assert_eq!(built.errors.len(), 1);
    assert!(!built.has_errors());
}

#[test]
fn test_phi_breaks_forward_reference_cycle() {
    let module = single_func(func(
        "count",
        int(32),
        vec![param("n", int(32))],
        vec![
            block("entry", vec![], ast::TermKind::Br(label("loop"))),
            block(
                "loop",
                vec![
                    ast::InstrKind::Phi {
                        ty: int(32),
                        incoming: vec![
                            ast::PhiIncoming {
                                value: int_value(32, 0),
                                pred: label("entry"),
                            },
                            ast::PhiIncoming {
                                value: local("next"),
                                pred: label("loop"),
                            },
                        ],
                    }
                    .named("i", here()),
                    add("next", local("i"), int_value(32, 1)),
                    ast::InstrKind::ICmp {
                        pred: "eq".into(),
                        x: local("next"),
                        y: local("n"),
                    }
                    .named("done", here()),
                ],
                ast::TermKind::CondBr {
                    cond: local("done"),
                    true_target: label("exit"),
                    false_target: label("loop"),
                },
            ),
            block("exit", vec![], ret(local("next"))),
        ],
    ));

    let built = build(&module);
    assert!(built.errors.is_empty(), "{:?}", built.errors);

    assert_eq!(
        built.module.to_string(),
        indoc! {"
            define i32 @count(i32 %n) {
            entry:
              br label %loop

            loop:
              %i = phi i32 [ 0, %entry ], [ %next, %loop ]
              %next = add i32 %i, 1
              %done = icmp eq i32 %next, %n
              br i1 %done, label %exit, label %loop

            exit:
              ret i32 %next
            }
        "}
    );
}

#[test]
fn test_cyclic_value() {
    let module = single_func(func(
        "f",
        void(),
        vec![],
        vec![block(
            "entry",
            vec![
                add("a", local("b"), int_value(32, 1)),
                add("b", local("a"), int_value(32, 1)),
            ],
            ret_void(),
        )],
    ));

    let built = build(&module);
    assert!(matches!(
        error_kinds(&built)[..],
        [BuildErrorKind::CyclicValue { name }] if name == "a"
    ));

    let f = built.module.find_func("f").expect("function exists");
    assert!(built.module.funcs[f].blocks.is_empty());
}

#[test]
fn test_siblings_survive_fatal_error() {
    let module = ast::Module {
        type_defs: vec![],
        globals: vec![],
        funcs: vec![
            func(
                "bad",
                int(32),
                vec![],
                vec![block("entry", vec![], ret(local("missing")))],
            ),
            func(
                "good",
                int(32),
                vec![param("a", int(32))],
                vec![block("entry", vec![], ret(local("a")))],
            ),
        ],
    };

    let built = build(&module);
    assert!(matches!(
        error_kinds(&built)[..],
        [BuildErrorKind::UnknownSymbol { name, .. }] if name == "missing"
    ));

    let module = &built.module;
    let bad = module.find_func("bad").expect("function exists");
    let good = module.find_func("good").expect("function exists");
    assert!(module.funcs[bad].blocks.is_empty());
    assert_eq!(module.funcs[good].blocks.len(), 1);
}

#[test]
fn test_missing_terminator() {
    let mut entry = block("entry", vec![], ret_void());
    entry.term = None;

    let built = build(&single_func(func("f", void(), vec![], vec![entry])));
    assert!(matches!(
        error_kinds(&built)[..],
        [BuildErrorKind::MalformedBlock { block }] if block == "entry"
    ));
}

#[test]
fn test_duplicate_switch_case() {
    let case = |value, target| ast::Case {
        value: int_const(32, value),
        target: label(target),
    };

    let module = single_func(func(
        "f",
        void(),
        vec![param("x", int(32))],
        vec![
            block(
                "entry",
                vec![],
                ast::TermKind::Switch {
                    x: local("x"),
                    default: label("done"),
                    cases: vec![case(1, "one"), case(2, "done"), case(1, "done")],
                },
            ),
            block("one", vec![], ret_void()),
            block("done", vec![], ret_void()),
        ],
    ));

    let built = build(&module);
    assert!(matches!(
        error_kinds(&built)[..],
        [BuildErrorKind::DuplicateSwitchCase { value }] if value == "i32 1"
    ));
}

fn call_puts_without_args() -> ast::Module {
    ast::Module {
        type_defs: vec![],
        globals: vec![],
        funcs: vec![
            declare("puts", int(32), vec![ptr(int(8))]),
            func(
                "main",
                void(),
                vec![],
                vec![block(
                    "entry",
                    vec![
                        ast::InstrKind::Call {
                            return_type: int(32),
                            callee: global("puts"),
                            args: vec![],
                        }
                        .named("r", here()),
                    ],
                    ret_void(),
                )],
            ),
        ],
    }
}

#[test]
fn test_call_arity() {
    let built = build(&call_puts_without_args());

    match &error_kinds(&built)[..] {
        [BuildErrorKind::CallArityMismatch {
            callee,
            expected,
            found,
            is_variadic,
        }] => {
            assert_eq!(callee, "@puts");
            assert_eq!(*expected, 1);
            assert_eq!(*found, 0);
            assert!(!is_variadic);
        }
        kinds => panic!("unexpected errors {:?}", kinds),
    }

    assert_eq!(instr_type(&built, "main", 0), "i32");
}

#[test]
fn test_call_signature_checks_disabled() {
    let built = build_ir::build(
        &call_puts_without_args(),
        &BuildOptions {
            check_call_signatures: false,
            ..Default::default()
        },
    );

    assert!(built.errors.is_empty(), "{:?}", built.errors);
}

#[test]
fn test_call_non_function() {
    let module = single_func(func(
        "f",
        void(),
        vec![param("x", int(32))],
        vec![block(
            "entry",
            vec![
                ast::InstrKind::Call {
                    return_type: void(),
                    callee: local("x"),
                    args: vec![],
                }
                .at(here()),
            ],
            ret_void(),
        )],
    ));

    let built = build(&module);
    assert!(matches!(
        error_kinds(&built)[..],
        [BuildErrorKind::NotCallable { .. }]
    ));
}

#[test]
fn test_unknown_predicate() {
    let module = single_func(func(
        "f",
        void(),
        vec![param("x", int(32))],
        vec![block(
            "entry",
            vec![
                ast::InstrKind::ICmp {
                    pred: "bogus".into(),
                    x: local("x"),
                    y: local("x"),
                }
                .named("c", here()),
            ],
            ret_void(),
        )],
    ));

    let built = build(&module);
    assert!(matches!(
        error_kinds(&built)[..],
        [BuildErrorKind::UnknownPredicate { keyword, is_float: false }] if keyword == "bogus"
    ));
}

fn gep_module(field: i64) -> ast::Module {
    ast::Module {
        type_defs: vec![type_def("S", structure(vec![int(32), int(64)]))],
        globals: vec![],
        funcs: vec![func(
            "f",
            void(),
            vec![],
            vec![block(
                "entry",
                vec![
                    ast::InstrKind::Alloca {
                        elem: named("S"),
                        count: None,
                    }
                    .named("p", here()),
                    ast::InstrKind::GetElementPtr {
                        elem: named("S"),
                        src: local("p"),
                        indices: vec![int_value(32, 0), int_value(32, field)],
                        in_bounds: true,
                    }
                    .named("q", here()),
                ],
                ret_void(),
            )],
        )],
    }
}

#[test]
fn test_gep_struct_field() {
    let built = build(&gep_module(1));
    assert!(built.errors.is_empty(), "{:?}", built.errors);
    assert_eq!(instr_type(&built, "f", 1), "i64*");
}

#[test]
fn test_gep_field_out_of_range() {
    let built = build(&gep_module(2));
    assert!(matches!(
        error_kinds(&built)[..],
        [BuildErrorKind::InvalidGetElementPtr { .. }]
    ));
}

#[test]
fn test_unnamed_locals_are_numbered() {
    let module = single_func(ast::Func {
        name: "f".into(),
        return_type: int(32),
        params: vec![ast::Param {
            name: None,
            ty: int(32),
            source: here(),
        }],
        is_variadic: false,
        blocks: vec![ast::BasicBlock {
            name: None,
            instrs: vec![
                ast::InstrKind::Binary {
                    op: BinaryOp::Add,
                    x: local("0"),
                    y: int_value(32, 1),
                }
                .at(here()),
            ],
            term: Some(ret(local("2")).at(here())),
            source: here(),
        }],
        source: here(),
    });

    let built = build(&module);
    assert!(built.errors.is_empty(), "{:?}", built.errors);

    assert_eq!(
        built.module.to_string(),
        indoc! {"
            define i32 @f(i32 %0) {
            1:
              %2 = add i32 %0, 1
              ret i32 %2
            }
        "}
    );
}

#[test]
fn test_block_is_not_a_value() {
    let module = single_func(func(
        "f",
        void(),
        vec![],
        vec![block(
            "entry",
            vec![add("x", local("entry"), int_value(32, 1))],
            ret_void(),
        )],
    ));

    let built = build(&module);
    assert!(matches!(
        error_kinds(&built)[..],
        [BuildErrorKind::ExpectedValue { name }] if name == "entry"
    ));
}

#[test]
fn test_long_forward_reference_chain() {
    const LENGTH: usize = 10_000;

    let mut instrs = (0..LENGTH - 1)
        .map(|i| {
            add(
                &format!("v{}", i),
                local(&format!("v{}", i + 1)),
                int_value(32, 1),
            )
        })
        .collect::<Vec<_>>();

    instrs.push(add(
        &format!("v{}", LENGTH - 1),
        int_value(32, 1),
        int_value(32, 1),
    ));

    let module = single_func(func(
        "f",
        int(32),
        vec![],
        vec![block("entry", instrs, ret(local("v0")))],
    ));

    let built = build(&module);
    assert!(built.errors.is_empty(), "{:?}", built.errors);
    assert_eq!(instr_type(&built, "f", 0), "i32");
    assert_eq!(instr_type(&built, "f", LENGTH - 1), "i32");
}

#[test]
fn test_void_call_through_signature_is_not_numbered() {
    let signature = ast::TypeKind::Func(Box::new(ast::FuncType {
        return_type: void(),
        params: vec![int(32)],
        is_variadic: false,
    }))
    .at(here());

    let module = ast::Module {
        type_defs: vec![],
        globals: vec![],
        funcs: vec![
            declare("g", void(), vec![int(32)]),
            func(
                "f",
                int(32),
                vec![],
                vec![block(
                    "entry",
                    vec![
                        ast::InstrKind::Call {
                            return_type: signature,
                            callee: global("g"),
                            args: vec![int_value(32, 1)],
                        }
                        .at(here()),
                        ast::InstrKind::Binary {
                            op: BinaryOp::Add,
                            x: int_value(32, 1),
                            y: int_value(32, 2),
                        }
                        .at(here()),
                    ],
                    ret(local("0")),
                )],
            ),
        ],
    };

    let built = build(&module);
    assert!(built.errors.is_empty(), "{:?}", built.errors);

    assert_eq!(
        built.module.to_string(),
        indoc! {"
            declare void @g(i32)

            define i32 @f() {
            entry:
              call void @g(i32 1)
              %0 = add i32 1, 2
              ret i32 %0
            }
        "}
    );
}

fn vector_gep_module(indices: Vec<ast::Value>) -> ast::Module {
    single_func(func(
        "f",
        void(),
        vec![param("p", ptr(array(8, int(32))))],
        vec![block(
            "entry",
            vec![
                ast::InstrKind::GetElementPtr {
                    elem: array(8, int(32)),
                    src: local("p"),
                    indices,
                    in_bounds: false,
                }
                .named("q", here()),
            ],
            ret_void(),
        )],
    ))
}

#[test]
fn test_gep_vector_index_gives_vector_of_pointers() {
    let built = build(&vector_gep_module(vec![
        int_value(64, 0),
        zero(vector(4, int(64))).into(),
    ]));

    assert!(built.errors.is_empty(), "{:?}", built.errors);
    assert_eq!(instr_type(&built, "f", 0), "<4 x i32*>");
}

#[test]
fn test_gep_vector_indices_of_different_lengths() {
    let built = build(&vector_gep_module(vec![
        zero(vector(2, int(64))).into(),
        zero(vector(4, int(64))).into(),
    ]));

    assert!(matches!(
        error_kinds(&built)[..],
        [BuildErrorKind::InvalidGetElementPtr { .. }]
    ));
}

fn single_instr(params: Vec<ast::Param>, instr: ast::Instr) -> ast::Module {
    single_func(func(
        "f",
        void(),
        params,
        vec![block("entry", vec![instr], ret_void())],
    ))
}

#[test]
fn test_conversion_is_typed_by_target() {
    let built = build(&single_instr(
        vec![param("a", int(32))],
        ast::InstrKind::Conversion {
            op: ConversionOp::ZExt,
            from: local("a"),
            to: int(64),
        }
        .named("w", here()),
    ));

    assert!(built.errors.is_empty(), "{:?}", built.errors);
    assert_eq!(instr_type(&built, "f", 0), "i64");
}

#[test]
fn test_compare_results() {
    let built = build(&single_instr(
        vec![param("v", vector(4, int(32)))],
        ast::InstrKind::ICmp {
            pred: "eq".into(),
            x: local("v"),
            y: local("v"),
        }
        .named("c", here()),
    ));

    assert!(built.errors.is_empty(), "{:?}", built.errors);
    assert_eq!(instr_type(&built, "f", 0), "<4 x i1>");

    let built = build(&single_instr(
        vec![param("d", double())],
        ast::InstrKind::FCmp {
            pred: "olt".into(),
            x: local("d"),
            y: local("d"),
        }
        .named("c", here()),
    ));

    assert!(built.errors.is_empty(), "{:?}", built.errors);
    assert_eq!(instr_type(&built, "f", 0), "i1");
}

#[test]
fn test_select_is_typed_by_operands() {
    let built = build(&single_instr(
        vec![
            param("c", int(1)),
            param("a", int(32)),
            param("b", int(32)),
        ],
        ast::InstrKind::Select {
            cond: local("c"),
            x: local("a"),
            y: local("b"),
        }
        .named("s", here()),
    ));

    assert!(built.errors.is_empty(), "{:?}", built.errors);
    assert_eq!(instr_type(&built, "f", 0), "i32");
}

#[test]
fn test_store_is_not_numbered() {
    let module = single_func(func(
        "f",
        int(32),
        vec![param("a", int(32))],
        vec![block(
            "entry",
            vec![
                ast::InstrKind::Alloca {
                    elem: int(32),
                    count: None,
                }
                .named("p", here()),
                ast::InstrKind::Store {
                    src: local("a"),
                    dst: local("p"),
                }
                .at(here()),
                ast::InstrKind::Load {
                    elem: int(32),
                    src: local("p"),
                }
                .at(here()),
            ],
            ret(local("0")),
        )],
    ));

    let built = build(&module);
    assert!(built.errors.is_empty(), "{:?}", built.errors);

    assert_eq!(
        built.module.to_string(),
        indoc! {"
            define i32 @f(i32 %a) {
            entry:
              %p = alloca i32
              store i32 %a, i32* %p
              %0 = load i32, i32* %p
              ret i32 %0
            }
        "}
    );
}

#[test]
fn test_alloca_count_must_be_integer() {
    let built = build(&single_instr(
        vec![param("d", double())],
        ast::InstrKind::Alloca {
            elem: int(32),
            count: Some(local("d")),
        }
        .named("p", here()),
    ));

    assert!(matches!(
        error_kinds(&built)[..],
        [BuildErrorKind::NonIntegerOperand { found, .. }] if found == "double"
    ));
}

#[test]
fn test_unsupported_instr_and_terminator() {
    let built = build(&single_instr(
        vec![],
        ast::InstrKind::Other {
            opcode: "atomicrmw".into(),
        }
        .named("x", here()),
    ));

    assert!(matches!(
        error_kinds(&built)[..],
        [BuildErrorKind::UnsupportedConstruct { construct }] if construct.contains("atomicrmw")
    ));

    let module = single_func(func(
        "f",
        void(),
        vec![],
        vec![block(
            "entry",
            vec![],
            ast::TermKind::Other {
                opcode: "indirectbr".into(),
            },
        )],
    ));

    let built = build(&module);
    assert!(matches!(
        error_kinds(&built)[..],
        [BuildErrorKind::UnsupportedConstruct { construct }] if construct.contains("indirectbr")
    ));
}

#[test]
fn test_duplicate_local() {
    let module = single_func(func(
        "f",
        void(),
        vec![param("a", int(32)), param("a", int(64))],
        vec![block("entry", vec![], ret_void())],
    ));

    let built = build(&module);
    assert!(matches!(
        error_kinds(&built)[..],
        [BuildErrorKind::DuplicateSymbol {
            name,
            scope: SymbolScope::Local,
            ..
        }] if name == "a"
    ));
}

#[test]
fn test_switch_and_unreachable() {
    let module = single_func(func(
        "f",
        void(),
        vec![param("x", int(32))],
        vec![
            block(
                "entry",
                vec![],
                ast::TermKind::Switch {
                    x: local("x"),
                    default: label("done"),
                    cases: vec![ast::Case {
                        value: int_const(32, 1),
                        target: label("one"),
                    }],
                },
            ),
            block("one", vec![], ast::TermKind::Unreachable),
            block("done", vec![], ret_void()),
        ],
    ));

    let built = build(&module);
    assert!(built.errors.is_empty(), "{:?}", built.errors);

    assert_eq!(
        built.module.to_string(),
        indoc! {"
            define void @f(i32 %x) {
            entry:
              switch i32 %x, label %done [
                i32 1, label %one
              ]

            one:
              unreachable

            done:
              ret void
            }
        "}
    );
}
