//! Table-driven tests for every assertion: result and exact recorded message.
//!
//! Each case runs against one shared `Recorder` that is reset between cases, so a case also proves that an
//! assertion leaves nothing behind when it passes.

use serde::Serialize;
use std::io;
use testman::Recorder;
use testman::assert;

#[derive(Serialize)]
struct Empty;

struct Case {
    name: &'static str,
    run: fn(&Recorder) -> bool,
    want_result: bool,
    want_output: &'static str,
}

fn some_error() -> Option<io::Error> {
    Some(io::Error::other("some error"))
}

fn cases() -> Vec<Case> {
    vec![
        Case {
            name: "is_true passing",
            run: |t| assert::is_true(t, true),
            want_result: true,
            want_output: "",
        },
        Case {
            name: "is_true not passing",
            run: |t| assert::is_true(t, false),
            want_result: false,
            want_output: "condition expected to be true",
        },
        Case {
            name: "equal passing",
            run: |t| assert::equal(t, 1, 1),
            want_result: true,
            want_output: "",
        },
        Case {
            name: "equal not passing",
            run: |t| assert::equal(t, 1, 2),
            want_result: false,
            want_output: "got 1 want 2",
        },
        Case {
            name: "deep_equal passing",
            run: |t| assert::deep_equal(t, vec![1, 2], vec![1, 2]),
            want_result: true,
            want_output: "",
        },
        Case {
            name: "deep_equal not passing",
            run: |t| assert::deep_equal(t, vec![1, 2], vec![2, 2]),
            want_result: false,
            want_output: "got [1 2] want [2 2]",
        },
        Case {
            name: "contains passing",
            run: |t| assert::contains(t, "some string", "me st"),
            want_result: true,
            want_output: "",
        },
        Case {
            name: "contains not passing",
            run: |t| assert::contains(t, "some string", "hello"),
            want_result: false,
            want_output: r#"expected "some string" to contain "hello""#,
        },
        Case {
            name: "regex passing",
            run: |t| assert::regex(t, "111", r"\d{3}"),
            want_result: true,
            want_output: "",
        },
        Case {
            name: "regex not passing",
            run: |t| assert::regex(t, "aaa", r"\d{3}"),
            want_result: false,
            want_output: r#""aaa" didn't match regexp "\d{3}""#,
        },
        Case {
            name: "nil passing",
            run: |t| assert::nil(t, None::<()>),
            want_result: true,
            want_output: "",
        },
        Case {
            name: "nil not passing",
            run: |t| assert::nil(t, Empty),
            want_result: false,
            want_output: "got {}, want nil",
        },
        Case {
            name: "not_nil passing",
            run: |t| assert::not_nil(t, Empty),
            want_result: true,
            want_output: "",
        },
        Case {
            name: "not_nil not passing",
            run: |t| assert::not_nil(t, None::<()>),
            want_result: false,
            want_output: "got nil, want not nil",
        },
        Case {
            name: "nil not passing on nested none",
            run: |t| assert::nil(t, Some(None::<i32>)),
            want_result: false,
            want_output: "got <nil>, want nil",
        },
        Case {
            name: "not_nil passing on nested none",
            run: |t| assert::not_nil(t, Some(None::<i32>)),
            want_result: true,
            want_output: "",
        },
        Case {
            name: "deep_equal passing on nested none",
            run: |t| assert::deep_equal(t, Some(None::<i32>), Some(None)),
            want_result: true,
            want_output: "",
        },
        Case {
            name: "deep_equal not passing on nested none",
            run: |t| assert::deep_equal(t, Some(None::<i32>), None),
            want_result: false,
            want_output: "got <nil> want <nil>",
        },
        Case {
            name: "error passing",
            run: |t| assert::error(t, some_error()),
            want_result: true,
            want_output: "",
        },
        Case {
            name: "error not passing",
            run: |t| assert::error(t, None::<io::Error>),
            want_result: false,
            want_output: "got nil, want error",
        },
        Case {
            name: "no_error passing",
            run: |t| assert::no_error(t, None::<io::Error>),
            want_result: true,
            want_output: "",
        },
        Case {
            name: "no_error not passing",
            run: |t| assert::no_error(t, some_error()),
            want_result: false,
            want_output: r#"got error "some error", want nil"#,
        },
    ]
}

#[test]
fn assertions_report_expected_results_and_messages() {
    let recorder = Recorder::new();

    for case in cases() {
        recorder.reset();
        let got = (case.run)(&recorder);
        assert_eq!(got, case.want_result, "{}: result", case.name);
        assert_eq!(recorder.output(), case.want_output, "{}: output", case.name);
    }
}

#[test]
fn assertions_are_idempotent() {
    for case in cases() {
        let first = Recorder::new();
        let second = Recorder::new();
        assert_eq!((case.run)(&first), (case.run)(&second), "{}", case.name);
        assert_eq!(first.output(), second.output(), "{}", case.name);
    }
}

#[test]
fn regex_compile_error_passes_engine_text_through() {
    let recorder = Recorder::new();
    assert!(!assert::regex(&recorder, "aaa", r"\p"));

    let engine_error = regex::Regex::new(r"\p").expect_err(r"\p is not a valid pattern");
    let output = recorder.output();
    assert!(output.starts_with(r#"regexp "\p" didn't compile: "#), "{output}");
    assert_eq!(output, format!(r#"regexp "\p" didn't compile: {engine_error}"#));
}

#[test]
fn each_failure_records_exactly_one_message() {
    let recorder = Recorder::new();
    for case in cases().into_iter().filter(|case| !case.want_result) {
        (case.run)(&recorder);
    }
    assert_eq!(recorder.messages().len(), 11);
}

#[test]
fn deep_equal_on_sets_built_in_different_orders() {
    use std::collections::BTreeSet;

    let recorder = Recorder::new();
    let ascending: BTreeSet<&str> = ["a", "b", "c"].into_iter().collect();
    let descending: BTreeSet<&str> = ["c", "b", "a"].into_iter().collect();
    assert!(assert::deep_equal(&recorder, &ascending, &descending));

    let missing: BTreeSet<&str> = ["a", "b"].into_iter().collect();
    assert!(!assert::deep_equal(&recorder, &ascending, &missing));
    assert_eq!(recorder.output(), "got [a b c] want [a b]");
}
