// Integration tests for code generation

use itfgen::codegen::{generate, GeneratedFile, IdentityCallbacks, RewriteCallbacks, Specification};
use itfgen::parser::ast::Document;
use itfgen::parser::parse_document;

const CPP_LANG: &str = r##"
name: cpp
extension: .cpp
line_comment_token: "//"
block_comment_start: "/*"
block_comment_intermediate: " * "
block_comment_end: " */"
line_end_token: ";"
indent_tests: true
indent_testcases: false
spaces_indent: 4
imports: "#include <limits>"
boolean_true: "true"
boolean_false: "false"
"##;

const BOOST_TEST: &str = r##"
imports: "#include <boost/test/unit_test.hpp>"
testfile_seq: |
  $LANGUAGE_IMPORTS
  $TESTLIB_IMPORTS
  $ARITHLIB_IMPORTS
  $PREAMBLE
  $COMMENTS
  BOOST_AUTO_TEST_SUITE($NAME)

  $TESTCASES

  BOOST_AUTO_TEST_SUITE_END()
testcase_seq: |
  $COMMENTS
  BOOST_AUTO_TEST_CASE($TC_NAME)
  {
  $TESTS
  }
test_seq: |
  $COMMENTS
  $ASSERTS
assert_equals: "BOOST_CHECK_EQUAL($ARG1, $ARG2)"
assert_equals_warning: "BOOST_WARN_EQUAL($ARG1, $ARG2)"
assert_true: "BOOST_CHECK($ARG1)"
"##;

const INTERVAL_ARITH: &str = r##"
imports: '#include "interval.hpp"'
preamble: "typedef interval<double> I;"
inf_sup_interval_double: "I($ARG1, $ARG2)"
empty_interval_double: "I::empty()"
op_subset: "subset($ARG1, $ARG2)"
"op_add<<interval<double>>><interval<double>,interval<double>>": "$ARG1 + $ARG2"
"op_add<<*>>*": "add($ARG1, $ARG2)"
"op_neg<<*>>*": "-$ARG1"
"op_split<<*>>*": "lower($ARG1)\nmid($ARG1)\n*** next output\nupper($ARG1)"
"op_isEmpty<<BooleanLiteralNode>><interval<double>>": "isEmpty($ARG1)"
"##;

const OCTAVE_LANG: &str = r#"
name: octave
extension: .m
line_comment_token: "%"
block_comment_start: "%{"
block_comment_intermediate: ""
block_comment_end: "%}"
line_end_token: ";"
indent_tests: false
indent_testcases: false
spaces_indent: 2
"#;

const OCTAVE_TEST: &str = r#"
testfile_seq: "$TESTCASES"
testcase_seq: "%!test\n$TESTS"
test_seq: "$ASSERTS"
assert_equals: "assert (isequal ($ARG1, $ARG2))"
assert_equals_warning: "assert (isequal ($ARG1, $ARG2), 'warn')"
assert_true: "assert ($ARG1)"
"#;

const OCTAVE_ARITH: &str = r#"
inf_sup_interval_double: "infsup ($ARG1, $ARG2)"
empty_interval_double: "empty ()"
op_subset: "subset ($ARG1, $ARG2)"
"op_add<<*>>*": "plus ($ARG1, $ARG2)"
"op_neg<<*>>*": "uminus ($ARG1)"
"#;

fn cpp() -> Specification {
    Specification::from_yaml(CPP_LANG, BOOST_TEST, INTERVAL_ARITH).expect("Invalid specification")
}

fn octave() -> Specification {
    Specification::from_yaml(OCTAVE_LANG, OCTAVE_TEST, OCTAVE_ARITH).expect("Invalid specification")
}

fn parse(source: &str) -> Document {
    parse_document(source, "minimal_arith.itl").expect("Parsing failed")
}

fn render(source: &str, spec: &Specification) -> GeneratedFile {
    generate(&parse(source), spec, &IdentityCallbacks).expect("Generation failed")
}

#[test]
fn test_tightest_and_accurate_assertions() {
    let out = render("testcase t.add { add [1,2] [3,4] = [4,6] <= [0,7]; }", &cpp());

    let asserts: Vec<&str> = out
        .content
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("BOOST_CHECK") || line.starts_with("BOOST_WARN"))
        .collect();
    assert_eq!(
        asserts,
        vec![
            "BOOST_WARN_EQUAL(I(1, 2) + I(3, 4), I(4, 6));",
            "BOOST_CHECK(subset(I(4, 6), I(1, 2) + I(3, 4)));",
            "BOOST_CHECK(subset(I(1, 2) + I(3, 4), I(0, 7)));",
        ]
    );
    assert!(out.warnings.is_empty());
}

#[test]
fn test_exact_key_beats_wildcard() {
    let out = render(
        "testcase t { add [1.0,2.0] [1.0,2.0] = [2.0,4.0]; add [1.0,2.0] 2.0 = [3.0,4.0]; }",
        &cpp(),
    );
    assert!(out.content.contains("BOOST_CHECK_EQUAL(I(1.0, 2.0) + I(1.0, 2.0), I(2.0, 4.0));"));
    assert!(out.content.contains("BOOST_CHECK_EQUAL(add(I(1.0, 2.0), 2.0), I(3.0, 4.0));"));
}

#[test]
fn test_boolean_result_resolves_exact_key() {
    let out = render("testcase t { isEmpty [empty] = true; }", &cpp());
    assert!(out.content.contains("BOOST_CHECK_EQUAL(isEmpty(I::empty()), true);"), "{}", out.content);
    assert!(out.warnings.is_empty());
}

#[test]
fn test_unresolved_operation_drops_only_its_test() {
    let out = render(
        "testcase t {
             neg [1.0,2.0] = [-2.0,-1.0];
             mul [1.0,2.0] [3.0,4.0] = [3.0,8.0];
             neg [empty] = [empty];
         }",
        &cpp(),
    );

    assert!(!out.content.contains("3.0, 8.0"));
    assert_eq!(out.content.matches("BOOST_CHECK_EQUAL").count(), 2);
    assert_eq!(
        out.warnings,
        vec![
            "WARNING: no matching operation found for operation \
             arith_op_mul<<interval<double>>><interval<double>,interval<double>>, language cpp"
                .to_string()
        ]
    );
}

#[test]
fn test_one_equality_per_tightest_output() {
    for count in 1..=6 {
        let tests: String = (0..count)
            .map(|i| format!("neg [{i}.0,{i}.5] = [-{i}.5,-{i}.0];\n"))
            .collect();
        let source = format!("testcase t {{\n{}}}", tests);
        let out = render(&source, &cpp());
        assert_eq!(out.content.matches("BOOST_CHECK_EQUAL(").count(), count);
        assert_eq!(out.content.matches("BOOST_CHECK(").count(), 0);
    }
}

#[test]
fn test_assertion_count_for_both_outputs() {
    let out = render(
        "testcase t { split [1.0,2.0] = [1.0,1.5] [1.5,2.0] <= [0.0,1.5] [1.0,3.0]; }",
        &cpp(),
    );
    let asserts: Vec<&str> = out
        .content
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("BOOST_"))
        .filter(|line| !line.starts_with("BOOST_AUTO"))
        .collect();

    // two outputs against three candidates, once per assertion kind
    assert_eq!(asserts.len(), 9);
    assert!(asserts[..3].iter().all(|line| line.starts_with("BOOST_WARN_EQUAL(")));
    assert!(asserts[3..].iter().all(|line| line.starts_with("BOOST_CHECK(subset(")));
    assert_eq!(asserts[2], "BOOST_WARN_EQUAL(upper(I(1.0, 2.0)), I(1.5, 2.0));");
    assert_eq!(asserts[3], "BOOST_CHECK(subset(I(1.0, 1.5), lower(I(1.0, 2.0))));");
    assert_eq!(asserts[8], "BOOST_CHECK(subset(upper(I(1.0, 2.0)), I(1.0, 3.0)));");
}

#[test]
fn test_targets_do_not_interfere() {
    let doc = parse(
        "testcase t {
             add [1.0,2.0] [1.0,2.0] = [2.0,4.0] <= [1.0,5.0];
             mul [1.0,2.0] [1.0,2.0] = [1.0,4.0];
         }",
    );
    let cpp = cpp();
    let octave = octave();

    let first = generate(&doc, &cpp, &IdentityCallbacks).expect("Generation failed");
    let other = generate(&doc, &octave, &IdentityCallbacks).expect("Generation failed");
    let again = generate(&doc, &cpp, &IdentityCallbacks).expect("Generation failed");

    assert_eq!(first, again);
    assert_ne!(first.content, other.content);
    assert!(other.content.contains("assert (isequal (plus (infsup (1.0, 2.0), infsup (1.0, 2.0)), infsup (2.0, 4.0)), 'warn');"));
    assert_eq!(first.warnings.len(), 1);
    assert!(other.warnings[0].ends_with("language octave"));

    let (threaded_cpp, threaded_octave) = std::thread::scope(|s| {
        let a = s.spawn(|| generate(&doc, &cpp, &IdentityCallbacks));
        let b = s.spawn(|| generate(&doc, &octave, &IdentityCallbacks));
        (a.join().unwrap(), b.join().unwrap())
    });
    assert_eq!(threaded_cpp.expect("Generation failed"), first);
    assert_eq!(threaded_octave.expect("Generation failed"), other);
}

#[test]
fn test_import_keys_are_only_needed_when_referenced() {
    let out = render("testcase t { neg [1.0,2.0] = [-2.0,-1.0]; }", &octave());
    assert_eq!(out.content, "%!test\nassert (isequal (uminus (infsup (1.0, 2.0)), infsup (-2.0, -1.0)));");
}

#[test]
fn test_whole_file() {
    let source = r#"
/*
Minimal arithmetic
*/
// addition
testcase minimal.add {
    add [1.0,2.0] [1.0,2.0] = [2.0,4.0];
    // negation
    neg [1.0,2.0] = [-2.0,-1.0];
}

testcase minimal.empty_add {
    add [empty] [1.0,2.0] = [empty] <= [empty];
}
"#;
    let callbacks =
        RewriteCallbacks::from_yaml("qualident:\n  - pattern: '\\.'\n    replace: '_'\n")
            .expect("Invalid callbacks");
    let out = generate(&parse(source), &cpp(), &callbacks).expect("Generation failed");

    insta::assert_snapshot!(out.content.trim_end(), @r#"
    //Language imports
    #include <limits>

    //Test library imports
    #include <boost/test/unit_test.hpp>

    //Arithmetic library imports
    #include "interval.hpp"

    //Preamble
    typedef interval<double> I;

    /*
     * Minimal arithmetic
     */
    BOOST_AUTO_TEST_SUITE(Minimal_Arith)

    // addition
    BOOST_AUTO_TEST_CASE(minimal_add)
    {
        BOOST_CHECK_EQUAL(I(1.0, 2.0) + I(1.0, 2.0), I(2.0, 4.0));
        // negation
        BOOST_CHECK_EQUAL(-I(1.0, 2.0), I(-2.0, -1.0));
    }

    BOOST_AUTO_TEST_CASE(minimal_empty_add)
    {
        BOOST_WARN_EQUAL(I::empty() + I(1.0, 2.0), I::empty());
        BOOST_CHECK(subset(I::empty(), I::empty() + I(1.0, 2.0)));
        BOOST_CHECK(subset(I::empty() + I(1.0, 2.0), I::empty()));
    }

    BOOST_AUTO_TEST_SUITE_END()
    "#);
}
