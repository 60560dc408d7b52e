// Code generation over a parsed ITL document

use super::callbacks::Callbacks;
use super::errors::GenerateError;
use super::resolver::OperationResolver;
use super::spec::Specification;
use super::template::{indent, substitute, substitute_list, substitute_with, title_case};
use crate::parser::ast::*;

/// Separates the result groups of a multi-output operation template
const NEXT_OUTPUT: &str = "\n*** next output\n";

const SUBSET_OPERATION: &str = "arith_op_subset";

/// Output of one generation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub content: String,
    /// Unresolved operations, deduplicated, in order of first occurrence
    pub warnings: Vec<String>,
}

/// Walks a [`Document`] and renders it for one target specification.
///
/// The document is only read. A generator is consumed by [`Generator::generate`],
/// so warnings never leak from one pass into another.
pub struct Generator<'a> {
    spec: &'a Specification,
    callbacks: &'a dyn Callbacks,
    resolver: OperationResolver<'a>,
    warnings: Vec<String>,
}

impl<'a> Generator<'a> {
    pub fn new(spec: &'a Specification, callbacks: &'a dyn Callbacks) -> Self {
        Generator {
            spec,
            callbacks,
            resolver: OperationResolver::new(spec),
            warnings: Vec::new(),
        }
    }

    /// Render the whole document
    pub fn generate(mut self, document: &Document) -> Result<GeneratedFile, GenerateError> {
        tracing::debug!(
            file = %document.file_name,
            tests = document.test_count(),
            "generating"
        );
        let content = self.document(document)?;
        Ok(GeneratedFile {
            content,
            warnings: self.warnings,
        })
    }

    // ===== Structure =====

    fn document(&mut self, document: &Document) -> Result<String, GenerateError> {
        let comment_token = self.spec.text("lang_line_comment_token")?;
        let mut text = self.spec.text("test_testfile_seq")?.into_owned();

        for (placeholder, header, key) in [
            ("LANGUAGE_IMPORTS", "Language imports", "lang_imports"),
            ("TESTLIB_IMPORTS", "Test library imports", "test_imports"),
            ("ARITHLIB_IMPORTS", "Arithmetic library imports", "arith_imports"),
            ("PREAMBLE", "Preamble", "arith_preamble"),
        ] {
            text = substitute_with(&text, placeholder, || {
                let section = format!("{}{}\n{}", comment_token, header, self.spec.text(key)?);
                Ok::<_, GenerateError>(format!("{}\n", section.trim()))
            })?;
        }

        let comment = match &document.comment {
            Some(comment) => self.comment(comment)?,
            None => String::new(),
        };
        text = substitute(&text, "COMMENTS", &comment);

        let stem = document.file_name.split('.').next().unwrap_or_default();
        text = substitute(&text, "NAME", &title_case(stem));

        let indent_width = self.indent_width("lang_indent_testcases")?;
        let mut testcases = Vec::with_capacity(document.testcases.len());
        for testcase in &document.testcases {
            let rendered = self.testcase(testcase)?;
            let rendered = match indent_width {
                Some(width) => indent(&rendered, width),
                None => rendered.trim().to_string(),
            };
            if !rendered.trim().is_empty() {
                testcases.push(rendered);
            }
        }

        Ok(substitute_list(&text, "TESTCASES", &testcases, "\n\n"))
    }

    fn testcase(&mut self, testcase: &Testcase) -> Result<String, GenerateError> {
        let mut text = self.spec.text("test_testcase_seq")?.into_owned();

        let comments = self.comments(&testcase.comments)?;
        text = substitute_list(&text, "COMMENTS", &comments, "\n");
        text = substitute(
            &text,
            "TC_NAME",
            &self.callbacks.qualident(&testcase.name.to_string()),
        );

        let indent_width = self.indent_width("lang_indent_tests")?;
        let mut tests = Vec::with_capacity(testcase.tests.len());
        for test in &testcase.tests {
            let rendered = self.test(test)?;
            let rendered = match indent_width {
                Some(width) => indent(rendered.trim(), width),
                None => rendered.trim().to_string(),
            };
            // Dropped tests render as blank lines
            if !rendered.trim().is_empty() {
                tests.push(rendered);
            }
        }

        Ok(substitute_list(&text, "TESTS", &tests, "\n"))
    }

    /// Render one test, or the empty string if its operation is unknown
    fn test(&mut self, test: &Test) -> Result<String, GenerateError> {
        let comment_text = self.comments(test.comments())?.join("\n");

        let input_types = type_signature(test.inputs());
        let tightest_types = test.tightest().map(|outputs| type_signature(&outputs.0));
        let accurate_types = test.accurate().map(|outputs| type_signature(&outputs.0));
        if let (Some(tightest), Some(accurate)) = (&tightest_types, &accurate_types) {
            if tightest != accurate {
                return Err(GenerateError::OutputTypeMismatch {
                    op_name: test.op_name().0.clone(),
                    tightest: tightest.clone(),
                    accurate: accurate.clone(),
                    location: test.location(),
                });
            }
        }
        let output_types = accurate_types.or(tightest_types).unwrap_or_default();

        let prefix = format!("arith_op_{}", test.op_name().0);
        let signature = format!("{}<<{}>><{}>", prefix, output_types, input_types);
        let Some(op_key) = self.resolve(&prefix, &signature)? else {
            return Ok(String::new());
        };

        let mut op_text = self.spec.text(op_key)?.into_owned();
        for (i, input) in test.inputs().iter().enumerate() {
            op_text = substitute(&op_text, &format!("ARG{}", i + 1), &self.literal(input)?);
        }

        let groups: Vec<Vec<&str>> = op_text
            .split(NEXT_OUTPUT)
            .map(|group| group.split('\n').filter(|line| !line.is_empty()).collect())
            .collect();

        let declared = test
            .tightest()
            .map(|t| t.0.len())
            .or_else(|| test.accurate().map(|a| a.0.len()))
            .unwrap_or(0);
        if groups.len() < declared {
            return Err(GenerateError::ResultArity {
                signature,
                outputs: declared,
                groups: groups.len(),
                location: test.location(),
            });
        }

        let Some(asserts) = self.assertions(test, &groups)? else {
            return Ok(String::new());
        };

        let text = substitute(
            self.spec.text("test_test_seq")?.trim(),
            "COMMENTS",
            &comment_text,
        );
        let text = substitute(text.trim(), "ASSERTS", &asserts.join("\n"));
        Ok(format!("{}\n", text))
    }

    /// Assertions pairing every declared output with every candidate of its
    /// result group. `None` if the subset operation is needed but unknown.
    fn assertions(
        &mut self,
        test: &Test,
        groups: &[Vec<&str>],
    ) -> Result<Option<Vec<String>>, GenerateError> {
        let line_end = self.spec.text("lang_line_end_token")?;
        let mut asserts = Vec::new();

        match (test.tightest(), test.accurate()) {
            (Some(tightest), None) => {
                let equals = self.spec.text("test_assert_equals")?;
                for (output, candidates) in self.literals(&tightest.0)?.iter().zip(groups) {
                    for candidate in candidates {
                        let text = substitute(&equals, "ARG2", output);
                        let text = substitute(&text, "ARG1", candidate);
                        asserts.push(format!("{}{}", text, line_end));
                    }
                }
            }
            (None, Some(accurate)) => {
                let Some(subset) = self.subset_template()? else {
                    return Ok(None);
                };
                let assert_true = self.spec.text("test_assert_true")?;
                for (output, candidates) in self.literals(&accurate.0)?.iter().zip(groups) {
                    for candidate in candidates {
                        let check = substitute(&subset, "ARG1", candidate);
                        let check = substitute(&check, "ARG2", output);
                        let text = substitute(&assert_true, "ARG1", &check);
                        asserts.push(format!("{}{}", text, line_end));
                    }
                }
            }
            (Some(tightest), Some(accurate)) => {
                let Some(subset) = self.subset_template()? else {
                    return Ok(None);
                };
                let equals_warning = self.spec.text("test_assert_equals_warning")?;
                let assert_true = self.spec.text("test_assert_true")?;
                let tightest = self.literals(&tightest.0)?;

                // soft equality against the tightest result
                for (output, candidates) in tightest.iter().zip(groups) {
                    for candidate in candidates {
                        let text = substitute(&equals_warning, "ARG2", output);
                        let text = substitute(&text, "ARG1", candidate);
                        asserts.push(format!("{}{}", text, line_end));
                    }
                }
                // tightest ⊆ result
                for (output, candidates) in tightest.iter().zip(groups) {
                    for candidate in candidates {
                        let check = substitute(&subset, "ARG2", candidate);
                        let check = substitute(&check, "ARG1", output);
                        let text = substitute(&assert_true, "ARG1", &check);
                        asserts.push(format!("{}{}", text, line_end));
                    }
                }
                // result ⊆ accurate
                for (output, candidates) in self.literals(&accurate.0)?.iter().zip(groups) {
                    for candidate in candidates {
                        let check = substitute(&subset, "ARG1", candidate);
                        let check = substitute(&check, "ARG2", output);
                        let text = substitute(&assert_true, "ARG1", &check);
                        asserts.push(format!("{}{}", text, line_end));
                    }
                }
            }
            (None, None) => {}
        }

        Ok(Some(asserts))
    }

    fn subset_template(&mut self) -> Result<Option<String>, GenerateError> {
        match self.resolve(SUBSET_OPERATION, SUBSET_OPERATION)? {
            Some(key) => Ok(Some(self.spec.text(key)?.into_owned())),
            None => Ok(None),
        }
    }

    /// Resolve an operation key, recording a warning when nothing matches
    fn resolve(&mut self, prefix: &str, signature: &str) -> Result<Option<&'a str>, GenerateError> {
        if let Some(resolution) = self.resolver.resolve(prefix, signature) {
            tracing::debug!(signature, key = resolution.key(), "resolved operation");
            return Ok(Some(resolution.key()));
        }

        let warning = format!(
            "WARNING: no matching operation found for operation {}, language {}",
            signature,
            self.spec.text("lang_name")?
        );
        tracing::debug!("{}", warning);
        if !self.warnings.contains(&warning) {
            self.warnings.push(warning);
        }
        Ok(None)
    }

    /// `Some(width)` if the flag asks for indentation
    fn indent_width(&self, flag: &str) -> Result<Option<usize>, GenerateError> {
        if !self.spec.flag(flag)? {
            return Ok(None);
        }
        let width = self.spec.number("lang_spaces_indent")?;
        Ok(Some(usize::try_from(width).unwrap_or(0)))
    }

    // ===== Comments =====

    fn comments(&self, comments: &[Comment]) -> Result<Vec<String>, GenerateError> {
        comments.iter().map(|comment| self.comment(comment)).collect()
    }

    fn comment(&self, comment: &Comment) -> Result<String, GenerateError> {
        match comment {
            Comment::Line(text, _) => {
                let body = text.strip_prefix("//").unwrap_or(text);
                Ok(format!("{}{}", self.spec.text("lang_line_comment_token")?, body))
            }
            Comment::Block(text, _) => {
                let body = text
                    .strip_prefix("/*")
                    .and_then(|t| t.strip_suffix("*/"))
                    .unwrap_or(text);
                let mut lines: Vec<&str> = body.split('\n').collect();
                if lines.last().is_some_and(|line| line.trim().is_empty()) {
                    lines.pop();
                }
                if lines.first().is_some_and(|line| line.trim().is_empty()) {
                    lines.remove(0);
                }

                let intermediate = self.spec.text("lang_block_comment_intermediate")?;
                let lines: Vec<String> = lines
                    .iter()
                    .map(|line| format!("{}{}", intermediate, line))
                    .collect();
                Ok(format!(
                    "{}\n{}\n{}",
                    self.spec.text("lang_block_comment_start")?,
                    lines.join("\n"),
                    self.spec.text("lang_block_comment_end")?
                ))
            }
        }
    }

    // ===== Literals =====

    fn literals(&self, literals: &[Literal]) -> Result<Vec<String>, GenerateError> {
        literals.iter().map(|literal| self.literal(literal)).collect()
    }

    fn literal(&self, literal: &Literal) -> Result<String, GenerateError> {
        match literal {
            Literal::Integer { text, ty, unsigned } => {
                let number = self.callbacks.int(text);
                Ok(self.typed_number(&number, ty.name(), *unsigned))
            }
            Literal::Float(float) => Ok(self.float(float)),
            Literal::Infinity { sign, ty } => self.infinity(*sign, *ty),
            Literal::String(raw) => Ok(self.callbacks.string(raw)),
            Literal::Boolean(value) => self.key(format!("lang_boolean_{}", value)),
            Literal::Overlap(relation) => self.key(format!("arith_overlap_{}", relation.name())),
            Literal::Interval(interval) => self.interval(interval),
        }
    }

    fn interval(&self, interval: &Interval) -> Result<String, GenerateError> {
        match interval {
            Interval::Special {
                kind,
                ty,
                decoration,
            } => match decoration {
                Some(decoration) => {
                    let template = self.key(format!(
                        "arith_decorated_{}_interval_{}",
                        kind.key(),
                        ty.name()
                    ))?;
                    Ok(substitute(&template, "DEC", &self.decoration(*decoration)?))
                }
                None => self.key(format!("arith_{}_interval_{}", kind.key(), ty.name())),
            },
            Interval::InfSup(interval) => {
                let inf = self.bound(interval.inf())?;
                let sup = self.bound(interval.sup())?;
                let ty = interval.element_type().name();
                match interval.decoration() {
                    Some(decoration) => {
                        let template = self.key(format!("arith_decorated_inf_sup_interval_{}", ty))?;
                        let text = substitute(&template, "ARG1", &inf);
                        let text = substitute(&text, "ARG2", &sup);
                        Ok(substitute(&text, "DEC", &self.decoration(decoration)?))
                    }
                    None => {
                        let template = self.key(format!("arith_inf_sup_interval_{}", ty))?;
                        let text = substitute(&template, "ARG1", &inf);
                        Ok(substitute(&text, "ARG2", &sup))
                    }
                }
            }
        }
    }

    fn bound(&self, bound: &Bound) -> Result<String, GenerateError> {
        match bound {
            Bound::Number(float) => Ok(self.float(float)),
            Bound::Infinity { sign, ty } => self.infinity(*sign, *ty),
        }
    }

    fn float(&self, float: &FloatLiteral) -> String {
        let number = self.callbacks.fp_num(&float.text);
        self.typed_number(&number, float.ty.name(), false)
    }

    fn infinity(&self, sign: Sign, ty: FloatType) -> Result<String, GenerateError> {
        let sign = match sign {
            Sign::Plus => "plus",
            Sign::Minus => "minus",
        };
        self.key(format!("arith_infinity_{}_{}", sign, ty.name()))
    }

    fn decoration(&self, decoration: Decoration) -> Result<String, GenerateError> {
        self.key(format!("arith_decorator_{}", decoration.name()))
    }

    /// Wrap a number in the optional `lang_literal_<type>` template
    fn typed_number(&self, number: &str, type_name: &str, unsigned: bool) -> String {
        let key = if unsigned {
            format!("lang_literal_unsigned_{}", type_name)
        } else {
            format!("lang_literal_{}", type_name)
        };
        match self.spec.get(&key) {
            Some(template) => substitute(&template.render(), "NUM", number),
            None => number.to_string(),
        }
    }

    fn key(&self, key: String) -> Result<String, GenerateError> {
        Ok(self.spec.text(&key)?.into_owned())
    }
}

/// Render `document` for one target
pub fn generate(
    document: &Document,
    spec: &Specification,
    callbacks: &dyn Callbacks,
) -> Result<GeneratedFile, GenerateError> {
    Generator::new(spec, callbacks).generate(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::callbacks::{IdentityCallbacks, RewriteCallbacks};
    use crate::parser::parse_document;

    const LANG: &str = r#"
name: toy
extension: .toy
line_comment_token: "//"
block_comment_start: "/*"
block_comment_intermediate: " * "
block_comment_end: " */"
line_end_token: ";"
indent_tests: false
indent_testcases: false
spaces_indent: 2
imports: ""
boolean_true: "yes"
boolean_false: "no"
"#;

    const TEST: &str = r#"
imports: ""
testfile_seq: "$TESTCASES"
testcase_seq: "$COMMENTS\ncase $TC_NAME\n$TESTS"
test_seq: "$COMMENTS\n$ASSERTS"
assert_equals: "eq($ARG1, $ARG2)"
assert_equals_warning: "eqw($ARG1, $ARG2)"
assert_true: "ok($ARG1)"
"#;

    const ARITH: &str = r#"
imports: ""
preamble: ""
inf_sup_interval_double: "I($ARG1, $ARG2)"
decorated_inf_sup_interval_double: "D($ARG1, $ARG2, $DEC)"
empty_interval_double: "E()"
decorated_entire_interval_float: "W<f>($DEC)"
infinity_plus_double: "INF"
infinity_minus_double: "-INF"
decorator_com: "com"
overlap_meets: "MEETS"
"op_subset": "sub($ARG1, $ARG2)"
"op_neg<<interval<double>>><interval<double>>": "neg($ARG1)"
"op_split<<*>>*": "lo($ARG1)\n*** next output\nhi($ARG1)"
"op_rel<<*>>*": "rel($ARG1)"
"op_overlap<<OverlapLiteralNode>><interval<double>,interval<double>>": "ov($ARG1, $ARG2)"
"#;

    fn spec() -> Specification {
        Specification::from_yaml(LANG, TEST, ARITH).unwrap()
    }

    fn render(source: &str) -> Result<GeneratedFile, GenerateError> {
        let doc = parse_document(source, "unit.itl").unwrap();
        generate(&doc, &spec(), &IdentityCallbacks)
    }

    #[test]
    fn test_tightest_only() {
        let out = render("testcase t { neg [1.0,2.0] = [-2.0,-1.0]; }").unwrap();
        assert_eq!(out.content, "case t\neq(neg(I(1.0, 2.0)), I(-2.0, -1.0));");
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_accurate_only() {
        let out = render("testcase t { neg [1.0,2.0] <= [-3.0,-1.0]; }").unwrap();
        assert_eq!(
            out.content,
            "case t\nok(sub(neg(I(1.0, 2.0)), I(-3.0, -1.0)));"
        );
    }

    #[test]
    fn test_both_outputs_order() {
        let out = render("testcase t { neg [1.0,2.0] = [-2.0,-1.0] <= [-3.0,-1.0]; }").unwrap();
        let lines: Vec<&str> = out.content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "case t",
                "eqw(neg(I(1.0, 2.0)), I(-2.0, -1.0));",
                "ok(sub(I(-2.0, -1.0), neg(I(1.0, 2.0))));",
                "ok(sub(neg(I(1.0, 2.0)), I(-3.0, -1.0)));",
            ]
        );
    }

    #[test]
    fn test_multiple_outputs_pair_with_groups() {
        let out = render("testcase t { split [1.0,2.0] = [1.0,1.5] [1.5,2.0]; }").unwrap();
        assert_eq!(
            out.content,
            "case t\neq(lo(I(1.0, 2.0)), I(1.0, 1.5));\neq(hi(I(1.0, 2.0)), I(1.5, 2.0));"
        );
    }

    #[test]
    fn test_missing_result_group_is_fatal() {
        let err = render("testcase t { rel [1.0,2.0] = [1.0,1.5] [1.5,2.0]; }").unwrap_err();
        assert!(matches!(err, GenerateError::ResultArity { outputs: 2, groups: 1, .. }));
    }

    #[test]
    fn test_unresolved_operation_is_dropped_with_one_warning() {
        let out = render(
            "testcase t {
                 mul [1.0,2.0] [1.0,2.0] = [1.0,4.0];
                 neg [1.0,2.0] = [-2.0,-1.0];
                 mul [1.0,2.0] [1.0,2.0] = [1.0,4.0];
             }",
        )
        .unwrap();
        assert_eq!(out.content, "case t\neq(neg(I(1.0, 2.0)), I(-2.0, -1.0));");
        assert_eq!(
            out.warnings,
            vec![
                "WARNING: no matching operation found for operation \
                 arith_op_mul<<interval<double>>><interval<double>,interval<double>>, language toy"
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_overlap_output_signature() {
        let out = render("testcase t { overlap [1.0,2.0] [2.0,3.0] = meets; }").unwrap();
        assert_eq!(out.content, "case t\neq(ov(I(1.0, 2.0), I(2.0, 3.0)), MEETS);");
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_indented_testcases_are_not_trimmed() {
        let lang = LANG.replace("indent_testcases: false", "indent_testcases: true");
        let spec = Specification::from_yaml(&lang, TEST, ARITH).unwrap();
        let doc = parse_document(
            "testcase a { neg [1.0,2.0] = [-2.0,-1.0]; }\ntestcase b { neg [1.0,2.0] = [-2.0,-1.0]; }",
            "unit.itl",
        )
        .unwrap();
        let out = generate(&doc, &spec, &IdentityCallbacks).unwrap();
        // the empty comment line of each testcase is kept and indented too
        assert_eq!(
            out.content,
            "  \n  case a\n  eq(neg(I(1.0, 2.0)), I(-2.0, -1.0));\n\n  \n  case b\n  eq(neg(I(1.0, 2.0)), I(-2.0, -1.0));"
        );
    }

    #[test]
    fn test_output_type_mismatch() {
        let err = render("testcase t { neg [1.0,2.0] = [1.0,2.0] <= meets; }").unwrap_err();
        assert!(matches!(err, GenerateError::OutputTypeMismatch { .. }));
    }

    #[test]
    fn test_all_inputs_are_rendered() {
        let out = render(
            "testcase t {
                 rel [empty] [1.0,2.0]_com [-inf,+inf] [entireF]_com true false meets 3 2.5 \"s\" = true;
             }",
        )
        .unwrap();
        assert_eq!(out.content, "case t\neq(rel(E()), yes);");
    }

    #[test]
    fn test_literals_through_templates() {
        let spec = spec();
        let generator = Generator::new(&spec, &IdentityCallbacks);
        let doc = parse_document(
            "testcase t { rel [-inf,+inf] [entireF]_com true meets 3 \"s\" = true; }",
            "unit.itl",
        )
        .unwrap();
        let rendered: Vec<String> = doc.testcases[0].tests[0]
            .inputs()
            .iter()
            .map(|lit| generator.literal(lit).unwrap())
            .collect();
        assert_eq!(
            rendered,
            vec!["I(-INF, INF)", "W<f>(com)", "yes", "MEETS", "3", "\"s\""]
        );
    }

    #[test]
    fn test_decorated_infsup() {
        let spec = spec();
        let generator = Generator::new(&spec, &IdentityCallbacks);
        let doc = parse_document("testcase t { rel [1.0,2.0]_com = meets; }", "unit.itl").unwrap();
        let rendered = generator.literal(&doc.testcases[0].tests[0].inputs()[0]).unwrap();
        assert_eq!(rendered, "D(1.0, 2.0, com)");
    }

    #[test]
    fn test_number_templates() {
        let lang = format!("{}literal_double: \"real(${{NUM}})\"\n", LANG);
        let spec = Specification::from_yaml(&lang, TEST, ARITH).unwrap();
        let generator = Generator::new(&spec, &IdentityCallbacks);
        let doc = parse_document("testcase t { rel 3ul 2.5 [1,2] = true; }", "unit.itl").unwrap();
        let rendered: Vec<String> = doc.testcases[0].tests[0]
            .inputs()
            .iter()
            .map(|lit| generator.literal(lit).unwrap())
            .collect();
        assert_eq!(rendered, vec!["3ul", "real(2.5)", "I(real(1), real(2))"]);
    }

    #[test]
    fn test_missing_key_is_fatal() {
        let err = render("testcase t { rel [1.0F,2.0F] = true; }").unwrap_err();
        assert_eq!(
            err,
            GenerateError::MissingKey {
                key: "arith_inf_sup_interval_float".to_string()
            }
        );
    }

    #[test]
    fn test_comments_and_callbacks() {
        let doc = parse_document(
            "testcase a.b {\n  // line\n  /*\n   block\n  */\n  neg [1.0,2.0] = [-2.0,-1.0];\n}",
            "unit.itl",
        )
        .unwrap();
        let callbacks = RewriteCallbacks::from_yaml(
            "qualident:\n  - pattern: '\\.'\n    replace: '_'\nfp_num:\n  - pattern: '^(.+)$'\n    replace: 'f($1)'\n",
        )
        .unwrap();
        let out = generate(&doc, &spec(), &callbacks).unwrap();
        assert_eq!(
            out.content,
            "case a_b\n// line\n/*\n *    block\n */\neq(neg(I(f(1.0), f(2.0))), I(f(-2.0), f(-1.0)));"
        );
    }
}
