// AST (Abstract Syntax Tree) definitions for ITL test files

use std::fmt;
use thiserror::Error;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Errors raised while building AST nodes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AstError {
    /// The two bounds of `[a, b]` were inferred with different types
    #[error("can not instantiate infsup interval with bounds of type {inf} and {sup}")]
    BoundTypeMismatch { inf: FloatType, sup: FloatType },

    /// A test declares neither tightest nor accurate outputs
    #[error("test '{op_name}' declares neither tightest nor accurate outputs")]
    MissingOutputs { op_name: String },
}

// ===== Types =====

/// Floating point formats, selected by the `F` / `L` literal suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatType {
    Float,
    Double,
    LongDouble,
}

impl FloatType {
    /// Infer the type from a floating suffix. Only the upper case `F` and `L`
    /// select a type, anything else (lower case included) is a double.
    pub fn from_suffix(suffix: &str) -> Self {
        match suffix {
            "F" => FloatType::Float,
            "L" => FloatType::LongDouble,
            _ => FloatType::Double,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FloatType::Float => "float",
            FloatType::Double => "double",
            FloatType::LongDouble => "long_double",
        }
    }
}

impl fmt::Display for FloatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Integer widths, selected by the `l` / `ll` literal suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntType {
    Int,
    Long,
    LongLong,
}

impl IntType {
    /// Infer `(type, unsigned)` from a C integer suffix (`u`, `l`, `ll` in any
    /// valid order, case-insensitive).
    pub fn from_suffix(suffix: &str) -> (Self, bool) {
        let lower = suffix.to_ascii_lowercase();
        let unsigned = lower.contains('u');
        let ty = match lower.matches('l').count() {
            0 => IntType::Int,
            1 => IntType::Long,
            _ => IntType::LongLong,
        };
        (ty, unsigned)
    }

    pub fn name(&self) -> &'static str {
        match self {
            IntType::Int => "int",
            IntType::Long => "long",
            IntType::LongLong => "long_long",
        }
    }
}

/// The type of a literal, as used in operation signatures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralType {
    Integer(IntType),
    Float(FloatType),
    String,
    Boolean,
    Overlap,
    Interval(FloatType),
}

impl fmt::Display for LiteralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralType::Integer(ty) => f.write_str(ty.name()),
            LiteralType::Float(ty) => f.write_str(ty.name()),
            LiteralType::String => f.write_str("string"),
            // signature keys in arithmetic specifications use these names
            LiteralType::Boolean => f.write_str("BooleanLiteralNode"),
            LiteralType::Overlap => f.write_str("OverlapLiteralNode"),
            LiteralType::Interval(ty) => write!(f, "interval<{}>", ty.name()),
        }
    }
}

// ===== Literals =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

/// IEEE 1788 decorations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    Trv,
    Def,
    Dac,
    Com,
    Ill,
}

impl Decoration {
    pub fn name(&self) -> &'static str {
        match self {
            Decoration::Trv => "trv",
            Decoration::Def => "def",
            Decoration::Dac => "dac",
            Decoration::Com => "com",
            Decoration::Ill => "ill",
        }
    }
}

/// The sixteen interval overlapping states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapRelation {
    BothEmpty,
    FirstEmpty,
    SecondEmpty,
    Before,
    Meets,
    Overlaps,
    Starts,
    ContainedBy,
    Finishes,
    Equal,
    FinishedBy,
    Contains,
    StartedBy,
    OverlappedBy,
    MetBy,
    After,
}

impl OverlapRelation {
    pub const ALL: [OverlapRelation; 16] = [
        OverlapRelation::BothEmpty,
        OverlapRelation::FirstEmpty,
        OverlapRelation::SecondEmpty,
        OverlapRelation::Before,
        OverlapRelation::Meets,
        OverlapRelation::Overlaps,
        OverlapRelation::Starts,
        OverlapRelation::ContainedBy,
        OverlapRelation::Finishes,
        OverlapRelation::Equal,
        OverlapRelation::FinishedBy,
        OverlapRelation::Contains,
        OverlapRelation::StartedBy,
        OverlapRelation::OverlappedBy,
        OverlapRelation::MetBy,
        OverlapRelation::After,
    ];

    /// The keyword as written in ITL files
    pub fn name(&self) -> &'static str {
        match self {
            OverlapRelation::BothEmpty => "bothEmpty",
            OverlapRelation::FirstEmpty => "firstEmpty",
            OverlapRelation::SecondEmpty => "secondEmpty",
            OverlapRelation::Before => "before",
            OverlapRelation::Meets => "meets",
            OverlapRelation::Overlaps => "overlaps",
            OverlapRelation::Starts => "starts",
            OverlapRelation::ContainedBy => "containedBy",
            OverlapRelation::Finishes => "finishes",
            OverlapRelation::Equal => "equal",
            OverlapRelation::FinishedBy => "finishedBy",
            OverlapRelation::Contains => "contains",
            OverlapRelation::StartedBy => "startedBy",
            OverlapRelation::OverlappedBy => "overlappedBy",
            OverlapRelation::MetBy => "metBy",
            OverlapRelation::After => "after",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|rel| rel.name() == name)
    }
}

/// A floating point constant, kept as written
#[derive(Debug, Clone, PartialEq)]
pub struct FloatLiteral {
    pub text: String,
    pub ty: FloatType,
}

/// A bound of an inf-sup interval
#[derive(Debug, Clone, PartialEq)]
pub enum Bound {
    Number(FloatLiteral),
    Infinity { sign: Sign, ty: FloatType },
}

impl Bound {
    pub fn ty(&self) -> FloatType {
        match self {
            Bound::Number(lit) => lit.ty,
            Bound::Infinity { ty, .. } => *ty,
        }
    }
}

/// `[inf, sup]`, whose bounds always share one type
#[derive(Debug, Clone, PartialEq)]
pub struct InfSupInterval {
    inf: Bound,
    sup: Bound,
    decoration: Option<Decoration>,
}

impl InfSupInterval {
    pub fn new(
        inf: Bound,
        sup: Bound,
        decoration: Option<Decoration>,
    ) -> Result<Self, AstError> {
        if inf.ty() != sup.ty() {
            return Err(AstError::BoundTypeMismatch {
                inf: inf.ty(),
                sup: sup.ty(),
            });
        }
        Ok(Self {
            inf,
            sup,
            decoration,
        })
    }

    pub fn inf(&self) -> &Bound {
        &self.inf
    }

    pub fn sup(&self) -> &Bound {
        &self.sup
    }

    pub fn decoration(&self) -> Option<Decoration> {
        self.decoration
    }

    pub fn element_type(&self) -> FloatType {
        self.inf.ty()
    }

    pub fn with_decoration(self, decoration: Decoration) -> Self {
        Self {
            decoration: Some(decoration),
            ..self
        }
    }
}

/// The interval constants without bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialKind {
    Empty,
    Entire,
    NotAnInterval,
}

impl SpecialKind {
    /// Key fragment used by the arithmetic specification (`empty`, `entire`, `nai`)
    pub fn key(&self) -> &'static str {
        match self {
            SpecialKind::Empty => "empty",
            SpecialKind::Entire => "entire",
            SpecialKind::NotAnInterval => "nai",
        }
    }
}

/// Interval literals
#[derive(Debug, Clone, PartialEq)]
pub enum Interval {
    InfSup(InfSupInterval),
    Special {
        kind: SpecialKind,
        ty: FloatType,
        decoration: Option<Decoration>,
    },
}

impl Interval {
    pub fn element_type(&self) -> FloatType {
        match self {
            Interval::InfSup(interval) => interval.element_type(),
            Interval::Special { ty, .. } => *ty,
        }
    }

    pub fn decoration(&self) -> Option<Decoration> {
        match self {
            Interval::InfSup(interval) => interval.decoration(),
            Interval::Special { decoration, .. } => *decoration,
        }
    }
}

/// Literal values usable as inputs and outputs of a test
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Integer {
        text: String,
        ty: IntType,
        unsigned: bool,
    },
    Float(FloatLiteral),
    Infinity {
        sign: Sign,
        ty: FloatType,
    },
    /// Raw string token, quotes included
    String(String),
    Boolean(bool),
    Overlap(OverlapRelation),
    Interval(Interval),
}

impl Literal {
    pub fn literal_type(&self) -> LiteralType {
        match self {
            Literal::Integer { ty, .. } => LiteralType::Integer(*ty),
            Literal::Float(lit) => LiteralType::Float(lit.ty),
            Literal::Infinity { ty, .. } => LiteralType::Float(*ty),
            Literal::String(_) => LiteralType::String,
            Literal::Boolean(_) => LiteralType::Boolean,
            Literal::Overlap(_) => LiteralType::Overlap,
            Literal::Interval(interval) => {
                LiteralType::Interval(interval.element_type())
            }
        }
    }
}

/// Comma-joined type names, e.g. `interval<double>,interval<double>`
pub fn type_signature(literals: &[Literal]) -> String {
    literals
        .iter()
        .map(|lit| lit.literal_type().to_string())
        .collect::<Vec<_>>()
        .join(",")
}

// ===== Structure =====

/// `//` and `/* */` comments carried into the generated code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comment {
    /// Full text including the leading `//`
    Line(String, SourceLocation),
    /// Full text including `/*` and `*/`
    Block(String, SourceLocation),
}

/// Dotted identifier chain, e.g. `minimal.add`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Qualident {
    pub parts: Vec<String>,
}

impl fmt::Display for Qualident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.parts.join("."))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationName(pub String);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Inputs(pub Vec<Literal>);

#[derive(Debug, Clone, PartialEq)]
pub struct TightestOutputs(pub Vec<Literal>);

#[derive(Debug, Clone, PartialEq)]
pub struct AccurateOutputs(pub Vec<Literal>);

/// One operation application: `add [1,2] [3,4] = [4,6] <= [0,7];`
#[derive(Debug, Clone, PartialEq)]
pub struct Test {
    op_name: OperationName,
    inputs: Option<Inputs>,
    tightest: Option<TightestOutputs>,
    accurate: Option<AccurateOutputs>,
    comments: Vec<Comment>,
    location: SourceLocation,
}

impl Test {
    pub fn new(
        op_name: OperationName,
        inputs: Option<Inputs>,
        tightest: Option<TightestOutputs>,
        accurate: Option<AccurateOutputs>,
        comments: Vec<Comment>,
        location: SourceLocation,
    ) -> Result<Self, AstError> {
        if tightest.is_none() && accurate.is_none() {
            return Err(AstError::MissingOutputs {
                op_name: op_name.0,
            });
        }
        Ok(Self {
            op_name,
            inputs,
            tightest,
            accurate,
            comments,
            location,
        })
    }

    pub fn op_name(&self) -> &OperationName {
        &self.op_name
    }

    /// Input literals; empty when the test has no inputs
    pub fn inputs(&self) -> &[Literal] {
        self.inputs.as_ref().map(|i| i.0.as_slice()).unwrap_or(&[])
    }

    pub fn tightest(&self) -> Option<&TightestOutputs> {
        self.tightest.as_ref()
    }

    pub fn accurate(&self) -> Option<&AccurateOutputs> {
        self.accurate.as_ref()
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn location(&self) -> SourceLocation {
        self.location
    }
}

/// A named group of tests
#[derive(Debug, Clone, PartialEq)]
pub struct Testcase {
    pub name: Qualident,
    pub tests: Vec<Test>,
    pub comments: Vec<Comment>,
    pub location: SourceLocation,
}

/// Root node: one parsed ITL file
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub file_name: String,
    pub comment: Option<Comment>,
    pub testcases: Vec<Testcase>,
}

impl Document {
    /// Total number of tests across all testcases
    pub fn test_count(&self) -> usize {
        self.testcases.iter().map(|tc| tc.tests.len()).sum()
    }
}
