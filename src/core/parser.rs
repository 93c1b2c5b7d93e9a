//! Best-effort parser for the Compose/Kotlin expression subset the rules
//! inspect.
//!
//! This is not a Kotlin frontend. It recovers the shapes the analyzers care
//! about — calls with positional/named arguments, fluent chains, trailing
//! lambdas (declaration-tree nesting), literals, prefix `!` and postfix
//! `!!` — and skips everything it cannot model. Skipped syntax produces no
//! nodes rather than errors.

use super::index::FormalParameter;

/// Index of a node in the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// An actual argument at a call site
#[derive(Debug, Clone)]
pub struct Argument {
    /// Explicit parameter name if given at the call site (`name = value`)
    pub name: Option<String>,
    pub value: NodeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Prefix logical not (`!`)
    Not,
    /// Postfix not-null assertion (`!!`)
    NotNull,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    Null,
}

/// Expression payload of a node
#[derive(Debug, Clone)]
pub enum Expr {
    Call {
        name: String,
        args: Vec<Argument>,
        receiver: Option<NodeId>,
        /// Statements of a trailing lambda, if any
        children: Vec<NodeId>,
    },
    Reference {
        name: String,
        receiver: Option<NodeId>,
    },
    Literal(LiteralValue),
    Unary {
        op: UnaryOp,
        operand: NodeId,
    },
    Lambda {
        body: Vec<NodeId>,
    },
}

/// Node classification exposed to rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Call,
    /// A call with a receiver, i.e. one step of a fluent chain
    ChainedCall,
    Reference,
    Literal,
    Unary,
    Lambda,
}

/// A node in the syntax tree
#[derive(Debug, Clone)]
pub struct NodeData {
    pub expr: Expr,
    pub parent: Option<NodeId>,
    /// Byte span into the source
    pub start: usize,
    pub end: usize,
}

impl NodeData {
    pub fn kind(&self) -> NodeKind {
        match &self.expr {
            Expr::Call { receiver: Some(_), .. } => NodeKind::ChainedCall,
            Expr::Call { .. } => NodeKind::Call,
            Expr::Reference { .. } => NodeKind::Reference,
            Expr::Literal(_) => NodeKind::Literal,
            Expr::Unary { .. } => NodeKind::Unary,
            Expr::Lambda { .. } => NodeKind::Lambda,
        }
    }

    pub fn is_call(&self) -> bool {
        matches!(self.expr, Expr::Call { .. })
    }

    /// Call or reference name
    pub fn name(&self) -> Option<&str> {
        match &self.expr {
            Expr::Call { name, .. } | Expr::Reference { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn args(&self) -> &[Argument] {
        match &self.expr {
            Expr::Call { args, .. } => args,
            _ => &[],
        }
    }

    pub fn receiver(&self) -> Option<NodeId> {
        match &self.expr {
            Expr::Call { receiver, .. } | Expr::Reference { receiver, .. } => *receiver,
            _ => None,
        }
    }

    pub fn children(&self) -> &[NodeId] {
        match &self.expr {
            Expr::Call { children, .. } => children,
            Expr::Lambda { body } => body,
            _ => &[],
        }
    }

    pub fn literal(&self) -> Option<&LiteralValue> {
        match &self.expr {
            Expr::Literal(v) => Some(v),
            _ => None,
        }
    }
}

/// Arena-backed immutable syntax tree
#[derive(Debug, Default)]
pub struct SyntaxTree {
    nodes: Vec<NodeData>,
    roots: Vec<NodeId>,
}

impl SyntaxTree {
    pub fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0 as usize]
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All node ids, in arena order
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    fn push(&mut self, expr: Expr, start: usize, end: usize) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            expr,
            parent: None,
            start,
            end,
        });
        id
    }

    fn set_parent(&mut self, child: NodeId, parent: NodeId) {
        self.nodes[child.0 as usize].parent = Some(parent);
    }
}

/// A top-level or member function declaration, used to index signatures
#[derive(Debug, Clone)]
pub struct FunctionDecl {
    pub name: String,
    pub params: Vec<FormalParameter>,
}

/// Output of a parse: the tree plus any function declarations seen
#[derive(Debug, Default)]
pub struct ParseResult {
    pub tree: SyntaxTree,
    pub functions: Vec<FunctionDecl>,
}

/// Parse a source file. Never fails; unparseable constructs are skipped.
pub fn parse(source: &str) -> ParseResult {
    let tokens = lex(source);
    let mut parser = Parser {
        source,
        tokens,
        pos: 0,
        tree: SyntaxTree::default(),
        functions: Vec::new(),
    };
    let roots = parser.parse_statements(true);
    parser.tree.roots = roots;
    ParseResult {
        tree: parser.tree,
        functions: parser.functions,
    }
}

// === Lexer ===

#[derive(Debug, Clone, PartialEq)]
enum Tok {
    Ident(String),
    Number(String),
    Str,
    Punct(char),
    /// `!`
    Excl,
    /// `!!`
    ExclExcl,
    /// `->`
    Arrow,
    /// Any other operator run (`==`, `&&`, `?:`, ...)
    Op,
    Eof,
}

#[derive(Debug, Clone)]
struct Token {
    tok: Tok,
    start: usize,
    end: usize,
}

const OP_CHARS: &str = "+-*/%<>=!&|?^~";

fn lex(source: &str) -> Vec<Token> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i] as char;

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Comments
        if c == '/' && i + 1 < bytes.len() {
            match bytes[i + 1] as char {
                '/' => {
                    while i < bytes.len() && bytes[i] != b'\n' {
                        i += 1;
                    }
                    continue;
                }
                '*' => {
                    i += 2;
                    while i + 1 < bytes.len() && !(bytes[i] == b'*' && bytes[i + 1] == b'/') {
                        i += 1;
                    }
                    i = (i + 2).min(bytes.len());
                    continue;
                }
                _ => {}
            }
        }

        let start = i;

        if c.is_ascii_alphabetic() || c == '_' {
            while i < bytes.len()
                && ((bytes[i] as char).is_ascii_alphanumeric() || bytes[i] == b'_')
            {
                i += 1;
            }
            tokens.push(Token {
                tok: Tok::Ident(source[start..i].to_string()),
                start,
                end: i,
            });
            continue;
        }

        if c.is_ascii_digit() {
            if c == '0' && i + 1 < bytes.len() && (bytes[i + 1] == b'x' || bytes[i + 1] == b'X') {
                i += 2;
                while i < bytes.len() && (bytes[i] as char).is_ascii_hexdigit() {
                    i += 1;
                }
            } else {
                while i < bytes.len() && (bytes[i] as char).is_ascii_digit() {
                    i += 1;
                }
                // Fraction, but not a trailing `.dp` / `.sp` selector
                if i + 1 < bytes.len()
                    && bytes[i] == b'.'
                    && (bytes[i + 1] as char).is_ascii_digit()
                {
                    i += 1;
                    while i < bytes.len() && (bytes[i] as char).is_ascii_digit() {
                        i += 1;
                    }
                }
                if i < bytes.len() && matches!(bytes[i], b'f' | b'F' | b'L') {
                    i += 1;
                }
            }
            tokens.push(Token {
                tok: Tok::Number(source[start..i].to_string()),
                start,
                end: i,
            });
            continue;
        }

        if c == '"' || c == '\'' {
            let quote = bytes[i];
            i += 1;
            while i < bytes.len() && bytes[i] != quote {
                if bytes[i] == b'\\' {
                    i += 1;
                }
                i += 1;
            }
            i = (i + 1).min(bytes.len());
            tokens.push(Token {
                tok: Tok::Str,
                start,
                end: i,
            });
            continue;
        }

        if OP_CHARS.contains(c) {
            while i < bytes.len() && OP_CHARS.contains(bytes[i] as char) {
                i += 1;
            }
            let text = &source[start..i];
            let tok = match text {
                "!" => Tok::Excl,
                "!!" => Tok::ExclExcl,
                "->" => Tok::Arrow,
                "=" => Tok::Punct('='),
                "?" => Tok::Punct('?'),
                "<" => Tok::Punct('<'),
                ">" => Tok::Punct('>'),
                _ => Tok::Op,
            };
            tokens.push(Token {
                tok,
                start,
                end: i,
            });
            continue;
        }

        i += 1;
        tokens.push(Token {
            tok: Tok::Punct(c),
            start,
            end: i,
        });
    }

    tokens.push(Token {
        tok: Tok::Eof,
        start: source.len(),
        end: source.len(),
    });
    tokens
}

// === Parser ===

struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    tree: SyntaxTree,
    functions: Vec<FunctionDecl>,
}

const SKIPPED_KEYWORDS: &[&str] = &[
    "override", "private", "public", "internal", "protected", "open", "abstract", "final",
    "suspend", "inline", "data", "enum", "companion", "sealed", "lateinit", "operator",
    "super", "this", "else", "try", "catch", "finally", "do", "while", "for", "when", "if",
    "in", "is", "as", "by", "constructor", "init", "return", "throw",
];

impl<'a> Parser<'a> {
    fn peek(&self) -> &Tok {
        &self.tokens[self.pos].tok
    }

    fn peek_at(&self, offset: usize) -> &Tok {
        let idx = (self.pos + offset).min(self.tokens.len() - 1);
        &self.tokens[idx].tok
    }

    fn cur_start(&self) -> usize {
        self.tokens[self.pos].start
    }

    fn prev_end(&self) -> usize {
        if self.pos == 0 {
            0
        } else {
            self.tokens[self.pos - 1].end
        }
    }

    fn bump(&mut self) -> Token {
        let tok = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn eat_punct(&mut self, c: char) -> bool {
        if *self.peek() == Tok::Punct(c) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Parse statements until `}` (or EOF when `top_level`)
    fn parse_statements(&mut self, top_level: bool) -> Vec<NodeId> {
        let mut out = Vec::new();
        loop {
            match self.peek().clone() {
                Tok::Eof => break,
                Tok::Punct('}') => {
                    if top_level {
                        self.bump(); // stray brace, skip
                        continue;
                    }
                    break;
                }
                Tok::Punct('@') => {
                    self.skip_annotation();
                }
                Tok::Ident(word) => match word.as_str() {
                    "package" | "import" => self.skip_line(),
                    "fun" => self.parse_function(&mut out),
                    "class" | "object" | "interface" => {
                        self.bump();
                        self.skip_until_open_brace();
                        if self.eat_punct('{') {
                            let body = self.parse_statements(false);
                            out.extend(body);
                            self.eat_punct('}');
                        }
                    }
                    "val" | "var" => {
                        self.bump();
                        self.bump(); // binding name
                        // Optional type annotation
                        if self.eat_punct(':') {
                            self.skip_type();
                        }
                        if self.eat_punct('=') {
                            if let Some(id) = self.parse_expression() {
                                out.push(id);
                            }
                        }
                    }
                    _ if SKIPPED_KEYWORDS.contains(&word.as_str()) => {
                        self.bump();
                    }
                    _ => {
                        if let Some(id) = self.parse_expression() {
                            out.push(id);
                        } else {
                            self.bump();
                        }
                    }
                },
                Tok::Punct('{') => {
                    self.bump();
                    let body = self.parse_statements(false);
                    out.extend(body);
                    self.eat_punct('}');
                }
                Tok::Excl | Tok::ExclExcl | Tok::Number(_) | Tok::Str | Tok::Punct('(') => {
                    if let Some(id) = self.parse_expression() {
                        out.push(id);
                    } else {
                        self.bump();
                    }
                }
                _ => {
                    self.bump();
                }
            }
        }
        out
    }

    /// `fun [Recv.]name(params) [: Type] { body }` or `= expr`
    fn parse_function(&mut self, out: &mut Vec<NodeId>) {
        self.bump(); // fun
        if *self.peek() == Tok::Punct('<') {
            self.skip_angle_brackets();
        }
        let mut name = match self.bump().tok {
            Tok::Ident(n) => n,
            _ => return,
        };
        while self.eat_punct('.') {
            if let Tok::Ident(n) = self.bump().tok {
                name = n;
            }
        }

        let params = if *self.peek() == Tok::Punct('(') {
            self.parse_formal_params()
        } else {
            Vec::new()
        };
        self.functions.push(FunctionDecl {
            name,
            params,
        });

        if self.eat_punct(':') {
            self.skip_type();
        }
        if self.eat_punct('{') {
            let body = self.parse_statements(false);
            out.extend(body);
            self.eat_punct('}');
        } else if self.eat_punct('=') {
            if let Some(id) = self.parse_expression() {
                out.push(id);
            }
        }
    }

    /// Formal parameter list of a function declaration
    fn parse_formal_params(&mut self) -> Vec<FormalParameter> {
        let mut params = Vec::new();
        self.bump(); // (
        let mut position = 0;
        loop {
            match self.peek().clone() {
                Tok::Punct(')') | Tok::Eof => {
                    self.bump();
                    break;
                }
                Tok::Punct('@') => self.skip_annotation(),
                Tok::Ident(word) if word == "vararg" || word == "crossinline" || word == "noinline" => {
                    self.bump();
                }
                Tok::Ident(name) => {
                    self.bump();
                    let mut default = None;
                    if self.eat_punct(':') {
                        self.skip_type();
                    }
                    if self.eat_punct('=') {
                        let start = self.cur_start();
                        self.skip_default_value();
                        let end = self.prev_end();
                        if end > start {
                            default = Some(self.source[start..end].to_string());
                        }
                    }
                    params.push(FormalParameter {
                        name,
                        position,
                        default,
                    });
                    position += 1;
                    self.eat_punct(',');
                }
                _ => {
                    self.bump();
                }
            }
        }
        params
    }

    /// Skip a type annotation: tokens until `,` `)` `=` `{` at depth 0
    fn skip_type(&mut self) {
        let mut depth = 0i32;
        loop {
            match self.peek() {
                Tok::Eof => break,
                Tok::Punct('(') | Tok::Punct('<') => {
                    depth += 1;
                    self.bump();
                }
                Tok::Punct(')') | Tok::Punct('>') if depth > 0 => {
                    depth -= 1;
                    self.bump();
                }
                Tok::Punct(')') | Tok::Punct(',') | Tok::Punct('=') | Tok::Punct('{') => break,
                Tok::Arrow => {
                    self.bump();
                }
                _ => {
                    self.bump();
                }
            }
        }
    }

    /// Skip a default value expression: tokens until `,` or `)` at depth 0
    fn skip_default_value(&mut self) {
        let mut depth = 0i32;
        loop {
            match self.peek() {
                Tok::Eof => break,
                Tok::Punct('(') | Tok::Punct('{') => {
                    depth += 1;
                    self.bump();
                }
                Tok::Punct(')') if depth > 0 => {
                    depth -= 1;
                    self.bump();
                }
                Tok::Punct('}') if depth > 0 => {
                    depth -= 1;
                    self.bump();
                }
                Tok::Punct(')') | Tok::Punct(',') => break,
                _ => {
                    self.bump();
                }
            }
        }
    }

    fn skip_annotation(&mut self) {
        self.bump(); // @
        if matches!(self.peek(), Tok::Ident(_)) {
            self.bump();
            while self.eat_punct('.') {
                if matches!(self.peek(), Tok::Ident(_)) {
                    self.bump();
                }
            }
        }
        if *self.peek() == Tok::Punct('(') {
            self.skip_balanced('(', ')');
        }
    }

    fn skip_balanced(&mut self, open: char, close: char) {
        let mut depth = 0i32;
        loop {
            match self.peek() {
                Tok::Eof => break,
                Tok::Punct(c) if *c == open => {
                    depth += 1;
                    self.bump();
                }
                Tok::Punct(c) if *c == close => {
                    depth -= 1;
                    self.bump();
                    if depth <= 0 {
                        break;
                    }
                }
                _ => {
                    self.bump();
                }
            }
        }
    }

    fn skip_angle_brackets(&mut self) {
        self.skip_balanced('<', '>');
    }

    fn skip_until_open_brace(&mut self) {
        while !matches!(self.peek(), Tok::Punct('{') | Tok::Eof) {
            self.bump();
        }
    }

    /// Skip tokens on the same physical line as the current one
    fn skip_line(&mut self) {
        let from = self.cur_start();
        let line_end = self.source[from..]
            .find('\n')
            .map(|n| from + n)
            .unwrap_or(self.source.len());
        while self.tokens[self.pos].start <= line_end && !matches!(self.peek(), Tok::Eof) {
            self.bump();
        }
    }

    // === Expressions ===

    fn parse_expression(&mut self) -> Option<NodeId> {
        self.parse_unary()
    }

    fn parse_unary(&mut self) -> Option<NodeId> {
        match self.peek() {
            Tok::Excl => {
                let start = self.cur_start();
                self.bump();
                let operand = self.parse_unary()?;
                let end = self.tree.node(operand).end;
                let id = self.tree.push(
                    Expr::Unary {
                        op: UnaryOp::Not,
                        operand,
                    },
                    start,
                    end,
                );
                self.tree.set_parent(operand, id);
                Some(id)
            }
            // Prefix `!!x` is two stacked logical nots
            Tok::ExclExcl => {
                let start = self.cur_start();
                self.bump();
                let operand = self.parse_unary()?;
                let end = self.tree.node(operand).end;
                let inner = self.tree.push(
                    Expr::Unary {
                        op: UnaryOp::Not,
                        operand,
                    },
                    start + 1,
                    end,
                );
                self.tree.set_parent(operand, inner);
                let outer = self.tree.push(
                    Expr::Unary {
                        op: UnaryOp::Not,
                        operand: inner,
                    },
                    start,
                    end,
                );
                self.tree.set_parent(inner, outer);
                Some(outer)
            }
            _ => self.parse_postfix(),
        }
    }

    fn parse_postfix(&mut self) -> Option<NodeId> {
        let mut current = self.parse_primary()?;
        loop {
            // Safe-call `?.` reads the same as `.` here
            if *self.peek() == Tok::Punct('?') && *self.peek_at(1) == Tok::Punct('.') {
                self.bump();
            }
            match self.peek() {
                Tok::Punct('.') if matches!(self.peek_at(1), Tok::Ident(_)) => {
                    self.bump();
                    let name = match self.bump().tok {
                        Tok::Ident(n) => n,
                        _ => unreachable!(),
                    };
                    let start = self.tree.node(current).start;
                    if matches!(self.peek(), Tok::Punct('(') | Tok::Punct('{')) {
                        let args = if *self.peek() == Tok::Punct('(') {
                            self.parse_call_args()
                        } else {
                            Vec::new()
                        };
                        let children = self.parse_trailing_lambda();
                        let end = self.prev_end();
                        let id = self.tree.push(
                            Expr::Call {
                                name,
                                args,
                                receiver: Some(current),
                                children,
                            },
                            start,
                            end,
                        );
                        self.adopt_call_parts(id);
                        self.tree.set_parent(current, id);
                        current = id;
                    } else {
                        let end = self.prev_end();
                        let id = self.tree.push(
                            Expr::Reference {
                                name,
                                receiver: Some(current),
                            },
                            start,
                            end,
                        );
                        self.tree.set_parent(current, id);
                        current = id;
                    }
                }
                Tok::ExclExcl => {
                    self.bump();
                    let start = self.tree.node(current).start;
                    let end = self.prev_end();
                    let id = self.tree.push(
                        Expr::Unary {
                            op: UnaryOp::NotNull,
                            operand: current,
                        },
                        start,
                        end,
                    );
                    self.tree.set_parent(current, id);
                    current = id;
                }
                _ => break,
            }
        }
        Some(current)
    }

    fn parse_primary(&mut self) -> Option<NodeId> {
        match self.peek().clone() {
            Tok::Number(text) => {
                let start = self.cur_start();
                self.bump();
                let end = self.prev_end();
                let value = parse_number(&text);
                Some(self.tree.push(Expr::Literal(value), start, end))
            }
            Tok::Str => {
                let start = self.cur_start();
                self.bump();
                let end = self.prev_end();
                let inner = self.source[start..end]
                    .trim_matches(|c| c == '"' || c == '\'')
                    .to_string();
                Some(
                    self.tree
                        .push(Expr::Literal(LiteralValue::Str(inner)), start, end),
                )
            }
            Tok::Ident(name) => {
                let start = self.cur_start();
                match name.as_str() {
                    "true" | "false" => {
                        self.bump();
                        let end = self.prev_end();
                        return Some(self.tree.push(
                            Expr::Literal(LiteralValue::Bool(name == "true")),
                            start,
                            end,
                        ));
                    }
                    "null" => {
                        self.bump();
                        let end = self.prev_end();
                        return Some(self.tree.push(Expr::Literal(LiteralValue::Null), start, end));
                    }
                    _ if SKIPPED_KEYWORDS.contains(&name.as_str()) => return None,
                    _ => {}
                }
                self.bump();
                if *self.peek() == Tok::Punct('(') {
                    let args = self.parse_call_args();
                    let children = self.parse_trailing_lambda();
                    let end = self.prev_end();
                    let id = self.tree.push(
                        Expr::Call {
                            name,
                            args,
                            receiver: None,
                            children,
                        },
                        start,
                        end,
                    );
                    self.adopt_call_parts(id);
                    Some(id)
                } else if *self.peek() == Tok::Punct('{') {
                    // Call with only a trailing lambda, e.g. `Column { ... }`
                    let children = self.parse_trailing_lambda();
                    let end = self.prev_end();
                    let id = self.tree.push(
                        Expr::Call {
                            name,
                            args: Vec::new(),
                            receiver: None,
                            children,
                        },
                        start,
                        end,
                    );
                    self.adopt_call_parts(id);
                    Some(id)
                } else {
                    let end = self.prev_end();
                    Some(self.tree.push(
                        Expr::Reference {
                            name,
                            receiver: None,
                        },
                        start,
                        end,
                    ))
                }
            }
            Tok::Punct('(') => {
                self.bump();
                let inner = self.parse_expression();
                self.eat_punct(')');
                inner
            }
            Tok::Punct('{') => {
                let start = self.cur_start();
                self.bump();
                let body = self.parse_lambda_body();
                let end = self.prev_end();
                let id = self.tree.push(Expr::Lambda { body: body.clone() }, start, end);
                for stmt in body {
                    self.tree.set_parent(stmt, id);
                }
                Some(id)
            }
            _ => None,
        }
    }

    /// `(arg, name = arg, ...)`
    fn parse_call_args(&mut self) -> Vec<Argument> {
        let mut args = Vec::new();
        self.bump(); // (
        loop {
            match self.peek() {
                Tok::Punct(')') | Tok::Eof => {
                    self.bump();
                    break;
                }
                Tok::Punct(',') => {
                    self.bump();
                }
                _ => {
                    let name = if let (Tok::Ident(n), Tok::Punct('=')) =
                        (self.peek().clone(), self.peek_at(1).clone())
                    {
                        self.bump();
                        self.bump();
                        Some(n)
                    } else {
                        None
                    };
                    match self.parse_expression() {
                        Some(value) => args.push(Argument { name, value }),
                        None => {
                            // Skip what we cannot parse, up to the next
                            // separator at this nesting level
                            self.skip_default_value();
                        }
                    }
                }
            }
        }
        args
    }

    /// Body of a `{ ... }` following a call, as declaration-tree children
    fn parse_trailing_lambda(&mut self) -> Vec<NodeId> {
        if *self.peek() != Tok::Punct('{') {
            return Vec::new();
        }
        self.bump();
        self.parse_lambda_body()
    }

    fn parse_lambda_body(&mut self) -> Vec<NodeId> {
        // Optional lambda parameter list: `a, b ->` or `->`
        let mut lookahead = 0;
        loop {
            match self.peek_at(lookahead) {
                Tok::Ident(_) => lookahead += 1,
                Tok::Punct(',') => lookahead += 1,
                Tok::Arrow => {
                    for _ in 0..=lookahead {
                        self.bump();
                    }
                    break;
                }
                _ => break,
            }
        }
        let body = self.parse_statements(false);
        self.eat_punct('}');
        body
    }

    /// Attach argument values and lambda children to their call node
    fn adopt_call_parts(&mut self, call: NodeId) {
        let (arg_values, children): (Vec<NodeId>, Vec<NodeId>) = {
            let node = self.tree.node(call);
            (
                node.args().iter().map(|a| a.value).collect(),
                node.children().to_vec(),
            )
        };
        for value in arg_values {
            self.tree.set_parent(value, call);
        }
        for child in children {
            self.tree.set_parent(child, call);
        }
    }
}

fn parse_number(text: &str) -> LiteralValue {
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        return i64::from_str_radix(hex, 16)
            .map(LiteralValue::Int)
            .unwrap_or(LiteralValue::Null);
    }
    let trimmed = text.trim_end_matches(['f', 'F', 'L']);
    if trimmed.contains('.') || text.ends_with(['f', 'F']) {
        trimmed
            .parse::<f64>()
            .map(LiteralValue::Float)
            .unwrap_or(LiteralValue::Null)
    } else {
        trimmed
            .parse::<i64>()
            .map(LiteralValue::Int)
            .unwrap_or(LiteralValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find_call<'t>(tree: &'t SyntaxTree, name: &str) -> Option<(NodeId, &'t NodeData)> {
        tree.ids()
            .map(|id| (id, tree.node(id)))
            .find(|(_, n)| n.is_call() && n.name() == Some(name))
    }

    #[test]
    fn test_simple_call_with_named_args() {
        let result = parse(r#"Text(text = "Hello", color = Color.Red)"#);
        let (_, text) = find_call(&result.tree, "Text").unwrap();
        assert_eq!(text.kind(), NodeKind::Call);
        assert_eq!(text.args().len(), 2);
        assert_eq!(text.args()[0].name.as_deref(), Some("text"));
        assert_eq!(text.args()[1].name.as_deref(), Some("color"));
    }

    #[test]
    fn test_positional_args() {
        let result = parse(r#"Greeting("Android", modifier)"#);
        let (_, call) = find_call(&result.tree, "Greeting").unwrap();
        assert_eq!(call.args().len(), 2);
        assert!(call.args()[0].name.is_none());
    }

    #[test]
    fn test_chained_call() {
        let result = parse("Modifier.fillMaxSize().background(Color.White)");
        let (_, bg) = find_call(&result.tree, "background").unwrap();
        assert_eq!(bg.kind(), NodeKind::ChainedCall);

        let recv = result.tree.node(bg.receiver().unwrap());
        assert_eq!(recv.name(), Some("fillMaxSize"));
        assert_eq!(recv.kind(), NodeKind::ChainedCall);

        let root = result.tree.node(recv.receiver().unwrap());
        assert_eq!(root.kind(), NodeKind::Reference);
        assert_eq!(root.name(), Some("Modifier"));
    }

    #[test]
    fn test_trailing_lambda_children_and_parents() {
        let result = parse(r#"Box(modifier = Modifier) { Text("inner") }"#);
        let (box_id, box_node) = find_call(&result.tree, "Box").unwrap();
        assert_eq!(box_node.children().len(), 1);

        let (_, text) = find_call(&result.tree, "Text").unwrap();
        assert_eq!(text.parent, Some(box_id));
    }

    #[test]
    fn test_lambda_with_parameter() {
        let result = parse(r#"Scaffold(modifier = Modifier) { innerPadding -> Text("x") }"#);
        let (scaffold_id, _) = find_call(&result.tree, "Scaffold").unwrap();
        let (_, text) = find_call(&result.tree, "Text").unwrap();
        assert_eq!(text.parent, Some(scaffold_id));
    }

    #[test]
    fn test_hex_literal() {
        let result = parse("Color(0xFF112233)");
        let (_, call) = find_call(&result.tree, "Color").unwrap();
        let arg = result.tree.node(call.args()[0].value);
        assert_eq!(arg.literal(), Some(&LiteralValue::Int(0xFF112233)));
    }

    #[test]
    fn test_dp_chain_is_reference_over_literal() {
        let result = parse("Modifier.size(24.dp)");
        let (_, size) = find_call(&result.tree, "size").unwrap();
        let arg = result.tree.node(size.args()[0].value);
        assert_eq!(arg.kind(), NodeKind::Reference);
        assert_eq!(arg.name(), Some("dp"));
        let root = result.tree.node(arg.receiver().unwrap());
        assert_eq!(root.literal(), Some(&LiteralValue::Int(24)));
    }

    #[test]
    fn test_postfix_not_null() {
        let result = parse("user!!.name");
        let unary = result
            .tree
            .ids()
            .map(|id| result.tree.node(id))
            .find(|n| matches!(n.expr, Expr::Unary { op: UnaryOp::NotNull, .. }))
            .unwrap();
        let operand = match unary.expr {
            Expr::Unary { operand, .. } => operand,
            _ => unreachable!(),
        };
        assert_eq!(result.tree.node(operand).name(), Some("user"));
    }

    #[test]
    fn test_prefix_double_not() {
        let result = parse("!!flag");
        let outer = result
            .tree
            .ids()
            .map(|id| (id, result.tree.node(id)))
            .filter(|(_, n)| matches!(n.expr, Expr::Unary { op: UnaryOp::Not, .. }))
            .max_by_key(|(_, n)| n.end - n.start)
            .unwrap()
            .1;
        let inner = match outer.expr {
            Expr::Unary { operand, .. } => result.tree.node(operand),
            _ => unreachable!(),
        };
        assert!(matches!(inner.expr, Expr::Unary { op: UnaryOp::Not, .. }));
    }

    #[test]
    fn test_function_declaration_indexed() {
        let result = parse(
            r#"
            fun Greeting(name: String, modifier: Modifier = Modifier) {
                Text(text = name)
            }
            "#,
        );
        assert_eq!(result.functions.len(), 1);
        let f = &result.functions[0];
        assert_eq!(f.name, "Greeting");
        assert_eq!(f.params.len(), 2);
        assert_eq!(f.params[0].name, "name");
        assert!(f.params[0].default.is_none());
        assert_eq!(f.params[1].default.as_deref(), Some("Modifier"));
    }

    #[test]
    fn test_skips_package_and_imports() {
        let result = parse(
            "package com.example.app\nimport androidx.compose.material3.Text\nText(\"hi\")\n",
        );
        assert!(find_call(&result.tree, "Text").is_some());
        // No nodes materialized for package/import lines
        for id in result.tree.ids() {
            assert_ne!(result.tree.node(id).name(), Some("package"));
        }
    }

    #[test]
    fn test_annotations_skipped() {
        let result = parse("@Preview(showBackground = true)\n@Composable\nfun P() { Text(\"x\") }");
        assert!(find_call(&result.tree, "Preview").is_none());
        assert!(find_call(&result.tree, "Text").is_some());
    }

    #[test]
    fn test_unparseable_input_produces_no_panic() {
        let result = parse("???} {{{ = = , fun");
        assert!(result.tree.roots().len() <= 1);
    }

    #[test]
    fn test_node_spans_cover_source_text() {
        let source = "Modifier.background(Color.Red)";
        let result = parse(source);
        let (_, bg) = find_call(&result.tree, "background").unwrap();
        assert_eq!(&source[bg.start..bg.end], source);
    }
}
