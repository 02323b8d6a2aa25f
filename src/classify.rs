//! Declared type text → [`TypeRef`].
//!
//! The text is tokenized with a single regex and read by a tiny recursive
//! descent parser. Nothing here fails: malformed input degrades to whatever
//! best-effort name is available.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::decl::TypeDecl;
use crate::ir::{simple_name, TypeRef};

pub const PRIMITIVE_KEYWORDS: &[&str] = &[
    "boolean", "byte", "short", "char", "int", "long", "float", "double", "void",
];

/// Names visible without an import.
const JAVA_LANG: &[&str] = &[
    "Boolean", "Byte", "Short", "Character", "Integer", "Long", "Float", "Double",
    "String", "Object", "Number", "CharSequence", "Void", "Enum", "Record",
];

static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"@\s*[A-Za-z_$][\w$]*(?:\s*\.\s*[A-Za-z_$][\w$]*)*",
        r"|[A-Za-z_$][\w$]*(?:\s*\.\s*[A-Za-z_$][\w$]*)*",
        r"|\[\s*\]",
        r"|[<>,?()]",
    ))
    .expect("token pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
enum Tok {
    Ident(String),
    Annotation,
    Lt,
    Gt,
    Comma,
    Array,
    Wildcard,
    Open,
    Close,
}

#[derive(Debug)]
struct Parsed {
    name: String,
    args: Vec<Parsed>,
    dims: usize,
}

/// Classifies type text in the scope of one declaration (its imports drive
/// simple-name resolution).
#[derive(Debug, Clone, Default)]
pub struct TypeClassifier {
    imports: Vec<String>,
}

impl TypeClassifier {
    pub fn new(decl: &TypeDecl) -> Self {
        Self { imports: decl.imports.clone() }
    }

    pub fn with_imports<I, S>(imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { imports: imports.into_iter().map(Into::into).collect() }
    }

    pub fn classify(&self, declared: &str) -> TypeRef {
        let toks = tokenize(declared);
        let mut parser = Parser { toks: &toks, pos: 0 };
        match parser.parse_type() {
            Some(parsed) => self.lower(parsed),
            None => TypeRef::simple(declared.trim()),
        }
    }

    fn lower(&self, p: Parsed) -> TypeRef {
        if PRIMITIVE_KEYWORDS.contains(&p.name.as_str()) {
            // Primitive arrays have no component reference; keep the text.
            let mut name = p.name;
            for _ in 0..p.dims {
                name.push_str("[]");
            }
            return TypeRef::simple(name);
        }
        let args = p.args.into_iter().map(|a| self.lower(a)).collect();
        TypeRef::generic(self.qualify(&p.name), args)
    }

    fn qualify(&self, name: &str) -> String {
        let (head, rest) = match name.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (name, None),
        };
        let imported = self
            .imports
            .iter()
            .find(|imp| !imp.ends_with(".*") && simple_name(imp) == head);
        match (imported, rest) {
            (Some(imp), None) => imp.clone(),
            (Some(imp), Some(rest)) => format!("{imp}.{rest}"),
            (None, None) if JAVA_LANG.contains(&head) => format!("java.lang.{head}"),
            (None, _) => name.to_string(),
        }
    }
}

fn tokenize(text: &str) -> Vec<Tok> {
    TOKEN
        .find_iter(text)
        .map(|m| {
            let s = m.as_str();
            match s {
                "<" => Tok::Lt,
                ">" => Tok::Gt,
                "," => Tok::Comma,
                "?" => Tok::Wildcard,
                "(" => Tok::Open,
                ")" => Tok::Close,
                _ if s.starts_with('@') => Tok::Annotation,
                _ if s.starts_with('[') => Tok::Array,
                _ => Tok::Ident(s.split_whitespace().collect()),
            }
        })
        .collect()
}

struct Parser<'a> {
    toks: &'a [Tok],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Tok> {
        self.toks.get(self.pos)
    }

    fn bump(&mut self) -> Option<&Tok> {
        let tok = self.toks.get(self.pos);
        self.pos += 1;
        tok
    }

    /// Skips a balanced `( ... )` group, if one follows.
    fn skip_annotation_arguments(&mut self) {
        if self.peek() != Some(&Tok::Open) {
            return;
        }
        let mut depth = 0usize;
        while let Some(tok) = self.bump() {
            match tok {
                Tok::Open => depth += 1,
                Tok::Close => {
                    depth -= 1;
                    if depth == 0 {
                        return;
                    }
                }
                _ => {}
            }
        }
    }

    fn parse_type(&mut self) -> Option<Parsed> {
        while self.peek() == Some(&Tok::Annotation) {
            self.bump();
            self.skip_annotation_arguments();
        }
        match self.peek()? {
            Tok::Wildcard => {
                self.bump();
                match self.peek() {
                    Some(Tok::Ident(kw)) if kw == "extends" || kw == "super" => {
                        self.bump();
                        self.parse_type()
                    }
                    _ => Some(Parsed { name: "java.lang.Object".into(), args: Vec::new(), dims: 0 }),
                }
            }
            Tok::Ident(name) => {
                let name = name.clone();
                self.bump();
                let mut args = Vec::new();
                if self.peek() == Some(&Tok::Lt) {
                    self.bump();
                    loop {
                        match self.peek() {
                            None => break,
                            Some(Tok::Gt) => {
                                self.bump();
                                break;
                            }
                            Some(Tok::Comma) => {
                                self.bump();
                            }
                            Some(_) => match self.parse_type() {
                                Some(arg) => args.push(arg),
                                None => {
                                    self.bump();
                                }
                            },
                        }
                    }
                }
                let mut dims = 0;
                while self.peek() == Some(&Tok::Array) {
                    self.bump();
                    dims += 1;
                }
                Some(Parsed { name, args, dims })
            }
            _ => None,
        }
    }
}
