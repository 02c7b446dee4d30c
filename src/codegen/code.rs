//! Indented source buffer and identifier helpers shared by the emitters.

/// First lines of every emitted file.
pub const FILE_HEADER: &str = "// This file was automatically generated with a tool.\n// See src/bin/api_protobuf.rs\n";

const INDENT: &str = "    ";

/// Line-oriented Rust source builder.
///
/// `open` and `close` move the indentation so emitters never count spaces.
#[derive(Debug, Default)]
pub struct CodeBuf {
    out: String,
    depth: usize,
}

impl CodeBuf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line at the current depth.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.out.push_str(INDENT);
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Append a line and indent everything after it.
    pub fn open(&mut self, text: impl AsRef<str>) {
        self.line(text);
        self.depth += 1;
    }

    /// Dedent, then append a line.
    pub fn close(&mut self, text: impl AsRef<str>) {
        self.depth = self.depth.saturating_sub(1);
        self.line(text);
    }

    /// Append pre-rendered lines, each at the current depth.
    pub fn lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.line(line);
        }
    }

    pub fn raw(&mut self, text: &str) {
        self.out.push_str(text);
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// `HelloRequest` -> `hello_request`.
pub fn camel_to_snake(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let prev_lower = i > 0 && (chars[i - 1].is_ascii_lowercase() || chars[i - 1].is_ascii_digit());
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            let prev_upper = i > 0 && chars[i - 1].is_ascii_uppercase();
            if prev_lower || (prev_upper && next_lower) {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Cargo feature gating code behind `option (ifdef)`: `USE_FOO_BAR` -> `foo-bar`.
pub fn feature_name(ifdef: &str) -> String {
    ifdef
        .strip_prefix("USE_")
        .unwrap_or(ifdef)
        .to_ascii_lowercase()
        .replace('_', "-")
}

/// `#[cfg(feature = "...")]` for an optional ifdef.
pub fn cfg_attr(ifdef: Option<&str>) -> Option<String> {
    ifdef.map(|ifdef| format!("#[cfg(feature = \"{}\")]", feature_name(ifdef)))
}

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use", "where",
    "while", "abstract", "become", "box", "do", "final", "gen", "macro", "override", "priv",
    "try", "typeof", "unsized", "virtual", "yield",
];

/// Field name as a Rust identifier, raw when it collides with a keyword.
pub fn rust_ident(name: &str) -> String {
    if KEYWORDS.contains(&name) {
        format!("r#{}", name)
    } else {
        name.to_string()
    }
}

/// Last path segment of a descriptor type reference: `.pkg.Name` -> `Name`.
pub fn short_type_name(type_name: &str) -> &str {
    type_name.rsplit('.').next().unwrap_or(type_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_to_snake() {
        assert_eq!(camel_to_snake("HelloRequest"), "hello_request");
        assert_eq!(
            camel_to_snake("ListEntitiesBinarySensorResponse"),
            "list_entities_binary_sensor_response"
        );
        assert_eq!(camel_to_snake("APIConnection"), "api_connection");
        assert_eq!(camel_to_snake("void"), "void");
    }

    #[test]
    fn test_feature_name() {
        assert_eq!(feature_name("USE_SELECT"), "select");
        assert_eq!(feature_name("USE_BLUETOOTH_PROXY"), "bluetooth-proxy");
        assert_eq!(feature_name("CUSTOM"), "custom");
        assert_eq!(
            cfg_attr(Some("USE_SELECT")).as_deref(),
            Some("#[cfg(feature = \"select\")]")
        );
        assert!(cfg_attr(None).is_none());
    }

    #[test]
    fn test_rust_ident() {
        assert_eq!(rust_ident("type"), "r#type");
        assert_eq!(rust_ident("bool_"), "bool_");
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name(".ExecuteServiceArgument"), "ExecuteServiceArgument");
        assert_eq!(short_type_name(".pkg.Inner"), "Inner");
        assert_eq!(short_type_name("Plain"), "Plain");
    }

    #[test]
    fn test_code_buf_indents() {
        let mut buf = CodeBuf::new();
        buf.open("fn a() {");
        buf.line("b();");
        buf.blank();
        buf.close("}");
        assert_eq!(buf.finish(), "fn a() {\n    b();\n\n}\n");
    }
}
