//! Method emission into the generated output unit

use std::fmt::Write;

use crate::{CodegenError, GeneratorConfig};

/// Sink for rendered method declarations
pub trait SourceWriter {
    /// Append a method with the given signature and body text
    fn write_method(&mut self, signature: &str, body: &str) -> Result<(), CodegenError>;
}

/// [`SourceWriter`] accumulating methods into an in-memory source buffer
#[derive(Debug, Clone)]
pub struct MethodWriter {
    output: String,
    indent_size: usize,
}

impl MethodWriter {
    pub fn new() -> Self {
        Self::with_indent(2)
    }

    pub fn with_indent(indent_size: usize) -> Self {
        Self {
            output: String::new(),
            indent_size,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::with_indent(config.indent_size)
    }

    pub fn source(&self) -> &str {
        &self.output
    }

    pub fn into_source(self) -> String {
        self.output
    }

    fn indent(&self, level: usize) -> String {
        " ".repeat(level * self.indent_size)
    }
}

impl Default for MethodWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceWriter for MethodWriter {
    fn write_method(&mut self, signature: &str, body: &str) -> Result<(), CodegenError> {
        let indent = self.indent(1);
        let mut method = String::new();
        writeln!(method, "{} {{", signature)?;
        for line in body.lines() {
            if line.trim().is_empty() {
                writeln!(method)?;
            } else {
                writeln!(method, "{}{}", indent, line)?;
            }
        }
        writeln!(method, "}}")?;
        writeln!(method)?;

        self.output.push_str(&method);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_method() {
        let mut writer = MethodWriter::new();
        writer
            .write_method("public int answer()", "int x = 42;\n\nreturn x;")
            .unwrap();
        assert_eq!(
            writer.source(),
            "public int answer() {\n  int x = 42;\n\n  return x;\n}\n\n"
        );
    }

    #[test]
    fn test_custom_indent_and_append() {
        let mut writer = MethodWriter::with_indent(4);
        writer.write_method("void a()", "a();").unwrap();
        writer.write_method("void b()", "b();").unwrap();
        assert_eq!(
            writer.into_source(),
            "void a() {\n    a();\n}\n\nvoid b() {\n    b();\n}\n\n"
        );
    }
}
