//! Generation engine.
//!
//! Drives one pass: resolve encryption, merge the synthetic IV variable,
//! render every variable through its template line pattern, and wrap the
//! lines into the file skeleton.

use configen_ir::{Mapping, ValueSource};

use crate::encryption::EncryptionSetup;
use crate::literal::render_literal;
use crate::{GenerateError, Target, Template, VALUE_TOKEN, VARIABLE_NAME_TOKEN};

/// Header comment written at the top of every generated file.
pub fn auto_generation_notice(tool_name: &str, mapping_path: &str) -> String {
    format!(
        "// auto-generated by {tool_name}\n\
         // to add or remove properties, edit the mapping file: '{mapping_path}'.\n\
         // README: https://github.com/theappbusiness/ConfigGenerator/blob/master/README.md\n\n"
    )
}

/// Render the declarations file for `mapping`.
///
/// Declarations need no values, so this cannot fail.
#[tracing::instrument(level = "debug", skip_all, fields(count = mapping.len()))]
pub fn render_declarations(mapping: &Mapping, template: &Template, notice: &str) -> String {
    let mut body = String::new();
    for spec in mapping {
        let line = template
            .line_for(&spec.type_tag)
            .replace(VARIABLE_NAME_TOKEN, &spec.name);
        push_line(&mut body, &line, &template.line_terminator);
    }
    template.assemble(notice, &body)
}

/// Render the definitions file for `mapping` with values from `values`.
///
/// Resolves encryption first; when a key field exists its `<name>IV`
/// variable is appended and rendered like any other `ByteArray`.
pub fn render_definitions(
    mapping: &Mapping,
    values: &ValueSource,
    template: &Template,
    notice: &str,
) -> Result<String, GenerateError> {
    let setup = EncryptionSetup::resolve(mapping, values)?;
    let (mapping, values) = setup.merge(mapping, values);
    render_merged_definitions(&mapping, &values, template, notice, &setup)
}

#[tracing::instrument(level = "debug", skip_all, fields(count = mapping.len()))]
fn render_merged_definitions(
    mapping: &Mapping,
    values: &ValueSource,
    template: &Template,
    notice: &str,
    setup: &EncryptionSetup,
) -> Result<String, GenerateError> {
    let mut body = String::new();
    for spec in mapping {
        let Some(value) = values.get(&spec.name) else {
            return Err(GenerateError::MissingValue {
                name: spec.name.clone(),
            });
        };
        let literal = render_literal(spec, value, template, setup)?;
        tracing::trace!(name = %spec.name, type_tag = %spec.type_tag, "rendered");

        let line = template
            .definition_line_for(&spec.type_tag, &literal)
            .replace(VARIABLE_NAME_TOKEN, &spec.name)
            .replace(VALUE_TOKEN, &literal);
        push_line(&mut body, &line, &template.line_terminator);
    }
    Ok(template.assemble(notice, &body))
}

fn push_line(body: &mut String, line: &str, terminator: &str) {
    body.push('\n');
    body.push_str(line);
    body.push_str(terminator);
    body.push('\n');
}

/// One generated output file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedFile {
    pub file_name: String,
    pub contents: String,
}

/// Generates every file for a target.
#[derive(Clone, Debug)]
pub struct Generator {
    tool_name: String,
    mapping_path: String,
    class_name: String,
    target: Target,
}

impl Generator {
    pub fn new(class_name: impl Into<String>, target: Target) -> Self {
        Self {
            tool_name: "configen".to_string(),
            mapping_path: String::new(),
            class_name: class_name.into(),
            target,
        }
    }

    #[must_use]
    pub fn with_tool_name(mut self, tool_name: impl Into<String>) -> Self {
        self.tool_name = tool_name.into();
        self
    }

    /// Path quoted in the auto-generation notice.
    #[must_use]
    pub fn with_mapping_path(mut self, mapping_path: impl Into<String>) -> Self {
        self.mapping_path = mapping_path.into();
        self
    }

    /// Run one pass: declarations file (if the target has one), then
    /// definitions file.
    ///
    /// Encryption is resolved once and both files see the merged variables,
    /// so a header declares the synthetic IV its implementation defines.
    #[tracing::instrument(level = "debug", skip_all, fields(class = %self.class_name, target = ?self.target))]
    pub fn generate(
        &self,
        mapping: &Mapping,
        values: &ValueSource,
    ) -> Result<Vec<GeneratedFile>, GenerateError> {
        let notice = auto_generation_notice(&self.tool_name, &self.mapping_path);
        let setup = EncryptionSetup::resolve(mapping, values)?;
        let (mapping, values) = setup.merge(mapping, values);

        let mut files = Vec::with_capacity(2);
        if let (Some(template), Some(file_name)) = (
            self.target.declarations(&self.class_name),
            self.target.declarations_file_name(&self.class_name),
        ) {
            files.push(GeneratedFile {
                file_name,
                contents: render_declarations(&mapping, &template, &notice),
            });
        }

        let template = self.target.definitions(&self.class_name);
        files.push(GeneratedFile {
            file_name: self.target.definitions_file_name(&self.class_name),
            contents: render_merged_definitions(&mapping, &values, &template, &notice, &setup)?,
        });
        tracing::info!(files = files.len(), "generation finished");
        Ok(files)
    }
}
