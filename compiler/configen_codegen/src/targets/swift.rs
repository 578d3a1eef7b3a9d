use crate::{DictionaryStyle, LinePatterns, Template};

pub(super) fn implementation(class_name: &str) -> Template {
    Template {
        imports: "import Foundation\n".to_string(),
        skeleton: format!("\nclass {class_name} {{\n$BODY\n}}\n"),
        patterns: LinePatterns {
            double: "  static let $VARIABLE_NAME: Double = $VALUE".to_string(),
            integer: "  static let $VARIABLE_NAME: Int = $VALUE".to_string(),
            string: "  static let $VARIABLE_NAME: String = \"$VALUE\"".to_string(),
            boolean: "  static let $VARIABLE_NAME: Bool = $VALUE".to_string(),
            url: "  static let $VARIABLE_NAME: URL = URL(string: \"$VALUE\")!".to_string(),
            byte_array: "  static let $VARIABLE_NAME: [UInt8] = [$VALUE]".to_string(),
            empty_byte_array: "  static let $VARIABLE_NAME: [UInt8] = []".to_string(),
            dictionary: "  static let $VARIABLE_NAME: [String: Any] = $VALUE".to_string(),
            custom: "  static let $VARIABLE_NAME: $CUSTOM_TYPE = $VALUE".to_string(),
        },
        line_terminator: String::new(),
        true_string: "true".to_string(),
        false_string: "false".to_string(),
        dictionary_style: DictionaryStyle::Swift,
    }
}
