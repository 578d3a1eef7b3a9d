use crate::{DictionaryStyle, LinePatterns, Template};

pub(super) fn header(class_name: &str) -> Template {
    Template {
        imports: "#import <Foundation/Foundation.h>\n".to_string(),
        skeleton: format!("\n@interface {class_name} : NSObject\n$BODY\n@end\n"),
        patterns: LinePatterns {
            double: "+ (double)$VARIABLE_NAME".to_string(),
            integer: "+ (NSInteger)$VARIABLE_NAME".to_string(),
            string: "+ (nonnull NSString *)$VARIABLE_NAME".to_string(),
            boolean: "+ (BOOL)$VARIABLE_NAME".to_string(),
            url: "+ (nonnull NSURL *)$VARIABLE_NAME".to_string(),
            byte_array: "+ (nonnull NSData *)$VARIABLE_NAME".to_string(),
            empty_byte_array: "+ (nonnull NSData *)$VARIABLE_NAME".to_string(),
            dictionary: "+ (nonnull NSDictionary *)$VARIABLE_NAME".to_string(),
            custom: "+ ($CUSTOM_TYPE)$VARIABLE_NAME".to_string(),
        },
        line_terminator: ";".to_string(),
        true_string: "YES".to_string(),
        false_string: "NO".to_string(),
        dictionary_style: DictionaryStyle::ObjectiveC,
    }
}

pub(super) fn implementation(class_name: &str) -> Template {
    Template {
        // Byte lists are written as `UInt8(n)`; make that a cast in C.
        imports: format!(
            "#import \"{class_name}.h\"\n\n#define UInt8(value) ((UInt8)(value))\n"
        ),
        skeleton: format!("\n@implementation {class_name}\n$BODY\n@end\n"),
        patterns: LinePatterns {
            double: method("double", "return $VALUE;"),
            integer: method("NSInteger", "return $VALUE;"),
            string: method("nonnull NSString *", "return @\"$VALUE\";"),
            boolean: method("BOOL", "return $VALUE;"),
            url: method(
                "nonnull NSURL *",
                "return [NSURL URLWithString:@\"$VALUE\"];",
            ),
            byte_array: method(
                "nonnull NSData *",
                "static const UInt8 bytes[] = { $VALUE };\n  \
                 return [NSData dataWithBytes:bytes length:sizeof(bytes)];",
            ),
            // C has no zero-length arrays.
            empty_byte_array: method("nonnull NSData *", "return [NSData data];"),
            dictionary: method("nonnull NSDictionary *", "return $VALUE;"),
            custom: method("$CUSTOM_TYPE", "return $VALUE;"),
        },
        line_terminator: String::new(),
        true_string: "YES".to_string(),
        false_string: "NO".to_string(),
        dictionary_style: DictionaryStyle::ObjectiveC,
    }
}

fn method(return_type: &str, body: &str) -> String {
    format!("+ ({return_type})$VARIABLE_NAME\n{{\n  {body}\n}}")
}
