//! Built-in output targets.
//!
//! A target bundles the templates for one language with its output file
//! naming. Swift produces a single self-describing file; Objective-C produces
//! a header with declarations and an implementation with definitions.

mod objc;
mod swift;

use crate::Template;

/// Output language.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Target {
    #[default]
    Swift,
    ObjectiveC,
}

impl Target {
    /// Declarations template, if this target emits a declarations file.
    pub fn declarations(self, class_name: &str) -> Option<Template> {
        match self {
            Self::Swift => None,
            Self::ObjectiveC => Some(objc::header(class_name)),
        }
    }

    pub fn definitions(self, class_name: &str) -> Template {
        match self {
            Self::Swift => swift::implementation(class_name),
            Self::ObjectiveC => objc::implementation(class_name),
        }
    }

    pub fn declarations_file_name(self, class_name: &str) -> Option<String> {
        match self {
            Self::Swift => None,
            Self::ObjectiveC => Some(format!("{class_name}.h")),
        }
    }

    pub fn definitions_file_name(self, class_name: &str) -> String {
        match self {
            Self::Swift => format!("{class_name}.swift"),
            Self::ObjectiveC => format!("{class_name}.m"),
        }
    }
}
