use thiserror::Error;

#[derive(Error, Debug)]
pub enum BindingError {
    #[error("cannot convert {value} to {type_name} for parameter '{parameter}': {source}")]
    Conversion {
        parameter: String,
        type_name: &'static str,
        value: String,
        source: serde_json::Error,
    },

    #[error("test method '{method}' has {parameters} parameter(s) but {inline} inline value(s) were given")]
    TooManyInlineValues {
        method: String,
        parameters: usize,
        inline: usize,
    },
}

const MAX_VALUE_LEN: usize = 64;

impl BindingError {
    pub fn conversion(
        parameter: impl Into<String>,
        type_name: &'static str,
        value: &serde_json::Value,
        source: serde_json::Error,
    ) -> Self {
        Self::Conversion {
            parameter: parameter.into(),
            type_name,
            value: abbreviate(value.to_string()),
            source,
        }
    }

    pub fn too_many_inline_values(method: impl Into<String>, parameters: usize, inline: usize) -> Self {
        Self::TooManyInlineValues {
            method: method.into(),
            parameters,
            inline,
        }
    }
}

fn abbreviate(mut text: String) -> String {
    if text.chars().count() > MAX_VALUE_LEN {
        text = text.chars().take(MAX_VALUE_LEN).collect();
        text.push_str("...");
    }
    text
}
