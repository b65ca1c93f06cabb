use crate::{
    config::FieldConfig,
    errors::SameError,
    same::{TriState, Verdict, evaluate_json},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLineConfig {
    pub fields: FieldConfig,
    pub explain: bool,
    pub verbose: bool,
    /// JSON array of arguments; read from stdin when absent.
    pub input: Option<String>,
}

impl CommandLineConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut fields = FieldConfig::default();
        let mut explain = false;
        let mut verbose = false;
        let mut input = None;
        let mut from_stdin = false;
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match *arg {
                "--id-field" => {
                    let name = iter
                        .next()
                        .ok_or_else(|| "--id-field requires a value".to_string())?;
                    fields = fields.id_field(name);
                }
                "--source-field" => {
                    let name = iter
                        .next()
                        .ok_or_else(|| "--source-field requires a value".to_string())?;
                    fields = fields.source_field(name);
                }
                "--target-field" => {
                    let name = iter
                        .next()
                        .ok_or_else(|| "--target-field requires a value".to_string())?;
                    fields = fields.target_field(name);
                }
                "--explain" => explain = true,
                "--verbose" | "-v" => verbose = true,
                "-" => {
                    if input.is_some() || from_stdin {
                        return Err("only one JSON input may be given".to_string());
                    }
                    from_stdin = true;
                }
                other if other.starts_with("--") => {
                    return Err(format!("unknown flag {other}"));
                }
                other => {
                    if input.is_some() || from_stdin {
                        return Err("only one JSON input may be given".to_string());
                    }
                    input = Some(other.to_string());
                }
            }
        }
        fields.validate().map_err(|e| e.to_string())?;
        Ok(Self {
            fields,
            explain,
            verbose,
            input,
        })
    }

    pub fn help() -> &'static str {
        "Usage: graphsame [--id-field NAME] [--source-field NAME] [--target-field NAME] \
         [--explain] [--verbose] [JSON|-]\n\
         Evaluates SAME over a JSON array of arguments and prints true, false or null.\n"
    }
}

pub fn evaluate_input(text: &str, fields: &FieldConfig) -> Result<Verdict, SameError> {
    let args: Vec<serde_json::Value> =
        serde_json::from_str(text.trim()).map_err(|e| SameError::decode(e.to_string()))?;
    Ok(evaluate_json(&args, fields))
}

/// Renders a result the way the query engine surfaces it: a nullable boolean.
pub fn render(result: TriState) -> Result<String, SameError> {
    serde_json::to_string(&result).map_err(|e| SameError::decode(e.to_string()))
}
