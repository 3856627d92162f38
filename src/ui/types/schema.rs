use anyhow::{Context, Result};
use schemars::{JsonSchema, schema_for};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Boolean,
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub required: bool,
    pub kind: FieldKind,
    pub default: Option<Value>,
    pub nullable: bool,
    pub min: Option<u64>,
    pub max: Option<u64>,
}

/// Promptable fields of a flat struct, in declaration order. Fields whose
/// type is not a string, integer or boolean are skipped.
pub fn field_specs<T: JsonSchema>() -> Result<Vec<FieldSpec>> {
    let schema = schema_for!(T);
    let root = schema.as_object().context("root schema is not an object")?;
    let props = root
        .get("properties")
        .and_then(Value::as_object)
        .context("schema has no properties")?;

    let required: Vec<&str> = root
        .get("required")
        .and_then(Value::as_array)
        .map(|a| a.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut out = Vec::new();
    for (name, field_schema) in props {
        let obj = field_schema
            .as_object()
            .with_context(|| format!("schema of field '{name}' is not an object"))?;
        let Some((kind, nullable)) = detect_field_kind(obj) else {
            continue;
        };
        out.push(FieldSpec {
            name: name.clone(),
            title: text(obj, "title").unwrap_or_else(|| name.clone()),
            description: text(obj, "description"),
            required: required.contains(&name.as_str()),
            kind,
            default: obj.get("default").cloned(),
            nullable,
            min: obj.get("minimum").and_then(Value::as_u64),
            max: obj.get("maximum").and_then(Value::as_u64),
        });
    }
    Ok(out)
}

fn text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

fn kind_of(name: &str) -> Option<FieldKind> {
    match name {
        "string" => Some(FieldKind::String),
        "integer" => Some(FieldKind::Integer),
        "boolean" => Some(FieldKind::Boolean),
        _ => None,
    }
}

/// `Option<T>` shows up as `["integer", "null"]`.
fn detect_field_kind(obj: &Map<String, Value>) -> Option<(FieldKind, bool)> {
    match obj.get("type")? {
        Value::String(s) => kind_of(s).map(|k| (k, false)),
        Value::Array(arr) => {
            let names: Vec<&str> = arr.iter().filter_map(Value::as_str).collect();
            let nullable = names.contains(&"null");
            names.into_iter().find_map(kind_of).map(|k| (k, nullable))
        }
        _ => None,
    }
}
