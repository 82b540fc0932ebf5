use serde_json::{Value, json};

/// Create a document with the given owner size and root node
pub fn document(width: f32, height: f32, root: Value) -> Value {
    json!({
        "owner": { "width": width, "height": height },
        "root": root
    })
}

/// Create a document with an explicit layout config
pub fn document_with_config(width: f32, height: f32, config: Value, root: Value) -> Value {
    json!({
        "owner": { "width": width, "height": height },
        "config": config,
        "root": root
    })
}

/// Create a named leaf node
pub fn leaf(name: &str, style: Value) -> Value {
    json!({ "name": name, "style": style })
}

/// Create a named container node
pub fn container(name: &str, style: Value, children: Vec<Value>) -> Value {
    json!({ "name": name, "style": style, "children": children })
}

/// Create a row container filling the owner, with the given extra style
pub fn row(name: &str, width: f32, height: f32, extra: Value, children: Vec<Value>) -> Value {
    let mut style = json!({ "width": width, "height": height, "flexDirection": "row" });
    merge(&mut style, extra);
    container(name, style, children)
}

/// Create `count` leaves named `{prefix}{index}` sharing one style
pub fn items(prefix: &str, count: usize, style: Value) -> Vec<Value> {
    (0..count)
        .map(|i| leaf(&format!("{}{}", prefix, i), style.clone()))
        .collect()
}

fn merge(target: &mut Value, extra: Value) {
    if let (Some(target), Value::Object(extra)) = (target.as_object_mut(), extra) {
        target.extend(extra);
    }
}
