// Example demonstrating parsing, editing and printing a value tree

use jsontree::{ParseError, Value};

fn main() -> Result<(), ParseError> {
    let json = r#"
        // lenient input: comments, trailing commas, several roots
        {"name": "value", "number": 42, "flag": true, "items": [1, 2.5,],}
        [null]
    "#;
    println!("Input: {json}");

    let mut roots = jsontree::parse(json)?;
    println!("Found {} root values", roots.len().unwrap_or(0));

    if let Ok(first) = roots.at_mut(0) {
        if let Ok(items) = first.get_mut("items") {
            let _ = items.push("three");
        }
        let _ = first.insert("edited", true);
    }

    println!("Pretty:\n{}", roots.stringify());
    println!("Lean: {}", roots.stringify_lean());

    let strict = Value::parse_strict(r#"{"a": [1, 2, 3]}"#)?;
    println!("Strict document: {strict}");

    match jsontree::parse_strict("[1, 2,]") {
        Ok(value) => println!("Unexpectedly parsed {value}"),
        Err(e) => println!("Strict parse rejected trailing comma: {e}"),
    }
    Ok(())
}
