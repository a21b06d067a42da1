use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/rules.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nRULE CATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the rule catalog before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nRULE CATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nRULE CATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nRULE CATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let combinations = section_array(catalog, "concepts", "combinations");
    let pricing_rules = section_array(catalog, "pricing", "rules");
    let candidates = section_array(catalog, "equipment", "candidates");
    let defaults = section_array(catalog, "equipment", "defaults");
    let chat_rules = section_array(catalog, "chat", "rules");

    for (i, rule) in pricing_rules.iter().enumerate() {
        validate_pricing_rule(rule, i);
    }
    for (i, candidate) in candidates.iter().enumerate() {
        assert!(
            candidate.get("matcher").is_some() && candidate.get("project").is_some(),
            "\n\nRULE CATALOG BUILD ERROR: Equipment candidate at index {i} needs 'matcher' and 'project'\n"
        );
    }
    assert!(
        !defaults.is_empty(),
        "\n\nRULE CATALOG BUILD ERROR: 'equipment.defaults' must not be empty\n"
    );

    println!(
        "cargo:warning=Validated rule catalog: {} combinations, {} pricing rules, {} equipment candidates, {} chat rules",
        combinations.len(),
        pricing_rules.len(),
        candidates.len(),
        chat_rules.len()
    );
}

fn section_array<'a>(
    catalog: &'a serde_json::Value,
    section: &str,
    field: &str,
) -> &'a Vec<serde_json::Value> {
    let value = catalog
        .get(section)
        .and_then(|s| s.get(field))
        .unwrap_or_else(|| {
            panic!(
                "\n\nRULE CATALOG BUILD ERROR: Missing '{section}.{field}' field\n"
            );
        });

    value.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nRULE CATALOG BUILD ERROR: '{section}.{field}' must be an array\n\
             Got: {value}\n"
        );
    })
}

fn validate_pricing_rule(rule: &serde_json::Value, index: usize) {
    let original = rule
        .get("original_price")
        .and_then(serde_json::Value::as_f64)
        .unwrap_or_else(|| {
            panic!("\n\nRULE CATALOG BUILD ERROR: Pricing rule {index} missing numeric 'original_price'\n")
        });
    let optimized = rule
        .get("optimized_price")
        .and_then(serde_json::Value::as_f64)
        .unwrap_or_else(|| {
            panic!("\n\nRULE CATALOG BUILD ERROR: Pricing rule {index} missing numeric 'optimized_price'\n")
        });

    assert!(
        optimized <= original,
        "\n\nRULE CATALOG BUILD ERROR: Pricing rule {index} is more expensive after optimization\n\
         original_price: {original}, optimized_price: {optimized}\n"
    );
}

fn set_build_dependencies() {
    // Tell cargo to rerun if the rule catalog changes
    println!("cargo:rerun-if-changed=catalogs/rules.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
