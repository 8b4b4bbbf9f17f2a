use device_colors::core::matcher::matching_device_type;
use device_colors::DeviceTypeDeclaration;

fn declarations() -> Vec<DeviceTypeDeclaration> {
    vec![
        DeviceTypeDeclaration {
            description: "iPhone 13 Pro (Sierra Blue)".to_string(),
            identifier: "com.apple.iphone14-2-blue".to_string(),
            model_codes: vec!["iPhone14,2".to_string()],
        },
        DeviceTypeDeclaration {
            description: "iPhone 13 Pro (Graphite)".to_string(),
            identifier: "com.apple.iphone14-2-black".to_string(),
            model_codes: vec!["iPhone14,2".to_string()],
        },
    ]
}

#[test]
fn test_suffix_match_selects_color_variant() {
    let declarations = declarations();

    let matched = matching_device_type("iPhone14,2", "blue", &declarations).unwrap();
    assert_eq!(matched.identifier, "com.apple.iphone14-2-blue");

    let matched = matching_device_type("iPhone14,2", "black", &declarations).unwrap();
    assert_eq!(matched.identifier, "com.apple.iphone14-2-black");
}

#[test]
fn test_unmatched_color_returns_first_in_source_order() {
    let declarations = declarations();

    let matched = matching_device_type("iPhone14,2", "green", &declarations).unwrap();
    assert_eq!(matched.identifier, "com.apple.iphone14-2-blue");
}

#[test]
fn test_unknown_model_code_returns_none() {
    assert!(matching_device_type("iPhone15,1", "blue", &declarations()).is_none());
}

#[test]
fn test_empty_table_is_a_degraded_state_not_a_panic() {
    assert!(matching_device_type("iPhone14,2", "blue", &[]).is_none());
    assert!(matching_device_type("", "", &[]).is_none());
}

#[test]
fn test_model_code_equality_is_exact() {
    let declarations = declarations();

    assert!(matching_device_type("iphone14,2", "blue", &declarations).is_none());
    assert!(matching_device_type("iPhone14", "blue", &declarations).is_none());
}

#[test]
fn test_shared_model_codes_respect_source_order() {
    let declarations = vec![
        DeviceTypeDeclaration {
            description: "Apple Watch Series 7 (Green)".to_string(),
            identifier: "com.apple.watch6-6-green".to_string(),
            model_codes: vec!["Watch6,6".to_string(), "Watch6,7".to_string()],
        },
        DeviceTypeDeclaration {
            description: "Apple Watch Series 7 (Pink)".to_string(),
            identifier: "com.apple.watch6-6-pink".to_string(),
            model_codes: vec!["Watch6,6".to_string(), "Watch6,7".to_string()],
        },
    ];

    let matched = matching_device_type("Watch6,7", "pink", &declarations).unwrap();
    assert_eq!(matched.identifier, "com.apple.watch6-6-pink");

    let matched = matching_device_type("Watch6,7", "gold", &declarations).unwrap();
    assert_eq!(matched.identifier, "com.apple.watch6-6-green");
}
