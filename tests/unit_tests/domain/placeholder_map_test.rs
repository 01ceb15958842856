use medease::domain::PlaceholderMap;

#[test]
fn given_empty_map_when_pushing_values_then_tokens_are_sequential() {
    let mut map = PlaceholderMap::new();

    assert_eq!(map.push("120".to_string()), "[NUM_0]");
    assert_eq!(map.push("80".to_string()), "[NUM_1]");
    assert_eq!(map.len(), 2);
}

#[test]
fn given_pushed_value_when_resolving_its_token_then_returns_value() {
    let mut map = PlaceholderMap::new();
    let token = map.push("5mg".to_string());

    assert_eq!(map.resolve(&token), Some("5mg"));
}

#[test]
fn given_zero_padded_token_when_resolving_then_returns_none() {
    let mut map = PlaceholderMap::new();
    map.push("1".to_string());

    assert_eq!(map.resolve("[NUM_00]"), None);
}

#[test]
fn given_unknown_position_when_resolving_then_returns_none() {
    let map = PlaceholderMap::new();

    assert_eq!(map.resolve("[NUM_7]"), None);
    assert!(map.is_empty());
}

#[test]
fn given_map_when_iterating_then_yields_tokens_in_position_order() {
    let mut map = PlaceholderMap::new();
    map.push("1".to_string());
    map.push("2".to_string());

    let pairs: Vec<(String, &str)> = map.iter().collect();

    assert_eq!(
        pairs,
        vec![
            ("[NUM_0]".to_string(), "1"),
            ("[NUM_1]".to_string(), "2")
        ]
    );
}
