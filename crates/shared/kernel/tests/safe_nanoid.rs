use edupath_kernel::{SAFE_ALPHABET, TOKEN_ALPHABET, safe_nanoid, token_nanoid};
use std::collections::HashSet;

#[test]
fn generates_expected_length_and_charset() {
    let id = safe_nanoid!();
    assert_eq!(id.len(), 12);

    for ch in id.chars() {
        assert!(SAFE_ALPHABET.contains(&ch), "unexpected character in nanoid: {ch}");
    }
}

#[test]
fn custom_length() {
    assert_eq!(safe_nanoid!(20).len(), 20);
    assert_eq!(token_nanoid!(6).len(), 6);
}

#[test]
fn tokens_are_upper_case_base36() {
    let token = token_nanoid!();
    assert_eq!(token.len(), 10);
    assert!(token.chars().all(|ch| TOKEN_ALPHABET.contains(&ch)));
}

#[test]
fn tokens_do_not_repeat() {
    let tokens: HashSet<String> = (0..1000).map(|_| token_nanoid!()).collect();
    assert_eq!(tokens.len(), 1000);
}
