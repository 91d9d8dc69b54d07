//! Pure helpers for rewriting a page's query string, used by the category
//! filter and pagination links.

/// Set `key` to `value` in `params`, keeping unrelated keys in their
/// original order. Re-applying with the same pair yields the same string.
pub fn form_url_query(params: &str, key: &str, value: &str) -> String {
    let mut pairs = parse(params);

    let mut replaced = false;
    pairs.retain_mut(|(existing, existing_value)| {
        if existing == key {
            if replaced {
                return false;
            }
            *existing_value = value.to_string();
            replaced = true;
        }
        true
    });
    if !replaced {
        pairs.push((key.to_string(), value.to_string()));
    }

    serialize(&pairs)
}

/// Drop every key in `keys` from `params`; keys that are absent are not an
/// error.
pub fn remove_keys_from_query(params: &str, keys: &[&str]) -> String {
    let pairs: Vec<(String, String)> = parse(params)
        .into_iter()
        .filter(|(key, _)| !keys.contains(&key.as_str()))
        .collect();
    serialize(&pairs)
}

fn parse(params: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(params.trim_start_matches('?').as_bytes())
        .into_owned()
        .collect()
}

fn serialize(pairs: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_inserts_into_an_empty_string() {
        assert_eq!(form_url_query("", "category", "Music"), "category=Music");
    }

    #[test]
    fn upsert_overwrites_an_existing_key() {
        let query = form_url_query("category=Music&page=2", "category", "Tech");
        assert_eq!(query, "category=Tech&page=2");
    }

    #[test]
    fn upsert_is_idempotent() {
        let once = form_url_query("page=2", "category", "Music");
        let twice = form_url_query(&once, "category", "Music");
        assert_eq!(once, twice);
    }

    #[test]
    fn upsert_preserves_unrelated_key_order() {
        let query = form_url_query("a=1&b=2&c=3", "b", "9");
        assert_eq!(query, "a=1&b=9&c=3");
    }

    #[test]
    fn remove_after_upsert_leaves_no_trace_of_the_key() {
        for initial in ["", "category=Old", "page=2&category=Old&q=gig"] {
            let upserted = form_url_query(initial, "category", "Music");
            let removed = remove_keys_from_query(&upserted, &["category"]);
            assert!(
                !parse(&removed).iter().any(|(key, _)| key == "category"),
                "category survived removal of {initial:?}"
            );
        }
    }

    #[test]
    fn remove_tolerates_absent_keys_and_empty_input() {
        assert_eq!(remove_keys_from_query("", &["category"]), "");
        assert_eq!(remove_keys_from_query("page=2", &["category"]), "page=2");
    }

    #[test]
    fn remove_drops_multiple_keys_at_once() {
        let query = remove_keys_from_query("a=1&b=2&c=3", &["a", "c"]);
        assert_eq!(query, "b=2");
    }

    #[test]
    fn leading_question_mark_is_tolerated() {
        assert_eq!(form_url_query("?page=2", "q", "gig"), "page=2&q=gig");
    }

    #[test]
    fn values_are_percent_encoded_stably() {
        let once = form_url_query("", "q", "live music");
        let twice = form_url_query(&once, "q", "live music");
        assert_eq!(once, twice);
        let cleared = remove_keys_from_query(&once, &["q"]);
        assert_eq!(cleared, "");
    }
}
