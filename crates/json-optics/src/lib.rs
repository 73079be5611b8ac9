//! JSONPath-style optics over `serde_json` values.
//!
//! This crate turns a dotted/bracketed path string into a composed accessor
//! over a [`serde_json::Value`] tree. Accessors are immutable, reusable
//! values supporting reads, functional updates and bulk folds; a path that
//! does not match simply produces no focus, never an error.
//!
//! # Example
//!
//! ```
//! use json_optics::{root, JsonEveryExt, JsonPathExt};
//! use serde_json::json;
//!
//! let company = json!({
//!     "name": "Arrow",
//!     "address": {
//!         "city": "Functional Town",
//!         "street": {"number": 1337, "name": "Functional street"}
//!     },
//!     "employees": [
//!         {"name": "John", "lastName": "doe"},
//!         {"name": "Jane", "lastName": "doe"}
//!     ]
//! });
//!
//! // Read a single nested field.
//! let street_name = root().path("address.street.name").string();
//! assert_eq!(street_name.get(&company), Some("Functional street".to_string()));
//!
//! // Update through the same accessor.
//! let shouted = street_name.modify(company.clone(), |name| name.to_uppercase());
//! assert_eq!(street_name.get(&shouted), Some("FUNCTIONAL STREET".to_string()));
//!
//! // Collect every match of a wildcard path.
//! let employee_names = root().path_multiple("employees.*.name").string();
//! assert_eq!(employee_names.get_all(&company), vec!["John", "Jane"]);
//! ```

pub mod node;

mod selector;
pub use selector::{split_path, Selector, SelectorError};

mod path;
pub use path::{root, JsonPathExt, FIELD_DELIMITER, INDEX_DELIMITER};

mod path_every;
pub use path_every::JsonEveryExt;

mod extract;

pub use json_optics_core::{Every, Lens, Monoid, Optional};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn company() -> Value {
        json!({
            "name": "Arrow",
            "address": {
                "city": "Functional Town",
                "street": {"number": 1337, "name": "Functional street"}
            },
            "employees": [
                {"name": "John", "lastName": "doe"},
                {"name": "Jane", "lastName": "doe"}
            ]
        })
    }

    #[test]
    fn test_path_reads_nested_field() {
        let street_name = root().path("address.street.name").string();
        assert_eq!(
            street_name.get(&company()),
            Some("Functional street".to_string())
        );
    }

    #[test]
    fn test_path_modify_rewrites_only_the_focus() {
        let street_name = root().path("address.street.name").string();
        let shouted = street_name.modify(company(), |name| name.to_uppercase());
        assert_eq!(
            street_name.get(&shouted),
            Some("FUNCTIONAL STREET".to_string())
        );
        // Everything else is untouched.
        assert_eq!(
            root().path("address.city").string().get(&shouted),
            Some("Functional Town".to_string())
        );
    }

    #[test]
    fn test_path_multiple_collects_in_order() {
        let names = root().path_multiple("employees.*.name").string();
        assert_eq!(names.get_all(&company()), vec!["John", "Jane"]);
    }

    #[test]
    fn test_indexed_path() {
        let first = root().path("employees[0].name").string();
        assert_eq!(first.get(&company()), Some("John".to_string()));
        let second = root().path("employees[1].name").string();
        assert_eq!(second.get(&company()), Some("Jane".to_string()));
    }

    #[test]
    fn test_path_number_projection() {
        let number = root().path("address.street.number");
        assert_eq!(number.int().get(&company()), Some(1337));
        assert_eq!(number.long().get(&company()), Some(1337));
        assert_eq!(number.double().get(&company()), Some(1337.0));
        assert_eq!(number.string().get(&company()), None);
    }

    #[test]
    fn test_select_bracket_and_bare_are_equivalent() {
        let bare = root().select("address").select("city").string();
        let bracketed = root().select("['address']").select("['city']").string();
        assert_eq!(bare.get(&company()), bracketed.get(&company()));
    }

    #[test]
    fn test_select_index_syntax() {
        let first = root()
            .select("employees")
            .select("[0]")
            .select("name")
            .string();
        assert_eq!(first.get(&company()), Some("John".to_string()));
    }

    #[test]
    fn test_missing_field_is_a_miss() {
        assert_eq!(root().path("address.country").get(&company()), None);
        assert_eq!(root().path("employees[9].name").get(&company()), None);
    }

    #[test]
    fn test_write_to_missing_path_is_noop() {
        let absent = root().path("employees[9].name").string();
        assert_eq!(absent.set(company(), "nobody".to_string()), company());
    }

    #[test]
    fn test_set_through_indexed_path() {
        let last = root().path("employees[1].lastName").string();
        let updated = last.set(company(), "Doe".to_string());
        assert_eq!(last.get(&updated), Some("Doe".to_string()));
        // The sibling element keeps its original spelling.
        assert_eq!(
            root().path("employees[0].lastName").get(&updated),
            Some(json!("doe"))
        );
    }

    #[test]
    fn test_at_erases_and_inserts_keys() {
        let at_name = root().at("name");

        let erased = at_name.set(company(), None);
        assert_eq!(root().at_key("name").get(&erased), None);

        let inserted = at_name.set(erased, Some(json!("Quiver")));
        assert_eq!(root().at_key("name").get(&inserted), Some(json!("Quiver")));
    }

    #[test]
    fn test_at_reports_presence() {
        assert_eq!(root().at("name").get(&company()), Some(Some(json!("Arrow"))));
        assert_eq!(root().at("missing").get(&company()), Some(None));
        // On a non-object there is no presence to report at all.
        assert_eq!(root().at("name").get(&json!(42)), None);
    }

    #[test]
    fn test_select_multiple_index_set() {
        let doc = json!(["a", "b", "c", "d"]);
        let picked = root().select_multiple("[0,2]").string();
        assert_eq!(picked.get_all(&doc), vec!["a", "c"]);
    }

    #[test]
    fn test_select_multiple_ranges() {
        let doc = json!(["a", "b", "c", "d"]);
        assert_eq!(
            root().select_multiple("[1:]").string().get_all(&doc),
            vec!["b", "c", "d"]
        );
        assert_eq!(
            root().select_multiple("[1:3]").string().get_all(&doc),
            vec!["b", "c"]
        );
    }

    #[test]
    fn test_wildcard_over_object_members() {
        let names = root().path_multiple("address.*").string();
        assert_eq!(names.get_all(&company()), vec!["Functional Town"]);
    }

    #[test]
    fn test_every_modify_touches_each_element() {
        let upper = root().path_multiple("employees.*.lastName").string();
        let updated = upper.modify(company(), |name| name.to_uppercase());
        assert_eq!(upper.get_all(&updated), vec!["DOE", "DOE"]);
    }

    #[test]
    fn test_filter_keys() {
        let doc = json!({"name": "a", "nick": "b", "age": 3});
        let starts_with_n = root().filter_keys(|key| key.starts_with('n'));
        assert_eq!(
            starts_with_n.get_all(&doc),
            vec![json!("a"), json!("b")]
        );
    }

    #[test]
    fn test_filter_index() {
        let doc = json!([10, 11, 12, 13]);
        let odd = root().filter_index(|index| index % 2 == 1);
        assert_eq!(odd.get_all(&doc), vec![json!(11), json!(13)]);
    }

    #[test]
    fn test_path_with_custom_delimiters() {
        let street_name = root()
            .path_with("address/street/name", "/", "[")
            .string();
        assert_eq!(
            street_name.get(&company()),
            Some("Functional street".to_string())
        );
    }

    #[test]
    fn test_malformed_bracket_degrades_to_absent_field() {
        // `[oops` matches no bracket grammar, so it is looked up as a
        // literal property name and misses.
        assert_eq!(root().path("employees[oops.name").get(&company()), None);
    }

    #[test]
    fn test_try_path_rejects_malformed_bracket() {
        assert_eq!(
            root().try_path("employees[oops.name").unwrap_err(),
            SelectorError::MalformedBracket("[oops".to_string())
        );
    }

    #[test]
    fn test_try_path_rejects_multi_result_selectors() {
        assert_eq!(
            root().try_path("employees.*.name").unwrap_err(),
            SelectorError::NotSingular("*".to_string())
        );
    }

    #[test]
    fn test_try_path_accepts_singular_paths() {
        let first = root().try_path("employees[0].name").unwrap().string();
        assert_eq!(first.get(&company()), Some("John".to_string()));
    }

    #[test]
    fn test_try_path_multiple_accepts_wildcards() {
        let names = root().try_path_multiple("employees.*.name").unwrap().string();
        assert_eq!(names.get_all(&company()), vec!["John", "Jane"]);
    }

    #[test]
    fn test_try_path_multiple_rejects_malformed_bracket() {
        assert_eq!(
            root().try_path_multiple("employees[1,].name").unwrap_err(),
            SelectorError::MalformedBracket("[1,]".to_string())
        );
    }

    #[test]
    fn test_every_chain_on_every_receiver() {
        let all_fields = root().every().select("name").string();
        let doc = json!([{"name": "a"}, {"name": "b"}, {"nick": "c"}]);
        assert_eq!(all_fields.get_all(&doc), vec!["a", "b"]);
    }

    #[test]
    fn test_path_every_on_every_receiver() {
        let names = root().every().path_every("street.*").string();
        let doc = json!([
            {"street": {"name": "Main", "number": 1}},
            {"street": {"name": "Oak", "number": 2}}
        ]);
        assert_eq!(names.get_all(&doc), vec!["Main", "Oak"]);
    }

    #[test]
    fn test_path_on_every_receiver() {
        let doc = json!([{"street": {"name": "Main"}}, {"street": {"name": "Oak"}}]);
        let names = root().every().path("street.name").string();
        assert_eq!(names.get_all(&doc), vec!["Main", "Oak"]);
    }

    #[test]
    fn test_at_on_every_receiver_erases_in_each_object() {
        let doc = json!([{"a": 1, "b": 2}, {"a": 3}]);
        let trimmed = root().every().at("a").set(doc, None);
        assert_eq!(trimmed, json!([{"b": 2}, {}]));
    }

    #[test]
    fn test_at_index_on_every_receiver() {
        let doc = json!({"rows": [[1, 2], [3, 4]]});
        let firsts = root().select("rows").every().at_index(0).int();
        assert_eq!(firsts.get_all(&doc), vec![1, 3]);
    }

    #[test]
    fn test_filter_keys_on_every_receiver() {
        let doc = json!([{"name": "a", "age": 1}, {"name": "b", "nick": "bb"}]);
        let named = root().every().filter_keys(|key| key.starts_with('n'));
        assert_eq!(
            named.get_all(&doc),
            vec![json!("a"), json!("b"), json!("bb")]
        );
    }

    #[test]
    fn test_modify_identity_leaves_value_unchanged() {
        let every_name = root().path_multiple("employees.*.name");
        assert_eq!(every_name.modify(company(), |value| value), company());
        let street = root().path("address.street");
        assert_eq!(street.modify(company(), |value| value), company());
    }
}
