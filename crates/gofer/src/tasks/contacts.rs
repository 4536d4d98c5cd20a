//! Contact-list sorting.

use std::fs;

use serde_json::Value;

use crate::store::DataStore;
use crate::tasks::TaskReport;
use crate::Result;

/// Sort the array in `contacts.json` ascending by each entry's `name` and
/// write the result to `contacts-sorted.json`. The sort is stable; entries
/// without a string `name` sort as the empty string.
pub(crate) fn sort_contacts(store: &DataStore) -> Result<TaskReport> {
    let input = store.path("contacts.json");
    if !input.is_file() {
        return Ok(TaskReport::error("File not found"));
    }

    let mut contacts: Vec<Value> = serde_json::from_str(&fs::read_to_string(&input)?)?;
    contacts.sort_by(|a, b| contact_name(a).cmp(contact_name(b)));
    fs::write(
        store.path("contacts-sorted.json"),
        serde_json::to_string(&contacts)?,
    )?;

    Ok(TaskReport::success("Contacts sorted"))
}

fn contact_name(contact: &Value) -> &str {
    contact.get("name").and_then(Value::as_str).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::testing::scratch_store;

    #[test]
    fn reports_missing_input() {
        let (_dir, store) = scratch_store();

        let report = sort_contacts(&store).unwrap();
        assert_eq!(report, TaskReport::error("File not found"));
    }

    #[test]
    fn sorts_by_name_ascending() {
        let (_dir, store) = scratch_store();
        fs::write(
            store.path("contacts.json"),
            r#"[{"name":"Bob"},{"name":"Alice"}]"#,
        )
        .unwrap();

        let report = sort_contacts(&store).unwrap();
        assert_eq!(report, TaskReport::success("Contacts sorted"));
        assert_eq!(
            fs::read_to_string(store.path("contacts-sorted.json")).unwrap(),
            r#"[{"name":"Alice"},{"name":"Bob"}]"#
        );
    }

    #[test]
    fn object_keys_keep_their_input_order() {
        let (_dir, store) = scratch_store();
        fs::write(
            store.path("contacts.json"),
            r#"[{"name":"Bob","email":"bob@example.com"},{"name":"Amy","email":"amy@example.com"}]"#,
        )
        .unwrap();

        sort_contacts(&store).unwrap();
        assert_eq!(
            fs::read_to_string(store.path("contacts-sorted.json")).unwrap(),
            r#"[{"name":"Amy","email":"amy@example.com"},{"name":"Bob","email":"bob@example.com"}]"#
        );
    }

    #[test]
    fn missing_name_sorts_first() {
        let (_dir, store) = scratch_store();
        fs::write(store.path("contacts.json"), r#"[{"name":"Bob"},{}]"#).unwrap();

        sort_contacts(&store).unwrap();
        assert_eq!(
            fs::read_to_string(store.path("contacts-sorted.json")).unwrap(),
            r#"[{},{"name":"Bob"}]"#
        );
    }

    #[test]
    fn equal_names_keep_their_order() {
        let (_dir, store) = scratch_store();
        fs::write(
            store.path("contacts.json"),
            r#"[{"id":2,"name":"Ann"},{"id":1,"name":"Ann"}]"#,
        )
        .unwrap();

        sort_contacts(&store).unwrap();

        let sorted: Vec<Value> = serde_json::from_str(
            &fs::read_to_string(store.path("contacts-sorted.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(sorted[0]["id"], 2);
        assert_eq!(sorted[1]["id"], 1);
    }

    #[test]
    fn malformed_json_is_a_fault() {
        let (_dir, store) = scratch_store();
        fs::write(store.path("contacts.json"), "{not json").unwrap();

        assert!(sort_contacts(&store).is_err());
        assert!(!store.path("contacts-sorted.json").exists());
    }
}
