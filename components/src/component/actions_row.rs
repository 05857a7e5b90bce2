use super::{Component, ComponentType};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Horizontal container for other components. Children render in order.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionsRow {
    pub components: Vec<Component>,
}

impl ActionsRow {
    pub fn new(components: Vec<Component>) -> ActionsRow {
        ActionsRow { components }
    }

    pub fn push(&mut self, component: impl Into<Component>) {
        self.components.push(component.into());
    }

    pub fn component_type(&self) -> ComponentType {
        ComponentType::ActionsRow
    }
}

impl Serialize for ActionsRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut row = serializer.serialize_struct("ActionsRow", 2)?;
        row.serialize_field("type", &self.component_type())?;
        row.serialize_field("components", &self.components)?;
        row.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Button, ButtonStyle};
    use serde_json::{json, Value};

    #[test]
    fn test_serialize_row() {
        let row = ActionsRow::new(vec![Button::new("A", "a").into()]);

        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(
            json,
            r#"{"type":1,"components":[{"label":"A","style":1,"disabled":false,"emoji":{},"custom_id":"a","type":2}]}"#
        );
    }

    #[test]
    fn test_children_keep_order() {
        let mut row = ActionsRow::default();
        row.push(Button::new("First", "1").style(ButtonStyle::Success));
        row.push(Button::new("Second", "2").style(ButtonStyle::Danger));
        row.push(Button::new_link("Third", "https://example.com"));

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["type"], json!(1));

        let expected: Vec<Value> = row
            .components
            .iter()
            .map(|c| serde_json::to_value(c).unwrap())
            .collect();
        assert_eq!(value["components"], Value::Array(expected));
        assert_eq!(value["components"][2]["url"], json!("https://example.com"));
    }

    #[test]
    fn test_empty_row() {
        let json = serde_json::to_string(&ActionsRow::default()).unwrap();
        assert_eq!(json, r#"{"type":1,"components":[]}"#);
    }

    #[test]
    fn test_type_field_ignored_on_decode() {
        let row: ActionsRow = serde_json::from_value(json!({
            "type": 1,
            "components": []
        }))
        .unwrap();

        assert!(row.components.is_empty());
    }
}
