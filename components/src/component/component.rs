use super::{ActionsRow, Button};
use crate::Result;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::convert::TryFrom;
use tracing::debug;

/// Any component that can be attached to a message. Each variant writes its
/// own `type` discriminator when serialized, so the enum itself is untagged.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
#[non_exhaustive]
pub enum Component {
    ActionsRow(ActionsRow),
    Button(Button),
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
#[non_exhaustive]
pub enum ComponentType {
    ActionsRow = 1,
    Button = 2,
}

impl TryFrom<u64> for ComponentType {
    type Error = Box<str>;

    fn try_from(value: u64) -> std::result::Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::ActionsRow,
            2 => Self::Button,
            _ => Err(format!("invalid component type \"{}\"", value).into_boxed_str())?,
        })
    }
}

impl Component {
    pub fn component_type(&self) -> ComponentType {
        match self {
            Component::ActionsRow(row) => row.component_type(),
            Component::Button(button) => button.component_type(),
        }
    }

    /// Encodes the component into its wire form.
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<ActionsRow> for Component {
    fn from(row: ActionsRow) -> Self {
        Component::ActionsRow(row)
    }
}

impl From<Button> for Component {
    fn from(button: Button) -> Self {
        Component::Button(button)
    }
}

impl<'de> Deserialize<'de> for Component {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        let component_type = value
            .get("type")
            .and_then(Value::as_u64)
            .ok_or_else(|| Box::from("component type was not an integer"))
            .and_then(ComponentType::try_from)
            .map_err(|e| {
                debug!(error = %e, "Failed to read component type");
                D::Error::custom(e)
            })?;

        let component = match component_type {
            ComponentType::ActionsRow => serde_json::from_value(value).map(Component::ActionsRow),
            ComponentType::Button => serde_json::from_value(value).map(Component::Button),
        }
        .map_err(D::Error::custom)?;

        Ok(component)
    }
}
