use crate::Snowflake;
use serde::{Deserialize, Serialize};

/// Emoji shown next to a button's label. Always sent as an object, with
/// empty fields left out.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonEmoji {
    #[serde(default, skip_serializing_if = "crate::util::is_blank")]
    pub name: Option<Box<str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub animated: bool,
}

impl ButtonEmoji {
    pub fn new(emoji: impl Into<Box<str>>) -> ButtonEmoji {
        ButtonEmoji {
            name: Some(emoji.into()),
            id: None,
            animated: false,
        }
    }

    pub fn new_custom_emoji(name: impl Into<Box<str>>, id: Snowflake, animated: bool) -> ButtonEmoji {
        ButtonEmoji {
            name: Some(name.into()),
            id: Some(id),
            animated,
        }
    }
}
