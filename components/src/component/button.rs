use super::{ButtonEmoji, ComponentType};
use crate::{util, ComponentError};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

/// A clickable button.
///
/// `url` and `custom_id` are mutually exclusive, and only buttons with the
/// [`ButtonStyle::Link`] style may carry a `url`. This is not checked when the
/// button is serialized; call [`Button::validate`] to check it up front.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Button {
    #[serde(default)]
    pub label: Box<str>,
    /// Unset styles are sent as [`ButtonStyle::Primary`].
    #[serde(default)]
    pub style: Option<ButtonStyle>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub emoji: ButtonEmoji,
    pub url: Option<Box<str>>,
    pub custom_id: Option<Box<str>>,
}

/// Raw values outside of the known styles are kept as `Unknown` and sent
/// through unchanged, leaving it to the platform to reject them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ButtonStyle {
    Primary,
    Secondary,
    Success,
    Danger,
    Link,
    Unknown(u8),
}

impl Button {
    pub fn new(label: impl Into<Box<str>>, custom_id: impl Into<Box<str>>) -> Button {
        Button {
            label: label.into(),
            custom_id: Some(custom_id.into()),
            ..Default::default()
        }
    }

    pub fn new_link(label: impl Into<Box<str>>, url: impl Into<Box<str>>) -> Button {
        Button {
            label: label.into(),
            style: Some(ButtonStyle::Link),
            url: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn emoji(mut self, emoji: ButtonEmoji) -> Self {
        self.emoji = emoji;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn component_type(&self) -> ComponentType {
        ComponentType::Button
    }

    /// The style written to the wire.
    pub fn effective_style(&self) -> ButtonStyle {
        match self.style {
            None | Some(ButtonStyle::Unknown(0)) => ButtonStyle::Primary,
            Some(style) => style,
        }
    }

    pub fn validate(&self) -> crate::Result<()> {
        let has_url = !util::is_blank(&self.url);

        if has_url && !util::is_blank(&self.custom_id) {
            return ComponentError::LinkWithCustomId.into();
        }

        if has_url != (self.effective_style() == ButtonStyle::Link) {
            return ComponentError::LinkStyleMismatch.into();
        }

        Ok(())
    }
}

impl Serialize for Button {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Err(e) = self.validate() {
            warn!(error = %e, label = %self.label, "Sending button with an invalid url/custom_id pair");
        }

        let mut button = serializer.serialize_struct("Button", 7)?;
        button.serialize_field("label", &self.label)?;
        button.serialize_field("style", &self.effective_style())?;
        button.serialize_field("disabled", &self.disabled)?;
        button.serialize_field("emoji", &self.emoji)?;

        if util::is_blank(&self.url) {
            button.skip_field("url")?;
        } else {
            button.serialize_field("url", &self.url)?;
        }

        if util::is_blank(&self.custom_id) {
            button.skip_field("custom_id")?;
        } else {
            button.serialize_field("custom_id", &self.custom_id)?;
        }

        button.serialize_field("type", &self.component_type())?;
        button.end()
    }
}

impl From<u8> for ButtonStyle {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Primary,
            2 => Self::Secondary,
            3 => Self::Success,
            4 => Self::Danger,
            5 => Self::Link,
            other => Self::Unknown(other),
        }
    }
}

impl From<ButtonStyle> for u8 {
    fn from(style: ButtonStyle) -> Self {
        match style {
            ButtonStyle::Primary => 1,
            ButtonStyle::Secondary => 2,
            ButtonStyle::Success => 3,
            ButtonStyle::Danger => 4,
            ButtonStyle::Link => 5,
            ButtonStyle::Unknown(other) => other,
        }
    }
}

impl Serialize for ButtonStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*self))
    }
}

impl<'de> Deserialize<'de> for ButtonStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(ButtonStyle::from(u8::deserialize(deserializer)?))
    }
}
