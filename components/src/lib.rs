mod error;
pub use error::{ComponentError, Result};

mod snowflake;
pub use snowflake::Snowflake;

pub mod component;
pub use component::{ActionsRow, Button, ButtonEmoji, ButtonStyle, Component, ComponentType};

mod util;
