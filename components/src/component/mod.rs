mod component;
pub use component::{Component, ComponentType};

mod actions_row;
pub use actions_row::ActionsRow;

mod button;
pub use button::{Button, ButtonStyle};

mod button_emoji;
pub use button_emoji::ButtonEmoji;
