//! Widget colour theme
//!
//! Every element in a layout carries a [`Role`]; the theme turns the role
//! into concrete colours.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::backend::ButtonStyle;
use crate::color::Color;

/// What an element is, for styling purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Role {
    /// Region cleared behind a widget
    Backdrop,
    /// Touchable key on a keypad or keyboard
    Key,
    /// Static caption next to the value field ("Input:")
    Caption,
    /// Value field showing what has been typed so far
    Field,
    /// Dialog outline
    Frame,
    /// Dialog title bar
    Title,
    /// Dialog message line
    Message,
    /// Touchable dialog button
    DialogKey,
}

/// Colour palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Theme {
    /// Screen background behind widgets
    pub background: Color,
    /// Button label colour
    pub button_text: Color,
    /// Button outline colour
    pub button_border: Color,
    /// Button fill colour
    pub button: Color,
    /// Menu / panel background
    pub menu_background: Color,
    /// Border drawn around a key while it is held down
    pub pressed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Theme {
    pub const DEFAULT: Theme = Theme {
        background: Color::WHITE,
        button_text: Color::WHITE,
        button_border: Color::BLACK,
        button: Color::ORANGE,
        menu_background: Color::SLATE,
        pressed: Color::YELLOW,
    };

    /// Resolve the style for an element role
    pub const fn style(&self, role: Role) -> ButtonStyle {
        match role {
            Role::Backdrop => ButtonStyle::new(self.background, self.background, self.background),
            Role::Key | Role::Field => {
                ButtonStyle::new(self.button, self.button_border, self.button_text)
            }
            Role::Caption => {
                ButtonStyle::new(self.menu_background, self.button_border, self.button_text)
            }
            Role::Frame => ButtonStyle::new(self.menu_background, self.button, self.button),
            Role::Title => ButtonStyle::new(self.background, self.button, self.button_border),
            Role::Message => {
                ButtonStyle::new(self.menu_background, self.menu_background, self.button_text)
            }
            Role::DialogKey => ButtonStyle::new(self.button, self.button, self.button_text),
        }
    }

    /// Style for an element while it is held down
    pub const fn pressed(&self, role: Role) -> ButtonStyle {
        self.style(role).with_border(self.pressed)
    }
}
