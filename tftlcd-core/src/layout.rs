//! Widget layouts
//!
//! Each widget is described once, as an ordered list of elements. The same
//! list is drawn by [`render`] and searched by [`hit_test`], so what the
//! user sees and what the touch decoder matches can never drift apart.
//!
//! Layouts are for a 480x320 landscape panel and leave the left-hand menu
//! column (x < 131) untouched.

use tftlcd_display::{Align, DisplayBackend, DisplayError, Role, Shape, Theme};
use tftlcd_hal::{Point, Rect};

use crate::keys::{DialogChoice, KeyboardKey, KeypadKey};

/// Text shown on an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Label {
    /// Fixed text
    Text(&'static str),
    /// Dialog title, supplied by the widget
    Title,
    /// Dialog message line, supplied by the widget
    Message(u8),
}

/// One drawable, optionally touchable, region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Element {
    pub rect: Rect,
    pub shape: Shape,
    pub role: Role,
    pub align: Align,
    pub label: Label,
    /// Key code reported when touched; `None` for decoration
    pub code: Option<u8>,
}

impl Element {
    /// Rounded, centred, touchable key
    pub const fn key(rect: Rect, label: &'static str, code: u8) -> Self {
        Self {
            rect,
            shape: Shape::Round,
            role: Role::Key,
            align: Align::Center,
            label: Label::Text(label),
            code: Some(code),
        }
    }

    /// Non-touchable element
    pub const fn decor(rect: Rect, shape: Shape, role: Role, align: Align, label: Label) -> Self {
        Self {
            rect,
            shape,
            role,
            align,
            label,
            code: None,
        }
    }

    /// Same element drawn with a different role
    pub const fn with_role(self, role: Role) -> Self {
        Self { role, ..self }
    }

    pub const fn is_key(&self) -> bool {
        self.code.is_some()
    }
}

/// How grid cells get their key code
#[derive(Clone, Copy)]
enum CellCode {
    /// Position in the grid (digit value)
    Index,
    /// First byte of the label (ASCII character)
    Ascii,
}

/// Regular grid of equally sized keys, filled row by row
struct Grid {
    x: u16,
    y: u16,
    width: u16,
    height: u16,
    pitch_x: u16,
    pitch_y: u16,
    columns: usize,
    /// Number of cells, taken from the front of `labels`
    count: usize,
    labels: &'static [&'static str],
    codes: CellCode,
}

impl Grid {
    const fn cell(&self, i: usize) -> Element {
        let col = (i % self.columns) as u16;
        let row = (i / self.columns) as u16;
        let rect = Rect::with_size(
            self.x + col * self.pitch_x,
            self.y + row * self.pitch_y,
            self.width,
            self.height,
        );
        let label = self.labels[i];
        let code = match self.codes {
            CellCode::Index => i as u8,
            CellCode::Ascii => label.as_bytes()[0],
        };
        Element::key(rect, label, code)
    }
}

/// Concatenate `head`, the grid cells and `tail` into one layout
const fn compose<const N: usize>(head: &[Element], grid: &Grid, tail: &[Element]) -> [Element; N] {
    assert!(grid.count <= grid.labels.len());
    assert!(head.len() + grid.count + tail.len() == N);

    let mut out = [BACKDROP; N];
    let mut n = 0;

    let mut i = 0;
    while i < head.len() {
        out[n] = head[i];
        n += 1;
        i += 1;
    }
    let mut i = 0;
    while i < grid.count {
        out[n] = grid.cell(i);
        n += 1;
        i += 1;
    }
    let mut i = 0;
    while i < tail.len() {
        out[n] = tail[i];
        n += 1;
        i += 1;
    }
    out
}

/// Region cleared before a keypad or keyboard is drawn
pub const BACKDROP_RECT: Rect = Rect::new(131, 55, 479, 319);

const BACKDROP: Element = Element::decor(
    BACKDROP_RECT,
    Shape::Square,
    Role::Backdrop,
    Align::Center,
    Label::Text(""),
);

const DIGIT_LABELS: [&str; 16] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "a", "b", "c", "d", "e", "f",
];

const KEYBOARD_LABELS: [&str; 36] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", //
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", //
    "k", "l", "m", "n", "o", "p", "q", "r", "s", "t", //
    "u", "v", "w", "x", "y", "z",
];

/// Value field of both keypads
pub const KEYPAD_VALUE_FIELD: Rect = Rect::new(255, 220, 470, 260);

/// Value field of the keyboard
pub const KEYBOARD_VALUE_FIELD: Rect = Rect::new(245, 230, 475, 270);

const KEYPAD_TAIL: [Element; 5] = [
    Element::key(
        Rect::new(365, 170, 470, 210),
        "<---",
        KeypadKey::Backspace.code(),
    ),
    Element::decor(
        Rect::new(145, 220, 250, 260),
        Shape::Round,
        Role::Caption,
        Align::Center,
        Label::Text("Input:"),
    ),
    Element::decor(
        KEYPAD_VALUE_FIELD,
        Shape::Round,
        Role::Field,
        Align::Center,
        Label::Text(" "),
    ),
    Element::key(
        Rect::new(145, 270, 305, 310),
        "Accept",
        KeypadKey::Accept.code(),
    ),
    Element::key(
        Rect::new(315, 270, 470, 310),
        "Cancel",
        KeypadKey::Cancel.code(),
    ),
];

const KEYPAD_DIGIT_SIZE: (u16, u16) = (50, 40);
const KEYPAD_PITCH: (u16, u16) = (55, 45);

/// Hex keypad: digits 0-f in three rows of six
pub static HEX_KEYPAD: [Element; 22] = compose(
    &[BACKDROP],
    &Grid {
        x: 145,
        y: 80,
        width: KEYPAD_DIGIT_SIZE.0,
        height: KEYPAD_DIGIT_SIZE.1,
        pitch_x: KEYPAD_PITCH.0,
        pitch_y: KEYPAD_PITCH.1,
        columns: 6,
        count: 16,
        labels: &DIGIT_LABELS,
        codes: CellCode::Index,
    },
    &KEYPAD_TAIL,
);

/// Decimal keypad: digits 0-9 in two rows of six
pub static DECIMAL_KEYPAD: [Element; 16] = compose(
    &[BACKDROP],
    &Grid {
        x: 145,
        y: 125,
        width: KEYPAD_DIGIT_SIZE.0,
        height: KEYPAD_DIGIT_SIZE.1,
        pitch_x: KEYPAD_PITCH.0,
        pitch_y: KEYPAD_PITCH.1,
        columns: 6,
        count: 10,
        labels: &DIGIT_LABELS,
        codes: CellCode::Index,
    },
    &KEYPAD_TAIL,
);

/// Alphanumeric keyboard: 0-9 and a-z in rows of ten
pub static KEYBOARD: [Element; 42] = compose(
    &[BACKDROP],
    &Grid {
        x: 135,
        y: 56,
        width: 32,
        height: 40,
        pitch_x: 34,
        pitch_y: 43,
        columns: 10,
        count: 36,
        labels: &KEYBOARD_LABELS,
        codes: CellCode::Ascii,
    },
    &[
        Element::key(
            Rect::new(340, 185, 474, 225),
            "<--",
            KeyboardKey::Backspace.code(),
        ),
        Element::decor(
            Rect::new(135, 230, 240, 270),
            Shape::Round,
            Role::Caption,
            Align::Center,
            Label::Text("Input:"),
        ),
        Element::decor(
            KEYBOARD_VALUE_FIELD,
            Shape::Round,
            Role::Field,
            Align::Center,
            Label::Text("filename"),
        ),
        Element::key(
            Rect::new(135, 275, 305, 315),
            "Accept",
            KeyboardKey::Accept.code(),
        ),
        Element::key(
            Rect::new(310, 275, 475, 315),
            "Cancel",
            KeyboardKey::Cancel.code(),
        ),
    ],
);

/// Error dialog: frame, title, two message lines and three buttons
///
/// The "X" sits on top of the title bar, so it must stay ahead of any
/// other key in this list.
pub static ERROR_DIALOG: [Element; 7] = [
    Element::decor(
        Rect::new(145, 100, 415, 220),
        Shape::Square,
        Role::Frame,
        Align::Center,
        Label::Text(""),
    ),
    Element::decor(
        Rect::new(145, 100, 415, 130),
        Shape::Square,
        Role::Title,
        Align::Left,
        Label::Title,
    ),
    Element::decor(
        Rect::new(146, 131, 414, 155),
        Shape::Square,
        Role::Message,
        Align::Center,
        Label::Message(0),
    ),
    Element::decor(
        Rect::new(146, 155, 414, 180),
        Shape::Square,
        Role::Message,
        Align::Center,
        Label::Message(1),
    ),
    Element::key(
        Rect::new(365, 100, 415, 130),
        "X",
        DialogChoice::Dismiss.code(),
    )
    .with_role(Role::DialogKey),
    Element::key(
        Rect::new(155, 180, 275, 215),
        "Confirm",
        DialogChoice::Confirm.code(),
    )
    .with_role(Role::DialogKey),
    Element::key(
        Rect::new(285, 180, 405, 215),
        "Cancel",
        DialogChoice::Cancel.code(),
    )
    .with_role(Role::DialogKey),
];

/// Find the touchable element under `point`
///
/// Elements are searched in declared order and the first match wins.
/// Decoration is never matched.
pub fn hit_test(layout: &[Element], point: Point) -> Option<&Element> {
    layout
        .iter()
        .find(|element| element.is_key() && element.rect.contains(point))
}

/// Draw every element of a layout in order
///
/// `text` supplies the strings for dynamic labels.
pub fn render<'a, B, F>(
    layout: &[Element],
    display: &mut B,
    theme: &Theme,
    text: F,
) -> Result<(), DisplayError>
where
    B: DisplayBackend,
    F: Fn(Label) -> &'a str,
{
    for element in layout {
        display.draw_button(
            element.shape,
            element.rect,
            text(element.label),
            &theme.style(element.role),
            element.align,
        )?;
    }
    Ok(())
}
