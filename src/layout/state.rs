//! Immutable visibility/size snapshot driving the app view.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::types::ContentVisibility;
use crate::error::ViewError;

/// Raw field values for building a [`LayoutState`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct LayoutFields {
    /// Current footer extent in pixels.
    pub footer_height: f64,
    /// User-toggled open/closed preference.
    pub footer_open: bool,
    /// Whether the footer occupies any space.
    pub footer_visible: bool,
    /// Whether the header is shown.
    pub header_visible: bool,
    /// Whether the memorization time is shown.
    pub memo_visible: bool,
    /// Whether a personal-best value exists.
    pub pb_available: bool,
    /// Whether the personal-best label is shown.
    pub pb_visible: bool,
    /// Whether scramble text exists.
    pub scramble_available: bool,
    /// Whether the scramble is shown.
    pub scramble_visible: bool,
}

/// Validated, immutable layout snapshot.
///
/// Every construction path checks the footer height and the visibility
/// implications, so a malformed state never reaches layout code. Changing a
/// field produces a new value; nothing mutates a state in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Value")]
#[allow(clippy::struct_excessive_bools)]
pub struct LayoutState {
    footer_height: f64,
    footer_open: bool,
    footer_visible: bool,
    header_visible: bool,
    memo_visible: bool,
    pb_available: bool,
    pb_visible: bool,
    scramble_available: bool,
    scramble_visible: bool,
}

/// One field that differs between two states, with its new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateChange {
    /// Footer height changed.
    FooterHeight(f64),
    /// Footer open/closed flipped.
    FooterOpen(bool),
    /// Footer visibility flipped.
    FooterVisible(bool),
    /// Header visibility flipped.
    HeaderVisible(bool),
    /// Memo visibility flipped.
    MemoVisible(bool),
    /// PB visibility flipped.
    PbVisible(bool),
    /// Scramble visibility flipped.
    ScrambleVisible(bool),
}

impl LayoutState {
    /// Validate `fields` and freeze them.
    pub fn try_new(fields: LayoutFields) -> Result<Self, ViewError> {
        if !fields.footer_height.is_finite() || fields.footer_height < 0.0 {
            return Err(ViewError::InvalidMetric {
                name: "footerHeight",
                value: fields.footer_height,
            });
        }
        if fields.pb_visible && !fields.pb_available {
            return Err(ViewError::InconsistentState(
                "pbVisible requires pbAvailable",
            ));
        }
        if fields.scramble_visible && !fields.scramble_available {
            return Err(ViewError::InconsistentState(
                "scrambleVisible requires scrambleAvailable",
            ));
        }
        Ok(Self {
            footer_height: fields.footer_height,
            footer_open: fields.footer_open,
            footer_visible: fields.footer_visible,
            header_visible: fields.header_visible,
            memo_visible: fields.memo_visible,
            pb_available: fields.pb_available,
            pb_visible: fields.pb_visible,
            scramble_available: fields.scramble_available,
            scramble_visible: fields.scramble_visible,
        })
    }

    /// Pre-measurement state: header shown, footer hidden, nothing available.
    #[must_use]
    pub fn initial(footer_open: bool, memo_visible: bool) -> Self {
        Self {
            footer_height: 0.0,
            footer_open,
            footer_visible: false,
            header_visible: true,
            memo_visible,
            pb_available: false,
            pb_visible: false,
            scramble_available: false,
            scramble_visible: false,
        }
    }

    /// Build a state from loosely typed JSON, checking every field's type.
    pub fn from_json(value: &Value) -> Result<Self, ViewError> {
        let object = value.as_object().ok_or(ViewError::InvalidFieldType {
            field: "state",
            expected: "object",
        })?;
        let number = |field: &'static str| {
            object.get(field).and_then(Value::as_f64).ok_or(
                ViewError::InvalidFieldType {
                    field,
                    expected: "number",
                },
            )
        };
        let boolean = |field: &'static str| {
            object.get(field).and_then(Value::as_bool).ok_or(
                ViewError::InvalidFieldType {
                    field,
                    expected: "bool",
                },
            )
        };
        Self::try_new(LayoutFields {
            footer_height: number("footerHeight")?,
            footer_open: boolean("footerOpen")?,
            footer_visible: boolean("footerVisible")?,
            header_visible: boolean("headerVisible")?,
            memo_visible: boolean("memoVisible")?,
            pb_available: boolean("pbAvailable")?,
            pb_visible: boolean("pbVisible")?,
            scramble_available: boolean("scrambleAvailable")?,
            scramble_visible: boolean("scrambleVisible")?,
        })
    }

    /// Copy of the raw fields, for building a modified state.
    #[must_use]
    pub fn fields(&self) -> LayoutFields {
        LayoutFields {
            footer_height: self.footer_height,
            footer_open: self.footer_open,
            footer_visible: self.footer_visible,
            header_visible: self.header_visible,
            memo_visible: self.memo_visible,
            pb_available: self.pb_available,
            pb_visible: self.pb_visible,
            scramble_available: self.scramble_available,
            scramble_visible: self.scramble_visible,
        }
    }

    /// Current footer extent in pixels.
    #[must_use]
    pub fn footer_height(&self) -> f64 {
        self.footer_height
    }

    /// User-toggled open/closed preference.
    #[must_use]
    pub fn footer_open(&self) -> bool {
        self.footer_open
    }

    /// Whether the footer occupies any space.
    #[must_use]
    pub fn footer_visible(&self) -> bool {
        self.footer_visible
    }

    /// Whether the header is shown.
    #[must_use]
    pub fn header_visible(&self) -> bool {
        self.header_visible
    }

    /// Whether the memorization time is shown.
    #[must_use]
    pub fn memo_visible(&self) -> bool {
        self.memo_visible
    }

    /// Whether a personal-best value exists.
    #[must_use]
    pub fn pb_available(&self) -> bool {
        self.pb_available
    }

    /// Whether the personal-best label is shown.
    #[must_use]
    pub fn pb_visible(&self) -> bool {
        self.pb_visible
    }

    /// Whether scramble text exists.
    #[must_use]
    pub fn scramble_available(&self) -> bool {
        self.scramble_available
    }

    /// Whether the scramble is shown.
    #[must_use]
    pub fn scramble_visible(&self) -> bool {
        self.scramble_visible
    }

    /// Copy with the footer flipped open or closed.
    #[must_use]
    pub fn with_footer_open(self, footer_open: bool) -> Self {
        Self {
            footer_open,
            ..self
        }
    }

    /// Copy with memo visibility replaced.
    #[must_use]
    pub fn with_memo_visible(self, memo_visible: bool) -> Self {
        Self {
            memo_visible,
            ..self
        }
    }

    /// Copy with PB availability replaced. Losing the PB also hides it.
    #[must_use]
    pub fn with_pb_available(self, pb_available: bool) -> Self {
        Self {
            pb_available,
            pb_visible: self.pb_visible && pb_available,
            ..self
        }
    }

    /// Copy with scramble availability replaced. Losing the scramble also
    /// hides it.
    #[must_use]
    pub fn with_scramble_available(self, scramble_available: bool) -> Self {
        Self {
            scramble_available,
            scramble_visible: self.scramble_visible && scramble_available,
            ..self
        }
    }

    /// Labels the content region would show if space were unlimited.
    ///
    /// The PB only competes for space while the footer is closed.
    #[must_use]
    pub fn candidate_visibility(&self) -> ContentVisibility {
        ContentVisibility {
            pb: self.pb_available && !self.footer_open,
            scramble: self.scramble_available,
            memo: self.memo_visible,
        }
    }

    /// Labels currently shown.
    #[must_use]
    pub fn content_visibility(&self) -> ContentVisibility {
        ContentVisibility {
            pb: self.pb_visible,
            scramble: self.scramble_visible,
            memo: self.memo_visible,
        }
    }

    /// Height the footer takes from the window: zero when hidden, the closed
    /// bar when closed, the full height when open.
    #[must_use]
    pub fn footer_extent(&self, closed_height: f64) -> f64 {
        if !self.footer_visible {
            0.0
        } else if self.footer_open {
            self.footer_height
        } else {
            closed_height
        }
    }

    /// Field-by-field differences from `self` to `next`.
    #[must_use]
    pub fn changes(&self, next: &Self) -> Vec<StateChange> {
        let mut changes = Vec::new();
        if self.footer_height != next.footer_height {
            changes.push(StateChange::FooterHeight(next.footer_height));
        }
        if self.footer_open != next.footer_open {
            changes.push(StateChange::FooterOpen(next.footer_open));
        }
        if self.footer_visible != next.footer_visible {
            changes.push(StateChange::FooterVisible(next.footer_visible));
        }
        if self.header_visible != next.header_visible {
            changes.push(StateChange::HeaderVisible(next.header_visible));
        }
        if self.memo_visible != next.memo_visible {
            changes.push(StateChange::MemoVisible(next.memo_visible));
        }
        if self.scramble_visible != next.scramble_visible {
            changes.push(StateChange::ScrambleVisible(next.scramble_visible));
        }
        if self.pb_visible != next.pb_visible {
            changes.push(StateChange::PbVisible(next.pb_visible));
        }
        changes
    }
}

impl TryFrom<Value> for LayoutState {
    type Error = ViewError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_json(&value)
    }
}
