use crate::calc::{render_result, CalcError, DisplayResult, ProgressRequest, TickRate};
use crate::config::FormDefaults;
use crate::input::EntryField;
use crate::locale::{Labels, Locale};
use crate::units::{Quantity, Unit};
use std::str::FromStr;

/// The three numeric inputs of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Want,
    Have,
    PerTick,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Want, Field::Have, Field::PerTick];

    pub fn label(self, labels: &Labels) -> &'static str {
        match self {
            Field::Want => labels.want,
            Field::Have => labels.have,
            Field::PerTick => labels.tick,
        }
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "want" => Ok(Field::Want),
            "have" => Ok(Field::Have),
            "tick" | "per-tick" | "per_tick" => Ok(Field::PerTick),
            other => Err(format!("unknown field '{}'", other)),
        }
    }
}

/// Entry text plus the unit chosen next to it
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    pub entry: EntryField,
    pub unit: Unit,
}

impl FieldState {
    pub fn new(unit: Unit) -> Self {
        Self {
            entry: EntryField::new(),
            unit,
        }
    }

    pub fn quantity(&self) -> Quantity {
        Quantity::parse(self.entry.text(), self.unit.suffix())
    }
}

/// Everything the shell shows, passed explicitly to render calls
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub locale: Locale,
    pub want: FieldState,
    pub have: FieldState,
    pub per_tick: FieldState,
    pub rate: TickRate,
    last_result: Option<Result<DisplayResult, CalcError>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&FormDefaults::default())
    }
}

impl AppState {
    pub fn new(defaults: &FormDefaults) -> Self {
        Self {
            locale: defaults.locale,
            want: FieldState::new(defaults.want_unit()),
            have: FieldState::new(defaults.have_unit()),
            per_tick: FieldState::new(defaults.per_tick_unit()),
            rate: TickRate::from_double_rate(defaults.double_rate),
            last_result: None,
        }
    }

    pub fn labels(&self) -> &'static Labels {
        self.locale.labels()
    }

    pub fn field(&self, field: Field) -> &FieldState {
        match field {
            Field::Want => &self.want,
            Field::Have => &self.have,
            Field::PerTick => &self.per_tick,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Want => &mut self.want,
            Field::Have => &mut self.have,
            Field::PerTick => &mut self.per_tick,
        }
    }

    /// Swap language; the stored result is re-rendered in the new language
    pub fn toggle_locale(&mut self) {
        self.locale = self.locale.toggle();
    }

    pub fn set_double_rate(&mut self, double_rate: bool) {
        self.rate = TickRate::from_double_rate(double_rate);
    }

    pub fn request(&self) -> ProgressRequest {
        ProgressRequest {
            want: self.want.quantity(),
            have: self.have.quantity(),
            per_tick: self.per_tick.quantity(),
            rate: self.rate,
        }
    }

    /// Run the calculation and replace whatever the result area showed before
    pub fn calculate(&mut self) -> &Result<DisplayResult, CalcError> {
        let result = self.request().evaluate();
        self.last_result.insert(result)
    }

    pub fn last_result(&self) -> Option<&Result<DisplayResult, CalcError>> {
        self.last_result.as_ref()
    }

    /// Text of the result area, empty before the first calculation
    pub fn result_text(&self) -> String {
        self.last_result
            .as_ref()
            .map(|result| render_result(result, self.labels()))
            .unwrap_or_default()
    }
}
