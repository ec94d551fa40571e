use crate::locale::{NO, YES};
use crate::shell::state::{AppState, Field};
use serde::Serialize;

/// Window title and heading text
pub const TITLE: &str = "RoWu's Tool";

/// One numeric input row: label, entry text, unit dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRow {
    pub label: &'static str,
    pub text: String,
    pub unit: &'static str,
}

/// Snapshot of every visible piece of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub title: &'static str,
    pub lang_button: &'static str,
    pub credits_button: &'static str,
    pub fields: Vec<FieldRow>,
    pub gamepass_label: &'static str,
    pub gamepass: &'static str,
    pub calc_button: &'static str,
    pub result: String,
}

pub fn render(state: &AppState) -> View {
    let labels = state.labels();

    let fields = Field::ALL
        .iter()
        .map(|&field| {
            let field_state = state.field(field);
            FieldRow {
                label: field.label(labels),
                text: field_state.entry.text().to_string(),
                unit: field_state.unit.suffix(),
            }
        })
        .collect();

    View {
        title: TITLE,
        lang_button: state.locale.toggle_caption(),
        credits_button: labels.credits_btn,
        fields,
        gamepass_label: labels.gamepass,
        gamepass: if state.rate.is_double() { YES } else { NO },
        calc_button: labels.calc,
        result: state.result_text(),
    }
}

impl View {
    /// Plain-text layout, one widget row per line
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("[{}] [{}]", self.lang_button, self.credits_button),
            self.title.to_string(),
        ];
        for row in &self.fields {
            let unit = if row.unit.is_empty() { "-" } else { row.unit };
            lines.push(format!("{} [{}] ({})", row.label, row.text, unit));
        }
        lines.push(format!("{} {}", self.gamepass_label, self.gamepass));
        lines.push(format!("[{}]", self.calc_button));
        if !self.result.is_empty() {
            lines.push(self.result.clone());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    #[test]
    fn test_render_english() {
        let mut state = AppState::default();
        state.want.entry.type_text("1.5");
        let view = render(&state);

        assert_eq!(view.title, TITLE);
        assert_eq!(view.lang_button, "ESP");
        assert_eq!(view.credits_button, "Credits");
        assert_eq!(view.fields.len(), 3);
        assert_eq!(view.fields[0].label, "Power you want:");
        assert_eq!(view.fields[0].text, "1.5");
        assert_eq!(view.fields[0].unit, "B");
        assert_eq!(view.gamepass, "No");
        assert_eq!(view.result, "");
    }

    #[test]
    fn test_render_after_toggle() {
        let mut state = AppState::default();
        state.toggle_locale();
        state.set_double_rate(true);
        let view = render(&state);

        assert_eq!(state.locale, Locale::Spanish);
        assert_eq!(view.lang_button, "ENG");
        assert_eq!(view.credits_button, "Créditos");
        assert_eq!(view.fields[2].label, "Poder que ganas por tick:");
        assert_eq!(view.gamepass_label, "¿X2 Gamepass?");
        assert_eq!(view.gamepass, "Yes");
        assert_eq!(view.calc_button, "Calcular");
    }

    #[test]
    fn test_lines_include_result_only_when_present() {
        let mut state = AppState::default();
        let before = render(&state).to_lines();
        assert_eq!(before.len(), 7);

        state.calculate();
        let after = render(&state).to_lines();
        assert_eq!(after.len(), 8);
        assert_eq!(after[7], state.labels().already);
    }
}
