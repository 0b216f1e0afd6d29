use std::time::Instant;

use crate::input::MetricsRecord;
use crate::scoring::{compute_prediction, refresh_utilization, PredictionResult};

use super::fields::{FieldId, FieldKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
    Help,
    Result,
    Breakdown,
}

pub struct App {
    pub record: MetricsRecord,
    pub selected: usize, // index into FieldId::ALL
    pub input_mode: InputMode,
    pub edit_buffer: String,
    pub result: Option<PredictionResult>,
    pub flash_message: Option<(String, Instant)>,
    pub should_quit: bool,
    pub table_state: ratatui::widgets::TableState,
}

impl App {
    pub fn new(record: MetricsRecord) -> Self {
        Self {
            record,
            selected: 0,
            input_mode: InputMode::Normal,
            edit_buffer: String::new(),
            result: None,
            flash_message: None,
            should_quit: false,
            table_state: ratatui::widgets::TableState::default(),
        }
    }

    pub fn selected_field(&self) -> FieldId {
        FieldId::ALL[self.selected]
    }

    pub fn next_field(&mut self) {
        self.selected = (self.selected + 1) % FieldId::ALL.len();
    }

    pub fn previous_field(&mut self) {
        if self.selected == 0 {
            self.selected = FieldId::ALL.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    /// Jump to the first field of the next section (Tab).
    pub fn next_section(&mut self) {
        let current = self.selected_field().section();
        let start = self.selected;
        loop {
            self.next_field();
            if self.selected_field().section() != current || self.selected == start {
                break;
            }
        }
    }

    /// Jump to the first field of the previous section (Shift-Tab).
    pub fn previous_section(&mut self) {
        let current = self.selected_field().section();
        // Walk back past the current section, then to the start of the one before
        loop {
            self.previous_field();
            if self.selected_field().section() != current {
                break;
            }
            if self.selected == 0 {
                return;
            }
        }
        let target = self.selected_field().section();
        while self.selected > 0 && FieldId::ALL[self.selected - 1].section() == target {
            self.selected -= 1;
        }
    }

    /// Enter on a field: start editing text/number fields, cycle selects.
    pub fn activate_selected(&mut self) {
        let field = self.selected_field();
        match field.kind() {
            FieldKind::Select(_) => self.cycle_select(true),
            _ => {
                self.edit_buffer = field.get(&self.record).as_str().to_string();
                self.input_mode = InputMode::Editing;
            }
        }
    }

    /// Step a select field through its options; the cycle passes through
    /// empty so a choice can be cleared by stepping past the ends.
    pub fn cycle_select(&mut self, forward: bool) {
        let field = self.selected_field();
        let FieldKind::Select(options) = field.kind() else {
            return;
        };

        let current = field.get(&self.record).as_str().trim().to_string();
        let position = options.iter().position(|o| *o == current);
        let next = if forward {
            match position {
                None => Some(0),
                Some(i) if i + 1 < options.len() => Some(i + 1),
                Some(_) => None, // wrap to empty
            }
        } else {
            match position {
                None => Some(options.len() - 1),
                Some(0) => None,
                Some(i) => Some(i - 1),
            }
        };

        let value = next.map(|i| options[i].to_string()).unwrap_or_default();
        field.set(&mut self.record, value);
    }

    pub fn confirm_edit(&mut self) {
        let field = self.selected_field();
        let value = self.edit_buffer.trim().to_string();
        field.set(&mut self.record, value);
        if field.triggers_utilization() {
            refresh_utilization(&mut self.record);
        }
        self.edit_buffer.clear();
        self.input_mode = InputMode::Normal;
    }

    pub fn cancel_edit(&mut self) {
        self.edit_buffer.clear();
        self.input_mode = InputMode::Normal;
    }

    pub fn clear_selected(&mut self) {
        let field = self.selected_field();
        field.set(&mut self.record, String::new());
        if field.triggers_utilization() {
            refresh_utilization(&mut self.record);
        }
    }

    /// Validate and score the current record. On success the result panel
    /// opens; on failure the missing fields are flashed and nothing else
    /// changes.
    pub fn submit(&mut self) {
        match compute_prediction(&self.record) {
            Ok(result) => {
                self.result = Some(result);
                self.input_mode = InputMode::Result;
            }
            Err(errors) => {
                let names: Vec<&str> = errors
                    .iter()
                    .map(|e| e.split(':').next().unwrap_or(e))
                    .collect();
                self.show_flash(format!("Required fields missing: {}", names.join(", ")));
            }
        }
    }

    /// Clear every field and discard the prediction.
    pub fn reset(&mut self) {
        self.record = MetricsRecord::default();
        self.result = None;
        self.selected = 0;
        self.show_flash("Form reset".to_string());
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn dismiss_result(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn show_breakdown(&mut self) {
        if self.result.is_some() {
            self.input_mode = InputMode::Breakdown;
        }
    }

    pub fn dismiss_breakdown(&mut self) {
        self.input_mode = InputMode::Result;
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= 3 {
                self.flash_message = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::fields::Section;

    fn filled_app() -> App {
        let mut record = MetricsRecord::default();
        record.company_name.set("Acme");
        record.industry_type.set("automotive");
        record.monthly_output.set("1000");
        record.production_capacity.set("2000");
        App::new(record)
    }

    fn select_field(app: &mut App, target: FieldId) {
        app.selected = FieldId::ALL.iter().position(|f| *f == target).unwrap();
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = App::new(MetricsRecord::default());
        app.previous_field();
        assert_eq!(app.selected, FieldId::ALL.len() - 1);
        app.next_field();
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_next_section_jumps_to_section_start() {
        let mut app = App::new(MetricsRecord::default());
        assert_eq!(app.selected_field().section(), Section::Company);
        app.next_section();
        assert_eq!(app.selected_field(), FieldId::MonthlyOutput);
        app.previous_section();
        assert_eq!(app.selected_field(), FieldId::CompanyName);
    }

    #[test]
    fn test_editing_output_recomputes_utilization() {
        let mut app = filled_app();
        select_field(&mut app, FieldId::MonthlyOutput);
        app.activate_selected();
        assert_eq!(app.input_mode, InputMode::Editing);
        assert_eq!(app.edit_buffer, "1000");

        app.edit_buffer = "5000".to_string();
        app.confirm_edit();
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.record.monthly_output.as_str(), "5000");
        // 5000 / 2000 = 250.0%
        assert_eq!(app.record.capacity_utilization.as_str(), "250.0");
    }

    #[test]
    fn test_zero_capacity_leaves_utilization_alone() {
        let mut app = filled_app();
        app.record.capacity_utilization.set("50.0");
        select_field(&mut app, FieldId::ProductionCapacity);
        app.activate_selected();
        app.edit_buffer = "0".to_string();
        app.confirm_edit();
        assert_eq!(app.record.capacity_utilization.as_str(), "50.0");
    }

    #[test]
    fn test_cancel_edit_keeps_old_value() {
        let mut app = filled_app();
        select_field(&mut app, FieldId::CompanyName);
        app.activate_selected();
        app.edit_buffer = "Other Corp".to_string();
        app.cancel_edit();
        assert_eq!(app.record.company_name.as_str(), "Acme");
    }

    #[test]
    fn test_select_cycles_through_options_and_empty() {
        let mut app = App::new(MetricsRecord::default());
        select_field(&mut app, FieldId::MarketDemand);

        app.cycle_select(true);
        assert_eq!(app.record.market_demand.as_str(), "very_low");
        app.cycle_select(false);
        assert!(app.record.market_demand.is_empty());
        app.cycle_select(false);
        assert_eq!(app.record.market_demand.as_str(), "very_high");
        app.cycle_select(true);
        assert!(app.record.market_demand.is_empty());
    }

    #[test]
    fn test_submit_with_missing_fields_flashes() {
        let mut app = App::new(MetricsRecord::default());
        app.submit();
        assert!(app.result.is_none());
        assert_eq!(app.input_mode, InputMode::Normal);
        let (msg, _) = app.flash_message.as_ref().unwrap();
        assert!(msg.contains("company_name"));
        assert!(msg.contains("production_capacity"));
    }

    #[test]
    fn test_submit_with_required_fields_opens_result() {
        let mut app = filled_app();
        app.submit();
        assert_eq!(app.input_mode, InputMode::Result);
        assert_eq!(app.result.as_ref().unwrap().score, 50);
    }

    #[test]
    fn test_breakdown_only_with_result() {
        let mut app = filled_app();
        app.show_breakdown();
        assert_eq!(app.input_mode, InputMode::Normal);
        app.submit();
        app.show_breakdown();
        assert_eq!(app.input_mode, InputMode::Breakdown);
        app.dismiss_breakdown();
        assert_eq!(app.input_mode, InputMode::Result);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut app = filled_app();
        app.submit();
        app.dismiss_result();
        app.reset();
        assert_eq!(app.record, MetricsRecord::default());
        assert!(app.result.is_none());
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_clear_selected_field() {
        let mut app = filled_app();
        select_field(&mut app, FieldId::CompanyName);
        app.clear_selected();
        assert!(app.record.company_name.is_empty());
    }
}
