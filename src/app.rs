use log::{debug, info, trace};

use crate::config::{Config, SAMPLE_FORMULAS};
use crate::elements::SymbolTable;
use crate::formula::{DisambiguationPolicy, PolicyKind};
use crate::weight::{calculate, Calculation};

pub struct App {
    pub input: String,
    pub calculation: Option<Calculation>,
    pub policy: PolicyKind,
    pub precision: usize,
    pub sample_index: usize,
    table: SymbolTable,
}

impl App {
    pub fn new(config: Config) -> App {
        debug!("Creating new App instance with {config:?}");
        let mut app = App {
            input: SAMPLE_FORMULAS[0].to_string(),
            calculation: None,
            policy: config.policy,
            precision: config.precision,
            sample_index: 0,
            table: SymbolTable::standard(),
        };
        app.recalculate();
        app
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    pub fn recalculate(&mut self) {
        if self.input.trim().is_empty() {
            trace!("Input empty, clearing calculation");
            self.calculation = None;
            return;
        }
        self.calculation = Some(calculate(&self.input, &self.table, &self.policy));
    }

    pub fn on_key(&mut self, c: char) {
        trace!("Adding '{c}' to formula input");
        self.input.push(c);
        self.recalculate();
    }

    pub fn on_backspace(&mut self) {
        trace!("Removing last character from formula input");
        self.input.pop();
        self.recalculate();
    }

    pub fn clear_input(&mut self) {
        debug!("Clearing formula input");
        self.input.clear();
        self.recalculate();
    }

    pub fn next_sample(&mut self) {
        self.sample_index = (self.sample_index + 1) % SAMPLE_FORMULAS.len();
        self.load_sample();
    }

    pub fn prev_sample(&mut self) {
        self.sample_index = if self.sample_index == 0 {
            SAMPLE_FORMULAS.len() - 1
        } else {
            self.sample_index - 1
        };
        self.load_sample();
    }

    fn load_sample(&mut self) {
        let sample = SAMPLE_FORMULAS[self.sample_index];
        debug!("Loading sample formula {sample}");
        self.input = sample.to_string();
        self.recalculate();
    }

    pub fn cycle_policy(&mut self) {
        let next = self.policy.next();
        info!("Switching disambiguation policy from {} to {}", self.policy.name(), next.name());
        self.policy = next;
        self.recalculate();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_first_sample() {
        let app = App::default();
        assert_eq!(app.input, "H2O");
        let calculation = app.calculation.as_ref().unwrap();
        assert!((calculation.total - 18.015).abs() < 0.001);
    }

    #[test]
    fn test_typing_recalculates() {
        let mut app = App::default();
        app.clear_input();
        assert!(app.calculation.is_none());

        for c in "NaCl".chars() {
            app.on_key(c);
        }
        assert!((app.calculation.as_ref().unwrap().total - 58.44).abs() < 0.001);

        app.on_backspace();
        app.on_backspace();
        assert_eq!(app.input, "Na");
        assert!((app.calculation.as_ref().unwrap().total - 22.99).abs() < 0.001);
    }

    #[test]
    fn test_sample_cycling_wraps() {
        let mut app = App::default();
        app.prev_sample();
        assert_eq!(app.input, "Mg3(PO4)2");
        app.next_sample();
        app.next_sample();
        assert_eq!(app.input, "NaCl");
    }

    #[test]
    fn test_policy_change_reinterprets_input() {
        let mut app = App::default();
        app.clear_input();
        for c in "NO2".chars() {
            app.on_key(c);
        }
        assert_eq!(app.calculation.as_ref().unwrap().canonical, "NO2");

        app.cycle_policy();
        app.cycle_policy();
        assert_eq!(app.policy, PolicyKind::PreferLongest);
        assert_eq!(app.calculation.as_ref().unwrap().canonical, "No2");
    }
}
