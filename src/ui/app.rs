use crate::calculator::{Calculator, InfoCards};
use crate::config::{EnergyConfig, REFERENCE_CHARTS};
use crate::export::FootprintReport;
use crate::model::{CarType, Climate, DietType, HomeSize, RawInputs, RawValue};
use crate::prefs::{PrefStore, UiPrefs};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Calculator,
    Reference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Digital,
    Ai,
    Transport,
    Home,
    Lifestyle,
}

impl Section {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Digital => "Digital Life",
            Self::Ai => "AI Usage",
            Self::Transport => "Transportation",
            Self::Home => "Home",
            Self::Lifestyle => "Lifestyle",
        }
    }
}

/// One input on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    SmartphoneHours,
    ComputerHours,
    StreamingHours,
    AiTextHours,
    AiImages,
    AiVideoMins,
    CarType,
    MilesDriven,
    FlightsYear,
    TransitHours,
    HomeSize,
    Climate,
    HouseholdSize,
    DietType,
    MealsOut,
    ShoppingOrders,
}

const CAR_KEYS: [&str; 4] = ["gas", "electric", "hybrid", "none"];
const HOME_SIZE_KEYS: [&str; 4] = ["small", "medium", "large", "xlarge"];
const CLIMATE_KEYS: [&str; 3] = ["mild", "moderate", "extreme"];
const DIET_KEYS: [&str; 4] = ["meat-heavy", "average", "vegetarian", "vegan"];

impl Field {
    pub const ALL: [Self; 16] = [
        Self::SmartphoneHours,
        Self::ComputerHours,
        Self::StreamingHours,
        Self::AiTextHours,
        Self::AiImages,
        Self::AiVideoMins,
        Self::CarType,
        Self::MilesDriven,
        Self::FlightsYear,
        Self::TransitHours,
        Self::HomeSize,
        Self::Climate,
        Self::HouseholdSize,
        Self::DietType,
        Self::MealsOut,
        Self::ShoppingOrders,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SmartphoneHours => "Smartphone (hrs/day)",
            Self::ComputerHours => "Computer (hrs/day)",
            Self::StreamingHours => "Streaming (hrs/day)",
            Self::AiTextHours => "AI chat (hrs/day)",
            Self::AiImages => "AI images (per day)",
            Self::AiVideoMins => "AI video (mins/day)",
            Self::CarType => "Car type",
            Self::MilesDriven => "Miles driven (per day)",
            Self::FlightsYear => "Flights (per year)",
            Self::TransitHours => "Transit (hrs/week)",
            Self::HomeSize => "Home size",
            Self::Climate => "Climate",
            Self::HouseholdSize => "Household size",
            Self::DietType => "Diet",
            Self::MealsOut => "Meals out (per day)",
            Self::ShoppingOrders => "Online orders (per month)",
        }
    }

    #[must_use]
    pub fn section(self) -> Section {
        match self {
            Self::SmartphoneHours | Self::ComputerHours | Self::StreamingHours => Section::Digital,
            Self::AiTextHours | Self::AiImages | Self::AiVideoMins => Section::Ai,
            Self::CarType | Self::MilesDriven | Self::FlightsYear | Self::TransitHours => {
                Section::Transport
            }
            Self::HomeSize | Self::Climate | Self::HouseholdSize => Section::Home,
            Self::DietType | Self::MealsOut | Self::ShoppingOrders => Section::Lifestyle,
        }
    }

    /// Allowed keys of a categorical field; `None` for numeric fields.
    #[must_use]
    pub fn choices(self) -> Option<&'static [&'static str]> {
        match self {
            Self::CarType => Some(&CAR_KEYS),
            Self::HomeSize => Some(&HOME_SIZE_KEYS),
            Self::Climate => Some(&CLIMATE_KEYS),
            Self::DietType => Some(&DIET_KEYS),
            _ => None,
        }
    }
}

/// The form as a user would first see it.
#[must_use]
pub fn default_form() -> RawInputs {
    RawInputs {
        car_type: Some(CarType::default().key().to_string()),
        home_size: Some(HomeSize::default().key().to_string()),
        climate: Some(Climate::default().key().to_string()),
        household_size: Some(RawValue::Text("1".to_string())),
        diet_type: Some(DietType::default().key().to_string()),
        ..RawInputs::default()
    }
}

pub struct App {
    pub config: EnergyConfig,
    pub form: RawInputs,
    pub report: FootprintReport,
    pub cards: InfoCards,
    pub view: View,
    pub selected_field: usize, // index into Field::ALL
    pub reference_page: usize,
    pub prefs: UiPrefs,
    pub prefs_store: Option<PrefStore>,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(config: EnergyConfig, form: RawInputs) -> Self {
        let inputs = form.normalize();
        let cards = Calculator::new(&config).info_cards(&inputs);
        let report = FootprintReport::new(&config, inputs);

        Self {
            config,
            form,
            report,
            cards,
            view: View::Calculator,
            selected_field: 0,
            reference_page: 0,
            prefs: UiPrefs::default(),
            prefs_store: None,
            status: None,
            should_quit: false,
        }
    }

    /// Restores preferences from `store` and saves changes back to it.
    #[must_use]
    pub fn with_prefs_store(mut self, store: PrefStore) -> Self {
        self.prefs = UiPrefs::load(&store);
        self.prefs_store = Some(store);
        self.ensure_selection_visible();
        self
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        info!("dashboard started");
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        info!("dashboard closed");
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        match self.view {
            View::Calculator => super::dashboard::draw_calculator(frame, self),
            View::Reference => super::dashboard::draw_reference(frame, self),
        }
    }

    fn handle_events(&mut self) -> Result<()> {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }
            self.handle_key(key.code);
        }
        Ok(())
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match self.view {
            View::Calculator => self.handle_calculator_keys(code),
            View::Reference => self.handle_reference_keys(code),
        }
    }

    fn handle_calculator_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.view = View::Reference,
            KeyCode::Up | KeyCode::Char('k') => self.previous_field(),
            KeyCode::Down | KeyCode::Char('j') => self.next_field(),
            KeyCode::Left | KeyCode::Char('h') => self.cycle_choice(false),
            KeyCode::Right | KeyCode::Char('l') => self.cycle_choice(true),
            KeyCode::Char('a') => self.toggle_ai_section(),
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => self.push_char(c),
            KeyCode::Backspace => self.pop_char(),
            KeyCode::Delete => self.clear_field(),
            _ => {}
        }
    }

    fn handle_reference_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Backspace => self.view = View::Calculator,
            KeyCode::Left | KeyCode::Char('h') => self.previous_reference_page(),
            KeyCode::Right | KeyCode::Char('l') => self.next_reference_page(),
            _ => {}
        }
    }

    /// Fields currently shown; the AI fields disappear while collapsed.
    #[must_use]
    pub fn visible_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| !(self.prefs.ai_section_collapsed && f.section() == Section::Ai))
            .collect()
    }

    #[must_use]
    pub fn selected(&self) -> Field {
        Field::ALL[self.selected_field]
    }

    fn previous_field(&mut self) {
        let visible = self.visible_fields();
        if let Some(pos) = visible.iter().position(|f| *f == self.selected()) {
            if pos > 0 {
                self.select(visible[pos - 1]);
            }
        }
    }

    fn next_field(&mut self) {
        let visible = self.visible_fields();
        if let Some(pos) = visible.iter().position(|f| *f == self.selected()) {
            if let Some(next) = visible.get(pos + 1) {
                self.select(*next);
            }
        }
    }

    fn select(&mut self, field: Field) {
        if let Some(index) = Field::ALL.iter().position(|f| *f == field) {
            self.selected_field = index;
        }
    }

    /// Moves the cursor off a field hidden by a collapsed section.
    fn ensure_selection_visible(&mut self) {
        let visible = self.visible_fields();
        if visible.contains(&self.selected()) {
            return;
        }
        let all = Field::ALL;
        let next = all
            .iter()
            .skip(self.selected_field)
            .find(|f| visible.contains(f))
            .or_else(|| visible.last());
        if let Some(field) = next.copied() {
            self.select(field);
        }
    }

    fn toggle_ai_section(&mut self) {
        let collapsed = self.prefs.toggle_ai_section();
        self.ensure_selection_visible();

        if let Some(store) = &self.prefs_store {
            if let Err(err) = self.prefs.save(store) {
                warn!(%err, "failed to save preferences");
                self.status = Some(format!("Could not save preferences: {err}"));
                return;
            }
        }
        self.status = Some(if collapsed {
            "AI section collapsed".to_string()
        } else {
            "AI section expanded".to_string()
        });
    }

    fn previous_reference_page(&mut self) {
        self.reference_page = if self.reference_page == 0 {
            REFERENCE_CHARTS.len() - 1
        } else {
            self.reference_page - 1
        };
    }

    fn next_reference_page(&mut self) {
        self.reference_page = (self.reference_page + 1) % REFERENCE_CHARTS.len();
    }

    /// Display text of a field as typed or chosen.
    #[must_use]
    pub fn field_text(&self, field: Field) -> String {
        if let Some(choice) = self.choice_slot(field) {
            return choice.clone().unwrap_or_default();
        }
        match self.numeric_slot(field).and_then(Option::as_ref) {
            Some(RawValue::Number(n)) => n.to_string(),
            Some(RawValue::Text(s)) => s.clone(),
            None => String::new(),
        }
    }

    fn push_char(&mut self, c: char) {
        let field = self.selected();
        let mut text = self.field_text(field);
        text.push(c);
        self.set_numeric(field, Some(RawValue::Text(text)));
    }

    fn pop_char(&mut self) {
        let field = self.selected();
        let mut text = self.field_text(field);
        text.pop();
        let value = (!text.is_empty()).then_some(RawValue::Text(text));
        self.set_numeric(field, value);
    }

    fn clear_field(&mut self) {
        self.set_numeric(self.selected(), None);
    }

    /// Stores a numeric field and recalculates; categorical fields are left alone.
    fn set_numeric(&mut self, field: Field, value: Option<RawValue>) {
        if let Some(slot) = self.numeric_slot_mut(field) {
            *slot = value;
            self.recalculate();
        }
    }

    fn cycle_choice(&mut self, forward: bool) {
        let field = self.selected();
        let choices = match field.choices() {
            Some(c) => c,
            None => return,
        };

        let current = self
            .choice_slot(field)
            .and_then(Option::as_deref)
            .and_then(|key| choices.iter().position(|c| *c == key));
        let next = match (current, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % choices.len(),
            (Some(0), false) => choices.len() - 1,
            (Some(i), false) => i - 1,
        };

        if let Some(slot) = self.choice_slot_mut(field) {
            *slot = Some(choices[next].to_string());
            self.recalculate();
        }
    }

    /// Recomputes everything from the current form contents.
    fn recalculate(&mut self) {
        let inputs = self.form.normalize();
        self.cards = Calculator::new(&self.config).info_cards(&inputs);
        self.report = FootprintReport::new(&self.config, inputs);
        self.status = None;
    }

    /// Storage of a numeric field; `None` for categorical fields.
    fn numeric_slot(&self, field: Field) -> Option<&Option<RawValue>> {
        let form = &self.form;
        let slot = match field {
            Field::SmartphoneHours => &form.smartphone_hours,
            Field::ComputerHours => &form.computer_hours,
            Field::StreamingHours => &form.streaming_hours,
            Field::AiTextHours => &form.ai_text_hours,
            Field::AiImages => &form.ai_images,
            Field::AiVideoMins => &form.ai_video_mins,
            Field::MilesDriven => &form.miles_driven,
            Field::FlightsYear => &form.flights_year,
            Field::TransitHours => &form.transit_hours,
            Field::HouseholdSize => &form.household_size,
            Field::MealsOut => &form.meals_out,
            Field::ShoppingOrders => &form.shopping_orders,
            Field::CarType | Field::HomeSize | Field::Climate | Field::DietType => return None,
        };
        Some(slot)
    }

    fn numeric_slot_mut(&mut self, field: Field) -> Option<&mut Option<RawValue>> {
        let form = &mut self.form;
        let slot = match field {
            Field::SmartphoneHours => &mut form.smartphone_hours,
            Field::ComputerHours => &mut form.computer_hours,
            Field::StreamingHours => &mut form.streaming_hours,
            Field::AiTextHours => &mut form.ai_text_hours,
            Field::AiImages => &mut form.ai_images,
            Field::AiVideoMins => &mut form.ai_video_mins,
            Field::MilesDriven => &mut form.miles_driven,
            Field::FlightsYear => &mut form.flights_year,
            Field::TransitHours => &mut form.transit_hours,
            Field::HouseholdSize => &mut form.household_size,
            Field::MealsOut => &mut form.meals_out,
            Field::ShoppingOrders => &mut form.shopping_orders,
            Field::CarType | Field::HomeSize | Field::Climate | Field::DietType => return None,
        };
        Some(slot)
    }

    fn choice_slot(&self, field: Field) -> Option<&Option<String>> {
        let form = &self.form;
        match field {
            Field::CarType => Some(&form.car_type),
            Field::HomeSize => Some(&form.home_size),
            Field::Climate => Some(&form.climate),
            Field::DietType => Some(&form.diet_type),
            _ => None,
        }
    }

    fn choice_slot_mut(&mut self, field: Field) -> Option<&mut Option<String>> {
        let form = &mut self.form;
        match field {
            Field::CarType => Some(&mut form.car_type),
            Field::HomeSize => Some(&mut form.home_size),
            Field::Climate => Some(&mut form.climate),
            Field::DietType => Some(&mut form.diet_type),
            _ => None,
        }
    }

    /// Name of the reference chart currently shown.
    #[must_use]
    pub fn reference_title(&self) -> &'static str {
        REFERENCE_CHARTS[self.reference_page].title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Tier;
    use crate::model::CarType;
    use pretty_assertions::assert_eq;

    fn app() -> App {
        App::new(EnergyConfig::default(), default_form())
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    fn select(app: &mut App, field: Field) {
        while app.selected() != field {
            app.handle_key(KeyCode::Down);
        }
    }

    #[test]
    fn blank_form_gives_home_and_diet_baseline() {
        let app = app();

        assert_eq!(app.report.result.grand_total, 45.0);
        assert_eq!(app.report.comparison.tier, Tier::Excellent);
        assert_eq!(app.field_text(Field::CarType), "gas");
        assert_eq!(app.field_text(Field::HouseholdSize), "1");
    }

    #[test]
    fn typing_recalculates() {
        let mut app = app();
        select(&mut app, Field::MilesDriven);

        type_text(&mut app, "100");

        assert_eq!(app.field_text(Field::MilesDriven), "100");
        assert!((app.report.breakdown.transport.car - 110.0).abs() < 1e-9);
        assert_eq!(app.report.comparison.tier, Tier::AboveAverage);
        assert_eq!(app.cards.gas_car.value, "110.0");

        app.handle_key(KeyCode::Backspace);
        assert_eq!(app.field_text(Field::MilesDriven), "10");
        assert!((app.report.breakdown.transport.car - 11.0).abs() < 1e-9);

        app.handle_key(KeyCode::Delete);
        assert_eq!(app.field_text(Field::MilesDriven), "");
        assert_eq!(app.report.breakdown.transport.car, 0.0);
    }

    #[test]
    fn cycling_car_type_changes_dispatch() {
        let mut app = app();
        select(&mut app, Field::MilesDriven);
        type_text(&mut app, "100");
        app.handle_key(KeyCode::Up);
        assert_eq!(app.selected(), Field::CarType);

        app.handle_key(KeyCode::Right);
        assert_eq!(app.report.inputs.car_type, CarType::Electric);
        assert!((app.report.breakdown.transport.car - 33.0).abs() < 1e-9);

        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Left);
        assert_eq!(app.report.inputs.car_type, CarType::None);
        assert_eq!(app.report.breakdown.transport.car, 0.0);
    }

    #[test]
    fn letters_do_not_edit_numeric_fields() {
        let mut app = app();
        app.handle_key(KeyCode::Char('x'));

        assert_eq!(app.field_text(Field::SmartphoneHours), "");
    }

    #[test]
    fn collapsed_ai_section_is_skipped() {
        let mut app = app();
        select(&mut app, Field::AiImages);

        app.handle_key(KeyCode::Char('a'));

        assert!(app.prefs.ai_section_collapsed);
        assert_eq!(app.selected(), Field::CarType);
        assert!(!app.visible_fields().contains(&Field::AiTextHours));

        app.handle_key(KeyCode::Up);
        assert_eq!(app.selected(), Field::StreamingHours);
    }

    #[test]
    fn ai_toggle_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefStore::new(dir.path().join("prefs.json"));
        let mut app = app().with_prefs_store(store.clone());

        app.handle_key(KeyCode::Char('a'));

        let reopened = App::new(EnergyConfig::default(), default_form()).with_prefs_store(store);
        assert!(reopened.prefs.ai_section_collapsed);
    }

    #[test]
    fn reference_pages_wrap_around() {
        let mut app = app();
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.view, View::Reference);

        app.handle_key(KeyCode::Left);
        assert_eq!(app.reference_page, REFERENCE_CHARTS.len() - 1);
        app.handle_key(KeyCode::Right);
        assert_eq!(app.reference_page, 0);
        assert_eq!(app.reference_title(), "Where a Typical Day's Energy Goes");

        app.handle_key(KeyCode::Tab);
        assert_eq!(app.view, View::Calculator);
    }

    #[test]
    fn quit_from_either_view() {
        let mut app = app();
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
