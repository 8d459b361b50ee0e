use crate::models::{BudgetTable, Draft};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Transactions,
    Overview,
    Budget,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Transactions, Self::Overview, Self::Budget]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transactions => write!(f, "Transactions"),
            Self::Overview => write!(f, "Overview"),
            Self::Budget => write!(f, "Budget"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Insert,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Insert => write!(f, "INSERT"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// The four form inputs, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Amount,
    Date,
    Description,
    Category,
}

impl FormField {
    pub(crate) fn all() -> &'static [FormField] {
        &[Self::Amount, Self::Date, Self::Description, Self::Category]
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Amount => "Amount",
            Self::Date => "Date",
            Self::Description => "Description",
            Self::Category => "Category",
        }
    }

    pub(crate) fn next(&self) -> Self {
        match self {
            Self::Amount => Self::Date,
            Self::Date => Self::Description,
            Self::Description => Self::Category,
            Self::Category => Self::Amount,
        }
    }

    pub(crate) fn prev(&self) -> Self {
        match self {
            Self::Amount => Self::Category,
            Self::Date => Self::Amount,
            Self::Description => Self::Date,
            Self::Category => Self::Description,
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    /// Static per-category limits; no UI edits them in this version.
    pub(crate) budgets: BudgetTable,

    // Form
    pub(crate) form: Draft,
    pub(crate) form_field: FormField,

    // Transaction list
    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,

    // Confirmation
    pub(crate) pending_delete: Option<(i64, String)>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        let form = Draft {
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            ..Draft::default()
        };

        Self {
            running: true,
            screen: Screen::Transactions,
            input_mode: InputMode::Normal,
            status_message: String::new(),
            show_help: false,

            budgets: BudgetTable::default(),

            form,
            form_field: FormField::Amount,

            transaction_index: 0,
            transaction_scroll: 0,

            pending_delete: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    /// The form input currently focused.
    pub(crate) fn form_value_mut(&mut self) -> &mut String {
        match self.form_field {
            FormField::Amount => &mut self.form.amount,
            FormField::Date => &mut self.form.date,
            FormField::Description => &mut self.form.description,
            FormField::Category => &mut self.form.category,
        }
    }

    pub(crate) fn form_value(&self, field: FormField) -> &str {
        match field {
            FormField::Amount => &self.form.amount,
            FormField::Date => &self.form.date,
            FormField::Description => &self.form.description,
            FormField::Category => &self.form.category,
        }
    }

    /// Reset the form to a fresh draft with today's date prefilled.
    pub(crate) fn reset_form(&mut self) {
        self.form.clear();
        self.form.date = chrono::Local::now().format("%Y-%m-%d").to_string();
        self.form_field = FormField::Amount;
    }

    /// Cycle the category input through the fixed set. An empty or
    /// unrecognized value starts from the first (or last) category.
    pub(crate) fn cycle_category(&mut self, delta: i32) {
        let all = crate::models::Category::all();
        let current = crate::models::Category::parse(&self.form.category)
            .and_then(|c| all.iter().position(|&x| x == c));
        let next = match (current, delta > 0) {
            (Some(i), true) => (i + 1) % all.len(),
            (Some(i), false) => (i + all.len() - 1) % all.len(),
            (None, true) => 0,
            (None, false) => all.len() - 1,
        };
        self.form.category = all[next].as_str().to_string();
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
