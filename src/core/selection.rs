use crate::domain::model::{
    Carrier, Scope, Theme, ThemePalette, DEFAULT_CARRIER_CODE, DEFAULT_CARRIER_NAME,
};
use crate::domain::ports::TrackingService;
use chrono::Utc;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// User-facing selection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub scope: Option<Scope>,
    pub selected_code: String,
    pub selected_name: String,
    pub tracking_number: String,
    pub theme: Theme,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            scope: None,
            selected_code: DEFAULT_CARRIER_CODE.to_string(),
            selected_name: DEFAULT_CARRIER_NAME.to_string(),
            tracking_number: String::new(),
            theme: Theme::Default,
        }
    }
}

/// Keeps the ASCII digits of `raw`, in order.
pub fn sanitize_invoice(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Carriers of `carriers` whose international flag matches `scope`, order preserved.
pub fn filter_by_scope(carriers: &[Carrier], scope: Scope) -> Vec<Carrier> {
    let international = scope.is_international();
    carriers
        .iter()
        .filter(|carrier| carrier.international == international)
        .cloned()
        .collect()
}

pub struct SelectionController<T: TrackingService + 'static> {
    authoritative: Arc<[Carrier]>,
    displayed: Vec<Carrier>,
    state: SelectionState,
    tracker: Arc<T>,
}

impl<T: TrackingService + 'static> SelectionController<T> {
    pub fn new(authoritative: Vec<Carrier>, tracker: Arc<T>) -> Self {
        let authoritative: Arc<[Carrier]> = authoritative.into();
        Self {
            displayed: authoritative.to_vec(),
            authoritative,
            state: SelectionState::default(),
            tracker,
        }
    }

    /// Switches scope, preselects `code`/`name` and replaces the displayed list.
    pub fn select_scope(&mut self, scope: Scope, code: &str, name: &str) {
        self.state.scope = Some(scope);
        self.state.selected_code = code.to_string();
        self.state.selected_name = name.to_string();
        self.displayed = filter_by_scope(&self.authoritative, scope);

        tracing::debug!(
            "Scope set to {} ({} of {} carriers shown), carrier {} {}",
            scope,
            self.displayed.len(),
            self.authoritative.len(),
            code,
            name
        );
    }

    pub fn set_carrier(&mut self, code: &str) {
        self.state.selected_code = code.to_string();
    }

    /// Stores the digit-only form of `raw` and returns it for the input field.
    pub fn set_tracking_number(&mut self, raw: &str) -> &str {
        self.state.tracking_number = sanitize_invoice(raw);
        &self.state.tracking_number
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.state.theme = theme;
    }

    /// Spawns one lookup for the current carrier and tracking number.
    ///
    /// The response is only logged. Earlier lookups keep running.
    pub fn submit_lookup(&self) -> JoinHandle<()> {
        let tracker = Arc::clone(&self.tracker);
        let code = self.state.selected_code.clone();
        let invoice = self.state.tracking_number.clone();
        let requested_at = Utc::now();

        tracing::info!("🔍 Submitting lookup: carrier {} invoice {}", code, invoice);

        tokio::spawn(async move {
            let result = tracker.tracking_info(&code, &invoice).await;
            let elapsed_ms = (Utc::now() - requested_at).num_milliseconds();

            match result {
                Ok(info) => {
                    tracing::info!(
                        "📬 Tracking info for {} / {} ({}ms): {}",
                        code,
                        invoice,
                        elapsed_ms,
                        info
                    );
                }
                Err(e) => {
                    tracing::error!(
                        "❌ Tracking lookup for {} / {} failed after {}ms: {} (Category: {:?})",
                        code,
                        invoice,
                        elapsed_ms,
                        e,
                        e.category()
                    );
                }
            }
        })
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn scope(&self) -> Option<Scope> {
        self.state.scope
    }

    pub fn selected_code(&self) -> &str {
        &self.state.selected_code
    }

    pub fn selected_name(&self) -> &str {
        &self.state.selected_name
    }

    /// Displayed entry matching the selected code, if any.
    pub fn selected_carrier(&self) -> Option<&Carrier> {
        self.displayed
            .iter()
            .find(|carrier| carrier.code == self.state.selected_code)
    }

    pub fn tracking_number(&self) -> &str {
        &self.state.tracking_number
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    pub fn palette(&self) -> ThemePalette {
        self.state.theme.palette()
    }

    pub fn displayed(&self) -> &[Carrier] {
        &self.displayed
    }

    pub fn authoritative(&self) -> &[Carrier] {
        &self.authoritative
    }
}
