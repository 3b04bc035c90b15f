use crate::domain::model::{
    Dimension, Notification, ServerSettings, Severity, User, WorkQuery, Workset,
};
use crate::domain::ports::PythiaApi;
use crate::store::date_range::DateRangeState;
use crate::store::scoped::{language_options, pk_options, ScopedFilter};
use crate::store::session::SessionState;
use crate::store::yop::{YopState, YopUpdate};
use crate::utils::error::{PythiaError, Result};
use uuid::Uuid;

/// The application state: independent filter modules plus workset selection,
/// session data and the single pending notification. All mutation goes
/// through `&mut self` methods, so responses are applied strictly in arrival
/// order.
pub struct Store<A> {
    api: A,
    pub worksets: Vec<Workset>,
    selected: Option<usize>,
    pub loading_worksets: bool,
    notification: Option<Notification>,
    notification_visible: bool,
    pub user: Option<User>,
    pub server_settings: ServerSettings,
    pub date_range: DateRangeState,
    pub language: ScopedFilter<String>,
    pub owner: ScopedFilter<i64>,
    pub work_type: ScopedFilter<i64>,
    pub yop: YopState,
    pub session: SessionState,
}

/// Builds the composite query from the individual module states. The
/// population order (language, date range, YOP, owner, work type) mirrors
/// the merge order the list views rely on.
pub fn compose_query(
    language: &ScopedFilter<String>,
    date_range: &DateRangeState,
    yop: &YopState,
    owner: &ScopedFilter<i64>,
    work_type: &ScopedFilter<i64>,
) -> WorkQuery {
    WorkQuery {
        lang: language.selected.clone(),
        start_date: date_range.start_text(),
        end_date: date_range.end_text(),
        yop_from: yop.from_year(),
        yop_to: yop.to_year(),
        owner_inst: owner.selected,
        work_category: work_type.selected,
    }
}

impl<A: PythiaApi> Store<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            worksets: Vec::new(),
            selected: None,
            loading_worksets: false,
            notification: None,
            notification_visible: false,
            user: None,
            server_settings: ServerSettings::default(),
            date_range: DateRangeState::default(),
            language: ScopedFilter::default(),
            owner: ScopedFilter::default(),
            work_type: ScopedFilter::default(),
            yop: YopState::default(),
            session: SessionState::default(),
        }
    }

    /// Bootstrap: pull the server-wide settings.
    pub async fn start(&mut self) {
        self.load_server_settings().await;
    }

    pub async fn load_server_settings(&mut self) {
        match self.api.server_settings().await {
            Ok(settings) => self.server_settings = settings,
            Err(err) => {
                self.observe_error(&err);
                self.notify(
                    format!("Error loading basic server info: {}", err),
                    Severity::Info,
                );
            }
        }
    }

    pub fn selected_workset(&self) -> Option<&Workset> {
        self.selected.and_then(|i| self.worksets.get(i))
    }

    pub fn selected_workset_uuid(&self) -> Option<Uuid> {
        self.selected_workset().map(|ws| ws.uuid)
    }

    /// Fetches the workset list. An existing selection is re-pointed at the
    /// fresh item with the same UUID; when that is gone, the first usable
    /// workset takes over.
    pub async fn reload_worksets(&mut self) {
        self.loading_worksets = true;
        match self.api.fetch_worksets().await {
            Ok(worksets) => {
                self.loading_worksets = false;
                self.apply_worksets(worksets);
            }
            Err(err) => {
                self.loading_worksets = false;
                tracing::warn!("Error fetching worksets: {}", err);
                self.observe_error(&err);
            }
        }
    }

    fn apply_worksets(&mut self, worksets: Vec<Workset>) {
        let previous_uuid = self.selected_workset_uuid();
        self.worksets = worksets;
        self.selected = previous_uuid
            .and_then(|uuid| self.worksets.iter().position(|ws| ws.uuid == uuid));
        if self.selected.is_none() {
            self.select_first_usable();
        }
    }

    /// Picks the first workset with a nonzero record count, falling back to
    /// the first workset at all; stays unselected on an empty list.
    pub fn select_first_usable(&mut self) {
        self.selected = self
            .worksets
            .iter()
            .position(|ws| ws.mi_count > 0)
            .or(if self.worksets.is_empty() { None } else { Some(0) });
    }

    pub fn select_workset(&mut self, uuid: Option<Uuid>) {
        self.selected =
            uuid.and_then(|uuid| self.worksets.iter().position(|ws| ws.uuid == uuid));
    }

    /// Refreshes the available options of one dimension filter for the given
    /// workset. On failure the filter keeps its previous options and
    /// selection and a notification is raised.
    pub async fn fetch_available(&mut self, dimension: Dimension, workset: Uuid) {
        match self.api.fetch_dimension_stats(workset, dimension).await {
            Ok(stats) => match dimension {
                Dimension::Language => self.language.replace_options(language_options(&stats)),
                Dimension::OwnerInstitution => self
                    .owner
                    .replace_options(pk_options(&stats, dimension.uppercase_labels())),
                Dimension::WorkCategory => self
                    .work_type
                    .replace_options(pk_options(&stats, dimension.uppercase_labels())),
            },
            Err(err) => {
                self.observe_error(&err);
                self.notify(
                    format!("Error obtaining list of {}: {}", dimension.describe(), err),
                    Severity::Error,
                );
            }
        }
    }

    /// The merged query parameters for list-fetching endpoints.
    pub fn work_query(&self) -> WorkQuery {
        compose_query(
            &self.language,
            &self.date_range,
            &self.yop,
            &self.owner,
            &self.work_type,
        )
    }

    pub fn apply_yop(&mut self, update: YopUpdate) {
        self.yop.apply(update);
    }

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.notification = Some(Notification {
            message: message.into(),
            severity,
        });
        self.notification_visible = true;
    }

    pub fn dismiss_notification(&mut self) {
        self.notification_visible = false;
    }

    pub fn notification(&self) -> Option<&Notification> {
        if self.notification_visible {
            self.notification.as_ref()
        } else {
            None
        }
    }

    /// Credential login. On success the user profile and the workset list
    /// are fetched in parallel; on failure the error is kept for display
    /// next to the login form.
    pub async fn login(&mut self, email: &str, password: &str) {
        self.session.clear_error();
        if let Err(err) = self.api.login(email, password).await {
            self.session.login_error = Some(err);
            return;
        }
        let api = &self.api;
        let (user, worksets) = tokio::join!(api.current_user(), api.fetch_worksets());
        match user {
            Ok(user) => self.user = Some(user),
            Err(err) => {
                tracing::warn!("Error fetching user data: {}", err);
                self.observe_error(&err);
            }
        }
        match worksets {
            Ok(worksets) => self.apply_worksets(worksets),
            Err(err) => {
                tracing::warn!("Error fetching worksets: {}", err);
                self.observe_error(&err);
            }
        }
    }

    /// Server-side logout first; only a successful round trip drops the
    /// local user data.
    pub async fn logout(&mut self) {
        match self.api.logout().await {
            Ok(()) => self.clean_user_data(),
            Err(err) => {
                let expired = err.is_session_expired();
                self.notify(format!("Error logging out: {}", err), Severity::Error);
                if expired {
                    self.user = None;
                }
            }
        }
    }

    pub async fn reset_password(&mut self, email: &str) -> Result<()> {
        self.api.reset_password(email).await
    }

    pub async fn change_password(&mut self, new_password: &str) -> Result<()> {
        self.api.change_password(new_password).await
    }

    pub async fn load_user_data(&mut self) {
        match self.api.current_user().await {
            Ok(user) => self.user = Some(user),
            Err(err) => {
                tracing::warn!("Error fetching user data: {}", err);
                self.observe_error(&err);
            }
        }
    }

    pub fn clean_user_data(&mut self) {
        self.user = None;
    }

    // login gating and display helpers

    pub fn logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn show_login_dialog(&self) -> bool {
        self.user.is_none()
    }

    /// Single sign-on deployments handle sessions outside the app, so the
    /// logout affordance is suppressed.
    pub fn can_logout(&self) -> bool {
        !self.server_settings.use_shibboleth
    }

    pub fn avatar_text(&self) -> String {
        self.user
            .as_ref()
            .and_then(|user| user.email.chars().next())
            .map(|ch| ch.to_uppercase().to_string())
            .unwrap_or_else(|| "A".to_string())
    }

    pub fn username_text(&self) -> String {
        self.user
            .as_ref()
            .map(|user| user.email.clone())
            .unwrap_or_else(|| "not logged in".to_string())
    }

    pub fn vufind_url(&self) -> String {
        self.server_settings.vufind_url.clone().unwrap_or_default()
    }

    /// Authorization decay: a 4xx other than 404 means the session is gone
    /// and the local user is dropped without contacting the server.
    fn observe_error(&mut self, err: &PythiaError) {
        if err.is_session_expired() && self.user.is_some() {
            tracing::info!("session expired, dropping local user data");
            self.user = None;
        }
    }
}
