#[cfg(any(test, feature = "test-utils"))]
pub mod tests {
    use async_trait::async_trait;
    use std::{
        collections::HashMap,
        sync::{
            Arc, Mutex,
            atomic::{AtomicBool, Ordering},
        },
    };
    use uuid::Uuid;

    use chrono::Utc;
    use civicedge_types::{
        common::{NewUser, User},
        errors::{AppError, ApplicationError, StoreError},
        queue::QueuedReport,
        report::{MediaAttachment, Report, ReportDraft, ReportStatus},
    };

    use crate::{
        connectivity::{ConnectivityMonitor, ConnectivityState},
        repository::{AuthGateway, PendingQueue, ReportStore, SessionStore, UserDirectory},
        services::Services,
    };

    pub fn draft_factory(title: &str) -> ReportDraft {
        ReportDraft {
            title: title.to_string(),
            description: "Observed this morning".to_string(),
            category: "Road Issues".to_string(),
            location: "Elm Street 42".to_string(),
            coordinates: None,
            images: vec![MediaAttachment {
                file_name: "capture.jpg".to_string(),
                content_type: "image/jpeg".to_string(),
                bytes: vec![0xff, 0xd8, 0xff],
            }],
            videos: vec![],
            audio_notes: vec![],
            user_email: String::new(),
            user_name: String::new(),
        }
    }

    pub fn queued_report_factory(email: &str) -> QueuedReport {
        let mut draft = draft_factory("Queued report");
        draft.user_email = email.to_string();
        draft.user_name = "Ada Lovelace".to_string();
        QueuedReport::new(draft)
    }

    pub fn user_factory(id: &str, name: &str, email: &str) -> User {
        User {
            id: id.to_string(),
            full_name: name.to_string(),
            email: email.to_string(),
            mobile_number: "5550100".to_string(),
        }
    }

    /// In-memory report store. Accepted drafts become reports attributed
    /// to the draft's email, the way the real store keys submissions.
    #[derive(Default, Clone)]
    pub struct MockReportStore {
        reports: Arc<Mutex<Vec<Report>>>,
        submitted: Arc<Mutex<Vec<ReportDraft>>>,
        fail_submissions: Arc<AtomicBool>,
    }

    impl MockReportStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn seed_report(&self, report: Report) {
            self.reports.lock().unwrap().push(report);
        }

        pub fn set_fail_submissions(&self, fail: bool) {
            self.fail_submissions.store(fail, Ordering::SeqCst);
        }

        pub fn submitted_count(&self) -> usize {
            self.submitted.lock().unwrap().len()
        }

        pub fn submitted(&self) -> Vec<ReportDraft> {
            self.submitted.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ReportStore for MockReportStore {
        async fn submit(&self, draft: &ReportDraft) -> Result<(), ApplicationError> {
            if self.fail_submissions.load(Ordering::SeqCst) {
                return Err(ApplicationError::Store(StoreError::Status { status: 503 }));
            }

            self.submitted.lock().unwrap().push(draft.clone());
            self.reports.lock().unwrap().push(Report {
                id: Uuid::new_v4().to_string(),
                user_id: draft.user_email.clone(),
                title: draft.title.clone(),
                description: draft.description.clone(),
                category: draft.category.clone(),
                location: draft.location.clone(),
                coordinates: draft.coordinates,
                images: draft.images.iter().map(|m| m.file_name.clone()).collect(),
                videos: draft.videos.iter().map(|m| m.file_name.clone()).collect(),
                audio_notes: draft
                    .audio_notes
                    .iter()
                    .map(|m| m.file_name.clone())
                    .collect(),
                status: ReportStatus::New,
                created_at: Utc::now(),
            });
            Ok(())
        }

        async fn reports_for_user(&self, email: &str) -> Result<Vec<Report>, ApplicationError> {
            Ok(self
                .reports
                .lock()
                .unwrap()
                .iter()
                .filter(|report| report.user_id == email)
                .cloned()
                .collect())
        }

        async fn list_all(&self) -> Result<Vec<Report>, ApplicationError> {
            Ok(self.reports.lock().unwrap().clone())
        }
    }

    #[derive(Default, Clone)]
    pub struct MockPendingQueue {
        entries: Arc<Mutex<Vec<QueuedReport>>>,
    }

    impl MockPendingQueue {
        pub fn push(&self, entry: QueuedReport) {
            self.entries.lock().unwrap().push(entry);
        }

        pub fn len_sync(&self) -> usize {
            self.entries.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl PendingQueue for MockPendingQueue {
        async fn append(&self, report: &QueuedReport) -> Result<(), ApplicationError> {
            self.entries.lock().unwrap().push(report.clone());
            Ok(())
        }

        async fn list(&self) -> Result<Vec<QueuedReport>, ApplicationError> {
            Ok(self.entries.lock().unwrap().clone())
        }

        async fn remove(&self, local_id: Uuid) -> Result<(), ApplicationError> {
            self.entries
                .lock()
                .unwrap()
                .retain(|entry| entry.local_id != local_id);
            Ok(())
        }

        async fn len(&self) -> Result<usize, ApplicationError> {
            Ok(self.entries.lock().unwrap().len())
        }
    }

    #[derive(Default, Clone)]
    pub struct MockSessionStore {
        user: Arc<Mutex<Option<User>>>,
        install_prompt_dismissed: Arc<AtomicBool>,
    }

    impl MockSessionStore {
        pub fn with_user(user: User) -> Self {
            let store = Self::default();
            *store.user.lock().unwrap() = Some(user);
            store
        }
    }

    #[async_trait]
    impl SessionStore for MockSessionStore {
        async fn load(&self) -> Result<Option<User>, ApplicationError> {
            Ok(self.user.lock().unwrap().clone())
        }

        async fn save(&self, user: &User) -> Result<(), ApplicationError> {
            *self.user.lock().unwrap() = Some(user.clone());
            Ok(())
        }

        async fn clear(&self) -> Result<(), ApplicationError> {
            *self.user.lock().unwrap() = None;
            Ok(())
        }

        async fn install_prompt_dismissed(&self) -> Result<bool, ApplicationError> {
            Ok(self.install_prompt_dismissed.load(Ordering::SeqCst))
        }

        async fn set_install_prompt_dismissed(&self) -> Result<(), ApplicationError> {
            self.install_prompt_dismissed.store(true, Ordering::SeqCst);
            Ok(())
        }
    }

    #[derive(Default, Clone)]
    pub struct MockUserDirectory {
        names: Arc<Mutex<HashMap<String, String>>>,
    }

    impl MockUserDirectory {
        pub fn insert(&self, user_id: &str, name: &str) {
            self.names
                .lock()
                .unwrap()
                .insert(user_id.to_string(), name.to_string());
        }
    }

    #[async_trait]
    impl UserDirectory for MockUserDirectory {
        async fn display_names(&self) -> Result<HashMap<String, String>, ApplicationError> {
            Ok(self.names.lock().unwrap().clone())
        }

        async fn record(&self, user: &User) -> Result<(), ApplicationError> {
            self.names
                .lock()
                .unwrap()
                .insert(user.id.clone(), user.full_name.clone());
            Ok(())
        }
    }

    /// Accounts are registered up front (or via `register`); login checks
    /// the stored password like the remote service would.
    #[derive(Default, Clone)]
    pub struct MockAuthGateway {
        accounts: Arc<Mutex<HashMap<String, (String, User)>>>,
    }

    impl MockAuthGateway {
        pub fn add_account(&self, user: User, password: &str) {
            self.accounts
                .lock()
                .unwrap()
                .insert(user.email.clone(), (password.to_string(), user));
        }
    }

    #[async_trait]
    impl AuthGateway for MockAuthGateway {
        async fn login(&self, email: &str, password: &str) -> Result<User, ApplicationError> {
            let accounts = self.accounts.lock().unwrap();
            match accounts.get(email) {
                Some((stored, user)) if stored == password => Ok(user.clone()),
                _ => Err(ApplicationError::App(AppError::WrongAuthCredentials)),
            }
        }

        async fn register(&self, new_user: &NewUser) -> Result<User, ApplicationError> {
            let user = User {
                id: Uuid::new_v4().to_string(),
                full_name: new_user.full_name.clone(),
                email: new_user.email.clone(),
                mobile_number: new_user.mobile_number.clone(),
            };
            self.accounts.lock().unwrap().insert(
                new_user.email.clone(),
                (new_user.password.clone(), user.clone()),
            );
            Ok(user)
        }
    }

    /// Everything a flow test needs, with handles kept on the concrete
    /// mocks for seeding and assertions.
    pub struct MockHarness {
        pub store: MockReportStore,
        pub auth: MockAuthGateway,
        pub queue: MockPendingQueue,
        pub session: MockSessionStore,
        pub directory: MockUserDirectory,
        pub monitor: Arc<ConnectivityMonitor>,
        pub services: Arc<Services>,
    }

    impl MockHarness {
        pub fn new(initial: ConnectivityState) -> Self {
            let store = MockReportStore::new();
            let auth = MockAuthGateway::default();
            let queue = MockPendingQueue::default();
            let session = MockSessionStore::default();
            let directory = MockUserDirectory::default();
            let monitor = Arc::new(ConnectivityMonitor::new(initial));

            let services = Arc::new(Services {
                reports: Arc::new(store.clone()),
                auth: Arc::new(auth.clone()),
                queue: Arc::new(queue.clone()),
                session: Arc::new(session.clone()),
                directory: Arc::new(directory.clone()),
                connectivity: monitor.clone(),
            });

            Self {
                store,
                auth,
                queue,
                session,
                directory,
                monitor,
                services,
            }
        }

        /// Harness with an authenticated session already in place.
        pub fn logged_in(initial: ConnectivityState, user: User) -> Self {
            let harness = Self::new(initial);
            let session = MockSessionStore::with_user(user);
            let services = Arc::new(Services {
                reports: Arc::new(harness.store.clone()),
                auth: Arc::new(harness.auth.clone()),
                queue: Arc::new(harness.queue.clone()),
                session: Arc::new(session.clone()),
                directory: Arc::new(harness.directory.clone()),
                connectivity: harness.monitor.clone(),
            });

            Self {
                session,
                services,
                ..harness
            }
        }
    }
}
