use civicedge_types::common::NewUser;
use civicedge_types::report::ReportDraft;

use crate::cqrs::Command;

/// Submit a civic-issue report. Delivered immediately when the client is
/// online, queued for background sync otherwise. Session user details are
/// stamped onto the draft before delivery.
pub struct SubmitReport {
    pub draft: ReportDraft,
}

impl Command for SubmitReport {}

/// Authenticate against the remote auth service and persist the session.
pub struct Login {
    pub email: String,
    pub password: String,
}

impl Command for Login {}

/// Create an account remotely and persist the fresh session.
pub struct RegisterUser {
    pub new_user: NewUser,
}

impl Command for RegisterUser {}

/// Drop the persisted session.
pub struct Logout;

impl Command for Logout {}

/// Remember that the user dismissed the install prompt, permanently.
pub struct DismissInstallPrompt;

impl Command for DismissInstallPrompt {}
