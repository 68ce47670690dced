use log::info;

/// Receives waitlist sign-ups from the form.
pub trait SubmissionService {
    fn submit(&self, email: &str);
}

/// Stand-in until a sign-up backend exists: records the attempt and keeps the draft.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct PendingSubmission;

impl SubmissionService for PendingSubmission {
    fn submit(&self, email: &str) {
        info!("Waitlist submission for {} not sent: no submission service configured", email);
    }
}
